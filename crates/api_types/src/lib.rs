//! JSON bodies returned by the HTTP API.
//!
//! Field names are part of the public contract; clients read them as is.

use serde::{Deserialize, Serialize};

pub mod category {
    use super::*;

    #[derive(Debug, Serialize, Deserialize)]
    pub struct CategoryView {
        pub id: i32,
        pub name: String,
        /// Banner url, empty when the category has none.
        pub url: String,
    }
}

pub mod partner {
    use super::*;

    #[derive(Debug, Serialize, Deserialize)]
    pub struct PartnerView {
        pub id: i32,
        pub headline: String,
        pub description: String,
        pub latitude: f64,
        pub longitude: f64,
        pub price_level: Option<i16>,
        /// Empty when the partner has no banner.
        pub headline_banner_url: String,
    }
}

pub mod promotion {
    use super::*;

    #[derive(Debug, Serialize, Deserialize)]
    pub struct PromotionView {
        pub id: i32,
        pub title: String,
        pub description: String,
        /// Empty when the promotion has no banner.
        pub headline_banner_url: String,
    }
}
