use sea_orm::FromQueryResult;

/// Raw payload of a headline banner.
#[derive(Debug, FromQueryResult)]
pub(crate) struct BannerImage {
    pub(crate) image: Vec<u8>,
}
