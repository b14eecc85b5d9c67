pub use categories::Category;
pub use error::EngineError;
pub use ops::{Engine, EngineBuilder};
pub use partners::Partner;
pub use promotions::{GeoPoint, Promotion, PromotionQuery};

mod banners;
mod categories;
mod error;
mod ops;
mod partners;
mod promotions;
mod queries;

type ResultEngine<T> = Result<T, EngineError>;
