use axum::{http::StatusCode, response::IntoResponse};
use engine::EngineError;

pub use server::{app, run_with_listener};

mod categories;
mod health;
mod image;
mod params;
mod partners;
mod promotions;
mod server;

pub mod types {
    pub use api_types::category::CategoryView;
    pub use api_types::partner::PartnerView;
    pub use api_types::promotion::PromotionView;
}

/// Failure of a request. Every variant is answered with a 500 and the error
/// text as a plain body; there is no client error class.
#[derive(Debug)]
pub enum ServerError {
    Engine(EngineError),
}

impl IntoResponse for ServerError {
    fn into_response(self) -> axum::response::Response {
        let message = match self {
            ServerError::Engine(err) => {
                tracing::error!("request failed: {err}");
                err.to_string()
            }
        };

        (StatusCode::INTERNAL_SERVER_ERROR, message).into_response()
    }
}

impl From<EngineError> for ServerError {
    fn from(value: EngineError) -> Self {
        Self::Engine(value)
    }
}

#[cfg(test)]
mod tests {
    use axum::http::header;

    use super::*;

    #[test]
    fn engine_errors_map_to_500() {
        let res =
            ServerError::from(EngineError::ImageNotFound("x".to_string())).into_response();
        assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn error_body_is_plain_text() {
        let res =
            ServerError::from(EngineError::ImageNotFound("x".to_string())).into_response();
        let content_type = res.headers().get(header::CONTENT_TYPE).unwrap();
        assert!(content_type.to_str().unwrap().starts_with("text/plain"));
    }
}
