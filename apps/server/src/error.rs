use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use stockviz_core::errors::Error as CoreError;
use stockviz_market_data::MarketDataError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    Core(#[from] CoreError),
}

#[derive(Serialize)]
struct ErrorBody {
    code: u16,
    message: String,
}

fn market_data_status(e: &MarketDataError) -> StatusCode {
    match e {
        MarketDataError::InvalidInput(_)
        | MarketDataError::InvalidRange { .. }
        | MarketDataError::SymbolNotFound(_) => StatusCode::BAD_REQUEST,
        MarketDataError::NoDataAvailable(_) => StatusCode::NOT_FOUND,
        MarketDataError::RateLimited { .. } => StatusCode::TOO_MANY_REQUESTS,
        MarketDataError::Transport { .. }
        | MarketDataError::UnexpectedResponse { .. }
        | MarketDataError::MalformedData(_)
        | MarketDataError::ProviderError { .. } => StatusCode::BAD_GATEWAY,
        MarketDataError::ConfigurationMissing { .. } => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::Core(CoreError::MarketData(e)) => market_data_status(e),
            ApiError::Core(CoreError::Render(_) | CoreError::Io(_)) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        if status.is_server_error() {
            tracing::error!("{}", self);
        } else {
            tracing::warn!("{}", self);
        }

        let body = Json(ErrorBody {
            code: status.as_u16(),
            message: self.to_string(),
        });
        (status, body).into_response()
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
