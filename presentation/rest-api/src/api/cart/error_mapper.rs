use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::cart::errors::CartError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for CartError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name, message) = match &self {
            CartError::ItemNotFound => (StatusCode::NOT_FOUND, "NotFound", "cart.item_not_found"),
            CartError::QuantityInvalid => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "cart.quantity_invalid",
            ),
            CartError::PriceInvalid => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "cart.price_invalid",
            ),
            CartError::GiftMissingListInfo => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "cart.gift_missing_list_info",
            ),
            CartError::GiftAlreadyPledged => (
                StatusCode::CONFLICT,
                "Conflict",
                "cart.gift_already_pledged",
            ),
            CartError::GiftLocked => (StatusCode::CONFLICT, "Conflict", "cart.gift_locked"),
            CartError::Repository(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "InternalError",
                "repository.persistence",
            ),
        };

        (
            status,
            Json(ErrorResponse {
                name: name.to_string(),
                message: message.to_string(),
            }),
        )
    }
}
