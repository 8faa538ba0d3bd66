use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::birth_list::errors::BirthListError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for BirthListError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name, message) = match &self {
            BirthListError::TitleEmpty => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "birth_list.title_empty",
            ),
            BirthListError::QuantityInvalid => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "birth_list.quantity_invalid",
            ),
            BirthListError::ContributorInvalid => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "birth_list.contributor_invalid",
            ),
            BirthListError::NotFound => {
                (StatusCode::NOT_FOUND, "NotFound", "birth_list.not_found")
            }
            BirthListError::ItemNotFound => (
                StatusCode::NOT_FOUND,
                "NotFound",
                "birth_list.item_not_found",
            ),
            BirthListError::ProductNotFound => (
                StatusCode::NOT_FOUND,
                "NotFound",
                "birth_list.product_not_found",
            ),
            BirthListError::AlreadyInState => (
                StatusCode::CONFLICT,
                "Conflict",
                "birth_list.already_in_state",
            ),
            BirthListError::TransitionNotAllowed => (
                StatusCode::CONFLICT,
                "Conflict",
                "birth_list.transition_not_allowed",
            ),
            BirthListError::Forbidden => {
                (StatusCode::FORBIDDEN, "Forbidden", "birth_list.forbidden")
            }
            BirthListError::Repository(_) => (
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
