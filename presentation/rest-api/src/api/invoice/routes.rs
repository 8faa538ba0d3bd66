use std::sync::Arc;

use poem_openapi::payload::{Attachment, AttachmentType, Json};
use poem_openapi::{OpenApi, param::Path};
use uuid::Uuid;

use business::domain::invoice::use_cases::delete::{DeleteInvoiceParams, DeleteInvoiceUseCase};
use business::domain::invoice::use_cases::get_pdf::{GetInvoicePdfParams, GetInvoicePdfUseCase};

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::security::ApiBearer;
use crate::api::tags::ApiTags;

pub struct InvoiceApi {
    get_pdf_use_case: Arc<dyn GetInvoicePdfUseCase>,
    delete_use_case: Arc<dyn DeleteInvoiceUseCase>,
}

impl InvoiceApi {
    pub fn new(
        get_pdf_use_case: Arc<dyn GetInvoicePdfUseCase>,
        delete_use_case: Arc<dyn DeleteInvoiceUseCase>,
    ) -> Self {
        Self {
            get_pdf_use_case,
            delete_use_case,
        }
    }
}

fn admin_required() -> Json<ErrorResponse> {
    Json(ErrorResponse {
        name: "Forbidden".to_string(),
        message: "auth.admin_required".to_string(),
    })
}

fn invalid_id(message: &str) -> Json<ErrorResponse> {
    Json(ErrorResponse {
        name: "ValidationError".to_string(),
        message: message.to_string(),
    })
}

/// Invoice API
///
/// The PDF is generated lazily on the first request for an order and served
/// from the archive afterwards.
#[OpenApi]
impl InvoiceApi {
    /// Download the invoice PDF for an order
    ///
    /// Generates the invoice on first request. Customers may only download
    /// invoices for their own orders.
    #[oai(
        path = "/orders/:id/invoice",
        method = "get",
        tag = "ApiTags::Invoices"
    )]
    async fn get_invoice_pdf(&self, auth: ApiBearer, id: Path<String>) -> GetInvoicePdfResponse {
        let order_id = match Uuid::parse_str(&id.0) {
            Ok(uuid) => uuid,
            Err(_) => return GetInvoicePdfResponse::BadRequest(invalid_id("order.invalid_id")),
        };

        match self
            .get_pdf_use_case
            .execute(GetInvoicePdfParams {
                order_id,
                actor: auth.0.actor(),
            })
            .await
        {
            Ok(pdf) => {
                let attachment = Attachment::new(pdf.bytes)
                    .attachment_type(AttachmentType::Attachment)
                    .filename(format!("{}.pdf", pdf.invoice.number));
                GetInvoicePdfResponse::Ok(attachment)
            }
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    403 => GetInvoicePdfResponse::Forbidden(json),
                    404 => GetInvoicePdfResponse::NotFound(json),
                    409 => GetInvoicePdfResponse::Conflict(json),
                    _ => GetInvoicePdfResponse::InternalError(json),
                }
            }
        }
    }

    /// Delete an invoice
    ///
    /// Removes the record and the archived file and unlinks the order so the
    /// next download regenerates it. Admin only.
    #[oai(path = "/invoices/:id", method = "delete", tag = "ApiTags::Invoices")]
    async fn delete_invoice(&self, auth: ApiBearer, id: Path<String>) -> DeleteInvoiceResponse {
        if !auth.0.role.is_admin() {
            return DeleteInvoiceResponse::Forbidden(admin_required());
        }

        let uuid = match Uuid::parse_str(&id.0) {
            Ok(uuid) => uuid,
            Err(_) => return DeleteInvoiceResponse::BadRequest(invalid_id("invoice.invalid_id")),
        };

        match self
            .delete_use_case
            .execute(DeleteInvoiceParams { id: uuid })
            .await
        {
            Ok(()) => DeleteInvoiceResponse::NoContent,
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => DeleteInvoiceResponse::NotFound(json),
                    _ => DeleteInvoiceResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetInvoicePdfResponse {
    /// The invoice PDF
    #[oai(status = 200)]
    Ok(Attachment<Vec<u8>>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 403)]
    Forbidden(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 409)]
    Conflict(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum DeleteInvoiceResponse {
    #[oai(status = 204)]
    NoContent,
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 403)]
    Forbidden(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
