use std::sync::Arc;

use async_trait::async_trait;
use chrono::{Datelike, Utc};

use crate::domain::errors::RepositoryError;
use crate::domain::invoice::archive::InvoiceArchive;
use crate::domain::invoice::errors::InvoiceError;
use crate::domain::invoice::model::Invoice;
use crate::domain::invoice::renderer::InvoiceRenderer;
use crate::domain::invoice::repository::InvoiceRepository;
use crate::domain::invoice::services::{invoice_number, receipt_html};
use crate::domain::invoice::use_cases::get_pdf::{
    GetInvoicePdfParams, GetInvoicePdfUseCase, InvoicePdf,
};
use crate::domain::logger::Logger;
use crate::domain::order::repository::OrderRepository;

pub struct GetInvoicePdfUseCaseImpl {
    pub invoice_repository: Arc<dyn InvoiceRepository>,
    pub order_repository: Arc<dyn OrderRepository>,
    pub renderer: Arc<dyn InvoiceRenderer>,
    pub archive: Arc<dyn InvoiceArchive>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetInvoicePdfUseCase for GetInvoicePdfUseCaseImpl {
    async fn execute(&self, params: GetInvoicePdfParams) -> Result<InvoicePdf, InvoiceError> {
        let mut order = self
            .order_repository
            .get_by_id(params.order_id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => InvoiceError::OrderNotFound,
                other => InvoiceError::Repository(other),
            })?;

        if !params.actor.can_manage(&order.user_id) {
            return Err(InvoiceError::Forbidden);
        }

        // Second and later requests stream the archived file untouched.
        if let Some(existing) = self
            .invoice_repository
            .find_by_order_id(params.order_id)
            .await?
        {
            let bytes = self.archive.load(&existing.pdf_path).await?;
            return Ok(InvoicePdf {
                invoice: existing,
                bytes,
            });
        }

        self.logger.info(&format!(
            "Generating invoice for order {}",
            params.order_id
        ));

        let year = Utc::now().year();
        let sequence = self.invoice_repository.max_sequence(year).await?.unwrap_or(0) + 1;
        let number = invoice_number(year, sequence);

        let html = receipt_html(&order, &number);
        let bytes = self.renderer.render_html_to_pdf(&html).await?;
        let pdf_path = self.archive.store(&number, &bytes).await?;

        let invoice = Invoice::new(params.order_id, number, pdf_path.clone());
        match self.invoice_repository.save(&invoice).await {
            Ok(()) => {}
            // A concurrent request won the insert; the unique index on the
            // order id turns double-invoicing into this conflict.
            Err(RepositoryError::Duplicated) => {
                if let Err(e) = self.archive.remove(&pdf_path).await {
                    self.logger
                        .warn(&format!("Could not discard orphan invoice file: {e}"));
                }
                return Err(InvoiceError::AlreadyGenerated);
            }
            Err(other) => return Err(InvoiceError::Repository(other)),
        }

        order.link_invoice(invoice.id);
        self.order_repository.save(&order).await?;

        Ok(InvoicePdf { invoice, bytes })
    }
}
