use async_trait::async_trait;
use reqwest::multipart::{Form, Part};

use business::domain::invoice::errors::InvoiceError;
use business::domain::invoice::renderer::InvoiceRenderer;

use crate::client::GotenbergClient;

/// Converts receipt HTML to PDF through Gotenberg's Chromium route. The
/// document must be sent as a multipart file named `index.html`.
pub struct InvoiceRendererGotenberg {
    client: GotenbergClient,
}

impl InvoiceRendererGotenberg {
    pub fn new(client: GotenbergClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl InvoiceRenderer for InvoiceRendererGotenberg {
    async fn render_html_to_pdf(&self, html: &str) -> Result<Vec<u8>, InvoiceError> {
        let part = Part::text(html.to_string())
            .file_name("index.html")
            .mime_str("text/html")
            .map_err(|_| InvoiceError::RenderFailed)?;
        let form = Form::new().part("files", part);

        let response = self
            .client
            .client
            .post(self.client.convert_html_url())
            .multipart(form)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("PDF conversion request failed: {e}");
                InvoiceError::RenderFailed
            })?;

        if !response.status().is_success() {
            tracing::error!("PDF conversion returned status {}", response.status());
            return Err(InvoiceError::RenderFailed);
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|_| InvoiceError::RenderFailed)?;
        Ok(bytes.to_vec())
    }
}
