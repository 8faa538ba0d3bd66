use async_trait::async_trait;

use super::errors::InvoiceError;

/// PDF rendering engine boundary. The implementation delegates to an
/// external headless-browser service; only the conversion is modeled here.
#[async_trait]
pub trait InvoiceRenderer: Send + Sync {
    async fn render_html_to_pdf(&self, html: &str) -> Result<Vec<u8>, InvoiceError>;
}
