/// Configuration for the PDF rendering service and the invoice archive.
pub struct RendererConfig {
    pub base_url: String,
    pub invoice_dir: String,
}

impl RendererConfig {
    pub fn from_env() -> Self {
        Self {
            base_url: std::env::var("RENDERER_URL")
                .unwrap_or_else(|_| "http://localhost:3000".to_string()),
            invoice_dir: std::env::var("INVOICE_DIR")
                .unwrap_or_else(|_| "./invoices".to_string()),
        }
    }
}
