use reqwest::Client;

/// Shared HTTP client configuration for the Gotenberg conversion service.
pub struct GotenbergClient {
    pub client: Client,
    pub base_url: String,
}

impl GotenbergClient {
    pub fn new(base_url: String) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .unwrap_or_default();

        Self { client, base_url }
    }

    /// Returns the Chromium HTML-to-PDF conversion endpoint URL.
    pub fn convert_html_url(&self) -> String {
        format!(
            "{}/forms/chromium/convert/html",
            self.base_url.trim_end_matches('/')
        )
    }
}
