pub mod archive;
pub mod client;
pub mod pdf_renderer;
