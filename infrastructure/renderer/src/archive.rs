use std::path::PathBuf;

use async_trait::async_trait;
use tokio::fs;

use business::domain::invoice::archive::InvoiceArchive;
use business::domain::invoice::errors::InvoiceError;

/// Filesystem archive for rendered invoices. Files are named after the
/// invoice number, which is unique per record.
pub struct InvoiceArchiveFs {
    directory: PathBuf,
}

impl InvoiceArchiveFs {
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
        }
    }
}

#[async_trait]
impl InvoiceArchive for InvoiceArchiveFs {
    async fn store(&self, number: &str, bytes: &[u8]) -> Result<String, InvoiceError> {
        fs::create_dir_all(&self.directory).await.map_err(|e| {
            tracing::error!("Creating invoice directory failed: {e}");
            InvoiceError::ArchiveFailed
        })?;

        let path = self.directory.join(format!("{number}.pdf"));
        fs::write(&path, bytes).await.map_err(|e| {
            tracing::error!("Writing invoice file failed: {e}");
            InvoiceError::ArchiveFailed
        })?;

        Ok(path.to_string_lossy().into_owned())
    }

    async fn load(&self, path: &str) -> Result<Vec<u8>, InvoiceError> {
        fs::read(path).await.map_err(|e| {
            tracing::error!("Reading invoice file {path} failed: {e}");
            InvoiceError::ArchiveFailed
        })
    }

    async fn remove(&self, path: &str) -> Result<(), InvoiceError> {
        fs::remove_file(path).await.map_err(|e| {
            tracing::error!("Removing invoice file {path} failed: {e}");
            InvoiceError::ArchiveFailed
        })
    }
}
