#[derive(Debug, thiserror::Error)]
pub enum InvoiceError {
    #[error("invoice.not_found")]
    NotFound,
    #[error("invoice.order_not_found")]
    OrderNotFound,
    #[error("invoice.forbidden")]
    Forbidden,
    #[error("invoice.already_generated")]
    AlreadyGenerated,
    #[error("invoice.render_failed")]
    RenderFailed,
    #[error("invoice.archive_failed")]
    ArchiveFailed,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
