#[derive(Debug, thiserror::Error)]
pub enum BirthListError {
    #[error("birth_list.title_empty")]
    TitleEmpty,
    #[error("birth_list.not_found")]
    NotFound,
    #[error("birth_list.item_not_found")]
    ItemNotFound,
    #[error("birth_list.product_not_found")]
    ProductNotFound,
    #[error("birth_list.quantity_invalid")]
    QuantityInvalid,
    #[error("birth_list.contributor_invalid")]
    ContributorInvalid,
    #[error("birth_list.already_in_state")]
    AlreadyInState,
    #[error("birth_list.transition_not_allowed")]
    TransitionNotAllowed,
    #[error("birth_list.forbidden")]
    Forbidden,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
