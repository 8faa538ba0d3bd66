#[derive(Debug, thiserror::Error)]
pub enum CartError {
    #[error("cart.item_not_found")]
    ItemNotFound,
    #[error("cart.quantity_invalid")]
    QuantityInvalid,
    #[error("cart.price_invalid")]
    PriceInvalid,
    #[error("cart.gift_missing_list_info")]
    GiftMissingListInfo,
    #[error("cart.gift_already_pledged")]
    GiftAlreadyPledged,
    #[error("cart.gift_locked")]
    GiftLocked,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
