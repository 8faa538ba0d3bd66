use poem_openapi::Tags;

#[derive(Tags)]
pub enum ApiTags {
    /// Health check endpoints
    Health,
    /// Product catalog management
    Products,
    /// Birth list management and gift flows
    BirthLists,
    /// Shopping cart operations
    Cart,
    /// Order management
    Orders,
    /// Invoice generation and retrieval
    Invoices,
}
