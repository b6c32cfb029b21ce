/// Use cases module containing application business logic orchestration
mod load_catalog;
mod query_catalog;

pub use load_catalog::LoadCatalogUseCase;
pub use query_catalog::QueryCatalogUseCase;
