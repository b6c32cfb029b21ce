/// Network adapters for retrieving the TeVCat page
mod tevcat_client;

pub use tevcat_client::{HttpPageFetcher, DEFAULT_TEVCAT_URL, DEFAULT_TIMEOUT_SECS};
