/// Data Transfer Objects for application layer
///
/// DTOs are used to transfer data between the application layer
/// and adapters, keeping the domain layer isolated.
mod load_response;
mod output_format;
mod query_request;

pub use load_response::LoadResponse;
pub use output_format::OutputFormat;
pub use query_request::{QueryRequest, SelectionRequest};
