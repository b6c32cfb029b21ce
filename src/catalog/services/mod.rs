mod field_reader;
mod page_scanner;
mod payload_decoder;
mod record_builder;
mod validation;

pub use field_reader::FieldReader;
pub use page_scanner::{EmbeddedPayload, PageScanner};
pub use payload_decoder::{DecodedPayload, PayloadDecoder};
pub use record_builder::{CatalogAssembly, RecordBuilder};
pub use validation::ValidationWarning;
