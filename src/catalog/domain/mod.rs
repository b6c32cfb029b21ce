/// Domain model of the TeVCat catalog
pub mod catalog;
pub mod coordinates;
pub mod discovery_date;
pub mod distance;
pub mod reference_tables;
pub mod source;
pub mod tevcat;

pub use catalog::{Catalog, CatalogIndex};
pub use coordinates::{EquatorialFrame, EquatorialPosition, GalacticPosition};
pub use discovery_date::DiscoveryDate;
pub use distance::{Distance, DistanceUnit};
pub use reference_tables::ReferenceTables;
pub use source::{Source, SourceAttributes};
pub use tevcat::TevCat;
