/// Catalog layer: typed TeVCat records and the services that build them
/// from the published page
pub mod domain;
pub mod services;
