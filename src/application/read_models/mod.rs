//! Read models for CQRS-lite pattern
//!
//! This module contains view-optimized structs that provide
//! a denormalized representation of catalog data for output.

pub mod catalog_read_model;
pub mod catalog_read_model_builder;
pub mod source_view;

pub use catalog_read_model::{
    CatalogReadModel, CatalogView, NearestView, QueryMetadataView, QueryResult,
};
pub use catalog_read_model_builder::CatalogReadModelBuilder;
pub use source_view::SourceView;
