//! Core library for recycling-yard back-office paperwork.
//!
//! This crate provides:
//! - Fuzzy material-price extraction from price-sheet PDF text
//! - Delivery-contract CSV normalization with business-rule enrichment
//! - The static material/grade/coordinate lookup tables
//! - A thin PDF text source for price-sheet input
//!
//! All transformations are pure and synchronous; the surrounding system
//! (spreadsheet updates, templated PDF generation, email) consumes the
//! structured records produced here.

pub mod catalog;
pub mod delivery;
pub mod error;
pub mod pdf;
pub mod pricing;
pub mod similarity;

pub use catalog::{MaterialCatalog, MaterialEntry};
pub use delivery::{
    parse_delivery_csv, transform_rows, DeliveryBatch, DeliveryRow, FobStatus, StampCoordinate,
};
pub use error::{PdfError, Result, SchemaError, ScrapdeskError};
pub use pdf::PdfTextSource;
pub use pricing::{PriceEntry, PriceSheetParser};
pub use similarity::{edit_distance, similarity, CatalogMatcher};
