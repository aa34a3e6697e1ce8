//! op-core: stable foundation for openprop.
//!
//! Contains:
//! - numeric (Real + domain sentinels + float checks)
//! - constants (physical constants shared by the property layer)
//! - units (uom SI types + constructors)
//! - error (shared error types)

pub mod constants;
pub mod error;
pub mod numeric;
pub mod units;

// Re-exports: nice ergonomics for downstream crates
pub use error::OpError;
pub use numeric::*;
pub use units::*;
