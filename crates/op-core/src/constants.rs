//! Physical constants shared by the property layer.

/// Molar gas constant [J/(mol·K)].
pub const GAS_CONSTANT: f64 = 8.314_472;
