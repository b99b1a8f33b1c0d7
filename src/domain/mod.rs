// Domain layer: value types and ports. No dependencies beyond serde/chrono.

pub mod model;
pub mod ports;
