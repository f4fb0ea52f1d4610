// Domain layer: value types and ports. No runtime dependencies beyond std.

pub mod model;
pub mod ports;
