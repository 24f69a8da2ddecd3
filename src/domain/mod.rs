// Domain layer: wire-shaped models and the read ports the composer depends on.

pub mod model;
pub mod ports;
