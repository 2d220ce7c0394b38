// Domain layer: plain data models and ports. No behaviour beyond std/serde.

pub mod model;
pub mod ports;
