// Domain layer: user records, extraction results and the ports the core depends on.

pub mod model;
pub mod ports;
