// Domain layer: command and repository value types plus the ports the gateway depends on.

pub mod model;
pub mod ports;
