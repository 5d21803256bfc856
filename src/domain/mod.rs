// Domain layer: wire models and the port the touch flow talks through.

pub mod model;
pub mod ports;
