// Domain layer: the name model and the holder port. No I/O.

pub mod model;
pub mod ports;
