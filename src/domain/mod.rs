// Domain layer: core models, ports and sample data. No I/O.

pub mod model;
pub mod ports;
pub mod samples;
