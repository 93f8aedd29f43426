// Domain layer: the greeting model. No I/O here.

pub mod model;
