// Domain layer: workout records, summaries and the training capability.

pub mod model;
pub mod ports;
