// Domain layer: record model, query context and the ports collaborators implement.

pub mod model;
pub mod ports;
