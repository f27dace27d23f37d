// Domain layer: models and ports. No HTTP or server code in here.

pub mod model;
pub mod ports;
