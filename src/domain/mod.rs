// Domain layer: book records, per-row outcomes, reports, and the ports the
// pipeline talks through.

pub mod model;
pub mod ports;
