// Domain layer: the image reference, the built helper command and the dispatch port.

pub mod model;
pub mod ports;
