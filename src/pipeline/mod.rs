pub mod dataset;
pub mod definition;

pub use dataset::*;
pub use definition::*;
