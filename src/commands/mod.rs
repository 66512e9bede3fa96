mod compose;
mod plan;

pub use compose::*;
pub use plan::*;
