mod compose;
mod plan;
mod session;

pub use compose::*;
pub use plan::*;
