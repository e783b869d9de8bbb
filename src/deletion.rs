mod validate;
mod workflow;

pub use validate::*;
pub use workflow::*;
