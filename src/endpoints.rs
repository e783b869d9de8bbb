mod document;
mod remove;

pub use document::*;
pub use remove::*;
