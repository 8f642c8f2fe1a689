mod format;
mod mock;
mod source;

pub mod domain;

pub use format::*;
pub use mock::*;
pub use source::*;
