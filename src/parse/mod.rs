pub mod event;
pub mod staging;
pub mod tokenize;

pub use event::{InterceptionEvent, decode};
pub use staging::{StagingInvocation, classify};
pub use tokenize::{basename, tokenize};
