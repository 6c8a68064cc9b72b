//! Error types for the suggestion pipeline.
//!
//! Each stage owns one enum; [`SuggestError`] is the union the pipeline
//! hands back to callers.

mod completion;
mod parse;
mod suggest;
mod upstream;
mod validation;

pub use completion::*;
pub use parse::*;
pub use suggest::*;
pub use upstream::*;
pub use validation::*;
