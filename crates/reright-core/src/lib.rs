//! # Reright Core
//!
//! The suggestion-request pipeline:
//!
//! ```text
//! text ─▶ validator ─▶ prompt builder ─▶ CompletionBackend ─▶ parser ─▶ SuggestionList
//! ```
//!
//! Every stage fails fast with a single error. The only recovery is the
//! on-device prompting-to-rewriting fallback, which lives in the backend.
//!
//! Around the pipeline sit the [`PendingTextSlot`] hand-off and the
//! [`MessageBroker`], which plays the extension background role.

pub mod broker;
pub mod handoff;
pub mod parser;
pub mod pipeline;
pub mod prompt;
pub mod validator;

pub use broker::{CONTEXT_MENU_ID, ContextMenuOutcome, MessageBroker};
pub use handoff::PendingTextSlot;
pub use parser::{parse_list, parse_suggestions};
pub use pipeline::SuggestionPipeline;
pub use prompt::{PromptBuilder, PromptTemplate};
pub use validator::{count_words, validate};
