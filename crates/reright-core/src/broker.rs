//! Background message broker.
//!
//! Routes extension messages to the pipeline and answers either inline
//! (request/response messages) or by broadcasting back to the sending tab.
//! In-flight requests are not cancelled; a slow earlier request can deliver
//! after a faster later one for the same tab.

use std::fmt::Display;
use std::sync::Arc;

use tracing::{debug, error, info};

use reright_protocols::{ExtensionMessage, SuggestError, SuggestionResponse, TabId, TabSink};

use crate::handoff::PendingTextSlot;
use crate::pipeline::SuggestionPipeline;
use crate::validator::validate;

/// Context menu entry handled by the broker.
pub const CONTEXT_MENU_ID: &str = "reright";

const GENERIC_FAILURE: &str = "Failed to get suggestions";

/// What the caller should do after a context menu click.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContextMenuOutcome {
    /// Text was stored for the popup; open it.
    OpenPopup,
    Ignored,
}

pub struct MessageBroker {
    pipeline: Arc<SuggestionPipeline>,
    tabs: Arc<dyn TabSink>,
    handoff: Arc<PendingTextSlot>,
}

impl MessageBroker {
    pub fn new(
        pipeline: Arc<SuggestionPipeline>,
        tabs: Arc<dyn TabSink>,
        handoff: Arc<PendingTextSlot>,
    ) -> Self {
        Self {
            pipeline,
            tabs,
            handoff,
        }
    }

    /// Handle one incoming message.
    ///
    /// Returns the inline reply for request/response messages, `None` for
    /// messages answered by broadcast or not addressed to the broker.
    pub async fn handle(
        &self,
        message: ExtensionMessage,
        sender: Option<TabId>,
    ) -> Option<SuggestionResponse> {
        match message {
            ExtensionMessage::TriggerReright { text } => {
                match sender {
                    Some(tab) if !text.trim().is_empty() => self.trigger(tab, &text).await,
                    Some(_) => debug!("Ignoring trigger without text"),
                    None => debug!("Ignoring trigger without a sender tab"),
                }
                None
            }
            ExtensionMessage::GetSuggestions { text }
            | ExtensionMessage::GetSuggestionsViaOffscreen { text } => {
                let result = self.pipeline.suggest(&text).await;
                Some(match result {
                    Ok(list) => SuggestionResponse::ok(list),
                    Err(e) => SuggestionResponse::failed(user_message(&e)),
                })
            }
            ExtensionMessage::ShowLoading
            | ExtensionMessage::ShowError { .. }
            | ExtensionMessage::ShowSuggestions { .. } => {
                debug!("Ignoring tab-bound message");
                None
            }
        }
    }

    /// Run the pipeline for a floating-icon click and broadcast the outcome.
    async fn trigger(&self, tab: TabId, text: &str) {
        // Over-limit selections are rejected before the loading state is shown.
        if let Err(e) = validate(text, self.pipeline.word_limit()) {
            self.tabs
                .send(tab, ExtensionMessage::ShowError { message: e.to_string() })
                .await;
            return;
        }

        self.tabs.send(tab, ExtensionMessage::ShowLoading).await;

        let message = match self.pipeline.suggest(text).await {
            Ok(list) => ExtensionMessage::ShowSuggestions {
                suggestions: list.into_vec(),
                original_text: text.to_string(),
            },
            Err(e) => ExtensionMessage::ShowError {
                message: user_message(&e),
            },
        };
        self.tabs.send(tab, message).await;
    }

    /// Store the selection for the popup when our menu entry was clicked.
    pub fn context_menu_clicked(
        &self,
        menu_id: &str,
        selection: Option<&str>,
    ) -> ContextMenuOutcome {
        if menu_id != CONTEXT_MENU_ID {
            return ContextMenuOutcome::Ignored;
        }

        let Some(text) = selection.map(str::trim).filter(|s| !s.is_empty()) else {
            return ContextMenuOutcome::Ignored;
        };

        if self.handoff.set(text).is_some() {
            debug!("Replaced an unread pending selection");
        }
        info!(words = crate::validator::count_words(text), "Selection stored for popup");
        ContextMenuOutcome::OpenPopup
    }

    /// Consume the pending selection, if any.
    pub fn popup_opened(&self) -> Option<String> {
        self.handoff.take()
    }

    /// Copying a suggestion to the clipboard failed. Logged only.
    pub fn report_copy_failure(&self, err: &dyn Display) {
        error!("Failed to copy: {}", err);
    }
}

fn user_message(err: &SuggestError) -> String {
    let message = err.to_string();
    if message.trim().is_empty() {
        GENERIC_FAILURE.to_string()
    } else {
        message
    }
}

#[cfg(test)]
#[path = "broker_tests.rs"]
mod tests;
