//! UI controller owning all mutable display state.
//!
//! A single `UiController` owns the active tab, per-panel result regions, and
//! the chat log, instead of leaving them as ambient page state. Panels are
//! independent display regions with their own loading/error flags, responses
//! are correlated by request id so stale answers are dropped, and the chat
//! transcript is append-only and never read back for logic.

use crate::error::{RenvelopeError, Result};
use crate::fetch::protocol::{FetchCommand, FetchResponse, PanelRequest, RequestId};
use crate::render::{render, render_error};
use std::collections::HashMap;

/// One panel's display region.
///
/// Holds at most one fragment; applying an update replaces the previous one
/// after clearing any loading/error state, so fragments never accumulate.
#[derive(Debug, Default)]
pub struct DisplayRegion {
    fragment: Option<String>,
    loading: bool,
    error: bool,
}

impl DisplayRegion {
    /// Currently displayed fragment, if any.
    pub fn fragment(&self) -> Option<&str> {
        self.fragment.as_deref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn is_error(&self) -> bool {
        self.error
    }

    fn apply(&mut self, fragment: String, is_error: bool) {
        // Clear visual state from the previous request before injecting.
        self.loading = false;
        self.error = false;
        self.fragment = Some(fragment);
        self.error = is_error;
    }
}

/// Speaker of a chat transcript entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatRole {
    User,
    Assistant,
}

/// One prior chat exchange line, display-only.
#[derive(Debug, Clone, PartialEq)]
pub struct ChatTurn {
    pub role: ChatRole,
    pub text: String,
}

/// Coordinates panels, in-flight requests, and the chat transcript.
pub struct UiController {
    active_panel: String,
    regions: HashMap<String, DisplayRegion>,
    latest_requests: HashMap<String, RequestId>,
    next_request_id: RequestId,
    chat_log: Vec<ChatTurn>,
}

impl UiController {
    /// Create a controller over a fixed set of panels; the first becomes active.
    pub fn new<I, S>(panels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut regions = HashMap::new();
        let mut active_panel = String::new();
        for panel in panels {
            let panel = panel.into();
            if active_panel.is_empty() {
                active_panel = panel.clone();
            }
            regions.insert(panel, DisplayRegion::default());
        }
        Self {
            active_panel,
            regions,
            latest_requests: HashMap::new(),
            next_request_id: 0,
            chat_log: Vec::new(),
        }
    }

    /// The currently selected tab.
    pub fn active_panel(&self) -> &str {
        &self.active_panel
    }

    /// Switch tabs. Panels keep their regions; nothing is cleared on switch.
    pub fn activate_panel(&mut self, panel: &str) -> Result<()> {
        if !self.regions.contains_key(panel) {
            return Err(RenvelopeError::unknown_panel(panel));
        }
        self.active_panel = panel.to_string();
        Ok(())
    }

    /// Display region for a panel.
    pub fn region(&self, panel: &str) -> Result<&DisplayRegion> {
        self.regions
            .get(panel)
            .ok_or_else(|| RenvelopeError::unknown_panel(panel))
    }

    /// Start a fetch for a panel: marks the region loading, supersedes any
    /// in-flight request for that panel, and returns the worker command.
    pub fn begin_fetch(&mut self, panel: &str, request: PanelRequest) -> Result<FetchCommand> {
        let region = self
            .regions
            .get_mut(panel)
            .ok_or_else(|| RenvelopeError::unknown_panel(panel))?;
        region.loading = true;

        let request_id = self.next_request_id;
        self.next_request_id += 1;
        self.latest_requests.insert(panel.to_string(), request_id);

        Ok(FetchCommand::Fetch {
            request_id,
            panel: panel.to_string(),
            request,
        })
    }

    /// The single dispatch point for completed fetches.
    ///
    /// Success outcomes take the envelope formatter, failures take the
    /// fixed-format error fragment. Stale responses (superseded request ids)
    /// are dropped without touching the region. Returns whether the response
    /// was applied.
    pub fn handle_response(&mut self, response: FetchResponse) -> Result<bool> {
        let FetchResponse::Completed {
            request_id,
            panel,
            outcome,
        } = response;

        if self.latest_requests.get(&panel) != Some(&request_id) {
            return Ok(false);
        }
        self.latest_requests.remove(&panel);

        let region = self
            .regions
            .get_mut(&panel)
            .ok_or_else(|| RenvelopeError::unknown_panel(&panel))?;

        match outcome {
            Ok(envelope) => region.apply(render(&envelope), false),
            Err(error) => region.apply(render_error(&error.to_string()), true),
        }
        Ok(true)
    }

    /// Append one exchange to the chat transcript.
    pub fn push_chat_turn(&mut self, role: ChatRole, text: impl Into<String>) {
        self.chat_log.push(ChatTurn {
            role,
            text: text.into(),
        });
    }

    /// Read-only view of prior chat turns, in order.
    pub fn transcript(&self) -> &[ChatTurn] {
        &self.chat_log
    }
}
