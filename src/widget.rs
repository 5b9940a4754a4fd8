//! Presentation state of the widget and the patches that change it.
//!
//! The page script applies the same [`Patch`] values the server returns, so
//! [`Widget`] is the reference model of what the page shows.

use serde::Serialize;

use crate::validator::Validation;

/// Search action state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Validating,
    Fetching,
    Rendered,
    NotFoundDisplayed,
    ErrorLogged,
}

impl Phase {
    pub fn is_terminal(self) -> bool {
        matches!(
            self,
            Phase::Rendered | Phase::NotFoundDisplayed | Phase::ErrorLogged
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContainerPatch {
    pub html: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
}

/// A set of writes to the page. `None` leaves that part untouched.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Patch {
    /// The input a validation patch was computed for. Once the input has
    /// moved on, the patch is stale and dropped.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub container: Option<ContainerPatch>,
}

impl Patch {
    pub fn validation(username: &str, validation: &Validation) -> Self {
        Self {
            username: Some(username.to_string()),
            error_message: Some(validation.error_message.to_string()),
            search_enabled: Some(validation.search_enabled),
            ..Default::default()
        }
    }

    /// Replaces the container content and shows it.
    pub fn show(html: String) -> Self {
        Self {
            container: Some(ContainerPatch {
                html,
                active: Some(true),
            }),
            ..Default::default()
        }
    }

    /// Replaces the container content, leaving its visibility as it was.
    pub fn replace(html: String) -> Self {
        Self {
            container: Some(ContainerPatch { html, active: None }),
            ..Default::default()
        }
    }

    /// Clears the input and its error, as picking a random user does.
    pub fn reset_input(mut self) -> Self {
        self.error_message = Some(String::new());
        self.input = Some(String::new());
        self
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    pub fn is_stale_for(&self, input: &str) -> bool {
        self.username.as_deref().is_some_and(|username| username != input)
    }
}

/// The outcome of one action: where the state machine ended and what to
/// write to the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub phase: Phase,
    pub patch: Patch,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Container {
    pub html: String,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Widget {
    pub input: String,
    pub error_message: String,
    pub search_enabled: bool,
    pub container: Container,
    pub phase: Phase,
}

impl Default for Widget {
    fn default() -> Self {
        Self {
            input: String::new(),
            error_message: String::new(),
            search_enabled: false,
            container: Container::default(),
            phase: Phase::Idle,
        }
    }
}

impl Widget {
    pub fn apply(&mut self, patch: &Patch) {
        if patch.is_stale_for(&self.input) {
            return;
        }
        if let Some(error_message) = &patch.error_message {
            self.error_message.clone_from(error_message);
        }
        if let Some(search_enabled) = patch.search_enabled {
            self.search_enabled = search_enabled;
        }
        if let Some(input) = &patch.input {
            self.input.clone_from(input);
        }
        if let Some(container) = &patch.container {
            self.container.html.clone_from(&container.html);
            if let Some(active) = container.active {
                self.container.active = active;
            }
        }
    }

    pub fn complete(&mut self, transition: &Transition) {
        self.apply(&transition.patch);
        self.phase = transition.phase;
    }

    /// Leaves a finished action so the next one starts from `Idle`.
    pub fn begin_action(&mut self) {
        if self.phase.is_terminal() {
            self.phase = Phase::Idle;
        }
    }
}
