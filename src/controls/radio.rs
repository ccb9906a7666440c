//! Radio button control with group-scoped mutual exclusion
//!
//! Every select-one prompt mints one [`RadioGroup`] and threads it into each
//! of its radio buttons. The group, not the buttons, owns the selection, so
//! "at most one checked per group" holds structurally.

use super::{Control, ControlId, FocusFlag, Reaction};
use std::sync::{Arc, Mutex};
use tracing::trace;

/// Opaque selection group shared by the radio buttons of one prompt
///
/// Cloning hands out another handle to the same group. A fresh group is
/// created per prompt instance, so concurrent prompts never contaminate each
/// other's selection.
#[derive(Clone)]
pub struct RadioGroup {
    /// Identity of the currently selected member, if any
    selected: Arc<Mutex<Option<ControlId>>>,
}

impl RadioGroup {
    /// Create a new group with nothing selected
    pub fn new() -> Self {
        Self {
            selected: Arc::new(Mutex::new(None)),
        }
    }

    /// Identity of the currently selected member
    pub fn selected(&self) -> Option<ControlId> {
        *self.selected.lock().unwrap()
    }

    /// Make `id` the sole selection, returning the previous selection
    fn select(&self, id: ControlId) -> Option<ControlId> {
        self.selected.lock().unwrap().replace(id)
    }
}

impl Default for RadioGroup {
    fn default() -> Self {
        Self::new()
    }
}

/// A radio button belonging to a [`RadioGroup`]
///
/// Selecting one button implicitly clears its group siblings. The reaction
/// fires only when the button *becomes* selected: not for the constructor's
/// pre-check and not when the already-selected button is clicked again.
pub struct RadioButton {
    /// Control identity
    id: ControlId,

    /// Display label; doubles as the option value reported after submission
    label: String,

    /// Selection group this button belongs to
    group: RadioGroup,

    /// Selection reaction, invoked with the radio button itself
    reaction: Option<Reaction<RadioButton>>,

    /// Initial-focus request flag
    focus: FocusFlag,
}

impl RadioButton {
    /// Create a radio button in `group`
    ///
    /// Passing `checked` pre-selects the button as initial state, without
    /// firing the reaction.
    pub fn new(
        group: &RadioGroup,
        label: impl Into<String>,
        checked: bool,
        reaction: Option<Reaction<RadioButton>>,
    ) -> Self {
        let id = ControlId::next();
        if checked {
            group.select(id);
        }
        Self {
            id,
            label: label.into(),
            group: group.clone(),
            reaction,
            focus: FocusFlag::default(),
        }
    }

    /// Display label
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Whether this button is its group's current selection
    pub fn is_checked(&self) -> bool {
        self.group.selected() == Some(self.id)
    }

    /// Select this button, clearing any sibling selection
    pub fn select(&self) {
        let previous = self.group.select(self.id);
        if previous == Some(self.id) {
            return;
        }
        trace!("RadioButton {} ('{}') selected", self.id, self.label);
        if let Some(reaction) = &self.reaction {
            reaction(self);
        }
    }
}

impl Control for RadioButton {
    fn id(&self) -> ControlId {
        self.id
    }

    fn request_focus(&self) {
        self.focus.request();
    }

    fn focus_requested(&self) -> bool {
        self.focus.is_requested()
    }
}
