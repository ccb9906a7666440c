//! Check box control with an independent checked flag

use super::{Control, ControlId, FocusFlag, Reaction};
use std::sync::atomic::{AtomicBool, Ordering};
use tracing::trace;

/// A check box with a label and an independent checked flag
///
/// Unlike radio buttons there is no grouping: each box toggles on its own.
/// The reaction fires on every effective state change.
pub struct CheckBox {
    /// Control identity
    id: ControlId,

    /// Display label
    label: String,

    /// Current checked state
    checked: AtomicBool,

    /// Toggle reaction, invoked with the check box itself
    reaction: Option<Reaction<CheckBox>>,

    /// Initial-focus request flag
    focus: FocusFlag,
}

impl CheckBox {
    /// Create a check box
    pub fn new(label: impl Into<String>, checked: bool, reaction: Option<Reaction<CheckBox>>) -> Self {
        Self {
            id: ControlId::next(),
            label: label.into(),
            checked: AtomicBool::new(checked),
            reaction,
            focus: FocusFlag::default(),
        }
    }

    /// Display label
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Current checked state
    pub fn is_checked(&self) -> bool {
        self.checked.load(Ordering::SeqCst)
    }

    /// Set the checked state; the reaction fires only when the state changes
    pub fn set_checked(&self, checked: bool) {
        let previous = self.checked.swap(checked, Ordering::SeqCst);
        if previous != checked {
            trace!("CheckBox {} ('{}') set to {}", self.id, self.label, checked);
            if let Some(reaction) = &self.reaction {
                reaction(self);
            }
        }
    }

    /// Flip the checked state, firing the reaction
    pub fn toggle(&self) {
        let previous = self.checked.fetch_xor(true, Ordering::SeqCst);
        trace!("CheckBox {} ('{}') toggled to {}", self.id, self.label, !previous);
        if let Some(reaction) = &self.reaction {
            reaction(self);
        }
    }
}

impl Control for CheckBox {
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
