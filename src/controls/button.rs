//! Push button control

use super::{Control, ControlId, FocusFlag, Reaction};
use tracing::trace;

/// A clickable button with a label and zero-or-one click reaction
///
/// A button constructed without a reaction is inert: clicking it does
/// nothing beyond the host-side visual feedback.
pub struct Button {
    /// Control identity
    id: ControlId,

    /// Display label, already resolved from string resources
    label: String,

    /// Click reaction, invoked with the button itself
    reaction: Option<Reaction<Button>>,

    /// Initial-focus request flag
    focus: FocusFlag,
}

impl Button {
    /// Create a button
    pub fn new(label: impl Into<String>, reaction: Option<Reaction<Button>>) -> Self {
        Self {
            id: ControlId::next(),
            label: label.into(),
            reaction,
            focus: FocusFlag::default(),
        }
    }

    /// Display label
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Deliver a click to this button, invoking its reaction if wired
    pub fn click(&self) {
        trace!("Button {} ('{}') clicked", self.id, self.label);
        if let Some(reaction) = &self.reaction {
            reaction(self);
        }
    }
}

impl Control for Button {
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
