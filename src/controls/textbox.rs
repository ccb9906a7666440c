//! Text entry controls
//!
//! [`TextBox`] holds a mutable text value; [`PasswordBox`] is its masked
//! sibling and can additionally export its value as bytes under an
//! externally supplied text encoding.

use super::{Control, ControlId, FocusFlag, Reaction};
use crate::encoding::TextEncoding;
use std::sync::Mutex;
use tracing::trace;

/// Single-line text input holding a mutable text value
pub struct TextBox {
    /// Control identity
    id: ControlId,

    /// Current text value
    text: Mutex<String>,

    /// Text-changed reaction, invoked with the text box itself
    reaction: Option<Reaction<TextBox>>,

    /// Initial-focus request flag
    focus: FocusFlag,
}

impl TextBox {
    /// Create a text box seeded with `initial_text`
    pub fn new(initial_text: impl Into<String>, reaction: Option<Reaction<TextBox>>) -> Self {
        Self {
            id: ControlId::next(),
            text: Mutex::new(initial_text.into()),
            reaction,
            focus: FocusFlag::default(),
        }
    }

    /// Current text value
    pub fn text(&self) -> String {
        self.text.lock().unwrap().clone()
    }

    /// Replace the text value; the reaction fires only when the value changes
    pub fn set_text(&self, text: impl Into<String>) {
        let text = text.into();
        let changed = {
            let mut current = self.text.lock().unwrap();
            if *current == text {
                false
            } else {
                *current = text;
                true
            }
        };
        if changed {
            trace!("TextBox {} text changed", self.id);
            if let Some(reaction) = &self.reaction {
                reaction(self);
            }
        }
    }
}

impl Control for TextBox {
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

/// Password input: a masked text value with byte export
///
/// The host renders the value masked; the value itself is kept verbatim and
/// can be read raw or re-encoded. Both accessors are independent of call
/// order.
pub struct PasswordBox {
    /// Control identity
    id: ControlId,

    /// Current password value, kept verbatim
    text: Mutex<String>,

    /// Text-changed reaction, invoked with the password box itself
    reaction: Option<Reaction<PasswordBox>>,

    /// Initial-focus request flag
    focus: FocusFlag,
}

impl PasswordBox {
    /// Create a password box seeded with `initial_text`
    pub fn new(initial_text: impl Into<String>, reaction: Option<Reaction<PasswordBox>>) -> Self {
        Self {
            id: ControlId::next(),
            text: Mutex::new(initial_text.into()),
            reaction,
            focus: FocusFlag::default(),
        }
    }

    /// Current password value, unmasked
    pub fn password(&self) -> String {
        self.text.lock().unwrap().clone()
    }

    /// Current password value re-encoded as bytes under `encoding`
    pub fn encoded_password(&self, encoding: &dyn TextEncoding) -> Vec<u8> {
        encoding.encode(&self.text.lock().unwrap())
    }

    /// Replace the password value; the reaction fires only when it changes
    pub fn set_text(&self, text: impl Into<String>) {
        let text = text.into();
        let changed = {
            let mut current = self.text.lock().unwrap();
            if *current == text {
                false
            } else {
                *current = text;
                true
            }
        };
        if changed {
            trace!("PasswordBox {} text changed", self.id);
            if let Some(reaction) = &self.reaction {
                reaction(self);
            }
        }
    }
}

impl Control for PasswordBox {
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
