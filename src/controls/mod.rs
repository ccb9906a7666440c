//! Primitive control capability set
//!
//! Controls are the renderable leaves of a dialog's widget tree: an
//! identity, render-relevant attributes (label, text value, checked state),
//! and zero-or-one reaction the host invokes on the control's defining
//! interaction. Interaction state sits behind interior mutability so the
//! host's event-delivery context can mutate it while a caller awaits.

pub mod button;
pub mod checkbox;
pub mod radio;
pub mod textbox;

pub use button::Button;
pub use checkbox::CheckBox;
pub use radio::{RadioButton, RadioGroup};
pub use textbox::{PasswordBox, TextBox};

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;

/// Reaction invoked with the control itself on its defining interaction
pub type Reaction<C> = Arc<dyn Fn(&C) + Send + Sync>;

/// Wrap a closure into a [`Reaction`]
pub fn reaction<C>(f: impl Fn(&C) + Send + Sync + 'static) -> Reaction<C> {
    Arc::new(f)
}

/// Process-unique identity for a control instance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ControlId(u64);

impl ControlId {
    /// Mint a fresh identity
    pub(crate) fn next() -> Self {
        static NEXT_ID: AtomicU64 = AtomicU64::new(1);
        Self(NEXT_ID.fetch_add(1, Ordering::SeqCst))
    }
}

impl std::fmt::Display for ControlId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Initial-focus request flag, read by the host on first render
#[derive(Debug, Default)]
pub struct FocusFlag {
    requested: AtomicBool,
}

impl FocusFlag {
    /// Mark this control as the initial focus target
    pub fn request(&self) {
        self.requested.store(true, Ordering::SeqCst);
    }

    /// Whether initial focus has been requested
    pub fn is_requested(&self) -> bool {
        self.requested.load(Ordering::SeqCst)
    }
}

/// Common interface for all primitive controls
pub trait Control: Send + Sync {
    /// Control identity
    fn id(&self) -> ControlId;

    /// Ask the host to give this control initial keyboard focus
    fn request_focus(&self);

    /// Whether initial focus has been requested for this control
    fn focus_requested(&self) -> bool;
}
