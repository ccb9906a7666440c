//! Composite widgets
//!
//! A composite widget owns an ordered collection of child nodes and renders
//! them as one visual unit. Insertion order is rendering order and, for
//! prompts, determines the initial focus target (first child).

pub mod button_array;
pub mod prompt;

pub use button_array::{
    AbortRetryIgnoreReactions, ButtonArray, ButtonReaction, CancelTryContinueReactions,
    OkCancelReactions, OkReactions, RetryCancelReactions, YesNoCancelReactions, YesNoReactions,
};
pub use prompt::{
    OkCancelPrompt, OkPrompt, PasswordPrompt, SelectManyPrompt, SelectOnePrompt,
    TextPromptReactions,
};

use crate::controls::{Button, CheckBox, Control, PasswordBox, RadioButton, TextBox};
use std::sync::Arc;

/// Stacking direction of a panel's children
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// A node in a dialog's widget tree
///
/// Nodes are cheap to clone: control payloads are shared behind `Arc`, so
/// the host's copy of the tree observes the same interaction state the
/// orchestration layer queries after settlement.
#[derive(Clone)]
pub enum WidgetNode {
    Button(Arc<Button>),
    Radio(Arc<RadioButton>),
    Check(Arc<CheckBox>),
    Text(Arc<TextBox>),
    Password(Arc<PasswordBox>),
    /// Visual separator between adjacent controls
    Separator,
    Panel(Arc<StackPanel>),
}

impl WidgetNode {
    /// View this node as a primitive control, if it is one
    pub fn as_control(&self) -> Option<&dyn Control> {
        match self {
            WidgetNode::Button(button) => Some(button.as_ref()),
            WidgetNode::Radio(radio) => Some(radio.as_ref()),
            WidgetNode::Check(check) => Some(check.as_ref()),
            WidgetNode::Text(text) => Some(text.as_ref()),
            WidgetNode::Password(password) => Some(password.as_ref()),
            WidgetNode::Separator | WidgetNode::Panel(_) => None,
        }
    }

    /// First primitive control in document order, descending into panels
    pub fn first_control(&self) -> Option<&dyn Control> {
        match self {
            WidgetNode::Panel(panel) => panel
                .children()
                .iter()
                .find_map(|child| child.first_control()),
            other => other.as_control(),
        }
    }
}

/// Composite widget stacking its children horizontally or vertically
pub struct StackPanel {
    /// Stacking direction
    orientation: Orientation,

    /// Ordered children; insertion order is rendering order
    children: Vec<WidgetNode>,
}

impl StackPanel {
    /// Create a panel from an ordered child list
    pub fn new(orientation: Orientation, children: Vec<WidgetNode>) -> Self {
        Self {
            orientation,
            children,
        }
    }

    /// Create a horizontal panel (left-to-right row)
    pub fn horizontal(children: Vec<WidgetNode>) -> Self {
        Self::new(Orientation::Horizontal, children)
    }

    /// Create a vertical panel (top-to-bottom stack)
    pub fn vertical(children: Vec<WidgetNode>) -> Self {
        Self::new(Orientation::Vertical, children)
    }

    /// Stacking direction
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Ordered children
    pub fn children(&self) -> &[WidgetNode] {
        &self.children
    }
}

/// Interleave separators between adjacent nodes
///
/// `[a, b, c]` becomes `[a, sep, b, sep, c]`: never leading, never trailing,
/// and a single node (or none) gets no separator at all.
pub fn join_with_separators(items: Vec<WidgetNode>) -> Vec<WidgetNode> {
    let mut joined = Vec::with_capacity(items.len() * 2);
    for item in items {
        if !joined.is_empty() {
            joined.push(WidgetNode::Separator);
        }
        joined.push(item);
    }
    joined
}

/// Request initial focus on the first control beneath `root`
///
/// Prompt constructors call this after assembling their child list so the
/// host can enable immediate keyboard interaction on first render.
pub fn focus_first_child(root: &WidgetNode) {
    if let Some(control) = root.first_control() {
        control.request_focus();
    }
}
