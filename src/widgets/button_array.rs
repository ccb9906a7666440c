//! Fixed, named button rows
//!
//! Each array kind renders a canonical left-to-right set of buttons with a
//! separator between adjacent buttons, every button wired to an externally
//! supplied reaction. Clicking a button invokes only that button's reaction;
//! tearing the dialog down is the composing code's responsibility.

use super::{join_with_separators, StackPanel, WidgetNode};
use crate::controls::{Button, Reaction};
use crate::resources::{LabelKey, StringResources};
use std::sync::Arc;

/// Reaction slot for a button array entry
pub type ButtonReaction = Reaction<Button>;

/// Reaction slots for the Abort/Retry/Ignore array
#[derive(Default)]
pub struct AbortRetryIgnoreReactions {
    pub on_abort: Option<ButtonReaction>,
    pub on_retry: Option<ButtonReaction>,
    pub on_ignore: Option<ButtonReaction>,
}

/// Reaction slots for the Cancel/Try/Continue array
#[derive(Default)]
pub struct CancelTryContinueReactions {
    pub on_cancel: Option<ButtonReaction>,
    pub on_try: Option<ButtonReaction>,
    pub on_continue: Option<ButtonReaction>,
}

/// Reaction slot for the single OK array
#[derive(Default)]
pub struct OkReactions {
    pub on_ok: Option<ButtonReaction>,
}

/// Reaction slots for the OK/Cancel array
#[derive(Default)]
pub struct OkCancelReactions {
    pub on_ok: Option<ButtonReaction>,
    pub on_cancel: Option<ButtonReaction>,
}

/// Reaction slots for the Retry/Cancel array
#[derive(Default)]
pub struct RetryCancelReactions {
    pub on_retry: Option<ButtonReaction>,
    pub on_cancel: Option<ButtonReaction>,
}

/// Reaction slots for the Yes/No array
#[derive(Default)]
pub struct YesNoReactions {
    pub on_yes: Option<ButtonReaction>,
    pub on_no: Option<ButtonReaction>,
}

/// Reaction slots for the Yes/No/Cancel array
#[derive(Default)]
pub struct YesNoCancelReactions {
    pub on_yes: Option<ButtonReaction>,
    pub on_no: Option<ButtonReaction>,
    pub on_cancel: Option<ButtonReaction>,
}

/// A horizontal row of named buttons joined by separators
pub struct ButtonArray {
    /// Buttons in canonical left-to-right order
    buttons: Vec<Arc<Button>>,

    /// Root panel handed to the host
    root: Arc<StackPanel>,
}

impl ButtonArray {
    /// Build an array from ordered (label key, reaction) slots
    fn from_slots(
        strings: &dyn StringResources,
        slots: Vec<(LabelKey, Option<ButtonReaction>)>,
    ) -> Self {
        let buttons: Vec<Arc<Button>> = slots
            .into_iter()
            .map(|(key, reaction)| Arc::new(Button::new(strings.label(key), reaction)))
            .collect();
        let nodes = join_with_separators(buttons.iter().cloned().map(WidgetNode::Button).collect());
        Self {
            buttons,
            root: Arc::new(StackPanel::horizontal(nodes)),
        }
    }

    /// Abort / Retry / Ignore
    pub fn abort_retry_ignore(
        strings: &dyn StringResources,
        reactions: AbortRetryIgnoreReactions,
    ) -> Self {
        Self::from_slots(
            strings,
            vec![
                (LabelKey::Abort, reactions.on_abort),
                (LabelKey::Retry, reactions.on_retry),
                (LabelKey::Ignore, reactions.on_ignore),
            ],
        )
    }

    /// Cancel / Try / Continue
    pub fn cancel_try_continue(
        strings: &dyn StringResources,
        reactions: CancelTryContinueReactions,
    ) -> Self {
        Self::from_slots(
            strings,
            vec![
                (LabelKey::Cancel, reactions.on_cancel),
                (LabelKey::Try, reactions.on_try),
                (LabelKey::Continue, reactions.on_continue),
            ],
        )
    }

    /// A lone OK button
    pub fn ok(strings: &dyn StringResources, reactions: OkReactions) -> Self {
        Self::from_slots(strings, vec![(LabelKey::Ok, reactions.on_ok)])
    }

    /// OK / Cancel
    pub fn ok_cancel(strings: &dyn StringResources, reactions: OkCancelReactions) -> Self {
        Self::from_slots(
            strings,
            vec![
                (LabelKey::Ok, reactions.on_ok),
                (LabelKey::Cancel, reactions.on_cancel),
            ],
        )
    }

    /// Retry / Cancel
    pub fn retry_cancel(strings: &dyn StringResources, reactions: RetryCancelReactions) -> Self {
        Self::from_slots(
            strings,
            vec![
                (LabelKey::Retry, reactions.on_retry),
                (LabelKey::Cancel, reactions.on_cancel),
            ],
        )
    }

    /// Yes / No
    pub fn yes_no(strings: &dyn StringResources, reactions: YesNoReactions) -> Self {
        Self::from_slots(
            strings,
            vec![
                (LabelKey::Yes, reactions.on_yes),
                (LabelKey::No, reactions.on_no),
            ],
        )
    }

    /// Yes / No / Cancel
    pub fn yes_no_cancel(strings: &dyn StringResources, reactions: YesNoCancelReactions) -> Self {
        Self::from_slots(
            strings,
            vec![
                (LabelKey::Yes, reactions.on_yes),
                (LabelKey::No, reactions.on_no),
                (LabelKey::Cancel, reactions.on_cancel),
            ],
        )
    }

    /// Buttons in canonical left-to-right order
    pub fn buttons(&self) -> &[Arc<Button>] {
        &self.buttons
    }

    /// Widget tree for the host
    pub fn view(&self) -> WidgetNode {
        WidgetNode::Panel(self.root.clone())
    }
}
