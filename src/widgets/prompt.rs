//! Prompt widgets pairing input capture with a submit action
//!
//! Every prompt builds its children in rendering order, appends its submit
//! button(s) last, and requests initial focus on its first child. Selection
//! prompts additionally expose a read-only query of the chosen option(s),
//! meant to be called once the submit reaction has fired and the widget is
//! retired.

use super::{focus_first_child, StackPanel, WidgetNode};
use crate::controls::{
    Button, CheckBox, PasswordBox, RadioButton, RadioGroup, Reaction, TextBox,
};
use crate::encoding::TextEncoding;
use crate::resources::{LabelKey, StringResources};
use std::sync::Arc;

/// Reaction slots for text prompts, all optional and inert by default
#[derive(Default)]
pub struct TextPromptReactions {
    /// Fired by the OK button with the prompt's text box
    pub on_accept: Option<Reaction<TextBox>>,

    /// Fired by the Cancel button with the prompt's text box
    pub on_reject: Option<Reaction<TextBox>>,
}

/// Wire a button so its click forwards the given input control to `callback`
fn forward_to<C: Send + Sync + 'static>(
    input: &Arc<C>,
    callback: Option<Reaction<C>>,
) -> Option<Reaction<Button>> {
    callback.map(|callback| {
        let input = input.clone();
        let forward: Reaction<Button> = Arc::new(move |_: &Button| callback(&input));
        forward
    })
}

/// Text input with an OK button beneath it
pub struct OkPrompt {
    /// The text input
    input: Arc<TextBox>,

    /// Root panel handed to the host
    root: WidgetNode,
}

impl OkPrompt {
    /// Create the prompt; OK forwards the text box (current text at click
    /// time) to `on_accept`
    pub fn new(
        strings: &dyn StringResources,
        initial_text: impl Into<String>,
        on_accept: Option<Reaction<TextBox>>,
    ) -> Self {
        let input = Arc::new(TextBox::new(initial_text, None));
        let ok = Arc::new(Button::new(
            strings.label(LabelKey::Ok),
            forward_to(&input, on_accept),
        ));
        let root = WidgetNode::Panel(Arc::new(StackPanel::vertical(vec![
            WidgetNode::Text(input.clone()),
            WidgetNode::Panel(Arc::new(StackPanel::horizontal(vec![WidgetNode::Button(
                ok,
            )]))),
        ])));
        focus_first_child(&root);
        Self { input, root }
    }

    /// The prompt's text input
    pub fn input(&self) -> &Arc<TextBox> {
        &self.input
    }

    /// Widget tree for the host
    pub fn view(&self) -> WidgetNode {
        self.root.clone()
    }
}

/// Text input with OK and Cancel buttons beneath it
pub struct OkCancelPrompt {
    /// The text input
    input: Arc<TextBox>,

    /// Root panel handed to the host
    root: WidgetNode,
}

impl OkCancelPrompt {
    /// Create the prompt; both buttons forward the text box to their slot
    pub fn new(
        strings: &dyn StringResources,
        initial_text: impl Into<String>,
        reactions: TextPromptReactions,
    ) -> Self {
        let input = Arc::new(TextBox::new(initial_text, None));
        let ok = Arc::new(Button::new(
            strings.label(LabelKey::Ok),
            forward_to(&input, reactions.on_accept),
        ));
        let cancel = Arc::new(Button::new(
            strings.label(LabelKey::Cancel),
            forward_to(&input, reactions.on_reject),
        ));
        let root = WidgetNode::Panel(Arc::new(StackPanel::vertical(vec![
            WidgetNode::Text(input.clone()),
            WidgetNode::Panel(Arc::new(StackPanel::horizontal(vec![
                WidgetNode::Button(ok),
                WidgetNode::Button(cancel),
            ]))),
        ])));
        focus_first_child(&root);
        Self { input, root }
    }

    /// The prompt's text input
    pub fn input(&self) -> &Arc<TextBox> {
        &self.input
    }

    /// Widget tree for the host
    pub fn view(&self) -> WidgetNode {
        self.root.clone()
    }
}

/// Masked text input with an OK button beneath it
///
/// The raw text and its byte encoding are queried after resolution rather
/// than passed through the reaction.
pub struct PasswordPrompt {
    /// The masked input
    input: Arc<PasswordBox>,

    /// Root panel handed to the host
    root: WidgetNode,
}

impl PasswordPrompt {
    /// Create the prompt; OK forwards the password box to `on_accept`
    pub fn new(
        strings: &dyn StringResources,
        initial_text: impl Into<String>,
        on_accept: Option<Reaction<PasswordBox>>,
    ) -> Self {
        let input = Arc::new(PasswordBox::new(initial_text, None));
        let ok = Arc::new(Button::new(
            strings.label(LabelKey::Ok),
            forward_to(&input, on_accept),
        ));
        let root = WidgetNode::Panel(Arc::new(StackPanel::vertical(vec![
            WidgetNode::Password(input.clone()),
            WidgetNode::Panel(Arc::new(StackPanel::horizontal(vec![WidgetNode::Button(
                ok,
            )]))),
        ])));
        focus_first_child(&root);
        Self { input, root }
    }

    /// The prompt's masked input
    pub fn input(&self) -> &Arc<PasswordBox> {
        &self.input
    }

    /// Current password value, unmasked
    pub fn password(&self) -> String {
        self.input.password()
    }

    /// Current password value re-encoded as bytes under `encoding`
    pub fn encoded_password(&self, encoding: &dyn TextEncoding) -> Vec<u8> {
        self.input.encoded_password(encoding)
    }

    /// Widget tree for the host
    pub fn view(&self) -> WidgetNode {
        self.root.clone()
    }
}

/// Radio-button selection prompt: choose at most one option, then submit
pub struct SelectOnePrompt {
    /// One radio button per option, in original option order
    options: Vec<Arc<RadioButton>>,

    /// The submit button, appended after all options
    submit: Arc<Button>,

    /// Root panel handed to the host
    root: WidgetNode,
}

impl SelectOnePrompt {
    /// Create the prompt
    ///
    /// All radio buttons share one freshly created group. `default_value`
    /// pre-checks the option it matches by exact string equality; no match
    /// leaves nothing checked. `on_option` fires whenever an option becomes
    /// selected; `on_submit` fires on the Select button.
    pub fn new(
        strings: &dyn StringResources,
        options: &[String],
        default_value: Option<&str>,
        on_option: Option<Reaction<RadioButton>>,
        on_submit: Option<Reaction<Button>>,
    ) -> Self {
        let group = RadioGroup::new();
        let options: Vec<Arc<RadioButton>> = options
            .iter()
            .map(|option| {
                let checked = default_value == Some(option.as_str());
                Arc::new(RadioButton::new(
                    &group,
                    option.clone(),
                    checked,
                    on_option.clone(),
                ))
            })
            .collect();
        let submit = Arc::new(Button::new(strings.label(LabelKey::Select), on_submit));

        let mut children: Vec<WidgetNode> =
            options.iter().cloned().map(WidgetNode::Radio).collect();
        children.push(WidgetNode::Button(submit.clone()));
        let root = WidgetNode::Panel(Arc::new(StackPanel::vertical(children)));
        focus_first_child(&root);

        Self {
            options,
            submit,
            root,
        }
    }

    /// Radio buttons in original option order
    pub fn options(&self) -> &[Arc<RadioButton>] {
        &self.options
    }

    /// The submit button
    pub fn submit_button(&self) -> &Arc<Button> {
        &self.submit
    }

    /// Label of the checked option, if any
    ///
    /// Meant to be called after the submit reaction fired, when the widget
    /// is retired and no further events mutate it.
    pub fn selected(&self) -> Option<String> {
        self.options
            .iter()
            .find(|radio| radio.is_checked())
            .map(|radio| radio.label().to_string())
    }

    /// Widget tree for the host
    pub fn view(&self) -> WidgetNode {
        self.root.clone()
    }
}

/// Check-box selection prompt: choose any number of options, then submit
pub struct SelectManyPrompt {
    /// One check box per option, in original option order
    options: Vec<Arc<CheckBox>>,

    /// The submit button, appended after all options
    submit: Arc<Button>,

    /// Root panel handed to the host
    root: WidgetNode,
}

impl SelectManyPrompt {
    /// Create the prompt; every box starts unchecked
    pub fn new(
        strings: &dyn StringResources,
        options: &[String],
        on_option: Option<Reaction<CheckBox>>,
        on_submit: Option<Reaction<Button>>,
    ) -> Self {
        let options: Vec<Arc<CheckBox>> = options
            .iter()
            .map(|option| Arc::new(CheckBox::new(option.clone(), false, on_option.clone())))
            .collect();
        let submit = Arc::new(Button::new(strings.label(LabelKey::Select), on_submit));

        let mut children: Vec<WidgetNode> =
            options.iter().cloned().map(WidgetNode::Check).collect();
        children.push(WidgetNode::Button(submit.clone()));
        let root = WidgetNode::Panel(Arc::new(StackPanel::vertical(children)));
        focus_first_child(&root);

        Self {
            options,
            submit,
            root,
        }
    }

    /// Check boxes in original option order
    pub fn options(&self) -> &[Arc<CheckBox>] {
        &self.options
    }

    /// The submit button
    pub fn submit_button(&self) -> &Arc<Button> {
        &self.submit
    }

    /// Labels of the checked boxes, in original option order
    pub fn selected(&self) -> Vec<String> {
        self.options
            .iter()
            .filter(|check| check.is_checked())
            .map(|check| check.label().to_string())
            .collect()
    }

    /// Widget tree for the host
    pub fn view(&self) -> WidgetNode {
        self.root.clone()
    }
}
