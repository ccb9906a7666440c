//! Dialog orchestration: the completion bridge
//!
//! One entry point per dialog shape. Each builds the matching composite
//! widget, wires every terminal action to a single completion token, hands
//! the tree to the host, and suspends the caller until the first settlement.
//! Selection and password dialogs derive their answer by querying the
//! retired widget after settlement rather than carrying it through the
//! reaction.

use crate::controls::{reaction, Button, CheckBox, PasswordBox, RadioButton, Reaction, TextBox};
use crate::encoding::TextEncoding;
use crate::error::DialogResult;
use crate::host::DialogHost;
use crate::resources::{DefaultStrings, StringResources};
use crate::token::CompletionToken;
use crate::widgets::{
    AbortRetryIgnoreReactions, ButtonArray, ButtonReaction, CancelTryContinueReactions,
    OkCancelReactions, OkPrompt, OkCancelPrompt, OkReactions, PasswordPrompt,
    RetryCancelReactions, SelectManyPrompt, SelectOnePrompt, TextPromptReactions, WidgetNode,
    YesNoCancelReactions, YesNoReactions,
};
use std::sync::{Arc, Mutex};
use tracing::debug;

/// Resolved outcome of a password dialog
pub struct PasswordAnswer {
    /// Raw password text at submission time
    pub text: String,

    /// The same text re-encoded under the caller-supplied encoding
    pub encoded: Vec<u8>,
}

/// Configuration for a select-one dialog
#[derive(Default)]
pub struct SelectOneOptions {
    /// Option strings, in rendering order
    options: Vec<String>,

    /// Option to pre-check, matched by exact string equality
    default_value: Option<String>,

    /// Fired whenever an option becomes selected
    on_option: Option<Reaction<RadioButton>>,
}

impl SelectOneOptions {
    /// Configure a select-one dialog over `options`
    pub fn new<I, S>(options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            options: options.into_iter().map(Into::into).collect(),
            ..Default::default()
        }
    }

    /// Pre-check the option equal to `value`
    pub fn default_value(mut self, value: impl Into<String>) -> Self {
        self.default_value = Some(value.into());
        self
    }

    /// Invoke `callback` whenever an option becomes selected
    pub fn on_option(mut self, callback: impl Fn(&RadioButton) + Send + Sync + 'static) -> Self {
        self.on_option = Some(reaction(callback));
        self
    }
}

/// Configuration for a select-many dialog
#[derive(Default)]
pub struct SelectManyOptions {
    /// Option strings, in rendering order
    options: Vec<String>,

    /// Fired on every option toggle
    on_option: Option<Reaction<CheckBox>>,
}

impl SelectManyOptions {
    /// Configure a select-many dialog over `options`
    pub fn new<I, S>(options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            options: options.into_iter().map(Into::into).collect(),
            on_option: None,
        }
    }

    /// Invoke `callback` on every option toggle
    pub fn on_option(mut self, callback: impl Fn(&CheckBox) + Send + Sync + 'static) -> Self {
        self.on_option = Some(reaction(callback));
        self
    }
}

/// Button reaction settling `token` with `value` on first click
fn settle_with<T: Send + 'static>(token: &Arc<CompletionToken<T>>, value: T) -> ButtonReaction {
    let token = token.clone();
    let value = Mutex::new(Some(value));
    reaction(move |_: &Button| {
        if let Some(value) = value.lock().unwrap().take() {
            token.settle(value);
        }
    })
}

/// Button reaction settling a unit token, used by submission buttons
fn submit_signal(token: &Arc<CompletionToken<()>>) -> ButtonReaction {
    let token = token.clone();
    reaction(move |_: &Button| {
        token.settle(());
    })
}

/// Entry points for every dialog shape
///
/// A `Dialogs` value pairs a [`DialogHost`] with a [`StringResources`]
/// collaborator. Each method is a one-shot interaction: build, display,
/// suspend until the first terminal action, resolve.
#[derive(Clone)]
pub struct Dialogs {
    /// Render boundary
    host: Arc<dyn DialogHost>,

    /// Button label lookup
    strings: Arc<dyn StringResources>,
}

impl Dialogs {
    /// Create dialogs over `host` with the built-in English labels
    pub fn new(host: Arc<dyn DialogHost>) -> Self {
        Self::with_strings(host, Arc::new(DefaultStrings))
    }

    /// Create dialogs over `host` with a custom label collaborator
    pub fn with_strings(host: Arc<dyn DialogHost>, strings: Arc<dyn StringResources>) -> Self {
        Self { host, strings }
    }

    /// Hand `root` and `message` to the host
    async fn show(&self, message: &str, root: WidgetNode) -> DialogResult<()> {
        debug!("Displaying dialog: {}", message);
        self.host.display(message, root).await?;
        Ok(())
    }

    /// Ask `question` with Abort, Retry and Ignore buttons
    pub async fn abort_retry_ignore<T: Send + 'static>(
        &self,
        question: &str,
        abort_value: T,
        retry_value: T,
        ignore_value: T,
    ) -> DialogResult<T> {
        let (token, pending) = CompletionToken::new();
        let array = ButtonArray::abort_retry_ignore(
            self.strings.as_ref(),
            AbortRetryIgnoreReactions {
                on_abort: Some(settle_with(&token, abort_value)),
                on_retry: Some(settle_with(&token, retry_value)),
                on_ignore: Some(settle_with(&token, ignore_value)),
            },
        );
        self.show(question, array.view()).await?;
        // Only the host's copy of the tree holds settle handles now; a
        // discarded dialog surfaces as Abandoned instead of suspending
        // forever.
        drop(array);
        drop(token);
        pending.wait().await
    }

    /// Ask `question` with Cancel, Try and Continue buttons
    pub async fn cancel_try_continue<T: Send + 'static>(
        &self,
        question: &str,
        cancel_value: T,
        try_value: T,
        continue_value: T,
    ) -> DialogResult<T> {
        let (token, pending) = CompletionToken::new();
        let array = ButtonArray::cancel_try_continue(
            self.strings.as_ref(),
            CancelTryContinueReactions {
                on_cancel: Some(settle_with(&token, cancel_value)),
                on_try: Some(settle_with(&token, try_value)),
                on_continue: Some(settle_with(&token, continue_value)),
            },
        );
        self.show(question, array.view()).await?;
        drop(array);
        drop(token);
        pending.wait().await
    }

    /// Show `message` with a lone OK button and wait for acknowledgement
    pub async fn ok(&self, message: &str) -> DialogResult<()> {
        self.ok_value(message, ()).await
    }

    /// Show `message` with a lone OK button, resolving to `ok_value`
    pub async fn ok_value<T: Send + 'static>(&self, message: &str, ok_value: T) -> DialogResult<T> {
        let (token, pending) = CompletionToken::new();
        let array = ButtonArray::ok(
            self.strings.as_ref(),
            OkReactions {
                on_ok: Some(settle_with(&token, ok_value)),
            },
        );
        self.show(message, array.view()).await?;
        drop(array);
        drop(token);
        pending.wait().await
    }

    /// Ask `question` with OK and Cancel buttons
    pub async fn ok_cancel<T: Send + 'static>(
        &self,
        question: &str,
        ok_value: T,
        cancel_value: T,
    ) -> DialogResult<T> {
        let (token, pending) = CompletionToken::new();
        let array = ButtonArray::ok_cancel(
            self.strings.as_ref(),
            OkCancelReactions {
                on_ok: Some(settle_with(&token, ok_value)),
                on_cancel: Some(settle_with(&token, cancel_value)),
            },
        );
        self.show(question, array.view()).await?;
        drop(array);
        drop(token);
        pending.wait().await
    }

    /// Ask `question` with Retry and Cancel buttons
    pub async fn retry_cancel<T: Send + 'static>(
        &self,
        question: &str,
        retry_value: T,
        cancel_value: T,
    ) -> DialogResult<T> {
        let (token, pending) = CompletionToken::new();
        let array = ButtonArray::retry_cancel(
            self.strings.as_ref(),
            RetryCancelReactions {
                on_retry: Some(settle_with(&token, retry_value)),
                on_cancel: Some(settle_with(&token, cancel_value)),
            },
        );
        self.show(question, array.view()).await?;
        drop(array);
        drop(token);
        pending.wait().await
    }

    /// Ask `question` with Yes and No buttons
    pub async fn yes_no<T: Send + 'static>(
        &self,
        question: &str,
        yes_value: T,
        no_value: T,
    ) -> DialogResult<T> {
        let (token, pending) = CompletionToken::new();
        let array = ButtonArray::yes_no(
            self.strings.as_ref(),
            YesNoReactions {
                on_yes: Some(settle_with(&token, yes_value)),
                on_no: Some(settle_with(&token, no_value)),
            },
        );
        self.show(question, array.view()).await?;
        drop(array);
        drop(token);
        pending.wait().await
    }

    /// Ask `question` with Yes, No and Cancel buttons
    pub async fn yes_no_cancel<T: Send + 'static>(
        &self,
        question: &str,
        yes_value: T,
        no_value: T,
        cancel_value: T,
    ) -> DialogResult<T> {
        let (token, pending) = CompletionToken::new();
        let array = ButtonArray::yes_no_cancel(
            self.strings.as_ref(),
            YesNoCancelReactions {
                on_yes: Some(settle_with(&token, yes_value)),
                on_no: Some(settle_with(&token, no_value)),
                on_cancel: Some(settle_with(&token, cancel_value)),
            },
        );
        self.show(question, array.view()).await?;
        drop(array);
        drop(token);
        pending.wait().await
    }

    /// Ask `question` with a text input and an OK button
    ///
    /// Resolves to the input's text at click time, reflecting any edits made
    /// since construction.
    pub async fn prompt(&self, question: &str, initial_text: &str) -> DialogResult<String> {
        let (token, pending) = CompletionToken::new();
        let accept: Reaction<TextBox> = {
            let token = token.clone();
            reaction(move |text_box: &TextBox| {
                token.settle(text_box.text());
            })
        };
        let prompt = OkPrompt::new(self.strings.as_ref(), initial_text, Some(accept));
        self.show(question, prompt.view()).await?;
        drop(prompt);
        drop(token);
        pending.wait().await
    }

    /// Ask `question` with a text input and OK/Cancel buttons
    ///
    /// Resolves to `Some(text)` on OK and `None` on Cancel.
    pub async fn prompt_or_cancel(
        &self,
        question: &str,
        initial_text: &str,
    ) -> DialogResult<Option<String>> {
        let (token, pending) = CompletionToken::new();
        let reactions = TextPromptReactions {
            on_accept: Some({
                let token = token.clone();
                reaction(move |text_box: &TextBox| {
                    token.settle(Some(text_box.text()));
                })
            }),
            on_reject: Some({
                let token = token.clone();
                reaction(move |_: &TextBox| {
                    token.settle(None);
                })
            }),
        };
        let prompt = OkCancelPrompt::new(self.strings.as_ref(), initial_text, reactions);
        self.show(question, prompt.view()).await?;
        drop(prompt);
        drop(token);
        pending.wait().await
    }

    /// Ask `question` with a masked input and an OK button
    ///
    /// Resolves to the raw text plus its bytes under `encoding`, both read
    /// from the retired widget after submission.
    pub async fn password(
        &self,
        question: &str,
        encoding: &dyn TextEncoding,
    ) -> DialogResult<PasswordAnswer> {
        let (token, pending) = CompletionToken::new();
        let accept: Reaction<PasswordBox> = {
            let token = token.clone();
            reaction(move |_: &PasswordBox| {
                token.settle(());
            })
        };
        let prompt = PasswordPrompt::new(self.strings.as_ref(), "", Some(accept));
        self.show(question, prompt.view()).await?;
        pending.wait().await?;
        Ok(PasswordAnswer {
            text: prompt.password(),
            encoded: prompt.encoded_password(encoding),
        })
    }

    /// Ask `question` with one radio button per option plus a Select button
    ///
    /// Resolves to the label of the checked option, or `None` when the user
    /// submits without selecting.
    pub async fn select_one(
        &self,
        question: &str,
        config: SelectOneOptions,
    ) -> DialogResult<Option<String>> {
        let (token, pending) = CompletionToken::new();
        let prompt = SelectOnePrompt::new(
            self.strings.as_ref(),
            &config.options,
            config.default_value.as_deref(),
            config.on_option,
            Some(submit_signal(&token)),
        );
        self.show(question, prompt.view()).await?;
        pending.wait().await?;
        // Submission retired the widget; this query reads settled state.
        Ok(prompt.selected())
    }

    /// Ask `question` with one check box per option plus a Select button
    ///
    /// Resolves to the labels of the checked boxes in original option order
    /// (possibly empty).
    pub async fn select_many(
        &self,
        question: &str,
        config: SelectManyOptions,
    ) -> DialogResult<Vec<String>> {
        let (token, pending) = CompletionToken::new();
        let prompt = SelectManyPrompt::new(
            self.strings.as_ref(),
            &config.options,
            config.on_option,
            Some(submit_signal(&token)),
        );
        self.show(question, prompt.view()).await?;
        pending.wait().await?;
        Ok(prompt.selected())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoding::Utf8;
    use crate::error::DialogError;
    use crate::host::NullHost;
    use crate::resources::{LabelKey, StringResources};
    use anyhow::anyhow;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tokio::sync::mpsc;

    fn init_tracing() {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .try_init();
    }

    /// Host that forwards every displayed dialog to the test body
    struct CapturingHost {
        shown: mpsc::UnboundedSender<(String, WidgetNode)>,
    }

    #[async_trait]
    impl DialogHost for CapturingHost {
        async fn display(&self, message: &str, root: WidgetNode) -> anyhow::Result<()> {
            self.shown
                .send((message.to_string(), root))
                .map_err(|_| anyhow!("capture channel closed"))
        }
    }

    fn capturing_dialogs() -> (Dialogs, mpsc::UnboundedReceiver<(String, WidgetNode)>) {
        init_tracing();
        let (tx, rx) = mpsc::unbounded_channel();
        (Dialogs::new(Arc::new(CapturingHost { shown: tx })), rx)
    }

    fn find_button(node: &WidgetNode, label: &str) -> Arc<Button> {
        fn walk(node: &WidgetNode, label: &str) -> Option<Arc<Button>> {
            match node {
                WidgetNode::Button(button) if button.label() == label => Some(button.clone()),
                WidgetNode::Panel(panel) => {
                    panel.children().iter().find_map(|child| walk(child, label))
                }
                _ => None,
            }
        }
        walk(node, label).unwrap_or_else(|| panic!("no button labelled '{}'", label))
    }

    fn find_radio(node: &WidgetNode, label: &str) -> Arc<RadioButton> {
        fn walk(node: &WidgetNode, label: &str) -> Option<Arc<RadioButton>> {
            match node {
                WidgetNode::Radio(radio) if radio.label() == label => Some(radio.clone()),
                WidgetNode::Panel(panel) => {
                    panel.children().iter().find_map(|child| walk(child, label))
                }
                _ => None,
            }
        }
        walk(node, label).unwrap_or_else(|| panic!("no radio labelled '{}'", label))
    }

    fn find_check(node: &WidgetNode, label: &str) -> Arc<CheckBox> {
        fn walk(node: &WidgetNode, label: &str) -> Option<Arc<CheckBox>> {
            match node {
                WidgetNode::Check(check) if check.label() == label => Some(check.clone()),
                WidgetNode::Panel(panel) => {
                    panel.children().iter().find_map(|child| walk(child, label))
                }
                _ => None,
            }
        }
        walk(node, label).unwrap_or_else(|| panic!("no check box labelled '{}'", label))
    }

    fn find_text(node: &WidgetNode) -> Arc<TextBox> {
        fn walk(node: &WidgetNode) -> Option<Arc<TextBox>> {
            match node {
                WidgetNode::Text(text) => Some(text.clone()),
                WidgetNode::Panel(panel) => panel.children().iter().find_map(walk),
                _ => None,
            }
        }
        walk(node).expect("no text box in tree")
    }

    fn find_password(node: &WidgetNode) -> Arc<PasswordBox> {
        fn walk(node: &WidgetNode) -> Option<Arc<PasswordBox>> {
            match node {
                WidgetNode::Password(password) => Some(password.clone()),
                WidgetNode::Panel(panel) => panel.children().iter().find_map(walk),
                _ => None,
            }
        }
        walk(node).expect("no password box in tree")
    }

    #[tokio::test]
    async fn test_yes_no_maps_clicked_button_to_value() {
        let (dialogs, mut shown) = capturing_dialogs();

        let task = {
            let dialogs = dialogs.clone();
            tokio::spawn(async move { dialogs.yes_no("Proceed?", "yes", "no").await })
        };

        let (message, root) = shown.recv().await.expect("dialog displayed");
        assert_eq!(message, "Proceed?");
        find_button(&root, "Yes").click();
        assert_eq!(task.await.unwrap().unwrap(), "yes");
    }

    #[tokio::test]
    async fn test_each_fixed_choice_kind_maps_every_action() {
        let (dialogs, mut shown) = capturing_dialogs();

        // (spawn, button label to click, expected value)
        let dialogs2 = dialogs.clone();
        let task = tokio::spawn(async move {
            dialogs2.abort_retry_ignore("q", 'a', 'r', 'i').await
        });
        let (_, root) = shown.recv().await.unwrap();
        find_button(&root, "Retry").click();
        assert_eq!(task.await.unwrap().unwrap(), 'r');

        let dialogs2 = dialogs.clone();
        let task = tokio::spawn(async move {
            dialogs2.cancel_try_continue("q", 0, 1, 2).await
        });
        let (_, root) = shown.recv().await.unwrap();
        find_button(&root, "Continue").click();
        assert_eq!(task.await.unwrap().unwrap(), 2);

        let dialogs2 = dialogs.clone();
        let task = tokio::spawn(async move { dialogs2.ok_value("q", "done").await });
        let (_, root) = shown.recv().await.unwrap();
        find_button(&root, "OK").click();
        assert_eq!(task.await.unwrap().unwrap(), "done");

        let dialogs2 = dialogs.clone();
        let task = tokio::spawn(async move { dialogs2.ok_cancel("q", true, false).await });
        let (_, root) = shown.recv().await.unwrap();
        find_button(&root, "Cancel").click();
        assert!(!task.await.unwrap().unwrap());

        let dialogs2 = dialogs.clone();
        let task = tokio::spawn(async move { dialogs2.retry_cancel("q", "retry", "stop").await });
        let (_, root) = shown.recv().await.unwrap();
        find_button(&root, "Retry").click();
        assert_eq!(task.await.unwrap().unwrap(), "retry");

        let dialogs2 = dialogs.clone();
        let task =
            tokio::spawn(async move { dialogs2.yes_no_cancel("q", "y", "n", "c").await });
        let (_, root) = shown.recv().await.unwrap();
        find_button(&root, "No").click();
        assert_eq!(task.await.unwrap().unwrap(), "n");
    }

    #[tokio::test]
    async fn test_ok_acknowledgement_resolves_unit() {
        let (dialogs, mut shown) = capturing_dialogs();

        let task = {
            let dialogs = dialogs.clone();
            tokio::spawn(async move { dialogs.ok("Saved.").await })
        };
        let (message, root) = shown.recv().await.unwrap();
        assert_eq!(message, "Saved.");
        find_button(&root, "OK").click();
        task.await.unwrap().unwrap();
    }

    #[tokio::test]
    async fn test_second_terminal_action_is_a_no_op() {
        let (dialogs, mut shown) = capturing_dialogs();

        let task = {
            let dialogs = dialogs.clone();
            tokio::spawn(async move { dialogs.yes_no("Sure?", 1, 2).await })
        };

        let (_, root) = shown.recv().await.unwrap();
        find_button(&root, "Yes").click();
        find_button(&root, "No").click();
        // First action wins; the late click neither panics nor swaps it.
        assert_eq!(task.await.unwrap().unwrap(), 1);
        find_button(&root, "No").click();
    }

    #[tokio::test]
    async fn test_only_clicked_reaction_fires() {
        let (dialogs, mut shown) = capturing_dialogs();
        let resolved = Arc::new(AtomicUsize::new(0));

        let task = {
            let dialogs = dialogs.clone();
            let resolved = resolved.clone();
            tokio::spawn(async move {
                let value = dialogs.yes_no("q", "yes", "no").await;
                resolved.fetch_add(1, Ordering::SeqCst);
                value
            })
        };

        let (_, root) = shown.recv().await.unwrap();
        find_button(&root, "No").click();
        assert_eq!(task.await.unwrap().unwrap(), "no");
        assert_eq!(resolved.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_prompt_resolves_with_edited_text() {
        let (dialogs, mut shown) = capturing_dialogs();

        let task = {
            let dialogs = dialogs.clone();
            tokio::spawn(async move { dialogs.prompt("Name?", "x").await })
        };

        let (_, root) = shown.recv().await.unwrap();
        let input = find_text(&root);
        assert_eq!(input.text(), "x");
        input.set_text("y");
        find_button(&root, "OK").click();
        assert_eq!(task.await.unwrap().unwrap(), "y");
    }

    #[tokio::test]
    async fn test_prompt_or_cancel_accept_and_reject() {
        let (dialogs, mut shown) = capturing_dialogs();

        let task = {
            let dialogs = dialogs.clone();
            tokio::spawn(async move { dialogs.prompt_or_cancel("Name?", "x").await })
        };
        let (_, root) = shown.recv().await.unwrap();
        find_text(&root).set_text("y");
        find_button(&root, "OK").click();
        assert_eq!(task.await.unwrap().unwrap(), Some("y".to_string()));

        let task = {
            let dialogs = dialogs.clone();
            tokio::spawn(async move { dialogs.prompt_or_cancel("Name?", "x").await })
        };
        let (_, root) = shown.recv().await.unwrap();
        find_text(&root).set_text("ignored");
        find_button(&root, "Cancel").click();
        assert_eq!(task.await.unwrap().unwrap(), None);
    }

    #[tokio::test]
    async fn test_password_answer_carries_text_and_encoding() {
        let (dialogs, mut shown) = capturing_dialogs();

        let task = {
            let dialogs = dialogs.clone();
            tokio::spawn(async move { dialogs.password("Passphrase?", &Utf8).await })
        };

        let (_, root) = shown.recv().await.unwrap();
        find_password(&root).set_text("secret");
        find_button(&root, "OK").click();

        let answer = task.await.unwrap().unwrap();
        assert_eq!(answer.text, "secret");
        assert_eq!(answer.encoded, Utf8.encode("secret"));
    }

    #[tokio::test]
    async fn test_select_one_returns_queried_selection() {
        let (dialogs, mut shown) = capturing_dialogs();

        let task = {
            let dialogs = dialogs.clone();
            tokio::spawn(async move {
                dialogs
                    .select_one(
                        "Pick one",
                        SelectOneOptions::new(["A", "B", "C"]).default_value("B"),
                    )
                    .await
            })
        };

        let (_, root) = shown.recv().await.unwrap();
        assert!(find_radio(&root, "B").is_checked());
        find_radio(&root, "A").select();
        find_button(&root, "Select").click();
        assert_eq!(task.await.unwrap().unwrap(), Some("A".to_string()));
    }

    #[tokio::test]
    async fn test_select_one_without_selection_is_none() {
        let (dialogs, mut shown) = capturing_dialogs();

        let task = {
            let dialogs = dialogs.clone();
            tokio::spawn(async move {
                dialogs
                    .select_one("Pick one", SelectOneOptions::new(["A", "B"]))
                    .await
            })
        };

        let (_, root) = shown.recv().await.unwrap();
        find_button(&root, "Select").click();
        assert_eq!(task.await.unwrap().unwrap(), None);
    }

    #[tokio::test]
    async fn test_select_one_option_callback_observes_selections() {
        let (dialogs, mut shown) = capturing_dialogs();
        let selections = Arc::new(AtomicUsize::new(0));

        let task = {
            let dialogs = dialogs.clone();
            let selections = selections.clone();
            tokio::spawn(async move {
                dialogs
                    .select_one(
                        "Pick one",
                        SelectOneOptions::new(["A", "B"]).on_option(move |_| {
                            selections.fetch_add(1, Ordering::SeqCst);
                        }),
                    )
                    .await
            })
        };

        let (_, root) = shown.recv().await.unwrap();
        find_radio(&root, "A").select();
        find_radio(&root, "B").select();
        find_button(&root, "Select").click();
        assert_eq!(task.await.unwrap().unwrap(), Some("B".to_string()));
        assert_eq!(selections.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_select_many_returns_labels_in_option_order() {
        let (dialogs, mut shown) = capturing_dialogs();

        let task = {
            let dialogs = dialogs.clone();
            tokio::spawn(async move {
                dialogs
                    .select_many("Pick any", SelectManyOptions::new(["A", "B", "C"]))
                    .await
            })
        };

        let (_, root) = shown.recv().await.unwrap();
        find_check(&root, "C").toggle();
        find_check(&root, "A").toggle();
        find_button(&root, "Select").click();
        assert_eq!(task.await.unwrap().unwrap(), vec!["A", "C"]);
    }

    #[tokio::test]
    async fn test_select_many_nothing_checked_is_empty() {
        let (dialogs, mut shown) = capturing_dialogs();

        let task = {
            let dialogs = dialogs.clone();
            tokio::spawn(async move {
                dialogs
                    .select_many("Pick any", SelectManyOptions::new(["A", "B"]))
                    .await
            })
        };

        let (_, root) = shown.recv().await.unwrap();
        find_button(&root, "Select").click();
        assert!(task.await.unwrap().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_discarding_host_abandons_fixed_choice_dialog() {
        init_tracing();
        let dialogs = Dialogs::new(Arc::new(NullHost));

        let result = dialogs.yes_no("Anyone there?", 1, 2).await;
        assert!(matches!(result, Err(DialogError::Abandoned)));
    }

    #[tokio::test]
    async fn test_custom_strings_reach_the_buttons() {
        struct German;

        impl StringResources for German {
            fn label(&self, key: LabelKey) -> String {
                match key {
                    LabelKey::Yes => "Ja".to_string(),
                    LabelKey::No => "Nein".to_string(),
                    other => DefaultStrings.label(other),
                }
            }
        }

        init_tracing();
        let (tx, mut shown) = mpsc::unbounded_channel();
        let dialogs = Dialogs::with_strings(
            Arc::new(CapturingHost { shown: tx }),
            Arc::new(German),
        );

        let task = {
            let dialogs = dialogs.clone();
            tokio::spawn(async move { dialogs.yes_no("Weiter?", true, false).await })
        };

        let (_, root) = shown.recv().await.unwrap();
        find_button(&root, "Ja").click();
        assert!(task.await.unwrap().unwrap());
    }

    #[tokio::test]
    async fn test_display_failure_surfaces_as_error() {
        struct FailingHost;

        #[async_trait]
        impl DialogHost for FailingHost {
            async fn display(&self, _message: &str, _root: WidgetNode) -> anyhow::Result<()> {
                Err(anyhow!("no surface attached"))
            }
        }

        init_tracing();
        let dialogs = Dialogs::new(Arc::new(FailingHost));
        let result = dialogs.ok("hello").await;
        assert!(matches!(result, Err(DialogError::Display(_))));
    }

    #[tokio::test]
    async fn test_concurrent_dialogs_stay_independent() {
        let (dialogs, mut shown) = capturing_dialogs();

        let first = {
            let dialogs = dialogs.clone();
            tokio::spawn(async move { dialogs.yes_no("first", "1y", "1n").await })
        };
        let (_, first_root) = shown.recv().await.unwrap();

        let second = {
            let dialogs = dialogs.clone();
            tokio::spawn(async move { dialogs.yes_no("second", "2y", "2n").await })
        };
        let (_, second_root) = shown.recv().await.unwrap();

        // Answer them in reverse order; each resolves from its own tree.
        find_button(&second_root, "No").click();
        assert_eq!(second.await.unwrap().unwrap(), "2n");
        find_button(&first_root, "Yes").click();
        assert_eq!(first.await.unwrap().unwrap(), "1y");
    }
}
