//! Error types for the dialog system

/// Result type for dialog operations
pub type DialogResult<T> = std::result::Result<T, DialogError>;

/// Dialog-specific error types
#[derive(Debug, thiserror::Error)]
pub enum DialogError {
    /// The widget was discarded by the host before any terminal action
    /// settled the dialog's completion token.
    #[error("dialog was discarded before any action settled it")]
    Abandoned,

    /// The host failed to display the dialog.
    #[error("failed to display dialog: {0}")]
    Display(#[from] anyhow::Error),
}
