//! Render boundary between the dialog core and its host
//!
//! The core only assembles widget trees; showing them (and routing user
//! interactions back into control methods like `click`, `select`, `toggle`
//! and `set_text`) is the host's job.

use crate::widgets::WidgetNode;
use anyhow::Result;
use async_trait::async_trait;
use tracing::debug;

/// Host-side display operation
///
/// Receives a completed widget tree plus a message string. The transport by
/// which events flow back is unspecified; the host fulfills it by invoking
/// the controls' interaction methods from its event-delivery context.
#[async_trait]
pub trait DialogHost: Send + Sync {
    /// Show `root` together with `message`
    async fn display(&self, message: &str, root: WidgetNode) -> Result<()>;
}

/// Host that logs and discards every dialog
///
/// Useful for embedding tests and headless runs. Dialogs shown here are
/// never answered, so fixed-choice dialogs resolve to
/// [`DialogError::Abandoned`](crate::error::DialogError::Abandoned).
#[derive(Debug, Clone, Copy, Default)]
pub struct NullHost;

#[async_trait]
impl DialogHost for NullHost {
    async fn display(&self, message: &str, _root: WidgetNode) -> Result<()> {
        debug!("Discarding dialog: {}", message);
        Ok(())
    }
}
