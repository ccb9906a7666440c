//! Composable dialog building blocks with awaitable results
//!
//! The crate assembles dialogs out of primitive controls (buttons, radio
//! buttons, check boxes, text and password inputs) and composite widgets,
//! then bridges the host's eventual UI callback into a single awaited
//! value: each dialog creates one completion token, wires every terminal
//! action to settle it exactly once, hands the widget tree to a
//! [`DialogHost`] for rendering, and suspends the caller until settlement.
//!
//! ```ignore
//! let dialogs = Dialogs::new(host);
//! if dialogs.yes_no("Overwrite the file?", true, false).await? {
//!     // ...
//! }
//! ```
//!
//! Rendering, focus handling and event transport belong to the host; this
//! crate only defines the tree and the completion protocol.

pub mod controls;
pub mod dialog;
pub mod encoding;
pub mod error;
pub mod host;
pub mod resources;
pub mod token;
pub mod widgets;

pub use dialog::{Dialogs, PasswordAnswer, SelectManyOptions, SelectOneOptions};
pub use error::{DialogError, DialogResult};
pub use host::{DialogHost, NullHost};
pub use token::{CompletionToken, Pending};
pub use widgets::WidgetNode;
