//! Host plugin contract for Sidekick extensions.
//!
//! The host application owns event dispatch, toast rendering and the
//! update-check plumbing; this crate defines the seams the Sidekick
//! extensions consume:
//!
//! - [`HostEvent`]: the lifecycle event wire shape delivered to plugins
//! - [`ToastClient`]: the asynchronous toast-display capability
//! - [`ConfigErrorStore`]: the accumulator for configuration load errors
//!
//! All capability traits are `async_trait` object-safe so hosts can hand
//! extensions `Arc<dyn …>` handles.

mod config_errors;
mod error;
mod event;
mod toast;

pub use config_errors::{ConfigErrorBuffer, ConfigErrorStore, ConfigLoadError};
pub use error::{HostError, HostResult};
pub use event::{EventProperties, HostEvent, SessionInfo, SESSION_CREATED};
pub use toast::{ToastClient, ToastRequest, ToastVariant};
