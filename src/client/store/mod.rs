//! Page-lifetime UI state shared through Dioxus context.

pub mod loader;
pub mod notify;
pub mod user;

pub use loader::{Loader, LoaderState};
pub use notify::{Notifier, Toast, ToastLevel, ToastStack};
pub use user::{ProfileFetch, UserState};
