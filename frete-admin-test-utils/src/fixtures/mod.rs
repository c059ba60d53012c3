//! Test fixtures for the mocked backend.
//!
//! - `data` - JSON bodies shaped like the backend's responses
//! - `api` - mock endpoints for common backend flows

pub mod api;
pub mod data;
