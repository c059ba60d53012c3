pub mod format;

mod sleep;

pub use format::{capitalize, format_moeda};
pub use sleep::sleep;
