//! DOM feedback helpers.
//!
//! - [`FeedbackRenderer`] - error/success/loading blocks
//! - [`ListSelector`] - single-selection highlighting

mod feedback;
mod selection;

pub use feedback::{FeedbackKind, FeedbackRenderer};
pub use selection::ListSelector;
