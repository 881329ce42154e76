//! Data models for the prompt gallery.
//!
//! These models match the remote dataset's JSON records field for field.

mod record;
mod tag;

pub use record::*;
pub use tag::*;
