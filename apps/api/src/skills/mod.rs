//! Skill recognition: corpus loading, pattern compilation, and text matching.
//!
//! The corpus is process-wide shared state. It is loaded once at startup and
//! replaced wholesale on an explicit reload; see `corpus::SkillIndexHandle`.

pub mod corpus;
pub mod matcher;

pub use corpus::{SkillIndex, SkillIndexHandle};
