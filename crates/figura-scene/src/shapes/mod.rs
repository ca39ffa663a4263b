//! Shape variants.
//!
//! Responsibilities:
//! - keep per-variant state and record field order isolated per shape file
//! - share the common attribute block via [`Common`]
//!
//! Dispatch over the variant set lives in [`crate::shape`].

mod circle;
mod common;
mod group;
mod rect;

pub use circle::Circle;
pub use common::{Common, DEFAULT_SIZE};
pub use group::Group;
pub use rect::Rect;
