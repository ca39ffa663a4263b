//! Figura scene crate.
//!
//! This crate owns the drawable object model used by higher layers:
//! the leaf shapes, the group aggregate, the top-level scene, and their
//! textual record serialization.

pub mod coords;
pub mod logging;
pub mod persist;
pub mod scene;
pub mod shape;
pub mod shapes;

pub use scene::{Scene, SceneLoad};
pub use shape::Shape;
