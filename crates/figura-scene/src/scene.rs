use figura_wire::{RecordWriter, TokenReader, WireError};

use crate::shape::Shape;
use crate::shapes::Group;

/// Top-level ordered shape collection. Owned by the driver; not itself a
/// shape.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Scene {
    shapes: Vec<Shape>,
}

/// Result of a bulk load.
///
/// A malformed record stops the load early; everything read before it is
/// kept in `scene` and the failure is reported in `error`.
#[derive(Debug)]
pub struct SceneLoad {
    pub scene: Scene,
    pub error: Option<WireError>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, shape: Shape) {
        self.shapes.push(shape);
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Shape> {
        self.shapes.get_mut(index)
    }

    /// The most recently added shape.
    pub fn last_mut(&mut self) -> Option<&mut Shape> {
        self.shapes.last_mut()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Shape> {
        self.shapes.iter_mut()
    }

    pub fn clear(&mut self) {
        self.shapes.clear();
    }

    /// Pops the top `n` shapes (most recently added first) into a fresh
    /// group, then pushes the group. Each shape moves between containers
    /// in one step — never observable as a duplicate or as absent from
    /// both. The group is pushed even when the scene held fewer than `n`
    /// shapes; the returned count says how many were actually grouped.
    pub fn group_top(&mut self, n: usize) -> usize {
        let mut group = Group::new();
        let mut moved = 0;
        while moved < n {
            match self.shapes.pop() {
                Some(shape) => {
                    group.push(shape);
                    moved += 1;
                }
                None => break,
            }
        }
        self.shapes.push(group.into());
        moved
    }

    /// Concatenated draw descriptions of every shape, in order.
    pub fn describe(&self) -> String {
        let mut out = String::new();
        for shape in &self.shapes {
            shape.describe(&mut out);
        }
        out
    }

    /// Serializes every shape back-to-back: no leading count and no
    /// terminator. Record boundaries are implied by each variant's fixed
    /// field count.
    pub fn write_all(&self) -> String {
        let mut w = RecordWriter::new();
        for shape in &self.shapes {
            shape.write(&mut w);
        }
        w.finish()
    }

    /// Reads records until a clean end of stream.
    ///
    /// Every tag the dispatcher knows is accepted at top level, groups
    /// included. A malformed record stops the load: the shapes already
    /// read stay in the returned scene and the error is reported
    /// alongside, with a warning logged.
    pub fn read_all(src: &str) -> SceneLoad {
        let mut r = TokenReader::new(src);
        let mut scene = Scene::new();
        let error = loop {
            let Some(tag) = r.next_token() else { break None };
            match Shape::read(tag, &mut r) {
                Ok(shape) => scene.push(shape),
                Err(err) => {
                    log::warn!("scene load stopped early: {err}");
                    break Some(err);
                }
            }
        };
        SceneLoad { scene, error }
    }
}

#[cfg(test)]
mod scene_tests {
    use super::*;
    use crate::shapes::{Circle, Rect};

    fn two_leaf_scene() -> Scene {
        let mut scene = Scene::new();
        scene.push(Circle::new(0, 0, "red", 5).into());
        scene.push(Rect::new(10, 10, "blue", 4, 6).into());
        scene
    }

    #[test]
    fn write_all_emits_back_to_back_records() {
        assert_eq!(
            two_leaf_scene().write_all(),
            "C 0 0 red 1 10 5\nR 10 10 blue 1 10 4 6\n",
        );
    }

    #[test]
    fn read_all_reproduces_the_two_leaf_scene() {
        let load = Scene::read_all("C 0 0 red 1 10 5\nR 10 10 blue 1 10 4 6\n");
        assert!(load.error.is_none());
        assert_eq!(load.scene, two_leaf_scene());
    }

    #[test]
    fn read_all_accepts_an_empty_stream() {
        let load = Scene::read_all("  \n ");
        assert!(load.error.is_none());
        assert!(load.scene.is_empty());
    }

    #[test]
    fn read_all_reconstructs_top_level_groups() {
        let mut scene = Scene::new();
        scene.push(Circle::new(1, 1, "x", 2).into());
        scene.push(Rect::new(2, 2, "y", 3, 4).into());
        scene.group_top(2);
        scene.push(Circle::new(9, 9, "z", 1).into());

        let load = Scene::read_all(&scene.write_all());
        assert!(load.error.is_none());
        assert_eq!(load.scene, scene);
    }

    #[test]
    fn read_all_keeps_the_prefix_on_a_malformed_record() {
        let load = Scene::read_all("C 0 0 red 1 10 5\nR 10 10 blue 1 oops 4 6\n");
        let err = load.error.expect("load should report the bad record");
        assert_eq!((err.line, err.col), (2, 16));
        assert_eq!(load.scene.len(), 1);
        assert_eq!(load.scene.shapes()[0], Circle::new(0, 0, "red", 5).into());
    }

    #[test]
    fn read_all_rejects_unknown_top_level_tags() {
        let load = Scene::read_all("C 0 0 red 1 10 5\nTriangle 1 2 3\n");
        assert!(load.error.is_some());
        assert_eq!(load.scene.len(), 1);
    }

    #[test]
    fn group_top_moves_shapes_in_pop_order() {
        let mut scene = two_leaf_scene();
        let moved = scene.group_top(2);
        assert_eq!(moved, 2);
        assert_eq!(scene.len(), 1);
        let Shape::Group(group) = &scene.shapes()[0] else { panic!("expected group") };
        // The rectangle was on top of the scene, so it comes first.
        assert_eq!(group.children()[0], Rect::new(10, 10, "blue", 4, 6).into());
        assert_eq!(group.children()[1], Circle::new(0, 0, "red", 5).into());
    }

    #[test]
    fn group_top_caps_at_the_scene_size() {
        let mut scene = two_leaf_scene();
        assert_eq!(scene.group_top(5), 2);
        assert_eq!(scene.len(), 1);
    }

    #[test]
    fn describe_concatenates_in_scene_order() {
        assert_eq!(
            two_leaf_scene().describe(),
            "Drawing Circle at (0,0) with radius 5 and color red\n\
             Drawing Rectangle at (10,10) with width 4 and height 6 and color blue\n",
        );
    }
}
