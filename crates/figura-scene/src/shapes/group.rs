use figura_wire::{RecordWriter, TokenReader, WireError};

use crate::coords::Point;
use crate::shape::Shape;

use super::Common;

/// Aggregate shape owning an ordered list of children.
///
/// The group's own attribute block is cosmetic: its visual output is the
/// concatenation of its children's descriptions in insertion order, and
/// only the child list goes on the wire. The group's `visible` flag does
/// not gate children — a child renders iff the child itself is visible.
#[derive(Debug, Clone, PartialEq)]
pub struct Group {
    pub common: Common,
    children: Vec<Shape>,
}

impl Default for Group {
    fn default() -> Self {
        Self::new()
    }
}

impl Group {
    pub fn new() -> Self {
        Self { common: Common::new(0, 0, "none"), children: Vec::new() }
    }

    /// Appends a child, taking ownership.
    pub fn push(&mut self, shape: Shape) {
        self.children.push(shape);
    }

    pub fn children(&self) -> &[Shape] {
        &self.children
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    pub(crate) fn translate(&mut self, dx: i32, dy: i32) {
        self.common.pos += Point::new(dx, dy);
        for child in &mut self.children {
            child.translate(dx, dy);
        }
    }

    pub(crate) fn resize(&mut self, size: i32) {
        self.common.size = size;
        for child in &mut self.children {
            child.resize(size);
        }
    }

    pub(crate) fn toggle_visibility(&mut self) {
        self.common.visible = !self.common.visible;
        for child in &mut self.children {
            child.toggle_visibility();
        }
    }

    pub(crate) fn describe(&self, out: &mut String) {
        for child in &self.children {
            child.describe(out);
        }
    }

    /// Writes the group header record (child count), then every child
    /// record recursively.
    pub(crate) fn write_fields(&self, w: &mut RecordWriter) {
        w.field(self.children.len()).end_record();
        for child in &self.children {
            child.write(w);
        }
    }

    /// Reads the declared child count, then that many tagged records.
    pub(crate) fn read_fields(r: &mut TokenReader, depth: usize) -> Result<Self, WireError> {
        let count = r.read_usize()?;
        let mut group = Group::new();
        for _ in 0..count {
            let tag = r.expect_token()?;
            group.children.push(Shape::read_at(tag, r, depth + 1)?);
        }
        Ok(group)
    }
}
