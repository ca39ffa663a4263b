use figura_wire::{RecordWriter, TokenReader, WireError};

use crate::coords::Point;
use crate::shapes::{Circle, Common, Group, Rect};

/// Wire type tags. Must stay 1:1 with the variant set — existing scene
/// files depend on them.
pub const TAG_CIRCLE: &str = "C";
pub const TAG_RECT: &str = "R";
pub const TAG_GROUP: &str = "Composite";

/// Maximum group nesting depth accepted when reading a record stream.
/// Writing recurses over the owned tree, which is cycle-free by
/// construction (children are moved in, never shared).
pub const MAX_DEPTH: usize = 64;

/// A drawable shape: a leaf variant or a group of owned children.
///
/// Extending the set:
/// - add a new variant module under `shapes::*`
/// - add a variant here plus a wire tag
/// - extend the dispatch in [`Shape::write`] / [`Shape::read`]
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Circle(Circle),
    Rect(Rect),
    Group(Group),
}

impl Shape {
    /// The attribute block shared by every variant.
    pub fn common(&self) -> &Common {
        match self {
            Shape::Circle(c) => &c.common,
            Shape::Rect(r) => &r.common,
            Shape::Group(g) => &g.common,
        }
    }

    fn common_mut(&mut self) -> &mut Common {
        match self {
            Shape::Circle(c) => &mut c.common,
            Shape::Rect(r) => &mut r.common,
            Shape::Group(g) => &mut g.common,
        }
    }

    /// Shifts the shape by the given delta. Groups also shift every
    /// child, recursively, in order.
    pub fn translate(&mut self, dx: i32, dy: i32) {
        match self {
            Shape::Group(g) => g.translate(dx, dy),
            _ => self.common_mut().pos += Point::new(dx, dy),
        }
    }

    /// Overwrites the color label. Any text is accepted. Recoloring a
    /// group changes only the group's own label; children keep theirs.
    pub fn set_color(&mut self, color: impl Into<String>) {
        self.common_mut().color = color.into();
    }

    /// Overwrites the generic size attribute. Geometry (radius, width,
    /// height) is never touched. Groups also resize every child.
    pub fn resize(&mut self, size: i32) {
        match self {
            Shape::Group(g) => g.resize(size),
            _ => self.common_mut().size = size,
        }
    }

    /// Flips the visibility flag. Groups also flip every child, so each
    /// descendant toggles exactly once.
    pub fn toggle_visibility(&mut self) {
        match self {
            Shape::Group(g) => g.toggle_visibility(),
            _ => {
                let common = self.common_mut();
                common.visible = !common.visible;
            }
        }
    }

    /// Appends this shape's draw description, or nothing when hidden.
    /// A group appends its children's descriptions in order.
    pub fn describe(&self, out: &mut String) {
        match self {
            Shape::Circle(c) => c.describe(out),
            Shape::Rect(r) => r.describe(out),
            Shape::Group(g) => g.describe(out),
        }
    }

    pub fn description(&self) -> String {
        let mut out = String::new();
        self.describe(&mut out);
        out
    }

    /// Writes the shape's record: tag, shared fields, variant geometry.
    /// A group writes its tag and child count, then every child record.
    pub fn write(&self, w: &mut RecordWriter) {
        match self {
            Shape::Circle(c) => {
                w.field(TAG_CIRCLE);
                c.write_fields(w);
            }
            Shape::Rect(r) => {
                w.field(TAG_RECT);
                r.write_fields(w);
            }
            Shape::Group(g) => {
                w.field(TAG_GROUP);
                g.write_fields(w);
            }
        }
    }

    /// Reconstructs one shape from `r`. The caller has already consumed
    /// `tag`; the matched variant reads its fields in write order. An
    /// unknown tag is an error — its field count is unknown, so skipping
    /// it would desync the token stream.
    pub fn read(tag: &str, r: &mut TokenReader) -> Result<Shape, WireError> {
        Self::read_at(tag, r, 0)
    }

    pub(crate) fn read_at(tag: &str, r: &mut TokenReader, depth: usize) -> Result<Shape, WireError> {
        if depth > MAX_DEPTH {
            return Err(r.error(format!("group nesting exceeds {MAX_DEPTH} levels")));
        }
        match tag {
            TAG_CIRCLE => Ok(Shape::Circle(Circle::read_fields(r)?)),
            TAG_RECT => Ok(Shape::Rect(Rect::read_fields(r)?)),
            TAG_GROUP => Ok(Shape::Group(Group::read_fields(r, depth)?)),
            other => Err(r.error(format!("unknown shape tag {other:?}"))),
        }
    }
}

impl From<Circle> for Shape {
    fn from(c: Circle) -> Self {
        Shape::Circle(c)
    }
}

impl From<Rect> for Shape {
    fn from(r: Rect) -> Self {
        Shape::Rect(r)
    }
}

impl From<Group> for Shape {
    fn from(g: Group) -> Self {
        Shape::Group(g)
    }
}
