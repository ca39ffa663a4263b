use figura_wire::{RecordWriter, TokenReader, WireError};

use crate::coords::Point;

/// Size a freshly created shape starts with.
pub const DEFAULT_SIZE: i32 = 10;

/// Attributes every shape variant carries.
#[derive(Debug, Clone, PartialEq)]
pub struct Common {
    pub pos: Point,
    pub color: String,
    pub visible: bool,
    /// Generic scale attribute. Distinct from per-variant geometry:
    /// resizing sets this field and never rescales radius or extents.
    pub size: i32,
}

impl Common {
    pub fn new(x: i32, y: i32, color: impl Into<String>) -> Self {
        Self {
            pos: Point::new(x, y),
            color: color.into(),
            visible: true,
            size: DEFAULT_SIZE,
        }
    }

    /// Writes the shared field block: x, y, color, visible, size.
    pub(crate) fn write_fields(&self, w: &mut RecordWriter) {
        w.field(self.pos.x)
            .field(self.pos.y)
            .field(&self.color)
            .field(self.visible as u8)
            .field(self.size);
    }

    /// Reads the shared field block in write order.
    pub(crate) fn read_fields(r: &mut TokenReader) -> Result<Self, WireError> {
        let x = r.read_i32()?;
        let y = r.read_i32()?;
        let color = r.read_word()?;
        let visible = r.read_flag()?;
        let size = r.read_i32()?;
        Ok(Self { pos: Point::new(x, y), color, visible, size })
    }
}
