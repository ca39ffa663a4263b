use figura_wire::{RecordWriter, TokenReader, WireError};

use super::Common;

/// Rectangle leaf shape.
#[derive(Debug, Clone, PartialEq)]
pub struct Rect {
    pub common: Common,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub fn new(x: i32, y: i32, color: impl Into<String>, width: i32, height: i32) -> Self {
        Self { common: Common::new(x, y, color), width, height }
    }

    /// Appends the draw description, or nothing when hidden.
    pub(crate) fn describe(&self, out: &mut String) {
        if self.common.visible {
            out.push_str(&format!(
                "Drawing Rectangle at ({},{}) with width {} and height {} and color {}\n",
                self.common.pos.x,
                self.common.pos.y,
                self.width,
                self.height,
                self.common.color,
            ));
        }
    }

    pub(crate) fn write_fields(&self, w: &mut RecordWriter) {
        self.common.write_fields(w);
        w.field(self.width).field(self.height).end_record();
    }

    pub(crate) fn read_fields(r: &mut TokenReader) -> Result<Self, WireError> {
        let common = Common::read_fields(r)?;
        let width = r.read_i32()?;
        let height = r.read_i32()?;
        Ok(Self { common, width, height })
    }
}
