use figura_wire::{RecordWriter, TokenReader, WireError};

use super::Common;

/// Circle leaf shape.
#[derive(Debug, Clone, PartialEq)]
pub struct Circle {
    pub common: Common,
    pub radius: i32,
}

impl Circle {
    pub fn new(x: i32, y: i32, color: impl Into<String>, radius: i32) -> Self {
        Self { common: Common::new(x, y, color), radius }
    }

    /// Appends the draw description, or nothing when hidden.
    pub(crate) fn describe(&self, out: &mut String) {
        if self.common.visible {
            out.push_str(&format!(
                "Drawing Circle at ({},{}) with radius {} and color {}\n",
                self.common.pos.x, self.common.pos.y, self.radius, self.common.color,
            ));
        }
    }

    pub(crate) fn write_fields(&self, w: &mut RecordWriter) {
        self.common.write_fields(w);
        w.field(self.radius).end_record();
    }

    pub(crate) fn read_fields(r: &mut TokenReader) -> Result<Self, WireError> {
        let common = Common::read_fields(r)?;
        let radius = r.read_i32()?;
        Ok(Self { common, radius })
    }
}
