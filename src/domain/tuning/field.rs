use crate::domain::Vector2;
use crate::domain::entity::WorldBounds;

/// Field geometry in world units (y grows downward).
///
/// The canvas is the whole playable world. The field sits inside it with a
/// margin of `field_height_offset` above and below; each end of the field is
/// an endzone `endzone_height` deep.

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldTuning {
    pub canvas_width: f32,
    pub canvas_height: f32,

    /// Vertical margin between the canvas edge and the field.
    pub field_height_offset: f32,
    /// Full field length, endzones included.
    pub field_height: f32,
    pub endzone_height: f32,

    pub field_min_x: f32,
    pub field_max_x: f32,
    pub field_min_y: f32,
    pub field_max_y: f32,
}

impl Default for FieldTuning {
    fn default() -> Self {
        let canvas_width = 600.0;
        let canvas_height = 1000.0;
        let field_height_offset = 20.0;
        let side_margin = 20.0;
        Self {
            canvas_width,
            canvas_height,
            field_height_offset,
            field_height: canvas_height - 2.0 * field_height_offset,
            endzone_height: 160.0,
            field_min_x: side_margin,
            field_max_x: canvas_width - side_margin,
            field_min_y: field_height_offset,
            field_max_y: canvas_height - field_height_offset,
        }
    }
}

impl FieldTuning {
    /// The world rectangle every entity is clamped to.
    pub fn world(&self) -> WorldBounds {
        WorldBounds {
            min_x: 0.0,
            max_x: self.canvas_width,
            min_y: 0.0,
            max_y: self.canvas_height,
        }
    }

    pub fn center(&self) -> Vector2 {
        Vector2::new(
            (self.field_min_x + self.field_max_x) / 2.0,
            (self.field_min_y + self.field_max_y) / 2.0,
        )
    }
}
