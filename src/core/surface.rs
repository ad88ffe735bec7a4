use glam::Vec2;

use super::color::Hsba;

/// Drawing sink for one frame of the field.
///
/// Positions are canvas pixels with the origin at the top-left; rotation is in
/// radians. Implemented by the browser canvas and by [`RecordingSurface`].
pub trait Surface {
    fn clear(&mut self, color: Hsba);

    /// Fill a closed polygon whose `vertices` are relative to `center`,
    /// rotated by `rotation` around it. No stroke.
    fn fill_polygon(&mut self, center: Vec2, rotation: f32, vertices: &[Vec2], color: Hsba);
}

#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    Clear(Hsba),
    Polygon {
        center: Vec2,
        rotation: f32,
        vertices: Vec<Vec2>,
        color: Hsba,
    },
}

/// Surface that keeps every command it receives.
#[derive(Clone, Debug, Default)]
pub struct RecordingSurface {
    pub commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn take(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }

    pub fn polygons(&self) -> impl Iterator<Item = (&Vec2, &Hsba)> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Polygon { center, color, .. } => Some((center, color)),
            DrawCommand::Clear(_) => None,
        })
    }

    pub fn clears(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Clear(_)))
            .count()
    }
}

impl Surface for RecordingSurface {
    fn clear(&mut self, color: Hsba) {
        self.commands.push(DrawCommand::Clear(color));
    }

    fn fill_polygon(&mut self, center: Vec2, rotation: f32, vertices: &[Vec2], color: Hsba) {
        self.commands.push(DrawCommand::Polygon {
            center,
            rotation,
            vertices: vertices.to_vec(),
            color,
        });
    }
}
