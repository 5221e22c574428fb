use glam::Vec2;

use super::traits::{Color, GradientStop, Painter};
use crate::api::types::SurfaceSize;

/// A single recorded paint call.
#[derive(Debug, Clone, PartialEq)]
pub enum PaintCommand {
    Gradient { size: SurfaceSize, stops: Vec<GradientStop> },
    Rect { pos: Vec2, width: f32, height: f32, color: Color },
    Polygon { points: Vec<Vec2>, color: Color },
    Circle { center: Vec2, radius: f32, color: Color },
}

/// Painter that records commands instead of rasterizing them.
/// The command list is cleared at the start of every frame.
#[derive(Debug, Clone, Default)]
pub struct RecordingPainter {
    size: SurfaceSize,
    commands: Vec<PaintCommand>,
    frames: u64,
}

impl RecordingPainter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current bound pixel size.
    pub fn size(&self) -> SurfaceSize {
        self.size
    }

    /// Commands of the most recent frame.
    pub fn commands(&self) -> &[PaintCommand] {
        &self.commands
    }

    /// Number of frames begun on this painter.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn circles(&self) -> impl Iterator<Item = (Vec2, f32, Color)> + '_ {
        self.commands.iter().filter_map(|c| match c {
            PaintCommand::Circle { center, radius, color } => Some((*center, *radius, *color)),
            _ => None,
        })
    }

    pub fn polygons(&self) -> impl Iterator<Item = (&[Vec2], Color)> + '_ {
        self.commands.iter().filter_map(|c| match c {
            PaintCommand::Polygon { points, color } => Some((points.as_slice(), *color)),
            _ => None,
        })
    }

    pub fn rects(&self) -> impl Iterator<Item = (Vec2, f32, f32, Color)> + '_ {
        self.commands.iter().filter_map(|c| match c {
            PaintCommand::Rect { pos, width, height, color } => Some((*pos, *width, *height, *color)),
            _ => None,
        })
    }
}

impl Painter for RecordingPainter {
    fn set_size(&mut self, size: SurfaceSize) {
        self.size = size;
    }

    fn begin_frame(&mut self) {
        self.commands.clear();
        self.frames += 1;
    }

    fn fill_vertical_gradient(&mut self, size: SurfaceSize, stops: &[GradientStop]) {
        self.commands.push(PaintCommand::Gradient {
            size,
            stops: stops.to_vec(),
        });
    }

    fn fill_rect(&mut self, pos: Vec2, width: f32, height: f32, color: Color) {
        self.commands.push(PaintCommand::Rect { pos, width, height, color });
    }

    fn fill_polygon(&mut self, points: &[Vec2], color: Color) {
        if points.len() < 3 {
            return;
        }
        self.commands.push(PaintCommand::Polygon {
            points: points.to_vec(),
            color,
        });
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color) {
        if radius <= 0.0 {
            return;
        }
        self.commands.push(PaintCommand::Circle { center, radius, color });
    }
}
