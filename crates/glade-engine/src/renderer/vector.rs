//! Lyon-based tessellating painter.
//!
//! Turns every paint call into triangles in a flat vertex buffer
//! (`x, y, r, g, b, a` per vertex) so a GPU host can draw the backdrop
//! with a single colored-triangle pipeline.

use bytemuck::{Pod, Zeroable};
use glam::Vec2;
use lyon::math::point;
use lyon::path::Path;
use lyon::tessellation::{
    BuffersBuilder, FillOptions, FillTessellator, FillVertex, FillVertexConstructor, VertexBuffers,
};

use super::traits::{Color, GradientStop, Painter};
use crate::api::types::SurfaceSize;

/// Per-vertex data for colored triangles.
/// 6 floats = 24 bytes per vertex.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, Pod, Zeroable)]
pub struct VectorVertex {
    pub x: f32,
    pub y: f32,
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl VectorVertex {
    /// Number of floats per vertex.
    pub const FLOATS: usize = 6;
    /// Stride in bytes.
    pub const STRIDE_BYTES: usize = Self::FLOATS * 4; // 24

    fn at(p: Vec2, c: Color) -> Self {
        Self {
            x: p.x,
            y: p.y,
            r: c.r,
            g: c.g,
            b: c.b,
            a: c.a,
        }
    }
}

/// Vertex constructor for lyon fill tessellation.
struct FillVertexCtor {
    color: Color,
}

impl FillVertexConstructor<VectorVertex> for FillVertexCtor {
    fn new_vertex(&mut self, vertex: FillVertex) -> VectorVertex {
        let p = vertex.position();
        VectorVertex::at(Vec2::new(p.x, p.y), self.color)
    }
}

/// Painter producing a triangle-list vertex buffer.
pub struct VectorPainter {
    size: SurfaceSize,
    fill_tess: FillTessellator,
    geometry: VertexBuffers<VectorVertex, u32>,
    vertices: Vec<VectorVertex>,
}

impl VectorPainter {
    pub fn new() -> Self {
        Self {
            size: SurfaceSize::default(),
            fill_tess: FillTessellator::new(),
            geometry: VertexBuffers::new(),
            vertices: Vec::with_capacity(16384),
        }
    }

    pub fn size(&self) -> SurfaceSize {
        self.size
    }

    /// Number of vertices emitted this frame.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn vertices(&self) -> &[VectorVertex] {
        &self.vertices
    }

    /// The vertex buffer as raw floats, ready for upload.
    pub fn as_floats(&self) -> &[f32] {
        bytemuck::cast_slice(&self.vertices)
    }

    /// Flush indexed geometry to the flat buffer as triangle list.
    fn flush_geometry(&mut self) {
        for idx in &self.geometry.indices {
            self.vertices.push(self.geometry.vertices[*idx as usize]);
        }
        self.geometry.vertices.clear();
        self.geometry.indices.clear();
    }

    fn fill_path(&mut self, path: &Path, color: Color) {
        let result = self.fill_tess.tessellate_path(
            path,
            &FillOptions::tolerance(0.5),
            &mut BuffersBuilder::new(&mut self.geometry, FillVertexCtor { color }),
        );

        match result {
            Ok(()) => self.flush_geometry(),
            Err(e) => {
                log::warn!("VectorPainter: tessellation failed: {:?}", e);
                self.geometry.vertices.clear();
                self.geometry.indices.clear();
            }
        }
    }

    /// Two triangles spanning a horizontal band with top/bottom colors.
    fn push_band(&mut self, width: f32, y0: f32, c0: Color, y1: f32, c1: Color) {
        let tl = VectorVertex::at(Vec2::new(0.0, y0), c0);
        let tr = VectorVertex::at(Vec2::new(width, y0), c0);
        let bl = VectorVertex::at(Vec2::new(0.0, y1), c1);
        let br = VectorVertex::at(Vec2::new(width, y1), c1);
        self.vertices.extend_from_slice(&[tl, tr, br, tl, br, bl]);
    }
}

impl Default for VectorPainter {
    fn default() -> Self {
        Self::new()
    }
}

impl Painter for VectorPainter {
    fn set_size(&mut self, size: SurfaceSize) {
        self.size = size;
    }

    fn begin_frame(&mut self) {
        self.vertices.clear();
    }

    fn fill_vertical_gradient(&mut self, size: SurfaceSize, stops: &[GradientStop]) {
        let (Some(first), Some(last)) = (stops.first(), stops.last()) else {
            return;
        };
        if size.is_empty() {
            return;
        }

        // Solid color above the first stop and below the last one.
        if first.offset > 0.0 {
            self.push_band(size.width, 0.0, first.color, first.offset * size.height, first.color);
        }
        for pair in stops.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            if b.offset > a.offset {
                self.push_band(
                    size.width,
                    a.offset * size.height,
                    a.color,
                    b.offset * size.height,
                    b.color,
                );
            }
        }
        if last.offset < 1.0 {
            self.push_band(size.width, last.offset * size.height, last.color, size.height, last.color);
        }
    }

    fn fill_rect(&mut self, pos: Vec2, width: f32, height: f32, color: Color) {
        let points = [
            pos,
            Vec2::new(pos.x + width, pos.y),
            Vec2::new(pos.x + width, pos.y + height),
            Vec2::new(pos.x, pos.y + height),
        ];
        self.fill_polygon(&points, color);
    }

    fn fill_polygon(&mut self, points: &[Vec2], color: Color) {
        if points.len() < 3 {
            return;
        }

        let mut builder = Path::builder();
        builder.begin(point(points[0].x, points[0].y));
        for p in &points[1..] {
            builder.line_to(point(p.x, p.y));
        }
        builder.close();
        let path = builder.build();

        self.fill_path(&path, color);
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color) {
        if radius <= 0.0 {
            return;
        }

        let mut builder = Path::builder();
        builder.add_circle(point(center.x, center.y), radius, lyon::path::Winding::Positive);
        let path = builder.build();

        self.fill_path(&path, color);
    }
}
