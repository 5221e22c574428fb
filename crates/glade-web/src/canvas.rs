use std::f64::consts::TAU;

use glade_engine::{Color, GradientStop, Painter, SurfaceSize};
use glam::Vec2;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

/// CSS `rgba()` string for a color. Alpha keeps three decimals.
pub fn css_color(color: Color) -> String {
    let [r, g, b, _] = color.to_rgba8();
    format!("rgba({}, {}, {}, {:.3})", r, g, b, color.a.clamp(0.0, 1.0))
}

/// Canvas2D-backed drawable surface.
pub struct CanvasPainter {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl CanvasPainter {
    pub fn new(canvas: HtmlCanvasElement, ctx: CanvasRenderingContext2d) -> Self {
        Self { canvas, ctx }
    }
}

impl Painter for CanvasPainter {
    fn set_size(&mut self, size: SurfaceSize) {
        self.canvas.set_width(size.width.max(0.0) as u32);
        self.canvas.set_height(size.height.max(0.0) as u32);
    }

    fn fill_vertical_gradient(&mut self, size: SurfaceSize, stops: &[GradientStop]) {
        let gradient = self
            .ctx
            .create_linear_gradient(0.0, 0.0, 0.0, size.height as f64);
        for stop in stops {
            if let Err(e) = gradient.add_color_stop(stop.offset, &css_color(stop.color)) {
                log::warn!("canvas: bad gradient stop {:?}: {:?}", stop, e);
                return;
            }
        }
        self.ctx.set_fill_style_canvas_gradient(&gradient);
        self.ctx
            .fill_rect(0.0, 0.0, size.width as f64, size.height as f64);
    }

    fn fill_rect(&mut self, pos: Vec2, width: f32, height: f32, color: Color) {
        self.ctx.set_fill_style_str(&css_color(color));
        self.ctx
            .fill_rect(pos.x as f64, pos.y as f64, width as f64, height as f64);
    }

    fn fill_polygon(&mut self, points: &[Vec2], color: Color) {
        let [first, rest @ ..] = points else {
            return;
        };
        if rest.len() < 2 {
            return;
        }

        self.ctx.begin_path();
        self.ctx.move_to(first.x as f64, first.y as f64);
        for p in rest {
            self.ctx.line_to(p.x as f64, p.y as f64);
        }
        self.ctx.close_path();
        self.ctx.set_fill_style_str(&css_color(color));
        self.ctx.fill();
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color) {
        if radius <= 0.0 {
            return;
        }

        self.ctx.begin_path();
        if let Err(e) = self
            .ctx
            .arc(center.x as f64, center.y as f64, radius as f64, 0.0, TAU)
        {
            log::warn!("canvas: arc failed: {:?}", e);
            return;
        }
        self.ctx.set_fill_style_str(&css_color(color));
        self.ctx.fill();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn css_color_formats_rgba() {
        assert_eq!(css_color(Color::new(1.0, 0.0, 0.0, 1.0)), "rgba(255, 0, 0, 1.000)");
        assert_eq!(css_color(Color::new(1.0, 0.8, 0.4, 0.25)), "rgba(255, 204, 102, 0.250)");
    }

    #[test]
    fn css_color_clamps_overshoot() {
        assert_eq!(css_color(Color::new(0.0, 0.0, 0.0, 1.01)), "rgba(0, 0, 0, 1.000)");
        assert_eq!(css_color(Color::new(0.0, 0.0, 0.0, -0.01)), "rgba(0, 0, 0, 0.000)");
    }
}
