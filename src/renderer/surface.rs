//! Drawing surface abstraction
//!
//! The renderer talks to the outside world only through these primitives.
//! On wasm the implementation wraps the browser's 2D canvas context; tests
//! use a recording surface that captures the op stream instead.

/// Canvas-style 2D drawing primitives. Colors are CSS color strings.
pub trait Surface {
    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32);

    fn begin_path(&mut self);
    fn move_to(&mut self, x: f32, y: f32);
    fn line_to(&mut self, x: f32, y: f32);
    fn quadratic_to(&mut self, cx: f32, cy: f32, x: f32, y: f32);
    /// Circular arc from `start` to `end` radians, sweeping clockwise
    fn arc(&mut self, x: f32, y: f32, radius: f32, start: f32, end: f32);
    /// Full axis-aligned ellipse outline
    fn ellipse(&mut self, x: f32, y: f32, rx: f32, ry: f32);
    fn close_path(&mut self);
    fn fill(&mut self);
    fn stroke(&mut self);

    fn set_fill(&mut self, color: &str);
    fn set_stroke(&mut self, color: &str);
    fn set_fill_linear_gradient(
        &mut self,
        x0: f32,
        y0: f32,
        x1: f32,
        y1: f32,
        stops: &[(f32, &str)],
    );
    #[allow(clippy::too_many_arguments)]
    fn set_fill_radial_gradient(
        &mut self,
        x0: f32,
        y0: f32,
        r0: f32,
        x1: f32,
        y1: f32,
        r1: f32,
        stops: &[(f32, &str)],
    );
    fn set_line_width(&mut self, width: f32);
    fn set_round_caps(&mut self);

    fn save(&mut self);
    fn restore(&mut self);
    fn translate(&mut self, x: f32, y: f32);
    fn rotate(&mut self, radians: f32);

    /// Rounded-rectangle path, provided on top of the path primitives so
    /// backends without a native roundRect still work
    fn round_rect(&mut self, x: f32, y: f32, w: f32, h: f32, r: f32) {
        let r = r.min(w / 2.0).min(h / 2.0).max(0.0);
        self.move_to(x + r, y);
        self.line_to(x + w - r, y);
        self.quadratic_to(x + w, y, x + w, y + r);
        self.line_to(x + w, y + h - r);
        self.quadratic_to(x + w, y + h, x + w - r, y + h);
        self.line_to(x + r, y + h);
        self.quadratic_to(x, y + h, x, y + h - r);
        self.line_to(x, y + r);
        self.quadratic_to(x, y, x + r, y);
        self.close_path();
    }
}

#[cfg(target_arch = "wasm32")]
pub use canvas2d::Canvas2dSurface;

#[cfg(target_arch = "wasm32")]
mod canvas2d {
    use super::Surface;
    use std::f32::consts::TAU;
    use web_sys::CanvasRenderingContext2d;

    /// Browser 2D canvas backend. Fallible web-sys calls (arc, ellipse,
    /// transforms, gradient stops) only fail on non-finite input, which the
    /// simulation never produces; their results are discarded here rather
    /// than threaded through every draw call.
    pub struct Canvas2dSurface {
        ctx: CanvasRenderingContext2d,
    }

    impl Canvas2dSurface {
        pub fn new(ctx: CanvasRenderingContext2d) -> Self {
            Self { ctx }
        }

        /// Reset the backing-store transform for a resized canvas and scale
        /// logical units to physical pixels
        pub fn apply_pixel_ratio(&self, ratio: f32) {
            let _ = self
                .ctx
                .set_transform(1.0, 0.0, 0.0, 1.0, 0.0, 0.0);
            let _ = self.ctx.scale(ratio as f64, ratio as f64);
        }
    }

    impl Surface for Canvas2dSurface {
        fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32) {
            self.ctx.fill_rect(x as f64, y as f64, w as f64, h as f64);
        }

        fn begin_path(&mut self) {
            self.ctx.begin_path();
        }

        fn move_to(&mut self, x: f32, y: f32) {
            self.ctx.move_to(x as f64, y as f64);
        }

        fn line_to(&mut self, x: f32, y: f32) {
            self.ctx.line_to(x as f64, y as f64);
        }

        fn quadratic_to(&mut self, cx: f32, cy: f32, x: f32, y: f32) {
            self.ctx
                .quadratic_curve_to(cx as f64, cy as f64, x as f64, y as f64);
        }

        fn arc(&mut self, x: f32, y: f32, radius: f32, start: f32, end: f32) {
            let _ = self
                .ctx
                .arc(x as f64, y as f64, radius as f64, start as f64, end as f64);
        }

        fn ellipse(&mut self, x: f32, y: f32, rx: f32, ry: f32) {
            let _ = self.ctx.ellipse(
                x as f64,
                y as f64,
                rx as f64,
                ry as f64,
                0.0,
                0.0,
                TAU as f64,
            );
        }

        fn close_path(&mut self) {
            self.ctx.close_path();
        }

        fn fill(&mut self) {
            self.ctx.fill();
        }

        fn stroke(&mut self) {
            self.ctx.stroke();
        }

        fn set_fill(&mut self, color: &str) {
            self.ctx.set_fill_style_str(color);
        }

        fn set_stroke(&mut self, color: &str) {
            self.ctx.set_stroke_style_str(color);
        }

        fn set_fill_linear_gradient(
            &mut self,
            x0: f32,
            y0: f32,
            x1: f32,
            y1: f32,
            stops: &[(f32, &str)],
        ) {
            let grad = self
                .ctx
                .create_linear_gradient(x0 as f64, y0 as f64, x1 as f64, y1 as f64);
            for (offset, color) in stops {
                let _ = grad.add_color_stop(*offset, color);
            }
            self.ctx.set_fill_style_canvas_gradient(&grad);
        }

        fn set_fill_radial_gradient(
            &mut self,
            x0: f32,
            y0: f32,
            r0: f32,
            x1: f32,
            y1: f32,
            r1: f32,
            stops: &[(f32, &str)],
        ) {
            if let Ok(grad) = self.ctx.create_radial_gradient(
                x0 as f64,
                y0 as f64,
                r0 as f64,
                x1 as f64,
                y1 as f64,
                r1 as f64,
            ) {
                for (offset, color) in stops {
                    let _ = grad.add_color_stop(*offset, color);
                }
                self.ctx.set_fill_style_canvas_gradient(&grad);
            }
        }

        fn set_line_width(&mut self, width: f32) {
            self.ctx.set_line_width(width as f64);
        }

        fn set_round_caps(&mut self) {
            self.ctx.set_line_cap("round");
        }

        fn save(&mut self) {
            self.ctx.save();
        }

        fn restore(&mut self) {
            self.ctx.restore();
        }

        fn translate(&mut self, x: f32, y: f32) {
            let _ = self.ctx.translate(x as f64, y as f64);
        }

        fn rotate(&mut self, radians: f32) {
            let _ = self.ctx.rotate(radians as f64);
        }
    }
}

#[cfg(test)]
pub(crate) mod recording {
    use super::Surface;

    /// One captured drawing op. Payloads are kept only where tests assert
    /// on them.
    #[derive(Debug, Clone, PartialEq)]
    pub enum Op {
        FillRect,
        BeginPath,
        MoveTo,
        LineTo,
        Quadratic,
        Arc,
        Ellipse,
        ClosePath,
        Fill,
        Stroke,
        SetFill(String),
        SetStroke(String),
        LinearGradient,
        RadialGradient,
        LineWidth(f32),
        RoundCaps,
        Save,
        Restore,
        Translate,
        Rotate,
    }

    /// Surface that records its op stream for assertions
    #[derive(Debug, Default)]
    pub struct RecordingSurface {
        pub ops: Vec<Op>,
    }

    impl RecordingSurface {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn count(&self, op: &Op) -> usize {
            self.ops.iter().filter(|o| *o == op).count()
        }

        /// Index of the first op matching `pred`, if any
        pub fn position<F: Fn(&Op) -> bool>(&self, pred: F) -> Option<usize> {
            self.ops.iter().position(pred)
        }
    }

    impl Surface for RecordingSurface {
        fn fill_rect(&mut self, _x: f32, _y: f32, _w: f32, _h: f32) {
            self.ops.push(Op::FillRect);
        }
        fn begin_path(&mut self) {
            self.ops.push(Op::BeginPath);
        }
        fn move_to(&mut self, _x: f32, _y: f32) {
            self.ops.push(Op::MoveTo);
        }
        fn line_to(&mut self, _x: f32, _y: f32) {
            self.ops.push(Op::LineTo);
        }
        fn quadratic_to(&mut self, _cx: f32, _cy: f32, _x: f32, _y: f32) {
            self.ops.push(Op::Quadratic);
        }
        fn arc(&mut self, _x: f32, _y: f32, _r: f32, _s: f32, _e: f32) {
            self.ops.push(Op::Arc);
        }
        fn ellipse(&mut self, _x: f32, _y: f32, _rx: f32, _ry: f32) {
            self.ops.push(Op::Ellipse);
        }
        fn close_path(&mut self) {
            self.ops.push(Op::ClosePath);
        }
        fn fill(&mut self) {
            self.ops.push(Op::Fill);
        }
        fn stroke(&mut self) {
            self.ops.push(Op::Stroke);
        }
        fn set_fill(&mut self, color: &str) {
            self.ops.push(Op::SetFill(color.to_string()));
        }
        fn set_stroke(&mut self, color: &str) {
            self.ops.push(Op::SetStroke(color.to_string()));
        }
        fn set_fill_linear_gradient(
            &mut self,
            _x0: f32,
            _y0: f32,
            _x1: f32,
            _y1: f32,
            _stops: &[(f32, &str)],
        ) {
            self.ops.push(Op::LinearGradient);
        }
        fn set_fill_radial_gradient(
            &mut self,
            _x0: f32,
            _y0: f32,
            _r0: f32,
            _x1: f32,
            _y1: f32,
            _r1: f32,
            _stops: &[(f32, &str)],
        ) {
            self.ops.push(Op::RadialGradient);
        }
        fn set_line_width(&mut self, width: f32) {
            self.ops.push(Op::LineWidth(width));
        }
        fn set_round_caps(&mut self) {
            self.ops.push(Op::RoundCaps);
        }
        fn save(&mut self) {
            self.ops.push(Op::Save);
        }
        fn restore(&mut self) {
            self.ops.push(Op::Restore);
        }
        fn translate(&mut self, _x: f32, _y: f32) {
            self.ops.push(Op::Translate);
        }
        fn rotate(&mut self, _radians: f32) {
            self.ops.push(Op::Rotate);
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn test_round_rect_closes_its_path() {
            let mut surface = RecordingSurface::new();
            surface.round_rect(0.0, 0.0, 50.0, 30.0, 8.0);
            assert_eq!(surface.count(&Op::Quadratic), 4);
            assert_eq!(surface.count(&Op::ClosePath), 1);
        }
    }
}
