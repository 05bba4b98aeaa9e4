use sdl2::pixels::Color;
use sdl2::render::{Canvas, WindowCanvas};
use vek::{Rect, Rgb};

/// The drawing seam. The whole game renders through these two calls;
/// presenting the frame stays the platform's job.
pub trait Surface {
    fn clear(&mut self, color: Rgb<u8>);
    fn fill_rect(&mut self, rect: Rect<i32, u32>, color: Rgb<u8>);
}

impl Surface for WindowCanvas {
    fn clear(&mut self, color: Rgb<u8>) {
        self.set_draw_color(sdl_color(color));
        Canvas::clear(self);
    }
    fn fill_rect(&mut self, rect: Rect<i32, u32>, color: Rgb<u8>) {
        self.set_draw_color(sdl_color(color));
        // Draw-call failures are not actionable mid-frame.
        let _ = Canvas::fill_rect(self, Some(sdl_rect(rect)));
    }
}

fn sdl_color(c: Rgb<u8>) -> Color {
    Color::RGB(c.r, c.g, c.b)
}

fn sdl_rect(r: Rect<i32, u32>) -> sdl2::rect::Rect {
    sdl2::rect::Rect::new(r.x, r.y, r.w, r.h)
}

#[cfg(test)]
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Op {
    Clear(Rgb<u8>),
    Fill(Rect<i32, u32>, Rgb<u8>),
}

/// Call-log stand-in for the window canvas.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub ops: Vec<Op>,
}

#[cfg(test)]
impl Surface for RecordingSurface {
    fn clear(&mut self, color: Rgb<u8>) {
        self.ops.push(Op::Clear(color));
    }
    fn fill_rect(&mut self, rect: Rect<i32, u32>, color: Rgb<u8>) {
        self.ops.push(Op::Fill(rect, color));
    }
}
