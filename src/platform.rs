use sdl2::render::WindowCanvas;
use sdl2::{EventPump, Sdl};
use vek::Extent2;

/// Owns the SDL handles and the window canvas. Everything here is set up
/// once and lives until process exit.
pub struct Platform {
    pub sdl: Sdl,
    pub canvas: WindowCanvas,
    pub events: EventPump,
}

impl Platform {
    pub fn new(name: &str, size: Extent2<u32>) -> Result<Self, String> {
        let sdl = sdl2::init()?;
        let video = sdl.video()?;
        let window = video
            .window(name, size.w, size.h)
            .position_centered()
            .build()
            .map_err(|e| e.to_string())?;
        let canvas = window
            .into_canvas()
            .accelerated()
            .build()
            .map_err(|e| e.to_string())?;
        let events = sdl.event_pump()?;

        Ok(Self {
            sdl,
            canvas,
            events,
        })
    }

    /// 0 when the display refuses to say.
    pub fn refresh_rate(&self) -> i32 {
        self.canvas
            .window()
            .display_mode()
            .map(|m| m.refresh_rate)
            .unwrap_or(0)
    }

    pub fn present(&mut self) {
        self.canvas.present();
    }
}
