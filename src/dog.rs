use vek::{Rect, Rgb, Vec2};

use crate::audio::{Sfx, SoundSink};
use crate::config::GameConfig;
use crate::gfx::Surface;

const FUR_DARK: Rgb<u8> = Rgb {
    r: 139,
    g: 69,
    b: 19,
};
const FUR_LIGHT: Rgb<u8> = Rgb {
    r: 160,
    g: 82,
    b: 45,
};

/// The patrolling hazard. Bounces between the screen edges and barks the
/// "die" sound whenever it overlaps the character.
#[derive(Debug)]
pub struct Dog {
    pos: Vec2<f32>,
    moving_right: bool,
}

impl Dog {
    pub fn new(pos: Vec2<f32>) -> Self {
        Self {
            pos,
            moving_right: true,
        }
    }

    pub fn update(
        &mut self,
        config: &GameConfig,
        dt: f32,
        player: Vec2<f32>,
        sfx: &mut dyn SoundSink,
    ) {
        let max_x = (config.window_size.w - config.dog_width) as f32;
        if self.moving_right {
            self.pos.x += config.dog_speed * dt;
            if self.pos.x > max_x {
                self.pos.x = max_x;
                self.moving_right = false;
            }
        } else {
            self.pos.x -= config.dog_speed * dt;
            if self.pos.x < 0.0 {
                self.pos.x = 0.0;
                self.moving_right = true;
            }
        }

        // Approximate overlap test; both parties stand at ground level, so
        // in practice only the x term discriminates. There is no cooldown:
        // the sound re-triggers on every update the overlap holds.
        if (self.pos.x - player.x).abs() < config.dog_width as f32
            && (self.pos.y - player.y).abs() < config.collision_slack
        {
            sfx.play(Sfx::Die);
        }
    }

    pub fn render(&self, surface: &mut impl Surface) {
        let x = self.pos.x as i32;
        let y = self.pos.y as i32;

        surface.fill_rect(Rect::new(x, y, 16, 16), FUR_DARK);
        surface.fill_rect(Rect::new(x - 8, y + 16, 32, 16), FUR_LIGHT);
        surface.fill_rect(Rect::new(x - 6, y + 32, 8, 8), FUR_DARK);
        surface.fill_rect(Rect::new(x + 14, y + 32, 8, 8), FUR_DARK);
        surface.fill_rect(Rect::new(x - 10, y + 20, 8, 4), FUR_LIGHT);
    }
}
