use vek::{Rect, Rgb, Vec2};

use crate::config::GameConfig;
use crate::gfx::Surface;

const SKY: Rgb<u8> = Rgb {
    r: 135,
    g: 206,
    b: 235,
};
const GRASS: Rgb<u8> = Rgb {
    r: 34,
    g: 139,
    b: 34,
};
const STONE: Rgb<u8> = Rgb {
    r: 169,
    g: 169,
    b: 169,
};
const CLOUD: Rgb<u8> = Rgb {
    r: 255,
    g: 255,
    b: 255,
};

const GROUND_BAND_H: u32 = 100;
const CLOUD_W: u32 = 100;
const CLOUD_H: u32 = 50;

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Cloud {
    pub pos: Vec2<f32>,
    pub speed: f32,
}

/// Static scene geometry plus the drifting clouds.
#[derive(Debug)]
pub struct Background {
    castle: Rect<i32, u32>,
    clouds: Vec<Cloud>,
}

impl Background {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            castle: config.castle,
            clouds: vec![
                Cloud {
                    pos: Vec2::new(50.0, 100.0),
                    speed: 30.0,
                },
                Cloud {
                    pos: Vec2::new(300.0, 150.0),
                    speed: 20.0,
                },
                Cloud {
                    pos: Vec2::new(600.0, 120.0),
                    speed: 25.0,
                },
            ],
        }
    }

    /// Clouds loop horizontally: past the right edge they re-enter from a
    /// fixed off-screen point on the same call.
    pub fn advance_clouds(&mut self, config: &GameConfig, dt: f32) {
        let limit = config.window_size.w as f32;
        for cloud in &mut self.clouds {
            cloud.pos.x += cloud.speed * dt;
            if cloud.pos.x > limit {
                cloud.pos.x = config.cloud_respawn_x;
            }
        }
    }

    /// Sky first: it clears the frame.
    pub fn render_scene(&self, config: &GameConfig, surface: &mut impl Surface) {
        surface.clear(SKY);
        let size = config.window_size;
        surface.fill_rect(
            Rect::new(
                0,
                size.h as i32 - GROUND_BAND_H as i32,
                size.w,
                GROUND_BAND_H,
            ),
            GRASS,
        );
        surface.fill_rect(self.castle, STONE);
    }

    pub fn render_clouds(&self, surface: &mut impl Surface) {
        for cloud in &self.clouds {
            surface.fill_rect(
                Rect::new(cloud.pos.x as i32, cloud.pos.y as i32, CLOUD_W, CLOUD_H),
                CLOUD,
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use crate::gfx::{Op, RecordingSurface};

    use super::*;

    #[test]
    fn clouds_drift_right() {
        let config = GameConfig::default();
        let mut background = Background::new(&config);
        background.advance_clouds(&config, 1.0);
        let xs: Vec<f32> = background.clouds.iter().map(|c| c.pos.x).collect();
        assert_eq!(xs, vec![80.0, 320.0, 625.0]);
    }

    #[test]
    fn cloud_past_right_edge_respawns_off_screen_left() {
        let config = GameConfig::default();
        let mut background = Background {
            castle: config.castle,
            clouds: vec![Cloud {
                pos: Vec2::new(750.0, 100.0),
                speed: 100.0,
            }],
        };
        // 750 + 100*2 = 950 > 800, so the same call resets it.
        background.advance_clouds(&config, 2.0);
        assert_eq!(background.clouds[0].pos.x, -100.0);
        assert_eq!(background.clouds[0].pos.y, 100.0);
    }

    #[test]
    fn scene_draws_sky_then_ground_then_castle() {
        let config = GameConfig::default();
        let background = Background::new(&config);
        let mut surface = RecordingSurface::default();
        background.render_scene(&config, &mut surface);
        assert_eq!(
            surface.ops,
            vec![
                Op::Clear(SKY),
                Op::Fill(Rect::new(0, 500, 800, 100), GRASS),
                Op::Fill(Rect::new(100, 200, 600, 300), STONE),
            ]
        );
    }

    #[test]
    fn each_cloud_is_one_filled_rect() {
        let config = GameConfig::default();
        let background = Background::new(&config);
        let mut surface = RecordingSurface::default();
        background.render_clouds(&mut surface);
        assert_eq!(
            surface.ops,
            vec![
                Op::Fill(Rect::new(50, 100, 100, 50), CLOUD),
                Op::Fill(Rect::new(300, 150, 100, 50), CLOUD),
                Op::Fill(Rect::new(600, 120, 100, 50), CLOUD),
            ]
        );
    }
}
