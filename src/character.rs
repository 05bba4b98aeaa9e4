use vek::{Rect, Rgb, Vec2};

use crate::audio::{Sfx, SoundSink};
use crate::config::GameConfig;
use crate::gfx::Surface;

const CROWN: Rgb<u8> = Rgb {
    r: 255,
    g: 223,
    b: 0,
};
const SKIN: Rgb<u8> = Rgb {
    r: 255,
    g: 182,
    b: 193,
};
const TUNIC: Rgb<u8> = Rgb { r: 0, g: 0, b: 255 };
const SLEEVE: Rgb<u8> = Rgb { r: 255, g: 0, b: 0 };
const BOOT: Rgb<u8> = Rgb { r: 0, g: 0, b: 0 };

const ANIMATION_PERIOD: u8 = 20;

/// The player. Vertical motion is a two-state machine (grounded or
/// jumping); horizontal motion is direct, clamped to the screen, and
/// legal midair.
#[derive(Debug)]
pub struct Character {
    pos: Vec2<f32>,
    ground_y: f32,
    velocity: f32,
    jumping: bool,
    animation_frame: u8,
}

impl Character {
    pub fn new(pos: Vec2<f32>) -> Self {
        Self {
            pos,
            ground_y: pos.y,
            velocity: 0.0,
            jumping: false,
            animation_frame: 0,
        }
    }

    pub fn pos(&self) -> Vec2<f32> {
        self.pos
    }

    /// No-op while already airborne.
    pub fn start_jump(&mut self, config: &GameConfig, sfx: &mut dyn SoundSink) {
        if self.jumping {
            return;
        }
        self.jumping = true;
        self.velocity = config.jump_velocity;
        sfx.play(Sfx::Jump);
    }

    pub fn move_left(&mut self, config: &GameConfig, dt: f32) {
        self.pos.x -= config.run_speed * dt;
        if self.pos.x < 0.0 {
            self.pos.x = 0.0;
        }
    }

    pub fn move_right(&mut self, config: &GameConfig, dt: f32) {
        let max_x = (config.window_size.w - config.character_width) as f32;
        self.pos.x += config.run_speed * dt;
        if self.pos.x > max_x {
            self.pos.x = max_x;
        }
    }

    /// Euler step, one per frame, no sub-stepping: results depend on the
    /// exact dt sequence.
    pub fn update(&mut self, config: &GameConfig, dt: f32) {
        if !self.jumping {
            return;
        }
        self.velocity += config.gravity * dt;
        self.pos.y += self.velocity * dt;
        self.animation_frame = (self.animation_frame + 1) % ANIMATION_PERIOD;

        if self.pos.y >= self.ground_y {
            self.pos.y = self.ground_y;
            self.velocity = 0.0;
            self.animation_frame = 0;
            self.jumping = false;
        }
    }

    pub fn render(&self, surface: &mut impl Surface) {
        let x = self.pos.x as i32;
        let y = self.pos.y as i32;

        // Limb swing is purely cosmetic and only visible while airborne.
        let (arm, leg) = if self.jumping {
            let frame = i32::from(self.animation_frame);
            (frame % 10 - 5, (frame / 2) % 5 - 2)
        } else {
            (0, 0)
        };

        surface.fill_rect(Rect::new(x + 8, y - 8, 16, 8), CROWN);
        surface.fill_rect(Rect::new(x + 8, y, 16, 16), SKIN);
        surface.fill_rect(Rect::new(x + 8, y + 16, 16, 24), TUNIC);
        surface.fill_rect(Rect::new(x + arm, y + 16, 8, 16), SLEEVE);
        surface.fill_rect(Rect::new(x + 24 - arm, y + 16, 8, 16), SLEEVE);
        surface.fill_rect(Rect::new(x + 8 + leg, y + 40, 8, 16), BOOT);
        surface.fill_rect(Rect::new(x + 16 - leg, y + 40, 8, 16), BOOT);
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use crate::audio::RecordingSink;
    use crate::gfx::{Op, RecordingSurface};

    use super::*;

    fn grounded() -> Character {
        Character::new(Vec2::new(350.0, 500.0))
    }

    #[test]
    fn jump_arc_returns_to_ground() {
        let config = GameConfig::default();
        let mut sink = RecordingSink::default();
        let mut character = grounded();

        character.start_jump(&config, &mut sink);
        assert!(character.jumping);
        assert_eq!(sink.played, vec![Sfx::Jump]);

        // gravity=2000, jump_velocity=-900, dt=0.1.
        character.update(&config, 0.1);
        assert_eq!(character.velocity, -700.0);
        assert_eq!(character.pos.y, 430.0);

        let mut lowest = character.pos.y;
        let mut steps = 1;
        while character.jumping {
            character.update(&config, 0.1);
            lowest = lowest.min(character.pos.y);
            assert!(character.pos.y <= 500.0, "never sinks below the ground");
            steps += 1;
            assert!(steps < 100, "character never landed");
        }

        assert!(lowest < 430.0, "apex should be above the first step");
        assert_eq!(steps, 8);
        assert_eq!(character.pos.y, 500.0);
        assert_eq!(character.velocity, 0.0);
        assert_eq!(character.animation_frame, 0);
        assert!(!character.jumping);
    }

    #[test]
    fn jump_while_airborne_is_a_no_op() {
        let config = GameConfig::default();
        let mut sink = RecordingSink::default();
        let mut character = grounded();

        character.start_jump(&config, &mut sink);
        character.update(&config, 0.1);
        let velocity = character.velocity;
        let y = character.pos.y;

        character.start_jump(&config, &mut sink);
        assert!(character.jumping);
        assert_eq!(character.velocity, velocity);
        assert_eq!(character.pos.y, y);
        assert_eq!(sink.played, vec![Sfx::Jump], "no second jump sound");
    }

    #[test]
    fn update_does_nothing_while_grounded() {
        let config = GameConfig::default();
        let mut character = grounded();
        character.update(&config, 0.5);
        assert_eq!(character.pos, Vec2::new(350.0, 500.0));
        assert_eq!(character.velocity, 0.0);
    }

    #[test]
    fn horizontal_movement_stays_on_screen() {
        let config = GameConfig::default();
        let mut character = grounded();

        character.move_left(&config, 10.0);
        assert_eq!(character.pos.x, 0.0);
        character.move_right(&config, 10.0);
        assert_eq!(character.pos.x, 768.0);

        for (i, dt) in [0.0, 0.016, 0.25, 3.0, 0.5].iter().cycle().take(50).enumerate() {
            if i % 2 == 0 {
                character.move_left(&config, *dt);
            } else {
                character.move_right(&config, *dt);
            }
            assert!(character.pos.x >= 0.0);
            assert!(character.pos.x <= 768.0);
        }
    }

    #[test]
    fn midair_horizontal_control_is_permitted() {
        let config = GameConfig::default();
        let mut sink = RecordingSink::default();
        let mut character = grounded();

        character.start_jump(&config, &mut sink);
        character.update(&config, 0.05);
        let x = character.pos.x;
        character.move_right(&config, 0.01);
        assert!(character.pos.x > x);
        assert!(character.jumping);
    }

    #[test]
    fn limb_swing_follows_the_animation_counter() {
        let config = GameConfig::default();
        let mut sink = RecordingSink::default();
        let mut character = grounded();

        character.start_jump(&config, &mut sink);
        character.update(&config, 0.01);
        assert_eq!(character.animation_frame, 1);

        // frame 1: arm = 1%10-5 = -4, leg = (1/2)%5-2 = -2.
        let mut surface = RecordingSurface::default();
        character.render(&mut surface);
        let x = character.pos.x as i32;
        let y = character.pos.y as i32;
        assert_eq!(surface.ops.len(), 7);
        assert_eq!(surface.ops[3], Op::Fill(Rect::new(x - 4, y + 16, 8, 16), SLEEVE));
        assert_eq!(surface.ops[4], Op::Fill(Rect::new(x + 28, y + 16, 8, 16), SLEEVE));
        assert_eq!(surface.ops[5], Op::Fill(Rect::new(x + 6, y + 40, 8, 16), BOOT));
        assert_eq!(surface.ops[6], Op::Fill(Rect::new(x + 18, y + 40, 8, 16), BOOT));
    }

    #[test]
    fn limbs_rest_while_grounded() {
        let character = grounded();
        let mut surface = RecordingSurface::default();
        character.render(&mut surface);
        // arm and leg offsets are both 0.
        assert_eq!(surface.ops[3], Op::Fill(Rect::new(350, 516, 8, 16), SLEEVE));
        assert_eq!(surface.ops[5], Op::Fill(Rect::new(358, 540, 8, 16), BOOT));
    }
}
