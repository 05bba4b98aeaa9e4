use vek::{Extent2, Rect};

/// Scene geometry and motion constants, gathered in one immutable place
/// and passed by reference to whichever component needs them. Tests build
/// their own instances with small deterministic values.
#[derive(Debug, Clone, PartialEq)]
pub struct GameConfig {
    pub window_size: Extent2<u32>,
    /// Y coordinate the character and dog stand on.
    pub ground_level: f32,
    pub castle: Rect<i32, u32>,
    /// Downward acceleration applied while airborne, in px/s².
    pub gravity: f32,
    /// Vertical velocity at the start of a jump; negative is up.
    pub jump_velocity: f32,
    /// Horizontal speed of the character, in px/s.
    pub run_speed: f32,
    pub character_width: u32,
    pub dog_speed: f32,
    pub dog_width: u32,
    /// Off-screen X a cloud re-enters from after drifting past the right edge.
    pub cloud_respawn_x: f32,
    /// Vertical tolerance of the dog's proximity test.
    pub collision_slack: f32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            window_size: Extent2::new(800, 600),
            ground_level: 500.0,
            castle: Rect::new(100, 200, 600, 300),
            gravity: 2000.0,
            jump_velocity: -900.0,
            run_speed: 800.0,
            character_width: 32,
            dog_speed: 200.0,
            dog_width: 32,
            cloud_respawn_x: -100.0,
            collision_slack: 32.0,
        }
    }
}
