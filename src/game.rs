use log::{info, trace};
use vek::Vec2;

use crate::audio::Mixer;
use crate::background::Background;
use crate::character::Character;
use crate::config::GameConfig;
use crate::dog::Dog;
use crate::input::{self, Command};
use crate::paths::SoundPaths;
use crate::platform::Platform;

const CHARACTER_START_X: f32 = 350.0;
const DOG_START_X: f32 = 100.0;

pub struct Game {
    pub config: GameConfig,
    pub platform: Platform,
    pub audio: Mixer,
    pub background: Background,
    pub character: Character,
    pub dog: Dog,
    wants_to_quit: bool,
}

impl Game {
    pub const TITLE: &'static str = "Castle Hop";

    pub fn new(config: GameConfig) -> Result<Self, String> {
        info!("Game: initializing...");

        let platform = Platform::new(Self::TITLE, config.window_size)?;
        let sounds = SoundPaths::locate()?;
        let audio = Mixer::new(&platform.sdl, &sounds)?;
        audio.play_music()?;

        let background = Background::new(&config);
        let character = Character::new(Vec2::new(CHARACTER_START_X, config.ground_level));
        let dog = Dog::new(Vec2::new(DOG_START_X, config.ground_level));

        info!("Game: ... done initializing.");
        Ok(Self {
            config,
            platform,
            audio,
            background,
            character,
            dog,
            wants_to_quit: false,
        })
    }

    pub fn should_quit(&self) -> bool {
        self.wants_to_quit
    }

    /// Drains every pending event. Movement commands apply one dt-sized
    /// step per key-down event, not per frame held.
    pub fn pump_events(&mut self, dt: f32) {
        while let Some(event) = self.platform.events.poll_event() {
            trace!("Game: event {:?}", event);
            if let Some(command) = input::translate(&event) {
                self.apply(command, dt);
            }
        }
    }

    fn apply(&mut self, command: Command, dt: f32) {
        match command {
            Command::Quit => {
                info!("Game: received quit request");
                self.wants_to_quit = true;
            }
            Command::Jump => self.character.start_jump(&self.config, &mut self.audio),
            Command::MoveLeft => self.character.move_left(&self.config, dt),
            Command::MoveRight => self.character.move_right(&self.config, dt),
        }
    }

    pub fn tick(&mut self, dt: f32) {
        trace!("Game: tick dt={}", dt);
        self.background.advance_clouds(&self.config, dt);
        self.character.update(&self.config, dt);
        self.dog
            .update(&self.config, dt, self.character.pos(), &mut self.audio);
    }

    /// Fixed z-order: scene, clouds, character, dog, then present.
    pub fn draw(&mut self) {
        let Self {
            config,
            platform,
            background,
            character,
            dog,
            ..
        } = self;
        let canvas = &mut platform.canvas;
        background.render_scene(config, canvas);
        background.render_clouds(canvas);
        character.render(canvas);
        dog.render(canvas);
        platform.present();
    }
}
