mod audio;
mod background;
mod character;
mod config;
mod dog;
mod game;
mod gfx;
mod input;
mod paths;
mod platform;

use std::io::Write;
use std::time::{Duration, Instant};
use std::{env, panic, process, thread};

use log::{error, info, warn, LevelFilter};

use crate::config::GameConfig;
use crate::game::Game;

fn main() {
    setup_log();
    setup_panic_hook();

    if let Err(msg) = run() {
        error!("Fatal: {}", msg);
        process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let mut game = Game::new(GameConfig::default())?;
    let mut pacer = FramePacer::new(game.platform.refresh_rate());
    let mut last_time = Instant::now();

    while !game.should_quit() {
        let now = Instant::now();
        let dt = now.duration_since(last_time).as_secs_f32();
        last_time = now;

        game.pump_events(dt);
        game.tick(dt);
        game.draw();

        pacer.end_frame();
    }
    Ok(())
}

const FPS_CEIL: f64 = 60.0;
const FPS_COUNTER_INTERVAL_MS: u64 = 1000;

/// Counts frames, reports the rate once per second, and falls back to a
/// sleep-based cap when the swap chain evidently isn't throttling us.
struct FramePacer {
    display_refresh_rate: i32,
    frame_accum: u64,
    last_report: Instant,
    lim_last_time: Instant,
    fps_limit: f64,
}

impl FramePacer {
    fn new(display_refresh_rate: i32) -> Self {
        Self {
            display_refresh_rate,
            frame_accum: 0,
            last_report: Instant::now(),
            lim_last_time: Instant::now(),
            fps_limit: 0.0,
        }
    }

    fn end_frame(&mut self) {
        self.frame_accum += 1;
        let interval = Duration::from_millis(FPS_COUNTER_INTERVAL_MS);
        let now = Instant::now();
        if now.duration_since(self.last_report) > interval {
            let fps = (self.frame_accum as f64 * 1000.0 / FPS_COUNTER_INTERVAL_MS as f64).round();
            info!(
                "{} frames in {} milliseconds = {} FPS",
                self.frame_accum, FPS_COUNTER_INTERVAL_MS, fps
            );
            self.frame_accum = 0;
            self.last_report += interval;
            if self.fps_limit <= 0.0 && fps > FPS_CEIL {
                let reason = if self.display_refresh_rate != 0 {
                    self.fps_limit = f64::from(self.display_refresh_rate);
                    "from display mode info"
                } else {
                    self.fps_limit = FPS_CEIL;
                    "fallback"
                };
                warn!(
                    "Abnormal FPS detected (vsync is not working). Now limiting FPS to {} ({}).",
                    self.fps_limit, reason
                );
            }
        }

        if self.fps_limit > 0.0 {
            let a_frame = Duration::from_millis((1000.0 / self.fps_limit).round() as u64);
            let elapsed = Instant::now() - self.lim_last_time;
            if elapsed < a_frame {
                thread::sleep(a_frame - elapsed);
            }
            self.lim_last_time = Instant::now();
        }
    }
}

fn setup_log() {
    let mut builder = env_logger::Builder::new();
    builder
        .format(|buf, record| {
            let level = record.level().as_str().chars().next().unwrap_or('?');
            writeln!(buf, "[{}] {}", level, record.args())
        })
        .filter(None, LevelFilter::Info);
    if let Ok(rust_log) = env::var("RUST_LOG") {
        builder.parse_filters(&rust_log);
    }
    builder.init();
}

fn setup_panic_hook() {
    panic::set_hook(Box::new(|info| {
        let mut msg = match info.location() {
            Some(location) => format!(
                "Panic occurred in file '{}' at line {}:\n",
                location.file(),
                location.line()
            ),
            None => "Panic occurred in unknown location:\n".to_owned(),
        };
        if let Some(payload) = info.payload().downcast_ref::<&str>() {
            msg += payload;
        } else if let Some(payload) = info.payload().downcast_ref::<String>() {
            msg += payload;
        } else {
            msg += "<unknown reason>";
        }
        error!("{}", &msg);

        info!("Backtrace:");
        backtrace::trace(|frame| {
            backtrace::resolve(frame.ip(), |symbol| {
                let or_unknown = || "??".to_owned();
                let filename = symbol
                    .filename()
                    .map(|f| format!("{}", f.display()))
                    .unwrap_or_else(or_unknown);
                let lineno = symbol
                    .lineno()
                    .map(|l| l.to_string())
                    .unwrap_or_else(or_unknown);
                // The Display impl demangles the symbol.
                let name = symbol
                    .name()
                    .map(|n| n.to_string())
                    .unwrap_or_else(or_unknown);
                info!("{}:{}: {}", filename, lineno, name);
            });
            true // keep going to the next frame
        });

        let result = sdl2::messagebox::show_simple_message_box(
            sdl2::messagebox::MessageBoxFlag::ERROR,
            "Fatal error",
            &msg,
            None,
        );
        if let Err(e) = result {
            error!("Couldn't display message box: {:?}", e);
        }
    }));
}
