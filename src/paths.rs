use std::env;
use std::path::{Path, PathBuf};

use log::info;

/// The three audio assets the game ships with, found under `res/sounds/`
/// next to (or above) the executable.
#[derive(Debug, Clone, Hash, PartialEq, Eq)]
pub struct SoundPaths {
    pub music: PathBuf,
    pub jump: PathBuf,
    pub die: PathBuf,
}

impl SoundPaths {
    pub fn locate() -> Result<Self, String> {
        let mut dir = match env::current_exe() {
            Ok(p) => {
                info!("Paths: path of current executable is `{}`", p.display());
                match p.parent() {
                    Some(parent) => parent.to_path_buf(),
                    None => PathBuf::from("."),
                }
            }
            Err(e) => {
                let p = env::current_dir().map_err(|e| e.to_string())?;
                info!(
                    "Paths: failed to get current exe path ({}), starting from `{}`",
                    e,
                    p.display()
                );
                p
            }
        };

        loop {
            let candidate = dir.join("res").join("sounds");
            if candidate.is_dir() {
                info!("Paths: found sounds folder at `{}`", candidate.display());
                return Self::from_dir(&candidate);
            }
            if !dir.pop() {
                return Err("couldn't find a `res/sounds/` folder near the executable".to_owned());
            }
        }
    }

    fn from_dir(dir: &Path) -> Result<Self, String> {
        let require = |name: &str| {
            let p = dir.join(name);
            if p.is_file() {
                Ok(p)
            } else {
                Err(format!("missing sound file `{}`", p.display()))
            }
        };
        Ok(Self {
            music: require("fondo.wav")?,
            jump: require("salto.wav")?,
            die: require("die.wav")?,
        })
    }
}
