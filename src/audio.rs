use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ChimeError {
    #[error("sound file not found: {0}")]
    Missing(PathBuf),
    #[error("sound support not compiled in")]
    Unsupported,
    #[cfg(feature = "sound")]
    #[error("no audio output device available")]
    Stream(#[from] rodio::StreamError),
    #[cfg(feature = "sound")]
    #[error("could not start playback")]
    Play(#[from] rodio::PlayError),
    #[cfg(feature = "sound")]
    #[error("could not decode sound file")]
    Decode(#[from] rodio::decoder::DecoderError),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Door-opening chime. Strictly best-effort: callers discard the error, and
/// a missing file or blocked output device must never hold up the unlock.
#[derive(Clone, Debug)]
pub struct DoorChime {
    path: PathBuf,
    enabled: bool,
}

impl DoorChime {
    pub fn new(path: PathBuf, enabled: bool) -> Self {
        Self { path, enabled }
    }

    pub fn disabled() -> Self {
        Self {
            path: PathBuf::new(),
            enabled: false,
        }
    }

    /// Attempt playback once. Decoding is probed up front so the common
    /// failures surface in the returned (and discarded) error; actual
    /// playback is detached so the fade timer never waits on the audio.
    pub fn play(&self) -> Result<(), ChimeError> {
        if !self.enabled {
            return Ok(());
        }
        if !self.path.exists() {
            return Err(ChimeError::Missing(self.path.clone()));
        }
        self.spawn_playback()
    }

    #[cfg(feature = "sound")]
    fn spawn_playback(&self) -> Result<(), ChimeError> {
        use std::fs::File;
        use std::io::BufReader;

        let file = File::open(&self.path)?;
        rodio::Decoder::new(BufReader::new(file))?;

        let path = self.path.clone();
        std::thread::spawn(move || {
            let _ = play_blocking(&path);
        });
        Ok(())
    }

    #[cfg(not(feature = "sound"))]
    fn spawn_playback(&self) -> Result<(), ChimeError> {
        Err(ChimeError::Unsupported)
    }
}

#[cfg(feature = "sound")]
fn play_blocking(path: &std::path::Path) -> Result<(), ChimeError> {
    use std::fs::File;
    use std::io::BufReader;

    use rodio::{Decoder, OutputStream, Sink};

    // The stream handle must outlive playback, so the whole lifetime stays
    // on this thread.
    let (_stream, handle) = OutputStream::try_default()?;
    let sink = Sink::try_new(&handle)?;
    let file = File::open(path)?;
    sink.append(Decoder::new(BufReader::new(file))?);
    sink.sleep_until_end();
    Ok(())
}
