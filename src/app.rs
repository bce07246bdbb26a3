use std::time::{Duration, Instant};

use crate::audio::DoorChime;
use crate::config::Config;
use crate::store::json_store::JsonStore;
use crate::store::schema::ProgressRecord;
use crate::ui::theme::Theme;
use crate::unlock::{self, CodeInput, CodeOutcome};

/// The two mutually exclusive screens. There is no way back from `Soon`
/// short of a full session restart after a reset.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Screen {
    Entrance,
    Soon,
}

/// Owns the in-memory progress record; every handler mutates it through
/// methods here and each mutation is written back immediately.
pub struct App {
    pub screen: Screen,
    pub progress: ProgressRecord,
    pub code: CodeInput,
    /// Inline feedback under the code field; None renders as an empty line.
    pub message: Option<String>,
    /// While set, the fade overlay covers the screen; the swap to `Soon`
    /// happens on the first tick at or past this deadline.
    pub fade_until: Option<Instant>,
    pub confirm_reset: bool,
    pub should_quit: bool,
    pub should_restart: bool,
    pub config: Config,
    pub theme: &'static Theme,
    pub store: Option<JsonStore>,
    pub chime: DoorChime,
}

impl App {
    pub fn new(
        config: Config,
        store: Option<JsonStore>,
        chime: DoorChime,
        theme: &'static Theme,
    ) -> Self {
        let progress = store.as_ref().map(|s| s.load()).unwrap_or_default();
        let screen = if progress.prologue_unlocked {
            Screen::Soon
        } else {
            Screen::Entrance
        };

        Self {
            screen,
            progress,
            code: CodeInput::default(),
            message: None,
            fade_until: None,
            confirm_reset: false,
            should_quit: false,
            should_restart: false,
            config,
            theme,
            store,
            chime,
        }
    }

    /// Feed a typed character to the code field. Non-digits are dropped by
    /// the field itself; any keystroke clears the feedback line.
    pub fn type_char(&mut self, ch: char) {
        self.message = None;
        self.code.push(ch);
    }

    pub fn backspace(&mut self) {
        self.message = None;
        self.code.backspace();
    }

    /// The unlock action. On acceptance the side effects run in a fixed
    /// order: persist, then the chime attempt, then the fade is scheduled.
    /// The fade proceeds on its own timer regardless of the audio outcome.
    pub fn submit_code(&mut self) {
        if self.fade_until.is_some() {
            return;
        }

        match unlock::validate(self.code.value(), &self.config.allowed_codes) {
            CodeOutcome::InvalidFormat => {
                self.message = Some(self.config.invalid_message.clone());
            }
            CodeOutcome::WrongCode => {
                self.message = Some(self.config.wrong_message.clone());
            }
            CodeOutcome::Accepted => {
                self.message = None;
                self.progress.unlock();
                self.save_progress();
                let _ = self.chime.play();
                self.fade_until =
                    Some(Instant::now() + Duration::from_millis(self.config.fade_ms));
            }
        }
    }

    /// Advance time-driven state. Once scheduled, the fade always completes.
    pub fn tick(&mut self) {
        if let Some(deadline) = self.fade_until {
            if Instant::now() >= deadline {
                self.screen = Screen::Soon;
                self.fade_until = None;
            }
        }
    }

    pub fn fading(&self) -> bool {
        self.fade_until.is_some()
    }

    pub fn toggle_hint1(&mut self) {
        self.progress.hint1_opened = !self.progress.hint1_opened;
        self.save_progress();
    }

    pub fn toggle_hint2(&mut self) {
        self.progress.hint2_opened = !self.progress.hint2_opened;
        self.save_progress();
    }

    /// The diagram annotation shows exactly when hint panel 2 is open.
    pub fn annotation_visible(&self) -> bool {
        self.progress.hint2_opened
    }

    pub fn request_reset(&mut self) {
        self.confirm_reset = true;
    }

    /// Affirmative reset: destroy the record and restart the whole session
    /// so every component re-derives from defaults.
    pub fn accept_reset(&mut self) {
        if let Some(ref store) = self.store {
            let _ = store.reset();
        }
        self.confirm_reset = false;
        self.should_restart = true;
    }

    pub fn decline_reset(&mut self) {
        self.confirm_reset = false;
    }

    fn save_progress(&self) {
        if let Some(ref store) = self.store {
            let _ = store.save(&self.progress);
        }
    }
}
