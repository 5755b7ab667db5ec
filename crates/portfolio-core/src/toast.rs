//! Copy-to-clipboard toast lifecycle.
//!
//! ```text
//! show() ──► Visible ──(3s)──► Fading ──(0.5s)──► Hidden
//! ```
//!
//! Every `show()` starts a new generation. Timers carry the generation they
//! were started for, so a timer left over from an earlier toast cannot cut a
//! newer one short.

use std::time::Duration;

/// How long the toast stays fully visible
pub const VISIBLE_FOR: Duration = Duration::from_millis(3000);

/// Length of the fade-out before removal
pub const FADE_FOR: Duration = Duration::from_millis(500);

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ToastPhase {
    #[default]
    Hidden,
    Visible,
    Fading,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ToastState {
    generation: u64,
    phase: ToastPhase,
}

impl ToastState {
    pub fn phase(&self) -> ToastPhase {
        self.phase
    }

    /// Show the toast, replacing any existing one. Returns its generation.
    pub fn show(&mut self) -> u64 {
        self.generation = self.generation.wrapping_add(1);
        self.phase = ToastPhase::Visible;
        self.generation
    }

    /// Start fading the toast of `generation`, if it is still the visible one.
    pub fn begin_fade(&mut self, generation: u64) -> bool {
        if generation != self.generation || self.phase != ToastPhase::Visible {
            return false;
        }
        self.phase = ToastPhase::Fading;
        true
    }

    /// Remove the toast of `generation`, if it is still on screen.
    pub fn dismiss(&mut self, generation: u64) -> bool {
        if generation != self.generation || self.phase == ToastPhase::Hidden {
            return false;
        }
        self.phase = ToastPhase::Hidden;
        true
    }
}
