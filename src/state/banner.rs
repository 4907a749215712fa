//! Transient submission outcome banner

use std::time::{Duration, Instant};

/// Banner flavour
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BannerKind {
    Success,
    Error,
}

/// Lifecycle phase of a banner
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BannerPhase {
    /// Fully shown
    Visible,
    /// Fading out, carrying eased opacity from 1.0 down to 0.0
    Fading(f32),
    /// Should be removed
    Expired,
}

/// Banner shown beneath the form after a submission attempt
#[derive(Debug, Clone)]
pub struct Banner {
    pub kind: BannerKind,
    pub text: String,
    /// When the banner was shown
    pub shown_at: Instant,
}

impl Banner {
    /// How long the banner stays fully visible (5 seconds)
    pub const VISIBLE_DURATION: Duration = Duration::from_millis(5000);
    /// Duration of the fade-out (300ms)
    pub const FADE_DURATION: Duration = Duration::from_millis(300);

    pub fn success(text: impl Into<String>) -> Self {
        Self::new(BannerKind::Success, text)
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self::new(BannerKind::Error, text)
    }

    fn new(kind: BannerKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
            shown_at: Instant::now(),
        }
    }

    /// Phase after `elapsed` time on screen
    pub fn phase_after(elapsed: Duration) -> BannerPhase {
        if elapsed < Self::VISIBLE_DURATION {
            BannerPhase::Visible
        } else if elapsed < Self::VISIBLE_DURATION + Self::FADE_DURATION {
            let fade_elapsed = elapsed - Self::VISIBLE_DURATION;
            let progress = fade_elapsed.as_secs_f32() / Self::FADE_DURATION.as_secs_f32();
            BannerPhase::Fading(1.0 - simple_easing::sine_in(progress))
        } else {
            BannerPhase::Expired
        }
    }

    /// Current phase based on wall-clock time
    pub fn phase(&self) -> BannerPhase {
        Self::phase_after(self.shown_at.elapsed())
    }

    pub fn is_expired(&self) -> bool {
        self.phase() == BannerPhase::Expired
    }

    /// Prefix icon for rendering
    pub fn icon(&self) -> &'static str {
        match self.kind {
            BannerKind::Success => "✅",
            BannerKind::Error => "❌",
        }
    }
}
