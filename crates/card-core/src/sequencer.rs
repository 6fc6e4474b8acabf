//! One-shot opening sequence for the card.
//!
//! Nothing here is scheduled: every property is a pure function of the time
//! elapsed since `trigger`, evaluated by the frame driver inside its tick.

use crate::easing::Easing;
use crate::error::CardResult;
use crate::params::{SequenceParams, TrackTiming};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CardState {
    #[default]
    Closed,
    Opening,
    Open,
}

/// One animated property: `from` → `to` over `timing`, shaped by `easing`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Track {
    pub from: f32,
    pub to: f32,
    pub timing: TrackTiming,
    pub easing: Easing,
}

impl Track {
    /// Normalized progress in [0, 1] given seconds since the card opened.
    #[inline]
    pub fn progress(&self, elapsed: f64) -> f32 {
        ((elapsed - self.timing.delay) / self.timing.duration).clamp(0.0, 1.0) as f32
    }

    #[inline]
    pub fn value(&self, elapsed: f64) -> f32 {
        let t = self.easing.apply(self.progress(elapsed));
        if t >= 1.0 {
            return self.to;
        }
        self.from + (self.to - self.from) * t
    }

    #[inline]
    pub fn end(&self) -> f64 {
        self.timing.delay + self.timing.duration
    }

    #[inline]
    pub fn is_done(&self, elapsed: f64) -> bool {
        elapsed >= self.end()
    }
}

/// Interpolated values of every sequencer property at one instant.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CardValues {
    pub seal_scale: f32,
    /// The seal finished shrinking and must leave the scene.
    pub seal_removed: bool,
    pub flap_rotation: f32,
    pub camera_lift: f32,
    pub camera_z: f32,
    pub message_opacity: f32,
}

#[derive(Clone, Debug)]
pub struct CardTimeline {
    pub seal: Track,
    pub flap: Track,
    pub camera_lift: Track,
    pub camera_z: Track,
    pub message: Track,
}

impl CardTimeline {
    pub fn from_params(p: &SequenceParams, camera_start_z: f32) -> Self {
        let track = |from, to, timing| Track {
            from,
            to,
            timing,
            easing: p.easing,
        };
        Self {
            seal: track(1.0, 0.0, p.seal),
            flap: track(p.flap_closed_angle, 0.0, p.flap),
            camera_lift: track(0.0, p.camera_lift, p.camera),
            camera_z: track(camera_start_z, p.camera_open_z, p.camera),
            message: track(0.0, 1.0, p.message),
        }
    }

    fn tracks(&self) -> [&Track; 5] {
        [
            &self.seal,
            &self.flap,
            &self.camera_lift,
            &self.camera_z,
            &self.message,
        ]
    }

    /// Seconds from trigger until every track has settled.
    pub fn total_duration(&self) -> f64 {
        self.tracks().iter().map(|t| t.end()).fold(0.0, f64::max)
    }

    pub fn sample(&self, elapsed: f64) -> CardValues {
        CardValues {
            seal_scale: self.seal.value(elapsed),
            seal_removed: self.seal.is_done(elapsed),
            flap_rotation: self.flap.value(elapsed),
            camera_lift: self.camera_lift.value(elapsed),
            camera_z: self.camera_z.value(elapsed),
            message_opacity: self.message.value(elapsed),
        }
    }

    pub fn initial(&self) -> CardValues {
        CardValues {
            seal_scale: self.seal.from,
            seal_removed: false,
            flap_rotation: self.flap.from,
            camera_lift: self.camera_lift.from,
            camera_z: self.camera_z.from,
            message_opacity: self.message.from,
        }
    }
}

pub struct CardSequencer {
    state: CardState,
    started_at: Option<f64>,
    timeline: CardTimeline,
}

impl CardSequencer {
    pub fn new(params: &SequenceParams, camera_start_z: f32) -> CardResult<Self> {
        params.validate()?;
        Ok(Self {
            state: CardState::Closed,
            started_at: None,
            timeline: CardTimeline::from_params(params, camera_start_z),
        })
    }

    /// Start opening at `now` (seconds). Returns `false` if already started.
    pub fn trigger(&mut self, now: f64) -> bool {
        if self.state != CardState::Closed {
            log::debug!("[card] trigger ignored in state {:?}", self.state);
            return false;
        }
        self.state = CardState::Opening;
        self.started_at = Some(now);
        log::info!(
            "[card] opening at t={:.3}s (settles after {:.2}s)",
            now,
            self.timeline.total_duration()
        );
        true
    }

    /// Values at `now` without touching the state machine.
    pub fn sample(&self, now: f64) -> CardValues {
        match self.started_at {
            Some(start) => self.timeline.sample(now - start),
            None => self.timeline.initial(),
        }
    }

    /// Values at `now`; promotes `Opening` to `Open` once every track settled.
    pub fn current_values(&mut self, now: f64) -> CardValues {
        if let (CardState::Opening, Some(start)) = (self.state, self.started_at) {
            if now - start >= self.timeline.total_duration() {
                self.state = CardState::Open;
                log::info!("[card] open");
            }
        }
        self.sample(now)
    }

    #[inline]
    pub fn state(&self) -> CardState {
        self.state
    }

    #[inline]
    pub fn started_at(&self) -> Option<f64> {
        self.started_at
    }

    pub fn timeline(&self) -> &CardTimeline {
        &self.timeline
    }
}
