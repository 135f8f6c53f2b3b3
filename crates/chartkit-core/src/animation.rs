// File: crates/chartkit-core/src/animation.rs
// Summary: Per-bar frame transitions driven by host-supplied timestamps, with start/stop events.
// Notes:
// - Nothing sleeps. The host calls `tick(now)` from its frame or timer callback.
// - Re-submitting a bar mid-flight restarts from its current interpolated frame.
// - Start and stop events are always paired; a zero-length transition emits both at once.

use std::collections::BTreeMap;
use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};

use crate::bar::BarId;
use crate::geometry::{Interpolate, Rect};

/// Easing curves over normalized time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Easing {
    Linear,
    /// Quadratic, slow start.
    EaseIn,
    /// Quadratic, slow end.
    EaseOut,
    #[default]
    EaseInOut,
    CubicOut,
}

impl Easing {
    /// Map `t` in `[0, 1]` (clamped) to eased progress.
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::EaseIn => t * t,
            Self::EaseOut => (1.0 - t).mul_add(-(1.0 - t), 1.0),
            Self::EaseInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - (-2.0f64).mul_add(t, 2.0).powi(2) / 2.0
                }
            }
            Self::CubicOut => 1.0 - (1.0 - t).powi(3),
        }
    }
}

/// One requested transition of a bar's frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnimationRequest {
    pub id: BarId,
    pub from: Rect,
    pub to: Rect,
    pub duration: Duration,
    pub delay: Duration,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AnimationEvent {
    Started(BarId),
    Stopped(BarId),
}

impl AnimationEvent {
    pub fn id(&self) -> BarId {
        match *self {
            AnimationEvent::Started(id) | AnimationEvent::Stopped(id) => id,
        }
    }
}

#[derive(Clone, Copy, Debug)]
struct Track {
    from: Rect,
    to: Rect,
    start_at: Instant,
    ends_at: Instant,
    duration: Duration,
    started: bool,
}

impl Track {
    fn progress(&self, now: Instant) -> f64 {
        if now <= self.start_at {
            return 0.0;
        }
        let elapsed = now.duration_since(self.start_at).as_secs_f64();
        let total = self.duration.as_secs_f64();
        if total <= 0.0 { 1.0 } else { elapsed / total }
    }

    fn rect_at(&self, now: Instant, easing: Easing) -> Rect {
        let t = easing.apply(self.progress(now)) as f32;
        Rect::interpolate(&self.from, &self.to, t)
    }

    fn finishes_at(&self) -> Instant {
        self.ends_at
    }
}

#[derive(Clone, Debug)]
pub struct AnimationController {
    pub easing: Easing,
    /// When false every transition snaps to its target.
    pub enabled: bool,
    tracks: BTreeMap<BarId, Track>,
}

impl Default for AnimationController {
    fn default() -> Self {
        Self::new(Easing::default())
    }
}

impl AnimationController {
    pub fn new(easing: Easing) -> Self {
        Self { easing, enabled: true, tracks: BTreeMap::new() }
    }

    /// Schedule a transition. Returns the events that fire immediately.
    pub fn submit(&mut self, request: AnimationRequest, now: Instant) -> Vec<AnimationEvent> {
        let mut events = Vec::new();
        let mut from = request.from;
        if let Some(prev) = self.tracks.remove(&request.id) {
            from = prev.rect_at(now, self.easing);
            if prev.started {
                log::trace!("bar {} superseded mid-flight", request.id);
                events.push(AnimationEvent::Stopped(request.id));
            }
        }

        let window = now
            .checked_add(request.delay)
            .and_then(|start_at| Some((start_at, start_at.checked_add(request.duration)?)));
        if window.is_none() {
            log::warn!("transition of bar {} does not fit the clock; snapping", request.id);
        }

        let Some((start_at, ends_at)) = window.filter(|_| self.enabled && !request.duration.is_zero()) else {
            events.push(AnimationEvent::Started(request.id));
            events.push(AnimationEvent::Stopped(request.id));
            return events;
        };

        let started = request.delay.is_zero();
        if started {
            events.push(AnimationEvent::Started(request.id));
        }
        let track = Track { from, to: request.to, start_at, ends_at, duration: request.duration, started };
        self.tracks.insert(request.id, track);
        events
    }

    /// Advance to `now`, firing due start and stop events. Finished tracks are dropped.
    pub fn tick(&mut self, now: Instant) -> Vec<AnimationEvent> {
        let mut events = Vec::new();
        let mut finished = Vec::new();
        for (id, track) in self.tracks.iter_mut() {
            if !track.started && now >= track.start_at {
                track.started = true;
                events.push(AnimationEvent::Started(*id));
            }
            if track.started && now >= track.finishes_at() {
                events.push(AnimationEvent::Stopped(*id));
                finished.push(*id);
            }
        }
        for id in finished {
            self.tracks.remove(&id);
        }
        events
    }

    /// Drop the track of `id`. Emits a stop event when it had already started.
    pub fn cancel(&mut self, id: BarId) -> Option<AnimationEvent> {
        let track = self.tracks.remove(&id)?;
        track.started.then_some(AnimationEvent::Stopped(id))
    }

    /// Drop every track; bars snap to their targets.
    pub fn cancel_all(&mut self) -> Vec<AnimationEvent> {
        let events = self
            .tracks
            .iter()
            .filter(|(_, t)| t.started)
            .map(|(id, _)| AnimationEvent::Stopped(*id))
            .collect();
        self.tracks.clear();
        events
    }

    /// Interpolated frame of `id`, or `None` when it is not animating.
    pub fn presented(&self, id: BarId, now: Instant) -> Option<Rect> {
        self.tracks.get(&id).map(|t| t.rect_at(now, self.easing))
    }

    pub fn is_animating(&self, id: BarId) -> bool {
        self.tracks.contains_key(&id)
    }

    pub fn active_count(&self) -> usize {
        self.tracks.len()
    }

    pub fn is_idle(&self) -> bool {
        self.tracks.is_empty()
    }

    /// Earliest instant at which `tick` would fire an event.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.tracks
            .values()
            .map(|t| if t.started { t.finishes_at() } else { t.start_at })
            .min()
    }
}
