//! Frame scheduling.
//!
//! [`FrameScheduler`] is the seam between the animation loop and whatever
//! produces frame ticks: `requestAnimationFrame` in the browser, a tokio
//! interval in the headless driver, or a test calling
//! [`ManualScheduler::take_due`] by hand. [`Animation`] holds the loop state
//! and guarantees that once stopped, no frame reaches the surface.

#[cfg(test)]
#[path = "scheduler_test.rs"]
mod scheduler_test;

use tracing::{debug, warn};

use crate::error::FieldError;
use crate::field::{FieldCore, TickStats};
use crate::surface::Surface;

/// Handle for one requested frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FrameId(pub u64);

/// Source of one-shot frame callbacks.
pub trait FrameScheduler {
    /// Request a single future frame.
    ///
    /// # Errors
    ///
    /// Returns an error if the host refuses the request.
    fn schedule(&mut self) -> Result<FrameId, FieldError>;

    /// Cancel a previously requested frame. Unknown ids are ignored.
    fn cancel(&mut self, id: FrameId);
}

/// Scheduler driven explicitly by the caller.
///
/// At most one frame is outstanding at a time, which is all [`Animation`]
/// ever requests.
#[derive(Debug, Default)]
pub struct ManualScheduler {
    next_id: u64,
    queued: Option<FrameId>,
    cancelled: Vec<FrameId>,
}

impl ManualScheduler {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Take the outstanding frame, if any, so the caller can deliver it.
    pub fn take_due(&mut self) -> Option<FrameId> {
        self.queued.take()
    }

    #[must_use]
    pub fn has_pending(&self) -> bool {
        self.queued.is_some()
    }

    /// Frames cancelled so far, oldest first.
    #[must_use]
    pub fn cancelled(&self) -> &[FrameId] {
        &self.cancelled
    }
}

impl FrameScheduler for ManualScheduler {
    fn schedule(&mut self) -> Result<FrameId, FieldError> {
        self.next_id += 1;
        let id = FrameId(self.next_id);
        self.queued = Some(id);
        Ok(id)
    }

    fn cancel(&mut self, id: FrameId) {
        if self.queued == Some(id) {
            self.queued = None;
        }
        self.cancelled.push(id);
    }
}

/// Lifecycle of the animation loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoopState {
    #[default]
    Idle,
    Running,
    /// Torn down. Terminal.
    Stopped,
}

/// The recurring frame loop around a [`FieldCore`].
pub struct Animation<S: FrameScheduler> {
    scheduler: S,
    pending: Option<FrameId>,
    state: LoopState,
    frames: u64,
}

impl<S: FrameScheduler> Animation<S> {
    #[must_use]
    pub fn new(scheduler: S) -> Self {
        Self { scheduler, pending: None, state: LoopState::Idle, frames: 0 }
    }

    /// Request the first frame. No-op unless idle.
    ///
    /// # Errors
    ///
    /// Propagates a scheduler refusal; the loop stays idle.
    pub fn start(&mut self) -> Result<(), FieldError> {
        if self.state != LoopState::Idle {
            return Ok(());
        }
        self.pending = Some(self.scheduler.schedule()?);
        self.state = LoopState::Running;
        Ok(())
    }

    /// Deliver frame `id`: run one tick and request the next frame.
    ///
    /// Returns `None` without touching the surface if the loop is not running
    /// or `id` is not the outstanding frame.
    pub fn on_frame<D: Surface + ?Sized>(
        &mut self,
        id: FrameId,
        now_ms: f64,
        core: &mut FieldCore,
        surface: &mut D,
    ) -> Option<TickStats> {
        if self.state != LoopState::Running || self.pending != Some(id) {
            debug!(frame = id.0, state = ?self.state, "ignoring stale frame");
            return None;
        }
        self.pending = None;
        let stats = core.tick(now_ms, surface);
        self.frames += 1;

        match self.scheduler.schedule() {
            Ok(next) => self.pending = Some(next),
            Err(e) => {
                warn!(error = %e, "frame request refused, stopping animation");
                self.state = LoopState::Stopped;
            }
        }
        Some(stats)
    }

    /// Cancel the outstanding frame and stop for good.
    pub fn stop(&mut self) {
        if let Some(id) = self.pending.take() {
            self.scheduler.cancel(id);
        }
        self.state = LoopState::Stopped;
    }

    #[must_use]
    pub fn state(&self) -> LoopState {
        self.state
    }

    #[must_use]
    pub fn pending(&self) -> Option<FrameId> {
        self.pending
    }

    /// Frames delivered so far.
    #[must_use]
    pub fn frames(&self) -> u64 {
        self.frames
    }

    #[must_use]
    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }
}
