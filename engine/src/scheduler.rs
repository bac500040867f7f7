//! Fixed-cadence driver for [`SnakeGame::step`] on top of a host frame callback
//! that may fire at any rate.

use std::fmt::Debug;
use std::time::Duration;

use crate::game::{GameStatus, SnakeGame};
use crate::log;
use crate::render::{notify_transition, Renderer};

/// Monotonic time since an arbitrary origin.
pub trait Clock {
    fn now(&self) -> Duration;
}

/// Host primitive that arranges for one future frame callback.
pub trait FrameRequester {
    type Handle: Copy + Eq + Debug;

    fn request_frame(&mut self) -> Self::Handle;

    fn cancel_frame(&mut self, handle: Self::Handle);
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FrameOutcome {
    pub stepped: bool,
    pub rescheduled: bool,
}

pub struct LoopScheduler<C, F: FrameRequester> {
    clock: C,
    frames: F,
    pending_frame: Option<F::Handle>,
    last_step_at: Duration,
    last_frame_at: Duration,
    play_time: Duration,
    steps: u64,
    failed_steps: u64,
}

impl<C: Clock, F: FrameRequester> LoopScheduler<C, F> {
    pub fn new(clock: C, frames: F) -> Self {
        let now = clock.now();
        Self {
            clock,
            frames,
            pending_frame: None,
            last_step_at: now,
            last_frame_at: now,
            play_time: Duration::ZERO,
            steps: 0,
            failed_steps: 0,
        }
    }

    /// Safe to call while running: the previous callback is cancelled first.
    pub fn start_loop(&mut self) {
        self.cancel_pending();
        let now = self.clock.now();
        self.last_step_at = now;
        self.last_frame_at = now;
        self.pending_frame = Some(self.frames.request_frame());
        log!("Loop started");
    }

    pub fn stop_loop(&mut self) {
        if self.cancel_pending() {
            log!("Loop stopped");
        }
    }

    pub fn is_running(&self) -> bool {
        self.pending_frame.is_some()
    }

    pub fn pending_frame(&self) -> Option<F::Handle> {
        self.pending_frame
    }

    /// Host callback. Steps at most once, renders every time, and re-arms only while playing.
    /// Callbacks for a handle that is no longer pending are ignored.
    pub fn on_frame<R: Renderer>(
        &mut self,
        handle: F::Handle,
        game: &mut SnakeGame,
        renderer: &mut R,
    ) -> FrameOutcome {
        if self.pending_frame != Some(handle) {
            return FrameOutcome::default();
        }
        self.pending_frame = None;

        let now = self.clock.now();
        let status_before = game.status();
        let mut outcome = FrameOutcome::default();

        if status_before == GameStatus::Playing {
            self.play_time += now.saturating_sub(self.last_frame_at);

            if now.saturating_sub(self.last_step_at) >= game.tick_interval() {
                match game.step() {
                    Ok(_) => self.steps += 1,
                    Err(e) => {
                        self.failed_steps += 1;
                        log!("Tick skipped: {}", e);
                    }
                }
                self.last_step_at = now;
                outcome.stepped = true;
            }
        }
        self.last_frame_at = now;

        renderer.render(game.state());
        notify_transition(renderer, status_before, game.status());

        if game.status() == GameStatus::Playing {
            self.pending_frame = Some(self.frames.request_frame());
            outcome.rescheduled = true;
        } else {
            log!("Loop stopped: status is {:?}", game.status());
        }

        outcome
    }

    /// Wall time spent in playing frames since the last [`reset_play_time`](Self::reset_play_time).
    pub fn play_time(&self) -> Duration {
        self.play_time
    }

    pub fn reset_play_time(&mut self) {
        self.play_time = Duration::ZERO;
    }

    pub fn steps(&self) -> u64 {
        self.steps
    }

    pub fn failed_steps(&self) -> u64 {
        self.failed_steps
    }

    fn cancel_pending(&mut self) -> bool {
        match self.pending_frame.take() {
            Some(handle) => {
                self.frames.cancel_frame(handle);
                true
            }
            None => false,
        }
    }
}
