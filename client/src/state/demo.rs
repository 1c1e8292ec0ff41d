//! Demo step-sequencer.
//!
//! DESIGN
//! ======
//! Five fixed narrative steps advanced by a periodic timer owned by the
//! `Demo` component. This module is the transition function only:
//!
//! ```text
//! Idle --start--> Running(0) --tick--> Running(1) .. Running(3) --tick--> Complete
//!                                                                  (index 4)
//! ```
//!
//! The tick that moves the index to `TERMINAL_INDEX` also ends the run, so the
//! timer is cancelled on the same tick that reveals the final report.

#[cfg(test)]
#[path = "demo_test.rs"]
mod demo_test;

/// Number of steps in the narrative.
pub const STEP_COUNT: usize = 5;

/// Index at which a run is complete.
pub const TERMINAL_INDEX: usize = STEP_COUNT - 1;

/// Period of the sequencer timer.
pub const TICK_INTERVAL_MS: u64 = 2000;

/// Number of specialist report panels (steps 1..=3).
pub const SPECIALIST_COUNT: usize = 3;

/// Rendered status of one narrative step.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StepStatus {
    #[default]
    Pending,
    Completed,
}

/// Coarse lifecycle of the sequencer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Running(usize),
    Complete,
}

/// Visibility of a specialist report panel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PanelState {
    Hidden,
    /// The specialist is the active step; show the "working" placeholder.
    Working,
    Ready,
}

/// What a timer tick did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    /// Not running; the tick was stale.
    Ignored,
    Advanced(usize),
    /// Reached the terminal index; the caller must stop its timer.
    Finished,
}

/// Sequencer state: current step, running flag, and final-report flag.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DemoState {
    pub current_index: usize,
    pub running: bool,
    pub results_visible: bool,
}

impl DemoState {
    /// Begin a run. Returns `false` (and changes nothing) while a run is in
    /// progress.
    pub fn start(&mut self) -> bool {
        if self.running {
            return false;
        }
        self.running = true;
        self.results_visible = false;
        self.current_index = 0;
        true
    }

    /// Advance one step.
    pub fn tick(&mut self) -> TickOutcome {
        if !self.running {
            return TickOutcome::Ignored;
        }
        if self.current_index < TERMINAL_INDEX {
            self.current_index += 1;
        }
        if self.current_index >= TERMINAL_INDEX {
            self.running = false;
            self.results_visible = true;
            return TickOutcome::Finished;
        }
        TickOutcome::Advanced(self.current_index)
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        if self.running {
            Phase::Running(self.current_index)
        } else if self.results_visible {
            Phase::Complete
        } else {
            Phase::Idle
        }
    }

    /// Step `position` is completed once the running index has reached it.
    #[must_use]
    pub fn step_status(&self, position: usize) -> StepStatus {
        if self.current_index >= position {
            StepStatus::Completed
        } else {
            StepStatus::Pending
        }
    }

    /// The active step of a running sequence. It is also `Completed`.
    #[must_use]
    pub fn is_in_progress(&self, position: usize) -> bool {
        self.running && self.current_index == position
    }

    /// Panel state for specialist `k` (1-based, matching its step position).
    #[must_use]
    pub fn specialist_panel(&self, k: usize) -> PanelState {
        if self.current_index > k {
            PanelState::Ready
        } else if self.is_in_progress(k) {
            PanelState::Working
        } else {
            PanelState::Hidden
        }
    }

    /// The report download is offered only after a completed run.
    #[must_use]
    pub fn can_download(&self) -> bool {
        self.results_visible
    }
}
