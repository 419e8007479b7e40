//! The replay state machine: a completed search played back one cell per
//! tick.
//!
//! [`Replay`] holds the exploration trace and the reconstructed path chain
//! and steps through `Exploring → PathRevealing → Finished` under an
//! external tick signal. It never sleeps and never consults a clock, so the
//! same trace and chain always produce the same step sequence — cadence is
//! the embedder's concern.

use std::collections::VecDeque;

use pathviz_core::Point;
use pathviz_search::TraceStep;

/// Playback phase.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Phase {
    /// No trace pending; the grid reflects only user edits.
    Idle,
    /// One trace cell is applied per tick.
    Exploring,
    /// One path cell is applied per tick, nearest-to-start first.
    PathRevealing,
    /// Terminal for this run until a new one is armed.
    Finished,
}

/// One visual step yielded by a tick.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Step {
    /// Mark a cell visited with its final distance.
    Explore(TraceStep),
    /// Mark a cell as part of the shortest path.
    Reveal(Point),
}

/// Frame-stepped playback of one search run.
#[derive(Clone, Debug)]
pub struct Replay {
    /// Remaining exploration steps, consumed front-to-back.
    trace: VecDeque<TraceStep>,
    /// Remaining path cells in target-to-start order (start excluded),
    /// consumed from the tail.
    chain: Vec<Point>,
    phase: Phase,
}

impl Replay {
    /// A machine with nothing to play.
    pub fn idle() -> Self {
        Self {
            trace: VecDeque::new(),
            chain: Vec::new(),
            phase: Phase::Idle,
        }
    }

    /// Arm a full run: exploration first, then the path reveal.
    ///
    /// `chain` must be in target-to-start order with the start excluded;
    /// an empty chain (unreachable target) skips `PathRevealing` entirely.
    pub fn explore(trace: Vec<TraceStep>, chain: Vec<Point>) -> Self {
        Self {
            trace: trace.into(),
            chain,
            phase: Phase::Exploring,
        }
    }

    /// Arm a reveal-only run, used when a path is reconstructed from an
    /// earlier search without re-exploring.
    pub fn reveal(chain: Vec<Point>) -> Self {
        Self {
            trace: VecDeque::new(),
            chain,
            phase: Phase::PathRevealing,
        }
    }

    /// Current phase.
    #[inline]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Whether playback is mid-run (exploring or revealing).
    #[inline]
    pub fn is_running(&self) -> bool {
        matches!(self.phase, Phase::Exploring | Phase::PathRevealing)
    }

    /// Abort the run, discarding whatever remained.
    pub fn cancel(&mut self) {
        self.trace.clear();
        self.chain.clear();
        self.phase = Phase::Idle;
    }

    /// Advance by one visual step.
    ///
    /// Returns `None` in `Idle`/`Finished`. Phase transitions ride on the
    /// tick that consumes the outgoing phase's last step; an armed but
    /// empty trace or chain cascades straight through, so a tick never
    /// returns `None` while steps remain.
    pub fn tick(&mut self) -> Option<Step> {
        loop {
            match self.phase {
                Phase::Idle | Phase::Finished => return None,
                Phase::Exploring => {
                    if let Some(step) = self.trace.pop_front() {
                        if self.trace.is_empty() {
                            self.phase = self.after_exploring();
                        }
                        return Some(Step::Explore(step));
                    }
                    self.phase = self.after_exploring();
                }
                Phase::PathRevealing => {
                    if let Some(p) = self.chain.pop() {
                        if self.chain.is_empty() {
                            self.phase = Phase::Finished;
                        }
                        return Some(Step::Reveal(p));
                    }
                    self.phase = Phase::Finished;
                }
            }
        }
    }

    fn after_exploring(&self) -> Phase {
        if self.chain.is_empty() {
            Phase::Finished
        } else {
            Phase::PathRevealing
        }
    }
}
