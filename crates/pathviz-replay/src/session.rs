//! The session facade — the surface an embedding UI drives.
//!
//! A [`Session`] owns the live grid and the replay machine, routes user
//! intents (place, erase, run, reset) through the run-state gating rules,
//! and applies one replay step to the grid per [`tick`](Session::tick),
//! returning the changed cells as a [`Frame`].
//!
//! Single-threaded and cooperative: the search itself runs synchronously to
//! completion when a run starts, and only the tick applies replay
//! mutations, so edits interleave between ticks with at most one writer at
//! a time.

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use pathviz_core::{Frame, Grid, Point};
use pathviz_search::{SearchResult, astar, dijkstra};

use crate::machine::{Phase, Replay, Step};

/// Default delay between visual steps, a hint for the embedder's scheduler.
pub const DEFAULT_FRAME_DURATION: Duration = Duration::from_millis(5);

/// The search algorithm driving a run.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Algorithm {
    #[default]
    Dijkstra,
    AStar,
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Dijkstra => f.write_str("dijkstra"),
            Self::AStar => f.write_str("astar"),
        }
    }
}

/// Error returned when parsing an unknown algorithm name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseAlgorithmError(String);

impl fmt::Display for ParseAlgorithmError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown algorithm: {:?}", self.0)
    }
}

impl std::error::Error for ParseAlgorithmError {}

impl FromStr for Algorithm {
    type Err = ParseAlgorithmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dijkstra" => Ok(Self::Dijkstra),
            "astar" => Ok(Self::AStar),
            other => Err(ParseAlgorithmError(other.to_string())),
        }
    }
}

/// Outcome of a [`Session::run_search`] request.
///
/// Rejections are reported no-ops, not errors: nothing about the session
/// changes when a request is rejected.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RunStatus {
    /// The search completed and playback is armed.
    Started,
    /// A run is already exploring or revealing.
    AlreadyRunning,
    /// Start and target must both be set (and distinct) first.
    MissingEndpoints,
}

/// Configuration for creating a [`Session`].
#[derive(Clone, Debug)]
pub struct SessionConfig {
    pub width: i32,
    pub height: i32,
    /// Delay hint between visual steps; the session never sleeps itself.
    pub frame_duration: Duration,
}

impl SessionConfig {
    /// Config with the default frame duration.
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            width,
            height,
            frame_duration: DEFAULT_FRAME_DURATION,
        }
    }
}

/// A live visualizer session: grid, replay machine, and the last completed
/// search.
pub struct Session {
    grid: Grid,
    replay: Replay,
    last: Option<SearchResult>,
    algorithm: Algorithm,
    frame_duration: Duration,
}

impl Session {
    /// Create a session with an empty grid.
    pub fn new(config: SessionConfig) -> Self {
        Self {
            grid: Grid::new(config.width, config.height),
            replay: Replay::idle(),
            last: None,
            algorithm: Algorithm::default(),
            frame_duration: config.frame_duration,
        }
    }

    /// The live grid, for rendering a full snapshot.
    #[inline]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Current playback phase.
    #[inline]
    pub fn phase(&self) -> Phase {
        self.replay.phase()
    }

    /// The algorithm of the current/most recent run.
    #[inline]
    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// Delay hint between visual steps.
    #[inline]
    pub fn frame_duration(&self) -> Duration {
        self.frame_duration
    }

    // -----------------------------------------------------------------------
    // Edits (run-state gated)
    // -----------------------------------------------------------------------

    /// Place the start cell. Rejected unless the session is idle: a start
    /// move would invalidate both an active replay and a finished run's
    /// exploration.
    pub fn place_start(&mut self, p: Point) -> bool {
        match self.replay.phase() {
            Phase::Idle => self.grid.place_start(p),
            _ => false,
        }
    }

    /// Place a wall. Rejected unless the session is idle, for the same
    /// reason as start moves.
    pub fn place_wall(&mut self, p: Point) -> bool {
        match self.replay.phase() {
            Phase::Idle => self.grid.place_wall(p),
            _ => false,
        }
    }

    /// Place the target cell.
    ///
    /// Rejected mid-run. After a finished run this is the supported
    /// interaction: if the new target lies on a cell the previous search
    /// visited, the path is rebuilt from the stored predecessor arena and
    /// revealed without re-running the search; otherwise the current
    /// algorithm re-runs from a clean grid.
    pub fn place_target(&mut self, p: Point) -> bool {
        match self.replay.phase() {
            Phase::Exploring | Phase::PathRevealing => false,
            Phase::Idle => self.grid.place_target(p),
            Phase::Finished => {
                if !self.grid.place_target(p) {
                    return false;
                }
                let chain = self
                    .last
                    .as_ref()
                    .map(|r| r.path_chain(p))
                    .unwrap_or_default();
                if !chain.is_empty() {
                    log::debug!("target moved inside explored tree; revealing without re-search");
                    self.replay = Replay::reveal(chain);
                } else if self.run_search(self.algorithm) != RunStatus::Started {
                    self.replay = Replay::idle();
                }
                true
            }
        }
    }

    /// Erase a cell. Stays live in every state; erasing while a run is
    /// active cancels it, so pending edits can be reverted mid-playback.
    pub fn erase(&mut self, p: Point) -> bool {
        if self.replay.is_running() {
            log::debug!("erase during active run; cancelling replay");
            self.cancel_run();
        }
        self.grid.erase(p)
    }

    // -----------------------------------------------------------------------
    // Runs
    // -----------------------------------------------------------------------

    /// Run a search and arm playback.
    ///
    /// Requires both endpoints set and distinct, and no active run; the
    /// search itself completes synchronously (bounded by grid area) and
    /// only the replay is spread over ticks. A request from `Finished`
    /// starts a fresh run on a grid swept of the previous run's artifacts.
    pub fn run_search(&mut self, algorithm: Algorithm) -> RunStatus {
        if self.replay.is_running() {
            return RunStatus::AlreadyRunning;
        }
        let (Some(start), Some(target)) = (self.grid.start(), self.grid.target()) else {
            log::debug!("run rejected: start and target must both be set");
            return RunStatus::MissingEndpoints;
        };
        if start == target {
            return RunStatus::MissingEndpoints;
        }

        self.algorithm = algorithm;
        self.grid.clear_search_artifacts();
        let result = match algorithm {
            Algorithm::Dijkstra => dijkstra(&self.grid, start, target),
            Algorithm::AStar => astar(&self.grid, start, target),
        };
        let chain = result.path_chain(target);
        self.replay = Replay::explore(result.trace().to_vec(), chain);
        self.last = Some(result);
        RunStatus::Started
    }

    /// Reset the session from any state: empty grid, idle machine.
    pub fn reset(&mut self) {
        self.grid.reset();
        self.cancel_run();
    }

    fn cancel_run(&mut self) {
        self.replay.cancel();
        self.last = None;
        // Idle means the grid reflects only user edits.
        self.grid.clear_search_artifacts();
    }

    // -----------------------------------------------------------------------
    // Ticking
    // -----------------------------------------------------------------------

    /// Apply at most one replay step to the live grid.
    ///
    /// Returns the cells changed this tick — empty in `Idle` and
    /// `Finished`. Driving this with a fixed cadence reproduces the same
    /// cell order every time for a given run.
    pub fn tick(&mut self) -> Frame {
        match self.replay.tick() {
            Some(Step::Explore(step)) => self
                .grid
                .mark_visited(step.pos, step.distance)
                .map(|cell| Frame::single(step.pos, cell))
                .unwrap_or_default(),
            Some(Step::Reveal(p)) => self
                .grid
                .mark_on_path(p)
                .map(|cell| Frame::single(p, cell))
                .unwrap_or_default(),
            None => Frame::empty(),
        }
    }
}
