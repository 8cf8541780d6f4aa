//! Core data model for a whack-a-mole round.
//! Field-level change events and the pure cell-activation policy live here;
//! timer plumbing stays in `state` and presentation in `components`.

use serde::{Deserialize, Serialize};

/// Tunable constants for one round: a 60 second countdown, 1s ticks, and
/// moles staying up between 0.5s and 4s on a 9-cell board.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    pub round_duration_secs: u32,
    pub tick_interval_ms: u32,
    pub min_active_ms: u32,
    pub max_active_ms: u32,
    pub cell_count: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            round_duration_secs: 60,
            tick_interval_ms: 1000,
            min_active_ms: 500,
            max_active_ms: 4000,
            cell_count: 9,
        }
    }
}

impl GameConfig {
    /// Bad bounds are a programming error, not a runtime condition: fail
    /// fast before any timer is registered.
    pub fn validate(&self) {
        assert!(self.cell_count > 0, "cell_count must be non-zero");
        assert!(self.tick_interval_ms > 0, "tick_interval_ms must be non-zero");
        assert!(self.round_duration_secs > 0, "round_duration_secs must be non-zero");
        assert!(
            self.min_active_ms <= self.max_active_ms,
            "active duration bounds inverted ({} > {})",
            self.min_active_ms,
            self.max_active_ms
        );
    }
}

/// Mutable round state. Owned exclusively by the [`Store`](crate::state::Store);
/// everything else observes it through change events.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// Seconds remaining in the round.
    pub time: u32,
    /// Whether the round is currently running.
    pub play: bool,
    pub score: u32,
    /// Remaining active milliseconds per cell; 0 means the mole is hidden.
    pub cells: Vec<u32>,
}

impl GameState {
    pub fn initial(config: &GameConfig) -> Self {
        Self {
            time: config.round_duration_secs,
            play: false,
            score: 0,
            cells: vec![0; config.cell_count],
        }
    }
}

/// Subscription key: one per tracked store field.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Field {
    Time,
    Play,
    Score,
    Cells,
}

/// Emitted once per field assignment, unchanged values included.
#[derive(Clone, Debug, PartialEq)]
pub enum ChangeEvent {
    Time(u32),
    Play(bool),
    Score(u32),
    Cells(Vec<u32>),
}

impl ChangeEvent {
    pub fn field(&self) -> Field {
        match self {
            ChangeEvent::Time(_) => Field::Time,
            ChangeEvent::Play(_) => Field::Play,
            ChangeEvent::Score(_) => Field::Score,
            ChangeEvent::Cells(_) => Field::Cells,
        }
    }
}

/// Advance the per-cell countdowns by one activation tick.
///
/// `trigger` is the cell drawn for this tick and `duration` the activation
/// window it receives if it is currently hidden. Cells that are already up
/// count down by `step_ms`, floored at 0, so a mole always retires after
/// `ceil(duration / step_ms)` ticks without needing a timer of its own.
pub fn advance_cells(cells: &[u32], trigger: usize, duration: u32, step_ms: u32) -> Vec<u32> {
    cells
        .iter()
        .enumerate()
        .map(|(index, &remaining)| {
            if index == trigger && remaining == 0 {
                duration
            } else if remaining > 0 {
                remaining.saturating_sub(step_ms)
            } else {
                remaining
            }
        })
        .collect()
}
