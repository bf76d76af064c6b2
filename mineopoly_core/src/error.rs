use std::fmt;

use crate::Position;

/// Invalid arguments handed to strategy initialization.
///
/// These are caller mistakes: no agent state is created when one is returned.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("Board size is non-positive: {0}")]
    NonPositiveBoardSize(i32),
    #[error("Inventory size is non-positive: {0}")]
    NonPositiveInventorySize(i32),
    #[error("Max energy is non-positive: {0}")]
    NonPositiveMaxEnergy(i32),
    #[error("Winning score is non-positive: {0}")]
    NonPositiveWinningScore(i32),
    #[error("Starting position {position} is out of bounds for board size {board_size}")]
    StartOutOfBounds {
        position: Position,
        board_size: usize,
    },
    #[error("Starting board is {actual}x{actual} but the configured board size is {expected}")]
    BoardSizeMismatch { expected: usize, actual: usize },
    #[error("Mine time deprecation factor must be finite and non-negative, got {0}")]
    InvalidDeprecationFactor(f64),
}

/// The facilities an agent caches at initialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FacilityKind {
    Recharge,
    HomeMarket,
}

impl fmt::Display for FacilityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FacilityKind::Recharge => f.write_str("recharge"),
            FacilityKind::HomeMarket => f.write_str("home market"),
        }
    }
}

/// Errors raised while deciding a turn.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StrategyError {
    /// The board has no tile of a facility the agent needs. The board is
    /// malformed; there is nothing to retry.
    #[error("No {kind} locations exist on the board")]
    NoFacility { kind: FacilityKind },
}
