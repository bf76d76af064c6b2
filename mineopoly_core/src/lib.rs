use std::fmt;

use serde::{Deserialize, Serialize};

pub mod board;
pub mod competition;
pub mod config;
pub mod error;
pub mod facilities;
pub mod map;
pub mod movement;
pub mod sandbox;
pub mod search;
pub mod strategy;
pub mod valuation;

/// Represents a 2D board coordinate. `(0, 0)` is the bottom-left corner.
///
/// Positions order by `x`, then `y`, which is the tie-break used by every
/// nearest-facility query.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
pub struct Position {
    pub x: usize,
    pub y: usize,
}

impl Position {
    pub const fn new(x: usize, y: usize) -> Self {
        Position { x, y }
    }

    /// Returns the manhattan distance `|dx| + |dy|` between two positions.
    pub fn manhattan_distance(&self, other: &Position) -> usize {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }

    /// Returns the position one step away in `direction`, or `None` if it
    /// would leave a `board_size` x `board_size` board.
    pub fn offset(&self, direction: Direction, board_size: usize) -> Option<Position> {
        let (dx, dy) = direction.delta();
        let x = self.x.checked_add_signed(dx)?;
        let y = self.y.checked_add_signed(dy)?;
        (x < board_size && y < board_size).then_some(Position { x, y })
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// The four grid directions. `Up` increases `y`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Left,
    Right,
    Down,
    Up,
}

impl Direction {
    pub fn delta(self) -> (isize, isize) {
        match self {
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
            Direction::Down => (0, -1),
            Direction::Up => (0, 1),
        }
    }

    pub fn to_action(self) -> TurnAction {
        match self {
            Direction::Left => TurnAction::MoveLeft,
            Direction::Right => TurnAction::MoveRight,
            Direction::Down => TurnAction::MoveDown,
            Direction::Up => TurnAction::MoveUp,
        }
    }
}

/// The two players. Each team sells only at markets of its own color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Team {
    Red,
    Blue,
}

/// The minable resources, in canonical order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ResourceKind {
    Ruby,
    Emerald,
    Diamond,
}

impl ResourceKind {
    pub const ALL: [ResourceKind; 3] = [
        ResourceKind::Ruby,
        ResourceKind::Emerald,
        ResourceKind::Diamond,
    ];

    /// Number of consecutive `Mine` actions needed to extract one item.
    pub fn turns_to_mine(self) -> u32 {
        match self {
            ResourceKind::Ruby => 1,
            ResourceKind::Emerald => 2,
            ResourceKind::Diamond => 3,
        }
    }

    /// Price a fresh economy starts this resource at.
    pub fn base_price(self) -> u32 {
        match self {
            ResourceKind::Ruby => 35,
            ResourceKind::Emerald => 60,
            ResourceKind::Diamond => 100,
        }
    }

    /// The tile a deposit of this resource occupies on the board.
    pub fn tile(self) -> TileKind {
        TileKind::Resource(self)
    }
}

/// The static kind of a board tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum TileKind {
    #[default]
    Empty,
    Recharge,
    Market(Team),
    Resource(ResourceKind),
}

/// An item carried in a player's inventory or lying on the ground.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct InventoryItem {
    pub kind: ResourceKind,
}

/// Actions a strategy can return for a turn. Idling is expressed as `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TurnAction {
    MoveUp,
    MoveDown,
    MoveLeft,
    MoveRight,
    Mine,
    PickUpResource,
}

impl TurnAction {
    pub const ALL: [TurnAction; 6] = [
        TurnAction::MoveUp,
        TurnAction::MoveDown,
        TurnAction::MoveLeft,
        TurnAction::MoveRight,
        TurnAction::Mine,
        TurnAction::PickUpResource,
    ];

    /// The direction of a movement action.
    pub fn direction(self) -> Option<Direction> {
        match self {
            TurnAction::MoveUp => Some(Direction::Up),
            TurnAction::MoveDown => Some(Direction::Down),
            TurnAction::MoveLeft => Some(Direction::Left),
            TurnAction::MoveRight => Some(Direction::Right),
            TurnAction::Mine | TurnAction::PickUpResource => None,
        }
    }
}
