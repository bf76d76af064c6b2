use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};

use crate::{InventoryItem, Position, ResourceKind, Team, TileKind, map::Grid};

/// Provides a read-only view of the board relevant to one player.
///
/// The host builds a fresh view every turn. `opponent_location` is where the
/// other player stood when the view was taken; it may have moved since.
#[derive(Debug, Clone, Copy)]
pub struct BoardView<'a> {
    pub tiles: &'a Grid<TileKind>,
    pub items_on_ground: &'a HashMap<Position, Vec<InventoryItem>>,
    pub location: Position,
    pub opponent_location: Position,
    pub opponent_score: u32,
}

impl BoardView<'_> {
    pub fn board_size(&self) -> usize {
        self.tiles.size()
    }

    /// Tile kind at `position`, or `None` outside the board.
    pub fn tile_at(&self, position: Position) -> Option<TileKind> {
        self.tiles.get(position).copied()
    }

    pub fn items_at(&self, position: Position) -> &[InventoryItem] {
        self.items_on_ground
            .get(&position)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}

/// Current unit sell price of each tradeable resource.
///
/// Prices are kept in canonical resource order, which is the order the
/// valuation walks them in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Economy {
    prices: BTreeMap<ResourceKind, u32>,
}

impl Economy {
    /// Creates an economy trading `kinds`, each at its base price.
    pub fn new(kinds: &[ResourceKind]) -> Self {
        Economy {
            prices: kinds.iter().map(|kind| (*kind, kind.base_price())).collect(),
        }
    }

    pub fn price(&self, kind: ResourceKind) -> Option<u32> {
        self.prices.get(&kind).copied()
    }

    pub fn set_price(&mut self, kind: ResourceKind, price: u32) {
        self.prices.insert(kind, price);
    }

    pub fn current_prices(&self) -> impl Iterator<Item = (ResourceKind, u32)> + '_ {
        self.prices.iter().map(|(kind, price)| (*kind, *price))
    }

    /// Total sell price of `items`. Untraded kinds are worth nothing.
    pub fn sell_value(&self, items: &[InventoryItem]) -> u32 {
        items
            .iter()
            .filter_map(|item| self.price(item.kind))
            .sum()
    }
}

impl Default for Economy {
    fn default() -> Self {
        Economy::new(&ResourceKind::ALL)
    }
}

/// Errors from [`parse_board`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardParseError {
    #[error("Board string is empty")]
    Empty,
    #[error("Inconsistent width at row {row}: expected {expected}, found {found}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("Board must be square, found {width} columns and {height} rows")]
    NotSquare { width: usize, height: usize },
    #[error("Unknown board code '{code}' at {position}")]
    UnknownCode { code: String, position: Position },
    #[error("Multiple '{code}' markers found, second at {position}")]
    DuplicateMarker {
        code: &'static str,
        position: Position,
    },
    #[error("No start position ('ST') found on the board")]
    MissingStart,
}

/// A board loaded from text, with the marked player positions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedBoard {
    pub tiles: Grid<TileKind>,
    pub start: Position,
    pub opponent: Position,
}

/// Loads a board from whitespace-separated two-letter codes.
///
/// The first line is the top row (`y = size - 1`). Codes: `BL` empty, `RC`
/// recharge, `MR`/`MB` red/blue market, `RR`/`RE`/`RD` ruby/emerald/diamond,
/// `ST` this player's start and `OP` the opponent's start (both empty
/// tiles). Without `OP` the opponent starts at the start mirrored through the
/// board centre.
pub fn parse_board(text: &str) -> Result<ParsedBoard, BoardParseError> {
    let rows: Vec<Vec<&str>> = text
        .trim()
        .lines()
        .map(|line| line.split_whitespace().collect())
        .collect();
    let height = rows.len();
    let width = rows.first().map(Vec::len).unwrap_or(0);
    if width == 0 {
        return Err(BoardParseError::Empty);
    }
    for (row, tokens) in rows.iter().enumerate() {
        if tokens.len() != width {
            return Err(BoardParseError::RaggedRow {
                row,
                expected: width,
                found: tokens.len(),
            });
        }
    }
    if width != height {
        return Err(BoardParseError::NotSquare { width, height });
    }

    let size = width;
    let mut tiles = Grid::new(size);
    let mut start = None;
    let mut opponent = None;

    for (row, tokens) in rows.iter().enumerate() {
        let y = size - 1 - row;
        for (x, token) in tokens.iter().enumerate() {
            let position = Position { x, y };
            let tile = match *token {
                "BL" => TileKind::Empty,
                "RC" => TileKind::Recharge,
                "MR" => TileKind::Market(Team::Red),
                "MB" => TileKind::Market(Team::Blue),
                "RR" => TileKind::Resource(ResourceKind::Ruby),
                "RE" => TileKind::Resource(ResourceKind::Emerald),
                "RD" => TileKind::Resource(ResourceKind::Diamond),
                "ST" => {
                    if start.replace(position).is_some() {
                        return Err(BoardParseError::DuplicateMarker { code: "ST", position });
                    }
                    TileKind::Empty
                }
                "OP" => {
                    if opponent.replace(position).is_some() {
                        return Err(BoardParseError::DuplicateMarker { code: "OP", position });
                    }
                    TileKind::Empty
                }
                unknown => {
                    return Err(BoardParseError::UnknownCode {
                        code: unknown.to_string(),
                        position,
                    });
                }
            };
            tiles[position] = tile;
        }
    }

    let start = start.ok_or(BoardParseError::MissingStart)?;
    let opponent = opponent.unwrap_or(Position {
        x: size - 1 - start.x,
        y: size - 1 - start.y,
    });

    Ok(ParsedBoard {
        tiles,
        start,
        opponent,
    })
}
