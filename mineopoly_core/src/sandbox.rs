use std::collections::HashMap;

use log::{debug, trace};

use crate::{
    InventoryItem, Position, Team, TileKind, TurnAction,
    board::{BoardView, Economy, ParsedBoard},
    config::{GameConfig, GameLimits},
    error::{ConfigError, StrategyError},
    map::Grid,
    strategy::MineStrategy,
};

/// Represents the outcome of processing a player's action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionResult {
    Success,
    Failure(String),
}

/// Summary of a [`Sandbox::run`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SandboxReport {
    pub turns: usize,
    pub items_sold: usize,
    pub earned: u32,
    pub energy: u32,
    pub location: Position,
}

/// A single-player board that applies a strategy's actions.
///
/// The opponent never moves; it only occupies its tile. Moving costs one
/// energy, mining is free, and each turn ending on a recharge tile restores
/// `recharge_rate` energy. Ending a turn on a home market sells the whole
/// inventory.
pub struct Sandbox {
    tiles: Grid<TileKind>,
    items_on_ground: HashMap<Position, Vec<InventoryItem>>,
    economy: Economy,
    limits: GameLimits,
    team: Team,
    location: Position,
    opponent: Position,
    energy: u32,
    inventory: Vec<InventoryItem>,
    mining_progress: u32,
    recharge_rate: u32,
    turns: usize,
    items_sold: usize,
    earned: u32,
}

impl Sandbox {
    pub fn new(
        board: ParsedBoard,
        config: &GameConfig,
        team: Team,
        economy: Economy,
        recharge_rate: u32,
    ) -> Result<Self, ConfigError> {
        let limits = config.validate()?;
        if board.tiles.size() != limits.board_size {
            return Err(ConfigError::BoardSizeMismatch {
                expected: limits.board_size,
                actual: board.tiles.size(),
            });
        }
        Ok(Sandbox {
            tiles: board.tiles,
            items_on_ground: HashMap::new(),
            economy,
            limits,
            team,
            location: board.start,
            opponent: board.opponent,
            energy: limits.max_energy,
            inventory: Vec::new(),
            mining_progress: 0,
            recharge_rate,
            turns: 0,
            items_sold: 0,
            earned: 0,
        })
    }

    /// The player's view of the board as it stands.
    pub fn view(&self) -> BoardView<'_> {
        BoardView {
            tiles: &self.tiles,
            items_on_ground: &self.items_on_ground,
            location: self.location,
            opponent_location: self.opponent,
            opponent_score: 0,
        }
    }

    pub fn location(&self) -> Position {
        self.location
    }

    pub fn energy(&self) -> u32 {
        self.energy
    }

    pub fn inventory(&self) -> &[InventoryItem] {
        &self.inventory
    }

    pub fn tiles(&self) -> &Grid<TileKind> {
        &self.tiles
    }

    /// Plays one turn: asks `strategy` for an action, applies it, then sells
    /// or recharges depending on the tile the player ends on.
    ///
    /// Red holds the tie-break on even turns and blue on odd ones.
    pub fn step(
        &mut self,
        strategy: &mut dyn MineStrategy,
    ) -> Result<(Option<TurnAction>, ActionResult), StrategyError> {
        let action = strategy.get_turn_action(
            &self.view(),
            &self.economy,
            self.energy,
            self.turns % 2 == 0,
        )?;
        let result = match action {
            Some(action) => self.process_action(action, strategy),
            None => ActionResult::Success,
        };
        if let ActionResult::Failure(reason) = &result {
            debug!("Turn {}: {:?} failed: {}", self.turns, action, reason);
        }
        self.settle_tile(strategy);
        self.turns += 1;
        Ok((action, result))
    }

    /// Plays `turns` turns and reports the totals.
    pub fn run(
        &mut self,
        strategy: &mut dyn MineStrategy,
        turns: usize,
    ) -> Result<SandboxReport, StrategyError> {
        for _ in 0..turns {
            let (action, _) = self.step(strategy)?;
            trace!(
                "Turn {}: {:?} -> at {} with {} energy",
                self.turns, action, self.location, self.energy
            );
        }
        Ok(self.report())
    }

    pub fn report(&self) -> SandboxReport {
        SandboxReport {
            turns: self.turns,
            items_sold: self.items_sold,
            earned: self.earned,
            energy: self.energy,
            location: self.location,
        }
    }

    fn process_action(
        &mut self,
        action: TurnAction,
        strategy: &mut dyn MineStrategy,
    ) -> ActionResult {
        if let Some(direction) = action.direction() {
            if self.energy == 0 {
                return ActionResult::Failure("Out of energy.".to_string());
            }
            let Some(target) = self.location.offset(direction, self.limits.board_size) else {
                return ActionResult::Failure("Target position is out of bounds.".to_string());
            };
            if target == self.opponent {
                return ActionResult::Failure(
                    "Target position is occupied by the opponent.".to_string(),
                );
            }
            self.location = target;
            self.energy -= 1;
            self.mining_progress = 0;
            return ActionResult::Success;
        }

        let tile = self.tiles[self.location];
        match action {
            TurnAction::Mine => match tile {
                TileKind::Resource(kind) => {
                    self.mining_progress += 1;
                    if self.mining_progress >= kind.turns_to_mine() {
                        self.tiles[self.location] = TileKind::Empty;
                        self.items_on_ground
                            .entry(self.location)
                            .or_default()
                            .push(InventoryItem { kind });
                        self.mining_progress = 0;
                    }
                    ActionResult::Success
                }
                _ => ActionResult::Failure("Nothing to mine here.".to_string()),
            },
            TurnAction::PickUpResource => {
                if self.inventory.len() >= self.limits.max_inventory {
                    return ActionResult::Failure("Inventory is full.".to_string());
                }
                let Some(item) = self
                    .items_on_ground
                    .get_mut(&self.location)
                    .and_then(Vec::pop)
                else {
                    return ActionResult::Failure("Nothing to pick up here.".to_string());
                };
                self.inventory.push(item);
                strategy.on_receive_item(&item);
                ActionResult::Success
            }
            // Movement was handled above.
            _ => ActionResult::Success,
        }
    }

    fn settle_tile(&mut self, strategy: &mut dyn MineStrategy) {
        let tile = self.tiles[self.location];
        match tile {
            TileKind::Market(owner) if owner == self.team && !self.inventory.is_empty() => {
                let total = self.economy.sell_value(&self.inventory);
                self.items_sold += self.inventory.len();
                self.earned += total;
                debug!("Sold {} items for {}", self.inventory.len(), total);
                self.inventory.clear();
                strategy.on_sold_inventory(total);
            }
            TileKind::Recharge => {
                self.energy = self
                    .energy
                    .saturating_add(self.recharge_rate)
                    .min(self.limits.max_energy);
            }
            _ => {}
        }
    }
}
