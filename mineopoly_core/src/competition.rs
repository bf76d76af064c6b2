use log::{debug, trace};
use rand::rngs::StdRng;

use crate::{
    InventoryItem, Position, Team, TileKind, TurnAction,
    board::{BoardView, Economy},
    config::{GameConfig, StrategyParams},
    error::{ConfigError, StrategyError},
    facilities::FacilityIndex,
    movement,
    strategy::MineStrategy,
    valuation,
};

const STRATEGY_NAME: &str = "Anonymous";

/// What the agent is currently working toward, and where.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Objective {
    Mine(Position),
    Sell(Position),
    Recharge(Position),
}

impl Objective {
    pub fn destination(&self) -> Position {
        match *self {
            Objective::Mine(destination)
            | Objective::Sell(destination)
            | Objective::Recharge(destination) => destination,
        }
    }
}

/// Everything the competition strategy remembers between turns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgentState {
    pub board_size: usize,
    pub max_inventory: usize,
    pub max_energy: u32,
    pub team: Team,
    pub location: Position,
    pub energy: u32,
    pub facilities: FacilityIndex,
    pub held_items: usize,
    pub objective: Option<Objective>,
    pub mine_depleted: bool,
}

/// The competition player: mines the best-value resource, sells when full,
/// and recharges before a trip it could not come back from.
#[derive(Debug)]
pub struct CompetitionStrategy {
    state: AgentState,
    params: StrategyParams,
    // Held for the host contract; every decision here is deterministic.
    #[allow(dead_code)]
    rng: StdRng,
}

impl CompetitionStrategy {
    /// Validates the match setup and caches facility locations from
    /// `starting_board`, using the default [`StrategyParams`].
    pub fn initialize(
        config: &GameConfig,
        starting_board: &BoardView<'_>,
        start: Position,
        team: Team,
        rng: StdRng,
    ) -> Result<Self, ConfigError> {
        Self::initialize_with_params(
            config,
            StrategyParams::default(),
            starting_board,
            start,
            team,
            rng,
        )
    }

    pub fn initialize_with_params(
        config: &GameConfig,
        params: StrategyParams,
        starting_board: &BoardView<'_>,
        start: Position,
        team: Team,
        rng: StdRng,
    ) -> Result<Self, ConfigError> {
        let limits = config.validate()?;
        params.validate()?;
        if start.x >= limits.board_size || start.y >= limits.board_size {
            return Err(ConfigError::StartOutOfBounds {
                position: start,
                board_size: limits.board_size,
            });
        }
        if starting_board.board_size() != limits.board_size {
            return Err(ConfigError::BoardSizeMismatch {
                expected: limits.board_size,
                actual: starting_board.board_size(),
            });
        }

        let state = AgentState {
            board_size: limits.board_size,
            max_inventory: limits.max_inventory,
            max_energy: limits.max_energy,
            team,
            location: start,
            energy: limits.max_energy,
            facilities: FacilityIndex::scan(starting_board.tiles, team),
            held_items: 0,
            objective: None,
            mine_depleted: false,
        };
        debug!("Initialized {:?} player at {}", team, start);

        Ok(CompetitionStrategy { state, params, rng })
    }

    pub fn state(&self) -> &AgentState {
        &self.state
    }

    pub fn objective(&self) -> Option<Objective> {
        self.state.objective
    }

    /// Re-evaluates the objective for this turn and returns the one to act on.
    fn settle_objective(
        &mut self,
        view: &BoardView<'_>,
        economy: &Economy,
    ) -> Result<Objective, StrategyError> {
        let location = self.state.location;

        let mut objective = match self
            .state
            .objective
            .filter(|objective| !self.is_complete(*objective))
        {
            Some(objective) => objective,
            None => self.next_objective(view, economy)?,
        };

        if self.state.mine_depleted {
            objective = Objective::Sell(self.state.facilities.nearest_home_market(location)?);
        }

        if self.is_energy_critical(objective.destination())? {
            objective = Objective::Recharge(self.state.facilities.nearest_recharge(location)?);
        }

        self.set_objective(objective);
        Ok(objective)
    }

    fn is_complete(&self, objective: Objective) -> bool {
        match objective {
            Objective::Sell(destination) => self.state.location == destination,
            Objective::Recharge(_) => self.state.energy >= self.state.max_energy,
            // Finished by picking up the mined item.
            Objective::Mine(_) => false,
        }
    }

    /// Mines the best-value resource while there is room in the inventory,
    /// otherwise heads to the nearest home market.
    fn next_objective(
        &mut self,
        view: &BoardView<'_>,
        economy: &Economy,
    ) -> Result<Objective, StrategyError> {
        let location = self.state.location;
        if self.state.held_items < self.state.max_inventory {
            let target = valuation::best_mine_target(
                location,
                economy,
                view.tiles,
                self.params.mine_time_deprecation,
            );
            if let Some(target) = target {
                self.state.mine_depleted = false;
                return Ok(Objective::Mine(target.site));
            }
            self.state.mine_depleted = true;
        }
        let market = self.state.facilities.nearest_home_market(location)?;
        Ok(Objective::Sell(market))
    }

    /// True when the trip to `destination` and on to the recharge station
    /// nearest it would cost more energy than is left.
    fn is_energy_critical(&self, destination: Position) -> Result<bool, StrategyError> {
        let recharge = self.state.facilities.nearest_recharge(destination)?;
        let trip = self.state.location.manhattan_distance(&destination)
            + destination.manhattan_distance(&recharge);
        Ok(trip > self.state.energy as usize)
    }

    fn set_objective(&mut self, objective: Objective) {
        if self.state.objective != Some(objective) {
            debug!(
                "Objective {:?} -> {:?} (held {}/{}, energy {}/{})",
                self.state.objective,
                objective,
                self.state.held_items,
                self.state.max_inventory,
                self.state.energy,
                self.state.max_energy
            );
        }
        self.state.objective = Some(objective);
    }

    fn objective_action(
        &mut self,
        objective: Objective,
        view: &BoardView<'_>,
    ) -> Option<TurnAction> {
        let location = self.state.location;
        let destination = objective.destination();
        if location != destination {
            return Some(movement::step(
                location,
                destination,
                view.opponent_location,
                self.state.board_size,
            ));
        }

        match objective {
            Objective::Mine(_) => {
                if view.tile_at(location) == Some(TileKind::Empty) {
                    self.state.objective = None;
                    Some(TurnAction::PickUpResource)
                } else {
                    Some(TurnAction::Mine)
                }
            }
            // Charging happens while standing still.
            Objective::Recharge(_) => None,
            Objective::Sell(_) => None,
        }
    }
}

impl MineStrategy for CompetitionStrategy {
    fn get_turn_action(
        &mut self,
        view: &BoardView<'_>,
        economy: &Economy,
        current_energy: u32,
        _is_red_turn: bool,
    ) -> Result<Option<TurnAction>, StrategyError> {
        self.state.location = view.location;
        self.state.energy = current_energy;

        let objective = self.settle_objective(view, economy)?;
        let action = self.objective_action(objective, view);
        trace!("At {} under {:?}: {:?}", self.state.location, objective, action);
        Ok(action)
    }

    fn on_receive_item(&mut self, item: &InventoryItem) {
        self.state.held_items += 1;
        trace!("Received {:?}, holding {}", item.kind, self.state.held_items);
    }

    fn on_sold_inventory(&mut self, total_sell_price: u32) {
        debug!("Sold {} items for {}", self.state.held_items, total_sell_price);
        self.state.held_items = 0;
    }

    fn name(&self) -> &str {
        STRATEGY_NAME
    }
}
