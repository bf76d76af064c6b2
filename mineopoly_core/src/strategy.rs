use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::{InventoryItem, TurnAction, board::BoardView, board::Economy, error::StrategyError};

/// Trait defining the behavior of a player.
/// The host calls these once per event, from a single thread, and waits for
/// each to return.
pub trait MineStrategy {
    /// Determines the action for this turn, or `None` to idle.
    ///
    /// `is_red_turn` says which player wins when both try to enter the same
    /// tile this turn.
    fn get_turn_action(
        &mut self,
        view: &BoardView<'_>,
        economy: &Economy,
        current_energy: u32,
        is_red_turn: bool,
    ) -> Result<Option<TurnAction>, StrategyError>;

    /// Called when the previous turn's action put `item` in the inventory.
    fn on_receive_item(&mut self, item: &InventoryItem);

    /// Called after the whole inventory was sold for `total_sell_price`.
    fn on_sold_inventory(&mut self, total_sell_price: u32);

    /// Called at the end of each round.
    fn end_round(&mut self, _points_scored: u32, _opponent_points_scored: u32) {}

    /// Display name of the strategy.
    fn name(&self) -> &str;
}

/// A player that picks a uniformly random action (or idles) every turn.
#[derive(Debug)]
pub struct RandomStrategy {
    rng: StdRng,
}

impl RandomStrategy {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl MineStrategy for RandomStrategy {
    fn get_turn_action(
        &mut self,
        _view: &BoardView<'_>,
        _economy: &Economy,
        _current_energy: u32,
        _is_red_turn: bool,
    ) -> Result<Option<TurnAction>, StrategyError> {
        // One slot past the last action means idle.
        let choice = self.rng.random_range(0..=TurnAction::ALL.len());
        Ok(TurnAction::ALL.get(choice).copied())
    }

    fn on_receive_item(&mut self, _item: &InventoryItem) {}

    fn on_sold_inventory(&mut self, _total_sell_price: u32) {}

    fn name(&self) -> &str {
        "Random"
    }
}
