use std::collections::BTreeSet;

use log::debug;

use crate::{
    Position, Team, TileKind,
    error::{FacilityKind, StrategyError},
    map::Grid,
};

/// Returns the element of `candidates` closest to `origin` by manhattan
/// distance.
///
/// Ties go to the first candidate in iteration order; with a `BTreeSet` that
/// is the lowest `x`, then the lowest `y`.
pub fn nearest<'a, I>(origin: Position, candidates: I) -> Option<Position>
where
    I: IntoIterator<Item = &'a Position>,
{
    candidates
        .into_iter()
        .copied()
        .min_by_key(|candidate| origin.manhattan_distance(candidate))
}

/// Recharge and home-market locations, captured once from the starting board.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FacilityIndex {
    recharge: BTreeSet<Position>,
    home_markets: BTreeSet<Position>,
}

impl FacilityIndex {
    /// Scans every tile of `tiles` for recharge stations and markets of `team`.
    pub fn scan(tiles: &Grid<TileKind>, team: Team) -> Self {
        let mut index = FacilityIndex::default();
        for (position, tile) in tiles.enumerate() {
            match tile {
                TileKind::Recharge => {
                    index.recharge.insert(position);
                }
                TileKind::Market(owner) if *owner == team => {
                    index.home_markets.insert(position);
                }
                _ => {}
            }
        }
        debug!(
            "Facility scan for {:?}: {} recharge, {} home market",
            team,
            index.recharge.len(),
            index.home_markets.len()
        );
        index
    }

    pub fn recharge_locations(&self) -> &BTreeSet<Position> {
        &self.recharge
    }

    pub fn home_market_locations(&self) -> &BTreeSet<Position> {
        &self.home_markets
    }

    pub fn nearest_recharge(&self, origin: Position) -> Result<Position, StrategyError> {
        nearest(origin, &self.recharge).ok_or(StrategyError::NoFacility {
            kind: FacilityKind::Recharge,
        })
    }

    pub fn nearest_home_market(&self, origin: Position) -> Result<Position, StrategyError> {
        nearest(origin, &self.home_markets).ok_or(StrategyError::NoFacility {
            kind: FacilityKind::HomeMarket,
        })
    }
}
