use log::debug;

use crate::{Position, ResourceKind, TileKind, board::Economy, map::Grid, search};

/// The mine chosen by [`best_mine_target`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MineTarget {
    pub kind: ResourceKind,
    pub site: Position,
    pub value: f64,
}

/// Price earned per turn of effort for mining `kind` at `site`.
///
/// Effort is travel distance plus `deprecation` tiles for each turn spent
/// mining.
pub fn weighted_value(
    origin: Position,
    site: Position,
    kind: ResourceKind,
    price: u32,
    deprecation: f64,
) -> f64 {
    let effort =
        origin.manhattan_distance(&site) as f64 + deprecation * f64::from(kind.turns_to_mine());
    f64::from(price) / effort
}

/// Picks the priced resource with the best [`weighted_value`], using the
/// nearest deposit of each kind.
///
/// Kinds are considered in canonical order and a later kind must score
/// strictly higher to replace an earlier one. A kind worth nothing is never
/// chosen. `None` means no priced resource is left on the board.
pub fn best_mine_target(
    origin: Position,
    economy: &Economy,
    tiles: &Grid<TileKind>,
    deprecation: f64,
) -> Option<MineTarget> {
    let mut best: Option<MineTarget> = None;
    let mut best_value = 0.0;

    for (kind, price) in economy.current_prices() {
        let Some(site) = search::nearest_tile_of_kind(origin, kind.tile(), tiles) else {
            continue;
        };
        let value = weighted_value(origin, site, kind, price, deprecation);
        if value > best_value {
            best_value = value;
            best = Some(MineTarget { kind, site, value });
        }
    }

    match &best {
        Some(target) => debug!(
            "Best mine from {}: {:?} at {} (value {:.3})",
            origin, target.kind, target.site, target.value
        ),
        None => debug!("No priced resource reachable from {}", origin),
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;

    fn economy() -> Economy {
        Economy::new(&[
            ResourceKind::Diamond,
            ResourceKind::Emerald,
            ResourceKind::Ruby,
        ])
    }

    fn board(deposits: &[(usize, usize, ResourceKind)]) -> Grid<TileKind> {
        let mut tiles = Grid::new(10);
        for &(x, y, kind) in deposits {
            tiles[Position::new(x, y)] = kind.tile();
        }
        tiles
    }

    #[test]
    fn value_discounts_distance_and_mining_time() {
        let value = weighted_value(
            Position::new(0, 0),
            Position::new(2, 0),
            ResourceKind::Emerald,
            60,
            4.0,
        );
        assert_eq!(value, 6.0);
    }

    #[test]
    fn same_distance_prefers_higher_price() {
        let tiles = board(&[
            (1, 7, ResourceKind::Diamond),
            (5, 7, ResourceKind::Emerald),
        ]);
        let target = best_mine_target(Position::new(3, 7), &economy(), &tiles, 4.0).unwrap();
        assert_eq!(target.kind, ResourceKind::Diamond);
        assert_eq!(target.site, Position::new(1, 7));
    }

    #[test]
    fn cheaper_but_closer_can_win() {
        let tiles = board(&[(3, 3, ResourceKind::Ruby), (8, 7, ResourceKind::Diamond)]);
        let target = best_mine_target(Position::new(4, 4), &economy(), &tiles, 4.0).unwrap();
        assert_eq!(target.site, Position::new(3, 3));
    }

    #[test]
    fn pricier_but_further_can_win() {
        let tiles = board(&[(8, 7, ResourceKind::Diamond), (3, 3, ResourceKind::Ruby)]);
        let target = best_mine_target(Position::new(6, 3), &economy(), &tiles, 4.0).unwrap();
        assert_eq!(target.site, Position::new(8, 7));
    }

    #[test]
    fn ties_go_to_first_kind_in_canonical_order() {
        let tiles = board(&[(0, 3, ResourceKind::Ruby), (4, 0, ResourceKind::Emerald)]);
        let mut prices = economy();
        prices.set_price(ResourceKind::Ruby, 70);
        prices.set_price(ResourceKind::Emerald, 120);
        prices.set_price(ResourceKind::Diamond, 0);
        // Ruby: 70 / (3 + 4) = 10. Emerald: 120 / (4 + 8) = 10.
        let target = best_mine_target(Position::new(0, 0), &prices, &tiles, 4.0).unwrap();
        assert_eq!(target.kind, ResourceKind::Ruby);
    }

    #[test]
    fn unpriced_and_worthless_kinds_are_skipped() {
        let tiles = board(&[(1, 1, ResourceKind::Emerald), (9, 9, ResourceKind::Ruby)]);
        let mut prices = Economy::new(&[ResourceKind::Ruby, ResourceKind::Diamond]);
        let target = best_mine_target(Position::new(0, 0), &prices, &tiles, 4.0).unwrap();
        assert_eq!(target.kind, ResourceKind::Ruby);

        prices.set_price(ResourceKind::Ruby, 0);
        assert_eq!(best_mine_target(Position::new(0, 0), &prices, &tiles, 4.0), None);
    }

    #[test]
    fn empty_board_is_depleted() {
        assert_eq!(
            best_mine_target(Position::new(5, 5), &economy(), &Grid::new(10), 4.0),
            None
        );
    }
}
