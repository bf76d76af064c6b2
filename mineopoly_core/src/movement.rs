use log::warn;

use crate::{Direction, Position, TurnAction};

/// Directions that bring `origin` closer to `destination`, most preferred
/// first: horizontal before vertical, left before right, down before up.
fn preferred_directions(origin: Position, destination: Position) -> Vec<Direction> {
    let mut directions = Vec::with_capacity(2);
    if origin.x > destination.x {
        directions.push(Direction::Left);
    } else if origin.x < destination.x {
        directions.push(Direction::Right);
    }
    if origin.y > destination.y {
        directions.push(Direction::Down);
    } else if origin.y < destination.y {
        directions.push(Direction::Up);
    }
    directions
}

/// Chooses a single greedy step from `origin` toward `destination`.
///
/// A direction is skipped if it would land on `opponent`, the opponent's last
/// observed position. Avoidance is best-effort: the opponent moves at the same
/// time as us. When no approaching direction is free, the agent sidesteps
/// right if it is already in the destination column and up otherwise,
/// mirrored to left or down when that would leave the board.
pub fn step(
    origin: Position,
    destination: Position,
    opponent: Position,
    board_size: usize,
) -> TurnAction {
    let preferred = preferred_directions(origin, destination);
    let free = preferred
        .iter()
        .copied()
        .find(|direction| origin.offset(*direction, board_size) != Some(opponent));
    if let Some(direction) = free {
        return direction.to_action();
    }

    let (sidestep, mirror) = if origin.x == destination.x {
        (Direction::Right, Direction::Left)
    } else {
        (Direction::Up, Direction::Down)
    };
    let direction = if origin.offset(sidestep, board_size).is_some() {
        sidestep
    } else {
        mirror
    };
    warn!(
        "Path from {} to {} blocked by opponent at {}, sidestepping {:?}",
        origin, destination, opponent, direction
    );
    direction.to_action()
}

#[cfg(test)]
mod tests {
    use super::*;

    const SIZE: usize = 10;
    const FAR_AWAY: Position = Position::new(9, 0);

    fn p(x: usize, y: usize) -> Position {
        Position::new(x, y)
    }

    #[test]
    fn moves_toward_destination_on_single_axis() {
        assert_eq!(step(p(2, 2), p(1, 2), FAR_AWAY, SIZE), TurnAction::MoveLeft);
        assert_eq!(step(p(0, 0), p(1, 0), FAR_AWAY, SIZE), TurnAction::MoveRight);
        assert_eq!(step(p(5, 6), p(5, 9), FAR_AWAY, SIZE), TurnAction::MoveUp);
        assert_eq!(step(p(9, 9), p(9, 2), FAR_AWAY, SIZE), TurnAction::MoveDown);
    }

    #[test]
    fn horizontal_moves_come_first() {
        assert_eq!(step(p(2, 3), p(1, 5), FAR_AWAY, SIZE), TurnAction::MoveLeft);
        assert_eq!(step(p(2, 1), p(1, 0), FAR_AWAY, SIZE), TurnAction::MoveLeft);
        assert_eq!(step(p(3, 6), p(5, 9), FAR_AWAY, SIZE), TurnAction::MoveRight);
        assert_eq!(step(p(1, 9), p(9, 2), FAR_AWAY, SIZE), TurnAction::MoveRight);
    }

    #[test]
    fn blocked_horizontal_falls_through_to_vertical() {
        assert_eq!(step(p(2, 2), p(1, 6), p(1, 2), SIZE), TurnAction::MoveUp);
        assert_eq!(step(p(2, 1), p(0, 0), p(1, 1), SIZE), TurnAction::MoveDown);
        assert_eq!(step(p(3, 6), p(7, 9), p(4, 6), SIZE), TurnAction::MoveUp);
        assert_eq!(step(p(1, 9), p(9, 2), p(2, 9), SIZE), TurnAction::MoveDown);
    }

    #[test]
    fn blocked_straight_line_sidesteps() {
        assert_eq!(step(p(2, 3), p(0, 3), p(1, 3), SIZE), TurnAction::MoveUp);
        assert_eq!(step(p(2, 1), p(6, 1), p(3, 1), SIZE), TurnAction::MoveUp);
        assert_eq!(step(p(3, 6), p(3, 9), p(3, 7), SIZE), TurnAction::MoveRight);
    }

    #[test]
    fn sidestep_mirrors_at_board_edge() {
        assert_eq!(step(p(9, 3), p(9, 0), p(9, 2), SIZE), TurnAction::MoveLeft);
        assert_eq!(step(p(2, 9), p(0, 9), p(1, 9), SIZE), TurnAction::MoveDown);
    }

    #[test]
    fn every_free_step_closes_distance_by_one() {
        for ox in 0..SIZE {
            for oy in 0..SIZE {
                let origin = p(ox, oy);
                let destination = p(4, 7);
                if origin == destination {
                    continue;
                }
                let action = step(origin, destination, FAR_AWAY, SIZE);
                let next = origin
                    .offset(action.direction().unwrap(), SIZE)
                    .unwrap();
                assert_eq!(
                    next.manhattan_distance(&destination) + 1,
                    origin.manhattan_distance(&destination),
                    "from {origin}"
                );
            }
        }
    }
}
