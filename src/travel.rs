use crate::world::TileOccupant;
use std::cmp::Ordering;

/// One step of 8-way grid movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepDirection {
    Up,
    Down,
    Left,
    Right,
    UpLeft,
    UpRight,
    DownLeft,
    DownRight,
}

/// Direction of the single grid step that moves `from` toward `to`, or
/// `None` when the tiles coincide. Used by the player-movement collaborator
/// to walk toward the pointer's tile.
pub fn step_toward(from: (i32, i32), to: (i32, i32)) -> Option<StepDirection> {
    let dx = to.0 - from.0;
    let dy = to.1 - from.1;
    match (dx.cmp(&0), dy.cmp(&0)) {
        (Ordering::Equal, Ordering::Equal) => None,
        (Ordering::Equal, Ordering::Greater) => Some(StepDirection::Down),
        (Ordering::Equal, Ordering::Less) => Some(StepDirection::Up),
        (Ordering::Less, Ordering::Equal) => Some(StepDirection::Left),
        (Ordering::Greater, Ordering::Equal) => Some(StepDirection::Right),
        (Ordering::Less, Ordering::Greater) => Some(StepDirection::DownLeft),
        (Ordering::Greater, Ordering::Greater) => Some(StepDirection::DownRight),
        (Ordering::Less, Ordering::Less) => Some(StepDirection::UpLeft),
        (Ordering::Greater, Ordering::Less) => Some(StepDirection::UpRight),
    }
}

/// Whole-tile distance between two tiles: the Euclidean magnitude, floored.
pub fn tile_distance(a: (i32, i32), b: (i32, i32)) -> u32 {
    let dx = (b.0 - a.0) as f64;
    let dy = (b.1 - a.1) as f64;
    (dx * dx + dy * dy).sqrt().floor() as u32
}

/// Whether `occupant` can be triggered remotely by a player standing at
/// `player` while the pointer rests on `target`.
pub fn within_trigger_range(
    occupant: &TileOccupant,
    player: (i32, i32),
    target: (i32, i32),
) -> bool {
    match occupant.trigger_range {
        Some(range) => tile_distance(player, target) <= range,
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_toward_covers_all_octants() {
        assert_eq!(step_toward((5, 5), (5, 5)), None);
        assert_eq!(step_toward((5, 5), (5, 9)), Some(StepDirection::Down));
        assert_eq!(step_toward((5, 5), (5, 1)), Some(StepDirection::Up));
        assert_eq!(step_toward((5, 5), (1, 5)), Some(StepDirection::Left));
        assert_eq!(step_toward((5, 5), (9, 5)), Some(StepDirection::Right));
        assert_eq!(step_toward((5, 5), (1, 9)), Some(StepDirection::DownLeft));
        assert_eq!(step_toward((5, 5), (9, 9)), Some(StepDirection::DownRight));
        assert_eq!(step_toward((5, 5), (1, 1)), Some(StepDirection::UpLeft));
        assert_eq!(step_toward((5, 5), (9, 1)), Some(StepDirection::UpRight));
    }

    #[test]
    fn tile_distance_floors_magnitude() {
        assert_eq!(tile_distance((0, 0), (3, 4)), 5);
        assert_eq!(tile_distance((0, 0), (1, 1)), 1);
        assert_eq!(tile_distance((2, 2), (2, 2)), 0);
    }

    #[test]
    fn trigger_range_checks_distance() {
        let reachable = TileOccupant {
            hover_icon: None,
            trigger_range: Some(5),
        };
        assert!(within_trigger_range(&reachable, (0, 0), (3, 4)));
        assert!(!within_trigger_range(&reachable, (0, 0), (5, 4)));

        let inert = TileOccupant {
            hover_icon: None,
            trigger_range: None,
        };
        assert!(!within_trigger_range(&inert, (0, 0), (0, 0)));
    }
}
