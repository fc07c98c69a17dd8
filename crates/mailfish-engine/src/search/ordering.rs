//! Move ordering by incremental score gain.

use mailfish_core::{MoveList, Position};

/// Sort `moves` so the largest immediate gains are searched first.
///
/// Ties keep generation order.
pub fn order_moves(pos: &Position, moves: &mut MoveList) {
    moves
        .as_mut_slice()
        .sort_by_cached_key(|&mv| std::cmp::Reverse(pos.value(mv)));
}

#[cfg(test)]
mod tests {
    use super::*;

    use mailfish_core::Game;

    #[test]
    fn captures_before_quiet_moves() {
        // White queen on d1 can take the undefended black queen on d5.
        let game: Game = "4k3/8/8/3q4/8/8/8/3QK3 w - - 0 1".parse().unwrap();
        let pos = game.position();
        let mut moves = pos.moves();
        order_moves(pos, &mut moves);
        assert_eq!(game.move_to_uci(moves.as_slice()[0]), "d1d5");
    }

    #[test]
    fn ordering_is_descending() {
        let pos = Position::starting_position();
        let mut moves = pos.moves();
        let count = moves.len();
        order_moves(&pos, &mut moves);
        assert_eq!(moves.len(), count);
        let values: Vec<i32> = moves.iter().map(|&mv| pos.value(mv)).collect();
        assert!(values.windows(2).all(|w| w[0] >= w[1]));
    }
}
