//! Depth schedule: how deep to search given how far the game has gone.
//!
//! Early searches stay shallow while the evaluation cache is cold. Later in
//! the game many block states recur, cache hits dominate, and deeper
//! searches stay affordable.
//!
//! | Own moves made | Depth              |
//! |----------------|--------------------|
//! | 0              | none (random move) |
//! | 1              | 1                  |
//! | 2-5            | 7                  |
//! | 6-11           | 9                  |
//! | 12-15          | 11                 |
//! | 16+            | 13                 |

/// Deepest depth the schedule ever asks for.
pub const MAX_DEPTH: u8 = 13;

/// Search depth for the agent's next move, given how many it has made this game.
///
/// Returns `None` for the first move: it is played at random without search.
pub fn depth_for_move_index(moves_made: usize) -> Option<u8> {
    match moves_made {
        0 => None,
        1 => Some(1),
        2..=5 => Some(7),
        6..=11 => Some(9),
        12..=15 => Some(11),
        _ => Some(MAX_DEPTH),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_move_skips_search() {
        assert_eq!(depth_for_move_index(0), None);
    }

    #[test]
    fn boundaries() {
        assert_eq!(depth_for_move_index(1), Some(1));
        assert_eq!(depth_for_move_index(2), Some(7));
        assert_eq!(depth_for_move_index(5), Some(7));
        assert_eq!(depth_for_move_index(6), Some(9));
        assert_eq!(depth_for_move_index(11), Some(9));
        assert_eq!(depth_for_move_index(12), Some(11));
        assert_eq!(depth_for_move_index(15), Some(11));
        assert_eq!(depth_for_move_index(16), Some(13));
        assert_eq!(depth_for_move_index(40), Some(MAX_DEPTH));
    }

    #[test]
    fn monotone() {
        let depths: Vec<u8> = (1..60).filter_map(depth_for_move_index).collect();
        assert!(depths.windows(2).all(|w| w[0] <= w[1]));
    }
}
