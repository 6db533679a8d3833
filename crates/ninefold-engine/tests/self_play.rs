//! Integration tests driving two players against each other through the public API.

use std::sync::Arc;
use std::sync::atomic::AtomicBool;
use std::time::Duration;

use ninefold_core::{Cell, GameState, Mark, Move};
use ninefold_engine::{
    EvaluationCache, Player, PlayerError, RandomPicker, SearchConfig, SearchControl, is_terminal,
};

fn timed(ms: u64) -> SearchControl {
    SearchControl::new_timed(Arc::new(AtomicBool::new(false)), Duration::from_millis(ms))
}

fn finished(state: &GameState) -> bool {
    is_terminal(state, &mut EvaluationCache::new(Mark::X)) || state.legal_moves().is_empty()
}

/// Play a whole game, X moving first, and return the final position.
fn play_out(x: &mut Player, o: &mut Player) -> GameState {
    x.initiate_game(Mark::X).unwrap();
    o.initiate_game(Mark::O).unwrap();

    let mut state = GameState::new();
    for ply in 0..81 {
        let (mover, other) = if ply % 2 == 0 {
            (&mut *x, &mut *o)
        } else {
            (&mut *o, &mut *x)
        };
        let mv = mover.decide_next_move(&timed(20)).unwrap();
        state.apply(mover.mark().unwrap(), mv).unwrap();
        other.apply_opponent_move(mv).unwrap();

        assert_eq!(mover.state(), Some(&state));
        assert_eq!(other.state(), Some(&state));
        if finished(&state) {
            break;
        }
    }
    state
}

#[test]
fn self_play_stays_legal_until_the_end() {
    let mut x = Player::with_picker(SearchConfig::default(), RandomPicker::seeded(1));
    let mut o = Player::with_picker(SearchConfig::default(), RandomPicker::seeded(2));
    let final_state = play_out(&mut x, &mut o);

    assert!(finished(&final_state));
    let x_stones = final_state.count(Mark::X);
    let o_stones = final_state.count(Mark::O);
    assert!(x_stones == o_stones || x_stones == o_stones + 1);
    assert_eq!(x.moves_made(), Some(x_stones));
    assert_eq!(o.moves_made(), Some(o_stones));
}

#[test]
fn players_reuse_across_games() {
    let mut x = Player::with_picker(SearchConfig { trace: true }, RandomPicker::seeded(3));
    let mut o = Player::with_picker(SearchConfig::default(), RandomPicker::seeded(4));
    play_out(&mut x, &mut o);
    let second = play_out(&mut x, &mut o);
    assert!(finished(&second));
}

#[test]
fn stopped_search_still_returns_a_legal_move() {
    let mut player = Player::new(SearchConfig::default());
    player.initiate_game(Mark::O).unwrap();
    player.apply_opponent_move(Move::from_numbers(5, 5).unwrap()).unwrap();
    player.decide_next_move(&timed(20)).unwrap();
    let reply = player.state().unwrap().legal_moves()[0];
    player.apply_opponent_move(reply).unwrap();

    let before = *player.state().unwrap();
    let control = SearchControl::new_unbounded(Arc::new(AtomicBool::new(true)));
    let mv = player.decide_next_move(&control).unwrap();
    assert!(before.check(mv).is_ok());
}

#[test]
fn full_active_block_means_no_move() {
    // every X move sends O back to block 1 until it fills up
    let mut player = Player::with_picker(SearchConfig::default(), |m: &[Move]| m.first().copied());
    player.initiate_game(Mark::O).unwrap();
    let script = [
        (Mark::X, 1, 1),
        (Mark::O, 1, 2),
        (Mark::X, 2, 1),
        (Mark::O, 1, 5),
        (Mark::X, 5, 1),
        (Mark::O, 1, 3),
        (Mark::X, 3, 1),
        (Mark::O, 1, 4),
        (Mark::X, 4, 1),
        (Mark::O, 1, 7),
        (Mark::X, 7, 1),
        (Mark::O, 1, 6),
        (Mark::X, 6, 1),
        (Mark::O, 1, 9),
        (Mark::X, 9, 1),
        (Mark::O, 1, 8),
        (Mark::X, 8, 1),
    ];
    for (mark, b, c) in script {
        let mv = Move::from_numbers(b, c).unwrap();
        if mark == Mark::O {
            player.record_own_move(mv).unwrap();
        } else {
            player.apply_opponent_move(mv).unwrap();
        }
    }
    let state = *player.state().unwrap();
    assert!(state.block(Cell::new(1).unwrap()).is_full());
    assert_eq!(state.active_block(), Cell::new(1));
    assert_eq!(state.to_move(), Mark::O);
    assert!(matches!(
        player.decide_next_move(&SearchControl::default()),
        Err(PlayerError::NoLegalMove)
    ));
}
