mod common;

use adversarial_search::games::ttt::{self, Board, Place, Square};
use adversarial_search::util::battle_royale;
use adversarial_search::*;
use common::init_logging;
use rand::rngs::StdRng;
use rand::SeedableRng;

// Ensure that two players using alpha-beta always draw.
#[test]
fn test_ttt_alpha_beta_always_draws() {
    init_logging();
    let game = ttt::Game::default();
    let mut s1 = AlphaBeta::new();
    let mut s2 = AlphaBeta::new();
    let (board, payoffs) = battle_royale(&game, &mut s1, &mut s2).unwrap();
    assert_eq!(None, board.winner(), "\n{}", board);
    assert_eq!(Some(0.0), payoffs.get(Square::X));
}

// Ensure that a player using alpha-beta against a random one always results
// in either a draw or a win for the former player.
#[test]
fn test_ttt_alpha_beta_vs_random_always_wins_or_draws() {
    let game = ttt::Game::default();
    let mut searcher = AlphaBeta::new();
    let mut random = Random::with_rng(StdRng::seed_from_u64(7));
    for _ in 0..20 {
        let (board, _) = battle_royale(&game, &mut searcher, &mut random).unwrap();
        assert_ne!(Some(Square::O), board.winner(), "\n{}", board);
        let (board, _) = battle_royale(&game, &mut random, &mut searcher).unwrap();
        assert_ne!(Some(Square::X), board.winner(), "\n{}", board);
    }
}

#[test]
fn test_ttt_cutoff_vs_random_takes_wins() {
    let game = ttt::Game::default();
    let mut searcher = AlphaBetaCutoff::with_cutoff_ply(ttt::heuristic, 9).unwrap();
    let mut random = Random::with_rng(StdRng::seed_from_u64(11));
    for _ in 0..10 {
        let (board, payoffs) = battle_royale(&game, &mut searcher, &mut random).unwrap();
        assert!(payoffs.get(Square::X).unwrap() >= 0.0, "\n{}", board);
    }
}

#[test]
fn test_ttt_minimax_agrees_with_alpha_beta() {
    for position in ["....X....", "X...O....", "XO..X..O.", "X.O.X.O..", "OX.XX..O."] {
        let board = Board::parse(position).unwrap();
        let game = ttt::Game::from_board(board);
        let mut plain = Minimax::new();
        let mut pruned = AlphaBeta::new();
        let action = plain.choose_action(&game, &board).unwrap();
        assert_eq!(action, pruned.choose_action(&game, &board).unwrap(), "\n{}", board);
        assert_eq!(plain.root_value(), pruned.root_value(), "\n{}", board);
        assert!(pruned.stats().nodes_visited < plain.stats().nodes_visited, "\n{}", board);
        assert_eq!(action, alpha_beta(&game).unwrap());
    }
}

#[test]
fn test_ttt_cutoff_takes_an_immediate_win() {
    let game = ttt::Game::from_board(Board::parse("XX.OO....").unwrap());
    assert_eq!(Some(Place::new(2)), alpha_beta_cutoff(&game, 1, ttt::heuristic).unwrap());
}

#[test]
fn test_ttt_cutoff_blocks_a_threat() {
    let game = ttt::Game::from_board(Board::parse("XX..O....").unwrap());
    let mut strategy = AlphaBetaCutoff::with_cutoff_ply(ttt::heuristic, 2).unwrap();
    assert_eq!(Some(Place::new(2)), strategy.choose_action(&game, &game.start_state()).unwrap());
    assert!(strategy.stats().heuristic_evaluations > 0);
    assert!(strategy.root_value().unwrap() > -1.0);
}

#[test]
fn test_ttt_finished_game_has_no_action() {
    let game = ttt::Game::from_board(Board::parse("XXXOO....").unwrap());
    assert_eq!(None, minimax(&game).unwrap());
    assert_eq!(None, alpha_beta(&game).unwrap());
    assert_eq!(None, alpha_beta_cutoff(&game, 3, ttt::heuristic).unwrap());
}
