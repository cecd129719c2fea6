use connectw::ai::{Agent, AgentKind, Mcts, Minimax, SearchConfig};
use connectw::core::{Board, EngineError, Player};
use connectw::heuristics::HeuristicKind;
use connectw::utils::make_rng;
use indoc::indoc;

/// Player one wins by dropping into column 4; player two threatens column 0
fn winning_board() -> Board {
    Board::from_snapshot(indoc! {"
        . . . . . . .
        . . . . . . .
        . . . . . . .
        2 . . . . . .
        2 . . . . . .
        2 1 1 1 . . .
    "})
    .unwrap()
}

const WINNING_COLUMN: usize = 4;

#[test]
fn test_minimax_takes_immediate_win() {
    let board = winning_board();
    assert_eq!(board.next_to_move(), Player::One);

    for heuristic in HeuristicKind::ALL {
        for depth in 1..=4 {
            for seed in 0..3 {
                let config = SearchConfig {
                    depth,
                    heuristic,
                    ..SearchConfig::default()
                };
                let mut minimax = Minimax::new(make_rng(Some(seed)));
                assert_eq!(
                    minimax.search(&board, Player::One, &config).unwrap(),
                    WINNING_COLUMN,
                    "heuristic {} depth {} seed {}",
                    heuristic,
                    depth,
                    seed
                );
            }
        }
    }
}

#[test]
fn test_mcts_prefers_immediate_win() {
    let board = winning_board();
    let config = SearchConfig {
        iterations: Some(2000),
        ..SearchConfig::default()
    };

    let runs = 7;
    let wins = (0..runs)
        .filter(|&seed| {
            let mut mcts = Mcts::new(make_rng(Some(seed)));
            mcts.search(&board, Player::One, &config).unwrap() == WINNING_COLUMN
        })
        .count();

    assert!(wins * 2 > runs as usize, "only {} of {} runs found the win", wins, runs);
}

#[test]
fn test_alpha_beta_prunes() {
    let board = winning_board();
    let config = SearchConfig {
        depth: 3,
        heuristic: HeuristicKind::Zero,
        ..SearchConfig::default()
    };

    let mut pruned = Minimax::new(make_rng(Some(21)));
    let mut full = Minimax::full_width(make_rng(Some(21)));

    let pruned_move = pruned.search(&board, Player::One, &config).unwrap();
    let full_move = full.search(&board, Player::One, &config).unwrap();

    assert_eq!(pruned_move, full_move);
    assert!(
        pruned.nodes_explored() < full.nodes_explored(),
        "pruned {} vs full {}",
        pruned.nodes_explored(),
        full.nodes_explored()
    );
}

#[test]
fn test_seeded_searches_are_reproducible() {
    let board = Board::from_snapshot(indoc! {"
        . . . . . . .
        . . . . . . .
        . . . . . . .
        . . . . . . .
        . . . 2 . . .
        . . 1 1 . . .
    "})
    .unwrap();
    let config = SearchConfig {
        depth: 3,
        iterations: Some(300),
        ..SearchConfig::default()
    };

    for kind in AgentKind::ALL {
        let first = kind.build(Some(99)).search(&board, Player::Two, &config).unwrap();
        let second = kind.build(Some(99)).search(&board, Player::Two, &config).unwrap();
        assert_eq!(first, second, "agent {}", kind);
    }
}

#[test]
fn test_invalid_configs_rejected() {
    let board = Board::new(7, 6).unwrap();
    assert!(matches!(Board::new(0, 6), Err(EngineError::InvalidConfiguration(_))));
    assert!(matches!(Board::new(7, 0), Err(EngineError::InvalidConfiguration(_))));

    for config in [
        SearchConfig { win_length: 1, ..SearchConfig::default() },
        SearchConfig { iterations: Some(0), ..SearchConfig::default() },
    ] {
        for kind in AgentKind::ALL {
            assert!(
                matches!(
                    kind.build(Some(0)).search(&board, Player::One, &config),
                    Err(EngineError::InvalidConfiguration(_))
                ),
                "agent {} accepted {:?}",
                kind,
                config
            );
        }
    }
}
