//! Board controller integration tests.
//!
//! Fixtures are built with `Board::from_grid` and a `ScriptedSource` so
//! every refill is known in advance.

use rust_match3::core::StoreError;
use rust_match3::rules::{has_any_run, would_create_match};
use rust_match3::{
    Board, BoardConfig, EngineError, FileStore, GameRng, Grid, MemoryStore, Phase, Point,
    ScoreStore, ScriptedSource, SwapRejection, TileType,
};

/// Palette indices for scripted refills.
const COBBLESTONE: usize = 0;
const CRYING_OBSIDIAN: usize = 1;
const DIRT: usize = 2;
const ENDSTONE: usize = 3;
const MUD: usize = 4;
const NETHERRACK: usize = 5;

fn fixture<S: ScoreStore>(rows: &[&str], store: S, script: Vec<usize>) -> Board<S, ScriptedSource> {
    let grid = Grid::from_glyphs(rows).unwrap();
    Board::from_grid(BoardConfig::default(), grid, store, ScriptedSource::new(script)).unwrap()
}

/// One legal swap, (0,1)<->(0,2), clearing column 0. With refills of
/// Cobblestone, Dirt, Endstone the board ends up deadlocked.
const LAST_MOVE: [&str; 3] = ["CCD", "DEE", "CDD"];

/// Swapping (1,0)<->(2,0) clears column 1. Refilling (1,0) with Cobblestone
/// completes C C C along row 0 behind the scan, so a second pass is needed.
const TWO_PASS: [&str; 4] = ["CCED", "EEDE", "EECC", "DDED"];
const TWO_PASS_SCRIPT: [usize; 4] = [COBBLESTONE, DIRT, CRYING_OBSIDIAN, CRYING_OBSIDIAN];

/// Store whose every operation fails.
struct BrokenStore;

impl ScoreStore for BrokenStore {
    fn get_int(&self, _key: &str, _default: i64) -> Result<i64, StoreError> {
        Err(std::io::Error::other("unreachable").into())
    }

    fn set_int(&mut self, _key: &str, _value: i64) -> Result<(), StoreError> {
        Err(std::io::Error::other("unreachable").into())
    }
}

// =============================================================================
// Swap Tests
// =============================================================================

/// A run far from the swapped cells still makes the swap legal, and the
/// swap scores exactly that one run.
#[test]
fn test_swap_accepted_for_unrelated_run() {
    let rows = ["CDEMN", "DEMNC", "SSSPD", "EMNCD"];
    let mut board = fixture(&rows, MemoryStore::new(), vec![NETHERRACK, COBBLESTONE, MUD]);
    let a = Point::new(3, 0);
    let b = Point::new(4, 0);

    assert!(would_create_match(board.grid(), a, b));

    let outcome = board.try_swap(a, b).unwrap();

    assert!(outcome.is_applied());
    assert_eq!(outcome.match_events(), 1);
    assert_eq!(outcome.resolution.passes, 1);
    assert_eq!(board.score(), 1);

    let event = &outcome.resolution.events[0];
    assert_eq!(event.run.kind, TileType::Sandstone);
    assert!(!event.run.contains(a) && !event.run.contains(b));

    assert_eq!(board.grid().to_string(), "CDENM\nDEMNC\nNCMPD\nEMNCD\n");
    assert_eq!(board.phase(), Phase::Playing);
}

#[test]
fn test_non_adjacent_swap_changes_nothing() {
    let mut board = Board::new(BoardConfig::default(), MemoryStore::new(), GameRng::new(11)).unwrap();
    let grid = board.grid().clone();
    let score = board.score();

    for (a, b) in [
        (Point::new(0, 0), Point::new(1, 1)),
        (Point::new(0, 0), Point::new(2, 0)),
        (Point::new(3, 3), Point::new(3, 3)),
    ] {
        let outcome = board.try_swap(a, b).unwrap();
        assert_eq!(outcome.rejection, Some(SwapRejection::NotAdjacent));
        assert_eq!(outcome.match_events(), 0);
    }

    assert_eq!(board.grid(), &grid);
    assert_eq!(board.score(), score);
}

#[test]
fn test_swap_without_match_rejected() {
    let rows = ["CDEMN", "DEMNC", "MNCDE", "EMNCD"];
    let mut board = fixture(&rows, MemoryStore::new(), vec![0]);
    let before = board.grid().clone();

    let outcome = board.try_swap(Point::new(0, 0), Point::new(1, 0)).unwrap();

    assert_eq!(outcome.rejection, Some(SwapRejection::NoMatch));
    assert_eq!(board.grid(), &before);
    assert_eq!(board.score(), 0);
}

#[test]
fn test_applied_swaps_leave_stable_board() {
    let mut board = Board::new(BoardConfig::default(), MemoryStore::new(), GameRng::new(2024)).unwrap();
    let mut last_score = board.score();

    for _ in 0..25 {
        let Some(hint) = board.hint() else { break };
        let outcome = board.try_swap(hint.a, hint.b).unwrap();

        assert!(outcome.is_applied());
        assert!(outcome.match_events() >= 1);
        assert!(!has_any_run(board.grid()));
        assert!(board.score() >= last_score);
        assert_eq!(board.score() as usize, last_score as usize + outcome.match_events());
        last_score = board.score();
    }
}

#[test]
fn test_cascade_across_passes() {
    let mut board = fixture(&TWO_PASS, MemoryStore::new(), TWO_PASS_SCRIPT.to_vec());

    let outcome = board.try_swap(Point::new(1, 0), Point::new(2, 0)).unwrap();

    assert!(outcome.is_applied());
    assert_eq!(outcome.resolution.passes, 2);
    assert_eq!(outcome.match_events(), 2);
    assert_eq!(outcome.resolution.events[0].run.kind, TileType::Endstone);
    assert_eq!(outcome.resolution.events[1].pass, 1);
    assert_eq!(outcome.resolution.events[1].run.kind, TileType::Cobblestone);
    assert_eq!(board.grid().to_string(), "OCDD\nEDDE\nEOCC\nDDED\n");
    assert_eq!(board.score(), 2);
}

#[test]
fn test_cascade_limit_leaves_board_untouched() {
    let grid = Grid::from_glyphs(&TWO_PASS).unwrap();
    let config = BoardConfig::default().with_max_cascade_passes(1);
    let mut board = Board::from_grid(
        config,
        grid.clone(),
        MemoryStore::new(),
        ScriptedSource::new(TWO_PASS_SCRIPT.to_vec()),
    )
    .unwrap();

    let result = board.try_swap(Point::new(1, 0), Point::new(2, 0));

    assert!(matches!(result, Err(EngineError::CascadeLimit { passes: 2 })));
    assert_eq!(board.grid(), &grid);
    assert_eq!(board.score(), 0);
    assert_eq!(board.phase(), Phase::Playing);
}

#[test]
fn test_zero_cascade_limit_refused() {
    let grid = Grid::from_glyphs(&TWO_PASS).unwrap();
    let config = BoardConfig::default().with_max_cascade_passes(0);
    let result = Board::from_grid(config, grid, MemoryStore::new(), ScriptedSource::new(vec![0]));

    assert!(matches!(result, Err(EngineError::ZeroCascadeLimit)));
}

#[test]
fn test_deterministic_replay() {
    let play = |seed: u64| {
        let mut board = Board::new(BoardConfig::default(), MemoryStore::new(), GameRng::new(seed)).unwrap();
        for _ in 0..10 {
            match board.hint() {
                Some(hint) => {
                    board.try_swap(hint.a, hint.b).unwrap();
                }
                None => break,
            }
        }
        (board.grid().clone(), board.score())
    };

    assert_eq!(play(77), play(77));
}

// =============================================================================
// Game Over Tests
// =============================================================================

#[test]
fn test_last_move_ends_game_and_persists_best() {
    let mut store = MemoryStore::new();
    {
        let mut board = fixture(&LAST_MOVE, &mut store, vec![COBBLESTONE, DIRT, ENDSTONE]);
        let outcome = board.try_swap(Point::new(0, 1), Point::new(0, 2)).unwrap();

        assert!(outcome.is_applied());
        assert_eq!(outcome.match_events(), 1);
        assert_eq!(board.grid().to_string(), "CCD\nCEE\nDEC\n");

        let report = outcome.game_over.expect("board should be deadlocked");
        assert_eq!(report.final_score, 1);
        assert_eq!(report.best_score, 1);
        assert!(report.new_best);
        assert!(report.persisted);

        assert!(board.is_game_over());
        assert_eq!(board.game_over(), Some(report));
        assert_eq!(board.best_score(), 1);
    }
    assert_eq!(store.get("best_score"), Some(1));
}

#[test]
fn test_lower_score_does_not_overwrite_best() {
    let mut store = MemoryStore::with_value("best_score", 5);
    {
        let mut board = fixture(&LAST_MOVE, &mut store, vec![COBBLESTONE, DIRT, ENDSTONE]);
        assert_eq!(board.best_score(), 5);

        let outcome = board.try_swap(Point::new(0, 1), Point::new(0, 2)).unwrap();
        let report = outcome.game_over.unwrap();

        assert_eq!(report.final_score, 1);
        assert_eq!(report.best_score, 5);
        assert!(!report.new_best);
        assert!(!report.persisted);
    }
    assert_eq!(store.get("best_score"), Some(5));
}

#[test]
fn test_deadlocked_board_reports_on_next_attempt() {
    let mut board = fixture(&["CCD", "CCD", "DEE"], MemoryStore::new(), vec![0]);
    assert!(!board.has_legal_move());
    assert_eq!(board.phase(), Phase::Playing);

    let outcome = board.try_swap(Point::new(2, 0), Point::new(2, 1)).unwrap();

    assert_eq!(outcome.rejection, Some(SwapRejection::NoMatch));
    let report = outcome.game_over.unwrap();
    assert_eq!(report.final_score, 0);
    assert!(!report.new_best);
    assert!(board.is_game_over());
}

#[test]
fn test_game_over_rejects_further_swaps() {
    let mut board = fixture(&LAST_MOVE, MemoryStore::new(), vec![COBBLESTONE, DIRT, ENDSTONE]);
    board.try_swap(Point::new(0, 1), Point::new(0, 2)).unwrap();
    assert!(board.is_game_over());
    let grid = board.grid().clone();

    let outcome = board.try_swap(Point::new(0, 0), Point::new(1, 0)).unwrap();

    assert_eq!(outcome.rejection, Some(SwapRejection::GameOver));
    assert!(outcome.game_over.is_none());
    assert_eq!(board.grid(), &grid);
    assert_eq!(board.score(), 1);
}

#[test]
fn test_restart_after_game_over() {
    let mut board = fixture(&LAST_MOVE, MemoryStore::new(), vec![COBBLESTONE, DIRT, ENDSTONE]);
    board.try_swap(Point::new(0, 1), Point::new(0, 2)).unwrap();
    assert!(board.is_game_over());

    board.initialize().unwrap();

    assert_eq!(board.phase(), Phase::Playing);
    assert_eq!(board.best_score(), 1);
    assert!(!has_any_run(board.grid()));
}

// =============================================================================
// Persistence Tests
// =============================================================================

#[test]
fn test_store_failures_fall_back() {
    let mut board = fixture(&LAST_MOVE, BrokenStore, vec![COBBLESTONE, DIRT, ENDSTONE]);
    assert_eq!(board.best_score(), 0);

    let outcome = board.try_swap(Point::new(0, 1), Point::new(0, 2)).unwrap();
    let report = outcome.game_over.unwrap();

    assert!(report.new_best);
    assert!(!report.persisted);
    assert_eq!(board.best_score(), 1);
}

#[test]
fn test_best_score_survives_sessions_on_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("best.bin");

    let store = FileStore::open(&path).unwrap();
    let mut board = fixture(&LAST_MOVE, store, vec![COBBLESTONE, DIRT, ENDSTONE]);
    board.try_swap(Point::new(0, 1), Point::new(0, 2)).unwrap();
    assert!(board.game_over().unwrap().persisted);

    let store = FileStore::open(&path).unwrap();
    let board = Board::new(BoardConfig::default(), store, GameRng::new(1)).unwrap();
    assert_eq!(board.best_score(), 1);
}

#[test]
fn test_custom_best_score_key() {
    let store = MemoryStore::with_value("hard-mode", 9);
    let config = BoardConfig::default().with_best_score_key("hard-mode");
    let board = Board::new(config, store, GameRng::new(3)).unwrap();
    assert_eq!(board.best_score(), 9);
}
