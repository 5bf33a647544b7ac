use tictactoe::{Cell, GameEngine, GameState, Phase, Player, StateError};

const E: Cell = Cell::Empty;
const X: Cell = Cell::X;
const O: Cell = Cell::O;

fn state(board: [Cell; 9], current_player: Player, phase: Phase, winning_line: Option<[usize; 3]>) -> GameState {
    GameState {
        board,
        current_player,
        phase,
        winning_line,
    }
}

#[test]
fn test_restore_mid_game() {
    let snapshot = state([X, E, E, E, O, E, E, E, X], Player::O, Phase::InProgress, None);
    let mut engine = GameEngine::from_state(snapshot).unwrap();
    assert_eq!(engine.state(), snapshot);
    assert_eq!(engine.moves_made(), 3);

    assert!(engine.apply_move(2).outcome.is_accepted());
    assert!(engine.apply_move(1).outcome.is_accepted());
    assert_eq!(engine.current_player(), Player::O);
    assert_eq!(engine.phase(), Phase::InProgress);
}

#[test]
fn test_restore_won_and_draw() {
    let won = state([X, X, X, O, O, E, E, E, E], Player::X, Phase::Won, Some([0, 1, 2]));
    let engine = GameEngine::from_state(won).unwrap();
    assert_eq!(engine.winning_line(), Some([0, 1, 2]));

    let draw = state([X, O, O, O, X, X, X, X, O], Player::X, Phase::Draw, None);
    let engine = GameEngine::from_state(draw).unwrap();
    assert!(engine.is_draw());
}

#[test]
fn test_reject_impossible_counts() {
    let snapshot = state([X, X, E, E, E, E, E, E, E], Player::O, Phase::InProgress, None);
    assert_eq!(
        GameEngine::from_state(snapshot).unwrap_err(),
        StateError::MarkCount { x: 2, o: 0 }
    );

    let snapshot = state([O, E, E, E, E, E, E, E, E], Player::X, Phase::InProgress, None);
    assert_eq!(
        GameEngine::from_state(snapshot).unwrap_err(),
        StateError::MarkCount { x: 0, o: 1 }
    );
}

#[test]
fn test_reject_wrong_turn() {
    let snapshot = state([X, E, E, E, E, E, E, E, E], Player::X, Phase::InProgress, None);
    assert_eq!(
        GameEngine::from_state(snapshot).unwrap_err(),
        StateError::WrongTurn {
            expected: Player::O,
            found: Player::X
        }
    );

    let empty = state([E; 9], Player::O, Phase::InProgress, None);
    assert!(matches!(
        GameEngine::from_state(empty),
        Err(StateError::WrongTurn { .. })
    ));
}

#[test]
fn test_reject_winning_line_mismatch() {
    // line given while in progress
    let snapshot = state([X, E, E, E, E, E, E, E, E], Player::O, Phase::InProgress, Some([0, 1, 2]));
    assert_eq!(GameEngine::from_state(snapshot).unwrap_err(), StateError::WinningLine);

    // won without a line
    let snapshot = state([X, X, X, O, O, E, E, E, E], Player::X, Phase::Won, None);
    assert_eq!(GameEngine::from_state(snapshot).unwrap_err(), StateError::WinningLine);

    // line not owned by the winner
    let snapshot = state([X, X, X, O, O, E, E, E, E], Player::X, Phase::Won, Some([3, 4, 5]));
    assert_eq!(GameEngine::from_state(snapshot).unwrap_err(), StateError::WinningLine);
}

#[test]
fn test_reject_phase_mismatch() {
    // a completed line while still in progress
    let snapshot = state([X, X, X, O, O, E, E, E, E], Player::O, Phase::InProgress, None);
    assert_eq!(GameEngine::from_state(snapshot).unwrap_err(), StateError::Outcome);

    // draw on a board with space left
    let snapshot = state([X, O, E, E, E, E, E, E, E], Player::X, Phase::Draw, None);
    assert_eq!(GameEngine::from_state(snapshot).unwrap_err(), StateError::Outcome);

    // the loser also holds a line
    let snapshot = state([X, X, X, O, O, O, X, E, E], Player::X, Phase::Won, Some([0, 1, 2]));
    assert_eq!(GameEngine::from_state(snapshot).unwrap_err(), StateError::Outcome);
}
