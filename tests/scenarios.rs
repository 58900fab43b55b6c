use serde::Deserialize;

use chess_rules::board::{Board, MoveError, MoveOutcome};

#[derive(Deserialize)]
struct ScenarioSet {
    scenarios: Vec<Scenario>,
}

#[derive(Deserialize)]
struct Scenario {
    name: String,
    fen: Option<String>,
    moves: Vec<Step>,
    final_fen: String,
    history: Vec<String>,
}

#[derive(Deserialize)]
struct Step {
    from: String,
    to: String,
    expect: String,
}

fn label(result: &Result<MoveOutcome, MoveError>) -> &'static str {
    match result {
        Ok(MoveOutcome::Played) => "played",
        Ok(MoveOutcome::Check) => "check",
        Ok(MoveOutcome::CheckMate { .. }) => "checkmate",
        Ok(MoveOutcome::Draw) => "draw",
        Err(MoveError::NoPieceAtSource { .. }) => "NoPieceAtSource",
        Err(MoveError::NotYourTurn { .. }) => "NotYourTurn",
        Err(MoveError::IllegalDestination { .. }) => "IllegalDestination",
        Err(MoveError::SelfCheck { .. }) => "SelfCheck",
        Err(MoveError::InvalidCoordinate { .. }) => "InvalidCoordinate",
    }
}

#[test]
fn scenario_suite() {
    let data = include_str!("data/scenarios.json");
    let set: ScenarioSet = serde_json::from_str(data).expect("invalid scenarios.json");

    for scenario in &set.scenarios {
        let mut board = match &scenario.fen {
            Some(fen) => Board::try_from_fen(fen).expect("scenario fen"),
            None => Board::new(),
        };

        for step in &scenario.moves {
            let before = board.clone();
            let result = board.attempt_move_str(&step.from, &step.to);
            assert_eq!(
                label(&result),
                step.expect,
                "{}: {}-{} gave {:?}",
                scenario.name,
                step.from,
                step.to,
                result
            );
            if result.is_err() {
                assert_eq!(board, before, "{}: rejected move changed the board", scenario.name);
            }
        }

        assert_eq!(board.to_fen(), scenario.final_fen, "{}", scenario.name);
        assert_eq!(board.history(), scenario.history, "{}", scenario.name);
    }
}

#[test]
fn start_position_round_trip() {
    let fen = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w 0 1";
    let board: Board = fen.parse().unwrap();
    assert_eq!(board.to_fen(), fen);
    assert_eq!(board.placement().len(), 32);
}
