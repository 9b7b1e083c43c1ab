//! Тесты внешнего API (crate::api): команды, DTO, ошибки.

mod common;

use blackjack_engine::api::*;
use blackjack_engine::domain::{Chips, HandValue};
use blackjack_engine::engine::{EngineError, GameEngine, RoundOutcome, RoundPhase};
use common::{card, ScriptedRng};

fn registered(deal_order: &[&str]) -> GameEngine<ScriptedRng> {
    let mut engine = GameEngine::new(ScriptedRng::dealing(deal_order));
    apply_command(
        &mut engine,
        Command::RegisterPlayer {
            name: "alice".into(),
        },
    )
    .expect("register");
    engine
}

#[test]
fn view_is_none_before_registration() {
    let engine = GameEngine::new(ScriptedRng::dealing(&["Kh", "Qc", "10d", "7s"]));
    assert!(build_round_view(&engine).is_none());
}

#[test]
fn register_rejects_blank_name() {
    let mut engine = GameEngine::new(ScriptedRng::dealing(&["Kh", "Qc", "10d", "7s"]));
    let err = apply_command(
        &mut engine,
        Command::RegisterPlayer { name: "   ".into() },
    )
    .unwrap_err();
    assert!(matches!(err, ApiError::BadRequest(_)));
    assert!(engine.player().is_none());
}

#[test]
fn start_round_view_hides_hole_card() {
    let mut engine = registered(&["Kh", "Qc", "10d", "7s"]);
    let resp = apply_command(&mut engine, Command::StartRound { wager: Chips(10) }).unwrap();

    let view = match resp {
        CommandResponse::RoundState(view) => view,
        other => panic!("unexpected response: {other:?}"),
    };

    assert_eq!(view.player_name, "alice");
    assert_eq!(view.chips, Chips(100));
    assert_eq!(view.wager, Chips(10));
    assert_eq!(view.round_id, 1);
    assert_eq!(view.phase, RoundPhase::PlayerTurn);
    assert_eq!(view.player_value, HandValue::Known(20));
    assert_eq!(view.player_cards, vec![Some(card("Kh")), Some(card("Qc"))]);
    assert_eq!(view.house_value, HandValue::Unknown);
    assert_eq!(view.house_cards, vec![Some(card("10d")), None]);
    assert_eq!(view.last_outcome, None);

    let json = view.to_json().unwrap();
    assert!(json.contains("\"player_name\":\"alice\""));
    assert!(json.contains("null"));
    // Закрытая семёрка не утекает ни в карты, ни в строку руки.
    assert!(!json.contains("Seven"));
    assert!(!json.contains("7♠"));
}

#[test]
fn stand_plays_house_and_settles() {
    let mut engine = registered(&["Kh", "Qc", "10d", "7s"]);
    apply_command(&mut engine, Command::StartRound { wager: Chips(10) }).unwrap();

    match apply_command(&mut engine, Command::Stand).unwrap() {
        CommandResponse::RoundFinished { view, outcome } => {
            assert_eq!(outcome, RoundOutcome::PlayerWin);
            assert_eq!(view.chips, Chips(110));
            assert_eq!(view.phase, RoundPhase::Resolved);
            assert_eq!(view.house_value, HandValue::Known(17));
            assert_eq!(view.last_outcome, Some(RoundOutcome::PlayerWin));
        }
        other => panic!("unexpected response: {other:?}"),
    }
}

#[test]
fn hit_into_bust_finishes_round() {
    let mut engine = registered(&["10h", "6c", "5d", "9s", "Kd"]);
    apply_command(&mut engine, Command::StartRound { wager: Chips(25) }).unwrap();

    match apply_command(&mut engine, Command::Hit).unwrap() {
        CommandResponse::RoundFinished { view, outcome } => {
            assert_eq!(outcome, RoundOutcome::PlayerBust);
            assert_eq!(view.chips, Chips(75));
            assert_eq!(view.player_value, HandValue::Known(26));
        }
        other => panic!("unexpected response: {other:?}"),
    }
}

#[test]
fn hit_without_bust_keeps_round_open() {
    let mut engine = registered(&["5h", "6c", "10d", "9s", "2d"]);
    apply_command(&mut engine, Command::StartRound { wager: Chips(10) }).unwrap();

    match apply_command(&mut engine, Command::Hit).unwrap() {
        CommandResponse::RoundState(view) => {
            assert_eq!(view.player_value, HandValue::Known(13));
            assert_eq!(view.player_cards.len(), 3);
        }
        other => panic!("unexpected response: {other:?}"),
    }
}

#[test]
fn natural_blackjack_finishes_on_start() {
    let mut engine = registered(&["Kc", "Ah", "5d", "9s"]);
    match apply_command(&mut engine, Command::StartRound { wager: Chips(10) }).unwrap() {
        CommandResponse::RoundFinished { view, outcome } => {
            assert_eq!(outcome, RoundOutcome::PlayerBlackjack);
            assert_eq!(view.chips, Chips(120));
        }
        other => panic!("unexpected response: {other:?}"),
    }
}

#[test]
fn invalid_wager_maps_to_api_error() {
    let mut engine = registered(&["Kh", "Qc", "10d", "7s"]);
    let err = apply_command(&mut engine, Command::StartRound { wager: Chips(500) }).unwrap_err();
    assert_eq!(
        err,
        ApiError::InvalidWager {
            wager: Chips(500),
            available: Chips(100)
        }
    );
}

#[test]
fn engine_errors_become_strings() {
    let mut engine = registered(&["Kh", "Qc", "10d", "7s"]);
    let err = apply_command(&mut engine, Command::Hit).unwrap_err();
    assert!(matches!(err, ApiError::EngineError(_)));

    let api: ApiError = EngineError::EmptyDeck.into();
    assert_eq!(api, ApiError::EngineError(EngineError::EmptyDeck.to_string()));
}

#[test]
fn commands_roundtrip_through_json() {
    let cmd = Command::StartRound { wager: Chips(15) };
    let json = serde_json::to_string(&cmd).unwrap();
    let back: Command = serde_json::from_str(&json).unwrap();
    assert_eq!(back, cmd);
}
