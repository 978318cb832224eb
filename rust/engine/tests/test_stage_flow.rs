use holdem_engine::engine::{Engine, Stage, TableConfig};
use holdem_engine::errors::GameError;
use holdem_engine::player::{Player, PlayerAction};

fn started(seed: u64) -> Engine {
    let players = vec![Player::new(0, "Alice", 100), Player::new(1, "Bob", 100)];
    let mut engine = Engine::new(players, TableConfig::default(), Some(seed));
    engine.start_game().expect("start_game");
    engine
}

fn check_both(engine: &mut Engine) {
    engine.handle_player_action(0, PlayerAction::Check).unwrap();
    engine.handle_player_action(1, PlayerAction::Check).unwrap();
}

#[test]
fn preflop_to_flop_reveals_three_and_resets() {
    let mut engine = started(1);
    engine.handle_player_action(0, PlayerAction::Call).unwrap();
    assert!(engine.has_round_ended());

    let stage = engine.next_stage().unwrap();
    assert_eq!(stage, Stage::Flop);
    assert_eq!(engine.community().len(), 3);
    assert_eq!(engine.current_bet(), 0);
    assert_eq!(engine.current_player(), 0);
    assert_eq!(engine.players()[0].bet(), 0);
    assert_eq!(engine.players()[1].bet(), 0);
    // the pot carries over untouched
    assert_eq!(engine.pot(), 4);
}

#[test]
fn next_stage_refuses_while_players_still_owe() {
    let mut engine = started(2);
    // small blind has not matched the big blind yet
    assert!(!engine.has_round_ended());
    let before = engine.snapshot();
    let err = engine.next_stage().unwrap_err();
    assert_eq!(err, GameError::RoundNotOver);
    assert_eq!(err.to_string(), "Waiting for other players to act.");
    assert_eq!(engine.snapshot(), before);
    assert_eq!(engine.stage(), Stage::Preflop);
}

#[test]
fn stages_advance_linearly_to_showdown() {
    let mut engine = started(3);
    engine.handle_player_action(0, PlayerAction::Call).unwrap();

    assert_eq!(engine.next_stage().unwrap(), Stage::Flop);
    assert_eq!(engine.community().len(), 3);

    check_both(&mut engine);
    assert_eq!(engine.next_stage().unwrap(), Stage::Turn);
    assert_eq!(engine.community().len(), 4);

    check_both(&mut engine);
    assert_eq!(engine.next_stage().unwrap(), Stage::River);
    assert_eq!(engine.community().len(), 5);

    check_both(&mut engine);
    assert_eq!(engine.next_stage().unwrap(), Stage::Showdown);
    // showdown reveals nothing further
    assert_eq!(engine.community().len(), 5);

    let result = engine.showdown().expect("showdown result");
    assert_eq!(result.rankings.len(), 2);
    assert!(!result.winners.is_empty());
    let best = result.rankings.iter().map(|&(_, c)| c).max().unwrap();
    for &(id, cat) in &result.rankings {
        assert_eq!(result.winners.contains(&id), cat == best);
    }
}

#[test]
fn hand_is_frozen_after_showdown() {
    let mut engine = started(4);
    engine.handle_player_action(0, PlayerAction::Call).unwrap();
    engine.next_stage().unwrap();
    for _ in 0..3 {
        check_both(&mut engine);
        engine.next_stage().unwrap();
    }
    assert_eq!(engine.stage(), Stage::Showdown);

    assert_eq!(engine.next_stage(), Err(GameError::HandComplete));
    let err = engine
        .handle_player_action(0, PlayerAction::Check)
        .unwrap_err();
    assert_eq!(err, GameError::HandComplete);
}

#[test]
fn folded_player_is_excluded_from_showdown() {
    let mut engine = started(5);
    engine.handle_player_action(0, PlayerAction::Call).unwrap();
    engine.next_stage().unwrap();

    engine.handle_player_action(0, PlayerAction::Fold).unwrap();
    engine.handle_player_action(1, PlayerAction::Check).unwrap();
    assert_eq!(engine.last_player_standing(), Some(1));

    // with no live bet the lone remaining player owes nothing, so the
    // stages advance without further actions
    engine.next_stage().unwrap();
    engine.next_stage().unwrap();
    assert_eq!(engine.next_stage().unwrap(), Stage::Showdown);

    let result = engine.showdown().expect("showdown result");
    assert_eq!(result.rankings.len(), 1);
    assert_eq!(result.winners, vec![1]);
}

#[test]
fn snapshot_reflects_the_table() {
    let mut engine = started(6);
    engine.handle_player_action(0, PlayerAction::Raise(10)).unwrap();
    let snap = engine.snapshot();
    assert_eq!(snap.stage, Stage::Preflop);
    assert_eq!(snap.pot, 12);
    assert_eq!(snap.current_bet, 10);
    assert_eq!(snap.players.len(), 2);
    assert_eq!(snap.players[0].name, "Alice");
    assert_eq!(snap.players[0].bet, 10);
    assert!(!snap.players[0].is_turn);
    assert!(snap.players[1].is_turn);
    assert_eq!(snap.players[0].hole.len(), 2);
    assert_eq!(snap.players[1].hole.len(), 2);
    assert!(snap.community.is_empty());

    // snapshots are plain serializable values
    let json = serde_json::to_string(&snap).unwrap();
    assert!(json.contains("\"preflop\""));
    assert!(json.contains("Alice"));
}
