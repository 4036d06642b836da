use std::fs;

use landlord_engine::action::Action;
use landlord_engine::config::EngineConfig;
use landlord_engine::engine::{Engine, GameOutcome, Strategy, TurnState, DEFAULT_SEED};
use landlord_engine::logger::{format_game_id, GameLogger, GameRecord};

struct FirstLegal;

impl Strategy for FirstLegal {
    fn select_action(&mut self, state: &TurnState<'_>) -> Action {
        state.legal_actions.first().cloned().unwrap_or(Action::Pass)
    }
}

fn play(mut eng: Engine) -> (Engine, GameOutcome) {
    eng.setup().expect("deal ok");
    let (mut a, mut b, mut c) = (FirstLegal, FirstLegal, FirstLegal);
    let mut strategies: [&mut dyn Strategy; 3] = [&mut a, &mut b, &mut c];
    let outcome = eng.run(&mut strategies).expect("run ok");
    (eng, outcome)
}

fn played_record(seed: u64, id: String) -> GameRecord {
    let (eng, outcome) = play(Engine::with_seed(seed));
    GameRecord::from_outcome(id, &eng, &outcome)
}

#[test]
fn game_ids_are_sequential() {
    let mut logger = GameLogger::with_seq_for_test("20260101");
    assert_eq!(logger.next_id(), "20260101-000001");
    assert_eq!(logger.next_id(), "20260101-000002");
    assert_eq!(format_game_id("20261018", 42), "20261018-000042");
}

#[test]
fn record_carries_deal_and_result() {
    let rec = played_record(5, "20260101-000001".into());
    assert_eq!(rec.seed, 5);
    assert_eq!(rec.kitty.len(), 3);
    assert_eq!(rec.hands[rec.landlord_id].len(), 20);
    assert_eq!(rec.winner, Some(rec.landlord_id));
    assert!(rec.payoff.is_some());
    assert_eq!(rec.actions.len(), 58);
    assert!(rec.ts.is_none());
}

#[test]
fn writes_one_json_line_per_game() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("logs").join("games.jsonl");
    let mut logger = GameLogger::create(&path).expect("create logger");

    let first = played_record(1, logger.next_id());
    let second = played_record(2, logger.next_id());
    logger.write(&first).unwrap();
    logger.write(&second).unwrap();

    let content = fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 2);

    let back: GameRecord = serde_json::from_str(lines[0]).unwrap();
    assert!(back.ts.is_some());
    assert_eq!(back.game_id, first.game_id);
    assert_eq!(back.actions, first.actions);
    assert_eq!(back.hands, first.hands);

    let back: GameRecord = serde_json::from_str(lines[1]).unwrap();
    assert_eq!(back.seed, 2);
    assert!(back.game_id.ends_with("-000002"));
}

#[test]
fn existing_timestamp_is_kept() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("games.jsonl");
    let mut logger = GameLogger::create(&path).unwrap();

    let mut rec = played_record(3, "20260101-000001".into());
    rec.ts = Some("2026-01-01T00:00:00Z".into());
    logger.write(&rec).unwrap();

    let content = fs::read_to_string(&path).unwrap();
    let back: GameRecord = serde_json::from_str(content.trim()).unwrap();
    assert_eq!(back.ts.as_deref(), Some("2026-01-01T00:00:00Z"));
}

#[test]
fn default_seed_is_recorded_and_replays() {
    let (eng, outcome) = play(Engine::new(EngineConfig::default()));
    let rec = GameRecord::from_outcome("20260101-000001".into(), &eng, &outcome);
    assert_eq!(rec.seed, DEFAULT_SEED);

    let replay = played_record(rec.seed, "20260101-000002".into());
    assert_eq!(replay.hands, rec.hands);
    assert_eq!(replay.kitty, rec.kitty);
    assert_eq!(replay.actions, rec.actions);
}

#[test]
fn record_assigns_id_and_writes_stamped_line() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("games.jsonl");
    let mut logger = GameLogger::create(&path).unwrap();

    let (eng, outcome) = play(Engine::with_seed(8));
    let written = logger.record(&eng, &outcome).expect("record written");
    assert!(written.game_id.ends_with("-000001"));
    assert!(written.ts.is_some());

    let content = fs::read_to_string(&path).unwrap();
    let back: GameRecord = serde_json::from_str(content.trim()).unwrap();
    assert_eq!(back, written);
}

#[test]
fn json_line_ends_with_newline() {
    let rec = played_record(4, "20260101-000001".into());
    let line = rec.to_json_line().unwrap();
    assert!(line.ends_with('\n'));
    assert_eq!(line.matches('\n').count(), 1);

    let stamped = rec.clone().stamped();
    assert!(stamped.ts.is_some());
    assert_eq!(stamped.clone().stamped().ts, stamped.ts);
}
