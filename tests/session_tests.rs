//! Integration tests for session drivers, records and summaries.

use std::sync::Arc;

use puzzle_bench::core::SessionConfig;
use puzzle_bench::errors::{ResponderError, SessionError};
use puzzle_bench::games::connections::{Category, ConnectionsGame};
use puzzle_bench::games::wordle::{Lexicon, WordleGame};
use puzzle_bench::session::{
    evaluate, kinds, record_session, summarize, ConnectionsSession, DailyPuzzle, Message,
    PuzzleKind, Role, ScriptedResponder, SessionDriver, TemplateStore, WordleSession,
};
use puzzle_bench::{PuzzleEngine, Score};

fn lexicon() -> Arc<Lexicon> {
    Arc::new(Lexicon::from_words([
        "crane", "slate", "adieu", "pious", "stare", "apple",
    ]))
}

fn wordle(config: SessionConfig) -> WordleSession {
    let engine = WordleGame::new("crane", lexicon(), config).unwrap();
    WordleSession::with_default_prompts(engine)
}

fn categories() -> Vec<Category> {
    vec![
        Category::new("Fruits", ["apple", "banana", "cherry", "date"]),
        Category::new("Colors", ["red", "green", "blue", "yellow"]),
        Category::new("Animals", ["cat", "dog", "horse", "sheep"]),
        Category::new("Planets", ["mars", "venus", "earth", "saturn"]),
    ]
}

fn connections() -> ConnectionsSession {
    let engine = ConnectionsGame::new(categories(), SessionConfig::for_connections()).unwrap();
    ConnectionsSession::with_default_prompts(engine)
}

// =============================================================================
// Wordle Session Tests
// =============================================================================

#[test]
fn test_wordle_conversation_shape() {
    let mut session = wordle(SessionConfig::for_wordle());
    let mut responder = ScriptedResponder::new(["I think\nGuess: slate\nmaybe", "Guess: crane"]);

    assert_eq!(session.play(&mut responder).unwrap(), Score::Win);

    let roles: Vec<Role> = session.transcript().messages().iter().map(|m| m.role).collect();
    assert_eq!(
        roles,
        vec![
            Role::System,
            Role::User,
            Role::Assistant,
            Role::User,
            Role::User,
            Role::Assistant,
            Role::User,
        ]
    );
}

#[test]
fn test_wordle_loss_reveals_target() {
    let mut session = wordle(SessionConfig::for_wordle());
    let mut responder = ScriptedResponder::new([
        "Guess: slate",
        "Guess: adieu",
        "Guess: pious",
        "Guess: stare",
        "Guess: apple",
        "Guess: slate",
        "Guess: slate",
        "Guess: slate",
        "Guess: slate",
        "Guess: slate",
    ]);

    assert_eq!(session.play(&mut responder).unwrap(), Score::Loss);
    // five valid guesses, then repeats until the hard cap
    assert_eq!(session.engine().budget().valid(), 5);
    assert_eq!(session.total_attempts(), 10);
    assert!(session.transcript().last().unwrap().content.contains("crane"));
}

#[test]
fn test_wordle_error_is_narrated() {
    let mut session = wordle(SessionConfig::for_wordle());
    let mut responder = ScriptedResponder::new(["Guess: zzzzz", "Guess: crane"]);

    assert_eq!(session.play(&mut responder).unwrap(), Score::Win);

    let error_turn = &session.transcript().messages()[3];
    assert_eq!(error_turn.role, Role::User);
    assert!(error_turn.content.contains("not in the dictionary"));
}

#[test]
fn test_session_can_be_replayed() {
    let mut first = wordle(SessionConfig::for_wordle());
    let mut responder = ScriptedResponder::new(["no guess here", "Guess: slate", "Guess: crane"]);
    first.play(&mut responder).unwrap();

    let mut replayed = wordle(SessionConfig::for_wordle());
    let mut replay = ScriptedResponder::replay(first.transcript().messages());
    replayed.play(&mut replay).unwrap();

    assert_eq!(first.transcript(), replayed.transcript());
    assert_eq!(replay.remaining(), 0);

    // replaying the same driver starts from a clean slate
    let mut again = ScriptedResponder::replay(first.transcript().messages());
    replayed.play(&mut again).unwrap();
    assert_eq!(first.transcript(), replayed.transcript());
}

#[test]
fn test_closure_responder_sees_transcript() {
    let mut session = wordle(SessionConfig::for_wordle());
    let mut seen = Vec::new();
    let mut responder = |messages: &[Message]| -> Result<Message, ResponderError> {
        seen.push(messages.len());
        Ok(Message::assistant("Guess: crane"))
    };

    assert_eq!(session.play(&mut responder).unwrap(), Score::Win);
    assert_eq!(seen, vec![2]);
}

#[test]
fn test_custom_templates_missing_kind() {
    let engine = WordleGame::new("crane", lexicon(), SessionConfig::for_wordle()).unwrap();
    let mut templates = TemplateStore::new();
    templates.insert(kinds::SYSTEM, "Play Wordle in {max_attempts} tries.");
    let mut session = WordleSession::new(engine, templates);

    let err = session
        .play(&mut ScriptedResponder::new(["Guess: crane"]))
        .unwrap_err();
    assert!(matches!(err, SessionError::Template(_)));
    assert_eq!(
        session.transcript().messages()[0].content,
        "Play Wordle in 6 tries."
    );
}

// =============================================================================
// Connections Session Tests
// =============================================================================

#[test]
fn test_connections_perfect_game() {
    let mut session = connections();
    let mut responder = ScriptedResponder::new([
        "Guess: Mars, Venus, Earth, Saturn",
        "Guess: cat, dog, horse, sheep",
        "Guess: red, green, blue, yellow",
        "Guess: apple, banana, cherry, date",
    ]);

    assert_eq!(session.play(&mut responder).unwrap(), Score::Win);
    assert_eq!(session.total_attempts(), 4);
    assert_eq!(session.engine().budget().valid(), 0);
}

#[test]
fn test_connections_prompt_shrinks() {
    let mut session = connections();
    let mut responder = ScriptedResponder::new(["Guess: apple, banana, cherry, date"]);

    assert!(session.play(&mut responder).is_err());

    let prompts: Vec<&str> = session
        .transcript()
        .by_role(Role::User)
        .map(|m| m.content.as_str())
        .collect();
    // first prompt, correct-guess narration, second prompt
    assert_eq!(prompts.len(), 3);
    assert!(prompts[0].contains("apple"));
    assert!(!prompts[2].contains("apple"));
    assert!(prompts[2].contains("blue"));
}

#[test]
fn test_connections_loss() {
    let mut session = connections();
    let mut responder = ScriptedResponder::new([
        "Guess: apple, red, cat, mars",
        "Guess: apple, banana",
        "Guess: banana, green, dog, venus",
        "Guess: cherry, blue, horse, earth",
        "Guess: date, yellow, sheep, saturn",
    ]);

    assert_eq!(session.play(&mut responder).unwrap(), Score::Loss);
    assert_eq!(session.total_attempts(), 5);
    assert_eq!(session.engine().budget().valid(), 4);

    let last = &session.transcript().last().unwrap().content;
    assert!(last.contains("- Fruits: apple, banana, cherry, date"));
}

// =============================================================================
// Record Tests
// =============================================================================

#[test]
fn test_record_from_daily_puzzle() {
    let daily = DailyPuzzle::connections(&categories(), "2024-08-05");
    let mut driver = daily.driver(&lexicon()).unwrap();
    let mut responder = ScriptedResponder::new([
        "Guess: apple, banana, cherry, date",
        "Guess: red, green, blue, yellow",
        "Guess: cat, dog, horse, sheep",
        "Guess: mars, venus, earth, saturn",
    ]);

    let record = record_session(driver.as_mut(), &mut responder, "model-x", &daily.date);

    assert_eq!(record.puzzle, PuzzleKind::Connections);
    assert_eq!(record.result, 1);
    assert_eq!(record.attempts, 4);
    assert_eq!(record.date, "2024-08-05");

    let messages: Vec<Message> = serde_json::from_str(&record.messages).unwrap();
    assert_eq!(messages.len(), driver.transcript().len());
}

#[test]
fn test_evaluate_and_summarize() {
    let lexicon = lexicon();
    let wordle = DailyPuzzle::wordle("crane", "2024-08-05");
    let groups = DailyPuzzle::connections(&categories(), "2024-08-05");
    let models = ["alpha", "beta"];

    let mut records = evaluate(&wordle, &models, &lexicon, None, |model| {
        if model == "alpha" {
            ScriptedResponder::new(["Guess: slate", "Guess: crane"])
        } else {
            ScriptedResponder::new(Vec::<String>::new())
        }
    })
    .unwrap();
    records.extend(
        evaluate(&groups, &models, &lexicon, None, |_| {
            ScriptedResponder::new(["Guess: apple, red, cat, mars"; 4])
        })
        .unwrap(),
    );

    let summary = summarize(&records);
    assert_eq!(summary.len(), 2);

    let alpha = &summary[0];
    assert_eq!(alpha.model_id, "alpha");
    assert_eq!(alpha.puzzles[&PuzzleKind::Wordle].count, 1);
    assert!((alpha.puzzles[&PuzzleKind::Wordle].avg_attempts - 2.0).abs() < 1e-9);
    assert!((alpha.average_score - 0.5).abs() < 1e-9);

    let beta = &summary[1];
    assert_eq!(beta.average_score, 0.0);
    // failed wordle session falls back to the hard cap
    assert!((beta.puzzles[&PuzzleKind::Wordle].avg_attempts - 10.0).abs() < 1e-9);
    assert!((beta.puzzles[&PuzzleKind::Connections].avg_attempts - 4.0).abs() < 1e-9);
}
