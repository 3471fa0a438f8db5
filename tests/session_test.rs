use guessing_game::core::GameUseCase;
use guessing_game::{
    ConsoleInput, ConsoleOutput, GameEngine, GameError, GameSession, SessionOutcome,
};
use std::io::Cursor;

fn run_session(engine: GameEngine, max_attempts: u32, input: &str) -> (SessionOutcome, String) {
    let mut session = GameSession::new(engine, max_attempts);
    let mut input = ConsoleInput::new(Cursor::new(input.to_string()));
    let mut output = ConsoleOutput::new(Vec::new());

    let outcome = session.run(&mut input, &mut output).unwrap();
    let text = String::from_utf8(output.into_inner()).unwrap();
    (outcome, text)
}

#[test]
fn test_welcome_message_is_printed() {
    let engine = GameEngine::seeded(1, 1..=100).unwrap();
    let (_, text) = run_session(engine, 5, "50\n75\n25\n");
    assert!(text.starts_with("Welcome to the Guessing Game!\nEnter your guess: "));
}

#[test]
fn test_target_fifty_won_on_first_guess() {
    let engine = GameEngine::seeded(3, 50..=50).unwrap();
    let (outcome, text) = run_session(engine, 5, "50\n");

    assert_eq!(outcome, SessionOutcome::Won { attempts: 1 });
    assert_eq!(
        text,
        "Welcome to the Guessing Game!\n\
         Enter your guess: Correct! You guessed the number!\n"
    );
}

#[test]
fn test_seeded_game_can_be_replayed() {
    let mut peek = GameEngine::seeded(2024, 1..=100).unwrap();
    let target = peek.start_game(5).target();

    let engine = GameEngine::seeded(2024, 1..=100).unwrap();
    let (outcome, text) = run_session(engine, 5, &format!("oops\n{}\n", target));

    assert_eq!(outcome, SessionOutcome::Won { attempts: 1 });
    assert!(text.contains("Invalid input. Please enter a number."));
}

#[test]
fn test_five_wrong_guesses_end_the_game() {
    let engine = GameEngine::seeded(9, 50..=50).unwrap();
    let (outcome, text) = run_session(engine, 5, "1\n2\n3\n99\n98\n50\n");

    assert_eq!(outcome, SessionOutcome::Lost { target: 50 });
    assert_eq!(text.matches("Enter your guess: ").count(), 5);
    assert_eq!(text.matches("Too low!").count(), 3);
    assert_eq!(text.matches("Too high!").count(), 2);
    assert!(text.ends_with("game over, maximum attempts reached\nThe number was 50.\n"));
}

#[test]
fn test_sixth_evaluation_reports_exhaustion() {
    let mut engine = GameEngine::seeded(9, 50..=50).unwrap();
    let mut game = engine.start_game(5);
    for guess in [1, 2, 3, 4, 5] {
        engine.make_guess(&mut game, guess).unwrap();
    }

    let err = engine.make_guess(&mut game, 50).unwrap_err();
    assert!(matches!(err, GameError::AttemptsExhausted { .. }));
    assert_eq!(game.attempts(), 5);
}

#[test]
fn test_empty_input_abandons_game() {
    let engine = GameEngine::seeded(1, 1..=100).unwrap();
    let (outcome, text) = run_session(engine, 5, "");

    assert_eq!(outcome, SessionOutcome::Abandoned);
    assert!(text.ends_with("Enter your guess: Error reading input.\n"));
}

#[test]
fn test_non_utf8_line_is_rejected_and_reprompted() {
    let engine = GameEngine::seeded(5, 50..=50).unwrap();
    let mut session = GameSession::new(engine, 5);
    let mut input = ConsoleInput::new(Cursor::new(b"\xff\xfe\n50\n".to_vec()));
    let mut output = ConsoleOutput::new(Vec::new());

    let outcome = session.run(&mut input, &mut output).unwrap();
    let text = String::from_utf8(output.into_inner()).unwrap();

    assert_eq!(outcome, SessionOutcome::Won { attempts: 1 });
    assert_eq!(
        text,
        "Welcome to the Guessing Game!\n\
         Enter your guess: Invalid input. Please enter a number.\n\
         Enter your guess: Correct! You guessed the number!\n"
    );
}
