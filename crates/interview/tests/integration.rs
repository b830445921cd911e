//! Integration tests for interview.
//!
//! These tests replay the scenarios of the bundled demo programs through a
//! scripted line source, so they behave the same in a terminal and in CI.

use std::io::Cursor;

use interview::{
    Choice, ChoiceQuestion, IntegerQuestion, InterviewError, Interviewer, MatchType,
    RecordingRenderer, ReaderLines, ScriptedLines, TextQuestion, WriterRenderer,
};

fn scripted<const N: usize>(lines: [&str; N]) -> Interviewer<ScriptedLines, RecordingRenderer> {
    Interviewer::new(ScriptedLines::new(lines), RecordingRenderer::new())
}

fn fruit_question() -> ChoiceQuestion<&'static str> {
    let apple = Choice::new("apple", "🍎");
    ChoiceQuestion::new("Please pick a fruit")
        .choices([apple.clone(), Choice::new("raspberry", "🍓")])
        .default_choice(apple)
        .show_choices(true)
        .highlight_default(true)
        .ignore_case(true)
        .match_type(MatchType::Fuzzy)
}

fn age_question() -> IntegerQuestion {
    IntegerQuestion::new("Please tell me your age")
        .min(21)
        .max(99)
        .show_bounds(true)
        .retries(5)
}

// ============================================================================
// Test: Free text
// ============================================================================

#[test]
fn name_is_returned_as_typed() {
    let mut iv = scripted(["Ada Lovelace"]);
    let answer = iv
        .ask_string(&TextQuestion::new("Please tell me your name:"))
        .unwrap();
    assert_eq!(answer, "Ada Lovelace");
}

#[test]
fn name_through_reader_and_writer() {
    let mut iv = Interviewer::new(
        ReaderLines::new(Cursor::new("Grace\n")),
        WriterRenderer::new(Vec::new()),
    );
    let answer = iv
        .ask_string(&TextQuestion::new("Please tell me your name:"))
        .unwrap();
    assert_eq!(answer, "Grace");

    let (_, renderer) = iv.into_parts();
    assert_eq!(
        String::from_utf8(renderer.into_inner()).unwrap(),
        "Please tell me your name: "
    );
}

#[test]
fn read_failure_is_fatal_for_free_text() {
    let lines = ScriptedLines::eof().then_fail(std::io::ErrorKind::Interrupted);
    let mut iv = Interviewer::new(lines, RecordingRenderer::new());
    let result = iv.ask_string(&TextQuestion::new("Name:"));
    assert!(matches!(result, Err(InterviewError::Input(_))));
}

#[test]
fn closed_input_fails_free_text() {
    let mut iv = Interviewer::new(
        ReaderLines::new(Cursor::new("")),
        RecordingRenderer::new(),
    );
    let result = iv.ask_string(&TextQuestion::new("Name:"));
    assert!(matches!(result, Err(InterviewError::EndOfInput)));
}

// ============================================================================
// Test: Integer questions (the "age" demo)
// ============================================================================

#[test]
fn age_accepted_first_try() {
    let mut iv = scripted(["30"]);
    assert_eq!(iv.ask_int(&age_question()).unwrap(), 30);
    assert_eq!(
        iv.renderer().rendered(),
        ["Please tell me your age [min: 21, max: 99] "]
    );
}

#[test]
fn age_bounds_are_inclusive() {
    for input in ["21", "99"] {
        let mut iv = scripted([input]);
        let question = age_question().retries(0);
        assert_eq!(
            iv.ask_int(&question).unwrap(),
            input.parse::<i64>().unwrap()
        );
    }
}

#[test]
fn age_recovers_after_bad_answers() {
    let mut iv = scripted(["old", "20", "100", "", "21.5", "64"]);
    assert_eq!(iv.ask_int(&age_question()).unwrap(), 64);
    assert_eq!(iv.lines().reads(), 6);
}

#[test]
fn age_gives_up_after_six_attempts() {
    let mut iv = scripted(["1", "2", "3", "4", "5", "6", "7"]);
    let err = iv.ask_int(&age_question()).unwrap_err();
    assert!(matches!(
        err,
        InterviewError::MaxRetriesExceeded { attempts: 6, .. }
    ));
    assert_eq!(err.last_parsed(), Some(6));
    assert_eq!(iv.lines().remaining(), 1);
}

#[test]
fn single_attempt_reads_once() {
    let mut iv = scripted(["nope", "42"]);
    let question = IntegerQuestion::new("n");
    assert!(iv.ask_int(&question).is_err());
    assert_eq!(iv.lines().reads(), 1);
}

#[test]
fn read_failure_is_fatal_for_integers() {
    let lines = ScriptedLines::eof().then_fail(std::io::ErrorKind::Interrupted);
    let mut iv = Interviewer::new(lines, RecordingRenderer::new());
    let result = iv.ask_int(&age_question());
    match result {
        Err(InterviewError::Input(e)) => assert_eq!(e.kind(), std::io::ErrorKind::Interrupted),
        other => panic!("expected Input error, got {:?}", other),
    }
    assert_eq!(iv.lines().reads(), 1);
}

// ============================================================================
// Test: Choice questions (the "fruit" demo)
// ============================================================================

#[test]
fn fruit_fuzzy_pick() {
    let mut iv = scripted(["rsp"]);
    let answer = iv.ask_choice(&fruit_question()).unwrap();
    assert_eq!(answer.name(), "raspberry");
    assert_eq!(answer.value(), Some(&"🍓"));
    assert_eq!(
        iv.renderer().rendered(),
        ["Please pick a fruit [<apple>, raspberry] "]
    );
}

#[test]
fn fruit_fuzzy_ignores_case() {
    let mut iv = scripted(["APL"]);
    assert_eq!(iv.ask_choice(&fruit_question()).unwrap().name(), "apple");
}

#[test]
fn fruit_ambiguous_fuzzy_input_is_rejected() {
    // "ap" fits both apple and raspberry
    let mut iv = scripted(["ap", "ry"]);
    let question = fruit_question().retries(1);
    assert_eq!(iv.ask_choice(&question).unwrap().name(), "raspberry");
    assert_eq!(iv.lines().reads(), 2);
}

#[test]
fn fruit_empty_answer_takes_default() {
    let mut iv = scripted([""]);
    let answer = iv.ask_choice(&fruit_question()).unwrap();
    assert_eq!(answer.name(), "apple");
    assert_eq!(answer.value(), Some(&"🍎"));
}

#[test]
fn fruit_unknown_fails_without_free_text() {
    let mut iv = scripted(["kiwi"]);
    let err = iv.ask_choice(&fruit_question()).unwrap_err();
    assert!(err.is_max_retries());
    assert_eq!(err.last_input(), Some("kiwi"));
}

#[test]
fn read_failure_is_fatal_for_choices() {
    let lines = ScriptedLines::new(["kiwi"]).then_fail(std::io::ErrorKind::Interrupted);
    let mut iv = Interviewer::new(lines, RecordingRenderer::new());
    let result = iv.ask_choice(&fruit_question().retries(3));
    assert!(matches!(result, Err(InterviewError::Input(_))));
    assert_eq!(iv.lines().reads(), 2);
}

#[test]
fn fruit_unknown_accepted_as_free_text() {
    let mut iv = scripted(["kiwi"]);
    let answer = iv
        .ask_choice(&fruit_question().allow_free_text(true))
        .unwrap();
    assert_eq!(answer, Choice::named("kiwi"));
    assert!(answer.value().is_none());
}

// ============================================================================
// Test: Yes/no questions
// ============================================================================

fn yes_no(match_type: MatchType) -> ChoiceQuestion<bool> {
    let yes = Choice::new("yes", true);
    ChoiceQuestion::new("Should we continue?")
        .choices([yes.clone(), Choice::new("no", false)])
        .default_choice(yes)
        .show_choices(true)
        .highlight_default(true)
        .ignore_case(true)
        .match_type(match_type)
}

#[test]
fn yes_no_exact_uppercase() {
    let mut iv = scripted(["YES"]);
    let answer = iv.ask_choice(&yes_no(MatchType::Exact)).unwrap();
    assert_eq!(answer.name(), "yes");
    assert_eq!(answer.value(), Some(&true));
}

#[test]
fn yes_no_prefix() {
    let mut iv = scripted(["N"]);
    let answer = iv.ask_choice(&yes_no(MatchType::SubstringStart)).unwrap();
    assert_eq!(answer.value(), Some(&false));
}

#[test]
fn yes_no_exact_rejects_prefix() {
    let mut iv = scripted(["y"]);
    assert!(iv.ask_choice(&yes_no(MatchType::Exact)).is_err());
}

#[test]
fn yes_no_substring() {
    let mut iv = scripted(["es"]);
    let answer = iv.ask_choice(&yes_no(MatchType::Substring)).unwrap();
    assert_eq!(answer.name(), "yes");
}

#[test]
fn questions_share_one_interviewer() {
    let mut iv = scripted(["Ada", "36", "y"]);
    let name = iv.ask_string(&TextQuestion::new("Name:")).unwrap();
    let age = iv.ask_int(&age_question()).unwrap();
    let go = iv.ask_choice(&yes_no(MatchType::SubstringStart)).unwrap();

    assert_eq!((name.as_str(), age, go.value()), ("Ada", 36, Some(&true)));
    assert_eq!(iv.renderer().rendered().len(), 3);
}

// ============================================================================
// Test: serde support
// ============================================================================

#[cfg(feature = "serde")]
#[test]
fn match_type_serializes_kebab_case() {
    assert_eq!(
        serde_json::to_string(&MatchType::SubstringStart).unwrap(),
        "\"substring-start\""
    );
    let parsed: MatchType = serde_json::from_str("\"fuzzy\"").unwrap();
    assert_eq!(parsed, MatchType::Fuzzy);
}
