//! Grammar validation tests.

use hearth::parser::{CommandKind, GrammarTable, Token, Tokenizer, Validator};

fn validate(input: &str) -> (bool, String) {
    let tokens = Tokenizer::standard().unwrap().tokenize(input);
    let validation = Validator::standard().validate(&tokens);
    (validation.valid, validation.message)
}

#[test]
fn all_five_canonical_commands_are_valid() {
    let commands = [
        "on motion detected then turn on lights",
        "schedule turn on watering at 6:00 AM",
        "if temperature > 30 then turn on AC",
        "repeat check temperature every 10 minutes",
        "activate night mode from 10:00 PM to 6:00 AM",
    ];

    for command in commands {
        let (valid, message) = validate(command);
        assert!(valid, "expected valid: {command}");
        assert_eq!(message, "Valid command.");
    }
}

#[test]
fn empty_token_sequence_is_an_empty_command() {
    let validation = Validator::standard().validate(&[]);
    assert!(!validation.valid);
    assert_eq!(validation.message, "Empty command.");
}

#[test]
fn whitespace_only_input_is_an_empty_command() {
    let (valid, message) = validate("   ");
    assert!(!valid);
    assert_eq!(message, "Empty command.");
}

#[test]
fn unrecognized_leading_word_is_invalid_start() {
    let (valid, message) = validate("close door now");
    assert!(!valid);
    assert_eq!(message, "Invalid command start.");
}

#[test]
fn wrong_category_mid_sequence_is_a_syntax_error() {
    // "on" selects the event-trigger shape, but "sound" where DETECTED
    // belongs breaks it.
    let (valid, message) = validate("on motion sound then turn on lights");
    assert!(!valid);
    assert_eq!(message, "Syntax error in command.");
}

#[test]
fn truncated_command_is_a_syntax_error() {
    let (valid, message) = validate("schedule turn on watering");
    assert!(!valid);
    assert_eq!(message, "Syntax error in command.");
}

#[test]
fn trailing_extra_tokens_are_a_syntax_error() {
    let (valid, message) = validate("on motion detected then turn on lights at 6:00 AM");
    assert!(!valid);
    assert_eq!(message, "Syntax error in command.");
}

#[test]
fn leading_keyword_match_is_case_sensitive() {
    let (valid, message) = validate("On motion detected then turn on lights");
    assert!(!valid);
    assert_eq!(message, "Invalid command start.");
}

#[test]
fn grammar_table_covers_each_kind_exactly_once() {
    let table = GrammarTable::standard();
    assert_eq!(table.rules().len(), CommandKind::ALL.len());
    for kind in CommandKind::ALL {
        let rule = table.rule_for(kind.keyword()).unwrap();
        assert_eq!(rule.kind, kind);
        assert_eq!(rule.expected, kind.expected());
    }
}

#[test]
fn validator_reports_through_values_not_panics() {
    // A token sequence hand-built with an odd shape still yields a value.
    let tokens = vec![Token::new(hearth::lexicon::Category::Then, "then")];
    let validation = Validator::standard().validate(&tokens);
    assert!(!validation.valid);
    assert_eq!(validation.message, "Invalid command start.");
}
