//! Tokenizer tests.
//!
//! Tests for converting raw command strings to token sequences.

use hearth::lexicon::Category;
use hearth::parser::{Token, Tokenizer};

fn tokenize(input: &str) -> Vec<Token> {
    Tokenizer::standard().unwrap().tokenize(input)
}

fn categories(tokens: &[Token]) -> Vec<Category> {
    tokens.iter().map(|t| t.category).collect()
}

#[test]
fn tokenize_all_five_valid_shapes() {
    let cases: [(&str, &[Category]); 5] = [
        (
            "on motion detected then turn on lights",
            &[
                Category::Event,
                Category::Sensor,
                Category::Detected,
                Category::Then,
                Category::Operation,
                Category::Device,
            ],
        ),
        (
            "schedule turn on watering at 6:00 AM",
            &[
                Category::Event,
                Category::Operation,
                Category::Device,
                Category::At,
                Category::Time,
            ],
        ),
        (
            "if temperature > 30 then turn on AC",
            &[
                Category::Event,
                Category::Sensor,
                Category::Operator,
                Category::Number,
                Category::Then,
                Category::Operation,
                Category::Device,
            ],
        ),
        (
            "repeat check temperature every 10 minutes",
            &[
                Category::Event,
                Category::Operation,
                Category::Sensor,
                Category::Every,
                Category::TimeInterval,
            ],
        ),
        (
            "activate night mode from 10:00 PM to 6:00 AM",
            &[
                Category::Event,
                Category::Mode,
                Category::FromTo,
                Category::Time,
                Category::FromTo,
                Category::Time,
            ],
        ),
    ];

    for (input, expected) in cases {
        assert_eq!(categories(&tokenize(input)), expected, "input: {input}");
    }
}

#[test]
fn tokenize_empty_string() {
    assert!(tokenize("").is_empty());
}

#[test]
fn tokenize_unrecognized_text_only() {
    assert!(tokenize("please dim the hallway").is_empty());
}

#[test]
fn tokenize_skips_unknown_words_between_matches() {
    let tokens = tokenize("close door now");
    assert_eq!(
        categories(&tokens),
        vec![Category::Operation, Category::Sensor]
    );
    assert_eq!(tokens[0].text, "close");
    assert_eq!(tokens[1].text, "door");
}

#[test]
fn tokenize_clock_time_is_one_token() {
    let tokens = tokenize("at 6:00 AM");
    assert_eq!(categories(&tokens), vec![Category::At, Category::Time]);
    assert_eq!(tokens[1].text, "6:00 AM");
}

#[test]
fn tokenize_interval_is_one_token() {
    let tokens = tokenize("every 45 seconds");
    assert_eq!(
        categories(&tokens),
        vec![Category::Every, Category::TimeInterval]
    );
    assert_eq!(tokens[1].text, "45 seconds");
}

#[test]
fn tokenize_bare_number() {
    let tokens = tokenize("if temperature > 30");
    assert_eq!(tokens[3].category, Category::Number);
    assert_eq!(tokens[3].text, "30");
}

#[test]
fn tokenize_matches_case_insensitively_but_preserves_text() {
    let tokens = tokenize("TURN ON Lights");
    assert_eq!(
        categories(&tokens),
        vec![Category::Operation, Category::Device]
    );
    assert_eq!(tokens[0].text, "TURN ON");
    assert_eq!(tokens[1].text, "Lights");
}

#[test]
fn tokenize_twice_yields_identical_sequences() {
    let tokenizer = Tokenizer::standard().unwrap();
    let input = "repeat check humidity every 2 hours";
    assert_eq!(tokenizer.tokenize(input), tokenizer.tokenize(input));
}

#[test]
fn tokenize_phrase_operation_wins_over_leading_keyword() {
    // "turn on" must come out as one OPERATION token, not shed an EVENT
    // "on" fragment.
    let tokens = tokenize("turn on fan");
    assert_eq!(
        categories(&tokens),
        vec![Category::Operation, Category::Device]
    );
    assert_eq!(tokens[0].text, "turn on");
}
