//! Full pipeline tests.

use hearth::parser::CommandAnalyzer;

fn analyzer() -> CommandAnalyzer {
    CommandAnalyzer::new().unwrap()
}

#[test]
fn demo_set_splits_into_valid_and_invalid_halves() {
    let analyzer = analyzer();
    let valid = [
        "on motion detected then turn on lights",
        "schedule turn on watering at 6:00 AM",
        "if temperature > 30 then turn on AC",
        "repeat check temperature every 10 minutes",
        "activate night mode from 10:00 PM to 6:00 AM",
    ];
    let invalid = [
        "when motion detected turn on lights",
        "if temperature > 30 start AC",
        "on humidity triggered then open lights",
        "schedule cooling at 14:99 PM",
        "activate silent mode 10 PM 6 AM",
    ];

    for command in valid {
        let analysis = analyzer.analyze(command);
        assert!(analysis.validation.valid, "expected valid: {command}");
        assert!(analysis.diagnostic.is_none());
    }
    for command in invalid {
        let analysis = analyzer.analyze(command);
        assert!(!analysis.validation.valid, "expected invalid: {command}");
        assert!(analysis.diagnostic.is_some(), "no diagnostic: {command}");
    }
}

#[test]
fn diagnostics_match_the_checklist_for_the_demo_set() {
    let analyzer = analyzer();
    let expectations = [
        (
            "when motion detected turn on lights",
            "'when' is not a valid keyword",
        ),
        ("if temperature > 30 start AC", "'then' keyword is required"),
        (
            "on humidity triggered then open lights",
            "'open lights' is not a valid action",
        ),
        ("schedule cooling at 14:99 PM", "Minutes must be between 00-59"),
        (
            "activate silent mode 10 PM 6 AM",
            "'from' and 'to' keywords are missing",
        ),
    ];

    for (command, fragment) in expectations {
        let diagnostic = analyzer.analyze(command).diagnostic.unwrap();
        assert!(
            diagnostic.contains(fragment),
            "command {command:?} produced {diagnostic:?}"
        );
    }
}

#[test]
fn empty_input_reports_empty_command_without_diagnostic_tokens() {
    let analysis = analyzer().analyze("");
    assert!(analysis.tokens.is_empty());
    assert_eq!(analysis.validation.message, "Empty command.");
    assert!(analysis.diagnostic.is_some());
}

#[test]
fn analyzer_is_stateless_across_calls() {
    let analyzer = analyzer();
    let first = analyzer.analyze("on motion detected then turn on lights");
    analyzer.analyze("when motion detected turn on lights");
    analyzer.analyze("");
    let again = analyzer.analyze("on motion detected then turn on lights");
    assert_eq!(first, again);
}

#[test]
fn shared_analyzer_works_across_threads() {
    let analyzer = std::sync::Arc::new(analyzer());
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let analyzer = std::sync::Arc::clone(&analyzer);
            std::thread::spawn(move || {
                analyzer
                    .analyze("repeat check temperature every 10 minutes")
                    .validation
                    .valid
            })
        })
        .collect();

    for handle in handles {
        assert!(handle.join().unwrap());
    }
}
