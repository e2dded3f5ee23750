//! The interactive read-analyze-print loop.

use hearth_lexicon::Lexicon;
use hearth_parser::CommandAnalyzer;

use crate::demo::DEMO_COMMANDS;
use crate::editor::{LineEditor, ReadResult, RustylineEditor};
use crate::error::Result;
use crate::render;

/// The interactive REPL.
pub struct Repl<E: LineEditor = RustylineEditor> {
    /// The line editor for input.
    editor: E,

    /// The analysis pipeline.
    analyzer: CommandAnalyzer,

    /// Whether to show the welcome banner.
    show_banner: bool,

    /// Prompt string.
    prompt: String,
}

impl Repl<RustylineEditor> {
    /// Creates a new REPL with the default rustyline editor.
    ///
    /// # Errors
    ///
    /// Returns an error if the editor or analyzer fails to initialize.
    pub fn new() -> Result<Self> {
        let editor = RustylineEditor::new()?;
        Self::with_editor(editor)
    }
}

impl<E: LineEditor> Repl<E> {
    /// Creates a new REPL with the given editor.
    ///
    /// # Errors
    ///
    /// Returns an error if the analyzer fails to initialize.
    pub fn with_editor(mut editor: E) -> Result<Self> {
        let analyzer = CommandAnalyzer::new()?;
        editor.set_keywords(completion_vocabulary(&Lexicon::standard()));
        Ok(Self {
            editor,
            analyzer,
            show_banner: true,
            prompt: "hearth> ".to_string(),
        })
    }

    /// Disables the welcome banner.
    #[must_use]
    pub fn without_banner(mut self) -> Self {
        self.show_banner = false;
        self
    }

    /// Sets the prompt.
    #[must_use]
    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    /// Returns the analyzer.
    #[must_use]
    pub fn analyzer(&self) -> &CommandAnalyzer {
        &self.analyzer
    }

    /// Runs the REPL loop until EOF.
    ///
    /// # Errors
    ///
    /// Returns an error if reading input fails fatally.
    pub fn run(&mut self) -> Result<()> {
        if self.show_banner {
            self.print_banner();
        }

        loop {
            match self.editor.read_line(&self.prompt)? {
                ReadResult::Line(line) => {
                    let trimmed = line.trim();
                    if trimmed.is_empty() {
                        continue;
                    }
                    self.editor.add_history(trimmed);
                    if !self.handle(trimmed) {
                        break;
                    }
                }
                ReadResult::Interrupted => {
                    println!();
                }
                ReadResult::Eof => break,
            }
        }

        println!("\nGoodbye!");
        Ok(())
    }

    /// Handles one input line. Returns `false` to exit the loop.
    fn handle(&self, line: &str) -> bool {
        match line {
            ":quit" | ":exit" => return false,
            ":help" => print_repl_help(),
            ":examples" => {
                for command in DEMO_COMMANDS {
                    println!("  {command}");
                }
            }
            command => {
                let analysis = self.analyzer.analyze(command);
                print!("{}", render::render_text(&analysis, true));
            }
        }
        true
    }

    fn print_banner(&self) {
        println!(
            "\x1b[1mHearth\x1b[0m {} — smart home command engine",
            env!("CARGO_PKG_VERSION")
        );
        println!("Type a command, :examples for samples, :help for help, Ctrl+D to exit.");
        println!();
    }
}

fn print_repl_help() {
    println!(
        "Commands follow one of five shapes:
  on SENSOR detected then OPERATION DEVICE
  schedule OPERATION DEVICE at TIME
  if SENSOR OPERATOR NUMBER then OPERATION DEVICE
  repeat OPERATION SENSOR every TIME_INTERVAL
  activate MODE from TIME to TIME

REPL commands:
  :examples   Show the canonical example commands
  :help       Show this help
  :quit       Exit"
    );
}

/// Extracts the literal completion vocabulary from a lexicon.
///
/// Splits each recognition pattern on `|` and keeps the alternatives that
/// are plain words or phrases; numeric and operator patterns contribute
/// nothing to completion.
#[must_use]
pub fn completion_vocabulary(lexicon: &Lexicon) -> Vec<String> {
    let mut words: Vec<String> = lexicon
        .categories()
        .iter()
        .flat_map(|rule| rule.pattern.split('|'))
        .filter(|alt| {
            !alt.is_empty()
                && alt
                    .chars()
                    .all(|c| c.is_ascii_alphabetic() || c == ' ')
        })
        .map(ToString::to_string)
        .collect();
    words.sort();
    words.dedup();
    words
}
