//! Hearth CLI entry point.

use std::env;
use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use hearth_parser::CommandAnalyzer;
use hearth_runtime::demo::DEMO_COMMANDS;
use hearth_runtime::{Repl, render};

/// CLI configuration parsed from arguments.
#[derive(Default)]
struct CliConfig {
    files: Vec<PathBuf>,
    demo: bool,
    json: bool,
    show_help: bool,
    show_version: bool,
}

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("\x1b[31mError: {e}\x1b[0m");
            ExitCode::FAILURE
        }
    }
}

fn parse_args(args: Vec<String>) -> Result<CliConfig, Box<dyn std::error::Error>> {
    let mut config = CliConfig::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => config.show_help = true,
            "-V" | "--version" => config.show_version = true,
            "-d" | "--demo" => config.demo = true,
            "-j" | "--json" => config.json = true,
            arg if arg.starts_with('-') => {
                return Err(format!("unknown option: {arg}").into());
            }
            path => config.files.push(PathBuf::from(path)),
        }
        i += 1;
    }

    Ok(config)
}

fn run(args: Vec<String>) -> Result<(), Box<dyn std::error::Error>> {
    let config = parse_args(args)?;

    if config.show_help {
        print_help();
        return Ok(());
    }

    if config.show_version {
        println!("hearth {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    if config.demo || !config.files.is_empty() {
        let analyzer = CommandAnalyzer::new()?;

        if config.demo {
            analyze_commands(&analyzer, DEMO_COMMANDS.iter().copied(), config.json)?;
        }

        for file in &config.files {
            let contents = fs::read_to_string(file)?;
            let commands = contents
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty() && !line.starts_with('#'));
            analyze_commands(&analyzer, commands, config.json)?;
        }

        return Ok(());
    }

    // No batch work requested; run the interactive REPL.
    let mut repl = Repl::new()?;
    repl.run()?;
    Ok(())
}

fn analyze_commands<'a>(
    analyzer: &CommandAnalyzer,
    commands: impl Iterator<Item = &'a str>,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    for command in commands {
        let analysis = analyzer.analyze(command);
        if json {
            println!("{}", render::render_json(&analysis)?);
        } else {
            println!("{}", render::render_text(&analysis, false));
        }
    }
    Ok(())
}

fn print_help() {
    println!(
        "\x1b[1mHearth\x1b[0m - Smart home command engine

\x1b[1mUSAGE:\x1b[0m
    hearth [OPTIONS] [FILES...]

\x1b[1mARGUMENTS:\x1b[0m
    [FILES...]    Files of commands to analyze, one per line
                  (blank lines and lines starting with '#' are skipped)

\x1b[1mOPTIONS:\x1b[0m
    -h, --help       Print help information
    -V, --version    Print version information
    -d, --demo       Analyze the canonical example commands
    -j, --json       Emit one JSON object per command instead of text

\x1b[1mEXAMPLES:\x1b[0m
    hearth                       Start interactive REPL
    hearth --demo                Analyze the built-in examples
    hearth rules.txt             Analyze each command in rules.txt
    hearth --json rules.txt      Same, as JSON lines

\x1b[1mREPL COMMANDS:\x1b[0m
    :examples    Show the canonical example commands
    :help        Show command shapes and REPL help
    :quit        Exit (also Ctrl+D)"
    );
}
