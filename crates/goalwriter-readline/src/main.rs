use std::borrow::Cow::{self, Borrowed, Owned};

use anyhow::Result;
use colored::Colorize;
use rustyline::Editor;
use rustyline::completion::{Completer, Pair};
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::validate::Validator;
use rustyline::{Context, Helper};

use goalwriter_core::session::{ChangeTiming, Reason, Step};
use goalwriter_interaction::{GeminiApiAgent, InteractionManager, InteractionResult};

/// CLI helper for rustyline that provides completion, highlighting, and hints.
#[derive(Clone)]
struct CliHelper {
    commands: Vec<String>,
}

impl CliHelper {
    fn new() -> Self {
        Self {
            commands: vec!["/reset".to_string(), "/quit".to_string()],
        }
    }
}

impl Helper for CliHelper {}

impl Completer for CliHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let line = &line[..pos];

        if line.starts_with('/') {
            let candidates: Vec<Pair> = self
                .commands
                .iter()
                .filter(|cmd| cmd.starts_with(line))
                .map(|cmd| Pair {
                    display: cmd.clone(),
                    replacement: cmd.clone(),
                })
                .collect();
            Ok((0, candidates))
        } else {
            Ok((0, vec![]))
        }
    }
}

impl Highlighter for CliHelper {
    fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        if line.starts_with('/') {
            Owned(line.bright_cyan().to_string())
        } else {
            Borrowed(line)
        }
    }

    fn highlight_char(&self, _line: &str, _pos: usize, _forced: bool) -> bool {
        true
    }
}

impl Hinter for CliHelper {
    type Hint = String;

    fn hint(&self, line: &str, pos: usize, _ctx: &Context<'_>) -> Option<String> {
        let line = &line[..pos];

        if line.starts_with('/') && !line.contains(' ') {
            self.commands
                .iter()
                .find(|cmd| cmd.starts_with(line) && cmd.len() > line.len())
                .map(|cmd| cmd[line.len()..].to_string())
        } else {
            None
        }
    }
}

impl Validator for CliHelper {}

/// Outcome of reading one line from the prompt.
enum ReadOutcome {
    Line(String),
    Reset,
    Quit,
}

/// Reads a line, intercepting the always-available commands.
///
/// `/reset` and `/quit` are accepted at every prompt, from any step.
fn read_line(rl: &mut Editor<CliHelper, rustyline::history::DefaultHistory>, prompt: &str) -> ReadOutcome {
    loop {
        match rl.readline(prompt) {
            Ok(line) => {
                let trimmed = line.trim();

                if trimmed == "/quit" || trimmed == "quit" || trimmed == "exit" {
                    return ReadOutcome::Quit;
                }
                if trimmed == "/reset" {
                    return ReadOutcome::Reset;
                }

                let _ = rl.add_history_entry(&line);
                return ReadOutcome::Line(trimmed.to_string());
            }
            Err(rustyline::error::ReadlineError::Interrupted) => {
                println!("{}", "CTRL-C detected. Type '/quit' to exit.".yellow());
            }
            Err(rustyline::error::ReadlineError::Eof) => {
                println!("{}", "CTRL-D detected. Exiting...".bright_green());
                return ReadOutcome::Quit;
            }
            Err(err) => {
                eprintln!("{}", format!("Error: {:?}", err).red());
                return ReadOutcome::Quit;
            }
        }
    }
}

/// Prints a numbered single-select menu.
fn print_options(labels: &[&str]) {
    for (index, label) in labels.iter().enumerate() {
        println!("  {}", format!("{}. {}", index + 1, label).yellow());
    }
}

/// Parses a single-select submission: a number, an exact label, or empty
/// input to keep the default.
fn parse_selection<T: Copy>(input: &str, options: &[T], labels: &[&str], default: T) -> Option<T> {
    if input.is_empty() {
        return Some(default);
    }
    if let Ok(number) = input.parse::<usize>() {
        if (1..=options.len()).contains(&number) {
            return Some(options[number - 1]);
        }
        return None;
    }
    labels
        .iter()
        .position(|label| *label == input)
        .map(|index| options[index])
}

/// The main entry point for the Goal Writer REPL application.
///
/// Each user submission triggers one full re-render of the questionnaire
/// from current session state. The one generative call per goal submission
/// is awaited inline; a failure is printed and the same screen is shown
/// again with the session unchanged.
#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let agent = match GeminiApiAgent::try_from_env() {
        Ok(agent) => agent,
        Err(err) => {
            eprintln!("{}", format!("Configuration error: {}", err).red());
            std::process::exit(1);
        }
    };

    let mut manager = InteractionManager::new_session("cli-session".to_string(), agent);

    let helper = CliHelper::new();
    let mut rl = Editor::new()?;
    rl.set_helper(Some(helper));

    println!("{}", "=== Goal Writer Application ===".bright_magenta().bold());
    println!(
        "{}",
        "Tell me about your goal. Type '/reset' to start over, '/quit' to exit.".bright_black()
    );
    println!();

    loop {
        match manager.session().step {
            Step::Intro => {
                println!("{}", "Input your goal:".yellow());
                let input = match read_line(&mut rl, ">> ") {
                    ReadOutcome::Line(line) => line,
                    ReadOutcome::Reset => {
                        manager.reset();
                        continue;
                    }
                    ReadOutcome::Quit => break,
                };
                if input.is_empty() {
                    continue;
                }

                println!("{}", format!("> {}", input).green());

                match manager.submit_goal(&input).await {
                    Ok(InteractionResult::GoalReviewed { model_response, .. }) => {
                        println!("{}", "AI Response:".bright_magenta());
                        for line in model_response.lines() {
                            println!("{}", line.bright_blue());
                        }
                        println!();
                    }
                    Ok(_) => {}
                    Err(err) => {
                        eprintln!("{}", format!("Error: {}", err).red());
                    }
                }
            }
            Step::ReasonDetail => {
                println!("{}", "Why do you want to change your job?".yellow());
                let labels: Vec<&str> = Reason::ALL.iter().map(|r| r.label()).collect();
                print_options(&labels);
                println!(
                    "{}",
                    "Select an option (number or label, empty keeps the default):".bright_black()
                );

                let input = match read_line(&mut rl, ">> ") {
                    ReadOutcome::Line(line) => line,
                    ReadOutcome::Reset => {
                        manager.reset();
                        continue;
                    }
                    ReadOutcome::Quit => break,
                };

                let Some(reason) =
                    parse_selection(&input, &Reason::ALL, &labels, manager.session().reason)
                else {
                    println!("{}", "Unknown option".bright_black());
                    continue;
                };

                manager.select_reason(reason);
                if manager.session().step != Step::ReasonDetail {
                    // No detail screen for this reason.
                    continue;
                }

                let heading = reason.detail_heading().unwrap_or_default();
                let field_label = reason.detail_field_label().unwrap_or_default();
                println!("{}", heading.yellow());
                println!("{}", field_label.bright_black());

                let text = match read_line(&mut rl, ">> ") {
                    ReadOutcome::Line(line) => line,
                    ReadOutcome::Reset => {
                        manager.reset();
                        continue;
                    }
                    ReadOutcome::Quit => break,
                };

                if let InteractionResult::NewMessage(confirmation) = manager.submit_detail(&text) {
                    println!("{}", confirmation.bright_blue());
                    println!();
                }
            }
            Step::Timing => {
                println!("{}", "When do you want to change?".yellow());
                let labels: Vec<&str> = ChangeTiming::ALL.iter().map(|t| t.label()).collect();
                print_options(&labels);
                println!(
                    "{}",
                    "Select a timeframe (number or label, empty keeps the default):".bright_black()
                );

                let input = match read_line(&mut rl, ">> ") {
                    ReadOutcome::Line(line) => line,
                    ReadOutcome::Reset => {
                        manager.reset();
                        continue;
                    }
                    ReadOutcome::Quit => break,
                };

                let default = manager
                    .session()
                    .change_timing
                    .unwrap_or(ChangeTiming::Immediately);
                let Some(timing) = parse_selection(&input, &ChangeTiming::ALL, &labels, default)
                else {
                    println!("{}", "Unknown option".bright_black());
                    continue;
                };

                if let InteractionResult::Summary(statement) = manager.submit_timing(timing) {
                    println!("{}", "Your Summary:".bright_magenta());
                    println!("{}", statement.bright_blue());
                    println!();
                    println!(
                        "{}",
                        "Type '/reset' to start over or '/quit' to exit.".bright_black()
                    );
                }
            }
        }
    }

    println!("{}", "Goodbye!".bright_green());
    Ok(())
}
