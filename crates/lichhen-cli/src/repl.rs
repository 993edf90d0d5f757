//! Interactive REPL (Read-Eval-Print Loop) mode.
//!
//! Any line that is not a command is extracted as a message.

use crate::cli::{BatchArgs, ExtractArgs};
use crate::commands;
use crate::config::Config;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use chrono::NaiveDate;
use lichhen_extractor::Extractor;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use std::path::PathBuf;

/// Run the interactive REPL.
pub fn run_repl(config: &Config, extractor: &Extractor, formatter: &Formatter) -> Result<()> {
    println!("{}", formatter.info("Lichhen REPL - Type a message to extract it, 'help' for commands, 'exit' to quit"));
    println!();

    let editor_config = rustyline::Config::builder()
        .max_history_size(config.settings.history_size)?
        .auto_add_history(false)
        .build();
    let mut editor = DefaultEditor::with_config(editor_config)?;

    let history_path = get_history_path()?;
    let _ = editor.load_history(&history_path);

    let mut today: Option<NaiveDate> = None;

    loop {
        let prompt = match today {
            Some(day) => format!("lichhen [{}]> ", day),
            None => "lichhen> ".to_string(),
        };

        match editor.readline(&prompt) {
            Ok(line) => {
                let line = line.trim();

                if line.is_empty() {
                    continue;
                }

                editor.add_history_entry(line).ok();

                match parse_repl_command(line) {
                    Ok(ReplCommand::Exit) => {
                        println!("{}", formatter.info("Tạm biệt!"));
                        break;
                    }
                    Ok(ReplCommand::Help) => {
                        print_help(formatter);
                    }
                    Ok(ReplCommand::Today(day)) => {
                        today = day;
                        let message = match day {
                            Some(day) => format!("Relative dates now resolve against {}", day),
                            None => "Relative dates now resolve against the local date".to_string(),
                        };
                        println!("{}", formatter.success(&message));
                    }
                    Ok(cmd) => {
                        if let Err(e) = execute_repl_command(cmd, today, extractor, formatter) {
                            eprintln!("{}", formatter.error(&e.to_string()));
                        }
                    }
                    Err(e) => {
                        eprintln!("{}", formatter.error(&e.to_string()));
                    }
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("{}", formatter.info("Use 'exit' to quit"));
            }
            Err(ReadlineError::Eof) => {
                break;
            }
            Err(err) => {
                eprintln!("{}", formatter.error(&format!("Error: {}", err)));
                break;
            }
        }
    }

    editor.save_history(&history_path).ok();

    Ok(())
}

/// REPL command type.
#[derive(Debug, PartialEq)]
enum ReplCommand {
    Exit,
    Help,
    Today(Option<NaiveDate>),
    Batch(String),
    Extract(String),
}

/// Parse a REPL command line.
fn parse_repl_command(line: &str) -> Result<ReplCommand> {
    let (head, rest) = match line.split_once(char::is_whitespace) {
        Some((head, rest)) => (head, rest.trim()),
        None => (line, ""),
    };

    match head {
        "exit" | "quit" | "q" if rest.is_empty() => Ok(ReplCommand::Exit),
        "help" | "?" if rest.is_empty() => Ok(ReplCommand::Help),
        ":today" => parse_today_command(rest),
        ":batch" => {
            if rest.is_empty() {
                return Err(CliError::InvalidInput("Usage: :batch <file>".to_string()));
            }
            Ok(ReplCommand::Batch(rest.to_string()))
        }
        _ => Ok(ReplCommand::Extract(line.to_string())),
    }
}

fn parse_today_command(arg: &str) -> Result<ReplCommand> {
    if arg.is_empty() || arg == "reset" {
        return Ok(ReplCommand::Today(None));
    }

    NaiveDate::parse_from_str(arg, "%Y-%m-%d")
        .map(|day| ReplCommand::Today(Some(day)))
        .map_err(|_| CliError::InvalidInput(format!("Invalid date '{}', expected YYYY-MM-DD", arg)))
}

/// Execute a REPL command.
fn execute_repl_command(
    cmd: ReplCommand,
    today: Option<NaiveDate>,
    extractor: &Extractor,
    formatter: &Formatter,
) -> Result<()> {
    match cmd {
        ReplCommand::Extract(text) => {
            commands::execute_extract(ExtractArgs { text, today }, extractor, formatter)
        }
        ReplCommand::Batch(file) => commands::execute_batch(
            BatchArgs {
                file: Some(file),
                stdin: false,
                today,
            },
            extractor,
            formatter,
        ),
        ReplCommand::Exit | ReplCommand::Help | ReplCommand::Today(_) => Ok(()),
    }
}

fn get_history_path() -> Result<PathBuf> {
    let dir = Config::dir()?;
    std::fs::create_dir_all(&dir)?;
    Ok(dir.join("history.txt"))
}

fn print_help(formatter: &Formatter) {
    println!("{}", formatter.info("Available commands:"));
    println!();
    println!("  <message>                      - Extract date, time and title");
    println!("  :today [YYYY-MM-DD|reset]      - Pin or reset the reference date");
    println!("  :batch <file>                  - Extract every line of a file");
    println!("  help, ?                        - Show this help");
    println!("  exit, quit, q                  - Exit REPL");
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_and_help() {
        assert_eq!(parse_repl_command("exit").unwrap(), ReplCommand::Exit);
        assert_eq!(parse_repl_command("q").unwrap(), ReplCommand::Exit);
        assert_eq!(parse_repl_command("?").unwrap(), ReplCommand::Help);
    }

    #[test]
    fn test_plain_text_is_extracted() {
        assert_eq!(
            parse_repl_command("Họp lúc 9h mai").unwrap(),
            ReplCommand::Extract("Họp lúc 9h mai".to_string())
        );
        // Only the bare word is a command
        assert_eq!(
            parse_repl_command("help khách hàng đăng ký").unwrap(),
            ReplCommand::Extract("help khách hàng đăng ký".to_string())
        );
    }

    #[test]
    fn test_today_command() {
        assert_eq!(
            parse_repl_command(":today 2025-12-01").unwrap(),
            ReplCommand::Today(NaiveDate::from_ymd_opt(2025, 12, 1))
        );
        assert_eq!(parse_repl_command(":today").unwrap(), ReplCommand::Today(None));
        assert_eq!(parse_repl_command(":today reset").unwrap(), ReplCommand::Today(None));
        assert!(parse_repl_command(":today 01/12/2025").is_err());
    }

    #[test]
    fn test_batch_command() {
        assert_eq!(
            parse_repl_command(":batch tin nhắn.txt").unwrap(),
            ReplCommand::Batch("tin nhắn.txt".to_string())
        );
        assert!(parse_repl_command(":batch").is_err());
    }
}
