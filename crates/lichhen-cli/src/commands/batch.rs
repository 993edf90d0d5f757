//! Batch command implementation.

use crate::cli::BatchArgs;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use lichhen_extractor::Extractor;
use std::fs;
use std::io::{self, Read};

/// Execute the batch command.
pub fn execute_batch(args: BatchArgs, extractor: &Extractor, formatter: &Formatter) -> Result<()> {
    let input = read_input(args.file.as_deref(), args.stdin)?;
    let texts = parse_texts(&input)?;

    let results = match args.today {
        Some(today) => extractor.extract_batch_on(&texts, today),
        None => extractor.extract_batch(&texts),
    };

    println!("{}", formatter.format_extractions(&texts, &results)?);
    Ok(())
}

/// Read the whole input from a file or stdin.
pub(crate) fn read_input(file: Option<&str>, stdin: bool) -> Result<String> {
    if stdin {
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer)?;
        Ok(buffer)
    } else if let Some(file_path) = file {
        Ok(fs::read_to_string(file_path)?)
    } else {
        Err(CliError::InvalidInput(
            "Must specify either --file or --stdin".to_string(),
        ))
    }
}

/// Split input into texts.
///
/// A JSON array of strings is taken as is, so texts may span lines.
/// Anything else is one text per non-blank line.
pub(crate) fn parse_texts(input: &str) -> Result<Vec<String>> {
    if input.trim_start().starts_with('[') {
        return Ok(serde_json::from_str(input)?);
    }

    Ok(input
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect())
}
