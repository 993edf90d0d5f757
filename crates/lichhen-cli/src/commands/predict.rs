//! Predict command implementation.

use crate::cli::PredictArgs;
use crate::commands::batch::read_input;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use lichhen_extractor::Extractor;
use lichhen_gatekeeper::{GateConfig, Gatekeeper, StaticClassifier};
use std::collections::HashMap;

/// Execute the predict command.
///
/// Scores come from an external classifier: `--confidence` for a single text,
/// or a `<score>\t<text>` file for a batch.
pub fn execute_predict(
    args: PredictArgs,
    extractor: &Extractor,
    gate: &GateConfig,
    formatter: &Formatter,
) -> Result<()> {
    let mut gate = gate.clone();
    if let Some(threshold) = args.threshold {
        gate.threshold = threshold;
    }

    if let Some(file) = args.file {
        let scored = parse_scored_lines(&read_input(Some(&file), false)?)?;
        let classifier = classifier_for(&scored)?;
        let texts: Vec<String> = scored.into_iter().map(|(_, text)| text).collect();

        let gatekeeper = Gatekeeper::new(classifier, extractor.clone(), gate)?;
        let predictions = gatekeeper.predict_batch(&texts)?;
        println!("{}", formatter.format_predictions(&predictions)?);
        return Ok(());
    }

    let (text, confidence) = match (args.text, args.confidence) {
        (Some(text), Some(confidence)) => (text, confidence),
        _ => {
            return Err(CliError::InvalidInput(
                "Usage: predict <TEXT> --confidence <P> or predict --file <FILE>".to_string(),
            ))
        }
    };

    let gatekeeper = Gatekeeper::new(StaticClassifier::new(confidence), extractor.clone(), gate)?;
    let prediction = gatekeeper.predict(&text)?;
    println!("{}", formatter.format_prediction(&prediction)?);
    Ok(())
}

/// Parse `<score>\t<text>` lines, skipping blank lines.
fn parse_scored_lines(input: &str) -> Result<Vec<(f64, String)>> {
    input
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(i, line)| {
            let (score, text) = line.split_once('\t').ok_or_else(|| {
                CliError::InvalidInput(format!("Line {}: expected '<score>\\t<text>'", i + 1))
            })?;
            let score: f64 = score.trim().parse().map_err(|_| {
                CliError::InvalidInput(format!("Line {}: invalid score '{}'", i + 1, score))
            })?;
            Ok((score, text.trim().to_string()))
        })
        .collect()
}

/// Build a classifier that replays the given scores.
fn classifier_for(scored: &[(f64, String)]) -> Result<StaticClassifier> {
    let mut seen: HashMap<&str, f64> = HashMap::new();
    for (score, text) in scored {
        if let Some(previous) = seen.insert(text.as_str(), *score) {
            if previous != *score {
                return Err(CliError::InvalidInput(format!(
                    "Conflicting scores for '{}': {} and {}",
                    text, previous, score
                )));
            }
        }
    }

    Ok(seen
        .into_iter()
        .fold(StaticClassifier::strict(), |classifier, (text, score)| {
            classifier.with_score(text, score)
        }))
}
