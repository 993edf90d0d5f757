//! Extract command implementation.

use crate::cli::ExtractArgs;
use crate::error::Result;
use crate::output::Formatter;
use lichhen_extractor::Extractor;

/// Execute the extract command.
pub fn execute_extract(args: ExtractArgs, extractor: &Extractor, formatter: &Formatter) -> Result<()> {
    let result = match args.today {
        Some(today) => extractor.extract_on(&args.text, today),
        None => extractor.extract(&args.text),
    };

    println!("{}", formatter.format_extraction(&result)?);
    Ok(())
}
