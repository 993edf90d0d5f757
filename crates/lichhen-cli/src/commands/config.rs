//! Config command implementation.

use crate::cli::{ConfigAction, ConfigArgs};
use crate::config::Config;
use crate::error::Result;
use crate::output::Formatter;
use std::path::{Path, PathBuf};

/// Execute the config command.
///
/// `path` is the `--config` override, if any.
pub fn execute_config(
    args: ConfigArgs,
    config: &Config,
    path: Option<&str>,
    formatter: &Formatter,
) -> Result<()> {
    let path = match path {
        Some(path) => PathBuf::from(path),
        None => Config::path()?,
    };

    match args.action {
        ConfigAction::Show => println!("{}", config.to_toml()?),
        ConfigAction::Path => println!("{}", path.display()),
        ConfigAction::Init { force } => println!("{}", init_config(&path, force, formatter)?),
    }
    Ok(())
}

/// Write a default config file unless one exists.
fn init_config(path: &Path, force: bool, formatter: &Formatter) -> Result<String> {
    if path.exists() && !force {
        return Ok(formatter.warning(&format!(
            "{} already exists (use --force to overwrite)",
            path.display()
        )));
    }

    Config::default().save_to(path)?;
    Ok(formatter.success(&format!("Wrote {}", path.display())))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputFormat;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_init_writes_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        let formatter = Formatter::new(OutputFormat::Table, false);

        let message = init_config(&path, false, &formatter).unwrap();
        assert!(message.starts_with('✓'));

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.gate.threshold, 0.65);
    }

    #[test]
    fn test_init_keeps_existing_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        let formatter = Formatter::new(OutputFormat::Table, false);
        fs::write(&path, "[gate]\nthreshold = 0.9\n").unwrap();

        let message = init_config(&path, false, &formatter).unwrap();
        assert!(message.contains("already exists"));
        assert_eq!(Config::load_from(&path).unwrap().gate.threshold, 0.9);

        init_config(&path, true, &formatter).unwrap();
        assert_eq!(Config::load_from(&path).unwrap().gate.threshold, 0.65);
    }
}
