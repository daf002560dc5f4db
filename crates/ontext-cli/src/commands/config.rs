//! Config command implementation.

use crate::cli::{ConfigAction, ConfigArgs};
use crate::config::Config;
use crate::error::Result;
use crate::output::Formatter;
use std::path::Path;

/// Execute the config command.
pub fn execute_config(
    args: ConfigArgs,
    config: &Config,
    path: &Path,
    formatter: &Formatter,
) -> Result<()> {
    match args.action {
        ConfigAction::Show => println!("{}", config.to_toml()?),
        ConfigAction::Path => println!("{}", path.display()),
        ConfigAction::Init { force } => println!("{}", init_config(path, force, formatter)?),
    }
    Ok(())
}

/// Write a default configuration file unless one already exists.
fn init_config(path: &Path, force: bool, formatter: &Formatter) -> Result<String> {
    if path.exists() && !force {
        return Ok(formatter.warning(&format!(
            "{} already exists (use --force to overwrite)",
            path.display()
        )));
    }

    Config::default().save_to(path)?;
    Ok(formatter.success(&format!("Wrote default configuration to {}", path.display())))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputFormat;
    use tempfile::TempDir;

    #[test]
    fn test_init_writes_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(".ontext").join("config.toml");
        let formatter = Formatter::new(OutputFormat::Table, false);

        let message = init_config(&path, false, &formatter).unwrap();
        assert!(message.starts_with("✓"));
        assert_eq!(Config::load_from(&path).unwrap(), Config::default());
    }

    #[test]
    fn test_init_keeps_existing_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[temporal]\nyear_window = 7\n").unwrap();
        let formatter = Formatter::new(OutputFormat::Table, false);

        let message = init_config(&path, false, &formatter).unwrap();
        assert!(message.contains("already exists"));
        assert_eq!(Config::load_from(&path).unwrap().temporal.year_window, 7);

        init_config(&path, true, &formatter).unwrap();
        assert_eq!(Config::load_from(&path).unwrap().temporal.year_window, 2);
    }
}
