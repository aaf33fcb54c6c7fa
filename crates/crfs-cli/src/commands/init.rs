//! `create-react-fs config init`: write a default configuration file.

use std::path::Path;

use crate::{
    commands::config::render_toml,
    config::AppConfig,
    error::{CliResult, IntoCli},
    output::OutputManager,
};

/// Write the built-in defaults to `path`.
///
/// An existing file is left alone unless `force` is set.
pub fn execute(path: &Path, force: bool, output: &OutputManager) -> CliResult<()> {
    output.info("Initialising configuration...")?;

    if path.exists() && !force {
        output.warning(&format!(
            "Config already exists at {}  (use --force to overwrite)",
            path.display(),
        ))?;
        return Ok(());
    }

    let toml = render_toml(&AppConfig::default())?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).with_cli_context(|| {
            format!("Failed to create config directory '{}'", parent.display())
        })?;
    }

    std::fs::write(path, &toml)
        .with_cli_context(|| format!("Failed to write config to '{}'", path.display()))?;

    output.success(&format!("Configuration created at {}", path.display()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::{GlobalArgs, OutputFormat};

    fn quiet_output() -> OutputManager {
        let args = GlobalArgs {
            verbose: 0,
            quiet: true,
            no_color: true,
            config: None,
            output_format: OutputFormat::Plain,
            log_file: None,
        };
        OutputManager::new(&args, &AppConfig::default())
    }

    #[test]
    fn writes_defaults_that_load_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        execute(&path, false, &quiet_output()).unwrap();

        assert_eq!(AppConfig::load(Some(&path), true).unwrap(), AppConfig::default());
    }

    #[test]
    fn existing_file_is_kept_without_force() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[toolchain]\nnpm = \"pnpm\"\n").unwrap();

        execute(&path, false, &quiet_output()).unwrap();
        assert!(std::fs::read_to_string(&path).unwrap().contains("pnpm"));

        execute(&path, true, &quiet_output()).unwrap();
        assert!(!std::fs::read_to_string(&path).unwrap().contains("pnpm"));
    }
}
