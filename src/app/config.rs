use crate::app::cli::CheckArgs;
use crate::app::models::RuntimeConfig;
use crate::app::probe::{DEFAULT_LIBRARY, DEFAULT_PROGRAM};
use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    #[serde(default)]
    check: CheckSection,
}

/// The `[check]` table.
#[derive(Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct CheckSection {
    pub program: Option<String>,
    pub library: Option<String>,
    pub emit_flags: Option<bool>,
}

fn default_config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".config").join("gl_probe").join("config.toml"))
}

/// Loads the `[check]` table. An explicit path must exist; the default path may be absent.
pub fn load_config_file(explicit: Option<&Path>) -> Result<CheckSection> {
    let config_path = match explicit {
        Some(path) => path.to_path_buf(),
        None => match default_config_path() {
            Some(path) if path.exists() => path,
            _ => {
                log::debug!("No config file found, using defaults");
                return Ok(CheckSection::default());
            }
        },
    };

    let content = fs::read_to_string(&config_path)
        .context(format!("Failed to read config at {:?}", config_path))?;

    let parsed: ConfigFile = toml::from_str(&content)
        .context(format!("Failed to parse {:?}", config_path))?;

    log::debug!("Loaded config from {:?}", config_path);
    Ok(parsed.check)
}

/// CLI flags win over the config file, which wins over the built-in defaults.
fn merge(file: CheckSection, cli: &CheckArgs) -> RuntimeConfig {
    RuntimeConfig {
        program: cli
            .program
            .clone()
            .or(file.program)
            .unwrap_or_else(|| DEFAULT_PROGRAM.to_string()),
        library: cli
            .library
            .clone()
            .or(file.library)
            .unwrap_or_else(|| DEFAULT_LIBRARY.to_string()),
        emit_flags: cli.emit_flags || file.emit_flags.unwrap_or(false),
        pretty: cli.pretty,
    }
}

pub fn resolve_config(cli: &CheckArgs) -> Result<RuntimeConfig> {
    let file = load_config_file(cli.config.as_deref())?;
    Ok(merge(file, cli))
}
