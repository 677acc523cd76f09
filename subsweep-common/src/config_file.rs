use miette::{Context, IntoDiagnostic};
use serde::Deserialize;
use std::path::Path;

pub fn load_config_file<T: for<'de> Deserialize<'de>>(file: &Path) -> miette::Result<T> {
    let contents = std::fs::read_to_string(file)
        .into_diagnostic()
        .wrap_err_with(|| format!("Failed to read config file {}", file.display()))?;

    toml::from_str(&contents)
        .into_diagnostic()
        .wrap_err_with(|| format!("Failed to parse config file {}", file.display()))
}
