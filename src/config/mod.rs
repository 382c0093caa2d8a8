pub mod types;

use std::io::ErrorKind;
use std::path::Path;

use tracing::info;

use crate::error::Result;
use types::Config;

/// Reads the YAML config at `path`. A missing file or an empty document
/// yields the defaults; the result is validated either way.
pub fn load_config(path: &Path) -> Result<Config> {
    let config = match std::fs::read_to_string(path) {
        Ok(content) => serde_yml::from_str::<Option<Config>>(&content)?.unwrap_or_default(),
        Err(e) if e.kind() == ErrorKind::NotFound => {
            info!(path = %path.display(), "no config file, using defaults");
            Config::default()
        }
        Err(e) => return Err(e.into()),
    };
    config.validate()?;
    Ok(config)
}
