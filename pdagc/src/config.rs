use std::env::current_dir;
use std::path::PathBuf;

use eyre::Result;
use figment::providers::{Format, Json};
use figment::Figment;
use serde::Deserialize;

/// Ambient configuration layered system -> home -> cwd, matching the
/// teacher's `Figment::new().merge(Json::file(...))` chain. Only the
/// debug-dump flag is genuinely load-bearing for the pdag core itself
/// (spec.md section 3's context debug flag); the rest is CLI convenience.
#[derive(Debug, Deserialize, Default)]
pub struct PdagConfig {
    #[serde(default)]
    pub debug: bool,
}

impl PdagConfig {
    pub fn load() -> Result<PdagConfig> {
        let system = PathBuf::from("/etc/pdagc/config.json");
        let home = home_dir().join(".pdagc.json");
        let cwd = current_dir()?.join("pdagc.json");

        let figment = Figment::new()
            .merge(Json::file(system))
            .merge(Json::file(home))
            .merge(Json::file(cwd));

        // No config file present anywhere is the common case; fall back to
        // defaults rather than surfacing a missing-file error.
        Ok(figment.extract().unwrap_or_default())
    }
}

fn home_dir() -> PathBuf {
    std::env::var_os("HOME").map(PathBuf::from).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_non_debug_with_no_config_files() {
        let config = PdagConfig::default();
        assert!(!config.debug);
    }
}
