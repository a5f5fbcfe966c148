use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use fixtura_generate::{DEFAULT_CATEGORY_COUNT, GenerateOptions};

use super::atomic::write_bytes_atomic;
use super::WorkspaceResult;

/// Default config file name, looked up in the working directory.
pub const CONFIG_FILE: &str = "fixtura.toml";

/// Contents of `fixtura.toml`. Missing keys take their defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FixturaConfig {
    pub generation: GenerationSection,
    pub output: OutputSection,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationSection {
    pub seeded: bool,
    pub count: i64,
    pub category_count: u32,
}

impl Default for GenerationSection {
    fn default() -> Self {
        Self {
            seeded: true,
            count: 10,
            category_count: DEFAULT_CATEGORY_COUNT,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputSection {
    pub dir: PathBuf,
    pub pretty: bool,
}

impl Default for OutputSection {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("out"),
            pretty: true,
        }
    }
}

/// Command-line values that take precedence over the file.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub count: Option<i64>,
    pub seeded: Option<bool>,
    pub category_count: Option<u32>,
    pub dir: Option<PathBuf>,
    pub pretty: Option<bool>,
}

impl FixturaConfig {
    pub fn with_overrides(mut self, overrides: ConfigOverrides) -> Self {
        if let Some(count) = overrides.count {
            self.generation.count = count;
        }
        if let Some(seeded) = overrides.seeded {
            self.generation.seeded = seeded;
        }
        if let Some(category_count) = overrides.category_count {
            self.generation.category_count = category_count;
        }
        if let Some(dir) = overrides.dir {
            self.output.dir = dir;
        }
        if let Some(pretty) = overrides.pretty {
            self.output.pretty = pretty;
        }
        self
    }

    pub fn generate_options(&self) -> GenerateOptions {
        GenerateOptions {
            seeded: self.generation.seeded,
            category_count: self.generation.category_count,
        }
    }
}

/// Read `path`, or the defaults when it does not exist.
pub fn load_config(path: &Path) -> WorkspaceResult<FixturaConfig> {
    if !path.exists() {
        return Ok(FixturaConfig::default());
    }
    let content = std::fs::read_to_string(path)?;
    Ok(toml::from_str(&content)?)
}

pub fn save_config(path: &Path, config: &FixturaConfig) -> WorkspaceResult<()> {
    let encoded = toml::to_string_pretty(config)?;
    write_bytes_atomic(path, encoded.as_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_yields_defaults() {
        let path = std::env::temp_dir().join(format!("fixtura_missing_{}.toml", uuid::Uuid::new_v4()));
        let config = load_config(&path).unwrap();
        assert_eq!(config, FixturaConfig::default());
        assert!(config.generation.seeded);
        assert_eq!(config.generation.category_count, 5);
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let config: FixturaConfig = toml::from_str(
            r#"
            [generation]
            count = 40

            [output]
            pretty = false
            "#,
        )
        .unwrap();
        assert_eq!(config.generation.count, 40);
        assert!(config.generation.seeded);
        assert_eq!(config.output.dir, PathBuf::from("out"));
        assert!(!config.output.pretty);
    }

    #[test]
    fn overrides_win_over_file_values() {
        let config = FixturaConfig::default().with_overrides(ConfigOverrides {
            count: Some(3),
            seeded: Some(false),
            category_count: Some(2),
            ..ConfigOverrides::default()
        });
        assert_eq!(config.generation.count, 3);
        let options = config.generate_options();
        assert!(!options.seeded);
        assert_eq!(options.category_count, 2);
        assert_eq!(config.output.dir, PathBuf::from("out"));
    }

    #[test]
    fn saved_config_loads_back() {
        let dir = std::env::temp_dir().join(format!("fixtura_config_{}", uuid::Uuid::new_v4()));
        let path = dir.join(CONFIG_FILE);
        let config = FixturaConfig::default().with_overrides(ConfigOverrides {
            dir: Some(PathBuf::from("fixtures")),
            ..ConfigOverrides::default()
        });

        save_config(&path, &config).unwrap();
        assert_eq!(load_config(&path).unwrap(), config);
        std::fs::remove_dir_all(&dir).ok();
    }
}
