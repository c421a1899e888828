use anyhow::{Context, Result, bail};
use serde_yml::Value;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use super::ConfigError;
use super::env::expand_env;

/// Default config file name, looked up in the current directory.
pub const DEFAULT_CONFIG_FILE: &str = ".fasi7.yaml";

/// Template written by `fasi7 init`.
pub const CONFIG_TEMPLATE: &str = "\
dir: ./locales # Required
businessDescription: | # This will be ignored if you specify a systemPrompt
  <Business description here>
openai:
  apiKey: ${OPENAI_API_KEY} # Required
  model: gpt-4o-mini # Required
  # systemPrompt: | # Optional
  # baseUrl: https://api.openai.com # Optional
  # timeoutSecs: 120 # Optional
inputLocale: en # Required
outputLocales: # Required
  - ar
  - de
  - es
  - fr
  - ru
ignoreFilesWithContent: '{}' # Optional
# concurrency: 8 # Optional, maximum number of requests in flight
";

/// Parsed YAML document with dotted-key string access.
///
/// Every string read goes through environment variable expansion, so
/// `apiKey: ${OPENAI_API_KEY}` resolves at lookup time.
#[derive(Debug, Clone, Default)]
pub struct ConfigValues {
    root: Value,
}

impl ConfigValues {
    pub fn from_yaml(contents: &str) -> Result<Self, serde_yml::Error> {
        let root: Value = serde_yml::from_str(contents)?;
        Ok(Self { root })
    }

    fn lookup(&self, key: &str) -> Option<&Value> {
        key.split('.')
            .try_fold(&self.root, |node, segment| node.get(segment))
    }

    /// Returns the expanded string at `key`, or an empty string when the key
    /// is missing or not a scalar.
    pub fn get_string(&self, key: &str) -> String {
        self.lookup(key)
            .and_then(scalar_to_string)
            .map(|raw| expand_env(&raw).into_owned())
            .unwrap_or_default()
    }

    /// Returns the expanded strings of a sequence at `key`.
    ///
    /// A scalar yields a single-element list; a missing key yields an empty one.
    pub fn get_string_list(&self, key: &str) -> Vec<String> {
        match self.lookup(key) {
            Some(Value::Sequence(items)) => items
                .iter()
                .filter_map(scalar_to_string)
                .map(|raw| expand_env(&raw).into_owned())
                .filter(|item| !item.is_empty())
                .collect(),
            Some(other) => scalar_to_string(other)
                .map(|raw| expand_env(&raw).into_owned())
                .filter(|item| !item.is_empty())
                .into_iter()
                .collect(),
            None => Vec::new(),
        }
    }
}

fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// Loads the project config file and writes the init template.
pub struct ConfigManager {
    config_path: PathBuf,
}

impl ConfigManager {
    pub fn new(config_path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: config_path.into(),
        }
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    pub fn load(&self) -> Result<ConfigValues, ConfigError> {
        let contents = fs::read_to_string(&self.config_path).map_err(|source| {
            if source.kind() == ErrorKind::NotFound {
                ConfigError::NotFound {
                    path: self.config_path.clone(),
                }
            } else {
                ConfigError::Read {
                    path: self.config_path.clone(),
                    source,
                }
            }
        })?;

        ConfigValues::from_yaml(&contents).map_err(|source| ConfigError::Parse {
            path: self.config_path.clone(),
            source,
        })
    }

    /// Writes [`CONFIG_TEMPLATE`] to the config path.
    ///
    /// An existing file is only replaced when `force` is set.
    pub fn write_template(&self, force: bool) -> Result<()> {
        if !force && self.config_path.exists() {
            bail!(
                "Config file already exists: {}\n\n\
                 Run 'fasi7 init --force' to overwrite it.",
                self.config_path.display()
            );
        }

        crate::fs::write_output(&self.config_path, CONFIG_TEMPLATE.as_bytes()).with_context(
            || {
                format!(
                    "Failed to write config file: {}",
                    self.config_path.display()
                )
            },
        )
    }
}
