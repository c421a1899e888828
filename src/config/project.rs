use std::collections::HashSet;
use std::path::PathBuf;
use std::time::Duration;

use super::{ConfigError, ConfigValues};

/// Base URL used when `openai.baseUrl` is not configured.
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com";

/// Maximum number of translation requests in flight when `concurrency` is not configured.
pub const DEFAULT_CONCURRENCY: usize = 8;

/// Validated, immutable configuration for one translation run.
#[derive(Debug, Clone)]
pub struct ProjectConfig {
    /// Root directory scanned for localization files.
    pub dir: PathBuf,
    /// Locale whose files are translated.
    pub input_locale: String,
    /// Target locales, in configured order.
    pub output_locales: Vec<String>,
    /// Business description embedded in the generated prompt.
    pub business_description: String,
    /// Literal system prompt replacing the generated one.
    pub system_prompt: Option<String>,
    pub model: String,
    pub api_key: String,
    pub base_url: String,
    pub request_timeout: Option<Duration>,
    /// Files whose content contains this substring are skipped.
    pub ignore_files_with_content: Option<String>,
    /// Maximum number of translation requests in flight.
    pub concurrency: usize,
}

impl ProjectConfig {
    /// Builds the typed configuration, failing on the first missing required key.
    pub fn from_values(values: &ConfigValues) -> Result<Self, ConfigError> {
        let output_locales = values.get_string_list("outputLocales");
        if output_locales.is_empty() {
            return Err(ConfigError::Missing(
                "No output locales found in config file",
            ));
        }

        let input_locale = required(values, "inputLocale", "No input locale found in config file")?;
        check_output_locales(&output_locales, &input_locale)?;

        let system_prompt = optional(values, "openai.systemPrompt");
        let business_description = values.get_string("businessDescription");
        if business_description.is_empty() && system_prompt.is_none() {
            return Err(ConfigError::Missing(
                "No business description found in config file",
            ));
        }

        let api_key = required(values, "openai.apiKey", "No OpenAI API key found in config file")?;
        let model = required(values, "openai.model", "No OpenAI model found in config file")?;
        let dir = required(values, "dir", "No directory found in config file")?;

        let base_url = optional(values, "openai.baseUrl")
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        let request_timeout = optional(values, "openai.timeoutSecs")
            .map(|raw| parse_positive("openai.timeoutSecs", &raw))
            .transpose()?
            .map(|secs| Duration::from_secs(secs as u64));

        let concurrency = optional(values, "concurrency")
            .map(|raw| parse_positive("concurrency", &raw))
            .transpose()?
            .unwrap_or(DEFAULT_CONCURRENCY);

        Ok(Self {
            dir: PathBuf::from(dir),
            input_locale,
            output_locales,
            business_description,
            system_prompt,
            model,
            api_key,
            base_url,
            request_timeout,
            ignore_files_with_content: optional(values, "ignoreFilesWithContent"),
            concurrency,
        })
    }

    /// Replaces the configured concurrency, e.g. with a command-line override.
    #[must_use]
    pub fn with_concurrency(mut self, concurrency: Option<usize>) -> Self {
        if let Some(limit) = concurrency {
            self.concurrency = limit.max(1);
        }
        self
    }
}

fn required(
    values: &ConfigValues,
    key: &str,
    message: &'static str,
) -> Result<String, ConfigError> {
    optional(values, key).ok_or(ConfigError::Missing(message))
}

fn optional(values: &ConfigValues, key: &str) -> Option<String> {
    let value = values.get_string(key);
    (!value.is_empty()).then_some(value)
}

/// Each output locale must be unique and differ from the input locale.
fn check_output_locales(output_locales: &[String], input_locale: &str) -> Result<(), ConfigError> {
    let mut seen = HashSet::new();
    for locale in output_locales {
        if locale == input_locale {
            return Err(ConfigError::Invalid {
                key: "outputLocales",
                reason: format!("'{locale}' is also the input locale"),
            });
        }
        if !seen.insert(locale.as_str()) {
            return Err(ConfigError::Invalid {
                key: "outputLocales",
                reason: format!("'{locale}' is listed more than once"),
            });
        }
    }
    Ok(())
}

fn parse_positive(key: &'static str, raw: &str) -> Result<usize, ConfigError> {
    match raw.trim().parse::<usize>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(ConfigError::Invalid {
            key,
            reason: format!("expected a positive integer, got '{raw}'"),
        }),
    }
}
