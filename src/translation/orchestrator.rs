//! Fan-out of translation tasks over the discovered files.
//!
//! Each qualifying input file spawns one task per output locale. A semaphore
//! caps how many requests are in flight, and a single collector owns the
//! `JoinSet`, so counts are only ever updated in one place.

use std::io;
use std::path::PathBuf;
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::Semaphore;
use tokio::task::JoinSet;

use super::client::{ChatModel, RequestError, TranslationRequest};
use super::prompt::build_system_prompt;
use super::task::{TranslationTask, is_locale_file, localized_path};
use crate::config::ProjectConfig;
use crate::discovery::DiscoveredFile;
use crate::fs::{WriteError, write_output};
use crate::ui::TaskProgress;

/// Failure of a single (file, locale) task.
#[derive(Debug, Error)]
pub enum TaskError {
    #[error("Failed to translate {} to '{locale}': {source}", path.display())]
    Request {
        path: PathBuf,
        locale: String,
        #[source]
        source: RequestError,
    },

    #[error(transparent)]
    Write(#[from] WriteError),

    #[error("Translation task did not finish: {0}")]
    Aborted(String),
}

/// Failure of a whole run.
#[derive(Debug, Error)]
pub enum TranslateError {
    #[error("Failed to read file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error(transparent)]
    Task(#[from] TaskError),
}

/// Counts reported at the end of a run.
#[derive(Debug, Default)]
pub struct RunSummary {
    /// Input-locale files that were sent for translation.
    pub input_files: usize,
    /// Output files written.
    pub translated_files: usize,
    /// Task failures collected when running with `keep_going`.
    pub failures: Vec<TaskError>,
}

impl RunSummary {
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }
}

pub struct Orchestrator<M> {
    model: Arc<M>,
    config: Arc<ProjectConfig>,
    keep_going: bool,
    progress: TaskProgress,
}

impl<M: ChatModel + 'static> Orchestrator<M> {
    pub fn new(model: M, config: ProjectConfig) -> Self {
        Self {
            model: Arc::new(model),
            config: Arc::new(config),
            keep_going: false,
            progress: TaskProgress::hidden(),
        }
    }

    /// Keep running the remaining tasks after one fails and report all failures.
    #[must_use]
    pub fn keep_going(mut self, keep_going: bool) -> Self {
        self.keep_going = keep_going;
        self
    }

    #[must_use]
    pub fn with_progress(mut self, progress: TaskProgress) -> Self {
        self.progress = progress;
        self
    }

    /// Translates every input-locale file in `files` into every output locale.
    ///
    /// Without `keep_going` the first failure aborts the tasks still running
    /// and is returned; files already written stay on disk.
    pub async fn run(&self, files: &[DiscoveredFile]) -> Result<RunSummary, TranslateError> {
        let config = &self.config;
        let gate = Arc::new(Semaphore::new(config.concurrency.max(1)));
        let mut tasks = JoinSet::new();
        let mut summary = RunSummary::default();

        for file in files {
            if !is_locale_file(&file.relative, &config.input_locale) {
                continue;
            }

            let bytes = tokio::fs::read(&file.path)
                .await
                .map_err(|source| TranslateError::Read {
                    path: file.path.clone(),
                    source,
                })?;
            let content = String::from_utf8_lossy(&bytes).into_owned();

            if let Some(marker) = &config.ignore_files_with_content
                && content.contains(marker.as_str())
            {
                tracing::debug!(path = %file.path.display(), "skipped, contains ignore marker");
                continue;
            }

            summary.input_files += 1;

            for locale in &config.output_locales {
                let Some(relative) = localized_path(&file.relative, &config.input_locale, locale)
                else {
                    continue;
                };

                let task = TranslationTask {
                    content: content.clone(),
                    source: file.path.clone(),
                    destination: config.dir.join(relative),
                    target_locale: locale.clone(),
                };

                let model = Arc::clone(&self.model);
                let task_config = Arc::clone(config);
                let gate = Arc::clone(&gate);

                self.progress.add_task();
                tasks.spawn(async move {
                    let _permit = gate
                        .acquire_owned()
                        .await
                        .map_err(|e| TaskError::Aborted(e.to_string()))?;
                    run_task(model.as_ref(), &task_config, task).await
                });
            }
        }

        while let Some(joined) = tasks.join_next().await {
            let result = joined.unwrap_or_else(|e| Err(TaskError::Aborted(e.to_string())));
            self.progress.finish_task();

            match result {
                Ok(destination) => {
                    summary.translated_files += 1;
                    tracing::info!(path = %destination.display(), "translated");
                }
                Err(err) if self.keep_going => {
                    tracing::warn!(error = %err, "translation task failed");
                    summary.failures.push(err);
                }
                Err(err) => {
                    tasks.abort_all();
                    self.progress.stop();
                    return Err(err.into());
                }
            }
        }

        self.progress.stop();
        Ok(summary)
    }
}

async fn run_task<M: ChatModel>(
    model: &M,
    config: &ProjectConfig,
    task: TranslationTask,
) -> Result<PathBuf, TaskError> {
    tracing::debug!(
        source = %task.source.display(),
        locale = %task.target_locale,
        "requesting translation"
    );

    let request = TranslationRequest {
        system_prompt: build_system_prompt(
            config.system_prompt.as_deref(),
            &config.input_locale,
            &task.target_locale,
            &config.business_description,
        ),
        source_text: task.content,
    };

    let translated = model
        .complete(&request)
        .await
        .map_err(|source| TaskError::Request {
            path: task.source,
            locale: task.target_locale,
            source,
        })?;

    let destination = task.destination;
    tokio::task::spawn_blocking(move || {
        write_output(&destination, translated.as_bytes()).map(|()| destination)
    })
    .await
    .map_err(|e| TaskError::Aborted(e.to_string()))?
    .map_err(TaskError::from)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::config::{DEFAULT_BASE_URL, DEFAULT_CONCURRENCY};
    use crate::discovery::discover_files;
    use reqwest::StatusCode;
    use std::fs;
    use std::path::Path;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;
    use tempfile::TempDir;

    /// Answers with `[<target language line>] <content>` and records every request.
    #[derive(Default)]
    struct FakeModel {
        requests: Mutex<Vec<TranslationRequest>>,
        fail_on: Option<String>,
        in_flight: AtomicUsize,
        max_in_flight: AtomicUsize,
        delay: Option<Duration>,
    }

    impl ChatModel for FakeModel {
        async fn complete(&self, request: &TranslationRequest) -> Result<String, RequestError> {
            let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
            self.max_in_flight.fetch_max(now, Ordering::SeqCst);
            if let Some(delay) = self.delay {
                tokio::time::sleep(delay).await;
            }
            self.in_flight.fetch_sub(1, Ordering::SeqCst);

            self.requests.lock().unwrap().push(request.clone());

            if let Some(marker) = &self.fail_on
                && request.system_prompt.contains(marker.as_str())
            {
                return Err(RequestError::Status {
                    status: StatusCode::INTERNAL_SERVER_ERROR,
                    body: "boom".to_string(),
                });
            }

            let target = request
                .system_prompt
                .lines()
                .next()
                .unwrap_or_default()
                .to_string();
            Ok(format!("[{target}] {}", request.source_text))
        }
    }

    fn config(root: &Path, outputs: &[&str]) -> ProjectConfig {
        ProjectConfig {
            dir: root.to_path_buf(),
            input_locale: "en".to_string(),
            output_locales: outputs.iter().map(ToString::to_string).collect(),
            business_description: "A bakery".to_string(),
            system_prompt: None,
            model: "test-model".to_string(),
            api_key: "key".to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            request_timeout: None,
            ignore_files_with_content: None,
            concurrency: DEFAULT_CONCURRENCY,
        }
    }

    fn write(root: &Path, relative: &str, content: &str) {
        let path = root.join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    fn prompt_override(target: &str) -> Option<String> {
        Some(format!("to {target}"))
    }

    #[tokio::test]
    async fn test_translates_each_file_into_each_locale() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        write(root, "locales/en/a.json", "{\"a\": \"A\"}");
        write(root, "locales/ar/a.json", "{\"a\": \"old\"}");

        let files = discover_files(root).unwrap();
        let orchestrator = Orchestrator::new(FakeModel::default(), config(root, &["ar", "fr"]));

        let summary = orchestrator.run(&files).await.unwrap();

        assert_eq!(summary.input_files, 1);
        assert_eq!(summary.translated_files, 2);
        assert!(summary.is_success());
        assert_eq!(orchestrator.model.requests.lock().unwrap().len(), 2);

        let ar = fs::read_to_string(root.join("locales/ar/a.json")).unwrap();
        let fr = fs::read_to_string(root.join("locales/fr/a.json")).unwrap();
        assert!(ar.ends_with("{\"a\": \"A\"}"));
        assert!(ar.contains("to Arabic"));
        assert!(fr.contains("to French"));
        assert_eq!(
            fs::read_to_string(root.join("locales/en/a.json")).unwrap(),
            "{\"a\": \"A\"}"
        );
    }

    #[tokio::test]
    async fn test_output_is_model_text_verbatim() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        write(root, "en/a.json", "hello\n");

        let mut cfg = config(root, &["de"]);
        cfg.system_prompt = prompt_override("German");
        let orchestrator = Orchestrator::new(FakeModel::default(), cfg);

        orchestrator.run(&discover_files(root).unwrap()).await.unwrap();

        assert_eq!(
            fs::read_to_string(root.join("de/a.json")).unwrap(),
            "[to German] hello\n"
        );
        let requests = orchestrator.model.requests.lock().unwrap();
        assert_eq!(requests[0].system_prompt, "to German");
        assert_eq!(requests[0].source_text, "hello\n");
    }

    #[tokio::test]
    async fn test_non_input_locale_files_are_skipped() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        write(root, "fr/a.json", "{}");
        write(root, "README.md", "docs");
        write(root, "en.json", "{}");

        let orchestrator = Orchestrator::new(FakeModel::default(), config(root, &["ar"]));
        let summary = orchestrator.run(&discover_files(root).unwrap()).await.unwrap();

        assert_eq!(summary.input_files, 0);
        assert_eq!(summary.translated_files, 0);
        assert!(orchestrator.model.requests.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_ignore_marker_skips_file_without_counting() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        write(root, "en/empty.json", "{}");
        write(root, "en/a.json", "{\"a\": \"A\"}");

        let mut cfg = config(root, &["ar", "fr"]);
        cfg.ignore_files_with_content = Some("{}".to_string());
        let orchestrator = Orchestrator::new(FakeModel::default(), cfg);

        let summary = orchestrator.run(&discover_files(root).unwrap()).await.unwrap();

        assert_eq!(summary.input_files, 1);
        assert_eq!(summary.translated_files, 2);
        assert!(!root.join("ar/empty.json").exists());
        assert!(root.join("ar/a.json").exists());
    }

    #[tokio::test]
    async fn test_unset_ignore_marker_filters_nothing() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        write(root, "en/empty.json", "{}");

        let orchestrator = Orchestrator::new(FakeModel::default(), config(root, &["ar"]));
        let summary = orchestrator.run(&discover_files(root).unwrap()).await.unwrap();

        assert_eq!(summary.input_files, 1);
        assert_eq!(summary.translated_files, 1);
    }

    #[tokio::test]
    async fn test_ignore_list_entry_is_not_translated() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        write(root, "locales/en/a.json", "{\"a\": 1}");
        write(root, "locales/en/secret.json", "{\"s\": 1}");
        write(root, ".fasi7ignore", "locales/en/secret.json\n");

        let orchestrator = Orchestrator::new(FakeModel::default(), config(root, &["fr"]));
        let summary = orchestrator.run(&discover_files(root).unwrap()).await.unwrap();

        assert_eq!(summary.input_files, 1);
        assert!(root.join("locales/fr/a.json").exists());
        assert!(!root.join("locales/fr/secret.json").exists());
    }

    #[tokio::test]
    async fn test_concurrency_is_bounded() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        for i in 0..6 {
            write(root, &format!("en/{i}.json"), "{}");
        }

        let mut cfg = config(root, &["ar", "fr", "de"]);
        cfg.concurrency = 2;
        let model = FakeModel {
            delay: Some(Duration::from_millis(20)),
            ..FakeModel::default()
        };
        let orchestrator = Orchestrator::new(model, cfg);

        let summary = orchestrator.run(&discover_files(root).unwrap()).await.unwrap();

        assert_eq!(summary.input_files, 6);
        assert_eq!(summary.translated_files, 18);
        assert!(orchestrator.model.max_in_flight.load(Ordering::SeqCst) <= 2);
    }

    #[tokio::test]
    async fn test_first_failure_is_returned() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        write(root, "en/a.json", "{}");

        let model = FakeModel {
            fail_on: Some("French".to_string()),
            ..FakeModel::default()
        };
        let orchestrator = Orchestrator::new(model, config(root, &["fr"]));

        let err = orchestrator.run(&discover_files(root).unwrap()).await.unwrap_err();

        assert!(matches!(
            err,
            TranslateError::Task(TaskError::Request { ref locale, .. }) if locale == "fr"
        ));
        assert!(!root.join("fr/a.json").exists());
    }

    #[tokio::test]
    async fn test_keep_going_collects_failures() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        write(root, "en/a.json", "{}");
        write(root, "en/b.json", "{}");

        let model = FakeModel {
            fail_on: Some("French".to_string()),
            ..FakeModel::default()
        };
        let orchestrator = Orchestrator::new(model, config(root, &["ar", "fr"])).keep_going(true);

        let summary = orchestrator.run(&discover_files(root).unwrap()).await.unwrap();

        assert_eq!(summary.input_files, 2);
        assert_eq!(summary.translated_files, 2);
        assert_eq!(summary.failures.len(), 2);
        assert!(!summary.is_success());
        assert!(root.join("ar/a.json").exists());
        assert!(root.join("ar/b.json").exists());
        assert!(!root.join("fr/a.json").exists());
    }

    #[tokio::test]
    async fn test_write_failure_is_reported() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        write(root, "en/a.json", "{}");
        // A file where the output directory should go
        write(root, "fr", "blocker");

        let orchestrator = Orchestrator::new(FakeModel::default(), config(root, &["fr"]));
        let err = orchestrator.run(&discover_files(root).unwrap()).await.unwrap_err();

        assert!(matches!(
            err,
            TranslateError::Task(TaskError::Write(WriteError::CreateDir { .. }))
        ));
    }

    #[tokio::test]
    async fn test_unreadable_input_is_read_error() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        let files = vec![DiscoveredFile {
            path: root.join("en/missing.json"),
            relative: PathBuf::from("en/missing.json"),
        }];

        let orchestrator = Orchestrator::new(FakeModel::default(), config(root, &["fr"]));
        let err = orchestrator.run(&files).await.unwrap_err();

        assert!(matches!(err, TranslateError::Read { .. }));
        assert!(orchestrator.model.requests.lock().unwrap().is_empty());
    }
}
