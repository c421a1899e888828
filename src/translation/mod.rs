mod client;
mod language;
mod orchestrator;
mod prompt;
mod task;

pub use client::{ChatModel, RequestError, SEED, TEMPERATURE, TranslationClient, TranslationRequest};
pub use language::{LANGUAGES, REGIONS, display_name, print_languages};
pub use orchestrator::{Orchestrator, RunSummary, TaskError, TranslateError};
pub use prompt::{SYSTEM_PROMPT_TEMPLATE, build_system_prompt};
pub use task::{TranslationTask, is_locale_file, localized_path};
