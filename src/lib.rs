//! # fasi7 - Localization Files Translation CLI
//!
//! `fasi7` walks a directory of localization files, sends every file of the
//! input locale to an OpenAI-compatible chat model once per output locale,
//! and writes each translation to the mirrored output-locale path.
//!
//! ## Quick Start
//!
//! ```bash
//! # Create .fasi7.yaml in the current directory
//! fasi7 init
//!
//! # Translate locales/en/** into every output locale
//! fasi7
//!
//! # Limit requests in flight and report every failure
//! fasi7 --concurrency 4 --keep-going
//! ```
//!
//! ## Configuration
//!
//! ```yaml
//! dir: ./locales
//! businessDescription: |
//!   An online bakery selling pastries.
//! openai:
//!   apiKey: ${OPENAI_API_KEY}
//!   model: gpt-4o-mini
//! inputLocale: en
//! outputLocales:
//!   - ar
//!   - fr
//! ignoreFilesWithContent: '{}'
//! ```
//!
//! Paths listed in `<dir>/.fasi7ignore` are never translated.
//!
//! Input files are matched by a `/<inputLocale>/` directory below `dir`, so
//! `dir` should point at the folder that contains the locale folders
//! (`./locales`), not at a locale folder itself (`./locales/en`).
//! `outputLocales` must not repeat a locale or include `inputLocale`.

/// Command-line interface definitions and handlers.
pub mod cli;

/// Config file loading, environment expansion and validation.
pub mod config;

/// Ignore list and recursive file discovery.
pub mod discovery;

/// File system utilities.
pub mod fs;

/// Locale names, prompts, the chat client and the translation fan-out.
pub mod translation;

/// Terminal UI components (progress bar, colors).
pub mod ui;
