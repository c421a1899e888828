use std::path::{Component, Path, PathBuf};

/// One unit of work: translate `content` into `target_locale` and write it to `destination`.
#[derive(Debug, Clone)]
pub struct TranslationTask {
    pub content: String,
    pub source: PathBuf,
    pub destination: PathBuf,
    pub target_locale: String,
}

/// Index of the first directory component of `relative` equal to `locale`.
///
/// The file name itself never counts, so `en/en` matches at index 0 only.
fn locale_segment(relative: &Path, locale: &str) -> Option<usize> {
    let components: Vec<Component<'_>> = relative.components().collect();
    let dirs = components.len().checked_sub(1)?;

    components[..dirs]
        .iter()
        .position(|c| matches!(c, Component::Normal(name) if name.to_str() == Some(locale)))
}

/// Returns `true` if `relative` lies under a `/<locale>/` directory segment.
pub fn is_locale_file(relative: &Path, locale: &str) -> bool {
    !locale.is_empty() && locale_segment(relative, locale).is_some()
}

/// Maps a root-relative input path to its output-locale counterpart.
///
/// The first `/<input_locale>/` segment is replaced by `/<output_locale>/`.
/// Returns `None` when the path has no such segment.
pub fn localized_path(relative: &Path, input_locale: &str, output_locale: &str) -> Option<PathBuf> {
    if input_locale.is_empty() {
        return None;
    }
    let index = locale_segment(relative, input_locale)?;

    Some(
        relative
            .components()
            .enumerate()
            .map(|(i, c)| {
                if i == index {
                    Component::Normal(output_locale.as_ref())
                } else {
                    c
                }
            })
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_locale_file() {
        assert!(is_locale_file(Path::new("en/a.json"), "en"));
        assert!(is_locale_file(Path::new("locales/en/nested/a.json"), "en"));
        assert!(!is_locale_file(Path::new("locales/ar/a.json"), "en"));
        assert!(!is_locale_file(Path::new("locales/en-US/a.json"), "en"));
        assert!(!is_locale_file(Path::new("en.json"), "en"));
        assert!(!is_locale_file(Path::new("locales/en"), "en"));
        assert!(!is_locale_file(Path::new("en/a.json"), ""));
    }

    #[test]
    fn test_localized_path_replaces_segment() {
        assert_eq!(
            localized_path(Path::new("locales/en/a.json"), "en", "fr"),
            Some(PathBuf::from("locales/fr/a.json"))
        );
        assert_eq!(
            localized_path(Path::new("en/common/a.json"), "en", "pt-BR"),
            Some(PathBuf::from("pt-BR/common/a.json"))
        );
    }

    #[test]
    fn test_localized_path_replaces_first_occurrence_only() {
        assert_eq!(
            localized_path(Path::new("en/docs/en/a.md"), "en", "ar"),
            Some(PathBuf::from("ar/docs/en/a.md"))
        );
    }

    #[test]
    fn test_localized_path_keeps_file_name() {
        assert_eq!(
            localized_path(Path::new("en/en"), "en", "de"),
            Some(PathBuf::from("de/en"))
        );
    }

    #[test]
    fn test_localized_path_without_segment() {
        assert_eq!(localized_path(Path::new("locales/ar/a.json"), "en", "fr"), None);
    }

    #[test]
    fn test_distinct_output_locales_give_distinct_paths() {
        let source = Path::new("locales/en/a.json");
        let ar = localized_path(source, "en", "ar").unwrap_or_default();
        let fr = localized_path(source, "en", "fr").unwrap_or_default();
        assert_ne!(ar, fr);
    }
}
