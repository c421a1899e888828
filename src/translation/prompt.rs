use super::language::display_name;

pub const SYSTEM_PROMPT_TEMPLATE: &str = "\
You are an expert language translator. Your task is to translate the text provided to you from {source_language} to {target_language}, while preserving any placeholders that may be present in the source text.

The input text will be the original file content, and the output text should be parsable content, do not include any comments or unnecessary whitespace.

If the input text contains any placeholders (e.g. {name}, {count}, etc.), ensure that these placeholders remain unchanged in the {target_language} translation.

Provide a high-quality translation that conveys the original meaning accurately and idiomatically. Do not simply perform a literal word-for-word translation, but adapt the phrasing and grammar to produce natural-sounding text that is appropriate for the target audience for the business described below.

Business Description:
{business_description}";

/// Builds the system prompt for translating from `source_locale` to `target_locale`.
///
/// A non-empty `override_prompt` is returned verbatim.
#[allow(clippy::literal_string_with_formatting_args)]
pub fn build_system_prompt(
    override_prompt: Option<&str>,
    source_locale: &str,
    target_locale: &str,
    business_description: &str,
) -> String {
    if let Some(prompt) = override_prompt.filter(|p| !p.is_empty()) {
        return prompt.to_string();
    }

    // {..} are placeholders for string replacement, not format arguments.
    // The business description goes in last so its own braces stay untouched.
    SYSTEM_PROMPT_TEMPLATE
        .replace("{source_language}", &display_name(source_locale))
        .replace("{target_language}", &display_name(target_locale))
        .replace("{business_description}", business_description.trim_end())
}
