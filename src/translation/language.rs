//! Human-readable names for locale codes.
//!
//! Names are composed from a language table and a region table, so
//! `ar-EG` becomes `Arabic (Egypt)`. Tags whose usual name does not follow
//! that pattern are listed in [`OVERRIDES`].

use crate::ui::Style;

/// Language codes (ISO 639) and their names.
pub const LANGUAGES: &[(&str, &str)] = &[
    ("af", "Afrikaans"),
    ("am", "Amharic"),
    ("ar", "Arabic"),
    ("az", "Azeri (Latin)"),
    ("be", "Belarusian"),
    ("bg", "Bulgarian"),
    ("bn", "Bengali"),
    ("bs", "Bosnian"),
    ("ca", "Catalan"),
    ("cs", "Czech"),
    ("cy", "Welsh"),
    ("da", "Danish"),
    ("de", "German"),
    ("dv", "Divehi"),
    ("el", "Greek"),
    ("en", "English"),
    ("eo", "Esperanto"),
    ("es", "Spanish"),
    ("et", "Estonian"),
    ("eu", "Basque"),
    ("fa", "Farsi"),
    ("fi", "Finnish"),
    ("fil", "Filipino"),
    ("fo", "Faroese"),
    ("fr", "French"),
    ("ga", "Irish"),
    ("gl", "Galician"),
    ("gu", "Gujarati"),
    ("he", "Hebrew"),
    ("hi", "Hindi"),
    ("hr", "Croatian"),
    ("hu", "Hungarian"),
    ("hy", "Armenian"),
    ("id", "Indonesian"),
    ("is", "Icelandic"),
    ("it", "Italian"),
    ("ja", "Japanese"),
    ("ka", "Georgian"),
    ("kk", "Kazakh"),
    ("km", "Khmer"),
    ("kn", "Kannada"),
    ("ko", "Korean"),
    ("kok", "Konkani"),
    ("ky", "Kyrgyz"),
    ("la", "Latin"),
    ("lo", "Lao"),
    ("lt", "Lithuanian"),
    ("lv", "Latvian"),
    ("mi", "Maori"),
    ("mk", "FYRO Macedonian"),
    ("ml", "Malayalam"),
    ("mn", "Mongolian"),
    ("mr", "Marathi"),
    ("ms", "Malay"),
    ("mt", "Maltese"),
    ("my", "Myanmar (Burmese)"),
    ("nb", "Norwegian (Bokmål)"),
    ("ne", "Nepali"),
    ("nl", "Dutch"),
    ("nn", "Norwegian (Nynorsk)"),
    ("no", "Norwegian"),
    ("ns", "Northern Sotho"),
    ("pa", "Punjabi"),
    ("pl", "Polish"),
    ("ps", "Pashto"),
    ("pt", "Portuguese"),
    ("qu", "Quechua"),
    ("ro", "Romanian"),
    ("ru", "Russian"),
    ("sa", "Sanskrit"),
    ("se", "Sami (Northern)"),
    ("si", "Sinhala"),
    ("sk", "Slovak"),
    ("sl", "Slovenian"),
    ("sq", "Albanian"),
    ("sr", "Serbian (Latin)"),
    ("sv", "Swedish"),
    ("sw", "Swahili"),
    ("syr", "Syriac"),
    ("ta", "Tamil"),
    ("te", "Telugu"),
    ("th", "Thai"),
    ("tl", "Tagalog"),
    ("tn", "Tswana"),
    ("tr", "Turkish"),
    ("ts", "Tsonga"),
    ("tt", "Tatar"),
    ("uk", "Ukrainian"),
    ("ur", "Urdu"),
    ("uz", "Uzbek (Latin)"),
    ("vi", "Vietnamese"),
    ("xh", "Xhosa"),
    ("zh", "Chinese"),
    ("zu", "Zulu"),
];

/// Region codes (ISO 3166-1) and their names.
pub const REGIONS: &[(&str, &str)] = &[
    ("AE", "U.A.E."),
    ("AF", "Afghanistan"),
    ("AL", "Albania"),
    ("AM", "Armenia"),
    ("AR", "Argentina"),
    ("AT", "Austria"),
    ("AU", "Australia"),
    ("AZ", "Azerbaijan"),
    ("BA", "Bosnia and Herzegovina"),
    ("BE", "Belgium"),
    ("BG", "Bulgaria"),
    ("BH", "Bahrain"),
    ("BN", "Brunei Darussalam"),
    ("BO", "Bolivia"),
    ("BR", "Brazil"),
    ("BY", "Belarus"),
    ("BZ", "Belize"),
    ("CA", "Canada"),
    ("CB", "Caribbean"),
    ("CH", "Switzerland"),
    ("CL", "Chile"),
    ("CN", "China"),
    ("CO", "Colombia"),
    ("CR", "Costa Rica"),
    ("CZ", "Czech Republic"),
    ("DE", "Germany"),
    ("DK", "Denmark"),
    ("DO", "Dominican Republic"),
    ("DZ", "Algeria"),
    ("EC", "Ecuador"),
    ("EE", "Estonia"),
    ("EG", "Egypt"),
    ("ES", "Spain"),
    ("FI", "Finland"),
    ("FO", "Faroe Islands"),
    ("FR", "France"),
    ("GB", "United Kingdom"),
    ("GE", "Georgia"),
    ("GR", "Greece"),
    ("GT", "Guatemala"),
    ("HK", "Hong Kong"),
    ("HN", "Honduras"),
    ("HR", "Croatia"),
    ("HU", "Hungary"),
    ("ID", "Indonesia"),
    ("IE", "Ireland"),
    ("IL", "Israel"),
    ("IN", "India"),
    ("IQ", "Iraq"),
    ("IR", "Iran"),
    ("IS", "Iceland"),
    ("IT", "Italy"),
    ("JM", "Jamaica"),
    ("JO", "Jordan"),
    ("JP", "Japan"),
    ("KE", "Kenya"),
    ("KG", "Kyrgyzstan"),
    ("KR", "Korea"),
    ("KW", "Kuwait"),
    ("KZ", "Kazakhstan"),
    ("LB", "Lebanon"),
    ("LI", "Liechtenstein"),
    ("LT", "Lithuania"),
    ("LU", "Luxembourg"),
    ("LV", "Latvia"),
    ("LY", "Libya"),
    ("MA", "Morocco"),
    ("MC", "Principality of Monaco"),
    ("MK", "Former Yugoslav Republic of Macedonia"),
    ("MN", "Mongolia"),
    ("MO", "Macau"),
    ("MT", "Malta"),
    ("MV", "Maldives"),
    ("MX", "Mexico"),
    ("MY", "Malaysia"),
    ("NI", "Nicaragua"),
    ("NL", "Netherlands"),
    ("NO", "Norway"),
    ("NZ", "New Zealand"),
    ("OM", "Oman"),
    ("PA", "Panama"),
    ("PE", "Peru"),
    ("PH", "Philippines"),
    ("PK", "Pakistan"),
    ("PL", "Poland"),
    ("PR", "Puerto Rico"),
    ("PT", "Portugal"),
    ("PY", "Paraguay"),
    ("QA", "Qatar"),
    ("RO", "Romania"),
    ("RS", "Serbia"),
    ("RU", "Russia"),
    ("SA", "Saudi Arabia"),
    ("SE", "Sweden"),
    ("SG", "Singapore"),
    ("SI", "Slovenia"),
    ("SK", "Slovakia"),
    ("SV", "El Salvador"),
    ("SY", "Syria"),
    ("TH", "Thailand"),
    ("TN", "Tunisia"),
    ("TR", "Turkey"),
    ("TT", "Trinidad and Tobago"),
    ("TW", "Taiwan"),
    ("UA", "Ukraine"),
    ("US", "United States"),
    ("UY", "Uruguay"),
    ("UZ", "Uzbekistan"),
    ("VE", "Venezuela"),
    ("VN", "Viet Nam"),
    ("YE", "Yemen"),
    ("ZA", "South Africa"),
    ("ZW", "Zimbabwe"),
];

/// Full tags whose names are not `Language (Region)`.
pub const OVERRIDES: &[(&str, &str)] = &[
    ("en-PH", "English (Republic of the Philippines)"),
    ("ps-AR", "Pashto (Afghanistan)"),
    ("sr-SP", "Serbian (Latin) (Serbia and Montenegro)"),
    ("zh-CN", "Chinese (Simplified)"),
    ("zh-SG", "Chinese (Simplified, Singapore)"),
    ("zh-TW", "Chinese (Traditional)"),
];

fn lookup(table: &[(&str, &'static str)], code: &str) -> Option<&'static str> {
    table
        .iter()
        .find(|(key, _)| key.eq_ignore_ascii_case(code))
        .map(|(_, name)| *name)
}

/// Returns the display name for a locale code such as `ar-EG` or `pt_BR`.
///
/// Unknown codes are returned unchanged.
pub fn display_name(code: &str) -> String {
    let tag = code.replace('_', "-");

    if let Some(name) = lookup(OVERRIDES, &tag) {
        return name.to_string();
    }

    let mut parts = tag.splitn(2, '-');
    let language = parts.next().and_then(|lang| lookup(LANGUAGES, lang));
    let region = parts.next();

    match (language, region) {
        (Some(language), None) => language.to_string(),
        (Some(language), Some(region)) => lookup(REGIONS, region)
            .map_or_else(|| code.to_string(), |region| format!("{language} ({region})")),
        (None, _) => code.to_string(),
    }
}

/// Prints all known language codes to stdout.
pub fn print_languages() {
    println!("{}", Style::header("Known language codes"));
    for (code, name) in LANGUAGES {
        println!("  {} {}", Style::code(format!("{code:5}")), Style::secondary(name));
    }
    println!();
    println!(
        "{}",
        Style::hint("Combine with a region code for regional names, e.g. ar-EG, pt-BR.")
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_only() {
        assert_eq!(display_name("en"), "English");
        assert_eq!(display_name("ar"), "Arabic");
        assert_eq!(display_name("kok"), "Konkani");
    }

    #[test]
    fn test_language_with_region() {
        assert_eq!(display_name("ar-EG"), "Arabic (Egypt)");
        assert_eq!(display_name("en-GB"), "English (United Kingdom)");
        assert_eq!(display_name("nb-NO"), "Norwegian (Bokmål) (Norway)");
        assert_eq!(display_name("se-FI"), "Sami (Northern) (Finland)");
    }

    #[test]
    fn test_overrides() {
        assert_eq!(display_name("zh-TW"), "Chinese (Traditional)");
        assert_eq!(display_name("zh-CN"), "Chinese (Simplified)");
        assert_eq!(display_name("zh-HK"), "Chinese (Hong Kong)");
    }

    #[test]
    fn test_underscore_separator() {
        assert_eq!(display_name("pt_BR"), "Portuguese (Brazil)");
    }

    #[test]
    fn test_unknown_codes_are_returned_unchanged() {
        assert_eq!(display_name("xx-YY"), "xx-YY");
        assert_eq!(display_name("xx"), "xx");
        assert_eq!(display_name("en-QQ"), "en-QQ");
        assert_eq!(display_name(""), "");
    }

    #[test]
    fn test_tables_have_unique_codes() {
        for table in [LANGUAGES, REGIONS, OVERRIDES] {
            let mut codes: Vec<_> = table.iter().map(|(code, _)| *code).collect();
            let total = codes.len();
            codes.sort_unstable();
            codes.dedup();
            assert_eq!(codes.len(), total);
        }
    }
}
