//! Language-name-to-code mapping for speech synthesis.

/// Supported display-name / ISO 639-1 code pairs.
pub const LANGUAGES: [(&str, &str); 25] = [
    ("English", "en"),
    ("Spanish", "es"),
    ("French", "fr"),
    ("German", "de"),
    ("Hindi", "hi"),
    ("Chinese", "zh"),
    ("Arabic", "ar"),
    ("Russian", "ru"),
    ("Portuguese", "pt"),
    ("Japanese", "ja"),
    ("Italian", "it"),
    ("Korean", "ko"),
    ("Turkish", "tr"),
    ("Vietnamese", "vi"),
    ("Bengali", "bn"),
    ("Urdu", "ur"),
    ("Tamil", "ta"),
    ("Telugu", "te"),
    ("Gujarati", "gu"),
    ("Marathi", "mr"),
    ("Malayalam", "ml"),
    ("Kannada", "kn"),
    ("Punjabi", "pa"),
    ("Oriya", "or"),
    ("Assamese", "as"),
];

/// Code used when a language name is not in the table. Callers are expected
/// to warn before falling back.
pub const DEFAULT_LANGUAGE_CODE: &str = "en";

/// Look up the speech code for a language display name.
pub fn language_code(name: &str) -> Option<&'static str> {
    LANGUAGES
        .iter()
        .find(|(language, _)| *language == name)
        .map(|(_, code)| *code)
}
