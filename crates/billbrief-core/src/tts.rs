//! Text cleanup for speech synthesis.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref MARKUP: Regex = Regex::new(r"[\*_#`~]").unwrap();
    static ref SPACES: Regex = Regex::new(r" +").unwrap();
}

/// Strip markdown emphasis/heading/backtick markup and collapse repeated
/// spaces so the synthesizer does not read punctuation aloud. Newlines are
/// kept; they read as natural pauses. Idempotent.
pub fn clean_for_tts(text: &str) -> String {
    let stripped = MARKUP.replace_all(text, "");
    SPACES.replace_all(&stripped, " ").trim().to_string()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn strips_markdown_markup() {
        assert_eq!(
            clean_for_tts("# Bill **Summary**\n`total` is *42* dollars_"),
            "Bill Summary\ntotal is 42 dollars"
        );
    }

    #[test]
    fn collapses_repeated_spaces_and_trims() {
        assert_eq!(clean_for_tts("  hello    world  "), "hello world");
    }

    #[test]
    fn keeps_newlines() {
        assert_eq!(clean_for_tts("line one\nline two"), "line one\nline two");
    }

    #[test]
    fn idempotent_on_markdown_laden_input() {
        let inputs = [
            "# Heading\n\n**Bold** and _underscore_ and `code` ~~strike~~",
            "   spaced    out   text   ",
            "plain already-clean text",
            "*_#`~",
        ];
        for input in inputs {
            let once = clean_for_tts(input);
            let twice = clean_for_tts(&once);
            assert_eq!(once, twice, "input {input:?}");
        }
    }
}
