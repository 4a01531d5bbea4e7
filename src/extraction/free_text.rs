use super::sections::{answer_lines, find_section_body};
use super::{Answer, FieldExtractor, Section};
use once_cell::sync::Lazy;
use regex::Regex;

/// Placeholder GitHub issue forms render for an empty optional field.
const NO_RESPONSE: &str = "_No response_";

/// List item or checkbox prefix in front of an answer (`- `, `* `, `- [x] `).
static LIST_PREFIX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:[-*+][ \t]+)?(?:\[[ xX]\][ \t]*)?").expect("static list prefix pattern")
});

/// Answers written as free text between section headers.
///
/// The first non-empty line below the header is the answer; unchecked checkbox
/// items are skipped. Checkbox and bullet prefixes are stripped; `None` and
/// `_No response_` resolve to the sentinel.
#[derive(Debug, Clone, Copy, Default)]
pub struct FreeTextExtractor;

impl FreeTextExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl FieldExtractor for FreeTextExtractor {
    fn extract(&self, body: &str, section: Section) -> Answer {
        find_section_body(body, section)
            .and_then(first_answer_line)
            .map_or(Answer::None, |line| Answer::Label(line.to_string()))
    }
}

fn first_answer_line(section_body: &str) -> Option<&str> {
    let line = answer_lines(section_body).next()?;
    let answer = LIST_PREFIX
        .find(line)
        .map_or(line, |prefix| &line[prefix.end()..])
        .trim();

    if answer.is_empty() || answer == NO_RESPONSE || answer == "None" {
        None
    } else {
        Some(answer)
    }
}
