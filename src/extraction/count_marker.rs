use super::sections::{answer_lines, find_section_body};
use super::{Answer, FieldExtractor, Section};
use once_cell::sync::Lazy;
use regex::Regex;

/// Trailing `(...)` on an answer line.
static MARKER_SUFFIX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\(([^()]*)\)[ \t]*$").expect("static marker pattern"));

/// Answers that carry their weight in a parenthesized suffix.
///
/// `- [x] Login issues (50)` under the affected areas header yields
/// `Answer::Marker("50")`. The marker text is returned raw; parsing it into a
/// number is left to the weight resolver.
#[derive(Debug, Clone, Copy, Default)]
pub struct CountMarkerExtractor;

impl CountMarkerExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl FieldExtractor for CountMarkerExtractor {
    fn extract(&self, body: &str, section: Section) -> Answer {
        find_section_body(body, section)
            .and_then(|section_body| answer_lines(section_body).find_map(marker_of))
            .map_or(Answer::None, |marker| Answer::Marker(marker.to_string()))
    }
}

fn marker_of(line: &str) -> Option<&str> {
    MARKER_SUFFIX
        .captures(line)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim())
}
