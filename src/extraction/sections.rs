use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

/// Sections of the issue template that feed the score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Section {
    AffectedAreas,
    AdditionalAffectedAreas,
    Environment,
    UserUnblocked,
    UnblockReason,
}

impl Section {
    pub const ALL: [Section; 5] = [
        Section::AffectedAreas,
        Section::AdditionalAffectedAreas,
        Section::Environment,
        Section::UserUnblocked,
        Section::UnblockReason,
    ];

    /// Sections whose absence blocks scoring entirely.
    pub const MANDATORY: [Section; 3] = [
        Section::AffectedAreas,
        Section::Environment,
        Section::UserUnblocked,
    ];

    /// Header text as it appears in the issue template.
    pub const fn title(self) -> &'static str {
        match self {
            Section::AffectedAreas => "Affected areas",
            Section::AdditionalAffectedAreas => "Additional affected areas",
            Section::Environment => "Prod/Non-prod environments",
            Section::UserUnblocked => "Is User unblocked?",
            Section::UnblockReason => "How was the user un-blocked?",
        }
    }

    pub fn is_mandatory(self) -> bool {
        Self::MANDATORY.contains(&self)
    }

    fn index(self) -> usize {
        match self {
            Section::AffectedAreas => 0,
            Section::AdditionalAffectedAreas => 1,
            Section::Environment => 2,
            Section::UserUnblocked => 3,
            Section::UnblockReason => 4,
        }
    }

    fn header_pattern(self) -> &'static Regex {
        &SECTION_HEADERS[self.index()]
    }
}

impl std::fmt::Display for Section {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.title())
    }
}

/// Any markdown header line, used as the end of a section body.
static NEXT_HEADER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^[ \t]*#{1,6}[ \t]").expect("static header pattern"));

// Header line for a section: optional `#` run, optional decoration (emoji,
// punctuation), the title, optional trailing colon.
static SECTION_HEADERS: Lazy<Vec<Regex>> = Lazy::new(|| {
    Section::ALL
        .iter()
        .map(|section| {
            let pattern = format!(
                r"(?im)^[ \t]*#{{0,6}}[ \t]*(?:[^\w\s][ \t]*)*{}[ \t]*:?[ \t]*\r?$",
                regex::escape(section.title())
            );
            Regex::new(&pattern).expect("section header pattern")
        })
        .collect()
});

/// Text following the header of `section`, up to the next header or end of input.
///
/// A section ends at any markdown header line or at the header of another
/// template section, which may be written without a leading `#`.
/// Returns `None` when the header does not appear in `body`.
pub fn find_section_body(body: &str, section: Section) -> Option<&str> {
    let header = section.header_pattern().find(body)?;
    let rest = &body[header.end()..];
    let end = std::iter::once(&*NEXT_HEADER)
        .chain(SECTION_HEADERS.iter())
        .filter_map(|pattern| pattern.find(rest))
        .map(|m| m.start())
        .min()
        .unwrap_or(rest.len());
    Some(&rest[..end])
}

/// Candidate answer lines of a section body: trimmed, non-empty, and not an
/// unchecked checkbox item.
pub(crate) fn answer_lines(section_body: &str) -> impl Iterator<Item = &str> {
    section_body
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !UNCHECKED_ITEM.is_match(line))
}

static UNCHECKED_ITEM: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[-*+][ \t]+\[ \]").expect("static checkbox pattern"));
