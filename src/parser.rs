//! Conversion of the free-form resume text into its sections.
//!
//! The text is expected to follow the template of the text generation step: the name on the
//! first line, the contact details on the second one, then blocks of lines introduced by a header
//! line which reads exactly as one of the [`SectionKey`] keywords (case-insensitive). Anything
//! which deviates from this convention is dropped without notice.

use std::collections::BTreeMap;

/// The closed set of sections a resume text is split into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SectionKey {
    Name,
    Contact,
    Summary,
    TechnicalSkills,
    SoftSkills,
    WorkExperience,
    PersonalProjects,
    Education,
    References,
}

impl SectionKey {
    /// Every section key, in the order in which they appear in the template.
    pub const ALL: [SectionKey; 9] = [
        SectionKey::Name,
        SectionKey::Contact,
        SectionKey::Summary,
        SectionKey::TechnicalSkills,
        SectionKey::SoftSkills,
        SectionKey::WorkExperience,
        SectionKey::PersonalProjects,
        SectionKey::Education,
        SectionKey::References,
    ];

    /// The header keyword introducing the section, `None` for the two positional sections.
    pub fn keyword(self) -> Option<&'static str> {
        match self {
            SectionKey::Name | SectionKey::Contact => None,
            SectionKey::Summary => Some("summary"),
            SectionKey::TechnicalSkills => Some("technical skills"),
            SectionKey::SoftSkills => Some("soft skills"),
            SectionKey::WorkExperience => Some("work experience"),
            SectionKey::PersonalProjects => Some("personal projects"),
            SectionKey::Education => Some("education"),
            SectionKey::References => Some("references"),
        }
    }

    /// Finds the section introduced by a header line, the line must match a keyword exactly
    /// once trimmed and lower-cased.
    pub fn from_header_line(line: &str) -> Option<SectionKey> {
        let header = line.trim().to_lowercase();
        SectionKey::ALL
            .into_iter()
            .find(|key| key.keyword() == Some(header.as_str()))
    }
}

/// The lines of the resume text, grouped by the section they belong to.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedResumeSections {
    sections: BTreeMap<SectionKey, Vec<String>>,
}

impl ParsedResumeSections {
    /// The trimmed lines of the given section, empty if the section was absent.
    pub fn lines(&self, key: SectionKey) -> &[String] {
        self.sections.get(&key).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn has_content(&self, key: SectionKey) -> bool {
        !self.lines(key).is_empty()
    }

    /// The first line of the text, empty if there was none.
    pub fn name(&self) -> &str {
        self.lines(SectionKey::Name)
            .first()
            .map(String::as_str)
            .unwrap_or("")
    }

    /// The second line of the text, empty if there was none.
    pub fn contact(&self) -> &str {
        self.lines(SectionKey::Contact)
            .first()
            .map(String::as_str)
            .unwrap_or("")
    }
}

/// Splits the resume text into its sections. The first two non-empty lines are always the name and
/// the contact line, every other line is assigned to the most recently seen header. Lines which come
/// before the first header are dropped.
pub fn parse_resume_text(resume_text: &str) -> ParsedResumeSections {
    let mut sections: BTreeMap<SectionKey, Vec<String>> = SectionKey::ALL
        .into_iter()
        .map(|key| (key, Vec::new()))
        .collect();

    let mut lines = resume_text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty());

    for positional_key in [SectionKey::Name, SectionKey::Contact] {
        let line = lines.next().unwrap_or("");
        sections.entry(positional_key).or_default().push(line.to_string());
    }

    let mut current_section: Option<SectionKey> = None;
    let mut dropped_lines = 0usize;
    for line in lines {
        if let Some(key) = SectionKey::from_header_line(line) {
            current_section = Some(key);
        } else if let Some(key) = current_section {
            sections.entry(key).or_default().push(line.to_string());
        } else {
            dropped_lines += 1;
        }
    }
    if dropped_lines > 0 {
        log::debug!(
            "Dropped {} resume line(s) found before the first section header",
            dropped_lines
        );
    }

    ParsedResumeSections { sections }
}

/// One job of the work experience section.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ExperienceEntry {
    pub title: String,
    pub company: String,
    pub date: String,
    pub bullets: Vec<String>,
}

/// One project of the personal projects section.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ProjectEntry {
    pub name: String,
    pub url: Option<String>,
    pub date: String,
    pub bullets: Vec<String>,
}

/// The shape shared by the list sections: the pipe separated fields of the line which opened the
/// entry, the last free line seen (the date range) and the bullets.
#[derive(Debug, Default)]
struct RawEntry {
    fields: Vec<String>,
    date: String,
    bullets: Vec<String>,
}

impl RawEntry {
    fn field(&self, index: usize) -> String {
        self.fields.get(index).cloned().unwrap_or_default()
    }
}

/// Strips the marker of a bullet line, returning `None` if the line is not a bullet.
pub fn strip_bullet_marker(line: &str) -> Option<&str> {
    line.strip_prefix('-')
        .or_else(|| line.strip_prefix('•'))
        .map(str::trim)
}

/// Applies the entry sub-grammar: a line containing a pipe opens a new entry, a bullet line is
/// attached to the current entry and any other line becomes its date range. Lines which precede the
/// first entry are dropped.
fn parse_raw_entries(lines: &[String]) -> Vec<RawEntry> {
    let mut entries = Vec::new();
    let mut current_entry: Option<RawEntry> = None;

    for line in lines {
        if line.contains('|') {
            if let Some(entry) = current_entry.take() {
                entries.push(entry);
            }
            current_entry = Some(RawEntry {
                fields: line.split('|').map(|field| field.trim().to_string()).collect(),
                ..Default::default()
            });
        } else if let Some(entry) = current_entry.as_mut() {
            match strip_bullet_marker(line) {
                Some(bullet) if !bullet.is_empty() => entry.bullets.push(bullet.to_string()),
                Some(_) => {}
                None => entry.date = line.clone(),
            }
        } else {
            log::debug!("Dropping the line {:?} which precedes any entry", line);
        }
    }
    if let Some(entry) = current_entry {
        entries.push(entry);
    }

    entries
}

/// Parses the work experience lines into `Title | Company` entries.
pub fn parse_experience_entries(lines: &[String]) -> Vec<ExperienceEntry> {
    parse_raw_entries(lines)
        .into_iter()
        .map(|entry| ExperienceEntry {
            title: entry.field(0),
            company: entry.field(1),
            date: entry.date,
            bullets: entry.bullets,
        })
        .collect()
}

/// Parses the personal projects lines into `Name | URL` entries, the URL being optional.
pub fn parse_project_entries(lines: &[String]) -> Vec<ProjectEntry> {
    parse_raw_entries(lines)
        .into_iter()
        .map(|entry| {
            let url = Some(entry.field(1)).filter(|url| !url.is_empty());
            ProjectEntry {
                name: entry.field(0),
                url,
                date: entry.date,
                bullets: entry.bullets,
            }
        })
        .collect()
}
