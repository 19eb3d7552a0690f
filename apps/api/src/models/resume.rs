//! Normalized resume content schema.
//!
//! `ResumeData` is the language-agnostic object the wizard produces and every
//! template consumes. It is pure data: the pagination engine annotates a deep
//! copy with page numbers, the page filter derives per-page copies from that,
//! and the original snapshot is never mutated.
//!
//! Field names serialize as camelCase because the payload is produced and
//! persisted by the JS wizard.

use serde::{Deserialize, Serialize};

// ────────────────────────────────────────────────────────────────────────────
// Sections
// ────────────────────────────────────────────────────────────────────────────

/// The nine resume sections, in the fixed document order every template must
/// preserve. Templates may move a section into a sidebar column, but relative
/// order within each column still follows this order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    Header,
    Profile,
    Skills,
    Experience,
    Projects,
    Achievements,
    Education,
    Certifications,
    Languages,
}

impl Section {
    /// Document order. Pagination walks sections in exactly this order.
    pub const ORDER: [Section; 9] = [
        Section::Header,
        Section::Profile,
        Section::Skills,
        Section::Experience,
        Section::Projects,
        Section::Achievements,
        Section::Education,
        Section::Certifications,
        Section::Languages,
    ];

    /// Stable marker value used in `data-section` attributes.
    pub fn key(&self) -> &'static str {
        match self {
            Section::Header => "header",
            Section::Profile => "profile",
            Section::Skills => "skills",
            Section::Experience => "experience",
            Section::Projects => "projects",
            Section::Achievements => "achievements",
            Section::Education => "education",
            Section::Certifications => "certifications",
            Section::Languages => "languages",
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Entry types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct Experience {
    pub id: String,
    pub title: String,
    pub company: String,
    pub location: String,
    pub start_date: String,
    pub end_date: String,
    pub is_current: bool,
    pub achievements: Vec<String>,
    pub responsibilities: Vec<String>,
    /// Primary page, assigned by the pagination engine. Never set by the UI.
    pub page_number: Option<u32>,
}

impl Experience {
    /// The displayed bullet list: achievements first, then responsibilities.
    pub fn bullets(&self) -> Vec<&str> {
        self.achievements
            .iter()
            .chain(self.responsibilities.iter())
            .map(String::as_str)
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct Education {
    pub id: String,
    pub degree: String,
    pub field: String,
    pub institution: String,
    pub start_date: String,
    pub end_date: String,
    /// False means in progress; templates suppress the end date.
    pub is_completed: bool,
    pub gpa: Option<String>,
    pub page_number: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct Project {
    pub id: String,
    pub name: String,
    pub description: String,
    pub technologies: Vec<String>,
    pub url: String,
    pub start_date: String,
    pub end_date: String,
    pub is_ongoing: bool,
    pub page_number: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct Certification {
    pub id: String,
    pub name: String,
    pub issuer: String,
    pub date: String,
    pub page_number: Option<u32>,
}

/// Closed proficiency scale for spoken languages. Ordinal: templates render it
/// as a filled-dots indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LanguageLevel {
    Basic,
    #[default]
    Intermediate,
    Advanced,
    Native,
}

impl LanguageLevel {
    /// 1-based ordinal, out of 4.
    pub fn rank(&self) -> u8 {
        match self {
            LanguageLevel::Basic => 1,
            LanguageLevel::Intermediate => 2,
            LanguageLevel::Advanced => 3,
            LanguageLevel::Native => 4,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct LanguageSkill {
    pub id: String,
    pub name: String,
    pub level: LanguageLevel,
    pub page_number: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct Achievement {
    pub id: String,
    pub title: String,
    pub description: String,
    pub year: String,
    pub page_number: Option<u32>,
}

// ────────────────────────────────────────────────────────────────────────────
// Root object
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct ResumeData {
    // Professional profile
    pub first_name: String,
    pub last_name: String,
    pub profession: String,
    pub country: String,
    pub email: String,
    pub phone: String,
    pub linkedin: String,
    pub summary: String,
    /// Locale tag, e.g. "en" or "es". Templates fall back to English labels
    /// for unknown tags.
    pub language: String,
    pub tone: String,
    pub target_level: String,

    // Skills and tools are kept as separate ordered lists in the source data
    // but rendered as one merged, deduplicated display list.
    pub skills_raw: Vec<String>,
    pub tools_raw: Vec<String>,

    pub experience: Vec<Experience>,
    pub education: Vec<Education>,
    pub projects: Vec<Project>,
    pub certifications: Vec<Certification>,
    pub languages: Vec<LanguageSkill>,
    pub achievements: Vec<Achievement>,

    /// Running character count maintained by the wizard. A hint only — the
    /// pagination engine trusts measured heights, never this.
    pub total_characters: u32,

    /// Page the summary block was assigned to. None until pagination runs.
    pub summary_page_number: Option<u32>,
}

impl ResumeData {
    pub fn full_name(&self) -> String {
        [self.first_name.as_str(), self.last_name.as_str()]
            .iter()
            .filter(|s| !s.is_empty())
            .copied()
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// The merged skills + tools display list.
    ///
    /// Skills pass through verbatim (including duplicates within the skills
    /// list itself); tools are appended only if the exact name has not already
    /// been displayed. First occurrence wins, matching is case-sensitive.
    pub fn merged_skills(&self) -> Vec<&str> {
        let mut seen: std::collections::HashSet<&str> =
            self.skills_raw.iter().map(String::as_str).collect();
        let mut merged: Vec<&str> = self.skills_raw.iter().map(String::as_str).collect();
        for tool in &self.tools_raw {
            if seen.insert(tool.as_str()) {
                merged.push(tool.as_str());
            }
        }
        merged
    }

    /// True when a section has no renderable content. Templates omit the whole
    /// section wrapper for empty sections rather than rendering a placeholder.
    pub fn section_is_empty(&self, section: Section) -> bool {
        match section {
            Section::Header => {
                self.full_name().is_empty()
                    && self.profession.is_empty()
                    && self.email.is_empty()
                    && self.phone.is_empty()
            }
            Section::Profile => self.summary.trim().is_empty(),
            Section::Skills => self.merged_skills().is_empty(),
            Section::Experience => self.experience.is_empty(),
            Section::Projects => self.projects.is_empty(),
            Section::Achievements => self.achievements.is_empty(),
            Section::Education => self.education.is_empty(),
            Section::Certifications => self.certifications.is_empty(),
            Section::Languages => self.languages.is_empty(),
        }
    }

    /// Clears every pagination annotation. Used before re-applying a plan.
    pub fn clear_page_numbers(&mut self) {
        self.summary_page_number = None;
        for e in &mut self.experience {
            e.page_number = None;
        }
        for e in &mut self.education {
            e.page_number = None;
        }
        for p in &mut self.projects {
            p.page_number = None;
        }
        for c in &mut self.certifications {
            c.page_number = None;
        }
        for l in &mut self.languages {
            l.page_number = None;
        }
        for a in &mut self.achievements {
            a.page_number = None;
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merged_skills_dedups_tools_against_skills() {
        let data = ResumeData {
            skills_raw: vec!["Go".into(), "Go".into(), "Rust".into()],
            tools_raw: vec!["Rust".into(), "Docker".into()],
            ..Default::default()
        };
        assert_eq!(data.merged_skills(), vec!["Go", "Go", "Rust", "Docker"]);
    }

    #[test]
    fn test_merged_skills_dedup_is_case_sensitive() {
        let data = ResumeData {
            skills_raw: vec!["rust".into()],
            tools_raw: vec!["Rust".into()],
            ..Default::default()
        };
        assert_eq!(data.merged_skills(), vec!["rust", "Rust"]);
    }

    #[test]
    fn test_merged_skills_dedups_within_tools() {
        let data = ResumeData {
            tools_raw: vec!["Docker".into(), "Docker".into()],
            ..Default::default()
        };
        assert_eq!(data.merged_skills(), vec!["Docker"]);
    }

    #[test]
    fn test_bullets_concatenates_achievements_then_responsibilities() {
        let exp = Experience {
            achievements: vec!["a1".into(), "a2".into()],
            responsibilities: vec!["r1".into()],
            ..Default::default()
        };
        assert_eq!(exp.bullets(), vec!["a1", "a2", "r1"]);
    }

    #[test]
    fn test_section_order_starts_with_header_ends_with_languages() {
        assert_eq!(Section::ORDER[0], Section::Header);
        assert_eq!(Section::ORDER[8], Section::Languages);
        assert_eq!(Section::ORDER.len(), 9);
    }

    #[test]
    fn test_empty_sections_detected() {
        let data = ResumeData::default();
        assert!(data.section_is_empty(Section::Projects));
        assert!(data.section_is_empty(Section::Profile));
        assert!(data.section_is_empty(Section::Header));

        let data = ResumeData {
            first_name: "Ada".into(),
            summary: "Engineer.".into(),
            projects: vec![Project::default()],
            ..Default::default()
        };
        assert!(!data.section_is_empty(Section::Header));
        assert!(!data.section_is_empty(Section::Profile));
        assert!(!data.section_is_empty(Section::Projects));
    }

    #[test]
    fn test_resume_data_round_trips_camel_case() {
        let json = serde_json::json!({
            "firstName": "Ada",
            "lastName": "Lovelace",
            "skillsRaw": ["Rust"],
            "experience": [{
                "id": "exp-1",
                "title": "Engineer",
                "company": "Acme",
                "isCurrent": true,
                "achievements": ["Shipped it"],
                "pageNumber": null
            }]
        });
        let data: ResumeData = serde_json::from_value(json).expect("deserializes");
        assert_eq!(data.first_name, "Ada");
        assert_eq!(data.experience[0].id, "exp-1");
        assert!(data.experience[0].page_number.is_none());

        let back = serde_json::to_value(&data).expect("serializes");
        assert!(back.get("firstName").is_some());
        assert!(back["experience"][0].get("isCurrent").is_some());
    }

    #[test]
    fn test_language_level_rank_is_ordinal() {
        assert!(LanguageLevel::Basic.rank() < LanguageLevel::Intermediate.rank());
        assert!(LanguageLevel::Advanced.rank() < LanguageLevel::Native.rank());
        assert_eq!(LanguageLevel::Native.rank(), 4);
    }

    #[test]
    fn test_clear_page_numbers_resets_all_entries() {
        let mut data = ResumeData {
            summary_page_number: Some(1),
            experience: vec![Experience {
                page_number: Some(2),
                ..Default::default()
            }],
            languages: vec![LanguageSkill {
                page_number: Some(3),
                ..Default::default()
            }],
            ..Default::default()
        };
        data.clear_page_numbers();
        assert!(data.summary_page_number.is_none());
        assert!(data.experience[0].page_number.is_none());
        assert!(data.languages[0].page_number.is_none());
    }
}
