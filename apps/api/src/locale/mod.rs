//! Fixed UI strings and date formatting for templates.
//!
//! Two locale tables ship with the engine (English and Spanish, matching the
//! wizard's i18n bundles). Any unknown locale tag falls back to English.
//! Label lengths differ between locales, which is why pagination must be
//! re-run on a language change.

use chrono::NaiveDate;

use crate::models::resume::{LanguageLevel, Section};

// ────────────────────────────────────────────────────────────────────────────
// Label tables
// ────────────────────────────────────────────────────────────────────────────

/// All fixed strings a template may need, for one locale.
#[derive(Debug)]
pub struct Labels {
    pub profile: &'static str,
    pub skills: &'static str,
    pub experience: &'static str,
    pub projects: &'static str,
    pub achievements: &'static str,
    pub education: &'static str,
    pub certifications: &'static str,
    pub languages: &'static str,
    /// End bound of an ongoing date range.
    pub present: &'static str,
    /// Shown instead of an end date for unfinished degrees.
    pub in_progress: &'static str,
    pub technologies: &'static str,
    /// Indexed by `LanguageLevel::rank() - 1`.
    pub levels: [&'static str; 4],
    /// Month abbreviations, January first.
    pub months: [&'static str; 12],
}

static EN: Labels = Labels {
    profile: "Professional Summary",
    skills: "Skills",
    experience: "Experience",
    projects: "Projects",
    achievements: "Achievements",
    education: "Education",
    certifications: "Certifications",
    languages: "Languages",
    present: "Present",
    in_progress: "In progress",
    technologies: "Technologies",
    levels: ["Basic", "Intermediate", "Advanced", "Native"],
    months: [
        "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
    ],
};

static ES: Labels = Labels {
    profile: "Resumen Profesional",
    skills: "Habilidades",
    experience: "Experiencia Laboral",
    projects: "Proyectos",
    achievements: "Logros Destacados",
    education: "Educación",
    certifications: "Certificaciones",
    languages: "Idiomas",
    present: "Presente",
    in_progress: "En curso",
    technologies: "Tecnologías",
    levels: ["Básico", "Intermedio", "Avanzado", "Nativo"],
    months: [
        "Ene", "Feb", "Mar", "Abr", "May", "Jun", "Jul", "Ago", "Sep", "Oct", "Nov", "Dic",
    ],
};

/// Resolves the label table for a locale tag. Region subtags are accepted
/// ("es-MX" resolves to Spanish); anything unrecognized resolves to English.
pub fn labels(tag: &str) -> &'static Labels {
    let primary = tag.split(['-', '_']).next().unwrap_or("");
    match primary.to_ascii_lowercase().as_str() {
        "es" => &ES,
        _ => &EN,
    }
}

impl Labels {
    /// Section heading text. `Header` has no heading; templates render the
    /// name block instead.
    pub fn section_heading(&self, section: Section) -> &'static str {
        match section {
            Section::Header => "",
            Section::Profile => self.profile,
            Section::Skills => self.skills,
            Section::Experience => self.experience,
            Section::Projects => self.projects,
            Section::Achievements => self.achievements,
            Section::Education => self.education,
            Section::Certifications => self.certifications,
            Section::Languages => self.languages,
        }
    }

    pub fn level(&self, level: LanguageLevel) -> &'static str {
        self.levels[(level.rank() - 1) as usize]
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Date formatting
// ────────────────────────────────────────────────────────────────────────────

/// Formats a wizard date string as "Mon YYYY" in the given locale.
///
/// Accepts "YYYY-MM-DD", "YYYY-MM" and bare "YYYY". A string that parses as
/// none of these is returned unchanged — a bad date must never abort a render.
pub fn format_date(raw: &str, labels: &Labels) -> String {
    let raw = raw.trim();
    if raw.is_empty() {
        return String::new();
    }

    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return month_year(&date, labels);
    }
    if let Ok(date) = NaiveDate::parse_from_str(&format!("{raw}-01"), "%Y-%m-%d") {
        return month_year(&date, labels);
    }
    if raw.len() == 4 && raw.chars().all(|c| c.is_ascii_digit()) {
        return raw.to_string();
    }

    raw.to_string()
}

fn month_year(date: &NaiveDate, labels: &Labels) -> String {
    use chrono::Datelike;
    let month = labels.months[(date.month0()) as usize];
    format!("{} {}", month, date.year())
}

/// Formats a start–end range. Ongoing items render the localized "Present"
/// as the end bound; a missing end date on a finished item collapses the
/// range to the start alone.
pub fn format_date_range(start: &str, end: &str, ongoing: bool, labels: &Labels) -> String {
    let start_fmt = format_date(start, labels);
    let end_fmt = if ongoing {
        labels.present.to_string()
    } else {
        format_date(end, labels)
    };

    match (start_fmt.is_empty(), end_fmt.is_empty()) {
        (true, true) => String::new(),
        (false, true) => start_fmt,
        (true, false) => end_fmt,
        (false, false) => format!("{start_fmt} – {end_fmt}"),
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_resolves_spanish_and_falls_back_to_english() {
        assert_eq!(labels("es").present, "Presente");
        assert_eq!(labels("es-MX").present, "Presente");
        assert_eq!(labels("en").present, "Present");
        assert_eq!(labels("zz").present, "Present");
        assert_eq!(labels("").present, "Present");
    }

    #[test]
    fn test_format_date_full_and_year_month() {
        let en = labels("en");
        assert_eq!(format_date("2022-03-15", en), "Mar 2022");
        assert_eq!(format_date("2022-03", en), "Mar 2022");
        assert_eq!(format_date("2022", en), "2022");
    }

    #[test]
    fn test_format_date_localizes_month() {
        let es = labels("es");
        assert_eq!(format_date("2021-01-10", es), "Ene 2021");
        assert_eq!(format_date("2021-08", es), "Ago 2021");
    }

    #[test]
    fn test_format_date_unparseable_falls_back_to_raw() {
        let en = labels("en");
        assert_eq!(format_date("Summer of 69", en), "Summer of 69");
        assert_eq!(format_date("2022-13", en), "2022-13");
        assert_eq!(format_date("", en), "");
    }

    #[test]
    fn test_format_date_range_ongoing_uses_present() {
        let en = labels("en");
        assert_eq!(
            format_date_range("2020-06", "2024-01", true, en),
            "Jun 2020 – Present"
        );
        let es = labels("es");
        assert_eq!(
            format_date_range("2020-06", "", true, es),
            "Jun 2020 – Presente"
        );
    }

    #[test]
    fn test_format_date_range_completed() {
        let en = labels("en");
        assert_eq!(
            format_date_range("2018-09", "2022-06", false, en),
            "Sep 2018 – Jun 2022"
        );
        assert_eq!(format_date_range("2018-09", "", false, en), "Sep 2018");
        assert_eq!(format_date_range("", "", false, en), "");
    }

    #[test]
    fn test_section_headings_nonempty_except_header() {
        let en = labels("en");
        for section in crate::models::resume::Section::ORDER {
            if section == crate::models::resume::Section::Header {
                assert!(en.section_heading(section).is_empty());
            } else {
                assert!(!en.section_heading(section).is_empty());
            }
        }
    }

    #[test]
    fn test_level_labels_follow_rank() {
        let es = labels("es");
        assert_eq!(es.level(LanguageLevel::Basic), "Básico");
        assert_eq!(es.level(LanguageLevel::Native), "Nativo");
    }
}
