//! Height measurement pass.
//!
//! Before pagination, the whole resume is measured once against the selected
//! template's `TemplateStyle`: per-section heading heights, per-entry header
//! heights, and the height of each individual experience bullet. Heights are
//! predicted from the static font metric tables rather than a live layout
//! pass, so the result is deterministic for a given
//! `(data, style, language)` triple.
//!
//! Locale matters: date-range and proficiency labels differ in length
//! between languages, which can change wrap counts and therefore heights.

use crate::locale;
use crate::models::resume::{ResumeData, Section};
use crate::templates::{Column, TemplateStyle};

use super::font_metrics::{get_metrics, FontMetricTable};

/// Gap between adjacent skill chips, px.
const CHIP_GAP_PX: f32 = 6.0;

// ────────────────────────────────────────────────────────────────────────────
// Measured shapes
// ────────────────────────────────────────────────────────────────────────────

/// One measured entry. `bullet_px` is non-empty only for experience entries;
/// those are the only entries the paginator may split across pages.
#[derive(Debug, Clone)]
pub struct MeasuredEntry {
    pub id: String,
    /// Title + meta line(s). For atomic entries this is the whole entry.
    pub header_px: f32,
    /// Height of each displayed bullet, in display order.
    pub bullet_px: Vec<f32>,
}

impl MeasuredEntry {
    pub fn total_px(&self) -> f32 {
        self.header_px + self.bullet_px.iter().sum::<f32>()
    }
}

/// One measured section block, tagged with the column the template places it
/// in. Entry-less sections (header, profile, skills) carry their content in
/// `body_px`.
#[derive(Debug, Clone)]
pub struct MeasuredBlock {
    pub section: Section,
    pub column: Column,
    pub heading_px: f32,
    pub body_px: f32,
    pub entries: Vec<MeasuredEntry>,
}

impl MeasuredBlock {
    pub fn total_px(&self) -> f32 {
        self.heading_px + self.body_px + self.entries.iter().map(MeasuredEntry::total_px).sum::<f32>()
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Measurement
// ────────────────────────────────────────────────────────────────────────────

/// Measures every non-empty section of the resume. Blocks come back in the
/// fixed document order; empty sections are absent, matching the templates'
/// empty-section omission rule.
pub fn measure_resume(data: &ResumeData, style: &TemplateStyle, language: &str) -> Vec<MeasuredBlock> {
    let metrics = get_metrics(style.font);
    let labels = locale::labels(language);

    let mut blocks = Vec::new();
    for section in Section::ORDER {
        if data.section_is_empty(section) {
            continue;
        }
        let column = style.column(section);
        let width = style.section_width_px(section);

        let block = match section {
            Section::Header => MeasuredBlock {
                section,
                column,
                heading_px: 0.0,
                body_px: style.header_block_px,
                entries: Vec::new(),
            },
            Section::Profile => MeasuredBlock {
                section,
                column,
                heading_px: style.heading_block_px,
                body_px: text_block_px(&data.summary, width, style, metrics),
                entries: Vec::new(),
            },
            Section::Skills => MeasuredBlock {
                section,
                column,
                heading_px: style.heading_block_px,
                body_px: chip_rows(&data.merged_skills(), width, style, metrics) as f32
                    * style.chip_row_px,
                entries: Vec::new(),
            },
            Section::Experience => MeasuredBlock {
                section,
                column,
                heading_px: style.heading_block_px,
                body_px: 0.0,
                entries: data
                    .experience
                    .iter()
                    .map(|exp| {
                        let meta = format!(
                            "{} · {} · {}",
                            exp.company,
                            exp.location,
                            locale::format_date_range(
                                &exp.start_date,
                                &exp.end_date,
                                exp.is_current,
                                labels
                            )
                        );
                        MeasuredEntry {
                            id: exp.id.clone(),
                            header_px: header_px(&meta, width, style, metrics),
                            bullet_px: exp
                                .bullets()
                                .iter()
                                .map(|b| text_block_px(b, width, style, metrics))
                                .collect(),
                        }
                    })
                    .collect(),
            },
            Section::Projects => MeasuredBlock {
                section,
                column,
                heading_px: style.heading_block_px,
                body_px: 0.0,
                entries: data
                    .projects
                    .iter()
                    .map(|proj| {
                        let mut h = header_px(
                            &locale::format_date_range(
                                &proj.start_date,
                                &proj.end_date,
                                proj.is_ongoing,
                                labels,
                            ),
                            width,
                            style,
                            metrics,
                        );
                        h += text_block_px(&proj.description, width, style, metrics);
                        if !proj.technologies.is_empty() {
                            h += text_block_px(&proj.technologies.join(", "), width, style, metrics);
                        }
                        MeasuredEntry {
                            id: proj.id.clone(),
                            header_px: h,
                            bullet_px: Vec::new(),
                        }
                    })
                    .collect(),
            },
            Section::Achievements => MeasuredBlock {
                section,
                column,
                heading_px: style.heading_block_px,
                body_px: 0.0,
                entries: data
                    .achievements
                    .iter()
                    .map(|ach| MeasuredEntry {
                        id: ach.id.clone(),
                        header_px: header_px(&ach.title, width, style, metrics)
                            + text_block_px(&ach.description, width, style, metrics),
                        bullet_px: Vec::new(),
                    })
                    .collect(),
            },
            Section::Education => MeasuredBlock {
                section,
                column,
                heading_px: style.heading_block_px,
                body_px: 0.0,
                entries: data
                    .education
                    .iter()
                    .map(|edu| {
                        let range = if edu.is_completed {
                            locale::format_date_range(&edu.start_date, &edu.end_date, false, labels)
                        } else {
                            labels.in_progress.to_string()
                        };
                        let meta = format!("{} · {}", edu.institution, range);
                        let mut h = header_px(&meta, width, style, metrics);
                        if edu.gpa.is_some() {
                            h += style.line_height_px;
                        }
                        MeasuredEntry {
                            id: edu.id.clone(),
                            header_px: h,
                            bullet_px: Vec::new(),
                        }
                    })
                    .collect(),
            },
            Section::Certifications => MeasuredBlock {
                section,
                column,
                heading_px: style.heading_block_px,
                body_px: 0.0,
                entries: data
                    .certifications
                    .iter()
                    .map(|cert| {
                        let line = format!("{} — {} ({})", cert.name, cert.issuer, cert.date);
                        MeasuredEntry {
                            id: cert.id.clone(),
                            header_px: text_block_px(&line, width, style, metrics)
                                .max(style.line_height_px),
                            bullet_px: Vec::new(),
                        }
                    })
                    .collect(),
            },
            Section::Languages => MeasuredBlock {
                section,
                column,
                heading_px: style.heading_block_px,
                body_px: 0.0,
                entries: data
                    .languages
                    .iter()
                    .map(|lang| {
                        let line = format!("{} {}", lang.name, labels.level(lang.level));
                        MeasuredEntry {
                            id: lang.id.clone(),
                            header_px: text_block_px(&line, width, style, metrics)
                                .max(style.line_height_px),
                            bullet_px: Vec::new(),
                        }
                    })
                    .collect(),
            },
        };
        blocks.push(block);
    }
    blocks
}

/// Height of a wrapped run of body text. Empty text is zero.
fn text_block_px(
    text: &str,
    width: f32,
    style: &TemplateStyle,
    metrics: &FontMetricTable,
) -> f32 {
    metrics.wrapped_line_count(text, width, style.body_size_px) as f32 * style.line_height_px
}

/// Entry header height: the fixed title block plus any extra lines the meta
/// text wraps into at this column width.
fn header_px(meta: &str, width: f32, style: &TemplateStyle, metrics: &FontMetricTable) -> f32 {
    let meta_lines = metrics.wrapped_line_count(meta, width, style.body_size_px);
    style.entry_header_px + meta_lines.saturating_sub(1) as f32 * style.line_height_px
}

/// Rows needed to lay the skill chips out left to right in a column.
fn chip_rows(
    names: &[&str],
    width: f32,
    style: &TemplateStyle,
    metrics: &FontMetricTable,
) -> u32 {
    if names.is_empty() || width <= 0.0 {
        return 0;
    }
    let mut rows = 1u32;
    let mut used = 0.0_f32;
    for name in names {
        let chip = metrics.text_width_px(name, style.body_size_px) + 2.0 * style.chip_pad_px;
        let needed = if used == 0.0 { chip } else { chip + CHIP_GAP_PX };
        if used > 0.0 && used + needed > width {
            rows += 1;
            used = chip;
        } else {
            used += needed;
        }
    }
    rows
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::resume::{Experience, LanguageLevel, LanguageSkill, Project};
    use crate::templates::ivory::Ivory;
    use crate::templates::sapphire::Sapphire;
    use crate::templates::ResumeTemplate;

    fn base_data() -> ResumeData {
        ResumeData {
            first_name: "Ada".into(),
            last_name: "Lovelace".into(),
            profession: "Engineer".into(),
            email: "ada@example.com".into(),
            summary: "Engineer focused on compilers and analytical machinery.".into(),
            skills_raw: vec!["Rust".into(), "Compilers".into()],
            experience: vec![Experience {
                id: "exp-1".into(),
                title: "Engineer".into(),
                company: "Acme".into(),
                start_date: "2020-01".into(),
                is_current: true,
                achievements: vec!["Shipped the thing".into(), "Kept it running".into()],
                ..Default::default()
            }],
            ..Default::default()
        }
    }

    #[test]
    fn test_empty_sections_are_not_measured() {
        let data = base_data(); // no projects, certifications, languages
        let blocks = measure_resume(&data, Ivory.style(), "en");
        assert!(blocks.iter().all(|b| b.section != Section::Projects));
        assert!(blocks.iter().all(|b| b.section != Section::Languages));
    }

    #[test]
    fn test_blocks_follow_document_order() {
        let mut data = base_data();
        data.projects = vec![Project {
            id: "p1".into(),
            name: "Engine".into(),
            description: "A difference engine.".into(),
            ..Default::default()
        }];
        let blocks = measure_resume(&data, Ivory.style(), "en");
        let order: Vec<Section> = blocks.iter().map(|b| b.section).collect();
        let expected: Vec<Section> = Section::ORDER
            .iter()
            .copied()
            .filter(|s| !data.section_is_empty(*s))
            .collect();
        assert_eq!(order, expected);
    }

    #[test]
    fn test_experience_bullets_measured_individually() {
        let data = base_data();
        let blocks = measure_resume(&data, Ivory.style(), "en");
        let exp = blocks
            .iter()
            .find(|b| b.section == Section::Experience)
            .expect("experience measured");
        assert_eq!(exp.entries.len(), 1);
        assert_eq!(exp.entries[0].bullet_px.len(), 2);
        assert!(exp.entries[0].bullet_px.iter().all(|&h| h > 0.0));
        assert!(exp.entries[0].header_px > 0.0);
    }

    #[test]
    fn test_longer_bullet_measures_taller() {
        let mut data = base_data();
        data.experience[0].achievements = vec![
            "Short.".into(),
            "Rebuilt the ingestion pipeline end to end, migrating four legacy services \
             and cutting median processing latency across every production region by a \
             factor of three without a single customer-visible incident."
                .into(),
        ];
        let blocks = measure_resume(&data, Ivory.style(), "en");
        let entry = &blocks
            .iter()
            .find(|b| b.section == Section::Experience)
            .unwrap()
            .entries[0];
        assert!(entry.bullet_px[1] > entry.bullet_px[0]);
    }

    #[test]
    fn test_sidebar_sections_tagged_with_sidebar_column() {
        let mut data = base_data();
        data.languages = vec![LanguageSkill {
            id: "l1".into(),
            name: "English".into(),
            level: LanguageLevel::Native,
            ..Default::default()
        }];
        let blocks = measure_resume(&data, Sapphire.style(), "en");
        let skills = blocks.iter().find(|b| b.section == Section::Skills).unwrap();
        assert_eq!(skills.column, Column::Sidebar);
        let exp = blocks
            .iter()
            .find(|b| b.section == Section::Experience)
            .unwrap();
        assert_eq!(exp.column, Column::Main);
        let header = blocks.iter().find(|b| b.section == Section::Header).unwrap();
        assert_eq!(header.column, Column::FullWidth);
    }

    #[test]
    fn test_language_changes_measured_heights_possible() {
        // A meta line near the wrap boundary can gain a line in Spanish, where
        // the date-range label is longer. At minimum the measurement must be
        // recomputed per language without error.
        let data = base_data();
        let en = measure_resume(&data, Ivory.style(), "en");
        let es = measure_resume(&data, Ivory.style(), "es");
        assert_eq!(en.len(), es.len());
    }

    #[test]
    fn test_chip_rows_grow_with_skill_count() {
        let style = Ivory.style();
        let metrics = get_metrics(style.font);
        let few = vec!["Rust", "Go"];
        let many: Vec<&str> = std::iter::repeat("Kubernetes").take(40).collect();
        let few_rows = chip_rows(&few, 300.0, style, metrics);
        let many_rows = chip_rows(&many, 300.0, style, metrics);
        assert_eq!(few_rows, 1);
        assert!(many_rows > few_rows);
    }

    #[test]
    fn test_total_px_sums_parts() {
        let entry = MeasuredEntry {
            id: "e".into(),
            header_px: 30.0,
            bullet_px: vec![18.0, 18.0],
        };
        assert!((entry.total_px() - 66.0).abs() < 1e-5);
        let block = MeasuredBlock {
            section: Section::Experience,
            column: Column::Main,
            heading_px: 28.0,
            body_px: 0.0,
            entries: vec![entry],
        };
        assert!((block.total_px() - 94.0).abs() < 1e-5);
    }
}
