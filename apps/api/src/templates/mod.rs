//! The template contract.
//!
//! A template is a pure visual skin: given a `ResumeData` snapshot and a
//! locale tag it renders one fixed-size A4 page of self-contained HTML.
//! Identical inputs produce identical output; templates hold no state.
//!
//! Every template must also publish a static `TemplateStyle` — the geometry
//! and typography descriptor the pagination engine measures against. The
//! descriptor is a constant, never derived from rendered output, so the
//! measure step cannot depend on its own result.
//!
//! Contract requirements on the rendered markup:
//! - every section block carries `data-section="<key>"`
//! - every entry carries `data-entry-id="<id>"`
//! - empty sections are omitted entirely (no empty wrappers)
//! - all user text is HTML-escaped
//! - fixed strings come from the locale tables, falling back to English

pub mod circuit;
pub mod ivory;
pub mod markup;
pub mod registry;
pub mod sapphire;

pub use registry::TemplateRegistry;

use serde::Serialize;

use crate::errors::AppError;
use crate::layout::font_metrics::FontFamily;
use crate::layout::{A4_HEIGHT_PX, A4_WIDTH_PX};
use crate::models::resume::{ResumeData, Section};

// ────────────────────────────────────────────────────────────────────────────
// Metadata and geometry
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum TemplateLayout {
    SingleColumn,
    TwoColumn,
}

/// Catalog metadata for one template skin.
#[derive(Debug, Clone, Serialize)]
pub struct TemplateMeta {
    pub id: &'static str,
    pub name: &'static str,
    pub layout: TemplateLayout,
    pub description: &'static str,
}

/// Column a section is rendered in. `FullWidth` spans both columns of a
/// two-column template (only the header does this).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Column {
    FullWidth,
    Main,
    Sidebar,
}

/// Static geometry/typography descriptor for one template.
///
/// All heights are px at 96 DPI. The pagination engine combines these
/// constants with the font metric tables to predict rendered block heights
/// without touching the template's markup.
#[derive(Debug, Clone)]
pub struct TemplateStyle {
    pub font: FontFamily,
    pub body_size_px: f32,
    /// Height of one wrapped body-text line.
    pub line_height_px: f32,
    /// Section heading incl. rule and bottom spacing.
    pub heading_block_px: f32,
    /// Entry title + meta line(s) for experience/education/projects.
    pub entry_header_px: f32,
    /// Vertical gap between consecutive entries in a section.
    pub entry_gap_px: f32,
    /// Vertical gap after a completed section.
    pub section_gap_px: f32,
    /// Name/profession/contact banner height.
    pub header_block_px: f32,
    pub margin_top_px: f32,
    pub margin_bottom_px: f32,
    pub margin_left_px: f32,
    pub margin_right_px: f32,
    /// 0 for single-column templates.
    pub sidebar_width_px: f32,
    pub column_gap_px: f32,
    /// Height of one row of skill chips.
    pub chip_row_px: f32,
    /// Horizontal padding added to a chip around its label.
    pub chip_pad_px: f32,
    /// Sections this template renders in the sidebar, in document order.
    pub sidebar_sections: &'static [Section],
}

impl TemplateStyle {
    /// Vertical space available for content on one page.
    pub fn content_height_px(&self) -> f32 {
        A4_HEIGHT_PX - self.margin_top_px - self.margin_bottom_px
    }

    /// Horizontal space inside the page margins.
    pub fn content_width_px(&self) -> f32 {
        A4_WIDTH_PX - self.margin_left_px - self.margin_right_px
    }

    /// Width of the main text column.
    pub fn main_width_px(&self) -> f32 {
        if self.sidebar_width_px > 0.0 {
            self.content_width_px() - self.sidebar_width_px - self.column_gap_px
        } else {
            self.content_width_px()
        }
    }

    /// Column arrangement implied by the geometry.
    pub fn layout(&self) -> TemplateLayout {
        if self.sidebar_width_px > 0.0 {
            TemplateLayout::TwoColumn
        } else {
            TemplateLayout::SingleColumn
        }
    }

    /// Which column this template places a section in.
    pub fn column(&self, section: Section) -> Column {
        if section == Section::Header {
            Column::FullWidth
        } else if self.sidebar_sections.contains(&section) {
            Column::Sidebar
        } else {
            Column::Main
        }
    }

    /// Text width available to a section, by its column.
    pub fn section_width_px(&self, section: Section) -> f32 {
        match self.column(section) {
            Column::FullWidth => self.content_width_px(),
            Column::Main => self.main_width_px(),
            Column::Sidebar => self.sidebar_width_px,
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// The contract
// ────────────────────────────────────────────────────────────────────────────

/// A visual resume template.
///
/// `render` is a pure function of `(data, language)`. The renderer host calls
/// it once per page with page-filtered data; a full-document preview may also
/// call it with unfiltered data.
pub trait ResumeTemplate: Send + Sync {
    fn meta(&self) -> &'static TemplateMeta;
    fn style(&self) -> &'static TemplateStyle;
    fn render(&self, data: &ResumeData, language: &str) -> Result<String, AppError>;
}

// ────────────────────────────────────────────────────────────────────────────
// Tests — cross-template contract checks
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::resume::{Experience, LanguageLevel, LanguageSkill};

    fn all_templates() -> Vec<Box<dyn ResumeTemplate>> {
        vec![
            Box::new(ivory::Ivory),
            Box::new(sapphire::Sapphire),
            Box::new(circuit::Circuit),
        ]
    }

    fn sample_data() -> ResumeData {
        ResumeData {
            first_name: "Ada".into(),
            last_name: "Lovelace".into(),
            profession: "Software Engineer".into(),
            email: "ada@example.com".into(),
            phone: "+1 555 0100".into(),
            country: "UK".into(),
            summary: "Engineer with a decade of analytical engine experience.".into(),
            language: "en".into(),
            skills_raw: vec!["Rust".into(), "Mathematics".into()],
            experience: vec![Experience {
                id: "exp-1".into(),
                title: "Analyst".into(),
                company: "Babbage & Co".into(),
                start_date: "1840-01".into(),
                is_current: true,
                achievements: vec!["Wrote the first program".into()],
                ..Default::default()
            }],
            languages: vec![LanguageSkill {
                id: "lang-1".into(),
                name: "English".into(),
                level: LanguageLevel::Native,
                ..Default::default()
            }],
            ..Default::default()
        }
    }

    #[test]
    fn test_all_templates_emit_section_and_entry_markers() {
        let data = sample_data();
        for tpl in all_templates() {
            let html = tpl.render(&data, "en").expect("renders");
            assert!(
                html.contains(r#"data-section="experience""#),
                "{} missing experience marker",
                tpl.meta().id
            );
            assert!(
                html.contains(r#"data-entry-id="exp-1""#),
                "{} missing entry marker",
                tpl.meta().id
            );
        }
    }

    #[test]
    fn test_all_templates_omit_empty_sections() {
        let data = sample_data(); // no projects
        for tpl in all_templates() {
            let html = tpl.render(&data, "en").expect("renders");
            assert!(
                !html.contains(r#"data-section="projects""#),
                "{} rendered an empty projects section",
                tpl.meta().id
            );
            assert!(
                !html.contains(r#"data-section="certifications""#),
                "{} rendered an empty certifications section",
                tpl.meta().id
            );
        }
    }

    #[test]
    fn test_all_templates_escape_user_text() {
        let mut data = sample_data();
        data.skills_raw = vec!["<script>alert(1)</script>".into()];
        for tpl in all_templates() {
            let html = tpl.render(&data, "en").expect("renders");
            assert!(
                !html.contains("<script>alert(1)</script>"),
                "{} emitted unescaped markup",
                tpl.meta().id
            );
            assert!(
                html.contains("&lt;script&gt;alert(1)&lt;/script&gt;"),
                "{} did not escape the skill name",
                tpl.meta().id
            );
        }
    }

    #[test]
    fn test_all_templates_are_pure_functions() {
        let data = sample_data();
        for tpl in all_templates() {
            let a = tpl.render(&data, "en").expect("renders");
            let b = tpl.render(&data, "en").expect("renders");
            assert_eq!(a, b, "{} is not deterministic", tpl.meta().id);
        }
    }

    #[test]
    fn test_all_templates_localize_present() {
        let data = sample_data(); // exp-1 is_current
        for tpl in all_templates() {
            let en = tpl.render(&data, "en").expect("renders");
            let es = tpl.render(&data, "es").expect("renders");
            assert!(en.contains("Present"), "{} missing Present", tpl.meta().id);
            assert!(es.contains("Presente"), "{} missing Presente", tpl.meta().id);
        }
    }

    #[test]
    fn test_styles_have_positive_budgets() {
        for tpl in all_templates() {
            let style = tpl.style();
            assert!(style.content_height_px() > 0.0);
            assert!(style.content_width_px() > 0.0);
            assert!(style.main_width_px() > 0.0);
            if style.sidebar_width_px > 0.0 {
                assert!(style.main_width_px() < style.content_width_px());
            }
        }
    }

    #[test]
    fn test_header_is_full_width_everywhere() {
        for tpl in all_templates() {
            assert_eq!(tpl.style().column(Section::Header), Column::FullWidth);
        }
    }
}
