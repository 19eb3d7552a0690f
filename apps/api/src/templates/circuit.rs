//! Circuit — compact single-column skin for technical resumes.
//!
//! Tight spacing, monospace accents, proficiency dots for languages.

use crate::errors::AppError;
use crate::layout::font_metrics::FontFamily;
use crate::locale;
use crate::models::resume::ResumeData;

use super::markup;
use super::{ResumeTemplate, TemplateLayout, TemplateMeta, TemplateStyle};

pub static META: TemplateMeta = TemplateMeta {
    id: "circuit",
    name: "Circuit",
    layout: TemplateLayout::SingleColumn,
    description: "Dense technical layout with skill chips and proficiency dots.",
};

pub static STYLE: TemplateStyle = TemplateStyle {
    font: FontFamily::Inter,
    body_size_px: 12.0,
    line_height_px: 17.0,
    heading_block_px: 28.0,
    entry_header_px: 36.0,
    entry_gap_px: 8.0,
    section_gap_px: 14.0,
    header_block_px: 84.0,
    margin_top_px: 36.0,
    margin_bottom_px: 36.0,
    margin_left_px: 48.0,
    margin_right_px: 48.0,
    sidebar_width_px: 0.0,
    column_gap_px: 0.0,
    chip_row_px: 23.0,
    chip_pad_px: 8.0,
    sidebar_sections: &[],
};

const CSS: &str = r#"
.tpl-circuit{font-family:Inter,'Segoe UI',sans-serif;color:#16181d;padding:36px 48px;}
.tpl-circuit .name{font-size:26px;margin:0;font-weight:800;}
.tpl-circuit .role{font-size:13.5px;margin:2px 0 4px;color:#0b7261;font-weight:600;}
.tpl-circuit .contact{font-size:11.5px;margin:0;color:#5a616e;font-family:ui-monospace,monospace;}
.tpl-circuit h2{font-size:12px;text-transform:uppercase;letter-spacing:1.8px;color:#0b7261;margin:12px 0 5px;border-left:3px solid #0b7261;padding-left:8px;}
.tpl-circuit h3{font-size:12.5px;margin:8px 0 0;font-weight:700;}
.tpl-circuit p{font-size:12px;line-height:17px;margin:1px 0;}
.tpl-circuit .meta{color:#5a616e;}
.tpl-circuit .bullets{margin:3px 0 0;padding-left:16px;}
.tpl-circuit .bullets li{font-size:12px;line-height:17px;}
.tpl-circuit .chips .chip{display:inline-block;background:#e7f4f1;color:#0b7261;border-radius:3px;padding:2px 8px;margin:0 5px 5px 0;font-size:11px;font-family:ui-monospace,monospace;}
.tpl-circuit .dots{margin-left:8px;}
.tpl-circuit .dot{display:inline-block;width:7px;height:7px;border-radius:50%;background:#d2d8de;margin-right:3px;}
.tpl-circuit .dot.on{background:#0b7261;}
"#;

pub struct Circuit;

impl ResumeTemplate for Circuit {
    fn meta(&self) -> &'static TemplateMeta {
        &META
    }

    fn style(&self) -> &'static TemplateStyle {
        &STYLE
    }

    fn render(&self, data: &ResumeData, language: &str) -> Result<String, AppError> {
        let labels = locale::labels(language);
        let mut body = String::new();
        body.push_str(&markup::header_banner(data));
        body.push_str(&markup::summary_section(data, labels));
        body.push_str(&markup::skills_section(data, labels));
        body.push_str(&markup::experience_section(data, labels));
        body.push_str(&markup::projects_section(data, labels));
        body.push_str(&markup::achievements_section(data, labels));
        body.push_str(&markup::education_section(data, labels));
        body.push_str(&markup::certifications_section(data, labels));
        body.push_str(&markup::languages_section(data, labels, true));
        Ok(markup::page_shell(META.id, CSS, &body))
    }
}
