//! Ivory — classic single-column serif skin.

use crate::errors::AppError;
use crate::layout::font_metrics::FontFamily;
use crate::locale;
use crate::models::resume::ResumeData;

use super::markup;
use super::{ResumeTemplate, TemplateLayout, TemplateMeta, TemplateStyle};

pub static META: TemplateMeta = TemplateMeta {
    id: "ivory",
    name: "Ivory",
    layout: TemplateLayout::SingleColumn,
    description: "Classic serif layout with understated rules between sections.",
};

pub static STYLE: TemplateStyle = TemplateStyle {
    font: FontFamily::EbGaramond,
    body_size_px: 13.0,
    line_height_px: 19.0,
    heading_block_px: 34.0,
    entry_header_px: 40.0,
    entry_gap_px: 10.0,
    section_gap_px: 18.0,
    header_block_px: 96.0,
    margin_top_px: 48.0,
    margin_bottom_px: 48.0,
    margin_left_px: 56.0,
    margin_right_px: 56.0,
    sidebar_width_px: 0.0,
    column_gap_px: 0.0,
    chip_row_px: 26.0,
    chip_pad_px: 9.0,
    sidebar_sections: &[],
};

const CSS: &str = r#"
.tpl-ivory{font-family:'EB Garamond',Georgia,serif;color:#1c1b18;padding:48px 56px;}
.tpl-ivory .name{font-size:30px;margin:0;letter-spacing:.5px;}
.tpl-ivory .role{font-size:15px;margin:2px 0 6px;color:#6b675e;font-style:italic;}
.tpl-ivory .contact{font-size:12px;margin:0;color:#6b675e;}
.tpl-ivory h2{font-size:14px;text-transform:uppercase;letter-spacing:2px;border-bottom:1px solid #c9c4b8;padding-bottom:4px;margin:18px 0 8px;}
.tpl-ivory h3{font-size:13.5px;margin:10px 0 0;}
.tpl-ivory p{font-size:13px;line-height:19px;margin:2px 0;}
.tpl-ivory .meta{color:#6b675e;}
.tpl-ivory .bullets{margin:4px 0 0;padding-left:18px;}
.tpl-ivory .bullets li{font-size:13px;line-height:19px;}
.tpl-ivory .chips .chip{display:inline-block;border:1px solid #c9c4b8;border-radius:3px;padding:2px 9px;margin:0 6px 6px 0;font-size:12px;}
"#;

pub struct Ivory;

impl ResumeTemplate for Ivory {
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
        body.push_str(&markup::languages_section(data, labels, false));
        Ok(markup::page_shell(META.id, CSS, &body))
    }
}
