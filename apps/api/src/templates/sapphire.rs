//! Sapphire — two-column skin with a tinted sidebar.
//!
//! Skills, languages and certifications live in the sidebar; the main column
//! carries the narrative sections. The header banner spans both columns, so
//! the paginator charges it against both.

use crate::errors::AppError;
use crate::layout::font_metrics::FontFamily;
use crate::locale;
use crate::models::resume::{ResumeData, Section};

use super::markup;
use super::{ResumeTemplate, TemplateLayout, TemplateMeta, TemplateStyle};

pub static META: TemplateMeta = TemplateMeta {
    id: "sapphire",
    name: "Sapphire",
    layout: TemplateLayout::TwoColumn,
    description: "Two-column layout with a deep blue sidebar for skills and credentials.",
};

pub static STYLE: TemplateStyle = TemplateStyle {
    font: FontFamily::Lato,
    body_size_px: 12.5,
    line_height_px: 18.0,
    heading_block_px: 30.0,
    entry_header_px: 38.0,
    entry_gap_px: 10.0,
    section_gap_px: 16.0,
    header_block_px: 88.0,
    margin_top_px: 40.0,
    margin_bottom_px: 40.0,
    margin_left_px: 44.0,
    margin_right_px: 44.0,
    sidebar_width_px: 200.0,
    column_gap_px: 28.0,
    chip_row_px: 24.0,
    chip_pad_px: 8.0,
    sidebar_sections: &[Section::Skills, Section::Certifications, Section::Languages],
};

const CSS: &str = r#"
.tpl-sapphire{font-family:Lato,'Helvetica Neue',sans-serif;color:#1f2430;padding:40px 44px;}
.tpl-sapphire .name{font-size:28px;margin:0;color:#14335c;}
.tpl-sapphire .role{font-size:14px;margin:2px 0 4px;color:#4a5568;}
.tpl-sapphire .contact{font-size:11.5px;margin:0;color:#4a5568;}
.tpl-sapphire .cols{display:flex;gap:28px;margin-top:16px;}
.tpl-sapphire .side{width:200px;flex:none;background:#eef2f9;border-radius:4px;padding:12px;box-sizing:border-box;}
.tpl-sapphire .mainc{flex:1;min-width:0;}
.tpl-sapphire h2{font-size:12.5px;text-transform:uppercase;letter-spacing:1.5px;color:#14335c;margin:14px 0 6px;}
.tpl-sapphire h3{font-size:13px;margin:10px 0 0;}
.tpl-sapphire p{font-size:12.5px;line-height:18px;margin:2px 0;}
.tpl-sapphire .meta{color:#4a5568;}
.tpl-sapphire .bullets{margin:4px 0 0;padding-left:16px;}
.tpl-sapphire .bullets li{font-size:12.5px;line-height:18px;}
.tpl-sapphire .chips .chip{display:inline-block;background:#14335c;color:#fff;border-radius:3px;padding:2px 8px;margin:0 5px 5px 0;font-size:11px;}
.tpl-sapphire .line .lang{font-weight:700;}
"#;

pub struct Sapphire;

impl ResumeTemplate for Sapphire {
    fn meta(&self) -> &'static TemplateMeta {
        &META
    }

    fn style(&self) -> &'static TemplateStyle {
        &STYLE
    }

    fn render(&self, data: &ResumeData, language: &str) -> Result<String, AppError> {
        let labels = locale::labels(language);

        let mut side = String::new();
        side.push_str(&markup::skills_section(data, labels));
        side.push_str(&markup::certifications_section(data, labels));
        side.push_str(&markup::languages_section(data, labels, false));

        let mut main = String::new();
        main.push_str(&markup::summary_section(data, labels));
        main.push_str(&markup::experience_section(data, labels));
        main.push_str(&markup::projects_section(data, labels));
        main.push_str(&markup::achievements_section(data, labels));
        main.push_str(&markup::education_section(data, labels));

        let mut body = markup::header_banner(data);
        body.push_str(&format!(
            r#"<div class="cols"><div class="side">{side}</div><div class="mainc">{main}</div></div>"#
        ));
        Ok(markup::page_shell(META.id, CSS, &body))
    }
}
