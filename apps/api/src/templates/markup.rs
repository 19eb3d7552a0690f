//! Shared HTML building blocks for template skins.
//!
//! No user-supplied string reaches the output without going through
//! [`escape`]. Section and entry wrappers carry the `data-section` /
//! `data-entry-id` markers the pagination and capture layers key on.

use crate::layout::{A4_HEIGHT_PX, A4_WIDTH_PX};
use crate::locale::{self, Labels};
use crate::models::resume::{ResumeData, Section};

/// Escapes text for embedding in HTML element bodies and double-quoted
/// attribute values.
pub fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Opens a section wrapper with its `data-section` marker.
pub fn section_open(section: Section) -> String {
    format!(
        r#"<section class="sec sec-{key}" data-section="{key}">"#,
        key = section.key()
    )
}

pub const SECTION_CLOSE: &str = "</section>";

/// Opens an entry wrapper with its `data-entry-id` marker.
pub fn entry_open(id: &str, class: &str) -> String {
    format!(
        r#"<div class="{class}" data-entry-id="{id}">"#,
        class = class,
        id = escape(id)
    )
}

pub const ENTRY_CLOSE: &str = "</div>";

/// Wraps rendered body markup in the fixed-size A4 page container with the
/// template's scoped stylesheet. The result is self-contained: one page div,
/// one style block, no external references.
pub fn page_shell(template_id: &str, css: &str, body: &str) -> String {
    format!(
        r#"<div class="page tpl-{id}" data-template="{id}" style="width:{w}px;height:{h}px;box-sizing:border-box;overflow:hidden;background:#fff;"><style>{css}</style>{body}</div>"#,
        id = template_id,
        w = A4_WIDTH_PX as u32,
        h = A4_HEIGHT_PX as u32,
        css = css,
        body = body,
    )
}

/// A bullet list where every item is escaped.
pub fn bullet_list(bullets: &[&str]) -> String {
    if bullets.is_empty() {
        return String::new();
    }
    let items: String = bullets
        .iter()
        .map(|b| format!("<li>{}</li>", escape(b)))
        .collect();
    format!("<ul class=\"bullets\">{items}</ul>")
}

/// Joins the non-empty parts with a separator, escaping each part.
pub fn join_meta(parts: &[&str], sep: &str) -> String {
    parts
        .iter()
        .filter(|p| !p.trim().is_empty())
        .map(|p| escape(p))
        .collect::<Vec<_>>()
        .join(sep)
}

// ────────────────────────────────────────────────────────────────────────────
// Section fragments
// ────────────────────────────────────────────────────────────────────────────
//
// Shared by the skins; each returns an empty string for an empty section so
// a skin can concatenate fragments unconditionally. Visual identity lives in
// the skins' stylesheets, not here.

/// Name banner with profession and contact line. Page-filtered data blanks
/// these fields past page one, which makes the whole banner disappear.
pub fn header_banner(data: &ResumeData) -> String {
    if data.section_is_empty(Section::Header) {
        return String::new();
    }
    let contact = join_meta(
        &[&data.email, &data.phone, &data.country, &data.linkedin],
        " · ",
    );
    let mut out = section_open(Section::Header);
    out.push_str(&format!(
        r#"<h1 class="name">{}</h1><p class="role">{}</p>"#,
        escape(&data.full_name()),
        escape(&data.profession)
    ));
    if !contact.is_empty() {
        out.push_str(&format!(r#"<p class="contact">{contact}</p>"#,));
    }
    out.push_str(SECTION_CLOSE);
    out
}

pub fn summary_section(data: &ResumeData, labels: &Labels) -> String {
    if data.section_is_empty(Section::Profile) {
        return String::new();
    }
    format!(
        "{}<h2>{}</h2><p class=\"summary\">{}</p>{}",
        section_open(Section::Profile),
        labels.section_heading(Section::Profile),
        escape(&data.summary),
        SECTION_CLOSE
    )
}

/// Skill chips, deduplicated across the skills and tools lists.
pub fn skills_section(data: &ResumeData, labels: &Labels) -> String {
    if data.section_is_empty(Section::Skills) {
        return String::new();
    }
    let chips: String = data
        .merged_skills()
        .iter()
        .map(|s| format!(r#"<span class="chip">{}</span>"#, escape(s)))
        .collect();
    format!(
        "{}<h2>{}</h2><div class=\"chips\">{}</div>{}",
        section_open(Section::Skills),
        labels.section_heading(Section::Skills),
        chips,
        SECTION_CLOSE
    )
}

pub fn experience_section(data: &ResumeData, labels: &Labels) -> String {
    if data.section_is_empty(Section::Experience) {
        return String::new();
    }
    let mut out = section_open(Section::Experience);
    out.push_str(&format!(
        "<h2>{}</h2>",
        labels.section_heading(Section::Experience)
    ));
    for exp in &data.experience {
        let range = locale::format_date_range(&exp.start_date, &exp.end_date, exp.is_current, labels);
        out.push_str(&entry_open(&exp.id, "entry"));
        out.push_str(&format!(
            r#"<h3>{}</h3><p class="meta">{}</p>"#,
            escape(&exp.title),
            join_meta(&[&exp.company, &exp.location, &range], " · ")
        ));
        out.push_str(&bullet_list(&exp.bullets()));
        out.push_str(ENTRY_CLOSE);
    }
    out.push_str(SECTION_CLOSE);
    out
}

pub fn projects_section(data: &ResumeData, labels: &Labels) -> String {
    if data.section_is_empty(Section::Projects) {
        return String::new();
    }
    let mut out = section_open(Section::Projects);
    out.push_str(&format!(
        "<h2>{}</h2>",
        labels.section_heading(Section::Projects)
    ));
    for proj in &data.projects {
        let range =
            locale::format_date_range(&proj.start_date, &proj.end_date, proj.is_ongoing, labels);
        out.push_str(&entry_open(&proj.id, "entry"));
        out.push_str(&format!(
            r#"<h3>{}</h3><p class="meta">{}</p>"#,
            escape(&proj.name),
            escape(&range)
        ));
        if !proj.description.is_empty() {
            out.push_str(&format!(r#"<p class="desc">{}</p>"#, escape(&proj.description)));
        }
        if !proj.technologies.is_empty() {
            out.push_str(&format!(
                r#"<p class="tech">{}: {}</p>"#,
                labels.technologies,
                escape(&proj.technologies.join(", "))
            ));
        }
        out.push_str(ENTRY_CLOSE);
    }
    out.push_str(SECTION_CLOSE);
    out
}

pub fn achievements_section(data: &ResumeData, labels: &Labels) -> String {
    if data.section_is_empty(Section::Achievements) {
        return String::new();
    }
    let mut out = section_open(Section::Achievements);
    out.push_str(&format!(
        "<h2>{}</h2>",
        labels.section_heading(Section::Achievements)
    ));
    for ach in &data.achievements {
        out.push_str(&entry_open(&ach.id, "entry"));
        out.push_str(&format!(
            r#"<h3>{}{}</h3>"#,
            escape(&ach.title),
            if ach.year.is_empty() {
                String::new()
            } else {
                format!(r#" <span class="year">{}</span>"#, escape(&ach.year))
            }
        ));
        if !ach.description.is_empty() {
            out.push_str(&format!(r#"<p class="desc">{}</p>"#, escape(&ach.description)));
        }
        out.push_str(ENTRY_CLOSE);
    }
    out.push_str(SECTION_CLOSE);
    out
}

pub fn education_section(data: &ResumeData, labels: &Labels) -> String {
    if data.section_is_empty(Section::Education) {
        return String::new();
    }
    let mut out = section_open(Section::Education);
    out.push_str(&format!(
        "<h2>{}</h2>",
        labels.section_heading(Section::Education)
    ));
    for edu in &data.education {
        let range = if edu.is_completed {
            locale::format_date_range(&edu.start_date, &edu.end_date, false, labels)
        } else {
            labels.in_progress.to_string()
        };
        out.push_str(&entry_open(&edu.id, "entry"));
        out.push_str(&format!(
            r#"<h3>{}</h3><p class="meta">{}</p>"#,
            join_meta(&[&edu.degree, &edu.field], ", "),
            join_meta(&[&edu.institution, &range], " · ")
        ));
        if let Some(gpa) = &edu.gpa {
            out.push_str(&format!(r#"<p class="meta">GPA: {}</p>"#, escape(gpa)));
        }
        out.push_str(ENTRY_CLOSE);
    }
    out.push_str(SECTION_CLOSE);
    out
}

pub fn certifications_section(data: &ResumeData, labels: &Labels) -> String {
    if data.section_is_empty(Section::Certifications) {
        return String::new();
    }
    let mut out = section_open(Section::Certifications);
    out.push_str(&format!(
        "<h2>{}</h2>",
        labels.section_heading(Section::Certifications)
    ));
    for cert in &data.certifications {
        let date = locale::format_date(&cert.date, labels);
        out.push_str(&entry_open(&cert.id, "line"));
        out.push_str(&format!(
            r#"<p>{}</p>"#,
            join_meta(&[&cert.name, &cert.issuer, &date], " — ")
        ));
        out.push_str(ENTRY_CLOSE);
    }
    out.push_str(SECTION_CLOSE);
    out
}

/// Spoken languages as name plus proficiency label. `dots` additionally
/// renders the 4-step ordinal as a filled-dot indicator.
pub fn languages_section(data: &ResumeData, labels: &Labels, dots: bool) -> String {
    if data.section_is_empty(Section::Languages) {
        return String::new();
    }
    let mut out = section_open(Section::Languages);
    out.push_str(&format!(
        "<h2>{}</h2>",
        labels.section_heading(Section::Languages)
    ));
    for lang in &data.languages {
        out.push_str(&entry_open(&lang.id, "line"));
        out.push_str(&format!(
            r#"<span class="lang">{}</span> <span class="level">{}</span>"#,
            escape(&lang.name),
            labels.level(lang.level)
        ));
        if dots {
            let rank = lang.level.rank();
            let marks: String = (1..=4)
                .map(|i| {
                    if i <= rank {
                        r#"<i class="dot on"></i>"#
                    } else {
                        r#"<i class="dot"></i>"#
                    }
                })
                .collect();
            out.push_str(&format!(r#"<span class="dots">{marks}</span>"#));
        }
        out.push_str(ENTRY_CLOSE);
    }
    out.push_str(SECTION_CLOSE);
    out
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
