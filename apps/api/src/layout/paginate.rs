//! Pagination engine.
//!
//! Packs measured section blocks into A4 pages against a per-page height
//! budget. Sections flow in document order; experience entries may split
//! across pages as header-plus-bullet chunks, everything else is placed
//! atomically. Two-column templates run an independent packer per column,
//! with the full-width header charged to both on page one.
//!
//! Rules enforced here:
//!   - a section heading is never the last thing on a page
//!   - a split chunk carries at least one bullet, except for the pathological
//!     entry whose header alone exceeds a page, which takes a page to itself
//!   - page numbers are monotonically non-decreasing within a column

use crate::errors::AppError;
use crate::models::resume::{ResumeData, Section};
use crate::templates::{Column, TemplateLayout, TemplateStyle};

use super::measure::{measure_resume, MeasuredBlock, MeasuredEntry};
use super::SAFETY_MARGIN_PX;

// ────────────────────────────────────────────────────────────────────────────
// Plan shapes
// ────────────────────────────────────────────────────────────────────────────

/// One placed piece of an entry. Atomic entries produce exactly one chunk
/// with an empty bullet range; split experience entries produce one chunk per
/// page they touch, `chunk_index` counting from zero.
#[derive(Debug, Clone, PartialEq)]
pub struct ChunkPlacement {
    pub section: Section,
    pub entry_id: String,
    pub chunk_index: u32,
    pub page_number: u32,
    /// Bullet slice carried by this chunk, half-open. Empty for atomic
    /// entries and for a header-only pathological chunk.
    pub bullet_start: usize,
    pub bullet_end: usize,
}

/// Complete page assignment for one `(data, template, language)` triple.
#[derive(Debug, Clone, PartialEq)]
pub struct PaginationPlan {
    pub total_pages: u32,
    pub summary_page: Option<u32>,
    pub skills_page: Option<u32>,
    /// Page each section's heading lands on, document order.
    pub section_start_pages: Vec<(Section, u32)>,
    pub placements: Vec<ChunkPlacement>,
}

impl PaginationPlan {
    /// First page an entry appears on.
    pub fn entry_first_page(&self, entry_id: &str) -> Option<u32> {
        self.placements
            .iter()
            .filter(|p| p.entry_id == entry_id)
            .map(|p| p.page_number)
            .min()
    }

    /// Chunks of one entry that land on the given page.
    pub fn chunks_on_page<'a>(
        &'a self,
        entry_id: &'a str,
        page: u32,
    ) -> impl Iterator<Item = &'a ChunkPlacement> {
        self.placements
            .iter()
            .filter(move |p| p.entry_id == entry_id && p.page_number == page)
    }

    pub fn section_start_page(&self, section: Section) -> Option<u32> {
        self.section_start_pages
            .iter()
            .find(|(s, _)| *s == section)
            .map(|(_, page)| *page)
    }

    /// Returns a copy of the data with every `pageNumber` field set from this
    /// plan. Entries absent from the plan keep `None`.
    pub fn apply(&self, data: &ResumeData) -> ResumeData {
        let mut out = data.clone();
        out.clear_page_numbers();
        out.summary_page_number = self.summary_page;
        for exp in &mut out.experience {
            exp.page_number = self.entry_first_page(&exp.id);
        }
        for edu in &mut out.education {
            edu.page_number = self.entry_first_page(&edu.id);
        }
        for proj in &mut out.projects {
            proj.page_number = self.entry_first_page(&proj.id);
        }
        for cert in &mut out.certifications {
            cert.page_number = self.entry_first_page(&cert.id);
        }
        for lang in &mut out.languages {
            lang.page_number = self.entry_first_page(&lang.id);
        }
        for ach in &mut out.achievements {
            ach.page_number = self.entry_first_page(&ach.id);
        }
        out
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Column packer
// ────────────────────────────────────────────────────────────────────────────

/// Fills one column top to bottom, page by page. `first_budget` may be
/// smaller than `rest_budget` when a full-width header eats into page one.
struct ColumnPacker {
    rest_budget: f32,
    page: u32,
    remaining: f32,
    /// Nothing placed on the current page yet.
    fresh: bool,
}

impl ColumnPacker {
    fn new(first_budget: f32, rest_budget: f32) -> Self {
        Self {
            rest_budget,
            page: 1,
            remaining: first_budget,
            fresh: true,
        }
    }

    fn advance(&mut self) {
        self.page += 1;
        self.remaining = self.rest_budget;
        self.fresh = true;
    }

    fn fits(&self, h: f32) -> bool {
        h <= self.remaining
    }

    fn place(&mut self, h: f32) {
        self.remaining -= h;
        self.fresh = false;
    }

    /// Gap owed before the next block or entry. Nothing is owed at the top of
    /// a page.
    fn gap(&self, gap_px: f32) -> f32 {
        if self.fresh {
            0.0
        } else {
            gap_px
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Pagination
// ────────────────────────────────────────────────────────────────────────────

/// Measures the resume and packs it into pages for the given template
/// geometry. Deterministic: the same inputs always yield the same plan.
pub fn paginate(
    data: &ResumeData,
    style: &TemplateStyle,
    language: &str,
) -> Result<PaginationPlan, AppError> {
    let page_budget = style.content_height_px() - SAFETY_MARGIN_PX;
    if page_budget <= 0.0 {
        return Err(AppError::Measurement(format!(
            "page content height {:.1}px leaves no room below the safety margin",
            style.content_height_px()
        )));
    }

    let blocks = measure_resume(data, style, language);

    // The full-width header reduces page one for every column.
    let header_px = blocks
        .iter()
        .find(|b| b.section == Section::Header)
        .map(|b| b.body_px + style.section_gap_px)
        .unwrap_or(0.0);
    let first_budget = (page_budget - header_px).max(0.0);

    let mut main = ColumnPacker::new(first_budget, page_budget);
    let mut sidebar = match style.layout() {
        TemplateLayout::TwoColumn => Some(ColumnPacker::new(first_budget, page_budget)),
        TemplateLayout::SingleColumn => None,
    };

    let mut plan = PaginationPlan {
        total_pages: 1,
        summary_page: None,
        skills_page: None,
        section_start_pages: Vec::new(),
        placements: Vec::new(),
    };

    for block in &blocks {
        if block.section == Section::Header {
            plan.section_start_pages.push((Section::Header, 1));
            continue;
        }
        let packer = match block.column {
            Column::Sidebar => sidebar.as_mut().unwrap_or(&mut main),
            _ => &mut main,
        };
        pack_block(block, packer, style, &mut plan);
    }

    plan.total_pages = plan
        .total_pages
        .max(main.page)
        .max(sidebar.as_ref().map(|p| p.page).unwrap_or(1));
    Ok(plan)
}

fn pack_block(
    block: &MeasuredBlock,
    packer: &mut ColumnPacker,
    style: &TemplateStyle,
    plan: &mut PaginationPlan,
) {
    // Orphan rule: the heading only goes down together with the first piece
    // of content below it. When the pair cannot fit even a fresh page, the
    // first chunk is pinned to the heading's page anyway; an atomic entry
    // then overflows, a splittable one keeps its header here and spills
    // bullets onto the pages that follow.
    let first_piece = first_piece_px(block, style);
    let lead = packer.gap(style.section_gap_px) + block.heading_px + first_piece;
    if !packer.fits(lead) && !packer.fresh {
        packer.advance();
    }
    let pin_first = block.heading_px + first_piece > packer.rest_budget;
    packer.place(packer.gap(style.section_gap_px) + block.heading_px);
    plan.section_start_pages.push((block.section, packer.page));

    match block.section {
        Section::Profile => {
            packer.place(block.body_px);
            plan.summary_page = Some(packer.page);
        }
        Section::Skills => {
            packer.place(block.body_px);
            plan.skills_page = Some(packer.page);
        }
        _ => {
            for (i, entry) in block.entries.iter().enumerate() {
                let gap = if i == 0 { 0.0 } else { style.entry_gap_px };
                let pinned = i == 0 && pin_first;
                if entry.bullet_px.is_empty() {
                    pack_atomic(block.section, entry, gap, block.heading_px, pinned, packer, plan);
                } else {
                    pack_splittable(block.section, entry, gap, block.heading_px, pinned, packer, plan);
                }
            }
        }
    }
}

/// Height of the smallest thing that may sit directly under a heading.
/// Entry-less blocks (summary, skill chips) are atomic, so the whole body
/// must come along with the heading.
fn first_piece_px(block: &MeasuredBlock, _style: &TemplateStyle) -> f32 {
    match block.entries.first() {
        Some(entry) if !entry.bullet_px.is_empty() => {
            // A split entry needs its header and one bullet to justify the
            // heading; a pathological oversized header stands alone.
            entry.header_px + entry.bullet_px.first().copied().unwrap_or(0.0)
        }
        Some(entry) => entry.total_px(),
        None => block.body_px,
    }
}

fn pack_atomic(
    section: Section,
    entry: &MeasuredEntry,
    gap: f32,
    heading_px: f32,
    pinned: bool,
    packer: &mut ColumnPacker,
    plan: &mut PaginationPlan,
) {
    let need = packer.gap(gap) + entry.total_px();
    if pinned || packer.fits(need) || packer.fresh {
        // An entry taller than a whole page still goes down; it overflows
        // its own page rather than vanishing.
        packer.place(need);
    } else {
        // The filtered page re-renders the section heading above this entry,
        // so the new page is charged for it too.
        packer.advance();
        packer.place(heading_px + entry.total_px());
    }
    plan.placements.push(ChunkPlacement {
        section,
        entry_id: entry.id.clone(),
        chunk_index: 0,
        page_number: packer.page,
        bullet_start: 0,
        bullet_end: 0,
    });
}

fn pack_splittable(
    section: Section,
    entry: &MeasuredEntry,
    gap: f32,
    heading_px: f32,
    pinned: bool,
    packer: &mut ColumnPacker,
    plan: &mut PaginationPlan,
) {
    let bullets = &entry.bullet_px;

    // First chunk must carry the header and at least one bullet, unless the
    // header alone cannot fit a fresh page. Moving the chunk to a new page
    // re-renders the section heading above it, which is charged here.
    let min_first = packer.gap(gap) + entry.header_px + bullets[0];
    if !pinned && !packer.fits(min_first) && !packer.fresh {
        packer.advance();
        packer.place(heading_px + entry.header_px);
    } else {
        packer.place(packer.gap(gap) + entry.header_px);
    }

    let header_oversized = entry.header_px > packer.rest_budget;
    let mut chunk_index = 0u32;
    let mut cursor = 0usize;

    if !header_oversized {
        while cursor < bullets.len() && packer.fits(bullets[cursor]) {
            packer.place(bullets[cursor]);
            cursor += 1;
        }
    }
    plan.placements.push(ChunkPlacement {
        section,
        entry_id: entry.id.clone(),
        chunk_index,
        page_number: packer.page,
        bullet_start: 0,
        bullet_end: cursor,
    });
    if header_oversized {
        // The header consumed its page whole; bullets start on the next.
        packer.advance();
    }

    // Continuation chunks: at least one bullet each, even one taller than
    // the page. Every continuation page re-renders the section heading and
    // the entry header, so both are charged before its bullets.
    while cursor < bullets.len() {
        if !packer.fits(bullets[cursor]) && !packer.fresh {
            packer.advance();
        }
        if packer.fresh {
            packer.place(heading_px + entry.header_px);
        }
        chunk_index += 1;
        let start = cursor;
        packer.place(bullets[cursor]);
        cursor += 1;
        while cursor < bullets.len() && packer.fits(bullets[cursor]) {
            packer.place(bullets[cursor]);
            cursor += 1;
        }
        plan.placements.push(ChunkPlacement {
            section,
            entry_id: entry.id.clone(),
            chunk_index,
            page_number: packer.page,
            bullet_start: start,
            bullet_end: cursor,
        });
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
