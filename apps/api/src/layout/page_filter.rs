//! Per-page data filter.
//!
//! Templates are pure over a `ResumeData`; multi-page output is produced by
//! rendering the same template once per page against a filtered subset of
//! the data. The filter keeps exactly the content the pagination plan placed
//! on the requested page: the identity header appears on page one only, the
//! summary and skill chips on their assigned pages, and split experience
//! entries carry only the bullet slice belonging to that page.

use crate::models::resume::ResumeData;

use super::paginate::PaginationPlan;

/// Projects the resume down to the content of one page. The union of all
/// pages reassembles the full document with nothing lost or duplicated.
pub fn filter_for_page(data: &ResumeData, plan: &PaginationPlan, page: u32) -> ResumeData {
    let mut out = data.clone();

    if page != 1 {
        out.first_name.clear();
        out.last_name.clear();
        out.profession.clear();
        out.country.clear();
        out.email.clear();
        out.phone.clear();
        out.linkedin.clear();
    }

    if plan.summary_page != Some(page) {
        out.summary.clear();
    }
    if plan.skills_page != Some(page) {
        out.skills_raw.clear();
        out.tools_raw.clear();
    }

    // Split entries keep only the bullet slice assigned to this page. The
    // measured bullet order is achievements followed by responsibilities.
    out.experience.retain_mut(|exp| {
        let mut keep: Vec<bool> = vec![false; exp.achievements.len() + exp.responsibilities.len()];
        let mut on_page = false;
        for chunk in plan.chunks_on_page(&exp.id, page) {
            on_page = true;
            for flag in keep
                .iter_mut()
                .take(chunk.bullet_end)
                .skip(chunk.bullet_start)
            {
                *flag = true;
            }
        }
        if !on_page {
            return false;
        }
        let n_ach = exp.achievements.len();
        let ach = std::mem::take(&mut exp.achievements);
        let resp = std::mem::take(&mut exp.responsibilities);
        exp.achievements = ach
            .into_iter()
            .enumerate()
            .filter(|(i, _)| keep[*i])
            .map(|(_, b)| b)
            .collect();
        exp.responsibilities = resp
            .into_iter()
            .enumerate()
            .filter(|(i, _)| keep[n_ach + *i])
            .map(|(_, b)| b)
            .collect();
        true
    });

    out.education
        .retain(|e| plan.chunks_on_page(&e.id, page).next().is_some());
    out.projects
        .retain(|p| plan.chunks_on_page(&p.id, page).next().is_some());
    out.certifications
        .retain(|c| plan.chunks_on_page(&c.id, page).next().is_some());
    out.languages
        .retain(|l| plan.chunks_on_page(&l.id, page).next().is_some());
    out.achievements
        .retain(|a| plan.chunks_on_page(&a.id, page).next().is_some());

    out
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::paginate::paginate;
    use crate::models::resume::{Experience, Project};
    use crate::templates::ivory::Ivory;
    use crate::templates::ResumeTemplate;

    fn experience(id: &str, n_bullets: usize) -> Experience {
        Experience {
            id: id.into(),
            title: "Staff Engineer".into(),
            company: "Acme".into(),
            location: "Berlin".into(),
            start_date: "2019-03".into(),
            end_date: "2023-06".into(),
            achievements: (0..n_bullets)
                .map(|i| {
                    format!(
                        "Owned initiative {i}, from the first design document through \
                         rollout and the operational handover to the owning team."
                    )
                })
                .collect(),
            ..Default::default()
        }
    }

    fn resume() -> ResumeData {
        ResumeData {
            first_name: "Ada".into(),
            last_name: "Lovelace".into(),
            profession: "Engineer".into(),
            email: "ada@example.com".into(),
            phone: "+44 20 0000".into(),
            summary: "Compiler engineer with a pagination habit.".into(),
            skills_raw: vec!["Rust".into(), "Go".into()],
            experience: (0..8).map(|i| experience(&format!("exp-{i}"), 8)).collect(),
            projects: vec![Project {
                id: "p1".into(),
                name: "Engine".into(),
                description: "A difference engine.".into(),
                ..Default::default()
            }],
            ..Default::default()
        }
    }

    #[test]
    fn test_header_fields_blank_after_page_one() {
        let data = resume();
        let plan = paginate(&data, Ivory.style(), "en").unwrap();
        assert!(plan.total_pages > 1);
        let p1 = filter_for_page(&data, &plan, 1);
        assert_eq!(p1.first_name, "Ada");
        let p2 = filter_for_page(&data, &plan, 2);
        assert!(p2.first_name.is_empty());
        assert!(p2.email.is_empty());
        assert!(p2.phone.is_empty());
    }

    #[test]
    fn test_summary_and_skills_only_on_their_page() {
        let data = resume();
        let plan = paginate(&data, Ivory.style(), "en").unwrap();
        for page in 1..=plan.total_pages {
            let sub = filter_for_page(&data, &plan, page);
            if plan.summary_page == Some(page) {
                assert_eq!(sub.summary, data.summary);
            } else {
                assert!(sub.summary.is_empty());
            }
            if plan.skills_page == Some(page) {
                assert_eq!(sub.skills_raw, data.skills_raw);
            } else {
                assert!(sub.skills_raw.is_empty());
            }
        }
    }

    #[test]
    fn test_pages_reassemble_every_bullet_exactly_once() {
        let data = resume();
        let plan = paginate(&data, Ivory.style(), "en").unwrap();
        for exp in &data.experience {
            let mut seen: Vec<String> = Vec::new();
            for page in 1..=plan.total_pages {
                let sub = filter_for_page(&data, &plan, page);
                if let Some(e) = sub.experience.iter().find(|e| e.id == exp.id) {
                    seen.extend(e.achievements.iter().cloned());
                }
            }
            assert_eq!(seen, exp.achievements, "bullets lost or reordered for {}", exp.id);
        }
    }

    #[test]
    fn test_entries_absent_from_other_pages() {
        let data = resume();
        let plan = paginate(&data, Ivory.style(), "en").unwrap();
        let proj_page = plan.entry_first_page("p1").unwrap();
        for page in 1..=plan.total_pages {
            let sub = filter_for_page(&data, &plan, page);
            assert_eq!(sub.projects.len(), usize::from(page == proj_page));
        }
    }

    #[test]
    fn test_split_entry_appears_on_each_of_its_pages() {
        let data = resume();
        let plan = paginate(&data, Ivory.style(), "en").unwrap();
        let split = plan
            .placements
            .iter()
            .find(|p| p.chunk_index > 0)
            .expect("large resume forces a split");
        let first = plan.entry_first_page(&split.entry_id).unwrap();
        assert!(split.page_number > first);
        for page in [first, split.page_number] {
            let sub = filter_for_page(&data, &plan, page);
            assert!(sub.experience.iter().any(|e| e.id == split.entry_id));
        }
    }
}
