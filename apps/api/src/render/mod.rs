//! Renderer host.
//!
//! Drives a template through the paginate → filter → render pipeline and
//! hands the ordered page fragments to the PDF capture service. A template
//! failure on one page is contained: that page is replaced with a neutral
//! placeholder and the rest of the document still renders.

pub mod handlers;

use async_trait::async_trait;
use bytes::Bytes;
use serde::Serialize;
use serde_json::json;

use crate::errors::AppError;
use crate::layout::{filter_for_page, paginate, A4_HEIGHT_PX, A4_WIDTH_PX};
use crate::models::resume::ResumeData;
use crate::templates::ResumeTemplate;

// ────────────────────────────────────────────────────────────────────────────
// Output shapes
// ────────────────────────────────────────────────────────────────────────────

/// One self-contained A4 page fragment.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderedPage {
    pub page_number: u32,
    pub html: String,
}

/// A fully rendered document: page fragments in ascending page order.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderedDocument {
    pub template_id: String,
    pub language: String,
    pub total_pages: u32,
    pub pages: Vec<RenderedPage>,
}

// ────────────────────────────────────────────────────────────────────────────
// Rendering
// ────────────────────────────────────────────────────────────────────────────

/// Paginates the resume and renders every page with the given template.
///
/// Pagination failure aborts the document; a render failure on a single page
/// does not. The failed page becomes a placeholder and the error is logged
/// with the template id and page number.
pub fn render_document(
    data: &ResumeData,
    template: &dyn ResumeTemplate,
    language: &str,
) -> Result<RenderedDocument, AppError> {
    let plan = paginate(data, template.style(), language)?;
    let annotated = plan.apply(data);

    let mut pages = Vec::with_capacity(plan.total_pages as usize);
    for page in 1..=plan.total_pages {
        let subset = filter_for_page(&annotated, &plan, page);
        let html = match template.render(&subset, language) {
            Ok(html) => html,
            Err(err) => {
                tracing::error!(
                    template_id = template.meta().id,
                    page,
                    error = %err,
                    "page render failed, substituting placeholder"
                );
                placeholder_page(template.meta().id, page)
            }
        };
        pages.push(RenderedPage {
            page_number: page,
            html,
        });
    }

    Ok(RenderedDocument {
        template_id: template.meta().id.to_string(),
        language: language.to_string(),
        total_pages: plan.total_pages,
        pages,
    })
}

/// Blank A4 stand-in for a page whose template render failed. Carries no
/// user data.
fn placeholder_page(template_id: &str, page: u32) -> String {
    format!(
        r#"<div class="page page-error" data-template="{template_id}" data-page="{page}" style="width:{w}px;height:{h}px;background:#fff;"></div>"#,
        w = A4_WIDTH_PX as u32,
        h = A4_HEIGHT_PX as u32,
    )
}

// ────────────────────────────────────────────────────────────────────────────
// PDF capture
// ────────────────────────────────────────────────────────────────────────────

/// External collaborator that turns rendered page fragments into a PDF.
#[async_trait]
pub trait PdfCapture: Send + Sync {
    async fn capture(&self, document: &RenderedDocument) -> Result<Bytes, AppError>;
}

/// Capture over HTTP: posts the ordered page fragments to a headless-browser
/// service and returns the PDF bytes it responds with.
pub struct HttpPdfCapture {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpPdfCapture {
    pub fn new(endpoint: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint,
        }
    }
}

#[async_trait]
impl PdfCapture for HttpPdfCapture {
    async fn capture(&self, document: &RenderedDocument) -> Result<Bytes, AppError> {
        let payload = json!({
            "pageWidthPx": A4_WIDTH_PX as u32,
            "pageHeightPx": A4_HEIGHT_PX as u32,
            "pages": document.pages.iter().map(|p| &p.html).collect::<Vec<_>>(),
        });

        let resp = self
            .client
            .post(&self.endpoint)
            .json(&payload)
            .send()
            .await
            .map_err(|e| AppError::PdfCapture(format!("request failed: {e}")))?;

        if !resp.status().is_success() {
            return Err(AppError::PdfCapture(format!(
                "capture service returned {}",
                resp.status()
            )));
        }
        resp.bytes()
            .await
            .map_err(|e| AppError::PdfCapture(format!("reading response body: {e}")))
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::resume::Experience;
    use crate::templates::ivory::{self, Ivory};
    use crate::templates::{TemplateMeta, TemplateStyle};

    fn resume() -> ResumeData {
        ResumeData {
            first_name: "Ada".into(),
            last_name: "Lovelace".into(),
            profession: "Engineer".into(),
            email: "ada@example.com".into(),
            summary: "Compiler engineer.".into(),
            experience: (0..8)
                .map(|i| Experience {
                    id: format!("exp-{i}"),
                    title: "Engineer".into(),
                    company: "Acme".into(),
                    start_date: "2019-03".into(),
                    end_date: "2023-06".into(),
                    achievements: (0..8)
                        .map(|j| {
                            format!(
                                "Ran project {j} from kickoff through delivery, including \
                                 the design reviews and the production rollout."
                            )
                        })
                        .collect(),
                    ..Default::default()
                })
                .collect(),
            ..Default::default()
        }
    }

    #[test]
    fn test_pages_come_out_in_order_and_numbered() {
        let doc = render_document(&resume(), &Ivory, "en").unwrap();
        assert!(doc.total_pages > 1);
        assert_eq!(doc.pages.len(), doc.total_pages as usize);
        for (i, page) in doc.pages.iter().enumerate() {
            assert_eq!(page.page_number, i as u32 + 1);
        }
    }

    #[test]
    fn test_name_appears_only_on_page_one() {
        let doc = render_document(&resume(), &Ivory, "en").unwrap();
        assert!(doc.pages[0].html.contains("Ada Lovelace"));
        for page in &doc.pages[1..] {
            assert!(!page.html.contains("Ada Lovelace"));
        }
    }

    /// A skin that always fails, to exercise per-page containment.
    struct Broken;

    impl ResumeTemplate for Broken {
        fn meta(&self) -> &'static TemplateMeta {
            &ivory::META
        }
        fn style(&self) -> &'static TemplateStyle {
            &ivory::STYLE
        }
        fn render(&self, _data: &ResumeData, _language: &str) -> Result<String, AppError> {
            Err(AppError::TemplateRender {
                template_id: "ivory".into(),
                page: 0,
                message: "boom".into(),
            })
        }
    }

    #[test]
    fn test_failing_page_becomes_placeholder_not_abort() {
        let doc = render_document(&resume(), &Broken, "en").unwrap();
        assert!(doc.total_pages > 1);
        for page in &doc.pages {
            assert!(page.html.contains("page-error"));
        }
    }
}
