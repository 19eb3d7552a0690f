// Layout engine: height measurement, page bin-packing, per-page filtering.
// The measure + paginate pass is CPU-bound and runs inside
// tokio::task::spawn_blocking when invoked from handlers.

pub mod font_metrics;
pub mod measure;
pub mod page_filter;
pub mod paginate;

// Re-export the public API consumed by templates and the renderer host.
pub use font_metrics::{get_metrics, FontFamily};
pub use page_filter::filter_for_page;
pub use paginate::{paginate, PaginationPlan};

/// A4 portrait at 96 DPI — the only supported page format.
pub const A4_WIDTH_PX: f32 = 794.0;
pub const A4_HEIGHT_PX: f32 = 1123.0;

/// Subtracted from every page budget so rounding in the metric tables never
/// pushes a placed block past the physical page edge.
pub const SAFETY_MARGIN_PX: f32 = 5.0;
