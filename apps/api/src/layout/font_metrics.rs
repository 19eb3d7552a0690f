//! Static font-metric tables for the shipped template fonts.
//!
//! Character widths are in em units (relative to font size). Exact glyph
//! metrics are a browser concern; static tables are accepted best-effort and
//! the pagination safety margin absorbs the residual error. All tables cover
//! ASCII 0x20..=0x7E (95 printable characters), index = (char as usize) - 32;
//! non-ASCII characters fall back to an average width.

use serde::{Deserialize, Serialize};

// ────────────────────────────────────────────────────────────────────────────
// Font family enum
// ────────────────────────────────────────────────────────────────────────────

/// Fonts used by the built-in template skins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FontFamily {
    /// Circuit template — humanist sans-serif.
    Inter,
    /// Ivory template — classic old-style serif.
    EbGaramond,
    /// Sapphire template — geometric humanist sans-serif.
    Lato,
}

// ────────────────────────────────────────────────────────────────────────────
// Font metric table
// ────────────────────────────────────────────────────────────────────────────

/// Static character-width table for one font family.
///
/// All widths are in em units at 1em. `widths[i]` is the width of ASCII
/// character `(i + 32)`, covering 0x20 (space) through 0x7E (~).
pub struct FontMetricTable {
    pub font: FontFamily,
    widths: [f32; 95],
    /// Fallback width for codepoints outside the printable ASCII range.
    pub average_char_width: f32,
    pub space_width: f32,
}

impl FontMetricTable {
    /// Rendered width of a string, in px, at the given font size.
    pub fn text_width_px(&self, s: &str, font_size_px: f32) -> f32 {
        let em: f32 = s
            .chars()
            .map(|c| {
                let code = c as usize;
                if (32..=126).contains(&code) {
                    self.widths[code - 32]
                } else {
                    self.average_char_width
                }
            })
            .sum();
        em * font_size_px
    }

    /// Number of lines a string occupies when greedily word-wrapped into a
    /// column `column_width_px` wide at `font_size_px`. Empty text is 0 lines;
    /// a single word wider than the column still takes one line (it overflows
    /// horizontally rather than wrapping mid-word).
    pub fn wrapped_line_count(&self, s: &str, column_width_px: f32, font_size_px: f32) -> u32 {
        let words: Vec<&str> = s.split_whitespace().collect();
        if words.is_empty() || column_width_px <= 0.0 {
            return 0;
        }

        let space_px = self.space_width * font_size_px;
        let mut lines = 1u32;
        let mut current = 0.0_f32;
        let mut first_on_line = true;

        for word in &words {
            let word_px = self.text_width_px(word, font_size_px);
            if !first_on_line && current + space_px + word_px > column_width_px {
                lines += 1;
                current = word_px;
            } else {
                current += if first_on_line { 0.0 } else { space_px } + word_px;
                first_on_line = false;
            }
        }
        lines
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Static width tables  (95 ASCII printable characters each)
// ────────────────────────────────────────────────────────────────────────────

/// Inter — humanist sans-serif.
static INTER_TABLE: FontMetricTable = FontMetricTable {
    font: FontFamily::Inter,
    #[rustfmt::skip]
    widths: [
        // sp    !     "     #     $     %     &     '     (     )     *     +     ,     -     .     /
        0.25, 0.30, 0.38, 0.56, 0.56, 0.89, 0.67, 0.22, 0.33, 0.33, 0.39, 0.59, 0.28, 0.33, 0.28, 0.31,
        // 0     1     2     3     4     5     6     7     8     9
        0.56, 0.56, 0.56, 0.56, 0.56, 0.56, 0.56, 0.56, 0.56, 0.56,
        // :     ;     <     =     >     ?     @
        0.28, 0.28, 0.59, 0.59, 0.59, 0.50, 1.02,
        // A     B     C     D     E     F     G     H     I     J     K     L     M
        0.67, 0.61, 0.61, 0.67, 0.56, 0.50, 0.67, 0.67, 0.25, 0.39, 0.61, 0.53, 0.78,
        // N     O     P     Q     R     S     T     U     V     W     X     Y     Z
        0.67, 0.72, 0.56, 0.72, 0.61, 0.50, 0.56, 0.67, 0.67, 0.89, 0.61, 0.61, 0.56,
        // [     \     ]     ^     _     `
        0.28, 0.31, 0.28, 0.47, 0.56, 0.34,
        // a     b     c     d     e     f     g     h     i     j     k     l     m
        0.56, 0.56, 0.50, 0.56, 0.56, 0.31, 0.56, 0.56, 0.22, 0.22, 0.53, 0.22, 0.83,
        // n     o     p     q     r     s     t     u     v     w     x     y     z
        0.56, 0.56, 0.56, 0.56, 0.33, 0.44, 0.39, 0.56, 0.50, 0.72, 0.50, 0.50, 0.44,
        // {     |     }     ~
        0.33, 0.26, 0.33, 0.59,
    ],
    average_char_width: 0.52,
    space_width: 0.25,
};

/// EB Garamond — old-style serif. Narrower than Inter.
static EB_GARAMOND_TABLE: FontMetricTable = FontMetricTable {
    font: FontFamily::EbGaramond,
    #[rustfmt::skip]
    widths: [
        // sp    !     "     #     $     %     &     '     (     )     *     +     ,     -     .     /
        0.21, 0.26, 0.32, 0.48, 0.48, 0.76, 0.57, 0.19, 0.28, 0.28, 0.33, 0.50, 0.24, 0.28, 0.24, 0.26,
        // 0     1     2     3     4     5     6     7     8     9
        0.48, 0.48, 0.48, 0.48, 0.48, 0.48, 0.48, 0.48, 0.48, 0.48,
        // :     ;     <     =     >     ?     @
        0.24, 0.24, 0.50, 0.50, 0.50, 0.43, 0.87,
        // A     B     C     D     E     F     G     H     I     J     K     L     M
        0.57, 0.52, 0.52, 0.57, 0.48, 0.43, 0.57, 0.57, 0.21, 0.33, 0.52, 0.45, 0.66,
        // N     O     P     Q     R     S     T     U     V     W     X     Y     Z
        0.57, 0.61, 0.48, 0.61, 0.52, 0.43, 0.48, 0.57, 0.57, 0.76, 0.52, 0.52, 0.48,
        // [     \     ]     ^     _     `
        0.24, 0.26, 0.24, 0.40, 0.48, 0.29,
        // a     b     c     d     e     f     g     h     i     j     k     l     m
        0.48, 0.48, 0.43, 0.48, 0.48, 0.26, 0.48, 0.48, 0.19, 0.19, 0.45, 0.19, 0.71,
        // n     o     p     q     r     s     t     u     v     w     x     y     z
        0.48, 0.48, 0.48, 0.48, 0.28, 0.37, 0.33, 0.48, 0.43, 0.61, 0.43, 0.43, 0.37,
        // {     |     }     ~
        0.28, 0.22, 0.28, 0.50,
    ],
    average_char_width: 0.44,
    space_width: 0.21,
};

/// Lato — geometric humanist sans-serif. Slightly wider than Inter.
static LATO_TABLE: FontMetricTable = FontMetricTable {
    font: FontFamily::Lato,
    #[rustfmt::skip]
    widths: [
        // sp    !     "     #     $     %     &     '     (     )     *     +     ,     -     .     /
        0.26, 0.32, 0.40, 0.59, 0.59, 0.94, 0.70, 0.23, 0.35, 0.35, 0.41, 0.62, 0.29, 0.35, 0.29, 0.33,
        // 0     1     2     3     4     5     6     7     8     9
        0.59, 0.59, 0.59, 0.59, 0.59, 0.59, 0.59, 0.59, 0.59, 0.59,
        // :     ;     <     =     >     ?     @
        0.29, 0.29, 0.62, 0.62, 0.62, 0.53, 1.07,
        // A     B     C     D     E     F     G     H     I     J     K     L     M
        0.70, 0.64, 0.64, 0.70, 0.59, 0.53, 0.70, 0.70, 0.26, 0.41, 0.64, 0.56, 0.82,
        // N     O     P     Q     R     S     T     U     V     W     X     Y     Z
        0.70, 0.76, 0.59, 0.76, 0.64, 0.53, 0.59, 0.70, 0.70, 0.94, 0.64, 0.64, 0.59,
        // [     \     ]     ^     _     `
        0.29, 0.33, 0.29, 0.49, 0.59, 0.36,
        // a     b     c     d     e     f     g     h     i     j     k     l     m
        0.59, 0.59, 0.53, 0.59, 0.59, 0.33, 0.59, 0.59, 0.23, 0.23, 0.56, 0.23, 0.87,
        // n     o     p     q     r     s     t     u     v     w     x     y     z
        0.59, 0.59, 0.59, 0.59, 0.35, 0.46, 0.41, 0.59, 0.53, 0.76, 0.53, 0.53, 0.46,
        // {     |     }     ~
        0.35, 0.27, 0.35, 0.62,
    ],
    average_char_width: 0.55,
    space_width: 0.26,
};

/// Returns the static metric table for a font family.
pub fn get_metrics(font: FontFamily) -> &'static FontMetricTable {
    match font {
        FontFamily::Inter => &INTER_TABLE,
        FontFamily::EbGaramond => &EB_GARAMOND_TABLE,
        FontFamily::Lato => &LATO_TABLE,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_width_empty_is_zero() {
        let metrics = get_metrics(FontFamily::Inter);
        assert_eq!(metrics.text_width_px("", 13.0), 0.0);
    }

    #[test]
    fn test_text_width_scales_with_font_size() {
        let metrics = get_metrics(FontFamily::Inter);
        let at_10 = metrics.text_width_px("Rust", 10.0);
        let at_20 = metrics.text_width_px("Rust", 20.0);
        assert!((at_20 - 2.0 * at_10).abs() < 1e-3);
    }

    #[test]
    fn test_non_ascii_falls_back_to_average() {
        let metrics = get_metrics(FontFamily::Inter);
        let width = metrics.text_width_px("é", 10.0);
        assert!((width - metrics.average_char_width * 10.0).abs() < 1e-4);
    }

    #[test]
    fn test_wrapped_line_count_empty_is_zero() {
        let metrics = get_metrics(FontFamily::Inter);
        assert_eq!(metrics.wrapped_line_count("", 500.0, 13.0), 0);
        assert_eq!(metrics.wrapped_line_count("   ", 500.0, 13.0), 0);
    }

    #[test]
    fn test_wrapped_line_count_single_word() {
        let metrics = get_metrics(FontFamily::Inter);
        assert_eq!(metrics.wrapped_line_count("Rust", 500.0, 13.0), 1);
    }

    #[test]
    fn test_wrapped_line_count_grows_with_text() {
        let metrics = get_metrics(FontFamily::Inter);
        let short = "Shipped the payments service.";
        let long = "Shipped the payments service ahead of schedule while migrating \
                    three legacy integrations and onboarding two new regional providers \
                    without downtime across any production environment.";
        let short_lines = metrics.wrapped_line_count(short, 400.0, 13.0);
        let long_lines = metrics.wrapped_line_count(long, 400.0, 13.0);
        assert!(short_lines >= 1);
        assert!(long_lines > short_lines);
    }

    #[test]
    fn test_narrower_column_wraps_more() {
        let metrics = get_metrics(FontFamily::Lato);
        let text = "Built a distributed caching layer with consistent hashing";
        let wide = metrics.wrapped_line_count(text, 700.0, 13.0);
        let narrow = metrics.wrapped_line_count(text, 180.0, 13.0);
        assert!(narrow > wide);
    }

    #[test]
    fn test_serif_measures_narrower_than_sans() {
        let text = "Professional Summary";
        let garamond = get_metrics(FontFamily::EbGaramond);
        let lato = get_metrics(FontFamily::Lato);
        assert!(garamond.text_width_px(text, 13.0) < lato.text_width_px(text, 13.0));
    }
}
