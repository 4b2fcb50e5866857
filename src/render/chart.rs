//! Histogram to text rows.
//!
//! ### Layout
//! Row `r` (0 = bottom) stands for the half-open count range
//! `[r / rows * peak, (r + 1) / rows * peak)`. Rows are emitted top first:
//!
//! ```text
//! 4|  *
//!  | **
//! 1|***
//!  |***
//!  +--------------------------
//!  |abcdefghijklmnopqrstuvwxyz
//! ```
//!
//! A letter is filled in every row whose floor its count strictly exceeds,
//! so each bar is a contiguous block growing up from the baseline.

use crate::core::{
    color::AnsiCode,
    config::RenderConfig,
    constants::{ALPHABET, ALPHABET_LEN, BLANK, CORNER, FILLED, H_AXIS, V_AXIS},
    histogram::Histogram,
};

/// Real-valued bounds of one chart row.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RowSpan {
    pub floor: f64,
    pub ceil: f64,
}

impl RowSpan {
    /// Bounds of row `r` out of `rows`, scaled to `peak`.
    #[inline]
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn new(r: usize, rows: usize, peak: u64) -> Self {
        let rows = rows as f64;
        let peak = peak as f64;
        Self {
            floor: (r as f64 / rows) * peak,
            ceil: ((r + 1) as f64 / rows) * peak,
        }
    }

    /// Midpoint of the range, floored.
    #[inline]
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn tick_value(self) -> u64 {
        (0.5 * (self.floor + self.ceil)).floor() as u64
    }

    /// Whether a bin holding `count` is drawn in this row.
    #[inline]
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn fills(self, count: u64) -> bool {
        count as f64 > self.floor
    }
}

/// Width of the tick column: decimal digits of `peak`, and 1 for an empty chart.
#[inline]
#[must_use]
pub fn digit_width(peak: u64) -> usize {
    peak.checked_ilog10().map_or(1, |d| d as usize + 1)
}

/// Ticks start at the top row and repeat every `stride` rows downward.
#[inline]
#[must_use]
pub const fn has_tick(r: usize, rows: usize, stride: usize) -> bool {
    (rows - 1 - r) % stride == 0
}

/// Every line of the chart, produced lazily: `rows` bar rows top first, then
/// the baseline and the labels. Nothing is buffered, so `rows` may be as
/// large as `usize::MAX`.
pub fn render_lines<'a>(
    hist: &'a Histogram,
    cfg: &'a RenderConfig,
) -> impl Iterator<Item = String> + 'a {
    let rows = cfg.rows();
    let digits = digit_width(hist.peak());

    (0..rows)
        .rev()
        .map(move |r| bar_row(hist, cfg, r, digits))
        .chain([axis_line(digits), label_line(digits)])
}

/// Bar row `r` (0 = bottom): tick field, axis, one marker per letter.
#[must_use]
pub fn bar_row(hist: &Histogram, cfg: &RenderConfig, r: usize, digits: usize) -> String {
    let rows = cfg.rows();
    let span = RowSpan::new(r, rows, hist.peak());
    let mut line = String::with_capacity(digits + 1 + ALPHABET_LEN);

    if has_tick(r, rows, cfg.tick_stride()) {
        line.push_str(&format!("{:>digits$}", span.tick_value()));
    } else {
        push_repeat(&mut line, BLANK, digits);
    }
    line.push(V_AXIS);
    push_markers(&mut line, hist, span, cfg.color());
    line
}

fn axis_line(digits: usize) -> String {
    let mut axis = String::with_capacity(digits + 1 + ALPHABET_LEN);
    push_repeat(&mut axis, BLANK, digits);
    axis.push(CORNER);
    push_repeat(&mut axis, H_AXIS, ALPHABET_LEN);
    axis
}

fn label_line(digits: usize) -> String {
    let mut labels = String::with_capacity(digits + 1 + ALPHABET_LEN);
    push_repeat(&mut labels, BLANK, digits);
    labels.push(V_AXIS);
    labels.push_str(ALPHABET);
    labels
}

// --- Helpers ---

#[inline]
fn push_repeat(buf: &mut String, c: char, n: usize) {
    buf.extend(std::iter::repeat_n(c, n));
}

/// One marker per letter; runs of filled markers are wrapped in `color`.
fn push_markers(buf: &mut String, hist: &Histogram, span: RowSpan, color: Option<&AnsiCode>) {
    let mut in_run = false;
    for &count in hist.bins() {
        let filled = span.fills(count);
        if let Some(c) = color {
            if filled && !in_run {
                buf.push_str(c.as_str());
            } else if !filled && in_run {
                buf.push_str(AnsiCode::RESET.as_str());
            }
        }
        in_run = filled;
        buf.push(if filled { FILLED } else { BLANK });
    }
    if in_run && color.is_some() {
        buf.push_str(AnsiCode::RESET.as_str());
    }
}
