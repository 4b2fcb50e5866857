//! Public-facing crate root – re-exports + one-shot helper.

pub mod cli;
pub mod core;
pub mod render;

pub use self::core::{
    color::{AnsiCode, ColorError},
    config::{RenderConfig, RenderConfigBuilder},
    error::{ConfigError, HistError},
    histogram::Histogram,
    input::{read_text, read_text_from_path},
};

pub use render::{Renderer, render_lines};

/// Bins `text` and renders the whole chart into a `String`, one
/// `\n`-terminated line per row, footer included.
#[must_use]
pub fn chart(text: &[u8], cfg: &RenderConfig) -> String {
    let hist = Histogram::count(text);
    let mut out = String::new();
    for line in render_lines(&hist, cfg) {
        out.push_str(&line);
        out.push('\n');
    }
    out
}
