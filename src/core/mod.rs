//! Aggregates the “business logic” layer.

pub mod color;
pub mod config;
pub mod constants;
pub mod error;
pub mod histogram;
pub mod input;

// re-export frequently-used items for convenience
pub use color::{AnsiCode, ColorError};
pub use config::{RenderConfig, RenderConfigBuilder};
pub use constants::{ALPHABET, ALPHABET_LEN, DEFAULT_ROWS, DEFAULT_TICK_STRIDE};
pub use error::{ConfigError, HistError};
pub use histogram::Histogram;
pub use input::{read_text, read_text_from_path};
