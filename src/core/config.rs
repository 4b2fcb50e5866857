//! Run-time configuration object + fluent builder.

use crate::core::{
    color::AnsiCode,
    constants::{DEFAULT_ROWS, DEFAULT_TICK_STRIDE},
    error::ConfigError,
};

/// Immutable parameters handed to the renderer.
///
/// Only [`RenderConfigBuilder::build`] creates one, so `rows` and
/// `tick_stride` are always at least 1.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderConfig {
    rows: usize,
    tick_stride: usize,
    color: Option<AnsiCode>,
}

impl RenderConfig {
    #[inline]
    #[must_use]
    pub fn builder() -> RenderConfigBuilder {
        RenderConfigBuilder::new()
    }

    #[inline]
    #[must_use]
    pub const fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    #[must_use]
    pub const fn tick_stride(&self) -> usize {
        self.tick_stride
    }

    /// Colour for filled markers; `None` means plain text.
    #[inline]
    #[must_use]
    pub const fn color(&self) -> Option<&AnsiCode> {
        self.color.as_ref()
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            tick_stride: DEFAULT_TICK_STRIDE,
            color: None,
        }
    }
}

/// Fluent builder; unset fields fall back to the defaults.
#[derive(Debug, Default)]
pub struct RenderConfigBuilder {
    rows: Option<usize>,
    tick_stride: Option<usize>,
    color: Option<AnsiCode>,
}

impl RenderConfigBuilder {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    #[inline]
    #[must_use]
    pub fn rows(mut self, n: usize) -> Self {
        self.rows = Some(n);
        self
    }
    #[inline]
    #[must_use]
    pub fn tick_stride(mut self, n: usize) -> Self {
        self.tick_stride = Some(n);
        self
    }
    /// `None` keeps the output plain.
    #[inline]
    #[must_use]
    pub fn color(mut self, c: Option<AnsiCode>) -> Self {
        self.color = c;
        self
    }

    /// # Errors
    /// [`ConfigError::Zero`] when `rows` or `tick_stride` is 0.
    pub fn build(self) -> Result<RenderConfig, ConfigError> {
        let rows = self.rows.unwrap_or(DEFAULT_ROWS);
        let tick_stride = self.tick_stride.unwrap_or(DEFAULT_TICK_STRIDE);
        if rows == 0 {
            return Err(ConfigError::Zero("rows"));
        }
        if tick_stride == 0 {
            return Err(ConfigError::Zero("tick_stride"));
        }
        Ok(RenderConfig {
            rows,
            tick_stride,
            color: self.color,
        })
    }
}

/// Ergonomic `?` on a builder chain.
impl From<RenderConfigBuilder> for Result<RenderConfig, ConfigError> {
    fn from(b: RenderConfigBuilder) -> Self {
        b.build()
    }
}
