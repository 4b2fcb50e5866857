pub mod chart;
pub mod frame;

pub use chart::{RowSpan, digit_width, has_tick, render_lines};
pub use frame::Renderer;
