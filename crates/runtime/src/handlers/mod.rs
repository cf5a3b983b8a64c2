//! Presentation handlers plugged into the engine's boundary traits.
//!
//! - [`TextRenderer`] prints the board as a glyph grid to any writer
//! - [`TracingNotifier`] reports turn progress and game over through `tracing`

mod text_renderer;
mod tracing_notifier;

pub use text_renderer::TextRenderer;
pub use tracing_notifier::TracingNotifier;
