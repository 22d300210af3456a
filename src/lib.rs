//! Carousel state machine with a frame-driven autoplay timer.
//!
//! The [`carousel::Carousel`] owns the active slide index and a
//! [`render::RenderTarget`] it projects that index onto. Hosts feed it
//! navigation commands and elapsed frame time.

pub mod autoplay;
pub mod carousel;
pub mod config;
pub mod constants;
pub mod images;
pub mod render;
pub mod theme;

pub use crate::autoplay::Autoplay;
pub use crate::carousel::Carousel;
pub use crate::render::{Deck, RenderTarget};
pub use crate::theme::{Theme, ThemeError, ThemeStore};
