//! Reusable UI components

mod banner;
mod button;

pub use banner::{render_banner, BANNER_HEIGHT};
pub use button::{render_button, BUTTON_HEIGHT};
