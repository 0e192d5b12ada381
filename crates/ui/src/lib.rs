mod app;
pub mod logging;
mod renderer;
mod theme;

pub use app::UltraTraceApp;
