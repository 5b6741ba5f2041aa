pub mod constants;
pub mod lap;
pub mod lapboard;
pub mod laps;
mod report;
pub mod style;

// Re-export the most commonly used types
pub use lap::Lap;
pub use lapboard::{LapError, Lapboard};
pub use laps::Laps;
pub use style::Theme;
