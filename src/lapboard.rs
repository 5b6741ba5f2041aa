use crate::lap::Lap;
use crate::laps::Laps;
use crate::style::Theme;
use std::time::Instant;
use thiserror::Error;

/// Contract violations of the single-slot timer.
///
/// Both variants mean the caller broke the start/stop pairing; neither
/// mutates any state.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LapError {
    /// `start` was called while a lap was still open.
    #[error("a lap is already running")]
    AlreadyRunning,
    /// `stop` was called with no open lap.
    #[error("no lap is running")]
    NotRunning,
}

/// The in-flight measurement; exists only between `start` and `stop`.
#[derive(Debug)]
struct OpenLap {
    label: String,
    started_at: Instant,
}

/// Records named sections of work and renders them as an aligned report.
///
/// One lap may be open at a time. Nested or concurrent sections need one
/// `Lapboard` per nesting level.
///
/// ```
/// use lapboard::Lapboard;
///
/// let mut board = Lapboard::new("startup");
/// board.start("load config")?;
/// // ... work ...
/// board.stop()?;
/// println!("{board}");
/// # Ok::<(), lapboard::LapError>(())
/// ```
#[derive(Debug)]
pub struct Lapboard {
    headline: String,
    laps: Laps,
    open_lap: Option<OpenLap>,
    theme: Theme,
}

impl Lapboard {
    pub fn new(headline: impl Into<String>) -> Self {
        Self::with_theme(headline, Theme::default())
    }

    /// Constructs a board with an explicit theme - [`Theme::Plain`] when the
    /// report targets something other than a terminal.
    pub fn with_theme(headline: impl Into<String>, theme: Theme) -> Self {
        Self {
            headline: headline.into(),
            laps: Laps::default(),
            open_lap: None,
            theme,
        }
    }

    /// Opens a new lap with the given label.
    pub fn start(&mut self, label: impl Into<String>) -> Result<(), LapError> {
        if self.open_lap.is_some() {
            return Err(LapError::AlreadyRunning);
        }

        self.open_lap = Some(OpenLap {
            label: label.into(),
            started_at: Instant::now(),
        });
        Ok(())
    }

    /// Closes the open lap, records it, and returns a copy of the finished
    /// record. The ledger keeps the long-term owner.
    pub fn stop(&mut self) -> Result<Lap, LapError> {
        let OpenLap { label, started_at } = self.open_lap.take().ok_or(LapError::NotRunning)?;

        let lap = Lap::new(label, started_at, Instant::now());
        self.laps.push(lap.clone());
        Ok(lap)
    }

    pub fn is_running(&self) -> bool {
        self.open_lap.is_some()
    }

    /// Read-only view of all completed laps, in completion order.
    pub fn laps(&self) -> &Laps {
        &self.laps
    }

    pub fn headline(&self) -> &str {
        &self.headline
    }

    pub(crate) fn theme(&self) -> Theme {
        self.theme
    }

    /// Drops all recorded laps; see [`Laps::clear`] for what is kept.
    pub fn clear(&mut self) {
        self.laps.clear();
    }
}

#[cfg(test)]
impl Lapboard {
    /// Appends a lap with a known duration, bypassing the clock.
    pub(crate) fn record_lap(&mut self, label: &str, duration: std::time::Duration) {
        let started_at = Instant::now();
        self.laps
            .push(Lap::new(label.to_string(), started_at, started_at + duration));
    }
}
