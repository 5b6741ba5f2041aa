use crate::lap::{digits_before_decimal, Lap};
use derive_more::{Deref, IntoIterator};

/// The insertion-ordered ledger of completed laps.
///
/// Alongside the laps themselves it tracks three running column widths used
/// to align the rendered report: the longest label, the longest formatted
/// duration, and the most characters before a duration's decimal point.
/// They are updated as each lap is appended so rendering never rescans the
/// ledger, and they only ever grow.
///
/// There is deliberately no mutable access to the underlying `Vec` - laps
/// are appended by `Lapboard::stop` so the widths stay consistent with the
/// entries.
#[derive(Debug, Default, Deref, IntoIterator)]
pub struct Laps {
    #[deref]
    #[into_iterator(ref)]
    laps: Vec<Lap>,
    longest_label: usize,
    longest_duration: usize,
    longest_integer: usize,
}

impl Laps {
    pub(crate) fn push(&mut self, lap: Lap) {
        self.longest_label = self.longest_label.max(lap.label().len());

        let text = lap.formatted_duration();
        self.longest_duration = self.longest_duration.max(text.len());
        self.longest_integer = self.longest_integer.max(digits_before_decimal(&text));

        self.laps.push(lap);
    }

    /// Removes all recorded laps.
    ///
    /// The column widths are left untouched, so a board reused after a clear
    /// keeps the report layout it had before.
    pub fn clear(&mut self) {
        self.laps.clear();
    }

    pub fn longest_label(&self) -> usize {
        self.longest_label
    }

    pub fn longest_duration(&self) -> usize {
        self.longest_duration
    }

    pub fn longest_integer(&self) -> usize {
        self.longest_integer
    }
}
