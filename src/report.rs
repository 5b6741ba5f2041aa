use crate::constants::*;
use crate::lap::{digits_before_decimal, Lap};
use crate::lapboard::Lapboard;
use std::fmt;

/// Repeat `glyph` exactly `n` times.
fn fence(n: usize, glyph: &str) -> String {
    glyph.repeat(n)
}

impl Lapboard {
    /// The formatted report as a string; equivalent to `to_string()`.
    ///
    /// Safe to call at any time - the output reflects exactly the laps
    /// recorded so far, in completion order.
    pub fn render(&self) -> String {
        self.to_string()
    }

    /// Total character width of the panel: the widest label/duration pair or
    /// the headline, whichever is larger, plus the decorative overhead.
    fn panel_width(&self) -> usize {
        (self.laps().longest_label() + self.laps().longest_duration())
            .max(self.headline().len())
            + PANEL_OVERHEAD
    }

    // Integer division on both halves - the headline can sit one character
    // left of true center for odd-length differences, which matches the
    // established layout.
    fn headline_indent(&self, panel_width: usize) -> usize {
        panel_width / 2 - self.headline().len() / 2
    }

    fn write_row(&self, f: &mut fmt::Formatter<'_>, lap: &Lap) -> fmt::Result {
        let text = lap.formatted_duration();
        let connector = fence(
            self.laps().longest_label() - lap.label().len() + 2,
            RULE_GLYPH,
        );
        let padding = fence(
            self.laps().longest_integer() - digits_before_decimal(&text),
            " ",
        );

        writeln!(
            f,
            "{}{}{}{}{}{}{}",
            self.theme().frame(BORDER_LEFT),
            self.theme().value(lap.label()),
            connector,
            LABEL_SEPARATOR,
            self.theme().value(&format!("{padding}{text}")),
            MILLISECONDS_SUFFIX,
            self.theme().frame(BORDER_RIGHT),
        )
    }
}

impl fmt::Display for Lapboard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self.panel_width();
        let rule = self.theme().frame(&fence(width, RULE_GLYPH));

        writeln!(f, "{rule}")?;
        writeln!(
            f,
            "{}{}",
            fence(self.headline_indent(width), " "),
            self.theme().frame(self.headline())
        )?;
        writeln!(f, "{rule}")?;

        for lap in self.laps() {
            self.write_row(f, lap)?;
        }

        writeln!(f, "{rule}")
    }
}
