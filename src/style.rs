use crate::constants::{FRAME_RGB, VALUE_RGB};
use colored::Colorize;

/// Styling applied to report segments.
///
/// Two fixed color roles run through the whole report: `frame` for rules,
/// borders and the headline, `value` for labels and durations. Both render
/// bold, and every styled run is reset before the following text. Color
/// output still honors the `colored` crate's tty and `NO_COLOR` detection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Theme {
    /// Bold truecolor escape sequences (the default).
    #[default]
    Ansi,
    /// No escape sequences; for snapshot tests and non-terminal output.
    Plain,
}

impl Theme {
    pub(crate) fn frame(self, text: &str) -> String {
        self.paint(text, FRAME_RGB)
    }

    pub(crate) fn value(self, text: &str) -> String {
        self.paint(text, VALUE_RGB)
    }

    fn paint(self, text: &str, (red, green, blue): (u8, u8, u8)) -> String {
        match self {
            Self::Ansi => text.truecolor(red, green, blue).bold().to_string(),
            Self::Plain => text.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_passes_text_through_unchanged() {
        assert_eq!(Theme::Plain.frame("––––"), "––––");
        assert_eq!(Theme::Plain.value("solve"), "solve");
    }

    #[test]
    fn ansi_wraps_text_in_bold_truecolor_and_reset() {
        colored::control::set_override(true);

        let frame = Theme::Ansi.frame("rule");
        assert!(frame.contains("38;2;227;225;127"));
        assert!(frame.contains("rule"));
        assert!(frame.ends_with("\x1b[0m"));

        let value = Theme::Ansi.value("label");
        assert!(value.contains("38;2;143;227;125"));
        assert!(value.contains("\x1b[1"), "bold attribute missing: {value:?}");
        assert!(value.ends_with("\x1b[0m"));
    }
}
