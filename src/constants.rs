// binary stuff
pub const LAPBOARD: &str = "lapboard";
pub const DEV: &str = "dev";
pub const RELEASE: &str = "release";
pub const DEMO_HEADLINE: &str = "counting durations";

// report layout stuff
pub const RULE_GLYPH: &str = "–";
pub const BORDER_LEFT: &str = "|| ";
pub const BORDER_RIGHT: &str = " ||";
pub const LABEL_SEPARATOR: &str = ": ";
pub const MILLISECONDS_SUFFIX: &str = " ms";

// decorative characters per row: "|| " + two connector glyphs + ": " + " ms" + " ||"
pub const PANEL_OVERHEAD: usize = 13;

// all duration text is formatted with this precision - the column widths
// are computed against it, so changing it re-derives every width
pub const DURATION_DECIMALS: usize = 5;

// style stuff
pub const FRAME_RGB: (u8, u8, u8) = (227, 225, 127);
pub const VALUE_RGB: (u8, u8, u8) = (143, 227, 125);
