//! crates/console/src/color.rs
//! Foreground color identifiers shared by the ANSI and native console paths.

/// Foreground colors a log line's level tag may be rendered in.
///
/// The set is deliberately small: one color per severity, covering the six
/// severities the logger distinguishes. How a color reaches the screen is
/// the concern of [`ColorWriter`](crate::ColorWriter); this enum only names
/// the color.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Color {
    /// Blue foreground.
    Blue,
    /// Cyan foreground.
    Cyan,
    /// Green foreground.
    Green,
    /// Yellow foreground.
    Yellow,
    /// Red foreground.
    Red,
    /// Magenta foreground.
    Magenta,
}

impl Color {
    /// Returns the SGR foreground code for this color.
    ///
    /// The codes are the standard 30-based foreground range, so
    /// `ESC [ <code> m` selects the color on any ANSI terminal.
    ///
    /// # Examples
    ///
    /// ```
    /// use console::Color;
    ///
    /// assert_eq!(Color::Red.ansi_code(), 31);
    /// assert_eq!(Color::Blue.ansi_code(), 34);
    /// ```
    #[must_use]
    pub const fn ansi_code(self) -> u8 {
        match self {
            Self::Red => 31,
            Self::Green => 32,
            Self::Yellow => 33,
            Self::Blue => 34,
            Self::Magenta => 35,
            Self::Cyan => 36,
        }
    }
}
