//! crates/console/src/mode.rs
//! Capability probe result for an output handle.

use crate::terminal::Terminal;

/// How colors can be produced on a particular output handle.
///
/// A `ColorMode` is determined once per handle, when the owning
/// [`ColorWriter`](crate::ColorWriter) is constructed, and never changes
/// afterwards. Downstream code branches on the mode instead of re-probing
/// the platform on every write.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ColorMode {
    /// The handle accepts SGR escape sequences embedded in the stream.
    Ansi,
    /// The handle is a legacy Windows console; colors are applied through
    /// the console attribute API, not the stream.
    #[cfg(windows)]
    Native,
    /// The handle is not an interactive terminal; color requests are no-ops.
    Disabled,
}

impl ColorMode {
    /// Probes an output handle and reports how colors can reach it.
    ///
    /// Non-terminal handles (pipes, regular files) always come back
    /// [`ColorMode::Disabled`]. Interactive terminals are `Ansi` on Unix;
    /// on Windows they are `Ansi` when the console reports virtual terminal
    /// processing and `Native` otherwise.
    #[must_use]
    pub fn detect<H: Terminal>(handle: &H) -> Self {
        if !handle.is_terminal() {
            return Self::Disabled;
        }
        #[cfg(windows)]
        if !crate::native::vt_processing_enabled(handle.as_raw_handle()) {
            return Self::Native;
        }
        Self::Ansi
    }

    /// Reports whether this mode can render any color at all.
    #[must_use]
    pub const fn colored(self) -> bool {
        !matches!(self, Self::Disabled)
    }
}
