//! crates/console/src/driver.rs
//! Color application bracketing a single log line.

use std::io::{self, Write};

use crate::color::Color;
use crate::mode::ColorMode;
#[cfg(windows)]
use crate::native::NativeConsole;
use crate::terminal::Terminal;

const SGR_BOLD: &str = "\x1b[1m";
const SGR_RESET: &str = "\x1b[0m";

/// Applies and resets foreground colors on one output handle.
///
/// A `ColorWriter` is built once per handle, either by probing the handle
/// with [`detect`](Self::detect) or by forcing a mode with
/// [`ansi`](Self::ansi) / [`disabled`](Self::disabled). It is intentionally
/// free of interior state changes after construction: the logger can share
/// it across threads and call [`set`](Self::set) and [`reset`](Self::reset)
/// while holding its output lock, knowing the driver will never introduce
/// its own synchronization or reordering.
///
/// # Examples
///
/// Escape sequences are written into the stream on the ANSI path:
///
/// ```
/// use console::{Color, ColorWriter};
///
/// let driver = ColorWriter::ansi();
/// let mut out = Vec::new();
/// driver.set(&mut out, Color::Green, false).expect("write succeeds");
/// out.extend_from_slice(b"[INFO]");
/// driver.reset(&mut out).expect("write succeeds");
///
/// assert_eq!(out, b"\x1b[32m[INFO]\x1b[0m".to_vec());
/// ```
#[derive(Clone, Copy, Debug)]
pub struct ColorWriter {
    mode: ColorMode,
    #[cfg(windows)]
    native: Option<NativeConsole>,
}

impl ColorWriter {
    /// Probes `handle` and builds the matching driver.
    ///
    /// The probe runs exactly once, here; the resulting driver never
    /// re-examines the platform. On Windows, an interactive console that
    /// lacks virtual terminal processing gets the attribute-API driver,
    /// seeded with a snapshot of the console's current attributes. A handle
    /// that fails the snapshot query is treated as uncolorable.
    #[must_use]
    pub fn detect<H: Terminal>(handle: &H) -> Self {
        Self::from_probe(handle, ColorMode::detect(handle))
    }

    #[cfg(windows)]
    fn from_probe<H: Terminal>(handle: &H, mode: ColorMode) -> Self {
        let native = match mode {
            ColorMode::Native => NativeConsole::capture(handle.as_raw_handle()),
            ColorMode::Ansi | ColorMode::Disabled => None,
        };
        let mode = match (mode, native) {
            (ColorMode::Native, None) => ColorMode::Disabled,
            (mode, _) => mode,
        };
        Self { mode, native }
    }

    #[cfg(not(windows))]
    fn from_probe<H: Terminal>(_handle: &H, mode: ColorMode) -> Self {
        Self { mode }
    }

    /// Builds a driver that always emits ANSI escapes.
    ///
    /// Used by tests and by embedders whose sink is known to interpret SGR
    /// sequences regardless of what a terminal probe would say.
    #[must_use]
    pub const fn ansi() -> Self {
        Self {
            mode: ColorMode::Ansi,
            #[cfg(windows)]
            native: None,
        }
    }

    /// Builds a driver that never colors anything.
    #[must_use]
    pub const fn disabled() -> Self {
        Self {
            mode: ColorMode::Disabled,
            #[cfg(windows)]
            native: None,
        }
    }

    /// Returns the mode the probe settled on.
    #[must_use]
    pub const fn mode(&self) -> ColorMode {
        self.mode
    }

    /// Reports whether this driver can render color at all.
    #[must_use]
    pub const fn is_enabled(&self) -> bool {
        self.mode.colored()
    }

    /// Switches the foreground to `color`, optionally brightened.
    ///
    /// The ANSI path writes the bold prefix (when `bright`) followed by the
    /// SGR color sequence, with no trailing newline. The native path flushes
    /// the writer first so previously buffered text is not retroactively
    /// recolored, then switches the console attribute. Disabled drivers do
    /// nothing.
    pub fn set<W: Write>(&self, writer: &mut W, color: Color, bright: bool) -> io::Result<()> {
        match self.mode {
            ColorMode::Ansi => {
                if bright {
                    writer.write_all(SGR_BOLD.as_bytes())?;
                }
                write!(writer, "\x1b[{}m", color.ansi_code())
            }
            #[cfg(windows)]
            ColorMode::Native => {
                writer.flush()?;
                match self.native {
                    Some(native) => native.set(color, bright),
                    None => Ok(()),
                }
            }
            ColorMode::Disabled => Ok(()),
        }
    }

    /// Restores the handle's default appearance.
    ///
    /// The ANSI path writes the SGR reset sequence; the native path restores
    /// the attribute snapshot taken at construction.
    pub fn reset<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        match self.mode {
            ColorMode::Ansi => writer.write_all(SGR_RESET.as_bytes()),
            #[cfg(windows)]
            ColorMode::Native => {
                writer.flush()?;
                match self.native {
                    Some(native) => native.reset(),
                    None => Ok(()),
                }
            }
            ColorMode::Disabled => Ok(()),
        }
    }
}
