//! crates/console/src/native.rs
//! Legacy Windows console attribute path.
//!
//! Modern Windows terminals enable virtual terminal processing and take the
//! ANSI path like every other platform. This module serves the remaining
//! case: an interactive console whose mode query shows no VT support, where
//! the only way to color output is `SetConsoleTextAttribute`. All `unsafe`
//! in the workspace is confined to this file.

use std::io;
use std::os::windows::io::RawHandle;

use windows::Win32::Foundation::HANDLE;
use windows::Win32::System::Console::{
    CONSOLE_CHARACTER_ATTRIBUTES, CONSOLE_MODE, CONSOLE_SCREEN_BUFFER_INFO,
    ENABLE_VIRTUAL_TERMINAL_PROCESSING, FOREGROUND_BLUE, FOREGROUND_GREEN, FOREGROUND_INTENSITY,
    FOREGROUND_RED, GetConsoleMode, GetConsoleScreenBufferInfo, SetConsoleTextAttribute,
};

use crate::color::Color;

/// Reports whether the console behind `handle` has virtual terminal
/// processing enabled, i.e. whether it understands ANSI escapes.
///
/// A failed mode query (the handle is not a console) reports `false`; the
/// caller has already established interactivity and will fall back to the
/// attribute path, whose own construction re-validates the handle.
#[must_use]
pub(crate) fn vt_processing_enabled(handle: RawHandle) -> bool {
    let mut mode = CONSOLE_MODE(0);
    // SAFETY: the handle comes from AsRawHandle on a live std stream and is
    // only read by the mode query.
    let queried = unsafe { GetConsoleMode(HANDLE(handle), &raw mut mode) };
    queried.is_ok() && (mode.0 & ENABLE_VIRTUAL_TERMINAL_PROCESSING.0) != 0
}

/// Direct console attribute driver for legacy Windows consoles.
///
/// Construction captures the console's current text attributes; that
/// snapshot is what [`reset`](Self::reset) restores, so a logger that
/// brackets every tag with set/reset leaves the console exactly as it found
/// it. The raw handle is stored as an integer because console handles for a
/// process's std streams remain valid for the life of the process and carry
/// no ownership.
#[derive(Clone, Copy, Debug)]
pub struct NativeConsole {
    handle: usize,
    default_attributes: u16,
}

impl NativeConsole {
    /// Captures the default attributes of the console behind `handle`.
    ///
    /// Returns `None` when the handle does not answer a screen-buffer query,
    /// meaning it is not actually a console and the caller should disable
    /// color instead.
    #[must_use]
    pub(crate) fn capture(handle: RawHandle) -> Option<Self> {
        let mut info = CONSOLE_SCREEN_BUFFER_INFO::default();
        // SAFETY: the handle comes from AsRawHandle on a live std stream and
        // the query only fills the provided out-parameter.
        unsafe { GetConsoleScreenBufferInfo(HANDLE(handle), &raw mut info) }.ok()?;
        Some(Self {
            handle: handle as usize,
            default_attributes: info.wAttributes.0,
        })
    }

    /// Sets the console foreground to `color`, with the intensity bit when
    /// `bright` is requested. Background bits from the captured defaults are
    /// preserved.
    pub(crate) fn set(&self, color: Color, bright: bool) -> io::Result<()> {
        let mut attributes = foreground_attributes(color);
        if bright {
            attributes |= FOREGROUND_INTENSITY;
        }
        // Keep background and meta bits (upper byte) from the defaults.
        attributes |= CONSOLE_CHARACTER_ATTRIBUTES(self.default_attributes & 0xFF00);
        self.apply(attributes)
    }

    /// Restores the attribute snapshot taken at construction.
    pub(crate) fn reset(&self) -> io::Result<()> {
        self.apply(CONSOLE_CHARACTER_ATTRIBUTES(self.default_attributes))
    }

    fn apply(&self, attributes: CONSOLE_CHARACTER_ATTRIBUTES) -> io::Result<()> {
        // SAFETY: the stored handle was validated by capture() and std
        // stream handles stay valid for the process lifetime.
        unsafe { SetConsoleTextAttribute(HANDLE(self.handle as *mut core::ffi::c_void), attributes) }
            .map_err(io::Error::other)
    }
}

const fn foreground_attributes(color: Color) -> CONSOLE_CHARACTER_ATTRIBUTES {
    match color {
        Color::Blue => FOREGROUND_BLUE,
        Color::Cyan => CONSOLE_CHARACTER_ATTRIBUTES(FOREGROUND_GREEN.0 | FOREGROUND_BLUE.0),
        Color::Green => FOREGROUND_GREEN,
        Color::Yellow => CONSOLE_CHARACTER_ATTRIBUTES(FOREGROUND_RED.0 | FOREGROUND_GREEN.0),
        Color::Red => FOREGROUND_RED,
        Color::Magenta => CONSOLE_CHARACTER_ATTRIBUTES(FOREGROUND_RED.0 | FOREGROUND_BLUE.0),
    }
}
