//! crates/console/src/terminal.rs
//! Bound alias for output handles that can be probed for color capability.

use is_terminal::IsTerminal;

/// Output handles the capability probe can inspect.
///
/// On Unix the probe only needs to ask whether the handle is an interactive
/// terminal, so any [`IsTerminal`] implementor qualifies. On Windows the
/// probe additionally queries the console mode through the raw handle, so
/// the handle must also implement
/// [`AsRawHandle`](std::os::windows::io::AsRawHandle). The blanket impls
/// below make `std::io::Stdout`, `std::io::Stderr`, and `std::fs::File`
/// usable on every platform without callers spelling the platform bounds.
#[cfg(windows)]
pub trait Terminal: IsTerminal + std::os::windows::io::AsRawHandle {}

#[cfg(windows)]
impl<T: IsTerminal + std::os::windows::io::AsRawHandle> Terminal for T {}

/// Output handles the capability probe can inspect.
///
/// On Unix the probe only needs to ask whether the handle is an interactive
/// terminal, so any [`IsTerminal`] implementor qualifies.
#[cfg(not(windows))]
pub trait Terminal: IsTerminal {}

#[cfg(not(windows))]
impl<T: IsTerminal> Terminal for T {}
