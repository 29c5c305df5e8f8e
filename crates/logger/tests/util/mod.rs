//! Shared helpers for logger integration tests.
#![allow(dead_code)]

use std::io::{self, Write};
use std::sync::{Arc, Mutex};

use console::ColorWriter;
use logger::Logger;

/// Cloneable in-memory sink: the logger owns one clone, the test keeps
/// another and reads captured bytes through it.
#[derive(Clone, Default)]
pub struct SharedBuf(Arc<Mutex<Vec<u8>>>);

impl SharedBuf {
    pub fn new() -> Self {
        Self::default()
    }

    /// Captured output as a UTF-8 string.
    pub fn text(&self) -> String {
        String::from_utf8(self.bytes()).expect("utf-8 output")
    }

    /// Captured output as raw bytes.
    pub fn bytes(&self) -> Vec<u8> {
        self.0.lock().expect("buffer mutex poisoned").clone()
    }

    /// Discards everything captured so far.
    pub fn clear(&self) {
        self.0.lock().expect("buffer mutex poisoned").clear();
    }
}

impl Write for SharedBuf {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0
            .lock()
            .expect("buffer mutex poisoned")
            .extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// A logger writing plain (uncolored) lines into a fresh shared buffer.
pub fn plain_logger() -> (SharedBuf, Logger<SharedBuf>) {
    let buf = SharedBuf::new();
    let logger = Logger::with_color_writer(buf.clone(), ColorWriter::disabled());
    (buf, logger)
}

/// A logger that always emits ANSI escapes into a fresh shared buffer.
pub fn ansi_logger() -> (SharedBuf, Logger<SharedBuf>) {
    let buf = SharedBuf::new();
    let logger = Logger::with_color_writer(buf.clone(), ColorWriter::ansi());
    (buf, logger)
}

/// Splits captured text into lines and checks each against the plain line
/// grammar `<epoch-seconds> [<TAG>]: <message>`, returning the messages.
pub fn parse_plain_lines(output: &str) -> Vec<(String, String)> {
    output
        .lines()
        .map(|line| {
            let (timestamp, rest) = line.split_once(' ').expect("timestamp separator");
            assert!(
                !timestamp.is_empty() && timestamp.chars().all(|c| c.is_ascii_digit()),
                "malformed timestamp in line: {line:?}"
            );
            let tag_start = rest.strip_prefix('[').expect("opening bracket");
            let (tag, message) = tag_start.split_once("]: ").expect("tag delimiter");
            (tag.to_owned(), message.to_owned())
        })
        .collect()
}
