//! In-memory console writer shared between the logger and the test body.

#![allow(dead_code)]

use std::io::{self, Write};
use std::sync::{Arc, Mutex};

#[derive(Clone, Default)]
pub struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

impl SharedBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contents(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }

    pub fn clear(&self) {
        self.0.lock().unwrap().clear();
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Logger writing to a fresh buffer, with a fixed suffix so output is deterministic.
pub fn buffered(level: tintlog::Level) -> (tintlog::Logger, SharedBuffer) {
    let buffer = SharedBuffer::new();
    let logger = tintlog::Logger::builder()
        .level(level)
        .output(buffer.clone())
        .suffix(|| ", t=0".to_string())
        .build();
    (logger, buffer)
}
