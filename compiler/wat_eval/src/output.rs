//! Output sink for `display`.
//!
//! Enum dispatch over the three destinations: stdout, an in-memory buffer
//! (tests, embedding), or nowhere (budgeted runs).

use std::sync::Arc;

use parking_lot::Mutex;

pub enum OutputSink {
    Stdout,
    Buffer(Mutex<String>),
    Silent,
}

impl OutputSink {
    pub fn buffer() -> Self {
        OutputSink::Buffer(Mutex::new(String::new()))
    }

    /// Write `text` followed by a newline.
    pub fn write_line(&self, text: &str) {
        match self {
            Self::Stdout => println!("{text}"),
            Self::Buffer(buf) => {
                let mut buf = buf.lock();
                buf.push_str(text);
                buf.push('\n');
            }
            Self::Silent => {}
        }
    }

    /// Captured output; empty for stdout and silent sinks.
    pub fn contents(&self) -> String {
        match self {
            Self::Buffer(buf) => buf.lock().clone(),
            Self::Stdout | Self::Silent => String::new(),
        }
    }

    pub fn clear(&self) {
        if let Self::Buffer(buf) = self {
            buf.lock().clear();
        }
    }
}

pub type SharedOutput = Arc<OutputSink>;

pub fn stdout_output() -> SharedOutput {
    Arc::new(OutputSink::Stdout)
}

pub fn buffer_output() -> SharedOutput {
    Arc::new(OutputSink::buffer())
}

pub fn silent_output() -> SharedOutput {
    Arc::new(OutputSink::Silent)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buffer_captures_lines() {
        let out = buffer_output();
        out.write_line("hello");
        out.write_line("world");
        assert_eq!(out.contents(), "hello\nworld\n");
        out.clear();
        assert_eq!(out.contents(), "");
    }

    #[test]
    fn test_silent_discards() {
        let out = silent_output();
        out.write_line("ignored");
        assert_eq!(out.contents(), "");
    }
}
