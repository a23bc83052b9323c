pub mod fixtures;

use std::io::{self, Write};

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Asserts every line has exactly `width` characters.
pub fn assert_uniform_width(lines: &[String], width: usize) {
    for line in lines {
        assert_eq!(line.chars().count(), width, "line {line:?} is not {width} wide");
    }
}

/// A sink that refuses every write.
pub struct BrokenSink;

impl Write for BrokenSink {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "sink closed"))
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
