//! Common test utilities and helpers for integration tests
#![allow(dead_code)]

use sesmail_cli::{Cli, LogContext, parse_from};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

pub mod mock_aws;

/// Get path to test fixtures directory
pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

/// Path of a test email fixture
pub fn email_fixture_path(name: &str) -> PathBuf {
    fixtures_dir().join("emails").join(name)
}

/// Load a test email fixture
pub fn load_email_fixture(name: &str) -> Vec<u8> {
    let path = email_fixture_path(name);
    std::fs::read(&path).unwrap_or_else(|_| panic!("Failed to read fixture: {:?}", path))
}

/// Writes `content` to a fresh temporary file
pub fn temp_message(content: &[u8]) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().expect("create temp file");
    file.write_all(content).expect("write temp file");
    file
}

/// Parses a command line, panicking on usage errors
pub fn cli(args: &[&str], file: &Path) -> Cli {
    let mut argv: Vec<String> = vec!["sesmail".to_string()];
    argv.extend(args.iter().map(|a| a.to_string()));
    argv.push(file.display().to_string());
    parse_from(argv).expect("valid command line")
}

/// In-memory sink shared between a `LogContext` and the test
#[derive(Clone, Default)]
pub struct LogBuffer(Arc<Mutex<Vec<u8>>>);

impl LogBuffer {
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }

    pub fn lines(&self) -> Vec<String> {
        self.contents().lines().map(str::to_string).collect()
    }
}

impl Write for LogBuffer {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

/// Logging context whose output lands in the returned buffer
pub fn capture_logs(verbose: bool) -> (LogContext, LogBuffer) {
    let buffer = LogBuffer::default();
    let writer = buffer.clone();
    (
        LogContext::with_writer(verbose, move || writer.clone()),
        buffer,
    )
}
