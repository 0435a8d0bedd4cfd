//! Shared test fixtures for prompt, writer and flow test modules.

use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use crate::prompt::Prompter;
use crate::ui::Palette;

static TEST_DIR_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Temporary directory fixture with best-effort cleanup.
#[derive(Debug)]
pub struct TestTempDir {
    path: PathBuf,
}

impl TestTempDir {
    /// Create a unique temporary directory with a readable prefix.
    pub fn new(prefix: &str) -> Self {
        let suffix = TEST_DIR_COUNTER.fetch_add(1, Ordering::Relaxed);
        let millis = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis();
        let dir = std::env::temp_dir().join(format!(
            "elfra-{prefix}-{}-{millis}-{suffix}",
            std::process::id()
        ));
        fs::create_dir_all(&dir).expect("failed to create temporary fixture directory");
        Self { path: dir }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Build a child path under the fixture root.
    pub fn child(&self, relative: &str) -> PathBuf {
        self.path.join(relative)
    }

    /// Write UTF-8 text to a child path, creating parent directories as needed.
    pub fn write_text(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.child(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("failed to create parent directories for fixture");
        }
        fs::write(&path, content).expect("failed to write fixture file");
        path
    }
}

impl Drop for TestTempDir {
    fn drop(&mut self) {
        let _ = fs::remove_dir_all(&self.path);
    }
}

/// Prompter that reads `script` as the user's keystrokes and records output.
pub fn scripted_prompter(script: &str) -> Prompter<Cursor<Vec<u8>>, Vec<u8>> {
    Prompter::new(
        Cursor::new(script.as_bytes().to_vec()),
        Vec::new(),
        Palette::plain(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn temp_dir_fixture_writes_and_resolves_paths() {
        let fixture = TestTempDir::new("fixture");
        let file = fixture.write_text("nested/file.txt", "hello");
        assert!(file.starts_with(fixture.path()));
        assert_eq!(fs::read_to_string(file).unwrap(), "hello");
    }

    #[test]
    fn scripted_prompter_replays_lines() {
        let mut prompter = scripted_prompter("first\nsecond\n");
        assert_eq!(prompter.read_line("> ").unwrap(), "first");
        assert_eq!(prompter.read_line("> ").unwrap(), "second");
        assert_eq!(String::from_utf8(prompter.into_output()).unwrap(), "> > ");
    }
}
