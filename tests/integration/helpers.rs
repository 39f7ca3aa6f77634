//! Shared fixtures for the integration tests.

use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

use phrasesync::Timeline;

/// Directory holding the JSON script fixtures.
pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
}

/// Path of a named fixture.
pub fn fixture(name: &str) -> PathBuf {
    fixtures_dir().join(name)
}

/// Timeline built from a named fixture.
pub fn load_fixture(name: &str) -> Timeline {
    Timeline::load(fixture(name)).unwrap()
}

/// Write `content` to `name` inside a fresh temp dir.
pub fn temp_fixture(name: &str, content: &str) -> (TempDir, PathBuf) {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    (dir, path)
}
