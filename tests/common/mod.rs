#![allow(dead_code)]

use std::fs;
use std::path::Path;

use tempfile::TempDir;

/// Creates an `assert_cmd` Command for the image-inspect binary.
#[macro_export]
macro_rules! image_inspect {
    () => {
        assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("image-inspect"))
    };
}

/// Profile definitions used by most integration tests.
pub const ALBUM_DEFINITIONS: &str = r#"
[[rules]]
name = "text"

[[rules.rule]]
type = "regex"
value = '\s$'
invert = true
message = "Empty space at the end"

[[profile]]
name = "albums"
description = "Albums with numbered tracks"
paths = ["artist/album/track-title.mp3"]

[[profile.variable]]
name = "artist"
rule_sets = ["text"]

[[profile.variable]]
name = "album"
rule_sets = ["text"]

[[profile.variable]]
name = "track"
pattern = '\d+'

[[profile.variable.rule]]
type = "numbering"
message = "Illegal numbering"

[[profile.variable]]
name = "title"
rule_sets = ["text"]

[[profile.variable.rule]]
type = "regex"
value = 'draft'
invert = true
severity = "warn"
message = "Draft title"
"#;

/// A temporary image tree plus a definitions file beside it.
pub struct TestFixture {
    pub dir: TempDir,
}

impl TestFixture {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Creates an empty file below the image root.
    pub fn create_file(&self, relative_path: &str) {
        let path = self.image().join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(&path, "").expect("Failed to write file");
    }

    /// Creates a directory below the image root.
    pub fn create_dir(&self, relative_path: &str) {
        fs::create_dir_all(self.image().join(relative_path))
            .expect("Failed to create directory");
    }

    /// Writes `defs.toml` next to the image root.
    pub fn create_definitions(&self, content: &str) {
        fs::write(self.definitions(), content).expect("Failed to write definitions");
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Root directory of the image under test.
    pub fn image(&self) -> std::path::PathBuf {
        self.dir.path().join("image")
    }

    pub fn definitions(&self) -> std::path::PathBuf {
        self.dir.path().join("defs.toml")
    }

    /// Fixture with [`ALBUM_DEFINITIONS`] and a conforming album.
    pub fn with_album() -> Self {
        let fixture = Self::new();
        fixture.create_definitions(ALBUM_DEFINITIONS);
        for track in ["1-intro.mp3", "2-song.mp3", "3-outro.mp3"] {
            fixture.create_file(&format!("Artist/Album/{track}"));
        }
        fixture
    }
}
