use std::path::{Path, PathBuf};

use super::mock_fs::MockFileSystem;
use crate::error::ImageInspectError;
use crate::profile::{DefinitionSource, ProfileLoader};

const LOCAL_DEFS: &str = r#"
[[profile]]
name = "local"
paths = ["artist/title.mp3"]
"#;

const USER_DEFS: &str = r#"
[[profile]]
name = "user"
paths = ["artist/title.mp3"]
"#;

#[test]
fn explicit_path_wins_over_discovery() {
    let fs = MockFileSystem::new()
        .with_file("/music/image-inspect.toml", LOCAL_DEFS)
        .with_file("/defs/custom.toml", USER_DEFS);
    let loader = ProfileLoader::with_fs(fs);

    let defs = loader.load(Some(Path::new("/defs/custom.toml"))).unwrap();
    assert!(defs.profile("user").is_ok());
    assert_eq!(
        defs.source,
        Some(DefinitionSource::File(PathBuf::from("/defs/custom.toml")))
    );
}

#[test]
fn missing_explicit_path_is_an_error() {
    let loader = ProfileLoader::with_fs(MockFileSystem::new());
    let err = loader.load(Some(Path::new("/nope.toml"))).unwrap_err();
    assert!(matches!(err, ImageInspectError::Config(_)));
    assert!(err.to_string().contains("Definition file not found"));
}

#[test]
fn local_file_preferred_over_user_config() {
    let fs = MockFileSystem::new()
        .with_file("/music/image-inspect.toml", LOCAL_DEFS)
        .with_file("/home/user/.config/image-inspect/profiles.toml", USER_DEFS);
    let defs = ProfileLoader::with_fs(fs).load(None).unwrap();

    assert!(defs.profile("local").is_ok());
    assert!(defs.profile("user").is_err());
}

#[test]
fn user_config_used_without_local_file() {
    let fs = MockFileSystem::new()
        .with_file("/home/user/.config/image-inspect/profiles.toml", USER_DEFS);
    let defs = ProfileLoader::with_fs(fs).load(None).unwrap();

    assert!(defs.profile("user").is_ok());
}

#[test]
fn falls_back_to_builtin_definitions() {
    let fs = MockFileSystem::new().with_config_dir(None);
    let defs = ProfileLoader::with_fs(fs).load(None).unwrap();

    assert_eq!(defs.source, Some(DefinitionSource::Builtin));
    assert!(defs.profile("mp3").is_ok());
}

#[test]
fn invalid_local_file_is_reported_not_skipped() {
    let fs = MockFileSystem::new().with_file("/music/image-inspect.toml", "[[profile]");
    let err = ProfileLoader::with_fs(fs).load(None).unwrap_err();
    assert!(matches!(err, ImageInspectError::TomlParse(_)));
}
