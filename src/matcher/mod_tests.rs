use super::*;
use crate::message::MessageSink;
use crate::profile::Variable;

fn music_profile() -> Profile {
    Profile::new("mp3")
        .with_path("artist/album/track-title.mp3")
        .with_variable(Variable::new("artist"))
        .with_variable(Variable::new("album"))
        .with_variable(Variable::new("track").with_pattern(r"\d+"))
        .with_variable(Variable::new("title"))
}

fn scan_of(files: &[&str], dirs: &[(&str, usize)]) -> ScanResult {
    ScanResult {
        files: files.iter().map(|f| (*f).to_string()).collect(),
        dirs: dirs.iter().map(|(d, n)| ((*d).to_string(), *n)).collect(),
    }
}

#[test]
fn extracts_every_variable_of_matching_template() {
    let profile = music_profile();
    let matcher = PathMatcher::new(&profile).unwrap();

    let elements = matcher.match_file("Artist 1/Album One/1-file.mp3");
    let values: Vec<_> = elements
        .iter()
        .map(|e| (e.variable.as_str(), e.value.as_str()))
        .collect();
    assert_eq!(
        values,
        [
            ("artist", "Artist 1"),
            ("album", "Album One"),
            ("track", "1"),
            ("title", "file")
        ]
    );
    assert!(
        elements
            .iter()
            .all(|e| e.template == "artist/album/track-title.mp3")
    );
}

#[test]
fn folder_keys_follow_capture_depth() {
    let profile = music_profile();
    let matcher = PathMatcher::new(&profile).unwrap();
    let elements = matcher.match_file("Artist 1/Album One/1-file.mp3");

    let artist = &elements[0];
    assert_eq!(artist.parent_path, "");
    assert_eq!(artist.real_path, "Artist 1");

    let album = &elements[1];
    assert_eq!(album.parent_path, "Artist 1");
    assert_eq!(album.real_path, "Artist 1/Album One");

    let track = &elements[2];
    assert_eq!(track.parent_path, "Artist 1/Album One");
    assert_eq!(track.real_path, "Artist 1/Album One/1-file.mp3");

    for element in &elements {
        assert!(element.file.starts_with(&element.real_path));
    }
}

#[test]
fn segment_count_mismatch_is_unmatched() {
    let profile = music_profile();
    let matcher = PathMatcher::new(&profile).unwrap();

    assert!(matcher.match_file("Artist 1/1-file.mp3").is_empty());
    assert!(
        matcher
            .match_file("Artist 1/Album One/CD1/1-file.mp3")
            .is_empty()
    );
}

#[test]
fn default_pattern_is_greedy() {
    let profile = Profile::new("p")
        .with_path("artist - title.mp3")
        .with_variable(Variable::new("artist"))
        .with_variable(Variable::new("title"));
    let matcher = PathMatcher::new(&profile).unwrap();

    let elements = matcher.match_file("A - B - C.mp3");
    assert_eq!(elements[0].value, "A - B");
    assert_eq!(elements[1].value, "C");
}

#[test]
fn first_matching_template_wins() {
    let profile = Profile::new("p")
        .with_path("artist/title.mp3")
        .with_path("artist/title.mp3.bak")
        .with_path("folder/name")
        .with_variable(Variable::new("artist"))
        .with_variable(Variable::new("title"))
        .with_variable(Variable::new("folder"))
        .with_variable(Variable::new("name"));
    let matcher = PathMatcher::new(&profile).unwrap();

    let elements = matcher.match_file("Artist/song.mp3");
    assert_eq!(elements.len(), 2);
    assert!(elements.iter().all(|e| e.template == "artist/title.mp3"));
}

#[test]
fn falls_through_to_later_template() {
    let profile = Profile::new("p")
        .with_path("artist/track-title.mp3")
        .with_path("artist/title.mp3")
        .with_variable(Variable::new("artist"))
        .with_variable(Variable::new("track").with_pattern(r"\d+"))
        .with_variable(Variable::new("title"));
    let matcher = PathMatcher::new(&profile).unwrap();

    let numbered = matcher.match_file("Artist/01-song.mp3");
    assert_eq!(numbered.len(), 3);
    assert_eq!(numbered[0].template, "artist/track-title.mp3");

    let plain = matcher.match_file("Artist/song.mp3");
    assert_eq!(plain.len(), 2);
    assert_eq!(plain[0].template, "artist/title.mp3");

    assert!(matcher.match_file("Artist/song.ogg").is_empty());
}

#[test]
fn first_miss_abandons_template() {
    // "artist" is tried first; its miss ends the template before "track"
    // and "title" are looked at.
    let profile = Profile::new("p")
        .with_path("artist/track-title.mp3")
        .with_variable(Variable::new("artist"))
        .with_variable(Variable::new("track").with_pattern(r"\d+"))
        .with_variable(Variable::new("title"));
    let matcher = PathMatcher::new(&profile).unwrap();

    assert!(matcher.match_file("Artist/intro.mp3").is_empty());
    assert!(matcher.match_file("Artist/x-intro.mp3").is_empty());
}

#[test]
fn extraction_ignores_case_of_literals() {
    let profile = Profile::new("p")
        .with_path("artist/title.mp3")
        .with_variable(Variable::new("artist").with_pattern("[^/]+"))
        .with_variable(Variable::new("title").with_pattern("[a-z]+"));
    let matcher = PathMatcher::new(&profile).unwrap();

    let elements = matcher.match_file("Artist/SONG.MP3");
    assert_eq!(elements.len(), 2);
    assert_eq!(elements[1].value, "SONG");
}

#[test]
fn extraction_is_unanchored() {
    let profile = Profile::new("p")
        .with_path("title.mp3")
        .with_variable(Variable::new("title").with_pattern("[a-z]+"));
    let matcher = PathMatcher::new(&profile).unwrap();

    let elements = matcher.match_file("01 song.mp3");
    assert_eq!(elements[0].value, "song");
}

#[test]
fn substring_names_extract_independently() {
    let profile = Profile::new("p")
        .with_path("artist/artistname.mp3")
        .with_variable(Variable::new("artist"))
        .with_variable(Variable::new("artistname"));
    let matcher = PathMatcher::new(&profile).unwrap();

    let elements = matcher.match_file("Queen/Freddie Mercury.mp3");
    assert_eq!(elements[0].variable, "artist");
    assert_eq!(elements[0].value, "Queen");
    assert_eq!(elements[1].variable, "artistname");
    assert_eq!(elements[1].value, "Freddie Mercury");
}

#[test]
fn match_all_reports_unmatched_files_and_empty_dirs() {
    let profile = music_profile();
    let matcher = PathMatcher::new(&profile).unwrap();
    let scan = scan_of(
        &["Artist 1/Album One/1-file.mp3", "Artist 1/cover.jpg"],
        &[("Artist 1", 2), ("Artist 1/Album One", 1), ("Artist 3", 0)],
    );
    let mut sink = MessageSink::new(false);

    let elements = matcher.match_all(&scan, &mut sink);
    assert_eq!(elements.len(), 4);
    assert!(elements.iter().all(|e| e.file != "Artist 1/cover.jpg"));

    let messages = sink.into_sorted();
    let summary: Vec<_> = messages.iter().map(|m| (m.file(), m.text())).collect();
    assert_eq!(
        summary,
        [
            ("Artist 1/cover.jpg", NO_MATCHING_PATH),
            ("Artist 3", EMPTY_DIRECTORY)
        ]
    );
    assert!(messages.iter().all(|m| m.severity() == Severity::Error));
    assert!(messages.iter().all(|m| m.template().is_empty()));
}

#[test]
fn verbose_reports_each_extraction() {
    let profile = music_profile();
    let matcher = PathMatcher::new(&profile).unwrap();
    let scan = scan_of(&["Artist 1/Album One/1-file.mp3"], &[]);
    let mut sink = MessageSink::new(true);

    matcher.match_all(&scan, &mut sink);
    let messages = sink.into_sorted();
    let texts: Vec<_> = messages.iter().map(|m| m.text()).collect();
    assert_eq!(texts, ["artist", "album", "track", "title"]);
    assert!(messages.iter().all(|m| m.severity() == Severity::Info));
}

#[test]
fn template_without_variables_never_matches() {
    let profile = Profile::new("p")
        .with_path("readme.txt")
        .with_variable(Variable::new("artist"));
    let matcher = PathMatcher::new(&profile).unwrap();
    assert!(matcher.match_file("readme.txt").is_empty());
}
