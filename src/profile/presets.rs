/// Profiles available when no definitions file is found.
pub const BUILTIN_DEFINITIONS: &str = r#"
[[rules]]
name = "text"

[[rules.rule]]
type = "regex"
value = '^\s'
invert = true
message = "Empty space at the beginning"

[[rules.rule]]
type = "regex"
value = '\s$'
invert = true
message = "Empty space at the end"

[[rules.rule]]
type = "regex"
value = '\s\s'
invert = true
message = "Repeated spaces"

[[rules]]
name = "start-case"

[[rules.rule]]
type = "regex"
value = '\b[a-z]|\B[A-Z]'
invert = true
message = "Start case required"

[[rules]]
name = "lower-case"

[[rules.rule]]
type = "regex"
value = '[A-Z]'
invert = true
message = "Lower case required"

[[rules]]
name = "numbering"

[[rules.rule]]
type = "numbering"
message = "Illegal numbering"

# MP3 library: one folder per artist and album, numbered tracks.
[[profile]]
name = "mp3"
description = "MP3 library (artist/album/track-title.mp3)"
paths = ["artist/album/track-title.mp3"]

[[profile.variable]]
name = "artist"
rule_sets = ["text", "start-case"]

[[profile.variable]]
name = "album"
rule_sets = ["text", "start-case"]

[[profile.variable]]
name = "track"
pattern = '\d+'
rule_sets = ["numbering"]

[[profile.variable]]
name = "title"
rule_sets = ["text", "lower-case"]

# FLAC library with optional multi-disc albums.
[[profile]]
name = "flac"
description = "FLAC library (artist/album[/disc]/track-title.flac)"
paths = [
    "artist/album/track-title.flac",
    "artist/album/disc/track-title.flac",
]

[[profile.variable]]
name = "artist"
rule_sets = ["text", "start-case"]

[[profile.variable]]
name = "album"
rule_sets = ["text", "start-case"]

[[profile.variable]]
name = "disc"
pattern = 'CD\d+'

[[profile.variable.rule]]
type = "regex"
value = '^CD[1-9]\d*$'
message = "Disc folders must be named CD<n>"

[[profile.variable]]
name = "track"
pattern = '\d+'
rule_sets = ["numbering"]

[[profile.variable]]
name = "title"
rule_sets = ["text", "lower-case"]
"#;
