//! Test fixture utilities for integration tests.

pub mod harness;

/// Files of the sample documentation tree used across suites, with contents.
///
/// With the default configuration (`.md` documents, `README.md` index):
/// - `orphan.md` is the only orphan;
/// - `sub-dir-a/CHANGELOG.md` has the dead link `sub-dir-a/dead-end`;
/// - `some-other-md-file.md` has the dead link `assets/logo.png`;
/// - `sub-dir-a/README` is no document, so its dead link `not-here` only
///   counts with `--basename README`.
#[allow(dead_code)]
pub const SAMPLE_TREE: &[(&str, &str)] = &[
    (
        "README.md",
        "# Sample\n\n- [some file](some-md-file.md)\n- [b](sub-dir-b)\n- [a](sub-dir-a/README)\n- [changes](sub-dir-a/CHANGELOG.md)\n- [web](https://example.com)\n",
    ),
    ("some-md-file.md", "Back to [top](README.md).\n"),
    (
        "sub-dir-a/README",
        "[nowhere](not-here)\n[nested](nested-sub-dir-a)\n",
    ),
    (
        "sub-dir-a/CHANGELOG.md",
        "- [a](nested-sub-dir-a)\n- [gone](dead-end)\n- [b](nested-sub-dir-b)\n- [up](../sub-dir-b)\n",
    ),
    (
        "sub-dir-a/nested-sub-dir-a/README.md",
        "See [other](some-other-md-file.md#section).\n",
    ),
    (
        "sub-dir-a/nested-sub-dir-a/some-other-md-file.md",
        "[script](../../scripts/build.sh) and [logo](/assets/logo.png)\n",
    ),
    ("sub-dir-a/nested-sub-dir-b/notes.txt", "not a document\n"),
    ("sub-dir-b/README.md", "Mail [us](mailto:docs@example.com).\n"),
    ("orphan.md", "Nobody links here.\n"),
    ("scripts/build.sh", "#!/bin/sh\n"),
];
