use urlref::canonical_path;

const CASES: &[(&str, &str)] = &[
    ("", ""),
    ("/", "/"),
    (".", ""),
    ("./", ""),
    ("/a/", "/a/"),
    ("a/", "a/"),
    ("a/./", "a/"),
    ("./a", "a"),
    ("/a/../b", "/b"),
    ("a/../b", "b"),
    ("a/../../b", "../b"),
    ("a/.", "a/"),
    ("../.././a", "../../a"),
    ("/../.././a", "/../../a"),
    ("a/b/g/../..", "a/"),
    ("a/b/..", "a/"),
    ("a/b/.", "a/b/"),
    ("a/b/../../../..", "../.."),
    ("a./", "a./"),
    ("/../a/b/../../../", "/../../"),
    ("../a/b/../../../", "../../"),
];

#[test]
fn canonical() {
    for &(input, output) in CASES {
        assert_eq!(canonical_path(input), output, "canonical_path({input:?})");
    }
}

#[test]
fn idempotent() {
    for &(input, _) in CASES {
        let once = canonical_path(input);
        assert_eq!(canonical_path(&once), once, "canonical_path({input:?})");
    }
}

#[test]
fn plain_segments() {
    assert_eq!(canonical_path("a/b/c"), "a/b/c");
    assert_eq!(canonical_path("/a/b/c/"), "/a/b/c/");
    assert_eq!(canonical_path("..."), "...");
    assert_eq!(canonical_path(".a/..b"), ".a/..b");
}
