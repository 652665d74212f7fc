use docsync_fs::{NormalizedPath, validate_relative_path};
use rstest::rstest;

#[test]
fn test_normalize_backslashes_to_forward() {
    let path = NormalizedPath::new("content\\posts\\hello.md");
    assert_eq!(path.as_str(), "content/posts/hello.md");
}

#[test]
fn test_join_paths() {
    let base = NormalizedPath::new("content/posts");
    let joined = base.join("hello.md");
    assert_eq!(joined.as_str(), "content/posts/hello.md");
}

#[test]
fn test_join_with_trailing_slash() {
    let base = NormalizedPath::new("out/");
    assert_eq!(base.join("about.md").as_str(), "out/about.md");
}

#[test]
fn test_parent() {
    let path = NormalizedPath::new("content/posts/hello.md");
    let parent = path.parent().unwrap();
    assert_eq!(parent.as_str(), "content/posts");
}

#[test]
fn test_parent_of_bare_file_is_none() {
    let path = NormalizedPath::new("about.md");
    assert!(path.parent().is_none());
}

#[rstest]
#[case("content/posts/hello.md", Some("md"))]
#[case("content/posts/page.mdx", Some("mdx"))]
#[case("data/settings.yml", Some("yml"))]
#[case("content/.hidden", None)]
#[case("content/README", None)]
fn test_extension(#[case] input: &str, #[case] expected: Option<&str>) {
    assert_eq!(NormalizedPath::new(input).extension(), expected);
}

#[rstest]
#[case("about.md")]
#[case("content/posts/hello.md")]
#[case("content\\posts\\hello.md")]
#[case("data/nav.en.json")]
fn test_validate_relative_path_accepts(#[case] input: &str) {
    assert!(validate_relative_path(input).is_ok(), "{input} should be valid");
}

#[rstest]
#[case("")]
#[case("   ")]
#[case("/etc/passwd")]
#[case("../secrets.md")]
#[case("content/../../secrets.md")]
#[case("content/./hello.md")]
#[case("content//hello.md")]
#[case("C:/content/hello.md")]
fn test_validate_relative_path_rejects(#[case] input: &str) {
    assert!(
        validate_relative_path(input).is_err(),
        "{input:?} should be rejected"
    );
}
