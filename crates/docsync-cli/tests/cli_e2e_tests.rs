//! CLI end-to-end tests that invoke the compiled `docsync` binary.

use assert_cmd::Command;
use docsync_test_utils::{ContentTree, HELLO_POST};
use predicates::prelude::*;

const POSTS_CONFIG: &str = "collections:\n  - name: posts\n    folder: content/posts\n";

/// A `docsync` command running inside `tree` with a clean environment.
fn docsync(tree: &ContentTree) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("docsync"));
    cmd.current_dir(tree.root())
        .env_remove("GOOGLE_APPLICATION_CREDENTIALS")
        .env_remove("DOCSYNC_STORE_ROOT")
        .env_remove("RUST_LOG");
    cmd
}

fn export(tree: &ContentTree) -> Command {
    let mut cmd = docsync(tree);
    cmd.args([
        "export", "blog", "-c", "config.yml", "-k", "key.json", "--store", "store",
    ]);
    cmd
}

fn import(tree: &ContentTree) -> Command {
    let mut cmd = docsync(tree);
    cmd.args([
        "import", "blog", "-c", "config.yml", "-k", "key.json", "--store", "store", "-o", "out",
    ]);
    cmd
}

fn posts_tree() -> ContentTree {
    let tree = ContentTree::new();
    tree.write_config(POSTS_CONFIG);
    tree.write_key("blog");
    tree.write_file("content/posts/hello.md", HELLO_POST);
    tree
}

// ============================================================================
// Usage errors
// ============================================================================

#[test]
fn test_help_exits_zero() {
    let tree = ContentTree::new();
    docsync(&tree)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("docsync"));
}

#[test]
fn test_no_command_exits_one() {
    let tree = ContentTree::new();
    docsync(&tree)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Missing command"));
}

#[test]
fn test_unknown_flag_exits_one() {
    let tree = ContentTree::new();
    docsync(&tree).args(["export", "--bogus"]).assert().code(1);
}

#[test]
fn test_missing_config_exits_one() {
    let tree = posts_tree();
    docsync(&tree)
        .args(["export", "blog", "-k", "key.json"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("--config"));
}

#[test]
fn test_missing_project_exits_one() {
    let tree = posts_tree();
    docsync(&tree)
        .args(["export", "-c", "config.yml", "-k", "key.json"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("project"));
}

#[test]
fn test_missing_credentials_exits_one() {
    let tree = posts_tree();
    docsync(&tree)
        .args(["export", "blog", "-c", "config.yml", "--store", "store"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("GOOGLE_APPLICATION_CREDENTIALS"));
}

#[test]
fn test_missing_outdir_exits_one() {
    let tree = posts_tree();
    docsync(&tree)
        .args(["import", "blog", "-c", "config.yml", "-k", "key.json"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("--outdir"));
}

#[test]
fn test_invalid_config_exits_one() {
    let tree = posts_tree();
    tree.write_config("collections:\n  - name: posts\n");
    export(&tree)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("neither"));
}

// ============================================================================
// Export / import
// ============================================================================

#[test]
fn test_export_then_import_round_trip() {
    let tree = posts_tree();

    export(&tree)
        .assert()
        .success()
        .stdout(predicate::str::contains("1 created"));
    tree.assert_file_exists("store/blog/posts/content___posts___hello.md.json");

    export(&tree)
        .assert()
        .success()
        .stdout(predicate::str::contains("1 updated"));

    import(&tree).arg("-F").assert().success();
    tree.assert_file_eq("out/content/posts/hello.md", HELLO_POST);
}

#[test]
fn test_credentials_from_environment() {
    let tree = posts_tree();
    let key = tree.path("key.json");
    docsync(&tree)
        .args(["export", "blog", "-c", "config.yml", "--store", "store"])
        .env("GOOGLE_APPLICATION_CREDENTIALS", key)
        .assert()
        .success();
}

#[test]
fn test_store_root_from_environment() {
    let tree = posts_tree();
    docsync(&tree)
        .args(["export", "blog", "-c", "config.yml", "-k", "key.json"])
        .env("DOCSYNC_STORE_ROOT", tree.path("env-store"))
        .assert()
        .success();
    tree.assert_file_exists("env-store/blog/posts/content___posts___hello.md.json");
}

#[test]
fn test_import_missing_directory_without_force() {
    let tree = posts_tree();
    export(&tree).assert().success();

    import(&tree)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("does not exist"));
    tree.assert_file_not_exists("out");
}

#[test]
fn test_import_skips_existing_file() {
    let tree = posts_tree();
    export(&tree).assert().success();
    tree.write_file("out/content/posts/hello.md", "local edit");

    import(&tree)
        .assert()
        .success()
        .stdout(predicate::str::contains("⚠"));
    tree.assert_file_eq("out/content/posts/hello.md", "local edit");
}

#[test]
fn test_import_meta_export() {
    let tree = ContentTree::new();
    tree.write_config(
        "collections:\n  - name: posts\n    folder: content/posts\n    extension: mdx\n",
    );
    tree.write_key("blog");
    tree.write_file("content/posts/hello.mdx", HELLO_POST);
    export(&tree).assert().success();

    import(&tree).args(["-m", "-F"]).assert().success();
    tree.assert_file_eq(
        "out/content/posts/hello.mdx",
        "export const meta = {\n  \"title\": \"Hi\"\n}\n\nBody text",
    );
}

#[test]
fn test_import_path_mismatch_exits_one() {
    let tree = ContentTree::new();
    tree.write_config("collections:\n  - name: pages\n    files:\n      - file: about.md\n");
    tree.write_key("blog");
    tree.write_file(
        "store/blog/pages/about.md.json",
        r#"{"content": "QWJvdXQ=", "path": "other.md", "slug": "other", "raw": "QWJvdXQ="}"#,
    );
    tree.create_dir("out");

    import(&tree)
        .assert()
        .code(1)
        .stdout(predicate::str::contains("✗").and(predicate::str::contains("other.md")));
    tree.assert_file_not_exists("out/about.md");
}

#[test]
fn test_verbose_prints_arguments() {
    let tree = posts_tree();
    export(&tree)
        .arg("-v")
        .assert()
        .success()
        .stdout(predicate::str::contains("concurrency").and(predicate::str::contains("✔")))
        .stderr(predicate::str::contains("Verbose mode enabled"));
}

#[test]
fn test_verbose_import_distinguishes_overwrites() {
    let tree = posts_tree();
    export(&tree).assert().success();
    tree.write_file("out/content/posts/hello.md", "local edit");

    import(&tree)
        .args(["-F", "-v"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("overwritten")
                .and(predicate::str::contains("1 overwritten")),
        );
    tree.assert_file_eq("out/content/posts/hello.md", HELLO_POST);
}
