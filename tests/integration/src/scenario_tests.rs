//! Scenario tests across the whole stack
//!
//! Each test loads a real configuration file, runs the engine against the
//! directory-backed store and checks the files and documents left behind.

use std::sync::Arc;

use docsync_content::{FrontMatter, meta_export};
use docsync_core::{ItemStatus, SyncEngine, SyncOptions};
use docsync_fs::NormalizedPath;
use docsync_meta::load_config;
use docsync_store::{
    CredentialSource, Credentials, DocumentId, DocumentStore, LocalStore, connect,
};
use docsync_test_utils::{ContentTree, HELLO_POST};
use pretty_assertions::assert_eq;
use serde_json::json;

const CMS_CONFIG: &str = r#"
backend:
  name: git-gateway
  firebase:
    index_data:
      posts: md
      settings: json
collections:
  - name: posts
    label: Posts
    folder: content/posts
  - name: settings
    label: Settings
    files:
      - file: content/site.json
        name: site
  - name: pages
    files:
      - file: about.md
"#;

/// A content tree with the CMS config, a key file and one file per
/// collection.
fn site() -> ContentTree {
    let tree = ContentTree::new();
    tree.write_config(CMS_CONFIG);
    tree.write_key("blog");
    tree.write_file("content/posts/hello.md", HELLO_POST);
    tree.write_file("content/site.json", "{\"title\": \"Site\", \"lang\": \"en\"}");
    tree.write_file("about.md", "About us");
    tree
}

fn open_store(tree: &ContentTree) -> LocalStore {
    let source = CredentialSource::KeyFile(tree.path("key.json"));
    let credentials = Credentials::load(source).unwrap();
    connect("blog", &credentials, &tree.path("store")).unwrap()
}

fn engine(tree: &ContentTree, store: &LocalStore, options: SyncOptions) -> SyncEngine {
    let config = load_config(&NormalizedPath::new(tree.path("config.yml"))).unwrap();
    let store: Arc<dyn DocumentStore> = Arc::new(store.clone());
    SyncEngine::new(NormalizedPath::new(tree.root()), config, store, options)
}

fn force() -> SyncOptions {
    SyncOptions {
        force: true,
        ..SyncOptions::default()
    }
}

#[tokio::test]
async fn test_export_stores_every_collection() {
    let tree = site();
    let store = open_store(&tree);

    let report = engine(&tree, &store, SyncOptions::default())
        .export()
        .await
        .unwrap();

    assert!(report.success(), "{:?}", report.failures().collect::<Vec<_>>());
    let ids: Vec<_> = report.outcomes.iter().filter_map(|o| o.id.as_deref()).collect();
    assert_eq!(
        ids,
        vec![
            "posts/content___posts___hello.md",
            "settings/content___site.json",
            "pages/about.md",
        ]
    );

    let hello = store
        .get(&DocumentId::new("posts", "content/posts/hello.md").unwrap())
        .await
        .unwrap()
        .unwrap();
    assert_eq!(hello.data, Some(json!({"title": "Hi"})));
    assert_eq!(hello.slug, "hello");

    let site_doc = store
        .get(&DocumentId::new("settings", "content/site.json").unwrap())
        .await
        .unwrap()
        .unwrap();
    assert_eq!(site_doc.data, Some(json!({"title": "Site", "lang": "en"})));

    let about = store
        .get(&DocumentId::new("pages", "about.md").unwrap())
        .await
        .unwrap()
        .unwrap();
    assert_eq!(about.data, None);
}

#[tokio::test]
async fn test_second_export_only_updates() {
    let tree = site();
    let store = open_store(&tree);
    let engine = engine(&tree, &store, SyncOptions::default());

    engine.export().await.unwrap();
    tree.write_file("about.md", "About us, revised");
    let report = engine.export().await.unwrap();

    assert_eq!(report.updated(), 3);
    assert_eq!(report.created(), 0);
    assert_eq!(store.list("pages").await.unwrap().len(), 1);

    let about = store
        .get(&DocumentId::new("pages", "about.md").unwrap())
        .await
        .unwrap()
        .unwrap();
    assert_eq!(about.content, b"About us, revised");
}

#[tokio::test]
async fn test_round_trip_into_empty_outdir() {
    let tree = site();
    let store = open_store(&tree);
    engine(&tree, &store, SyncOptions::default())
        .export()
        .await
        .unwrap();

    let outdir = NormalizedPath::new(tree.path("out"));
    let report = engine(&tree, &store, force()).import(&outdir).await.unwrap();

    assert_eq!(report.written(), 3);
    tree.assert_file_eq("out/content/posts/hello.md", HELLO_POST);
    tree.assert_file_eq("out/content/site.json", tree.read("content/site.json"));
    tree.assert_file_eq("out/about.md", "About us");
}

#[tokio::test]
async fn test_meta_export_matches_front_matter() {
    let tree = ContentTree::new();
    tree.write_config("collections:\n  - name: posts\n    folder: content/posts\n    extension: mdx\n");
    tree.write_key("blog");
    let source = "---\ntitle: Hi\ntags:\n  - a\n  - b\ndraft: false\n---\n# Heading\n\nBody text\n";
    tree.write_file("content/posts/hello.mdx", source);
    let store = open_store(&tree);
    engine(&tree, &store, SyncOptions::default())
        .export()
        .await
        .unwrap();

    let options = SyncOptions {
        force: true,
        meta: true,
        ..SyncOptions::default()
    };
    let outdir = NormalizedPath::new(tree.path("out"));
    engine(&tree, &store, options).import(&outdir).await.unwrap();

    let written = tree.read_text("out/content/posts/hello.mdx");
    assert_eq!(written, meta_export(source).unwrap());

    let (declaration, body) = written.split_once("\n\n").unwrap();
    let meta: serde_json::Value =
        serde_json::from_str(declaration.trim_start_matches("export const meta = ")).unwrap();
    let parsed = FrontMatter::split(source).parse().unwrap();
    assert_eq!(meta, parsed.data);
    assert_eq!(body, parsed.body);
}

#[tokio::test]
async fn test_explicit_path_mismatch_fails_only_that_item() {
    let tree = site();
    let store = open_store(&tree);
    engine(&tree, &store, SyncOptions::default())
        .export()
        .await
        .unwrap();

    let id = DocumentId::new("pages", "about.md").unwrap();
    let mut about = store.get(&id).await.unwrap().unwrap();
    about.path = "other.md".into();
    store.update(&id, &about).await.unwrap();

    let outdir = NormalizedPath::new(tree.path("out"));
    let report = engine(&tree, &store, force()).import(&outdir).await.unwrap();

    assert!(!report.success());
    assert_eq!(report.failed(), 1);
    assert_eq!(report.written(), 2);
    let failed = report.failures().next().unwrap();
    assert_eq!(failed.id.as_deref(), Some("pages/about.md"));
    assert!(matches!(failed.status, ItemStatus::Failed(_)));
    tree.assert_file_not_exists("out/about.md");
}

#[tokio::test]
async fn test_import_without_force_keeps_local_edits() {
    let tree = site();
    let store = open_store(&tree);
    engine(&tree, &store, SyncOptions::default())
        .export()
        .await
        .unwrap();

    let outdir = NormalizedPath::new(tree.path("out"));
    engine(&tree, &store, force()).import(&outdir).await.unwrap();
    tree.write_file("out/about.md", "edited offline");

    let report = engine(&tree, &store, SyncOptions::default())
        .import(&outdir)
        .await
        .unwrap();

    assert!(report.success());
    assert_eq!(report.skipped(), 3);
    tree.assert_file_eq("out/about.md", "edited offline");
}
