/// End-to-end tests for the report pipeline: scan a real temporary tree,
/// render it and write the document, checking what a reader of the file
/// would see.
///
/// The client-side filter is exercised through `codemap_core::analysis::search`,
/// which holds the same decision logic as the embedded viewer script.
use codemap_core::analysis::filter_tree;
use codemap_core::scanner::scan;
use codemap_report::export::{write_csv, write_json, write_report};
use codemap_report::{render, OUTPUT_FILE_NAME};
use std::fs;
use std::io::Write;
use std::path::Path;
use tempfile::TempDir;

// ── Helpers ───────────────────────────────────────────────────────────────────

fn write_bytes(path: &Path, n: usize) {
    let mut f = fs::File::create(path).unwrap();
    f.write_all(&vec![0u8; n]).unwrap();
}

/// ```text
/// project/
///   docs/readme.md   (100 bytes)
///   src/app.ts       (300 bytes)
///   node_modules/x.js (ignored)
///   .git/HEAD         (ignored)
/// ```
fn make_project() -> TempDir {
    let tmp = TempDir::new().unwrap();
    let root = tmp.path();
    fs::create_dir_all(root.join("docs")).unwrap();
    fs::create_dir_all(root.join("src")).unwrap();
    fs::create_dir_all(root.join("node_modules")).unwrap();
    fs::create_dir_all(root.join(".git")).unwrap();
    write_bytes(&root.join("docs/readme.md"), 100);
    write_bytes(&root.join("src/app.ts"), 300);
    write_bytes(&root.join("node_modules/x.js"), 5_000);
    write_bytes(&root.join(".git/HEAD"), 20);
    tmp
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[test]
fn report_reflects_scan() {
    let tmp = make_project();
    let result = scan(tmp.path());
    let html = render(&result.root, &result.stats).unwrap();

    assert!(html.contains(r#"<span>Files</span><span class="stat-value">2</span>"#));
    assert!(html.contains(r#"<span>Directories</span><span class="stat-value">2</span>"#));
    assert!(html.contains(r#"<span>Total size</span><span class="stat-value">400 B</span>"#));
    assert!(html.contains("width:75%;background:#3178c6"));
    assert!(html.contains("width:25%;background:#083fa1"));
    assert!(html.contains(r#""name":"app.ts","size":300,"ext":".ts""#));
    assert!(!html.contains("x.js"));
    assert!(!html.contains("HEAD"));
}

#[test]
fn search_closure_on_scanned_tree() {
    let tmp = make_project();
    let result = scan(tmp.path());

    let outcome = filter_tree(&result.root, "app");
    assert_eq!(outcome.is_visible("src"), Some(true));
    assert_eq!(outcome.is_visible("src/app.ts"), Some(true));
    assert_eq!(outcome.is_visible("docs"), Some(false));
    assert_eq!(outcome.is_visible("docs/readme.md"), Some(false));

    let everything = filter_tree(&result.root, "");
    assert!(everything.rows.iter().all(|r| r.visible));
    assert_eq!(everything.rows.len(), 4);
}

#[test]
fn unchanged_tree_renders_identically() {
    let tmp = make_project();
    let first = scan(tmp.path());
    let second = scan(tmp.path());
    assert_eq!(
        render(&first.root, &first.stats).unwrap(),
        render(&second.root, &second.stats).unwrap()
    );
}

#[test]
fn empty_root_still_renders() {
    let tmp = TempDir::new().unwrap();
    let result = scan(&tmp.path().join("missing"));
    let html = render(&result.root, &result.stats).unwrap();

    assert!(html.contains(r#"<span>Files</span><span class="stat-value">0</span>"#));
    assert!(html.contains("No files scanned."));
    assert!(html.contains(r#""children":[]"#));
}

#[test]
fn report_and_exports_are_written() {
    let tmp = make_project();
    let out = TempDir::new().unwrap();
    let result = scan(tmp.path());
    let html = render(&result.root, &result.stats).unwrap();

    let report_path = out.path().join(OUTPUT_FILE_NAME);
    write_report(&report_path, &html).unwrap();
    assert_eq!(fs::read_to_string(&report_path).unwrap(), html);

    let csv_path = out.path().join("extensions.csv");
    write_csv(&csv_path, &result.stats).unwrap();
    let csv = fs::read_to_string(&csv_path).unwrap();
    assert!(csv.starts_with("extension,files,bytes,percent\n.ts,1,300,75.0\n"));

    let json_path = out.path().join("scan.json");
    write_json(&json_path, &result.root, &result.stats).unwrap();
    let json: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&json_path).unwrap()).unwrap();
    assert_eq!(json["stats"]["files"], 2);
    assert_eq!(json["root"]["size"], 400);
}
