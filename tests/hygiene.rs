//! Hygiene: scans `src/` for patterns that crash the client or swallow
//! errors. Test files (`*_test.rs`) are exempt. Budgets only ever shrink.

use std::fs;
use std::path::Path;

/// (pattern, budget, why it is banned)
const BUDGETS: &[(&str, usize, &str)] = &[
    (".unwrap()", 0, "panics on the happy path's failure"),
    (".expect(", 0, "panics on the happy path's failure"),
    ("panic!(", 0, "crashes the interaction"),
    ("unreachable!(", 0, "crashes the interaction"),
    ("todo!(", 0, "unfinished code"),
    ("unimplemented!(", 0, "unfinished code"),
    ("let _ =", 0, "discards an error without looking at it"),
    (".ok()", 0, "discards an error without looking at it"),
    ("#[allow(dead_code)]", 0, "hides unused code"),
];

struct SourceFile {
    path: String,
    content: String,
}

fn source_files() -> Vec<SourceFile> {
    let mut files = Vec::new();
    collect_rs_files(Path::new("src"), &mut files);
    files
}

fn collect_rs_files(dir: &Path, out: &mut Vec<SourceFile>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            collect_rs_files(&path, out);
            continue;
        }
        let path_str = path.to_string_lossy().to_string();
        if !path_str.ends_with(".rs") || path_str.ends_with("_test.rs") {
            continue;
        }
        if let Ok(content) = fs::read_to_string(&path) {
            out.push(SourceFile { path: path_str, content });
        }
    }
}

fn hits(files: &[SourceFile], pattern: &str) -> Vec<(String, usize)> {
    files
        .iter()
        .filter_map(|file| {
            let count = file.content.lines().filter(|line| line.contains(pattern)).count();
            (count > 0).then(|| (file.path.clone(), count))
        })
        .collect()
}

#[test]
fn source_tree_is_found() {
    let files = source_files();
    assert!(files.iter().any(|f| f.path.ends_with("screen.rs")), "run from the crate root");
}

#[test]
fn pattern_budgets_hold() {
    let files = source_files();
    let mut failures = Vec::new();
    for &(pattern, budget, why) in BUDGETS {
        let found = hits(&files, pattern);
        let count: usize = found.iter().map(|(_, c)| c).sum();
        if count > budget {
            let detail: Vec<String> = found.iter().map(|(path, c)| format!("    {path}: {c}")).collect();
            failures.push(format!("`{pattern}` ({why}): found {count}, max {budget}\n{}", detail.join("\n")));
        }
    }
    assert!(failures.is_empty(), "hygiene budgets exceeded:\n{}", failures.join("\n"));
}

#[test]
fn every_module_test_file_is_wired() {
    let files = source_files();
    for file in &files {
        let Some(stem) = Path::new(&file.path).file_stem().and_then(|s| s.to_str()) else {
            continue;
        };
        let sibling = Path::new(&file.path).with_file_name(format!("{stem}_test.rs"));
        if sibling.exists() {
            let wiring = format!("#[path = \"{stem}_test.rs\"]");
            assert!(file.content.contains(&wiring), "{} has {} but does not include it", file.path, sibling.display());
        }
    }
}
