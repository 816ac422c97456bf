//! Hygiene — source-level budgets for the dashboard crate.
//!
//! Browser glue must degrade silently instead of crashing the page, so the
//! production sources under `src/` carry zero panicking shortcuts and zero
//! silently discarded results. Sibling `*_test.rs` files are exempt. Budgets
//! only ever go down.

use std::fs;
use std::path::Path;

struct Budget {
    pattern: &'static str,
    max: usize,
    why: &'static str,
}

const UNWRAP: Budget = Budget { pattern: ".unwrap()", max: 0, why: "panics on None/Err" };
const EXPECT: Budget = Budget { pattern: ".expect(", max: 0, why: "panics on None/Err" };
const PANIC: Budget = Budget { pattern: "panic!(", max: 0, why: "aborts the page" };
const UNREACHABLE: Budget = Budget { pattern: "unreachable!(", max: 0, why: "aborts the page" };
const TODO: Budget = Budget { pattern: "todo!(", max: 0, why: "unfinished stub" };
const UNIMPLEMENTED: Budget = Budget { pattern: "unimplemented!(", max: 0, why: "unfinished stub" };
const SILENT_DISCARD: Budget = Budget { pattern: "let _ =", max: 0, why: "drops a result unread" };
const DOT_OK: Budget = Budget { pattern: ".ok()", max: 0, why: "drops the error unread" };
const ALLOW_DEAD_CODE: Budget = Budget { pattern: "#[allow(dead_code)]", max: 0, why: "hides unused code" };

fn production_sources(dir: &Path, out: &mut Vec<(String, String)>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            production_sources(&path, out);
            continue;
        }
        let name = path.to_string_lossy().to_string();
        if !name.ends_with(".rs") || name.ends_with("_test.rs") {
            continue;
        }
        if let Ok(content) = fs::read_to_string(&path) {
            out.push((name, content));
        }
    }
}

fn hits(budget: &Budget) -> Vec<(String, usize)> {
    let mut files = Vec::new();
    production_sources(&Path::new(env!("CARGO_MANIFEST_DIR")).join("src"), &mut files);
    files
        .into_iter()
        .filter_map(|(path, content)| {
            let count = content
                .lines()
                .filter(|line| !line.trim_start().starts_with("//"))
                .filter(|line| line.contains(budget.pattern))
                .count();
            (count > 0).then_some((path, count))
        })
        .collect()
}

fn assert_within(budget: &Budget) {
    let found = hits(budget);
    let total: usize = found.iter().map(|(_, c)| c).sum();
    let listing = found.iter().map(|(p, c)| format!("  {p}: {c}")).collect::<Vec<_>>().join("\n");
    assert!(
        total <= budget.max,
        "`{}` ({}) budget exceeded: found {total}, max {}.\n{listing}",
        budget.pattern,
        budget.why,
        budget.max
    );
}

#[test]
fn sources_are_scanned() {
    let mut files = Vec::new();
    production_sources(&Path::new(env!("CARGO_MANIFEST_DIR")).join("src"), &mut files);
    assert!(files.iter().any(|(path, _)| path.ends_with("lib.rs")));
    assert!(files.iter().all(|(path, _)| !path.ends_with("_test.rs")));
}

#[test]
fn unwrap_budget() {
    assert_within(&UNWRAP);
}

#[test]
fn expect_budget() {
    assert_within(&EXPECT);
}

#[test]
fn panic_budget() {
    assert_within(&PANIC);
}

#[test]
fn unreachable_budget() {
    assert_within(&UNREACHABLE);
}

#[test]
fn todo_budget() {
    assert_within(&TODO);
}

#[test]
fn unimplemented_budget() {
    assert_within(&UNIMPLEMENTED);
}

#[test]
fn silent_discard_budget() {
    assert_within(&SILENT_DISCARD);
}

#[test]
fn dot_ok_budget() {
    assert_within(&DOT_OK);
}

#[test]
fn allow_dead_code_budget() {
    assert_within(&ALLOW_DEAD_CODE);
}
