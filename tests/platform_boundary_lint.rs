//! Architecture enforcement lint - browser globals stay behind the platform adapter.
//!
//! Components and the theme controller must go through `Platform` so they
//! run unchanged on the server (SSR) and in tests. This test scans `src/`
//! and flags any direct use of the browser bindings outside
//! `src/platform/`:
//! - `web_sys::` (DOM, storage, events)
//! - `js_sys::` (timers, functions)
//! - `wasm_bindgen::` (closures, casts)

use std::fs;
use std::path::Path;
use walkdir::WalkDir;

/// Patterns that indicate direct browser access
const DISALLOWED_PATTERNS: &[(&str, &str)] = &[
    ("web_sys::", "Add a method to the Platform trait instead"),
    (
        "js_sys::",
        "Schedule work through Platform::schedule_repaint or a new Platform method",
    ),
    ("wasm_bindgen::", "Keep JS interop inside src/platform/browser.rs"),
];

/// Directory allowed to touch the browser directly
const ALLOWED_DIR: &str = "platform";

fn is_allowed(path: &Path, src_dir: &Path) -> bool {
    path.strip_prefix(src_dir)
        .ok()
        .and_then(|rel| rel.components().next())
        .is_some_and(|first| first.as_os_str() == ALLOWED_DIR)
}

fn analyze_file(path: &Path) -> Vec<(String, String, String)> {
    let content = match fs::read_to_string(path) {
        Ok(c) => c,
        Err(_) => return vec![],
    };

    let mut violations = Vec::new();

    for (line_idx, line) in content.lines().enumerate() {
        let code = line.split("//").next().unwrap_or("");
        for (pattern, suggestion) in DISALLOWED_PATTERNS {
            if code.contains(pattern) {
                violations.push((
                    format!("{}:{}", path.display(), line_idx + 1),
                    (*pattern).to_string(),
                    (*suggestion).to_string(),
                ));
            }
        }
    }

    violations
}

#[test]
fn browser_apis_only_in_platform_adapter() {
    let src_dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("src");

    let mut all_violations = Vec::new();

    for entry in WalkDir::new(&src_dir)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.path().extension().is_some_and(|ext| ext == "rs"))
    {
        if is_allowed(entry.path(), &src_dir) {
            continue;
        }
        all_violations.extend(analyze_file(entry.path()));
    }

    if !all_violations.is_empty() {
        let mut error_msg = String::from(
            "\n\nARCHITECTURE VIOLATION: browser APIs used outside src/platform/\n\n\
            Components must reach the page through the Platform trait so the\n\
            same code runs in the browser, on the server and in tests.\n\n\
            Violations found:\n\n",
        );

        for (location, pattern, suggestion) in &all_violations {
            error_msg.push_str(&format!("  {} \n", location));
            error_msg.push_str(&format!("    Found: {}\n", pattern));
            error_msg.push_str(&format!("    Fix: {}\n\n", suggestion));
        }

        panic!("{}", error_msg);
    }
}

#[test]
fn browser_platform_is_wasm_only() {
    let platform_mod = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("src")
        .join("platform")
        .join("mod.rs");

    let content = fs::read_to_string(&platform_mod).expect("Failed to read platform/mod.rs");

    assert!(
        content.contains("#[cfg(target_arch = \"wasm32\")]\nmod browser;"),
        "the web-sys adapter must only be compiled for wasm32"
    );
}
