//! Rewriting of hardcoded local backend URLs in frontend sources.
//!
//! Responsibilities:
//! - Replace `http://localhost:<port>` API and backend references with the
//!   `API_BASE_URL` / `BACKEND_URL` exports of the endpoint config module.
//! - Insert the config module import after the last existing `import` line.
//! - Walk a source root and rewrite every `.jsx` then `.js` file.
//!
//! Does NOT handle:
//! - Parsing JavaScript. Matching is textual.
//! - Files that already reference `API_BASE_URL` or `API_CONFIG`; they are skipped.
//!
//! Invariants:
//! - Rules apply in a fixed order, most specific first.
//! - A file is written only when its content changed.
//! - A failure on one file is reported and does not stop the walk.

use std::fs;
use std::path::{Component, Path, PathBuf};
use std::sync::LazyLock;

use regex::{NoExpand, Regex};
use thiserror::Error;
use walkdir::WalkDir;

use crate::constants::{
    API_BASE_URL_IDENT, API_CONFIG_MODULE, BACKEND_URL_IDENT, REWRITE_EXTENSIONS,
};

/// Errors that abort a rewrite run.
#[derive(Error, Debug)]
pub enum RewriteError {
    #[error("Source root not found: {0}")]
    RootNotFound(PathBuf),

    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// A regex rule and its replacement. `expand` enables `${n}` group references.
struct Rule {
    pattern: Regex,
    replacement: &'static str,
    expand: bool,
}

static RULES: LazyLock<Vec<Rule>> = LazyLock::new(|| {
    let rule = |pattern: &str, replacement: &'static str, expand: bool| Rule {
        pattern: Regex::new(pattern).expect("rewrite pattern is valid"),
        replacement,
        expand,
    };
    vec![
        rule(
            r#"const\s+baseURL\s*=\s*["']http://localhost:\d+/api/projects["'];?"#,
            "const baseURL = `${API_BASE_URL}/projects`;",
            false,
        ),
        rule(
            r#"const\s+baseURL\s*=\s*["']http://localhost:\d+/api["'];?"#,
            "const baseURL = API_BASE_URL;",
            false,
        ),
        rule(
            r#"const\s+url\s*=\s*["']http://localhost:\d+/api/[^"']+["'];?"#,
            "const url = `${API_BASE_URL}` + url;",
            false,
        ),
        rule(
            r"`http://localhost:\d+/api/([^`]+)`",
            "`$${API_BASE_URL}/${1}`",
            true,
        ),
        rule(r"`http://localhost:\d+\$\{", "`${BACKEND_URL}${", false),
    ]
});

/// Plain substring fallbacks applied after the regex rules.
const LITERAL_RULES: &[(&str, &str)] = &[
    ("http://localhost:5000/api", "${API_BASE_URL}"),
    ("http://localhost:5001/api", "${API_BASE_URL}"),
    ("http://localhost:5000", "${BACKEND_URL}"),
    ("http://localhost:5001", "${BACKEND_URL}"),
];

/// Compute the specifier for the config module as seen from `path`.
///
/// `root` is the directory holding `config/`. Paths outside `root` are measured
/// from their last `src` component, or assumed one level deep without one.
pub fn import_path_for(root: &Path, path: &Path) -> String {
    // Directories between the root and the file name.
    let depth = match path.strip_prefix(root) {
        Ok(relative) => relative.components().count().saturating_sub(1),
        Err(_) => depth_below_last_src(path),
    };
    if depth == 0 {
        format!("./{API_CONFIG_MODULE}")
    } else {
        format!("{}{API_CONFIG_MODULE}", "../".repeat(depth))
    }
}

fn depth_below_last_src(path: &Path) -> usize {
    let components: Vec<Component<'_>> = path.components().collect();
    match components.iter().rposition(|c| c.as_os_str() == "src") {
        Some(src_index) => components.len().saturating_sub(src_index + 2),
        None => 1,
    }
}

/// Rewrite one file's content.
///
/// Returns `None` when the file is skipped or nothing matched.
pub fn rewrite_source(content: &str, import_path: &str) -> Option<String> {
    if content.contains(API_BASE_URL_IDENT) || content.contains("API_CONFIG") {
        return None;
    }

    let mut rewritten = content.to_string();
    for rule in RULES.iter() {
        rewritten = if rule.expand {
            rule.pattern
                .replace_all(&rewritten, rule.replacement)
                .into_owned()
        } else {
            rule.pattern
                .replace_all(&rewritten, NoExpand(rule.replacement))
                .into_owned()
        };
    }
    for (from, to) in LITERAL_RULES {
        rewritten = rewritten.replace(from, to);
    }

    if rewritten == content {
        return None;
    }

    let uses_exports =
        rewritten.contains(API_BASE_URL_IDENT) || rewritten.contains(BACKEND_URL_IDENT);
    if rewritten.contains("import") && uses_exports {
        let import_line =
            format!("import {{ {API_BASE_URL_IDENT}, {BACKEND_URL_IDENT} }} from '{import_path}';");
        if !rewritten.contains(&import_line) {
            rewritten = insert_after_imports(&rewritten, &import_line);
        }
    }

    Some(rewritten)
}

/// Insert `line` and a blank line after the last line starting with `import `.
/// No-op without imports.
fn insert_after_imports(content: &str, line: &str) -> String {
    let mut lines: Vec<&str> = content.split('\n').collect();
    let import_end = lines
        .iter()
        .rposition(|l| l.starts_with("import "))
        .map(|i| i + 1);

    match import_end {
        Some(idx) => {
            lines.insert(idx, "");
            lines.insert(idx, line);
            lines.join("\n")
        }
        None => content.to_string(),
    }
}

/// Outcome of a rewrite run.
#[derive(Debug, Default)]
pub struct RewriteReport {
    /// Files whose content was (or, in a dry run, would be) rewritten.
    pub fixed: Vec<PathBuf>,
    /// Files that could not be read or written.
    pub failed: Vec<(PathBuf, String)>,
    pub scanned: usize,
}

/// Rewrite every `.jsx` and `.js` file under `root`.
///
/// `.jsx` files are processed before `.js` files; within an extension, paths
/// are visited in file-name order. With `dry_run`, nothing is written.
///
/// # Errors
///
/// Returns `RewriteError::RootNotFound` if `root` is not a directory.
/// Per-file failures are collected in the report.
pub fn rewrite_tree(root: &Path, dry_run: bool) -> Result<RewriteReport, RewriteError> {
    if !root.is_dir() {
        return Err(RewriteError::RootNotFound(root.to_path_buf()));
    }

    let mut report = RewriteReport::default();
    for ext in REWRITE_EXTENSIONS {
        for path in source_files(root, ext) {
            report.scanned += 1;
            match rewrite_file(root, &path, dry_run) {
                Ok(true) => {
                    tracing::info!(path = %path.display(), dry_run, "rewrote file");
                    report.fixed.push(path);
                }
                Ok(false) => {
                    tracing::trace!(path = %path.display(), "no changes");
                }
                Err(e) => {
                    tracing::warn!(path = %path.display(), error = %e, "failed to rewrite file");
                    report.failed.push((path, e.to_string()));
                }
            }
        }
    }

    Ok(report)
}

fn source_files(root: &Path, ext: &str) -> Vec<PathBuf> {
    WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(e) => {
                tracing::warn!(error = %e, "skipping unreadable entry");
                None
            }
        })
        .filter(|e| e.file_type().is_file())
        .filter(|e| e.path().extension().is_some_and(|x| x == ext))
        .map(|e| e.into_path())
        .collect()
}

/// Rewrite a single file. Returns whether the content changed.
fn rewrite_file(root: &Path, path: &Path, dry_run: bool) -> Result<bool, RewriteError> {
    let content = fs::read_to_string(path).map_err(|source| RewriteError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let Some(rewritten) = rewrite_source(&content, &import_path_for(root, path)) else {
        return Ok(false);
    };

    if !dry_run {
        fs::write(path, rewritten).map_err(|source| RewriteError::Write {
            path: path.to_path_buf(),
            source,
        })?;
    }
    Ok(true)
}
