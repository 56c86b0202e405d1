use crate::checks::{fn_check, prose_lines, violation, CheckContext, CheckList};
use crate::config::DOCUMENTED_ARTIFACTS;
use regex::Regex;
use std::path::{Component, Path, PathBuf};
use std::sync::LazyLock;

/// `[text](target)` with the text and the raw target captured.
static LINK: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"!?\[([^\]]*)\]\(([^)]+)\)").unwrap());

static INLINE_CODE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"`[^`]*`").unwrap());

pub fn checks() -> CheckList {
    vec![
        fn_check("Referenced files exist", referenced_files_exist),
        fn_check("Markdown link targets", markdown_link_targets),
    ]
}

/// Every artifact the README documents must exist in the root, and so must
/// any artifact the text mentions.
fn referenced_files_exist(ctx: &CheckContext) -> Vec<String> {
    let mut violations = Vec::new();
    for name in DOCUMENTED_ARTIFACTS {
        if ctx.config.root_dir.join(name).is_file() {
            continue;
        }
        let problem = if ctx.doc.contains(name) {
            format!("references `{name}` but the file does not exist")
        } else {
            format!("documents the repository layout but `{name}` does not exist")
        };
        violations.push(violation(
            &ctx.subject(),
            &problem,
            "Files named in the README must exist in the repository root.",
            &format!(
                "1. If `{name}` was renamed or moved, update the README.\n\
                 \x20        2. Run `git log --diff-filter=R -- '{name}'` to find renames."
            ),
        ));
    }
    violations
}

fn markdown_link_targets(ctx: &CheckContext) -> Vec<String> {
    let doc_dir = ctx.doc.path.parent().unwrap_or(Path::new("."));
    let subject = ctx.subject();
    let mut violations = Vec::new();

    for (line_no, line) in prose_lines(ctx.doc) {
        let visible = INLINE_CODE.replace_all(line, "");
        for caps in LINK.captures_iter(&visible) {
            let (Some(text), Some(raw)) = (caps.get(1), caps.get(2)) else {
                continue;
            };
            let Some(target) = local_target(raw.as_str()) else {
                continue;
            };
            if resolve(doc_dir, target).exists() {
                continue;
            }
            violations.push(violation(
                &format!("{subject}:{line_no}"),
                &format!("links `{}` to `{target}`, which does not exist", text.as_str()),
                "Relative links in the README must resolve to files in the repository.",
                "Point the link at the renamed file, or drop it if the file was removed.",
            ));
        }
    }

    violations
}

/// The file part of a relative link, without fragment or title. External,
/// anchor-only and templated targets yield `None`.
fn local_target(raw: &str) -> Option<&str> {
    let raw = raw.trim();
    let external = ["http://", "https://", "mailto:", "#"]
        .iter()
        .any(|prefix| raw.starts_with(prefix));
    if external || raw.contains(['<', '*']) {
        return None;
    }
    let path = raw.split('#').next().unwrap_or(raw);
    let path = path
        .split_once(" \"")
        .or_else(|| path.split_once(" '"))
        .map_or(path, |(file, _title)| file)
        .trim();
    (!path.is_empty()).then_some(path)
}

/// Joins `target` onto `dir` and folds `.`/`..` segments lexically.
fn resolve(dir: &Path, target: &str) -> PathBuf {
    dir.join(target)
        .components()
        .fold(PathBuf::new(), |mut resolved, component| {
            match component {
                Component::CurDir => {}
                Component::ParentDir => {
                    resolved.pop();
                }
                other => resolved.push(other),
            }
            resolved
        })
}
