use crate::checks::{fn_check, required, violation, CheckContext, CheckList};
use regex::Regex;
use std::sync::LazyLock;

static CJK_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[\x{4e00}-\x{9fff}]+").unwrap());

pub const CHARSET_PHRASES: &[&str] = &["诈骗合约", "教育目的"];

pub fn checks() -> CheckList {
    vec![
        fn_check("File exists", file_exists),
        fn_check("File not empty", file_not_empty),
        fn_check("UTF-8 CJK content", cjk_content),
        required(
            "Scam-contract and education phrases",
            CHARSET_PHRASES,
            "The document must identify itself as a scam-contract analysis for educational purposes.",
        ),
        fn_check("Unix line endings", unix_line_endings),
        fn_check("Ends with newline", ends_with_newline),
    ]
}

/// Missing paths and directories are reported as setup failures by
/// `run_group` before any check runs.
fn file_exists(ctx: &CheckContext) -> Vec<String> {
    if ctx.doc.path.is_file() {
        return vec![];
    }
    vec![violation(
        &ctx.subject(),
        "is not a regular file in the repository root",
        "The document must exist as a plain file.",
        "Restore the file (not a directory or dangling link).",
    )]
}

fn file_not_empty(ctx: &CheckContext) -> Vec<String> {
    let mut violations = Vec::new();
    if ctx.doc.content.is_empty() {
        violations.push(violation(
            &ctx.subject(),
            "is empty",
            "The document must not be empty.",
            "Restore the document content.",
        ));
    }
    if ctx.doc.lines.len() <= 1 {
        violations.push(violation(
            &ctx.subject(),
            "has a single line",
            "The document must contain multiple lines.",
            "Restore the full document with its sections.",
        ));
    }
    violations
}

fn cjk_content(ctx: &CheckContext) -> Vec<String> {
    if CJK_RUN.is_match(&ctx.doc.content) {
        return vec![];
    }
    vec![violation(
        &ctx.subject(),
        "contains no Chinese characters",
        "The document is written in Chinese and must survive as UTF-8.",
        "Re-save the file as UTF-8 without transcoding.",
    )]
}

fn unix_line_endings(ctx: &CheckContext) -> Vec<String> {
    let Some(line) = ctx.doc.lines.iter().position(|l| l.contains('\r')) else {
        return vec![];
    };
    vec![violation(
        &format!("{}:{}", ctx.subject(), line + 1),
        "contains a carriage return",
        "Files use Unix line endings (LF only).",
        "Convert line endings, e.g. `dos2unix`, and set `core.autocrlf=input`.",
    )]
}

fn ends_with_newline(ctx: &CheckContext) -> Vec<String> {
    if ctx.doc.content.ends_with('\n') {
        return vec![];
    }
    vec![violation(
        &format!("{}:{}", ctx.subject(), ctx.doc.lines.len()),
        "does not end with a newline",
        "Files must terminate with a trailing newline.",
        "Append a newline after the last line.",
    )]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checks::run_named;
    use crate::config::LinterConfig;
    use crate::suite::{self, CheckGroup, GroupOutcome};

    #[test]
    fn missing_file_never_reaches_the_existence_check() {
        let root = tempfile::tempdir().unwrap();
        let config = LinterConfig::from_root(root.path());
        let report = suite::run_group(CheckGroup::Structure, &config);
        assert!(matches!(report.outcome, GroupOutcome::SetupFailed { .. }));
        assert!(report.result("File exists").is_none());

        let unbacked = run_named(checks(), "File exists", "README.md", "# 标题\n");
        assert!(!unbacked.passed);
    }

    #[test]
    fn empty_and_single_line_documents_fail() {
        let empty = run_named(checks(), "File not empty", "README.md", "");
        assert_eq!(empty.violations.len(), 2);
        assert!(empty.violations[0].starts_with("README.md is empty."));

        let single = run_named(checks(), "File not empty", "README.md", "# 标题");
        assert_eq!(single.violations.len(), 1);
        assert!(single.violations[0].contains("has a single line"));

        assert!(run_named(checks(), "File not empty", "README.md", "# 标题\n").passed);
    }

    #[test]
    fn latin_only_text_fails_cjk_check() {
        let result = run_named(checks(), "UTF-8 CJK content", "README.md", "# Title\n\nplain text\n");
        assert!(result.violations[0].contains("contains no Chinese characters"));
        assert!(run_named(checks(), "UTF-8 CJK content", "README.md", "# 诈骗\n").passed);
    }
}
