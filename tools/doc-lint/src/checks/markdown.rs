use crate::checks::{fn_check, prose_lines, violation, CheckContext, CheckList};
use regex::Regex;
use std::sync::LazyLock;

/// Hash run followed directly by text. The run itself is excluded from the
/// trailing class, otherwise `## Title` would match as `#` + `#`.
static HEADER_WITHOUT_SPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^#{1,6}[^\s#]").unwrap());

static LIST_ITEM: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?m)^\s*[-*]\s+.+").unwrap());

static BOLD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\*\*.+?\*\*").unwrap());

static CODE_BLOCK: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"```[\s\S]*?```").unwrap());

static HORIZONTAL_RULE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?m)^---+\s*$").unwrap());

pub fn checks() -> CheckList {
    vec![
        fn_check("Headers have space", headers_have_space),
        fn_check("List items", list_items),
        fn_check("Bold text", bold_text),
        fn_check("Code blocks", code_blocks),
        fn_check("Horizontal rules", horizontal_rules),
    ]
}

/// Lines inside fenced blocks (shebangs, shell comments) are not headers.
fn headers_have_space(ctx: &CheckContext) -> Vec<String> {
    let subject = ctx.subject();
    prose_lines(ctx.doc)
        .into_iter()
        .filter(|(_, line)| HEADER_WITHOUT_SPACE.is_match(line))
        .map(|(line_no, line)| {
            violation(
                &format!("{subject}:{line_no}"),
                &format!("has a header without a space after `#`: `{}`", line.trim_end()),
                "ATX headers need a space between the hash marks and the text.",
                "Insert a space after the leading `#` characters.",
            )
        })
        .collect()
}

fn list_items(ctx: &CheckContext) -> Vec<String> {
    expect_present(ctx, &LIST_ITEM, "list items", "Use `- item` bullets for enumerations.")
}

fn bold_text(ctx: &CheckContext) -> Vec<String> {
    expect_present(ctx, &BOLD, "bold text", "Emphasize key warnings with `**text**`.")
}

fn code_blocks(ctx: &CheckContext) -> Vec<String> {
    expect_present(ctx, &CODE_BLOCK, "fenced code blocks", "Wrap the directory tree in a ``` fence.")
}

fn horizontal_rules(ctx: &CheckContext) -> Vec<String> {
    expect_present(ctx, &HORIZONTAL_RULE, "horizontal rules", "Separate the closing disclaimer with `---`.")
}

fn expect_present(ctx: &CheckContext, pattern: &Regex, what: &str, fix: &str) -> Vec<String> {
    if pattern.is_match(&ctx.doc.content) {
        return vec![];
    }
    vec![violation(
        &ctx.subject(),
        &format!("contains no {what}"),
        &format!("The document must use well-formed markdown {what}."),
        fix,
    )]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checks::run_named;

    #[test]
    fn header_pattern_flags_missing_space_only() {
        assert!(HEADER_WITHOUT_SPACE.is_match("##Title"));
        assert!(HEADER_WITHOUT_SPACE.is_match("#!shebang"));
        assert!(!HEADER_WITHOUT_SPACE.is_match("## Title"));
        assert!(!HEADER_WITHOUT_SPACE.is_match("###### Deep"));
        assert!(!HEADER_WITHOUT_SPACE.is_match("#"));
        assert!(!HEADER_WITHOUT_SPACE.is_match("text # not a header"));
    }

    #[test]
    fn horizontal_rule_needs_its_own_line() {
        assert!(HORIZONTAL_RULE.is_match("a\n\n---\n\nb"));
        assert!(HORIZONTAL_RULE.is_match("-----  \n"));
        assert!(!HORIZONTAL_RULE.is_match("a --- b\n"));
    }

    #[test]
    fn code_block_spans_lines() {
        assert!(CODE_BLOCK.is_match("```\nGAIX.sol\n```"));
        assert!(!CODE_BLOCK.is_match("```unterminated\n"));
    }

    #[test]
    fn header_check_ignores_fenced_lines() {
        let text = "# 标题\n\n```bash\n#!/bin/sh\n```\n\n##缺少空格\n";
        let result = run_named(checks(), "Headers have space", "README.md", text);
        assert_eq!(result.violations.len(), 1);
        assert!(result.violations[0].starts_with("README.md:7 has a header without a space"));
    }
}
