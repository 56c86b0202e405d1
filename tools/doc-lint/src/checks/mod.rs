pub mod accessibility;
pub mod analysis;
pub mod consistency;
pub mod content;
pub mod contract;
pub mod cross_refs;
pub mod markdown;
pub mod safety;
pub mod sections;
pub mod structure;

use crate::config::LinterConfig;
use crate::document::Document;
use regex::Regex;
use serde::Serialize;
use std::sync::LazyLock;

static CODE_FENCE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\s*```").unwrap());

#[derive(Debug, Clone, Serialize)]
pub struct CheckResult {
    pub name: String,
    pub passed: bool,
    pub violations: Vec<String>,
}

impl CheckResult {
    pub fn from_violations(name: &str, violations: Vec<String>) -> Self {
        Self {
            name: name.to_string(),
            passed: violations.is_empty(),
            violations,
        }
    }
}

/// Everything a check may look at: the loaded document and the repository layout.
pub struct CheckContext<'a> {
    pub config: &'a LinterConfig,
    pub doc: &'a Document,
}

impl CheckContext<'_> {
    pub fn subject(&self) -> String {
        self.config.display_path(&self.doc.path)
    }
}

/// Trait for all document checks
pub trait Check {
    fn name(&self) -> &'static str;
    fn violations(&self, ctx: &CheckContext) -> Vec<String>;

    fn run(&self, ctx: &CheckContext) -> CheckResult {
        CheckResult::from_violations(self.name(), self.violations(ctx))
    }
}

/// A check backed by a plain function.
pub struct FnCheck {
    pub name: &'static str,
    pub rule: fn(&CheckContext) -> Vec<String>,
}

impl Check for FnCheck {
    fn name(&self) -> &'static str {
        self.name
    }

    fn violations(&self, ctx: &CheckContext) -> Vec<String> {
        (self.rule)(ctx)
    }
}

/// Every phrase must appear verbatim; one violation per missing phrase.
pub struct RequiredPhrases {
    pub name: &'static str,
    pub phrases: &'static [&'static str],
    pub rule: &'static str,
}

impl Check for RequiredPhrases {
    fn name(&self) -> &'static str {
        self.name
    }

    fn violations(&self, ctx: &CheckContext) -> Vec<String> {
        self.phrases
            .iter()
            .filter(|phrase| !ctx.doc.contains(phrase))
            .map(|phrase| {
                violation(
                    &ctx.subject(),
                    &format!("is missing `{phrase}`"),
                    self.rule,
                    "Restore the pinned wording exactly; these phrases are a content contract.",
                )
            })
            .collect()
    }
}

/// At least one phrase must appear verbatim.
pub struct AnyPhrase {
    pub name: &'static str,
    pub phrases: &'static [&'static str],
    pub rule: &'static str,
}

impl Check for AnyPhrase {
    fn name(&self) -> &'static str {
        self.name
    }

    fn violations(&self, ctx: &CheckContext) -> Vec<String> {
        if self.phrases.iter().any(|phrase| ctx.doc.contains(phrase)) {
            return vec![];
        }
        vec![violation(
            &ctx.subject(),
            &format!("contains none of {}", quote_all(self.phrases)),
            self.rule,
            "Add at least one of the listed phrases.",
        )]
    }
}

pub type CheckList = Vec<Box<dyn Check>>;

pub fn fn_check(name: &'static str, rule: fn(&CheckContext) -> Vec<String>) -> Box<dyn Check> {
    Box::new(FnCheck { name, rule })
}

pub fn required(name: &'static str, phrases: &'static [&'static str], rule: &'static str) -> Box<dyn Check> {
    Box::new(RequiredPhrases { name, phrases, rule })
}

pub fn any_of(name: &'static str, phrases: &'static [&'static str], rule: &'static str) -> Box<dyn Check> {
    Box::new(AnyPhrase { name, phrases, rule })
}

/// Violation text in the `<subject> <problem>. / Rule: / Fix:` layout.
pub fn violation(subject: &str, problem: &str, rule: &str, fix: &str) -> String {
    format!(
        "{subject} {problem}.\n\
         \x20   Rule: {rule}\n\
         \x20   Fix: {fix}"
    )
}

/// Lines outside fenced code blocks, paired with their 1-based line numbers.
pub fn prose_lines(doc: &Document) -> Vec<(usize, &str)> {
    let mut in_code_fence = false;
    doc.lines
        .iter()
        .enumerate()
        .filter_map(|(i, line)| {
            if CODE_FENCE.is_match(line) {
                in_code_fence = !in_code_fence;
                return None;
            }
            (!in_code_fence).then_some((i + 1, line.as_str()))
        })
        .collect()
}

pub fn quote_all(phrases: &[&str]) -> String {
    phrases
        .iter()
        .map(|p| format!("`{p}`"))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Runs the named check from `checks` against `text` loaded as `/repo/<file>`.
#[cfg(test)]
pub(crate) fn run_named(checks: CheckList, name: &str, file: &str, text: &str) -> CheckResult {
    let config = LinterConfig::from_root(std::path::Path::new("/repo"));
    let doc = Document::from_text(&config.root_dir.join(file), text.to_string());
    let check = checks
        .iter()
        .find(|c| c.name() == name)
        .unwrap_or_else(|| panic!("no check named {name}"));
    check.run(&CheckContext { config: &config, doc: &doc })
}
