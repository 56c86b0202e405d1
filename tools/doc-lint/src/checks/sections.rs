use crate::checks::{fn_check, required, violation, CheckContext, CheckList};
use crate::config::{ANALYSIS_FILE, CONTRACT_FILE};
use regex::Regex;
use std::sync::LazyLock;

pub const MAIN_TITLE: &str = "# DeFi 诈骗合约分析与防御学习平台";
pub const INTRODUCTION: &str = "## 🎯 项目简介";
pub const WARNING: &str = "## \u{26a0}\u{fe0f} 重要声明";
pub const DIRECTORY_STRUCTURE: &str = "## 📁 目录结构";
pub const ANALYSIS_OBJECTIVES: &str = "## 🔍 分析目标";
pub const TARGET_AUDIENCE: &str = "## 🎓 适用人群";
pub const CONTRIBUTION_GUIDE: &str = "## 🤝 贡献指南";
pub const LEGAL_DISCLAIMER: &str = "## \u{2696}\u{fe0f} 免责声明";

pub const MIN_WARNINGS: usize = 3;

static H1: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?m)^# .+").unwrap());

static WARNING_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\x{26a0}\x{fe0f}|警告|声明|免责").unwrap());

pub fn checks() -> CheckList {
    vec![
        fn_check("Main title", main_title),
        required(
            "Project introduction section",
            &[INTRODUCTION],
            "The README must introduce the project.",
        ),
        required(
            "Warning section",
            &[WARNING, "仅用于教育目的", "严禁用于任何非法活动"],
            "The warning section must limit use to education and forbid illegal use.",
        ),
        required(
            "Directory structure section",
            &[DIRECTORY_STRUCTURE, CONTRACT_FILE, ANALYSIS_FILE],
            "The directory listing must name the contract source and its analysis report.",
        ),
        required(
            "Analysis objectives section",
            &[ANALYSIS_OBJECTIVES],
            "The README must state what the analysis sets out to show.",
        ),
        required(
            "Target audience section",
            &[TARGET_AUDIENCE],
            "The README must say who the material is for.",
        ),
        required(
            "Contribution guide section",
            &[CONTRIBUTION_GUIDE],
            "The README must explain how to contribute.",
        ),
        required(
            "Legal disclaimer section",
            &[LEGAL_DISCLAIMER],
            "The README must close with a legal disclaimer.",
        ),
        fn_check("Repeated warnings", repeated_warnings),
    ]
}

fn main_title(ctx: &CheckContext) -> Vec<String> {
    let mut violations = Vec::new();
    if !H1.is_match(&ctx.doc.content) {
        violations.push(violation(
            &ctx.subject(),
            "has no level-one heading",
            "The README must open with an `# ` title.",
            &format!("Add `{MAIN_TITLE}` as the first line."),
        ));
    }
    if !ctx.doc.contains(MAIN_TITLE) {
        violations.push(violation(
            &ctx.subject(),
            &format!("is missing the title `{MAIN_TITLE}`"),
            "The title must name the DeFi scam analysis platform.",
            "Restore the pinned title text.",
        ));
    }
    violations
}

fn repeated_warnings(ctx: &CheckContext) -> Vec<String> {
    let found = WARNING_MARKER.find_iter(&ctx.doc.content).count();
    if found >= MIN_WARNINGS {
        return vec![];
    }
    vec![violation(
        &ctx.subject(),
        &format!("has {found} warning marker(s), expected at least {MIN_WARNINGS}"),
        "Warnings (⚠️, 警告, 声明, 免责) must recur throughout the document.",
        "Repeat the warning where readers may skip ahead, not only in one section.",
    )]
}
