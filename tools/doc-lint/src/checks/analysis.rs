//! Checks over `GAIX_Scam_Analysis.md`, the technical write-up the README
//! points to. Unlike the README, the report is expected to quote contract
//! addresses and identifiers verbatim.

use crate::checks::{any_of, fn_check, required, violation, CheckContext, CheckList};
use regex::Regex;
use std::sync::LazyLock;

pub const REPORT_TITLE: &str = "# GAIX 合约诈骗技术分析报告";

pub const REPORT_SECTIONS: &[&str] = &[
    "## 概述",
    "## 1. 代码混淆技术",
    "## 2. 权限控制和后门机制",
    "## 3. 交易操控和限制机制",
    "## 4. 任意资金提取后门",
    "## 5. 诈骗实例演示",
    "## 6. 识别诈骗合约的标志",
    "## 7. 防护建议",
    "## 结论",
];

/// Addresses hard-coded in the contract that receive privileged treatment.
pub const MALICIOUS_ADDRESSES: &[&str] = &[
    "0x59aFFF458527c6C7FE1d3228255EcbCeC634e9f0",
    "0x6EaEea4eB670a837fA53af2dd4213cC9dD936385",
];

pub const BACKDOOR_FUNCTIONS: &[&str] = &["hhwrfjkmw", "zbyezudcyd", "drokyskux"];

pub const STATE_VARIABLES: &[&str] = &["_ecjqovvawneg", "_ISQWnmDsVMEYX", "_rCCfXWOTlY"];

pub const MIN_REPORT_CHARS: usize = 5001;
pub const MIN_SUBSECTIONS: usize = 6;

const SOLIDITY_KEYWORDS: &[&str] = &["function", "contract", "mapping", "address", "uint256"];

static SOLIDITY_BLOCK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"```solidity[\s\S]*?```").unwrap());

static BULLET_ITEM: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?m)^\s*[-*]\s+").unwrap());

static NUMBERED_ITEM: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?m)^\s*\d+\.\s+").unwrap());

pub fn checks() -> CheckList {
    vec![
        required(
            "Report title",
            &[REPORT_TITLE],
            "The report opens with its pinned title.",
        ),
        required(
            "Report sections",
            REPORT_SECTIONS,
            "The report walks through overview, the seven findings and a conclusion.",
        ),
        required(
            "Obfuscated function names documented",
            &["_TnezmUOdSpme", "混淆的函数名"],
            "Obfuscated function names from the contract must be called out.",
        ),
        required(
            "Obfuscated parameter names documented",
            &["MMZwlXZIHm", "ERppNtukt", "混淆参数名"],
            "Obfuscated parameter names from the contract must be called out.",
        ),
        required(
            "Backdoor functions documented",
            BACKDOOR_FUNCTIONS,
            "Every backdoor entry point must be named.",
        ),
        required(
            "Malicious addresses documented",
            MALICIOUS_ADDRESSES,
            "The privileged addresses must be quoted so readers can recognise them.",
        ),
        fn_check("Solidity code examples", solidity_examples),
        fn_check("Solidity blocks look like Solidity", solidity_blocks_plausible),
        required(
            "Scam mechanisms documented",
            &["rug pull", "黑名单", "白名单"],
            "The report must explain the rug pull and the black/white lists.",
        ),
        required(
            "Scam patterns documented",
            &["阻止套利", "价格操控", "流动性检查"],
            "Arbitrage blocking, price manipulation and liquidity checks must be described.",
        ),
        required(
            "Hash gate explained",
            &["sha256", "_rCCfXWOTlY"],
            "The sha256 check guarding the backdoor must be explained.",
        ),
        required(
            "Uniswap integration documented",
            &["uniswapV2Pair", "getReserves"],
            "The pair lookup and reserve reads must be described.",
        ),
        required(
            "Security recommendations",
            &["防护建议", "代码审计"],
            "The report must close the loop with protective advice.",
        ),
        any_of(
            "Warning markers",
            &["✗", "❌", "✚"],
            "Findings are flagged with warning markers.",
        ),
        any_of(
            "Explicit security warnings",
            &["不要投资", "不要与此合约进行任何交互", "举报", "提高警惕"],
            "Readers must be told not to invest in or interact with the contract.",
        ),
        any_of(
            "Malicious behaviour named",
            &["诈骗", "恶意", "窃取", "欺诈"],
            "The report must call the behaviour what it is.",
        ),
        fn_check("ERC20 functions described", erc20_functions),
        required(
            "Access-list mechanics",
            &["mapping", "bool"],
            "The whitelist/blacklist storage must be shown.",
        ),
        any_of(
            "Solidity details",
            &["solidity", "Solidity", "pragma", "0.8"],
            "Compiler and language details must be mentioned.",
        ),
        fn_check("Scam pattern vocabulary", scam_vocabulary),
        fn_check("Content length", content_length),
        fn_check("Subsections", subsections),
        required(
            "Practical examples",
            &["场景", "步骤"],
            "Scenarios must be walked through step by step.",
        ),
        fn_check("List formatting", list_formatting),
    ]
}

fn solidity_examples(ctx: &CheckContext) -> Vec<String> {
    let mut violations = Vec::new();
    if !SOLIDITY_BLOCK.is_match(&ctx.doc.content) {
        violations.push(violation(
            &ctx.subject(),
            "has no ```solidity code block",
            "Findings are backed by excerpts from the contract.",
            "Quote the relevant code in a ```solidity fence.",
        ));
    }
    if !ctx.doc.contains("function transfer") {
        violations.push(violation(
            &ctx.subject(),
            "does not quote `function transfer`",
            "The hijacked transfer path must be shown.",
            "Quote the overridden transfer function.",
        ));
    }
    violations
}

fn solidity_blocks_plausible(ctx: &CheckContext) -> Vec<String> {
    let subject = ctx.subject();
    SOLIDITY_BLOCK
        .find_iter(&ctx.doc.content)
        .filter(|block| !SOLIDITY_KEYWORDS.iter().any(|k| block.as_str().contains(k)))
        .map(|block| {
            let line = ctx.doc.content[..block.start()].matches('\n').count() + 1;
            violation(
                &format!("{subject}:{line}"),
                "has a solidity block without any Solidity keyword",
                "Solidity fences must contain contract code.",
                "Fix the fence language or paste the actual excerpt.",
            )
        })
        .collect()
}

fn erc20_functions(ctx: &CheckContext) -> Vec<String> {
    let mentions_allowance = ctx.doc.contains("approve")
        || ctx.doc.contains("allowance")
        || ctx.doc.content.to_lowercase().contains("erc20");
    if ctx.doc.contains("transfer") && mentions_allowance {
        return vec![];
    }
    vec![violation(
        &ctx.subject(),
        "does not describe the ERC20 surface",
        "The report must cover `transfer` and the allowance functions (`approve`/`allowance`).",
        "Explain which standard ERC20 functions the contract overrides.",
    )]
}

fn scam_vocabulary(ctx: &CheckContext) -> Vec<String> {
    let lowered = ctx.doc.content.to_lowercase();
    ["混淆", "后门", "流动性", "rug pull"]
        .iter()
        .filter(|term| !lowered.contains(*term))
        .map(|term| {
            violation(
                &ctx.subject(),
                &format!("never mentions `{term}`"),
                "Obfuscation, backdoors, liquidity and the rug pull must all be named.",
                "Name the pattern where it is first demonstrated.",
            )
        })
        .collect()
}

fn content_length(ctx: &CheckContext) -> Vec<String> {
    let chars = ctx.doc.content.chars().count();
    if chars >= MIN_REPORT_CHARS {
        return vec![];
    }
    vec![violation(
        &ctx.subject(),
        &format!("has {chars} characters, expected more than {}", MIN_REPORT_CHARS - 1),
        "The report must be a comprehensive analysis.",
        "Expand the findings; a summary belongs in the README.",
    )]
}

fn subsections(ctx: &CheckContext) -> Vec<String> {
    let found = ctx.doc.count("### ");
    if found >= MIN_SUBSECTIONS {
        return vec![];
    }
    vec![violation(
        &ctx.subject(),
        &format!("has {found} `### ` subsection(s), expected at least {MIN_SUBSECTIONS}"),
        "Each main finding is broken into subsections.",
        "Split long sections under `### ` headings.",
    )]
}

fn list_formatting(ctx: &CheckContext) -> Vec<String> {
    let mut violations = Vec::new();
    if !BULLET_ITEM.is_match(&ctx.doc.content) {
        violations.push(violation(
            &ctx.subject(),
            "contains no bullet list",
            "Indicators and recommendations are listed as bullets.",
            "Use `- item` bullets.",
        ));
    }
    if !NUMBERED_ITEM.is_match(&ctx.doc.content) {
        violations.push(violation(
            &ctx.subject(),
            "contains no numbered list",
            "Attack scenarios are written as numbered steps.",
            "Use `1. step` numbering.",
        ));
    }
    violations
}
