use crate::checks::{fn_check, quote_all, required, violation, CheckContext, CheckList};
use regex::Regex;
use std::sync::LazyLock;

pub const DISCLAIMER: &str = "免责声明";
pub const RISK_KEYWORDS: &[&str] = &["风险", "损失", "责任"];
pub const MIN_RISK_KEYWORDS: usize = 2;

static BOLD_WARNING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*\*.*?警告.*?\*\*|\*\*.*?声明.*?\*\*").unwrap());

static ETH_ADDRESS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"0x[a-fA-F0-9]{40}").unwrap());

pub fn checks() -> CheckList {
    vec![
        required(
            "No promotion of illegal activity",
            &["严禁", "非法"],
            "The README must explicitly prohibit illegal use.",
        ),
        required(
            "Educational purpose clear",
            &["教育目的", "学习"],
            "The README must frame the material as learning material.",
        ),
        fn_check("Disclaimer prominence", disclaimer_prominence),
        fn_check("No contract addresses", no_contract_addresses),
        fn_check("Risk warnings", risk_warnings),
    ]
}

fn disclaimer_prominence(ctx: &CheckContext) -> Vec<String> {
    let mut violations = Vec::new();
    if !ctx.doc.contains(DISCLAIMER) {
        violations.push(violation(
            &ctx.subject(),
            &format!("has no `{DISCLAIMER}`"),
            "The README must carry a disclaimer.",
            "Restore the disclaimer section.",
        ));
    }
    if !BOLD_WARNING.is_match(&ctx.doc.content) {
        violations.push(violation(
            &ctx.subject(),
            "has no bold warning or statement",
            "At least one `警告` or `声明` must be emphasized with `**...**`.",
            "Bold the key warning sentence, e.g. `**重要声明**`.",
        ));
    }
    violations
}

fn no_contract_addresses(ctx: &CheckContext) -> Vec<String> {
    let subject = ctx.subject();
    ctx.doc
        .lines
        .iter()
        .enumerate()
        .flat_map(|(i, line)| ETH_ADDRESS.find_iter(line).map(move |m| (i, m.as_str())))
        .map(|(i, address)| {
            violation(
                &format!("{subject}:{}", i + 1),
                &format!("contains the contract address `{address}`"),
                "The README must not publish live contract addresses readers could interact with.",
                "Remove the address; the analysis report is the place for documented addresses.",
            )
        })
        .collect()
}

fn risk_warnings(ctx: &CheckContext) -> Vec<String> {
    let found = RISK_KEYWORDS.iter().filter(|k| ctx.doc.contains(k)).count();
    if found >= MIN_RISK_KEYWORDS {
        return vec![];
    }
    vec![violation(
        &ctx.subject(),
        &format!(
            "uses {found} of the risk terms {}, expected at least {MIN_RISK_KEYWORDS}",
            quote_all(RISK_KEYWORDS)
        ),
        "The README must warn about risk, loss and responsibility.",
        "Spell out the risks of interacting with the contract.",
    )]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checks::run_named;

    #[test]
    fn address_pattern_needs_forty_hex_digits() {
        assert!(ETH_ADDRESS.is_match("0x59aFFF458527c6C7FE1d3228255EcbCeC634e9f0"));
        assert!(!ETH_ADDRESS.is_match("0x59aFFF458527c6C7FE1d3228255EcbCeC634e9f"));
        assert!(!ETH_ADDRESS.is_match("0xZZaFFF458527c6C7FE1d3228255EcbCeC634e9f0"));
    }

    #[test]
    fn bold_warning_stays_on_one_line() {
        assert!(BOLD_WARNING.is_match("**⚠️ 警告：仅供学习**"));
        assert!(BOLD_WARNING.is_match("前文 **重要声明** 后文"));
        assert!(!BOLD_WARNING.is_match("**警告\n**"));
        assert!(!BOLD_WARNING.is_match("警告 **加粗**"));
    }

    #[test]
    fn risk_warning_needs_two_distinct_terms() {
        let one = run_named(checks(), "Risk warnings", "README.md", "风险 风险 风险\n");
        assert!(one.violations[0].contains("uses 1 of the risk terms"));
        assert!(run_named(checks(), "Risk warnings", "README.md", "风险与损失\n").passed);
    }
}
