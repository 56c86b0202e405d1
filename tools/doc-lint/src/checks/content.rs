use crate::checks::{fn_check, required, violation, CheckContext, CheckList};
use crate::config::{ANALYSIS_FILE, CONTRACT_FILE};

pub const NOT_INVESTMENT_ADVICE: &str = "不构成投资建议";
pub const EDUCATION: &str = "教育";
pub const MIN_EDUCATION_MENTIONS: usize = 3;

pub const DO_NOT: &str = "请勿";
pub const NO_INTERACTION_WARNINGS: &[&str] = &["请勿与任何诈骗合约进行交互", "请勿参与任何形式的投资"];

pub const EMOJI_INDICATORS: &[&str] = &[
    "🎯",
    "\u{26a0}\u{fe0f}",
    "📁",
    "🔍",
    "🎓",
    "🤝",
    "\u{2696}\u{fe0f}",
];

pub const AUDIENCE_GROUPS: &[&str] = &["开发者", "研究员", "投资者", "学生"];

pub fn checks() -> CheckList {
    vec![
        fn_check("Educational purpose emphasis", education_emphasis),
        required(
            "Not investment advice",
            &[NOT_INVESTMENT_ADVICE],
            "The README must state that nothing in it is investment advice.",
        ),
        fn_check("No interaction warning", no_interaction_warning),
        required(
            "Mentions repository artifacts",
            &[CONTRACT_FILE, ANALYSIS_FILE],
            "The README must point readers at the contract and the analysis report.",
        ),
        required(
            "Emoji section indicators",
            EMOJI_INDICATORS,
            "Each main section is marked with its emoji indicator.",
        ),
        required(
            "Target audience groups",
            AUDIENCE_GROUPS,
            "The audience section must name developers, researchers, investors and students.",
        ),
    ]
}

fn education_emphasis(ctx: &CheckContext) -> Vec<String> {
    let mentions = ctx.doc.count(EDUCATION);
    if mentions >= MIN_EDUCATION_MENTIONS {
        return vec![];
    }
    vec![violation(
        &ctx.subject(),
        &format!("mentions `{EDUCATION}` {mentions} time(s), expected at least {MIN_EDUCATION_MENTIONS}"),
        "The educational purpose must be stated repeatedly.",
        "Restate the educational purpose in the introduction, warning and disclaimer.",
    )]
}

fn no_interaction_warning(ctx: &CheckContext) -> Vec<String> {
    let mut violations = Vec::new();
    if !ctx.doc.contains(DO_NOT) {
        violations.push(violation(
            &ctx.subject(),
            &format!("contains no `{DO_NOT}` warning"),
            "Readers must be told explicitly what not to do.",
            "Add a `请勿 ...` sentence to the warning section.",
        ));
    }
    if !NO_INTERACTION_WARNINGS.iter().any(|w| ctx.doc.contains(w)) {
        violations.push(violation(
            &ctx.subject(),
            "does not warn against interacting with scam contracts",
            "The README must say not to interact with, or invest in, the scam contract.",
            &format!("Add `{}`.", NO_INTERACTION_WARNINGS[0]),
        ));
    }
    violations
}
