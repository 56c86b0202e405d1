use crate::checks::{fn_check, required, violation, CheckContext, CheckList};
use regex::Regex;
use std::sync::LazyLock;

pub const MIN_CONTRACT_BYTES: usize = 1001;

/// UTF-8 bytes of U+FFFD decoded as Latin-1.
const MOJIBAKE: &str = "ï¿½";

/// Labels the deployed header carries for the project's site and channels.
pub const HEADER_LINKS: &[&str] = &["Website:", "Twitter:", "Telegram:"];

static DOC_COMMENT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"/\*\*[\s\S]*?\*/").unwrap());

pub fn checks() -> CheckList {
    vec![
        required(
            "Solidity source",
            &["pragma solidity", "contract GAIX"],
            "The artifact must be the GAIX Solidity source.",
        ),
        required(
            "SPDX license identifier",
            &["SPDX-License-Identifier"],
            "Solidity sources declare their license.",
        ),
        fn_check("Header comment", header_comment),
        required(
            "ERC20 interface declared",
            &["interface IERC20"],
            "The contract source must include the IERC20 interface it implements.",
        ),
        fn_check("Contract size", contract_size),
        fn_check("Clean encoding", clean_encoding),
    ]
}

fn header_comment(ctx: &CheckContext) -> Vec<String> {
    let Some(header) = DOC_COMMENT.find(&ctx.doc.content) else {
        return vec![violation(
            &ctx.subject(),
            "has no `/** ... */` header comment",
            "The deployed header (site and social links) is part of the evidence.",
            "Restore the contract's header comment.",
        )];
    };
    HEADER_LINKS
        .iter()
        .filter(|label| !header.as_str().contains(*label))
        .map(|label| {
            violation(
                &ctx.subject(),
                &format!("has a header comment without a `{label}` line"),
                "The deployed header (site and social links) is part of the evidence.",
                "Restore the link lines from the verified source.",
            )
        })
        .collect()
}

fn contract_size(ctx: &CheckContext) -> Vec<String> {
    let bytes = ctx.doc.content.len();
    if bytes >= MIN_CONTRACT_BYTES {
        return vec![];
    }
    vec![violation(
        &ctx.subject(),
        &format!("is {bytes} bytes, expected more than {}", MIN_CONTRACT_BYTES - 1),
        "The full contract source is kept, not a stub.",
        "Restore the complete verified source.",
    )]
}

fn clean_encoding(ctx: &CheckContext) -> Vec<String> {
    let subject = ctx.subject();
    ctx.doc
        .lines
        .iter()
        .enumerate()
        .filter(|(_, line)| line.contains('\u{fffd}') || line.contains(MOJIBAKE))
        .map(|(i, _)| {
            violation(
                &format!("{subject}:{}", i + 1),
                "contains replacement characters",
                "The source must survive without encoding damage.",
                "Re-download the verified source and save it as UTF-8.",
            )
        })
        .collect()
}
