use crate::checks::analysis::{BACKDOOR_FUNCTIONS, MALICIOUS_ADDRESSES, STATE_VARIABLES};
use crate::checks::{fn_check, violation, CheckContext, CheckList};
use crate::document::Document;

pub fn checks() -> CheckList {
    vec![
        fn_check("Documented addresses exist in contract", documented_addresses),
        fn_check("Documented functions exist in contract", documented_functions),
        fn_check("Documented variables exist in contract", documented_variables),
    ]
}

fn documented_addresses(ctx: &CheckContext) -> Vec<String> {
    cross_reference(ctx, MALICIOUS_ADDRESSES, |name| name.to_string(), "address")
}

fn documented_functions(ctx: &CheckContext) -> Vec<String> {
    cross_reference(ctx, BACKDOOR_FUNCTIONS, |name| format!("function {name}"), "function")
}

fn documented_variables(ctx: &CheckContext) -> Vec<String> {
    cross_reference(ctx, STATE_VARIABLES, |name| name.to_string(), "variable")
}

/// For each identifier the report mentions, the contract must contain `needle(identifier)`.
fn cross_reference(
    ctx: &CheckContext,
    identifiers: &[&str],
    needle: fn(&str) -> String,
    kind: &str,
) -> Vec<String> {
    let mentioned: Vec<&str> = identifiers
        .iter()
        .copied()
        .filter(|id| ctx.doc.contains(id))
        .collect();
    if mentioned.is_empty() {
        return vec![];
    }

    let contract_path = ctx.config.contract();
    let contract_name = ctx.config.display_path(&contract_path);
    let contract = match Document::load(&contract_path) {
        Ok(doc) => doc,
        Err(err) => {
            log::warn!("cross-reference source unavailable: {err}");
            return vec![violation(
                &ctx.subject(),
                &format!("documents contract identifiers but {contract_name} could not be loaded ({err})"),
                "Identifiers quoted in the report must be verifiable against the contract source.",
                "Restore the contract under contracts/ or the repository root.",
            )];
        }
    };

    mentioned
        .into_iter()
        .filter(|id| !contract.contains(&needle(id)))
        .map(|id| {
            violation(
                &ctx.subject(),
                &format!("documents {kind} `{id}` but {contract_name} does not contain `{}`", needle(id)),
                "Every identifier quoted in the report must exist in the analysed contract.",
                "Correct the identifier in the report or restore the archived contract source.",
            )
        })
        .collect()
}
