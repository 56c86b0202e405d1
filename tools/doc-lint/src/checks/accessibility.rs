use crate::checks::{fn_check, violation, CheckContext, CheckList};

pub const MIN_EMOJIS: usize = 6;
pub const MIN_SECTIONS: usize = 6;
pub const MIN_PARAGRAPH_BREAKS: usize = 6;

pub fn checks() -> CheckList {
    vec![
        fn_check("Visual indicators", visual_indicators),
        fn_check("Section separation", section_separation),
        fn_check("Paragraph spacing", paragraph_spacing),
    ]
}

/// Pictographs in the Miscellaneous Symbols and Pictographs through
/// Supplemental Symbols blocks; ⚠️ and ⚖️ sit outside this range.
fn is_pictograph(c: char) -> bool {
    ('\u{1F300}'..='\u{1F9FF}').contains(&c)
}

fn visual_indicators(ctx: &CheckContext) -> Vec<String> {
    let found = ctx.doc.content.chars().filter(|c| is_pictograph(*c)).count();
    if found >= MIN_EMOJIS {
        return vec![];
    }
    vec![violation(
        &ctx.subject(),
        &format!("uses {found} pictographic emoji, expected at least {MIN_EMOJIS}"),
        "Emoji markers keep the document scannable.",
        "Mark each main section heading with its emoji.",
    )]
}

fn section_separation(ctx: &CheckContext) -> Vec<String> {
    let found = ctx.doc.lines.iter().filter(|l| l.starts_with("## ")).count();
    if found >= MIN_SECTIONS {
        return vec![];
    }
    vec![violation(
        &ctx.subject(),
        &format!("has {found} second-level section(s), expected at least {MIN_SECTIONS}"),
        "The README is organized into `## ` sections.",
        "Split the content under the standard section headings.",
    )]
}

fn paragraph_spacing(ctx: &CheckContext) -> Vec<String> {
    let found = ctx.doc.count("\n\n");
    if found >= MIN_PARAGRAPH_BREAKS {
        return vec![];
    }
    vec![violation(
        &ctx.subject(),
        &format!("has {found} blank-line separator(s), expected at least {MIN_PARAGRAPH_BREAKS}"),
        "Paragraphs and sections are separated by blank lines.",
        "Insert a blank line between paragraphs, lists and headings.",
    )]
}
