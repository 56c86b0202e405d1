use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;
use serde::Serialize;

use crate::checks::CheckResult;
use crate::suite::{GroupOutcome, GroupReport};

pub fn print_header() {
    println!(
        "{}",
        "\n=== Documentation Checks ===".if_supports_color(Stdout, |s| s.bold())
    );
}

pub fn print_group(report: &GroupReport) {
    println!(
        "\n{}",
        format!("[{}]", report.title).if_supports_color(Stdout, |s| s.bold())
    );
    match &report.outcome {
        GroupOutcome::Ran { results } => {
            for result in results {
                print_result(result);
            }
        }
        GroupOutcome::SetupFailed { document, reason } => {
            println!(
                "{} {}: {}",
                "\u{2717}".if_supports_color(Stdout, |s| s.red()),
                document,
                format!("setup failed, group not run ({reason})")
                    .if_supports_color(Stdout, |s| s.red()),
            );
        }
    }
}

pub fn print_result(result: &CheckResult) {
    if result.passed {
        println!(
            "{} {}: {}",
            "\u{2713}".if_supports_color(Stdout, |s| s.green()),
            result.name,
            "clean".if_supports_color(Stdout, |s| s.green()),
        );
    } else {
        println!(
            "{} {}: {}",
            "\u{2717}".if_supports_color(Stdout, |s| s.red()),
            result.name,
            format!("{} violation(s)", result.violations.len())
                .if_supports_color(Stdout, |s| s.red()),
        );
        println!();
        for v in &result.violations {
            println!(
                "  {}",
                v.if_supports_color(Stdout, |s| s.dimmed())
            );
        }
        println!();
    }
}

#[derive(Debug, Default, PartialEq, Eq)]
pub struct Summary {
    pub checks: usize,
    pub failed_checks: usize,
    pub violations: usize,
    pub setup_failures: usize,
}

impl Summary {
    pub fn from_reports(reports: &[GroupReport]) -> Self {
        let mut summary = Summary::default();
        for report in reports {
            match &report.outcome {
                GroupOutcome::Ran { results } => {
                    summary.checks += results.len();
                    summary.failed_checks += results.iter().filter(|r| !r.passed).count();
                    summary.violations += results.iter().map(|r| r.violations.len()).sum::<usize>();
                }
                GroupOutcome::SetupFailed { .. } => summary.setup_failures += 1,
            }
        }
        summary
    }

    pub fn passed(&self) -> bool {
        self.failed_checks == 0 && self.setup_failures == 0
    }
}

pub fn print_summary(reports: &[GroupReport]) -> bool {
    let summary = Summary::from_reports(reports);

    println!(
        "{}",
        "\n--- Summary ---".if_supports_color(Stdout, |s| s.bold())
    );

    if summary.passed() {
        println!(
            "{}",
            format!("\nAll {}/{} checks passed.\n", summary.checks, summary.checks)
                .if_supports_color(Stdout, |s| s.green()),
        );
    } else {
        let mut line = format!(
            "\n{}/{} check(s) failed with {} total violation(s).",
            summary.failed_checks, summary.checks, summary.violations,
        );
        if summary.setup_failures > 0 {
            line.push_str(&format!(
                " {} group(s) could not be set up.",
                summary.setup_failures
            ));
        }
        line.push('\n');
        println!("{}", line.if_supports_color(Stdout, |s| s.red()));
    }

    summary.passed()
}

#[derive(Serialize)]
struct JsonReport<'a> {
    passed: bool,
    groups: &'a [GroupReport],
}

pub fn render_json(reports: &[GroupReport]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&JsonReport {
        passed: Summary::from_reports(reports).passed(),
        groups: reports,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Target;
    use crate::suite::CheckGroup;

    fn report(group: CheckGroup, outcome: GroupOutcome) -> GroupReport {
        GroupReport {
            group,
            target: Target::Readme,
            title: group.title().to_string(),
            outcome,
        }
    }

    fn result(name: &str, violations: &[&str]) -> CheckResult {
        CheckResult::from_violations(name, violations.iter().map(|v| v.to_string()).collect())
    }

    #[test]
    fn summary_counts_checks_violations_and_setup_failures() {
        let reports = vec![
            report(
                CheckGroup::Content,
                GroupOutcome::Ran {
                    results: vec![result("a", &[]), result("b", &["x", "y"])],
                },
            ),
            report(
                CheckGroup::Safety,
                GroupOutcome::SetupFailed {
                    document: "README.md".to_string(),
                    reason: "missing".to_string(),
                },
            ),
        ];

        let summary = Summary::from_reports(&reports);
        assert_eq!(
            summary,
            Summary { checks: 2, failed_checks: 1, violations: 2, setup_failures: 1 }
        );
        assert!(!summary.passed());
        assert!(!print_summary(&reports));
    }

    #[test]
    fn setup_failure_alone_fails_the_run() {
        let reports = vec![report(
            CheckGroup::Structure,
            GroupOutcome::SetupFailed {
                document: "README.md".to_string(),
                reason: "missing".to_string(),
            },
        )];
        assert!(!Summary::from_reports(&reports).passed());
    }

    #[test]
    fn json_report_tags_group_outcomes() {
        let reports = vec![report(
            CheckGroup::MarkdownSyntax,
            GroupOutcome::Ran { results: vec![result("Bold text", &[])] },
        )];
        let json: serde_json::Value = serde_json::from_str(&render_json(&reports).unwrap()).unwrap();
        assert_eq!(json["passed"], true);
        assert_eq!(json["groups"][0]["group"], "markdown_syntax");
        assert_eq!(json["groups"][0]["target"], "readme");
        assert_eq!(json["groups"][0]["outcome"]["status"], "ran");
        assert_eq!(json["groups"][0]["outcome"]["results"][0]["name"], "Bold text");
    }
}
