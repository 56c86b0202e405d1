use std::fs;
use std::path::Path;

use doc_lint::config::{LinterConfig, Target};
use doc_lint::suite::{self, CheckGroup, GroupOutcome, GroupReport};

const README: &str = include_str!("fixtures/README.md");
const ANALYSIS: &str = include_str!("fixtures/GAIX_Scam_Analysis.md");
const CONTRACT: &str = include_str!("fixtures/GAIX.sol");

fn make_repo(readme: &str) -> tempfile::TempDir {
    let root = tempfile::tempdir().unwrap();
    write_file(&root.path().join("README.md"), readme);
    write_file(&root.path().join("GAIX_Scam_Analysis.md"), ANALYSIS);
    write_file(&root.path().join("GAIX.sol"), CONTRACT);
    root
}

fn lint_readme(root: &Path) -> Vec<GroupReport> {
    suite::run_target(Target::Readme, &LinterConfig::from_root(root))
}

fn failing_checks(reports: &[GroupReport]) -> Vec<String> {
    reports
        .iter()
        .flat_map(|r| r.results())
        .filter(|r| !r.passed)
        .map(|r| r.name.clone())
        .collect()
}

fn result_for<'a>(reports: &'a [GroupReport], name: &str) -> &'a doc_lint::checks::CheckResult {
    reports
        .iter()
        .find_map(|r| r.result(name))
        .unwrap_or_else(|| panic!("no check named {name}"))
}

#[test]
fn template_readme_passes_every_check() {
    let repo = make_repo(README);
    let reports = lint_readme(repo.path());

    assert_eq!(reports.len(), 7);
    assert!(suite::all_passed(&reports), "unexpected failures: {:?}", failing_checks(&reports));
    let total: usize = reports.iter().map(|r| r.results().len()).sum();
    assert!(total >= 35);
}

#[test]
fn groups_run_in_declared_order() {
    let repo = make_repo(README);
    let groups: Vec<CheckGroup> = lint_readme(repo.path()).iter().map(|r| r.group).collect();
    assert_eq!(groups, CheckGroup::for_target(Target::Readme).to_vec());
}

#[test]
fn removing_investment_disclaimer_fails_only_that_check() {
    let repo = make_repo(&README.replace("不构成投资建议", "仅供参考"));
    let reports = lint_readme(repo.path());

    assert_eq!(failing_checks(&reports), vec!["Not investment advice"]);
    let result = result_for(&reports, "Not investment advice");
    assert_eq!(result.violations.len(), 1);
    assert!(result.violations[0].contains("is missing `不构成投资建议`"));
}

#[test]
fn contract_address_fails_only_address_check() {
    let readme = README.replace(
        "## 🔍 分析目标",
        "合约地址：0x59aFFF458527c6C7FE1d3228255EcbCeC634e9f0\n\n## 🔍 分析目标",
    );
    let repo = make_repo(&readme);
    let reports = lint_readme(repo.path());

    assert_eq!(failing_checks(&reports), vec!["No contract addresses"]);
    let result = result_for(&reports, "No contract addresses");
    assert!(result.violations[0].contains("0x59aFFF458527c6C7FE1d3228255EcbCeC634e9f0"));
}

#[test]
fn missing_blank_lines_fail_only_paragraph_spacing() {
    let mut readme = README.to_string();
    while readme.contains("\n\n") {
        readme = readme.replace("\n\n", "\n");
    }
    let repo = make_repo(&readme);
    let reports = lint_readme(repo.path());

    assert_eq!(failing_checks(&reports), vec!["Paragraph spacing"]);
    assert!(result_for(&reports, "Paragraph spacing").violations[0]
        .contains("has 0 blank-line separator(s)"));
}

#[test]
fn renamed_contract_fails_only_reference_check() {
    let repo = make_repo(README);
    fs::rename(repo.path().join("GAIX.sol"), repo.path().join("GAIX.sol.bak")).unwrap();
    let reports = lint_readme(repo.path());

    assert_eq!(failing_checks(&reports), vec!["Referenced files exist"]);
    let result = result_for(&reports, "Referenced files exist");
    assert_eq!(result.violations.len(), 1);
    assert!(result.violations[0].contains("references `GAIX.sol` but the file does not exist"));
}

#[test]
fn header_without_space_fails_only_header_check() {
    let readme = README.replace("## 🤝 贡献指南", "## 🤝 贡献指南\n\n###注意事项");
    let repo = make_repo(&readme);
    let reports = lint_readme(repo.path());

    assert_eq!(failing_checks(&reports), vec!["Headers have space"]);
    let result = result_for(&reports, "Headers have space");
    assert_eq!(result.violations.len(), 1);
    assert!(result.violations[0].contains("`###注意事项`"));
}

#[test]
fn crlf_line_endings_are_reported_with_line_number() {
    let repo = make_repo(&README.replace('\n', "\r\n"));
    let reports = lint_readme(repo.path());

    let result = result_for(&reports, "Unix line endings");
    assert!(!result.passed);
    assert!(result.violations[0].starts_with("README.md:1 contains a carriage return"));
}

#[test]
fn missing_trailing_newline_is_reported() {
    let repo = make_repo(README.trim_end_matches('\n'));
    let reports = lint_readme(repo.path());

    assert_eq!(failing_checks(&reports), vec!["Ends with newline"]);
}

#[test]
fn missing_sections_report_each_heading() {
    let readme = README
        .replace("## 🎓 适用人群", "## 适用人群")
        .replace("## ⚖️ 免责声明", "## 法律说明");
    let repo = make_repo(&readme);
    let reports = lint_readme(repo.path());

    let failing = failing_checks(&reports);
    assert!(failing.contains(&"Target audience section".to_string()));
    assert!(failing.contains(&"Legal disclaimer section".to_string()));
    assert!(result_for(&reports, "Main title").passed);
}

#[test]
fn interaction_warning_accepts_either_phrase() {
    let readme = README.replace("请勿与任何诈骗合约进行交互，", "");
    let repo = make_repo(&readme);
    assert!(result_for(&lint_readme(repo.path()), "No interaction warning").passed);

    let readme = readme.replace("请勿参与任何形式的投资", "谨慎操作");
    let repo = make_repo(&readme);
    let reports = lint_readme(repo.path());
    let result = result_for(&reports, "No interaction warning");
    assert!(!result.passed);
    assert!(result.violations[0].contains("does not warn against interacting with scam contracts"));
}

#[test]
fn broken_relative_link_is_reported() {
    let readme = README.replace(
        "## 🤝 贡献指南\n",
        "## 🤝 贡献指南\n\n详见 [分析报告](docs/missing.md) 与 [官网](https://example.org)。\n",
    );
    let repo = make_repo(&readme);
    let reports = lint_readme(repo.path());

    assert_eq!(failing_checks(&reports), vec!["Markdown link targets"]);
    assert!(result_for(&reports, "Markdown link targets").violations[0]
        .contains("links `分析报告` to `docs/missing.md`, which does not exist"));
}

#[test]
fn links_inside_code_fences_are_ignored() {
    let readme = README.replace(
        "└── README.md",
        "└── README.md\n[示例](not/a/real/file.md)",
    );
    let repo = make_repo(&readme);
    assert!(result_for(&lint_readme(repo.path()), "Markdown link targets").passed);
}

#[test]
fn missing_readme_is_a_setup_failure_for_every_group() {
    let repo = make_repo(README);
    fs::remove_file(repo.path().join("README.md")).unwrap();
    let reports = lint_readme(repo.path());

    assert_eq!(reports.len(), 7);
    for report in &reports {
        assert!(!report.passed());
        match &report.outcome {
            GroupOutcome::SetupFailed { document, reason } => {
                assert_eq!(document, "README.md");
                assert!(reason.contains("does not exist"));
            }
            GroupOutcome::Ran { .. } => panic!("{} should not have run", report.title),
        }
    }
}

#[test]
fn readme_path_can_be_overridden() {
    let repo = make_repo(README);
    fs::rename(repo.path().join("README.md"), repo.path().join("README.zh.md")).unwrap();
    let config = LinterConfig::from_root(repo.path()).with_readme(repo.path().join("README.zh.md"));
    let reports = suite::run_target(Target::Readme, &config);

    // README.md itself is one of the documented artifacts.
    assert_eq!(failing_checks(&reports), vec!["Referenced files exist"]);
}

fn write_file(path: &Path, content: &str) {
    fs::create_dir_all(path.parent().expect("parent exists")).unwrap();
    fs::write(path, content).unwrap();
}
