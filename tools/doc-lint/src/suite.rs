use crate::checks::{self, CheckContext, CheckList, CheckResult};
use crate::config::{LinterConfig, Target};
use crate::document::Document;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckGroup {
    Structure,
    RequiredSections,
    Content,
    MarkdownSyntax,
    Consistency,
    Safety,
    Accessibility,
    AnalysisReport,
    AnalysisCrossReferences,
    ContractArtifacts,
}

impl CheckGroup {
    pub fn for_target(target: Target) -> &'static [CheckGroup] {
        match target {
            Target::Readme => &[
                CheckGroup::Structure,
                CheckGroup::RequiredSections,
                CheckGroup::Content,
                CheckGroup::MarkdownSyntax,
                CheckGroup::Consistency,
                CheckGroup::Safety,
                CheckGroup::Accessibility,
            ],
            Target::Analysis => &[CheckGroup::AnalysisReport, CheckGroup::AnalysisCrossReferences],
            Target::Contract => &[CheckGroup::ContractArtifacts],
        }
    }

    pub fn target(self) -> Target {
        match self {
            CheckGroup::AnalysisReport | CheckGroup::AnalysisCrossReferences => Target::Analysis,
            CheckGroup::ContractArtifacts => Target::Contract,
            _ => Target::Readme,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            CheckGroup::Structure => "Structure",
            CheckGroup::RequiredSections => "Required sections",
            CheckGroup::Content => "Content",
            CheckGroup::MarkdownSyntax => "Markdown syntax",
            CheckGroup::Consistency => "Consistency",
            CheckGroup::Safety => "Safety & compliance",
            CheckGroup::Accessibility => "Accessibility",
            CheckGroup::AnalysisReport => "Analysis report",
            CheckGroup::AnalysisCrossReferences => "Analysis cross-references",
            CheckGroup::ContractArtifacts => "Contract artifacts",
        }
    }

    pub fn checks(self) -> CheckList {
        match self {
            CheckGroup::Structure => checks::structure::checks(),
            CheckGroup::RequiredSections => checks::sections::checks(),
            CheckGroup::Content => checks::content::checks(),
            CheckGroup::MarkdownSyntax => checks::markdown::checks(),
            CheckGroup::Consistency => checks::consistency::checks(),
            CheckGroup::Safety => checks::safety::checks(),
            CheckGroup::Accessibility => checks::accessibility::checks(),
            CheckGroup::AnalysisReport => checks::analysis::checks(),
            CheckGroup::AnalysisCrossReferences => checks::cross_refs::checks(),
            CheckGroup::ContractArtifacts => checks::contract::checks(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum GroupOutcome {
    Ran { results: Vec<CheckResult> },
    SetupFailed { document: String, reason: String },
}

#[derive(Debug, Clone, Serialize)]
pub struct GroupReport {
    pub group: CheckGroup,
    pub target: Target,
    pub title: String,
    pub outcome: GroupOutcome,
}

impl GroupReport {
    pub fn passed(&self) -> bool {
        match &self.outcome {
            GroupOutcome::Ran { results } => results.iter().all(|r| r.passed),
            GroupOutcome::SetupFailed { .. } => false,
        }
    }

    /// Check results, empty when the group could not be set up.
    pub fn results(&self) -> &[CheckResult] {
        match &self.outcome {
            GroupOutcome::Ran { results } => results,
            GroupOutcome::SetupFailed { .. } => &[],
        }
    }

    pub fn result(&self, name: &str) -> Option<&CheckResult> {
        self.results().iter().find(|r| r.name == name)
    }
}

/// Load the group's document afresh and run every check against it.
/// A missing or unreadable document fails the group, never the process.
pub fn run_group(group: CheckGroup, config: &LinterConfig) -> GroupReport {
    let path = config.document_path(group.target());
    let outcome = match Document::load(&path) {
        Ok(doc) => {
            log::debug!("{}: loaded {} ({} lines)", group.title(), path.display(), doc.lines.len());
            let ctx = CheckContext { config, doc: &doc };
            let results: Vec<CheckResult> = group.checks().iter().map(|check| check.run(&ctx)).collect();
            log::debug!(
                "{}: {}/{} checks passed",
                group.title(),
                results.iter().filter(|r| r.passed).count(),
                results.len()
            );
            GroupOutcome::Ran { results }
        }
        Err(err) => {
            log::warn!("{}: setup failed: {err}", group.title());
            GroupOutcome::SetupFailed {
                document: config.display_path(&path),
                reason: err.to_string(),
            }
        }
    };

    GroupReport {
        group,
        target: group.target(),
        title: group.title().to_string(),
        outcome,
    }
}

pub fn run_target(target: Target, config: &LinterConfig) -> Vec<GroupReport> {
    CheckGroup::for_target(target)
        .iter()
        .map(|group| run_group(*group, config))
        .collect()
}

pub fn all_passed(reports: &[GroupReport]) -> bool {
    reports.iter().all(GroupReport::passed)
}
