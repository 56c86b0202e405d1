use clap::{Parser, ValueEnum};
use serde::Serialize;
use std::path::{Path, PathBuf};

pub const README_FILE: &str = "README.md";
pub const ANALYSIS_FILE: &str = "GAIX_Scam_Analysis.md";
pub const CONTRACT_FILE: &str = "GAIX.sol";
pub const CONTRACTS_DIR: &str = "contracts";

/// Artifacts the README documents; each must sit in the repository root.
pub const DOCUMENTED_ARTIFACTS: &[&str] = &[CONTRACT_FILE, ANALYSIS_FILE, README_FILE];

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Target {
    Readme,
    Analysis,
    Contract,
}

impl Target {
    pub const ALL: [Target; 3] = [Target::Readme, Target::Analysis, Target::Contract];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Command-line arguments for doc-lint
#[derive(Debug, Parser)]
#[command(name = "doc-lint")]
#[command(about = "Validate the scam-analysis teaching docs and their artifacts")]
#[command(version)]
pub struct Args {
    /// Repository root; discovered from the cwd when omitted
    #[arg(long)]
    pub root_dir: Option<PathBuf>,

    /// Targets to lint (repeatable); all targets when omitted
    #[arg(long = "target", value_enum)]
    pub targets: Vec<Target>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    #[arg(
        long,
        default_value = "warn",
        help = "Log level (trace, debug, info, warn, error)"
    )]
    pub log_level: String,
}

impl Args {
    /// Requested targets in their canonical order, without duplicates.
    pub fn selected_targets(&self) -> Vec<Target> {
        if self.targets.is_empty() {
            return Target::ALL.to_vec();
        }
        let mut targets = self.targets.clone();
        targets.sort();
        targets.dedup();
        targets
    }
}

#[derive(Debug, Clone)]
pub struct LinterConfig {
    pub root_dir: PathBuf,
    pub readme: PathBuf,
    pub analysis: PathBuf,
}

impl LinterConfig {
    pub fn from_root(root: &Path) -> Self {
        Self {
            root_dir: root.to_path_buf(),
            readme: root.join(README_FILE),
            analysis: root.join(ANALYSIS_FILE),
        }
    }

    /// Discover repo root by walking up from cwd to find .git directory
    pub fn discover() -> Option<Self> {
        let mut dir = std::env::current_dir().ok()?;
        loop {
            if dir.join(".git").exists() {
                return Some(Self::from_root(&dir));
            }
            if !dir.pop() {
                return None;
            }
        }
    }

    pub fn with_readme(mut self, readme: PathBuf) -> Self {
        self.readme = readme;
        self
    }

    /// The contract lives under contracts/ in the Hardhat layout; fall back to the root copy.
    pub fn contract(&self) -> PathBuf {
        let nested = self.root_dir.join(CONTRACTS_DIR).join(CONTRACT_FILE);
        if nested.is_file() {
            nested
        } else {
            self.root_dir.join(CONTRACT_FILE)
        }
    }

    pub fn document_path(&self, target: Target) -> PathBuf {
        match target {
            Target::Readme => self.readme.clone(),
            Target::Analysis => self.analysis.clone(),
            Target::Contract => self.contract(),
        }
    }

    /// Path relative to the root, for messages.
    pub fn display_path(&self, path: &Path) -> String {
        path.strip_prefix(&self.root_dir)
            .unwrap_or(path)
            .display()
            .to_string()
    }
}
