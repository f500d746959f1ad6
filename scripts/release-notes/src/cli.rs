use std::path::PathBuf;

use clap::Parser;
use release_notes::compiler::DEFAULT_TEMPLATE_PATH;

#[derive(Parser)]
#[command(about = "Compiles the release notes of the milestone linked from the open 'v<version> Release Planning' issue.")]
pub struct Cli {
    /// GitHub token used to query the repository
    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
    pub token: String,

    /// Owner of the repository
    #[arg(long, env = "GITHUB_REPOSITORY_OWNER")]
    pub owner: String,

    /// Name of the repository
    #[arg(long, env = "GITHUB_REPOSITORY_NAME")]
    pub repo: String,

    /// Repository checkout the template and the notes are relative to
    #[arg(short, long, default_value = ".")]
    pub root: PathBuf,

    /// Template path, relative to `root`
    #[arg(short, long, default_value = DEFAULT_TEMPLATE_PATH)]
    pub template: PathBuf,

    /// File receiving RELEASE_VERSION and RELEASE_BRANCH
    #[arg(long, env = "GITHUB_ENV")]
    pub github_env: Option<PathBuf>,

    /// Print the notes to stdout instead of writing them.
    #[arg(long, action)]
    pub dry_run: bool,

    /// Exit successfully when there is no tracking issue or milestone link.
    #[arg(long, action)]
    pub allow_missing: bool,
}

impl Cli {
    pub fn template_path(&self) -> PathBuf {
        self.root.join(&self.template)
    }
}
