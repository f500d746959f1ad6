mod cli;

use chrono::Local;
use clap::Parser;
use release_notes::{
    adapters::{
        env_file::EnvFile, file_release_notes_writer::FileReleaseNotesWriter,
        octocrab::OctocrabAdapter, stdout_release_notes_writer::StdoutReleaseNotesWriter,
    },
    compiler::ReleaseNoteCompiler,
    ports::release_notes_writer::ReleaseNotesWriter,
};
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    init_tracing();

    let cli = cli::Cli::parse();

    let tracker = OctocrabAdapter::new(&cli.token, &cli.owner, &cli.repo)?;
    let compiler =
        ReleaseNoteCompiler::new(tracker, cli.template_path(), Local::now().date_naive());

    let writer: Box<dyn ReleaseNotesWriter> = if cli.dry_run {
        Box::new(StdoutReleaseNotesWriter)
    } else {
        Box::new(FileReleaseNotesWriter::new(&cli.root))
    };

    let release = match compiler.compile(writer.as_ref()).await {
        Ok(release) => release,
        Err(e) if e.is_not_found() => {
            tracing::error!("FATAL: {e}");
            if e.is_fatal(cli.allow_missing) {
                std::process::exit(1);
            }
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };

    tracing::info!(
        "compiled v{} from milestone {}: {} changes, {} breaking",
        release.version,
        release.milestone,
        release.changes.len(),
        release.breaking_count()
    );

    if let Some(path) = cli.github_env.as_ref().filter(|_| !cli.dry_run) {
        EnvFile::new(path).export_release(&release.version)?;
    }

    Ok(())
}
