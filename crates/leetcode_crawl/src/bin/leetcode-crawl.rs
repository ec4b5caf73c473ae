use std::path::PathBuf;

use clap::Parser;
use leetcode_crawl::{tracing::init_tracing_subscriber, LeetCodeClient, ProblemArchiverBuilder};
use problem_store::FsArchiveStore;

#[derive(Parser)]
#[command(name = "leetcode-crawl", about = "Archive LeetCode problems and solutions to disk")]
struct Cli {
    /// Session cookie; premium accounts get fuller responses
    #[arg(long, env = "LEETCODE_COOKIE", hide_env_values = true)]
    cookie: Option<String>,

    /// Archive root directory
    #[arg(long, default_value = FsArchiveStore::DEFAULT_ROOT)]
    output_dir: PathBuf,

    /// Lowest frontend id to archive
    #[arg(long, default_value = "0")]
    from: u32,

    /// Highest frontend id to archive (inclusive)
    #[arg(long, default_value = "10000")]
    to: u32,

    /// Frontend ids to skip, comma separated
    #[arg(long, value_delimiter = ',')]
    exclude: Vec<u32>,

    /// Do not fetch problem statements
    #[arg(long)]
    no_question: bool,

    /// Do not fetch solutions
    #[arg(long)]
    no_solution: bool,

    /// API base URL
    #[arg(long, env = "LEETCODE_BASE_URL", default_value = LeetCodeClient::BASE_URL)]
    base_url: String,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    let _guard = sentry::init((
        std::env::var("SENTRY_DSN").unwrap_or_default(),
        sentry::ClientOptions {
            release: sentry::release_name!(),
            ..Default::default()
        },
    ));

    let cli = Cli::parse();
    init_tracing_subscriber()?;

    if cli.from > cli.to {
        anyhow::bail!("--from ({}) must not exceed --to ({})", cli.from, cli.to);
    }

    let client = LeetCodeClient::new(cli.cookie).with_base_url(cli.base_url);
    if !client.has_cookie() {
        tracing::warn!("LEETCODE_COOKIE not set, premium content will be missing");
    }

    let archiver = ProblemArchiverBuilder::new()
        .source(client)
        .store(FsArchiveStore::new(&cli.output_dir))
        .included(cli.from..=cli.to)
        .excluded(cli.exclude)
        .include_question(!cli.no_question)
        .include_solution(!cli.no_solution)
        .build();

    let report = archiver.run().await?;
    tracing::info!(
        index = ?report.index_path,
        matched = report.matched,
        questions = report.questions_saved,
        solutions = report.solutions_saved,
        "Archive complete"
    );

    Ok(())
}
