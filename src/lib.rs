pub mod backend;
pub mod catalog;
pub mod config;
pub mod dispatcher;
pub mod i18n;
pub mod logging;
pub mod preview;
pub mod selector;
pub mod terminal;

use std::io::Write;

use anyhow::{Context, Result};

use backend::{create_backend, CompletionBackend};
use catalog::ProblemEntry;
use config::Config;
use selector::Selection;
use terminal::TerminalDimensions;

/// Print the terminal size and one numbered preview per problem.
pub fn write_catalog<W: Write>(
    mut out: W,
    catalog: &[ProblemEntry],
    terminal: &TerminalDimensions,
) -> std::io::Result<()> {
    writeln!(out, "{terminal}")?;
    if catalog.is_empty() {
        writeln!(out, "{}", i18n::t("no_problems"))?;
    }
    let budget = terminal.preview_budget();
    for (i, entry) in catalog.iter().enumerate() {
        writeln!(
            out,
            "{}",
            preview::render_line(i + 1, &entry.filename, &entry.content, budget)
        )?;
    }
    Ok(())
}

// ── App entry point ───────────────────────────────────────────────

pub fn run() -> Result<()> {
    let config = Config::from_env()?;

    std::env::set_current_dir(&config.home_dir)
        .with_context(|| format!("changing directory to {}", config.home_dir.display()))?;

    let log_path = logging::init(&config.log_dir)?;
    tracing::info!("started");
    tracing::debug!("logging to {}", log_path.display());

    let mut problems = catalog::build_catalog(&config.problems_dir)?;
    catalog::load_all(&mut problems)?;
    let terminal = TerminalDimensions::detect();
    tracing::debug!("{} problems, terminal {terminal}", problems.len());

    write_catalog(std::io::stdout().lock(), &problems, &terminal)?;

    let selection =
        selector::prompt_selection(std::io::stdin().lock(), std::io::stdout(), problems.len())?;

    let backend = create_backend(&config);
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    runtime.block_on(handle_selection(
        std::io::stdout(),
        selection,
        &problems,
        backend.as_ref(),
    ))
}

/// Act on the user's choice: say goodbye on exit, otherwise send the chosen
/// problem and print the answer.
pub async fn handle_selection<W: Write>(
    mut out: W,
    selection: Selection,
    problems: &[ProblemEntry],
    backend: &dyn CompletionBackend,
) -> Result<()> {
    let index = match selection {
        Selection::Exit => {
            writeln!(out, "{}", i18n::t("goodbye"))?;
            tracing::info!("terminated by user");
            return Ok(());
        }
        Selection::Index(n) => n,
    };

    let entry = problems
        .get(index.wrapping_sub(1))
        .with_context(|| format!("no problem numbered {index}"))?;
    tracing::info!("selected {index}: {}", entry.filename);
    writeln!(out, "{}", i18n::t("waiting"))?;
    out.flush()?;

    let answer = dispatcher::dispatch(backend, entry).await?;
    writeln!(out, "{answer}")?;
    Ok(())
}
