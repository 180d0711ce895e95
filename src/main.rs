use clap::Parser;
use tracing::{debug, error, info, warn};
use tvrename::cli::Args;
use tvrename::config::RenamerConfig;
use tvrename::history::write_history;
use tvrename::logging;
use tvrename::output::{display_dry_run, display_execution_result};
use tvrename::progress::{should_use_colors, Progress};
use tvrename::{rename_show, AppError, RenameResult, ShowContext};

fn main() {
    // Load .env file if present (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let args = Args::parse();

    logging::init(args.verbose);

    if let Err(e) = run(args) {
        error!("{}", e);
        eprintln!("\nError: {}", e.detailed_message());
        std::process::exit(e.exit_code().into());
    }
}

fn run(args: Args) -> Result<(), AppError> {
    let config = RenamerConfig::from_env().merge(args.show_dir.clone(), args.name.clone());
    debug!(?config, "Configuration resolved");

    let show_dir = config.show_dir.ok_or(AppError::MissingShowDir)?;
    let show = ShowContext::new(&show_dir, config.show_name.as_deref())?;

    info!(name = %show.name(), path = ?show.directory(), dry_run = args.dry, "Renaming show");

    let mut progress = Progress::new_with_ui(args.verbose > 0, should_use_colors());
    let mut result = RenameResult::new(args.dry);

    let outcome = rename_show(&show, &mut result, &mut progress);

    // Written even when the run aborted, so partial renames are on record
    if let Some(history_dir) = &args.history {
        if args.dry || result.is_empty() {
            debug!("Nothing renamed, no history written");
        } else {
            match write_history(&result, &show, history_dir, outcome.is_ok()) {
                Ok(path) => progress.history_written(&path),
                Err(e) if outcome.is_err() => warn!("Failed to write history: {}", e),
                Err(e) => return Err(e.into()),
            }
        }
    }

    outcome?;

    progress.run_complete(result.len(), args.dry);

    if args.dry {
        display_dry_run(&result, show.name(), &mut std::io::stdout())
            .map_err(|e| AppError::Other(format!("Failed to display output: {}", e)))?;
    } else {
        display_execution_result(&result, &mut std::io::stdout())
            .map_err(|e| AppError::Other(format!("Failed to display output: {}", e)))?;
    }

    Ok(())
}
