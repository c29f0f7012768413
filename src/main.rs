mod cli;
mod config;

use cli::Args;
use config::ConfigFile;
use owo_colors::OwoColorize;
use resolved_components::adapters::outbound::console::StderrProgressReporter;
use resolved_components::adapters::outbound::filesystem::FileSystemReader;
use resolved_components::application::dto::ReportRequest;
use resolved_components::application::factories::{
    FormatterFactory, PresenterFactory, PresenterType,
};
use resolved_components::application::read_models::ComponentReportBuilder;
use resolved_components::application::use_cases::BuildComponentReportUseCase;
use resolved_components::shared::error::{ComponentError, ExitCode};
use resolved_components::shared::Result;
use std::path::{Path, PathBuf};
use std::process;

fn main() {
    let code = match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("\n{}\n", "❌ An error occurred:".red().bold());
            eprintln!("{}", e);

            // Display error chain
            for cause in e.chain().skip(1) {
                eprintln!("\n{} {}", "Caused by:".yellow(), cause);
            }

            eprintln!();
            ExitCode::ApplicationError
        }
    };
    process::exit(code.as_i32());
}

fn run() -> Result<ExitCode> {
    // clap exits with code 2 on invalid arguments
    let args = Args::parse_args();

    validate_input_path(&args.input)?;

    let config = load_config(args.config.as_deref(), &args.input)?;
    let options = config.merge(args.format, args.exclude, args.fail_on_unresolved)?;

    // Create adapters (Dependency Injection)
    let use_case =
        BuildComponentReportUseCase::new(FileSystemReader::new(), StderrProgressReporter::new());

    let request = ReportRequest::new(args.input, options.exclude_patterns);
    let response = use_case.execute(request)?;

    eprintln!("{}", FormatterFactory::progress_message(options.format));

    let report = ComponentReportBuilder::build(&response);
    let formatted_output = FormatterFactory::create(options.format).format(&report)?;

    PresenterFactory::create(PresenterType::from_output(args.output)).present(&formatted_output)?;

    if options.fail_on_unresolved && response.has_unresolved_artifacts() {
        eprintln!(
            "{}",
            format!(
                "❌ {} artifact(s) could not be resolved (--fail-on-unresolved)",
                response.unresolved_artifact_count()
            )
            .red()
        );
        return Ok(ExitCode::UnresolvedArtifacts);
    }

    Ok(ExitCode::Success)
}

/// Uses `--config` when given, otherwise looks for a config file next to the input.
fn load_config(explicit: Option<&Path>, input: &Path) -> Result<ConfigFile> {
    if let Some(path) = explicit {
        return config::load_config_from_path(path);
    }

    let dir = match input.parent() {
        Some(parent) if parent != Path::new("") => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };
    Ok(config::discover_config(&dir)?.unwrap_or_default())
}

fn validate_input_path(path: &Path) -> Result<()> {
    let metadata = match std::fs::symlink_metadata(path) {
        Ok(metadata) => metadata,
        Err(_) => {
            return Err(ComponentError::ResolutionResultNotFound {
                path: path.to_path_buf(),
                suggestion: format!(
                    "\"{}\" does not exist.\n   \
                     Export the resolution result first, or specify the correct file with the --input option.",
                    path.display()
                ),
            }
            .into())
        }
    };

    // Security check: Reject symbolic links for the input path
    if metadata.is_symlink() {
        return Err(ComponentError::InvalidInputPath {
            path: path.to_path_buf(),
            reason: "Security: Input path is a symbolic link. For security reasons, symbolic links are not allowed.".to_string(),
        }
        .into());
    }

    if !metadata.is_file() {
        return Err(ComponentError::InvalidInputPath {
            path: path.to_path_buf(),
            reason: "Not a regular file".to_string(),
        }
        .into());
    }

    Ok(())
}
