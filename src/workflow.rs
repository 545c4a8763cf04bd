use crate::cli;
use anyhow::{Context, Result, bail};
use fpick::{FileMatcher, OutputOption, Picker};
use tracing::info;

// Builds the matcher from whichever filter flag was given. Empty values count
// as absent.
fn build_matcher(filter: &cli::FilterArgs) -> Result<FileMatcher> {
    let name = filter.name.as_deref().filter(|s| !s.is_empty());
    let regex = filter.regex.as_deref().filter(|s| !s.is_empty());
    match (name, regex) {
        (Some(name), None) => Ok(FileMatcher::exact(name)),
        (None, Some(pattern)) => FileMatcher::regex(pattern)
            .with_context(|| format!("Invalid --regex pattern '{}'", pattern)),
        _ => bail!("argument error: either --name or --regex should be present"),
    }
}

fn output_options(cli_args: &cli::Cli) -> Vec<OutputOption> {
    let mut options = Vec::new();
    if cli_args.flat {
        options.push(OutputOption::FlatDir);
    }
    options
}

// Main orchestrator for the fpick command.
pub fn run_fpick(cli_args: cli::Cli) -> Result<()> {
    // Step 1: Validate the filter before touching the filesystem.
    let matcher = build_matcher(&cli_args.filter)?;
    let options = output_options(&cli_args);

    // Step 2: Bind source and destination.
    let picker = Picker::new(&cli_args.src, &cli_args.dst)?;

    // Step 3: Either report the plan or carry it out.
    if cli_args.dry_run {
        let plan = picker.plan(&matcher, &options)?;
        for planned in &plan {
            println!(
                "{} -> {}",
                planned.file.path.display(),
                planned.dest_path().display()
            );
        }
        info!(count = plan.len(), "dry run, nothing copied");
        return Ok(());
    }

    let copied = picker.pick(&matcher, &options).with_context(|| {
        format!(
            "Failed to pick files from {} into {}",
            picker.src().display(),
            picker.dst().display()
        )
    })?;
    info!(copied, dst = %picker.dst().display(), "pick finished");

    Ok(())
}
