//! Shared plumbing for the `format` and `lint` commands.
//!
//! Discovers source files and runs configured external tools, reporting
//! each step's outcome by exit code.

use courserag_config::ToolStep;
use std::path::PathBuf;
use tokio::process::Command;
use tracing::{debug, warn};
use walkdir::WalkDir;

const RULE_WIDTH: usize = 60;

/// Result of running one tool step.
#[derive(Debug, Clone)]
pub struct StepOutcome {
    pub description: String,
    pub success: bool,
    /// `None` when the process could not be started or was killed by a signal.
    pub exit_code: Option<i32>,
    pub advisory: bool,
}

pub fn print_rule() {
    println!("{}", "=".repeat(RULE_WIDTH));
}

/// All `.rs` files under the given roots, sorted. `target/` and hidden
/// directories are skipped; missing roots are ignored.
pub fn discover_sources(roots: &[String]) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = roots
        .iter()
        .flat_map(|root| {
            WalkDir::new(root)
                .into_iter()
                .filter_entry(|e| {
                    let name = e.file_name().to_string_lossy();
                    e.depth() == 0 || !(name == "target" || name.starts_with('.'))
                })
                .filter_map(Result::ok)
        })
        .filter(|e| e.file_type().is_file())
        .map(|e| e.into_path())
        .filter(|p| p.extension().is_some_and(|ext| ext == "rs"))
        .collect();
    files.sort();
    files.dedup();
    files
}

/// Assemble the argument list for a step.
fn step_args(step: &ToolStep, files: &[PathBuf], check_only: bool) -> Vec<String> {
    let mut args = step.args.clone();
    if check_only {
        args.extend(step.check_args.iter().cloned());
    }
    if step.pass_files {
        args.extend(files.iter().map(|f| f.display().to_string()));
    }
    args
}

/// Run one step, printing a banner before and a verdict after.
pub async fn run_step(step: &ToolStep, files: &[PathBuf], check_only: bool) -> StepOutcome {
    let args = step_args(step, files, check_only);

    println!();
    print_rule();
    println!("Running: {}", step.description);
    println!("Command: {} {}", step.program, args.join(" "));
    print_rule();

    debug!(program = %step.program, args = args.len(), "Spawning tool");
    let status = Command::new(&step.program).args(&args).status().await;

    let (success, exit_code) = match status {
        Ok(status) => (status.success(), status.code()),
        Err(e) => {
            warn!(program = %step.program, error = %e, "Failed to start tool");
            (false, None)
        }
    };

    if success {
        println!("✅ {} passed", step.description);
    } else {
        let code = exit_code.map_or_else(|| "none".to_string(), |c| c.to_string());
        if step.advisory {
            warn!(step = %step.description, exit_code = %code, "Advisory step failed");
        }
        println!("❌ {} failed with exit code {code}", step.description);
    }

    StepOutcome {
        description: step.description.clone(),
        success,
        exit_code,
        advisory: step.advisory,
    }
}

/// Run every step in order. A failing step does not stop later ones.
pub async fn run_steps(steps: &[ToolStep], files: &[PathBuf], check_only: bool) -> Vec<StepOutcome> {
    let mut outcomes = Vec::with_capacity(steps.len());
    for step in steps {
        outcomes.push(run_step(step, files, check_only).await);
    }
    outcomes
}

/// `true` when every non-advisory step succeeded.
pub fn passed(outcomes: &[StepOutcome]) -> bool {
    outcomes.iter().all(|o| o.success || o.advisory)
}
