//! `courserag format` — Run the configured formatters over every source file.

use courserag_config::ToolingConfig;

use super::toolchain;

/// Returns `true` when every format step succeeded.
pub async fn run(tooling: &ToolingConfig, check_only: bool) -> bool {
    let files = toolchain::discover_sources(&tooling.source_roots);
    if files.is_empty() {
        println!("No Rust source files found to format");
        return true;
    }
    println!("Found {} Rust source files to process", files.len());

    let outcomes = toolchain::run_steps(&tooling.format, &files, check_only).await;
    let success = toolchain::passed(&outcomes);

    toolchain::print_rule();
    if success {
        println!("✅ All formatting checks passed!");
    } else {
        println!("❌ Formatting issues found");
        for failed in outcomes.iter().filter(|o| !o.success) {
            match failed.exit_code {
                Some(code) => println!("   - {} (exit code {code})", failed.description),
                None => println!("   - {} (did not run)", failed.description),
            }
        }
    }
    toolchain::print_rule();

    if !success && check_only {
        println!("\nRun `courserag format` to fix formatting issues automatically");
    }

    success
}
