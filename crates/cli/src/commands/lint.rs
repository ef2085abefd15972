//! `courserag lint` — Run the configured linters.
//!
//! Steps marked `advisory` (the type check by default) are reported but do
//! not affect the exit code.

use courserag_config::ToolingConfig;

use super::toolchain;

/// Returns `true` when every mandatory lint step succeeded.
pub async fn run(tooling: &ToolingConfig) -> bool {
    let files = toolchain::discover_sources(&tooling.source_roots);
    if files.is_empty() {
        println!("No Rust source files found to check");
        return true;
    }
    println!("Found {} Rust source files to check", files.len());

    let outcomes = toolchain::run_steps(&tooling.lint, &files, false).await;
    let success = toolchain::passed(&outcomes);

    toolchain::print_rule();
    if success {
        println!("✅ All quality checks passed!");
        for advisory in outcomes.iter().filter(|o| o.advisory && !o.success) {
            println!("   ⚠️  {} reported issues (advisory)", advisory.description);
        }
    } else {
        println!("❌ Some quality checks failed");
        println!("\nTo fix formatting issues, run:");
        println!("  courserag format");
    }
    toolchain::print_rule();

    success
}
