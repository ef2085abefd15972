//! `courserag status` — Show effective configuration.

use courserag_config::AppConfig;
use std::path::Path;

pub fn run(config: &AppConfig, config_path: &Path) {
    println!("📚 CourseRAG Status");
    println!("===================");
    println!("  Config:       {}", config_path.display());
    println!(
        "  Gateway:      {}:{}",
        config.gateway.host, config.gateway.port
    );
    println!("  Body limit:   {} bytes", config.gateway.body_limit_bytes);
    println!("  History:      last {} exchanges", config.session.max_history);
    println!("  Courses:      {}", config.catalog.course_titles.len());
    println!("  Source roots: {}", config.tooling.source_roots.join(", "));
    println!(
        "  Tool steps:   {} format, {} lint",
        config.tooling.format.len(),
        config.tooling.lint.len()
    );

    if config_path.exists() {
        println!("\n  ✅ Config file found");
    } else {
        println!("\n  ⚠️  No config file — running on defaults. Example:\n");
        println!("{}", AppConfig::default_toml());
    }

    if config.catalog.course_titles.is_empty() {
        println!("  ⚠️  Course catalog is empty — add [catalog] course_titles");
    }
}
