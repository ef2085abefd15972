//! `courserag serve` — Start the HTTP API server.

use courserag_config::AppConfig;

pub async fn run(
    mut config: AppConfig,
    port_override: Option<u16>,
) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(port) = port_override {
        config.gateway.port = port;
    }

    println!("📚 CourseRAG API");
    println!("   Listening: {}:{}", config.gateway.host, config.gateway.port);
    println!("   Courses:   {}", config.catalog.course_titles.len());

    courserag_gateway::start(config).await?;

    Ok(())
}
