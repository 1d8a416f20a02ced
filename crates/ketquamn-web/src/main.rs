use anyhow::Result;
use clap::Parser;
use ketquamn_web::cli::{analyze_cmd, ping_cmd, robots_cmd, serve, sitemap_cmd, Cli, Command};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.log_json);

    let config = cli.site.to_config();

    match cli.command {
        Command::Serve { bind } => serve::run(config, &bind).await,
        Command::Sitemap { kind, date } => sitemap_cmd::run(&config, kind, date),
        Command::Robots { check, agent } => robots_cmd::run(&config, check.as_deref(), &agent),
        Command::Ping { json } => ping_cmd::run(&config, json).await,
        Command::Analyze {
            file,
            keyword,
            json,
        } => analyze_cmd::run(&file, &keyword, json),
    }
}

fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("ketquamn=info,ketquamn_web=info,ketquamn_seo=info"));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);
    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}
