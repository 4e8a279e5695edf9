use clap::Parser;
use email_addresses::utils::{logger, validation::Validate};
use email_addresses::{run_query, CliConfig, ExecutionContext, QueryFilter, TableDefinition};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    if config.json_logs {
        logger::init_json_logger(config.verbose);
    } else {
        logger::init_cli_logger(config.verbose);
    }

    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if config.print_schema {
        println!("{}", serde_json::to_string_pretty(&TableDefinition::email_addresses())?);
        return Ok(());
    }

    let settings = match config.resolve().and_then(|s| s.validate().map(|_| s)) {
        Ok(settings) => settings,
        Err(e) => {
            tracing::error!("Configuration validation failed: {}", e);
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(2);
        }
    };

    let ctx = ExecutionContext::new();
    let on_interrupt = ctx.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::warn!("Interrupted, cancelling query");
            on_interrupt.cancel();
        }
    });

    match run_query(&settings, &ctx, &QueryFilter::new()).await {
        Ok(outcome) => {
            match &outcome.written_to {
                Some(path) => eprintln!("📁 {} rows saved to: {}", outcome.row_count, path),
                None => println!("{}", outcome.rendered),
            }
            Ok(())
        }
        Err(e) => {
            tracing::error!("Query failed: {}", e);
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    }
}
