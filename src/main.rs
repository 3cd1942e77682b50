use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

use chart_scraper::client::ChartClient;
use chart_scraper::config::AppConfig;
use chart_scraper::export;
use chart_scraper::models::{ChartData, ChartRequest};
use chart_scraper::pipeline::{self, Delay};
use chart_scraper::utils::Timer;

#[derive(Parser)]
#[command(name = "chart-scraper", about = "Billboard chart scraper", version)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Text, global = true)]
    format: Format,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Text,
    Json,
    Csv,
}

#[derive(Subcommand)]
enum Command {
    /// Fetch one weekly chart (latest issue unless --date is given)
    Chart {
        name: String,
        /// Issue date, YYYY-MM-DD
        #[arg(short, long)]
        date: Option<String>,
    },

    /// Fetch one year-end chart (latest year unless --year is given)
    YearEnd {
        name: String,
        #[arg(short, long)]
        year: Option<String>,
    },

    /// List chart names
    List {
        #[arg(long)]
        year_end: bool,
    },

    /// Walk backwards through consecutive issues of a weekly chart
    History {
        name: String,
        #[arg(short, long)]
        date: Option<String>,
        #[arg(short, long, default_value_t = 5)]
        count: usize,
    },

    /// Fetch several issues of one chart concurrently
    Batch {
        name: String,
        #[arg(short, long = "date", required = true, num_args = 1..)]
        dates: Vec<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => "chart_scraper=info,warn",
        1 => "chart_scraper=debug,info",
        _ => "trace",
    };

    tracing_subscriber::registry()
        .with(fmt::layer().compact().with_target(false).with_writer(std::io::stderr))
        .with(EnvFilter::new(filter))
        .init();

    let config = AppConfig::load()?;
    let policy = config.http.fetch_policy();
    let client = ChartClient::from_config(&config).context("Failed to build chart client")?;

    match cli.command {
        Command::Chart { name, date } => {
            let _t = Timer::start(format!("chart {}", name));
            let request = ChartRequest::new(&name, date.as_deref(), None)?.with_policy(policy);
            let report = client.fetch_chart(&request).await?;
            emit(&report.chart, cli.format)?;
        }

        Command::YearEnd { name, year } => {
            let _t = Timer::start(format!("year-end {}", name));
            let request = match year {
                Some(y) => ChartRequest::new(&name, None, Some(&y))?,
                None => ChartRequest::year_end(name.as_str(), None),
            }
            .with_policy(policy);
            let report = client.fetch_chart(&request).await?;
            emit(&report.chart, cli.format)?;
        }

        Command::List { year_end } => {
            let names = client.list_charts(year_end).await?;
            if names.is_empty() {
                println!("No charts found.");
            } else {
                println!("{} charts:", names.len());
                for n in &names {
                    println!("  {}", n);
                }
            }
        }

        Command::History { name, date, count } => {
            let _t = Timer::start(format!("history {} x{}", name, count));
            let request = ChartRequest::new(&name, date.as_deref(), None)?.with_policy(policy);
            let delay = Delay::from(&config.pipeline);
            let reports = pipeline::walk_history(&client, request, count, delay).await?;
            for report in &reports {
                emit(&report.chart, cli.format)?;
            }
        }

        Command::Batch { name, dates } => {
            let _t = Timer::start(format!("batch {} ({} issues)", name, dates.len()));
            let requests = dates
                .iter()
                .map(|d| -> Result<ChartRequest> { Ok(ChartRequest::new(&name, Some(d), None)?.with_policy(policy)) })
                .collect::<Result<Vec<_>>>()?;

            let results = pipeline::fetch_batch(Arc::new(client), requests, config.pipeline.concurrency).await;
            let mut failed = 0usize;
            for (date, result) in dates.iter().zip(results) {
                match result {
                    Ok(report) => emit(&report.chart, cli.format)?,
                    Err(e) => {
                        warn!("{} {}: {}", name, date, e);
                        failed += 1;
                    }
                }
            }
            info!("Done: {} ok, {} failed", dates.len() - failed, failed);
        }
    }

    Ok(())
}

fn emit(chart: &ChartData, format: Format) -> Result<()> {
    match format {
        Format::Text => println!("{}", export::render_text(chart)),
        Format::Json => println!("{}", export::to_json(chart)?),
        Format::Csv => export::write_csv(chart, std::io::stdout().lock())?,
    }
    Ok(())
}
