use clap::{Parser, Subcommand};
use moodreels::reels::{Invocation, ReelResult};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(name = "moodreels")]
#[command(about = "Short-video recommendations by mood", long_about = None)]
struct Args {
    /// Default the log filter to debug
    #[arg(long, global = true)]
    debug: bool,

    /// Log as JSON lines
    #[arg(long, global = true)]
    json_logs: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the HTTP service
    Serve {
        #[arg(short, long)]
        config: Option<String>,
    },
    /// Fetch reels for a mood once and print the rendered markup
    Fetch {
        #[arg(short, long, default_value = "http://localhost:8080")]
        endpoint: String,
        mood: String,
    },
}

fn init_logging(debug: bool, json: bool) {
    let default_filter = if debug {
        "moodreels=debug,tower_http=debug"
    } else {
        "moodreels=info,tower_http=info"
    };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| default_filter.into());

    let registry = tracing_subscriber::registry().with(filter);
    if json {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}

#[tokio::main]
async fn main() {
    let args = Args::parse();
    init_logging(args.debug, args.json_logs);

    match args.command {
        Command::Serve { config } => {
            if let Err(e) = moodreels::run(config.as_deref(), args.debug).await {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        }
        Command::Fetch { endpoint, mood } => {
            let (markup, invocation) = moodreels::fetch_once(&endpoint, &mood).await;
            println!("{}", markup);
            if matches!(invocation, Invocation::Rendered(ReelResult::Failure(_))) {
                std::process::exit(1);
            }
        }
    }
}
