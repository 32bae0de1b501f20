use clap::{Parser, Subcommand};
use leaderboard_engine::providers::{BestTimesApi, FlatFileSource, RecordProvider};
use leaderboard_engine::{DistanceKey, LeaderboardEngine, RankingMode, SortConfig};

#[derive(Parser)]
#[command(name = "leaderboard-cli")]
#[command(about = "Leaderboard Engine CLI", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Flat tabular file with best times (tab-delimited)
    #[arg(short, long)]
    file: Option<String>,

    /// Base URL of the best-times API
    #[arg(long)]
    api_url: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the leaderboard
    Show {
        /// Sort, as KEY:asc|desc (e.g. MARATHON:asc)
        #[arg(short, long)]
        sort: Option<String>,

        /// Name search term
        #[arg(long)]
        search: Option<String>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let (provider, mode): (Box<dyn RecordProvider>, RankingMode) =
        match (&cli.file, &cli.api_url) {
            (Some(path), _) => (Box::new(FlatFileSource::new(path)), RankingMode::Local),
            (None, Some(url)) => (Box::new(BestTimesApi::new(url)), RankingMode::Delegated),
            (None, None) => anyhow::bail!("pass --file or --api-url"),
        };

    let mut engine = LeaderboardEngine::new().with_mode(mode);

    match cli.command {
        Commands::Show { sort, search } => {
            if let Some(value) = sort {
                engine.set_sort(SortConfig::from_query_value(&value)?);
            }
            if let Some(term) = search {
                engine.set_search(term);
            }

            engine.refresh(provider.as_ref()).await?;

            let view = engine.view();
            println!("{} athletes ({})", view.len(), provider.name());

            print!("{:>4}  {:<24}", "Rank", "Name");
            for key in DistanceKey::ALL {
                print!(" {:>13}", key.label());
            }
            println!();

            for athlete in &view {
                let rank = athlete
                    .rank
                    .number()
                    .map(|n| n.to_string())
                    .unwrap_or_else(|| "-".to_string());
                print!("{:>4}  {:<24}", rank, athlete.name);
                for key in DistanceKey::ALL {
                    print!(" {:>13}", engine.format_cell(athlete, key));
                }
                println!();
            }
        }
    }

    Ok(())
}
