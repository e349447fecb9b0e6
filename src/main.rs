use clap::{Parser, Subcommand};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::Level;
use tracing_subscriber::EnvFilter;

use randurl::config::Config;
use randurl::error::AppResult;
use randurl::server;
use randurl::services::{RandomConfig, RandomOptions, UrlGenerator};

/// randurl - A URL random-parameter generator
#[derive(Parser, Debug)]
#[command(name = "randurl")]
#[command(version = "1.0.0")]
#[command(about = "A URL random-parameter generator", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Start the web server
    Server {
        /// Host to bind to (overrides SERVER_HOST env var)
        #[arg(long)]
        host: Option<String>,

        /// Port to bind to (overrides SERVER_PORT env var)
        #[arg(long)]
        port: Option<u16>,
    },

    /// Generate a URL with random parameters and print it
    Generate {
        /// URL to augment; query parameters it carries are preserved
        url: String,

        /// Alphabet for generated keys
        #[arg(long)]
        key_characters: Option<String>,

        /// Minimum generated key length (set together with --key-max-length)
        #[arg(long)]
        key_min_length: Option<i64>,

        /// Maximum generated key length (set together with --key-min-length)
        #[arg(long)]
        key_max_length: Option<i64>,

        /// Maximum candidates tried per unique key
        #[arg(long)]
        key_max_attempts: Option<i64>,

        /// Alphabet for generated values
        #[arg(long)]
        value_characters: Option<String>,

        /// Length of generated values
        #[arg(long)]
        value_length: Option<i64>,

        /// Minimum number of parameters to add (set together with --params-max-amount)
        #[arg(long)]
        params_min_amount: Option<i64>,

        /// Maximum number of parameters to add (set together with --params-min-amount)
        #[arg(long)]
        params_max_amount: Option<i64>,

        /// RNG seed for reproducible output
        #[arg(long)]
        seed: Option<u64>,
    },
}

#[tokio::main]
async fn main() -> AppResult<()> {
    let cli = Cli::parse();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(Level::INFO.to_string())),
        )
        .init();

    // Load configuration
    let config = Config::from_env()?;

    match cli.command {
        Commands::Server { host, port } => {
            // Override config with CLI args if provided
            let host = host.unwrap_or_else(|| config.server.host.clone());
            let port = port.unwrap_or(config.server.port);
            let addr = format!("{}:{}", host, port);

            server::run_server(config, addr).await
        }
        Commands::Generate {
            url,
            key_characters,
            key_min_length,
            key_max_length,
            key_max_attempts,
            value_characters,
            value_length,
            params_min_amount,
            params_max_amount,
            seed,
        } => {
            // CLI flags override the configured defaults field by field
            let defaults = config.generator.as_options();
            let options = RandomOptions {
                key_characters: key_characters.or(defaults.key_characters),
                key_min_length: key_min_length.or(defaults.key_min_length),
                key_max_length: key_max_length.or(defaults.key_max_length),
                key_max_attempts: key_max_attempts.or(defaults.key_max_attempts),
                value_characters: value_characters.or(defaults.value_characters),
                value_length: value_length.or(defaults.value_length),
                params_min_amount: params_min_amount.or(defaults.params_min_amount),
                params_max_amount: params_max_amount.or(defaults.params_max_amount),
            };

            let generator = UrlGenerator::new(&url, RandomConfig::new(&options));
            let generated = match seed {
                Some(seed) => generator.generate_with_rng(&mut StdRng::seed_from_u64(seed)),
                None => generator.generate(),
            };

            println!("{}", generated);
            Ok(())
        }
    }
}
