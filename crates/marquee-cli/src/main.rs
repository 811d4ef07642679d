use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

use marquee_form::Config;

mod commands;

#[derive(Debug, Parser)]
#[command(name = "marquee", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Base URL of the movie API (default: http://localhost:8000/api)
    #[arg(long, global = true)]
    api: Option<String>,
}

#[derive(Debug, clap::Subcommand)]
enum Commands {
    /// Create a new movie from a draft file
    ///
    /// Reads a movie draft from a TOML or JSON file and feeds it through the
    /// movie form field by field, exactly as an editor would fill it in:
    ///
    /// - Writers and cast members repeating an identifier are skipped
    /// - Select fields (status, type, language) must use a known option
    /// - The draft is validated before anything is sent
    ///
    /// On success the backend's record is printed as JSON. On failure you
    /// are asked whether to discard the draft; if you keep it, it is saved
    /// next to the input as `<name>.unsaved.json`, along with the path of a
    /// poster given with `--poster`. Passing that file back to `create`
    /// re-attaches the poster.
    Create {
        /// Path to the draft file (.toml or .json)
        draft: PathBuf,

        /// Poster image to upload (jpg, png or webp)
        #[arg(long)]
        poster: Option<PathBuf>,

        /// URL of an already uploaded trailer
        #[arg(long)]
        trailer_url: Option<String>,

        /// Validate and show the payload without sending it
        #[arg(long)]
        dry_run: bool,
    },
    /// Update an existing movie from a stored record
    Edit {
        /// Path to the movie record file (.toml or .json, with `_id`)
        record: PathBuf,

        /// Override a field, e.g. --set title="New title" (repeatable)
        #[arg(long = "set", value_name = "FIELD=VALUE")]
        sets: Vec<String>,

        /// Replace the poster with this image
        #[arg(long)]
        poster: Option<PathBuf>,

        /// URL of an already uploaded trailer
        #[arg(long)]
        trailer_url: Option<String>,

        /// Validate and show the payload without sending it
        #[arg(long)]
        dry_run: bool,
    },
    /// Validate a draft file and print the fields it would submit
    Check {
        /// Path to the draft file (.toml or .json)
        draft: PathBuf,
    },
    /// List the allowed values of the select fields
    Options {
        /// Only show one field (status, type, language, genre)
        field: Option<String>,
    },
    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Debug, clap::Subcommand)]
enum ConfigAction {
    /// Show the effective configuration
    Show,
    /// Print the config file path
    Path,
    /// Print an example config file
    Example,
    /// Create the config file if it does not exist
    Init,
}

fn load_config(api: Option<String>) -> Result<Config> {
    match api {
        Some(url) => Config::load_with_api_base_url(url),
        None => Config::load(),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = load_config(cli.api)?;
    twyg::setup(config.logging.clone())
        .map_err(|e| anyhow::anyhow!("Failed to initialise logging: {e}"))?;
    log::debug!("Using movie API at {}", config.api_base_url);

    match cli.command {
        Commands::Create {
            draft,
            poster,
            trailer_url,
            dry_run,
        } => {
            let opts = commands::SubmitOpts {
                poster,
                trailer_url,
                dry_run,
            };
            commands::run_create(&config, draft, opts).await?;
        }
        Commands::Edit {
            record,
            sets,
            poster,
            trailer_url,
            dry_run,
        } => {
            let opts = commands::SubmitOpts {
                poster,
                trailer_url,
                dry_run,
            };
            commands::run_edit(&config, record, &sets, opts).await?;
        }
        Commands::Check { draft } => {
            commands::run_check(draft)?;
        }
        Commands::Options { field } => {
            commands::show_options(field.as_deref())?;
        }
        Commands::Config { action } => match action {
            ConfigAction::Show => commands::config::show_config(&config),
            ConfigAction::Path => commands::config::show_path(),
            ConfigAction::Example => commands::config::show_example(),
            ConfigAction::Init => commands::config::init_config()?,
        },
    }

    Ok(())
}
