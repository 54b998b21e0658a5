//! Folio CLI
//!
//! Thin wrapper around folio-core for command-line usage.
//!
//! ## Usage
//!
//! ```bash
//! # Validate one contact-form field
//! folio validate email ada@example.com
//!
//! # Run the whole contact-form submission
//! folio submit --name Ada --email ada@example.com --message "Hello there!"
//!
//! # Generate a palette from a base color, or from a random one
//! folio palette "#336699"
//! folio palette --random
//!
//! # Format, minify or validate JSON
//! folio json format '{"a":1}'
//! folio json validate --file data.json
//!
//! # Base64
//! folio base64 encode "hello"
//! folio base64 decode aGVsbG8=
//!
//! # Show recorded log entries
//! folio logs --limit 20
//! ```

use std::io::Read;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use folio_core::logging::{tail_entries, LoggingBuilder};
use folio_core::tools::{base64, json};
use folio_core::{
    generate_palette, random_color, validate, Field, FolioConfig, Palette, SubmissionWorkflow,
    SubmitOutcome,
};

/// Folio - portfolio tools from the terminal
#[derive(Parser)]
#[command(name = "folio")]
#[command(version = "0.1.0")]
#[command(about = "Folio - contact form, palette and text tools")]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Data directory for config and logs (default: platform data dir/folio)
    #[arg(short, long, global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate one contact-form field
    Validate {
        /// Field name (name, email, message, or any other)
        field: String,
        /// Raw value as typed
        value: String,
    },

    /// Validate and send the contact form
    Submit {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        message: String,
        /// Simulated send latency (default from config)
        #[arg(long)]
        delay_ms: Option<u64>,
    },

    /// Generate an eight-color palette
    Palette {
        /// Base color as #RRGGBB
        #[arg(required_unless_present = "random", conflicts_with = "random")]
        hex: Option<String>,
        /// Start from a random base color
        #[arg(long)]
        random: bool,
        /// Print the colors as a JSON array
        #[arg(long)]
        json: bool,
    },

    /// JSON formatter and validator
    Json {
        #[command(subcommand)]
        action: JsonAction,
    },

    /// Base64 encoder and decoder
    Base64 {
        #[command(subcommand)]
        action: Base64Action,
    },

    /// Show recorded log entries
    Logs {
        /// Number of most recent entries
        #[arg(short, long, default_value = "50")]
        limit: usize,
    },
}

/// Text input taken from an argument, a file, or stdin
#[derive(clap::Args)]
struct TextInput {
    /// Input text (reads stdin when neither this nor --file is given)
    text: Option<String>,
    /// Read the input from a file
    #[arg(short, long, conflicts_with = "text")]
    file: Option<PathBuf>,
}

impl TextInput {
    fn read(self) -> Result<String> {
        match (self.text, self.file) {
            (Some(text), _) => Ok(text),
            (None, Some(path)) => std::fs::read_to_string(&path)
                .with_context(|| format!("Failed to read {}", path.display())),
            (None, None) => {
                let mut buf = String::new();
                std::io::stdin()
                    .read_to_string(&mut buf)
                    .context("Failed to read stdin")?;
                Ok(buf)
            }
        }
    }
}

#[derive(Subcommand)]
enum JsonAction {
    /// Pretty-print with two-space indentation
    Format(TextInput),
    /// Remove all insignificant whitespace
    Minify(TextInput),
    /// Check that the input parses
    Validate(TextInput),
}

#[derive(Subcommand)]
enum Base64Action {
    /// Encode UTF-8 text
    Encode(TextInput),
    /// Decode to UTF-8 text
    Decode(TextInput),
}

fn setup_logging(verbosity: u8, data_dir: &Path) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let result = LoggingBuilder::new(data_dir.join("logs"), "cli")
        .with_filter(filter)
        .init();

    if let Err(e) = result {
        // Without a writable log dir, log to the console only.
        tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
            )
            .init();
        tracing::warn!(error = %e, "JSONL logging disabled");
    }
}

fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("folio")
}

fn print_palette(palette: &Palette, as_json: bool) -> Result<()> {
    if as_json {
        println!("{}", serde_json::to_string(&palette.hex_colors())?);
        return Ok(());
    }

    println!("Palette for {}", palette.base.to_hex_upper());
    for swatch in palette.iter() {
        println!("  {:<14} {}", swatch.role.label(), swatch.color.to_hex_upper());
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let data_dir = cli.data_dir.unwrap_or_else(default_data_dir);
    setup_logging(cli.verbose, &data_dir);

    match cli.command {
        Commands::Validate { field, value } => {
            let result = validate(&field, &value);
            if !result.valid {
                anyhow::bail!("{}", result.message);
            }
            println!("✓ {} is valid", field);
        }

        Commands::Submit {
            name,
            email,
            message,
            delay_ms,
        } => {
            let config = FolioConfig::load_or_default(&data_dir)?;
            let delay = delay_ms
                .map(Duration::from_millis)
                .unwrap_or_else(|| config.submit_delay());

            let fields = [
                Field::new("name", name),
                Field::new("email", email),
                Field::new("message", message),
            ];
            let mut workflow = SubmissionWorkflow::new(delay);

            match workflow.submit(&fields) {
                SubmitOutcome::Rejected {
                    form,
                    first_invalid,
                } => {
                    for (field, error) in form.errors() {
                        eprintln!("  {}: {}", field, error);
                    }
                    anyhow::bail!("Submission rejected (first invalid field: {})", first_invalid);
                }
                SubmitOutcome::Accepted { ticket, delay, .. } => {
                    println!("Sending...");
                    tokio::time::sleep(delay).await;
                    let done = workflow
                        .complete(ticket)
                        .context("Submission was no longer in flight")?;
                    println!("{}", done.message);
                }
                SubmitOutcome::Ignored => {
                    anyhow::bail!("A submission is already in progress");
                }
            }
        }

        Commands::Palette { hex, random, json } => {
            let base = if random {
                random_color().to_hex()
            } else {
                hex.context("A base color is required")?
            };
            let palette = generate_palette(&base)?;
            print_palette(&palette, json)?;
        }

        Commands::Json { action } => {
            let output = match action {
                JsonAction::Format(input) => {
                    json::format_json(&input.read()?, json::JsonStyle::Pretty)?
                }
                JsonAction::Minify(input) => {
                    json::format_json(&input.read()?, json::JsonStyle::Minified)?
                }
                JsonAction::Validate(input) => json::validate_json(&input.read()?)?.to_string(),
            };
            println!("{}", output);
        }

        Commands::Base64 { action } => {
            let output = match action {
                Base64Action::Encode(input) => base64::encode(&input.read()?)?,
                Base64Action::Decode(input) => base64::decode(&input.read()?)?,
            };
            println!("{}", output);
        }

        Commands::Logs { limit } => {
            let logs_dir = data_dir.join("logs");
            let entries = tail_entries(&logs_dir, limit)?;

            if entries.is_empty() {
                println!("No log entries in {}", logs_dir.display());
            } else {
                for entry in &entries {
                    println!("{}", entry.render());
                }
            }
        }
    }

    Ok(())
}
