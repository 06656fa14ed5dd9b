//! `weekslot` CLI — replay recorded slot selections and submit them.
//!
//! ## Usage
//!
//! ```sh
//! # Replay a gesture script, answering every prompt with yes
//! weekslot replay -i gestures.json --yes
//!
//! # Show the request body that would be sent
//! weekslot replay -i gestures.json --yes --payload
//!
//! # Ask each confirmation on the terminal
//! weekslot replay -i gestures.json
//!
//! # Replay and POST to the backend
//! weekslot submit -i gestures.json --yes --endpoint http://localhost:9000/sentTimes
//!
//! # Print the calendar display settings
//! weekslot view
//! ```

mod logging;
mod script;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use std::io::{self, Read};
use weekslot::submit::DEFAULT_ENDPOINT;
use weekslot::{
    AutoConfirm, CalendarView, ClockIds, HttpTransport, IdSource, Prompter, SequentialIds,
    SlotPicker, SubmissionPayload, SubmitConfig,
};

use crate::script::{parse_script, replay, TerminalPrompter};

#[derive(Parser)]
#[command(name = "weekslot", version, about = "Weekly availability picker CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Args)]
struct ReplayArgs {
    /// Gesture script (reads from stdin if omitted)
    #[arg(short, long)]
    input: Option<String>,
    /// Answer yes to every confirmation
    #[arg(long, conflicts_with = "no")]
    yes: bool,
    /// Answer no to every confirmation
    #[arg(long)]
    no: bool,
    /// Number intervals 1, 2, 3... instead of using creation timestamps
    #[arg(long)]
    sequential_ids: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Replay a gesture script and print the selected intervals
    Replay {
        #[command(flatten)]
        replay: ReplayArgs,
        /// Print the submission body instead of the intervals
        #[arg(long)]
        payload: bool,
    },
    /// Replay a gesture script and POST the result to the backend
    Submit {
        #[command(flatten)]
        replay: ReplayArgs,
        /// Backend endpoint
        #[arg(long, env = "WEEKSLOT_ENDPOINT", default_value = DEFAULT_ENDPOINT)]
        endpoint: String,
        /// Request timeout in seconds (no timeout if omitted)
        #[arg(long)]
        timeout: Option<u64>,
    },
    /// Print the calendar display settings as JSON
    View,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    match cli.command {
        Commands::Replay { replay, payload } => {
            let mut picker = build_picker(&replay)?;
            run_script(&mut picker, &replay)?;
            let json = if payload {
                let body = SubmissionPayload::from_intervals(picker.intervals());
                serde_json::to_string_pretty(&body)?
            } else {
                serde_json::to_string_pretty(picker.intervals())?
            };
            println!("{}", json);
        }
        Commands::Submit {
            replay,
            endpoint,
            timeout,
        } => {
            let mut picker = build_picker(&replay)?;
            run_script(&mut picker, &replay)?;
            let config = SubmitConfig {
                endpoint,
                timeout_secs: timeout,
            };
            let transport = HttpTransport::new(&config)?;
            let runtime = tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
                .context("Failed to start async runtime")?;
            let delivered = runtime.block_on(picker.submit(&transport));
            // Transport failures are already logged; they do not fail the command.
            println!(
                "{}",
                serde_json::json!({
                    "endpoint": transport.endpoint(),
                    "events": picker.intervals().len(),
                    "delivered": delivered,
                })
            );
        }
        Commands::View => {
            println!("{}", serde_json::to_string_pretty(&CalendarView::default())?);
        }
    }

    Ok(())
}

type CliPicker = SlotPicker<Box<dyn Prompter>, Box<dyn IdSource>>;

fn build_picker(args: &ReplayArgs) -> Result<CliPicker> {
    let prompter: Box<dyn Prompter> = if args.yes {
        Box::new(AutoConfirm(true))
    } else if args.no {
        Box::new(AutoConfirm(false))
    } else {
        if args.input.is_none() {
            anyhow::bail!(
                "Interactive confirmation needs the script in a file: pass --input, or --yes/--no"
            );
        }
        Box::new(TerminalPrompter)
    };
    let ids: Box<dyn IdSource> = if args.sequential_ids {
        Box::new(SequentialIds::default())
    } else {
        Box::new(ClockIds::default())
    };
    Ok(SlotPicker::with_ids(prompter, ids))
}

fn run_script(picker: &mut CliPicker, args: &ReplayArgs) -> Result<()> {
    let json = read_input(args.input.as_deref())?;
    let gestures = parse_script(&json)?;
    let summary = replay(picker, &gestures)?;
    tracing::info!(
        committed = summary.committed,
        rejected = summary.rejected,
        declined = summary.declined,
        deleted = summary.deleted,
        "replay finished"
    );
    Ok(())
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path))
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            Ok(buf)
        }
    }
}
