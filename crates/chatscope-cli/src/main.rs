mod cmd_query;
mod cmd_report;
mod cmd_sentiment;
mod output;
mod session;

use chatscope_core::SenderFilter;
use clap::{Args, Parser, Subcommand};
use session::Session;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "chatscope", version, about = "Analytics for exported chat transcripts")]
struct Cli {
    /// Config file (default: .chatscope.json in the current directory, if present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    #[command(subcommand)]
    cmd: Command,
}

/// Options shared by every per-user query.
#[derive(Args)]
struct QueryArgs {
    /// Exported transcript (.txt)
    transcript: PathBuf,
    /// Restrict to one participant ("Overall" for everyone)
    #[arg(long, default_value = "Overall")]
    user: String,
    /// Output as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Message, word, media and link counts
    Stats {
        #[command(flatten)]
        query: QueryArgs,
    },
    /// Messages per month (or per day with --daily)
    Timeline {
        #[command(flatten)]
        query: QueryArgs,
        /// Group by calendar date instead of month
        #[arg(long)]
        daily: bool,
    },
    /// Busiest weekdays and months (or the weekday × hour grid with --heatmap)
    Activity {
        #[command(flatten)]
        query: QueryArgs,
        /// Show the weekday × hour heatmap
        #[arg(long)]
        heatmap: bool,
    },
    /// Participants and the busiest-user ranking
    Users {
        /// Exported transcript (.txt)
        transcript: PathBuf,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Most common words, stop words removed
    Words {
        #[command(flatten)]
        query: QueryArgs,
        /// Full frequency table instead of the top words
        #[arg(long)]
        all: bool,
    },
    /// Emoji usage
    Emoji {
        #[command(flatten)]
        query: QueryArgs,
    },
    /// Per-sender sentiment tallies from externally computed scores
    Sentiment {
        #[command(flatten)]
        query: QueryArgs,
        /// JSON lines of {"pos","neg","neu"}, one per message in transcript order
        #[arg(long)]
        scores: PathBuf,
    },
    /// Every query in one JSON document
    Report {
        /// Exported transcript (.txt)
        transcript: PathBuf,
        /// Restrict to one participant ("Overall" for everyone)
        #[arg(long, default_value = "Overall")]
        user: String,
        /// Sentiment score file (JSON lines); sentiment is omitted without it
        #[arg(long)]
        scores: Option<PathBuf>,
        /// Write to this file instead of stdout
        #[arg(short, long)]
        out: Option<PathBuf>,
    },
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_env("CHATSCOPE_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let cwd = std::env::current_dir()?;
    let config = cli.config.as_deref();

    match cli.cmd {
        Command::Stats { query } => {
            let session = Session::open(&query.transcript, config, &cwd)?;
            cmd_query::stats(&session, &SenderFilter::from(query.user.as_str()), query.json)
        }
        Command::Timeline { query, daily } => {
            let session = Session::open(&query.transcript, config, &cwd)?;
            let filter = SenderFilter::from(query.user.as_str());
            cmd_query::timeline(&session, &filter, daily, query.json)
        }
        Command::Activity { query, heatmap } => {
            let session = Session::open(&query.transcript, config, &cwd)?;
            let filter = SenderFilter::from(query.user.as_str());
            cmd_query::activity(&session, &filter, heatmap, query.json)
        }
        Command::Users { transcript, json } => {
            let session = Session::open(&transcript, config, &cwd)?;
            cmd_query::users(&session, json)
        }
        Command::Words { query, all } => {
            let session = Session::open(&query.transcript, config, &cwd)?;
            let filter = SenderFilter::from(query.user.as_str());
            cmd_query::words(&session, &filter, all, query.json)
        }
        Command::Emoji { query } => {
            let session = Session::open(&query.transcript, config, &cwd)?;
            cmd_query::emoji(&session, &SenderFilter::from(query.user.as_str()), query.json)
        }
        Command::Sentiment { query, scores } => {
            let session = Session::open(&query.transcript, config, &cwd)?;
            let filter = SenderFilter::from(query.user.as_str());
            cmd_sentiment::execute(&session, &scores, &filter, query.json)
        }
        Command::Report {
            transcript,
            user,
            scores,
            out,
        } => {
            let session = Session::open(&transcript, config, &cwd)?;
            let filter = SenderFilter::from(user.as_str());
            cmd_report::execute(
                &session,
                &cmd_report::ReportParams {
                    filter: &filter,
                    scores: scores.as_deref(),
                    out: out.as_deref(),
                },
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use std::path::Path;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn user_defaults_to_overall() {
        let cli = Cli::try_parse_from(["chatscope", "stats", "chat.txt"]).unwrap();
        match cli.cmd {
            Command::Stats { query } => {
                assert_eq!(query.user, "Overall");
                assert!(!query.json);
            }
            _ => panic!("expected stats"),
        }
    }

    #[test]
    fn global_config_after_subcommand() {
        let cli = Cli::try_parse_from([
            "chatscope",
            "report",
            "chat.txt",
            "--user",
            "Alice",
            "--config",
            "cfg.json",
            "-o",
            "out.json",
        ])
        .unwrap();
        assert_eq!(cli.config.as_deref(), Some(Path::new("cfg.json")));
        match cli.cmd {
            Command::Report { user, out, .. } => {
                assert_eq!(user, "Alice");
                assert_eq!(out.as_deref(), Some(Path::new("out.json")));
            }
            _ => panic!("expected report"),
        }
    }

    #[test]
    fn sentiment_requires_scores() {
        assert!(Cli::try_parse_from(["chatscope", "sentiment", "chat.txt"]).is_err());
    }
}
