use {
  access_token::AccessToken,
  anyhow::{Context, bail},
  arguments::Arguments,
  clap::Parser,
  client::Client,
  collector::Collector,
  comment::Comment,
  config::Config,
  crossterm::style::Stylize,
  envelope::Envelope,
  listing::Listing,
  post::Post,
  rate_limit::RateLimit,
  reqwest::header::HeaderMap,
  serde::{Deserialize, Serialize, de::DeserializeOwned, de::IgnoredAny},
  serde_json::Value,
  sort::Sort,
  source::Source,
  std::{
    backtrace::BacktraceStatus,
    cell::Cell,
    collections::HashSet,
    env,
    io::{self, IsTerminal, Write},
    process,
    time::{Duration, Instant, SystemTime, UNIX_EPOCH},
  },
  submission::Submission,
  thing::{CommentData, Thing},
  tracing::{debug, error, info, warn},
  tracing_subscriber::EnvFilter,
  utils::{decode_entities, unix_now},
};

#[cfg(test)]
use anyhow::anyhow;

mod access_token;
mod arguments;
mod client;
mod collector;
mod comment;
mod config;
mod envelope;
mod listing;
mod post;
mod rate_limit;
mod sort;
mod source;
mod submission;
mod thing;
mod utils;

type Result<T = (), E = anyhow::Error> = std::result::Result<T, E>;

async fn collect(arguments: &Arguments, config: &Config) -> Result<Vec<Post>> {
  let client = Client::connect(config)
    .await
    .context("failed to authenticate with reddit")?;

  Collector::new(&client, &arguments.subreddit)
    .collect(arguments.cutoff(), arguments.limit)
    .await
}

fn initialize_tracing() {
  let filter = EnvFilter::try_from_default_env()
    .unwrap_or_else(|_| EnvFilter::new("warn"));

  tracing_subscriber::fmt()
    .with_env_filter(filter)
    .with_writer(io::stderr)
    .compact()
    .init();
}

async fn run() -> Result<i32> {
  let config = Config::load();

  let arguments = Arguments::parse();

  initialize_tracing();

  let envelope = match collect(&arguments, &config).await {
    Ok(posts) => Envelope::success(posts, unix_now()?),
    Err(error) => {
      error!("{error:#}");
      Envelope::failure(&error)
    }
  };

  let mut stdout = io::stdout().lock();

  serde_json::to_writer(&mut stdout, &envelope)
    .context("failed to serialize result")?;

  writeln!(stdout)?;

  stdout.flush()?;

  Ok(envelope.exit_code())
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
  match run().await {
    Ok(code) => process::exit(code),
    Err(error) => {
      let use_color = io::stderr().is_terminal();

      if use_color {
        eprintln!("{} {error}", "error:".bold().red());
      } else {
        eprintln!("error: {error}");
      }

      for (i, error) in error.chain().skip(1).enumerate() {
        if i == 0 {
          eprintln!();

          if use_color {
            eprintln!("{}", "because:".bold().red());
          } else {
            eprintln!("because:");
          }
        }

        if use_color {
          eprintln!("{} {error}", "-".bold().red());
        } else {
          eprintln!("- {error}");
        }
      }

      let backtrace = error.backtrace();

      if backtrace.status() == BacktraceStatus::Captured {
        if use_color {
          eprintln!("{}", "backtrace:".bold().red());
        } else {
          eprintln!("backtrace:");
        }

        eprintln!("{backtrace}");
      }

      process::exit(1);
    }
  }
}
