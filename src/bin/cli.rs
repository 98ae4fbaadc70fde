//! lcb CLI Client
//!
//! Command-line interface for SDTP clipboard servers.

use std::io::{self, Read, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use chrono::{DateTime, FixedOffset};
use clap::{Parser, Subcommand};
use lcb::config::{DEFAULT_PORT, DEFAULT_SERVER};
use lcb::encoding::decode;
use lcb::history::{parse_date, render_listing};
use lcb::network::BatchItem;
use lcb::{Body, Client, ClientConfig, LcbError};
use tracing_subscriber::{fmt, EnvFilter};

/// lcb CLI
#[derive(Parser, Debug)]
#[command(name = "lcb-cli")]
#[command(about = "CLI for SDTP clipboard servers")]
#[command(version)]
struct Args {
    /// Server host
    #[arg(short, long, env = "LCB_SERVER", default_value = DEFAULT_SERVER)]
    server: String,

    /// Server port
    #[arg(short, long, env = "LCB_PORT", default_value_t = DEFAULT_PORT)]
    port: u16,

    /// Connect/read/write timeout in milliseconds (0 disables)
    #[arg(long, default_value = "5000")]
    timeout_ms: u64,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the contents of one or more clipboards
    #[command(visible_alias = "paste")]
    Get {
        /// Clipboard names
        #[arg(required = true)]
        names: Vec<String>,

        /// Version to read instead of the latest
        #[arg(short = 'r', long = "rev", value_name = "VERSION")]
        rev: Option<String>,

        /// Decode as text with this encoding
        #[arg(short, long)]
        encoding: Option<String>,

        /// Decode as UTF-8 text
        #[arg(short, long, conflicts_with = "encoding")]
        text: bool,
    },

    /// Store a new clipboard version (from a file, text, or stdin)
    #[command(visible_aliases = ["copy", "put"])]
    Set {
        /// Clipboard name
        name: String,

        /// Source file, sent byte for byte
        #[arg(short, long, conflicts_with = "text")]
        file: Option<PathBuf>,

        /// Literal text to store
        #[arg(short, long)]
        text: Option<String>,

        /// Encoding for text input
        #[arg(short, long)]
        encoding: Option<String>,
    },

    /// Delete clipboards, or one version of each
    #[command(visible_aliases = ["del", "rm"])]
    Delete {
        /// Clipboard names
        #[arg(required = true)]
        names: Vec<String>,

        /// Only delete this version
        #[arg(short = 'r', long = "rev", value_name = "VERSION")]
        rev: Option<String>,
    },

    /// List the stored versions of a clipboard
    #[command(visible_alias = "log")]
    History {
        /// Clipboard name
        name: String,

        /// Only versions dated at or after this date
        #[arg(long, value_parser = parse_since)]
        since: Option<DateTime<FixedOffset>>,
    },
}

fn parse_since(value: &str) -> Result<DateTime<FixedOffset>, String> {
    parse_date(value).ok_or_else(|| format!("unrecognized date: {}", value))
}

fn main() -> ExitCode {
    // Logs go to stderr, stdout carries clipboard data
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    let config = ClientConfig::builder()
        .server(&args.server)
        .port(args.port)
        .timeout_ms(args.timeout_ms)
        .build();

    let client = match Client::new(config) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    tracing::debug!("lcb-cli v{} -> {}", lcb::VERSION, client.config().address());

    let ok = match args.command {
        Commands::Get {
            names,
            rev,
            encoding,
            text,
        } => {
            let encoding = encoding.or_else(|| text.then(|| "utf-8".to_string()));
            get(&client, &names, rev.as_deref(), encoding.as_deref())
        }
        Commands::Set {
            name,
            file,
            text,
            encoding,
        } => match read_body(file, text, encoding.as_deref()) {
            Ok(body) => report(&name, client.set(&name, body)),
            Err(e) => report::<()>(&name, Err(e)),
        },
        Commands::Delete { names, rev } => {
            report_batch(client.delete_many(&names, rev.as_deref()), |_| Ok(()))
        }
        Commands::History { name, since } => {
            let records = match since {
                Some(since) => client.history_since(&name, since),
                None => client.history(&name),
            };
            let listing = records.map(|records| render_listing(&records));
            match listing {
                Ok(listing) => write_stdout(listing.as_bytes()).is_ok(),
                Err(e) => report::<()>(&name, Err(e)),
            }
        }
    };

    if ok {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

/// Fetch each name in order and write the data to stdout
///
/// With an encoding the payload is decoded and written as UTF-8.
fn get(client: &Client, names: &[String], rev: Option<&str>, encoding: Option<&str>) -> bool {
    report_batch(client.get_many(names, rev), |payload| {
        write_stdout(&decode(payload, encoding).into_bytes())
    })
}

/// Build the write body from the chosen source
fn read_body(
    file: Option<PathBuf>,
    text: Option<String>,
    encoding: Option<&str>,
) -> lcb::Result<Body> {
    if let Some(path) = file {
        return Body::from_file(path);
    }
    if let Some(text) = text {
        return Ok(Body::text(text, encoding));
    }

    let mut bytes = Vec::new();
    io::stdin().read_to_end(&mut bytes).map_err(|source| LcbError::SourceFile {
        path: PathBuf::from("<stdin>"),
        source,
    })?;

    Ok(match (encoding, String::from_utf8(bytes)) {
        (Some(encoding), Ok(text)) => Body::text(text, Some(encoding)),
        (_, Ok(text)) => Body::Bytes(text.into_bytes()),
        (_, Err(e)) => Body::Bytes(e.into_bytes()),
    })
}

fn write_stdout(bytes: &[u8]) -> io::Result<()> {
    let mut stdout = io::stdout().lock();
    stdout.write_all(bytes)?;
    stdout.flush()
}

/// Print a failure to stderr; successes print nothing
fn report<T>(name: &str, result: lcb::Result<T>) -> bool {
    match result {
        Ok(_) => true,
        Err(LcbError::Protocol(message)) => {
            eprintln!("{}: {}", name, message.trim_end());
            false
        }
        Err(e) => {
            eprintln!("{}: {}", name, e);
            false
        }
    }
}

fn report_batch<T, F>(items: Vec<BatchItem<T>>, mut on_ok: F) -> bool
where
    F: FnMut(T) -> io::Result<()>,
{
    let mut ok = true;
    for item in items {
        match item.result {
            Ok(value) => {
                if let Err(e) = on_ok(value) {
                    eprintln!("{}: cannot write output: {}", item.clipboard, e);
                    ok = false;
                }
            }
            Err(e) => ok &= report::<()>(&item.clipboard, Err(e)),
        }
    }
    ok
}
