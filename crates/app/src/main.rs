use std::fmt;
use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use interview_core::model::SessionId;
use services::api::{API_URL_ENV, LEGACY_API_URL_ENV};
use services::{ApiConfig, HttpInterviewApi, InterviewApi};
use tracing_subscriber::EnvFilter;
use ui::{App, UiApp, build_app_context};

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    MissingSessionId,
    UnknownArg(String),
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::MissingSessionId => write!(f, "stats requires a session id"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
        }
    }
}

impl std::error::Error for ArgsError {}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

struct DesktopApp {
    api: Arc<HttpInterviewApi>,
}

impl UiApp for DesktopApp {
    fn api(&self) -> Arc<dyn InterviewApi> {
        self.api.clone()
    }

    fn api_base_url(&self) -> String {
        self.api.config().base_url().to_string()
    }
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- ui     [--api-url <url>]");
    eprintln!("  cargo run -p app -- health [--api-url <url>]");
    eprintln!("  cargo run -p app -- stats  <session_id> [--api-url <url>]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --api-url {}", services::api::DEFAULT_BASE_URL);
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  {API_URL_ENV} ({LEGACY_API_URL_ENV} is accepted too), RUST_LOG");
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Ui,
    Health,
    Stats,
}

impl Command {
    fn from_arg(arg: &str) -> Option<Self> {
        match arg {
            "ui" => Some(Self::Ui),
            "health" => Some(Self::Health),
            "stats" => Some(Self::Stats),
            _ => None,
        }
    }
}

struct Args {
    api_url: Option<String>,
    session_id: Option<String>,
}

impl Args {
    fn parse(
        cmd: Command,
        args: &mut impl Iterator<Item = String>,
    ) -> Result<Self, ArgsError> {
        let mut api_url = None;
        let mut session_id = None;

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--api-url" => api_url = Some(require_value(args, "--api-url")?),
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                _ if cmd == Command::Stats && session_id.is_none() && !arg.starts_with("--") => {
                    session_id = Some(arg);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        if cmd == Command::Stats && session_id.is_none() {
            return Err(ArgsError::MissingSessionId);
        }
        Ok(Self {
            api_url,
            session_id,
        })
    }

    /// `--api-url` wins over the environment.
    fn api_config(&self) -> Result<ApiConfig, services::ConfigError> {
        match self.api_url.as_deref() {
            Some(raw) => ApiConfig::new(raw),
            None => ApiConfig::from_env(),
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

async fn run() -> Result<i32, Box<dyn std::error::Error>> {
    let mut argv: Vec<String> = std::env::args().skip(1).collect();

    // Default behavior: launching UI when no subcommand is provided.
    let cmd = match argv.first().map(String::as_str) {
        None => Command::Ui,
        Some("--help" | "-h") => {
            print_usage();
            return Ok(0);
        }
        Some(first) if first.starts_with("--") => Command::Ui,
        Some(first) => Command::from_arg(first).ok_or_else(|| {
            eprintln!("unknown subcommand: {first}");
            print_usage();
            std::io::Error::new(std::io::ErrorKind::InvalidInput, "unknown subcommand")
        })?,
    };

    if !argv.is_empty() && !argv[0].starts_with("--") {
        argv.remove(0);
    }

    let mut iter = argv.into_iter();
    let parsed = Args::parse(cmd, &mut iter).map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;

    let config = parsed.api_config()?;
    tracing::info!(base_url = config.base_url(), command = ?cmd, "configured interview API");
    let api = Arc::new(HttpInterviewApi::new(config)?);

    match cmd {
        Command::Ui => {
            let app: Arc<dyn UiApp> = Arc::new(DesktopApp { api });
            let context = build_app_context(&app);

            // On macOS, Dioxus/tao can default to an always-on-top window in some dev setups.
            let desktop_cfg = DesktopConfig::new().with_window(
                WindowBuilder::new()
                    .with_title("Interview Prep Simulator")
                    .with_always_on_top(false),
            );

            LaunchBuilder::desktop()
                .with_cfg(desktop_cfg)
                .with_context(context)
                .launch(App);
            Ok(0)
        }
        Command::Health => {
            let health = api.health().await?;
            println!(
                "status={} agent_ready={}",
                health.status, health.agent_ready
            );
            if let (Some(service), Some(version)) = (&health.service, &health.version) {
                println!("service={service} version={version}");
            }
            Ok(if health.is_healthy() { 0 } else { 1 })
        }
        Command::Stats => {
            let Some(raw) = parsed.session_id else {
                return Err(ArgsError::MissingSessionId.into());
            };
            let stats = api.session_stats(&SessionId::new(raw)).await?;
            let scores = stats
                .scores
                .iter()
                .map(u32::to_string)
                .collect::<Vec<_>>()
                .join(",");
            println!("session_id={}", stats.session_id);
            println!("questions_asked={}", stats.questions_asked);
            println!("average_score={:.1}", stats.average_score);
            println!("scores={scores}");
            println!("created_at={}", stats.created_at);
            Ok(0)
        }
    }
}

#[tokio::main]
async fn main() {
    init_tracing();
    match run().await {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            // At this layer (binary glue), printing once is fine.
            eprintln!("{err}");
            std::process::exit(2);
        }
    }
}
