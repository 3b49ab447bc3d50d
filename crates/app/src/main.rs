use std::fmt;
use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use ecobot_core::model::RespondentKind;
use services::{Clock, InterviewService};
use ui::{App, UiApp, build_app_context};

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidKind { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidKind { raw } => write!(f, "invalid --kind value: {raw}"),
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
    interviews: Arc<InterviewService>,
    preselected_kind: Option<RespondentKind>,
}

impl UiApp for DesktopApp {
    fn interviews(&self) -> Arc<InterviewService> {
        Arc::clone(&self.interviews)
    }

    fn preselected_kind(&self) -> Option<RespondentKind> {
        self.preselected_kind
    }
}

struct Args {
    kind: Option<RespondentKind>,
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- [--kind individual|company]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --kind   skip the opening question and start the chosen interview");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  ECOBOT_KIND");
}

fn parse_kind(raw: &str) -> Result<RespondentKind, ArgsError> {
    match raw.to_lowercase().as_str() {
        "individual" => Ok(RespondentKind::Individual),
        "company" => Ok(RespondentKind::Company),
        _ => Err(ArgsError::InvalidKind {
            raw: raw.to_string(),
        }),
    }
}

impl Args {
    fn parse(args: &mut impl Iterator<Item = String>) -> Result<Self, ArgsError> {
        let mut kind = std::env::var("ECOBOT_KIND")
            .ok()
            .and_then(|value| parse_kind(&value).ok());

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--kind" => {
                    let value = require_value(args, "--kind")?;
                    kind = Some(parse_kind(&value)?);
                }
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Self { kind })
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut iter = std::env::args().skip(1);
    let parsed = Args::parse(&mut iter).map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;

    let clock = Clock::default_clock();
    let interviews = Arc::new(InterviewService::new(clock));

    let app: Arc<dyn UiApp> = Arc::new(DesktopApp {
        interviews,
        preselected_kind: parsed.kind,
    });
    let context = build_app_context(&app);

    // On macOS, Dioxus/tao can default to an always-on-top window in some dev setups.
    // Explicitly disable it so the app doesn't behave like a modal window.
    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("EcoBot")
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
}

#[tokio::main]
async fn main() {
    if let Err(err) = run() {
        // At this layer (binary glue), printing once is fine.
        eprintln!("{err}");
        std::process::exit(2);
    }
}
