//! # Matriz CLI
//!
//! Command-line interface for generating QR code PNGs.
//!
//! ## Usage
//!
//! ```bash
//! # URL code with defaults (256px, black on white, qr-code.png)
//! matriz url https://example.com
//!
//! # Wi-Fi provisioning code with a logo
//! matriz wifi --ssid Home --password secret1 --logo logo.png --logo-scale 0.2
//!
//! # Calendar event
//! matriz event --name Launch --start 2024-05-01 --end 2024-05-02 --location HQ
//!
//! # Inspect the payload without rendering
//! matriz text "hello world" --payload-only
//!
//! # Content from a JSON document
//! matriz from-json content.json --out code.png
//!
//! # Built-in help topics (rendered HTML fragments)
//! matriz guide
//! matriz guide faq
//! ```

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::fs;
use std::path::PathBuf;

use matriz::{
    MatrizError, Session,
    content::{ContentSpec, Event, Menu, Text, Url, Wifi, WifiEncryption},
    help,
    render::{RenderConfig, bitmap, parse_hex_color},
};

/// Matriz - QR code generator
#[derive(Parser, Debug)]
#[command(name = "matriz")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Render options shared by every content subcommand.
#[derive(Args, Debug)]
struct RenderArgs {
    /// Foreground color as #RRGGBB
    #[arg(long, default_value = "#000000")]
    fg: String,

    /// Background color as #RRGGBB
    #[arg(long, default_value = "#FFFFFF")]
    bg: String,

    /// Canvas size in pixels
    #[arg(long, default_value = "256")]
    size: u32,

    /// Logo image to overlay on the code
    #[arg(long, value_name = "FILE")]
    logo: Option<PathBuf>,

    /// Logo size as a fraction of the canvas (0.10 to 0.30)
    #[arg(long, default_value = "0.12")]
    logo_scale: f64,

    /// Output PNG path
    #[arg(long, short, default_value = bitmap::SUGGESTED_FILENAME)]
    out: PathBuf,

    /// Print the encoded payload instead of rendering
    #[arg(long)]
    payload_only: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug, Default)]
enum EncryptionArg {
    #[default]
    Wpa,
    Wep,
    None,
}

impl From<EncryptionArg> for WifiEncryption {
    fn from(arg: EncryptionArg) -> Self {
        match arg {
            EncryptionArg::Wpa => WifiEncryption::Wpa,
            EncryptionArg::Wep => WifiEncryption::Wep,
            EncryptionArg::None => WifiEncryption::None,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate a code for a website URL
    Url {
        value: String,
        #[command(flatten)]
        render: RenderArgs,
    },

    /// Generate a code for free-form text
    Text {
        value: String,
        #[command(flatten)]
        render: RenderArgs,
    },

    /// Generate a Wi-Fi provisioning code
    Wifi {
        /// Network name (SSID)
        #[arg(long)]
        ssid: String,

        #[arg(long, default_value = "")]
        password: String,

        #[arg(long, value_enum, default_value_t = EncryptionArg::Wpa)]
        encryption: EncryptionArg,

        #[command(flatten)]
        render: RenderArgs,
    },

    /// Generate a basic calendar event code
    Event {
        #[arg(long)]
        name: String,

        /// Start date (YYYY-MM-DD)
        #[arg(long, default_value = "")]
        start: String,

        /// End date (YYYY-MM-DD)
        #[arg(long, default_value = "")]
        end: String,

        #[arg(long, default_value = "")]
        location: String,

        #[arg(long, default_value = "")]
        description: String,

        #[command(flatten)]
        render: RenderArgs,
    },

    /// Generate a code linking to a restaurant menu
    Menu {
        url: String,
        #[command(flatten)]
        render: RenderArgs,
    },

    /// Read the content from a JSON document
    FromJson {
        file: PathBuf,
        #[command(flatten)]
        render: RenderArgs,
    },

    /// Show a built-in help topic as rendered HTML (omit to list topics)
    Guide { topic: Option<String> },
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), MatrizError> {
    let cli = Cli::parse();

    let (content, render) = match cli.command {
        Commands::Url { value, render } => (ContentSpec::Url(Url::new(value)), render),
        Commands::Text { value, render } => (ContentSpec::Text(Text::new(value)), render),
        Commands::Wifi {
            ssid,
            password,
            encryption,
            render,
        } => (
            ContentSpec::Wifi(Wifi {
                ssid,
                password,
                encryption: encryption.into(),
            }),
            render,
        ),
        Commands::Event {
            name,
            start,
            end,
            location,
            description,
            render,
        } => {
            warn_if_not_date("start date", &start);
            warn_if_not_date("end date", &end);
            (
                ContentSpec::Event(Event {
                    name,
                    start_date: start,
                    end_date: end,
                    location,
                    description,
                }),
                render,
            )
        }
        Commands::Menu { url, render } => (ContentSpec::Menu(Menu::new(url)), render),
        Commands::FromJson { file, render } => {
            let json = fs::read_to_string(&file)?;
            let content: ContentSpec = serde_json::from_str(&json)
                .map_err(|e| MatrizError::InvalidContent(format!("{}: {}", file.display(), e)))?;
            (content, render)
        }
        Commands::Guide { topic } => return run_guide(topic.as_deref()),
    };

    generate(content, render)
}

fn run_guide(topic: Option<&str>) -> Result<(), MatrizError> {
    match topic {
        None => {
            println!("Available topics:");
            for name in help::topics() {
                println!("  {}", name);
            }
            Ok(())
        }
        Some(name) => match help::html(name) {
            Some(html) => {
                println!("{}", html);
                Ok(())
            }
            None => Err(MatrizError::InvalidContent(format!(
                "Unknown topic '{}'. Run `matriz guide` to see available topics.",
                name
            ))),
        },
    }
}

fn generate(content: ContentSpec, args: RenderArgs) -> Result<(), MatrizError> {
    warn_if_not_color("--fg", &args.fg);
    warn_if_not_color("--bg", &args.bg);

    let label = content.label();
    let config = RenderConfig {
        canvas_size: args.size,
        foreground: args.fg,
        background: args.bg,
        ..Default::default()
    };
    let mut session = Session::new(content, config);

    if args.payload_only {
        println!("{}", session.payload());
        return Ok(());
    }

    if !session.payload().is_empty()
        && let Some(path) = &args.logo
    {
        let bytes = fs::read(path)?;
        session.attach_logo(&bytes)?;
        session.set_capacity_fraction(args.logo_scale);
    }

    match session.render_request() {
        Some(request) => {
            let png = bitmap::render_png(&request)?;
            fs::write(&args.out, png)?;
            eprintln!("Wrote {} code to {}", label, args.out.display());
        }
        None => eprintln!("Please provide data to generate a QR code."),
    }

    Ok(())
}

/// Warn (and continue) when an event date is not YYYY-MM-DD; the encoder
/// emits it verbatim either way.
fn warn_if_not_date(label: &str, value: &str) {
    if !value.is_empty() && NaiveDate::parse_from_str(value, "%Y-%m-%d").is_err() {
        eprintln!(
            "Warning: {} '{}' is not a YYYY-MM-DD date; encoding it verbatim.",
            label, value
        );
    }
}

/// Warn (and continue) on a malformed color; rendering falls back to
/// black/white.
fn warn_if_not_color(flag: &str, value: &str) {
    if parse_hex_color(value).is_none() {
        eprintln!(
            "Warning: {} '{}' is not a #RRGGBB color; using the default.",
            flag, value
        );
    }
}
