//! Scoutnet policy CLI
//!
//! Evaluates access decisions and redacts text from the command line.

use std::io::Read;
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use tracing::{debug, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use scoutnet::access::{AccessClaims, AccessContext, Capability};
use scoutnet::common::config::{LoggingConfig, ScoutnetConfig};

#[derive(Parser, Debug)]
#[command(name = "scoutnet")]
#[command(about = "Scoutnet access policy and content redaction", long_about = None)]
struct Args {
    /// Path to configuration file
    #[arg(short, long, default_value = "scoutnet.toml")]
    config: PathBuf,

    /// Log level (trace, debug, info, warn, error); overrides the config file
    #[arg(short, long, env = "SCOUTNET_LOG_LEVEL")]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Decide whether a viewer holds a capability over a target profile
    Check {
        #[arg(long, value_enum)]
        capability: CapabilityArg,

        /// Viewer role (player, club, agent, coach, none)
        #[arg(long)]
        viewer_role: Option<String>,

        /// Target profile role (player, club, agent, coach)
        #[arg(long)]
        target_role: Option<String>,

        #[arg(long)]
        premium: bool,

        #[arg(long)]
        admin: bool,

        #[arg(long)]
        own_profile: bool,

        /// JSON claims object; replaces the individual flags
        #[arg(long, conflicts_with_all = ["viewer_role", "target_role", "premium", "admin", "own_profile"])]
        claims: Option<String>,
    },

    /// Redact contact details from TEXT, or from stdin when TEXT is omitted
    Redact {
        /// Consumer is entitled to the raw text
        #[arg(long)]
        bypass: bool,

        text: Option<String>,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum CapabilityArg {
    ContactData,
    Videos,
    Message,
}

impl From<CapabilityArg> for Capability {
    fn from(arg: CapabilityArg) -> Self {
        match arg {
            CapabilityArg::ContactData => Capability::ContactData,
            CapabilityArg::Videos => Capability::Videos,
            CapabilityArg::Message => Capability::Message,
        }
    }
}

fn init_logging(logging: &LoggingConfig, level_override: Option<&str>) {
    let level = level_override.unwrap_or(&logging.level);
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    if logging.json {
        tracing_subscriber::registry()
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .with(filter)
            .init();
    } else {
        tracing_subscriber::registry()
            .with(fmt::layer().with_writer(std::io::stderr))
            .with(filter)
            .init();
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let config = ScoutnetConfig::load(&args.config)
        .with_context(|| format!("loading {}", args.config.display()))?;
    init_logging(&config.logging, args.log_level.as_deref());

    info!("Scoutnet policy CLI v{}", env!("CARGO_PKG_VERSION"));

    match args.command {
        Command::Check {
            capability,
            viewer_role,
            target_role,
            premium,
            admin,
            own_profile,
            claims,
        } => {
            let claims = match claims {
                Some(payload) => AccessClaims::from_json(&payload)?,
                None => AccessClaims {
                    viewer_role,
                    viewer_is_premium: Some(premium),
                    viewer_is_admin: Some(admin),
                    is_own_profile: Some(own_profile),
                    target_role,
                },
            };
            let context = AccessContext::from_claims(&claims);
            let capability = Capability::from(capability);
            let allowed = scoutnet::evaluate(&context, capability);

            debug!(?context, %capability, allowed, "Evaluated capability");
            println!("{}", if allowed { "allow" } else { "deny" });
        }
        Command::Redact { bypass, text } => {
            let text = match text {
                Some(text) => text,
                None => {
                    let mut buffer = String::new();
                    std::io::stdin().read_to_string(&mut buffer)?;
                    buffer
                }
            };
            print!("{}", scoutnet::redact(&text, bypass));
        }
    }

    Ok(())
}
