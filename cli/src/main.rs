//! netkit CLI - Split authorities and inspect local addresses
//!
//! A command-line tool for separating host and port, extracting IPs
//! from addresses, and checking which IPs are configured locally.

mod commands;

use clap::{Parser, Subcommand};
use netkit_core::SplitPolicy;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser)]
#[command(name = "netkit")]
#[command(author, version, about = "Split authorities and inspect local addresses")]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output in JSON format
    #[arg(long, global = true)]
    json: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Split a host[:port] authority into host and port
    Split {
        /// The authority to split (e.g. "[::1]:8080")
        authority: String,

        /// Only accept empty or all-digit ports
        #[arg(long, conflicts_with = "lenient")]
        strict: bool,

        /// Always split at the last colon
        #[arg(long)]
        lenient: bool,
    },

    /// Check whether an IP is configured on a local interface
    IpOn {
        /// IP address to look for
        ip: String,
    },

    /// Extract the IP from a network address
    Ip {
        /// Address such as "10.0.0.1:80" or "[::1]:53"
        address: String,

        /// Network of the address (tcp, udp, ...)
        #[arg(short, long, default_value = "tcp")]
        network: String,
    },

    /// List local interface addresses
    #[command(alias = "ifs")]
    Interfaces,

    /// Show or change configuration
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Set the default split policy
    SetPolicy { policy: SplitPolicy },
    /// Set the interface lookup timeout in milliseconds
    SetTimeout { millis: u64 },
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing();

    match cli.command {
        Commands::Split {
            authority,
            strict,
            lenient,
        } => {
            let policy = match (strict, lenient) {
                (true, _) => Some(SplitPolicy::Strict),
                (_, true) => Some(SplitPolicy::Lenient),
                _ => None,
            };
            commands::split::run(&authority, policy, cli.json).await?;
        }
        Commands::IpOn { ip } => commands::ip::is_on(&ip, cli.json).await?,
        Commands::Ip { address, network } => commands::ip::extract(&network, &address, cli.json)?,
        Commands::Interfaces => commands::interfaces::list(cli.json).await?,
        Commands::Config { action } => match action {
            None => commands::config::show(cli.json).await?,
            Some(ConfigAction::SetPolicy { policy }) => commands::config::set_policy(policy).await?,
            Some(ConfigAction::SetTimeout { millis }) => {
                commands::config::set_timeout(millis).await?
            }
        },
    }

    Ok(())
}
