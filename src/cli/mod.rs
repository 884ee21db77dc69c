mod args;
mod commands;
mod global;
mod handlers;

use base64url_cookie::Settings;
use clap::{Parser, Subcommand};

use args::{ConfigAction, DecodeArgs, EncodeArgs};
use global::GlobalArgs;

#[derive(Parser)]
#[command(name = "base64url-cookie")]
#[command(version)]
#[command(about = "Encode and decode cookie values as UTF-8 aware, unpadded Base64-URL", long_about = None)]
struct Cli {
    #[command(flatten)]
    global: GlobalArgs,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Encode a value for storage in a cookie
    Encode(EncodeArgs),

    /// Decode a stored cookie value
    Decode(DecodeArgs),

    /// Inspect configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    if cli.global.no_color {
        // Unsafe: environment variable access (not thread-safe).
        // Still single-threaded here, before any work starts.
        unsafe {
            std::env::set_var("NO_COLOR", "1");
        }
    }

    // Load settings with user overrides
    let settings = Settings::load_with_overrides()?;

    match cli.command {
        Command::Encode(args) => handlers::encode::handle(args, &cli.global, &settings),
        Command::Decode(args) => handlers::decode::handle(args, &cli.global, &settings),
        Command::Config { action } => handlers::config::handle(action, &cli.global, &settings),
    }
}
