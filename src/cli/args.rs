use clap::{Args, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Arguments for encoding a value
#[derive(Args, Debug)]
pub struct EncodeArgs {
    /// Input file (reads from stdin if not provided)
    pub file: Option<PathBuf>,

    /// Cookie encoding (default from config)
    #[arg(short = 'e', long, value_enum)]
    pub encoding: Option<CookieEncodingCli>,

    /// Output file (writes to stdout if not provided)
    #[arg(short = 'o', long)]
    pub output: Option<PathBuf>,
}

/// Arguments for decoding a value
#[derive(Args, Debug)]
pub struct DecodeArgs {
    /// Input file (reads from stdin if not provided)
    pub file: Option<PathBuf>,

    /// Cookie encoding the value was stored with (default from config)
    #[arg(short = 'e', long, value_enum)]
    pub encoding: Option<CookieEncodingCli>,

    /// Output file (writes to stdout if not provided)
    #[arg(short = 'o', long)]
    pub output: Option<PathBuf>,
}

/// Cookie encodings (CLI enum)
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum CookieEncodingCli {
    Raw,
    #[value(name = "base64url")]
    Base64Url,
}

impl From<CookieEncodingCli> for base64url_cookie::CookieEncoding {
    fn from(cli: CookieEncodingCli) -> Self {
        match cli {
            CookieEncodingCli::Raw => base64url_cookie::CookieEncoding::Raw,
            CookieEncodingCli::Base64Url => base64url_cookie::CookieEncoding::Base64Url,
        }
    }
}

/// Config subcommand actions
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Show the effective settings
    Show {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show where configuration files are looked up
    Path,
}
