//  ____  ____                ____
// |  _ \|  _ \__      __   / ___| ___ _ __
// | |_) | |_) \ \ /\ / /  | |  _ / _ \ '_ \
// |  _ <|  __/ \ V  V /   | |_| |  __/ | | |
// |_| \_\_|     \_/\_/     \____|\___|_| |_|
//
// Auther : Sidney Zhang <zly@lyzhang.me>
// Date : 2025-06-30
// Version : 0.1.0
// License : Mulan PSL v2
//
// A password generator with a strength meter.

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use log::error;

use rpwgen::configtool::GenConfig;
use rpwgen::request::{ClassFlags, GenRequest};
use rpwgen::setclip;

mod commands;

#[derive(Debug, Parser)]
#[command(name = "rpwgen")]
#[command(about = "A password generator with a strength meter", long_about = None)]
enum Cli {
    /// Generate random passwords
    Gen(GenArgs),

    /// Show the strength tier for a password length
    Classify {
        /// Password length
        length: usize,
    },

    /// Test password strength
    Testpass(TestpassArgs),

    /// Inspect or create the config file
    #[command(subcommand)]
    Config(ConfigCmd),
}

#[derive(Debug, Subcommand)]
enum ConfigCmd {
    /// Print the effective configuration
    Show,
    /// Write the default configuration
    Init {
        /// Overwrite an existing file
        #[arg(long, default_value_t = false)]
        force: bool,
    },
}

#[derive(Debug, Parser)]
struct TestpassArgs {
    /// Password to test
    password: String,

    /// Print the tier without the bar
    #[arg(long, default_value_t = false)]
    no_meter: bool,
}

#[derive(Debug, Parser)]
struct GenArgs {
    /// Length of the password (defaults to the configured length)
    #[arg(short, long)]
    length: Option<usize>,

    /// Exclude uppercase letters
    #[arg(long, default_value_t = false)]
    no_uppercase: bool,

    /// Exclude lowercase letters
    #[arg(long, default_value_t = false)]
    no_lowercase: bool,

    /// Exclude digits
    #[arg(long, default_value_t = false)]
    no_digits: bool,

    /// Exclude symbols
    #[arg(long, default_value_t = false)]
    no_symbols: bool,

    /// Number of passwords to generate
    #[arg(short = 'n', long, default_value_t = 1)]
    count: usize,

    /// Seed for reproducible output
    #[arg(long)]
    seed: Option<u64>,

    /// Copy the last password to the clipboard
    #[arg(short, long, default_value_t = false)]
    copy: bool,

    /// Seconds before the clipboard is cleared (0 keeps it)
    #[arg(long)]
    clear_after: Option<u64>,

    /// Print the tier without the bar
    #[arg(long, default_value_t = false)]
    no_meter: bool,
}

impl From<GenArgs> for GenRequest {
    fn from(args: GenArgs) -> Self {
        Self {
            length: args.length,
            exclude: ClassFlags {
                no_uppercase: args.no_uppercase,
                no_lowercase: args.no_lowercase,
                no_digits: args.no_digits,
                no_symbols: args.no_symbols,
            },
            count: args.count,
            seed: args.seed,
            copy: args.copy,
            clear_after: args.clear_after,
            show_meter: !args.no_meter,
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    match cli {
        Cli::Gen(args) => {
            let config = GenConfig::load()?;
            commands::password_gen::generate_random(&config, GenRequest::from(args))
        }
        Cli::Classify { length } => commands::testpass::classify_length(length),
        Cli::Testpass(args) => commands::testpass::test_password(&args.password, !args.no_meter),
        Cli::Config(ConfigCmd::Show) => commands::config::show_config(&GenConfig::load()?),
        Cli::Config(ConfigCmd::Init { force }) => commands::config::init_config(force),
    }
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    if setclip::is_daemon() {
        return match setclip::run_daemon() {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                error!("clipboard daemon failed: {:#}", e);
                ExitCode::FAILURE
            }
        };
    }

    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
