//! CLI entry point for dmitree

use std::io::IsTerminal;
use std::path::PathBuf;
use std::process;

use clap::{ArgAction, Parser, ValueEnum};
use dmitree::logging::init_logging;
use dmitree::{
    Config, IgnoreRules, OutputConfig, StreamingFormatter, TreeWalker, WalkerConfig,
};
use tracing::{debug, info};

/// Color output mode
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum ColorMode {
    /// Auto-detect based on terminal and environment
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    #[default]
    Never,
}

/// Determine whether to use color output based on mode and environment.
fn should_use_color(mode: ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => {
            // Respect NO_COLOR environment variable (https://no-color.org/)
            if std::env::var_os("NO_COLOR").is_some() {
                return false;
            }
            if std::env::var_os("FORCE_COLOR").is_some() {
                return true;
            }
            if std::env::var("TERM").map(|t| t == "dumb").unwrap_or(false) {
                return false;
            }
            std::io::stdout().is_terminal()
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "dmitree")]
#[command(about = "Smart directory tree viewer")]
#[command(
    after_help = "Groups numbered files like: file_1.txt, file_2.txt -> file_#.txt (2 files)"
)]
#[command(version)]
struct Args {
    /// Directory to display
    #[arg(default_value = ".")]
    path: PathBuf,

    /// Show directories only
    #[arg(short = 'd', long = "dirs-only")]
    dirs_only: bool,

    /// Descend at most N directory levels (0 lists only the starting directory)
    #[arg(short = 'L', long = "depth", visible_alias = "level", value_name = "N")]
    depth: Option<usize>,

    /// Colorize output using the configured color rules
    #[arg(
        long = "color",
        value_name = "WHEN",
        num_args = 0..=1,
        require_equals = true,
        default_value = "never",
        default_missing_value = "always"
    )]
    color: ColorMode,

    /// Include hidden entries (names starting with '.')
    #[arg(short = 'a', long = "all")]
    all: bool,

    /// Ignore entries matching PATTERN: a glob, or text contained in the name (repeatable)
    #[arg(short = 'I', long = "ignore", value_name = "PATTERN")]
    ignore: Vec<String>,

    /// Read configuration from PATH instead of the default locations
    #[arg(long = "config", value_name = "PATH", conflicts_with = "no_config")]
    config: Option<PathBuf>,

    /// Do not read any configuration file
    #[arg(long = "no-config")]
    no_config: bool,

    /// Omit the "Tree structure for:" title line
    #[arg(long = "no-title")]
    no_title: bool,

    /// Increase diagnostic output on stderr (repeatable)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    let config = if args.no_config {
        Config::default()
    } else {
        Config::discover(args.config.as_deref())
    };

    let mut ignore = IgnoreRules::new();
    for text in &config.ignore {
        ignore.add_substring(text.as_str());
    }
    for pattern in &args.ignore {
        ignore.add_pattern(pattern);
    }

    let walker_config = WalkerConfig {
        max_depth: args.depth,
        dirs_only: args.dirs_only,
        show_hidden: args.all,
        ignore,
    };

    let output_config = OutputConfig {
        use_color: should_use_color(args.color),
        colors: config.colors,
        show_title: !args.no_title,
    };

    let walker = TreeWalker::new(walker_config);
    let mut formatter = StreamingFormatter::stdout(output_config);

    match walker.walk(&args.path, &mut formatter) {
        Ok(summary) => {
            if !summary.failures.is_empty() {
                info!(
                    count = summary.failures.len(),
                    "some directories could not be listed"
                );
            }
        }
        Err(e) if e.is_broken_pipe() => {
            debug!("output closed early");
        }
        Err(e) => {
            eprintln!("dmitree: {}", e);
            process::exit(1);
        }
    }
}
