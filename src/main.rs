use std::path::PathBuf;

use clap::Parser;

use mdsqlfmt::mode::Mode;

/// mdsqlfmt - reformats SQL code blocks embedded in Markdown
/// documentation, in place.
#[derive(Parser, Debug)]
#[command(name = "mdsqlfmt", version, about)]
struct Cli {
    /// Files or directories to reformat.
    #[arg(default_value = ".")]
    paths: Vec<PathBuf>,

    /// Maximum line length.
    #[arg(short = 'l', long)]
    line_length: Option<usize>,

    /// Indent with tabs instead of spaces.
    #[arg(long)]
    use_tabs: bool,

    /// Columns per indentation level.
    #[arg(long)]
    indent_width: Option<u8>,

    /// Check formatting without writing changes.
    #[arg(long)]
    check: bool,

    /// Show formatting diff.
    #[arg(long)]
    diff: bool,

    /// Glob patterns to exclude from the walk.
    #[arg(long)]
    exclude: Vec<String>,

    /// Verbose output.
    #[arg(short, long)]
    verbose: bool,

    /// Quiet output (errors only).
    #[arg(short, long)]
    quiet: bool,

    /// Disable progress bar.
    #[arg(long)]
    no_progressbar: bool,

    /// Path to config file (mdsqlfmt.toml).
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() {
    let cli = Cli::parse();

    let base_mode = match mdsqlfmt::load_config(&cli.paths, cli.config.as_deref()) {
        Ok(mode) => mode,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(2);
        }
    };

    let mode = Mode {
        line_length: cli.line_length.unwrap_or(base_mode.line_length),
        use_tabs: cli.use_tabs || base_mode.use_tabs,
        indent_width: cli.indent_width.unwrap_or(base_mode.indent_width),
        check: cli.check,
        diff: cli.diff,
        exclude: if cli.exclude.is_empty() {
            base_mode.exclude
        } else {
            cli.exclude
        },
        ignore: base_mode.ignore,
        skip: base_mode.skip,
        verbose: cli.verbose,
        quiet: cli.quiet,
        no_progressbar: cli.no_progressbar,
    };

    let report = match mdsqlfmt::run(&cli.paths, &mode) {
        Ok(report) => report,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(2);
        }
    };

    if !mode.quiet {
        print_verbose_results(&report, &mode);
        eprintln!("{}", report.summary());
    }

    if mode.check && report.has_changes() {
        std::process::exit(1);
    }
}

fn print_verbose_results(report: &mdsqlfmt::report::Report, mode: &Mode) {
    if !mode.verbose {
        return;
    }
    for result in &report.results {
        match result.status {
            mdsqlfmt::report::FileStatus::Changed => {
                eprintln!("reformatted {}", result.path.display());
            }
            mdsqlfmt::report::FileStatus::Unchanged => {}
        }
    }
}
