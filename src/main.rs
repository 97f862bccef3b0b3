//! # chatstats CLI
//!
//! Command-line interface for the chatstats library.

use std::io;
use std::path::Path;
use std::process;
use std::time::Instant;

use clap::Parser as ClapParser;
use log::debug;

use chatstats::analysis::Report;
use chatstats::cli::Args;
use chatstats::config::AnalysisConfig;
use chatstats::core::{apply_filters, write_csv};
use chatstats::format::{ReportFormat, render_report, write_report};
use chatstats::logging::{init_logger, log_config_info, log_filter_info};
use chatstats::parser::ChatParser;
use chatstats::{ChatstatsError, Message};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

/// Progress lines go to stderr so stdout carries only the report.
macro_rules! status {
    ($quiet:expr) => {
        if !$quiet {
            eprintln!();
        }
    };
    ($quiet:expr, $($arg:tt)*) => {
        if !$quiet {
            eprintln!($($arg)*);
        }
    };
}

fn run() -> Result<(), ChatstatsError> {
    let total_start = Instant::now();
    let args = <Args as ClapParser>::parse();
    init_logger(args.verbose, args.quiet);

    let quiet = args.quiet;
    let format: ReportFormat = args.format.into();

    status!(quiet, "📊 chatstats v{}", env!("CARGO_PKG_VERSION"));
    status!(quiet, "━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    status!(quiet, "📂 Input:   {}", if args.reads_stdin() { "<stdin>" } else { args.input.as_str() });
    status!(quiet, "📄 Format:  {}", format);
    if let Some(ref output) = args.output {
        status!(quiet, "💾 Output:  {}", output);
    }

    // Configuration: file first, then flags
    let config = match args.config {
        Some(ref path) => {
            status!(quiet, "⚙️  Config:  {}", path);
            AnalysisConfig::load(Path::new(path))?
        }
        None => AnalysisConfig::default(),
    };
    let config = args.apply_overrides(config);
    log_config_info(&config);

    let filter_config = args.filter_config()?;
    if let Some(ref after) = args.after {
        status!(quiet, "📅 After:   {}", after);
    }
    if let Some(ref before) = args.before {
        status!(quiet, "📅 Before:  {}", before);
    }
    if let Some(ref from) = args.from {
        status!(quiet, "👤 From:    {}", from);
    }
    log_filter_info(&filter_config);

    status!(quiet);

    // Step 1: Parse
    let (messages, parse_time) = parse_input(&args)?;
    let parsed_count = messages.len();
    status!(
        quiet,
        "   Found {} messages ({:.2}s)",
        parsed_count,
        parse_time.as_secs_f64()
    );

    // Step 2: Filter
    let messages = if filter_config.is_active() {
        status!(quiet, "🔍 Filtering messages...");
        let filtered = apply_filters(messages, &filter_config);
        status!(quiet, "   {} messages after filtering", filtered.len());
        filtered
    } else {
        messages
    };

    // Step 3: Optional table export
    if let Some(ref csv_path) = args.export_csv {
        status!(quiet, "💾 Exporting CSV to {}...", csv_path);
        write_csv(&messages, csv_path)?;
    }

    // Step 4: Analyse
    status!(quiet, "🧮 Analysing...");
    let analysis_start = Instant::now();
    let report = Report::build(&messages, &config);
    debug!("analysis took {:.3}s", analysis_start.elapsed().as_secs_f64());

    // Step 5: Report
    match args.output {
        Some(ref output) => {
            write_report(&report, output, format)?;
            status!(quiet);
            status!(quiet, "✅ Done! Report saved to {}", output);
        }
        None => {
            let rendered = render_report(&report, format)?;
            status!(quiet);
            print!("{rendered}");
            if !rendered.ends_with('\n') {
                println!();
            }
        }
    }

    status!(
        quiet,
        "⚡ {} messages analysed in {:.2}s",
        messages.len(),
        total_start.elapsed().as_secs_f64()
    );

    Ok(())
}

/// Parse the file, or stdin when the input is `-`.
fn parse_input(args: &Args) -> Result<(Vec<Message>, std::time::Duration), ChatstatsError> {
    let parser = ChatParser::new();
    status!(args.quiet, "⏳ Parsing {}...", parser.name());
    let parse_start = Instant::now();
    let messages = if args.reads_stdin() {
        parser.parse_reader(io::stdin().lock())?
    } else {
        parser.parse(Path::new(&args.input))?
    };
    Ok((messages, parse_start.elapsed()))
}
