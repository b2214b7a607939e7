//! Video QC CLI (vqc) - Main binary entry point

use vqc::cli::args::{Command, HistoryArgs, ScanArgs, parse_args};
use vqc::cli::output::{format_history_json, format_history_text, format_json, format_text};
use vqc::services::history::{HistorySink, JsonlHistory};
use vqc::services::probe::FfprobeProber;
use vqc::services::report;
use vqc::{ScanOptions, ScanReport, Standard};
use std::process;

const DEFAULT_HISTORY_FILE: &str = "vqc_history.jsonl";

fn main() {
    // Initialize logger (controlled by RUST_LOG environment variable)
    // Example: RUST_LOG=debug vqc scan /path --user ID001
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_help();
        return;
    }

    match args[1].as_str() {
        "--help" | "-h" => {
            print_help();
            return;
        }
        "--version" | "-v" => {
            print_version();
            return;
        }
        _ => {}
    }

    // Parse arguments
    let cli_args = match parse_args(&args) {
        Ok(a) => a,
        Err(e) => {
            eprintln!("Error: {e}");
            eprintln!("Use --help for usage information");
            process::exit(2);
        }
    };

    // Execute command
    let exit_code = match &cli_args.command {
        Command::Scan(scan_args) => handle_scan(scan_args),
        Command::History(history_args) => handle_history(history_args),
    };

    process::exit(exit_code);
}

fn standard_from_args(args: &ScanArgs) -> Standard {
    let mut standard = Standard::default();
    if let Some(fps) = args.target_fps {
        standard.target_fps = fps;
    }
    if let Some(tolerance) = args.fps_tolerance {
        standard.fps_tolerance = tolerance;
    }
    if let Some(ref format) = args.format {
        standard.required_extension = format.to_ascii_lowercase();
    }
    if let Some(width) = args.min_width {
        standard.min_width = width;
    }
    if let Some(height) = args.min_height {
        standard.min_height = height;
    }
    if let Some(ratio) = args.target_ratio {
        standard.target_ratio = ratio;
    }
    if let Some(tolerance) = args.ratio_tolerance {
        standard.ratio_tolerance = tolerance;
    }
    standard
}

fn handle_scan(args: &ScanArgs) -> i32 {
    let standard = standard_from_args(args);

    let opts = ScanOptions {
        parallel_probe: args.parallel,
        follow_symlinks: args.follow_symlinks,
    };

    let prober = match args.ffprobe.as_deref() {
        Some(command) => FfprobeProber::with_command(command),
        None => FfprobeProber::new(),
    };

    if !args.quiet {
        eprintln!("Scanning: {}", args.path);
    }

    let scan_report = match vqc::scan_report(&args.path, &standard, &prober, &opts) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("Error: {e}");
            return match e {
                vqc::Error::InvalidInput(_) => 2,
                _ => 4,
            };
        }
    };

    // History is recorded only for completed scans, after the full summary
    // exists; aborted scans must leave the sink untouched.
    if let ScanReport::Completed(ref summary) = scan_report {
        let history_path = args.history.as_deref().unwrap_or(DEFAULT_HISTORY_FILE);
        let mut sink = JsonlHistory::new(history_path);
        match report::report(summary, &args.user, &args.path, &mut sink) {
            Ok(record) => {
                if !args.quiet {
                    eprintln!(
                        "Recorded: {}/{} passed at {}",
                        record.pass_count, record.total, record.time
                    );
                }
            }
            Err(e) => {
                eprintln!("Error: Failed to write history: {e}");
                return 4;
            }
        }
    }

    if args.json {
        println!("{}", format_json(&scan_report));
    } else {
        print!("{}", format_text(&scan_report));
    }

    match scan_report {
        ScanReport::Completed(_) => 0,
        ScanReport::RootNotFound => 2,
        ScanReport::StructureError { .. } | ScanReport::NoVideosFound => 3,
    }
}

fn handle_history(args: &HistoryArgs) -> i32 {
    let history_path = args.history.as_deref().unwrap_or(DEFAULT_HISTORY_FILE);
    let sink = JsonlHistory::new(history_path);

    let records = match sink.list_by_user(&args.user) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("Error: Failed to read history: {e}");
            return 4;
        }
    };

    if args.json {
        println!("{}", format_history_json(&records));
    } else {
        print!("{}", format_history_text(&records));
    }

    0
}

fn print_help() {
    println!("Video QC CLI (vqc) - Audit video trees against standards and naming rules");
    println!();
    println!("USAGE:");
    println!("    vqc scan <PATH> --user <ID> [OPTIONS]");
    println!("    vqc history --user <ID> [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("    scan      Walk a directory, validate naming, and check every video");
    println!("    history   List past scan summaries for a user");
    println!();
    println!("GLOBAL OPTIONS:");
    println!("    -h, --help                 Show this help message");
    println!("    -v, --version              Show version information");
    println!();
    println!("SCAN OPTIONS:");
    println!("    --user <ID>               Acting user recorded in history (required)");
    println!("    --history <FILE>          History file (default: {DEFAULT_HISTORY_FILE})");
    println!("    --json                    Emit machine-readable output");
    println!("    --quiet                   Suppress non-error progress output");
    println!("    --parallel                Probe files concurrently");
    println!("    --follow-symlinks         Follow symbolic links during the walk");
    println!("    --ffprobe <CMD>           ffprobe executable (default: ffprobe on PATH)");
    println!("    --target-fps <N>          Required frame rate (default: 30)");
    println!("    --fps-tolerance <N>       Allowed fps deviation (default: 0.5)");
    println!("    --format <EXT>            Required container extension (default: mp4)");
    println!("    --min-width <N>           Minimum frame width (default: 2800)");
    println!("    --min-height <N>          Minimum frame height (default: 2100)");
    println!("    --target-ratio <N>        Required aspect ratio (default: 4/3)");
    println!("    --ratio-tolerance <N>     Allowed ratio deviation (default: 0.05)");
    println!();
    println!("HISTORY OPTIONS:");
    println!("    --user <ID>               User whose records to list (required)");
    println!("    --history <FILE>          History file (default: {DEFAULT_HISTORY_FILE})");
    println!("    --json                    Emit machine-readable output");
    println!();
    println!("EXIT CODES:");
    println!("    0   report produced");
    println!("    2   usage error or path not found");
    println!("    3   naming violation or no video files found");
    println!("    4   I/O failure");
    println!();
    println!("EXAMPLES:");
    println!("    vqc scan /data/batch7 --user ID001");
    println!("    vqc scan /data/batch7 --user ID001 --parallel --json");
    println!("    vqc history --user ID001 --json");
}

fn print_version() {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const GIT_DATE: &str = env!("GIT_DATE");
    const BUILD_TARGET: &str = env!("BUILD_TARGET");

    println!("vqc {VERSION}");
    println!("Commit: {GIT_HASH} ({GIT_DATE})");
    println!("Target: {BUILD_TARGET}");

    #[cfg(debug_assertions)]
    println!("Build: debug");
    #[cfg(not(debug_assertions))]
    println!("Build: release");
}
