//! CLI argument parsing

#[derive(Debug, Clone)]
pub struct CliArgs {
    pub command: Command,
}

#[derive(Debug, Clone)]
pub enum Command {
    Scan(ScanArgs),
    History(HistoryArgs),
}

#[derive(Debug, Clone)]
pub struct ScanArgs {
    pub path: String,
    pub user: String,
    pub history: Option<String>,
    pub json: bool,
    pub quiet: bool,
    pub parallel: bool,
    pub follow_symlinks: bool,
    pub ffprobe: Option<String>,
    pub target_fps: Option<f64>,
    pub fps_tolerance: Option<f64>,
    pub format: Option<String>,
    pub min_width: Option<u32>,
    pub min_height: Option<u32>,
    pub target_ratio: Option<f64>,
    pub ratio_tolerance: Option<f64>,
}

#[derive(Debug, Clone)]
pub struct HistoryArgs {
    pub user: String,
    pub history: Option<String>,
    pub json: bool,
}

impl Default for ScanArgs {
    fn default() -> Self {
        Self {
            path: String::new(),
            user: String::new(),
            history: None,
            json: false,
            quiet: false,
            parallel: false,
            follow_symlinks: false,
            ffprobe: None,
            target_fps: None,
            fps_tolerance: None,
            format: None,
            min_width: None,
            min_height: None,
            target_ratio: None,
            ratio_tolerance: None,
        }
    }
}

/// Parse command line arguments
pub fn parse_args(args: &[String]) -> Result<CliArgs, String> {
    if args.len() < 2 {
        return Err("No command specified".to_string());
    }

    let command = match args[1].as_str() {
        "scan" => {
            let scan_args = parse_scan_args(&args[2..])?;
            Command::Scan(scan_args)
        }
        "history" => {
            let history_args = parse_history_args(&args[2..])?;
            Command::History(history_args)
        }
        _ => return Err(format!("Unknown command: {}", args[1])),
    };

    Ok(CliArgs { command })
}

fn value_of<'a>(args: &'a [String], i: &mut usize, flag: &str) -> Result<&'a str, String> {
    *i += 1;
    if *i >= args.len() {
        return Err(format!("{flag} requires a value"));
    }
    Ok(&args[*i])
}

fn parse_number<T: std::str::FromStr>(value: &str, flag: &str) -> Result<T, String> {
    value
        .parse()
        .map_err(|_| format!("{flag} must be a number"))
}

#[allow(clippy::too_many_lines)]
fn parse_scan_args(args: &[String]) -> Result<ScanArgs, String> {
    let mut scan_args = ScanArgs::default();
    let mut i = 0;

    while i < args.len() {
        match args[i].as_str() {
            "--user" => {
                scan_args.user = value_of(args, &mut i, "--user")?.to_string();
            }
            "--history" => {
                scan_args.history = Some(value_of(args, &mut i, "--history")?.to_string());
            }
            "--json" => {
                scan_args.json = true;
            }
            "--quiet" => {
                scan_args.quiet = true;
            }
            "--parallel" => {
                scan_args.parallel = true;
            }
            "--follow-symlinks" => {
                scan_args.follow_symlinks = true;
            }
            "--ffprobe" => {
                scan_args.ffprobe = Some(value_of(args, &mut i, "--ffprobe")?.to_string());
            }
            "--target-fps" => {
                let value = value_of(args, &mut i, "--target-fps")?;
                scan_args.target_fps = Some(parse_number(value, "--target-fps")?);
            }
            "--fps-tolerance" => {
                let value = value_of(args, &mut i, "--fps-tolerance")?;
                scan_args.fps_tolerance = Some(parse_number(value, "--fps-tolerance")?);
            }
            "--format" => {
                let value = value_of(args, &mut i, "--format")?;
                // Stored with a leading dot to match probed extensions.
                scan_args.format = Some(if value.starts_with('.') {
                    value.to_string()
                } else {
                    format!(".{value}")
                });
            }
            "--min-width" => {
                let value = value_of(args, &mut i, "--min-width")?;
                scan_args.min_width = Some(parse_number(value, "--min-width")?);
            }
            "--min-height" => {
                let value = value_of(args, &mut i, "--min-height")?;
                scan_args.min_height = Some(parse_number(value, "--min-height")?);
            }
            "--target-ratio" => {
                let value = value_of(args, &mut i, "--target-ratio")?;
                scan_args.target_ratio = Some(parse_number(value, "--target-ratio")?);
            }
            "--ratio-tolerance" => {
                let value = value_of(args, &mut i, "--ratio-tolerance")?;
                scan_args.ratio_tolerance = Some(parse_number(value, "--ratio-tolerance")?);
            }
            arg if !arg.starts_with("--") => {
                if scan_args.path.is_empty() {
                    scan_args.path = arg.to_string();
                } else {
                    return Err(format!("Unexpected argument: {arg}"));
                }
            }
            _ => return Err(format!("Unknown option: {}", args[i])),
        }
        i += 1;
    }

    if scan_args.path.is_empty() {
        return Err("Missing required argument: PATH".to_string());
    }
    if scan_args.user.is_empty() {
        return Err("Missing required option: --user".to_string());
    }

    Ok(scan_args)
}

fn parse_history_args(args: &[String]) -> Result<HistoryArgs, String> {
    let mut user = String::new();
    let mut history = None;
    let mut json = false;
    let mut i = 0;

    while i < args.len() {
        match args[i].as_str() {
            "--user" => {
                user = value_of(args, &mut i, "--user")?.to_string();
            }
            "--history" => {
                history = Some(value_of(args, &mut i, "--history")?.to_string());
            }
            "--json" => {
                json = true;
            }
            _ => return Err(format!("Unknown option: {}", args[i])),
        }
        i += 1;
    }

    if user.is_empty() {
        return Err("Missing required option: --user".to_string());
    }

    Ok(HistoryArgs {
        user,
        history,
        json,
    })
}
