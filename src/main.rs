mod cli;
mod config;
mod display;
mod engine;
mod error;
mod options;
mod store;

use clap::Parser;
use std::ffi::OsString;

use crate::options::Invocation;

/// Environment variable holding the log filter
const LOG_ENV: &str = "GETDATE_LOG";

#[derive(Parser)]
#[command(name = "getdate")]
#[command(about = "Get formatted date values and persist named variables", long_about = None)]
#[command(disable_help_flag = true, disable_version_flag = true)]
struct Cli {
    /// Slash options, flags and the trailing 0|1 output mode; see `getdate /?`
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    args: Vec<OsString>,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::new().filter_or(LOG_ENV, "warn"))
        .format_timestamp(None)
        .init();

    let cli = Cli::parse();
    // Non-UTF-8 arguments are kept, lossily, rather than rejected
    let args: Vec<String> = cli
        .args
        .iter()
        .map(|arg| arg.to_string_lossy().into_owned())
        .collect();
    let invocation = Invocation::parse(args.as_slice());
    let today = chrono::Local::now().date_naive();
    let paths = store::resolve_paths_from_env();
    log::debug!("state file: {}", paths.file.display());

    match cli::execute(&invocation, &paths, today) {
        Ok(Some(line)) if invocation.prints() && !line.is_empty() => println!("{}", line),
        Ok(_) => {}
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
