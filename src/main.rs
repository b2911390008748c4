use std::io::{self, BufWriter};
use std::process;

use anyhow::Result;
use clap::Parser;

use dailyhits::utils::{setup_logging, validate_args};
use dailyhits::{analyze_log_file, print_report, Args};

fn main() -> Result<()> {
    let args = Args::parse();
    setup_logging(args.verbose);
    validate_args(&args)?;

    match analyze_log_file(&args) {
        Ok(result) => {
            let stdout = io::stdout();
            let mut out = BufWriter::new(stdout.lock());
            print_report(&result, &args, &mut out)
        }
        Err(e) => {
            eprintln!("dailyhits: {e}");
            process::exit(e.exit_code());
        }
    }
}
