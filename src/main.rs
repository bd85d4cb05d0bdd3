use std::{
    fs::File,
    io::{self, BufReader, BufWriter},
    path::PathBuf,
    process,
};

use bustc::{run, ReaderSource};
use clap::Parser;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "bustc", about = "Print the tokens of a bustc source file", version)]
struct Cli {
    /// Source file to scan, `-` or nothing reads standard input
    #[arg(value_name = "FILE")]
    file: Option<PathBuf>,

    /// Log level used when RUST_LOG is not set
    #[arg(long, value_name = "LEVEL", default_value = "warn")]
    log_level: String,

    /// Leave line comments out of the output
    #[arg(long)]
    skip_comments: bool,
}

fn init_tracing(default_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr).with_target(true))
        .with(filter)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(&cli.log_level);

    let file = cli.file.filter(|path| path.as_os_str() != "-");
    let mut out = BufWriter::new(io::stdout().lock());

    let status = match &file {
        Some(path) => match File::open(path) {
            Ok(handle) => {
                info!(target: "bustc", path = %path.display(), "scanning file");
                let source = ReaderSource::new(BufReader::new(handle));
                run(source, file.as_deref(), cli.skip_comments, &mut out, &mut io::stderr())
            }
            Err(e) => {
                eprintln!("Error: Cannot read '{}': {}", path.display(), e);
                1
            }
        },
        None => {
            info!(target: "bustc", "scanning standard input");
            let source = ReaderSource::new(io::stdin().lock());
            run(source, None, cli.skip_comments, &mut out, &mut io::stderr())
        }
    };

    process::exit(status);
}
