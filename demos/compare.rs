use clap::Parser;
use ridgeline::{MatchConfig, Ridgeline};
use std::fs;
use tracing::error;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::fmt;
use tracing_subscriber::fmt::writer::MakeWriterExt;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to the probe template (base64 text)
    probe: String,

    /// Path to the candidate template (base64 text)
    candidate: String,

    /// Positional tolerance, applied per axis
    #[arg(short = 'r', long, default_value_t = 15.0)]
    radius: f64,

    /// Angular tolerance in degrees
    #[arg(short = 'a', long = "angle-tolerance", default_value_t = 10.0)]
    angle_tolerance: f64,

    /// Minimum score to report a match
    #[arg(short = 't', long, default_value_t = 12)]
    threshold: u32,

    /// Log file path
    #[arg(short = 'l', long = "log-file")]
    log_file: Option<String>,
}

fn initialize_logging(log_file: Option<String>) {
    let console_writer = std::io::stdout.with_max_level(tracing::Level::INFO);

    let file_appender = if let Some(log_file) = log_file {
        RollingFileAppender::new(Rotation::NEVER, ".", log_file)
            .with_max_level(tracing::Level::DEBUG)
    } else {
        RollingFileAppender::new(Rotation::NEVER, ".", "ridgeline.log")
            .with_max_level(tracing::Level::DEBUG)
    };

    let writer = console_writer.and(file_appender);

    let subscriber = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(writer)
        .finish();

    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to set subscriber: {e}");
        std::process::exit(1);
    }
}

fn read_template(path: &str) -> String {
    match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) => {
            error!("Failed to read template {path}: {e}");
            std::process::exit(1);
        }
    }
}

fn main() {
    let args = Args::parse();
    initialize_logging(args.log_file);

    let probe = read_template(&args.probe);
    let candidate = read_template(&args.candidate);

    let ridgeline = Ridgeline::new(MatchConfig {
        radius: args.radius,
        angle_tolerance: args.angle_tolerance,
        score_threshold: args.threshold,
    });

    match ridgeline.compare(&probe, &candidate) {
        Ok(output) => {
            println!("{output}");
            if !output.is_match {
                std::process::exit(1);
            }
        }
        Err(e) => {
            error!("Failed to compare templates: {e}");
            std::process::exit(1);
        }
    }
}
