//! Parse `hh:mm:ss` timestamps given on the command line

use clap::Parser;
use kata::create_time_from_timestamp;

#[derive(Parser, Debug)]
#[command(about = "Parse hh:mm:ss timestamps")]
struct Args {
    /// Timestamps to parse
    #[arg(required = true)]
    timestamps: Vec<String>,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Warn)
        .init();

    let args = Args::parse();
    let mut failures = 0;
    for timestamp in &args.timestamps {
        match create_time_from_timestamp(timestamp) {
            Ok(time) => println!("{timestamp} -> {time}"),
            Err(e) => {
                log::debug!("rejected {timestamp:?}");
                eprintln!("{e}");
                failures += 1;
            }
        }
    }

    if failures > 0 {
        anyhow::bail!("{failures} of {} timestamps were invalid", args.timestamps.len());
    }
    Ok(())
}
