//! Print the sample drink menu, or a menu read from a TOML file

use anyhow::Context;
use clap::Parser;
use kata::Menu;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(about = "Print drink recipes")]
struct Args {
    /// TOML menu file; the built-in sample menu is used when omitted
    #[arg(short, long)]
    menu: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Warn)
        .init();

    let args = Args::parse();
    let menu = match &args.menu {
        Some(path) => {
            log::info!("Reading menu from {}", path.display());
            let source = std::fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display()))?;
            Menu::from_toml_str(&source).with_context(|| format!("parsing {}", path.display()))?
        }
        None => Menu::sample(),
    };

    for recipe in &menu.recipes {
        println!("{recipe}");
    }
    Ok(())
}
