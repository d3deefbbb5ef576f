use clap::Parser;
use relm4::prelude::*;
use std::path::PathBuf;
use telepad::RemotePad;
use telepad_gtk::config;
use telepad_gtk::gui::app::AppModel;
use telepad_gtk::sys::runtime;

#[derive(Parser, Debug)]
#[command(version, about = "Five-zone touch remote")]
struct Cli {
    /// Config file to use instead of the per-user default
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Write the default config file (if missing) and exit
    #[arg(long)]
    init: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let config_path = match cli.config {
        Some(path) => path,
        None => config::get_config_path()?,
    };

    if cli.init {
        let written = config::write_default_config(&config_path)?;
        println!("{}", written.display());
        return Ok(());
    }

    let config = config::load_config(&config_path)?;
    let pad = RemotePad::new(config.geometry_config()?);
    log::info!("Loaded config from {}", config_path.display());

    let (tx, rx) = async_channel::bounded(32);

    // Start Background Services
    runtime::start_background_services(tx, config_path.clone());

    // GTK would otherwise try to parse our own flags
    let app = RelmApp::new("org.kidng.telepad").with_args(Vec::new());

    app.run::<AppModel>((pad, config, config_path, rx));
    Ok(())
}
