// Regenerates the four app image assets in place:
// • icon.png and adaptive-icon.png: glyph centered on the cream background (1024x1024)
// • favicon.png: the icon scaled down to 48x48
// • splash.png: stacked logo centered on the cream background (1284x2778)

use clap::Parser;
use mobile_assets::{cli::Args, generate, Error};
use tracing::{error, info};

fn setup_logger(verbose: bool) -> Result<(), Error> {
    use tracing::Level;
    use tracing_subscriber::{
        filter::LevelFilter, fmt::layer, layer::SubscriberExt, util::SubscriberInitExt, Registry,
    };

    let level = if verbose { Level::DEBUG } else { Level::INFO };
    Registry::default()
        .with(LevelFilter::from(level))
        .with(layer().with_ansi(true).with_target(false).without_time())
        .try_init()
        .map_err(|e| Error::Logger(e.to_string()))
}

fn main() -> Result<(), Error> {
    let args = Args::parse();
    setup_logger(args.verbose)?;

    match generate(&args.assets_dir) {
        Ok(_) => {
            info!("All assets generated!");
            Ok(())
        }
        Err(e) => {
            error!("{e}");
            Err(e)
        }
    }
}
