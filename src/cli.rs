use clap::Parser;
use std::path::PathBuf;

/// Generates the app icon, adaptive icon, favicon and splash screen
/// from `images/icon.png` and `images/logo-stacked.png`.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Assets directory holding `images/`; outputs are written to its root
    #[arg(short, long, env = "MOBILE_ASSETS_DIR", default_value = ".")]
    pub assets_dir: PathBuf,

    /// Log resize and placement details
    #[arg(short, long)]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_current_directory() {
        let args = Args::try_parse_from(["mobile-assets"]).unwrap();
        assert_eq!(args.assets_dir, PathBuf::from("."));
        assert!(!args.verbose);
    }

    #[test]
    fn takes_assets_dir_and_verbose() {
        let args = Args::try_parse_from(["mobile-assets", "--assets-dir", "apps/mobile/assets", "-v"]).unwrap();
        assert_eq!(args.assets_dir, PathBuf::from("apps/mobile/assets"));
        assert!(args.verbose);
    }

    #[test]
    fn rejects_stray_arguments() {
        assert!(Args::try_parse_from(["mobile-assets", "extra"]).is_err());
    }

    #[test]
    fn command_is_well_formed() {
        use clap::CommandFactory;
        Args::command().debug_assert();
    }
}
