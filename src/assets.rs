// The asset generator: two sources in, four opaque PNGs out.
//
//   images/icon.png          -> icon.png, adaptive-icon.png, favicon.png
//   images/logo-stacked.png  -> splash.png
use crate::compose::{canvas, centered, fit_height, flatten, paste_masked, resize_exact, resize_rgba};
use crate::error::Error;
use crate::types::Size;

use image::{ImageFormat, Rgb, RgbImage, RgbaImage};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Brand cream (#FAF9F6), behind every canvas.
pub const BACKGROUND: Rgb<u8> = Rgb([250, 249, 246]);

pub const ICON_CANVAS: Size = Size::new(1024, 1024);
pub const ICON_GLYPH: Size = Size::new(800, 800);
pub const FAVICON: Size = Size::new(48, 48);
pub const SPLASH_CANVAS: Size = Size::new(1284, 2778);
pub const SPLASH_LOGO_HEIGHT: u32 = 400;

/// Sources live under this directory, relative to the assets root.
pub const IMAGES_DIR: &str = "images";
pub const ICON_SOURCE: &str = "icon.png";
pub const LOGO_SOURCE: &str = "logo-stacked.png";

/// Every file the generator writes, in the order it writes them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Asset {
    Icon,
    AdaptiveIcon,
    Favicon,
    Splash,
}

impl Asset {
    pub const ALL: [Asset; 4] = [Asset::Icon, Asset::AdaptiveIcon, Asset::Favicon, Asset::Splash];

    pub fn file_name(self) -> &'static str {
        match self {
            Asset::Icon => "icon.png",
            Asset::AdaptiveIcon => "adaptive-icon.png",
            Asset::Favicon => "favicon.png",
            Asset::Splash => "splash.png",
        }
    }

    pub fn size(self) -> Size {
        match self {
            Asset::Icon | Asset::AdaptiveIcon => ICON_CANVAS,
            Asset::Favicon => FAVICON,
            Asset::Splash => SPLASH_CANVAS,
        }
    }
}

/// A file that was written successfully.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Written {
    pub asset: Asset,
    pub path: PathBuf,
}

/// The two source images, decoded to RGBA.
pub struct Sources {
    pub icon: RgbaImage,
    pub logo: RgbaImage,
}

impl Sources {
    pub fn load(images_dir: &Path) -> Result<Self, Error> {
        Ok(Self {
            icon: load_rgba(&images_dir.join(ICON_SOURCE))?,
            logo: load_rgba(&images_dir.join(LOGO_SOURCE))?,
        })
    }
}

fn load_rgba(path: &Path) -> Result<RgbaImage, Error> {
    let img = image::open(path).map_err(|source| Error::SourceOpen {
        path: path.to_path_buf(),
        source,
    })?;
    debug!("loaded {} ({})", path.display(), Size::of(&img));
    Ok(img.to_rgba8())
}

/// Glyph forced to 800x800 and centered on the 1024x1024 background.
pub fn build_icon(icon: &RgbaImage) -> RgbImage {
    let mut board = canvas(ICON_CANVAS, BACKGROUND);

    // Forced square; a non-square source gets stretched.
    let glyph = resize_rgba(icon, ICON_GLYPH);
    let at = centered(ICON_CANVAS, ICON_GLYPH);
    debug!("icon glyph {} at ({}, {})", ICON_GLYPH, at.x, at.y);

    // Visual: glyph sits in the middle with a 112px cream margin all round.
    paste_masked(&mut board, &glyph, at);
    flatten(&board)
}

/// Straight downscale of the finished icon.
pub fn build_favicon(icon: &RgbImage) -> RgbImage {
    resize_exact(icon, FAVICON)
}

/// Stacked logo at a fixed height, aspect ratio kept, centered on the splash.
pub fn build_splash(logo: &RgbaImage) -> Result<RgbImage, Error> {
    let mut board = canvas(SPLASH_CANVAS, BACKGROUND);
    let size = fit_height(Size::of(logo), SPLASH_LOGO_HEIGHT)?;
    let scaled = resize_rgba(logo, size);
    let at = centered(SPLASH_CANVAS, size);
    debug!("splash logo {} at ({}, {})", size, at.x, at.y);
    paste_masked(&mut board, &scaled, at);
    Ok(flatten(&board))
}

fn save(img: &RgbImage, assets_dir: &Path, asset: Asset) -> Result<Written, Error> {
    let path = assets_dir.join(asset.file_name());
    img.save_with_format(&path, ImageFormat::Png)
        .map_err(|source| Error::OutputSave { path: path.clone(), source })?;
    info!("Created {} ({})", asset.file_name(), asset.size());
    Ok(Written { asset, path })
}

/// Run the whole procedure against `assets_dir`.
/// Stops at the first failure; files already written are left in place.
pub fn generate(assets_dir: &Path) -> Result<Vec<Written>, Error> {
    let sources = Sources::load(&assets_dir.join(IMAGES_DIR))?;
    let mut written = Vec::with_capacity(Asset::ALL.len());

    /* 1) Icon: one flattened canvas, written under both names. */
    let icon = build_icon(&sources.icon);
    written.push(save(&icon, assets_dir, Asset::Icon)?);
    written.push(save(&icon, assets_dir, Asset::AdaptiveIcon)?);

    /* 2) Favicon straight from the finished icon, not from the source. */
    let favicon = build_favicon(&icon);
    written.push(save(&favicon, assets_dir, Asset::Favicon)?);

    /* 3) Splash: the stacked logo on the tall canvas. */
    let splash = build_splash(&sources.logo)?;
    written.push(save(&splash, assets_dir, Asset::Splash)?);

    Ok(written)
}
