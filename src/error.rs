// One error type for the whole run.
// Every variant states *where* things went wrong.
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    // Opening/decoding one of the source images failed
    #[error("failed to load source image '{}': {source}", path.display())]
    SourceOpen {
        path: PathBuf,
        source: image::ImageError,
    },

    // Encoding/writing an output image failed
    #[error("failed to write '{}': {source}", path.display())]
    OutputSave {
        path: PathBuf,
        source: image::ImageError,
    },

    // A computed target size came out empty
    #[error("geometry error: {0}")]
    Geometry(String),

    // Installing the log subscriber failed
    #[error("logger init error: {0}")]
    Logger(String),
}
