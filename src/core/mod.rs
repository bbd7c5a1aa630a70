pub mod app;
pub mod decode;
pub mod error;
pub mod normalize;
pub mod paths;
pub mod rules;
pub mod stream;
pub mod walker;

pub use decode::DecodeMode;
pub use error::CleanupError;
pub use normalize::{Normalizer, normalize};
pub use walker::{FileOutcome, Summary, normalize_dir, normalize_file, normalize_paths};
