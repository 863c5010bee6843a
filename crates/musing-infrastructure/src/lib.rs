pub mod config_service;
pub mod image_reader;
pub mod paths;

pub use crate::config_service::ConfigService;
pub use crate::image_reader::{FsImageReader, image_file_from_path};
pub use crate::paths::MusingPaths;
