//! Filesystem export of storyboard packs.
//!
//! A pack is a directory named after the song holding one PNG per shot, the
//! thumbnail, the style gallery and a `storyboard.json` manifest.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod directory;

pub use directory::{DirectoryExporter, ExportReport};
