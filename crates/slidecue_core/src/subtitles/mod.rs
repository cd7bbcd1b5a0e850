//! Subtitle import and export.
//!
//! Parses SRT text into timed caption records and serializes a
//! timeline's slides back out, with a millisecond-exact round trip.
//!
//! # Components
//!
//! - **types**: the parsed cue record
//! - **parser**: SRT block parsing (lenient, skips malformed blocks)
//! - **writer**: SRT serialization
//!
//! # Usage
//!
//! ```ignore
//! use slidecue_core::subtitles::{parse_srt, write_srt};
//!
//! let cues = parse_srt(&srt_text, image_count)?;
//! let timeline = Timeline::from_cues(cues);
//! // ... edit ...
//! let exported = write_srt(timeline.slides());
//! ```

mod error;
pub mod parser;
mod types;
pub mod writer;

use std::fs;
use std::path::Path;

use crate::timeline::Slide;

pub use error::{ParseError, SubtitleError};
pub use parser::parse_srt;
pub use types::SubtitleCue;
pub use writer::write_srt;

/// Parse a subtitle file from disk.
///
/// # Errors
/// Fails on unreadable files or when the content has no usable blocks.
pub fn parse_file(
    path: impl AsRef<Path>,
    image_count: usize,
) -> Result<Vec<SubtitleCue>, SubtitleError> {
    let path = path.as_ref();
    let content =
        fs::read_to_string(path).map_err(|e| SubtitleError::read(path.to_path_buf(), e))?;
    Ok(parse_srt(&content, image_count)?)
}

/// Write slides to an SRT file on disk.
pub fn write_file(slides: &[Slide], path: impl AsRef<Path>) -> Result<(), SubtitleError> {
    let path = path.as_ref();
    let content = write_srt(slides);
    fs::write(path, content).map_err(|e| SubtitleError::write(path.to_path_buf(), e))
}
