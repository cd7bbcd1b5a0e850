//! SRT subtitle writer.
//!
//! Serializes slides back to SRT text. Indices are regenerated
//! 1-based in slide order; timestamps are formatted by the timecode
//! module (millisecond truncation), so a parse of the output
//! reproduces the timing to millisecond precision.

use crate::timecode::format_timestamp;
use crate::timeline::Slide;

/// Write slides as SRT text.
///
/// Each block is the 1-based index, the timing line, the caption
/// verbatim, and a blank separator line (including after the final
/// block).
pub fn write_srt(slides: &[Slide]) -> String {
    let mut output = String::new();

    for (i, slide) in slides.iter().enumerate() {
        output.push_str(&format!("{}\n", i + 1));
        output.push_str(&format!(
            "{} --> {}\n",
            format_timestamp(slide.start_seconds),
            format_timestamp(slide.end_seconds)
        ));
        output.push_str(&slide.text);
        output.push_str("\n\n");
    }

    output
}
