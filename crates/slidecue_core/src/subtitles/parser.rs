//! SRT subtitle parser.
//!
//! Parses SubRip (.srt) text into timed caption records.
//!
//! # Format Overview
//!
//! SRT files consist of sequential blocks separated by a blank line:
//! ```text
//! 1
//! 00:00:00,500 --> 00:00:04,000
//! First slide text
//!
//! 2
//! 00:00:04,000 --> 00:00:08,500
//! Second slide text
//! ```
//!
//! Each block has:
//! - Index line (ignored, regenerated on export)
//! - Timing line: `HH:MM:SS,mmm --> HH:MM:SS,mmm`
//! - One or more lines of text
//!
//! Malformed blocks (fewer than three lines, or a timing line that
//! does not match the fixed-width pattern) are skipped, not reported.
//! Parsing fails only when no block in the input is usable.

use crate::subtitles::error::ParseError;
use crate::subtitles::types::SubtitleCue;
use crate::timecode;

/// Parse SRT content into an ordered sequence of cues.
///
/// `image_count` is the length of the externally loaded image list;
/// each cue's `image_index` defaults to its raw block ordinal clamped
/// to the last image, or `None` when no images are loaded. Skipped
/// blocks still consume an ordinal.
///
/// # Errors
/// Returns [`ParseError::NoUsableBlocks`] only when zero well-formed
/// blocks are found. Partial success is not an error.
pub fn parse_srt(content: &str, image_count: usize) -> Result<Vec<SubtitleCue>, ParseError> {
    let content = content.replace("\r\n", "\n").replace('\r', "\n");
    let blocks: Vec<&str> = content.trim().split("\n\n").collect();

    let mut cues = Vec::new();
    let mut skipped = 0usize;

    for (ordinal, block) in blocks.iter().enumerate() {
        let lines: Vec<&str> = block.lines().collect();
        if lines.len() < 3 {
            skipped += 1;
            continue;
        }

        // Line 1 is the block index (not validated), line 2 the timing line.
        let Some((start_seconds, end_seconds)) = parse_timing_line(lines[1]) else {
            skipped += 1;
            continue;
        };

        let text = lines[2..].join("\n").trim().to_string();
        let image_index = if image_count == 0 {
            None
        } else {
            Some(ordinal.min(image_count - 1))
        };

        cues.push(SubtitleCue {
            start_seconds,
            end_seconds,
            text,
            image_index,
        });
    }

    if cues.is_empty() {
        return Err(ParseError::NoUsableBlocks {
            blocks: blocks.len(),
        });
    }

    if skipped > 0 {
        tracing::debug!("skipped {} malformed subtitle blocks", skipped);
    }
    tracing::debug!("parsed {} subtitle cues", cues.len());

    Ok(cues)
}

/// Parse a timing line: `HH:MM:SS,mmm --> HH:MM:SS,mmm`.
///
/// Returns `(start_seconds, end_seconds)`, or `None` if either side
/// deviates from the fixed-width timestamp pattern.
fn parse_timing_line(line: &str) -> Option<(f64, f64)> {
    let (start, end) = line.split_once("-->")?;
    let start_seconds = timecode::parse_srt_timestamp(start.trim())?;
    let end_seconds = timecode::parse_srt_timestamp(end.trim())?;
    Some((start_seconds, end_seconds))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_two_blocks() {
        let content = "1\n00:00:00,500 --> 00:00:04,000\nHello\n\n2\n00:00:04,000 --> 00:00:08,500\nWorld";
        let cues = parse_srt(content, 0).unwrap();

        assert_eq!(cues.len(), 2);
        assert!((cues[0].start_seconds - 0.5).abs() < 1e-9);
        assert!((cues[0].end_seconds - 4.0).abs() < 1e-9);
        assert_eq!(cues[0].text, "Hello");
        assert!((cues[1].start_seconds - 4.0).abs() < 1e-9);
        assert!((cues[1].end_seconds - 8.5).abs() < 1e-9);
        assert_eq!(cues[1].text, "World");
    }

    #[test]
    fn multi_line_captions_join_with_newline() {
        let content = "1\n00:00:01,000 --> 00:00:04,000\nLine one\nLine two\n";
        let cues = parse_srt(content, 0).unwrap();
        assert_eq!(cues.len(), 1);
        assert_eq!(cues[0].text, "Line one\nLine two");
    }

    #[test]
    fn crlf_input_is_normalized() {
        let content = "1\r\n00:00:01,000 --> 00:00:02,000\r\nHello\r\n\r\n2\r\n00:00:02,000 --> 00:00:03,000\r\nWorld\r\n";
        let cues = parse_srt(content, 0).unwrap();
        assert_eq!(cues.len(), 2);
    }

    #[test]
    fn malformed_blocks_are_skipped() {
        // Second block has a broken timing line, third has too few lines.
        let content = "1\n00:00:01,000 --> 00:00:02,000\nGood\n\n2\nnot a timing line\nBad\n\n3\n\n4\n00:00:05,000 --> 00:00:06,000\nAlso good";
        let cues = parse_srt(content, 0).unwrap();
        assert_eq!(cues.len(), 2);
        assert_eq!(cues[0].text, "Good");
        assert_eq!(cues[1].text, "Also good");
    }

    #[test]
    fn no_usable_blocks_is_an_error() {
        let err = parse_srt("just\nsome\ntext without timing", 0).unwrap_err();
        assert!(matches!(err, ParseError::NoUsableBlocks { .. }));

        assert!(parse_srt("", 0).is_err());
    }

    #[test]
    fn image_index_clamps_to_last_image() {
        let content = "1\n00:00:00,000 --> 00:00:01,000\nA\n\n2\n00:00:01,000 --> 00:00:02,000\nB\n\n3\n00:00:02,000 --> 00:00:03,000\nC";
        let cues = parse_srt(content, 2).unwrap();
        assert_eq!(cues[0].image_index, Some(0));
        assert_eq!(cues[1].image_index, Some(1));
        assert_eq!(cues[2].image_index, Some(1));
    }

    #[test]
    fn image_index_none_without_images() {
        let content = "1\n00:00:00,000 --> 00:00:01,000\nA";
        let cues = parse_srt(content, 0).unwrap();
        assert_eq!(cues[0].image_index, None);
    }

    #[test]
    fn skipped_blocks_still_consume_an_ordinal() {
        // Block 2 is malformed; block 3 keeps ordinal 2.
        let content = "1\n00:00:00,000 --> 00:00:01,000\nA\n\ngarbage\n\n3\n00:00:02,000 --> 00:00:03,000\nC";
        let cues = parse_srt(content, 5).unwrap();
        assert_eq!(cues.len(), 2);
        assert_eq!(cues[0].image_index, Some(0));
        assert_eq!(cues[1].image_index, Some(2));
    }

    #[test]
    fn loose_whitespace_around_arrow() {
        let cues = parse_srt("1\n00:00:01,000-->00:00:02,000\nTight", 0).unwrap();
        assert_eq!(cues.len(), 1);

        let cues = parse_srt("1\n00:00:01,000   -->   00:00:02,000\nWide", 0).unwrap();
        assert_eq!(cues.len(), 1);
    }

    #[test]
    fn timing_line_must_be_second() {
        // Timing line in the wrong position is not searched for.
        let content = "00:00:01,000 --> 00:00:02,000\n1\nText";
        assert!(parse_srt(content, 0).is_err());
    }
}
