//! File reading with encoding fallback

use std::fs;
use std::path::Path;

use chardetng::EncodingDetector;

use crate::observability::{Logger, Severity};

use super::errors::{DecodeError, DecodeResult};

/// Reads a file and resolves its bytes into text.
///
/// Strict UTF-8 first; on failure the full byte buffer is run through a
/// statistical detector and re-decoded with the guessed encoding. A
/// guessed decode that still contains malformed sequences fails hard.
pub fn decode_file(path: &Path) -> DecodeResult<String> {
    let bytes = fs::read(path).map_err(|e| DecodeError::Io {
        path: path.display().to_string(),
        source: e,
    })?;

    match String::from_utf8(bytes) {
        Ok(text) => Ok(text),
        Err(err) => decode_detected(path, err.into_bytes()),
    }
}

/// Second stage: statistical detection over the raw bytes.
fn decode_detected(path: &Path, bytes: Vec<u8>) -> DecodeResult<String> {
    let mut detector = EncodingDetector::new();
    detector.feed(&bytes, true);
    let encoding = detector.guess(None, true);

    let (text, _, had_errors) = encoding.decode(&bytes);
    if had_errors {
        return Err(DecodeError::Undecodable {
            path: path.display().to_string(),
            encoding: encoding.name(),
        });
    }

    Logger::log(
        Severity::Warn,
        "decode_fallback",
        &[
            ("detected_encoding", encoding.name()),
            ("path", &path.display().to_string()),
        ],
    );

    Ok(text.into_owned())
}
