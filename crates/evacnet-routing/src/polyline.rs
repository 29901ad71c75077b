//! Decoder for the HERE flexible polyline encoding.
//!
//! An encoded polyline is a string over a URL-safe 64-character alphabet.
//! It starts with a format version (always `1`) and a header carrying the
//! coordinate precision and an optional third dimension, followed by
//! zigzag-encoded deltas for each point. Every integer is written as a
//! little-endian sequence of 5-bit groups, with `0x20` marking that another
//! group follows.

use thiserror::Error;

use evacnet_core::error::{AppError, ErrorKind};

/// Only format version understood by [`decode`].
pub const FORMAT_VERSION: u64 = 1;

/// Failure to decode a flexible polyline.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PolylineError {
    /// A character outside the encoding alphabet.
    #[error("invalid character '{character}' at position {position}")]
    InvalidCharacter {
        /// The offending character.
        character: char,
        /// Byte offset in the input.
        position: usize,
    },
    /// The header names a format version other than [`FORMAT_VERSION`].
    #[error("unsupported polyline format version {0}")]
    UnsupportedVersion(u64),
    /// The input ended in the middle of a value or a point.
    #[error("polyline ends in the middle of a value")]
    Truncated,
    /// A value has more groups than fit in 64 bits.
    #[error("polyline value overflows 64 bits")]
    Overflow,
}

impl From<PolylineError> for AppError {
    fn from(err: PolylineError) -> Self {
        AppError::with_source(
            ErrorKind::ExternalService,
            format!("Routing API returned an undecodable polyline: {err}"),
            err,
        )
    }
}

/// Decoded header of a polyline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Header {
    /// Decimal digits kept for latitude and longitude.
    pub precision: u32,
    /// Kind of third dimension, `0` when absent.
    pub third_dim: u32,
    /// Decimal digits kept for the third dimension.
    pub third_dim_precision: u32,
}

/// Decode an encoded polyline into `(lat, lon)` pairs, in order.
///
/// A third dimension, if present, is decoded and discarded.
pub fn decode(encoded: &str) -> Result<Vec<(f64, f64)>, PolylineError> {
    let mut reader = Reader::new(encoded);
    let header = reader.header()?;

    let factor = 10f64.powi(header.precision as i32);
    let mut lat: i64 = 0;
    let mut lon: i64 = 0;
    let mut points = Vec::new();

    while !reader.is_empty() {
        lat = lat
            .checked_add(reader.signed()?)
            .ok_or(PolylineError::Overflow)?;
        lon = lon
            .checked_add(reader.signed_required()?)
            .ok_or(PolylineError::Overflow)?;
        if header.third_dim != 0 {
            reader.signed_required()?;
        }
        points.push((lat as f64 / factor, lon as f64 / factor));
    }

    Ok(points)
}

/// Decode only the header of a polyline.
pub fn decode_header(encoded: &str) -> Result<Header, PolylineError> {
    Reader::new(encoded).header()
}

/// Cursor over the encoded characters.
struct Reader<'a> {
    bytes: &'a [u8],
    position: usize,
}

impl<'a> Reader<'a> {
    fn new(encoded: &'a str) -> Self {
        Self {
            bytes: encoded.as_bytes(),
            position: 0,
        }
    }

    fn is_empty(&self) -> bool {
        self.position >= self.bytes.len()
    }

    fn header(&mut self) -> Result<Header, PolylineError> {
        let version = self.unsigned()?;
        if version != FORMAT_VERSION {
            return Err(PolylineError::UnsupportedVersion(version));
        }

        let value = self.unsigned()?;
        Ok(Header {
            precision: (value & 15) as u32,
            third_dim: ((value >> 4) & 7) as u32,
            third_dim_precision: ((value >> 7) & 15) as u32,
        })
    }

    fn unsigned(&mut self) -> Result<u64, PolylineError> {
        let mut result: u64 = 0;
        let mut shift: u32 = 0;

        loop {
            let Some(&byte) = self.bytes.get(self.position) else {
                return Err(PolylineError::Truncated);
            };
            let value = decode_char(byte).ok_or(PolylineError::InvalidCharacter {
                character: byte as char,
                position: self.position,
            })?;
            self.position += 1;

            let chunk = value & 0x1F;
            if shift >= 64 || (chunk << shift) >> shift != chunk {
                return Err(PolylineError::Overflow);
            }
            result |= chunk << shift;

            if value & 0x20 == 0 {
                return Ok(result);
            }
            shift += 5;
        }
    }

    fn signed(&mut self) -> Result<i64, PolylineError> {
        let value = self.unsigned()?;
        let mut result = (value >> 1) as i64;
        if value & 1 != 0 {
            result = !result;
        }
        Ok(result)
    }

    /// Like [`Reader::signed`] but for values that must follow within the
    /// same point.
    fn signed_required(&mut self) -> Result<i64, PolylineError> {
        if self.is_empty() {
            return Err(PolylineError::Truncated);
        }
        self.signed()
    }
}

fn decode_char(byte: u8) -> Option<u64> {
    let value = match byte {
        b'A'..=b'Z' => byte - b'A',
        b'a'..=b'z' => byte - b'a' + 26,
        b'0'..=b'9' => byte - b'0' + 52,
        b'-' => 62,
        b'_' => 63,
        _ => return None,
    };
    Some(value as u64)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "BFoz5xJ67i1B1B7PzIhaxL7Y";

    fn assert_close(actual: (f64, f64), expected: (f64, f64)) {
        assert!(
            (actual.0 - expected.0).abs() < 1e-9 && (actual.1 - expected.1).abs() < 1e-9,
            "{actual:?} != {expected:?}"
        );
    }

    #[test]
    fn test_decode_sample() {
        let points = decode(SAMPLE).unwrap();
        let expected = [
            (50.10228, 8.69821),
            (50.10201, 8.69567),
            (50.10063, 8.69150),
            (50.09878, 8.68752),
        ];
        assert_eq!(points.len(), expected.len());
        for (actual, expected) in points.into_iter().zip(expected) {
            assert_close(actual, expected);
        }
    }

    #[test]
    fn test_decode_header() {
        let header = decode_header(SAMPLE).unwrap();
        assert_eq!(
            header,
            Header {
                precision: 5,
                third_dim: 0,
                third_dim_precision: 0,
            }
        );
    }

    #[test]
    fn test_header_only_is_empty_route() {
        assert!(decode("BF").unwrap().is_empty());
    }

    #[test]
    fn test_rejects_other_versions() {
        // `C` encodes 2.
        assert_eq!(decode("CF"), Err(PolylineError::UnsupportedVersion(2)));
    }

    #[test]
    fn test_rejects_invalid_character() {
        let err = decode("BFoz5x!").unwrap_err();
        assert_eq!(
            err,
            PolylineError::InvalidCharacter {
                character: '!',
                position: 6,
            }
        );
    }

    #[test]
    fn test_rejects_truncated_input() {
        assert_eq!(decode(""), Err(PolylineError::Truncated));
        // Latitude continues past the end.
        assert_eq!(decode("BFoz5x"), Err(PolylineError::Truncated));
        // Latitude without a longitude.
        assert_eq!(decode("BFoz5xJ"), Err(PolylineError::Truncated));
    }

    #[test]
    fn test_rejects_value_wider_than_64_bits() {
        // Twelve full groups then `Q` (16), whose bit lands past bit 63.
        let encoded = format!("BF{}QA", "_".repeat(12));
        assert_eq!(decode(&encoded), Err(PolylineError::Overflow));
    }

    #[test]
    fn test_rejects_accumulated_overflow() {
        // Each latitude delta is -2^62; the third one leaves the i64 range.
        let encoded = format!("BF{}", "____________HA".repeat(3));
        assert_eq!(decode(&encoded), Err(PolylineError::Overflow));
    }

    #[test]
    fn test_third_dimension_is_skipped() {
        // Precision 5 with an altitude dimension and the point (1.0, 2.0, 3.0).
        let encoded = "B1BgqjGg0mMG";
        assert_eq!(decode_header(encoded).unwrap().third_dim, 3);

        let points = decode(encoded).unwrap();
        assert_eq!(points.len(), 1);
        assert_close(points[0], (1.0, 2.0));
    }
}
