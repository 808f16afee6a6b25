//! Plain (P3) PPM parsing.
//!
//! Used to check encoder output. Tokens are split on any whitespace and `#`
//! starts a comment running to the end of the line, so files written with or
//! without the trailing space parse the same.

use std::path::Path;

use tracing::debug;
use crate::image_pipeline::common::error::{EncodeError, Result};
use crate::image_pipeline::radiance::types::DisplayImage;

fn tokens(text: &str) -> impl Iterator<Item = &str> {
    text.lines()
        .map(|line| line.split('#').next().unwrap_or(""))
        .flat_map(str::split_whitespace)
}

fn next_number<'a>(tokens: &mut impl Iterator<Item = &'a str>, what: &str) -> Result<usize> {
    let token = tokens
        .next()
        .ok_or_else(|| EncodeError::ParseError(format!("missing {}", what)))?;
    token
        .parse()
        .map_err(|_| EncodeError::ParseError(format!("invalid {}: {:?}", what, token)))
}

pub fn parse_plain_ppm(text: &str) -> Result<DisplayImage> {
    let mut tokens = tokens(text);

    match tokens.next() {
        Some("P3") => {}
        Some(other) => {
            return Err(EncodeError::ParseError(format!("expected P3 marker, found {:?}", other)));
        }
        None => return Err(EncodeError::ParseError("empty input".to_string())),
    }

    let width = next_number(&mut tokens, "width")?;
    let height = next_number(&mut tokens, "height")?;
    if width == 0 || height == 0 {
        return Err(EncodeError::InvalidDimensions(width, height));
    }

    let max_value = next_number(&mut tokens, "max value")?;
    let max_value = u8::try_from(max_value)
        .ok()
        .filter(|&m| m > 0)
        .ok_or_else(|| EncodeError::ParseError(format!("unsupported max value {}", max_value)))?;

    let expected = width
        .checked_mul(height)
        .ok_or(EncodeError::InvalidDimensions(width, height))?;
    let mut pixels = Vec::with_capacity(expected);
    for _ in 0..expected {
        let mut pixel = [0u8; 3];
        for channel in pixel.iter_mut() {
            let sample = next_number(&mut tokens, "sample")?;
            if sample > usize::from(max_value) {
                return Err(EncodeError::ParseError(format!(
                    "sample {} exceeds max value {}",
                    sample, max_value
                )));
            }
            *channel = sample as u8;
        }
        pixels.push(pixel);
    }

    if let Some(extra) = tokens.next() {
        return Err(EncodeError::ParseError(format!("unexpected trailing token {:?}", extra)));
    }

    debug!("Parsed plain PPM: {}x{}", width, height);

    Ok(DisplayImage {
        width,
        height,
        max_value,
        pixels,
    })
}

pub fn read_plain_ppm<P: AsRef<Path>>(path: P) -> Result<DisplayImage> {
    let text = std::fs::read_to_string(path.as_ref())?;
    parse_plain_ppm(&text)
}
