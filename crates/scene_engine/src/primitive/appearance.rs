//! Size and color as written in scene documents

use serde::{Deserialize, Serialize};

/// Size field: a bare number or a `"W"` / `"WxL"` string
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SizeSpec {
    /// Single number, used for both width and length
    Number(f32),
    /// `"W"` or `"WxL"`
    Text(String),
}

impl Default for SizeSpec {
    fn default() -> Self {
        Self::Number(1.0)
    }
}

/// Parsed size
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Size {
    /// Point size, or line width
    pub width: f32,
    /// Line length (equals width when only one number was given)
    pub length: f32,
}

impl SizeSpec {
    /// Parse into a [`Size`]
    ///
    /// Returns `None` for text that is not a finite number or a pair of
    /// finite numbers separated by `x`.
    pub fn parse(&self) -> Option<Size> {
        match self {
            Self::Number(value) if value.is_finite() => Some(Size { width: *value, length: *value }),
            Self::Number(_) => None,
            Self::Text(text) => {
                let mut parts = text.split('x').map(|part| part.trim().parse::<f32>());
                let width = parts.next()?.ok().filter(|w| w.is_finite())?;
                let length = match parts.next() {
                    Some(length) => length.ok().filter(|l| l.is_finite())?,
                    None => width,
                };
                if parts.next().is_some() {
                    return None;
                }
                Some(Size { width, length })
            }
        }
    }

    /// The text that was written, for error messages
    pub fn describe(&self) -> String {
        match self {
            Self::Number(value) => value.to_string(),
            Self::Text(text) => text.clone(),
        }
    }
}

/// Color string from a scene document (`#rgb`, `#rgba`, `#rrggbb`, `#rrggbbaa`)
///
/// Kept verbatim. Decoding is left to presentation sinks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Color(pub String);

impl Default for Color {
    fn default() -> Self {
        Self("#ffffffff".to_string())
    }
}

impl Color {
    /// Decode into normalized `[r, g, b, a]`
    pub fn to_rgba(&self) -> Option<[f32; 4]> {
        let hex = self.0.trim().strip_prefix('#')?;
        if !hex.is_ascii() {
            return None;
        }

        let channels: Vec<u8> = match hex.len() {
            3 | 4 => hex
                .chars()
                .map(|c| c.to_digit(16).map(|d| (d * 17) as u8))
                .collect::<Option<_>>()?,
            6 | 8 => (0..hex.len())
                .step_by(2)
                .map(|i| u8::from_str_radix(&hex[i..i + 2], 16).ok())
                .collect::<Option<_>>()?,
            _ => return None,
        };

        let alpha = channels.get(3).copied().unwrap_or(u8::MAX);
        Some([
            f32::from(channels[0]) / 255.0,
            f32::from(channels[1]) / 255.0,
            f32::from(channels[2]) / 255.0,
            f32::from(alpha) / 255.0,
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size_forms() {
        assert_eq!(
            SizeSpec::Number(0.1).parse(),
            Some(Size { width: 0.1, length: 0.1 })
        );
        assert_eq!(
            SizeSpec::Text("0.02x1.5".into()).parse(),
            Some(Size { width: 0.02, length: 1.5 })
        );
        assert_eq!(
            SizeSpec::Text("2".into()).parse(),
            Some(Size { width: 2.0, length: 2.0 })
        );
    }

    #[test]
    fn test_malformed_sizes() {
        for text in ["", "abc", "1xfoo", "x2", "1x2x3", "NaN"] {
            assert_eq!(SizeSpec::Text(text.into()).parse(), None, "{text:?}");
        }
        assert_eq!(SizeSpec::Number(f32::NAN).parse(), None);
    }

    #[test]
    fn test_size_deserializes_untagged() {
        let number: SizeSpec = serde_json::from_str("1").unwrap();
        let text: SizeSpec = serde_json::from_str("\"1x3\"").unwrap();
        assert_eq!(number, SizeSpec::Number(1.0));
        assert_eq!(text, SizeSpec::Text("1x3".into()));
    }

    #[test]
    fn test_color_decoding() {
        assert_eq!(Color("#ff0000ff".into()).to_rgba(), Some([1.0, 0.0, 0.0, 1.0]));
        assert_eq!(Color("#00ff00".into()).to_rgba(), Some([0.0, 1.0, 0.0, 1.0]));
        assert_eq!(Color("#fff0".into()).to_rgba(), Some([1.0, 1.0, 1.0, 0.0]));
        assert_eq!(Color("ff0000".into()).to_rgba(), None);
        assert_eq!(Color("#ggg".into()).to_rgba(), None);
        assert_eq!(Color("#12345".into()).to_rgba(), None);
    }
}
