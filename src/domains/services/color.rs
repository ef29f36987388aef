//! WCAG color contrast service.

use serde_json::{Value, json};

use super::{FrameworkAware, ServiceError, ServiceResult};
use crate::domains::knowledge::find_color_token;

const AA_NORMAL: f64 = 4.5;
const AA_LARGE: f64 = 3.0;
const AAA_NORMAL: f64 = 7.0;
const AAA_LARGE: f64 = 4.5;

/// Checks WCAG 2.1 contrast between two colors. Framework independent.
#[derive(Debug, Clone)]
pub struct ColorService {
    use_react_default: bool,
}

impl FrameworkAware for ColorService {
    fn use_react_default(&self) -> bool {
        self.use_react_default
    }
}

/// An sRGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Rgb(u8, u8, u8);

impl Rgb {
    /// Parse `#rgb`, `#rrggbb` (leading `#` optional) or a USWDS color token.
    fn parse(input: &str) -> Option<Self> {
        let trimmed = input.trim();
        let hex = find_color_token(trimmed).unwrap_or(trimmed);
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }
        match hex.len() {
            3 => {
                let mut channels = hex.chars().map(|c| c.to_digit(16).map(|d| (d * 17) as u8));
                Some(Self(channels.next()??, channels.next()??, channels.next()??))
            }
            6 => {
                let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
                Some(Self(channel(0)?, channel(2)?, channel(4)?))
            }
            _ => None,
        }
    }

    fn hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }

    fn relative_luminance(&self) -> f64 {
        let linear = |channel: u8| {
            let c = f64::from(channel) / 255.0;
            if c <= 0.039_28 {
                c / 12.92
            } else {
                ((c + 0.055) / 1.055).powf(2.4)
            }
        };
        0.2126 * linear(self.0) + 0.7152 * linear(self.1) + 0.0722 * linear(self.2)
    }
}

fn contrast_ratio(a: Rgb, b: Rgb) -> f64 {
    let (la, lb) = (a.relative_luminance(), b.relative_luminance());
    let (lighter, darker) = if la >= lb { (la, lb) } else { (lb, la) };
    (lighter + 0.05) / (darker + 0.05)
}

impl ColorService {
    pub fn new(use_react_default: bool) -> Self {
        Self { use_react_default }
    }

    /// Contrast ratio and WCAG AA/AAA results for a foreground/background pair.
    pub async fn check_color_contrast(&self, foreground: &str, background: &str) -> ServiceResult<Value> {
        let parse = |label: &str, value: &str| {
            Rgb::parse(value).ok_or_else(|| {
                ServiceError::invalid_input(format!(
                    "Invalid {label} color '{value}'. Use #rgb, #rrggbb or a USWDS color token"
                ))
            })
        };
        let fg = parse("foreground", foreground)?;
        let bg = parse("background", background)?;

        let ratio = (contrast_ratio(fg, bg) * 100.0).round() / 100.0;
        let recommendation = if ratio >= AAA_NORMAL {
            "Passes all WCAG text contrast levels."
        } else if ratio >= AA_NORMAL {
            "Passes AA for all text. Use a darker pairing for AAA."
        } else if ratio >= AA_LARGE {
            "Only passes AA for large text (18pt or 14pt bold). Increase the grade difference."
        } else {
            "Fails WCAG contrast. Pick tokens with a grade difference of 50 or more."
        };

        Ok(json!({
            "foreground": fg.hex(),
            "background": bg.hex(),
            "ratio": ratio,
            "wcag": {
                "aa": { "normalText": ratio >= AA_NORMAL, "largeText": ratio >= AA_LARGE },
                "aaa": { "normalText": ratio >= AAA_NORMAL, "largeText": ratio >= AAA_LARGE },
            },
            "recommendation": recommendation,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_forms() {
        assert_eq!(Rgb::parse("#fff"), Some(Rgb(255, 255, 255)));
        assert_eq!(Rgb::parse("005ea2"), Some(Rgb(0, 94, 162)));
        assert_eq!(Rgb::parse("primary"), Some(Rgb(0, 94, 162)));
        assert_eq!(Rgb::parse("#12345"), None);
        assert_eq!(Rgb::parse("not-a-color"), None);
    }

    #[tokio::test]
    async fn test_black_on_white() {
        let service = ColorService::new(false);
        let result = service.check_color_contrast("#000000", "#ffffff").await.unwrap();
        assert_eq!(result["ratio"], 21.0);
        assert_eq!(result["wcag"]["aaa"]["normalText"], true);
    }

    #[tokio::test]
    async fn test_token_pair() {
        let service = ColorService::new(true);
        let result = service.check_color_contrast("primary", "white").await.unwrap();
        let ratio = result["ratio"].as_f64().unwrap();
        assert!((6.7..6.8).contains(&ratio), "ratio {ratio}");
        assert_eq!(result["foreground"], "#005ea2");
        assert_eq!(result["wcag"]["aa"]["normalText"], true);
        assert_eq!(result["wcag"]["aaa"]["normalText"], false);
    }

    #[tokio::test]
    async fn test_low_contrast_fails() {
        let service = ColorService::new(true);
        let result = service.check_color_contrast("base-lighter", "white").await.unwrap();
        assert_eq!(result["wcag"]["aa"]["normalText"], false);
    }

    #[tokio::test]
    async fn test_invalid_color() {
        let service = ColorService::new(true);
        let err = service.check_color_contrast("blurple", "#fff").await.unwrap_err();
        assert!(err.to_string().contains("foreground"));
    }
}
