//! Knowledge store - static USWDS reference tables.
//!
//! Every table in this module is immutable `'static` data. Domain services
//! read from it and never mutate it, which is what makes the service bag safe
//! to share across requests without locking.
//!
//! - `components` - component documentation and examples
//! - `tokens` - design tokens grouped by category
//! - `icons` - the USWDS icon set with search keywords
//! - `layouts` - page layout patterns
//! - `tailwind` - Tailwind-USWDS integration documentation

pub mod components;
pub mod icons;
pub mod layouts;
pub mod tailwind;
pub mod tokens;

pub use components::{COMPONENTS, ComponentDoc, find_component};
pub use icons::{ICONS, IconDoc};
pub use layouts::{LAYOUTS, LayoutPattern};
pub use tailwind::{TAILWIND_COMPONENTS, TAILWIND_SECTIONS, TailwindComponentDoc, TailwindSection};
pub use tokens::{TOKEN_CATEGORIES, TokenCategory, TokenDoc, find_color_token};

/// Normalize a user-supplied identifier for table lookups.
///
/// Lowercases, trims and folds spaces and underscores into dashes, so
/// `"Date Picker"`, `"date_picker"` and `"date-picker"` all match.
pub fn normalize_key(raw: &str) -> String {
    raw.trim()
        .to_lowercase()
        .chars()
        .map(|c| if c == ' ' || c == '_' { '-' } else { c })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_key() {
        assert_eq!(normalize_key("Date Picker"), "date-picker");
        assert_eq!(normalize_key(" text_input "), "text-input");
        assert_eq!(normalize_key("button"), "button");
    }
}
