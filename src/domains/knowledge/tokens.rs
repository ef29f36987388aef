//! USWDS design token tables.

use serde::Serialize;

use super::normalize_key;

/// A single design token.
#[derive(Debug, Clone, Serialize)]
pub struct TokenDoc {
    pub token: &'static str,
    pub value: &'static str,
    pub description: &'static str,
    /// How the token is consumed from USWDS Sass.
    pub scss: &'static str,
    /// Equivalent Tailwind-USWDS utility.
    pub tailwind: &'static str,
}

/// A named group of tokens.
#[derive(Debug, Clone, Serialize)]
pub struct TokenCategory {
    pub id: &'static str,
    pub description: &'static str,
    pub tokens: &'static [TokenDoc],
}

/// Resolve a color token name (`"primary"`, `"primary-dark"`) to its hex value.
pub fn find_color_token(name: &str) -> Option<&'static str> {
    let key = normalize_key(name);
    TOKEN_CATEGORIES
        .iter()
        .find(|c| c.id == "color")
        .and_then(|c| c.tokens.iter().find(|t| t.token == key))
        .map(|t| t.value)
}

macro_rules! color {
    ($token:literal, $value:literal, $desc:literal) => {
        TokenDoc {
            token: $token,
            value: $value,
            description: $desc,
            scss: concat!("color('", $token, "')"),
            tailwind: concat!("text-", $token, " / bg-", $token),
        }
    };
}

macro_rules! spacing {
    ($token:literal, $value:literal) => {
        TokenDoc {
            token: $token,
            value: $value,
            description: "Spacing unit",
            scss: concat!("units(", $token, ")"),
            tailwind: concat!("padding-", $token, " / margin-", $token),
        }
    };
}

pub static TOKEN_CATEGORIES: &[TokenCategory] = &[
    TokenCategory {
        id: "color",
        description: "Theme color tokens. Pair tokens with a grade difference of 50+ for AA contrast.",
        tokens: &[
            color!("base-lightest", "#f0f0f0", "Lightest neutral, page backgrounds"),
            color!("base-lighter", "#dfe1e2", "Borders and dividers"),
            color!("base-light", "#a9aeb1", "Disabled states"),
            color!("base", "#71767a", "Secondary text on light backgrounds"),
            color!("base-dark", "#565c65", "Form borders"),
            color!("base-darker", "#3d4551", "Dark surfaces"),
            color!("base-darkest", "#1b1b1b", "Darkest neutral"),
            color!("ink", "#1b1b1b", "Default text color"),
            color!("primary-lighter", "#d9e8f6", "Primary tint backgrounds"),
            color!("primary-light", "#73b3e7", "Primary accents on dark backgrounds"),
            color!("primary", "#005ea2", "Primary brand color, links and buttons"),
            color!("primary-vivid", "#0050d8", "Focus and hover emphasis"),
            color!("primary-dark", "#1a4480", "Primary hover state"),
            color!("primary-darker", "#162e51", "Primary active state"),
            color!("secondary-lighter", "#f3e1e4", "Secondary tint backgrounds"),
            color!("secondary-light", "#f2938c", "Secondary accents"),
            color!("secondary", "#d83933", "Secondary brand color"),
            color!("secondary-vivid", "#e41d3d", "Secondary emphasis"),
            color!("secondary-dark", "#b50909", "Secondary hover state"),
            color!("secondary-darker", "#8b0a03", "Secondary active state"),
            color!("accent-cool", "#00bde3", "Cool accent"),
            color!("accent-warm", "#fa9441", "Warm accent"),
            color!("info", "#00bde3", "Informational state"),
            color!("error", "#d54309", "Error state"),
            color!("warning", "#ffbe2e", "Warning state"),
            color!("success", "#00a91c", "Success state"),
            color!("white", "#ffffff", "White"),
            color!("black", "#000000", "Black"),
        ],
    },
    TokenCategory {
        id: "spacing",
        description: "Spacing units based on an 8px grid.",
        tokens: &[
            spacing!("05", "4px"),
            spacing!("1", "8px"),
            spacing!("105", "12px"),
            spacing!("2", "16px"),
            spacing!("205", "20px"),
            spacing!("3", "24px"),
            spacing!("4", "32px"),
            spacing!("5", "40px"),
            spacing!("6", "48px"),
            spacing!("7", "56px"),
            spacing!("8", "64px"),
            spacing!("9", "72px"),
            spacing!("10", "80px"),
            spacing!("15", "120px"),
        ],
    },
    TokenCategory {
        id: "font-size",
        description: "Theme font size tokens for the sans family.",
        tokens: &[
            TokenDoc { token: "3xs", value: "13px", description: "Legal text", scss: "font-size('sans', '3xs')", tailwind: "font-sans-3xs" },
            TokenDoc { token: "2xs", value: "14px", description: "Fine print", scss: "font-size('sans', '2xs')", tailwind: "font-sans-2xs" },
            TokenDoc { token: "xs", value: "15px", description: "Small labels", scss: "font-size('sans', 'xs')", tailwind: "font-sans-xs" },
            TokenDoc { token: "sm", value: "16px", description: "Form text", scss: "font-size('sans', 'sm')", tailwind: "font-sans-sm" },
            TokenDoc { token: "md", value: "17px", description: "Body text", scss: "font-size('sans', 'md')", tailwind: "font-sans-md" },
            TokenDoc { token: "lg", value: "22px", description: "Lead text, small headings", scss: "font-size('sans', 'lg')", tailwind: "font-sans-lg" },
            TokenDoc { token: "xl", value: "32px", description: "Headings", scss: "font-size('sans', 'xl')", tailwind: "font-sans-xl" },
            TokenDoc { token: "2xl", value: "40px", description: "Page headings", scss: "font-size('sans', '2xl')", tailwind: "font-sans-2xl" },
            TokenDoc { token: "3xl", value: "48px", description: "Display headings", scss: "font-size('sans', '3xl')", tailwind: "font-sans-3xl" },
        ],
    },
    TokenCategory {
        id: "font-family",
        description: "Typeface tokens.",
        tokens: &[
            TokenDoc { token: "sans", value: "Source Sans Pro Web, Helvetica Neue, Helvetica, Roboto, Arial, sans-serif", description: "Default UI typeface", scss: "family('sans')", tailwind: "font-family-sans" },
            TokenDoc { token: "serif", value: "Merriweather Web, Georgia, Cambria, Times New Roman, Times, serif", description: "Long-form reading", scss: "family('serif')", tailwind: "font-family-serif" },
            TokenDoc { token: "mono", value: "Roboto Mono Web, Bitstream Vera Sans Mono, Consolas, Courier, monospace", description: "Code samples", scss: "family('mono')", tailwind: "font-family-mono" },
            TokenDoc { token: "heading", value: "Merriweather Web, Georgia, Cambria, Times New Roman, Times, serif", description: "Headings role", scss: "family('heading')", tailwind: "font-family-heading" },
            TokenDoc { token: "body", value: "Source Sans Pro Web, Helvetica Neue, Helvetica, Roboto, Arial, sans-serif", description: "Body role", scss: "family('body')", tailwind: "font-family-body" },
        ],
    },
    TokenCategory {
        id: "breakpoints",
        description: "Responsive breakpoints, mobile first.",
        tokens: &[
            TokenDoc { token: "mobile", value: "320px", description: "Small phones", scss: "@include at-media('mobile')", tailwind: "mobile:" },
            TokenDoc { token: "mobile-lg", value: "480px", description: "Large phones", scss: "@include at-media('mobile-lg')", tailwind: "mobile-lg:" },
            TokenDoc { token: "tablet", value: "640px", description: "Tablets", scss: "@include at-media('tablet')", tailwind: "tablet:" },
            TokenDoc { token: "tablet-lg", value: "880px", description: "Large tablets", scss: "@include at-media('tablet-lg')", tailwind: "tablet-lg:" },
            TokenDoc { token: "desktop", value: "1024px", description: "Desktop", scss: "@include at-media('desktop')", tailwind: "desktop:" },
            TokenDoc { token: "desktop-lg", value: "1200px", description: "Large desktop", scss: "@include at-media('desktop-lg')", tailwind: "desktop-lg:" },
            TokenDoc { token: "widescreen", value: "1400px", description: "Widescreen", scss: "@include at-media('widescreen')", tailwind: "widescreen:" },
        ],
    },
    TokenCategory {
        id: "shadow",
        description: "Box shadow depth tokens.",
        tokens: &[
            TokenDoc { token: "1", value: "0 1px 4px 0 rgba(0, 0, 0, 0.1)", description: "Subtle", scss: "@include u-shadow(1)", tailwind: "shadow-1" },
            TokenDoc { token: "2", value: "0 4px 8px 0 rgba(0, 0, 0, 0.1)", description: "Cards", scss: "@include u-shadow(2)", tailwind: "shadow-2" },
            TokenDoc { token: "3", value: "0 8px 16px 0 rgba(0, 0, 0, 0.1)", description: "Dropdowns", scss: "@include u-shadow(3)", tailwind: "shadow-3" },
            TokenDoc { token: "4", value: "0 12px 24px 0 rgba(0, 0, 0, 0.1)", description: "Popovers", scss: "@include u-shadow(4)", tailwind: "shadow-4" },
            TokenDoc { token: "5", value: "0 16px 32px 0 rgba(0, 0, 0, 0.1)", description: "Modals", scss: "@include u-shadow(5)", tailwind: "shadow-5" },
        ],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_color_token() {
        assert_eq!(find_color_token("primary"), Some("#005ea2"));
        assert_eq!(find_color_token("Primary Dark"), Some("#1a4480"));
        assert_eq!(find_color_token("chartreuse"), None);
    }

    #[test]
    fn test_color_macro_usage_strings() {
        let color = TOKEN_CATEGORIES.iter().find(|c| c.id == "color").unwrap();
        let primary = color.tokens.iter().find(|t| t.token == "primary").unwrap();
        assert_eq!(primary.scss, "color('primary')");
        assert_eq!(primary.tailwind, "text-primary / bg-primary");
    }
}
