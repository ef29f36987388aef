//! USWDS icon set.

use serde::Serialize;

/// One icon from the USWDS sprite.
#[derive(Debug, Clone, Serialize)]
pub struct IconDoc {
    pub name: &'static str,
    pub category: &'static str,
    pub keywords: &'static [&'static str],
}

impl IconDoc {
    /// Case-insensitive match against the name and keywords.
    pub fn matches(&self, needle: &str) -> bool {
        let needle = needle.to_lowercase();
        self.name.contains(&needle) || self.keywords.iter().any(|k| k.contains(&needle))
    }

    /// React component name, e.g. `arrow_back` -> `ArrowBack`.
    pub fn react_name(&self) -> String {
        self.name
            .split('_')
            .map(|part| {
                let mut chars = part.chars();
                match chars.next() {
                    Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                    None => String::new(),
                }
            })
            .collect()
    }
}

macro_rules! icon {
    ($name:literal, $category:literal, [$($kw:literal),* $(,)?]) => {
        IconDoc { name: $name, category: $category, keywords: &[$($kw),*] }
    };
}

pub static ICONS: &[IconDoc] = &[
    icon!("arrow_back", "navigation", ["left", "previous", "return"]),
    icon!("arrow_forward", "navigation", ["right", "next", "continue"]),
    icon!("arrow_upward", "navigation", ["up", "top"]),
    icon!("arrow_downward", "navigation", ["down", "bottom"]),
    icon!("navigate_before", "navigation", ["chevron", "previous", "back"]),
    icon!("navigate_next", "navigation", ["chevron", "next", "forward"]),
    icon!("expand_more", "navigation", ["chevron", "open", "dropdown"]),
    icon!("expand_less", "navigation", ["chevron", "close", "collapse"]),
    icon!("menu", "navigation", ["hamburger", "nav"]),
    icon!("home", "navigation", ["house", "start"]),
    icon!("launch", "navigation", ["external", "new window", "link"]),
    icon!("search", "actions", ["find", "magnifying glass", "lookup"]),
    icon!("close", "actions", ["dismiss", "x", "cancel"]),
    icon!("add", "actions", ["plus", "new", "create"]),
    icon!("remove", "actions", ["minus", "subtract", "delete"]),
    icon!("delete", "actions", ["trash", "remove", "bin"]),
    icon!("edit", "actions", ["pencil", "modify", "change"]),
    icon!("content_copy", "actions", ["copy", "duplicate", "clipboard"]),
    icon!("file_download", "actions", ["download", "save"]),
    icon!("file_upload", "actions", ["upload", "attach"]),
    icon!("print", "actions", ["printer"]),
    icon!("share", "actions", ["send", "social"]),
    icon!("filter_list", "actions", ["filter", "sort"]),
    icon!("check", "status", ["done", "complete", "confirm"]),
    icon!("check_circle", "status", ["success", "done", "verified"]),
    icon!("error", "status", ["alert", "problem", "invalid"]),
    icon!("warning", "status", ["caution", "alert", "attention"]),
    icon!("info", "status", ["information", "help", "about"]),
    icon!("help", "status", ["question", "support", "faq"]),
    icon!("lock", "status", ["secure", "locked", "private", "https"]),
    icon!("lock_open", "status", ["unlocked", "public"]),
    icon!("visibility", "status", ["show", "eye", "view"]),
    icon!("visibility_off", "status", ["hide", "eye", "hidden"]),
    icon!("mail", "communication", ["email", "envelope", "message"]),
    icon!("phone", "communication", ["call", "telephone", "contact"]),
    icon!("chat", "communication", ["message", "conversation", "bubble"]),
    icon!("notifications", "communication", ["bell", "alert"]),
    icon!("person", "communication", ["user", "account", "profile"]),
    icon!("people", "communication", ["users", "group", "team"]),
    icon!("file_present", "files", ["document", "attachment"]),
    icon!("folder", "files", ["directory"]),
    icon!("folder_open", "files", ["directory", "open"]),
    icon!("calendar_today", "files", ["date", "schedule", "event"]),
    icon!("facebook", "social", ["social media"]),
    icon!("github", "social", ["code", "repository"]),
    icon!("linkedin", "social", ["social media", "professional"]),
    icon!("youtube", "social", ["video", "social media"]),
    icon!("rss_feed", "social", ["feed", "subscribe"]),
    icon!("play_circle_filled", "media", ["video", "start"]),
    icon!("photo_camera", "media", ["camera", "image", "picture"]),
    icon!("location_on", "media", ["map", "pin", "address"]),
];

/// Sorted, de-duplicated list of icon categories.
pub fn icon_categories() -> Vec<&'static str> {
    let mut categories: Vec<&'static str> = ICONS.iter().map(|i| i.category).collect();
    categories.sort_unstable();
    categories.dedup();
    categories
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_react_name() {
        let icon = ICONS.iter().find(|i| i.name == "arrow_back").unwrap();
        assert_eq!(icon.react_name(), "ArrowBack");
        let icon = ICONS.iter().find(|i| i.name == "search").unwrap();
        assert_eq!(icon.react_name(), "Search");
    }

    #[test]
    fn test_matches_keywords() {
        let icon = ICONS.iter().find(|i| i.name == "lock").unwrap();
        assert!(icon.matches("HTTPS"));
        assert!(icon.matches("lock"));
        assert!(!icon.matches("video"));
    }
}
