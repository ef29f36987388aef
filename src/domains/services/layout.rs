//! Layout suggestion service.

use serde_json::{Value, json};
use tracing::debug;

use super::{FrameworkAware, FrameworkMode, ServiceError, ServiceResult};
use crate::domains::knowledge::layouts::FALLBACK_LAYOUT;
use crate::domains::knowledge::{LAYOUTS, LayoutPattern};

/// Matches a free-text page description to a layout pattern.
///
/// Mode labels here are `react`, `html` and `tailwind`, unlike the
/// `*-uswds` labels the other services use.
#[derive(Debug, Clone)]
pub struct LayoutService {
    use_react_default: bool,
}

impl FrameworkAware for LayoutService {
    fn use_react_default(&self) -> bool {
        self.use_react_default
    }
}

fn mode_label(mode: FrameworkMode) -> &'static str {
    match mode {
        FrameworkMode::React => "react",
        FrameworkMode::Vanilla => "html",
        FrameworkMode::Tailwind => "tailwind",
    }
}

fn score(layout: &LayoutPattern, description: &str) -> usize {
    layout
        .keywords
        .iter()
        .filter(|keyword| description.contains(*keyword))
        .count()
}

impl LayoutService {
    pub fn new(use_react_default: bool) -> Self {
        Self { use_react_default }
    }

    /// Best layout for a description, plus the runners-up that also matched.
    pub async fn suggest_layout(
        &self,
        description: &str,
        framework: Option<FrameworkMode>,
    ) -> ServiceResult<Value> {
        let mode = self.resolve_mode(framework);
        let needle = description.trim().to_lowercase();
        if needle.is_empty() {
            return Err(ServiceError::invalid_input("Layout description must not be empty"));
        }

        let mut ranked: Vec<(usize, &LayoutPattern)> = LAYOUTS
            .iter()
            .map(|layout| (score(layout, &needle), layout))
            .filter(|(score, _)| *score > 0)
            .collect();
        // Stable sort keeps table order among ties.
        ranked.sort_by(|a, b| b.0.cmp(&a.0));

        let matched = !ranked.is_empty();
        let best = match ranked.first() {
            Some((_, layout)) => *layout,
            None => LAYOUTS
                .iter()
                .find(|l| l.id == FALLBACK_LAYOUT)
                .ok_or_else(|| ServiceError::not_found("Layout", FALLBACK_LAYOUT, LAYOUTS.iter().map(|l| l.id)))?,
        };
        debug!(layout = best.id, matched, "Layout selected");

        let code = match mode {
            FrameworkMode::React => best.react_code,
            FrameworkMode::Vanilla => best.html_code,
            FrameworkMode::Tailwind => best.tailwind_code,
        };
        let alternatives: Vec<Value> = ranked
            .iter()
            .skip(1)
            .map(|(_, l)| json!({ "id": l.id, "name": l.name, "description": l.description }))
            .collect();

        Ok(json!({
            "mode": mode_label(mode),
            "layout": best,
            "matched": matched,
            "code": code,
            "alternatives": alternatives,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_form_description() {
        let service = LayoutService::new(true);
        let result = service
            .suggest_layout("A benefits application form with several steps", None)
            .await
            .unwrap();
        assert_eq!(result["mode"], "react");
        assert_eq!(result["layout"]["id"], "form-page");
        assert_eq!(result["matched"], true);
    }

    #[tokio::test]
    async fn test_vanilla_label_is_html() {
        let service = LayoutService::new(true);
        let result = service
            .suggest_layout("admin dashboard", Some(FrameworkMode::Vanilla))
            .await
            .unwrap();
        assert_eq!(result["mode"], "html");
        assert!(result["code"].as_str().unwrap().contains("usa-"));
    }

    #[tokio::test]
    async fn test_fallback_when_nothing_matches() {
        let service = LayoutService::new(false);
        let result = service
            .suggest_layout("zzz", Some(FrameworkMode::Tailwind))
            .await
            .unwrap();
        assert_eq!(result["mode"], "tailwind");
        assert_eq!(result["layout"]["id"], FALLBACK_LAYOUT);
        assert_eq!(result["matched"], false);
    }

    #[tokio::test]
    async fn test_empty_description() {
        let service = LayoutService::new(false);
        assert!(service.suggest_layout("  ", None).await.is_err());
    }
}
