//! Domain services over the knowledge store.
//!
//! Each service owns one slice of the USWDS reference data and exposes async
//! query operations. Services hold nothing but their default framework flag,
//! so a [`ServiceBag`] can be shared behind an `Arc` without locking.

pub mod codegen;
pub mod color;
pub mod comparison;
pub mod component;
pub mod error;
pub mod framework;
pub mod icons;
pub mod layout;
pub mod suggestion;
pub mod tailwind;
pub mod tokens;
pub mod validation;

pub use codegen::CodeGenerationService;
pub use color::ColorService;
pub use comparison::ComparisonService;
pub use component::ComponentService;
pub use error::ServiceError;
pub use framework::{FrameworkAware, FrameworkMode};
pub use icons::IconService;
pub use layout::LayoutService;
pub use suggestion::SuggestionService;
pub use tailwind::TailwindUswdsService;
pub use tokens::TokenService;
pub use validation::ValidationService;

/// Result type for domain service operations.
pub type ServiceResult<T> = Result<T, ServiceError>;

/// One instance of every domain service, built with the same default mode.
#[derive(Debug, Clone)]
pub struct ServiceBag {
    pub components: ComponentService,
    pub tokens: TokenService,
    pub validation: ValidationService,
    pub color: ColorService,
    pub icons: IconService,
    pub layout: LayoutService,
    pub suggestion: SuggestionService,
    pub comparison: ComparisonService,
    pub codegen: CodeGenerationService,
    pub tailwind: TailwindUswdsService,
}

impl ServiceBag {
    pub fn new(use_react_default: bool) -> Self {
        Self {
            components: ComponentService::new(use_react_default),
            tokens: TokenService::new(use_react_default),
            validation: ValidationService::new(use_react_default),
            color: ColorService::new(use_react_default),
            icons: IconService::new(use_react_default),
            layout: LayoutService::new(use_react_default),
            suggestion: SuggestionService::new(use_react_default),
            comparison: ComparisonService::new(use_react_default),
            codegen: CodeGenerationService::new(use_react_default),
            tailwind: TailwindUswdsService::new(use_react_default),
        }
    }

    /// Default mode shared by every service in the bag.
    pub fn default_mode(&self) -> FrameworkMode {
        self.components.default_mode()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bag_default_mode() {
        assert_eq!(ServiceBag::new(true).default_mode(), FrameworkMode::React);
        assert_eq!(ServiceBag::new(false).default_mode(), FrameworkMode::Vanilla);
    }
}
