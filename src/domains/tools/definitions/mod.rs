//! Tool definitions module.
//!
//! One file per domain service. Each tool is a unit struct carrying its
//! name, description, params struct and an `execute` that calls the bound
//! service method and returns its payload untouched.

pub mod codegen;
pub mod color;
pub mod comparison;
pub mod components;
pub mod icons;
pub mod layout;
pub mod suggestion;
pub mod tailwind;
pub mod tokens;
pub mod validation;

pub use codegen::{GenerateComponentCodeParams, GenerateComponentCodeTool};
pub use color::{CheckColorContrastParams, CheckColorContrastTool};
pub use comparison::{CompareComponentsParams, CompareComponentsTool};
pub use components::{
    GetComponentInfoParams, GetComponentInfoTool, ListComponentsParams, ListComponentsTool,
};
pub use icons::{SearchIconsParams, SearchIconsTool};
pub use layout::{SuggestLayoutParams, SuggestLayoutTool};
pub use suggestion::{SuggestComponentsParams, SuggestComponentsTool};
pub use tailwind::{
    NoParams, SearchTailwindDocsParams, SearchTailwindDocsTool, TailwindColorsParams,
    TailwindColorsTool, TailwindComponentParams, TailwindComponentTool,
    TailwindGettingStartedTool, TailwindIconsTool, TailwindJavascriptTool,
    TailwindTypographyTool,
};
pub use tokens::{GetDesignTokensParams, GetDesignTokensTool};
pub use validation::{ValidateUswdsCodeParams, ValidateUswdsCodeTool};
