//! Tailwind-USWDS integration documentation.

use serde::Serialize;

/// A documentation section.
#[derive(Debug, Clone, Serialize)]
pub struct TailwindSection {
    pub id: &'static str,
    pub title: &'static str,
    pub content: &'static str,
}

/// Tailwind-USWDS documentation for one component.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TailwindComponentDoc {
    pub id: &'static str,
    pub name: &'static str,
    pub classes: &'static [&'static str],
    pub requires_javascript: bool,
    pub example: &'static str,
    pub notes: &'static str,
}

pub const GETTING_STARTED: &str = "getting-started";
pub const JAVASCRIPT: &str = "javascript";
pub const ICONS: &str = "icons";
pub const TYPOGRAPHY: &str = "typography";

pub static TAILWIND_SECTIONS: &[TailwindSection] = &[
    TailwindSection {
        id: GETTING_STARTED,
        title: "Getting started with Tailwind-USWDS",
        content: r##"# Getting started with Tailwind-USWDS

Tailwind-USWDS maps USWDS design tokens onto Tailwind CSS utilities so that
utility classes stay within the federal design system.

## Install

```bash
npm install --save-dev tailwindcss @uswds/uswds tailwind-uswds
```

## Configure

```js
// tailwind.config.js
module.exports = {
  content: ['./src/**/*.{html,js,jsx,ts,tsx}'],
  presets: [require('tailwind-uswds')],
  corePlugins: { preflight: false },
};
```

Disable Tailwind preflight: USWDS ships its own normalize layer.

## Include USWDS styles

```css
@import '@uswds/uswds/css/uswds.min.css';
@tailwind components;
@tailwind utilities;
```

## Next steps

- Use USWDS component classes (`usa-button`, `usa-alert`) for structure.
- Use token-named utilities (`bg-primary`, `padding-2`, `font-sans-md`) for adjustments.
- Load `uswds.min.js` for interactive components."##,
    },
    TailwindSection {
        id: JAVASCRIPT,
        title: "JavaScript for interactive components",
        content: r##"USWDS interactive components (accordion, banner, combo box, date picker,
modal, navigation, tooltip) need the USWDS JavaScript bundle.

Load it at the end of the body:

<script src="/assets/js/uswds.min.js"></script>

Load the init script in the head to avoid a flash of unstyled content:

<script src="/assets/js/uswds-init.min.js"></script>

In single-page applications, import behaviors and call `on` after render:

import accordion from '@uswds/uswds/js/usa-accordion';
accordion.on(document.getElementById('root'));

Call `off` before unmounting to remove listeners. Tailwind utilities do not
change component behavior; keep the usa- classes the scripts look for."##,
    },
    TailwindSection {
        id: ICONS,
        title: "Icons",
        content: r##"USWDS icons ship as an SVG sprite. Reference them with `use`:

<svg class="usa-icon" aria-hidden="true" focusable="false" role="img">
  <use href="/assets/img/sprite.svg#search"></use>
</svg>

Size icons with `usa-icon--size-3` through `usa-icon--size-9`, or with
Tailwind-USWDS `width-3 height-3` utilities. Color follows `currentColor`,
so `text-primary` on the parent colors the icon.

Decorative icons need aria-hidden="true"; meaningful icons need a title
or an accessible label on the control."##,
    },
    TailwindSection {
        id: TYPOGRAPHY,
        title: "Typography",
        content: r##"Tailwind-USWDS exposes USWDS type tokens as utilities.

- Families: `font-family-sans`, `font-family-serif`, `font-family-mono`
- Sizes: `font-sans-3xs` through `font-sans-3xl`, `font-heading-xs` through `font-heading-3xl`
- Weights: `text-light`, `text-normal`, `text-semibold`, `text-bold`
- Line height: `line-height-sans-1` through `line-height-sans-6`
- Measure (line length): `measure-1` through `measure-6`

Wrap long-form content in `usa-prose` for default heading and paragraph rhythm."##,
    },
];

pub static TAILWIND_COMPONENTS: &[TailwindComponentDoc] = &[
    TailwindComponentDoc {
        id: "button",
        name: "Button",
        classes: &["usa-button", "bg-primary", "hover:bg-primary-dark", "radius-md", "padding-x-3"],
        requires_javascript: false,
        example: r##"<button type="button" class="usa-button bg-primary hover:bg-primary-dark radius-md">Continue</button>"##,
        notes: "Keep usa-button for focus and disabled styles; adjust color with token utilities.",
    },
    TailwindComponentDoc {
        id: "alert",
        name: "Alert",
        classes: &["usa-alert", "usa-alert--info", "bg-primary-lighter", "border-left-1"],
        requires_javascript: false,
        example: r##"<div class="usa-alert usa-alert--info bg-primary-lighter"><div class="usa-alert__body"><p class="usa-alert__text">Heads up.</p></div></div>"##,
        notes: "Use the state modifier classes so icons stay consistent.",
    },
    TailwindComponentDoc {
        id: "card",
        name: "Card",
        classes: &["usa-card__container", "shadow-2", "radius-lg", "border-1px"],
        requires_javascript: false,
        example: r##"<div class="usa-card__container shadow-2 radius-lg"><div class="usa-card__body padding-2">Content</div></div>"##,
        notes: "Cards in a grid row should share a height; use flex utilities on the group.",
    },
    TailwindComponentDoc {
        id: "accordion",
        name: "Accordion",
        classes: &["usa-accordion", "usa-accordion__button", "usa-accordion__content"],
        requires_javascript: true,
        example: r##"<div class="usa-accordion"><h4 class="usa-accordion__heading"><button class="usa-accordion__button" aria-expanded="false" aria-controls="p1">Title</button></h4><div id="p1" class="usa-accordion__content" hidden>Body</div></div>"##,
        notes: "Requires uswds.min.js; the script toggles aria-expanded and hidden.",
    },
    TailwindComponentDoc {
        id: "modal",
        name: "Modal",
        classes: &["usa-modal", "usa-modal__content", "shadow-5", "radius-lg"],
        requires_javascript: true,
        example: r##"<a href="#m1" class="usa-button" aria-controls="m1" data-open-modal>Open</a><div class="usa-modal shadow-5" id="m1" aria-labelledby="m1-heading"><div class="usa-modal__content"><h2 id="m1-heading">Title</h2></div></div>"##,
        notes: "Requires uswds.min.js for focus trapping.",
    },
    TailwindComponentDoc {
        id: "text-input",
        name: "Text Input",
        classes: &["usa-input", "border-base-dark", "radius-md"],
        requires_javascript: false,
        example: r##"<label class="usa-label" for="n">Name</label><input class="usa-input border-base-dark radius-md" id="n" name="n" />"##,
        notes: "Never drop the label; utility styling does not replace accessible names.",
    },
    TailwindComponentDoc {
        id: "header",
        name: "Header",
        classes: &["usa-header", "usa-nav", "bg-white", "border-bottom-1px"],
        requires_javascript: true,
        example: r##"<header class="usa-header usa-header--basic bg-white"><div class="usa-nav-container"><button class="usa-menu-btn">Menu</button><nav class="usa-nav"></nav></div></header>"##,
        notes: "The mobile menu requires uswds.min.js.",
    },
];

/// Tailwind color utility groups.
pub static TAILWIND_COLOR_GROUPS: &[(&str, &[&str])] = &[
    ("theme", &["primary", "primary-dark", "primary-darker", "primary-light", "primary-lighter", "secondary", "secondary-dark", "accent-cool", "accent-warm"]),
    ("state", &["info", "error", "warning", "success"]),
    ("base", &["base-lightest", "base-lighter", "base-light", "base", "base-dark", "base-darker", "base-darkest", "ink"]),
];

/// Find a documentation section by id.
pub fn section(id: &str) -> Option<&'static TailwindSection> {
    TAILWIND_SECTIONS.iter().find(|s| s.id == id)
}
