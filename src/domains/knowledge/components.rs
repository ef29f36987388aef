//! USWDS component documentation table.

use serde::Serialize;

use super::normalize_key;

/// Documentation record for one USWDS component.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentDoc {
    /// Lookup key, kebab-case.
    pub id: &'static str,
    pub name: &'static str,
    pub category: &'static str,
    pub description: &'static str,
    /// Component name exported by `@trussworks/react-uswds`.
    pub react_component: &'static str,
    /// Root CSS class of the vanilla USWDS markup.
    pub css_class: &'static str,
    pub variants: &'static [&'static str],
    pub accessibility: &'static [&'static str],
    pub react_example: &'static str,
    pub html_example: &'static str,
    pub tailwind_example: &'static str,
    pub related: &'static [&'static str],
}

/// Look up a component by id, display name or React component name.
pub fn find_component(name: &str) -> Option<&'static ComponentDoc> {
    let key = normalize_key(name);
    COMPONENTS.iter().find(|c| {
        c.id == key || normalize_key(c.name) == key || c.react_component.eq_ignore_ascii_case(name.trim())
    })
}

/// Sorted, de-duplicated list of component categories.
pub fn component_categories() -> Vec<&'static str> {
    let mut categories: Vec<&'static str> = COMPONENTS.iter().map(|c| c.category).collect();
    categories.sort_unstable();
    categories.dedup();
    categories
}

pub static COMPONENTS: &[ComponentDoc] = &[
    ComponentDoc {
        id: "accordion",
        name: "Accordion",
        category: "content",
        description: "A list of headers that hide or reveal additional content when selected.",
        react_component: "Accordion",
        css_class: "usa-accordion",
        variants: &["default", "bordered", "multiselectable"],
        accessibility: &[
            "Each header is a button with aria-expanded reflecting the panel state",
            "Panels are linked to their buttons with aria-controls",
            "Do not nest accordions",
        ],
        react_example: r##"import { Accordion } from '@trussworks/react-uswds';

const items = [
  { id: 'a1', title: 'First section', content: <p>First panel content</p>, expanded: true, headingLevel: 'h4' },
  { id: 'a2', title: 'Second section', content: <p>Second panel content</p>, expanded: false, headingLevel: 'h4' },
];

<Accordion bordered items={items} />"##,
        html_example: r##"<div class="usa-accordion usa-accordion--bordered">
  <h4 class="usa-accordion__heading">
    <button type="button" class="usa-accordion__button" aria-expanded="true" aria-controls="a1">First section</button>
  </h4>
  <div id="a1" class="usa-accordion__content usa-prose"><p>First panel content</p></div>
</div>"##,
        tailwind_example: r##"<div class="usa-accordion border-1px border-base-lighter">
  <h4 class="usa-accordion__heading">
    <button type="button" class="usa-accordion__button bg-base-lightest hover:bg-base-lighter" aria-expanded="true" aria-controls="a1">First section</button>
  </h4>
  <div id="a1" class="usa-accordion__content padding-2"><p>First panel content</p></div>
</div>"##,
        related: &["card", "side-navigation"],
    },
    ComponentDoc {
        id: "alert",
        name: "Alert",
        category: "feedback",
        description: "Keeps users informed of important and sometimes time-sensitive changes.",
        react_component: "Alert",
        css_class: "usa-alert",
        variants: &["info", "warning", "error", "success", "emergency", "slim", "no-icon"],
        accessibility: &[
            "Use role=\"alert\" only for urgent, time-sensitive messages",
            "Alert text must make sense without the icon",
            "Do not rely on color alone to convey the alert type",
        ],
        react_example: r##"import { Alert } from '@trussworks/react-uswds';

<Alert type="success" headingLevel="h4" heading="Success status">
  Your application has been submitted.
</Alert>"##,
        html_example: r##"<div class="usa-alert usa-alert--success">
  <div class="usa-alert__body">
    <h4 class="usa-alert__heading">Success status</h4>
    <p class="usa-alert__text">Your application has been submitted.</p>
  </div>
</div>"##,
        tailwind_example: r##"<div class="usa-alert usa-alert--success bg-green-5 border-left-1 border-green-40v">
  <div class="usa-alert__body padding-y-2">
    <h4 class="usa-alert__heading text-bold">Success status</h4>
    <p class="usa-alert__text margin-0">Your application has been submitted.</p>
  </div>
</div>"##,
        related: &["banner", "modal"],
    },
    ComponentDoc {
        id: "banner",
        name: "Banner",
        category: "site-identity",
        description: "Identifies official websites of government organizations in the United States.",
        react_component: "GovBanner",
        css_class: "usa-banner",
        variants: &["english", "spanish"],
        accessibility: &[
            "Place the banner at the very top of every page",
            "The expand control is a button with aria-expanded",
        ],
        react_example: r##"import { GovBanner } from '@trussworks/react-uswds';

<GovBanner language="english" tld=".gov" />"##,
        html_example: r##"<section class="usa-banner" aria-label="Official website of the United States government">
  <div class="usa-accordion">
    <header class="usa-banner__header">
      <div class="usa-banner__inner">
        <div class="grid-col-fill tablet:grid-col-auto" aria-hidden="true">
          <p class="usa-banner__header-text">An official website of the United States government</p>
        </div>
        <button type="button" class="usa-accordion__button usa-banner__button" aria-expanded="false" aria-controls="gov-banner-default">
          <span class="usa-banner__button-text">Here's how you know</span>
        </button>
      </div>
    </header>
  </div>
</section>"##,
        tailwind_example: r##"<section class="usa-banner bg-base-lightest font-sans-3xs" aria-label="Official website of the United States government">
  <div class="usa-banner__inner padding-x-2">
    <p class="usa-banner__header-text">An official website of the United States government</p>
  </div>
</section>"##,
        related: &["header", "footer"],
    },
    ComponentDoc {
        id: "breadcrumb",
        name: "Breadcrumb",
        category: "navigation",
        description: "Provides secondary navigation to help users understand where they are in a website.",
        react_component: "BreadcrumbBar",
        css_class: "usa-breadcrumb",
        variants: &["default", "wrapping", "rdfa"],
        accessibility: &[
            "Wrap breadcrumbs in a nav element with aria-label=\"Breadcrumbs\"",
            "Mark the current page with aria-current=\"page\"",
        ],
        react_example: r##"import { BreadcrumbBar, Breadcrumb, BreadcrumbLink } from '@trussworks/react-uswds';

<BreadcrumbBar>
  <Breadcrumb><BreadcrumbLink href="/">Home</BreadcrumbLink></Breadcrumb>
  <Breadcrumb current>Current page</Breadcrumb>
</BreadcrumbBar>"##,
        html_example: r##"<nav class="usa-breadcrumb" aria-label="Breadcrumbs">
  <ol class="usa-breadcrumb__list">
    <li class="usa-breadcrumb__list-item"><a href="/" class="usa-breadcrumb__link"><span>Home</span></a></li>
    <li class="usa-breadcrumb__list-item usa-current" aria-current="page"><span>Current page</span></li>
  </ol>
</nav>"##,
        tailwind_example: r##"<nav class="usa-breadcrumb padding-y-1" aria-label="Breadcrumbs">
  <ol class="usa-breadcrumb__list flex gap-1">
    <li class="usa-breadcrumb__list-item"><a href="/" class="usa-breadcrumb__link text-primary">Home</a></li>
    <li class="usa-breadcrumb__list-item usa-current" aria-current="page">Current page</li>
  </ol>
</nav>"##,
        related: &["side-navigation", "header"],
    },
    ComponentDoc {
        id: "button",
        name: "Button",
        category: "actions",
        description: "Draws attention to important actions with a large selectable surface.",
        react_component: "Button",
        css_class: "usa-button",
        variants: &["default", "secondary", "accent-cool", "accent-warm", "base", "outline", "inverse", "big", "unstyled"],
        accessibility: &[
            "Use a button element for actions and a link for navigation",
            "Button text must describe the action",
            "Disabled buttons should use the disabled attribute, not only styling",
        ],
        react_example: r##"import { Button } from '@trussworks/react-uswds';

<Button type="button" secondary onClick={handleClick}>
  Submit application
</Button>"##,
        html_example: r##"<button type="button" class="usa-button usa-button--secondary">Submit application</button>"##,
        tailwind_example: r##"<button type="button" class="usa-button bg-secondary hover:bg-secondary-dark text-white radius-md padding-x-3 padding-y-105">Submit application</button>"##,
        related: &["form", "modal"],
    },
    ComponentDoc {
        id: "card",
        name: "Card",
        category: "content",
        description: "Groups information related to a single concept and links to more detail.",
        react_component: "Card",
        css_class: "usa-card",
        variants: &["default", "flag", "media-first", "header-first", "inset-media", "exdent-media"],
        accessibility: &[
            "Use a heading element for the card title",
            "Avoid making the entire card a link when it contains other controls",
        ],
        react_example: r##"import { Card, CardHeader, CardBody, CardFooter, CardGroup, Button } from '@trussworks/react-uswds';

<CardGroup>
  <Card headerFirst gridLayout={{ tablet: { col: 4 } }}>
    <CardHeader><h2 className="usa-card__heading">Card title</h2></CardHeader>
    <CardBody><p>Card content goes here.</p></CardBody>
    <CardFooter><Button type="button">Learn more</Button></CardFooter>
  </Card>
</CardGroup>"##,
        html_example: r##"<ul class="usa-card-group">
  <li class="usa-card tablet:grid-col-4">
    <div class="usa-card__container">
      <div class="usa-card__header"><h2 class="usa-card__heading">Card title</h2></div>
      <div class="usa-card__body"><p>Card content goes here.</p></div>
      <div class="usa-card__footer"><a href="#" class="usa-button">Learn more</a></div>
    </div>
  </li>
</ul>"##,
        tailwind_example: r##"<div class="usa-card__container border-2px border-base-lighter radius-lg shadow-2">
  <div class="usa-card__header padding-2"><h2 class="font-heading-lg margin-0">Card title</h2></div>
  <div class="usa-card__body padding-x-2"><p>Card content goes here.</p></div>
  <div class="usa-card__footer padding-2"><a href="#" class="usa-button">Learn more</a></div>
</div>"##,
        related: &["accordion", "table"],
    },
    ComponentDoc {
        id: "checkbox",
        name: "Checkbox",
        category: "forms",
        description: "Allows users to select one or more options from a list.",
        react_component: "Checkbox",
        css_class: "usa-checkbox",
        variants: &["default", "tile"],
        accessibility: &[
            "Group related checkboxes in a fieldset with a legend",
            "Every checkbox needs an associated label",
        ],
        react_example: r##"import { Checkbox, Fieldset } from '@trussworks/react-uswds';

<Fieldset legend="Historical figures" legendStyle="srOnly">
  <Checkbox id="truth" name="historical-figures" value="sojourner-truth" label="Sojourner Truth" defaultChecked />
  <Checkbox id="douglass" name="historical-figures" value="frederick-douglass" label="Frederick Douglass" />
</Fieldset>"##,
        html_example: r##"<fieldset class="usa-fieldset">
  <legend class="usa-sr-only">Historical figures</legend>
  <div class="usa-checkbox">
    <input class="usa-checkbox__input" id="truth" type="checkbox" name="historical-figures" value="sojourner-truth" checked />
    <label class="usa-checkbox__label" for="truth">Sojourner Truth</label>
  </div>
</fieldset>"##,
        tailwind_example: r##"<div class="usa-checkbox bg-white">
  <input class="usa-checkbox__input" id="truth" type="checkbox" name="historical-figures" value="sojourner-truth" />
  <label class="usa-checkbox__label text-ink" for="truth">Sojourner Truth</label>
</div>"##,
        related: &["radio", "select"],
    },
    ComponentDoc {
        id: "date-picker",
        name: "Date Picker",
        category: "forms",
        description: "Helps users select a single date from a calendar or type it in.",
        react_component: "DatePicker",
        css_class: "usa-date-picker",
        variants: &["default", "default-date", "min-max", "range"],
        accessibility: &[
            "Always provide a hint with the expected date format",
            "The calendar is keyboard navigable; keep the text input available",
        ],
        react_example: r##"import { DatePicker, Label } from '@trussworks/react-uswds';

<Label id="appointment-date-label" htmlFor="appointment-date">Appointment date</Label>
<div className="usa-hint" id="appointment-date-hint">mm/dd/yyyy</div>
<DatePicker id="appointment-date" name="appointment-date" aria-describedby="appointment-date-hint" />"##,
        html_example: r##"<div class="usa-form-group">
  <label class="usa-label" for="appointment-date">Appointment date</label>
  <div class="usa-hint" id="appointment-date-hint">mm/dd/yyyy</div>
  <div class="usa-date-picker">
    <input class="usa-input" id="appointment-date" name="appointment-date" aria-describedby="appointment-date-hint" />
  </div>
</div>"##,
        tailwind_example: r##"<div class="usa-form-group">
  <label class="usa-label font-sans-sm" for="appointment-date">Appointment date</label>
  <div class="usa-hint text-base" id="appointment-date-hint">mm/dd/yyyy</div>
  <div class="usa-date-picker"><input class="usa-input border-base-dark" id="appointment-date" name="appointment-date" /></div>
</div>"##,
        related: &["text-input", "select"],
    },
    ComponentDoc {
        id: "footer",
        name: "Footer",
        category: "navigation",
        description: "Serves site visitors who arrive at the bottom of a page without finding what they want.",
        react_component: "Footer",
        css_class: "usa-footer",
        variants: &["big", "medium", "slim"],
        accessibility: &[
            "Use a footer landmark element",
            "Return-to-top links must be keyboard accessible",
        ],
        react_example: r##"import { Footer, FooterNav, Address } from '@trussworks/react-uswds';

<Footer
  size="slim"
  primary={<FooterNav size="slim" links={[<a className="usa-footer__primary-link" href="/about">About</a>]} />}
  secondary={<Address size="slim" items={[<a href="mailto:info@agency.gov">info@agency.gov</a>]} />}
/>"##,
        html_example: r##"<footer class="usa-footer usa-footer--slim">
  <div class="usa-footer__primary-section">
    <nav class="usa-footer__nav" aria-label="Footer navigation">
      <ul class="grid-row grid-gap"><li class="usa-footer__primary-content"><a class="usa-footer__primary-link" href="/about">About</a></li></ul>
    </nav>
  </div>
</footer>"##,
        tailwind_example: r##"<footer class="usa-footer bg-base-lightest padding-y-4">
  <nav class="usa-footer__nav grid-container" aria-label="Footer navigation">
    <a class="usa-footer__primary-link text-primary" href="/about">About</a>
  </nav>
</footer>"##,
        related: &["header", "banner"],
    },
    ComponentDoc {
        id: "header",
        name: "Header",
        category: "navigation",
        description: "Helps users identify where they are and provides quick access to primary navigation.",
        react_component: "Header",
        css_class: "usa-header",
        variants: &["basic", "extended", "mega-menu"],
        accessibility: &[
            "Include a skip link before the header",
            "Mobile menu button must expose aria-expanded",
        ],
        react_example: r##"import { Header, Title, NavMenuButton, PrimaryNav } from '@trussworks/react-uswds';

<Header basic>
  <div className="usa-nav-container">
    <div className="usa-navbar">
      <Title>Project title</Title>
      <NavMenuButton onClick={toggleMobileNav} label="Menu" />
    </div>
    <PrimaryNav items={navItems} mobileExpanded={expanded} onToggleMobileNav={toggleMobileNav} />
  </div>
</Header>"##,
        html_example: r##"<header class="usa-header usa-header--basic">
  <div class="usa-nav-container">
    <div class="usa-navbar">
      <div class="usa-logo"><em class="usa-logo__text"><a href="/" title="Project title">Project title</a></em></div>
      <button type="button" class="usa-menu-btn">Menu</button>
    </div>
    <nav aria-label="Primary navigation" class="usa-nav">
      <ul class="usa-nav__primary usa-accordion"><li class="usa-nav__primary-item"><a href="/about" class="usa-nav-link"><span>About</span></a></li></ul>
    </nav>
  </div>
</header>"##,
        tailwind_example: r##"<header class="usa-header bg-white border-bottom-1px border-base-lighter">
  <div class="usa-nav-container flex flex-justify">
    <div class="usa-logo font-heading-lg"><a href="/" class="text-ink text-no-underline">Project title</a></div>
    <nav aria-label="Primary navigation" class="usa-nav"><a href="/about" class="usa-nav-link text-primary">About</a></nav>
  </div>
</header>"##,
        related: &["banner", "footer", "search"],
    },
    ComponentDoc {
        id: "modal",
        name: "Modal",
        category: "feedback",
        description: "Focuses the user's attention exclusively on one task or piece of information.",
        react_component: "Modal",
        css_class: "usa-modal",
        variants: &["default", "large", "forced-action"],
        accessibility: &[
            "Focus moves into the modal on open and returns to the trigger on close",
            "The modal is labelled by its heading via aria-labelledby",
            "Forced-action modals must not close on overlay click or Escape",
        ],
        react_example: r##"import { Modal, ModalHeading, ModalFooter, ModalToggleButton, ButtonGroup } from '@trussworks/react-uswds';

<Modal ref={modalRef} id="example-modal" aria-labelledby="modal-heading" aria-describedby="modal-description">
  <ModalHeading id="modal-heading">Are you sure you want to continue?</ModalHeading>
  <p id="modal-description">You have unsaved changes.</p>
  <ModalFooter>
    <ButtonGroup>
      <ModalToggleButton modalRef={modalRef} closer>Continue</ModalToggleButton>
    </ButtonGroup>
  </ModalFooter>
</Modal>"##,
        html_example: r##"<div class="usa-modal" id="example-modal" aria-labelledby="modal-heading" aria-describedby="modal-description">
  <div class="usa-modal__content">
    <div class="usa-modal__main">
      <h2 class="usa-modal__heading" id="modal-heading">Are you sure you want to continue?</h2>
      <div class="usa-prose"><p id="modal-description">You have unsaved changes.</p></div>
      <div class="usa-modal__footer"><button type="button" class="usa-button" data-close-modal>Continue</button></div>
    </div>
  </div>
</div>"##,
        tailwind_example: r##"<div class="usa-modal radius-lg shadow-5" id="example-modal" aria-labelledby="modal-heading">
  <div class="usa-modal__content padding-4">
    <h2 class="usa-modal__heading font-heading-lg" id="modal-heading">Are you sure you want to continue?</h2>
    <button type="button" class="usa-button margin-top-2" data-close-modal>Continue</button>
  </div>
</div>"##,
        related: &["alert", "button"],
    },
    ComponentDoc {
        id: "pagination",
        name: "Pagination",
        category: "navigation",
        description: "Navigation between pages of related content such as search results.",
        react_component: "Pagination",
        css_class: "usa-pagination",
        variants: &["bounded", "unbounded"],
        accessibility: &[
            "Wrap in a nav element with aria-label=\"Pagination\"",
            "Mark the current page link with aria-current=\"page\"",
        ],
        react_example: r##"import { Pagination } from '@trussworks/react-uswds';

<Pagination pathname="/results" totalPages={10} currentPage={3} />"##,
        html_example: r##"<nav aria-label="Pagination" class="usa-pagination">
  <ul class="usa-pagination__list">
    <li class="usa-pagination__item usa-pagination__page-no"><a href="/results?page=2" class="usa-pagination__button" aria-label="Page 2">2</a></li>
    <li class="usa-pagination__item usa-pagination__page-no"><a href="/results?page=3" class="usa-pagination__button usa-current" aria-label="Page 3" aria-current="page">3</a></li>
  </ul>
</nav>"##,
        tailwind_example: r##"<nav aria-label="Pagination" class="usa-pagination flex flex-justify-center">
  <a href="/results?page=3" class="usa-pagination__button bg-primary text-white radius-md" aria-current="page">3</a>
</nav>"##,
        related: &["table", "search"],
    },
    ComponentDoc {
        id: "radio",
        name: "Radio Buttons",
        category: "forms",
        description: "Allows users to select exactly one choice from a group.",
        react_component: "Radio",
        css_class: "usa-radio",
        variants: &["default", "tile"],
        accessibility: &[
            "Group radios in a fieldset with a legend",
            "Use radio buttons for up to about six options; use a select beyond that",
        ],
        react_example: r##"import { Radio, Fieldset } from '@trussworks/react-uswds';

<Fieldset legend="Select one historical figure">
  <Radio id="radio-truth" name="historical-figure" value="sojourner-truth" label="Sojourner Truth" defaultChecked />
  <Radio id="radio-douglass" name="historical-figure" value="frederick-douglass" label="Frederick Douglass" />
</Fieldset>"##,
        html_example: r##"<fieldset class="usa-fieldset">
  <legend class="usa-legend">Select one historical figure</legend>
  <div class="usa-radio">
    <input class="usa-radio__input" id="radio-truth" type="radio" name="historical-figure" value="sojourner-truth" checked />
    <label class="usa-radio__label" for="radio-truth">Sojourner Truth</label>
  </div>
</fieldset>"##,
        tailwind_example: r##"<div class="usa-radio bg-white">
  <input class="usa-radio__input" id="radio-truth" type="radio" name="historical-figure" value="sojourner-truth" />
  <label class="usa-radio__label text-ink" for="radio-truth">Sojourner Truth</label>
</div>"##,
        related: &["checkbox", "select"],
    },
    ComponentDoc {
        id: "search",
        name: "Search",
        category: "forms",
        description: "A text field and button that let users search a site.",
        react_component: "Search",
        css_class: "usa-search",
        variants: &["default", "big", "small"],
        accessibility: &[
            "Use role=\"search\" on the form",
            "Provide a visually hidden label for the search input",
        ],
        react_example: r##"import { Search } from '@trussworks/react-uswds';

<Search size="small" onSubmit={handleSearch} />"##,
        html_example: r##"<section aria-label="Search component">
  <form class="usa-search usa-search--small" role="search">
    <label class="usa-sr-only" for="search-field">Search</label>
    <input class="usa-input" id="search-field" type="search" name="search" />
    <button class="usa-button" type="submit"><span class="usa-sr-only">Search</span></button>
  </form>
</section>"##,
        tailwind_example: r##"<form class="usa-search flex" role="search">
  <label class="usa-sr-only" for="search-field">Search</label>
  <input class="usa-input border-base-dark radius-left-md" id="search-field" type="search" name="search" />
  <button class="usa-button bg-primary radius-right-md" type="submit">Search</button>
</form>"##,
        related: &["header", "text-input"],
    },
    ComponentDoc {
        id: "select",
        name: "Select",
        category: "forms",
        description: "Allows users to select one option from a temporary modal menu.",
        react_component: "Select",
        css_class: "usa-select",
        variants: &["default"],
        accessibility: &[
            "Every select needs a visible label",
            "Avoid auto-submitting on change",
        ],
        react_example: r##"import { Label, Select } from '@trussworks/react-uswds';

<Label htmlFor="options">Dropdown label</Label>
<Select id="options" name="options">
  <option>- Select -</option>
  <option value="value1">Option A</option>
  <option value="value2">Option B</option>
</Select>"##,
        html_example: r##"<label class="usa-label" for="options">Dropdown label</label>
<select class="usa-select" name="options" id="options">
  <option value>- Select -</option>
  <option value="value1">Option A</option>
  <option value="value2">Option B</option>
</select>"##,
        tailwind_example: r##"<label class="usa-label font-sans-sm" for="options">Dropdown label</label>
<select class="usa-select border-base-dark radius-md" name="options" id="options">
  <option value="value1">Option A</option>
</select>"##,
        related: &["radio", "checkbox"],
    },
    ComponentDoc {
        id: "step-indicator",
        name: "Step Indicator",
        category: "navigation",
        description: "Updates users on their progress through a multi-step process.",
        react_component: "StepIndicator",
        css_class: "usa-step-indicator",
        variants: &["default", "no-labels", "counters", "small-counters", "centered"],
        accessibility: &[
            "Announce the current step in the heading",
            "Mark completed and current steps with visually hidden text",
        ],
        react_example: r##"import { StepIndicator, StepIndicatorStep } from '@trussworks/react-uswds';

<StepIndicator headingLevel="h4">
  <StepIndicatorStep label="Personal information" status="complete" />
  <StepIndicatorStep label="Household status" status="current" />
  <StepIndicatorStep label="Review and submit" />
</StepIndicator>"##,
        html_example: r##"<div class="usa-step-indicator" aria-label="progress">
  <ol class="usa-step-indicator__segments">
    <li class="usa-step-indicator__segment usa-step-indicator__segment--complete"><span class="usa-step-indicator__segment-label">Personal information</span></li>
    <li class="usa-step-indicator__segment usa-step-indicator__segment--current" aria-current="true"><span class="usa-step-indicator__segment-label">Household status</span></li>
  </ol>
</div>"##,
        tailwind_example: r##"<ol class="usa-step-indicator__segments flex">
  <li class="usa-step-indicator__segment bg-primary-dark text-white padding-1">Personal information</li>
  <li class="usa-step-indicator__segment bg-primary text-white padding-1" aria-current="true">Household status</li>
</ol>"##,
        related: &["form", "button"],
    },
    ComponentDoc {
        id: "table",
        name: "Table",
        category: "content",
        description: "Shows tabular data in columns and rows.",
        react_component: "Table",
        css_class: "usa-table",
        variants: &["default", "borderless", "striped", "compact", "stacked", "sortable", "scrollable"],
        accessibility: &[
            "Use th elements with scope for headers",
            "Provide a caption describing the table",
        ],
        react_example: r##"import { Table } from '@trussworks/react-uswds';

<Table bordered caption="Document history" fullWidth>
  <thead><tr><th scope="col">Document</th><th scope="col">Year</th></tr></thead>
  <tbody><tr><th scope="row">Declaration of Independence</th><td>1776</td></tr></tbody>
</Table>"##,
        html_example: r##"<table class="usa-table">
  <caption>Document history</caption>
  <thead><tr><th scope="col">Document</th><th scope="col">Year</th></tr></thead>
  <tbody><tr><th scope="row">Declaration of Independence</th><td>1776</td></tr></tbody>
</table>"##,
        tailwind_example: r##"<table class="usa-table width-full border-1px border-base-light">
  <caption class="text-left font-sans-md">Document history</caption>
  <thead class="bg-base-lightest"><tr><th scope="col">Document</th><th scope="col">Year</th></tr></thead>
  <tbody><tr><th scope="row">Declaration of Independence</th><td>1776</td></tr></tbody>
</table>"##,
        related: &["pagination", "card"],
    },
    ComponentDoc {
        id: "tag",
        name: "Tag",
        category: "content",
        description: "Draws attention to new or important content with a short label.",
        react_component: "Tag",
        css_class: "usa-tag",
        variants: &["default", "big"],
        accessibility: &["Tags are not interactive; do not use them as buttons or links"],
        react_example: r##"import { Tag } from '@trussworks/react-uswds';

<Tag>New</Tag>"##,
        html_example: r##"<span class="usa-tag">New</span>"##,
        tailwind_example: r##"<span class="usa-tag bg-primary-dark text-white radius-sm padding-x-1">New</span>"##,
        related: &["card", "alert"],
    },
    ComponentDoc {
        id: "text-input",
        name: "Text Input",
        category: "forms",
        description: "Allows users to enter any combination of letters, numbers, or symbols.",
        react_component: "TextInput",
        css_class: "usa-input",
        variants: &["default", "error", "success", "disabled", "small", "medium"],
        accessibility: &[
            "Every input needs a visible label associated with for/id",
            "Error messages are linked with aria-describedby",
            "Do not use placeholder text as a label",
        ],
        react_example: r##"import { Label, TextInput } from '@trussworks/react-uswds';

<Label htmlFor="full-name">Full name</Label>
<TextInput id="full-name" name="full-name" type="text" />"##,
        html_example: r##"<label class="usa-label" for="full-name">Full name</label>
<input class="usa-input" id="full-name" name="full-name" type="text" />"##,
        tailwind_example: r##"<label class="usa-label font-sans-sm text-bold" for="full-name">Full name</label>
<input class="usa-input border-base-dark radius-md focus:outline-primary" id="full-name" name="full-name" type="text" />"##,
        related: &["date-picker", "select", "search"],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_component_ids_unique() {
        let mut ids: Vec<_> = COMPONENTS.iter().map(|c| c.id).collect();
        ids.sort_unstable();
        let before = ids.len();
        ids.dedup();
        assert_eq!(before, ids.len());
    }

    #[test]
    fn test_find_component_variants() {
        assert_eq!(find_component("button").map(|c| c.id), Some("button"));
        assert_eq!(find_component("Date Picker").map(|c| c.id), Some("date-picker"));
        assert_eq!(find_component("TextInput").map(|c| c.id), Some("text-input"));
        assert_eq!(find_component("GovBanner").map(|c| c.id), Some("banner"));
        assert!(find_component("carousel").is_none());
    }

    #[test]
    fn test_categories_sorted() {
        let categories = component_categories();
        assert!(categories.contains(&"forms"));
        assert!(categories.windows(2).all(|w| w[0] < w[1]));
    }
}
