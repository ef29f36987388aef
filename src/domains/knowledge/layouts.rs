//! Page layout patterns built from USWDS components and the layout grid.

use serde::Serialize;

/// A reusable page layout pattern.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutPattern {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    /// Words in a request description that point at this pattern.
    #[serde(skip)]
    pub keywords: &'static [&'static str],
    pub components: &'static [&'static str],
    pub guidance: &'static [&'static str],
    #[serde(skip)]
    pub react_code: &'static str,
    #[serde(skip)]
    pub html_code: &'static str,
    #[serde(skip)]
    pub tailwind_code: &'static str,
}

/// Pattern returned when nothing in the description matches.
pub const FALLBACK_LAYOUT: &str = "landing-page";

pub static LAYOUTS: &[LayoutPattern] = &[
    LayoutPattern {
        id: "landing-page",
        name: "Landing page",
        description: "Hero section, highlighted services and a call to action.",
        keywords: &["landing", "home", "homepage", "marketing", "hero", "welcome", "agency"],
        components: &["banner", "header", "hero", "card", "button", "footer"],
        guidance: &[
            "Lead with one clear call to action in the hero",
            "Use a card group for three to six featured services",
        ],
        react_code: r##"import { GovBanner, Header, Grid, GridContainer, CardGroup, Card, CardHeader, CardBody, Button, Footer } from '@trussworks/react-uswds';

export const LandingPage = () => (
  <>
    <GovBanner />
    <Header basic />
    <main id="main-content">
      <section className="usa-hero">
        <GridContainer>
          <div className="usa-hero__callout">
            <h1 className="usa-hero__heading">Welcome</h1>
            <Button type="button">Get started</Button>
          </div>
        </GridContainer>
      </section>
      <GridContainer className="usa-section">
        <CardGroup>
          <Card gridLayout={{ tablet: { col: 4 } }}>
            <CardHeader><h2 className="usa-card__heading">Service</h2></CardHeader>
            <CardBody><p>Describe the service.</p></CardBody>
          </Card>
        </CardGroup>
      </GridContainer>
    </main>
    <Footer size="slim" primary={<></>} secondary={<></>} />
  </>
);"##,
        html_code: r##"<a class="usa-skipnav" href="#main-content">Skip to main content</a>
<section class="usa-banner" aria-label="Official website of the United States government"></section>
<header class="usa-header usa-header--basic"></header>
<main id="main-content">
  <section class="usa-hero">
    <div class="grid-container">
      <div class="usa-hero__callout">
        <h1 class="usa-hero__heading">Welcome</h1>
        <a class="usa-button" href="/start">Get started</a>
      </div>
    </div>
  </section>
  <section class="grid-container usa-section">
    <ul class="usa-card-group">
      <li class="usa-card tablet:grid-col-4"><div class="usa-card__container"><div class="usa-card__header"><h2 class="usa-card__heading">Service</h2></div></div></li>
    </ul>
  </section>
</main>
<footer class="usa-footer usa-footer--slim"></footer>"##,
        tailwind_code: r##"<main id="main-content">
  <section class="usa-hero bg-primary-darker padding-y-8">
    <div class="grid-container">
      <div class="usa-hero__callout bg-primary-dark padding-4 radius-md">
        <h1 class="font-heading-2xl text-white">Welcome</h1>
        <a class="usa-button bg-secondary" href="/start">Get started</a>
      </div>
    </div>
  </section>
  <section class="grid-container padding-y-6">
    <div class="grid-row grid-gap">
      <div class="tablet:grid-col-4 border-1px border-base-lighter radius-lg padding-2 shadow-2">Service</div>
    </div>
  </section>
</main>"##,
    },
    LayoutPattern {
        id: "form-page",
        name: "Form page",
        description: "Single-column form with step indicator and clear submission.",
        keywords: &["form", "application", "apply", "register", "registration", "signup", "sign up", "survey", "input", "submit"],
        components: &["step-indicator", "text-input", "select", "radio", "checkbox", "button"],
        guidance: &[
            "Keep forms in a single column no wider than tablet:grid-col-8",
            "Break long forms into steps with a step indicator",
            "Show validation errors inline and in a summary alert",
        ],
        react_code: r##"import { GridContainer, Grid, Form, Fieldset, Label, TextInput, Button, StepIndicator, StepIndicatorStep } from '@trussworks/react-uswds';

export const FormPage = () => (
  <GridContainer>
    <Grid row>
      <Grid tablet={{ col: 8 }}>
        <StepIndicator headingLevel="h2">
          <StepIndicatorStep label="Personal information" status="current" />
          <StepIndicatorStep label="Review" />
        </StepIndicator>
        <Form onSubmit={handleSubmit} large>
          <Fieldset legend="Personal information">
            <Label htmlFor="full-name">Full name</Label>
            <TextInput id="full-name" name="full-name" type="text" />
          </Fieldset>
          <Button type="submit">Continue</Button>
        </Form>
      </Grid>
    </Grid>
  </GridContainer>
);"##,
        html_code: r##"<div class="grid-container">
  <div class="grid-row">
    <div class="tablet:grid-col-8">
      <form class="usa-form usa-form--large">
        <fieldset class="usa-fieldset">
          <legend class="usa-legend usa-legend--large">Personal information</legend>
          <label class="usa-label" for="full-name">Full name</label>
          <input class="usa-input" id="full-name" name="full-name" type="text" />
        </fieldset>
        <button class="usa-button" type="submit">Continue</button>
      </form>
    </div>
  </div>
</div>"##,
        tailwind_code: r##"<div class="grid-container padding-y-4">
  <form class="usa-form maxw-tablet">
    <fieldset class="usa-fieldset border-0">
      <legend class="font-heading-lg">Personal information</legend>
      <label class="usa-label text-bold" for="full-name">Full name</label>
      <input class="usa-input border-base-dark radius-md" id="full-name" name="full-name" type="text" />
    </fieldset>
    <button class="usa-button bg-primary hover:bg-primary-dark margin-top-3" type="submit">Continue</button>
  </form>
</div>"##,
    },
    LayoutPattern {
        id: "dashboard",
        name: "Dashboard",
        description: "Side navigation with summary cards and a data table.",
        keywords: &["dashboard", "admin", "metrics", "report", "reports", "analytics", "data", "overview", "portal"],
        components: &["header", "side-navigation", "card", "table", "pagination"],
        guidance: &[
            "Use a 3/9 grid split between side navigation and content",
            "Summarize key numbers in cards above detailed tables",
        ],
        react_code: r##"import { GridContainer, Grid, SideNav, CardGroup, Card, CardBody, Table, Pagination } from '@trussworks/react-uswds';

export const Dashboard = () => (
  <GridContainer>
    <Grid row gap>
      <Grid desktop={{ col: 3 }}><SideNav items={navLinks} /></Grid>
      <Grid desktop={{ col: 9 }}>
        <CardGroup>
          <Card gridLayout={{ tablet: { col: 4 } }}><CardBody><p>Open cases: 42</p></CardBody></Card>
        </CardGroup>
        <Table fullWidth caption="Recent activity">{rows}</Table>
        <Pagination pathname="/dashboard" totalPages={5} currentPage={1} />
      </Grid>
    </Grid>
  </GridContainer>
);"##,
        html_code: r##"<div class="grid-container">
  <div class="grid-row grid-gap">
    <aside class="desktop:grid-col-3">
      <nav aria-label="Side navigation"><ul class="usa-sidenav"><li class="usa-sidenav__item"><a href="/dashboard" class="usa-current">Overview</a></li></ul></nav>
    </aside>
    <div class="desktop:grid-col-9">
      <ul class="usa-card-group"><li class="usa-card tablet:grid-col-4"><div class="usa-card__container"><div class="usa-card__body"><p>Open cases: 42</p></div></div></li></ul>
      <table class="usa-table usa-table--borderless width-full"><caption>Recent activity</caption></table>
    </div>
  </div>
</div>"##,
        tailwind_code: r##"<div class="grid-container">
  <div class="grid-row grid-gap">
    <aside class="desktop:grid-col-3 bg-base-lightest padding-2">Overview</aside>
    <div class="desktop:grid-col-9">
      <div class="grid-row grid-gap"><div class="tablet:grid-col-4 shadow-2 radius-lg padding-2">Open cases: 42</div></div>
      <table class="usa-table width-full border-1px border-base-lighter"><caption>Recent activity</caption></table>
    </div>
  </div>
</div>"##,
    },
    LayoutPattern {
        id: "documentation",
        name: "Documentation page",
        description: "Long-form content with side navigation and in-page links.",
        keywords: &["documentation", "docs", "guide", "article", "policy", "content", "help", "faq", "blog"],
        components: &["header", "side-navigation", "breadcrumb", "accordion", "footer"],
        guidance: &[
            "Wrap long-form text in usa-prose for readable line length",
            "Use breadcrumbs when content is more than two levels deep",
        ],
        react_code: r##"import { GridContainer, Grid, SideNav, BreadcrumbBar, Breadcrumb, BreadcrumbLink } from '@trussworks/react-uswds';

export const DocumentationPage = () => (
  <GridContainer>
    <BreadcrumbBar>
      <Breadcrumb><BreadcrumbLink href="/">Home</BreadcrumbLink></Breadcrumb>
      <Breadcrumb current>Guide</Breadcrumb>
    </BreadcrumbBar>
    <Grid row gap>
      <Grid tablet={{ col: 4 }}><SideNav items={sections} /></Grid>
      <Grid tablet={{ col: 8 }} className="usa-prose"><h1>Guide</h1><p>Content</p></Grid>
    </Grid>
  </GridContainer>
);"##,
        html_code: r##"<div class="grid-container">
  <nav class="usa-breadcrumb" aria-label="Breadcrumbs"><ol class="usa-breadcrumb__list"><li class="usa-breadcrumb__list-item usa-current" aria-current="page"><span>Guide</span></li></ol></nav>
  <div class="grid-row grid-gap">
    <nav class="tablet:grid-col-4" aria-label="Side navigation"><ul class="usa-sidenav"></ul></nav>
    <main class="tablet:grid-col-8 usa-prose" id="main-content"><h1>Guide</h1><p>Content</p></main>
  </div>
</div>"##,
        tailwind_code: r##"<div class="grid-container">
  <div class="grid-row grid-gap">
    <nav class="tablet:grid-col-4 border-right-1px border-base-lighter" aria-label="Side navigation"></nav>
    <main class="tablet:grid-col-8 measure-5 line-height-sans-5" id="main-content"><h1 class="font-heading-xl">Guide</h1></main>
  </div>
</div>"##,
    },
    LayoutPattern {
        id: "search-results",
        name: "Search results",
        description: "Search box, filters and paginated results list.",
        keywords: &["search", "results", "find", "filter", "directory", "catalog", "listing"],
        components: &["search", "checkbox", "card", "pagination"],
        guidance: &[
            "Repeat the query above the results and show the result count",
            "Put filters in a left column on desktop and an accordion on mobile",
        ],
        react_code: r##"import { GridContainer, Grid, Search, Fieldset, Checkbox, Pagination } from '@trussworks/react-uswds';

export const SearchResults = () => (
  <GridContainer>
    <Search onSubmit={handleSearch} />
    <Grid row gap>
      <Grid desktop={{ col: 3 }}>
        <Fieldset legend="Filter by type"><Checkbox id="type-form" name="type" label="Forms" /></Fieldset>
      </Grid>
      <Grid desktop={{ col: 9 }}>
        <p>{count} results for "{query}"</p>
        <ul className="usa-list usa-list--unstyled">{results}</ul>
        <Pagination pathname="/search" totalPages={pages} currentPage={page} />
      </Grid>
    </Grid>
  </GridContainer>
);"##,
        html_code: r##"<div class="grid-container">
  <form class="usa-search" role="search"><label class="usa-sr-only" for="q">Search</label><input class="usa-input" id="q" type="search" name="q" /><button class="usa-button" type="submit">Search</button></form>
  <div class="grid-row grid-gap">
    <div class="desktop:grid-col-3"><fieldset class="usa-fieldset"><legend class="usa-legend">Filter by type</legend></fieldset></div>
    <div class="desktop:grid-col-9"><ul class="usa-list usa-list--unstyled"></ul><nav aria-label="Pagination" class="usa-pagination"></nav></div>
  </div>
</div>"##,
        tailwind_code: r##"<div class="grid-container">
  <form class="usa-search flex margin-y-2" role="search"><input class="usa-input radius-left-md" type="search" name="q" /><button class="usa-button bg-primary" type="submit">Search</button></form>
  <div class="grid-row grid-gap">
    <div class="desktop:grid-col-3 bg-base-lightest padding-2">Filters</div>
    <div class="desktop:grid-col-9"><ul class="add-list-reset"></ul></div>
  </div>
</div>"##,
    },
    LayoutPattern {
        id: "sign-in",
        name: "Sign-in page",
        description: "Centered authentication form with account help links.",
        keywords: &["sign in", "signin", "login", "log in", "authentication", "password", "account"],
        components: &["text-input", "button", "alert"],
        guidance: &[
            "Offer a show-password toggle",
            "Link to account recovery directly below the form",
        ],
        react_code: r##"import { GridContainer, Grid, Form, Fieldset, Label, TextInput, Button } from '@trussworks/react-uswds';

export const SignIn = () => (
  <GridContainer>
    <Grid row className="flex-justify-center">
      <Grid tablet={{ col: 6 }}>
        <h1>Sign in</h1>
        <Form onSubmit={handleSignIn}>
          <Fieldset legend="Access your account" legendStyle="large">
            <Label htmlFor="email">Email address</Label>
            <TextInput id="email" name="email" type="email" autoComplete="username" />
            <Label htmlFor="password">Password</Label>
            <TextInput id="password" name="password" type="password" />
            <Button type="submit">Sign in</Button>
          </Fieldset>
        </Form>
      </Grid>
    </Grid>
  </GridContainer>
);"##,
        html_code: r##"<div class="grid-container">
  <div class="grid-row flex-justify-center">
    <div class="tablet:grid-col-6">
      <h1>Sign in</h1>
      <form class="usa-form">
        <fieldset class="usa-fieldset">
          <legend class="usa-legend usa-legend--large">Access your account</legend>
          <label class="usa-label" for="email">Email address</label>
          <input class="usa-input" id="email" name="email" type="email" autocomplete="username" />
          <label class="usa-label" for="password">Password</label>
          <input class="usa-input" id="password" name="password" type="password" />
          <button class="usa-button" type="submit">Sign in</button>
        </fieldset>
      </form>
    </div>
  </div>
</div>"##,
        tailwind_code: r##"<div class="grid-container flex flex-justify-center padding-y-6">
  <form class="usa-form bg-white shadow-3 radius-lg padding-4 width-mobile-lg">
    <h1 class="font-heading-xl">Sign in</h1>
    <label class="usa-label" for="email">Email address</label>
    <input class="usa-input radius-md" id="email" name="email" type="email" />
    <button class="usa-button bg-primary width-full" type="submit">Sign in</button>
  </form>
</div>"##,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_exists() {
        assert!(LAYOUTS.iter().any(|l| l.id == FALLBACK_LAYOUT));
    }

    #[test]
    fn test_every_layout_has_code_for_each_mode() {
        for layout in LAYOUTS {
            assert!(!layout.react_code.is_empty(), "{} react", layout.id);
            assert!(!layout.html_code.is_empty(), "{} html", layout.id);
            assert!(!layout.tailwind_code.is_empty(), "{} tailwind", layout.id);
        }
    }
}
