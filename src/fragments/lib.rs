//! # Fragments - HTML Fragment Rendering
//!
//! A small layer over [minijinja](https://docs.rs/minijinja) for producing HTML
//! fragments that are later stitched into a larger page.
//!
//! ## The Problem
//!
//! Report pages are built from many small, nested fragments (tables, panels, tab
//! headers). Writing them as `format!` strings makes escaping easy to forget and
//! the markup hard to read, while a bare template engine leaves a few things open:
//! - Every template must escape by default, including ones loaded under odd names
//! - Presentation classes get hard-coded into templates and drift apart
//! - Helper widgets (tooltips) need ids that are unique within a page but stable
//!   from one render to the next
//!
//! ## The Solution
//!
//! Fragments separates concerns:
//! - **Templates** define structure using Jinja2 syntax (via minijinja)
//! - **Styles** map semantic names to CSS classes and are applied via the
//!   `styled` filter
//! - **Render passes** get a fresh environment, so per-page counters start from
//!   zero every time and rendering the same data twice yields the same bytes
//!
//! ## Quick Example
//!
//! ```rust
//! use fragments::{render, Theme};
//! use serde::Serialize;
//!
//! #[derive(Serialize)]
//! struct Data {
//!     name: String,
//! }
//!
//! let theme = Theme::new().add("warning", "mibig-warning");
//!
//! let output = render(
//!     r#"<p>{{ name | styled("warning") }}</p>"#,
//!     &Data { name: "<inactive>".into() },
//!     &theme,
//! )
//! .unwrap();
//! assert_eq!(output, r#"<p><span class="mibig-warning">&lt;inactive&gt;</span></p>"#);
//! ```
//!
//! ## Renderer for Multiple Templates
//!
//! Pages that import macros from each other use [`Renderer`]:
//!
//! ```rust
//! use fragments::{Renderer, Theme};
//! use serde::Serialize;
//!
//! let mut renderer = Renderer::new(Theme::new());
//! renderer
//!     .add_template("macros.html", "{% macro bold(t) %}<b>{{ t }}</b>{% endmacro %}")
//!     .unwrap();
//! renderer
//!     .add_template("page.html", r#"{% import "macros.html" as m %}{{ m.bold(title) }}"#)
//!     .unwrap();
//!
//! #[derive(Serialize)]
//! struct Page { title: String }
//!
//! let html = renderer.render("page.html", &Page { title: "A & B".into() }).unwrap();
//! assert_eq!(html, "<b>A &amp; B</b>");
//! ```
//!
//! ## Template Environment
//!
//! Every environment built here:
//! - escapes HTML regardless of template name
//! - treats undefined variables as errors, so a typo fails loudly instead of
//!   silently dropping a table cell
//! - trims the newline after block tags and strips leading block whitespace
//! - provides `tooltip_id(prefix)`, returning `"{prefix}-help-{n}"` with `n`
//!   counting from 1 within the current render pass

use minijinja::{AutoEscape, Environment, Error, HtmlEscape, UndefinedBehavior, Value};
use serde::Serialize;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Default prefix shown when a style name is not found.
pub const DEFAULT_MISSING_STYLE_INDICATOR: &str = "(!?)";

/// A collection of named styles, each resolving to a CSS class.
///
/// When a style name is not found, a configurable indicator is prepended to the text
/// to help catch typos in templates (defaults to `(!?)`).
///
/// # Example
///
/// ```rust
/// use fragments::Styles;
///
/// let styles = Styles::new()
///     .add("inactive", "mibig-inactive")
///     .add("evidence", "mibig-evidence");
///
/// assert_eq!(
///     styles.apply("inactive", "inactive"),
///     r#"<span class="mibig-inactive">inactive</span>"#
/// );
///
/// // Unknown style shows indicator
/// let unknown = styles.apply("typo", "Hello");
/// assert!(unknown.starts_with("(!?)"));
/// ```
#[derive(Clone, Debug)]
pub struct Styles {
    classes: HashMap<String, String>,
    missing_indicator: String,
}

impl Default for Styles {
    fn default() -> Self {
        Self {
            classes: HashMap::new(),
            missing_indicator: DEFAULT_MISSING_STYLE_INDICATOR.to_string(),
        }
    }
}

impl Styles {
    /// Creates an empty style registry with the default missing style indicator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a custom indicator to prepend when a style name is not found.
    /// Set to empty string to disable.
    pub fn missing_indicator(mut self, indicator: &str) -> Self {
        self.missing_indicator = indicator.to_string();
        self
    }

    /// Adds a named style. If a style with the same name exists, it is replaced.
    pub fn add(mut self, name: &str, class: &str) -> Self {
        self.classes.insert(name.to_string(), class.to_string());
        self
    }

    /// Wraps plain text in a span carrying the style's class. The text is escaped.
    pub fn apply(&self, name: &str, text: &str) -> String {
        self.apply_markup(name, &escape_html(text))
    }

    /// Like [`Styles::apply`], for content that is already markup.
    pub fn apply_markup(&self, name: &str, markup: &str) -> String {
        match self.classes.get(name) {
            Some(class) => format!("<span class=\"{}\">{}</span>", escape_html(class), markup),
            None if self.missing_indicator.is_empty() => markup.to_string(),
            None => format!("{} {}", escape_html(&self.missing_indicator), markup),
        }
    }

    /// Returns the CSS class registered for a style name.
    pub fn class_of(&self, name: &str) -> Option<&str> {
        self.classes.get(name).map(String::as_str)
    }

    pub fn has(&self, name: &str) -> bool {
        self.classes.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }
}

/// A named collection of styles used when rendering templates.
#[derive(Clone, Debug, Default)]
pub struct Theme {
    styles: Styles,
}

impl Theme {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_styles(styles: Styles) -> Self {
        Self { styles }
    }

    /// Adds a named style, returning an updated theme for chaining.
    pub fn add(mut self, name: &str, class: &str) -> Self {
        self.styles = self.styles.add(name, class);
        self
    }

    pub fn styles(&self) -> &Styles {
        &self.styles
    }
}

/// Renders a single template string against `data`.
///
/// The template is registered under an `.html` name, so escaping applies exactly
/// as it does for [`Renderer`] templates.
pub fn render<T: Serialize>(template: &str, data: &T, theme: &Theme) -> Result<String, Error> {
    let mut env = Environment::new();
    configure(&mut env, theme);
    env.add_template("_inline.html", template)?;
    env.get_template("_inline.html")?.render(data)
}

/// A renderer with pre-registered templates.
///
/// Templates are syntax-checked when added. Each call to [`Renderer::render`]
/// builds its own environment from the registered sources; a renderer can be
/// shared between threads and used concurrently.
#[derive(Clone, Debug)]
pub struct Renderer {
    templates: Vec<(String, String)>,
    theme: Theme,
}

impl Renderer {
    pub fn new(theme: Theme) -> Self {
        Self {
            templates: Vec::new(),
            theme,
        }
    }

    /// Registers a named template, replacing any previous one with that name.
    ///
    /// Returns an error if the template does not parse.
    pub fn add_template(&mut self, name: &str, source: &str) -> Result<(), Error> {
        let mut check = Environment::new();
        configure(&mut check, &self.theme);
        check.add_template(name, source)?;

        match self.templates.iter_mut().find(|(n, _)| n == name) {
            Some(entry) => entry.1 = source.to_string(),
            None => self
                .templates
                .push((name.to_string(), source.to_string())),
        }
        Ok(())
    }

    pub fn has_template(&self, name: &str) -> bool {
        self.templates.iter().any(|(n, _)| n == name)
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    /// Renders a registered template with the given data.
    ///
    /// # Errors
    ///
    /// Returns an error if the template name is not found or rendering fails.
    pub fn render<T: Serialize>(&self, name: &str, data: &T) -> Result<String, Error> {
        let env = self.environment()?;
        let tmpl = env.get_template(name)?;
        tmpl.render(data)
    }

    fn environment(&self) -> Result<Environment<'_>, Error> {
        let mut env = Environment::new();
        configure(&mut env, &self.theme);
        for (name, source) in &self.templates {
            env.add_template(name.as_str(), source.as_str())?;
        }
        Ok(env)
    }
}

/// Escapes text the same way the template auto-escaper does.
pub fn escape_html(text: &str) -> String {
    HtmlEscape(text).to_string()
}

fn configure(env: &mut Environment<'_>, theme: &Theme) {
    env.set_auto_escape_callback(|_| AutoEscape::Html);
    env.set_undefined_behavior(UndefinedBehavior::Strict);
    env.set_trim_blocks(true);
    env.set_lstrip_blocks(true);
    register_style_filter(env, theme.styles.clone());
    register_tooltip_ids(env);
}

/// Registers the `styled` filter on a minijinja environment.
fn register_style_filter(env: &mut Environment<'_>, styles: Styles) {
    env.add_filter("styled", move |value: Value, name: String| -> Value {
        let html = if value.is_safe() {
            styles.apply_markup(&name, &value.to_string())
        } else {
            styles.apply(&name, &value.to_string())
        };
        Value::from_safe_string(html)
    });
}

/// Registers `tooltip_id`, numbering ids from 1 within this environment.
fn register_tooltip_ids(env: &mut Environment<'_>) {
    let counter = Arc::new(AtomicUsize::new(0));
    env.add_function("tooltip_id", move |prefix: String| -> String {
        let n = counter.fetch_add(1, Ordering::Relaxed) + 1;
        format!("{}-help-{}", prefix, n)
    });
}
