//! Helpers shared by every framework renderer.

use base64::{engine::general_purpose::STANDARD, Engine as _};
use maud::{html, Markup, PreEscaped};
use serde::Serialize;
use serde_json::{json, Value};

use crate::{
    error::PagyError,
    i18n::Locale,
    pagy::{Pagy, Sequels, Size, Step},
    url::{url_for, PageRequest},
};

/// Stands in for the page number in templates filled by client script.
pub const PAGE_PLACEHOLDER: &str = "__pagy_page__";
/// Stands in for the page label in templates filled by client script.
pub const LABEL_PLACEHOLDER: &str = "__pagy_label__";

/// Per-call options accepted by every nav renderer.
#[derive(Clone, Debug, Default)]
pub struct NavOptions {
    pub pagy_id: Option<String>,
    /// Raw attributes added to every page link.
    pub link_extra: String,
    /// Overrides the translated `aria-label` of the nav.
    pub page_label: Option<String>,
    pub page_i18n_key: Option<String>,
    pub size: Option<Size>,
    pub steps: Option<Vec<Step>>,
}

impl NavOptions {
    pub fn size(&self, pagy: &Pagy) -> Size {
        self.size.unwrap_or(pagy.vars.size)
    }

    /// Sequels from these steps, else the pagy steps, else a single step of `size`.
    pub fn sequels(&self, pagy: &Pagy) -> Result<Sequels, PagyError> {
        match (&self.steps, &pagy.vars.steps, self.size) {
            (None, None, Some(size)) => pagy.sequels(Some(&[Step { width: 0, size }][..])),
            _ => pagy.sequels(self.steps.as_deref()),
        }
    }
}

/// Templates the client script assembles a nav from.
#[derive(Serialize, Debug)]
pub struct NavTags {
    pub before: String,
    pub link: String,
    pub active: String,
    pub gap: String,
    pub after: String,
}

pub struct Frontend<'a> {
    pub pagy: &'a Pagy,
    pub request: &'a PageRequest,
    pub locale: Locale,
}

impl<'a> Frontend<'a> {
    pub fn new(pagy: &'a Pagy, request: &'a PageRequest) -> Self {
        Self {
            pagy,
            request,
            locale: Locale::default(),
        }
    }

    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }

    pub fn t(&self, key: &str) -> String {
        self.locale.t(key)
    }

    pub fn link_builder(&self, link_extra: &str) -> LinkBuilder {
        let url = url_for(self.pagy, self.request, PAGE_PLACEHOLDER);
        let (left, right) = url.split_once(PAGE_PLACEHOLDER).unwrap_or((url.as_str(), ""));
        let first = self
            .pagy
            .vars
            .trim
            .then(|| escape(&url_for(self.pagy, self.request, "1")));

        let attrs = [self.pagy.vars.link_extra.trim(), link_extra.trim()]
            .into_iter()
            .filter(|attrs| !attrs.is_empty())
            .collect::<Vec<_>>()
            .join(" ");

        LinkBuilder {
            left: escape(left),
            right: escape(right),
            first,
            attrs,
            prev: self.pagy.prev.map(|page| page.to_string()),
            next: self.pagy.next.map(|page| page.to_string()),
        }
    }

    /// `aria-label` value of the nav element.
    pub fn nav_aria_label(&self, opts: &NavOptions) -> Markup {
        match &opts.page_label {
            Some(label) => html! { (label) },
            None => {
                let key = opts.page_i18n_key.as_deref().unwrap_or("pagy.aria_label.nav");
                PreEscaped(self.locale.translate(key, Some(self.pagy.pages), &[]))
            }
        }
    }

    pub fn prev_aria_label(&self) -> String {
        format!(r#"aria-label="{}""#, self.t("pagy.aria_label.prev"))
    }

    pub fn next_aria_label(&self) -> String {
        format!(r#"aria-label="{}""#, self.t("pagy.aria_label.next"))
    }

    /// Base64 JSON value of the `data-pagy` attribute.
    pub fn data_attr(&self, mut args: Vec<Value>) -> Result<String, PagyError> {
        if self.pagy.vars.trim {
            args.push(Value::String(self.pagy.vars.page_param.clone()));
        }
        let json = serde_json::to_string(&args)?;
        Ok(STANDARD.encode(json))
    }

    pub fn nav_js_data(&self, tags: &NavTags, sequels: &Sequels) -> Result<String, PagyError> {
        // the trailing null is the slot for per-width page labels
        self.data_attr(vec![
            json!("nav"),
            serde_json::to_value(tags)?,
            serde_json::to_value(sequels)?,
            Value::Null,
        ])
    }

    pub fn combo_data(&self, link: &LinkBuilder) -> Result<String, PagyError> {
        self.data_attr(vec![json!("combo"), json!(self.marked_link(link))])
    }

    /// Hidden link the client script clones when jumping to a typed page.
    pub fn marked_link(&self, link: &LinkBuilder) -> String {
        link.link(PAGE_PLACEHOLDER, "", r#"style="display: none;""#)
    }
}

fn escape(text: &str) -> String {
    html! { (text) }.into_string()
}

/// Renders `<a>` tags to pages of one pagination.
pub struct LinkBuilder {
    left: String,
    right: String,
    first: Option<String>,
    attrs: String,
    prev: Option<String>,
    next: Option<String>,
}

impl LinkBuilder {
    /// Link to `page` (a number or [`PAGE_PLACEHOLDER`]) showing `text` as trusted HTML.
    pub fn link(&self, page: &str, text: &str, extra: &str) -> String {
        let mut html = String::with_capacity(self.left.len() + self.right.len() + 64);
        html.push_str(r#"<a href=""#);
        match &self.first {
            Some(first) if page == "1" => html.push_str(first),
            _ => {
                html.push_str(&self.left);
                html.push_str(page);
                html.push_str(&self.right);
            }
        }
        html.push('"');
        if !self.attrs.is_empty() {
            html.push(' ');
            html.push_str(&self.attrs);
        }
        if self.prev.as_deref() == Some(page) {
            html.push_str(r#" rel="prev""#);
        } else if self.next.as_deref() == Some(page) {
            html.push_str(r#" rel="next""#);
        }
        if !extra.is_empty() {
            html.push(' ');
            html.push_str(extra);
        }
        html.push('>');
        html.push_str(text);
        html.push_str("</a>");
        html
    }

    pub fn page_link(&self, page: u64) -> String {
        let page = page.to_string();
        self.link(&page, &page, "")
    }
}
