use maud::{html, Markup, PreEscaped};

use crate::{
    error::PagyError,
    frontend::{Frontend, LinkBuilder, NavOptions, NavTags, LABEL_PLACEHOLDER, PAGE_PLACEHOLDER},
    pagy::SeriesItem,
};

const BUTTON_STYLE: &str = "margin-bottom: 0";

/// Static Foundation pagination: one `li` per series item.
pub fn nav(fe: &Frontend, opts: &NavOptions) -> Result<Markup, PagyError> {
    let link = fe.link_builder(&opts.link_extra);
    let series = fe.pagy.series(&opts.size(fe.pagy))?;

    Ok(html! {
        nav id=[opts.pagy_id.as_deref()] class="pagy-foundation-nav" aria-label=(fe.nav_aria_label(opts)) {
            ul class="pagination" {
                (prev_html(fe, &link))
                @for item in &series {
                    @match item {
                        SeriesItem::Page(page) => li { (PreEscaped(link.page_link(*page))) },
                        SeriesItem::Current(page) => (current_html(&fe.pagy.label_for(*page))),
                        SeriesItem::Gap => (gap_html()),
                    }
                }
                (next_html(fe, &link))
            }
        }
    })
}

/// Empty Foundation nav filled in by client script from the `data-pagy` templates.
pub fn nav_js(fe: &Frontend, opts: &NavOptions) -> Result<Markup, PagyError> {
    let sequels = opts.sequels(fe.pagy)?;
    let link = fe.link_builder(&opts.link_extra);

    let tags = NavTags {
        before: format!(
            r#"<ul class="pagination">{}"#,
            prev_html(fe, &link).into_string()
        ),
        link: html! {
            li { (PreEscaped(link.link(PAGE_PLACEHOLDER, LABEL_PLACEHOLDER, ""))) }
        }
        .into_string(),
        active: current_html(LABEL_PLACEHOLDER).into_string(),
        gap: gap_html().into_string(),
        after: format!("{}</ul>", next_html(fe, &link).into_string()),
    };
    let data = fe.nav_js_data(&tags, &sequels)?;
    let class = if sequels.len() > 1 {
        "pagy-rjs pagy-foundation-nav-js"
    } else {
        "pagy-foundation-nav-js"
    };

    Ok(html! {
        nav id=[opts.pagy_id.as_deref()] class=(class) aria-label=(fe.nav_aria_label(opts)) data-pagy=(data) {}
    })
}

/// Foundation input group with a page-number input between prev and next.
pub fn combo_nav_js(fe: &Frontend, opts: &NavOptions) -> Result<Markup, PagyError> {
    let pagy = fe.pagy;
    let link = fe.link_builder(&opts.link_extra);
    let page = pagy.page.to_string();
    let pages = pagy.pages.to_string();

    let input = html! {
        input class="input-group-field cell shrink" type="number" min="1" max=(pages) value=(page)
            style=(format!("width: {}rem; padding: 0 0.3rem; margin: 0 0.3rem;", pages.len() + 1))
            aria-current="page";
    }
    .into_string();
    let label = fe
        .locale
        .translate(
            "pagy.combo_nav_js",
            Some(pagy.page),
            &[("page_input", &input), ("pages", &pages)],
        )
        .replacen("<label>", r#"<label class="input-group-label">"#, 1);
    let data = fe.combo_data(&link)?;

    Ok(html! {
        nav id=[opts.pagy_id.as_deref()] class="pagy-foundation-combo-nav-js" aria-label=(fe.nav_aria_label(opts)) {
            div class="input-group" data-pagy=(data) {
                @if let Some(prev) = pagy.prev {
                    (PreEscaped(link.link(
                        &prev.to_string(),
                        &fe.t("pagy.nav.prev"),
                        &format!(r#"style="{BUTTON_STYLE}" class="prev button primary" {}"#, fe.prev_aria_label()),
                    )))
                } @else {
                    a style=(BUTTON_STYLE) class="prev button primary disabled" role="link" aria-disabled="true" aria-label=(PreEscaped(fe.t("pagy.aria_label.prev"))) {
                        (PreEscaped(fe.t("pagy.nav.prev")))
                    }
                }
                (PreEscaped(label))
                @if let Some(next) = pagy.next {
                    (PreEscaped(link.link(
                        &next.to_string(),
                        &fe.t("pagy.nav.next"),
                        &format!(r#"style="{BUTTON_STYLE}" class="next button primary" {}"#, fe.next_aria_label()),
                    )))
                } @else {
                    a style=(BUTTON_STYLE) class="next button primary disabled" role="link" aria-disabled="true" aria-label=(PreEscaped(fe.t("pagy.aria_label.next"))) {
                        (PreEscaped(fe.t("pagy.nav.next")))
                    }
                }
            }
        }
    })
}

fn current_html(label: &str) -> Markup {
    html! {
        li class="current" role="link" aria-current="page" aria-disabled="true" { (PreEscaped(label)) }
    }
}

fn gap_html() -> Markup {
    html! { li class="ellipsis gap" {} }
}

fn prev_html(fe: &Frontend, link: &LinkBuilder) -> Markup {
    let text = fe.t("pagy.nav.prev");
    html! {
        @if let Some(prev) = fe.pagy.prev {
            li class="prev" { (PreEscaped(link.link(&prev.to_string(), &text, &fe.prev_aria_label()))) }
        } @else {
            li class="prev disabled" role="link" aria-disabled="true" aria-label=(PreEscaped(fe.t("pagy.aria_label.prev"))) {
                (PreEscaped(&text))
            }
        }
    }
}

fn next_html(fe: &Frontend, link: &LinkBuilder) -> Markup {
    let text = fe.t("pagy.nav.next");
    html! {
        @if let Some(next) = fe.pagy.next {
            li class="next" { (PreEscaped(link.link(&next.to_string(), &text, &fe.next_aria_label()))) }
        } @else {
            li class="next disabled" role="link" aria-disabled="true" aria-label=(PreEscaped(fe.t("pagy.aria_label.next"))) {
                (PreEscaped(&text))
            }
        }
    }
}
