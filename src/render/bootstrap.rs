use maud::{html, Markup, PreEscaped};

use crate::{
    error::PagyError,
    frontend::{Frontend, LinkBuilder, NavOptions, NavTags, LABEL_PLACEHOLDER, PAGE_PLACEHOLDER},
    pagy::SeriesItem,
};

fn page_link_extra(opts: &NavOptions) -> String {
    format!(r#"class="page-link" {}"#, opts.link_extra)
}

/// Static Bootstrap pagination: one `li.page-item` per series item.
pub fn nav(fe: &Frontend, opts: &NavOptions) -> Result<Markup, PagyError> {
    let link = fe.link_builder(&page_link_extra(opts));
    let series = fe.pagy.series(&opts.size(fe.pagy))?;

    Ok(html! {
        nav id=[opts.pagy_id.as_deref()] class="pagy-bootstrap-nav" aria-label=(fe.nav_aria_label(opts)) {
            ul class="pagination" {
                (prev_html(fe, &link))
                @for item in &series {
                    @match item {
                        SeriesItem::Page(page) => li class="page-item" { (PreEscaped(link.page_link(*page))) },
                        SeriesItem::Current(page) => li class="page-item active" { (PreEscaped(link.page_link(*page))) },
                        SeriesItem::Gap => (gap_html(fe)),
                    }
                }
                (next_html(fe, &link))
            }
        }
    })
}

/// Empty Bootstrap nav filled in by client script from the `data-pagy` templates.
pub fn nav_js(fe: &Frontend, opts: &NavOptions) -> Result<Markup, PagyError> {
    let sequels = opts.sequels(fe.pagy)?;
    let link = fe.link_builder(&page_link_extra(opts));
    let page = link.link(PAGE_PLACEHOLDER, LABEL_PLACEHOLDER, "");

    let tags = NavTags {
        before: format!(
            r#"<ul class="pagination">{}"#,
            prev_html(fe, &link).into_string()
        ),
        link: html! { li class="page-item" { (PreEscaped(&page)) } }.into_string(),
        active: html! { li class="page-item active" { (PreEscaped(&page)) } }.into_string(),
        gap: gap_html(fe).into_string(),
        after: format!("{}</ul>", next_html(fe, &link).into_string()),
    };
    let data = fe.nav_js_data(&tags, &sequels)?;
    let class = if sequels.len() > 1 {
        "pagy-rjs pagy-bootstrap-nav-js"
    } else {
        "pagy-bootstrap-nav-js"
    };

    Ok(html! {
        nav id=[opts.pagy_id.as_deref()] class=(class) aria-label=(fe.nav_aria_label(opts)) data-pagy=(data) {}
    })
}

/// Bootstrap button group with a page-number input between prev and next.
pub fn combo_nav_js(fe: &Frontend, opts: &NavOptions) -> Result<Markup, PagyError> {
    let pagy = fe.pagy;
    let link = fe.link_builder(&opts.link_extra);
    let page = pagy.page.to_string();
    let pages = pagy.pages.to_string();

    let input = html! {
        input type="number" min="1" max=(pages) value=(page)
            style=(format!("padding: 0; border: none; text-align: center; width: {}rem;", pages.len() + 1))
            aria-current="page";
    }
    .into_string();
    let label = fe.locale.translate(
        "pagy.combo_nav_js",
        Some(pagy.page),
        &[("page_input", &input), ("pages", &pages)],
    );
    let data = fe.combo_data(&link)?;

    Ok(html! {
        nav id=[opts.pagy_id.as_deref()] class="pagy-bootstrap-combo-nav-js pagination" aria-label=(fe.nav_aria_label(opts)) {
            div class="btn-group" role="group" data-pagy=(data) {
                @if let Some(prev) = pagy.prev {
                    (PreEscaped(link.link(
                        &prev.to_string(),
                        &fe.t("pagy.nav.prev"),
                        &format!(r#"class="prev btn btn-primary" {}"#, fe.prev_aria_label()),
                    )))
                } @else {
                    a class="prev btn btn-primary disabled" href="#" aria-disabled="true" aria-label=(PreEscaped(fe.t("pagy.aria_label.prev"))) {
                        (PreEscaped(fe.t("pagy.nav.prev")))
                    }
                }
                div class="pagy-combo-input btn btn-secondary" style="white-space: nowrap;" {
                    (PreEscaped(label))
                }
                @if let Some(next) = pagy.next {
                    (PreEscaped(link.link(
                        &next.to_string(),
                        &fe.t("pagy.nav.next"),
                        &format!(r#"class="next btn btn-primary" {}"#, fe.next_aria_label()),
                    )))
                } @else {
                    a class="next btn btn-primary disabled" href="#" aria-disabled="true" aria-label=(PreEscaped(fe.t("pagy.aria_label.next"))) {
                        (PreEscaped(fe.t("pagy.nav.next")))
                    }
                }
            }
        }
    })
}

fn gap_html(fe: &Frontend) -> Markup {
    html! {
        li class="page-item gap disabled" {
            a href="#" class="page-link" aria-disabled="true" { (PreEscaped(fe.t("pagy.nav.gap"))) }
        }
    }
}

fn prev_html(fe: &Frontend, link: &LinkBuilder) -> Markup {
    let text = fe.t("pagy.nav.prev");
    html! {
        @if let Some(prev) = fe.pagy.prev {
            li class="page-item prev" {
                (PreEscaped(link.link(&prev.to_string(), &text, &fe.prev_aria_label())))
            }
        } @else {
            li class="page-item prev disabled" {
                a href="#" class="page-link" aria-disabled="true" aria-label=(PreEscaped(fe.t("pagy.aria_label.prev"))) {
                    (PreEscaped(&text))
                }
            }
        }
    }
}

fn next_html(fe: &Frontend, link: &LinkBuilder) -> Markup {
    let text = fe.t("pagy.nav.next");
    html! {
        @if let Some(next) = fe.pagy.next {
            li class="page-item next" {
                (PreEscaped(link.link(&next.to_string(), &text, &fe.next_aria_label())))
            }
        } @else {
            li class="page-item next disabled" {
                a href="#" class="page-link" aria-disabled="true" aria-label=(PreEscaped(fe.t("pagy.aria_label.next"))) {
                    (PreEscaped(&text))
                }
            }
        }
    }
}
