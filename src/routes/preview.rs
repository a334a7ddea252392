use std::str::FromStr;

use maud::html;
use pagy_nav::{
    config::Settings, Frontend, Framework, Locale, NavKind, NavOptions, PageRequest, Pagy,
    PagyError,
};

use super::document::{document, render_error};
use crate::{get_param_or_num, get_param_or_str};

struct Preview {
    pagy: Pagy,
    request: PageRequest,
    locale: Locale,
}

impl Preview {
    fn load(settings: &Settings, request: &rouille::Request) -> Result<Self, PagyError> {
        let vars = settings.vars.clone();
        let page = get_param_or_num!(request, &vars.page_param, 1);
        let count = get_param_or_num!(request, "count", settings.count);
        let locale = get_param_or_str!(request, "locale", settings.locale.as_str());

        Ok(Self {
            pagy: Pagy::new(count, page, vars)?,
            request: page_request(request),
            locale: Locale::get(&locale),
        })
    }

    fn frontend(&self) -> Frontend<'_> {
        Frontend::new(&self.pagy, &self.request).with_locale(self.locale)
    }
}

/// Keeps the path percent-encoded so it can be copied into page links as is.
fn page_request(request: &rouille::Request) -> PageRequest {
    let raw = request.raw_url();
    let path = raw.split_once('?').map_or(raw, |(path, _)| path);
    PageRequest::from_query(path, request.raw_query_string())
}

fn options(framework: Framework, kind: NavKind) -> NavOptions {
    NavOptions {
        pagy_id: Some(format!("{framework}-{kind}")),
        ..NavOptions::default()
    }
}

fn render_pagy_error(err: &PagyError) -> rouille::Response {
    tracing::warn!(error = %err, "could not render pagination");
    render_error(err.status_code(), &err.to_string())
}

/// Full page with every nav kind of one framework.
pub fn page(settings: &Settings, request: &rouille::Request, framework: &str) -> rouille::Response {
    let Ok(framework) = Framework::from_str(framework) else {
        return rouille::Response::empty_404();
    };
    let preview = match Preview::load(settings, request) {
        Ok(preview) => preview,
        Err(err) => return render_pagy_error(&err),
    };
    let fe = preview.frontend();

    let mut navs = Vec::with_capacity(NavKind::ALL.len());
    for kind in NavKind::ALL {
        match framework.render(kind, &fe, &options(framework, kind)) {
            Ok(markup) => navs.push((kind, markup)),
            Err(err) => return render_pagy_error(&err),
        }
    }

    let pagy = &preview.pagy;
    let title = format!("{} pagination", framework.as_str());
    let doc = document(
        &title,
        html! {
            h1 { (&title) }
            p {
                "Items " (pagy.from) "-" (pagy.to) " of " (pagy.count)
                ", page " (pagy.page) " of " (pagy.pages)
                @if pagy.overflow { " (overflow)" }
            }
            @for (kind, markup) in &navs {
                section class=(format!("preview {}", framework.as_str())) {
                    h2 { (kind.as_str()) }
                    (markup)
                    details {
                        summary { "Markup" }
                        pre { code { (&markup.0) } }
                    }
                }
            }
        },
        Some(html! {
            meta name="description" content=(format!("{} pagination markup preview", framework.as_str()));
        }),
    );

    rouille::Response::html(doc.into_string())
}

/// Bare nav markup, for embedding or diffing.
pub fn fragment(
    settings: &Settings,
    request: &rouille::Request,
    framework: &str,
    kind: &str,
) -> rouille::Response {
    let (Ok(framework), Ok(kind)) = (Framework::from_str(framework), NavKind::from_str(kind)) else {
        return rouille::Response::empty_404();
    };
    let preview = match Preview::load(settings, request) {
        Ok(preview) => preview,
        Err(err) => return render_pagy_error(&err),
    };

    match framework.render(kind, &preview.frontend(), &options(framework, kind)) {
        Ok(markup) => rouille::Response::html(markup.into_string()),
        Err(err) => render_pagy_error(&err),
    }
}
