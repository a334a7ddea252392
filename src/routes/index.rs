use maud::html;
use pagy_nav::{Framework, NavKind};

use super::document::document;

pub fn index() -> rouille::Response {
    let doc = document(
        "Pagination preview",
        html! {
            h1 { "Pagination preview" }
            p { "Static, script-driven and combo navigation markup for a synthetic collection." }
            p {
                "Query parameters: " code { "page" } ", " code { "count" } " and " code { "locale" } "."
            }
            ul {
                @for framework in Framework::ALL {
                    li {
                        a href=(format!("/{}", framework.as_str())) { (framework.as_str()) }
                        " ("
                        @for (i, kind) in NavKind::ALL.iter().enumerate() {
                            @if i > 0 { ", " }
                            a href=(format!("/{}/{}", framework.as_str(), kind.as_str())) { (kind.as_str()) }
                        }
                        ")"
                    }
                }
            }
        },
        None,
    );

    rouille::Response::html(doc.into_string())
}
