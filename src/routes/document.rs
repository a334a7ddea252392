use maud::html;

pub fn document(title: &str, content: maud::Markup, head: Option<maud::Markup>) -> maud::Markup {
    html! {
        (maud::DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                title { (title) }
                link rel="stylesheet" href="/main.css";
                meta name="viewport" content="width=device-width, initial-scale=1";
                @if let Some(head) = head { (head) }
            }
            body {
                main { (content) }
                footer {
                    div {
                        a href="/" { "Home" } " - " a href="/bootstrap" { "Bootstrap" } " - " a href="/foundation" { "Foundation" }
                    }
                }
            }
        }
    }
}

pub fn render_error(code: u16, message: &str) -> rouille::Response {
    let title = format!("{}", code);

    let doc = document(
        &title,
        html! {
            h1 { (&title) }
            p { (message) }
            p { a href="/" { "Go home" } }
        },
        None,
    );

    rouille::Response::html(doc.into_string()).with_status_code(code)
}
