mod common;

use pagy_nav::{render::foundation, Frontend, NavOptions, Overflow, Step, Vars};
use rstest::rstest;
use serde_json::json;

use common::{data_pagy, encode, pagy, pagy_with, request};

const GAP: &str = r#"<li class="ellipsis gap"></li>"#;

#[rstest]
fn nav_first_page() {
    let pagy = pagy(1);
    let request = request();
    let html = foundation::nav(&Frontend::new(&pagy, &request), &NavOptions::default())
        .unwrap()
        .into_string();

    let expected = [
        r#"<nav class="pagy-foundation-nav" aria-label="Pages"><ul class="pagination">"#,
        r#"<li class="prev disabled" role="link" aria-disabled="true" aria-label="Previous">&lsaquo;&nbsp;Prev</li>"#,
        r#"<li class="current" role="link" aria-current="page" aria-disabled="true">1</li>"#,
        r#"<li><a href="/items?page=2" rel="next">2</a></li>"#,
        GAP,
        r#"<li><a href="/items?page=10">10</a></li>"#,
        r#"<li class="next"><a href="/items?page=2" rel="next" aria-label="Next">Next&nbsp;&rsaquo;</a></li>"#,
        "</ul></nav>",
    ]
    .concat();
    assert_eq!(html, expected);
}

#[rstest]
fn nav_middle_page_with_gaps() {
    let pagy = pagy(5);
    let request = request();
    let opts = NavOptions {
        pagy_id: Some("results".to_string()),
        page_label: Some("Results".to_string()),
        ..NavOptions::default()
    };
    let html = foundation::nav(&Frontend::new(&pagy, &request), &opts)
        .unwrap()
        .into_string();

    let expected = [
        r#"<nav id="results" class="pagy-foundation-nav" aria-label="Results"><ul class="pagination">"#,
        r#"<li class="prev"><a href="/items?page=4" rel="prev" aria-label="Previous">&lsaquo;&nbsp;Prev</a></li>"#,
        r#"<li><a href="/items?page=1">1</a></li>"#,
        GAP,
        r#"<li><a href="/items?page=4" rel="prev">4</a></li>"#,
        r#"<li class="current" role="link" aria-current="page" aria-disabled="true">5</li>"#,
        r#"<li><a href="/items?page=6" rel="next">6</a></li>"#,
        GAP,
        r#"<li><a href="/items?page=10">10</a></li>"#,
        r#"<li class="next"><a href="/items?page=6" rel="next" aria-label="Next">Next&nbsp;&rsaquo;</a></li>"#,
        "</ul></nav>",
    ]
    .concat();
    assert_eq!(html, expected);
}

#[rstest]
fn nav_last_page() {
    let pagy = pagy(10);
    let request = request();
    let html = foundation::nav(&Frontend::new(&pagy, &request), &NavOptions::default())
        .unwrap()
        .into_string();

    let expected = [
        r#"<nav class="pagy-foundation-nav" aria-label="Pages"><ul class="pagination">"#,
        r#"<li class="prev"><a href="/items?page=9" rel="prev" aria-label="Previous">&lsaquo;&nbsp;Prev</a></li>"#,
        r#"<li><a href="/items?page=1">1</a></li>"#,
        GAP,
        r#"<li><a href="/items?page=9" rel="prev">9</a></li>"#,
        r#"<li class="current" role="link" aria-current="page" aria-disabled="true">10</li>"#,
        r#"<li class="next disabled" role="link" aria-disabled="true" aria-label="Next">Next&nbsp;&rsaquo;</li>"#,
        "</ul></nav>",
    ]
    .concat();
    assert_eq!(html, expected);
}

#[rstest]
fn nav_size_override() {
    let pagy = pagy(5);
    let request = request();
    let opts = NavOptions {
        size: Some([0, 0, 0, 0]),
        ..NavOptions::default()
    };
    let html = foundation::nav(&Frontend::new(&pagy, &request), &opts)
        .unwrap()
        .into_string();

    let current = r#"<li class="current" role="link" aria-current="page" aria-disabled="true">5</li>"#;
    assert!(html.contains(&format!("</li>{GAP}{current}{GAP}<li class=\"next\">")));
}

#[rstest]
fn nav_empty_page_overflow_links_last_window() {
    let vars = Vars {
        overflow: Overflow::EmptyPage,
        ..Vars::default()
    };
    let pagy = pagy_with(12, vars);
    let request = request();
    let html = foundation::nav(&Frontend::new(&pagy, &request), &NavOptions::default())
        .unwrap()
        .into_string();

    let expected = [
        r#"<nav class="pagy-foundation-nav" aria-label="Pages"><ul class="pagination">"#,
        r#"<li class="prev"><a href="/items?page=10" rel="prev" aria-label="Previous">&lsaquo;&nbsp;Prev</a></li>"#,
        r#"<li><a href="/items?page=1">1</a></li>"#,
        GAP,
        r#"<li><a href="/items?page=9">9</a></li>"#,
        r#"<li><a href="/items?page=10" rel="prev">10</a></li>"#,
        r#"<li class="next disabled" role="link" aria-disabled="true" aria-label="Next">Next&nbsp;&rsaquo;</li>"#,
        "</ul></nav>",
    ]
    .concat();
    assert_eq!(html, expected);
}

#[rstest]
fn nav_js_payload() {
    let pagy = pagy(10);
    let request = request();
    let html = foundation::nav_js(&Frontend::new(&pagy, &request), &NavOptions::default())
        .unwrap()
        .into_string();

    assert!(html.starts_with(r#"<nav class="pagy-foundation-nav-js" aria-label="Pages" data-pagy=""#));
    assert_eq!(
        data_pagy(&html),
        json!([
            "nav",
            {
                "before": r#"<ul class="pagination"><li class="prev"><a href="/items?page=9" rel="prev" aria-label="Previous">&lsaquo;&nbsp;Prev</a></li>"#,
                "link": r#"<li><a href="/items?page=__pagy_page__">__pagy_label__</a></li>"#,
                "active": r#"<li class="current" role="link" aria-current="page" aria-disabled="true">__pagy_label__</li>"#,
                "gap": GAP,
                "after": r#"<li class="next disabled" role="link" aria-disabled="true" aria-label="Next">Next&nbsp;&rsaquo;</li></ul>"#,
            },
            { "0": [1, "gap", 9, "10"] },
            null
        ])
    );
}

#[rstest]
fn nav_cycle_links_first_page_as_next() {
    let vars = Vars {
        cycle: true,
        ..Vars::default()
    };
    let pagy = pagy_with(10, vars);
    let request = request();
    let html = foundation::nav(&Frontend::new(&pagy, &request), &NavOptions::default())
        .unwrap()
        .into_string();

    let expected = [
        r#"<nav class="pagy-foundation-nav" aria-label="Pages"><ul class="pagination">"#,
        r#"<li class="prev"><a href="/items?page=9" rel="prev" aria-label="Previous">&lsaquo;&nbsp;Prev</a></li>"#,
        r#"<li><a href="/items?page=1" rel="next">1</a></li>"#,
        GAP,
        r#"<li><a href="/items?page=9" rel="prev">9</a></li>"#,
        r#"<li class="current" role="link" aria-current="page" aria-disabled="true">10</li>"#,
        r#"<li class="next"><a href="/items?page=1" rel="next" aria-label="Next">Next&nbsp;&rsaquo;</a></li>"#,
        "</ul></nav>",
    ]
    .concat();
    assert_eq!(html, expected);
}

#[rstest]
fn nav_js_with_steps_is_responsive() {
    let pagy = pagy(5);
    let request = request();
    let opts = NavOptions {
        steps: Some(vec![
            Step {
                width: 0,
                size: [0, 0, 0, 0],
            },
            Step {
                width: 540,
                size: [1, 1, 1, 1],
            },
        ]),
        ..NavOptions::default()
    };
    let html = foundation::nav_js(&Frontend::new(&pagy, &request), &opts)
        .unwrap()
        .into_string();

    assert!(html.starts_with(r#"<nav class="pagy-rjs pagy-foundation-nav-js" aria-label="Pages" data-pagy=""#));
    let data = data_pagy(&html);
    assert_eq!(
        data[2],
        json!({
            "0": ["gap", "5", "gap"],
            "540": [1, "gap", 4, "5", 6, "gap", 10],
        })
    );
    assert_eq!(
        data[1]["active"],
        json!(r#"<li class="current" role="link" aria-current="page" aria-disabled="true">__pagy_label__</li>"#)
    );
}

#[rstest]
fn combo_nav_js_last_page() {
    let pagy = pagy(10);
    let request = request();
    let opts = NavOptions {
        pagy_id: Some("combo".to_string()),
        ..NavOptions::default()
    };
    let html = foundation::combo_nav_js(&Frontend::new(&pagy, &request), &opts)
        .unwrap()
        .into_string();

    let data = encode(json!([
        "combo",
        r#"<a href="/items?page=__pagy_page__" style="display: none;"></a>"#
    ]));
    let input = r#"<input class="input-group-field cell shrink" type="number" min="1" max="10" value="10" style="width: 3rem; padding: 0 0.3rem; margin: 0 0.3rem;" aria-current="page">"#;
    let expected = [
        r#"<nav id="combo" class="pagy-foundation-combo-nav-js" aria-label="Pages">"#,
        &format!(r#"<div class="input-group" data-pagy="{data}">"#),
        r#"<a href="/items?page=9" rel="prev" style="margin-bottom: 0" class="prev button primary" aria-label="Previous">&lsaquo;&nbsp;Prev</a>"#,
        &format!(r#"<label class="input-group-label">Page {input} of 10</label>"#),
        r#"<a style="margin-bottom: 0" class="next button primary disabled" role="link" aria-disabled="true" aria-label="Next">Next&nbsp;&rsaquo;</a>"#,
        "</div></nav>",
    ]
    .concat();
    assert_eq!(html, expected);
}

#[rstest]
fn combo_nav_js_first_page_disables_prev() {
    let pagy = pagy(1);
    let request = request();
    let html = foundation::combo_nav_js(&Frontend::new(&pagy, &request), &NavOptions::default())
        .unwrap()
        .into_string();

    assert!(html.contains(r#"<a style="margin-bottom: 0" class="prev button primary disabled" role="link" aria-disabled="true" aria-label="Previous">&lsaquo;&nbsp;Prev</a>"#));
    assert!(html.contains(r#"<a href="/items?page=2" rel="next" style="margin-bottom: 0" class="next button primary" aria-label="Next">"#));
    assert_eq!(data_pagy(&html)[0], json!("combo"));
}
