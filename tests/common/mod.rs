#![allow(dead_code)]

use base64::{engine::general_purpose::STANDARD, Engine as _};
use pagy_nav::{PageRequest, Pagy, Vars};

/// 10 pages of 20 items with one page of context on every side.
pub fn pagy(page: u64) -> Pagy {
    pagy_with(page, Vars::default())
}

pub fn pagy_with(page: u64, vars: Vars) -> Pagy {
    let vars = Vars {
        size: [1, 1, 1, 1],
        ..vars
    };
    Pagy::new(200, page, vars).unwrap()
}

pub fn request() -> PageRequest {
    PageRequest::new("/items")
}

/// Decoded JSON of the first `data-pagy` attribute in `html`.
pub fn data_pagy(html: &str) -> serde_json::Value {
    let start = html.find(r#"data-pagy=""#).expect("no data-pagy attribute") + 11;
    let end = start + html[start..].find('"').unwrap();
    let json = STANDARD.decode(&html[start..end]).unwrap();
    serde_json::from_slice(&json).unwrap()
}

pub fn encode(value: serde_json::Value) -> String {
    STANDARD.encode(serde_json::to_string(&value).unwrap())
}
