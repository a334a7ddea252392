use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::pagy::Pagy;

const QUERY: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// The parts of the current request that page links are built from.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PageRequest {
    pub path: String,
    pub params: Vec<(String, String)>,
}

impl PageRequest {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            params: Vec::new(),
        }
    }

    /// Parses a raw, still percent-encoded query string such as `q=a+b&page=2`.
    pub fn from_query(path: impl Into<String>, query: &str) -> Self {
        let params = query
            .split('&')
            .filter(|pair| !pair.is_empty())
            .map(|pair| {
                let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
                (decode(key), decode(value))
            })
            .collect();
        Self {
            path: path.into(),
            params,
        }
    }

    pub fn with_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        set_param(&mut self.params, key.into(), value.into());
        self
    }
}

fn decode(raw: &str) -> String {
    let raw = raw.replace('+', " ");
    percent_decode_str(&raw).decode_utf8_lossy().into_owned()
}

fn set_param(params: &mut Vec<(String, String)>, key: String, value: String) {
    match params.iter_mut().find(|(k, _)| *k == key) {
        Some((_, v)) => *v = value,
        None => params.push((key, value)),
    }
}

/// URL of `page` for the current request. `page` may be a placeholder.
pub fn url_for(pagy: &Pagy, request: &PageRequest, page: &str) -> String {
    let vars = &pagy.vars;
    let mut params = request.params.clone();
    for (key, value) in &vars.params {
        set_param(&mut params, key.clone(), value.clone());
    }
    if vars.trim && page == "1" {
        params.retain(|(key, _)| *key != vars.page_param);
    } else {
        set_param(&mut params, vars.page_param.clone(), page.to_string());
    }

    let mut url = request.path.clone();
    for (i, (key, value)) in params.iter().enumerate() {
        url.push(if i == 0 { '?' } else { '&' });
        url.extend(utf8_percent_encode(key, QUERY));
        url.push('=');
        url.extend(utf8_percent_encode(value, QUERY));
    }
    url.push_str(&vars.fragment);
    url
}
