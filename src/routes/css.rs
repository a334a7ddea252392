const CSS: &[u8] = include_bytes!(concat!(env!("OUT_DIR"), "/main.css"));

/// Compiled from `sass/` at build time.
pub fn style_sheet() -> rouille::Response {
    rouille::Response::from_data("text/css; charset=utf-8", CSS)
        .with_unique_header("Cache-Control", "no-cache")
}
