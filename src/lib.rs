//! Bootstrap and Foundation pagination markup.
//!
//! ```
//! use pagy_nav::{render::bootstrap, Frontend, NavOptions, PageRequest, Pagy, Vars};
//!
//! let pagy = Pagy::new(1000, 9, Vars::default()).unwrap();
//! let request = PageRequest::from_query("/items", "q=shoes");
//! let html = bootstrap::nav(&Frontend::new(&pagy, &request), &NavOptions::default()).unwrap();
//! assert!(html.into_string().starts_with(r#"<nav class="pagy-bootstrap-nav" aria-label="Pages">"#));
//! ```

pub mod config;
pub mod error;
pub mod frontend;
pub mod i18n;
pub mod pagy;
pub mod render;
pub mod url;

pub use error::PagyError;
pub use frontend::{Frontend, NavOptions};
pub use i18n::Locale;
pub use pagy::{Overflow, Pagy, SeriesItem, Step, Vars};
pub use render::{Framework, NavKind};
pub use url::PageRequest;
