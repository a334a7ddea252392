#[macro_export]
macro_rules! get_param_or_str {
    ($request:expr, $name:expr, $default:expr) => {{
        let option = $request.get_param($name);
        match option {
            Some(value) => std::borrow::Cow::from(value),
            None => std::borrow::Cow::from($default),
        }
    }};
}

/// Unparsable values fall back to the default; range checks are left to `Pagy::new`.
#[macro_export]
macro_rules! get_param_or_num {
    ($request:expr, $name:expr, $default:expr) => {{
        let option = $request.get_param($name);
        match option {
            Some(value) => value.parse::<u64>().unwrap_or($default),
            None => $default,
        }
    }};
}
