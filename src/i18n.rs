//! Built-in navigation strings.
//!
//! Values are trusted HTML: they are spliced into markup without escaping.

use phf::phf_map;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Entry {
    Text(&'static str),
    Plural {
        one: &'static str,
        other: &'static str,
    },
}

static EN: phf::Map<&'static str, Entry> = phf_map! {
    "pagy.aria_label.nav" => Entry::Plural { one: "Page", other: "Pages" },
    "pagy.aria_label.prev" => Entry::Text("Previous"),
    "pagy.aria_label.next" => Entry::Text("Next"),
    "pagy.nav.prev" => Entry::Text("&lsaquo;&nbsp;Prev"),
    "pagy.nav.next" => Entry::Text("Next&nbsp;&rsaquo;"),
    "pagy.nav.gap" => Entry::Text("&hellip;"),
    "pagy.combo_nav_js" => Entry::Text("<label>Page %{page_input} of %{pages}</label>"),
};

static DE: phf::Map<&'static str, Entry> = phf_map! {
    "pagy.aria_label.nav" => Entry::Plural { one: "Seite", other: "Seiten" },
    "pagy.aria_label.prev" => Entry::Text("Zurück"),
    "pagy.aria_label.next" => Entry::Text("Weiter"),
    "pagy.nav.prev" => Entry::Text("&lsaquo;&nbsp;Zurück"),
    "pagy.nav.next" => Entry::Text("Weiter&nbsp;&rsaquo;"),
    "pagy.nav.gap" => Entry::Text("&hellip;"),
    "pagy.combo_nav_js" => Entry::Text("<label>Seite %{page_input} von %{pages}</label>"),
};

static LOCALES: phf::Map<&'static str, &'static phf::Map<&'static str, Entry>> = phf_map! {
    "en" => &EN,
    "de" => &DE,
};

#[derive(Clone, Copy)]
pub struct Locale {
    code: &'static str,
    entries: &'static phf::Map<&'static str, Entry>,
}

impl Locale {
    /// Dictionary for `code`, falling back to `en`.
    pub fn get(code: &str) -> Self {
        match LOCALES.get_entry(code) {
            Some((code, entries)) => Self {
                code: *code,
                entries: *entries,
            },
            None => {
                tracing::warn!(locale = code, "unknown locale, falling back to en");
                Self::default()
            }
        }
    }

    pub fn code(&self) -> &'static str {
        self.code
    }

    pub fn t(&self, key: &str) -> String {
        self.translate(key, None, &[])
    }

    /// Looks up `key`, picks the plural form for `count` and fills `%{name}` placeholders.
    pub fn translate(&self, key: &str, count: Option<u64>, vars: &[(&str, &str)]) -> String {
        let template = match self.entries.get(key) {
            Some(Entry::Text(text)) => *text,
            Some(Entry::Plural { one, other }) => match count {
                Some(1) => *one,
                _ => *other,
            },
            None => return format!("[translation missing: {key}]"),
        };
        if !template.contains("%{") {
            return template.to_string();
        }

        let count = count.map(|count| count.to_string());
        let mut out = String::with_capacity(template.len());
        let mut rest = template;
        while let Some(start) = rest.find("%{") {
            out.push_str(&rest[..start]);
            let after = &rest[start + 2..];
            let Some(end) = after.find('}') else {
                rest = &rest[start..];
                break;
            };
            let name = &after[..end];
            let value = vars
                .iter()
                .find(|(var, _)| *var == name)
                .map(|(_, value)| *value)
                .or(count.as_deref().filter(|_| name == "count"));
            match value {
                Some(value) => out.push_str(value),
                None => out.push_str(&rest[start..start + end + 3]),
            }
            rest = &after[end + 1..];
        }
        out.push_str(rest);
        out
    }
}

impl Default for Locale {
    fn default() -> Self {
        Self {
            code: "en",
            entries: &EN,
        }
    }
}

impl std::fmt::Debug for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Locale").field(&self.code).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Some(1), "Page")]
    #[case(Some(0), "Pages")]
    #[case(Some(12), "Pages")]
    #[case(None, "Pages")]
    fn pluralizes_by_count(#[case] count: Option<u64>, #[case] expected: &str) {
        let en = Locale::default();
        assert_eq!(en.translate("pagy.aria_label.nav", count, &[]), expected);
    }

    #[rstest]
    fn interpolates_named_values() {
        let en = Locale::get("en");
        let label = en.translate(
            "pagy.combo_nav_js",
            Some(3),
            &[("page_input", "<input>"), ("pages", "7")],
        );
        assert_eq!(label, "<label>Page <input> of 7</label>");
    }

    #[rstest]
    fn keeps_unknown_placeholders() {
        let en = Locale::default();
        let label = en.translate("pagy.combo_nav_js", None, &[("pages", "7")]);
        assert_eq!(label, "<label>Page %{page_input} of 7</label>");
    }

    #[rstest]
    fn missing_key_is_visible() {
        assert_eq!(
            Locale::default().t("pagy.nope"),
            "[translation missing: pagy.nope]"
        );
    }

    #[rstest]
    fn unknown_locale_falls_back_to_en() {
        let locale = Locale::get("xx");
        assert_eq!(locale.code(), "en");
        assert_eq!(locale.t("pagy.aria_label.prev"), "Previous");
    }

    #[rstest]
    fn german_strings() {
        let de = Locale::get("de");
        assert_eq!(de.code(), "de");
        assert_eq!(de.translate("pagy.aria_label.nav", Some(1), &[]), "Seite");
        assert_eq!(de.t("pagy.nav.next"), "Weiter&nbsp;&rsaquo;");
    }
}
