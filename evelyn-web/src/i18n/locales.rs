use serde_json::Value;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct LocaleMeta {
    pub code: &'static str,
    pub name: &'static str,
}

pub const LOCALE_META: &[LocaleMeta] = &[
    LocaleMeta {
        code: "en",
        name: "English",
    },
    LocaleMeta {
        code: "fr",
        name: "Français",
    },
];

const LOCALE_TABLE: &[(&str, &str)] = &[
    ("en", include_str!("../../i18n/en.json")),
    ("fr", include_str!("../../i18n/fr.json")),
];

/// Supported UI locales.
#[must_use]
pub const fn locales() -> &'static [LocaleMeta] {
    LOCALE_META
}

/// Parsed translations for `lang`, English when the code is unknown.
pub fn load_translations(lang: &str) -> Option<Value> {
    let bundle = LOCALE_TABLE
        .iter()
        .find_map(|(code, data)| (*code == lang).then_some(*data))
        .unwrap_or(LOCALE_TABLE[0].1);

    serde_json::from_str(bundle).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leaf_keys(value: &Value, prefix: &str, out: &mut Vec<String>) {
        match value {
            Value::Object(map) if !map.keys().any(|k| k == "one" || k == "other") => {
                for (k, v) in map {
                    let key = if prefix.is_empty() {
                        k.clone()
                    } else {
                        format!("{prefix}.{k}")
                    };
                    leaf_keys(v, &key, out);
                }
            }
            _ => out.push(prefix.to_string()),
        }
    }

    #[test]
    fn every_locale_parses_and_matches_english_keys() {
        let mut english = Vec::new();
        leaf_keys(&load_translations("en").unwrap(), "", &mut english);
        for meta in locales() {
            let mut keys = Vec::new();
            leaf_keys(&load_translations(meta.code).unwrap(), "", &mut keys);
            assert_eq!(keys, english, "locale {} is missing keys", meta.code);
        }
    }

    #[test]
    fn unknown_locale_falls_back_to_english() {
        let value = load_translations("xx").unwrap();
        assert_eq!(value["home"]["start"], "Start Mission");
    }
}
