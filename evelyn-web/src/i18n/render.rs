use crate::i18n::bundle::with_bundle;
use serde_json::Value;
use std::collections::BTreeMap;

fn get_nested_value<'a>(obj: &'a Value, key: &str) -> Option<&'a Value> {
    key.split('.').try_fold(obj, |current, k| current.get(k))
}

fn plural_category(lang: &str, count: f64) -> &'static str {
    #[cfg(target_arch = "wasm32")]
    {
        let locales = js_sys::Array::of1(&wasm_bindgen::JsValue::from_str(lang));
        let rules = js_sys::Intl::PluralRules::new(&locales, &js_sys::Object::new());
        match rules.select(count).as_string().as_deref() {
            Some("zero") => return "zero",
            Some("one") => return "one",
            Some("other") => return "other",
            _ => {}
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    let _ = lang;

    if count.abs() < f64::EPSILON {
        "zero"
    } else if (count - 1.0).abs() < f64::EPSILON {
        "one"
    } else {
        "other"
    }
}

fn render_value(value: &Value, lang: &str, args: Option<&BTreeMap<&str, &str>>) -> Option<String> {
    let mut text = match value {
        Value::String(s) => s.clone(),
        Value::Object(map) => {
            let count = args
                .and_then(|m| m.get("count"))
                .and_then(|c| c.parse::<f64>().ok())?;
            // Explicit zero wording wins even where CLDR folds zero into "other".
            let category = if count.abs() < f64::EPSILON && map.contains_key("zero") {
                "zero"
            } else {
                plural_category(lang, count)
            };
            map.get(category)
                .or_else(|| map.get("other"))
                .and_then(Value::as_str)?
                .to_string()
        }
        _ => return None,
    };

    if let Some(args_map) = args {
        for (k, v) in args_map {
            text = text.replace(&format!("{{{k}}}"), v);
        }
    }
    Some(text)
}

fn resolve(key: &str, args: Option<&BTreeMap<&str, &str>>) -> Option<String> {
    with_bundle(|bundle| {
        get_nested_value(&bundle.translations, key)
            .and_then(|v| render_value(v, &bundle.lang, args))
            .or_else(|| {
                get_nested_value(&bundle.fallback, key)
                    .and_then(|v| render_value(v, &bundle.lang, args))
            })
    })
}

/// Translate a key, falling back to English and then to the key itself.
#[must_use]
pub fn t(key: &str) -> String {
    tr(key, None)
}

/// Translate a key and substitute `{name}` placeholders.
#[must_use]
pub fn tr(key: &str, args: Option<&BTreeMap<&str, &str>>) -> String {
    resolve(key, args).unwrap_or_else(|| key.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plural_forms_pick_by_count() {
        let value: Value = serde_json::json!({
            "zero": "none",
            "one": "one badge",
            "other": "{count} badges"
        });
        let mut args = BTreeMap::new();
        args.insert("count", "1");
        assert_eq!(render_value(&value, "en", Some(&args)).unwrap(), "one badge");
        args.insert("count", "4");
        assert_eq!(render_value(&value, "en", Some(&args)).unwrap(), "4 badges");
        args.insert("count", "0");
        assert_eq!(render_value(&value, "en", Some(&args)).unwrap(), "none");
    }

    #[test]
    fn interpolation_replaces_every_placeholder() {
        let value = Value::String("Level {level} • XP {xp} ({xp})".into());
        let mut args = BTreeMap::new();
        args.insert("level", "2");
        args.insert("xp", "125");
        assert_eq!(
            render_value(&value, "en", Some(&args)).unwrap(),
            "Level 2 • XP 125 (125)"
        );
    }

    #[test]
    fn missing_key_echoes_key() {
        assert_eq!(t("nope.not.here"), "nope.not.here");
    }
}
