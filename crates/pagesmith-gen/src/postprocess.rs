//! Normalize generated data: rewrite image and icon string leaves into
//! canonical forms while leaving the structure untouched.

use serde_json::{json, Map, Value};

const IMAGE_KEYS: &[&str] = &["image", "img", "photo", "picture", "thumbnail"];
const ICON_KEYS: &[&str] = &["icon", "svg", "logo"];

/// Generic values whose slug is taken from the key name instead.
const PLACEHOLDER_VALUES: &[&str] = &["image", "placeholder", "photo"];

const ICON_PACKAGES: &[(&str, &str)] = &[
    ("Fa", "react-icons/fa"),
    ("Md", "react-icons/md"),
    ("Io", "react-icons/io"),
    ("Bi", "react-icons/bi"),
    ("Fi", "react-icons/fi"),
];
const DEFAULT_ICON_PACKAGE: &str = "react-icons/fa";

/// Recursively rewrite image and icon string leaves. Shape-preserving and
/// idempotent; every other value passes through unchanged.
pub fn process(value: &Value) -> Value {
    match value {
        Value::Object(map) => {
            let mut out = Map::with_capacity(map.len());
            for (key, val) in map {
                let processed = process(val);
                out.insert(key.clone(), rewrite_leaf(key, processed));
            }
            Value::Object(out)
        }
        Value::Array(items) => Value::Array(items.iter().map(process).collect()),
        other => other.clone(),
    }
}

/// Image keys win over icon keys when a key matches both ("logoImage").
fn rewrite_leaf(key: &str, value: Value) -> Value {
    let Value::String(s) = &value else {
        return value;
    };
    let key_lower = key.to_lowercase();
    if IMAGE_KEYS.iter().any(|k| key_lower.contains(k)) {
        if !s.starts_with("http") {
            return Value::String(stock_photo_url(s, key));
        }
    } else if ICON_KEYS.iter().any(|k| key_lower.contains(k)) {
        if !s.starts_with("http") {
            return icon_value(s);
        }
    }
    value
}

fn stock_photo_url(value: &str, key: &str) -> String {
    let mut slug = value.replace(' ', "-").to_lowercase();
    if PLACEHOLDER_VALUES.contains(&value) && !key.is_empty() {
        slug = key.to_lowercase();
    }
    format!("https://source.unsplash.com/random?{slug}")
}

fn icon_value(value: &str) -> Value {
    let trimmed = value.trim();
    let name = if trimmed.chars().next().is_some_and(char::is_uppercase) {
        trimmed.to_string()
    } else {
        format!("Fa{}", capitalize(trimmed))
    };
    let package = ICON_PACKAGES
        .iter()
        .find(|entry| name.starts_with(entry.0))
        .map(|entry| entry.1)
        .unwrap_or(DEFAULT_ICON_PACKAGE);
    json!({ "package": package, "name": name })
}

/// Uppercase the first character, lowercase the rest.
pub(crate) fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rewrites_image_placeholder_from_key() {
        let input = json!({ "heroImage": "placeholder", "ctaIcon": "arrow", "title": "Go" });
        let output = process(&input);
        assert_eq!(
            output["heroImage"],
            "https://source.unsplash.com/random?heroimage"
        );
        assert_eq!(output["ctaIcon"]["package"], "react-icons/fa");
        assert_eq!(output["ctaIcon"]["name"], "FaArrow");
        assert_eq!(output["title"], "Go");
    }

    #[test]
    fn slugifies_descriptive_image_values() {
        let input = json!({ "teamPhoto": "Team Working Together" });
        let output = process(&input);
        assert_eq!(
            output["teamPhoto"],
            "https://source.unsplash.com/random?team-working-together"
        );
    }

    #[test]
    fn keeps_existing_urls() {
        let input = json!({
            "image": "https://source.unsplash.com/random?office",
            "logo": "http://example.com/logo.svg"
        });
        assert_eq!(process(&input), input);
    }

    #[test]
    fn image_keys_win_over_icon_keys() {
        let output = process(&json!({ "logoImage": "brand" }));
        assert_eq!(
            output["logoImage"],
            "https://source.unsplash.com/random?brand"
        );
    }

    #[test]
    fn icon_prefix_selects_package() {
        let output = process(&json!({ "icon": "MdHome", "menuIcon": "BiMenu" }));
        assert_eq!(output["icon"]["package"], "react-icons/md");
        assert_eq!(output["icon"]["name"], "MdHome");
        assert_eq!(output["menuIcon"]["package"], "react-icons/bi");
    }

    #[test]
    fn structured_icons_pass_through() {
        let input = json!({ "icon": { "package": "react-icons/io", "name": "IoMdStar" } });
        assert_eq!(process(&input), input);
    }

    #[test]
    fn preserves_shape_at_every_level() {
        let input = json!({
            "sections": [
                { "heading": "One", "cardImage": "mountains", "items": [1, 2, 3] },
                { "heading": "Two", "badgeIcon": "check", "nested": { "photo": "lake view" } }
            ],
            "count": 2,
            "enabled": true,
            "missing": null
        });
        let output = process(&input);
        assert_shape_eq(&input, &output);
        assert_eq!(output["count"], 2);
        assert_eq!(output["enabled"], true);
        assert_eq!(output["missing"], Value::Null);
    }

    #[test]
    fn processing_is_idempotent() {
        let input = json!({
            "heroImage": "placeholder",
            "ctaIcon": "arrow",
            "gallery": [ { "thumbnail": "city at night" }, { "thumbnail": "forest" } ]
        });
        let once = process(&input);
        let twice = process(&once);
        assert_eq!(once, twice);
    }

    fn assert_shape_eq(a: &Value, b: &Value) {
        match (a, b) {
            (Value::Object(ma), Value::Object(mb)) => {
                let keys_a: Vec<&String> = ma.keys().collect();
                let keys_b: Vec<&String> = mb.keys().collect();
                assert_eq!(keys_a, keys_b);
                for key in ma.keys() {
                    assert_shape_eq(&ma[key], &mb[key]);
                }
            }
            (Value::Array(va), Value::Array(vb)) => {
                assert_eq!(va.len(), vb.len());
                for (x, y) in va.iter().zip(vb) {
                    assert_shape_eq(x, y);
                }
            }
            _ => {}
        }
    }
}
