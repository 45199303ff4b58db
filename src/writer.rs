// JSON serializer
// Depth-first walk over a JsonValue tree, appending compact JSON text.

use crate::value::{JsonValue, Scalar};

/// Output options for [`stringify_with`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WriteOptions {
    /// Emit booleans as the integers `1`/`0` instead of the literals
    /// `true`/`false`, byte-compatible with data written by emitters that
    /// store booleans as integers.
    pub booleans_as_integers: bool,
}

impl WriteOptions {
    pub const fn new() -> Self {
        Self {
            booleans_as_integers: false,
        }
    }

    /// Options matching the legacy integer-boolean encoding.
    pub const fn legacy() -> Self {
        Self {
            booleans_as_integers: true,
        }
    }
}

impl Default for WriteOptions {
    fn default() -> Self {
        Self::new()
    }
}

/// Serialize a value tree to compact JSON text. Total over any tree; never
/// fails.
pub fn stringify(value: &JsonValue) -> String {
    stringify_with(value, &WriteOptions::new())
}

/// Serialize with explicit output options.
pub fn stringify_with(value: &JsonValue, options: &WriteOptions) -> String {
    let mut out = String::new();
    write_value(value, options, &mut out);
    out
}

fn write_value(value: &JsonValue, options: &WriteOptions, out: &mut String) {
    match value {
        JsonValue::Null => out.push_str("null"),
        JsonValue::Object(map) => {
            out.push('{');
            for (idx, (key, child)) in map.iter().enumerate() {
                if idx > 0 {
                    out.push(',');
                }
                write_string(key, out);
                out.push(':');
                write_value(child, options, out);
            }
            out.push('}');
        }
        JsonValue::Array(items) => {
            out.push('[');
            for (idx, child) in items.iter().enumerate() {
                if idx > 0 {
                    out.push(',');
                }
                write_value(child, options, out);
            }
            out.push(']');
        }
        JsonValue::String(s) => write_string(s, out),
        JsonValue::Scalar(scalar) => write_scalar(scalar, options, out),
    }
}

/// Emit a double-quoted string. Only `" \ \b \f \n \r \t` are escaped;
/// every other character — non-ASCII included — is emitted verbatim. This is
/// asymmetric with the parser, which also decodes `\uXXXX` on input.
fn write_string(value: &str, out: &mut String) {
    out.push('"');
    for ch in value.chars() {
        match ch {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\u{0008}' => out.push_str("\\b"),
            '\u{000C}' => out.push_str("\\f"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            _ => out.push(ch),
        }
    }
    out.push('"');
}

fn write_scalar(scalar: &Scalar, options: &WriteOptions, out: &mut String) {
    match scalar {
        Scalar::Bool(v) => {
            if options.booleans_as_integers {
                out.push_str(if *v { "1" } else { "0" });
            } else {
                out.push_str(if *v { "true" } else { "false" });
            }
        }
        Scalar::Int(v) => out.push_str(&v.to_string()),
        Scalar::Long(v) => out.push_str(&v.to_string()),
        Scalar::Double(v) => write_double(*v, out),
    }
}

/// Emit a double in its shortest round-trip form, keeping a `.0` suffix when
/// the form would otherwise read back as an integer. Non-finite values have
/// no JSON representation and emit `null`.
fn write_double(value: f64, out: &mut String) {
    if !value.is_finite() {
        out.push_str("null");
        return;
    }
    let text = value.to_string();
    out.push_str(&text);
    if !text.contains(['.', 'e', 'E']) {
        out.push_str(".0");
    }
}

// ── Tests ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::jval;

    #[test]
    fn test_write_null() {
        assert_eq!(stringify(&JsonValue::Null), "null");
        assert_eq!(stringify(&JsonValue::new()), "null");
    }

    #[test]
    fn test_write_booleans() {
        assert_eq!(stringify(&jval!(true)), "true");
        assert_eq!(stringify(&jval!(false)), "false");
    }

    #[test]
    fn test_legacy_boolean_mode() {
        let opts = WriteOptions::legacy();
        assert_eq!(stringify_with(&jval!(true), &opts), "1");
        assert_eq!(stringify_with(&jval!(false), &opts), "0");
        assert_eq!(
            stringify_with(&jval!({"ok": true}), &opts),
            r#"{"ok":1}"#
        );
    }

    #[test]
    fn test_write_integers() {
        assert_eq!(stringify(&JsonValue::from(0i32)), "0");
        assert_eq!(stringify(&JsonValue::from(-123i32)), "-123");
        assert_eq!(stringify(&JsonValue::from(42i64)), "42");
        assert_eq!(
            stringify(&JsonValue::from(9007199254740993i64)),
            "9007199254740993"
        );
    }

    #[test]
    fn test_write_doubles() {
        assert_eq!(stringify(&JsonValue::from(3.14)), "3.14");
        // Whole doubles keep a decimal point so they reparse as doubles.
        assert_eq!(stringify(&JsonValue::from(42.0)), "42.0");
        assert_eq!(stringify(&JsonValue::from(-314.0)), "-314.0");
        // Non-finite values have no JSON form.
        assert_eq!(stringify(&JsonValue::from(f64::NAN)), "null");
        assert_eq!(stringify(&JsonValue::from(f64::INFINITY)), "null");
    }

    #[test]
    fn test_write_string_escapes() {
        assert_eq!(stringify(&jval!("hello")), r#""hello""#);
        assert_eq!(stringify(&jval!("a\nb\tc")), r#""a\nb\tc""#);
        assert_eq!(stringify(&jval!("q\"s\\b")), r#""q\"s\\b""#);
        assert_eq!(
            stringify(&jval!("\u{0008}\u{000C}\r")),
            r#""\b\f\r""#
        );
    }

    #[test]
    fn test_non_ascii_emitted_verbatim() {
        // No \uXXXX output escaping: decoded characters pass through.
        assert_eq!(stringify(&jval!("café")), r#""café""#);
        assert_eq!(stringify(&jval!("日本語")), r#""日本語""#);
    }

    #[test]
    fn test_write_empty_containers() {
        assert_eq!(stringify(&JsonValue::object()), "{}");
        assert_eq!(stringify(&JsonValue::array()), "[]");
    }

    #[test]
    fn test_write_array() {
        let v = jval!([1i64, 2i64, 3i64]);
        assert_eq!(stringify(&v), "[1,2,3]");
    }

    #[test]
    fn test_write_object_in_insertion_order() {
        let mut v = JsonValue::new();
        v.insert("z", 1i64).unwrap();
        v.insert("a", 2i64).unwrap();
        v.insert("m", 3i64).unwrap();
        assert_eq!(stringify(&v), r#"{"z":1,"a":2,"m":3}"#);
    }

    #[test]
    fn test_write_nested() {
        let v = jval!({"arr": [1i64, {"nested": true}], "s": "x"});
        assert_eq!(stringify(&v), r#"{"arr":[1,{"nested":true}],"s":"x"}"#);
    }

    #[test]
    fn test_display_matches_stringify() {
        let v = jval!({"a": [1i64, 2.5]});
        assert_eq!(v.to_string(), stringify(&v));
    }
}
