//! Conversores estándar para `ArgSpec::with_convert`.
//!
//! Todos reciben el texto crudo y devuelven un `Value` o la causa del fallo
//! como `String`; el resolver añade el nombre del campo y el texto original.

use chrono::{DateTime, SecondsFormat, Utc};
use serde_json::{Number, Value};

/// Identidad: el texto tal cual.
pub fn string(raw: &str) -> Result<Value, String> {
    Ok(Value::String(raw.to_string()))
}

pub fn integer(raw: &str) -> Result<Value, String> {
    raw.trim().parse::<i64>().map(Value::from).map_err(|e| e.to_string())
}

/// Entero si el texto lo permite, si no `f64`. Rechaza NaN/infinito.
pub fn number(raw: &str) -> Result<Value, String> {
    let t = raw.trim();
    if let Ok(i) = t.parse::<i64>() {
        return Ok(Value::from(i));
    }
    let f: f64 = t.parse().map_err(|e: std::num::ParseFloatError| e.to_string())?;
    Number::from_f64(f).map(Value::Number)
                       .ok_or_else(|| format!("not a finite number: {t}"))
}

pub fn boolean(raw: &str) -> Result<Value, String> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "yes" | "y" | "on" | "1" => Ok(Value::Bool(true)),
        "false" | "no" | "n" | "off" | "0" => Ok(Value::Bool(false)),
        other => Err(format!("not a boolean: {other}")),
    }
}

/// JSON literal arbitrario (`{"a":1}`, `[1,2]`, `"txt"`...).
pub fn json(raw: &str) -> Result<Value, String> {
    serde_json::from_str(raw).map_err(|e| e.to_string())
}

/// RFC 3339 normalizado a UTC.
pub fn timestamp(raw: &str) -> Result<Value, String> {
    DateTime::parse_from_rfc3339(raw.trim())
        .map(|dt| Value::String(dt.with_timezone(&Utc).to_rfc3339_opts(SecondsFormat::AutoSi, true)))
        .map_err(|e| e.to_string())
}

/// Valores enumerados: acepta sólo una de las opciones (comparación exacta).
pub fn one_of(choices: &[&str]) -> impl Fn(&str) -> Result<Value, String> + Send + Sync + Clone + 'static {
    let owned: Vec<String> = choices.iter().map(|c| c.to_string()).collect();
    move |raw: &str| {
        if owned.iter().any(|c| c == raw) {
            Ok(Value::String(raw.to_string()))
        } else {
            Err(format!("expected one of [{}]", owned.join(", ")))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn integer_trims_and_rejects_garbage() {
        assert_eq!(integer(" 42 ").unwrap(), json!(42));
        assert!(integer("4x2").is_err());
    }

    #[test]
    fn number_prefers_integers() {
        assert_eq!(number("7").unwrap(), json!(7));
        assert_eq!(number("2.5").unwrap(), json!(2.5));
        assert!(number("NaN").is_err());
    }

    #[test]
    fn boolean_accepts_common_spellings() {
        assert_eq!(boolean("Yes").unwrap(), json!(true));
        assert_eq!(boolean("off").unwrap(), json!(false));
        assert!(boolean("maybe").is_err());
    }

    #[test]
    fn timestamp_is_normalized_to_utc() {
        assert_eq!(timestamp("2024-03-01T10:00:00+02:00").unwrap(), json!("2024-03-01T08:00:00Z"));
        assert!(timestamp("yesterday").is_err());
    }

    #[test]
    fn one_of_lists_choices_on_error() {
        let mode = one_of(&["fast", "safe"]);
        assert_eq!(mode("safe").unwrap(), json!("safe"));
        assert_eq!(mode("slow").unwrap_err(), "expected one of [fast, safe]");
    }

    #[test]
    fn json_parses_composites() {
        assert_eq!(json("{\"a\":[1,2]}").unwrap(), json!({"a": [1, 2]}));
    }
}
