use anyhow::{Context, Result, anyhow};
use serde_json::Value;
use std::io::Write;

/// Two-space indented JSON; object keys come out sorted since `Value` maps
/// are ordered by key.
pub fn format_json(json: &Value) -> Result<String> {
    serde_json::to_string_pretty(json).map_err(|e| anyhow!("Failed to format JSON: {}", e))
}

pub fn write_json<W: Write>(out: &mut W, json: &Value) -> Result<()> {
    writeln!(out, "{}", format_json(json)?).context("Failed to write response")?;
    out.flush().context("Failed to write response")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_are_sorted_and_indented() {
        let json: Value =
            serde_json::from_str(r#"{"title": "New todo", "id": 201, "completed": false}"#)
                .unwrap();

        assert_eq!(
            format_json(&json).unwrap(),
            "{\n  \"completed\": false,\n  \"id\": 201,\n  \"title\": \"New todo\"\n}"
        );
    }

    #[test]
    fn write_json_ends_with_a_newline() {
        let mut out = Vec::new();
        write_json(&mut out, &serde_json::json!({"id": 1})).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "{\n  \"id\": 1\n}\n");
    }

    #[test]
    fn nested_objects_are_sorted_too() {
        let json: Value = serde_json::from_str(r#"[{"b": 1, "a": {"z": 0, "y": 1}}]"#).unwrap();
        let pretty = format_json(&json).unwrap();

        assert!(pretty.find("\"a\"").unwrap() < pretty.find("\"b\"").unwrap());
        assert!(pretty.find("\"y\"").unwrap() < pretty.find("\"z\"").unwrap());
    }
}
