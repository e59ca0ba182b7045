//! Common utilities shared across CLI commands.

use std::fmt;
use std::fs;
use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result, bail};
use serde::Serialize;
use serde_json::Value as JsonValue;

use crate::cli::args::OutputArgs;
use crate::log;
use crate::page::json_kind;

/// Read a record collection from a JSON file.
///
/// Accepts a top-level array, an export envelope `{"records": [...]}`, or a
/// single record object.
pub fn read_collection(path: &Path) -> Result<Vec<JsonValue>> {
    let content =
        fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
    let value: JsonValue = serde_json::from_str(&content)
        .with_context(|| format!("{} is not valid JSON", path.display()))?;
    into_records(value).with_context(|| format!("unexpected layout in {}", path.display()))
}

fn into_records(value: JsonValue) -> Result<Vec<JsonValue>> {
    match value {
        JsonValue::Array(records) => Ok(records),
        JsonValue::Object(map) => {
            if let Some(JsonValue::Array(records)) = map.get("records") {
                return Ok(records.clone());
            }
            Ok(vec![JsonValue::Object(map)])
        }
        other => bail!("expected an array or object of records, found {}", json_kind(&other)),
    }
}

/// Keep successful per-record results in input order.
///
/// Failures are logged with their record index and counted; they never
/// abort the whole collection.
pub fn keep_successes<T, E: fmt::Display>(module: &str, results: Vec<Result<T, E>>) -> Vec<T> {
    let total = results.len();
    let mut kept = Vec::with_capacity(total);
    for (index, result) in results.into_iter().enumerate() {
        match result {
            Ok(value) => kept.push(value),
            Err(err) => log!("error"; "record #{}: {}", index, err),
        }
    }

    let skipped = total - kept.len();
    if skipped > 0 {
        log!(module; "skipped {} of {}", plural_count(skipped, "record"), total);
    }
    kept
}

/// Serialize `value` as JSON to the output file or stdout.
pub fn write_json<T: Serialize + ?Sized>(value: &T, args: &OutputArgs) -> Result<()> {
    let formatted = if args.pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    write_text(&formatted, args)
}

/// Write text to the output file or stdout.
pub fn write_text(text: &str, args: &OutputArgs) -> Result<()> {
    if let Some(ref output_path) = args.output {
        let mut file = fs::File::create(output_path)
            .with_context(|| format!("failed to create {}", output_path.display()))?;
        writeln!(file, "{}", text)?;
        log!("output"; "wrote output to {}", output_path.display());
    } else {
        println!("{}", text);
    }
    Ok(())
}

/// Format count with noun, handling pluralization
///
/// - `plural_count(1, "record")` -> `"1 record"`
/// - `plural_count(5, "record")` -> `"5 records"`
pub fn plural_count(count: usize, noun: &str) -> String {
    let suffix = if count == 1 { "" } else { "s" };
    format!("{count} {noun}{suffix}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn write_input(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{}", content).unwrap();
        file
    }

    #[test]
    fn test_read_array() {
        let file = write_input(r#"[{"slug": "a"}, {"slug": "b"}]"#);
        assert_eq!(read_collection(file.path()).unwrap().len(), 2);
    }

    #[test]
    fn test_read_envelope_and_single_record() {
        let file = write_input(r#"{"records": [{"slug": "a"}]}"#);
        assert_eq!(read_collection(file.path()).unwrap(), vec![json!({ "slug": "a" })]);

        // `records` that is not a list is just a field of a single record.
        let file = write_input(r#"{"slug": "solo", "records": 3}"#);
        assert_eq!(
            read_collection(file.path()).unwrap(),
            vec![json!({ "slug": "solo", "records": 3 })]
        );
    }

    #[test]
    fn test_read_rejects_scalars_and_bad_json() {
        assert!(read_collection(write_input("42").path()).is_err());
        assert!(read_collection(write_input("{not json").path()).is_err());

        let dir = tempfile::tempdir().unwrap();
        assert!(read_collection(&dir.path().join("missing.json")).is_err());
    }

    #[test]
    fn test_write_json_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.json");
        let args = OutputArgs {
            pretty: false,
            output: Some(path.clone()),
        };
        write_json(&json!({ "slug": "a" }), &args).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "{\"slug\":\"a\"}\n");
    }

    #[test]
    fn test_keep_successes_preserves_order() {
        let results: Vec<Result<u8, String>> = vec![Ok(1), Err("bad".into()), Ok(3)];
        assert_eq!(keep_successes("normalize", results), vec![1, 3]);
    }

    #[test]
    fn test_plural_count() {
        assert_eq!(plural_count(0, "record"), "0 records");
        assert_eq!(plural_count(1, "record"), "1 record");
    }
}
