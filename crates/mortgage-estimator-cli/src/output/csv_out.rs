use serde_json::Value;
use std::io;

/// Write output as two-column CSV (field, value) to stdout.
pub fn print_csv(value: &Value) {
    let stdout = io::stdout();
    let mut wtr = csv::Writer::from_writer(stdout.lock());

    let _ = wtr.write_record(["field", "value"]);
    for (key, val) in csv_rows(value) {
        let _ = wtr.write_record([key.as_str(), val.as_str()]);
    }

    let _ = wtr.flush();
}

fn csv_rows(value: &Value) -> Vec<(String, String)> {
    let fields = match value {
        Value::Object(map) => match map.get("result") {
            Some(Value::Object(result)) => result,
            _ => map,
        },
        _ => return vec![("value".to_string(), format_csv_value(value))],
    };

    fields
        .iter()
        .map(|(k, v)| (k.clone(), format_csv_value(v)))
        .collect()
}

fn format_csv_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => String::new(),
        _ => serde_json::to_string(value).unwrap_or_default(),
    }
}
