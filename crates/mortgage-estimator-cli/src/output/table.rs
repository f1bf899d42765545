use rust_decimal::Decimal;
use serde_json::Value;
use std::str::FromStr;
use tabled::{builder::Builder, Table};

/// Fields rendered as pounds and pence.
const MONEY_FIELDS: &[&str] = &["amount", "monthly_payment", "total_payment", "interest_total"];

/// Format output as a table using the tabled crate.
pub fn print_table(value: &Value) {
    match value {
        Value::Object(map) => {
            if let Some(result) = map.get("result") {
                print_result_table(result, map);
            } else {
                print_flat_object(value);
            }
        }
        _ => println!("{}", value),
    }
}

fn print_result_table(result: &Value, envelope: &serde_json::Map<String, Value>) {
    print_flat_object(result);

    if let Some(Value::Array(warnings)) = envelope.get("warnings") {
        if !warnings.is_empty() {
            println!("\nWarnings:");
            for w in warnings {
                if let Value::String(s) = w {
                    println!("  - {}", s);
                }
            }
        }
    }

    if let Some(Value::String(meth)) = envelope.get("methodology") {
        println!("\nMethodology: {}", meth);
    }
}

fn print_flat_object(value: &Value) {
    if let Value::Object(map) = value {
        let mut builder = Builder::default();
        builder.push_record(["Field", "Value"]);
        for (key, val) in map {
            builder.push_record([key.as_str(), &format_field(key, val)]);
        }
        println!("{}", Table::from(builder));
    } else {
        println!("{}", value);
    }
}

fn format_field(key: &str, value: &Value) -> String {
    if MONEY_FIELDS.contains(&key) {
        if let Some(amount) = as_decimal(value) {
            return format_pounds(amount);
        }
    }
    format_value(value)
}

fn as_decimal(value: &Value) -> Option<Decimal> {
    match value {
        Value::String(s) => Decimal::from_str(s).ok(),
        Value::Number(n) => Decimal::from_str(&n.to_string()).ok(),
        _ => None,
    }
}

/// `1234567.8` -> `£1,234,567.80`
fn format_pounds(amount: Decimal) -> String {
    let fixed = format!("{:.2}", amount.abs());
    let (whole, pence) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if amount.is_sign_negative() && !amount.is_zero() { "-" } else { "" };
    format!("{sign}£{grouped}.{pence}")
}

fn format_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => "null".to_string(),
        Value::Array(arr) => {
            let items: Vec<String> = arr.iter().map(format_value).collect();
            items.join(", ")
        }
        Value::Object(_) => serde_json::to_string(value).unwrap_or_default(),
    }
}
