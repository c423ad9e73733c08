//! Reads `type value` lines and shows how each one is reconstructed.
//!
//! Each non-empty line holds a type name, whitespace, then the value text:
//!
//! ```text
//! color3   0.5, 0.5, 1
//! integer  12
//! vector3  1, 2
//! ```

use std::collections::BTreeMap;
use std::fs;

use typed_value::{default_registry, DataKind};

fn preview(text: &str) -> String {
    let head: String = text.chars().take(60).collect();
    if text.chars().count() > 60 {
        format!("\"{}...\"", head)
    } else {
        format!("\"{}\"", head)
    }
}

fn main() {
    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "values.txt".to_string());

    println!("Reading: {}", path);
    let data = fs::read_to_string(&path).expect("Failed to read file");

    let registry = default_registry();
    let mut by_kind: BTreeMap<String, usize> = BTreeMap::new();
    let mut fallback = 0;
    let mut rejected = Vec::new();
    let mut detail = Vec::new();

    for (line_no, line) in data.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let (type_name, text) = line
            .split_once(char::is_whitespace)
            .map(|(t, v)| (t, v.trim_start()))
            .unwrap_or((line, ""));

        match registry.create(text, type_name) {
            Some(value) => {
                if !registry.contains(type_name) {
                    fallback += 1;
                }
                *by_kind.entry(format!("{:?}", value.kind())).or_default() += 1;
                if detail.len() < 20 {
                    detail.push(format!(
                        "[{}] {} {} -> {} {}",
                        line_no + 1,
                        type_name,
                        preview(text),
                        value.type_string(),
                        preview(&value.value_string())
                    ));
                }
            }
            None => rejected.push((line_no + 1, type_name.to_string(), text.to_string())),
        }
    }

    println!("\n=== Values by kind ===");
    for (kind, count) in &by_kind {
        println!("  {}: {}", kind, count);
    }
    println!("  (unknown type names stored as {:?}: {})", DataKind::String, fallback);

    println!("\n=== First {} values (detail) ===", detail.len());
    for line in &detail {
        println!("{}", line);
    }

    if !rejected.is_empty() {
        println!("\n=== Rejected ({}) ===", rejected.len());
        for (line_no, type_name, text) in rejected.iter().take(20) {
            println!("[{}] {} {}", line_no, type_name, preview(text));
        }
    }
}
