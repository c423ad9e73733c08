//! Benchmark for value reconstruction and serialization.
//!
//! Loads a corpus of `(type, value)` records, rebuilds each one through the
//! default registry, formats it back to text and checks that the text
//! reconstructs an equal value.
//!
//! Usage: `bench-values [records.json]`. Without a path a synthetic corpus
//! covering every builtin kind is generated.

use std::fs;
use std::time::Instant;

use serde::Deserialize;
use typed_value::{default_registry, DataKind, ValuePtr};

// =============================================================================
// INPUT RECORDS
// =============================================================================

#[derive(Debug, Deserialize)]
struct Record {
    #[serde(rename = "type")]
    type_name: String,
    value: String,
}

const SYNTHETIC_RECORDS: usize = 200_000;
const ITERS: u32 = 10;

/// Generates a deterministic corpus cycling through every registered name.
fn synthetic_records(count: usize) -> Vec<Record> {
    (0..count)
        .map(|i| {
            let f = i as f32 * 0.25;
            let (type_name, value) = match i % 17 {
                0 => ("integer", format!("{}", i as i64 - 5000)),
                1 => ("boolean", (i % 2 == 0).to_string()),
                2 => ("float", format!("{}", f)),
                3 => ("color2", format!("{}, {}", f, f + 1.0)),
                4 => ("color3", format!("{}, 0.5, 1", f)),
                5 => ("color4", format!("{} {} {} 1", f, f, f)),
                6 => ("vector2", format!("{},{}", -f, f)),
                7 => ("vector3", format!("{}, {}, {}", f, -f, 0.125)),
                8 => ("vector4", format!("{}, 0, 0, 1", f)),
                9 => ("matrix33", "1, 0, 0, 0, 1, 0, 0, 0, 1".to_string()),
                10 => (
                    "matrix44",
                    format!("1, 0, 0, 0, 0, 1, 0, 0, 0, 0, 1, 0, {}, {}, {}, 1", f, f, f),
                ),
                11 => ("string", format!("node_{}", i)),
                12 => ("integerarray", format!("{}, {}, {}", i, i + 1, i + 2)),
                13 => ("booleanarray", "true, false, true".to_string()),
                14 => ("floatarray", format!("{}, {}", f, f * 2.0)),
                15 => ("stringarray", format!("a{} b{}", i, i)),
                _ => ("filename", format!("textures/tile_{}.png", i)),
            };
            Record {
                type_name: type_name.to_string(),
                value,
            }
        })
        .collect()
}

fn load_records(path: &str) -> Vec<Record> {
    let json_data = fs::read_to_string(path).expect("Failed to read records file");
    serde_json::from_str(&json_data).expect("Failed to parse records JSON")
}

fn reconstruct(records: &[Record]) -> Vec<Option<ValuePtr>> {
    let registry = default_registry();
    records
        .iter()
        .map(|record| registry.create(&record.value, &record.type_name))
        .collect()
}

fn main() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "typed_value=info".into());
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let records = match std::env::args().nth(1) {
        Some(path) => {
            println!("Loading records from {}", path);
            load_records(&path)
        }
        None => {
            println!("Generating {} synthetic records", SYNTHETIC_RECORDS);
            synthetic_records(SYNTHETIC_RECORDS)
        }
    };
    let input_bytes: usize = records
        .iter()
        .map(|r| r.type_name.len() + r.value.len())
        .sum();

    // Warmup
    for _ in 0..3 {
        let _ = reconstruct(&records);
    }

    // Benchmark reconstruction
    let parse_start = Instant::now();
    let mut values = Vec::new();
    for _ in 0..ITERS {
        values = reconstruct(&records);
    }
    let parse_time = parse_start.elapsed() / ITERS;

    println!("\nReconstruct: {:?} (avg of {} iterations)", parse_time, ITERS);
    println!(
        "  Throughput: {:.2} MB/s, {:.0} values/s",
        (input_bytes as f64 / 1_000_000.0) / parse_time.as_secs_f64(),
        records.len() as f64 / parse_time.as_secs_f64()
    );

    let built: Vec<&ValuePtr> = values.iter().flatten().collect();

    // Benchmark serialization
    let format_start = Instant::now();
    let mut strings = Vec::new();
    for _ in 0..ITERS {
        strings = built
            .iter()
            .map(|v| (v.type_string(), v.value_string()))
            .collect();
    }
    let format_time = format_start.elapsed() / ITERS;
    let output_bytes: usize = strings.iter().map(|(t, v)| t.len() + v.len()).sum();

    println!("\nFormat: {:?} (avg of {} iterations)", format_time, ITERS);
    println!(
        "  Throughput: {:.2} MB/s",
        (output_bytes as f64 / 1_000_000.0) / format_time.as_secs_f64()
    );

    // Round-trip fidelity
    let registry = default_registry();
    let mut mismatches = 0;
    for (value, (type_name, text)) in built.iter().zip(&strings) {
        match registry.create(text, type_name) {
            Some(rebuilt) if *rebuilt == ***value => {}
            _ => mismatches += 1,
        }
    }

    let rejected = values.iter().filter(|v| v.is_none()).count();
    let fallback = records
        .iter()
        .filter(|r| !registry.contains(&r.type_name))
        .count();
    let strings_held = built.iter().filter(|v| v.kind() == DataKind::String).count();

    // Summary
    println!("\n=== Summary ===");
    println!("Records: {}", records.len());
    println!("Values built: {}", built.len());
    println!("Rejected literals: {}", rejected);
    println!("Unknown type names (stored as string): {}", fallback);
    println!("String values: {}", strings_held);
    println!("Round-trip mismatches: {}", mismatches);
    println!(
        "Text size: {} bytes in, {} bytes out ({:.1}%)",
        input_bytes,
        output_bytes,
        100.0 * output_bytes as f64 / input_bytes.max(1) as f64
    );
}
