use chrono::{DateTime, Utc};

/// Full wiki page body: prefix, table, build stamp, suffix.
pub fn assemble_document(
    prefix: &str,
    table: &str,
    built_at: DateTime<Utc>,
    suffix: &str,
) -> String {
    let mut out = String::with_capacity(prefix.len() + table.len() + suffix.len() + 64);
    out.push_str(prefix);
    out.push_str(table);
    out.push_str(&format!("\nTable built on {} UTC\n", format_build_time(built_at)));
    out.push_str(suffix);
    out
}

pub fn format_build_time(built_at: DateTime<Utc>) -> String {
    built_at.format("%Y-%m-%d %H:%M:%S%.6f").to_string()
}
