use std::io::Read;
use std::path::Path;

pub fn read_stdin() -> anyhow::Result<Vec<u8>> {
    let mut buf = Vec::new();
    std::io::stdin().read_to_end(&mut buf)?;
    Ok(buf)
}

/// Last path component, or the path itself when it has none (e.g. `/`)
pub fn dir_basename(p: &str) -> String {
    match Path::new(p).file_name() {
        Some(name) => name.to_string_lossy().into_owned(),
        None => p.to_owned(),
    }
}

pub fn format_currency(v: f64) -> String {
    format!("{v:.2}")
}

/// Compact line counts: `1500` becomes `1.5k`, below a thousand is unchanged
pub fn abbreviate(n: u64) -> String {
    if n >= 1_000 {
        format!("{:.1}k", n as f64 / 1e3)
    } else {
        n.to_string()
    }
}

pub fn format_duration(duration_ms: u64) -> String {
    let total_secs = duration_ms / 1_000;
    format!("{}m {}s", total_secs / 60, total_secs % 60)
}
