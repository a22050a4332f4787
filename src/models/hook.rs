use serde::de::{DeserializeOwned, Deserializer};
use serde::Deserialize;
use serde_json::Value;

// Field-level leniency: a value of the wrong type becomes None instead of
// failing the whole payload.

fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let v = Value::deserialize(deserializer)?;
    Ok(T::deserialize(v).ok())
}

fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let v = Value::deserialize(deserializer)?;
    Ok(v.as_str().map(str::to_owned))
}

/// Accepts integers, whole or fractional non-negative floats (truncated), and
/// numeric strings
fn lenient_u64<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    let v = Value::deserialize(deserializer)?;
    Ok(value_to_u64(&v))
}

fn lenient_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let v = Value::deserialize(deserializer)?;
    let n = match &v {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    Ok(n.filter(|f| f.is_finite()))
}

fn value_to_u64(v: &Value) -> Option<u64> {
    match v {
        Value::Number(n) => n
            .as_u64()
            .or_else(|| n.as_f64().filter(|f| f.is_finite() && *f >= 0.0).map(|f| f as u64)),
        Value::String(s) => {
            let s = s.trim();
            s.parse::<u64>().ok().or_else(|| {
                s.parse::<f64>()
                    .ok()
                    .filter(|f| f.is_finite() && *f >= 0.0)
                    .map(|f| f as u64)
            })
        }
        _ => None,
    }
}

#[derive(Deserialize, Debug, Default)]
pub struct HookWorkspace {
    #[serde(default, deserialize_with = "lenient_string")]
    pub current_dir: Option<String>,
}

/// Per-request token counts reported for the latest turn
#[derive(Deserialize, Debug, Default, Clone, Copy)]
pub struct HookCurrentUsage {
    #[serde(default, deserialize_with = "lenient_u64")]
    pub input_tokens: Option<u64>,
    #[serde(default, deserialize_with = "lenient_u64")]
    pub cache_creation_input_tokens: Option<u64>,
    #[serde(default, deserialize_with = "lenient_u64")]
    pub cache_read_input_tokens: Option<u64>,
}

#[derive(Deserialize, Debug, Default)]
pub struct HookContextWindow {
    #[serde(default, deserialize_with = "lenient")]
    pub current_usage: Option<HookCurrentUsage>,
    #[serde(default, deserialize_with = "lenient_u64")]
    pub context_window_size: Option<u64>,
}

/// Optional cost summary provided by the statusLine input
#[derive(Deserialize, Debug, Default)]
pub struct HookCost {
    #[serde(default, deserialize_with = "lenient_f64")]
    pub total_cost_usd: Option<f64>,
    #[serde(default, deserialize_with = "lenient_u64")]
    pub total_duration_ms: Option<u64>,
}

#[derive(Deserialize, Debug, Default)]
pub struct HookJson {
    #[serde(default, deserialize_with = "lenient")]
    pub workspace: Option<HookWorkspace>,
    #[serde(default, deserialize_with = "lenient")]
    pub context_window: Option<HookContextWindow>,
    #[serde(default, deserialize_with = "lenient")]
    pub cost: Option<HookCost>,
}
