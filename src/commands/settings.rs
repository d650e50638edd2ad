use crate::error::{ScoringError, ScoringResult};
use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};
use std::fs;
use std::path::Path;

const SETTINGS_SCHEMA_VERSION: i64 = 1;

/// Tunable numbers of the authenticity scorer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoringSettings {
    #[serde(rename = "schema_version")]
    pub schema_version: i64,
    pub active_repo_target: u64,
    pub engagement_saturation: f64,
    pub fork_weight: f64,
    pub primary_commit_share: f64,
    pub high_fork_ratio: f64,
    pub low_activity_floor: u64,
    pub low_engagement_floor: u64,
    pub low_ownership_floor: u64,
}

impl Default for ScoringSettings {
    fn default() -> Self {
        Self {
            schema_version: SETTINGS_SCHEMA_VERSION,
            active_repo_target: 5,
            engagement_saturation: 500.0,
            fork_weight: 2.0,
            primary_commit_share: 0.5,
            high_fork_ratio: 3.0,
            low_activity_floor: 5,
            low_engagement_floor: 3,
            low_ownership_floor: 5,
        }
    }
}

/// Build settings from a possibly partial JSON object.
pub fn settings_from_value(input: Value) -> ScoringResult<ScoringSettings> {
    let normalized = normalize_settings(input);
    serde_json::from_value(normalized)
        .map_err(|e| ScoringError::Settings(format!("Invalid settings: {e}")))
}

/// Missing file yields defaults; unreadable or malformed JSON is an error.
pub fn load_settings_from_file(path: impl AsRef<Path>) -> ScoringResult<ScoringSettings> {
    let path = path.as_ref();
    if !path.exists() {
        log::debug!("no settings at {}, using defaults", path.display());
        return Ok(ScoringSettings::default());
    }

    let raw = fs::read_to_string(path)
        .map_err(|e| ScoringError::Settings(format!("Failed to read {}: {e}", path.display())))?;
    let value = serde_json::from_str::<Value>(&raw)
        .map_err(|e| ScoringError::Settings(format!("Failed to parse {}: {e}", path.display())))?;

    let settings = settings_from_value(value)?;
    log::debug!("loaded scoring settings from {}: {settings:?}", path.display());
    Ok(settings)
}

/// Apply a partial override on top of existing settings.
pub fn merge_settings(base: &ScoringSettings, overrides: &Value) -> ScoringResult<ScoringSettings> {
    let mut merged = serde_json::to_value(base)
        .map_err(|e| ScoringError::Settings(format!("Failed to serialize settings: {e}")))?;
    merge_values(&mut merged, overrides);
    settings_from_value(merged)
}

fn normalize_settings(input: Value) -> Value {
    let defaults = default_settings();
    let mut out = match input {
        Value::Object(map) => Value::Object(map),
        _ => Value::Object(Map::new()),
    };

    deep_merge_defaults(&mut out, &defaults);
    sanitize_settings(&mut out);
    if let Some(obj) = out.as_object_mut() {
        obj.insert("schema_version".to_string(), json!(SETTINGS_SCHEMA_VERSION));
    }

    out
}

fn default_settings() -> Value {
    serde_json::to_value(ScoringSettings::default()).unwrap_or_else(|_| json!({}))
}

fn deep_merge_defaults(target: &mut Value, defaults: &Value) {
    let (Some(target_obj), Some(default_obj)) = (target.as_object_mut(), defaults.as_object()) else {
        return;
    };

    for (key, default_value) in default_obj {
        match target_obj.get_mut(key) {
            Some(existing) => {
                if existing.is_object() && default_value.is_object() {
                    deep_merge_defaults(existing, default_value);
                }
            }
            None => {
                target_obj.insert(key.clone(), default_value.clone());
            }
        }
    }
}

fn merge_values(target: &mut Value, incoming: &Value) {
    match (target, incoming) {
        (Value::Object(target_obj), Value::Object(incoming_obj)) => {
            for (key, value) in incoming_obj {
                if let Some(existing) = target_obj.get_mut(key) {
                    merge_values(existing, value);
                } else {
                    target_obj.insert(key.clone(), value.clone());
                }
            }
        }
        (target_slot, incoming_value) => {
            *target_slot = incoming_value.clone();
        }
    }
}

fn sanitize_settings(settings: &mut Value) {
    let Some(obj) = settings.as_object_mut() else {
        return;
    };

    clamp_u64(obj, "activeRepoTarget", 1, 50, 5);
    clamp_u64(obj, "lowActivityFloor", 0, 25, 5);
    clamp_u64(obj, "lowEngagementFloor", 0, 25, 3);
    clamp_u64(obj, "lowOwnershipFloor", 0, 25, 5);

    clamp_f64(obj, "engagementSaturation", 10.0, 1_000_000.0, 500.0);
    clamp_f64(obj, "forkWeight", 0.0, 10.0, 2.0);
    clamp_f64(obj, "primaryCommitShare", 0.05, 1.0, 0.5);
    clamp_f64(obj, "highForkRatio", 1.0, 20.0, 3.0);
}

fn clamp_u64(map: &mut Map<String, Value>, key: &str, min: u64, max: u64, default: u64) {
    let raw = map
        .get(key)
        .and_then(|v| v.as_u64().or_else(|| v.as_f64().map(|f| f.max(0.0).round() as u64)))
        .unwrap_or(default);
    let clamped = raw.clamp(min, max);
    if clamped != raw {
        log::warn!("setting {key}={raw} outside {min}..={max}, using {clamped}");
    }
    map.insert(key.to_string(), json!(clamped));
}

fn clamp_f64(map: &mut Map<String, Value>, key: &str, min: f64, max: f64, default: f64) {
    let raw = map
        .get(key)
        .and_then(Value::as_f64)
        .filter(|v| v.is_finite())
        .unwrap_or(default);
    let clamped = raw.clamp(min, max);
    if clamped != raw {
        log::warn!("setting {key}={raw} outside {min}..={max}, using {clamped}");
    }
    map.insert(key.to_string(), json!(clamped));
}
