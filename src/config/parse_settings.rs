use crate::config::Settings;
use crate::logic::SuggestMode;
use crate::util::config::{parse_key_value, skip_comment_or_empty, strip_inline_comment};

/// What: Parse settings.conf content into `settings`.
///
/// Inputs:
/// - `content`: Content of the settings file.
/// - `settings`: Mutable reference to `Settings` to populate.
///
/// Output:
/// - None (modifies `settings` in-place).
///
/// Details:
/// - Keys are case-insensitive; `.`, `-` and spaces in keys are treated as `_`.
/// - Unknown keys and unparsable values are skipped, keeping the current value.
/// - `synonym` may repeat; each `alt:target` value is appended.
pub fn parse_settings(content: &str, settings: &mut Settings) {
    for line in content.lines() {
        if skip_comment_or_empty(line) {
            continue;
        }
        let Some((raw_key, raw_val)) = parse_key_value(line) else {
            continue;
        };
        let key = raw_key.to_lowercase().replace(['.', '-', ' '], "_");
        let val = strip_inline_comment(&raw_val);
        match key.as_str() {
            "api_base_url" | "api_base" => {
                let v = val.trim_end_matches('/');
                if v.starts_with("http://") || v.starts_with("https://") {
                    settings.api_base_url = v.to_string();
                } else {
                    tracing::warn!(value = %val, "[Config] api_base_url must be an http(s) URL");
                }
            }
            "request_timeout_secs" | "timeout_secs" => {
                if let Ok(v) = val.parse::<u64>() {
                    settings.request_timeout_secs = v;
                }
            }
            "fallback_delay_ms" => {
                if let Ok(v) = val.parse::<u64>() {
                    settings.fallback_delay_ms = v;
                }
            }
            "lookup_concurrency" => {
                if let Ok(v) = val.parse::<usize>() {
                    settings.lookup_concurrency = v;
                }
            }
            "detail_cache_size" => {
                if let Ok(v) = val.parse::<usize>() {
                    settings.detail_cache_size = v;
                }
            }
            "suggest_mode" => {
                if let Some(m) = SuggestMode::from_config_key(val) {
                    settings.suggest_mode = m;
                }
            }
            "default_mood" | "mood" => {
                settings.default_mood = if val.is_empty() {
                    None
                } else {
                    Some(val.to_string())
                };
            }
            "synonym" | "synonyms" => {
                if let Some((alt, target)) = val.split_once(':') {
                    let alt = alt.trim();
                    let target = target.trim();
                    if !alt.is_empty() && !target.is_empty() {
                        settings
                            .synonyms
                            .push((alt.to_string(), target.to_string()));
                    }
                }
            }
            _ => {
                tracing::debug!(key = %key, "[Config] Ignoring unknown settings key");
            }
        }
    }
}
