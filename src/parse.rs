//! Model Output Parsing
//!
//! Extracts a normalized [`AnalysisResult`] from the model's raw text reply.
//! The strict path cleans markdown fences, isolates the outermost JSON object
//! and parses it; when that fails (malformed JSON or a missing `complexity`
//! field) the degraded extractor scrapes the free text instead. Once the HTTP
//! exchange itself succeeded this module never fails: the caller always gets
//! a usable, lower-confidence result.

use std::sync::OnceLock;

use regex::Regex;

use crate::types::{AnalysisResult, UNKNOWN_COMPLEXITY};

const FALLBACK_EXPLANATION: &str = "No explanation provided";
const DEGRADED_EXPLANATION: &str = "Analysis completed but response format was unexpected.";
const DEGRADED_SUGGESTION: &str = "Raw AI response parsing failed - try again";

/// Explanations derived from free text are capped at this many characters.
const MAX_EXPLANATION_CHARS: usize = 200;

/// Parse the model's text reply into a normalized result.
pub fn parse_model_content(content: &str, language_hint: &str) -> AnalysisResult {
    let candidate = extract_json_candidate(content);

    match serde_json::from_str::<serde_json::Value>(&candidate) {
        Ok(parsed) => match build_result(&parsed, language_hint) {
            Some(result) => result,
            None => {
                tracing::warn!("model reply missing complexity field; using degraded extraction");
                degraded_result(content, language_hint)
            }
        },
        Err(err) => {
            tracing::warn!("model reply is not valid JSON ({}); using degraded extraction", err);
            degraded_result(content, language_hint)
        }
    }
}

/// Strip markdown fences and isolate the outermost `{...}` span.
fn extract_json_candidate(content: &str) -> String {
    let stripped = content
        .trim()
        .replace("```json", "")
        .replace("```", "");
    let stripped = stripped.trim();
    let stripped = match stripped.strip_prefix("json") {
        Some(rest) => rest.trim_start(),
        None => stripped,
    };

    // First `{` to last `}`, so trailing commentary around the object is dropped
    match (stripped.find('{'), stripped.rfind('}')) {
        (Some(start), Some(end)) if start < end => stripped[start..=end].to_string(),
        _ => stripped.to_string(),
    }
}

/// Build a result from parsed JSON with field-by-field defaulting.
///
/// Returns `None` when `complexity` is missing or empty; that is recoverable
/// and routes to the degraded extractor, not a hard error.
fn build_result(parsed: &serde_json::Value, language_hint: &str) -> Option<AnalysisResult> {
    let complexity = parsed["complexity"].as_str().filter(|c| !c.is_empty())?;

    Some(AnalysisResult {
        complexity: complexity.to_string(),
        space_complexity: parsed["space_complexity"].as_str().map(|s| s.to_string()),
        language: parsed["language"]
            .as_str()
            .unwrap_or(language_hint)
            .to_string(),
        explanation: parsed["explanation"]
            .as_str()
            .unwrap_or(FALLBACK_EXPLANATION)
            .to_string(),
        key_operations: string_array(&parsed["key_operations"]),
        suggestions: string_array(&parsed["suggestions"]),
    })
}

fn string_array(value: &serde_json::Value) -> Vec<String> {
    value
        .as_array()
        .map(|items| {
            items
                .iter()
                .filter_map(|item| item.as_str().map(|s| s.to_string()))
                .collect()
        })
        .unwrap_or_default()
}

/// Build a degraded result by scraping the raw model text.
///
/// Heuristic by nature and kept separate from the strict-JSON path: the first
/// `O(...)` occurrence becomes the complexity, the first sentence-like
/// fragment becomes the explanation.
pub fn degraded_result(raw: &str, language_hint: &str) -> AnalysisResult {
    AnalysisResult {
        complexity: extract_complexity(raw)
            .unwrap_or_else(|| UNKNOWN_COMPLEXITY.to_string()),
        space_complexity: None,
        language: language_hint.to_string(),
        explanation: extract_explanation(raw),
        key_operations: Vec::new(),
        suggestions: vec![DEGRADED_SUGGESTION.to_string()],
    }
}

/// Compiled big-O pattern (initialized once).
fn complexity_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"O\([^)]+\)").expect("valid complexity pattern"))
}

fn extract_complexity(raw: &str) -> Option<String> {
    complexity_pattern()
        .find(raw)
        .map(|m| m.as_str().to_string())
}

fn extract_explanation(raw: &str) -> String {
    let explanation = raw
        .split(['.', '!', '?'])
        .find(|fragment| fragment.len() > 10)
        .map(|fragment| format!("{}.", fragment.trim()))
        .unwrap_or_else(|| DEGRADED_EXPLANATION.to_string());

    explanation.chars().take(MAX_EXPLANATION_CHARS).collect()
}
