//! Language Detection Heuristics
//!
//! Ordered regex pattern table for guessing the language of a selection when
//! the caller has no explicit choice. First language with any matching
//! pattern wins; anything unrecognized passes the literal `"auto"` through to
//! the API.

use std::sync::OnceLock;

use regex::Regex;

/// Fallback hint when no pattern matches.
pub const AUTO_LANGUAGE: &str = "auto";

struct LanguagePatterns {
    language: &'static str,
    patterns: Vec<Regex>,
}

/// Compiled pattern table (initialized once).
///
/// Order matters: earlier rows win, so C sources with `#include` deliberately
/// resolve as cpp, matching the upstream heuristic.
fn pattern_table() -> &'static Vec<LanguagePatterns> {
    static TABLE: OnceLock<Vec<LanguagePatterns>> = OnceLock::new();
    TABLE.get_or_init(|| {
        let rows: &[(&str, &[&str])] = &[
            (
                "python",
                &[
                    r"def\s+\w+\s*\(",
                    r"import\s+\w+",
                    r"from\s+\w+\s+import",
                    r"(?m):\s*$",
                ],
            ),
            (
                "javascript",
                &[
                    r"function\s+\w+\s*\(",
                    r"const\s+\w+\s*=",
                    r"=>\s*\{",
                    r"console\.",
                ],
            ),
            (
                "java",
                &[
                    r"public\s+class",
                    r"public\s+static\s+void\s+main",
                    r"System\.out",
                ],
            ),
            (
                "cpp",
                &[r"#include\s*<", r"std::", r"cout\s*<<", r"int\s+main\s*\("],
            ),
            (
                "c",
                &[r"#include\s*<", r"printf\s*\(", r"int\s+main\s*\(", r"malloc\s*\("],
            ),
        ];

        rows.iter()
            .map(|(language, patterns)| LanguagePatterns {
                language,
                patterns: patterns
                    .iter()
                    .map(|p| Regex::new(p).expect("valid language pattern"))
                    .collect(),
            })
            .collect()
    })
}

/// Guess the language of a code selection.
pub fn detect_language(code: &str) -> &'static str {
    pattern_table()
        .iter()
        .find(|row| row.patterns.iter().any(|pattern| pattern.is_match(code)))
        .map(|row| row.language)
        .unwrap_or(AUTO_LANGUAGE)
}
