//! Prompt Construction
//!
//! Deterministic instruction prompt sent to the completion API. The analysis
//! rules spell out the hidden costs the model must account for (slicing,
//! concatenation, container copies, recursion totals) and mandate a JSON-only
//! reply in a fixed shape.

/// System message fixed for every request.
pub const SYSTEM_PROMPT: &str = "You are an expert code complexity analyzer. \
    Analyze the given code and return ONLY a valid JSON response with no \
    additional text, markdown, or formatting. Be precise and concise.";

/// Build the user prompt embedding the language hint and the verbatim code.
pub fn build_analysis_prompt(code: &str, language: &str) -> String {
    format!(
        r#"You are an expert code complexity analyzer. Analyze this {language} code and respond with ONLY valid JSON in exactly this format:

{{"complexity":"O(n²)","space_complexity":"O(n)","language":"{language}","explanation":"Brief explanation under 150 chars","key_operations":["operation1","operation2"],"suggestions":["suggestion1","suggestion2"]}}

CRITICAL ANALYSIS RULES:
- Consider ALL hidden costs of operations:
  * String slicing s[1:] costs O(k) where k is slice length
  * String concatenation + costs O(k) where k is total string length
  * List operations may copy entire arrays
  * Recursive calls accumulate costs across all calls
- For recursive algorithms: multiply per-call cost by number of calls
- Example: n recursive calls each doing O(k) work = O(n*k) total
- Don't just count recursive calls - analyze what each call does
- Be precise about worst-case scenarios

Return ONLY the JSON object, no markdown, no backticks, no other text.

Code to analyze:
{code}

JSON response:"#
    )
}
