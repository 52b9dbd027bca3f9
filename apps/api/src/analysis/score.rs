//! Fit-score estimation — a single 0–100 number measuring résumé
//! competencies against a job announcement.

use tracing::error;

use crate::analysis::prompts::SCORE_PROMPT_TEMPLATE;
use crate::llm_client::{strip_code_fences, LlmClient};

/// Parse strategy: strip code fences, then read the leading digits.
/// Anything that does not start with a digit, or lands outside 0–100,
/// is rejected so the retry loop re-asks.
pub fn parse_score(text: &str) -> Option<u32> {
    let cleaned = strip_code_fences(text).trim();
    let end = cleaned
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(cleaned.len());
    let score: u32 = cleaned[..end].parse().ok()?;
    (score <= 100).then_some(score)
}

/// Asks the LLM for a fit score. Falls back to 0 when no valid score
/// arrives within the retry budget.
pub async fn estimate_fit_score(llm: &LlmClient, annonce: &str, competences: &str) -> u32 {
    let prompt = SCORE_PROMPT_TEMPLATE
        .replace("{annonce}", annonce)
        .replace("{competences}", competences);

    match llm.complete_parsed(&prompt, parse_score).await {
        Ok(score) => score,
        Err(e) => {
            error!("Fit scoring exhausted retries: {e}");
            0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_bare_number() {
        assert_eq!(parse_score("85"), Some(85));
        assert_eq!(parse_score("0"), Some(0));
        assert_eq!(parse_score("100"), Some(100));
    }

    #[test]
    fn test_parses_number_with_whitespace_and_fences() {
        assert_eq!(parse_score("  92\n"), Some(92));
        assert_eq!(parse_score("```json\n70\n```"), Some(70));
    }

    #[test]
    fn test_truncates_decimals_like_the_form_expects() {
        assert_eq!(parse_score("85.5"), Some(85));
    }

    #[test]
    fn test_rejects_out_of_range() {
        assert_eq!(parse_score("150"), None);
        assert_eq!(parse_score("-5"), None);
    }

    #[test]
    fn test_rejects_non_numeric_prefix() {
        assert_eq!(parse_score("Score: 85"), None);
        assert_eq!(parse_score(""), None);
        assert_eq!(parse_score("high"), None);
    }
}
