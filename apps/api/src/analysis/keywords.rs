//! Missing-keyword extraction — JD keywords absent from the résumé, grouped
//! into three fixed categories by the LLM.

use serde::{Deserialize, Serialize};
use tracing::error;

use crate::analysis::prompts::KEYWORDS_PROMPT_TEMPLATE;
use crate::llm_client::LlmClient;

/// Category→keywords groupings as the model returns them. Missing groups
/// deserialize to empty lists.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct KeywordGroups {
    #[serde(rename = "Technical Skills", default)]
    pub technical_skills: Vec<String>,
    #[serde(rename = "Relational Skills", default)]
    pub relational_skills: Vec<String>,
    #[serde(rename = "Personal Strengths", default)]
    pub personal_strengths: Vec<String>,
}

/// Parse strategy: slice from the first `{` to the last `}` (models often
/// wrap the object in prose or fences), then deserialize.
pub fn parse_keyword_groups(text: &str) -> Option<KeywordGroups> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    if end < start {
        return None;
    }
    serde_json::from_str(&text[start..=end]).ok()
}

/// Asks the LLM which JD keywords the résumé is missing. Falls back to three
/// empty groups when no parseable answer arrives within the retry budget —
/// callers always get a usable value.
pub async fn extract_missing_keywords(
    llm: &LlmClient,
    annonce: &str,
    summary: &str,
) -> KeywordGroups {
    let prompt = KEYWORDS_PROMPT_TEMPLATE
        .replace("{annonce}", annonce)
        .replace("{summary}", summary);

    match llm.complete_parsed(&prompt, parse_keyword_groups).await {
        Ok(groups) => groups,
        Err(e) => {
            error!("Keyword extraction exhausted retries: {e}");
            KeywordGroups::default()
        }
    }
}
