// Résumé analysis services: missing-keyword extraction and JD fit scoring.
// Both are thin wrappers over `LlmClient::complete_parsed` — one prompt
// template, one parse strategy, one fallback value each. No direct HTTP
// calls here.

pub mod handlers;
pub mod keywords;
pub mod prompts;
pub mod score;
