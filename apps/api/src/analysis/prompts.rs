// Prompt constants for the analysis services.
// Replace the `{annonce}` / `{summary}` / `{competences}` markers before sending.

/// Missing-keyword extraction prompt. The model must answer with a JSON
/// object grouping keywords into three fixed categories.
pub const KEYWORDS_PROMPT_TEMPLATE: &str = r#"Given the following job description and resume, identify the key skills and competencies that are mentioned in the job description but missing from the resume.
Categorize the skills into three sections:
1. "Technical Skills": Hard skills like programming languages, software, or technical abilities.
2. "Relational Skills": Soft skills like teamwork, communication, or leadership.
3. "Personal Strengths": Attributes like adaptability, resilience, or problem-solving.

Return the result in a JSON format like this:
{
  "Technical Skills": ["skill1", "skill2"],
  "Relational Skills": ["skill3", "skill4"],
  "Personal Strengths": ["skill5", "skill6"]
}

Job Description:
{annonce}

Resume:
{summary}

Return only the first 10 keywords distributed among the three categories."#;

/// Fit-score prompt. The model must answer with a bare number 0–100.
pub const SCORE_PROMPT_TEMPLATE: &str = r#"Analyze this job announcement and resume competencies using the following structured, professional methodology and return only a single numeric score between 0 and 100 with no additional text:

1. Keyword Matching (50%): Evaluate how well the resume matches key technical and soft skills mentioned in the job announcement.
2. Experience Relevance (20%): Assess if the candidate's experience aligns with the job requirements.
3. Education & Certifications (10%): Consider whether the candidate holds the required degree and certifications.
4. Soft Skills & Additional Criteria (10%): Evaluate other relevant soft skills and attributes.
5. Industry & Domain Fit (10%): Determine if the candidate has domain-specific experience relevant to the job.

Compute the final score using the weights above, where 100 indicates a perfect match and 0 indicates no match.

Job Announcement:
{annonce}

Resume Competencies:
{competences}"#;
