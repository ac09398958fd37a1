// All LLM prompt constants for the rewrite module.

use crate::models::resume::Resume;

/// System prompt for resume rewriting — enforces same-shaped JSON-only output.
pub const REWRITE_SYSTEM: &str =
    "You are an expert resume writer. \
    You rewrite the textual content of a resume document without changing its structure. \
    You MUST respond with valid JSON only, using exactly the same keys and nesting as the input document. \
    Do NOT add, remove, or reorder sections, entries, or fields. \
    Do NOT invent facts, employers, dates, or metrics that are not in the input. \
    Do NOT use markdown code fences.";

/// Builds the user prompt: rewrite rules, the optional job description and
/// instructions, and the serialized document.
pub fn build_rewrite_prompt(
    resume: &Resume,
    job_description: Option<&str>,
    instructions: Option<&str>,
) -> Result<String, serde_json::Error> {
    let document = serde_json::to_string_pretty(resume)?;

    let mut prompt = String::from(
        "Rewrite the prose fields of the resume document below: the summary, \
        experience and project bullets, descriptions, and custom section bullets. \
        Make them concise, active-voice, and outcome-focused. \
        Leave names, dates, URLs, and all structural fields exactly as they are.\n",
    );

    if let Some(jd) = job_description.filter(|jd| !jd.trim().is_empty()) {
        prompt.push_str(&format!(
            "\nTailor the wording toward this job description:\n---\n{jd}\n---\n"
        ));
    }
    if let Some(extra) = instructions.filter(|i| !i.trim().is_empty()) {
        prompt.push_str(&format!("\nAdditional instructions from the user:\n{extra}\n"));
    }

    prompt.push_str(&format!(
        "\nResume document (return the rewritten document with this exact shape):\n{document}"
    ));

    Ok(prompt)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_embeds_document_and_jd() {
        let resume = Resume {
            summary: "I do software".to_string(),
            ..Default::default()
        };
        let prompt =
            build_rewrite_prompt(&resume, Some("Senior Rust Engineer"), Some("keep it short"))
                .unwrap();

        assert!(prompt.contains("\"summary\": \"I do software\""));
        assert!(prompt.contains("Senior Rust Engineer"));
        assert!(prompt.contains("keep it short"));
    }

    #[test]
    fn test_prompt_omits_blank_jd_and_instructions() {
        let prompt = build_rewrite_prompt(&Resume::default(), Some("   "), None).unwrap();
        assert!(!prompt.contains("job description:"));
        assert!(!prompt.contains("Additional instructions"));
    }
}
