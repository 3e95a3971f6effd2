//! Fixed instructions and task-input builders for the two reading passes.
//!
//! The methodology is S. Keshav's "How to read a paper": a quick first pass
//! judging the five Cs, then a second pass over the body for evidence.

use crate::record::PaperRecord;

/// Section labels probed for the introduction, first present wins.
pub const INTRODUCTION_LABELS: [&str; 2] = ["INTRODUCTION", "Introduction"];
/// Section labels probed for the conclusion, first present wins.
pub const CONCLUSION_LABELS: [&str; 4] = ["CONCLUSION", "Conclusions", "CONCLUSIONS", "Conclusion"];

/// Character budget of `full_text` appended to the second-pass input.
pub const SECOND_PASS_TEXT_BUDGET: usize = 10_000;
/// Appended when the excerpt was cut at the budget.
pub const TRUNCATION_MARKER: &str = "...";

/// First pass: the five Cs.
pub const FIRST_PASS_INSTRUCTION: &str = "\
You are an academic paper summarizer following the methodology from \"How to read a paper\" by S. Keshav.

For the FIRST PASS, analyze the paper and provide the five Cs:
1. Category: What type of paper is this? (measurement, analysis of existing system, research prototype, etc.)
2. Context: Which other papers is it related to? Which theoretical bases were used to analyze the problem?
3. Correctness: Do the assumptions appear to be valid?
4. Contributions: What are the paper's main contributions?
5. Clarity: Is the paper well written?

Focus only on these five aspects for the first pass. Be concise but thorough.";

/// Second pass: figures, evidence, references and the main thrust.
pub const SECOND_PASS_INSTRUCTION: &str = "\
For the SECOND PASS, provide a more detailed analysis:
1. Analyze the figures, diagrams, and other illustrations. Are the axes properly labeled? Are results shown with error bars for statistical significance?
2. Note any relevant references that would be important for understanding the paper's background.

Provide a comprehensive summary of the paper's content with supporting evidence. Focus on the main thrust of the paper and its key findings.";

/// Builds the context block shared by both passes.
#[must_use]
pub fn context_block(record: &PaperRecord) -> String {
    let introduction = record.first_section(&INTRODUCTION_LABELS);
    let conclusion = record.first_section(&CONCLUSION_LABELS);
    format!(
        "Paper Title: {title}\n\n\
         Abstract: {abstract_text}\n\n\
         Introduction: {introduction}\n\n\
         Conclusion: {conclusion}\n\n\
         Please provide a summary of this paper following the methodology from \"How to read a paper\" by S. Keshav.",
        title = record.title,
        abstract_text = record.abstract_text,
    )
}

/// Returns at most [`SECOND_PASS_TEXT_BUDGET`] characters of `full_text`,
/// followed by [`TRUNCATION_MARKER`] when anything was cut.
#[must_use]
pub fn truncate_full_text(full_text: &str) -> String {
    match full_text.char_indices().nth(SECOND_PASS_TEXT_BUDGET) {
        Some((cut, _)) => format!("{}{TRUNCATION_MARKER}", &full_text[..cut]),
        None => full_text.to_string(),
    }
}

/// Builds the second-pass task input: context plus a bounded text excerpt.
#[must_use]
pub fn second_pass_input(context: &str, full_text: &str) -> String {
    format!(
        "{context}\n\nAdditional paper content for analysis:\n{}",
        truncate_full_text(full_text)
    )
}
