//! Prompt construction

/// Build the question-answering prompt for a document.
pub fn build_prompt(context: &str, question: &str) -> String {
    format!("Context: {context}\n\nQuestion: {question}\nAnswer:")
}
