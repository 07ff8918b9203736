//! "Stuff" prompting: every retrieved chunk goes into one prompt verbatim.

const INSTRUCTION: &str = "Use the following pieces of context to answer the question at the end. \
If you don't know the answer, just say that you don't know, don't try to make up an answer.";

/// Assemble the question-answering prompt. Context pieces appear in the order
/// given, most relevant first, separated by blank lines.
pub fn stuff_prompt(context: &[&str], question: &str) -> String {
    let mut prompt = String::from(INSTRUCTION);
    prompt.push_str("\n\n");
    prompt.push_str(&context.join("\n\n"));
    prompt.push_str("\n\nQuestion: ");
    prompt.push_str(question);
    prompt.push_str("\nHelpful Answer:");
    prompt
}
