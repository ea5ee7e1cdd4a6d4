use serde::{Deserialize, Serialize};

use crate::domain::ChatMessage;

/// Substrings that mark a message as a programming question. Matched against
/// the lower-cased message as raw substrings, not tokens, so "subscription"
/// matches "script".
pub const CODE_KEYWORDS: &[&str] = &[
    "code",
    "program",
    "wap",
    "python",
    "java",
    "c++",
    "function",
    "algorithm",
    "script",
];

/// System prompt for programming questions: terse, code block first.
pub const CODE_SYSTEM_PROMPT: &str = "\
You are a programming assistant. Always respond in a SIMPLE and FORMATTED way:
- Give a short title
- Show the solution code in a markdown code block
- Add very brief working (1-2 lines only)
- Add example output if applicable
Do NOT give long explanations.";

/// System prompt for everything else: structured prose, no code unless asked.
pub const GENERAL_SYSTEM_PROMPT: &str = "\
You are a helpful assistant. Always respond in a clear, structured way:
- Start with a short heading
- Use bullet points or numbered lists where they help
- Keep paragraphs short and use **bold** for key terms
Do NOT use code blocks unless the user explicitly asks for code.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionKind {
    Code,
    General,
}

impl QuestionKind {
    pub fn classify(message: &str) -> Self {
        let lowered = message.to_lowercase();
        if CODE_KEYWORDS.iter().any(|kw| lowered.contains(kw)) {
            QuestionKind::Code
        } else {
            QuestionKind::General
        }
    }

    pub fn system_prompt(&self) -> &'static str {
        match self {
            QuestionKind::Code => CODE_SYSTEM_PROMPT,
            QuestionKind::General => GENERAL_SYSTEM_PROMPT,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            QuestionKind::Code => "code",
            QuestionKind::General => "general",
        }
    }
}

/// Build the sequence sent to the completion provider:
/// one system message, the history verbatim, then the new user message.
pub fn assemble_messages(
    kind: QuestionKind,
    history: &[ChatMessage],
    message: &str,
) -> Vec<ChatMessage> {
    let mut messages = Vec::with_capacity(history.len() + 2);
    messages.push(ChatMessage::system(kind.system_prompt()));
    messages.extend(history.iter().cloned());
    messages.push(ChatMessage::user(message));
    messages
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Role;

    #[test]
    fn every_keyword_selects_code() {
        for kw in CODE_KEYWORDS {
            let msg = format!("please help with {kw} stuff");
            assert_eq!(QuestionKind::classify(&msg), QuestionKind::Code, "{kw}");
        }
    }

    #[test]
    fn classification_ignores_case() {
        assert_eq!(QuestionKind::classify("Explain PYTHON decorators"), QuestionKind::Code);
        assert_eq!(QuestionKind::classify("WAP to print primes"), QuestionKind::Code);
        assert_eq!(QuestionKind::classify("Is C++ faster?"), QuestionKind::Code);
    }

    #[test]
    fn plain_questions_are_general() {
        assert_eq!(
            QuestionKind::classify("what is the capital of France?"),
            QuestionKind::General
        );
        assert_eq!(QuestionKind::classify(""), QuestionKind::General);
    }

    // Raw substring matching is the current behaviour: "subscription"
    // contains "script", "javascript" contains "java", "swap" contains "wap".
    #[test]
    fn substring_matches_inside_unrelated_words() {
        assert_eq!(
            QuestionKind::classify("how do I cancel my subscription?"),
            QuestionKind::Code
        );
        assert_eq!(QuestionKind::classify("can we swap seats"), QuestionKind::Code);
        assert_eq!(QuestionKind::classify("my barcode is smudged"), QuestionKind::Code);
    }

    #[test]
    fn prompts_differ_by_kind() {
        assert_eq!(QuestionKind::Code.system_prompt(), CODE_SYSTEM_PROMPT);
        assert_eq!(QuestionKind::General.system_prompt(), GENERAL_SYSTEM_PROMPT);
        assert_ne!(CODE_SYSTEM_PROMPT, GENERAL_SYSTEM_PROMPT);
    }

    #[test]
    fn assemble_without_history_has_two_messages() {
        let kind = QuestionKind::classify("write a function to reverse a string");
        let messages = assemble_messages(kind, &[], "write a function to reverse a string");

        assert_eq!(kind, QuestionKind::Code);
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].role(), Role::System);
        assert_eq!(messages[0].content(), CODE_SYSTEM_PROMPT);
        assert_eq!(messages[1].role(), Role::User);
        assert_eq!(messages[1].content(), "write a function to reverse a string");
    }

    #[test]
    fn assemble_replays_history_in_order() {
        let history = vec![
            ChatMessage::user("write a function to reverse a string"),
            ChatMessage::assistant("..."),
        ];
        let messages = assemble_messages(QuestionKind::General, &history, "now add error handling");

        assert_eq!(messages.len(), history.len() + 2);
        assert_eq!(messages[0].role(), Role::System);
        assert_eq!(&messages[1..3], history.as_slice());
        assert_eq!(messages[3], ChatMessage::user("now add error handling"));
    }

    #[test]
    fn history_system_messages_are_not_collapsed() {
        let history = vec![ChatMessage::system("earlier instructions")];
        let messages = assemble_messages(QuestionKind::General, &history, "hi");

        assert_eq!(messages.len(), 3);
        assert_eq!(messages[1].content(), "earlier instructions");
    }
}
