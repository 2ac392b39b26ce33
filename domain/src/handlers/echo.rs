//! Echo handler

/// Wrap the input, verbatim, in the echo template.
pub fn echo_reply(text: &str) -> String {
    format!("🗣️ You said: '{}'", text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_echo_contains_input_verbatim() {
        for input in ["hello", "  spaced  ", "ünïcödé ✓", "it's"] {
            assert!(echo_reply(input).contains(input));
        }
    }

    #[test]
    fn test_echo_template() {
        assert_eq!(echo_reply("hi"), "🗣️ You said: 'hi'");
    }
}
