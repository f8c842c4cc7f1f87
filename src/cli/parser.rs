//! Input tokenizer for the assistant.

/// Split a line into a lowercased command and its arguments.
///
/// Returns `None` for a blank line.
pub fn parse_input(line: &str) -> Option<(String, Vec<String>)> {
    let mut tokens = line.split_whitespace();
    let command = tokens.next()?.to_lowercase();
    let args = tokens.map(str::to_string).collect();
    Some((command, args))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_command_and_args() {
        let (command, args) = parse_input("ADD Bob 0501234567").unwrap();
        assert_eq!(command, "add");
        assert_eq!(args, vec!["Bob", "0501234567"]);
    }

    #[test]
    fn test_parse_keeps_argument_case() {
        let (command, args) = parse_input("  Phone   Alice  ").unwrap();
        assert_eq!(command, "phone");
        assert_eq!(args, vec!["Alice"]);
    }

    #[test]
    fn test_parse_blank_line() {
        assert!(parse_input("").is_none());
        assert!(parse_input("   \t").is_none());
    }
}
