//! User slash-command parser.
//!
//! Parses `/command arg ...` input lines into typed [`ParsedCommand`]
//! values that the event handler can act on.

/// A parsed user command. Each variant corresponds to a `/command`.
#[derive(Debug, PartialEq, Eq)]
pub enum ParsedCommand {
    Login,
    Logout,
    Username { name: String },
    Email { addr: String },
    Reset,
    Whoami,
    Help,
    Quit,
}

/// Parse a slash-command string into a [`ParsedCommand`].
///
/// Returns `None` if the input does not start with `/` or is not a
/// recognized command. Commands are case-insensitive; arguments keep their
/// case and internal whitespace.
pub fn parse_command(input: &str) -> Option<ParsedCommand> {
    let input = input.trim();
    if !input.starts_with('/') {
        return None;
    }

    let parts: Vec<&str> = input[1..].splitn(2, ' ').collect();
    let cmd = parts.first()?.to_lowercase();
    let arg = parts.get(1).map(|s| s.trim());

    match cmd.as_str() {
        "login" => Some(ParsedCommand::Login),
        "logout" => Some(ParsedCommand::Logout),
        "username" | "name" | "nick" => {
            let name = arg.unwrap_or("").to_string();
            Some(ParsedCommand::Username { name })
        }
        "email" => {
            let addr = arg.unwrap_or("").to_string();
            Some(ParsedCommand::Email { addr })
        }
        "reset" => Some(ParsedCommand::Reset),
        "whoami" | "who" => Some(ParsedCommand::Whoami),
        "help" | "h" | "?" => Some(ParsedCommand::Help),
        "quit" | "q" | "exit" => Some(ParsedCommand::Quit),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_login_logout() {
        assert_eq!(parse_command("/login"), Some(ParsedCommand::Login));
        assert_eq!(parse_command("/logout"), Some(ParsedCommand::Logout));
    }

    #[test]
    fn test_parse_username_keeps_arg_case() {
        assert_eq!(
            parse_command("/username Alice"),
            Some(ParsedCommand::Username {
                name: "Alice".into()
            })
        );
        assert_eq!(
            parse_command("/NICK bob"),
            Some(ParsedCommand::Username { name: "bob".into() })
        );
    }

    #[test]
    fn test_parse_email() {
        assert_eq!(
            parse_command("/email a@x.com"),
            Some(ParsedCommand::Email {
                addr: "a@x.com".into()
            })
        );
    }

    #[test]
    fn test_empty_arg_is_empty_string() {
        // Clearing a field is legal; the store accepts empty strings.
        assert_eq!(
            parse_command("/username"),
            Some(ParsedCommand::Username { name: "".into() })
        );
        assert_eq!(
            parse_command("/email  "),
            Some(ParsedCommand::Email { addr: "".into() })
        );
    }

    #[test]
    fn test_unrecognized_command_is_none() {
        assert_eq!(parse_command("/frobnicate"), None);
        assert_eq!(parse_command("/loginn"), None);
    }

    #[test]
    fn test_plain_text_is_none() {
        assert_eq!(parse_command("hello world"), None);
        assert_eq!(parse_command(""), None);
    }
}
