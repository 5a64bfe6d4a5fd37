use std::str::FromStr;

use super::types::Message;
use crate::error::MessageParseError;
use crate::prefix::Prefix;

impl FromStr for Message {
    type Err = MessageParseError;

    /// Parse one line, with or without its `\r\n` (or bare `\n`) terminator.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let line = s
            .strip_suffix("\r\n")
            .or_else(|| s.strip_suffix('\n'))
            .unwrap_or(s);

        if line.is_empty() {
            return Err(MessageParseError::EmptyMessage);
        }
        if let Some(c) = line.chars().find(|c| matches!(c, '\0' | '\r' | '\n')) {
            return Err(MessageParseError::IllegalControlChar(c));
        }

        let (prefix, rest) = match line.strip_prefix(':') {
            Some(tail) => {
                let (raw, rest) = tail
                    .split_once(' ')
                    .ok_or(MessageParseError::InvalidCommand)?;
                (Some(Prefix::parse(raw)?), rest)
            }
            None => (None, line),
        };

        let command_len = command_len(rest).ok_or(MessageParseError::InvalidCommand)?;
        let (command, tail) = rest.split_at(command_len);

        let params = if tail.is_empty() {
            ""
        } else {
            tail.strip_prefix(' ')
                .ok_or(MessageParseError::InvalidCommand)?
        };

        Ok(Message {
            prefix,
            command: command.to_owned(),
            params: params.to_owned(),
        })
    }
}

/// Length of the command token at the start of `s`: a run of ASCII letters
/// or exactly three ASCII digits.
fn command_len(s: &str) -> Option<usize> {
    let bytes = s.as_bytes();
    let letters = bytes.iter().take_while(|b| b.is_ascii_alphabetic()).count();
    if letters > 0 {
        return Some(letters);
    }

    let digits = bytes.iter().take_while(|b| b.is_ascii_digit()).count();
    (digits == 3).then_some(3)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prefix::Prefix;
    use proptest::prelude::*;

    #[test]
    fn test_parse_simple() {
        let msg: Message = "NICK alice\r\n".parse().unwrap();
        assert_eq!(msg.prefix, None);
        assert_eq!(msg.command, "NICK");
        assert_eq!(msg.params, "alice");
    }

    #[test]
    fn test_parse_keeps_params_verbatim() {
        let msg: Message = "USER al 0 *  :Alice A \r\n".parse().unwrap();
        assert_eq!(msg.params, "al 0 *  :Alice A ");

        let msg: Message = "NICK  spaced\r\n".parse().unwrap();
        assert_eq!(msg.params, " spaced");
    }

    #[test]
    fn test_parse_bare_lf_and_no_terminator() {
        let msg: Message = "JOIN #a\n".parse().unwrap();
        assert_eq!(msg.params, "#a");
        let msg: Message = "JOIN #a".parse().unwrap();
        assert_eq!(msg.params, "#a");
    }

    #[test]
    fn test_parse_without_params() {
        let msg: Message = "QUIT\r\n".parse().unwrap();
        assert_eq!(msg.command, "QUIT");
        assert_eq!(msg.params, "");
    }

    #[test]
    fn test_parse_numeric() {
        let msg: Message = ":irc.local 001 alice :Welcome\r\n".parse().unwrap();
        assert_eq!(msg.prefix, Some(Prefix::ServerName("irc.local".into())));
        assert_eq!(msg.command, "001");
        assert_eq!(msg.response(), Some(crate::Response::RPL_WELCOME));
    }

    #[test]
    fn test_parse_prefixed() {
        let msg: Message = ":bob!b@10.0.0.1:6000 PRIVMSG alice :yo\r\n".parse().unwrap();
        assert_eq!(msg.source_nickname(), Some("bob"));
        assert_eq!(msg.params, "alice :yo");
    }

    #[test]
    fn test_parse_rejects() {
        assert_eq!(
            "".parse::<Message>(),
            Err(MessageParseError::EmptyMessage)
        );
        assert_eq!(
            "\r\n".parse::<Message>(),
            Err(MessageParseError::EmptyMessage)
        );
        assert_eq!(
            "12 foo\r\n".parse::<Message>(),
            Err(MessageParseError::InvalidCommand)
        );
        assert_eq!(
            "1234 foo\r\n".parse::<Message>(),
            Err(MessageParseError::InvalidCommand)
        );
        assert_eq!(
            "NICK1 foo\r\n".parse::<Message>(),
            Err(MessageParseError::InvalidCommand)
        );
        assert_eq!(
            ":lonely\r\n".parse::<Message>(),
            Err(MessageParseError::InvalidCommand)
        );
        assert_eq!(
            "PRIVMSG a :b\0c\r\n".parse::<Message>(),
            Err(MessageParseError::IllegalControlChar('\0'))
        );
        assert_eq!(
            "PRIVMSG a :b\rc\r\n".parse::<Message>(),
            Err(MessageParseError::IllegalControlChar('\r'))
        );
        assert!(matches!(
            ":bad*prefix NICK x\r\n".parse::<Message>(),
            Err(MessageParseError::InvalidPrefix(_))
        ));
    }

    fn arb_prefix() -> impl Strategy<Value = Option<Prefix>> {
        prop_oneof![
            Just(None),
            "[a-z]{1,8}(\\.[a-z]{2,5}){1,2}".prop_map(|s| Some(Prefix::ServerName(s))),
            (
                "[a-zA-Z\\[\\]`_^{|}][a-zA-Z0-9\\-]{0,8}",
                "[a-z~]{1,9}",
                "[a-z0-9.:]{1,20}",
            )
                .prop_map(|(n, u, h)| Some(Prefix::new(n, u, h))),
            ("[a-z][a-z0-9]{0,8}", "[a-z~]{1,9}")
                .prop_map(|(n, u)| Some(Prefix::new(n, u, ""))),
            ("[a-z][a-z0-9]{0,8}", "[a-z0-9.:]{1,20}")
                .prop_map(|(n, h)| Some(Prefix::new(n, "", h))),
            "[a-z][a-z0-9]{0,8}".prop_map(|n| Some(Prefix::new(n, "", ""))),
        ]
    }

    #[test]
    fn test_user_only_prefix_round_trips() {
        let msg = Message::new("PRIVMSG", "#a :hi").with_prefix(Prefix::new("alice", "al", ""));
        assert_eq!(msg.to_string().parse::<Message>().unwrap(), msg);
    }

    fn arb_command() -> impl Strategy<Value = String> {
        prop_oneof!["[a-zA-Z]{1,10}", "[0-9]{3}"]
    }

    proptest! {
        #[test]
        fn format_then_parse_is_identity(
            prefix in arb_prefix(),
            command in arb_command(),
            params in "[^\\x00\\r\\n]{0,80}",
        ) {
            let msg = Message { prefix, command, params };
            let reparsed: Message = msg.to_string().parse().unwrap();
            prop_assert_eq!(reparsed, msg);
        }
    }
}
