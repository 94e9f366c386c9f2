//! Command line parsing.
//!
//! Lines starting with `/` are commands; anything else is a new post.
//! Missing auth arguments are passed through as empty strings so the usual
//! validation message is shown.

use tweetline_proto::PostId;

/// A parsed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `/login <username> <password>`
    Login {
        /// Username (may be empty).
        username: String,
        /// Password (may be empty).
        password: String,
    },
    /// `/register <username> <email> <password>`
    Register {
        /// Username (may be empty).
        username: String,
        /// Email (may be empty).
        email: String,
        /// Password (may be empty).
        password: String,
    },
    /// `/user [name]`; `/all` is the same with no name.
    Filter {
        /// Raw author input. Blank clears the filter.
        author: String,
    },
    /// `/refresh`
    Refresh,
    /// `/like <id>`
    Like {
        /// Target post.
        id: PostId,
    },
    /// `/edit <id> <content>`
    Edit {
        /// Target post.
        id: PostId,
        /// Replacement text.
        content: String,
    },
    /// `/delete <id>`
    Delete {
        /// Target post.
        id: PostId,
    },
    /// `/theme`
    ToggleTheme,
    /// `/logout`
    Logout,
    /// `/quit`
    Quit,
    /// Plain text: create a post.
    Post {
        /// Post text, as typed.
        content: String,
    },
    /// Unrecognised `/command`.
    Unknown {
        /// The command word.
        input: String,
    },
    /// Known command with unusable arguments.
    InvalidArgs {
        /// The command word.
        command: String,
        /// What is wrong.
        error: String,
    },
}

/// Parse one input line.
pub fn parse(line: &str) -> Command {
    let Some(rest) = line.strip_prefix('/') else {
        return Command::Post { content: line.to_string() };
    };

    let (name, args) = rest.split_once(char::is_whitespace).unwrap_or((rest, ""));
    let mut words = args.split_whitespace().map(str::to_string);
    let mut next = || words.next().unwrap_or_default();

    match name {
        "login" => Command::Login { username: next(), password: next() },
        "register" => Command::Register { username: next(), email: next(), password: next() },
        "user" => Command::Filter { author: args.to_string() },
        "all" => Command::Filter { author: String::new() },
        "refresh" => Command::Refresh,
        "like" => with_id(name, args, |id, _| Command::Like { id }),
        "delete" => with_id(name, args, |id, _| Command::Delete { id }),
        "edit" => with_id(name, args, |id, content| Command::Edit { id, content }),
        "theme" => Command::ToggleTheme,
        "logout" => Command::Logout,
        "quit" | "q" => Command::Quit,
        _ => Command::Unknown { input: name.to_string() },
    }
}

fn with_id(name: &str, args: &str, build: impl FnOnce(PostId, String) -> Command) -> Command {
    let args = args.trim_start();
    let (id, rest) = args.split_once(char::is_whitespace).unwrap_or((args, ""));
    match id.parse::<u64>() {
        Ok(id) => build(PostId(id), rest.trim_start().to_string()),
        Err(_) => Command::InvalidArgs {
            command: name.to_string(),
            error: "expected a tweet id".to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_text_is_a_post() {
        assert_eq!(parse("hello world"), Command::Post { content: "hello world".into() });
    }

    #[test]
    fn login_with_missing_password_keeps_empty_field() {
        assert_eq!(parse("/login ana"), Command::Login {
            username: "ana".into(),
            password: String::new()
        });
    }

    #[test]
    fn edit_keeps_content_spacing() {
        assert_eq!(parse("/edit 12 new  text"), Command::Edit {
            id: PostId(12),
            content: "new  text".into()
        });
    }

    #[test]
    fn bad_id_is_invalid_args() {
        assert!(matches!(parse("/like abc"), Command::InvalidArgs { .. }));
        assert!(matches!(parse("/delete"), Command::InvalidArgs { .. }));
    }

    #[test]
    fn user_without_name_clears_filter() {
        assert_eq!(parse("/user"), Command::Filter { author: String::new() });
        assert_eq!(parse("/user  ana "), Command::Filter { author: " ana ".into() });
    }

    #[test]
    fn unknown_command() {
        assert_eq!(parse("/dance"), Command::Unknown { input: "dance".into() });
    }
}
