use std::ffi::OsString;

use clap::Parser;

/// Prints the GSD workflow document for a command so a coding agent can
/// follow it.
///
/// clap's own `--help`/`--version` flags are disabled: `--help` and `-h`
/// reach the dispatcher as ordinary words and select the GSD help text.
#[derive(Parser, Debug, Clone)]
#[command(name = "gsd", disable_help_flag = true, disable_version_flag = true)]
pub struct Args {
    /// Command name followed by its arguments, passed through verbatim.
    #[arg(
        trailing_var_arg = true,
        allow_hyphen_values = true,
        value_parser = clap::value_parser!(OsString)
    )]
    pub words: Vec<OsString>,
}

impl Args {
    /// Parses `argv` taking every word after the program name literally,
    /// including a leading `--` and bytes that are not valid UTF-8.
    pub fn parse_verbatim<I, T>(argv: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        let mut argv = argv.into_iter().map(Into::into);
        let program = argv.next().unwrap_or_else(|| OsString::from("gsd"));
        // an explicit escape ends option parsing; a user's `--` after it is a value
        let escaped = [program, OsString::from("--")].into_iter().chain(argv);
        Self::parse_from(escaped)
    }

    /// The words as text; invalid UTF-8 is replaced, never rejected.
    pub fn into_words(self) -> Vec<String> {
        self.words
            .into_iter()
            .map(|w| w.to_string_lossy().into_owned())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn words(argv: &[&str]) -> Vec<String> {
        Args::parse_verbatim(argv.iter().copied()).into_words()
    }

    #[test]
    fn parser_builds() {
        Args::command().debug_assert();
    }

    #[test]
    fn splits_command_and_arguments() {
        assert_eq!(
            words(&["gsd", "insert-phase", "2", "fix auth"]),
            ["insert-phase", "2", "fix auth"]
        );
    }

    #[test]
    fn empty_invocation() {
        assert!(words(&["gsd"]).is_empty());
    }

    #[test]
    fn help_flags_are_plain_words() {
        for flag in ["--help", "-h", "--version", "-V"] {
            assert_eq!(words(&["gsd", flag]), [flag]);
        }
    }

    #[test]
    fn hyphenated_arguments_pass_through() {
        assert_eq!(
            words(&["gsd", "remove-phase", "4", "--force"]),
            ["remove-phase", "4", "--force"]
        );
    }

    #[test]
    fn leading_double_dash_is_kept() {
        assert_eq!(words(&["gsd", "--"]), ["--"]);
        assert_eq!(words(&["gsd", "--", "quick"]), ["--", "quick"]);
        assert_eq!(words(&["gsd", "quick", "--", "x"]), ["quick", "--", "x"]);
    }

    #[test]
    fn empty_word_is_kept() {
        assert_eq!(words(&["gsd", ""]), [""]);
    }

    #[cfg(unix)]
    #[test]
    fn invalid_utf8_is_replaced() {
        use std::os::unix::ffi::OsStringExt;

        let argv = vec![
            OsString::from("gsd"),
            OsString::from("quick"),
            OsString::from_vec(vec![b'a', 0xff, b'b']),
        ];
        assert_eq!(
            Args::parse_verbatim(argv).into_words(),
            ["quick", "a\u{fffd}b"]
        );
    }
}
