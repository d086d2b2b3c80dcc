use std::collections::HashMap;
use std::path::PathBuf;

/// Value of a command-line flag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArgValue {
    /// `--flag=value`
    Text(String),
    /// `--flag` or a letter of `-xyz`
    Switch,
}

#[derive(Debug, thiserror::Error)]
pub enum ArgsError {
    #[error("args.missing_value: --{0} needs a value, e.g. --{0}=<dir>")]
    MissingValue(String),
}

/// Flat flag map built from the raw argument list.
///
/// Malformed or repeated flags are never rejected: the last occurrence of a
/// flag wins and arguments that do not start with `-` are ignored.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Args {
    flags: HashMap<String, ArgValue>,
}

impl Args {
    /// Parses arguments, excluding the program name.
    pub fn parse<I, S>(raw: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut flags = HashMap::new();
        for arg in raw {
            let arg = arg.as_ref();
            if let Some(long) = arg.strip_prefix("--") {
                match long.split_once('=') {
                    Some((flag, value)) => {
                        flags.insert(flag.to_string(), ArgValue::Text(value.to_string()))
                    }
                    None => flags.insert(long.to_string(), ArgValue::Switch),
                };
            } else if let Some(short) = arg.strip_prefix('-') {
                for flag in short.chars() {
                    flags.insert(flag.to_string(), ArgValue::Switch);
                }
            }
        }
        Self { flags }
    }

    /// Parses the arguments of the running process.
    pub fn from_env() -> Self {
        Self::parse(
            std::env::args_os()
                .skip(1)
                .map(|arg| arg.to_string_lossy().into_owned()),
        )
    }

    pub fn get(&self, flag: &str) -> Option<&ArgValue> {
        self.flags.get(flag)
    }

    /// Working directory given with `--path=<dir>`, if any.
    pub fn path(&self) -> Result<Option<PathBuf>, ArgsError> {
        match self.get("path") {
            None => Ok(None),
            Some(ArgValue::Text(dir)) => Ok(Some(PathBuf::from(dir))),
            Some(ArgValue::Switch) => Err(ArgsError::MissingValue("path".to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn should_map_long_flag_with_value_to_text() {
        let args = Args::parse(["--path=/srv/accounts/1"]);

        assert_eq!(
            args.get("path"),
            Some(&ArgValue::Text("/srv/accounts/1".to_string()))
        );
    }

    #[test]
    fn should_map_long_flag_without_value_to_switch() {
        let args = Args::parse(["--verbose"]);

        assert_eq!(args.get("verbose"), Some(&ArgValue::Switch));
    }

    #[test]
    fn should_split_short_flags_into_switches() {
        let args = Args::parse(["-ab"]);

        assert_eq!(args.get("a"), Some(&ArgValue::Switch));
        assert_eq!(args.get("b"), Some(&ArgValue::Switch));
        assert_eq!(args.get("ab"), None);
    }

    // Everything after the first `=` is the value. The earlier tool split on
    // every `=` and kept only the second piece, which cut such paths short.
    #[test]
    fn should_keep_equals_signs_inside_value() {
        let args = Args::parse(["--path=/data/key=value"]);

        assert_eq!(
            args.get("path"),
            Some(&ArgValue::Text("/data/key=value".to_string()))
        );
    }

    #[test]
    fn should_let_later_occurrence_win() {
        let args = Args::parse(["--path=/first", "--path=/second"]);

        assert_eq!(args.path().unwrap(), Some(PathBuf::from("/second")));
    }

    #[test]
    fn should_ignore_positional_arguments() {
        let args = Args::parse(["index.js", "path=/nowhere"]);

        assert_eq!(args, Args::default());
    }

    #[test]
    fn should_return_none_when_path_is_absent() {
        let args = Args::parse(["-x", "--other=1"]);

        assert_eq!(args.path().unwrap(), None);
    }

    #[test]
    fn should_reject_path_without_value() {
        let args = Args::parse(["--path"]);

        let result = args.path();

        assert!(matches!(result, Err(ArgsError::MissingValue(flag)) if flag == "path"));
    }

    proptest! {
        #[test]
        fn long_flag_with_value_maps_to_text(flag in "[a-zA-Z][a-zA-Z0-9_-]{0,10}", value in "\\PC{0,20}") {
            let args = Args::parse([format!("--{}={}", flag, value)]);

            prop_assert_eq!(args.get(&flag), Some(&ArgValue::Text(value)));
        }

        #[test]
        fn long_flag_alone_maps_to_switch(flag in "[a-zA-Z][a-zA-Z0-9_-]{0,10}") {
            let args = Args::parse([format!("--{}", flag)]);

            prop_assert_eq!(args.get(&flag), Some(&ArgValue::Switch));
        }

        #[test]
        fn every_short_flag_letter_maps_to_switch(letters in "[a-zA-Z]{1,8}") {
            let args = Args::parse([format!("-{}", letters)]);

            for letter in letters.chars() {
                prop_assert_eq!(args.get(&letter.to_string()), Some(&ArgValue::Switch));
            }
        }
    }
}
