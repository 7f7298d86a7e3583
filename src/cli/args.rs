//! Command-line argument parsing.
//!
//! Grammar: the first token is the command; after it, `--name` starts a
//! flag that consumes the next token as its value unless that token is
//! empty or itself starts with `--` (then the flag is a bare switch); every
//! other token is positional.

use std::collections::BTreeMap;

/// Value attached to a flag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlagValue {
    /// `--name value`
    Value(String),
    /// `--name` with no value following.
    Switch,
}

/// A parsed command line. Built once per process and never mutated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Invocation {
    pub command: Option<String>,
    pub flags: BTreeMap<String, FlagValue>,
    pub positional: Vec<String>,
}

impl Invocation {
    /// Parse arguments that follow the program name.
    pub fn parse<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut tokens = args.into_iter().map(Into::into).peekable();
        let command = tokens.next();
        let mut flags = BTreeMap::new();
        let mut positional = Vec::new();

        while let Some(token) = tokens.next() {
            let Some(name) = token.strip_prefix("--") else {
                positional.push(token);
                continue;
            };

            let takes_value = tokens
                .peek()
                .is_some_and(|next| !next.is_empty() && !next.starts_with("--"));
            let value = match tokens.next_if(|_| takes_value) {
                Some(v) => FlagValue::Value(v),
                None => FlagValue::Switch,
            };
            flags.insert(name.to_string(), value);
        }

        Self {
            command,
            flags,
            positional,
        }
    }

    /// Raw flag lookup.
    pub fn flag(&self, name: &str) -> Option<&FlagValue> {
        self.flags.get(name)
    }

    /// Flag value, if the flag was given with one.
    pub fn flag_str(&self, name: &str) -> Option<&str> {
        match self.flags.get(name) {
            Some(FlagValue::Value(v)) => Some(v.as_str()),
            _ => None,
        }
    }

    /// Positional argument at `index`.
    pub fn positional(&self, index: usize) -> Option<&str> {
        self.positional.get(index).map(String::as_str)
    }
}
