// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::Marker;
use std::str::FromStr;

/// A `NAME=LITERAL` command line argument. Only the first `=` separates the name from
/// the literal, so a literal may contain `=`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkerArg {
    pub name: String,
    pub literal: String,
}

impl FromStr for MarkerArg {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.split_once('=') {
            Some((name, literal)) if !name.is_empty() => Ok(Self {
                name: name.to_string(),
                literal: literal.to_string(),
            }),
            _ => Err(format!("Expected NAME=LITERAL, got: {s:?}")),
        }
    }
}

impl MarkerArg {
    /// # Errors
    ///
    /// Returns an error if `decode_escapes` is set and the literal has an unknown or
    /// truncated escape sequence.
    pub fn try_into_marker(&self, decode_escapes: bool) -> Result<Marker, String> {
        let literal = if decode_escapes {
            decode_escape_sequences(&self.literal)?
        } else {
            self.literal.clone()
        };
        Ok(Marker::new(&self.name, literal))
    }
}

/// Shells make it hard to type an escape char, so the usual spellings of ESC are
/// accepted: `\e`, `\x1b`, `\033`. Also `\n`, `\t` and `\\`.
///
/// # Errors
///
/// Returns an error for any other escape, or a trailing `\`.
pub fn decode_escape_sequences(input: &str) -> Result<String, String> {
    const ESCAPE_SPELLINGS: [(&str, char); 6] = [
        ("x1b", '\x1b'),
        ("033", '\x1b'),
        ("e", '\x1b'),
        ("n", '\n'),
        ("t", '\t'),
        ("\\", '\\'),
    ];

    let mut acc = String::with_capacity(input.len());
    let mut rest = input;

    while let Some(backslash_index) = rest.find('\\') {
        acc.push_str(&rest[..backslash_index]);
        let after = &rest[backslash_index + 1..];

        let Some((spelling, ch)) = ESCAPE_SPELLINGS
            .iter()
            .find(|(spelling, _)| after.starts_with(*spelling))
        else {
            return Err(format!("Unknown escape sequence in {input:?}"));
        };

        acc.push(*ch);
        rest = &after[spelling.len()..];
    }

    acc.push_str(rest);
    Ok(acc)
}
