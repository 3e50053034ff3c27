// Copyright (C) 2024 - 2025 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use std::fmt::{Display, Formatter};

use super::{Keyword, Punctuator};

/// A lexical token. Literal text is carried inside the variant; the integer
/// payload stays a string so that numeric conversion (and its failure) is the
/// parser's business.
#[derive(Clone, Debug, PartialEq)]
pub enum Token {
    Keyword(Keyword),

    Identifier(String),
    Integer(String),
    StringLiteral(String),

    Punctuator(Punctuator),
    Illegal(char),
    EndOfFile,
}

impl Token {
    /// The kind label as it appears in parser diagnostics, e.g. `IDENTIFIER`,
    /// `INT` or the punctuator's literal text.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Keyword(keyword) => keyword.name(),

            Self::Identifier(..) => "IDENTIFIER",
            Self::Integer(..) => "INT",
            Self::StringLiteral(..) => "STRING",

            Self::Punctuator(punctuator) => punctuator.as_str(),
            Self::Illegal(..) => "ILLEGAL",
            Self::EndOfFile => "EOF",
        }
    }

    #[must_use]
    pub fn is_punctuator(&self, punctuator: Punctuator) -> bool {
        *self == Self::Punctuator(punctuator)
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Keyword(keyword) => f.write_str(keyword.as_ref()),
            Self::Identifier(ident) => ident.fmt(f),
            Self::Integer(int) => int.fmt(f),
            Self::StringLiteral(str) => f.write_fmt(format_args!("\"{str}\"")),
            Self::Punctuator(punctuator) => punctuator.fmt(f),
            Self::Illegal(ch) => ch.fmt(f),
            Self::EndOfFile => Ok(()),
        }
    }
}
