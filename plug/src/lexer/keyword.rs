// Copyright (C) 2024 - 2025 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use strum::IntoEnumIterator;

#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
#[derive(strum::AsRefStr, strum::EnumIter)]
#[strum(serialize_all = "snake_case")]
pub enum Keyword {
    Else,
    False,
    For,
    Func,
    If,
    Let,
    Return,
    True,
}

impl Keyword {
    pub fn iter_variants() -> impl Iterator<Item = Self> {
        Self::iter()
    }

    pub fn parse(input: &str) -> Option<Self> {
        Self::iter().find(|x| x.as_ref() == input)
    }

    /// The kind label used in parser diagnostics.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Else => "ELSE",
            Self::False => "FALSE",
            Self::For => "FOR",
            Self::Func => "FUNC",
            Self::If => "IF",
            Self::Let => "LET",
            Self::Return => "RETURN",
            Self::True => "TRUE",
        }
    }
}
