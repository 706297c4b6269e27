use std::{fmt, str::FromStr};

use nom::{
    Parser,
    branch::alt,
    bytes::complete::tag,
    combinator::{all_consuming, value},
    error::Error,
};
use serde::{Deserialize, Serialize};

use crate::SignatureError;

/// Visibility keyword that may lead a signature
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccessModifier {
    Public,
    Private,
    Protected,
}

impl FromStr for AccessModifier {
    type Err = SignatureError;

    /// Only an exact keyword matches, `publicity` or `Public` do not.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        all_consuming(parse_access_modifier())
            .parse_complete(s)
            .map(|(_, m)| m)
            .map_err(|_| SignatureError::UnknownModifier(s.to_string()))
    }
}

impl AccessModifier {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Public => "public",
            Self::Private => "private",
            Self::Protected => "protected",
        }
    }
}

impl fmt::Display for AccessModifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Recognises a modifier keyword at the start of the input. Callers that need
/// a whole-token match wrap it in `all_consuming`.
pub fn parse_access_modifier<'a>()
-> impl Parser<&'a str, Output = AccessModifier, Error = Error<&'a str>> {
    alt((
        value(AccessModifier::Public, tag("public")),
        value(AccessModifier::Protected, tag("protected")),
        value(AccessModifier::Private, tag("private")),
    ))
}
