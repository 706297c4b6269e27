use std::{borrow::Cow, fmt};

use nom::{
    Parser,
    branch::alt,
    bytes::complete::{tag, take_till1, take_until},
    character::complete::char,
    combinator::rest,
    error::Error,
    multi::separated_list1,
    sequence::separated_pair,
};
use serde::Serialize;

/// A formal parameter: a type token followed by a name token
///
/// # Examples
///
/// ```
///  use sigline::Argument;
///
///  let a = Argument::new("String", "value");
///  assert_eq!(a.ty(), "String");
///  assert_eq!(a.to_string(), "String value");
/// ```
#[derive(Debug, PartialEq, Eq, Hash, Serialize, Clone)]
pub struct Argument<'a> {
    #[serde(rename = "type")]
    ty: Cow<'a, str>,
    name: Cow<'a, str>,
}

impl<'a> Argument<'a> {
    pub fn new(ty: impl Into<Cow<'a, str>>, name: impl Into<Cow<'a, str>>) -> Self {
        Argument {
            ty: ty.into(),
            name: name.into(),
        }
    }

    /// Type token, e.g. `int` or `String`
    pub fn ty(&self) -> &str {
        &self.ty
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn into_owned(self) -> Argument<'static> {
        Argument {
            ty: Cow::Owned(self.ty.into_owned()),
            name: Cow::Owned(self.name.into_owned()),
        }
    }
}

impl fmt::Display for Argument<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.ty, self.name)
    }
}

/// Parses `<type> <name>` separated by exactly one space. Neither token may be
/// empty or contain a space; anything left over is the caller's to reject.
pub fn parse_argument<'a>() -> impl Parser<&'a str, Output = Argument<'a>, Error = Error<&'a str>>
{
    separated_pair(
        take_till1(|c: char| c == ' '),
        char(' '),
        take_till1(|c: char| c == ' '),
    )
    .map(|(ty, name)| Argument::new(ty, name))
}

/// Splits a raw argument list on the literal `", "`, keeping empty segments so
/// that `"int a, "` yields `["int a", ""]`.
pub(crate) fn parse_argument_segments<'a>()
-> impl Parser<&'a str, Output = Vec<&'a str>, Error = Error<&'a str>> {
    separated_list1(tag(", "), alt((take_until(", "), rest)))
}
