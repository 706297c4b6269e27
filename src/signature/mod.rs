use nom::{
    Parser,
    bytes::complete::{take_till1, take_until, take_while1},
    character::complete::char,
    error::Error,
    sequence::terminated,
};

pub mod method_signature;

/// Splits off the leading token at the first whitespace run. The remaining
/// input is everything after that run, untouched.
pub(crate) fn parse_head_token<'a>() -> impl Parser<&'a str, Output = &'a str, Error = Error<&'a str>>
{
    terminated(
        take_till1(|c: char| c.is_whitespace()),
        take_while1(|c: char| c.is_whitespace()),
    )
}

/// Everything up to the first `(`, which is consumed. The prefix is returned
/// as-is; trimming is left to the caller.
pub(crate) fn parse_name_prefix<'a>()
-> impl Parser<&'a str, Output = &'a str, Error = Error<&'a str>> {
    terminated(take_until("("), char('('))
}
