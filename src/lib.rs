//! # Sigline
//!
//! A library for parsing single-line, Java-like method signatures such as
//! `public void log(String value)` into structured values.
//!
//! The accepted grammar is
//!
//! ```text
//! [accessModifier ' ']? returnType ' ' methodName '(' [argType ' ' argName (', ' argType ' ' argName)*]? ')'
//! ```
//!
//! where `accessModifier` is one of `public`, `private` or `protected`.
//! Generics, annotations, varargs and multi-word types are not understood.
//!
pub use crate::{
    argument::Argument,
    error::SignatureError,
    modifier::AccessModifier,
    parser::SignatureParser,
    signature::method_signature::MethodSignature,
};

pub mod argument;
mod error;
pub mod modifier;
mod parser;
pub mod signature;

/// Parses a signature with the default [`SignatureParser`]
///
/// # Examples
///
/// ```
///  use sigline::{AccessModifier, parse_signature};
///
///  let m = parse_signature("public DateTime getCurrentDateTime()").unwrap();
///  assert_eq!(m.access_modifier(), Some(AccessModifier::Public));
///  assert_eq!(m.return_type(), "DateTime");
///  assert!(m.arguments().is_empty());
///
///  assert!(parse_signature("foo").is_err());
/// ```
pub fn parse_signature(signature: &str) -> Result<MethodSignature<'_>, SignatureError> {
    SignatureParser::new().parse(signature)
}
