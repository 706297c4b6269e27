use log::{debug, trace};
use nom::{Parser, combinator::all_consuming};

use crate::{
    SignatureError,
    argument::{Argument, parse_argument, parse_argument_segments},
    modifier::AccessModifier,
    signature::{method_signature::MethodSignature, parse_head_token, parse_name_prefix},
};

/// Turns a single-line signature such as
/// `accessModifier returnType methodName(argType argName, argType argName)`
/// into a [`MethodSignature`].
///
/// The input is decomposed left to right with bounded splits only: a head
/// token, an optional second head token when the first one is an access
/// modifier, the method name up to the first `(`, and the argument list up to
/// the last `)`. Anything after that `)` is ignored.
///
/// # Examples
///
/// ```
///  use sigline::SignatureParser;
///
///  let m = SignatureParser::new()
///      .parse("Vector3 distort(int x, int y, int z, float magnitude)")
///      .unwrap();
///  assert_eq!(m.access_modifier(), None);
///  assert_eq!(m.method_name(), "distort");
///  assert_eq!(m.arguments().len(), 4);
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SignatureParser;

impl SignatureParser {
    pub const fn new() -> Self {
        SignatureParser
    }

    pub fn parse<'a>(&self, signature: &'a str) -> Result<MethodSignature<'a>, SignatureError> {
        trace!("parsing signature {signature:?}");

        if signature.trim().is_empty() {
            debug!("rejecting empty signature");
            return Err(SignatureError::EmptyInput);
        }

        let (rest, head) = split_head(signature, signature, "no whitespace after the first token")?;
        let (access_modifier, return_type, rest) = match head.parse::<AccessModifier>() {
            Ok(m) => {
                let (rest, return_type) =
                    split_head(signature, rest, "no whitespace after the return type")?;
                (Some(m), return_type, rest)
            }
            Err(_) => (None, head, rest),
        };
        trace!("modifier {access_modifier:?}, return type {return_type:?}");

        let (inner, raw_name) = parse_name_prefix()
            .parse_complete(rest)
            .map_err(|_| reject(signature, "missing `(`"))?;
        let method_name = raw_name.trim();
        if method_name.is_empty() {
            return Err(reject(signature, "missing method name"));
        }

        let close = inner
            .rfind(')')
            .ok_or_else(|| reject(signature, "missing `)` after `(`"))?;
        let (raw_arguments, tail) = (&inner[..close], &inner[close + 1..]);
        if !tail.is_empty() {
            debug!("ignoring {tail:?} after the argument list of {method_name:?}");
        }

        let arguments = parse_arguments(raw_arguments)?;
        trace!("method {method_name:?} with {} argument(s)", arguments.len());

        Ok(MethodSignature::new(
            access_modifier,
            return_type,
            method_name,
            arguments,
        ))
    }
}

fn split_head<'a>(
    signature: &str,
    input: &'a str,
    reason: &'static str,
) -> Result<(&'a str, &'a str), SignatureError> {
    parse_head_token()
        .parse_complete(input)
        .map_err(|_| reject(signature, reason))
}

fn parse_arguments(raw: &str) -> Result<Vec<Argument<'_>>, SignatureError> {
    if raw.is_empty() {
        return Ok(Vec::new());
    }

    let (_, segments) = parse_argument_segments()
        .parse_complete(raw)
        .map_err(|_| SignatureError::malformed_argument(0, raw))?;

    segments
        .into_iter()
        .enumerate()
        .map(|(position, segment)| {
            all_consuming(parse_argument())
                .parse_complete(segment)
                .map(|(_, argument)| argument)
                .map_err(|_| {
                    debug!("rejecting argument #{position} {segment:?}");
                    SignatureError::malformed_argument(position, segment)
                })
        })
        .collect()
}

fn reject(signature: &str, reason: &'static str) -> SignatureError {
    debug!("rejecting {signature:?}: {reason}");
    SignatureError::malformed(signature, reason)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn parse(s: &str) -> Result<MethodSignature<'_>, SignatureError> {
        let _ = env_logger::builder().is_test(true).try_init();
        SignatureParser::new().parse(s)
    }

    #[test]
    fn test_public_void() {
        let m = parse("public void log(String value)").unwrap();
        assert_eq!(
            m,
            MethodSignature::new(
                Some(AccessModifier::Public),
                "void",
                "log",
                vec![Argument::new("String", "value")],
            )
        );
    }

    #[test]
    fn test_no_modifier() {
        let m = parse("Vector3 distort(int x, int y, int z, float magnitude)").unwrap();
        assert_eq!(m.access_modifier(), None);
        assert_eq!(m.return_type(), "Vector3");
        assert_eq!(m.method_name(), "distort");
        let args: Vec<_> = m.arguments().iter().map(|a| (a.ty(), a.name())).collect();
        assert_eq!(
            args,
            vec![("int", "x"), ("int", "y"), ("int", "z"), ("float", "magnitude")]
        );
    }

    #[test]
    fn test_no_arguments() {
        let m = parse("public DateTime getCurrentDateTime()").unwrap();
        assert_eq!(m.access_modifier(), Some(AccessModifier::Public));
        assert_eq!(m.return_type(), "DateTime");
        assert_eq!(m.method_name(), "getCurrentDateTime");
        assert!(m.arguments().is_empty());
    }

    #[test]
    fn test_each_modifier() {
        for (s, expected) in [
            ("public int f()", AccessModifier::Public),
            ("private int f()", AccessModifier::Private),
            ("protected int f()", AccessModifier::Protected),
        ] {
            assert_eq!(parse(s).unwrap().access_modifier(), Some(expected));
        }
    }

    #[test]
    fn test_modifier_lookalike_is_return_type() {
        let m = parse("publicity void f()").unwrap();
        assert_eq!(m.access_modifier(), None);
        assert_eq!(m.return_type(), "publicity");
        assert_eq!(m.method_name(), "void f");
    }

    #[test]
    fn test_extra_keyword_lands_in_name() {
        // only one leading keyword is special-cased
        let m = parse("private final int compute(int a, int b)").unwrap();
        assert_eq!(m.access_modifier(), Some(AccessModifier::Private));
        assert_eq!(m.return_type(), "final");
        assert_eq!(m.method_name(), "int compute");
        assert_eq!(m.arguments().len(), 2);
    }

    #[test]
    fn test_duplicate_argument_names_kept() {
        let m = parse("void f(int a, long a)").unwrap();
        assert_eq!(
            m.arguments(),
            &[Argument::new("int", "a"), Argument::new("long", "a")]
        );
    }

    #[test]
    fn test_outermost_parentheses() {
        let m = parse("void run(Fn(int) callback)").unwrap();
        assert_eq!(m.method_name(), "run");
        assert_eq!(m.arguments(), &[Argument::new("Fn(int)", "callback")]);
    }

    #[test]
    fn test_trailing_text_ignored() {
        let m = parse("int size() throws").unwrap();
        assert_eq!(m.method_name(), "size");
        assert!(m.arguments().is_empty());
    }

    #[test]
    fn test_borrows_from_input() {
        let input = String::from("int add(int a, int b)");
        let m = parse(&input).unwrap();
        let start = input.as_ptr() as usize;
        let name = m.method_name().as_ptr() as usize;
        assert_eq!(name - start, 4);
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(parse(""), Err(SignatureError::EmptyInput));
        assert_eq!(parse("   "), Err(SignatureError::EmptyInput));
    }

    #[test]
    fn test_single_token() {
        assert!(matches!(
            parse("foo"),
            Err(SignatureError::MalformedSignature { .. })
        ));
        assert!(matches!(
            parse("public"),
            Err(SignatureError::MalformedSignature { .. })
        ));
    }

    #[test]
    fn test_missing_return_type_after_modifier() {
        assert_eq!(
            parse("public log()"),
            Err(SignatureError::MalformedSignature {
                signature: "public log()".to_string(),
                reason: "no whitespace after the return type",
            })
        );
    }

    #[test]
    fn test_missing_parentheses() {
        assert_eq!(
            parse("void log"),
            Err(SignatureError::MalformedSignature {
                signature: "void log".to_string(),
                reason: "missing `(`",
            })
        );
        assert_eq!(
            parse("void log(String value"),
            Err(SignatureError::MalformedSignature {
                signature: "void log(String value".to_string(),
                reason: "missing `)` after `(`",
            })
        );
        assert!(matches!(
            parse("void log)("),
            Err(SignatureError::MalformedSignature { .. })
        ));
    }

    #[test]
    fn test_missing_method_name() {
        assert_eq!(
            parse("void (int a)"),
            Err(SignatureError::MalformedSignature {
                signature: "void (int a)".to_string(),
                reason: "missing method name",
            })
        );
    }

    #[test]
    fn test_malformed_arguments() {
        assert_eq!(
            parse("void f(int)"),
            Err(SignatureError::MalformedArgument {
                position: 0,
                argument: "int".to_string(),
            })
        );
        assert_eq!(
            parse("void f(int a, int b c)"),
            Err(SignatureError::MalformedArgument {
                position: 1,
                argument: "int b c".to_string(),
            })
        );
        assert_eq!(
            parse("void f(int a, )"),
            Err(SignatureError::MalformedArgument {
                position: 1,
                argument: String::new(),
            })
        );
        assert_eq!(
            parse("void f(int a,int b)"),
            Err(SignatureError::MalformedArgument {
                position: 0,
                argument: "int a,int b".to_string(),
            })
        );
        assert!(matches!(
            parse("void f( )"),
            Err(SignatureError::MalformedArgument { position: 0, .. })
        ));
    }
}
