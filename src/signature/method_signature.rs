use std::{borrow::Cow, fmt, str::FromStr};

use serde::Serialize;

use crate::{SignatureError, argument::Argument, modifier::AccessModifier, parser::SignatureParser};

/// Represents a method declaration consisting of an optional access modifier,
/// a return type, a name and its arguments
///
/// Values are built in one step and expose no mutators.
///
/// # Examples
///
/// ```
///  use sigline::{AccessModifier, MethodSignature};
///
///  let m: MethodSignature = "public void log(String value)".parse().unwrap();
///  assert_eq!(m.access_modifier(), Some(AccessModifier::Public));
///  assert_eq!(m.return_type(), "void");
///  assert_eq!(m.arguments()[0].name(), "value");
/// ```
#[derive(Debug, PartialEq, Eq, Hash, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct MethodSignature<'a> {
    access_modifier: Option<AccessModifier>,
    return_type: Cow<'a, str>,
    method_name: Cow<'a, str>,
    arguments: Vec<Argument<'a>>,
}

impl<'a> MethodSignature<'a> {
    pub fn new(
        access_modifier: Option<AccessModifier>,
        return_type: impl Into<Cow<'a, str>>,
        method_name: impl Into<Cow<'a, str>>,
        arguments: Vec<Argument<'a>>,
    ) -> Self {
        MethodSignature {
            access_modifier,
            return_type: return_type.into(),
            method_name: method_name.into(),
            arguments,
        }
    }

    pub fn access_modifier(&self) -> Option<AccessModifier> {
        self.access_modifier
    }

    pub fn return_type(&self) -> &str {
        &self.return_type
    }

    pub fn method_name(&self) -> &str {
        &self.method_name
    }

    /// Arguments in declaration order
    pub fn arguments(&self) -> &[Argument<'a>] {
        &self.arguments
    }

    pub fn into_owned(self) -> MethodSignature<'static> {
        MethodSignature {
            access_modifier: self.access_modifier,
            return_type: Cow::Owned(self.return_type.into_owned()),
            method_name: Cow::Owned(self.method_name.into_owned()),
            arguments: self.arguments.into_iter().map(Argument::into_owned).collect(),
        }
    }
}

impl fmt::Display for MethodSignature<'_> {
    /// Canonical form: single spaces between tokens and `", "` between arguments.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(m) = self.access_modifier {
            write!(f, "{m} ")?;
        }
        write!(f, "{} {}(", self.return_type, self.method_name)?;
        for (i, a) in self.arguments.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{a}")?;
        }
        f.write_str(")")
    }
}

impl FromStr for MethodSignature<'static> {
    type Err = SignatureError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SignatureParser::new().parse(s).map(MethodSignature::into_owned)
    }
}
