// deltazap-core/deltazap-xmpp
//
// Copyright: 2024, DeltaZap Team
// License: Mozilla Public License v2.0 (MPL v2.0)

use minidom::{Element, ElementBuilder};

use crate::util::ParseError;

/// Helpers for parsing the payloads we attach to messages.
pub trait ElementExt {
    /// Fails unless the element is `<name xmlns='ns'/>`.
    fn expect_is(&self, name: &str, ns: &str) -> Result<(), ParseError>;
    fn attr_req(&self, name: &str) -> Result<&str, ParseError>;
    /// Reads an `xs:boolean` attribute. A missing attribute yields `None`.
    fn attr_bool(&self, name: &str) -> Result<Option<bool>, ParseError>;
}

pub trait ElementBuilderExt {
    fn attr_bool(self, name: &str, value: bool) -> ElementBuilder;
    /// Only writes the attribute if `value` is `Some(true)`.
    fn attr_bool_opt(self, name: &str, value: Option<bool>) -> ElementBuilder;
}

impl ElementExt for Element {
    fn expect_is(&self, name: &str, ns: &str) -> Result<(), ParseError> {
        if self.is(name, ns) {
            return Ok(());
        }
        Err(ParseError::Generic {
            msg: format!(
                "Expected <{name} xmlns='{ns}'/> but found <{} xmlns='{}'/>.",
                self.name(),
                self.ns()
            ),
        })
    }

    fn attr_req(&self, name: &str) -> Result<&str, ParseError> {
        self.attr(name).ok_or_else(|| ParseError::Generic {
            msg: format!("<{}/> is missing the attribute '{name}'.", self.name()),
        })
    }

    fn attr_bool(&self, name: &str) -> Result<Option<bool>, ParseError> {
        let Some(value) = self.attr(name) else {
            return Ok(None);
        };
        match value {
            "true" | "1" => Ok(Some(true)),
            "false" | "0" => Ok(Some(false)),
            other => Err(ParseError::Generic {
                msg: format!("'{other}' is not a boolean (attribute '{name}')."),
            }),
        }
    }
}

impl ElementBuilderExt for ElementBuilder {
    fn attr_bool(self, name: &str, value: bool) -> ElementBuilder {
        self.attr(name, value.to_string())
    }

    fn attr_bool_opt(self, name: &str, value: Option<bool>) -> ElementBuilder {
        match value {
            Some(true) => self.attr_bool(name, true),
            _ => self,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    #[test]
    fn test_attr_bool() {
        let elem =
            Element::from_str(r#"<x xmlns="urn:test" a="true" b="0" c="maybe"/>"#).unwrap();
        assert_eq!(elem.attr_bool("a").unwrap(), Some(true));
        assert_eq!(elem.attr_bool("b").unwrap(), Some(false));
        assert_eq!(elem.attr_bool("d").unwrap(), None);
        assert!(elem.attr_bool("c").is_err());
    }

    #[test]
    fn test_expect_is() {
        let elem = Element::from_str(r#"<x xmlns="urn:test"/>"#).unwrap();
        assert!(elem.expect_is("x", "urn:test").is_ok());
        assert!(elem.expect_is("x", "urn:other").is_err());
        assert!(elem.expect_is("y", "urn:test").is_err());
    }
}
