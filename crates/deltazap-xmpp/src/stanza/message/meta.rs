// deltazap-core/deltazap-xmpp
//
// Copyright: 2024, DeltaZap Team
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::str::FromStr;

use minidom::Element;
use strum_macros::{Display, EnumString};
use xmpp_parsers::message::MessagePayload;

use crate::util::{ElementBuilderExt, ElementExt};
use crate::{ns, ParseError};

#[derive(Debug, PartialEq, Eq, Clone, Copy, Default, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum PayloadKind {
    #[default]
    Text,
    Image,
    Document,
}

/// Describes how the body of a message should be interpreted. For images and documents the
/// body carries the URL of the payload.
#[derive(Debug, PartialEq, Clone, Default)]
pub struct MessageMeta {
    pub kind: PayloadKind,
    pub filename: Option<String>,
    pub forwarded: bool,
}

impl TryFrom<Element> for MessageMeta {
    type Error = ParseError;

    fn try_from(value: Element) -> Result<Self, Self::Error> {
        value.expect_is("meta", ns::DELTAZAP_MESSAGE_META)?;

        let kind = match value.attr("kind") {
            Some(kind) => PayloadKind::from_str(kind).map_err(|_| ParseError::Generic {
                msg: format!("Unknown payload kind '{}'.", kind),
            })?,
            None => PayloadKind::Text,
        };

        Ok(Self {
            kind,
            filename: value.attr("filename").map(ToString::to_string),
            forwarded: value.attr_bool("forwarded")?.unwrap_or(false),
        })
    }
}

impl From<MessageMeta> for Element {
    fn from(value: MessageMeta) -> Self {
        Element::builder("meta", ns::DELTAZAP_MESSAGE_META)
            .attr("kind", value.kind.to_string())
            .attr("filename", value.filename)
            .attr_bool("forwarded", value.forwarded)
            .build()
    }
}

impl MessagePayload for MessageMeta {}

#[cfg(test)]
mod tests {
    use anyhow::Result;

    use super::*;

    #[test]
    fn test_deserialize_meta() -> Result<()> {
        let xml = r#"<meta xmlns='urn:deltazap:message:0' kind='image' filename='cat.png' forwarded='true'/>"#;
        let meta = MessageMeta::try_from(Element::from_str(xml)?)?;

        assert_eq!(
            meta,
            MessageMeta {
                kind: PayloadKind::Image,
                filename: Some("cat.png".to_string()),
                forwarded: true,
            }
        );
        Ok(())
    }

    #[test]
    fn test_deserialize_minimal_meta() -> Result<()> {
        let xml = r#"<meta xmlns='urn:deltazap:message:0'/>"#;
        let meta = MessageMeta::try_from(Element::from_str(xml)?)?;
        assert_eq!(meta, MessageMeta::default());
        Ok(())
    }

    #[test]
    fn test_rejects_unknown_kind() -> Result<()> {
        let xml = r#"<meta xmlns='urn:deltazap:message:0' kind='video'/>"#;
        assert!(MessageMeta::try_from(Element::from_str(xml)?).is_err());
        Ok(())
    }
}
