// deltazap-core/deltazap-core
//
// Copyright: 2024, DeltaZap Team
// License: Mozilla Public License v2.0 (MPL v2.0)

use deltazap_xmpp::stanza::message::PayloadKind;

use crate::domain::conversations::models::ContentKind;

impl From<PayloadKind> for ContentKind {
    fn from(value: PayloadKind) -> Self {
        match value {
            PayloadKind::Text => ContentKind::Text,
            PayloadKind::Image => ContentKind::Image,
            PayloadKind::Document => ContentKind::Document,
        }
    }
}

impl From<ContentKind> for PayloadKind {
    fn from(value: ContentKind) -> Self {
        match value {
            ContentKind::Text => PayloadKind::Text,
            ContentKind::Image => PayloadKind::Image,
            ContentKind::Document => PayloadKind::Document,
        }
    }
}
