// deltazap-core/deltazap-xmpp
//
// Copyright: 2024, DeltaZap Team
// License: Mozilla Public License v2.0 (MPL v2.0)

use xmpp_parsers::stanza_error::StanzaError;

/// The ways an IQ request can fail.
#[derive(Debug, thiserror::Error)]
pub enum RequestError {
    #[error("The server didn't respond in time.")]
    TimedOut,
    #[error("The server sent an unexpected response.")]
    UnexpectedResponse,
    #[error("The connection was closed before a response arrived.")]
    Disconnected,
    #[error("The server returned an error: {:?}", err.defined_condition)]
    XMPP { err: StanzaError },
    #[error("{msg}")]
    Generic { msg: String },
}

#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("Parse error: {msg}")]
    Generic { msg: String },
}
