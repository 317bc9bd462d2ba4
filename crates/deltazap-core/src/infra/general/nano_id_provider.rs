// deltazap-core/deltazap-core
//
// Copyright: 2024, DeltaZap Team
// License: Mozilla Public License v2.0 (MPL v2.0)

use nanoid::nanoid;

use deltazap_xmpp::IDProvider;

/// Generates short alphanumeric ids, used as resource of the connected account.
#[derive(Default)]
pub struct NanoIDProvider {}

impl IDProvider for NanoIDProvider {
    fn new_id(&self) -> String {
        let chars = ('a'..='z')
            .chain('A'..='Z')
            .chain('0'..='9')
            .collect::<Vec<char>>();
        nanoid!(8, &chars)
    }
}
