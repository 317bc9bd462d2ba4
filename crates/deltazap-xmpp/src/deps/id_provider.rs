// deltazap-core/deltazap-xmpp
//
// Copyright: 2024, DeltaZap Team
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::sync::Arc;

use uuid::Uuid;

pub trait IDProvider: Send + Sync {
    fn new_id(&self) -> String;
}

#[derive(Default)]
pub struct UUIDProvider {}

impl UUIDProvider {
    pub fn new() -> Self {
        UUIDProvider {}
    }
}

impl IDProvider for UUIDProvider {
    fn new_id(&self) -> String {
        Uuid::new_v4().to_string()
    }
}

impl<T: IDProvider + ?Sized> IDProvider for Arc<T> {
    fn new_id(&self) -> String {
        (**self).new_id()
    }
}
