// deltazap-core/deltazap-core
//
// Copyright: 2024, DeltaZap Team
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use headless::{HeadlessNotificationService, HeadlessWindowFocusProvider};
pub use nano_id_provider::NanoIDProvider;

mod headless;
mod nano_id_provider;
