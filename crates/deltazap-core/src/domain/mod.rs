// deltazap-core/deltazap-core
//
// Copyright: 2024, DeltaZap Team
// License: Mozilla Public License v2.0 (MPL v2.0)

pub mod contacts;
pub mod content;
pub mod conversations;
pub mod presence;
pub mod session;
pub mod shared;
