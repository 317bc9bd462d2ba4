// deltazap-core/deltazap-core
//
// Copyright: 2024, DeltaZap Team
// License: Mozilla Public License v2.0 (MPL v2.0)

#[cfg_attr(feature = "test", mockall::automock)]
pub trait WindowFocusProvider: Send + Sync {
    fn is_window_focused(&self) -> bool;
}
