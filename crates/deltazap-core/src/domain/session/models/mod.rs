// deltazap-core/deltazap-core
//
// Copyright: 2024, DeltaZap Team
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use login_error::{parse_login_address, LoginError};
pub use session_data::{NotificationPermission, SessionData};
pub use session_markers::SessionMarkers;
pub use session_status::SessionStatus;

mod login_error;
mod session_data;
mod session_markers;
mod session_status;
