// deltazap-core/deltazap-core
//
// Copyright: 2024, DeltaZap Team
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use constant_time_provider::ConstantTimeProvider;
pub use mock_app_dependencies::MockAppDependencies;


pub mod mock_data {
    pub use super::mock_app_dependencies::{
        mock_account as account, mock_account_jid as account_jid,
        mock_reference_date as reference_date,
    };
}

#[macro_export]
macro_rules! user_id {
    ($jid:expr) => {
        $jid.parse::<$crate::dtos::UserId>().unwrap()
    };
}

#[macro_export]
macro_rules! chat_id {
    ($jid:expr) => {
        $jid.parse::<$crate::dtos::ChatId>().unwrap()
    };
}
