// deltazap-core/deltazap-core
//
// Copyright: 2024, DeltaZap Team
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use immediate_client_event_dispatcher::ImmediateClientEventDispatcher;

mod immediate_client_event_dispatcher;
