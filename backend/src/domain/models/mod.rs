pub mod auth;
pub mod savings_goal;
pub mod support_request;
