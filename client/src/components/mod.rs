//! Reusable view components shared by the pages.

pub mod ad_result_card;
pub mod auth_form;
pub mod sidebar;
pub mod toaster;
