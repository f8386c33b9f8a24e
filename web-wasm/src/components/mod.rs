//! 界面组件

pub mod action_bar;
pub mod claim_summary;
pub mod header;
pub mod preview_modal;
pub mod upload_panel;
