// src/gui/components/mod.rs
pub mod header;
pub mod history_table;
pub mod login;
pub mod record_card;
pub mod scan_panel;
pub mod status_bar;
