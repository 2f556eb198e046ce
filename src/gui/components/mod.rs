// src/gui/components/mod.rs
pub mod charts;
pub mod dashboard;
pub mod data_table;
pub mod export_bar;
pub mod receipts;
pub mod tabs;
