pub mod container;
pub mod entry_bar;
pub mod header;
pub mod help_bar;
pub mod wish_list;
