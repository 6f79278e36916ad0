pub mod banner;
pub mod promotional_messages;
pub mod selector;
pub mod store;
