pub mod promotional_message;
