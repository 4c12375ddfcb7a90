pub mod contact;
pub mod template;
