pub mod email;
pub mod mail_config;
