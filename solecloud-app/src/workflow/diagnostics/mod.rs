pub mod mail_status;
