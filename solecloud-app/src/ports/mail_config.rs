/// Presence of the mail credentials, never their values.
pub trait MailConfigPort {
    fn has_username(&self) -> bool;
    fn has_password(&self) -> bool;
}

pub struct MockMailConfig {
    pub username: bool,
    pub password: bool,
}

impl MailConfigPort for MockMailConfig {
    fn has_username(&self) -> bool {
        self.username
    }

    fn has_password(&self) -> bool {
        self.password
    }
}
