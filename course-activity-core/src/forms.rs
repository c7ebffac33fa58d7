//! Checks behind the form widgets.

/// Alert shown when the confirmation does not repeat the password
pub const PASSWORD_MISMATCH_MESSAGE: &str = "两次输入的密码不一致，请重新输入";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PasswordCheck {
    Match,
    Mismatch,
    /// One of the two fields is not on the form
    Incomplete,
}

impl PasswordCheck {
    pub fn blocks_submit(&self) -> bool {
        matches!(self, PasswordCheck::Mismatch)
    }
}

pub fn check_password_confirmation(password: Option<&str>, confirm: Option<&str>) -> PasswordCheck {
    match (password, confirm) {
        (Some(password), Some(confirm)) if password == confirm => PasswordCheck::Match,
        (Some(_), Some(_)) => PasswordCheck::Mismatch,
        _ => PasswordCheck::Incomplete,
    }
}
