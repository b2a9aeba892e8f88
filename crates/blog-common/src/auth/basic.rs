//! Basic-auth credential check for the admin surface

use crate::config::AdminConfig;
use crate::error::AppError;

/// Admin credentials accepted by Basic-auth protected routes
#[derive(Clone)]
pub struct AdminCredentials {
    username: String,
    password: String,
}

impl AdminCredentials {
    #[must_use]
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Check a username/password pair
    ///
    /// # Errors
    /// Returns `AppError::InvalidCredentials` on any mismatch
    pub fn verify(&self, username: &str, password: &str) -> Result<(), AppError> {
        // Evaluate both comparisons so a wrong username costs the same as a wrong password
        let user_ok = constant_time_eq(self.username.as_bytes(), username.as_bytes());
        let pass_ok = constant_time_eq(self.password.as_bytes(), password.as_bytes());

        if user_ok & pass_ok {
            Ok(())
        } else {
            Err(AppError::InvalidCredentials)
        }
    }
}

impl From<&AdminConfig> for AdminCredentials {
    fn from(config: &AdminConfig) -> Self {
        Self::new(config.username.clone(), config.password.clone())
    }
}

impl std::fmt::Debug for AdminCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdminCredentials")
            .field("username", &self.username)
            .finish_non_exhaustive()
    }
}

fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.iter().zip(b).fold(0u8, |acc, (x, y)| acc | (x ^ y)) == 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verify() {
        let creds = AdminCredentials::new("admin", "qwerty");
        assert!(creds.verify("admin", "qwerty").is_ok());
        assert!(matches!(
            creds.verify("admin", "wrong"),
            Err(AppError::InvalidCredentials)
        ));
        assert!(creds.verify("root", "qwerty").is_err());
        assert!(creds.verify("", "").is_err());
    }

    #[test]
    fn test_debug_hides_password() {
        let creds = AdminCredentials::new("admin", "super-secret");
        assert!(!format!("{creds:?}").contains("super-secret"));
    }
}
