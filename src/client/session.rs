//! Shared authentication context.
//!
//! Replaces an ad-hoc global logged-in flag with an explicit context object
//! handed to consuming views. Write points are exactly `store` (the login
//! success path) and `clear`; everything else only reads.

use crate::client::User;
use std::sync::{PoisonError, RwLock};

/// Session state shared between the auth client and consuming views.
///
/// Starts signed-out; implicitly reset on process restart.
#[derive(Debug, Default)]
pub struct SessionContext {
    user: RwLock<Option<User>>,
}

impl SessionContext {
    /// True once a login has succeeded and until `clear` is called.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.user
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .is_some()
    }

    /// The signed-in user, if any.
    #[must_use]
    pub fn current_user(&self) -> Option<User> {
        self.user
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Store the user after a successful login. Only the login path writes.
    pub(crate) fn store(&self, user: User) {
        *self.user.write().unwrap_or_else(PoisonError::into_inner) = Some(user);
    }

    /// Sign out, typically on logout.
    pub fn clear(&self) {
        *self.user.write().unwrap_or_else(PoisonError::into_inner) = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn user() -> User {
        User {
            id: Uuid::new_v4(),
            email: "user@example.com".to_string(),
        }
    }

    #[test]
    fn test_starts_signed_out() {
        let session = SessionContext::default();

        assert!(!session.is_authenticated());
        assert!(session.current_user().is_none());
    }

    #[test]
    fn test_store_authenticates() {
        let session = SessionContext::default();
        let user = user();

        session.store(user.clone());

        assert!(session.is_authenticated());
        assert_eq!(session.current_user(), Some(user));
    }

    #[test]
    fn test_clear_signs_out() {
        let session = SessionContext::default();
        session.store(user());

        session.clear();

        assert!(!session.is_authenticated());
        assert!(session.current_user().is_none());
    }
}
