//! Email → dense user id mapping.

use std::collections::HashMap;

use artrec_core::ids::UserId;

/// Hands out user ids in order of first appearance, starting at 1.
///
/// Every distinct email string maps to exactly one id, including the empty
/// string (rows with no email collapse into one anonymous user).
#[derive(Debug, Clone)]
pub struct EmailMapper {
    ids: HashMap<String, UserId>,
    next: Option<UserId>,
}

impl Default for EmailMapper {
    fn default() -> Self {
        Self {
            ids: HashMap::new(),
            next: Some(UserId::FIRST),
        }
    }
}

impl EmailMapper {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the id for `email`, assigning the next free one if unseen.
    ///
    /// Returns `None` for a new email once every `u32` id has been handed out.
    pub fn map(&mut self, email: &str) -> Option<UserId> {
        if let Some(id) = self.ids.get(email) {
            return Some(*id);
        }
        let id = self.next?;
        self.ids.insert(email.to_string(), id);
        self.next = id.next();
        Some(id)
    }

    /// Number of distinct emails seen so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn ids_follow_first_appearance() {
        let mut mapper = EmailMapper::new();
        let ids: Vec<u32> = ["b@x", "a@x", "b@x", "c@x", "a@x"]
            .iter()
            .filter_map(|email| mapper.map(email))
            .map(UserId::get)
            .collect();
        assert_eq!(ids, vec![1, 2, 1, 3, 2]);
        assert_eq!(mapper.len(), 3);
    }

    #[test]
    fn empty_email_is_one_user() {
        let mut mapper = EmailMapper::new();
        let first = mapper.map("");
        assert!(mapper.map("someone@x").is_some());
        assert_eq!(mapper.map(""), first);
    }

    #[test]
    fn exhausted_id_space_refuses_new_emails() {
        let mut mapper = EmailMapper {
            ids: HashMap::new(),
            next: Some(UserId(u32::MAX)),
        };
        assert_eq!(mapper.map("last@x"), Some(UserId(u32::MAX)));
        assert_eq!(mapper.map("last@x"), Some(UserId(u32::MAX)));
        assert_eq!(mapper.map("overflow@x"), None);
    }
}
