//! Per-account transaction ledgers.
//!
//! Each registered account owns an ordered, append-only list of
//! human-readable transaction description lines (oldest first). Lines are
//! never reordered, rewritten or truncated once appended.

use std::collections::HashMap;

use crate::stores::AccountKey;
use crate::Error;

#[derive(Default)]
pub struct LedgersStore {
    ledgers: HashMap<AccountKey, Vec<String>>,
}

impl LedgersStore {
    pub fn new() -> Self {
        Self {
            ledgers: HashMap::new(),
        }
    }

    /// Creates an empty ledger for a newly registered account.
    pub fn create_empty(&mut self, key: AccountKey) {
        self.ledgers.entry(key).or_default();
    }

    /// Appends a transaction description to an account's ledger.
    /// Every registered account has a ledger entry; if a caller removed it
    /// through the mutable view, the entry is recreated.
    pub fn append(&mut self, key: AccountKey, line: String) {
        self.ledgers.entry(key).or_default().push(line);
    }

    /// Gets an account's ledger lines in insertion order, or returns an
    /// error if no ledger exists under that key.
    pub fn lines(&self, key: AccountKey) -> Result<&[String], Error> {
        self.ledgers
            .get(&key)
            .map(Vec::as_slice)
            .ok_or(Error::AccountNotFound)
    }

    pub fn as_map(&self) -> &HashMap<AccountKey, Vec<String>> {
        &self.ledgers
    }

    /// Mutable view over the ledgers. Callers recording their own
    /// transactions (e.g. externally settled deposits) may push lines
    /// directly; the store does not validate them.
    pub fn as_map_mut(&mut self) -> &mut HashMap<AccountKey, Vec<String>> {
        &mut self.ledgers
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const KEY: AccountKey = AccountKey {
        card_number: 12345678,
        pin: 1234,
    };

    #[test]
    fn test_new_store_is_empty() {
        let store = LedgersStore::new();
        assert!(store.lines(KEY).is_err());
        assert!(store.as_map().is_empty());
    }

    #[test]
    fn test_create_empty_ledger() {
        let mut store = LedgersStore::new();
        store.create_empty(KEY);

        let lines = store.lines(KEY).unwrap();
        assert!(lines.is_empty());
    }

    #[test]
    fn test_create_empty_does_not_clear_existing_lines() {
        let mut store = LedgersStore::new();
        store.create_empty(KEY);
        store.append(KEY, "Withdrawal - Amount: $20.00, Updated Balance: $280.30".to_owned());

        // A repeated create must not wipe history
        store.create_empty(KEY);
        assert_eq!(store.lines(KEY).unwrap().len(), 1);
    }

    #[test]
    fn test_append_preserves_insertion_order() {
        let mut store = LedgersStore::new();
        store.create_empty(KEY);

        store.append(KEY, "first".to_owned());
        store.append(KEY, "second".to_owned());
        store.append(KEY, "third".to_owned());

        assert_eq!(store.lines(KEY).unwrap(), ["first", "second", "third"]);
    }

    #[test]
    fn test_ledgers_are_independent() {
        let mut store = LedgersStore::new();
        let other = AccountKey::new(87654321, 4321);
        store.create_empty(KEY);
        store.create_empty(other);

        store.append(KEY, "only here".to_owned());

        assert_eq!(store.lines(KEY).unwrap().len(), 1);
        assert!(store.lines(other).unwrap().is_empty());
    }

    #[test]
    fn test_lines_for_nonexistent_ledger() {
        let store = LedgersStore::new();
        assert!(matches!(store.lines(KEY), Err(Error::AccountNotFound)));
    }

    #[test]
    fn test_mutable_view_appends_are_visible() {
        let mut store = LedgersStore::new();
        store.create_empty(KEY);

        store
            .as_map_mut()
            .get_mut(&KEY)
            .unwrap()
            .push("Deposit - Amount: $40.00, Updated Balance: $340.30".to_owned());

        assert_eq!(
            store.lines(KEY).unwrap(),
            ["Deposit - Amount: $40.00, Updated Balance: $340.30"]
        );
    }
}
