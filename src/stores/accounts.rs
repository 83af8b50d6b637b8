use rust_decimal::Decimal;
use std::collections::HashMap;

use crate::Error;

/// Composite account identifier: a card number together with its PIN.
/// Two accounts sharing a card number but not a PIN are distinct.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AccountKey {
    pub card_number: u32,
    pub pin: u32,
}

impl AccountKey {
    pub fn new(card_number: u32, pin: u32) -> Self {
        Self { card_number, pin }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Account {
    pub owner_name: String,
    pub balance: Decimal,
}

#[derive(Default)]
pub struct AccountsStore {
    accounts: HashMap<AccountKey, Account>,
}

impl AccountsStore {
    pub fn new() -> Self {
        Self {
            accounts: HashMap::new(),
        }
    }

    pub fn contains(&self, key: AccountKey) -> bool {
        self.accounts.contains_key(&key)
    }

    /// Inserts a new account under the given key.
    /// Returns an error if an account already exists under that key; the
    /// existing account is left untouched.
    pub fn create(&mut self, key: AccountKey, account: Account) -> Result<(), Error> {
        if self.accounts.contains_key(&key) {
            return Err(Error::AccountAlreadyExists);
        }
        self.accounts.insert(key, account);
        Ok(())
    }

    /// Gets an account entry, or returns an error if it doesn't exist.
    pub fn get(&self, key: AccountKey) -> Result<&Account, Error> {
        self.accounts.get(&key).ok_or(Error::AccountNotFound)
    }

    /// Gets a mutable account entry, or returns an error if it doesn't exist.
    pub fn get_mut(&mut self, key: AccountKey) -> Result<&mut Account, Error> {
        self.accounts.get_mut(&key).ok_or(Error::AccountNotFound)
    }

    pub fn as_map(&self) -> &HashMap<AccountKey, Account> {
        &self.accounts
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn account(owner: &str, balance: Decimal) -> Account {
        Account {
            owner_name: owner.to_owned(),
            balance,
        }
    }

    #[test]
    fn test_create_and_get() {
        let mut store = AccountsStore::new();
        let key = AccountKey::new(12345678, 1234);

        store.create(key, account("Sam Sepiol", dec!(300.30))).unwrap();

        let stored = store.get(key).unwrap();
        assert_eq!(stored.owner_name, "Sam Sepiol");
        assert_eq!(stored.balance, dec!(300.30));
    }

    #[test]
    fn test_create_duplicate_keeps_original() {
        let mut store = AccountsStore::new();
        let key = AccountKey::new(12345678, 1234);

        store.create(key, account("Sam Sepiol", dec!(300.30))).unwrap();
        let result = store.create(key, account("Mr. Robot", dec!(1.00)));
        assert!(matches!(result, Err(Error::AccountAlreadyExists)));

        // Original account remains unchanged
        let stored = store.get(key).unwrap();
        assert_eq!(stored.owner_name, "Sam Sepiol");
        assert_eq!(stored.balance, dec!(300.30));
    }

    #[test]
    fn test_same_card_different_pin_is_distinct() {
        let mut store = AccountsStore::new();
        store
            .create(AccountKey::new(12345678, 1234), account("Sam Sepiol", dec!(300.30)))
            .unwrap();
        store
            .create(AccountKey::new(12345678, 4321), account("Darlene", dec!(50.00)))
            .unwrap();

        assert_eq!(store.as_map().len(), 2);
    }

    #[test]
    fn test_get_nonexistent() {
        let store = AccountsStore::new();
        assert!(matches!(
            store.get(AccountKey::new(1, 1)),
            Err(Error::AccountNotFound)
        ));
    }
}
