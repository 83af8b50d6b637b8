use rust_decimal::Decimal;
use std::collections::HashMap;
use std::fs::File;
use std::io::Write;

use crate::dto::{Request, RequestType};
use crate::stores::{Account, AccountKey, AccountsStore, LedgersStore};
use crate::Error;

/// The account/transaction manager at the core of the teller backend.
///
/// Owns two parallel stores: account records and per-account transaction
/// ledgers, both keyed by (card number, PIN). Registration inserts into both
/// or neither, so the stores never drift apart. All balance rules live here:
/// amounts must be strictly positive and a withdrawal may not exceed the
/// available balance. Every successful balance change appends one formatted
/// description line to the account's ledger.
///
/// Operations are synchronous and validate before mutating, so a rejected
/// request leaves the teller exactly as it was.
pub struct Teller {
    accounts: AccountsStore,
    ledgers: LedgersStore,
}

impl Default for Teller {
    fn default() -> Self {
        Self::new()
    }
}

impl Teller {
    pub fn new() -> Self {
        Self {
            accounts: AccountsStore::new(),
            ledgers: LedgersStore::new(),
        }
    }

    /// Registers a new account under (card_number, pin) with the supplied
    /// owner name and starting balance, and creates its empty ledger.
    ///
    /// # Errors
    /// Returns [`Error::AccountAlreadyExists`] if an account is already
    /// registered under that key; nothing is modified in that case.
    pub fn register_account(
        &mut self,
        card_number: u32,
        pin: u32,
        owner_name: &str,
        initial_balance: Decimal,
    ) -> Result<(), Error> {
        let key = AccountKey::new(card_number, pin);
        self.accounts.create(
            key,
            Account {
                owner_name: owner_name.to_owned(),
                balance: initial_balance,
            },
        )?;
        self.ledgers.create_empty(key);
        Ok(())
    }

    /// Withdraws `amount` from the account's balance and records the
    /// transaction in its ledger.
    ///
    /// # Errors
    /// Checked in order:
    /// * [`Error::AmountMustBePositive`] if `amount` is zero or negative
    /// * [`Error::AccountNotFound`] if no account exists for the key
    /// * [`Error::InsufficientFunds`] if `amount` exceeds the balance
    pub fn withdraw_cash(&mut self, card_number: u32, pin: u32, amount: Decimal) -> Result<(), Error> {
        if amount <= Decimal::ZERO {
            return Err(Error::AmountMustBePositive);
        }
        let key = AccountKey::new(card_number, pin);
        let account = self.accounts.get_mut(key)?;
        if amount > account.balance {
            return Err(Error::InsufficientFunds);
        }
        account.balance -= amount;
        let balance = account.balance;
        self.ledgers.append(
            key,
            format!(
                "Withdrawal - Amount: ${:.2}, Updated Balance: ${:.2}",
                amount, balance
            ),
        );
        Ok(())
    }

    /// Deposits `amount` into the account's balance and records the
    /// transaction in its ledger. Validation mirrors [`Self::withdraw_cash`]:
    /// the amount must be positive and the account must exist.
    pub fn deposit_cash(&mut self, card_number: u32, pin: u32, amount: Decimal) -> Result<(), Error> {
        if amount <= Decimal::ZERO {
            return Err(Error::AmountMustBePositive);
        }
        let key = AccountKey::new(card_number, pin);
        let account = self.accounts.get_mut(key)?;
        account.balance += amount;
        let balance = account.balance;
        self.ledgers.append(
            key,
            format!(
                "Deposit - Amount: ${:.2}, Updated Balance: ${:.2}",
                amount, balance
            ),
        );
        Ok(())
    }

    /// Gets an account's ledger lines in insertion order.
    pub fn ledger(&self, card_number: u32, pin: u32) -> Result<&[String], Error> {
        self.ledgers.lines(AccountKey::new(card_number, pin))
    }

    /// Writes an account's ledger to the given destination, one stored line
    /// per output line, in insertion order. The export does not modify any
    /// teller state.
    ///
    /// # Errors
    /// * [`Error::AccountNotFound`] if no account exists for the key;
    ///   nothing is written in that case
    /// * [`Error::Io`] if the destination fails to accept the write
    pub fn print_ledger<W: Write>(
        &self,
        writer: &mut W,
        card_number: u32,
        pin: u32,
    ) -> Result<(), Error> {
        let lines = self.ledger(card_number, pin)?;
        for line in lines {
            writeln!(writer, "{}", line)?;
        }
        writer.flush()?;
        Ok(())
    }

    /// Applies one decoded batch request to the teller.
    ///
    /// Rows missing a field their operation requires are rejected with
    /// [`Error::InvalidRequest`]. A `print_ledger` request creates the file
    /// named by its `dest` column and exports the ledger into it.
    pub fn process_request(&mut self, request: Request) -> Result<(), Error> {
        match request.op {
            RequestType::Register => {
                let owner = request.owner.ok_or(Error::InvalidRequest)?;
                let amount = request.amount.ok_or(Error::InvalidRequest)?;
                self.register_account(request.card, request.pin, &owner, amount)
            }
            RequestType::Deposit => {
                let amount = request.amount.ok_or(Error::InvalidRequest)?;
                self.deposit_cash(request.card, request.pin, amount)
            }
            RequestType::Withdraw => {
                let amount = request.amount.ok_or(Error::InvalidRequest)?;
                self.withdraw_cash(request.card, request.pin, amount)
            }
            RequestType::PrintLedger => {
                let dest = request.dest.ok_or(Error::InvalidRequest)?;
                // Validate the account before touching the destination
                self.ledger(request.card, request.pin)?;
                let mut file = File::create(dest)?;
                self.print_ledger(&mut file, request.card, request.pin)
            }
        }
    }

    /// View over the account records.
    pub fn accounts(&self) -> &HashMap<AccountKey, Account> {
        self.accounts.as_map()
    }

    /// View over the per-account ledgers.
    pub fn ledgers(&self) -> &HashMap<AccountKey, Vec<String>> {
        self.ledgers.as_map()
    }

    /// Mutable view over the per-account ledgers, for callers that narrate
    /// their own transactions by pushing description lines directly. The
    /// teller does not validate externally appended entries.
    pub fn ledgers_mut(&mut self) -> &mut HashMap<AccountKey, Vec<String>> {
        self.ledgers.as_map_mut()
    }
}
