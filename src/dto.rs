use rust_decimal::Decimal;
use rust_decimal::RoundingStrategy;
use serde::de::Deserializer;
use serde::{Deserialize, Serialize};

use crate::stores::{Account, AccountKey};

#[derive(Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum RequestType {
    Register,
    Deposit,
    Withdraw,
    PrintLedger,
}

/// One row of a request batch: `op,card,pin,owner,amount,dest`.
/// Columns that an operation does not use are left empty.
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct Request {
    pub op: RequestType,
    pub card: u32,
    pub pin: u32,
    pub owner: Option<String>,
    #[serde(deserialize_with = "deserialize_decimal_2dp")]
    pub amount: Option<Decimal>,
    pub dest: Option<String>,
}

/// One row of the account summary the runners emit after a batch.
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct AccountRow {
    pub card: u32,
    pub pin: u32,
    pub owner: String,
    pub balance: Decimal,
}

impl From<(&AccountKey, &Account)> for AccountRow {
    fn from((key, account): (&AccountKey, &Account)) -> Self {
        // Fix the scale so equal balances always render identically
        let mut balance = account.balance;
        balance.rescale(2);
        Self {
            card: key.card_number,
            pin: key.pin,
            owner: account.owner_name.clone(),
            balance,
        }
    }
}

fn deserialize_decimal_2dp<'de, D>(deserializer: D) -> Result<Option<Decimal>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<Decimal>::deserialize(deserializer)
        .map(|opt_dec| opt_dec.map(|dec| dec.round_dp_with_strategy(2, RoundingStrategy::ToZero)))
}
