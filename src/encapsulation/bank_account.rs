//! Pattern 1: Encapsulation with validation
//! Example: A bank account whose balance only moves through checked operations
//!
//! Run with: cargo run --bin encapsulation_01_bank_account
//!
//! The balance and the history are private; callers get copies and a
//! read-only slice:
//!
//! ```compile_fail
//! use oop_concepts::encapsulation::bank_account::BankAccount;
//! use oop_concepts::Money;
//!
//! let mut account = BankAccount::open("ACC-1", "Alice", Money::dollars(10));
//! account.balance = Money::dollars(-1000); // private field
//! ```
//!
//! ```compile_fail
//! use oop_concepts::encapsulation::bank_account::BankAccount;
//! use oop_concepts::Money;
//!
//! let mut account = BankAccount::open("ACC-1", "Alice", Money::dollars(10));
//! account.history().clear(); // `&[Transaction]` can't be cleared
//! ```

use std::fmt;
use std::io::{self, Write};

use serde::Deserialize;
use tracing::{debug, warn};

use crate::console::Console;
use crate::error::AccountError;
use crate::money::Money;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionKind {
    Opened,
    Deposit,
    Withdrawal,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transaction {
    pub kind: TransactionKind,
    pub amount: Money,
    pub balance_after: Money,
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            TransactionKind::Opened => {
                write!(f, "Account opened with initial balance: {}", self.amount)
            }
            TransactionKind::Deposit => write!(f, "Deposited: {}", self.amount),
            TransactionKind::Withdrawal => write!(f, "Withdrew: {}", self.amount),
        }
    }
}

#[derive(Debug, Clone)]
pub struct BankAccount {
    account_number: String,
    holder: String,
    balance: Money,
    history: Vec<Transaction>,
}

impl BankAccount {
    pub fn open(
        account_number: impl Into<String>,
        holder: impl Into<String>,
        initial_balance: Money,
    ) -> Self {
        let mut account = Self {
            account_number: account_number.into(),
            holder: holder.into(),
            balance: initial_balance,
            history: Vec::new(),
        };
        account.record(TransactionKind::Opened, initial_balance);
        account
    }

    pub fn account_number(&self) -> &str {
        &self.account_number
    }

    pub fn holder(&self) -> &str {
        &self.holder
    }

    pub fn balance(&self) -> Money {
        self.balance
    }

    pub fn history(&self) -> &[Transaction] {
        &self.history
    }

    /// Returns the new balance.
    pub fn deposit(&mut self, amount: Money) -> Result<Money, AccountError> {
        if !amount.is_positive() {
            warn!(account = %self.account_number, %amount, "non-positive deposit rejected");
            return Err(AccountError::NonPositiveDeposit { amount });
        }
        self.balance = self
            .balance
            .checked_add(amount)
            .ok_or(AccountError::BalanceOverflow { amount })?;
        self.record(TransactionKind::Deposit, amount);
        Ok(self.balance)
    }

    /// Succeeds iff `0 < amount <= balance`. Returns the new balance.
    pub fn withdraw(&mut self, amount: Money) -> Result<Money, AccountError> {
        if !amount.is_positive() {
            warn!(account = %self.account_number, %amount, "non-positive withdrawal rejected");
            return Err(AccountError::NonPositiveWithdrawal { amount });
        }
        if amount > self.balance {
            warn!(
                account = %self.account_number,
                %amount,
                available = %self.balance,
                "withdrawal rejected: insufficient funds"
            );
            return Err(AccountError::InsufficientFunds {
                requested: amount,
                available: self.balance,
            });
        }
        // amount <= balance and both fit in i64, so this cannot underflow
        self.balance = Money::from_cents(self.balance.cents() - amount.cents());
        self.record(TransactionKind::Withdrawal, amount);
        Ok(self.balance)
    }

    fn record(&mut self, kind: TransactionKind, amount: Money) {
        debug!(account = %self.account_number, ?kind, %amount, balance = %self.balance, "transaction recorded");
        self.history.push(Transaction {
            kind,
            amount,
            balance_after: self.balance,
        });
    }
}

// =============================================================================
// Demo scenario
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Operation {
    Deposit { amount: Money },
    Withdraw { amount: Money },
}

impl Operation {
    pub fn apply(self, account: &mut BankAccount) -> Result<Money, AccountError> {
        match self {
            Self::Deposit { amount } => account.deposit(amount),
            Self::Withdraw { amount } => account.withdraw(amount),
        }
    }

    fn success_label(self) -> &'static str {
        match self {
            Self::Deposit { .. } => "Deposit",
            Self::Withdraw { .. } => "Withdrawal",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BankScenario {
    pub account_number: String,
    pub holder: String,
    pub opening_balance: Money,
    pub operations: Vec<Operation>,
}

fn display_history<W: Write>(console: &mut Console<W>, account: &BankAccount) -> io::Result<()> {
    console.blank()?;
    console.heading(format!("Transaction History for {}", account.holder()))?;
    for (i, transaction) in account.history().iter().enumerate() {
        console.line(format!("{}. {transaction}", i + 1))?;
    }
    Ok(())
}

pub fn demo<W: Write>(console: &mut Console<W>, scenario: &BankScenario) -> io::Result<()> {
    let mut account = BankAccount::open(
        scenario.account_number.as_str(),
        scenario.holder.as_str(),
        scenario.opening_balance,
    );

    console.line(format!("Account Holder: {}", account.holder()))?;
    console.line(format!("Account Number: {}", account.account_number()))?;
    console.line(format!("Initial Balance: {}", account.balance()))?;

    console.blank()?;
    console.subheading("Transactions")?;
    for operation in &scenario.operations {
        match operation.apply(&mut account) {
            Ok(balance) => console.line(format!(
                "{} successful. New balance: {balance}",
                operation.success_label()
            ))?,
            Err(err) => console.error(err)?,
        }
    }

    display_history(console, &account)?;

    console.blank()?;
    console.line(format!("Final Balance: {}", account.balance()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn alice() -> BankAccount {
        BankAccount::open("ACC-12345", "Alice Smith", Money::dollars(1000))
    }

    #[test]
    fn reference_scenario() {
        let mut account = alice();
        assert_eq!(account.deposit(Money::dollars(500)), Ok(Money::dollars(1500)));
        assert_eq!(account.withdraw(Money::dollars(200)), Ok(Money::dollars(1300)));
        assert_eq!(
            account.withdraw(Money::dollars(2000)),
            Err(AccountError::InsufficientFunds {
                requested: Money::dollars(2000),
                available: Money::dollars(1300),
            })
        );
        assert_eq!(account.balance(), Money::dollars(1300));
        assert_eq!(account.deposit(Money::dollars(300)), Ok(Money::dollars(1600)));
    }

    #[test]
    fn non_positive_amounts_are_rejected() {
        let mut account = alice();
        assert_eq!(
            account.deposit(Money::ZERO),
            Err(AccountError::NonPositiveDeposit { amount: Money::ZERO })
        );
        assert_eq!(
            account.withdraw(Money::from_cents(-1)),
            Err(AccountError::NonPositiveWithdrawal {
                amount: Money::from_cents(-1)
            })
        );
        assert_eq!(account.balance(), Money::dollars(1000));
        assert_eq!(account.history().len(), 1);
    }

    #[test]
    fn withdrawing_the_whole_balance_is_allowed() {
        let mut account = alice();
        assert_eq!(account.withdraw(Money::dollars(1000)), Ok(Money::ZERO));
        assert!(account.withdraw(Money::from_cents(1)).is_err());
    }

    #[test]
    fn overflowing_deposit_is_rejected() {
        let mut account = BankAccount::open("X", "Y", Money::from_cents(i64::MAX - 1));
        assert_eq!(
            account.deposit(Money::from_cents(2)),
            Err(AccountError::BalanceOverflow {
                amount: Money::from_cents(2)
            })
        );
        assert_eq!(account.balance(), Money::from_cents(i64::MAX - 1));
    }

    #[test]
    fn history_records_successful_operations_only() {
        let mut account = alice();
        account.deposit(Money::dollars(500)).unwrap();
        account.withdraw(Money::dollars(5000)).unwrap_err();
        account.withdraw(Money::dollars(200)).unwrap();

        let rendered: Vec<String> = account.history().iter().map(ToString::to_string).collect();
        assert_eq!(
            rendered,
            vec![
                "Account opened with initial balance: $1000.00",
                "Deposited: $500.00",
                "Withdrew: $200.00",
            ]
        );
        assert_eq!(account.history()[2].balance_after, Money::dollars(1300));
    }

    #[test]
    fn scenario_from_toml() {
        let scenario: BankScenario = toml::from_str(
            r#"
            account_number = "ACC-1"
            holder = "Bob"
            opening_balance = 10.0
            operations = [
                { kind = "deposit", amount = 2.5 },
                { kind = "withdraw", amount = 100.0 },
            ]
            "#,
        )
        .unwrap();
        assert_eq!(scenario.opening_balance, Money::dollars(10));
        assert_eq!(
            scenario.operations,
            vec![
                Operation::Deposit {
                    amount: Money::from_cents(250)
                },
                Operation::Withdraw {
                    amount: Money::dollars(100)
                },
            ]
        );
    }

    #[derive(Debug, Clone, Copy)]
    enum Step {
        Deposit(i64),
        Withdraw(i64),
    }

    fn step() -> impl Strategy<Value = Step> {
        prop_oneof![
            (-10_000i64..100_000).prop_map(Step::Deposit),
            (-10_000i64..100_000).prop_map(Step::Withdraw),
        ]
    }

    proptest! {
        #[test]
        fn balance_is_initial_plus_deposits_minus_withdrawals(
            initial in 0i64..1_000_000,
            steps in prop::collection::vec(step(), 0..50),
        ) {
            let mut account = BankAccount::open("P", "Prop", Money::from_cents(initial));
            let mut deposited = 0i64;
            let mut withdrawn = 0i64;
            let mut successes = 0usize;

            for step in steps {
                match step {
                    Step::Deposit(cents) => {
                        let result = account.deposit(Money::from_cents(cents));
                        prop_assert_eq!(result.is_ok(), cents > 0);
                        if result.is_ok() {
                            deposited += cents;
                            successes += 1;
                        }
                    }
                    Step::Withdraw(cents) => {
                        let before = account.balance().cents();
                        let result = account.withdraw(Money::from_cents(cents));
                        prop_assert_eq!(result.is_ok(), cents > 0 && cents <= before);
                        if result.is_ok() {
                            withdrawn += cents;
                            successes += 1;
                        }
                    }
                }
                prop_assert!(account.balance().cents() >= 0);
            }

            prop_assert_eq!(account.balance().cents(), initial + deposited - withdrawn);
            prop_assert_eq!(account.history().len(), 1 + successes);
        }
    }
}
