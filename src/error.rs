use thiserror::Error;

use crate::money::Money;

// =============================================================================
// Business-rule violations
// =============================================================================
//
// None of these are fatal: the demos print them as `Error: ...` and carry on.

#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum MoneyError {
    #[error("amount {0} is not a finite number")]
    NotFinite(f64),

    #[error("amount {0} is outside the representable range")]
    OutOfRange(f64),
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalculatorError {
    #[error("Division by zero")]
    DivisionByZero,

    #[error("{operation} of {lhs} and {rhs} overflows")]
    Overflow {
        operation: &'static str,
        lhs: i32,
        rhs: i32,
    },
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountError {
    #[error("Deposit amount must be positive")]
    NonPositiveDeposit { amount: Money },

    #[error("Withdrawal amount must be positive")]
    NonPositiveWithdrawal { amount: Money },

    #[error("Insufficient funds. Available: {available}")]
    InsufficientFunds { requested: Money, available: Money },

    #[error("Deposit of {amount} would overflow the balance")]
    BalanceOverflow { amount: Money },
}

impl AccountError {
    /// The amount the rejected operation was called with.
    pub fn amount(&self) -> Money {
        match *self {
            Self::NonPositiveDeposit { amount }
            | Self::NonPositiveWithdrawal { amount }
            | Self::BalanceOverflow { amount } => amount,
            Self::InsufficientFunds { requested, .. } => requested,
        }
    }
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentError {
    #[error("{processor} cannot charge {amount}: amount must be positive")]
    InvalidAmount {
        processor: &'static str,
        amount: Money,
    },

    #[error("{processor} cannot refund {amount}: amount must be positive")]
    InvalidRefund {
        processor: &'static str,
        amount: Money,
    },
}

impl PaymentError {
    pub fn invalid_amount(processor: &'static str, amount: Money) -> Self {
        Self::InvalidAmount { processor, amount }
    }

    pub fn invalid_refund(processor: &'static str, amount: Money) -> Self {
        Self::InvalidRefund { processor, amount }
    }
}

// =============================================================================
// Demo configuration
// =============================================================================

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to parse demo config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid demo config: {}", .problems.join("; "))]
    Invalid { problems: Vec<String> },
}

impl ConfigError {
    pub fn problems(&self) -> &[String] {
        match self {
            Self::Parse(_) => &[],
            Self::Invalid { problems } => problems,
        }
    }
}
