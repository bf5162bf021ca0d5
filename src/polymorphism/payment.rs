//! Pattern 2: Checkout over a processor contract
//! Example: Credit card, PayPal and Apple Pay behind `dyn PaymentProcessor`
//!
//! Run with: cargo run --bin polymorphism_02_payments
//!
//! `checkout_order` and `ProcessorRegistry` only ever see the contract. A new
//! processor is one more `impl PaymentProcessor`; neither changes.

use std::io::{self, Write};

use serde::Deserialize;
use tracing::{debug, warn};

use crate::console::Console;
use crate::error::PaymentError;
use crate::money::Money;

pub trait PaymentProcessor {
    fn name(&self) -> &'static str;

    /// Succeeds for every strictly positive amount.
    fn process(&self, amount: Money) -> Result<Receipt, PaymentError>;

    fn refund(&self, amount: Money) -> Result<Refund, PaymentError>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Receipt {
    pub processor: &'static str,
    pub amount: Money,
    /// Gateway transcript; the first line names the amount.
    pub steps: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Refund {
    pub processor: &'static str,
    pub amount: Money,
    pub message: String,
}

fn charge(
    processor: &'static str,
    amount: Money,
    channel: &str,
    gateway_steps: &[&str],
) -> Result<Receipt, PaymentError> {
    if !amount.is_positive() {
        return Err(PaymentError::invalid_amount(processor, amount));
    }
    debug!(processor, %amount, "charging");

    let mut steps = Vec::with_capacity(gateway_steps.len() + 1);
    steps.push(format!("Processing {amount} via {channel}"));
    steps.extend(gateway_steps.iter().map(|step| format!("  {step}")));
    Ok(Receipt {
        processor,
        amount,
        steps,
    })
}

fn pay_back(processor: &'static str, amount: Money, destination: &str) -> Result<Refund, PaymentError> {
    if !amount.is_positive() {
        return Err(PaymentError::invalid_refund(processor, amount));
    }
    debug!(processor, %amount, "refunding");
    Ok(Refund {
        processor,
        amount,
        message: format!("Refunding {amount} {destination}"),
    })
}

#[derive(Debug, Clone, Copy, Default)]
pub struct CreditCardProcessor;

impl PaymentProcessor for CreditCardProcessor {
    fn name(&self) -> &'static str {
        "Credit Card Processor"
    }

    fn process(&self, amount: Money) -> Result<Receipt, PaymentError> {
        charge(
            self.name(),
            amount,
            "credit card",
            &[
                "Connecting to payment gateway...",
                "Verifying card details...",
                "Transaction approved!",
            ],
        )
    }

    fn refund(&self, amount: Money) -> Result<Refund, PaymentError> {
        pay_back(self.name(), amount, "to credit card")
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct PayPalProcessor;

impl PaymentProcessor for PayPalProcessor {
    fn name(&self) -> &'static str {
        "PayPal Processor"
    }

    fn process(&self, amount: Money) -> Result<Receipt, PaymentError> {
        charge(
            self.name(),
            amount,
            "PayPal",
            &[
                "Authenticating PayPal account...",
                "Transfer initiated...",
                "Transaction completed!",
            ],
        )
    }

    fn refund(&self, amount: Money) -> Result<Refund, PaymentError> {
        pay_back(self.name(), amount, "to PayPal account")
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ApplePayProcessor;

impl PaymentProcessor for ApplePayProcessor {
    fn name(&self) -> &'static str {
        "Apple Pay Processor"
    }

    fn process(&self, amount: Money) -> Result<Receipt, PaymentError> {
        charge(
            self.name(),
            amount,
            "Apple Pay",
            &[
                "Reading device biometric...",
                "Sending secure payment token...",
                "Transaction authorized!",
            ],
        )
    }

    fn refund(&self, amount: Money) -> Result<Refund, PaymentError> {
        pay_back(self.name(), amount, "via Apple Pay")
    }
}

// =============================================================================
// Generic driver
// =============================================================================

/// Returns whether the payment went through. A rejected payment is reported
/// on the console, not as an error.
pub fn checkout_order<W: Write>(
    console: &mut Console<W>,
    processor: &dyn PaymentProcessor,
    cart_total: Money,
) -> io::Result<bool> {
    console.blank()?;
    console.heading("Checkout Order")?;
    console.line(format!("Using: {}", processor.name()))?;
    console.line(format!("Total: {cart_total}"))?;
    console.blank()?;
    console.line("Processing payment...")?;

    match processor.process(cart_total) {
        Ok(receipt) => {
            for step in &receipt.steps {
                console.line(step)?;
            }
            console.success("Order completed successfully!")?;
            Ok(true)
        }
        Err(err) => {
            warn!(processor = processor.name(), %err, "payment rejected");
            console.failure(format!("Payment failed: {err}"))?;
            Ok(false)
        }
    }
}

// =============================================================================
// Selection and registry
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProcessorChoice {
    CreditCard,
    PayPal,
    ApplePay,
}

impl ProcessorChoice {
    /// Menu numbering 1-3; anything else falls back to credit card.
    pub fn from_menu(choice: u8) -> Self {
        match choice {
            2 => Self::PayPal,
            3 => Self::ApplePay,
            _ => Self::CreditCard,
        }
    }

    pub fn build(self) -> Box<dyn PaymentProcessor> {
        match self {
            Self::CreditCard => Box::new(CreditCardProcessor),
            Self::PayPal => Box::new(PayPalProcessor),
            Self::ApplePay => Box::new(ApplePayProcessor),
        }
    }
}

#[derive(Default)]
pub struct ProcessorRegistry {
    processors: Vec<Box<dyn PaymentProcessor>>,
}

impl ProcessorRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_builtin() -> Self {
        let mut registry = Self::new();
        for choice in [
            ProcessorChoice::CreditCard,
            ProcessorChoice::PayPal,
            ProcessorChoice::ApplePay,
        ] {
            registry.register(choice.build());
        }
        registry
    }

    pub fn register(&mut self, processor: Box<dyn PaymentProcessor>) {
        debug!(processor = processor.name(), "processor registered");
        self.processors.push(processor);
    }

    pub fn get(&self, name: &str) -> Option<&dyn PaymentProcessor> {
        self.processors
            .iter()
            .find(|p| p.name() == name)
            .map(|p| p.as_ref())
    }

    pub fn iter(&self) -> impl Iterator<Item = &dyn PaymentProcessor> + '_ {
        self.processors.iter().map(|p| p.as_ref())
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.iter().map(|p| p.name()).collect()
    }

    pub fn len(&self) -> usize {
        self.processors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.processors.is_empty()
    }

    /// Runs one checkout per registered processor; returns how many succeeded.
    pub fn checkout_all<W: Write>(
        &self,
        console: &mut Console<W>,
        cart_total: Money,
    ) -> io::Result<usize> {
        let mut completed = 0;
        for processor in self.iter() {
            if checkout_order(console, processor, cart_total)? {
                completed += 1;
            }
        }
        Ok(completed)
    }
}

// =============================================================================
// Demo
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CheckoutScenario {
    pub order_total: Money,
    /// 1 credit card, 2 PayPal, 3 Apple Pay.
    pub menu_choice: u8,
}

pub fn demo<W: Write>(console: &mut Console<W>, scenario: &CheckoutScenario) -> io::Result<()> {
    let registry = ProcessorRegistry::with_builtin();
    registry.checkout_all(console, scenario.order_total)?;

    console.blank()?;
    console.blank()?;
    console.heading("Dynamic Processor Selection")?;
    let processor = ProcessorChoice::from_menu(scenario.menu_choice).build();
    let paid = checkout_order(console, processor.as_ref(), scenario.order_total)?;

    if paid {
        console.blank()?;
        console.heading("Refund")?;
        match processor.refund(scenario.order_total) {
            Ok(refund) => console.line(refund.message)?,
            Err(err) => console.error(err)?,
        }
    }

    console.blank()?;
    console.heading("Empty Cart")?;
    checkout_order(console, processor.as_ref(), Money::ZERO)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn all_processors() -> Vec<Box<dyn PaymentProcessor>> {
        vec![
            Box::new(CreditCardProcessor),
            Box::new(PayPalProcessor),
            Box::new(ApplePayProcessor),
        ]
    }

    #[test]
    fn credit_card_transcript() {
        let receipt = CreditCardProcessor.process(Money::from_cents(9_999)).unwrap();
        assert_eq!(
            receipt.steps,
            vec![
                "Processing $99.99 via credit card",
                "  Connecting to payment gateway...",
                "  Verifying card details...",
                "  Transaction approved!",
            ]
        );
        assert_eq!(
            CreditCardProcessor.refund(Money::from_cents(9_999)).unwrap().message,
            "Refunding $99.99 to credit card"
        );
    }

    #[test]
    fn non_positive_amounts_are_rejected() {
        for processor in all_processors() {
            assert_eq!(
                processor.process(Money::ZERO),
                Err(PaymentError::invalid_amount(processor.name(), Money::ZERO))
            );
            assert!(processor.refund(Money::from_cents(-1)).is_err());
        }
    }

    #[test]
    fn menu_selection_falls_back_to_credit_card() {
        assert_eq!(ProcessorChoice::from_menu(1), ProcessorChoice::CreditCard);
        assert_eq!(ProcessorChoice::from_menu(2), ProcessorChoice::PayPal);
        assert_eq!(ProcessorChoice::from_menu(3), ProcessorChoice::ApplePay);
        assert_eq!(ProcessorChoice::from_menu(0), ProcessorChoice::CreditCard);
        assert_eq!(ProcessorChoice::from_menu(42), ProcessorChoice::CreditCard);
        assert_eq!(ProcessorChoice::from_menu(2).build().name(), "PayPal Processor");
    }

    #[test]
    fn registry_lookup_and_order() {
        let registry = ProcessorRegistry::with_builtin();
        assert_eq!(registry.len(), 3);
        assert!(!registry.is_empty());
        assert_eq!(
            registry.names(),
            vec!["Credit Card Processor", "PayPal Processor", "Apple Pay Processor"]
        );
        assert!(registry.get("Apple Pay Processor").is_some());
        assert!(registry.get("Bitcoin").is_none());
        assert!(ProcessorRegistry::new().is_empty());
    }

    struct DecliningProcessor;

    impl PaymentProcessor for DecliningProcessor {
        fn name(&self) -> &'static str {
            "Declining Processor"
        }

        fn process(&self, amount: Money) -> Result<Receipt, PaymentError> {
            Err(PaymentError::invalid_amount(self.name(), amount))
        }

        fn refund(&self, amount: Money) -> Result<Refund, PaymentError> {
            Err(PaymentError::invalid_refund(self.name(), amount))
        }
    }

    #[test]
    fn registry_accepts_new_variants_without_driver_changes() {
        let mut registry = ProcessorRegistry::with_builtin();
        registry.register(Box::new(DecliningProcessor));

        let mut console = Console::capture();
        let completed = registry
            .checkout_all(&mut console, Money::from_cents(9_999))
            .unwrap();
        assert_eq!(completed, 3);

        let transcript = console.transcript();
        assert_eq!(transcript.matches("=== Checkout Order ===").count(), 4);
        assert_eq!(transcript.matches("✓ Order completed successfully!").count(), 3);
        assert!(transcript.contains("✗ Payment failed: Declining Processor cannot charge $99.99"));
    }

    #[test]
    fn checkout_transcript_shape() {
        let mut console = Console::capture();
        let paid = checkout_order(&mut console, &PayPalProcessor, Money::from_cents(9_999)).unwrap();
        assert!(paid);
        assert_eq!(
            console.lines(),
            vec![
                "",
                "=== Checkout Order ===",
                "Using: PayPal Processor",
                "Total: $99.99",
                "",
                "Processing payment...",
                "Processing $99.99 via PayPal",
                "  Authenticating PayPal account...",
                "  Transfer initiated...",
                "  Transaction completed!",
                "✓ Order completed successfully!",
            ]
        );
    }

    proptest! {
        #[test]
        fn process_then_refund_reference_the_same_amount(cents in 1i64..10_000_000) {
            let amount = Money::from_cents(cents);
            let rendered = amount.to_string();
            for processor in all_processors() {
                let receipt = processor.process(amount).unwrap();
                let refund = processor.refund(amount).unwrap();
                prop_assert_eq!(receipt.amount, amount);
                prop_assert_eq!(refund.amount, amount);
                prop_assert!(receipt.steps[0].contains(&rendered));
                prop_assert!(refund.message.contains(&rendered));
            }
        }
    }
}
