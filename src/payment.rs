// SOLID payments
// Processing, discounting and receipts are separate capabilities.
// The service depends only on the traits.

use std::fmt;
use std::str::FromStr;

use crate::amount::Amount;
use crate::error::PatternError;
use crate::sink::Sink;

pub trait PaymentProcessor {
    fn process_payment(&self, out: &mut dyn Sink, amount: Amount);
    fn kind(&self) -> PaymentKind;
}

/// Narrow capability for processors that can honour a discount. Cash never implements it.
pub trait Discountable {
    fn apply_discount(&self, out: &mut dyn Sink, discount: Amount);
}

pub trait ReceiptPrinter {
    fn print_receipt(&self, out: &mut dyn Sink, amount: Amount);
}

// ============================================================================
// Processors
// ============================================================================

#[derive(Debug, Default, Clone, Copy)]
pub struct CreditCardProcessor;

impl PaymentProcessor for CreditCardProcessor {
    fn process_payment(&self, out: &mut dyn Sink, amount: Amount) {
        out.write(&format!("Processing credit card payment of ${amount}"));
    }

    fn kind(&self) -> PaymentKind {
        PaymentKind::CreditCard
    }
}

impl Discountable for CreditCardProcessor {
    fn apply_discount(&self, out: &mut dyn Sink, discount: Amount) {
        out.write(&format!("Applying discount of ${discount}"));
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct PayPalProcessor;

impl PaymentProcessor for PayPalProcessor {
    fn process_payment(&self, out: &mut dyn Sink, amount: Amount) {
        out.write(&format!("Processing PayPal payment of ${amount}"));
    }

    fn kind(&self) -> PaymentKind {
        PaymentKind::PayPal
    }
}

impl Discountable for PayPalProcessor {
    fn apply_discount(&self, out: &mut dyn Sink, discount: Amount) {
        out.write(&format!("Applying discount of ${discount}"));
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct CashProcessor;

impl PaymentProcessor for CashProcessor {
    fn process_payment(&self, out: &mut dyn Sink, amount: Amount) {
        out.write(&format!("Processing cash payment of ${amount}"));
    }

    fn kind(&self) -> PaymentKind {
        PaymentKind::Cash
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct PlainReceipt;

impl ReceiptPrinter for PlainReceipt {
    fn print_receipt(&self, out: &mut dyn Sink, amount: Amount) {
        out.write(&format!("Receipt: Payment of ${amount} has been processed."));
    }
}

// ============================================================================
// Payment kinds (tag -> variant, selected once)
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentKind {
    CreditCard,
    PayPal,
    Cash,
}

impl PaymentKind {
    pub fn tag(self) -> &'static str {
        match self {
            PaymentKind::CreditCard => "CreditCard",
            PaymentKind::PayPal => "PayPal",
            PaymentKind::Cash => "Cash",
        }
    }
}

impl fmt::Display for PaymentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for PaymentKind {
    type Err = PatternError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "CreditCard" => Ok(PaymentKind::CreditCard),
            "PayPal" => Ok(PaymentKind::PayPal),
            "Cash" => Ok(PaymentKind::Cash),
            other => Err(PatternError::unrecognized("payment", other)),
        }
    }
}

pub fn processor_for(kind: PaymentKind) -> Box<dyn PaymentProcessor> {
    match kind {
        PaymentKind::CreditCard => Box::new(CreditCardProcessor),
        PaymentKind::PayPal => Box::new(PayPalProcessor),
        PaymentKind::Cash => Box::new(CashProcessor),
    }
}

// ============================================================================
// Service
// ============================================================================

pub struct PaymentService<'a, P: PaymentProcessor + ?Sized = dyn PaymentProcessor> {
    processor: Box<P>,
    receipts: &'a dyn ReceiptPrinter,
}

impl<'a, P: PaymentProcessor + ?Sized> PaymentService<'a, P> {
    pub fn new(processor: Box<P>, receipts: &'a dyn ReceiptPrinter) -> Self {
        Self {
            processor,
            receipts,
        }
    }

    pub fn handle_payment(&self, out: &mut dyn Sink, amount: Amount) {
        tracing::debug!(kind = %self.processor.kind(), %amount, "handling payment");
        self.processor.process_payment(out, amount);
        self.receipts.print_receipt(out, amount);
    }
}

impl<P: PaymentProcessor + Discountable + ?Sized> PaymentService<'_, P> {
    /// Applies the discount, then charges and receipts the reduced amount.
    pub fn handle_discounted_payment(&self, out: &mut dyn Sink, amount: Amount, discount: Amount) {
        self.processor.apply_discount(out, discount);
        let charged = Amount::new(amount.value() - discount.value());
        self.processor.process_payment(out, charged);
        self.receipts.print_receipt(out, charged);
    }
}

pub fn demo(out: &mut dyn Sink) {
    let receipts = PlainReceipt;

    let credit_card = PaymentService::new(Box::new(CreditCardProcessor), &receipts);
    credit_card.handle_payment(out, Amount::new(100.0));

    let paypal = PaymentService::new(Box::new(PayPalProcessor), &receipts);
    paypal.handle_payment(out, Amount::new(150.0));

    let cash = PaymentService::new(Box::new(CashProcessor), &receipts);
    cash.handle_payment(out, Amount::new(50.0));
}
