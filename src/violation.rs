// SOLID violations, kept for contrast with `payment`.
// One broad trait with default bodies stands in for a base class: processing branches on a
// string tag, receipts and discounts live on the same type, and cash is forced to "implement"
// a discount it cannot honour.

use crate::amount::Amount;
use crate::error::PatternError;
use crate::sink::Sink;

pub trait PaymentService {
    /// Dispatches on a free-form tag. Unknown tags are reported as an error and write nothing.
    fn process_payment(
        &self,
        out: &mut dyn Sink,
        payment_type: &str,
        amount: Amount,
    ) -> Result<(), PatternError> {
        match payment_type {
            "CreditCard" => out.write(&format!("Processing credit card payment of ${amount}")),
            "PayPal" => out.write(&format!("Processing PayPal payment of ${amount}")),
            other => return Err(PatternError::unrecognized("payment", other)),
        }
        Ok(())
    }

    fn print_receipt(&self, out: &mut dyn Sink, amount: Amount) {
        out.write(&format!("Receipt: Payment of ${amount} has been processed."));
    }

    fn apply_discount(&self, out: &mut dyn Sink, discount: Amount) {
        out.write(&format!("Applying discount of ${discount}"));
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct GeneralPaymentService;

impl PaymentService for GeneralPaymentService {}

#[derive(Debug, Default, Clone, Copy)]
pub struct CashPaymentService;

impl PaymentService for CashPaymentService {
    // The tag is meaningless here but the broad contract still demands it.
    fn process_payment(
        &self,
        out: &mut dyn Sink,
        _payment_type: &str,
        amount: Amount,
    ) -> Result<(), PatternError> {
        out.write(&format!("Processing cash payment of ${amount}"));
        Ok(())
    }

    fn apply_discount(&self, out: &mut dyn Sink, _discount: Amount) {
        out.write("Discounts not applicable for cash payments.");
    }
}

pub fn demo(out: &mut dyn Sink) -> Result<(), PatternError> {
    let payment_service: Box<dyn PaymentService> = Box::new(GeneralPaymentService);
    payment_service.process_payment(out, "CreditCard", Amount::new(100.0))?;
    payment_service.print_receipt(out, Amount::new(100.0));

    let cash_service: Box<dyn PaymentService> = Box::new(CashPaymentService);
    cash_service.process_payment(out, "", Amount::new(50.0))?;
    cash_service.apply_discount(out, Amount::new(5.0));
    Ok(())
}
