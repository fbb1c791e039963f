use crate::domain::{Money, Product};

/// A successful purchase. The item is in the tray; leftover credit stays on
/// the machine for a follow-up purchase rather than being auto-refunded.
#[derive(Debug, Clone, PartialEq)]
pub struct Dispensed {
    pub product_name: String,
    pub price: Money,
    pub remaining_credit: Money,
}

/// What came out of a refund request. Asking with nothing on the machine is
/// informational, not an error, and changes no state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Refund {
    Returned(Money),
    NothingToRefund,
}

/// Read-only snapshot of machine state for rendering.
#[derive(Debug, Clone)]
pub struct MachineView {
    pub credit: Money,
    pub products: Vec<Product>,
}
