use std::fmt;
use std::ops::{Add, AddAssign};

/// A monetary amount in euro cents.
///
/// All credit and price arithmetic happens on integer minor units; the
/// two-decimal display form only exists at the output boundary, so repeated
/// small additions can never drift.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Money(u64);

impl Money {
    pub const ZERO: Money = Money(0);

    pub const fn from_cents(cents: u64) -> Self {
        Money(cents)
    }

    pub const fn cents(self) -> u64 {
        self.0
    }

    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// How much is still missing to reach `target`. Zero once covered.
    pub fn shortfall_to(self, target: Money) -> Money {
        Money(target.0.saturating_sub(self.0))
    }

    pub fn checked_sub(self, rhs: Money) -> Option<Money> {
        self.0.checked_sub(rhs.0).map(Money)
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, rhs: Money) -> Money {
        Money(self.0 + rhs.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, rhs: Money) {
        self.0 += rhs.0;
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cents = self.cents();
        write!(f, "{}.{:02} EUR", cents / 100, cents % 100)
    }
}

/// The fixed set of coins and notes the acceptor takes. Anything else is
/// rejected at the shell boundary and never becomes a `Denomination`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Denomination {
    TenCents,
    TwentyCents,
    FiftyCents,
    OneEuro,
    TwoEuros,
}

impl Denomination {
    /// In ascending order; the shell's input codes 1..=5 index into this.
    pub const ALL: [Denomination; 5] = [
        Denomination::TenCents,
        Denomination::TwentyCents,
        Denomination::FiftyCents,
        Denomination::OneEuro,
        Denomination::TwoEuros,
    ];

    pub const fn value(self) -> Money {
        match self {
            Denomination::TenCents => Money::from_cents(10),
            Denomination::TwentyCents => Money::from_cents(20),
            Denomination::FiftyCents => Money::from_cents(50),
            Denomination::OneEuro => Money::from_cents(100),
            Denomination::TwoEuros => Money::from_cents(200),
        }
    }
}
