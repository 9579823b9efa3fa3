use rust_decimal::{Decimal, RoundingStrategy};
use smol_str::SmolStr;
use std::{
    collections::BTreeMap,
    fmt,
    iter::Sum,
    ops::{Add, AddAssign, Neg, Sub, SubAssign},
};

/// Decimal places surfaced to callers (display and transfer amounts).
pub const DISPLAY_SCALE: u32 = 1;

/// A monetary amount at full `Decimal` precision.
///
/// Arithmetic never rounds; rounding to [`DISPLAY_SCALE`] happens only at
/// the boundary where a value is surfaced ([`Money::rounded`], `Display`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct Money(Decimal);

impl Money {
    pub const ZERO: Self = Self(Decimal::ZERO);

    pub fn new(value: Decimal) -> Self {
        Self(value)
    }

    pub fn from_i64(value: i64) -> Self {
        Self(Decimal::from(value))
    }

    pub fn amount(self) -> Decimal {
        self.0
    }

    pub fn abs(self) -> Self {
        Self(self.0.abs())
    }

    pub fn is_zero(self) -> bool {
        self.0.is_zero()
    }

    pub fn is_negative(self) -> bool {
        self.0.is_sign_negative() && !self.0.is_zero()
    }

    /// Half an atomic display unit; amounts below this are treated as settled.
    pub fn tolerance() -> Self {
        Self(Decimal::new(5, DISPLAY_SCALE + 1))
    }

    /// Whether this amount is indistinguishable from zero at display scale.
    pub fn is_settled(self) -> bool {
        self.0.abs() < Self::tolerance().0
    }

    /// Rounds to display scale, half away from zero.
    pub fn rounded(self) -> Self {
        Self(
            self.0
                .round_dp_with_strategy(DISPLAY_SCALE, RoundingStrategy::MidpointAwayFromZero),
        )
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.*}", DISPLAY_SCALE as usize, self.rounded().0)
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, rhs: Self) {
        self.0 -= rhs.0;
    }
}

impl Neg for Money {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self(-self.0)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

/// A participant's position at settlement time.
///
/// `balance = paid - fair_share`; positive means the pool owes them,
/// negative means they owe the pool.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ParticipantStanding {
    pub paid: Money,
    pub fair_share: Money,
    pub balance: Money,
}

impl ParticipantStanding {
    pub fn is_settled(&self) -> bool {
        self.balance.is_settled()
    }

    pub fn is_debtor(&self) -> bool {
        !self.is_settled() && self.balance.is_negative()
    }

    pub fn is_creditor(&self) -> bool {
        !self.is_settled() && !self.balance.is_negative()
    }

    /// Amount this participant still has to put into the pool, at display scale.
    pub fn amount_to_put_in(&self) -> Money {
        if self.is_debtor() {
            (-self.balance).rounded()
        } else {
            Money::ZERO
        }
    }

    /// Amount this participant gets back out of the pool, at display scale.
    pub fn amount_to_recover(&self) -> Money {
        if self.is_creditor() {
            self.balance.rounded()
        } else {
            Money::ZERO
        }
    }
}

/// Standings keyed by participant name.
///
/// A `BTreeMap` so iteration order is stable and downstream transfer
/// tie-breaks are deterministic.
pub type BalanceSheet = BTreeMap<SmolStr, ParticipantStanding>;

/// One suggested payment from a debtor to a creditor.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Transfer {
    pub from: SmolStr,
    pub to: SmolStr,
    pub amount: Money,
}
