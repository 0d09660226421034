use std::fmt::{Debug, Display};
use std::iter::Sum;
use std::ops::{Add, Neg, Sub, Mul, Div, AddAssign, SubAssign, MulAssign, DivAssign};
use num_integer::Integer;
use num_traits::{One, ToPrimitive, Zero};
use auto_impl_ops::auto_ops;

/// The field of two elements.
///
/// Every value is exactly `0` or `1`, so anything built out of `F2`
/// never needs to be re-projected mod 2.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct F2(bool);

impl F2 {
    pub const fn new(b: bool) -> Self {
        Self(b)
    }

    pub const fn as_bool(&self) -> bool {
        self.0
    }

    pub const fn as_u8(&self) -> u8 {
        self.0 as u8
    }
}

impl<I> From<I> for F2
where I: ToPrimitive {
    fn from(a: I) -> Self {
        let b = if let Some(a) = a.to_i128() {
            a.is_odd()
        } else if let Some(a) = a.to_u128() {
            a.is_odd()
        } else {
            panic!("cannot reduce a non-integral value mod 2.")
        };
        Self(b)
    }
}

impl Display for F2 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.0 {
            write!(f, "1")
        } else {
            write!(f, "0")
        }
    }
}

impl Debug for F2 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        Display::fmt(self, f)
    }
}

impl Zero for F2 {
    fn zero() -> Self {
        Self(false)
    }

    fn is_zero(&self) -> bool {
        !self.0
    }
}

impl One for F2 {
    fn one() -> Self {
        Self(true)
    }

    fn is_one(&self) -> bool {
        self.0
    }
}

impl Neg for F2 {
    type Output = Self;
    fn neg(self) -> Self::Output {
        self
    }
}

impl Neg for &F2 {
    type Output = F2;
    fn neg(self) -> Self::Output {
        *self
    }
}

#[auto_ops]
impl<'a, 'b> Add<&'b F2> for &'a F2 {
    type Output = F2;
    fn add(self, rhs: &'b F2) -> Self::Output {
        F2(self.0 != rhs.0)
    }
}

#[auto_ops]
impl<'a, 'b> Sub<&'b F2> for &'a F2 {
    type Output = F2;
    fn sub(self, rhs: &'b F2) -> Self::Output {
        Add::add(self, rhs)
    }
}

#[auto_ops]
impl<'a, 'b> Mul<&'b F2> for &'a F2 {
    type Output = F2;
    fn mul(self, rhs: &'b F2) -> Self::Output {
        F2(self.0 && rhs.0)
    }
}

#[auto_ops]
impl<'a, 'b> Div<&'b F2> for &'a F2 {
    type Output = F2;
    fn div(self, rhs: &'b F2) -> Self::Output {
        assert!(!rhs.is_zero(), "division by zero.");
        *self
    }
}

impl Sum for F2 {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(F2::zero(), |acc, a| acc + a)
    }
}

impl<'a> Sum<&'a F2> for F2 {
    fn sum<I: Iterator<Item = &'a F2>>(iter: I) -> Self {
        iter.fold(F2::zero(), |acc, a| acc + a)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init() {
        let a = F2::from(0);
        assert_eq!(a.0, false);

        let a = F2::from(1);
        assert_eq!(a.0, true);

        let a = F2::from(2);
        assert_eq!(a.0, false);

        let a = F2::from(-1);
        assert_eq!(a.0, true);

        let a = F2::from(1.0);
        assert_eq!(a.0, true);
    }

    #[test]
    fn display() {
        let a = F2::zero();
        assert_eq!(a.to_string(), "0");

        let a = F2::one();
        assert_eq!(a.to_string(), "1");

        let a = F2::from(3);
        assert_eq!(a.to_string(), "1");
    }

    #[test]
    fn add() {
        let a = F2::from(2);
        let b = F2::from(4);
        assert_eq!(a + b, F2::from(0));

        let a = F2::from(3);
        let b = F2::from(4);
        assert_eq!(a + b, F2::from(1));

        let a = F2::from(3);
        let b = F2::from(5);
        assert_eq!(a + b, F2::from(0));
    }

    #[test]
    fn add_assign() {
        let mut a = F2::from(3);
        a += F2::from(4);
        assert_eq!(a, F2::from(1));

        a += F2::from(1);
        assert_eq!(a, F2::zero());
    }

    #[test]
    fn neg() {
        let a = F2::from(3);
        assert_eq!(-a, F2::from(1));
    }

    #[test]
    fn sub() {
        let a = F2::from(3);
        let b = F2::from(5);
        assert_eq!(a - b, F2::from(0));
    }

    #[test]
    fn mul() {
        let a = F2::from(3);
        let b = F2::from(4);
        assert_eq!(a * b, F2::from(0));

        let a = F2::from(1);
        let b = F2::from(5);
        assert_eq!(a * b, F2::from(1));
    }

    #[test]
    fn mul_assign() {
        let mut a = F2::from(3);
        a *= F2::from(4);
        assert_eq!(a, F2::from(0));
    }

    #[test]
    fn div() {
        let a = F2::from(5);
        let b = F2::from(3);
        assert_eq!(a / b, F2::from(1));
    }

    #[test]
    #[should_panic]
    fn div_by_zero() {
        let _ = F2::one() / F2::zero();
    }

    #[test]
    fn sum() {
        let s: F2 = [1, 1, 1].into_iter().map(F2::from).sum();
        assert_eq!(s, F2::one());

        let s: F2 = [F2::one(), F2::one()].iter().sum();
        assert_eq!(s, F2::zero());
    }
}
