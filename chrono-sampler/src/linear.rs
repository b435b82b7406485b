use std::{
    fmt::{Debug, Display, Formatter, Result},
    ops::{Add, Div, Index, IndexMut, Mul},
};

use num::Zero;

use crate::Real;

/// An abstraction of the types that can be aggregated by the samplers.
/// To implement LinearSpace a type must have a zero element, support addition,
/// and support scaling by a Real in both directions.
/// The trait is implemented automatically for any type meeting these bounds.
pub trait LinearSpace:
    Clone + Debug + Zero + Add<Output = Self> + Mul<Real, Output = Self> + Div<Real, Output = Self>
{
}

impl<T> LinearSpace for T where
    T: Clone
        + Debug
        + Zero
        + Add<Output = T>
        + Mul<Real, Output = T>
        + Div<Real, Output = T>
{
}

/// This type allows static arrays of Real values to be sampled as a single
/// vector-valued quantity, with every operation applied component-wise.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValueArray<const N: usize>(pub [Real; N]);

impl<const N: usize> ValueArray<N> {
    pub fn new(value: [Real; N]) -> Self {
        Self(value)
    }

    pub fn components(&self) -> &[Real; N] {
        &self.0
    }

    fn map(self, f: impl Fn(Real) -> Real) -> Self {
        Self(self.0.map(f))
    }
}

impl<const N: usize> Default for ValueArray<N> {
    fn default() -> Self {
        Self([Real::default(); N])
    }
}

impl<const N: usize> Display for ValueArray<N> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        for (i, val) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, "{val}")?;
        }
        Ok(())
    }
}

impl<const N: usize> Index<usize> for ValueArray<N> {
    type Output = Real;

    fn index(&self, idx: usize) -> &Real {
        &self.0[idx]
    }
}

impl<const N: usize> IndexMut<usize> for ValueArray<N> {
    fn index_mut(&mut self, idx: usize) -> &mut Real {
        &mut self.0[idx]
    }
}

impl<const N: usize> Add for ValueArray<N> {
    type Output = Self;

    fn add(mut self, rhs: Self) -> Self {
        for (lhs, rhs) in self.0.iter_mut().zip(rhs.0) {
            *lhs += rhs;
        }
        self
    }
}

impl<const N: usize> Mul<Real> for ValueArray<N> {
    type Output = Self;

    fn mul(self, rhs: Real) -> Self {
        self.map(|x| x * rhs)
    }
}

impl<const N: usize> Div<Real> for ValueArray<N> {
    type Output = Self;

    fn div(self, rhs: Real) -> Self {
        self.map(|x| x / rhs)
    }
}

impl<const N: usize> Zero for ValueArray<N> {
    fn zero() -> Self {
        Self::default()
    }

    fn is_zero(&self) -> bool {
        self.0.iter().all(Zero::is_zero)
    }
}
