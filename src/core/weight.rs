use std::{cmp::Ordering, fmt::Debug, ops::Add};

mod ordered_float;

pub use ordered_float::OrderedFloat;

/// Edge weight and path distance.
///
/// Only non-negative weights are meaningful for the shortest paths search. For
/// signed types, a negative weight is reported as an error when encountered.
pub trait Weight: PartialOrd + Add<Self, Output = Self> + Copy + Debug + Sized {
    /// Totally ordered counterpart used as a heap key.
    type Ord: Ord + From<Self> + Into<Self>;

    fn zero() -> Self;

    /// Distance of unreached vertices.
    fn inf() -> Self;

    fn is_unsigned() -> bool;
}

/// Pairs a value with its weight. Comparisons consider the weight only.
#[derive(Debug, Clone, Copy)]
pub struct Weighted<T, W>(pub T, pub W);

impl<T, W: PartialEq> PartialEq for Weighted<T, W> {
    fn eq(&self, other: &Self) -> bool {
        self.1.eq(&other.1)
    }
}

impl<T, W: Eq> Eq for Weighted<T, W> {}

impl<T, W: PartialOrd> PartialOrd for Weighted<T, W> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.1.partial_cmp(&other.1)
    }
}

impl<T, W: Ord> Ord for Weighted<T, W> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.1.cmp(&other.1)
    }
}

impl Weight for i32 {
    type Ord = Self;

    fn zero() -> Self {
        0
    }

    fn inf() -> Self {
        i32::MAX
    }

    fn is_unsigned() -> bool {
        false
    }
}

impl Weight for u32 {
    type Ord = Self;

    fn zero() -> Self {
        0
    }

    fn inf() -> Self {
        u32::MAX
    }

    fn is_unsigned() -> bool {
        true
    }
}

// Weights read from CSV files.
impl Weight for f64 {
    type Ord = OrderedFloat;

    fn zero() -> Self {
        0.0
    }

    fn inf() -> Self {
        f64::INFINITY
    }

    fn is_unsigned() -> bool {
        false
    }
}
