//! Comparators deciding which element of a range counts as the minimum.
//! The RMQ structures never look at element values directly, they only ask a [`Compare`]
//! implementation whether one element is strictly less than another.

use std::ops::Index;

/// A strict weak order over `T`. Implementations must be irreflexive, asymmetric and transitive,
/// otherwise queries return unspecified (but memory-safe) positions.
///
/// Every closure `Fn(&T, &T) -> bool` is a comparator:
/// ```rust
/// use direct_rmq::DirectRmq;
///
/// let data = vec![3, 9, 1, 7];
/// let rmq = DirectRmq::with_comparator(&data, |a: &i32, b: &i32| a > b);
/// assert_eq!(rmq.query(0, 4, &data), 1);
/// ```
pub trait Compare<T: ?Sized> {
    /// Returns true if `a` is strictly less than `b` under this order.
    fn less(&self, a: &T, b: &T) -> bool;
}

/// The natural order of `T` as given by its [`PartialOrd`] implementation.
/// This is the default comparator of [`DirectRmq`][crate::DirectRmq].
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NaturalOrder;

impl<T: PartialOrd + ?Sized> Compare<T> for NaturalOrder {
    #[inline]
    fn less(&self, a: &T, b: &T) -> bool {
        a < b
    }
}

/// Flips the wrapped comparator. `DirectRmq::with_comparator(&data, Reverse(NaturalOrder))`
/// answers range maximum queries.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Reverse<C>(pub C);

impl<T: ?Sized, C: Compare<T>> Compare<T> for Reverse<C> {
    #[inline]
    fn less(&self, a: &T, b: &T) -> bool {
        self.0.less(b, a)
    }
}

impl<T: ?Sized, F> Compare<T> for F
where
    F: Fn(&T, &T) -> bool,
{
    #[inline]
    fn less(&self, a: &T, b: &T) -> bool {
        self(a, b)
    }
}

/// Returns the position of the smaller element of `data[a]` and `data[b]`.
/// `b` is only returned if its element is strictly less, so on ties the first argument wins.
/// Callers rely on this to get leftmost-minimum results by passing the left candidate first.
#[inline]
pub(crate) fn arg_min<T, S, C>(cmp: &C, data: &S, a: usize, b: usize) -> usize
where
    S: Index<usize, Output = T> + ?Sized,
    C: Compare<T>,
{
    if cmp.less(&data[b], &data[a]) {
        b
    } else {
        a
    }
}
