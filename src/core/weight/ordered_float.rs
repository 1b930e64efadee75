use std::cmp::Ordering;

/// Float with total ordering, so that it can be used as a heap key.
#[derive(Debug, Default, Clone, Copy)]
pub struct OrderedFloat(f64);

impl Ord for OrderedFloat {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl PartialOrd for OrderedFloat {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for OrderedFloat {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for OrderedFloat {}

impl From<f64> for OrderedFloat {
    fn from(value: f64) -> Self {
        Self(value)
    }
}

impl From<OrderedFloat> for f64 {
    fn from(value: OrderedFloat) -> Self {
        value.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_order() {
        let mut values = [3.5, f64::INFINITY, 0.0, 1.25].map(OrderedFloat::from);
        values.sort();
        assert_eq!(
            values.map(f64::from),
            [0.0, 1.25, 3.5, f64::INFINITY]
        );
    }
}
