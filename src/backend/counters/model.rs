//! Counter store row and its arithmetic

use crate::shared::SharedError;

/// One row of the `counters` table
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct CounterRow {
    pub id: i64,
    pub name: String,
    pub value: i64,
}

impl CounterRow {
    /// Add `amount` (which may be negative) to the value
    ///
    /// Fails without touching the row when the result does not fit in an `i64`.
    pub fn add(&mut self, amount: i64) -> Result<(), SharedError> {
        self.value = self
            .value
            .checked_add(amount)
            .ok_or_else(|| SharedError::validation("amount", "counter value would overflow"))?;
        Ok(())
    }

    /// Subtract `amount` from the value, with the same overflow rule as [`add`](Self::add)
    pub fn subtract(&mut self, amount: i64) -> Result<(), SharedError> {
        self.value = self
            .value
            .checked_sub(amount)
            .ok_or_else(|| SharedError::validation("amount", "counter value would overflow"))?;
        Ok(())
    }

    pub fn reset(&mut self) {
        self.value = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn row(value: i64) -> CounterRow {
        CounterRow {
            id: 1,
            name: "hits".to_string(),
            value,
        }
    }

    proptest! {
        #[test]
        fn add_then_subtract_restores_value(
            value in -1_000_000i64..1_000_000,
            amount in -1_000i64..1_000,
        ) {
            let mut counter = row(value);
            counter.add(amount).unwrap();
            prop_assert_eq!(counter.value, value + amount);
            counter.subtract(amount).unwrap();
            prop_assert_eq!(counter, row(value));
        }

        #[test]
        fn reset_is_idempotent(value in any::<i64>()) {
            let mut counter = row(value);
            counter.reset();
            let once = counter.clone();
            counter.reset();
            prop_assert_eq!(counter, once.clone());
            prop_assert_eq!(once.value, 0);
        }
    }

    #[test]
    fn test_overflow_leaves_value() {
        let mut counter = row(i64::MAX);
        assert!(counter.add(1).is_err());
        assert_eq!(counter.value, i64::MAX);

        let mut counter = row(i64::MIN);
        assert_eq!(counter.subtract(1).unwrap_err().field(), Some("amount"));
        assert_eq!(counter.value, i64::MIN);
    }
}
