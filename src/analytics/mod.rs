pub mod alerts;
pub mod channels;
pub mod filter;
pub mod ranking;
pub mod series;

pub use filter::RecordFilter;

use rust_decimal::Decimal;

// ---------------------------------------------------------------------------
// Shared ratio helpers — zero denominators yield None, never a panic
// ---------------------------------------------------------------------------

/// Return on investment: (gmv - cost) / cost. None when cost is zero.
pub fn roi(gmv: Decimal, cost: Decimal) -> Option<Decimal> {
    if cost.is_zero() {
        None
    } else {
        Some((gmv - cost) / cost)
    }
}

/// Plain ratio with a zero-denominator guard.
pub fn ratio(numerator: Decimal, denominator: Decimal) -> Option<Decimal> {
    if denominator.is_zero() {
        None
    } else {
        Some(numerator / denominator)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roi_basic() {
        // (500 - 100) / 100 = 4.0
        let r = roi(Decimal::from(500), Decimal::from(100)).unwrap();
        assert_eq!(r, Decimal::from(4));
    }

    #[test]
    fn test_roi_zero_cost_is_none() {
        assert_eq!(roi(Decimal::from(500), Decimal::ZERO), None);
    }

    #[test]
    fn test_roi_negative() {
        // Spending more than it returns goes negative, not undefined.
        let r = roi(Decimal::from(50), Decimal::from(100)).unwrap();
        assert_eq!(r, Decimal::new(-5, 1));
    }

    #[test]
    fn test_ratio_zero_denominator() {
        assert_eq!(ratio(Decimal::from(10), Decimal::ZERO), None);
    }
}
