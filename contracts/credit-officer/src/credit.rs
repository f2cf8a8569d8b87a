use crate::types::CreditStatus;

/// Split `limit - balance` into remaining credit and shortfall.
pub fn credit_status(limit: i128, balance: i128) -> CreditStatus {
    if balance > limit {
        CreditStatus {
            credit_left: 0,
            shortfall: balance.saturating_sub(limit),
        }
    } else {
        CreditStatus {
            credit_left: limit.saturating_sub(balance),
            shortfall: 0,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_credit_left_under_limit() {
        let status = credit_status(100, 50);
        assert_eq!(status.credit_left, 50);
        assert_eq!(status.shortfall, 0);
    }

    #[test]
    fn test_shortfall_over_limit() {
        let status = credit_status(20, 50);
        assert_eq!(status.credit_left, 0);
        assert_eq!(status.shortfall, 30);
    }

    #[test]
    fn test_exactly_at_limit() {
        assert_eq!(
            credit_status(100, 100),
            CreditStatus {
                credit_left: 0,
                shortfall: 0
            }
        );
    }

    #[test]
    fn test_zero_limit_with_debt() {
        let status = credit_status(0, 7);
        assert_eq!(status.credit_left, 0);
        assert_eq!(status.shortfall, 7);
    }

    #[test]
    fn test_never_both_nonzero_and_difference_preserved() {
        let limits = [0_i128, 1, 20, 100, 1_000_000];
        let balances = [0_i128, 1, 19, 20, 21, 100, 5_000_000];
        for limit in limits {
            for balance in balances {
                let status = credit_status(limit, balance);
                assert!(status.credit_left == 0 || status.shortfall == 0);
                assert!(status.credit_left >= 0 && status.shortfall >= 0);
                assert_eq!(status.credit_left - status.shortfall, limit - balance);
            }
        }
    }
}
