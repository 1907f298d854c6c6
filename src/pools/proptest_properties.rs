//! Property-based tests using `proptest` for pool invariant validation.
//!
//! 1. **Swap formula**: output equals `floor(in·Ro / (Ri + in))`.
//! 2. **Invariant preservation**: `k` is non-decreasing after swaps.
//! 3. **Swap reversibility**: round-trip A→B→A returns ≤ original.
//! 4. **First deposit**: mints `isqrt(a·b)` shares.
//! 5. **Liquidity conservation**: add then remove returns what was put in,
//!    less flooring residue.
//! 6. **Ratio preservation**: a deposit keeps `reserve_a / reserve_b`.
//! 7. **Full exit**: burning every share empties the pool exactly.
//! 8. **Atomic rejection**: a rejected operation changes nothing.

use std::sync::{Arc, Mutex};

use proptest::prelude::*;

use super::ConstantProductPool;
use crate::config::PoolConfig;
use crate::domain::{
    Account, AddLiquidity, Amount, RemoveLiquidity, Shares, SwapExactIn, Timestamp, TokenAddress,
    TokenPair,
};
use crate::ledger::InMemoryLedger;
use crate::traits::{ManualClock, TokenLedger};

type Ledger = Arc<Mutex<InMemoryLedger>>;
type Pool = ConstantProductPool<Ledger, ManualClock>;

// ---------------------------------------------------------------------------
// Shared helpers
// ---------------------------------------------------------------------------

fn tok_a() -> TokenAddress {
    TokenAddress::from_bytes([1u8; 32])
}

fn tok_b() -> TokenAddress {
    TokenAddress::from_bytes([2u8; 32])
}

fn lp() -> Account {
    Account::from_bytes([7u8; 32])
}

fn trader() -> Account {
    Account::from_bytes([8u8; 32])
}

const DEADLINE: Timestamp = Timestamp::from_secs(1_000);

struct Harness {
    pool: Pool,
    ledger_a: Ledger,
    ledger_b: Ledger,
}

impl Harness {
    fn new() -> Self {
        let custody = Account::from_bytes([0xAA; 32]);
        let ledger_a = Arc::new(Mutex::new(InMemoryLedger::new(tok_a(), custody)));
        let ledger_b = Arc::new(Mutex::new(InMemoryLedger::new(tok_b(), custody)));
        let Ok(pair) = TokenPair::new(tok_a(), tok_b()) else {
            panic!("valid pair");
        };
        let Ok(pool) = ConstantProductPool::new(
            PoolConfig::new(pair),
            Arc::clone(&ledger_a),
            Arc::clone(&ledger_b),
            ManualClock::new(Timestamp::from_secs(0)),
        ) else {
            panic!("valid pool");
        };
        Self {
            pool,
            ledger_a,
            ledger_b,
        }
    }

    fn fund(&self, who: &Account, a: u128, b: u128) {
        for (ledger, amount) in [(&self.ledger_a, a), (&self.ledger_b, b)] {
            let Ok(mut l) = ledger.lock() else {
                panic!("ledger lock");
            };
            let Ok(()) = l.mint(who, Amount::new(amount)) else {
                panic!("mint");
            };
            let allowance = l.allowance(who).get() + amount;
            l.approve(who, Amount::new(allowance));
        }
    }

    fn seeded(ra: u128, rb: u128) -> Self {
        let h = Self::new();
        h.fund(&lp(), ra, rb);
        let Ok(_) = h.pool.add_liquidity(&lp(), &add(ra, rb)) else {
            panic!("seed deposit");
        };
        h
    }
}

fn add(a: u128, b: u128) -> AddLiquidity {
    AddLiquidity {
        token_a: tok_a(),
        token_b: tok_b(),
        amount_a_desired: Amount::new(a),
        amount_b_desired: Amount::new(b),
        amount_a_min: Amount::ZERO,
        amount_b_min: Amount::ZERO,
        recipient: lp(),
        deadline: DEADLINE,
    }
}

fn remove(shares: Shares) -> RemoveLiquidity {
    RemoveLiquidity {
        token_a: tok_a(),
        token_b: tok_b(),
        shares,
        amount_a_min: Amount::ZERO,
        amount_b_min: Amount::ZERO,
        recipient: lp(),
        deadline: DEADLINE,
    }
}

fn swap(amount_in: u128, path: [TokenAddress; 2]) -> SwapExactIn {
    SwapExactIn {
        amount_in: Amount::new(amount_in),
        amount_out_min: Amount::ZERO,
        path,
        recipient: trader(),
        deadline: DEADLINE,
    }
}

/// Reserves whose product stays well inside `u128`.
fn reserve_strategy() -> impl Strategy<Value = u128> {
    1_000u128..=1_000_000_000_000_000
}

fn k(pool: &Pool) -> u128 {
    let (ra, rb) = pool.reserves();
    ra.get() * rb.get()
}

// ---------------------------------------------------------------------------
// Properties 1-3: Swaps
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_swap_matches_formula(
        ra in reserve_strategy(),
        rb in reserve_strategy(),
        amount_in in 1u128..=1_000_000_000_000,
    ) {
        let h = Harness::seeded(ra, rb);
        h.fund(&trader(), amount_in, 0);
        let expected = amount_in * rb / (ra + amount_in);

        match h.pool.swap_exact_tokens_for_tokens(&trader(), &swap(amount_in, [tok_a(), tok_b()])) {
            Ok(out) => {
                prop_assert_eq!(out.amount_out().get(), expected);
                prop_assert_eq!(
                    h.pool.reserves(),
                    (Amount::new(ra + amount_in), Amount::new(rb - expected))
                );
            }
            Err(_) => prop_assert_eq!(expected, 0),
        }
    }

    #[test]
    fn prop_invariant_preservation(
        ra in reserve_strategy(),
        rb in reserve_strategy(),
    ) {
        let h = Harness::seeded(ra, rb);
        let swap_a = (ra / 500).max(1);
        let swap_b = (rb / 500).max(1);
        h.fund(&trader(), swap_a * 5, swap_b * 5);
        let k_before = k(&h.pool);

        for i in 0..10 {
            let (amount, path) = if i % 2 == 0 {
                (swap_a, [tok_a(), tok_b()])
            } else {
                (swap_b, [tok_b(), tok_a()])
            };
            let _ = h.pool.swap_exact_tokens_for_tokens(&trader(), &swap(amount, path));
        }

        let k_after = k(&h.pool);
        prop_assert!(
            k_after >= k_before,
            "k should never shrink: k_after={} < k_before={}",
            k_after, k_before
        );
    }

    #[test]
    fn prop_swap_reversibility(
        ra in reserve_strategy(),
        rb in reserve_strategy(),
    ) {
        let h = Harness::seeded(ra, rb);
        let swap_in = (ra / 1_000).max(1);
        // Enough B allowance for any output of the first leg.
        h.fund(&trader(), swap_in, rb);

        let Ok(ab) = h.pool.swap_exact_tokens_for_tokens(&trader(), &swap(swap_in, [tok_a(), tok_b()])) else {
            return Ok(());
        };
        let received_b = ab.amount_out().get();
        let Ok(ba) = h.pool.swap_exact_tokens_for_tokens(&trader(), &swap(received_b, [tok_b(), tok_a()])) else {
            return Ok(());
        };

        prop_assert!(
            ba.amount_out().get() <= swap_in,
            "round-trip should not gain: final={} > original={}",
            ba.amount_out().get(), swap_in
        );
    }
}

// ---------------------------------------------------------------------------
// Properties 4-7: Liquidity
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_first_deposit_mints_isqrt(
        a in 1u128..=u64::MAX as u128,
        b in 1u128..=u64::MAX as u128,
    ) {
        let h = Harness::new();
        h.fund(&lp(), a, b);
        let Ok(out) = h.pool.add_liquidity(&lp(), &add(a, b)) else {
            return Err(TestCaseError::fail("first deposit rejected"));
        };
        let minted = out.minted.get();
        let product = a * b;
        prop_assert!(minted * minted <= product);
        prop_assert!((minted + 1).checked_mul(minted + 1).map_or(true, |sq| sq > product));
    }

    #[test]
    fn prop_liquidity_conservation(
        ra in reserve_strategy(),
        rb in reserve_strategy(),
        pct in 1u128..=100,
    ) {
        let h = Harness::seeded(ra, rb);
        let total = h.pool.total_shares().get();
        let (add_a, add_b) = (ra * pct / 100, rb * pct / 100);
        h.fund(&trader(), add_a, add_b);
        let mut req = add(add_a, add_b);
        req.recipient = trader();

        let Ok(added) = h.pool.add_liquidity(&trader(), &req) else {
            return Ok(());
        };
        let mut exit = remove(added.minted);
        exit.recipient = trader();
        let Ok(removed) = h.pool.remove_liquidity(&trader(), &exit) else {
            return Err(TestCaseError::fail("exit of fresh shares rejected"));
        };

        // Loss comes only from flooring: the ratio trim on the deposit,
        // the minted shares, and the payout.
        let (used_a, used_b) = (added.amount_a.get(), added.amount_b.get());
        let tol_a = 4 + ra / rb + (ra + used_a) / total;
        let tol_b = 4 + rb / ra + (rb + used_b) / total;
        prop_assert!(removed.amount_a <= added.amount_a);
        prop_assert!(removed.amount_b <= added.amount_b);
        prop_assert!(
            used_a - removed.amount_a.get() <= tol_a,
            "lost {} of A, bound {}", used_a - removed.amount_a.get(), tol_a
        );
        prop_assert!(
            used_b - removed.amount_b.get() <= tol_b,
            "lost {} of B, bound {}", used_b - removed.amount_b.get(), tol_b
        );
        prop_assert!(h.pool.snapshot().is_consistent());
    }

    #[test]
    fn prop_deposit_preserves_ratio(
        ra in reserve_strategy(),
        rb in reserve_strategy(),
        pct_a in 1u128..=100,
        pct_b in 1u128..=100,
    ) {
        let h = Harness::seeded(ra, rb);
        let (want_a, want_b) = ((ra * pct_a / 100).max(1), (rb * pct_b / 100).max(1));
        h.fund(&trader(), want_a, want_b);
        let mut req = add(want_a, want_b);
        req.recipient = trader();

        let Ok(added) = h.pool.add_liquidity(&trader(), &req) else {
            return Ok(());
        };
        let (ra2, rb2) = h.pool.reserves();
        prop_assert_eq!(ra2.get(), ra + added.amount_a.get());
        prop_assert_eq!(rb2.get(), rb + added.amount_b.get());

        // ra'·rb vs ra·rb' differ only by the floored side of the deposit.
        let drift = (ra2.get() * rb).abs_diff(ra * rb2.get());
        prop_assert!(
            drift < ra.max(rb),
            "ratio drifted by {} (reserves {}/{} -> {}/{})",
            drift, ra, rb, ra2, rb2
        );
    }

    #[test]
    fn prop_full_exit_empties_pool(
        ra in reserve_strategy(),
        rb in reserve_strategy(),
        swap_in in 1u128..=1_000_000,
    ) {
        let h = Harness::seeded(ra, rb);
        h.fund(&trader(), swap_in, 0);
        let _ = h.pool.swap_exact_tokens_for_tokens(&trader(), &swap(swap_in, [tok_a(), tok_b()]));
        let (ra, rb) = h.pool.reserves();

        let Ok(out) = h.pool.remove_liquidity(&lp(), &remove(h.pool.total_shares())) else {
            return Err(TestCaseError::fail("full exit rejected"));
        };
        prop_assert_eq!((out.amount_a, out.amount_b), (ra, rb));
        prop_assert!(h.pool.is_empty());
        prop_assert_eq!(h.pool.total_shares(), Shares::ZERO);
    }
}

// ---------------------------------------------------------------------------
// Property 8: Atomic rejection
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_rejected_operations_change_nothing(
        ra in reserve_strategy(),
        rb in reserve_strategy(),
        amount in 1u128..=1_000_000,
        funded in 0u128..=1_000_000,
    ) {
        let h = Harness::seeded(ra, rb);
        // Trader can cover the first leg only when `funded` allows it.
        h.fund(&trader(), funded, 0);
        let before = h.pool.snapshot();
        let balances = |who: &Account| {
            let Ok(a) = h.ledger_a.lock() else { panic!("ledger lock") };
            let Ok(b) = h.ledger_b.lock() else { panic!("ledger lock") };
            (a.balance_of(who), b.balance_of(who))
        };
        let trader_before = balances(&trader());

        let mut req = add(amount, amount);
        req.recipient = trader();
        if h.pool.add_liquidity(&trader(), &req).is_err() {
            prop_assert_eq!(h.pool.snapshot(), before);
            prop_assert_eq!(balances(&trader()), trader_before);
        }

        let mut tight = swap(amount, [tok_a(), tok_b()]);
        tight.amount_out_min = Amount::MAX;
        let snapshot = h.pool.snapshot();
        let trader_mid = balances(&trader());
        prop_assert!(h.pool.swap_exact_tokens_for_tokens(&trader(), &tight).is_err());
        prop_assert_eq!(h.pool.snapshot(), snapshot);
        prop_assert_eq!(balances(&trader()), trader_mid);
    }
}
