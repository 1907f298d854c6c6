//! SimpleSwap walkthrough (constant product, `x · y = k`).
//!
//! Seeds a pool over two in-memory ledgers, trades against it in both
//! directions, queries spot prices, and withdraws everything.
//!
//! # Run
//!
//! ```bash
//! RUST_LOG=debug cargo run --example constant_product
//! ```

use std::sync::{Arc, Mutex, PoisonError};

use simple_swap::prelude::*;

const ETHER: u128 = 1_000_000_000_000_000_000;

fn ether(n: u128) -> Amount {
    Amount::new(n * ETHER)
}

fn fund(
    ledger: &Arc<Mutex<InMemoryLedger>>,
    who: &Account,
    amount: Amount,
) -> std::result::Result<(), LedgerError> {
    let mut l = ledger.lock().unwrap_or_else(PoisonError::into_inner);
    l.mint(who, amount)?;
    l.approve(who, amount);
    Ok(())
}

fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    println!("=== SimpleSwap (x · y = k) ===\n");

    // ── 1. Assets, accounts and ledgers ─────────────────────────────────
    let tka = TokenAddress::from_bytes([0xA1; 32]);
    let tkb = TokenAddress::from_bytes([0xB2; 32]);
    let custody = Account::from_bytes([0xCC; 32]);
    let provider = Account::from_bytes([0x11; 32]);
    let trader = Account::from_bytes([0x22; 32]);

    let ledger_a = Arc::new(Mutex::new(InMemoryLedger::new(tka, custody)));
    let ledger_b = Arc::new(Mutex::new(InMemoryLedger::new(tkb, custody)));
    fund(&ledger_a, &provider, ether(1_000))?;
    fund(&ledger_b, &provider, ether(2_000))?;
    fund(&ledger_a, &trader, ether(50))?;
    fund(&ledger_b, &trader, ether(50))?;

    // ── 2. Pool checked against wall-clock deadlines ────────────────────
    let config = PoolConfig::for_tokens(tka, tkb)?;
    let pool =
        ConstantProductPool::with_system_clock(config, Arc::clone(&ledger_a), Arc::clone(&ledger_b))?;
    let deadline = Timestamp::from_secs(SystemClock.now().as_secs() + 600);
    println!("Pool created, empty: {}", pool.is_empty());

    // ── 3. Seed liquidity ───────────────────────────────────────────────
    let seeded = pool.add_liquidity(
        &provider,
        &AddLiquidity {
            token_a: tka,
            token_b: tkb,
            amount_a_desired: ether(1_000),
            amount_b_desired: ether(2_000),
            amount_a_min: Amount::ZERO,
            amount_b_min: Amount::ZERO,
            recipient: provider,
            deadline,
        },
    )?;
    println!("\n--- Add Liquidity ---");
    println!("  Deposited:   {} A + {} B", seeded.amount_a, seeded.amount_b);
    println!("  Shares:      {}", seeded.minted);
    println!("  Spot price:  {} B per A", pool.get_price(&tka, &tkb)?);

    // ── 4. Quote, then swap A → B ───────────────────────────────────────
    let quote = pool.quote_exact_in(ether(10), [tka, tkb])?;
    let min_out = Amount::new(quote.amount_out().get() / 100 * 99);
    let sold = pool.swap_exact_tokens_for_tokens(
        &trader,
        &SwapExactIn {
            amount_in: ether(10),
            amount_out_min: min_out,
            path: [tka, tkb],
            recipient: trader,
            deadline,
        },
    )?;
    println!("\n--- Swap A → B ---");
    println!("  {sold}");
    println!("  Spot price:  {} B per A", pool.get_price(&tka, &tkb)?);

    // ── 5. A swap with an unreachable minimum is rejected untouched ─────
    let before = pool.reserves();
    let rejected = pool.swap_exact_tokens_for_tokens(
        &trader,
        &SwapExactIn {
            amount_in: ether(10),
            amount_out_min: ether(1_000),
            path: [tkb, tka],
            recipient: trader,
            deadline,
        },
    );
    println!("\n--- Swap B → A with min 1000 A ---");
    println!("  Result:      {rejected:?}");
    println!("  Reserves unchanged: {}", pool.reserves() == before);

    // ── 6. Withdraw everything ──────────────────────────────────────────
    let shares = pool.balance_of(&provider);
    let out = pool.remove_liquidity(
        &provider,
        &RemoveLiquidity {
            token_a: tka,
            token_b: tkb,
            shares,
            amount_a_min: Amount::ZERO,
            amount_b_min: Amount::ZERO,
            recipient: provider,
            deadline,
        },
    )?;
    println!("\n--- Remove Liquidity ---");
    println!("  Burned:      {shares} shares");
    println!("  Returned:    {} A + {} B", out.amount_a, out.amount_b);
    println!("  Pool empty:  {}", pool.is_empty());

    Ok(())
}
