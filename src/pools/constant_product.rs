//! Constant Product pool engine (Uniswap V2 style, single pair).
//!
//! The swap invariant is `x × y = k` where `x` and `y` are the reserves
//! of the two assets. Swaps charge no fee.
//!
//! # Swap Algorithm (asset In → asset Out)
//!
//! 1. `amount_out = floor(reserve_out × amount_in / (reserve_in + amount_in))`
//! 2. `reserve_in += amount_in`
//! 3. `reserve_out -= amount_out`
//!
//! # Invariant
//!
//! After every swap `k_after ≥ k_before`: flooring the output leaves the
//! rounding residue in the pool.
//!
//! # Atomicity
//!
//! Every operation runs under one pool lock. It validates, computes the
//! complete state transition, moves tokens through a settlement (which
//! unwinds itself on failure), and only then commits the transition. A
//! rejected operation leaves reserves, shares and the asset ledgers as
//! they were.

use std::sync::{Mutex, MutexGuard, PoisonError};

use log::{debug, trace};

use super::settlement::{Settlement, Side};
use super::state::{PoolState, Transition};
use crate::config::PoolConfig;
use crate::domain::{
    Account, AddLiquidity, AddLiquidityOutcome, Amount, Price, RemoveLiquidity,
    RemoveLiquidityOutcome, Rounding, Shares, SwapExactIn, SwapOutcome, Timestamp, TokenAddress,
    TokenPair,
};
use crate::error::AmmError;
use crate::math::{isqrt_product, mul_div, CheckedArithmetic};
use crate::traits::{Clock, SystemClock, TokenLedger};

struct PoolInner<L> {
    state: PoolState,
    ledger_a: L,
    ledger_b: L,
}

/// A two-asset constant product pool (`x · y = k`).
///
/// Generic over the asset ledger `L` it moves tokens through and the
/// [`Clock`] deadlines are checked against. All methods take `&self`; the
/// pool serializes them internally, so it can be shared behind an `Arc`.
///
/// # Example
///
/// ```rust
/// use std::sync::{Arc, Mutex};
///
/// use simple_swap::config::PoolConfig;
/// use simple_swap::domain::{
///     Account, AddLiquidity, Amount, Shares, SwapExactIn, Timestamp, TokenAddress, TokenPair,
/// };
/// use simple_swap::ledger::InMemoryLedger;
/// use simple_swap::pools::ConstantProductPool;
/// use simple_swap::traits::ManualClock;
///
/// let (tok_a, tok_b) = (TokenAddress::from_bytes([1; 32]), TokenAddress::from_bytes([2; 32]));
/// let custody = Account::from_bytes([0xAA; 32]);
/// let alice = Account::from_bytes([7; 32]);
///
/// let ledger_a = Arc::new(Mutex::new(InMemoryLedger::new(tok_a, custody)));
/// let ledger_b = Arc::new(Mutex::new(InMemoryLedger::new(tok_b, custody)));
/// for ledger in [&ledger_a, &ledger_b] {
///     let mut l = ledger.lock().expect("ledger");
///     l.mint(&alice, Amount::new(1_000)).expect("mint");
///     l.approve(&alice, Amount::new(1_000));
/// }
///
/// let cfg = PoolConfig::new(TokenPair::new(tok_a, tok_b).expect("distinct"));
/// let clock = ManualClock::new(Timestamp::from_secs(100));
/// let pool = ConstantProductPool::new(cfg, ledger_a, ledger_b, clock).expect("pool");
///
/// let deadline = Timestamp::from_secs(200);
/// let added = pool
///     .add_liquidity(&alice, &AddLiquidity {
///         token_a: tok_a,
///         token_b: tok_b,
///         amount_a_desired: Amount::new(100),
///         amount_b_desired: Amount::new(100),
///         amount_a_min: Amount::ZERO,
///         amount_b_min: Amount::ZERO,
///         recipient: alice,
///         deadline,
///     })
///     .expect("deposit");
/// assert_eq!(added.minted, Shares::new(100));
///
/// let swapped = pool
///     .swap_exact_tokens_for_tokens(&alice, &SwapExactIn {
///         amount_in: Amount::new(10),
///         amount_out_min: Amount::ZERO,
///         path: [tok_a, tok_b],
///         recipient: alice,
///         deadline,
///     })
///     .expect("swap");
/// assert_eq!(swapped.amount_out(), Amount::new(9));
/// assert_eq!(pool.reserves(), (Amount::new(110), Amount::new(91)));
/// ```
pub struct ConstantProductPool<L, C = SystemClock> {
    config: PoolConfig,
    clock: C,
    inner: Mutex<PoolInner<L>>,
}

impl<L, C> core::fmt::Debug for ConstantProductPool<L, C> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ConstantProductPool")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl<L: TokenLedger> ConstantProductPool<L, SystemClock> {
    /// Creates an empty pool that checks deadlines against wall-clock time.
    ///
    /// # Errors
    ///
    /// Propagates any error from [`PoolConfig::validate`].
    pub fn with_system_clock(config: PoolConfig, ledger_a: L, ledger_b: L) -> Result<Self, AmmError> {
        Self::new(config, ledger_a, ledger_b, SystemClock)
    }
}

impl<L: TokenLedger, C: Clock> ConstantProductPool<L, C> {
    /// Creates an empty pool.
    ///
    /// `ledger_a` and `ledger_b` must track the pair's first and second
    /// asset respectively.
    ///
    /// # Errors
    ///
    /// Propagates any error from [`PoolConfig::validate`].
    pub fn new(config: PoolConfig, ledger_a: L, ledger_b: L, clock: C) -> Result<Self, AmmError> {
        config.validate()?;
        Ok(Self {
            config,
            clock,
            inner: Mutex::new(PoolInner {
                state: PoolState::new(*config.token_pair()),
                ledger_a,
                ledger_b,
            }),
        })
    }

    // -- reads ---------------------------------------------------------------

    /// Returns the pool's configuration.
    #[must_use]
    pub const fn config(&self) -> &PoolConfig {
        &self.config
    }

    /// Returns the asset pair.
    #[must_use]
    pub const fn token_pair(&self) -> &TokenPair {
        self.config.token_pair()
    }

    /// Returns the reserve of asset A.
    #[must_use]
    pub fn reserve_a(&self) -> Amount {
        self.lock().state.reserve_a()
    }

    /// Returns the reserve of asset B.
    #[must_use]
    pub fn reserve_b(&self) -> Amount {
        self.lock().state.reserve_b()
    }

    /// Returns both reserves from a single observation.
    #[must_use]
    pub fn reserves(&self) -> (Amount, Amount) {
        self.lock().state.reserves()
    }

    /// Returns the outstanding shares.
    #[must_use]
    pub fn total_shares(&self) -> Shares {
        self.lock().state.total_shares()
    }

    /// Returns the shares held by `holder`.
    #[must_use]
    pub fn balance_of(&self, holder: &Account) -> Shares {
        self.lock().state.share_balance_of(holder)
    }

    /// Returns `true` if the pool holds no reserves.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lock().state.is_empty()
    }

    /// Returns a copy of the complete pool state.
    #[must_use]
    pub fn snapshot(&self) -> PoolState {
        self.lock().state.clone()
    }

    /// Runs `f` against both asset ledgers while holding the pool lock.
    pub fn with_ledgers<R>(&self, f: impl FnOnce(&L, &L) -> R) -> R {
        let inner = self.lock();
        f(&inner.ledger_a, &inner.ledger_b)
    }

    // -- operations ----------------------------------------------------------

    /// Deposits both assets at the current reserve ratio and mints shares
    /// to `request.recipient`.
    ///
    /// The first deposit sets the ratio and mints `√(a × b)` shares. Later
    /// deposits use as much of the desired amounts as the ratio allows and
    /// mint `min(a × S / Ra, b × S / Rb)` shares.
    ///
    /// # Errors
    ///
    /// - [`AmmError::DeadlineExceeded`] if the deadline has passed.
    /// - [`AmmError::AssetNotFound`] if the assets are not the pool's pair.
    /// - [`AmmError::ZeroAmount`] if either desired amount is zero.
    /// - [`AmmError::InsufficientAmount`] if a used amount is below its
    ///   minimum.
    /// - [`AmmError::InsufficientLiquidityMinted`] if no share would be
    ///   minted.
    /// - [`AmmError::Transfer`] if pulling either asset from `caller` fails.
    pub fn add_liquidity(
        &self,
        caller: &Account,
        request: &AddLiquidity,
    ) -> Result<AddLiquidityOutcome, AmmError> {
        let mut inner = self.lock();
        self.ensure_open(request.deadline)?;
        let orientation = inner.state.orient(&request.token_a, &request.token_b)?;
        if request.amount_a_desired.is_zero() || request.amount_b_desired.is_zero() {
            return Err(AmmError::ZeroAmount);
        }

        let (desired_a, desired_b) =
            orientation.align(request.amount_a_desired, request.amount_b_desired);
        let (min_a, min_b) = orientation.align(request.amount_a_min, request.amount_b_min);
        let (reserve_a, reserve_b) = inner.state.reserves();
        let total = inner.state.total_shares();

        let (amount_a, amount_b, minted) = if inner.state.is_empty() {
            let minted = Shares::new(isqrt_product(desired_a.get(), desired_b.get())?);
            (desired_a, desired_b, minted)
        } else {
            let (amount_a, amount_b) =
                Self::compute_deposit(desired_a, desired_b, reserve_a, reserve_b)?;
            let minted = Self::compute_minted(amount_a, amount_b, reserve_a, reserve_b, total)?;
            (amount_a, amount_b, minted)
        };
        if amount_a < min_a || amount_b < min_b {
            trace!("add_liquidity rejected: ({amount_a}, {amount_b}) below minimum");
            return Err(AmmError::InsufficientAmount);
        }
        if minted.is_zero() {
            return Err(AmmError::InsufficientLiquidityMinted);
        }

        let transition = Transition {
            reserve_a: reserve_a.safe_add(&amount_a)?,
            reserve_b: reserve_b.safe_add(&amount_b)?,
            shares: Some(inner.state.share_ledger().plan_mint(&request.recipient, minted)?),
        };

        let PoolInner {
            state,
            ledger_a,
            ledger_b,
        } = &mut *inner;
        let mut settlement = Settlement::new(ledger_a, ledger_b);
        settlement.pull(Side::A, caller, amount_a)?;
        settlement.pull(Side::B, caller, amount_b)?;
        state.commit(transition);

        debug!(
            "add_liquidity: {caller} deposited ({amount_a}, {amount_b}), minted {minted} to {}",
            request.recipient
        );
        let (amount_a, amount_b) = orientation.align(amount_a, amount_b);
        Ok(AddLiquidityOutcome {
            minted,
            amount_a,
            amount_b,
        })
    }

    /// Burns `request.shares` from `caller` and pays the proportional part
    /// of both reserves to `request.recipient`.
    ///
    /// Each asset returned is `shares × reserve / total_shares`, rounded
    /// down. Burning every outstanding share empties the pool exactly.
    ///
    /// # Errors
    ///
    /// - [`AmmError::DeadlineExceeded`] if the deadline has passed.
    /// - [`AmmError::AssetNotFound`] if the assets are not the pool's pair.
    /// - [`AmmError::InsufficientShares`] if `shares` is zero or exceeds
    ///   the caller's balance.
    /// - [`AmmError::InsufficientAmount`] if an amount is below its minimum
    ///   or both amounts round to zero.
    /// - [`AmmError::Transfer`] if paying out either asset fails.
    pub fn remove_liquidity(
        &self,
        caller: &Account,
        request: &RemoveLiquidity,
    ) -> Result<RemoveLiquidityOutcome, AmmError> {
        let mut inner = self.lock();
        self.ensure_open(request.deadline)?;
        let orientation = inner.state.orient(&request.token_a, &request.token_b)?;
        let burn = inner.state.share_ledger().plan_burn(caller, request.shares)?;

        let (reserve_a, reserve_b) = inner.state.reserves();
        let total = inner.state.total_shares();
        let amount_a = Self::compute_withdrawal(request.shares, reserve_a, total)?;
        let amount_b = Self::compute_withdrawal(request.shares, reserve_b, total)?;

        let (min_a, min_b) = orientation.align(request.amount_a_min, request.amount_b_min);
        if amount_a < min_a || amount_b < min_b {
            trace!("remove_liquidity rejected: ({amount_a}, {amount_b}) below minimum");
            return Err(AmmError::InsufficientAmount);
        }
        if amount_a.is_zero() && amount_b.is_zero() {
            return Err(AmmError::InsufficientAmount);
        }

        let transition = Transition {
            reserve_a: reserve_a.safe_sub(&amount_a)?,
            reserve_b: reserve_b.safe_sub(&amount_b)?,
            shares: Some(burn),
        };

        let PoolInner {
            state,
            ledger_a,
            ledger_b,
        } = &mut *inner;
        let mut settlement = Settlement::new(ledger_a, ledger_b);
        settlement.ensure_payable(Side::A, amount_a)?;
        settlement.ensure_payable(Side::B, amount_b)?;
        settlement.push(Side::A, &request.recipient, amount_a)?;
        settlement.push(Side::B, &request.recipient, amount_b)?;
        state.commit(transition);

        debug!(
            "remove_liquidity: {caller} burned {} shares, paid ({amount_a}, {amount_b}) to {}",
            request.shares, request.recipient
        );
        let (amount_a, amount_b) = orientation.align(amount_a, amount_b);
        Ok(RemoveLiquidityOutcome { amount_a, amount_b })
    }

    /// Sells exactly `request.amount_in` of `path[0]` for `path[1]`.
    ///
    /// # Errors
    ///
    /// - [`AmmError::DeadlineExceeded`] if the deadline has passed.
    /// - [`AmmError::AssetNotFound`] if the path is not the pool's pair
    ///   (including a repeated or null asset).
    /// - [`AmmError::ZeroAmount`] if `amount_in` is zero.
    /// - [`AmmError::EmptyPool`] if the pool holds no reserves.
    /// - [`AmmError::InsufficientOutputAmount`] if the output is zero or
    ///   below `amount_out_min`.
    /// - [`AmmError::Transfer`] if pulling the input or paying the output
    ///   fails.
    pub fn swap_exact_tokens_for_tokens(
        &self,
        caller: &Account,
        request: &SwapExactIn,
    ) -> Result<SwapOutcome, AmmError> {
        let mut inner = self.lock();
        self.ensure_open(request.deadline)?;
        let (side_in, side_out) = Self::route(&inner.state, &request.path)?;
        if request.amount_in.is_zero() {
            return Err(AmmError::ZeroAmount);
        }

        let (reserve_in, reserve_out) = Self::reserves_for(&inner.state, side_in)?;
        let amount_out = Self::amount_out(request.amount_in, reserve_in, reserve_out)?;
        if amount_out < request.amount_out_min {
            trace!(
                "swap rejected: output {amount_out} below minimum {}",
                request.amount_out_min
            );
            return Err(AmmError::InsufficientOutputAmount);
        }
        let outcome = SwapOutcome::new(request.amount_in, amount_out)?;

        let new_in = reserve_in.safe_add(&request.amount_in)?;
        let new_out = reserve_out.safe_sub(&amount_out)?;
        let (reserve_a, reserve_b) = match side_in {
            Side::A => (new_in, new_out),
            Side::B => (new_out, new_in),
        };
        let transition = Transition {
            reserve_a,
            reserve_b,
            shares: None,
        };

        let PoolInner {
            state,
            ledger_a,
            ledger_b,
        } = &mut *inner;
        let mut settlement = Settlement::new(ledger_a, ledger_b);
        settlement.ensure_payable(side_out, amount_out)?;
        settlement.pull(side_in, caller, request.amount_in)?;
        settlement.push(side_out, &request.recipient, amount_out)?;
        state.commit(transition);

        debug!(
            "swap: {caller} sold {} ({side_in:?}) for {amount_out} ({side_out:?})",
            request.amount_in
        );
        Ok(outcome)
    }

    /// Quotes an exact-input swap at current reserves without executing it.
    ///
    /// # Errors
    ///
    /// As [`swap_exact_tokens_for_tokens`](Self::swap_exact_tokens_for_tokens)
    /// minus the deadline, slippage and transfer failures.
    pub fn quote_exact_in(
        &self,
        amount_in: Amount,
        path: [TokenAddress; 2],
    ) -> Result<SwapOutcome, AmmError> {
        let inner = self.lock();
        let (side_in, _) = Self::route(&inner.state, &path)?;
        if amount_in.is_zero() {
            return Err(AmmError::ZeroAmount);
        }
        let (reserve_in, reserve_out) = Self::reserves_for(&inner.state, side_in)?;
        let amount_out = Self::amount_out(amount_in, reserve_in, reserve_out)?;
        SwapOutcome::new(amount_in, amount_out)
    }

    /// Returns the spot price of `base` in units of `quote`:
    /// `reserve(quote) × 10^18 / reserve(base)`.
    ///
    /// # Errors
    ///
    /// - [`AmmError::AssetNotFound`] if either asset is not pooled.
    /// - [`AmmError::EmptyPool`] if the base reserve is zero.
    pub fn get_price(&self, base: &TokenAddress, quote: &TokenAddress) -> Result<Price, AmmError> {
        let inner = self.lock();
        let base_reserve = inner
            .state
            .reserve_of(base)
            .ok_or(AmmError::AssetNotFound)?;
        let quote_reserve = inner
            .state
            .reserve_of(quote)
            .ok_or(AmmError::AssetNotFound)?;
        if base_reserve.is_zero() {
            return Err(AmmError::EmptyPool);
        }
        if base == quote {
            return Ok(Price::ONE);
        }
        Price::from_reserves(quote_reserve, base_reserve, Rounding::Down)
    }

    // -- helpers -------------------------------------------------------------

    /// A panic while the lock is held can only come from a ledger
    /// implementation; pool state is only written by the infallible
    /// commit, so the guarded state is still consistent.
    fn lock(&self) -> MutexGuard<'_, PoolInner<L>> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn ensure_open(&self, deadline: Timestamp) -> Result<(), AmmError> {
        let now = self.clock.now();
        if deadline.has_passed(now) {
            trace!("operation rejected: deadline {deadline} passed at {now}");
            return Err(AmmError::DeadlineExceeded);
        }
        Ok(())
    }

    fn route(state: &PoolState, path: &[TokenAddress; 2]) -> Result<(Side, Side), AmmError> {
        let [token_in, token_out] = path;
        let orientation = state.orient(token_in, token_out)?;
        Ok(orientation.align(Side::A, Side::B))
    }

    fn reserves_for(state: &PoolState, side_in: Side) -> Result<(Amount, Amount), AmmError> {
        if state.is_empty() {
            return Err(AmmError::EmptyPool);
        }
        let (reserve_a, reserve_b) = state.reserves();
        Ok(match side_in {
            Side::A => (reserve_a, reserve_b),
            Side::B => (reserve_b, reserve_a),
        })
    }

    /// `floor(amount_in × reserve_out / (reserve_in + amount_in))`.
    ///
    /// # Errors
    ///
    /// [`AmmError::InsufficientOutputAmount`] if the result is zero.
    pub(crate) fn amount_out(
        amount_in: Amount,
        reserve_in: Amount,
        reserve_out: Amount,
    ) -> Result<Amount, AmmError> {
        let denominator = reserve_in.safe_add(&amount_in)?;
        let out = amount_in.scale(reserve_out.get(), denominator.get(), Rounding::Down)?;
        if out.is_zero() {
            return Err(AmmError::InsufficientOutputAmount);
        }
        Ok(out)
    }

    /// Picks the largest deposit within `(desired_a, desired_b)` that
    /// matches the reserve ratio.
    pub(crate) fn compute_deposit(
        desired_a: Amount,
        desired_b: Amount,
        reserve_a: Amount,
        reserve_b: Amount,
    ) -> Result<(Amount, Amount), AmmError> {
        let optimal_b = desired_a.scale(reserve_b.get(), reserve_a.get(), Rounding::Down)?;
        if optimal_b <= desired_b {
            return Ok((desired_a, optimal_b));
        }
        let optimal_a = desired_b.scale(reserve_a.get(), reserve_b.get(), Rounding::Down)?;
        Ok((optimal_a, desired_b))
    }

    /// `min(amount_a × total / reserve_a, amount_b × total / reserve_b)`.
    pub(crate) fn compute_minted(
        amount_a: Amount,
        amount_b: Amount,
        reserve_a: Amount,
        reserve_b: Amount,
        total: Shares,
    ) -> Result<Shares, AmmError> {
        let by_a = mul_div(amount_a.get(), total.get(), reserve_a.get(), Rounding::Down)?;
        let by_b = mul_div(amount_b.get(), total.get(), reserve_b.get(), Rounding::Down)?;
        Ok(Shares::new(by_a.min(by_b)))
    }

    /// `shares × reserve / total`, rounded down.
    pub(crate) fn compute_withdrawal(
        shares: Shares,
        reserve: Amount,
        total: Shares,
    ) -> Result<Amount, AmmError> {
        reserve.scale(shares.get(), total.get(), Rounding::Down)
    }
}
