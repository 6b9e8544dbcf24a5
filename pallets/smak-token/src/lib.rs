//! # SMAK token pallet
//!
//! A single fungible asset ledger. Holders move value directly or through
//! allowances they grant to spenders, a freezer role can send tokens that stay
//! locked on the receiving account for a bounded time, and the administrator
//! can burn from its own balance.
//!
//! Every dispatchable goes through the same steps: authenticate the signed
//! caller, check the role or allowance it needs, check the source account is
//! not frozen, then hand the balance movement to the internal transfer routine.

#![cfg_attr(not(feature = "std"), no_std)]
// Storage getters are kept as the public query surface.
#![allow(deprecated)]
#![allow(clippy::let_unit_value)]

use frame_support::{
    dispatch::DispatchResult,
    ensure,
    pallet_prelude::*,
    traits::{DefensiveSaturating, UnixTime},
    PalletId,
};
use frame_system::{ensure_signed, pallet_prelude::*};
use sp_runtime::traits::AccountIdConversion;
use sp_std::prelude::*;

pub use pallet::*;
pub use weights::WeightInfo;

pub mod migrations;
pub mod weights;

#[cfg(test)]
mod mock;


#[cfg(feature = "runtime-benchmarks")]
mod benchmarking;

/// Log target for everything emitted by this pallet.
pub const LOG_TARGET: &str = "runtime::smak-token";

/// The current storage version.
const STORAGE_VERSION: StorageVersion = StorageVersion::new(1);

/// Token amount.
pub type Balance = u128;

/// Unix time in whole seconds.
pub type Moment = u64;

#[frame_support::pallet]
pub mod pallet {
    use super::*;

    #[pallet::config]
    pub trait Config: frame_system::Config {
        type RuntimeEvent: From<Event<Self>> + IsType<<Self as frame_system::Config>::RuntimeEvent>;

        /// Wall clock consulted when a freeze starts and whenever a lock is checked.
        type UnixTime: UnixTime;

        /// The ledger's own account is derived from this id. It holds the freezer
        /// role while no freezer is designated, and nobody can sign for it.
        #[pallet::constant]
        type PalletId: Get<PalletId>;

        type WeightInfo: WeightInfo;
    }

    #[pallet::pallet]
    #[pallet::storage_version(STORAGE_VERSION)]
    pub struct Pallet<T>(_);

    /// Total token supply. Only ever decreases after genesis.
    #[pallet::storage]
    #[pallet::getter(fn total_supply)]
    pub type TotalSupply<T> = StorageValue<_, Balance, ValueQuery>;

    /// Account balances
    #[pallet::storage]
    #[pallet::getter(fn balance_of)]
    pub type Balances<T: Config> = StorageMap<_, Blake2_128Concat, T::AccountId, Balance, ValueQuery>;

    /// Remaining amount `spender` may move out of `owner`'s balance.
    #[pallet::storage]
    #[pallet::getter(fn allowance)]
    pub type Allowances<T: Config> = StorageDoubleMap<
        _,
        Blake2_128Concat,
        T::AccountId,
        Blake2_128Concat,
        T::AccountId,
        Balance,
        ValueQuery,
    >;

    /// Time (unix seconds) from which an account may send transfers again.
    ///
    /// Entries are not cleared once they pass; a stale entry simply stops
    /// locking the account and is overwritten by the next freeze.
    #[pallet::storage]
    #[pallet::getter(fn frozen_until)]
    pub type FrozenAccounts<T: Config> =
        StorageMap<_, Blake2_128Concat, T::AccountId, Moment, OptionQuery>;

    /// Root authority over roles and burning.
    #[pallet::storage]
    #[pallet::getter(fn administrator)]
    pub type Administrator<T: Config> = StorageValue<_, T::AccountId, OptionQuery>;

    /// Account allowed to call `transfer_and_freeze`.
    #[pallet::storage]
    #[pallet::getter(fn freezer)]
    pub type Freezer<T: Config> = StorageValue<_, T::AccountId, OptionQuery>;

    #[pallet::event]
    #[pallet::generate_deposit(pub(super) fn deposit_event)]
    pub enum Event<T: Config> {
        /// Tokens moved from one account to another
        Transferred { from: T::AccountId, to: T::AccountId, amount: Balance },
        /// `owner` set the allowance of `spender`
        Approved { owner: T::AccountId, spender: T::AccountId, amount: Balance },
        /// Account cannot send transfers before `until`
        AccountFrozen { account: T::AccountId, until: Moment },
        /// Tokens destroyed from the administrator's balance
        Burned { who: T::AccountId, amount: Balance },
        /// Administrator role reassigned
        AdministratorChanged { old: Option<T::AccountId>, new: T::AccountId },
        /// Freezer role reassigned
        FreezerChanged { old: Option<T::AccountId>, new: T::AccountId },
        /// Freezer role handed back to the ledger account
        FreezerUnset { old: Option<T::AccountId> },
    }

    #[pallet::error]
    pub enum Error<T> {
        /// Caller lacks the role or the allowance the call needs.
        NotAuthorized,
        /// Source balance is lower than the requested amount.
        InsufficientBalance,
        /// Source account is frozen and the lock has not expired.
        FrozenAccount,
        /// A nonzero allowance can only be replaced after resetting it to zero.
        UnsafeAllowanceChange,
        /// Freeze duration must be at least one second.
        InvalidDuration,
        /// Arithmetic overflow on a balance or a freeze deadline.
        Overflow,
    }

    #[pallet::hooks]
    impl<T: Config> Hooks<BlockNumberFor<T>> for Pallet<T> {
        #[cfg(feature = "try-runtime")]
        fn try_state(_n: BlockNumberFor<T>) -> Result<(), DispatchError> {
            Self::do_try_state()
        }
    }

    #[pallet::call]
    impl<T: Config> Pallet<T> {
        /// Move `amount` from `from` to `to`.
        ///
        /// The caller is either `from` itself or a spender holding at least
        /// `amount` of allowance from `from`, which is consumed.
        #[pallet::call_index(0)]
        #[pallet::weight(T::WeightInfo::transfer())]
        pub fn transfer(
            origin: OriginFor<T>,
            from: T::AccountId,
            to: T::AccountId,
            amount: Balance,
        ) -> DispatchResult {
            let caller = ensure_signed(origin)?;
            ensure!(
                caller == from || Allowances::<T>::get(&from, &caller) >= amount,
                Error::<T>::NotAuthorized
            );
            ensure!(!Self::is_locked(&from, Self::now()), Error::<T>::FrozenAccount);

            Self::internal_transfer(&caller, &from, &to, amount)
        }

        /// Let `spender` move up to `amount` out of the caller's balance.
        ///
        /// An existing nonzero allowance has to be reset to zero first, so a
        /// spender cannot use both the old and the new value.
        #[pallet::call_index(1)]
        #[pallet::weight(T::WeightInfo::approve())]
        pub fn approve(origin: OriginFor<T>, spender: T::AccountId, amount: Balance) -> DispatchResult {
            let owner = ensure_signed(origin)?;
            let current = Allowances::<T>::get(&owner, &spender);
            ensure!(current == 0 || amount == 0, Error::<T>::UnsafeAllowanceChange);

            Self::set_allowance(&owner, &spender, amount);
            log::debug!(target: LOG_TARGET, "allowance of {spender:?} on {owner:?} set to {amount}");
            Self::deposit_event(Event::Approved { owner, spender, amount });
            Ok(())
        }

        /// Send `amount` from the freezer to `to` and lock `to` for `duration` seconds.
        #[pallet::call_index(2)]
        #[pallet::weight(T::WeightInfo::transfer_and_freeze())]
        pub fn transfer_and_freeze(
            origin: OriginFor<T>,
            to: T::AccountId,
            amount: Balance,
            duration: Moment,
        ) -> DispatchResult {
            let freezer = Self::ensure_freezer(origin)?;
            ensure!(!Self::is_administrator(&to), Error::<T>::NotAuthorized);
            ensure!(duration > 0, Error::<T>::InvalidDuration);
            ensure!(Balances::<T>::get(&freezer) >= amount, Error::<T>::InsufficientBalance);

            let now = Self::now();
            Self::internal_transfer(&freezer, &freezer, &to, amount)?;
            Self::set_lock(&to, now, duration)?;
            Ok(())
        }

        /// Destroy `amount` from the administrator's own balance.
        #[pallet::call_index(3)]
        #[pallet::weight(T::WeightInfo::burn())]
        pub fn burn(origin: OriginFor<T>, amount: Balance) -> DispatchResult {
            let admin = Self::ensure_administrator(origin)?;
            let balance = Balances::<T>::get(&admin);
            ensure!(balance >= amount, Error::<T>::InsufficientBalance);

            Balances::<T>::insert(&admin, balance - amount);
            TotalSupply::<T>::mutate(|supply| *supply = supply.defensive_saturating_sub(amount));
            log::debug!(target: LOG_TARGET, "{admin:?} burned {amount}");
            Self::deposit_event(Event::Burned { who: admin, amount });
            Ok(())
        }

        #[pallet::call_index(4)]
        #[pallet::weight(T::WeightInfo::set_administrator())]
        pub fn set_administrator(origin: OriginFor<T>, new: T::AccountId) -> DispatchResult {
            Self::ensure_administrator(origin)?;
            let old = Administrator::<T>::get();
            Administrator::<T>::put(&new);
            log::info!(target: LOG_TARGET, "administrator changed from {old:?} to {new:?}");
            Self::deposit_event(Event::AdministratorChanged { old, new });
            Ok(())
        }

        #[pallet::call_index(5)]
        #[pallet::weight(T::WeightInfo::set_freezer())]
        pub fn set_freezer(origin: OriginFor<T>, new: T::AccountId) -> DispatchResult {
            Self::ensure_administrator(origin)?;
            let old = Freezer::<T>::get();
            Freezer::<T>::put(&new);
            log::info!(target: LOG_TARGET, "freezer changed from {old:?} to {new:?}");
            Self::deposit_event(Event::FreezerChanged { old, new });
            Ok(())
        }

        /// Hand the freezer role to the ledger account, leaving nobody able to freeze.
        #[pallet::call_index(6)]
        #[pallet::weight(T::WeightInfo::unset_freezer())]
        pub fn unset_freezer(origin: OriginFor<T>) -> DispatchResult {
            Self::ensure_administrator(origin)?;
            let old = Freezer::<T>::get();
            Freezer::<T>::put(Self::ledger_account());
            log::info!(target: LOG_TARGET, "freezer {old:?} unset");
            Self::deposit_event(Event::FreezerUnset { old });
            Ok(())
        }
    }

    #[pallet::genesis_config]
    #[derive(frame_support::DefaultNoBound)]
    pub struct GenesisConfig<T: Config> {
        /// Administrator, credited with the whole initial supply
        pub administrator: Option<T::AccountId>,
        /// Amount issued at genesis
        pub initial_supply: Balance,
        /// Freezer role; the administrator holds it when left empty
        pub freezer: Option<T::AccountId>,
    }

    #[pallet::genesis_build]
    impl<T: Config> BuildGenesisConfig for GenesisConfig<T> {
        fn build(&self) {
            let Some(ref admin) = self.administrator else {
                assert!(self.initial_supply == 0, "Initial supply needs an administrator to hold it");
                if let Some(ref freezer) = self.freezer {
                    Freezer::<T>::put(freezer);
                }
                return;
            };

            Administrator::<T>::put(admin);
            Freezer::<T>::put(self.freezer.as_ref().unwrap_or(admin));
            Balances::<T>::insert(admin, self.initial_supply);
            TotalSupply::<T>::put(self.initial_supply);
        }
    }
}

impl<T: Config> Pallet<T> {
    /// Current time in whole seconds.
    pub fn now() -> Moment {
        T::UnixTime::now().as_secs()
    }

    /// Account standing for the ledger itself.
    pub fn ledger_account() -> T::AccountId {
        T::PalletId::get().into_account_truncating()
    }

    pub fn is_administrator(who: &T::AccountId) -> bool {
        Administrator::<T>::get().as_ref() == Some(who)
    }

    pub fn is_freezer(who: &T::AccountId) -> bool {
        Freezer::<T>::get().as_ref() == Some(who)
    }

    fn ensure_administrator(origin: OriginFor<T>) -> Result<T::AccountId, DispatchError> {
        let who = ensure_signed(origin)?;
        ensure!(Self::is_administrator(&who), Error::<T>::NotAuthorized);
        Ok(who)
    }

    fn ensure_freezer(origin: OriginFor<T>) -> Result<T::AccountId, DispatchError> {
        let who = ensure_signed(origin)?;
        ensure!(Self::is_freezer(&who), Error::<T>::NotAuthorized);
        Ok(who)
    }

    /// Whether `who` is barred from sending at `now`.
    pub fn is_locked(who: &T::AccountId, now: Moment) -> bool {
        FrozenAccounts::<T>::get(who).is_some_and(|until| until > now)
    }

    /// Lock `who` until `now + duration`, replacing any earlier freeze.
    pub(crate) fn set_lock(who: &T::AccountId, now: Moment, duration: Moment) -> Result<Moment, DispatchError> {
        ensure!(duration > 0, Error::<T>::InvalidDuration);
        let until = now.checked_add(duration).ok_or(Error::<T>::Overflow)?;

        FrozenAccounts::<T>::insert(who, until);
        log::debug!(target: LOG_TARGET, "{who:?} frozen until {until}");
        Self::deposit_event(Event::AccountFrozen { account: who.clone(), until });
        Ok(until)
    }

    /// Every freeze entry, including the ones that already expired.
    pub fn frozen_accounts() -> Vec<(T::AccountId, Moment)> {
        FrozenAccounts::<T>::iter().collect()
    }

    /// The only place balances move between accounts.
    ///
    /// When `caller` is not `from`, the dispatcher has already checked that its
    /// allowance covers `amount`; the allowance is consumed here.
    pub(crate) fn internal_transfer(
        caller: &T::AccountId,
        from: &T::AccountId,
        to: &T::AccountId,
        amount: Balance,
    ) -> DispatchResult {
        let from_balance = Balances::<T>::get(from);
        ensure!(from_balance >= amount, Error::<T>::InsufficientBalance);

        if from != to {
            let to_balance =
                Balances::<T>::get(to).checked_add(amount).ok_or(Error::<T>::Overflow)?;
            Balances::<T>::insert(from, from_balance - amount);
            Balances::<T>::insert(to, to_balance);
        }

        if caller != from {
            let remaining = Allowances::<T>::get(from, caller).defensive_saturating_sub(amount);
            Self::set_allowance(from, caller, remaining);
        }

        log::debug!(target: LOG_TARGET, "{caller:?} moved {amount} from {from:?} to {to:?}");
        Self::deposit_event(Event::Transferred { from: from.clone(), to: to.clone(), amount });
        Ok(())
    }

    fn set_allowance(owner: &T::AccountId, spender: &T::AccountId, amount: Balance) {
        if amount == 0 {
            Allowances::<T>::remove(owner, spender);
        } else {
            Allowances::<T>::insert(owner, spender, amount);
        }
    }

    /// Balances must add up to the total supply.
    #[cfg(any(feature = "try-runtime", test))]
    pub fn do_try_state() -> Result<(), DispatchError> {
        let sum = Balances::<T>::iter_values()
            .try_fold(0 as Balance, |acc, balance| acc.checked_add(balance))
            .ok_or(DispatchError::Other("sum of balances overflows"))?;
        ensure!(sum == TotalSupply::<T>::get(), "sum of balances differs from total supply");
        Ok(())
    }
}
