//! Benchmarking setup for pallet-smak-token

use super::*;

#[allow(unused)]
use crate::Pallet as SmakToken;
use frame_benchmarking::v2::*;
use frame_system::RawOrigin;

const SEED: u32 = 0;

fn fund<T: Config>(who: &T::AccountId, amount: Balance) {
    Balances::<T>::insert(who, amount);
    TotalSupply::<T>::mutate(|supply| *supply = supply.saturating_add(amount));
}

#[benchmarks]
mod benchmarks {
    use super::*;

    // Worst case: a spender moves the tokens and the allowance is consumed.
    #[benchmark]
    fn transfer() {
        let owner: T::AccountId = account("owner", 0, SEED);
        let spender: T::AccountId = whitelisted_caller();
        let recipient: T::AccountId = account("recipient", 0, SEED);
        let amount: Balance = 1_000_000;

        fund::<T>(&owner, 10_000_000);
        Allowances::<T>::insert(&owner, &spender, amount * 2);

        #[extrinsic_call]
        _(RawOrigin::Signed(spender.clone()), owner.clone(), recipient.clone(), amount);

        assert_eq!(Balances::<T>::get(&recipient), amount);
        assert_eq!(Allowances::<T>::get(&owner, &spender), amount);
    }

    #[benchmark]
    fn approve() {
        let owner: T::AccountId = whitelisted_caller();
        let spender: T::AccountId = account("spender", 0, SEED);

        #[extrinsic_call]
        _(RawOrigin::Signed(owner.clone()), spender.clone(), 1_000_000);

        assert_eq!(Allowances::<T>::get(&owner, &spender), 1_000_000);
    }

    #[benchmark]
    fn transfer_and_freeze() {
        let freezer: T::AccountId = whitelisted_caller();
        let recipient: T::AccountId = account("recipient", 0, SEED);
        let amount: Balance = 1_000_000;

        Administrator::<T>::put(account::<T::AccountId>("admin", 0, SEED));
        Freezer::<T>::put(&freezer);
        fund::<T>(&freezer, 10_000_000);

        #[extrinsic_call]
        _(RawOrigin::Signed(freezer.clone()), recipient.clone(), amount, 86_400);

        assert_eq!(Balances::<T>::get(&recipient), amount);
        assert!(FrozenAccounts::<T>::contains_key(&recipient));
    }

    #[benchmark]
    fn burn() {
        let admin: T::AccountId = whitelisted_caller();
        Administrator::<T>::put(&admin);
        fund::<T>(&admin, 10_000_000);
        let supply = TotalSupply::<T>::get();

        #[extrinsic_call]
        _(RawOrigin::Signed(admin.clone()), 1_000_000);

        assert_eq!(Balances::<T>::get(&admin), 9_000_000);
        assert_eq!(TotalSupply::<T>::get(), supply - 1_000_000);
    }

    #[benchmark]
    fn set_administrator() {
        let admin: T::AccountId = whitelisted_caller();
        let new: T::AccountId = account("new", 0, SEED);
        Administrator::<T>::put(&admin);

        #[extrinsic_call]
        _(RawOrigin::Signed(admin), new.clone());

        assert_eq!(Administrator::<T>::get(), Some(new));
    }

    #[benchmark]
    fn set_freezer() {
        let admin: T::AccountId = whitelisted_caller();
        let new: T::AccountId = account("freezer", 0, SEED);
        Administrator::<T>::put(&admin);

        #[extrinsic_call]
        _(RawOrigin::Signed(admin), new.clone());

        assert_eq!(Freezer::<T>::get(), Some(new));
    }

    #[benchmark]
    fn unset_freezer() {
        let admin: T::AccountId = whitelisted_caller();
        Administrator::<T>::put(&admin);
        Freezer::<T>::put(account::<T::AccountId>("freezer", 0, SEED));

        #[extrinsic_call]
        _(RawOrigin::Signed(admin));

        assert_eq!(Freezer::<T>::get(), Some(SmakToken::<T>::ledger_account()));
    }

    impl_benchmark_test_suite!(SmakToken, crate::mock::new_test_ext(), crate::mock::Test);
}
