//! Weights for pallet-smak-token.
//!
//! Hand-estimated from the storage accesses of each call. Regenerate with
//! `frame-omni-bencher` against the `runtime-benchmarks` build once a runtime
//! wires the pallet in.

#![allow(unused_parens)]
#![allow(unused_imports)]

use frame_support::{
    traits::Get,
    weights::{constants::RocksDbWeight, Weight},
};
use sp_std::marker::PhantomData;

pub trait WeightInfo {
    fn transfer() -> Weight;
    fn approve() -> Weight;
    fn transfer_and_freeze() -> Weight;
    fn burn() -> Weight;
    fn set_administrator() -> Weight;
    fn set_freezer() -> Weight;
    fn unset_freezer() -> Weight;
}

/// Weights for pallet-smak-token using the runtime's database weights.
pub struct SubstrateWeight<T>(PhantomData<T>);

impl<T: frame_system::Config> WeightInfo for SubstrateWeight<T> {
    /// Storage: `Allowances` (r:1 w:1), `FrozenAccounts` (r:1 w:0), `Balances` (r:2 w:2)
    fn transfer() -> Weight {
        Weight::from_parts(25_000_000, 3_600)
            .saturating_add(T::DbWeight::get().reads_writes(4, 3))
    }
    /// Storage: `Allowances` (r:1 w:1)
    fn approve() -> Weight {
        Weight::from_parts(15_000_000, 3_600).saturating_add(T::DbWeight::get().reads_writes(1, 1))
    }
    /// Storage: `Freezer` (r:1 w:0), `Administrator` (r:1 w:0), `Balances` (r:2 w:2),
    /// `FrozenAccounts` (r:0 w:1)
    fn transfer_and_freeze() -> Weight {
        Weight::from_parts(30_000_000, 3_600)
            .saturating_add(T::DbWeight::get().reads_writes(4, 3))
    }
    /// Storage: `Administrator` (r:1 w:0), `Balances` (r:1 w:1), `TotalSupply` (r:1 w:1)
    fn burn() -> Weight {
        Weight::from_parts(20_000_000, 3_600).saturating_add(T::DbWeight::get().reads_writes(3, 2))
    }
    /// Storage: `Administrator` (r:2 w:1)
    fn set_administrator() -> Weight {
        Weight::from_parts(12_000_000, 1_500).saturating_add(T::DbWeight::get().reads_writes(2, 1))
    }
    /// Storage: `Administrator` (r:1 w:0), `Freezer` (r:1 w:1)
    fn set_freezer() -> Weight {
        Weight::from_parts(12_000_000, 1_500).saturating_add(T::DbWeight::get().reads_writes(2, 1))
    }
    /// Storage: `Administrator` (r:1 w:0), `Freezer` (r:1 w:1)
    fn unset_freezer() -> Weight {
        Weight::from_parts(12_000_000, 1_500).saturating_add(T::DbWeight::get().reads_writes(2, 1))
    }
}

// For backwards compatibility and tests
impl WeightInfo for () {
    fn transfer() -> Weight {
        Weight::from_parts(25_000_000, 3_600).saturating_add(RocksDbWeight::get().reads_writes(4, 3))
    }
    fn approve() -> Weight {
        Weight::from_parts(15_000_000, 3_600).saturating_add(RocksDbWeight::get().reads_writes(1, 1))
    }
    fn transfer_and_freeze() -> Weight {
        Weight::from_parts(30_000_000, 3_600).saturating_add(RocksDbWeight::get().reads_writes(4, 3))
    }
    fn burn() -> Weight {
        Weight::from_parts(20_000_000, 3_600).saturating_add(RocksDbWeight::get().reads_writes(3, 2))
    }
    fn set_administrator() -> Weight {
        Weight::from_parts(12_000_000, 1_500).saturating_add(RocksDbWeight::get().reads_writes(2, 1))
    }
    fn set_freezer() -> Weight {
        Weight::from_parts(12_000_000, 1_500).saturating_add(RocksDbWeight::get().reads_writes(2, 1))
    }
    fn unset_freezer() -> Weight {
        Weight::from_parts(12_000_000, 1_500).saturating_add(RocksDbWeight::get().reads_writes(2, 1))
    }
}
