//! Storage migrations for pallet-smak-token.
//!
//! Each migration checks the on-chain storage version first, so running it
//! twice is harmless. Wire them into the runtime's `Executive`:
//!
//! ```ignore
//! pub type Executive = frame_executive::Executive<
//!     Runtime,
//!     Block,
//!     frame_system::ChainContext<Runtime>,
//!     Runtime,
//!     AllPalletsWithSystem,
//!     pallet_smak_token::migrations::v1::MigrateToV1<Runtime>,
//! >;
//! ```

use frame_support::{pallet_prelude::*, traits::OnRuntimeUpgrade};
use sp_std::marker::PhantomData;

use crate::{Administrator, Config, Freezer, Pallet, LOG_TARGET};

/// Version 1 introduced the freezer role.
///
/// Chains launched at v0 only know an administrator. Before the freezer role
/// existed the administrator did the freezing, so it inherits the role.
pub mod v1 {
    use super::*;

    pub struct MigrateToV1<T>(PhantomData<T>);

    impl<T: Config> OnRuntimeUpgrade for MigrateToV1<T> {
        fn on_runtime_upgrade() -> Weight {
            let on_chain_version = Pallet::<T>::on_chain_storage_version();

            if on_chain_version < 1 {
                let mut writes = 1;
                if !Freezer::<T>::exists() {
                    if let Some(admin) = Administrator::<T>::get() {
                        log::info!(target: LOG_TARGET, "Freezer role backfilled with {admin:?}");
                        Freezer::<T>::put(admin);
                        writes += 1;
                    }
                }

                StorageVersion::new(1).put::<Pallet<T>>();
                log::info!(target: LOG_TARGET, "Migrated storage from {on_chain_version:?} to v1");

                // Version, freezer and administrator reads
                T::DbWeight::get().reads_writes(3, writes)
            } else {
                log::info!(
                    target: LOG_TARGET,
                    "Storage already at {on_chain_version:?}, skipping v1 migration"
                );
                T::DbWeight::get().reads(1)
            }
        }

        #[cfg(feature = "try-runtime")]
        fn pre_upgrade() -> Result<sp_std::vec::Vec<u8>, sp_runtime::TryRuntimeError> {
            let on_chain_version = Pallet::<T>::on_chain_storage_version();
            let has_administrator = Administrator::<T>::exists();
            Ok((on_chain_version, has_administrator).encode())
        }

        #[cfg(feature = "try-runtime")]
        fn post_upgrade(state: sp_std::vec::Vec<u8>) -> Result<(), sp_runtime::TryRuntimeError> {
            let (pre_version, had_administrator): (StorageVersion, bool) =
                Decode::decode(&mut &state[..])
                    .map_err(|_| sp_runtime::TryRuntimeError::Other("Failed to decode pre-state"))?;

            let post_version = Pallet::<T>::on_chain_storage_version();
            if pre_version < 1 {
                ensure!(
                    post_version >= 1,
                    sp_runtime::TryRuntimeError::Other("Migration to v1 did not complete")
                );
                ensure!(
                    !had_administrator || Freezer::<T>::exists(),
                    sp_runtime::TryRuntimeError::Other("Freezer role was not backfilled")
                );
            }

            Ok(())
        }
    }
}
