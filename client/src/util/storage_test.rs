use saves::{ReconcilerConfig, SavedReconciler, Session};

use super::*;

#[cfg(not(feature = "hydrate"))]
#[test]
fn server_side_storage_is_unavailable() {
    assert!(matches!(LocalStorageStore.read("k"), Err(StoreError::Unavailable)));
    assert!(matches!(LocalStorageStore.write("k", "[]"), Err(StoreError::Unavailable)));
    assert_eq!(load_token(), None);
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn reconciler_loads_empty_without_storage() {
    let reconciler = SavedReconciler::load(&LocalStorageStore, &Session::Anonymous, ReconcilerConfig::default());
    assert!(reconciler.saved().is_empty());
}
