use super::*;

#[test]
fn with_mut_updates_live_signal() {
    Owner::new().with(|| {
        let signal = RwSignal::new(1_u32);
        let cell = SignalCell::new(signal);
        let out = cell.with_mut(|v| {
            *v += 1;
            *v
        });
        assert_eq!(out, Some(2));
        assert_eq!(signal.get_untracked(), 2);
    });
}

#[test]
fn with_mut_on_disposed_signal_is_none() {
    Owner::new().with(|| {
        let signal = RwSignal::new(1_u32);
        let cell = SignalCell::new(signal);
        signal.dispose();
        assert_eq!(cell.with_mut(|v| *v), None);
    });
}
