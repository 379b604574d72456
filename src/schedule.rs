//! Fire-and-forget delayed actions on the tokio runtime.

use std::time::Duration;

use tokio::runtime::Handle;

/// Runs `action` once `delay` has elapsed without blocking the caller.
///
/// Outside a runtime there is no timer to wait on: the action is dropped and
/// the state it would have changed stays as it is. Returns whether the action
/// was scheduled.
pub(crate) fn after(delay: Duration, action: impl FnOnce() + Send + 'static) -> bool {
    match Handle::try_current() {
        Ok(handle) => {
            drop(handle.spawn(async move {
                tokio::time::sleep(delay).await;
                action();
            }));
            true
        }
        Err(error) => {
            tracing::warn!("no runtime for delayed action after {delay:?}, skipping it: {error}");
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::time::Duration;

    use super::after;

    #[tokio::test(start_paused = true)]
    async fn runs_after_delay() {
        let fired = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&fired);

        let scheduled = after(Duration::from_millis(200), move || {
            flag.store(true, Ordering::SeqCst);
        });
        assert!(scheduled);

        tokio::time::sleep(Duration::from_millis(199)).await;
        assert!(!fired.load(Ordering::SeqCst), "fired too early");

        tokio::time::sleep(Duration::from_millis(2)).await;
        assert!(fired.load(Ordering::SeqCst), "did not fire");
    }

    #[test]
    fn skips_without_runtime() {
        let fired = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&fired);

        let scheduled = after(Duration::from_secs(5), move || {
            flag.store(true, Ordering::SeqCst);
        });

        assert!(!scheduled);
        assert!(!fired.load(Ordering::SeqCst), "action must not collapse to zero delay");
    }
}
