/// Marks a code path which the tree's structural invariants rule out.
///
/// # Safety
/// Reaching this in a release build is undefined behavior. Debug builds panic instead, so that tree corruption is caught by tests.
#[inline]
#[cfg_attr(debug_assertions, track_caller)]
pub(crate) unsafe fn unreachable_debugchecked(msg: &str) -> ! {
    #[cfg(debug_assertions)]
    {
        unreachable!("{}", msg)
    }
    #[cfg(not(debug_assertions))]
    {
        let _ = msg;
        core::hint::unreachable_unchecked()
    }
}
