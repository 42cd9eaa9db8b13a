use windows::Win32::UI::WindowsAndMessaging::{GetSystemMetrics, SM_CMONITORS};

/// Returns the number of display monitors on the desktop.
///
/// Counts only monitors that are part of the desktop, so a mirrored
/// pair counts as one. A failed query reads as zero, which the engine
/// treats as out of range.
pub fn monitor_count() -> usize {
    // SAFETY: GetSystemMetrics has no preconditions.
    let count = unsafe { GetSystemMetrics(SM_CMONITORS) };
    usize::try_from(count).unwrap_or(0)
}
