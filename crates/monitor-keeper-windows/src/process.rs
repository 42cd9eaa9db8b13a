use windows::Win32::Foundation::CloseHandle;
use windows::Win32::System::Threading::{
    OpenProcess, PROCESS_QUERY_LIMITED_INFORMATION, PROCESS_TERMINATE, TerminateProcess,
};

/// Checks whether a process with the given PID is still alive.
///
/// Used to tell a stale PID file from a daemon that stopped answering
/// on its pipe.
pub fn is_process_alive(pid: u32) -> bool {
    // SAFETY: OpenProcess with the least-privilege query right only
    // confirms the process exists.
    let result = unsafe { OpenProcess(PROCESS_QUERY_LIMITED_INFORMATION, false, pid) };

    match result {
        Ok(handle) => {
            // SAFETY: opened above and used for nothing else.
            unsafe {
                let _ = CloseHandle(handle);
            }
            true
        }
        Err(_) => false,
    }
}

/// Forcibly terminates a process. Returns whether it was killed.
pub fn kill_process(pid: u32) -> bool {
    // SAFETY: the handle is opened with terminate rights only and
    // closed before returning.
    unsafe {
        let Ok(handle) = OpenProcess(PROCESS_TERMINATE, false, pid) else {
            return false;
        };
        let killed = TerminateProcess(handle, 1).is_ok();
        let _ = CloseHandle(handle);
        killed
    }
}
