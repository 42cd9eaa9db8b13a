//! In-memory window system used by the engine tests.

use std::cell::{Cell, RefCell};
use std::collections::HashSet;

use crate::window::{WS_EX_NOACTIVATE, WS_OVERLAPPEDWINDOW};
use crate::{Placement, WindowInfo, WindowResult, WindowSystem};

const WS_POPUP: u32 = 0x8000_0000;

#[derive(Debug, Clone)]
pub(crate) struct FakeWindow {
    info: WindowInfo,
    class: String,
    placement: Placement,
}

impl FakeWindow {
    /// A visible, framed, top-level application window.
    pub(crate) fn app(hwnd: usize, class: &str, placement: Placement) -> Self {
        Self {
            info: WindowInfo {
                hwnd,
                visible: true,
                has_parent: false,
                style: WS_OVERLAPPEDWINDOW,
                ex_style: 0,
            },
            class: class.into(),
            placement,
        }
    }

    /// A visible, frameless popup (not trackable).
    pub(crate) fn popup(hwnd: usize, class: &str, placement: Placement) -> Self {
        let mut window = Self::app(hwnd, class, placement);
        window.info.style = WS_POPUP;
        window
    }

    pub(crate) fn hidden(mut self) -> Self {
        self.info.visible = false;
        self
    }

    pub(crate) fn with_parent(mut self) -> Self {
        self.info.has_parent = true;
        self
    }

    pub(crate) fn no_activate(mut self) -> Self {
        self.info.ex_style |= WS_EX_NOACTIVATE;
        self
    }
}

#[derive(Debug, Default)]
pub(crate) struct FakeWindowSystem {
    monitors: Cell<usize>,
    windows: RefCell<Vec<FakeWindow>>,
    failing: RefCell<HashSet<usize>>,
    set_calls: RefCell<Vec<(usize, Placement)>>,
    enumerations: Cell<usize>,
}

impl FakeWindowSystem {
    pub(crate) fn new(monitors: usize) -> Self {
        let system = Self::default();
        system.monitors.set(monitors);
        system
    }

    pub(crate) fn add(&self, window: FakeWindow) {
        self.windows.borrow_mut().push(window);
    }

    /// Destroys the window: it is no longer enumerated and its handle
    /// is no longer valid.
    pub(crate) fn remove(&self, hwnd: usize) {
        self.windows.borrow_mut().retain(|w| w.info.hwnd != hwnd);
    }

    pub(crate) fn set_monitors(&self, monitors: usize) {
        self.monitors.set(monitors);
    }

    /// Moves the window as the OS or the user would.
    pub(crate) fn set_placement_of(&self, hwnd: usize, placement: Placement) {
        let _ = self.find_mut(hwnd, |w| w.placement = placement);
    }

    /// Replaces the window with an unrelated one reusing the handle.
    pub(crate) fn set_class(&self, hwnd: usize, class: &str) {
        let _ = self.find_mut(hwnd, |w| w.class = class.into());
    }

    /// Makes placement queries for `hwnd` fail from now on.
    pub(crate) fn fail_placement(&self, hwnd: usize) {
        self.failing.borrow_mut().insert(hwnd);
    }

    pub(crate) fn placement_of(&self, hwnd: usize) -> Option<Placement> {
        self.windows
            .borrow()
            .iter()
            .find(|w| w.info.hwnd == hwnd)
            .map(|w| w.placement)
    }

    /// Every `set_placement` call so far, in order.
    pub(crate) fn set_calls(&self) -> Vec<(usize, Placement)> {
        self.set_calls.borrow().clone()
    }

    pub(crate) fn clear_calls(&self) {
        self.set_calls.borrow_mut().clear();
    }

    /// Number of enumerations, i.e. capture passes that reached the
    /// window system.
    pub(crate) fn enumerations(&self) -> usize {
        self.enumerations.get()
    }

    fn find_mut(&self, hwnd: usize, f: impl FnOnce(&mut FakeWindow)) -> Option<()> {
        let mut windows = self.windows.borrow_mut();
        let window = windows.iter_mut().find(|w| w.info.hwnd == hwnd)?;
        f(window);
        Some(())
    }
}

impl WindowSystem for FakeWindowSystem {
    fn monitor_count(&self) -> usize {
        self.monitors.get()
    }

    fn top_level_windows(&self) -> Vec<WindowInfo> {
        self.enumerations.set(self.enumerations.get() + 1);
        self.windows.borrow().iter().map(|w| w.info).collect()
    }

    fn is_window(&self, hwnd: usize) -> bool {
        self.windows.borrow().iter().any(|w| w.info.hwnd == hwnd)
    }

    fn class_name(&self, hwnd: usize) -> WindowResult<String> {
        self.windows
            .borrow()
            .iter()
            .find(|w| w.info.hwnd == hwnd)
            .map(|w| w.class.clone())
            .ok_or_else(|| "invalid window handle".into())
    }

    fn placement(&self, hwnd: usize) -> WindowResult<Placement> {
        if self.failing.borrow().contains(&hwnd) {
            return Err("GetWindowPlacement failed".into());
        }
        self.placement_of(hwnd)
            .ok_or_else(|| "invalid window handle".into())
    }

    fn set_placement(&self, hwnd: usize, placement: &Placement) -> WindowResult<()> {
        self.set_calls.borrow_mut().push((hwnd, *placement));
        self.find_mut(hwnd, |w| w.placement = *placement)
            .ok_or_else(|| "invalid window handle".into())
    }
}
