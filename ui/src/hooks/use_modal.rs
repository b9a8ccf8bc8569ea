//=============================================================================
// File: src/hooks/use_modal.rs
//=============================================================================
use dioxus::prelude::*;

use crate::components::portal::PortalTarget;

/// The two states of a modal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, strum::EnumIs)]
pub enum ModalLifecycle {
    #[default]
    Closed,
    Open,
}

impl ModalLifecycle {
    pub fn initial(default_open: bool) -> Self {
        if default_open {
            Self::Open
        } else {
            Self::Closed
        }
    }

    /// Moves to `Open`. Returns whether the state changed.
    pub fn open(&mut self) -> bool {
        let changed = self.is_closed();
        *self = Self::Open;
        changed
    }

    /// Moves to `Closed`. Returns whether the state changed.
    pub fn close(&mut self) -> bool {
        let changed = self.is_open();
        *self = Self::Closed;
        changed
    }
}

/// Static configuration of a modal, captured once when the hook is first run.
#[derive(Clone, PartialEq, Debug)]
pub struct ModalOptions {
    pub title: Option<String>,
    pub description: Option<String>,
    pub show_close: bool,
    pub default_open: bool,
    /// Where the dialog is rendered. `None` uses the target provided by the
    /// nearest ancestor.
    pub target: Option<PortalTarget>,
}

impl Default for ModalOptions {
    fn default() -> Self {
        Self {
            title: None,
            description: None,
            show_close: true,
            default_open: false,
            target: None,
        }
    }
}

impl ModalOptions {
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn show_close(mut self, show_close: bool) -> Self {
        self.show_close = show_close;
        self
    }

    pub fn default_open(mut self, default_open: bool) -> Self {
        self.default_open = default_open;
        self
    }

    pub fn target(mut self, target: PortalTarget) -> Self {
        self.target = Some(target);
        self
    }
}

/// Open/close handles of one modal instance, rendered with
/// [`Modal`](crate::components::modal::Modal).
#[derive(Clone, Copy, PartialEq)]
pub struct ModalHandle {
    lifecycle: Signal<ModalLifecycle>,
    options: Signal<ModalOptions>,
}

impl ModalHandle {
    pub fn open(&mut self) {
        let mut lifecycle = *self.lifecycle.peek();
        if lifecycle.open() {
            self.lifecycle.set(lifecycle);
        }
    }

    pub fn close(&mut self) {
        let mut lifecycle = *self.lifecycle.peek();
        if lifecycle.close() {
            self.lifecycle.set(lifecycle);
        }
    }

    /// Reads the open state, subscribing the caller to changes.
    pub fn is_open(&self) -> bool {
        self.lifecycle.read().is_open()
    }

    pub fn options(&self) -> ModalOptions {
        self.options.peek().clone()
    }
}

/// Creates a modal owned by the calling component. Every call site gets its
/// own state; `options` is only read on the first render.
pub fn use_modal(options: ModalOptions) -> ModalHandle {
    let lifecycle = use_signal(|| ModalLifecycle::initial(options.default_open));
    let options = use_signal(move || options);
    ModalHandle { lifecycle, options }
}
