//! Render targets that host content owned by components elsewhere in the tree.
#![allow(non_snake_case)]

use dioxus::prelude::*;

/// Identifies the content one component mounts into a [`PortalTarget`].
/// Keys are only unique within the target that handed them out.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PortalKey(u64);

#[derive(Clone)]
struct PortalSlot {
    key: PortalKey,
    content: Element,
}

/// A named insertion point. Content mounted here is rendered by the
/// [`PortalHost`] of this target, not at the mounting component's position.
///
/// Slots are rendered in the order they were first mounted.
#[derive(Clone, Copy, PartialEq)]
pub struct PortalTarget {
    name: &'static str,
    slots: Signal<Vec<PortalSlot>>,
    next_key: CopyValue<u64>,
}

impl PortalTarget {
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Hands out a key no other component mounting here has.
    pub fn allocate_key(&mut self) -> PortalKey {
        let mut next_key = self.next_key.write();
        *next_key += 1;
        PortalKey(*next_key)
    }

    /// Mounts `content` under `key`, replacing what `key` mounted before.
    pub fn mount(&mut self, key: PortalKey, content: Element) {
        let mut slots = self.slots.write();
        match slots.iter_mut().find(|slot| slot.key == key) {
            Some(slot) => slot.content = content,
            None => slots.push(PortalSlot { key, content }),
        }
    }

    /// Removes whatever `key` mounted. Does nothing if it mounted nothing, or if
    /// the target itself is already gone.
    pub fn unmount(&mut self, key: PortalKey) {
        let mounted = self
            .slots
            .try_peek()
            .map(|slots| slots.iter().any(|slot| slot.key == key))
            .unwrap_or(false);
        if mounted {
            if let Ok(mut slots) = self.slots.try_write() {
                slots.retain(|slot| slot.key != key);
            }
        }
    }
}

impl std::fmt::Debug for PortalTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("PortalTarget").field(&self.name()).finish()
    }
}

/// Creates a render target owned by the calling component.
pub fn use_portal_target(name: &'static str) -> PortalTarget {
    let slots = use_signal(Vec::new);
    let next_key = use_hook(|| CopyValue::new(0));
    PortalTarget {
        name,
        slots,
        next_key,
    }
}

/// Renders the content currently mounted into `target`.
#[component]
pub fn PortalHost(target: PortalTarget) -> Element {
    let slots = target.slots.read();
    rsx! {
        div {
            id: "{target.name}",
            class: "portal-target",
            for slot in slots.iter() {
                div {
                    key: "{slot.key.0}",
                    class: "portal-slot",
                    {slot.content.clone()}
                }
            }
        }
    }
}
