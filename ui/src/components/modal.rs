#![allow(non_snake_case)]

use dioxus::prelude::*;

use crate::components::portal::PortalTarget;
use crate::hooks::use_modal::ModalHandle;

#[derive(Props, PartialEq, Clone)]
pub struct ModalProps {
    handle: ModalHandle,
    children: Element,
}

/// Renders the dialog of `handle` while it is open.
///
/// The dialog (backdrop plus centered content) is mounted into the modal's
/// [`PortalTarget`], falling back to the nearest provided one. Without any
/// target it renders in place. While closed nothing is rendered and the
/// children are not mounted.
pub fn Modal(props: ModalProps) -> Element {
    let provided_target = try_use_context::<PortalTarget>();

    let mut handle = props.handle;
    let options = handle.options();
    let portal = use_hook(|| {
        options
            .target
            .or(provided_target)
            .map(|mut target| (target, target.allocate_key()))
    });

    use_drop(move || {
        if let Some((mut target, key)) = portal {
            target.unmount(key);
        }
    });

    if !handle.is_open() {
        if let Some((mut target, key)) = portal {
            target.unmount(key);
        }
        return rsx! {};
    }

    let dialog = rsx! {
        div {
            class: "modal-wrapper",
            div { class: "modal-overlay" }
            div {
                class: "modal-content",
                role: "dialog",
                "aria-modal": "true",
                tabindex: "-1",
                if options.show_close {
                    div {
                        class: "modal-close",
                        "aria-label": "Close",
                        onclick: move |_| handle.close(),
                    }
                }
                if let Some(title) = &options.title {
                    h3 { class: "modal-title", "{title}" }
                }
                if let Some(description) = &options.description {
                    p { class: "modal-description", "{description}" }
                }
                div { class: "content", {props.children} }
            }
        }
    };

    match portal {
        Some((mut target, key)) => {
            target.mount(key, dialog);
            rsx! {}
        }
        None => dialog,
    }
}
