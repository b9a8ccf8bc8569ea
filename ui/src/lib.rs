// The client-side Dioxus application logic.

use dioxus::prelude::*;
use dioxus_logger::tracing::error;
use dioxus_logger::tracing::info;

mod app_state;
mod app_state_mut;
pub mod compat;
mod components;
pub mod hooks;
mod screens;
#[cfg(test)]
mod test_util;

use app_state::AppState;
use app_state_mut::AppStateMut;
use components::portal::use_portal_target;
use components::portal::PortalHost;
use registry::prefs::user_prefs::UserPrefs;
use registry::AssetList;
use screens::assets::AssetsScreen;

/// Name of the render target that hosts every modal dialog.
const MODAL_ROOT: &str = "modal-root";

const NAV_LINKS: [&str; 3] = ["Products", "Blog", "About"];

/// The site header with its static navigation.
#[component]
fn Header() -> Element {
    rsx! {
        header {
            class: "app-header",
            div {
                class: "logo",
                span { class: "img" }
                "Site Logo"
            }
            nav {
                class: "nav",
                for link in NAV_LINKS {
                    a { class: "link", "{link}" }
                }
            }
        }
    }
}

//=============================================================================
// MAIN APPLICATION COMPONENT (Client-side)
//=============================================================================

#[allow(non_snake_case)]
pub fn App() -> Element {
    let app_css = r#"
    /* --- RESET --- */
    * { box-sizing: border-box; }

    html, body {
        margin: 0;
        padding: 0;
        font-family: system-ui, sans-serif;
        color: #2c3137;
    }

    .app { display: block; min-height: 100vh; width: 100%; }

    /* --- HEADER --- */
    .app-header {
        display: flex;
        height: 40px;
        line-height: 40px;
        padding: 0 20px;
        border-bottom: 1px solid #d9d9d9;
    }
    .app-header .logo { display: flex; align-items: center; padding: 8px 0; }
    .app-header .logo .img {
        display: inline-block;
        width: 24px;
        height: 24px;
        margin-right: 10px;
        border-radius: 6px;
        background: linear-gradient(135deg, #41d1ff, #bd34fe);
    }
    .app-header .nav { display: inline-block; margin: 0 0 0 10px; padding: 0; }
    .app-header .nav .link { display: inline-block; font-weight: bold; margin-right: 10px; cursor: pointer; }

    .app-main { padding: 10px 20px; }
    .extra { margin-bottom: 20px; }

    /* --- BUTTONS --- */
    .btn {
        display: flex;
        align-items: center;
        height: 32px;
        border: none;
        border-radius: 6px;
        padding: 0 12px;
        line-height: 1.2;
        font-weight: 600;
        cursor: pointer;
    }
    .btn:hover { opacity: .8; }
    .btn:disabled { opacity: .5; cursor: default; }
    .btn-primary { font-size: 16px; color: #ffffff; background-color: #2539c9; }
    .btn-secondary { font-size: 14px; color: #697584; background-color: #f5f7fb; }

    .search-box { width: 100%; display: flex; align-items: center; justify-content: space-between; gap: 12px; }

    /* --- MODAL --- */
    .modal-wrapper {
        position: fixed;
        top: 0; left: 0; right: 0; bottom: 0;
        display: flex;
        justify-content: center;
        align-items: center;
        z-index: 1000;
    }
    .modal-overlay {
        position: fixed;
        top: 0; left: 0; right: 0; bottom: 0;
        background-color: rgba(0, 0, 0, 0.5);
    }
    .modal-content {
        position: relative;
        min-width: 360px;
        padding: 30px 20px;
        border-radius: 10px;
        background-color: #ffffff;
    }
    .modal-content .content { display: flex; }
    .modal-title { margin: 0 0 8px 0; }
    .modal-description { margin: 0 0 16px 0; color: #697584; }
    .modal-close {
        position: absolute;
        top: 0; right: 0;
        height: 24px; width: 24px;
        line-height: 24px;
        text-align: center;
        color: #697584;
        cursor: pointer;
    }
    .modal-close::after { content: 'x'; display: block; font-size: 16px; }

    /* --- COMBO BOX --- */
    .combo-box {
        position: relative;
        display: block;
        min-width: 240px;
        --height: 48px;
        --main-color: #2c3137;
        --sub-color: #757575;
    }
    .combo-input-wrapper { position: relative; }
    .combo-input {
        appearance: none;
        display: block;
        width: 100%;
        height: var(--height);
        line-height: var(--height);
        border: 1px solid #d1d6dd;
        border-radius: 6px;
        padding: 0 20px 0 10px;
        font-size: 16px;
        color: var(--main-color);
        outline: none;
    }
    .combo-input:focus, .combo-input:hover { border-color: #2c3137; }
    .combo-input::placeholder { color: var(--sub-color); }
    .combo-arrow {
        position: absolute;
        top: 0; right: 0;
        height: var(--height);
        width: 20px;
        cursor: pointer;
    }
    .combo-arrow::after {
        content: '';
        display: block;
        position: absolute;
        left: 2px; top: 16px;
        width: 6px; height: 6px;
        border-width: 2px;
        border-style: solid;
        border-color: transparent transparent #2c3137 #2c3137;
        transform: rotate(-45deg);
        transition: all 0.3s;
    }
    .combo-arrow.open::after { top: 20px; transform: rotate(135deg); }
    .combo-list {
        position: absolute;
        left: 0;
        top: var(--height);
        overflow-y: auto;
        max-height: 304px;
        width: 100%;
        border-radius: 6px;
        background-color: #1d2024;
        z-index: 100;
        scrollbar-width: thin;
        scrollbar-color: #697584 transparent;
    }
    .combo-option {
        display: block;
        padding: 8px 12px;
        border-radius: 4px;
        background-color: #1d2024;
        color: #eef2f8;
        cursor: pointer;
        user-select: none;
    }
    .combo-option:hover { background-color: #25292e; }
    .combo-option .item { display: flex; align-items: center; gap: 8px; }
    .combo-option .logo { display: inline-flex; justify-content: center; align-items: center; width: 32px; height: 32px; }
    .combo-option .logo .img { max-width: 100%; }
    .combo-option .label { font-size: 18px; color: #eef2f8; }
    .combo-no-result {
        height: var(--height);
        line-height: var(--height);
        color: #eef2f8;
        text-align: center;
        user-select: none;
        cursor: text;
    }

    /* --- ASSET LIST --- */
    .asset-list { display: block; margin: 0; --font-size: 14px; --main-color: #2c3137; --sub-color: #697584; }
    .list-row { display: flex; align-items: center; }
    .list-row .col-logo { width: 80px; }
    .list-row .col-asset { display: flex; flex-direction: column; gap: 4px; width: 350px; font-size: var(--font-size); }
    .list-row .col-balance { display: flex; flex-direction: column; gap: 4px; width: 175px; font-size: var(--font-size); }
    .list-row .col-action { flex: 1; display: flex; gap: 10px; }
    .list-body { display: flex; flex-direction: column; gap: 24px; margin-top: 32px; }
    .col-title { font-size: var(--font-size); color: var(--sub-color); }
    .asset-item .logo { display: block; width: 40px; height: 40px; }
    .asset-item .bold { font-weight: 600; color: var(--main-color); }
    .asset-item .sub { color: var(--sub-color); }
"#;

    rsx! {
        document::Meta {
            name: "viewport",
            content: "width=device-width, initial-scale=1.0",
        }
        style {
            "{app_css}"
        }
        AppBody {}
    }
}

/// Loads the catalog and the configured chain. A failure here is a
/// misconfiguration and replaces the whole app with the error.
#[component]
fn AppBody() -> Element {
    let startup = use_hook(|| {
        let prefs = UserPrefs::default();
        info!("prefs: {:#?}", prefs);
        AppState::load(prefs).map_err(|e| {
            error!("startup failed: {}", e);
            e.to_string()
        })
    });

    match startup {
        Ok(app_state) => rsx! {
            LoadedApp {
                app_state,
            }
        },
        Err(e) => rsx! {
            p {
                "An error occurred: {e}"
            }
        },
    }
}

/// This component holds the main app logic and only runs when data is ready.
#[component]
fn LoadedApp(app_state: AppState) -> Element {
    // Provide the stable, non-reactive AppState.
    use_context_provider(|| app_state.clone());

    let selected_chain = use_signal(|| app_state.chain.clone());
    let asset_list = use_signal(|| {
        AssetList::sample(
            app_state.chain_assets(&app_state.chain.chain_name),
            app_state.prefs.initial_asset_count(),
            &mut rand::thread_rng(),
        )
    });
    use_context_provider(|| AppStateMut::new(selected_chain, asset_list));

    let modal_root = use_portal_target(MODAL_ROOT);
    use_context_provider(|| modal_root);

    rsx! {
        div {
            class: "app",
            Header {}
            main {
                class: "app-main",
                AssetsScreen {}
            }
            PortalHost {
                target: modal_root,
            }
        }
    }
}
