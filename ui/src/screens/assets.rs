//=============================================================================
// File: src/screens/assets.rs
//=============================================================================
use dioxus::prelude::*;
use dioxus_logger::tracing::debug;
use dioxus_logger::tracing::info;
use registry::asset_option::derive_asset_options;
use registry::asset_option::MAX_ASSET_OPTIONS;
use registry::AssetListItem;
use registry::AssetOption;

use crate::app_state::AppState;
use crate::app_state_mut::AppStateMut;
use crate::components::asset_list::AssetList;
use crate::components::combo_box::ComboBox;
use crate::components::combo_box::SearchKey;
use crate::components::combo_box::SelectOption;
use crate::components::controls::Button;
use crate::components::modal::Modal;
use crate::hooks::use_modal::use_modal;
use crate::hooks::use_modal::ModalOptions;

impl SelectOption for AssetOption {
    fn label(&self) -> &str {
        &self.label
    }

    fn value(&self) -> &str {
        &self.value
    }

    fn symbol(&self) -> &str {
        &self.asset().symbol
    }

    fn icon_url(&self) -> Option<&str> {
        self.icon_url.as_deref()
    }
}

/// The asset list together with the add-asset and deposit dialogs.
#[component]
pub fn AssetsScreen() -> Element {
    let app_state = use_context::<AppState>();
    let mut store = use_context::<AppStateMut>();

    let mut add_asset_modal = use_modal(ModalOptions::default());
    let mut deposit_modal = use_modal(ModalOptions::default());
    let mut deposit_asset = use_signal(|| None::<AssetListItem>);
    let mut selected_option = use_signal(|| None::<AssetOption>);

    let search_key = SearchKey::from(app_state.prefs.search_field());

    // Candidates exclude what the list already holds.
    let asset_options = use_memo(move || {
        let chain = store.selected_chain();
        store.with_asset_list(|list| {
            derive_asset_options(
                app_state.chain_assets(&chain.chain_name),
                list,
                MAX_ASSET_OPTIONS,
            )
        })
    });

    let on_select_asset = move |option: AssetOption| {
        debug!("selected asset option {}", option.label);
        selected_option.set(Some(option));
    };

    let handle_add_asset = move |_: MouseEvent| {
        let Some(option) = selected_option.take() else {
            return;
        };
        store.add_asset_list(option.into_asset());
        add_asset_modal.close();
    };

    let on_deposit = move |item: AssetListItem| {
        deposit_asset.set(Some(item));
        deposit_modal.open();
    };

    let on_withdraw = move |item: AssetListItem| {
        info!("Withdraw {:?}", item);
    };

    let deposit_symbol = deposit_asset
        .read()
        .as_ref()
        .map(|item| item.symbol().to_string())
        .unwrap_or_default();
    let items = store.with_asset_list(|list| list.items().to_vec());
    let nothing_selected = selected_option.read().is_none();

    rsx! {
        div {
            class: "extra",
            Button {
                on_click: move |_| {
                    selected_option.set(None);
                    add_asset_modal.open();
                },
                "Add Asset"
            }
            Modal {
                handle: add_asset_modal,
                div {
                    class: "search-box",
                    div {
                        ComboBox::<AssetOption> {
                            search_key,
                            options: asset_options(),
                            on_select: on_select_asset,
                        }
                    }
                    Button {
                        on_click: handle_add_asset,
                        disabled: nothing_selected,
                        "Confirm"
                    }
                }
            }
            Modal {
                handle: deposit_modal,
                div {
                    style: "width: 100%; text-align: center;",
                    "Deposit Modal for {deposit_symbol}."
                }
            }
        }
        AssetList {
            list: items,
            on_deposit,
            on_withdraw,
        }
    }
}
