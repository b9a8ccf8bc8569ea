// File: src/components/asset_list.rs
use dioxus::prelude::*;
use registry::AssetListItem;

use crate::components::controls::Button;
use crate::components::controls::ButtonType;

/// One row of the asset table.
#[component]
fn AssetRow(
    item: AssetListItem,
    on_deposit: EventHandler<AssetListItem>,
    on_withdraw: EventHandler<AssetListItem>,
) -> Element {
    let deposit_item = item.clone();
    let withdraw_item = item.clone();

    rsx! {
        div {
            class: "list-row asset-item",
            div {
                class: "col-logo",
                img { class: "logo", src: "{item.img_src}", alt: "{item.symbol()}" }
            }
            div {
                class: "col-asset",
                div { class: "bold", "{item.symbol()}" }
                div { class: "sub", "{item.name()}" }
            }
            div {
                class: "col-balance",
                div { class: "bold", "{item.token_amount}" }
                div { class: "sub", "{item.token_amount_price}" }
            }
            div {
                class: "col-action",
                Button {
                    button_type: ButtonType::Secondary,
                    on_click: move |_| on_deposit.call(deposit_item.clone()),
                    "Deposit"
                }
                Button {
                    button_type: ButtonType::Secondary,
                    on_click: move |_| on_withdraw.call(withdraw_item.clone()),
                    "Withdraw"
                }
            }
        }
    }
}

#[derive(PartialEq, Clone, Props)]
pub struct AssetListProps {
    list: Vec<AssetListItem>,
    #[props(optional)]
    on_deposit: Option<EventHandler<AssetListItem>>,
    #[props(optional)]
    on_withdraw: Option<EventHandler<AssetListItem>>,
}

/// The user's assets with their mock balances, in list order.
#[allow(non_snake_case)]
pub fn AssetList(props: AssetListProps) -> Element {
    let on_deposit = props.on_deposit;
    let on_withdraw = props.on_withdraw;

    rsx! {
        div {
            class: "asset-list",
            div {
                class: "list-row",
                div { class: "col-logo" }
                div { class: "col-asset", div { class: "col-title", "Asset" } }
                div { class: "col-balance", div { class: "col-title", "Balance" } }
            }
            div {
                class: "list-body",
                for (index, item) in props.list.into_iter().enumerate() {
                    AssetRow {
                        key: "{index}",
                        item,
                        on_deposit: move |item: AssetListItem| {
                            if let Some(handler) = &on_deposit {
                                handler.call(item);
                            }
                        },
                        on_withdraw: move |item: AssetListItem| {
                            if let Some(handler) = &on_withdraw {
                                handler.call(item);
                            }
                        },
                    }
                }
            }
        }
    }
}
