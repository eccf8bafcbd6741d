//! Product grid and card components.

use dioxus::prelude::*;
use dioxus_free_icons::{Icon, icons::{md_action_icons::MdShoppingCart, md_editor_icons::MdInsertDriveFile}};

use common::product_card::{placeholder_products, ProductCardData};


#[component]
pub fn ProductGrid() -> Element {
    let products = placeholder_products();

    rsx! {
        div {
            id: "x-product-grid-wrapper",
            style: "width: 100%; font-weight: 500; margin-top: 48px;",
            div {
                style: "
                    display: grid;
                    grid-template-columns: repeat(3, minmax(0, 1fr));
                    gap: 16px;
                    width: 100%;
                ",
                for (index, product) in products.into_iter().enumerate() {
                    ProductCard {
                        key: "{index}",
                        product,
                    }
                }
            }
        }
    }
}

#[component]
fn ProductCard(product: ReadSignal<ProductCardData>) -> Element {
    let ProductCardData {
        file_type,
        title,
        categories,
        price,
        stock,
    } = product.read().clone();

    rsx! {
        div {
            style: "
                display: flex;
                flex-direction: column;
                gap: 10px;
                background: white;
                border: 1px solid #F2F2F2;
                border-radius: 8px;
                padding: 16px;
                box-sizing: border-box;
            ",

            // Row 1: TYPE BADGE - SPACER - CART BUTTON
            div {
                style: "
                    display: flex;
                    flex-direction: row;
                    align-items: center;
                    gap: 8px;
                    width: 100%;
                ",
                FileTypeBadge { file_type }
                div { style: "flex: 1 1 auto;" }
                CartButton {}
            }

            // Row 2: TITLE
            div {
                style: "
                    font-size: 18px;
                    line-height: 24px;
                    font-weight: 500;
                    color: #1A011E;
                    overflow: hidden;
                    text-overflow: ellipsis;
                    white-space: nowrap;
                ",
                "{title}"
            }

            // Row 3: CATEGORIES
            div {
                style: "
                    font-size: 13px;
                    line-height: 18px;
                    font-weight: 400;
                    color: #666666;
                    overflow: hidden;
                    text-overflow: ellipsis;
                    white-space: nowrap;
                ",
                "{categories}"
            }

            // Row 4: PRICE - STOCK
            div {
                style: "
                    display: flex;
                    flex-direction: row;
                    align-items: baseline;
                    gap: 8px;
                ",
                span {
                    style: "font-size: 18px; font-weight: 700; color: #6B047C;",
                    "{price}"
                }
                span {
                    style: "font-size: 12px; font-weight: 400; color: #999999;",
                    "{stock}"
                }
            }
        }
    }
}

#[component]
fn FileTypeBadge(file_type: String) -> Element {
    rsx! {
        div {
            style: "
                display: flex;
                align-items: center;
                gap: 4px;
                padding: 4px 8px;
                background: #F0E6F2;
                border-radius: 4px;
                color: #6B047C;
                font-size: 12px;
                font-weight: 500;
            ",
            Icon { icon: MdInsertDriveFile, style: "width: 14px; height: 14px;" }
            "{file_type}"
        }
    }
}

#[component]
fn CartButton() -> Element {
    rsx! {
        button {
            title: "Add to cart",
            style: "
                width: 32px;
                height: 32px;
                cursor: pointer;
                border: 1px solid #F2F2F2;
                border-radius: 8px;
                background: white;
                color: #1A011E;
                display: flex;
                align-items: center;
                justify-content: center;
            ",
            class: "casemart-hover-shadow-background",
            onclick: move |_e| {
                _e.prevent_default();
                _e.stop_propagation();
                // cart is not wired up yet
                dioxus::logger::tracing::debug!("add-to-cart clicked on placeholder card");
            },
            Icon { icon: MdShoppingCart, style: "width: 18px; height: 18px;" }
        }
    }
}
