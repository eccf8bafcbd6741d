//! Sort and view controls next to the content tabs.

use dioxus::prelude::*;
use dioxus_free_icons::{Icon, icons::md_navigation_icons::MdApps};


const SORT_ORDERS: [&str; 4] = ["Most popular", "Newest", "Price: low to high", "Price: high to low"];

#[component]
pub fn ProductControls() -> Element {
    let mut sort_order = use_signal(|| SORT_ORDERS[0].to_string());

    rsx! {
        div {
            id: "x-product-controls",
            style: "
                display: flex;
                flex-direction: row;
                align-items: center;
                gap: 16px;
            ",

            span {
                style: "font-size: 14px; color: #666666;",
                "Sort by"
            }
            select {
                value: "{sort_order}",
                style: "
                    height: 36px;
                    padding: 0 12px;
                    background: white;
                    border: 1px solid #F2F2F2;
                    border-radius: 4px;
                    font-size: 14px;
                    color: #1A011E;
                    cursor: pointer;
                ",
                onchange: move |e: Event<FormData>| {
                    *sort_order.write() = e.value();
                },
                for order in SORT_ORDERS {
                    option {
                        key: "{order}",
                        value: "{order}",
                        "{order}"
                    }
                }
            }

            button {
                title: "Grid view",
                style: "
                    width: 36px;
                    height: 36px;
                    border: 1px solid #F2F2F2;
                    border-radius: 4px;
                    background: white;
                    color: #6B047C;
                    cursor: pointer;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                ",
                class: "casemart-hover-shadow-background",
                Icon { icon: MdApps, style: "width: 20px; height: 20px;" }
            }
        }
    }
}
