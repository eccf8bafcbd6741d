//! Filter panel header: applied-filter count and clear-all control.

use dioxus::prelude::*;
use dioxus_free_icons::{Icon, icons::md_navigation_icons::MdClose};

#[component]
pub fn FilterHeader(applied_count: ReadSignal<usize>, on_clear_all: Option<Callback<()>>) -> Element {
    let clear_button = on_clear_all.map(|clear| {
        rsx! {
            button {
                style: "
                    border: none;
                    background: none;
                    color: #6B047C;
                    cursor: pointer;
                    display: flex;
                    align-items: center;
                    padding: 0;
                ",
                onclick: move |_| {
                    clear.call(());
                },
                Icon { icon: MdClose, style: "width: 14px; height: 14px;" }
            }
        }
    });

    rsx! {
        div {
            id: "x-filter-header",
            style: "
                display: flex;
                align-items: center;
                justify-content: space-between;
                margin-bottom: 24px;
                padding: 16px 16px 0 16px;
            ",
            div {
                style: "font-size: 16px; font-weight: 500; letter-spacing: -0.32px;",
                "Filters"
            }
            div {
                style: "
                    display: flex;
                    align-items: center;
                    gap: 8px;
                    border-radius: 4px;
                    background: #F0E6F2;
                    padding: 6px 12px;
                ",
                div {
                    style: "color: #6B047C; font-size: 14px; font-weight: 500;",
                    "{applied_count} applied"
                }
                {clear_button}
            }
        }
    }
}
