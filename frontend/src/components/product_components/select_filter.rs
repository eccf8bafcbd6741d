//! Labeled multi-select-by-tag filter control.

use dioxus::prelude::*;
use dioxus_free_icons::{Icon, icons::md_navigation_icons::{MdArrowDropDown, MdClose}};

use common::tag::{available_options, Tag};


/// Dropdown of not-yet-selected options plus a removable chip per selected
/// tag. The dropdown only ever offers `options` minus the selected ids, so
/// re-selecting an already-selected tag is structurally impossible.
#[component]
pub fn SelectFilter(
    label: ReadSignal<String>,
    options: ReadSignal<Vec<Tag>>,
    selected_tags: ReadSignal<Vec<Tag>>,
    on_add_tag: Callback<Tag>,
    on_remove_tag: Callback<String>,
    #[props(default = "- select -".to_string())] placeholder: String,
) -> Element {
    let available = use_memo(move || available_options(&options.read(), &selected_tags.read()));

    rsx! {
        div {
            style: "margin-bottom: 16px; padding: 0 16px;",
            div {
                style: "font-size: 14px; font-weight: 500; margin-bottom: 8px;",
                "{label}"
            }
            div {
                style: "position: relative;",
                select {
                    value: "",
                    style: "
                        width: 100%;
                        height: 40px;
                        padding: 0 12px;
                        background: white;
                        border: 1px solid #F2F2F2;
                        border-radius: 4px;
                        font-size: 14px;
                        color: #999999;
                        appearance: none;
                    ",
                    onchange: move |e: Event<FormData>| {
                        let id = e.value();
                        // the placeholder row has an empty id and matches nothing
                        if let Some(tag) = options.read().iter().find(|opt| opt.id == id) {
                            on_add_tag.call(tag.clone());
                        }
                    },
                    option { value: "", "{placeholder}" }
                    for opt in available.read().iter().cloned() {
                        option {
                            key: "{opt.id}",
                            value: "{opt.id}",
                            "{opt.label}"
                        }
                    }
                }
                div {
                    style: "
                        position: absolute;
                        right: 12px;
                        top: 50%;
                        transform: translateY(-50%);
                        pointer-events: none;
                        display: flex;
                    ",
                    Icon { icon: MdArrowDropDown, style: "width: 16px; height: 16px; color: #999999;" }
                }
            }
            if !selected_tags.read().is_empty() {
                div {
                    style: "display: flex; flex-wrap: wrap; gap: 8px; margin-top: 8px;",
                    for tag in selected_tags.read().iter().cloned() {
                        TagChip {
                            key: "{tag.id}",
                            tag: tag.clone(),
                            on_remove: on_remove_tag,
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn TagChip(tag: ReadSignal<Tag>, on_remove: Callback<String>) -> Element {
    rsx! {
        div {
            style: "
                display: flex;
                align-items: center;
                gap: 4px;
                padding: 4px 8px;
                background: #F0E6F2;
                border-radius: 4px;
            ",
            span {
                style: "color: #6B047C; font-size: 14px;",
                "{tag.read().label}"
            }
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
                    on_remove.call(tag.read().id.clone());
                },
                Icon { icon: MdClose, style: "width: 12px; height: 12px;" }
            }
        }
    }
}
