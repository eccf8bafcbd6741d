//! Search banner across the top of the catalog page.

use dioxus::{logger::tracing, prelude::*};
use dioxus_free_icons::{Icon, icons::md_action_icons::MdSearch};


#[component]
pub fn SearchBanner() -> Element {
    rsx! {
        div {
            id: "x-search-banner",
            style: "
                display: flex;
                flex-direction: column;
                gap: 14px;
                width: 100%;
                border-radius: 22px;
                padding: 32px;
                background: linear-gradient(135deg, #2D0234 0%, #6B047C 100%);
                color: white;
                box-sizing: border-box;
            ",

            // Title
            div {
                style: "
                    font-size: 30px;
                    font-weight: 500;
                ",
                "Find the right product for your practice"
            }

            // Description
            div {
                style: "
                    font-size: 18px;
                    font-weight: 400;
                    line-height: 1.5;
                    color: rgba(255,255,255,0.92);
                    max-width: 620px;
                ",
                "Browse books, templates, software and courses across every legal sector, from trusted sellers."
            }

            BannerSearchInput {}
        }
    }
}

#[component]
fn BannerSearchInput() -> Element {
    let mut search_q = use_signal(|| "".to_string());
    rsx! {
        div {
            style: "
                display:flex;
                align-items:center;
                gap: 10px;
                background-color: white;
                border-radius: 9999px;
                padding: 10px 14px;
                height: 42px;
                max-width: 520px;
                color: #1A011E;
            ",
            Icon { icon: MdSearch, style: "width: 20px; height: 20px; color:#999999;" }
            input {
                r#type: "text",
                placeholder: "Search the catalog",
                style: "
                    flex:1;
                    border: none;
                    outline: none;
                    background: transparent;
                    color: #1A011E;
                    font-size: 14px;
                ",
                value: "{search_q}",
                oninput: move |e| {
                    *search_q.write() = e.value();
                },
                onkeypress: move |e| {
                    if e.key() == Key::Enter {
                        e.prevent_default();
                        // catalog search is not wired to a backend yet
                        tracing::debug!("banner search submitted: {:?}", search_q.read());
                    }
                },
            }
        }
    }
}
