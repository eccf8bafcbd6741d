//! Page shell: top header bar and left icon sidebar.

use dioxus::prelude::*;

use crate::components::error_boundary::GlobalErrorBoundary;
use crate::routes::Route;

use dioxus_free_icons::icons::md_action_icons::MdHome;
use dioxus_free_icons::icons::md_action_icons::MdSearch;
use dioxus_free_icons::icons::md_action_icons::MdSettings;
use dioxus_free_icons::icons::md_action_icons::MdShoppingCart;
use dioxus_free_icons::icons::md_file_icons::MdFolder;
use dioxus_free_icons::icons::md_social_icons::MdNotifications;
use dioxus_free_icons::icons::md_social_icons::MdPerson;
use dioxus_free_icons::{Icon, IconShape};


/// Shared shell layout wrapping every routed page.
#[component]
pub fn PageShell() -> Element {
    rsx! {

        div {
            id:"x-shell-container",

            style:"
                display:flex;
                flex-direction: column;
                width: 100%;
                height: 100%;
            ",

            HeaderBar{},

            div {
                id:"x-shell-body",
                style:"
                    display:flex;
                    flex-direction: row;
                    flex-grow: 1;
                    min-height: 0;
                ",

                Sidebar{},

                div {
                    id:"x-page-container",
                    style: "flex-grow:1; min-width: 100px; overflow-y: auto;",
                    GlobalErrorBoundary {
                        boundary_name: "PageShell".to_string(),
                        Outlet::<Route> {}
                    }
                }
            }
        }

    }
}

#[component]
fn HeaderBar() -> Element {
    rsx! {
        div {
            id: "x-header-bar",
            style: "
                display:flex;
                flex-direction: row;
                align-items: center;
                gap: 24px;
                height: 64px;
                padding: 0 24px;
                background-color: white;
                border-bottom: 1px solid #F2F2F2;
                flex-shrink: 0;
            ",

            HeaderLogo{},
            HeaderSearchInput{},

            // empty space
            div {
                style: "flex-grow:1;"
            }

            HeaderIconButton { icon: MdNotifications, label: "Notifications" }
            HeaderIconButton { icon: MdPerson, label: "Account" }
        }
    }
}

#[component]
fn HeaderLogo() -> Element {
    rsx! {
        Link {
            to: Route::CatalogPage { },
            span {
                style: "
                    color: #6B047C;
                    font-size: 24px;
                    font-weight: 700;
                    letter-spacing: -0.02em;
                    text-decoration: none;
                ",
                "Casemart"
            }
        }
    }
}

#[component]
fn HeaderSearchInput() -> Element {
    let mut search_q = use_signal(|| "".to_string());
    rsx! {
        div {
            style: "
                display:flex;
                align-items:center;
                gap: 10px;
                background-color: white;
                border: 1px solid #F2F2F2;
                border-radius: 9999px;
                padding: 10px 14px;
                height: 40px;
                width: 420px;
                color: #1A011E;
            ",
            Icon { icon: MdSearch, style: "width: 18px; height: 18px; color:#999999;" }
            input {
                r#type: "text",
                placeholder: "Search products",
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
                onkeydown: move |e| {
                    if e.key() == Key::Enter {
                        // no search backend yet
                        dioxus::logger::tracing::debug!("header search submitted: {:?}", search_q.read());
                    }
                },
            }
        }
    }
}

#[component]
fn HeaderIconButton<I: IconShape + Clone + PartialEq + 'static>(icon: I, label: String) -> Element {
    rsx! {
        button {
            title: "{label}",
            style: "
                width: 38px;
                height: 38px;
                border: none;
                border-radius: 9999px;
                background: white;
                color: #1A011E;
                cursor: pointer;
                display: flex;
                align-items: center;
                justify-content: center;
            ",
            class: "casemart-hover-shadow-background",
            Icon { icon: icon, style: "width: 22px; height: 22px;" }
        }
    }
}

#[component]
fn Sidebar() -> Element {
    rsx! {
        div {
            id:"x-sidebar",
            style:"
                display:flex;
                flex-direction: column;
                gap: 40px;
                width: 70px;
                background-color: #1A011E;
                padding: 16px;
                flex-shrink: 0;
            ",

            // top part
            SidebarTopIconLinks{},

            // empty space
            div {
                style: "flex-grow:1;"
            }
            // bottom part
            SidebarBottomIconLinks{},
        }
    }
}

#[component]
fn SidebarTopIconLinks() -> Element {
    rsx! {
        div {
            style: "
                display:flex;
                flex-direction: column;
                gap: 24px;
                width: 38px;
                align-items: center;
                justify-content: center;
            ",
            IconLink { to: Route::CatalogPage { }, icon: MdHome, label: "Home" }
            IconLink { to: Route::CatalogPage { }, icon: MdSearch, label: "Browse" }
            IconLink { to: Route::CatalogPage { }, icon: MdShoppingCart, label: "Cart" }
            IconLink { to: Route::CatalogPage { }, icon: MdFolder, label: "My Library" }
        }
    }
}


#[component]
fn SidebarBottomIconLinks() -> Element {
    rsx! {

        div {
            style: "
                display:flex;
                flex-direction: column;
                gap: 24px;
                width: 38px;
                align-items: center;
                justify-content: center;
            ",

            IconLink { to: Route::CatalogPage { }, icon: MdSettings, label: "Settings" }
            IconLink { to: Route::CatalogPage { }, icon: MdPerson, label: "Profile" }
        }
    }
}

#[component]
fn IconLink<T: IconShape + Clone + PartialEq + 'static> (to: Route, icon: T, label: String) -> Element {
    rsx! {
        Link {
            to: to,
            span {
                title: "{label}",
                style: "color:white;",
                Icon { icon: icon, style: "width: 26px; height: 26px;" }
            }
        }
    }
}
