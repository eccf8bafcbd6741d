use dioxus::prelude::*;

use crate::components::product_components::{
    product_controls::ProductControls, product_filters::ProductFilters,
    product_grid::ProductGrid, product_tabs::ProductTabs, search_banner::SearchBanner,
};


/// Catalog browsing page
#[component]
pub fn CatalogPage() -> Element {
    rsx! {
        Title { "Casemart - Browse Products" }
        div {
            id: "x-catalog-page-root",
            style: "
                min-height: 100%;
                background: white;
                padding: 24px;
                box-sizing: border-box;
            ",
            div {
                style: "max-width: 1417px; margin: 0 auto;",

                SearchBanner {}

                div {
                    style: "margin-top: 32px;",
                    div {
                        style: "display:flex; gap: 24px;",
                        aside {
                            style: "width: 280px; flex-shrink: 0;",
                            ProductFilters {}
                        }
                        section {
                            style: "flex: 1; min-width: 0;",
                            div {
                                style: "
                                    display:flex;
                                    align-items: center;
                                    justify-content: space-between;
                                    flex-wrap: wrap;
                                    gap: 16px;
                                ",
                                ProductTabs {}
                                ProductControls {}
                            }
                            ProductGrid {}
                        }
                    }
                }
            }
        }
    }
}
