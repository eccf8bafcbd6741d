use dioxus::prelude::*;

use crate::components::page_shell::PageShell;
use crate::pages::catalog_page::CatalogPage;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(PageShell)]

    #[route("/")]
    CatalogPage {},
}
