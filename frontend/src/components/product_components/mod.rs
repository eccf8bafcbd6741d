pub mod filter_header;
pub mod select_filter;
pub mod product_filters;
pub mod product_tabs;
pub mod product_controls;
pub mod product_grid;
pub mod search_banner;
