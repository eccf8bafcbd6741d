//! Content tab selector above the product grid.

use dioxus::prelude::*;


/// The three content kinds the page can list. Independent of the filter
/// panel state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ContentTab {
    #[default]
    Product,
    Event,
    Talent,
}

impl ContentTab {
    pub const ALL: [ContentTab; 3] = [ContentTab::Product, ContentTab::Event, ContentTab::Talent];

    pub fn label(&self) -> &'static str {
        match self {
            ContentTab::Product => "Product",
            ContentTab::Event => "Event",
            ContentTab::Talent => "Talent",
        }
    }
}


#[component]
pub fn ProductTabs() -> Element {
    let active_tab = use_signal(ContentTab::default);

    rsx! {
        div {
            id: "x-product-tabs",
            style: "
                display: flex;
                flex-direction: column;
                min-width: 240px;
                width: 394px;
                font-size: 20px;
                font-weight: 500;
                letter-spacing: -0.4px;
                line-height: 1.3;
            ",
            div {
                style: "display: flex; align-items: center; gap: 64px;",
                for tab in ContentTab::ALL {
                    TabButton {
                        key: "{tab.label()}",
                        tab,
                        active_tab,
                    }
                }
            }
            div {
                style: "background: #F2F2F2; min-height: 1px; width: 100%;",
            }
        }
    }
}

#[component]
fn TabButton(tab: ContentTab, mut active_tab: Signal<ContentTab>) -> Element {
    let is_active = *active_tab.read() == tab;
    let color = if is_active { "#6B047C" } else { "#808080" };
    let weight = if is_active { "700" } else { "500" };
    let border_bottom = if is_active { "2px solid #6B047C" } else { "2px solid transparent" };

    rsx! {
        button {
            style: "
                padding: 8px 10px;
                border: none;
                border-bottom: {border_bottom};
                background: none;
                color: {color};
                font-size: 20px;
                font-weight: {weight};
                letter-spacing: -0.4px;
                cursor: pointer;
            ",
            onclick: move |_| {
                active_tab.set(tab);
            },
            "{tab.label()}"
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn three_tabs_with_product_active_by_default() {
        assert_eq!(ContentTab::ALL.len(), 3);
        assert_eq!(ContentTab::default(), ContentTab::Product);
    }

    #[test]
    fn tab_labels_match_the_design() {
        let labels: Vec<&str> = ContentTab::ALL.iter().map(|t| t.label()).collect();
        assert_eq!(labels, vec!["Product", "Event", "Talent"]);
    }
}
