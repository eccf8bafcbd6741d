//! Product filter panel: owns the filter state and renders every control.

use dioxus::{logger::tracing, prelude::*};
use dioxus_free_icons::{Icon, icons::md_toggle_icons::{MdStar, MdStarBorder}};

use common::filter_state::{Condition, CostOption, DateOption, ProductFilterState, TagField};
use common::tag::Tag;

use crate::components::product_components::{filter_header::FilterHeader, select_filter::SelectFilter};


// Placeholder taxonomy until a real catalog backend supplies option lists.
fn sector_options() -> Vec<Tag> {
    vec![
        Tag::new("1", "Public law"),
        Tag::new("2", "Drug law"),
        Tag::new("3", "Criminal law"),
    ]
}

fn governing_law_options() -> Vec<Tag> {
    vec![
        Tag::new("1", "Public law"),
        Tag::new("2", "Drug law"),
        Tag::new("3", "Contract law"),
    ]
}

fn language_options() -> Vec<Tag> {
    vec![
        Tag::new("1", "English"),
        Tag::new("2", "Spanish"),
        Tag::new("3", "French"),
    ]
}

fn book_type_options() -> Vec<Tag> {
    vec![
        Tag::new("1", "E-book"),
        Tag::new("2", "Audio"),
        Tag::new("3", "Hard copy"),
    ]
}

// The version taxonomy has no entries yet.
fn version_options() -> Vec<Tag> {
    Vec::new()
}

/// Product category list above the filter fields. Not a filter: it neither
/// counts toward the applied total nor resets on clear-all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum ProductCategory {
    #[default]
    Books,
    Templates,
    Software,
    Courses,
}

impl ProductCategory {
    const ALL: [ProductCategory; 4] = [
        ProductCategory::Books,
        ProductCategory::Templates,
        ProductCategory::Software,
        ProductCategory::Courses,
    ];

    fn label(&self) -> &'static str {
        match self {
            ProductCategory::Books => "Books",
            ProductCategory::Templates => "Templates",
            ProductCategory::Software => "Software",
            ProductCategory::Courses => "Courses",
        }
    }
}

/// Two-stop gradient splitting the slider track into filled and unfilled
/// segments at the current price percentage.
fn slider_track_background(price: u8) -> String {
    format!(
        "linear-gradient(to right, #6B047C 0%, #6B047C {price}%, #D1B1D6 {price}%, #D1B1D6 100%)"
    )
}

fn star_is_filled(star: u8, rating: u8) -> bool {
    star <= rating
}


#[component]
pub fn ProductFilters() -> Element {
    let mut filters = use_signal(ProductFilterState::default);
    let applied_count = filters.read().applied_count();

    let clear_all = Callback::new(move |_: ()| {
        filters.write().clear_all();
        tracing::debug!("filter panel cleared");
    });

    rsx! {
        div {
            id: "x-product-filters",
            style: "
                width: 100%;
                background: #FBF6FC;
                color: #1A011E;
                padding-bottom: 16px;
            ",

            FilterHeader { applied_count, on_clear_all: clear_all }

            ProductCategorySection {}

            div {
                style: "display: flex; flex-direction: column; gap: 20px;",

                TextFieldSection {
                    label: "Author",
                    placeholder: "E.g Austin Kelaina",
                    value: filters.read().author.clone(),
                    on_input: move |v: String| filters.write().author = v,
                }

                TextFieldSection {
                    label: "Seller",
                    placeholder: "E.g Austin Kelaina",
                    value: filters.read().seller.clone(),
                    on_input: move |v: String| filters.write().seller = v,
                }

                DateFieldSection {
                    label: "Publish date",
                    value: filters.read().publish_date.clone(),
                    on_input: move |v: String| filters.write().publish_date = v,
                }

                SelectFilter {
                    label: "Sector".to_string(),
                    options: sector_options(),
                    selected_tags: filters.read().sectors.clone(),
                    on_add_tag: move |tag: Tag| filters.write().add_tag(TagField::Sectors, tag),
                    on_remove_tag: move |id: String| filters.write().remove_tag(TagField::Sectors, &id),
                }

                SelectFilter {
                    label: "Governing law".to_string(),
                    options: governing_law_options(),
                    selected_tags: filters.read().governing_law.clone(),
                    on_add_tag: move |tag: Tag| filters.write().add_tag(TagField::GoverningLaw, tag),
                    on_remove_tag: move |id: String| filters.write().remove_tag(TagField::GoverningLaw, &id),
                }

                SelectFilter {
                    label: "Language".to_string(),
                    options: language_options(),
                    selected_tags: filters.read().languages.clone(),
                    on_add_tag: move |tag: Tag| filters.write().add_tag(TagField::Languages, tag),
                    on_remove_tag: move |id: String| filters.write().remove_tag(TagField::Languages, &id),
                }

                SelectFilter {
                    label: "Book type".to_string(),
                    options: book_type_options(),
                    selected_tags: filters.read().book_types.clone(),
                    on_add_tag: move |tag: Tag| filters.write().add_tag(TagField::BookTypes, tag),
                    on_remove_tag: move |id: String| filters.write().remove_tag(TagField::BookTypes, &id),
                }

                DateFieldSection {
                    label: "Date",
                    value: filters.read().date.clone(),
                    on_input: move |v: String| filters.write().date = v,
                }

                SelectFilter {
                    label: "Version".to_string(),
                    options: version_options(),
                    selected_tags: filters.read().version.clone(),
                    on_add_tag: move |tag: Tag| filters.write().add_tag(TagField::Version, tag),
                    on_remove_tag: move |id: String| filters.write().remove_tag(TagField::Version, &id),
                }

                ConditionSection { filters }
                CostSection { filters }
                DateOptionSection { filters }
                PriceSliderSection { filters }
                StarRatingSection { filters }
            }
        }
    }
}

#[component]
fn ProductCategorySection() -> Element {
    let selected_category = use_signal(ProductCategory::default);

    rsx! {
        div {
            style: "padding: 0 16px; margin-bottom: 24px; background: white;",
            div {
                style: "
                    font-size: 10px;
                    text-transform: uppercase;
                    font-weight: 500;
                    color: #666666;
                    margin-bottom: 8px;
                ",
                "PRODUCT"
            }
            div {
                style: "display: flex; flex-direction: column;",
                for category in ProductCategory::ALL {
                    ProductCategoryButton {
                        key: "{category.label()}",
                        category,
                        selected_category,
                    }
                }
            }
        }
    }
}

#[component]
fn ProductCategoryButton(category: ProductCategory, mut selected_category: Signal<ProductCategory>) -> Element {
    let is_selected = *selected_category.read() == category;
    let background = if is_selected { "#F0E6F2" } else { "white" };
    let color = if is_selected { "#6B047C" } else { "#1A011E" };
    let border_left = if is_selected { "2px solid #6B047C" } else { "2px solid transparent" };

    rsx! {
        button {
            style: "
                text-align: left;
                padding: 10px 12px;
                font-size: 14px;
                font-weight: 500;
                border: none;
                border-left: {border_left};
                background: {background};
                color: {color};
                cursor: pointer;
            ",
            onclick: move |_| {
                selected_category.set(category);
            },
            "{category.label()}"
        }
    }
}

#[component]
fn SectionLabel(text: String) -> Element {
    rsx! {
        div {
            style: "font-size: 14px; font-weight: 500; margin-bottom: 8px;",
            "{text}"
        }
    }
}

#[component]
fn TextFieldSection(label: String, placeholder: String, value: String, on_input: Callback<String>) -> Element {
    rsx! {
        div {
            style: "padding: 0 16px;",
            SectionLabel { text: label }
            input {
                r#type: "text",
                value: "{value}",
                placeholder: "{placeholder}",
                style: "
                    width: 100%;
                    height: 40px;
                    padding: 0 12px;
                    background: white;
                    border: 1px solid #F2F2F2;
                    border-radius: 4px;
                    font-size: 14px;
                    box-sizing: border-box;
                ",
                oninput: move |e| {
                    on_input.call(e.value());
                },
            }
        }
    }
}

#[component]
fn DateFieldSection(label: String, value: String, on_input: Callback<String>) -> Element {
    rsx! {
        div {
            style: "padding: 0 16px;",
            SectionLabel { text: label }
            input {
                r#type: "date",
                value: "{value}",
                style: "
                    width: 100%;
                    height: 40px;
                    padding: 0 12px;
                    background: white;
                    border: 1px solid #F2F2F2;
                    border-radius: 4px;
                    font-size: 14px;
                    box-sizing: border-box;
                ",
                onchange: move |e| {
                    on_input.call(e.value());
                },
            }
        }
    }
}

#[component]
fn ConditionSection(mut filters: Signal<ProductFilterState>) -> Element {
    rsx! {
        div {
            style: "padding: 0 16px;",
            SectionLabel { text: "Condition" }
            div {
                style: "padding: 10px 12px; background: white; border-radius: 4px;",
                div {
                    style: "display: flex; gap: 24px;",
                    for option in Condition::ALL {
                        label {
                            key: "{option.label()}",
                            style: "display: inline-flex; align-items: center; gap: 8px; cursor: pointer;",
                            input {
                                r#type: "radio",
                                name: "condition",
                                value: "{option.label()}",
                                checked: filters.read().condition == option,
                                onchange: move |_| {
                                    filters.write().condition = option;
                                },
                                style: "width: 16px; height: 16px; accent-color: #6B047C;",
                            }
                            span { style: "font-size: 14px;", "{option.label()}" }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn CostSection(mut filters: Signal<ProductFilterState>) -> Element {
    rsx! {
        div {
            style: "padding: 0 16px;",
            SectionLabel { text: "Cost" }
            div {
                style: "padding: 10px 12px; background: white; border-radius: 4px;",
                div {
                    style: "display: flex; flex-wrap: wrap; column-gap: 24px; row-gap: 8px;",
                    for option in CostOption::ALL {
                        label {
                            key: "{option.label()}",
                            style: "display: inline-flex; align-items: center; gap: 8px; cursor: pointer;",
                            input {
                                r#type: "radio",
                                name: "cost",
                                value: "{option.label()}",
                                checked: filters.read().cost == option,
                                onchange: move |_| {
                                    filters.write().cost = option;
                                },
                                style: "width: 16px; height: 16px; accent-color: #6B047C;",
                            }
                            span { style: "font-size: 14px;", "{option.label()}" }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn DateOptionSection(mut filters: Signal<ProductFilterState>) -> Element {
    rsx! {
        div {
            style: "padding: 0 16px;",
            SectionLabel { text: "Date" }
            div {
                style: "padding: 10px 12px; background: white; border-radius: 4px;",
                div {
                    style: "display: flex; flex-wrap: wrap; column-gap: 24px; row-gap: 8px;",
                    for option in DateOption::ALL {
                        label {
                            key: "{option.label()}",
                            style: "display: inline-flex; align-items: center; gap: 8px; cursor: pointer;",
                            input {
                                r#type: "radio",
                                name: "date_option",
                                value: "{option.label()}",
                                checked: filters.read().date_option == option,
                                onchange: move |_| {
                                    filters.write().date_option = option;
                                },
                                style: "width: 16px; height: 16px; accent-color: #6B047C;",
                            }
                            span { style: "font-size: 14px;", "{option.label()}" }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn PriceSliderSection(mut filters: Signal<ProductFilterState>) -> Element {
    let price = filters.read().price;

    rsx! {
        div {
            style: "padding: 0 16px;",
            SectionLabel { text: "Price range" }
            input {
                r#type: "range",
                min: "0",
                max: "100",
                value: "{price}",
                style: "
                    width: 100%;
                    height: 4px;
                    border-radius: 8px;
                    appearance: none;
                    cursor: pointer;
                    accent-color: #6B047C;
                    background: {slider_track_background(price)};
                ",
                oninput: move |e| {
                    if let Ok(value) = e.value().parse::<u8>() {
                        filters.write().price = value.min(100);
                    }
                },
            }
            div {
                style: "font-size: 12px; margin-top: 8px;",
                "${price}"
            }
        }
    }
}

#[component]
fn StarRatingSection(mut filters: Signal<ProductFilterState>) -> Element {
    let rating = filters.read().star_rating;

    rsx! {
        div {
            style: "padding: 0 16px;",
            SectionLabel { text: "Star ratings" }
            div {
                style: "display: flex; gap: 4px;",
                for star in 1u8..=5 {
                    button {
                        key: "{star}",
                        style: "
                            border: none;
                            background: none;
                            cursor: pointer;
                            padding: 0;
                            display: flex;
                        ",
                        onclick: move |_| {
                            filters.write().star_rating = star;
                        },
                        if star_is_filled(star, rating) {
                            Icon { icon: MdStar, style: "width: 24px; height: 24px; color: #FFD700;" }
                        } else {
                            Icon { icon: MdStarBorder, style: "width: 24px; height: 24px; color: #FFD700;" }
                        }
                    }
                }
            }
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slider_gradient_boundary_follows_price() {
        let at_zero = slider_track_background(0);
        assert!(at_zero.contains("#6B047C 0%, #D1B1D6 0%"));

        let at_half = slider_track_background(50);
        assert!(at_half.contains("#6B047C 50%, #D1B1D6 50%"));

        let at_full = slider_track_background(100);
        assert!(at_full.contains("#6B047C 100%, #D1B1D6 100%"));
    }

    #[test]
    fn star_fill_is_a_prefix_of_the_row() {
        // rating 3: stars 1..=3 filled, 4..=5 outlined
        let filled: Vec<u8> = (1..=5).filter(|star| star_is_filled(*star, 3)).collect();
        assert_eq!(filled, vec![1, 2, 3]);

        // rating 0: nothing filled
        assert!((1..=5).all(|star| !star_is_filled(star, 0)));
    }

    #[test]
    fn category_defaults_to_books() {
        assert_eq!(ProductCategory::default(), ProductCategory::Books);
        assert_eq!(ProductCategory::ALL.len(), 4);
    }

    #[test]
    fn option_lists_carry_unique_ids() {
        for list in [
            sector_options(),
            governing_law_options(),
            language_options(),
            book_type_options(),
            version_options(),
        ] {
            for tag in &list {
                assert_eq!(list.iter().filter(|t| t.id == tag.id).count(), 1);
            }
        }
    }
}
