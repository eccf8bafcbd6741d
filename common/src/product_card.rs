//! Product card placeholder data.

use serde::{Deserialize, Serialize};


/// Display data for one product card in the grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductCardData {
    pub file_type: String,
    pub title: String,
    pub categories: String,
    pub price: String,
    pub stock: String,
}

/// The fixed grid contents until a real catalog backend exists: nine
/// identical placeholder cards.
pub fn placeholder_products() -> Vec<ProductCardData> {
    let card = ProductCardData {
        file_type: "PDF".to_string(),
        title: "How to win a case".to_string(),
        categories: "Business Law | Creative Law | Huma....".to_string(),
        price: "$50".to_string(),
        stock: "(32 copies left)".to_string(),
    };
    vec![card; 9]
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_holds_nine_identical_placeholders() {
        let products = placeholder_products();
        assert_eq!(products.len(), 9);
        for card in &products {
            assert_eq!(card, &products[0]);
        }
    }
}
