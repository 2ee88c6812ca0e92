//! Built-in product data
//!
//! Process-wide immutable lists, initialised on first use.

use std::collections::HashMap;

use ecoscan_common::{Alternative, Product, ScoreBreakdown, Suggestion};
use once_cell::sync::Lazy;

fn entry(id: &str, name: &str, brand: &str, category: &str, score: u32, breakdown: (u32, u32, u32)) -> Product {
    let (carbon, water, other) = breakdown;
    Product::new(id, name, brand, category, score, ScoreBreakdown::new(carbon, water, other))
}

fn demo(
    product: Product,
    image: &str,
    alternatives: [(&str, u32); 2],
) -> Product {
    product
        .with_image(image)
        .with_alternatives(alternatives.iter().map(|(n, s)| Alternative::new(*n, *s)).collect())
}

/// Products per category, served when a category is browsed without a query
static CATEGORY_PRODUCTS: Lazy<HashMap<&'static str, Vec<Product>>> = Lazy::new(|| {
    HashMap::from([
        (
            "electronics",
            vec![
                entry("elec_1", "iPhone 15 Pro", "Apple", "electronics", 85, (12, 6, 3)),
                entry("elec_2", "Samsung Galaxy S24", "Samsung", "electronics", 72, (15, 8, 5)),
                entry("elec_3", "MacBook Pro M3", "Apple", "electronics", 68, (20, 7, 5)),
                entry("elec_4", "iPad Air", "Apple", "electronics", 75, (14, 6, 5)),
                entry("elec_5", "Google Pixel 8", "Google", "electronics", 80, (11, 5, 4)),
                entry("elec_6", "Dell XPS 13", "Dell", "electronics", 65, (18, 9, 8)),
                entry("elec_7", "AirPods Pro", "Apple", "electronics", 70, (16, 7, 7)),
                entry("elec_8", "Sony WH-1000XM5", "Sony", "electronics", 73, (15, 8, 4)),
            ],
        ),
        (
            "food",
            vec![
                entry("food_1", "Coca Cola Classic", "Coca Cola", "food", 25, (45, 25, 5)),
                entry("food_2", "Beyond Meat Burger", "Beyond Meat", "food", 82, (12, 4, 2)),
                entry("food_3", "Organic Quinoa", "Nature's Path", "food", 90, (5, 3, 2)),
                entry("food_4", "Fair Trade Coffee", "Equal Exchange", "food", 85, (8, 4, 3)),
                entry("food_5", "Local Honey", "Local Farm", "food", 95, (2, 2, 1)),
                entry("food_6", "Organic Avocado", "Earthbound Farm", "food", 78, (12, 8, 2)),
                entry("food_7", "Plant-Based Milk", "Oatly", "food", 88, (7, 3, 2)),
                entry("food_8", "Sustainable Tuna", "Wild Planet", "food", 72, (15, 8, 5)),
            ],
        ),
        (
            "clothing",
            vec![
                entry("cloth_1", "Nike Air Max 270", "Nike", "clothing", 45, (35, 15, 5)),
                entry("cloth_2", "Patagonia Better Sweater", "Patagonia", "clothing", 88, (8, 3, 1)),
                entry("cloth_3", "Allbirds Tree Runners", "Allbirds", "clothing", 85, (10, 4, 1)),
                entry("cloth_4", "Veja V-10 Sneakers", "Veja", "clothing", 82, (12, 5, 1)),
                entry("cloth_5", "Organic Cotton T-Shirt", "Pact", "clothing", 90, (5, 4, 1)),
                entry("cloth_6", "Recycled Denim Jeans", "Outerknown", "clothing", 75, (15, 8, 2)),
                entry("cloth_7", "Hemp Hoodie", "Patagonia", "clothing", 92, (4, 3, 1)),
                entry("cloth_8", "Wool Base Layer", "Icebreaker", "clothing", 80, (12, 6, 2)),
            ],
        ),
        (
            "automotive",
            vec![
                entry("auto_1", "Tesla Model 3", "Tesla", "automotive", 78, (18, 4, 0)),
                entry("auto_2", "Toyota Prius", "Toyota", "automotive", 85, (12, 2, 1)),
                entry("auto_3", "BMW i3", "BMW", "automotive", 72, (20, 5, 3)),
                entry("auto_4", "Nissan Leaf", "Nissan", "automotive", 80, (15, 3, 2)),
                entry("auto_5", "Hyundai Ioniq", "Hyundai", "automotive", 75, (18, 4, 3)),
                entry("auto_6", "Ford Mustang Mach-E", "Ford", "automotive", 70, (22, 5, 3)),
            ],
        ),
        (
            "beauty",
            vec![
                entry("beauty_1", "Organic Face Cream", "Dr. Bronner's", "beauty", 85, (8, 4, 3)),
                entry("beauty_2", "Cruelty-Free Shampoo", "Aveda", "beauty", 80, (12, 6, 2)),
                entry("beauty_3", "Natural Deodorant", "Native", "beauty", 88, (6, 3, 3)),
                entry("beauty_4", "Reef-Safe Sunscreen", "All Good", "beauty", 92, (4, 3, 1)),
            ],
        ),
        (
            "home",
            vec![
                entry("home_1", "LED Light Bulbs", "Philips", "home", 90, (5, 2, 3)),
                entry("home_2", "Smart Thermostat", "Nest", "home", 85, (8, 3, 4)),
                entry("home_3", "Bamboo Cutting Board", "Bambu", "home", 95, (2, 2, 1)),
                entry("home_4", "Reusable Water Bottle", "Hydro Flask", "home", 88, (6, 4, 2)),
            ],
        ),
    ])
});

/// Demonstration products appended to every search pool
static DEMO_PRODUCTS: Lazy<Vec<Product>> = Lazy::new(|| {
    vec![
        demo(
            entry("1", "iPhone 15 Pro", "Apple", "electronics", 85, (12, 6, 3)),
            "https://images.unsplash.com/photo-1592899677977-9c10ca588bbd?w=400",
            [("iPhone 15 Pro (Refurbished)", 92), ("Fairphone 5", 95)],
        ),
        demo(
            entry("2", "Tesla Model 3", "Tesla", "automotive", 78, (18, 4, 0)),
            "https://images.unsplash.com/photo-1560958089-b8a1929cea89?w=400",
            [("Tesla Model 3 (Used)", 88), ("BYD Atto 3", 82)],
        ),
        demo(
            entry("3", "Nike Air Max 270", "Nike", "clothing", 45, (35, 15, 5)),
            "https://images.unsplash.com/photo-1542291026-7eec264c27ff?w=400",
            [("Allbirds Tree Runners", 85), ("Veja V-10", 82)],
        ),
        demo(
            entry("4", "Coca Cola Classic", "Coca Cola", "food", 25, (45, 25, 5)),
            "https://images.unsplash.com/photo-1581636625402-29b2a704ef13?w=400",
            [("La Croix Sparkling Water", 75), ("Topo Chico Mineral Water", 68)],
        ),
        demo(
            entry("5", "Samsung Galaxy S24", "Samsung", "electronics", 72, (15, 8, 5)),
            "https://images.unsplash.com/photo-1511707171634-5f897ff02aa9?w=400",
            [("Samsung Galaxy S24 (Refurbished)", 88), ("Google Pixel 8", 85)],
        ),
        demo(
            entry("6", "MacBook Pro M3", "Apple", "electronics", 68, (20, 7, 5)),
            "https://images.unsplash.com/photo-1517336714731-489689fd1ca8?w=400",
            [("MacBook Pro M3 (Refurbished)", 85), ("Framework Laptop 16", 92)],
        ),
        demo(
            entry("7", "Patagonia Better Sweater", "Patagonia", "clothing", 88, (8, 3, 1)),
            "https://images.unsplash.com/photo-1551698618-1dfe5d97d256?w=400",
            [("Patagonia Better Sweater (Used)", 95), ("Arcteryx Atom LT", 82)],
        ),
        demo(
            entry("8", "Beyond Meat Burger", "Beyond Meat", "food", 82, (12, 4, 2)),
            "https://images.unsplash.com/photo-1571091718767-18b5b1457add?w=400",
            [("Impossible Burger", 78), ("Black Bean Burger (Homemade)", 95)],
        ),
    ]
});

static SUGGESTIONS: Lazy<Vec<Suggestion>> = Lazy::new(|| {
    [
        ("iPhone 15 Pro", "Apple"),
        ("iPhone 15", "Apple"),
        ("Tesla Model 3", "Tesla"),
        ("Tesla Model Y", "Tesla"),
        ("Nike Air Max 270", "Nike"),
        ("Nike Air Force 1", "Nike"),
        ("Coca Cola Classic", "Coca Cola"),
        ("Samsung Galaxy S24", "Samsung"),
        ("Samsung Galaxy S23", "Samsung"),
        ("MacBook Pro M3", "Apple"),
        ("MacBook Air M2", "Apple"),
        ("Patagonia Better Sweater", "Patagonia"),
        ("Beyond Meat Burger", "Beyond Meat"),
    ]
    .into_iter()
    .map(|(name, brand)| Suggestion {
        name: name.to_string(),
        brand: brand.to_string(),
    })
    .collect()
});

/// Products listed under a category; empty for unknown categories
pub fn products_in_category(category: &str) -> &'static [Product] {
    CATEGORY_PRODUCTS
        .get(category)
        .map(Vec::as_slice)
        .unwrap_or(&[])
}

/// The fixed demonstration catalogue
pub fn demo_products() -> &'static [Product] {
    &DEMO_PRODUCTS
}

/// Source list for search suggestions
pub fn suggestion_list() -> &'static [Suggestion] {
    &SUGGESTIONS
}
