//! # Vocabularies
//!
//! Fixed enumerations used by the generators. These are intentionally
//! compile-time constants: the toolkit produces one coherent dataset shape,
//! and only connection details vary per deployment.

/// The 10-element category taxonomy items are drawn from.
pub const CATEGORIES: [&str; 10] = [
    "Clothing",
    "Shoes",
    "Accessories",
    "Bags",
    "Jewelry",
    "Sportswear",
    "Vintage",
    "Luxury",
    "Streetwear",
    "Formal",
];

pub const COLORS: [&str; 10] = [
    "Black", "White", "Red", "Blue", "Green", "Yellow", "Pink", "Purple", "Brown", "Gray",
];

pub const PATTERNS: [&str; 6] = [
    "Solid", "Striped", "Floral", "Plaid", "Polka Dot", "Animal Print",
];

pub const MATERIALS: [&str; 7] = [
    "Cotton", "Denim", "Leather", "Silk", "Wool", "Polyester", "Linen",
];

pub const BRANDS: [&str; 9] = [
    "Zara", "H&M", "Nike", "Adidas", "Levi's", "Uniqlo", "Gucci", "Prada", "Local Brand",
];

pub const CONDITIONS: [&str; 4] = ["Like New", "Gently Used", "Well Used", "Vintage"];

pub const SIZES: [&str; 5] = ["XS", "S", "M", "L", "XL"];

pub const AGE_GROUPS: [&str; 5] = ["18-24", "25-34", "35-44", "45-54", "55+"];

pub const PRIMARY_STYLES: [&str; 6] = [
    "Casual", "Formal", "Streetwear", "Vintage", "Minimalist", "Bohemian",
];

pub const SUSTAINABILITY_LEVELS: [&str; 3] = ["Low", "Medium", "High"];

/// Placeholder image URLs keyed by category.
pub fn image_urls(category: &str) -> &'static [&'static str] {
    match category {
        "Clothing" => &[
            "https://picsum.photos/400/600?category=clothing&id=1",
            "https://picsum.photos/400/600?category=clothing&id=2",
            "https://picsum.photos/400/600?category=clothing&id=3",
        ],
        "Shoes" => &[
            "https://picsum.photos/400/600?category=shoes&id=1",
            "https://picsum.photos/400/600?category=shoes&id=2",
        ],
        "Accessories" => &[
            "https://picsum.photos/400/600?category=accessories&id=1",
            "https://picsum.photos/400/600?category=accessories&id=2",
        ],
        "Bags" => &[
            "https://picsum.photos/400/600?category=bags&id=1",
            "https://picsum.photos/400/600?category=bags&id=2",
        ],
        "Jewelry" => &[
            "https://picsum.photos/400/600?category=jewelry&id=1",
            "https://picsum.photos/400/600?category=jewelry&id=2",
        ],
        "Sportswear" => &[
            "https://picsum.photos/400/600?category=sportswear&id=1",
            "https://picsum.photos/400/600?category=sportswear&id=2",
        ],
        "Vintage" => &[
            "https://picsum.photos/400/600?category=vintage&id=1",
            "https://picsum.photos/400/600?category=vintage&id=2",
        ],
        "Luxury" => &[
            "https://picsum.photos/400/600?category=luxury&id=1",
            "https://picsum.photos/400/600?category=luxury&id=2",
        ],
        "Streetwear" => &[
            "https://picsum.photos/400/600?category=streetwear&id=1",
            "https://picsum.photos/400/600?category=streetwear&id=2",
        ],
        "Formal" => &[
            "https://picsum.photos/400/600?category=formal&id=1",
            "https://picsum.photos/400/600?category=formal&id=2",
        ],
        _ => &["https://picsum.photos/400/600"],
    }
}
