//! Built-in sample dataset for the demo storefront.
//!
//! Mirrors the mock catalog the product demo ships with: 8 restaurants,
//! 8 browse categories, and menus for the first three restaurants.

use std::collections::HashMap;

use quickbite_core::{CategoryId, MenuItemId, Price, RestaurantId};

use super::{Catalog, Category, MenuItem, Restaurant};

struct RestaurantSpec {
    id: &'static str,
    name: &'static str,
    image: &'static str,
    rating: f32,
    delivery_time: u32,
    cost_for_two: i64,
    cuisines: &'static [&'static str],
    is_veg: bool,
    offers: &'static [&'static str],
    distance_km: f32,
}

struct MenuItemSpec {
    id: &'static str,
    name: &'static str,
    description: &'static str,
    price: i64,
    image: Option<&'static str>,
    is_veg: bool,
    rating: f32,
    category: &'static str,
    is_popular: bool,
}

const RESTAURANTS: &[RestaurantSpec] = &[
    RestaurantSpec {
        id: "1",
        name: "Biryani Blues",
        image: "https://images.unsplash.com/photo-1563379091339-03246963d51a?w=400",
        rating: 4.3,
        delivery_time: 35,
        cost_for_two: 400,
        cuisines: &["Biryani", "North Indian", "Mughlai"],
        is_veg: false,
        offers: &["50% OFF up to ₹100"],
        distance_km: 2.1,
    },
    RestaurantSpec {
        id: "2",
        name: "Pizza Palace",
        image: "https://images.unsplash.com/photo-1513104890138-7c749659a591?w=400",
        rating: 4.1,
        delivery_time: 25,
        cost_for_two: 600,
        cuisines: &["Pizza", "Italian", "Fast Food"],
        is_veg: false,
        offers: &["Buy 1 Get 1 Free"],
        distance_km: 1.5,
    },
    RestaurantSpec {
        id: "3",
        name: "Green Garden",
        image: "https://images.unsplash.com/photo-1512621776951-a57141f2eefd?w=400",
        rating: 4.5,
        delivery_time: 30,
        cost_for_two: 350,
        cuisines: &["South Indian", "Vegetarian", "Healthy"],
        is_veg: true,
        offers: &["20% OFF"],
        distance_km: 3.2,
    },
    RestaurantSpec {
        id: "4",
        name: "Burger Junction",
        image: "https://images.unsplash.com/photo-1571091718767-18b5b1457add?w=400",
        rating: 4.0,
        delivery_time: 20,
        cost_for_two: 300,
        cuisines: &["Burgers", "American", "Fast Food"],
        is_veg: false,
        offers: &["Free Delivery"],
        distance_km: 1.8,
    },
    RestaurantSpec {
        id: "5",
        name: "Dosa Corner",
        image: "https://images.unsplash.com/photo-1589301760014-d929f3979dbc?w=400",
        rating: 4.2,
        delivery_time: 28,
        cost_for_two: 250,
        cuisines: &["South Indian", "Dosa", "Breakfast"],
        is_veg: true,
        offers: &["30% OFF up to ₹75"],
        distance_km: 2.5,
    },
    RestaurantSpec {
        id: "6",
        name: "Tandoor Express",
        image: "https://images.unsplash.com/photo-1585937421612-70a008356fbe?w=400",
        rating: 4.4,
        delivery_time: 40,
        cost_for_two: 500,
        cuisines: &["North Indian", "Tandoor", "Punjabi"],
        is_veg: false,
        offers: &["₹125 OFF above ₹499"],
        distance_km: 4.1,
    },
    RestaurantSpec {
        id: "7",
        name: "Sweet Treats",
        image: "https://images.unsplash.com/photo-1578985545062-69928b1d9587?w=400",
        rating: 4.6,
        delivery_time: 15,
        cost_for_two: 200,
        cuisines: &["Desserts", "Ice Cream", "Sweets"],
        is_veg: true,
        offers: &["Buy 2 Get 1 Free"],
        distance_km: 1.2,
    },
    RestaurantSpec {
        id: "8",
        name: "Chinese Dragon",
        image: "https://images.unsplash.com/photo-1582878826629-29b7ad1cdc43?w=400",
        rating: 3.9,
        delivery_time: 35,
        cost_for_two: 450,
        cuisines: &["Chinese", "Asian", "Noodles"],
        is_veg: false,
        offers: &["40% OFF up to ₹80"],
        distance_km: 3.8,
    },
];

const MENUS: &[(&str, &[MenuItemSpec])] = &[
    (
        "1", // Biryani Blues
        &[
            MenuItemSpec {
                id: "m1",
                name: "Chicken Biryani",
                description:
                    "Aromatic basmati rice cooked with tender chicken pieces and traditional spices",
                price: 299,
                image: Some("https://images.unsplash.com/photo-1563379091339-03246963d51a?w=300"),
                is_veg: false,
                rating: 4.5,
                category: "Biryani",
                is_popular: true,
            },
            MenuItemSpec {
                id: "m2",
                name: "Mutton Biryani",
                description: "Premium mutton pieces slow-cooked with fragrant basmati rice",
                price: 399,
                image: Some("https://images.unsplash.com/photo-1563379091339-03246963d51a?w=300"),
                is_veg: false,
                rating: 4.3,
                category: "Biryani",
                is_popular: false,
            },
            MenuItemSpec {
                id: "m3",
                name: "Veg Biryani",
                description: "Mixed vegetables and paneer cooked with aromatic rice and spices",
                price: 249,
                image: None,
                is_veg: true,
                rating: 4.1,
                category: "Biryani",
                is_popular: false,
            },
            MenuItemSpec {
                id: "m4",
                name: "Chicken Tikka",
                description: "Marinated chicken pieces grilled to perfection in tandoor",
                price: 199,
                image: None,
                is_veg: false,
                rating: 4.4,
                category: "Starters",
                is_popular: false,
            },
        ],
    ),
    (
        "2", // Pizza Palace
        &[
            MenuItemSpec {
                id: "m5",
                name: "Margherita Pizza",
                description: "Classic pizza with fresh mozzarella, tomato sauce, and basil",
                price: 299,
                image: Some("https://images.unsplash.com/photo-1513104890138-7c749659a591?w=300"),
                is_veg: true,
                rating: 4.2,
                category: "Pizza",
                is_popular: true,
            },
            MenuItemSpec {
                id: "m6",
                name: "Pepperoni Pizza",
                description: "Loaded with pepperoni, mozzarella cheese and tangy tomato sauce",
                price: 399,
                image: None,
                is_veg: false,
                rating: 4.3,
                category: "Pizza",
                is_popular: false,
            },
            MenuItemSpec {
                id: "m7",
                name: "Veggie Supreme",
                description: "Bell peppers, onions, mushrooms, olives with cheese",
                price: 349,
                image: None,
                is_veg: true,
                rating: 4.1,
                category: "Pizza",
                is_popular: false,
            },
        ],
    ),
    (
        "3", // Green Garden
        &[
            MenuItemSpec {
                id: "m8",
                name: "Masala Dosa",
                description: "Crispy dosa filled with spiced potato curry, served with chutney",
                price: 149,
                image: Some("https://images.unsplash.com/photo-1589301760014-d929f3979dbc?w=300"),
                is_veg: true,
                rating: 4.4,
                category: "South Indian",
                is_popular: true,
            },
            MenuItemSpec {
                id: "m9",
                name: "Idli Sambar",
                description: "Steamed rice cakes served with sambar and coconut chutney",
                price: 99,
                image: None,
                is_veg: true,
                rating: 4.2,
                category: "South Indian",
                is_popular: false,
            },
            MenuItemSpec {
                id: "m10",
                name: "Vada Pav",
                description: "Mumbai street food - spiced potato fritter in a bun",
                price: 79,
                image: None,
                is_veg: true,
                rating: 4.0,
                category: "Street Food",
                is_popular: false,
            },
        ],
    ),
];

const CATEGORIES: &[(&str, &str, &str, &str)] = &[
    (
        "biryani",
        "Biryani",
        "https://images.unsplash.com/photo-1563379091339-03246963d51a?w=200",
        "Aromatic rice dishes",
    ),
    (
        "pizza",
        "Pizza",
        "https://images.unsplash.com/photo-1513104890138-7c749659a591?w=200",
        "Italian favorites",
    ),
    (
        "burgers",
        "Burgers",
        "https://images.unsplash.com/photo-1571091718767-18b5b1457add?w=200",
        "Juicy burgers",
    ),
    (
        "south-indian",
        "South Indian",
        "https://images.unsplash.com/photo-1589301760014-d929f3979dbc?w=200",
        "Dosa, Idli & more",
    ),
    (
        "north-indian",
        "North Indian",
        "https://images.unsplash.com/photo-1585937421612-70a008356fbe?w=200",
        "Curry & tandoor",
    ),
    (
        "chinese",
        "Chinese",
        "https://images.unsplash.com/photo-1582878826629-29b7ad1cdc43?w=200",
        "Noodles & more",
    ),
    (
        "desserts",
        "Desserts",
        "https://images.unsplash.com/photo-1578985545062-69928b1d9587?w=200",
        "Sweet treats",
    ),
    (
        "healthy",
        "Healthy",
        "https://images.unsplash.com/photo-1512621776951-a57141f2eefd?w=200",
        "Nutritious meals",
    ),
];

impl RestaurantSpec {
    fn build(&self) -> Restaurant {
        Restaurant {
            id: RestaurantId::new(self.id),
            name: self.name.to_owned(),
            image: self.image.to_owned(),
            rating: self.rating,
            delivery_time: self.delivery_time,
            cost_for_two: Price::new(self.cost_for_two),
            cuisines: self.cuisines.iter().map(|&c| c.to_owned()).collect(),
            is_veg: self.is_veg,
            offers: self.offers.iter().map(|&o| o.to_owned()).collect(),
            distance_km: Some(self.distance_km),
        }
    }
}

impl MenuItemSpec {
    fn build(&self) -> MenuItem {
        MenuItem {
            id: MenuItemId::new(self.id),
            name: self.name.to_owned(),
            description: self.description.to_owned(),
            price: Price::new(self.price),
            image: self.image.map(str::to_owned),
            is_veg: self.is_veg,
            rating: Some(self.rating),
            category: self.category.to_owned(),
            is_popular: self.is_popular,
            customizations: Vec::new(),
        }
    }
}

/// Build the sample catalog.
pub(super) fn sample_catalog() -> Catalog {
    let restaurants = RESTAURANTS.iter().map(RestaurantSpec::build).collect();

    let menus: HashMap<_, _> = MENUS
        .iter()
        .map(|(restaurant_id, items)| {
            (
                RestaurantId::new(*restaurant_id),
                items.iter().map(MenuItemSpec::build).collect(),
            )
        })
        .collect();

    let categories = CATEGORIES
        .iter()
        .map(|&(id, name, image, description)| Category {
            id: CategoryId::new(id),
            name: name.to_owned(),
            image: image.to_owned(),
            description: Some(description.to_owned()),
        })
        .collect();

    Catalog::new(restaurants, menus, categories)
}
