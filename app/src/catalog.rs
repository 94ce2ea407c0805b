//! Static storefront content.
//!
//! Everything the page displays is compiled in as constant tables. The
//! [`Catalog`] handle is provided once through Leptos context by `App` and
//! read by the sections, so no section reaches for a global directly.

use std::fmt;

use rust_decimal::Decimal;

/// Number of leading catalog entries shown as bestsellers.
pub const BESTSELLER_COUNT: usize = 4;

/// Product category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Cleanser,
    Serum,
    Moisturizer,
}

impl Category {
    /// Lowercase identifier, as used in filter buttons.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Cleanser => "cleanser",
            Self::Serum => "serum",
            Self::Moisturizer => "moisturizer",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A product in the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Product {
    /// Unique product id.
    pub id: u32,
    /// Display name.
    pub name: &'static str,
    /// Price in US dollars.
    pub price: Decimal,
    /// Category used by the shop filter.
    pub category: Category,
    /// Product photo.
    pub image_url: &'static str,
}

impl Product {
    /// Price formatted for display, e.g. `$45.00`.
    pub fn display_price(&self) -> String {
        format!("${:.2}", self.price)
    }
}

/// A journal entry teaser.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlogPost {
    /// Unique post id.
    pub id: u32,
    /// Topic label shown above the title.
    pub category: &'static str,
    /// Post title.
    pub title: &'static str,
    /// One-sentence teaser.
    pub excerpt: &'static str,
    /// Cover photo.
    pub image_url: &'static str,
}

/// One slide of the hero carousel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeroSlide {
    /// Headline.
    pub title: &'static str,
    /// Line under the headline.
    pub subtitle: &'static str,
    /// Call-to-action label.
    pub button_text: &'static str,
    /// In-page anchor, e.g. `#shop`.
    pub button_link: &'static str,
    /// Full-bleed background photo.
    pub image_url: &'static str,
}

/// Overlay colour of a promotional panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromoTone {
    Sage,
    Gold,
}

impl PromoTone {
    /// Modifier class selecting the overlay colour.
    pub const fn class(self) -> &'static str {
        match self {
            Self::Sage => "elysian-promo--sage",
            Self::Gold => "elysian-promo--gold",
        }
    }
}

/// A promotional panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PromoBanner {
    /// Panel heading.
    pub title: &'static str,
    /// Short paragraph under the heading.
    pub body: &'static str,
    /// Call-to-action label.
    pub cta_text: &'static str,
    /// In-page anchor the call to action points at.
    pub cta_link: &'static str,
    /// Background photo.
    pub image_url: &'static str,
    /// Alt text for the photo.
    pub image_alt: &'static str,
    /// Overlay colour.
    pub tone: PromoTone,
}

const fn usd(cents: u32) -> Decimal {
    Decimal::from_parts(cents, 0, 0, false, 2)
}

pub static PRODUCTS: [Product; 7] = [
    Product {
        id: 1,
        name: "Hydrating Serum",
        price: usd(4500),
        category: Category::Serum,
        image_url: "https://images.unsplash.com/photo-1629198735660-e39ea93f5a4a?q=80&w=1964&auto=format&fit=crop",
    },
    Product {
        id: 2,
        name: "Gentle Cleanser",
        price: usd(2800),
        category: Category::Cleanser,
        image_url: "https://images.unsplash.com/photo-1625708458529-6e67653c4ee2?q=80&w=1935&auto=format&fit=crop",
    },
    Product {
        id: 3,
        name: "Daily Moisturizer",
        price: usd(3800),
        category: Category::Moisturizer,
        image_url: "https://images.unsplash.com/photo-1620916566398-39f168a2b53b?q=80&w=1964&auto=format&fit=crop",
    },
    Product {
        id: 4,
        name: "Revitalizing Eye Cream",
        price: usd(3500),
        category: Category::Moisturizer,
        image_url: "https://images.unsplash.com/photo-1600854746242-b85c18a4a58c?q=80&w=1964&auto=format&fit=crop",
    },
    Product {
        id: 5,
        name: "Vitamin C Serum",
        price: usd(5200),
        category: Category::Serum,
        image_url: "https://images.unsplash.com/photo-1605259416598-14a57ac8026b?q=80&w=1965&auto=format&fit=crop",
    },
    Product {
        id: 6,
        name: "Renewal Night Cream",
        price: usd(4800),
        category: Category::Moisturizer,
        image_url: "https://images.unsplash.com/photo-1620916566398-39f168a2b53b?q=80&w=1964&auto=format&fit=crop",
    },
    Product {
        id: 7,
        name: "Exfoliating Cleanser",
        price: usd(3200),
        category: Category::Cleanser,
        image_url: "https://images.unsplash.com/photo-1628090798311-63954a706132?q=80&w=1964&auto=format&fit=crop",
    },
];

pub static BLOG_POSTS: [BlogPost; 3] = [
    BlogPost {
        id: 1,
        category: "Skincare Tips",
        title: "The 5-Step Morning Routine for a Luminous Glow",
        excerpt: "Start your day right with these essential steps to protect and nourish your skin from dawn till dusk.",
        image_url: "https://images.unsplash.com/photo-1556228724-4da56e9c18a2?q=80&w=1935&auto=format&fit=crop",
    },
    BlogPost {
        id: 2,
        category: "Ingredient Spotlight",
        title: "Hyaluronic Acid: Nature's Moisture Magnet",
        excerpt: "Dive deep into the science behind one of skincare's most beloved ingredients and how it works.",
        image_url: "https://images.unsplash.com/photo-1604251028168-3335a0cf5b2d?q=80&w=1964&auto=format&fit=crop",
    },
    BlogPost {
        id: 3,
        category: "Wellness",
        title: "Beyond the Bottle: How Diet Affects Your Skin",
        excerpt: "True radiance comes from within. Explore the best foods for healthy, glowing skin.",
        image_url: "https://images.unsplash.com/photo-1540420773420-2850a43d24a5?q=80&w=1964&auto=format&fit=crop",
    },
];

pub static HERO_SLIDES: [HeroSlide; 2] = [
    HeroSlide {
        title: "Discover Your Natural Radiance",
        subtitle: "Pure ingredients, elegant formulas. Skincare that understands you.",
        button_text: "Shop Now",
        button_link: "#shop",
        image_url: "https://images.unsplash.com/photo-1590439471364-192aa70c0b23?q=80&w=1974&auto=format&fit=crop",
    },
    HeroSlide {
        title: "The Essence of Purity",
        subtitle: "Ethically sourced, scientifically proven. Elevate your daily ritual.",
        button_text: "Our Philosophy",
        button_link: "#about",
        image_url: "https://images.unsplash.com/photo-1556228720-195a672e8a03?q=80&w=1935&auto=format&fit=crop",
    },
];

pub static PROMO_BANNERS: [PromoBanner; 2] = [
    PromoBanner {
        title: "Rooted in Nature",
        body: "Discover the power of our ethically-sourced, natural ingredients.",
        cta_text: "Learn More",
        cta_link: "#about",
        image_url: "https://images.unsplash.com/photo-1596791882614-b4a53072236a?q=80&w=2070&auto=format&fit=crop",
        image_alt: "Natural Ingredients",
        tone: PromoTone::Sage,
    },
    PromoBanner {
        title: "Summer Glow Kit",
        body: "Get 15% off our curated collection of summer essentials.",
        cta_text: "Shop The Kit",
        cta_link: "#shop",
        image_url: "https://images.unsplash.com/photo-1522202685239-4458d511112b?q=80&w=1964&auto=format&fit=crop",
        image_alt: "Summer Glow Kit",
        tone: PromoTone::Gold,
    },
];

/// Read-only view over the storefront tables.
#[derive(Debug, Clone, Copy)]
pub struct Catalog {
    products: &'static [Product],
    blog_posts: &'static [BlogPost],
    hero_slides: &'static [HeroSlide],
    promo_banners: &'static [PromoBanner],
}

impl Catalog {
    /// The compiled-in storefront content.
    pub fn builtin() -> Self {
        Self {
            products: &PRODUCTS,
            blog_posts: &BLOG_POSTS,
            hero_slides: &HERO_SLIDES,
            promo_banners: &PROMO_BANNERS,
        }
    }

    pub fn products(&self) -> &'static [Product] {
        self.products
    }

    /// The first [`BESTSELLER_COUNT`] products, in catalog order.
    pub fn bestsellers(&self) -> &'static [Product] {
        let end = self.products.len().min(BESTSELLER_COUNT);
        &self.products[..end]
    }

    pub fn blog_posts(&self) -> &'static [BlogPost] {
        self.blog_posts
    }

    pub fn hero_slides(&self) -> &'static [HeroSlide] {
        self.hero_slides
    }

    pub fn promo_banners(&self) -> &'static [PromoBanner] {
        self.promo_banners
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}
