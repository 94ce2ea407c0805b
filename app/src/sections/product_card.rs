use leptos::prelude::*;

use crate::catalog::Product;

/// Card with image, name, price and a decorative cart button.
#[component]
pub fn ProductCard(product: Product) -> impl IntoView {
    view! {
      <div class="elysian-card">
        <div class="elysian-card__media">
          <img src=product.image_url alt=product.name class="elysian-card__image" />
        </div>
        <h3 class="elysian-card__title font-serif">{product.name}</h3>
        <p class="elysian-card__price">{product.display_price()}</p>
        <button type="button" class="elysian-button elysian-button--sage elysian-card__cta">
          "Add to Cart"
        </button>
      </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{catalog::PRODUCTS, sections::test_support::render};

    #[test]
    fn test_card_shows_name_price_and_image() {
        let product = PRODUCTS[4];
        let html = render(move || view! { <ProductCard product=product /> });

        assert!(html.contains("Vitamin C Serum"));
        assert!(html.contains("$52.00"));
        assert!(html.contains("photo-1605259416598-14a57ac8026b"));
        assert!(html.contains("Add to Cart"));
    }
}
