use leptos::prelude::*;

use super::ProductCard;
use crate::catalog::Catalog;

/// The first catalog entries. Independent of the shop filter.
#[component]
pub fn BestsellersSection() -> impl IntoView {
    let products = expect_context::<Catalog>().bestsellers();

    view! {
      <section id="bestsellers" class="elysian-section elysian-section--ivory">
        <div class="elysian-container elysian-center">
          <h2 class="elysian-heading font-serif">"Our Bestsellers"</h2>
          <p class="elysian-lede">
            "Loved by our community, these are the essentials for a radiant complexion."
          </p>
          <div class="elysian-grid elysian-grid--four">
            {products
              .iter()
              .map(|product| view! { <ProductCard product=*product /> })
              .collect_view()}
          </div>
        </div>
      </section>
    }
}
