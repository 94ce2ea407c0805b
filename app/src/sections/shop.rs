use leptos::prelude::*;

use super::ProductCard;
use crate::{catalog::Catalog, filter::CategoryFilter};

/// Product grid with single-select category filter buttons.
#[component]
pub fn ShopSection(
    /// Filter selected when the section mounts.
    #[prop(optional)]
    initial: CategoryFilter,
) -> impl IntoView {
    let catalog = expect_context::<Catalog>();
    let filter = RwSignal::new(initial);
    let visible = Memo::new(move |_| filter.get().apply(catalog.products()));

    view! {
      <section id="shop" class="elysian-section elysian-section--ivory-soft">
        <div class="elysian-container">
          <div class="elysian-center">
            <h2 class="elysian-heading font-serif">"Complete Your Ritual"</h2>
            <p class="elysian-lede">
              "Find the perfect additions to your skincare routine, crafted for every skin type."
            </p>
          </div>

          <div class="elysian-filters" role="group" aria-label="Filter products by category">
            {CategoryFilter::ALL
              .into_iter()
              .map(|option| {
                let is_selected = move || filter.get() == option;
                view! {
                  <button
                    type="button"
                    class=move || {
                      if is_selected() {
                        "elysian-filter elysian-filter--active"
                      } else {
                        "elysian-filter"
                      }
                    }
                    aria-pressed=move || is_selected().to_string()
                    on:click=move |_| {
                      if filter.get_untracked() != option {
                        log::debug!("shop filter: {}", option.label());
                        filter.set(option);
                      }
                    }
                  >
                    {option.label()}
                  </button>
                }
              })
              .collect_view()}
          </div>

          <div class="elysian-grid elysian-grid--four">
            <For
              each=move || visible.get()
              key=|product| product.id
              children=move |product| view! { <ProductCard product=product /> }
            />
          </div>
        </div>
      </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        catalog::Category,
        sections::test_support::{card_count, render},
    };

    #[test]
    fn test_defaults_to_all_products() {
        let html = render(|| view! { <ShopSection /> });
        assert_eq!(card_count(&html), 7);
        assert!(html.contains("id=\"shop\""));
    }

    #[test]
    fn test_renders_four_filter_buttons_with_all_active() {
        let html = render(|| view! { <ShopSection /> });
        assert_eq!(html.matches("class=\"elysian-filter elysian-filter--active\"").count(), 1);
        assert_eq!(html.matches("class=\"elysian-filter\"").count(), 3);
        for label in ["all", "cleanser", "serum", "moisturizer"] {
            assert!(html.contains(&format!(">{label}</button>")), "missing {label}");
        }
    }

    #[test]
    fn test_initial_filter_limits_grid() {
        let cases = [
            (CategoryFilter::Only(Category::Cleanser), 2),
            (CategoryFilter::Only(Category::Serum), 2),
            (CategoryFilter::Only(Category::Moisturizer), 3),
        ];
        for (initial, expected) in cases {
            let html = render(move || view! { <ShopSection initial=initial /> });
            assert_eq!(card_count(&html), expected, "filter {}", initial.label());
        }
    }

    #[test]
    fn test_serum_filter_hides_other_categories() {
        let serum = CategoryFilter::Only(Category::Serum);
        let html = render(move || view! { <ShopSection initial=serum /> });
        assert!(html.contains("Hydrating Serum"));
        assert!(html.contains("Vitamin C Serum"));
        assert!(!html.contains("Gentle Cleanser"));
        assert!(!html.contains("Daily Moisturizer"));
    }
}
