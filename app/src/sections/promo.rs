use leptos::prelude::*;

use crate::catalog::Catalog;

/// Two side-by-side promotional panels.
#[component]
pub fn PromoBannersSection() -> impl IntoView {
    let banners = expect_context::<Catalog>().promo_banners();

    view! {
      <section class="elysian-section elysian-section--ivory-soft">
        <div class="elysian-container elysian-grid elysian-grid--two">
          {banners
            .iter()
            .map(|banner| {
              view! {
                <div class=format!("elysian-promo {}", banner.tone.class())>
                  <img src=banner.image_url alt=banner.image_alt class="elysian-promo__image" />
                  <div class="elysian-promo__overlay"></div>
                  <div class="elysian-promo__content">
                    <h3 class="elysian-promo__title font-serif">{banner.title}</h3>
                    <p class="elysian-promo__body">{banner.body}</p>
                    <a href=banner.cta_link class="elysian-button elysian-button--outline">
                      {banner.cta_text}
                    </a>
                  </div>
                </div>
              }
            })
            .collect_view()}
        </div>
      </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sections::test_support::render;

    #[test]
    fn test_renders_both_panels_with_links() {
        let html = render(|| view! { <PromoBannersSection /> });
        assert!(html.contains("Rooted in Nature"));
        assert!(html.contains("Summer Glow Kit"));
        assert!(html.contains("elysian-promo--sage"));
        assert!(html.contains("elysian-promo--gold"));
        assert!(html.contains("href=\"#about\""));
        assert!(html.contains("href=\"#shop\""));
    }
}
