use leptos::prelude::*;

use crate::{
    carousel::{Carousel, SLIDE_INTERVAL},
    catalog::Catalog,
};

/// Full-height hero carousel.
///
/// Advances every [`SLIDE_INTERVAL`] while mounted. A dot click jumps to its
/// slide; the running timer keeps its cadence and advances from there.
#[component]
pub fn HomeSection() -> impl IntoView {
    let slides = expect_context::<Catalog>().hero_slides();
    let carousel = RwSignal::new(Carousel::new(slides.len()));

    Effect::new(move |_| {
        let tick = move || carousel.update(Carousel::advance);
        match set_interval_with_handle(tick, SLIDE_INTERVAL) {
            Ok(handle) => on_cleanup(move || handle.clear()),
            Err(err) => log::warn!("carousel timer unavailable: {err:?}"),
        }
    });

    view! {
      <section id="home" class="elysian-hero">
        {slides
          .iter()
          .enumerate()
          .map(|(index, slide)| {
            view! {
              <div
                class="elysian-hero__slide"
                style:opacity=move || carousel.get().opacity(index).to_string()
                aria-hidden=move || (!carousel.get().is_active(index)).to_string()
              >
                <img src=slide.image_url alt=slide.title class="elysian-hero__image" />
                <div class="elysian-hero__shade"></div>
                <div class="elysian-hero__content">
                  <h1 class="elysian-hero__title font-serif">{slide.title}</h1>
                  <p class="elysian-hero__subtitle font-sans">{slide.subtitle}</p>
                  <a href=slide.button_link class="elysian-button elysian-button--gold">
                    {slide.button_text}
                  </a>
                </div>
              </div>
            }
          })
          .collect_view()}

        <div class="elysian-hero__dots">
          {(0..slides.len())
            .map(|index| {
              let dot_class = move || {
                if carousel.get().is_active(index) {
                  "elysian-hero__dot elysian-hero__dot--active"
                } else {
                  "elysian-hero__dot"
                }
              };
              view! {
                <button
                  type="button"
                  class=dot_class
                  aria-label=format!("Show slide {}", index + 1)
                  on:click=move |_| {
                    carousel
                      .update(|c| {
                        if c.select(index) {
                          log::debug!("hero slide selected: {index}");
                        }
                      })
                  }
                ></button>
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
    fn test_first_slide_is_the_only_visible_one() {
        let html = render(|| view! { <HomeSection /> });
        assert!(html.contains("id=\"home\""));
        assert_eq!(html.matches("opacity:1;").count(), 1);
        assert_eq!(html.matches("opacity:0;").count(), 1);
        assert!(html.find("opacity:1;") < html.find("opacity:0;"));
        assert_eq!(html.matches("aria-hidden=\"false\"").count(), 1);
    }

    #[test]
    fn test_one_dot_per_slide_with_first_active() {
        let html = render(|| view! { <HomeSection /> });
        let active = "class=\"elysian-hero__dot elysian-hero__dot--active\"";
        assert_eq!(html.matches(active).count(), 1);
        assert_eq!(html.matches("class=\"elysian-hero__dot\"").count(), 1);
        assert!(html.find(active) < html.find("class=\"elysian-hero__dot\""));
        assert!(html.contains("aria-label=\"Show slide 1\""));
        assert!(html.contains("aria-label=\"Show slide 2\""));
    }

    #[test]
    fn test_slides_render_catalog_content() {
        let html = render(|| view! { <HomeSection /> });
        for slide in Catalog::builtin().hero_slides() {
            assert!(html.contains(slide.title), "missing {}", slide.title);
            assert!(html.contains(&format!("href=\"{}\"", slide.button_link)));
        }
    }
}
