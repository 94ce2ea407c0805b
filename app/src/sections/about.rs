use leptos::prelude::*;

const ABOUT_IMAGE_URL: &str = "https://images.unsplash.com/photo-1598454226955-520e7e1e1a53?q=80&w=1964&auto=format&fit=crop";

/// Brand story next to a product still life.
#[component]
pub fn AboutSection() -> impl IntoView {
    view! {
      <section id="about" class="elysian-section elysian-section--ivory">
        <div class="elysian-container elysian-grid elysian-grid--two elysian-about">
          <div class="elysian-about__text">
            <h2 class="elysian-heading font-serif">"Where Elegance Meets Efficacy."</h2>
            <p class="elysian-about__paragraph">
              "At Elysian, we believe that skincare is an act of self-love. Our philosophy is built on the harmony of nature and science. We meticulously select pure, potent botanicals and combine them with clinically-proven actives to create formulas that are both gentle and effective."
            </p>
            <p class="elysian-about__paragraph">
              "We are committed to transparency, sustainability, and creating products that not only nurture your skin but also honor the planet. Every bottle is a promise of quality, purity, and undeniable results."
            </p>
            <a href="#shop" class="elysian-button elysian-button--sage">
              "Explore Our Products"
            </a>
          </div>
          <div class="elysian-about__media">
            <img src=ABOUT_IMAGE_URL alt="Natural ingredients in a bowl" class="elysian-about__image" />
          </div>
        </div>
      </section>
    }
}
