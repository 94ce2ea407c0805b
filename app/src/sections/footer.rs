use chrono::{Datelike, Utc};
use leptos::prelude::*;

use super::icons::{FacebookIcon, InstagramIcon, TwitterIcon};

const SHOP_LINKS: [(&str, &str); 3] = [
    ("All Products", "#shop"),
    ("Bestsellers", "#shop"),
    ("Kits & Bundles", "#shop"),
];

const ABOUT_LINKS: [(&str, &str); 3] = [
    ("Our Story", "#about"),
    ("Contact Us", "#contact"),
    ("FAQs", "#"),
];

/// Titled list of footer links.
#[component]
fn LinkColumn(
    /// Column heading.
    title: &'static str,
    /// `(label, href)` pairs in display order.
    links: &'static [(&'static str, &'static str)],
) -> impl IntoView {
    view! {
      <div>
        <h4 class="elysian-footer__heading">{title}</h4>
        <ul class="elysian-footer__list">
          {links
            .iter()
            .map(|(label, href)| {
              view! {
                <li>
                  <a href=*href class="elysian-footer__link">
                    {*label}
                  </a>
                </li>
              }
            })
            .collect_view()}
        </ul>
      </div>
    }
}

/// Footer with link columns and the newsletter form.
///
/// Social links and the newsletter form are placeholders: the form has no
/// submit handler.
#[component]
pub fn Footer() -> impl IntoView {
    let year = Utc::now().year();

    view! {
      <footer class="elysian-footer">
        <div class="elysian-container">
          <div class="elysian-grid elysian-grid--four">
            <div>
              <h3 class="elysian-footer__brand font-serif">"Elysian"</h3>
              <p class="elysian-footer__tagline">"Pure ingredients, elegant formulas."</p>
              <div class="elysian-footer__social">
                <a href="#" class="elysian-footer__link" aria-label="Instagram">
                  <InstagramIcon size=20 />
                </a>
                <a href="#" class="elysian-footer__link" aria-label="Facebook">
                  <FacebookIcon size=20 />
                </a>
                <a href="#" class="elysian-footer__link" aria-label="Twitter">
                  <TwitterIcon size=20 />
                </a>
              </div>
            </div>
            <LinkColumn title="Shop" links=&SHOP_LINKS />
            <LinkColumn title="About" links=&ABOUT_LINKS />
            <div>
              <h4 class="elysian-footer__heading">"Stay In Touch"</h4>
              <p class="elysian-footer__tagline">
                "Join our newsletter for exclusive offers and skincare secrets."
              </p>
              <form class="elysian-newsletter">
                <input
                  type="email"
                  name="email"
                  placeholder="Your email"
                  aria-label="Email address"
                  class="elysian-newsletter__input"
                />
                <button type="submit" class="elysian-newsletter__submit" aria-label="Subscribe">
                  "\u{2192}"
                </button>
              </form>
            </div>
          </div>
          <div class="elysian-footer__legal">
            <p>{format!("\u{a9} {year} Elysian Skincare. All Rights Reserved.")}</p>
          </div>
        </div>
      </footer>
    }
}
