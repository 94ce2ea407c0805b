use leptos::{ev, prelude::*};

use super::icons::{MenuIcon, SearchIcon, ShoppingBagIcon, UserIcon};
use crate::header::{MobileMenu, is_elevated};

/// In-page navigation targets, in display order.
pub const NAV_LINKS: [(&str, &str); 5] = [
    ("Home", "#home"),
    ("About", "#about"),
    ("Shop", "#shop"),
    ("Blog", "#blog"),
    ("Contact", "#contact"),
];

/// Sticky header with desktop nav, icon buttons and a mobile menu.
///
/// Gains a shadow once the page scrolls past the elevation threshold.
#[component]
pub fn Header() -> impl IntoView {
    let menu = RwSignal::new(MobileMenu::default());
    let elevated = RwSignal::new(false);

    Effect::new(move |_| {
        let update = move || {
            let next = is_elevated(window().scroll_y().unwrap_or(0.0));
            if elevated.get_untracked() != next {
                elevated.set(next);
            }
        };
        update();

        let handle = window_event_listener(ev::scroll, move |_| update());
        on_cleanup(move || handle.remove());
    });

    let header_class = move || {
        if elevated.get() {
            "elysian-header elysian-header--elevated"
        } else {
            "elysian-header"
        }
    };

    let toggle_menu = move |_| {
        menu.update(MobileMenu::toggle);
        log::debug!("mobile menu open: {}", menu.get_untracked().is_open());
    };

    view! {
      <header class=header_class>
        <nav class="elysian-container elysian-header__bar">
          <a href="#home" class="elysian-header__brand font-serif">
            "Elysian"
          </a>

          <div class="elysian-header__links">
            {NAV_LINKS
              .iter()
              .map(|(label, href)| {
                view! {
                  <a href=*href class="elysian-header__link">
                    {*label}
                  </a>
                }
              })
              .collect_view()}
          </div>

          <div class="elysian-header__actions">
            <button type="button" class="elysian-header__icon" aria-label="Search">
              <SearchIcon />
            </button>
            <button type="button" class="elysian-header__icon" aria-label="Account">
              <UserIcon />
            </button>
            <button type="button" class="elysian-header__icon" aria-label="Shopping bag">
              <ShoppingBagIcon />
            </button>
          </div>

          <button
            type="button"
            class="elysian-header__menu-toggle"
            aria-label="Toggle menu"
            aria-expanded=move || menu.get().is_open().to_string()
            on:click=toggle_menu
          >
            <MenuIcon />
          </button>
        </nav>

        <Show when=move || menu.get().is_open()>
          // Any click inside the panel, links included, closes it.
          <div class="elysian-header__mobile" on:click=move |_| menu.update(MobileMenu::close)>
            {NAV_LINKS
              .iter()
              .map(|(label, href)| {
                view! {
                  <a href=*href class="elysian-header__mobile-link">
                    {*label}
                  </a>
                }
              })
              .collect_view()}
          </div>
        </Show>
      </header>
    }
}
