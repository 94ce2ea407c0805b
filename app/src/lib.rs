//! Elysian Skincare landing page.
//!
//! A single page rendered on the server and hydrated in the browser. All
//! content comes from the compiled-in [`catalog`]; the only state is local to
//! the section that owns it:
//!
//! - [`header`] - scroll elevation flag and mobile menu
//! - [`carousel`] - hero slide index, advanced by a timer
//! - [`filter`] - the shop's category filter
//! - [`fonts`] - brand web fonts held for as long as the page is mounted
//!
//! The view components live in [`sections`].

pub mod carousel;
pub mod catalog;
pub mod error;
pub mod filter;
pub mod fonts;
pub mod header;
pub mod sections;

use leptos::prelude::*;
use leptos_meta::{Meta, MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::{catalog::Catalog, fonts::use_brand_fonts, sections::*};

pub const SITE_TITLE: &str = "Elysian Skincare - Pure, Elegant, Natural";
pub const SITE_DESCRIPTION: &str = "Discover your natural radiance with Elysian Skincare. Pure ingredients, elegant formulas, and skincare that understands you.";

/// HTML document used for server rendering.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
      <!DOCTYPE html>
      <html lang="en">
        <head>
          <meta charset="utf-8" />
          <meta name="viewport" content="width=device-width, initial-scale=1" />
          <AutoReload options=options.clone() />
          <HydrationScripts options />
          <MetaTags />
        </head>
        <body>
          <App />
        </body>
      </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();
    provide_context(Catalog::builtin());

    view! {
      <Stylesheet id="leptos" href="/pkg/elysian.css" />
      <Title text=SITE_TITLE />
      <Meta name="description" content=SITE_DESCRIPTION />

      <Router>
        <Routes fallback=|| "Page not found.".into_view()>
          <Route path=StaticSegment("") view=HomePage />
        </Routes>
      </Router>
    }
}

/// The landing page: every section, top to bottom.
#[component]
fn HomePage() -> impl IntoView {
    use_brand_fonts();

    view! {
      <div class="elysian-page font-sans">
        <Header />
        <main>
          <HomeSection />
          <BestsellersSection />
          <PromoBannersSection />
          <AboutSection />
          <ShopSection />
          <BlogSection />
          <ContactSection />
        </main>
        <Footer />
      </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sections::test_support::{card_count, render};

    #[test]
    fn test_sections_are_independent() {
        // Bestsellers stay at four regardless of the shop's filter.
        let serum = filter::CategoryFilter::Only(catalog::Category::Serum);
        let html = render(move || {
            view! {
              <BestsellersSection />
              <ShopSection initial=serum />
            }
        });
        assert_eq!(card_count(&html), 4 + 2);
    }

    #[test]
    fn test_static_sections_expose_anchors() {
        let html = render(|| {
            view! {
              <AboutSection />
              <ShopSection />
              <BlogSection />
              <ContactSection />
            }
        });
        for anchor in ["about", "shop", "blog", "contact"] {
            assert!(html.contains(&format!("id=\"{anchor}\"")), "missing #{anchor}");
        }
    }

    #[test]
    fn test_nav_links_target_page_anchors() {
        let targets: Vec<&str> = NAV_LINKS.iter().map(|(_, href)| *href).collect();
        assert_eq!(targets, vec!["#home", "#about", "#shop", "#blog", "#contact"]);
    }
}
