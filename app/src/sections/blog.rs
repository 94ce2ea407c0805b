use leptos::prelude::*;

use crate::catalog::Catalog;

/// Journal teasers. "Read More" links are placeholders.
#[component]
pub fn BlogSection() -> impl IntoView {
    let posts = expect_context::<Catalog>().blog_posts();

    view! {
      <section id="blog" class="elysian-section elysian-section--ivory">
        <div class="elysian-container">
          <div class="elysian-center">
            <h2 class="elysian-heading font-serif">"From Our Journal"</h2>
            <p class="elysian-lede">
              "Skincare tips, ingredient spotlights, and our thoughts on conscious beauty."
            </p>
          </div>
          <div class="elysian-grid elysian-grid--three">
            {posts
              .iter()
              .map(|post| {
                view! {
                  <article class="elysian-post">
                    <div class="elysian-post__media">
                      <img src=post.image_url alt=post.title class="elysian-post__image" />
                    </div>
                    <div class="elysian-post__body">
                      <span class="elysian-post__category">{post.category}</span>
                      <h3 class="elysian-post__title font-serif">{post.title}</h3>
                      <p class="elysian-post__excerpt">{post.excerpt}</p>
                      <a href="#" class="elysian-post__link">
                        "Read More \u{2192}"
                      </a>
                    </div>
                  </article>
                }
              })
              .collect_view()}
          </div>
        </div>
      </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sections::test_support::render;

    #[test]
    fn test_renders_every_post() {
        let html = render(|| view! { <BlogSection /> });
        assert_eq!(html.matches("class=\"elysian-post\"").count(), 3);
        assert!(html.contains("Ingredient Spotlight"));
        assert!(html.contains("Beyond the Bottle: How Diet Affects Your Skin"));
    }
}
