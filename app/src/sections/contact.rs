use leptos::prelude::*;

use super::icons::MessageCircleIcon;

/// Customer support inbox.
pub const SUPPORT_EMAIL: &str = "support@elysian.com";
/// WhatsApp click-to-chat link.
pub const WHATSAPP_URL: &str = "https://wa.me/1234567890";

/// Support email and WhatsApp chat. The chat opens in a new tab.
#[component]
pub fn ContactSection() -> impl IntoView {
    view! {
      <section id="contact" class="elysian-section elysian-section--sage">
        <div class="elysian-container elysian-center">
          <h2 class="elysian-heading elysian-heading--light font-serif">"We are Here To Help"</h2>
          <p class="elysian-lede elysian-lede--light">
            "Have a question about your order, our products, or your skin? Our team of experts is ready to assist you."
          </p>
          <div class="elysian-contact__channels">
            <p>
              "Email us at: "
              <a href=format!("mailto:{SUPPORT_EMAIL}") class="elysian-contact__email">
                {SUPPORT_EMAIL}
              </a>
            </p>
            <a
              href=WHATSAPP_URL
              target="_blank"
              rel="noopener noreferrer"
              class="elysian-button elysian-button--gold elysian-contact__chat"
            >
              <MessageCircleIcon size=20 />
              <span>"Chat on WhatsApp"</span>
            </a>
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
    fn test_contact_links() {
        let html = render(|| view! { <ContactSection /> });
        assert!(html.contains("href=\"mailto:support@elysian.com\""));
        assert!(html.contains("href=\"https://wa.me/1234567890\""));
        assert!(html.contains("rel=\"noopener noreferrer\""));
        assert!(html.contains("target=\"_blank\""));
    }
}
