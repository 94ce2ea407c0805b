//! Brand web fonts.
//!
//! The page loads Playfair Display and Inter by appending two nodes to the
//! document `<head>`: a Google Fonts stylesheet link and a small inline style
//! block binding the `.font-serif` / `.font-sans` classes. [`FontGuard`] owns
//! both nodes and removes exactly those two when dropped, whatever tears the
//! page down. The head itself is abstracted behind [`DocumentHead`] so the
//! acquire/release contract does not depend on a browser.

use leptos::prelude::*;
use send_wrapper::SendWrapper;

use crate::error::{HeadError, Result};

/// Google Fonts stylesheet for the brand typefaces.
pub const FONT_STYLESHEET_URL: &str = "https://fonts.googleapis.com/css2?family=Playfair+Display:wght@400;500;600;700&family=Inter:wght@300;400;500;600&display=swap";

/// Class bindings for the brand typefaces.
pub const FONT_FACE_CSS: &str = "
.font-serif { font-family: 'Playfair Display', serif; }
.font-sans { font-family: 'Inter', sans-serif; }
";

/// A place nodes can be appended to and removed from.
pub trait DocumentHead {
    /// Handle to an appended node.
    type Node;

    /// Append `<link rel="stylesheet" href=…>`.
    fn append_stylesheet(&mut self, href: &str) -> Result<Self::Node>;

    /// Append `<style>` with the given text.
    fn append_style(&mut self, css: &str) -> Result<Self::Node>;

    /// Remove a node previously returned by this head.
    fn remove(&mut self, node: &Self::Node) -> Result<()>;
}

/// Holds the two font nodes for as long as it lives.
pub struct FontGuard<H: DocumentHead> {
    head: H,
    link: H::Node,
    style: H::Node,
}

impl<H: DocumentHead> FontGuard<H> {
    /// Append the stylesheet link and the style block.
    ///
    /// If the style block cannot be appended, the link is removed again
    /// before the error is returned.
    pub fn acquire(mut head: H) -> Result<Self> {
        let link = head.append_stylesheet(FONT_STYLESHEET_URL)?;
        match head.append_style(FONT_FACE_CSS) {
            Ok(style) => Ok(Self { head, link, style }),
            Err(err) => {
                if let Err(remove_err) = head.remove(&link) {
                    log::warn!("failed to roll back font stylesheet: {remove_err}");
                }
                Err(err)
            }
        }
    }
}

impl<H: DocumentHead> Drop for FontGuard<H> {
    fn drop(&mut self) {
        for node in [&self.style, &self.link] {
            if let Err(err) = self.head.remove(node) {
                log::warn!("failed to remove font node: {err}");
            }
        }
    }
}

/// The live document `<head>`.
pub struct BrowserHead {
    document: web_sys::Document,
    head: web_sys::HtmlHeadElement,
}

impl BrowserHead {
    /// The head of the current window's document.
    pub fn current() -> Result<Self> {
        let document = web_sys::window()
            .and_then(|window| window.document())
            .ok_or(HeadError::NoDocument)?;
        let head = document.head().ok_or(HeadError::NoHead)?;
        Ok(Self { document, head })
    }

    fn append(&self, element: &web_sys::Element) -> Result<()> {
        self.head.append_child(element)?;
        Ok(())
    }
}

impl DocumentHead for BrowserHead {
    type Node = web_sys::Element;

    fn append_stylesheet(&mut self, href: &str) -> Result<Self::Node> {
        let link = self.document.create_element("link")?;
        link.set_attribute("rel", "stylesheet")?;
        link.set_attribute("href", href)?;
        self.append(&link)?;
        Ok(link)
    }

    fn append_style(&mut self, css: &str) -> Result<Self::Node> {
        let style = self.document.create_element("style")?;
        style.set_text_content(Some(css));
        self.append(&style)?;
        Ok(style)
    }

    fn remove(&mut self, node: &Self::Node) -> Result<()> {
        node.remove();
        Ok(())
    }
}

/// Inject the brand fonts while the calling component is mounted.
///
/// Runs in a client-side effect only; server rendering never touches the DOM.
pub fn use_brand_fonts() {
    Effect::new(move |_| match BrowserHead::current().and_then(FontGuard::acquire) {
        Ok(guard) => {
            log::debug!("brand fonts injected");
            let guard = SendWrapper::new(guard);
            on_cleanup(move || {
                drop(guard);
                log::debug!("brand fonts removed");
            });
        }
        Err(err) => log::warn!("brand fonts unavailable: {err}"),
    });
}
