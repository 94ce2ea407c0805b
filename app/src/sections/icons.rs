//! Inline stroke icons (Lucide geometry), sized in CSS pixels.

use leptos::prelude::*;

#[component]
fn IconFrame(size: u32, children: Children) -> impl IntoView {
    let size = size.to_string();
    view! {
      <svg
        xmlns="http://www.w3.org/2000/svg"
        width=size.clone()
        height=size
        viewBox="0 0 24 24"
        fill="none"
        stroke="currentColor"
        stroke-width="2"
        stroke-linecap="round"
        stroke-linejoin="round"
        aria-hidden="true"
      >
        {children()}
      </svg>
    }
}

#[component]
pub fn SearchIcon(#[prop(default = 24)] size: u32) -> impl IntoView {
    view! {
      <IconFrame size=size>
        <circle cx="11" cy="11" r="8"></circle>
        <path d="m21 21-4.3-4.3"></path>
      </IconFrame>
    }
}

#[component]
pub fn UserIcon(#[prop(default = 24)] size: u32) -> impl IntoView {
    view! {
      <IconFrame size=size>
        <path d="M19 21v-2a4 4 0 0 0-4-4H9a4 4 0 0 0-4 4v2"></path>
        <circle cx="12" cy="7" r="4"></circle>
      </IconFrame>
    }
}

#[component]
pub fn ShoppingBagIcon(#[prop(default = 24)] size: u32) -> impl IntoView {
    view! {
      <IconFrame size=size>
        <path d="M6 2 3 6v14a2 2 0 0 0 2 2h14a2 2 0 0 0 2-2V6l-3-4Z"></path>
        <path d="M3 6h18"></path>
        <path d="M16 10a4 4 0 0 1-8 0"></path>
      </IconFrame>
    }
}

#[component]
pub fn MenuIcon(#[prop(default = 24)] size: u32) -> impl IntoView {
    view! {
      <IconFrame size=size>
        <line x1="4" x2="20" y1="12" y2="12"></line>
        <line x1="4" x2="20" y1="6" y2="6"></line>
        <line x1="4" x2="20" y1="18" y2="18"></line>
      </IconFrame>
    }
}

#[component]
pub fn MessageCircleIcon(#[prop(default = 24)] size: u32) -> impl IntoView {
    view! {
      <IconFrame size=size>
        <path d="M7.9 20A9 9 0 1 0 4 16.1L2 22Z"></path>
      </IconFrame>
    }
}

#[component]
pub fn InstagramIcon(#[prop(default = 24)] size: u32) -> impl IntoView {
    view! {
      <IconFrame size=size>
        <rect width="20" height="20" x="2" y="2" rx="5" ry="5"></rect>
        <path d="M16 11.37A4 4 0 1 1 12.63 8 4 4 0 0 1 16 11.37z"></path>
        <line x1="17.5" x2="17.51" y1="6.5" y2="6.5"></line>
      </IconFrame>
    }
}

#[component]
pub fn FacebookIcon(#[prop(default = 24)] size: u32) -> impl IntoView {
    view! {
      <IconFrame size=size>
        <path d="M18 2h-3a5 5 0 0 0-5 5v3H7v4h3v8h4v-8h3l1-4h-4V7a1 1 0 0 1 1-1h3z"></path>
      </IconFrame>
    }
}

#[component]
pub fn TwitterIcon(#[prop(default = 24)] size: u32) -> impl IntoView {
    view! {
      <IconFrame size=size>
        <path d="M22 4s-.7 2.1-2 3.4c1.6 10-9.4 17.3-18 11.6 2.2.1 4.4-.6 6-2C3 15.5.5 9.6 3 5c2.2 2.6 5.6 4.1 9 4-.9-4.2 4-6.6 7-3.8 1.17 0 3-1.2 3-1.2z"></path>
      </IconFrame>
    }
}
