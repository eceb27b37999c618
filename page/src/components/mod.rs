//! Leptos UI components for rendering the page.
//!
//! Each component is a Leptos `#[component]` function rendered once on
//! the server; no hydration or client-side reactivity is involved.
//!
//! # Component Hierarchy
//!
//! ```text
//! PageDocument
//! ├── Hero
//! ├── AlternativesSection (#alternatives)
//! │   ├── CardGrid (popular)
//! │   │   └── PlatformCard
//! │   │       ├── Avatar
//! │   │       ├── Badge x3
//! │   │       ├── FeatureChecklist (optional)
//! │   │       ├── BulletList (Pros, Cons)
//! │   │       └── WarningsBlock (optional)
//! │   └── LessPopularPanel
//! │       └── CardGrid (less popular)
//! └── Footer
//! ```
//!
//! # Usage
//!
//! Components are typically used via [`crate::render_page`], but
//! can be used directly for custom layouts:
//!
//! ```rust,ignore
//! use leptos::prelude::*;
//! use discordless_page::components::PlatformCard;
//! use discordless_page::view_model::CardModel;
//!
//! view! { <PlatformCard card=CardModel::from_platform(&alt) /> }
//! ```

mod alternatives;
mod badge;
mod card;
mod checklist;
mod document;
mod footer;
mod hero;
mod icons;

pub use alternatives::AlternativesSection;
pub use badge::Badge;
pub use card::PlatformCard;
pub use checklist::{BulletList, FeatureChecklist, WarningsBlock};
pub use document::PageDocument;
pub use footer::Footer;
pub use hero::Hero;
pub use icons::*;
