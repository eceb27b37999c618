//! Root document component - the complete HTML page

use leptos::prelude::*;

use super::{AlternativesSection, Footer, Hero};
use crate::PageOptions;
use crate::styles::{CSP, PAGE_CSS};
use crate::view_model::CardModel;

/// The complete HTML document for the page
#[component]
pub fn PageDocument(
    options: PageOptions,
    popular: Vec<CardModel>,
    less_popular: Vec<CardModel>,
) -> impl IntoView {
    let PageOptions {
        title,
        description,
        repository_url,
        status_url,
    } = options;

    view! {
        <html lang="en">
            <head>
                <meta charset="UTF-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <meta http-equiv="Content-Security-Policy" content=CSP />
                <meta name="description" content=description />
                <title>{title}</title>
                <style>{PAGE_CSS}</style>
            </head>
            <body>
                <main>
                    <Hero repository_url=repository_url.clone() status_url=status_url />
                    <AlternativesSection popular=popular less_popular=less_popular />
                </main>
                <Footer repository_url=repository_url />
                <script>{PAGE_SCRIPT}</script>
            </body>
        </html>
    }
}

/// Page behaviour (scroll button, broken favicon fallback)
const PAGE_SCRIPT: &str = r#"
(() => {
  // 1. Smooth scroll for [data-scroll-target] buttons
  document.querySelectorAll('[data-scroll-target]').forEach(btn => {
      btn.addEventListener('click', () => {
          const target = document.querySelector(btn.dataset.scrollTarget);
          if (target) {
              target.scrollIntoView({ behavior: 'smooth' });
          }
      });
  });

  // 2. Favicons that fail to load are removed so the initials show through
  document.querySelectorAll('img[data-avatar]').forEach(img => {
      const drop = () => img.remove();
      if (img.complete && img.naturalWidth === 0) {
          drop();
      } else {
          img.addEventListener('error', drop);
      }
  });
})();
"#;
