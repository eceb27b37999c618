//! CSS styles for the page.
//!
//! The whole stylesheet is inlined into the document so the output is a
//! single self-contained HTML file.
//!
//! # Customization
//!
//! To extend or override styles:
//!
//! ```rust
//! use discordless_page::styles::PAGE_CSS;
//!
//! let my_css = ".card { border-radius: 4px; }";
//! let combined = format!("{}\n{}", PAGE_CSS, my_css);
//! ```

/// Complete CSS for the page - dark theme with electric blue/purple accents.
///
/// Badge tones map to `.badge-positive` (emerald), `.badge-negative` (red),
/// `.badge-caution` (amber) and `.badge-neutral` (muted).
pub const PAGE_CSS: &str = r#"
:root {
    --bg: #0b0d14;
    --bg-card: #11141d;
    --bg-muted: rgba(148, 163, 184, 0.08);
    --text: #e2e8f0;
    --text-muted: #94a3b8;
    --border: rgba(148, 163, 184, 0.2);
    --primary: #5865f2;
    --electric-blue: #3b82f6;
    --vibrant-purple: #8b5cf6;
    --hot-pink: #ec4899;
    --emerald: #34d399;
    --red: #f87171;
    --amber: #fbbf24;
    --font-sans: 'Inter', system-ui, -apple-system, sans-serif;
    --font-display: 'Space Grotesk', var(--font-sans);
    --container-max: 1280px;
}

*, *::before, *::after {
    box-sizing: border-box;
}

html {
    scroll-behavior: smooth;
}

body {
    font-family: var(--font-sans);
    background: var(--bg);
    color: var(--text);
    line-height: 1.6;
    margin: 0;
}

a {
    color: inherit;
}

.muted {
    color: var(--text-muted);
}

.container {
    max-width: var(--container-max);
    margin: 0 auto;
    padding: 0 24px;
}

/* Hero */
.hero {
    min-height: 90vh;
    display: flex;
    align-items: center;
    justify-content: center;
    text-align: center;
    padding: 0 16px;
    background: linear-gradient(to bottom, var(--bg), rgba(148, 163, 184, 0.06));
}

.hero-inner {
    max-width: 56rem;
}

.hero-title {
    font-family: var(--font-display);
    font-size: clamp(2.25rem, 6vw, 4.5rem);
    line-height: 1.1;
    letter-spacing: -0.02em;
    margin: 0;
}

.hero-title-accent {
    color: var(--primary);
}

.hero-title-gradient,
.gradient-text {
    background: linear-gradient(to right, var(--primary), var(--vibrant-purple), var(--hot-pink));
    -webkit-background-clip: text;
    background-clip: text;
    color: transparent;
}

.hero-description {
    max-width: 42rem;
    margin: 24px auto 0;
    font-size: 1.125rem;
    color: var(--text-muted);
}

.hero-description strong {
    color: var(--text);
}

.hero-links {
    margin-top: 24px;
    display: flex;
    flex-wrap: wrap;
    align-items: center;
    justify-content: center;
    gap: 12px;
    font-size: 0.875rem;
    color: var(--text-muted);
}

.hero-link-row {
    display: flex;
    gap: 8px;
}

.icon-link {
    display: inline-flex;
    padding: 8px;
    border: 1px solid var(--border);
    border-radius: 999px;
    background: rgba(11, 13, 20, 0.7);
    transition: background 0.15s;
}

.icon-link:hover {
    background: rgba(88, 101, 242, 0.1);
    color: var(--text);
}

.hero-scroll {
    margin-top: 48px;
    display: inline-flex;
    flex-direction: column;
    align-items: center;
    gap: 8px;
    border: 0;
    background: none;
    color: var(--text-muted);
    font: inherit;
    font-size: 0.875rem;
    cursor: pointer;
}

.hero-scroll:hover {
    color: var(--primary);
}

.float {
    animation: float 2s ease-in-out infinite;
}

@keyframes float {
    0%, 100% { transform: translateY(0); }
    50% { transform: translateY(6px); }
}

/* Alternatives section */
.alternatives {
    padding: 80px 0;
}

.callout {
    display: flex;
    gap: 12px;
    padding: 16px;
    border-radius: 12px;
    font-size: 0.875rem;
    margin-bottom: 16px;
}

.callout p {
    margin: 0;
}

.callout-icon {
    flex-shrink: 0;
    margin-top: 2px;
}

.callout-info {
    border: 1px solid var(--border);
    background: var(--bg-muted);
    color: var(--text-muted);
}

.callout-info .callout-icon {
    color: var(--primary);
}

.callout-caution {
    border: 1px solid rgba(251, 191, 36, 0.6);
    background: rgba(251, 191, 36, 0.1);
    color: #fef3c7;
    margin-bottom: 32px;
}

.callout-muted {
    background: rgba(11, 13, 20, 0.6);
    color: var(--text-muted);
}

.section-header {
    text-align: center;
    margin: 24px 0 48px;
}

.section-title {
    font-family: var(--font-display);
    font-size: clamp(1.875rem, 4vw, 2.25rem);
    margin: 0;
}

.section-description {
    max-width: 42rem;
    margin: 16px auto 0;
    color: var(--text-muted);
}

.card-grid {
    display: grid;
    gap: 24px;
    grid-template-columns: repeat(auto-fill, minmax(320px, 1fr));
}

/* Card */
.card {
    display: flex;
    flex-direction: column;
    border: 1px solid var(--border);
    border-radius: 12px;
    background: var(--bg-card);
    transition: border-color 0.3s, box-shadow 0.3s;
}

.card:hover {
    border-color: rgba(88, 101, 242, 0.4);
    box-shadow: 0 10px 24px rgba(88, 101, 242, 0.05);
}

.card-secondary {
    background: rgba(11, 13, 20, 0.4);
    font-size: 0.875rem;
}

.card-header {
    padding: 24px 24px 0;
}

.card-title-row {
    display: flex;
    align-items: center;
    justify-content: space-between;
    gap: 12px;
}

.card-title {
    font-family: var(--font-display);
    font-size: 1.25rem;
    margin: 0;
}

.card-description {
    font-size: 0.875rem;
    color: var(--text-muted);
}

.avatar {
    position: relative;
    width: 36px;
    height: 36px;
    flex-shrink: 0;
    border: 1px solid var(--border);
    border-radius: 999px;
    background: var(--bg-muted);
    overflow: hidden;
}

.avatar-fallback {
    position: absolute;
    inset: 0;
    display: flex;
    align-items: center;
    justify-content: center;
    font-size: 0.75rem;
    font-weight: 600;
    letter-spacing: 0.05em;
}

.avatar-img {
    position: absolute;
    inset: 0;
    width: 100%;
    height: 100%;
    object-fit: contain;
    padding: 4px;
    background: var(--bg-card);
}

/* Badges */
.badge-row {
    display: flex;
    flex-wrap: wrap;
    gap: 8px;
    margin-top: 12px;
    font-size: 0.75rem;
}

.badge {
    position: relative;
    display: inline-flex;
    align-items: center;
    gap: 4px;
    padding: 4px 8px;
    border: 1px solid;
    border-radius: 999px;
    cursor: help;
}

.badge-label {
    font-weight: 500;
}

.badge-positive {
    border-color: rgba(16, 185, 129, 0.6);
    background: rgba(16, 185, 129, 0.1);
    color: #6ee7b7;
}

.badge-negative {
    border-color: rgba(239, 68, 68, 0.6);
    background: rgba(239, 68, 68, 0.1);
    color: #fca5a5;
}

.badge-caution {
    border-color: rgba(245, 158, 11, 0.6);
    background: rgba(245, 158, 11, 0.1);
    color: #fde68a;
}

.badge-neutral {
    border-color: var(--border);
    background: var(--bg-muted);
    color: var(--text-muted);
}

.tooltip {
    position: absolute;
    bottom: calc(100% + 8px);
    left: 50%;
    transform: translateX(-50%);
    width: max-content;
    max-width: 260px;
    padding: 6px 10px;
    border: 1px solid var(--border);
    border-radius: 6px;
    background: #1e2230;
    color: var(--text);
    font-size: 0.75rem;
    line-height: 1.4;
    opacity: 0;
    pointer-events: none;
    transition: opacity 0.15s;
    z-index: 10;
}

.badge:hover .tooltip,
.badge:focus .tooltip {
    opacity: 1;
}

/* Card content */
.card-content {
    flex: 1;
    display: flex;
    flex-direction: column;
    gap: 16px;
    padding: 24px;
}

.card-block {
    border-radius: 8px;
    background: var(--bg-muted);
    padding: 12px;
}

.card-block-title {
    margin: 0 0 8px;
    font-size: 0.75rem;
    font-weight: 600;
    text-transform: uppercase;
    letter-spacing: 0.05em;
    color: var(--text-muted);
}

.feature-list,
.bullet-list {
    list-style: none;
    margin: 0;
    padding: 0;
    display: flex;
    flex-direction: column;
    gap: 6px;
    font-size: 0.875rem;
    color: var(--text-muted);
}

.feature-list li,
.bullet-list li {
    display: flex;
    align-items: flex-start;
    gap: 8px;
}

.feature-list svg,
.bullet-list svg {
    flex-shrink: 0;
    margin-top: 3px;
}

.feature-supported .feature-icon,
.icon-positive {
    color: var(--emerald);
}

.feature-planned .feature-icon,
.icon-caution {
    color: var(--amber);
}

.feature-missing .feature-icon {
    color: var(--red);
}

.feature-note {
    margin-left: 4px;
    font-size: 0.75rem;
    opacity: 0.8;
}

.card-warnings {
    display: flex;
    gap: 8px;
    padding: 12px;
    border: 1px solid rgba(245, 158, 11, 0.4);
    border-radius: 8px;
    background: rgba(245, 158, 11, 0.05);
    color: #fef3c7;
    font-size: 0.75rem;
}

.card-warnings .callout-icon {
    color: var(--amber);
}

.card-warnings ul {
    margin: 0;
    padding-left: 16px;
}

.card-footer {
    padding: 0 24px 24px;
}

.btn {
    display: inline-flex;
    align-items: center;
    justify-content: center;
    gap: 8px;
    padding: 8px 16px;
    border-radius: 8px;
    font-size: 0.875rem;
    font-weight: 500;
    text-decoration: none;
    transition: all 0.15s;
}

.btn-outline {
    width: 100%;
    border: 1px solid var(--border);
}

.btn-outline:hover {
    border-color: var(--primary);
    color: var(--primary);
}

/* Less popular panel */
.less-popular {
    margin-top: 64px;
    display: flex;
    flex-direction: column;
    gap: 24px;
    padding: 32px;
    border: 1px dashed var(--border);
    border-radius: 16px;
    background: var(--bg-muted);
}

.less-popular-title {
    font-family: var(--font-display);
    font-size: 1.5rem;
    margin: 0;
}

.less-popular .muted {
    max-width: 42rem;
    margin: 8px 0 0;
    font-size: 0.875rem;
}

/* Footer */
.footer {
    border-top: 1px solid var(--border);
    padding: 32px 0;
    text-align: center;
    font-size: 0.75rem;
}

.footer-link {
    color: var(--text-muted);
    text-decoration: none;
}

.footer-link:hover {
    color: var(--text);
}

@media (max-width: 640px) {
    .less-popular {
        padding: 24px 16px;
    }

    .card-grid {
        grid-template-columns: 1fr;
    }
}
"#;

/// Content Security Policy for the generated page.
///
/// Remote images are allowed for favicons; everything else stays inline.
pub const CSP: &str = "default-src 'self'; img-src 'self' data: https:; style-src 'self' 'unsafe-inline'; script-src 'self' 'unsafe-inline'; connect-src 'none'; font-src 'self' data:;";
