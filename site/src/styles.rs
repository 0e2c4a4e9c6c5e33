//! CSS for the homepage.
//!
//! The stylesheet is inlined into the document head so the rendered page is a
//! single self-contained file.
//!
//! # Customization
//!
//! ```rust
//! use portfolio_leptos::styles::SITE_CSS;
//!
//! let my_css = ".hero-title { letter-spacing: -0.04em; }";
//! let combined = format!("{}\n{}", SITE_CSS, my_css);
//! assert!(combined.contains("@keyframes fade-up"));
//! ```
//!
//! # Animations
//!
//! Entrance keyframes read their starting offset from custom properties set
//! inline by [`crate::compose::Transition::css`]:
//!
//! - `fade-in` - opacity only
//! - `fade-up` - opacity plus `translateY(var(--rise-from))`
//! - `scale-in` - opacity plus `scale(var(--scale-from))`
//! - `float` - idle bob for skill tiles

/// Complete CSS for the homepage - dark theme, utility-light.
pub const SITE_CSS: &str = r#"
:root {
    --background: #09090b;
    --foreground: #fafafa;
    --muted: #18181b;
    --muted-foreground: #a1a1aa;
    --border: #27272a;
    --card: #0c0c0f;
    --primary: #fafafa;
    --primary-foreground: #18181b;
    --radius: 0.5rem;
    --font-sans: 'Inter', system-ui, -apple-system, 'Segoe UI', sans-serif;
}

*, *::before, *::after {
    box-sizing: border-box;
}

html {
    scroll-behavior: smooth;
}

body {
    font-family: var(--font-sans);
    background: var(--background);
    color: var(--foreground);
    line-height: 1.6;
    margin: 0;
    min-height: 100vh;
}

a {
    color: inherit;
    text-decoration: none;
}

img {
    display: block;
    max-width: 100%;
}

.sr-only {
    position: absolute;
    width: 1px;
    height: 1px;
    padding: 0;
    margin: -1px;
    overflow: hidden;
    clip: rect(0, 0, 0, 0);
    white-space: nowrap;
    border: 0;
}

/* Layout */
.page {
    display: flex;
    flex-direction: column;
    gap: 1.5rem;
    width: 100%;
    padding: 3rem 1rem;
}

@media (min-width: 640px) {
    .page {
        padding: 3rem 5rem;
    }
}

.section-stack > * + * {
    margin-top: 2rem;
}

.section-header {
    display: flex;
    align-items: center;
    justify-content: space-between;
    gap: 1rem;
}

.section-title {
    font-size: 1.875rem;
    font-weight: 700;
    letter-spacing: -0.025em;
    margin: 0;
}

.section-subtitle,
.muted {
    color: var(--muted-foreground);
    margin: 0;
}

/* Buttons and badges */
.btn {
    display: inline-flex;
    align-items: center;
    justify-content: center;
    gap: 0.5rem;
    border-radius: calc(var(--radius) - 2px);
    font-size: 0.875rem;
    font-weight: 500;
    padding: 0.5rem 1rem;
    border: 1px solid transparent;
    transition: background 0.15s ease, color 0.15s ease;
    cursor: pointer;
}

.btn-lg {
    padding: 0.625rem 2rem;
    font-size: 1rem;
}

.btn-primary {
    background: var(--primary);
    color: var(--primary-foreground);
}

.btn-outline {
    border-color: var(--border);
    background: transparent;
}

.btn-outline:hover,
.btn-ghost:hover {
    background: var(--muted);
}

.btn-ghost {
    background: transparent;
}

.btn-icon {
    width: 2.5rem;
    height: 2.5rem;
    padding: 0;
}

.btn-soon {
    opacity: 0.6;
    cursor: default;
}

.rgb-border {
    box-shadow: 0 0 0 2px transparent;
    background-image: linear-gradient(var(--primary), var(--primary)),
        linear-gradient(90deg, #ef4444, #eab308, #22c55e, #3b82f6, #a855f7);
    background-origin: border-box;
    background-clip: padding-box, border-box;
}

.badge {
    display: inline-flex;
    align-items: center;
    border-radius: 9999px;
    font-size: 0.75rem;
    font-weight: 600;
    padding: 0.125rem 0.625rem;
    border: 1px solid var(--border);
}

.badge-outline {
    font-size: 0.875rem;
    padding: 0.25rem 1rem;
}

.tag-badge {
    background: var(--primary);
    color: var(--primary-foreground);
    border-color: transparent;
}

.icon-sm {
    width: 1rem;
    height: 1rem;
}

/* Cards */
.card {
    background: var(--card);
    border: 1px solid var(--border);
    border-radius: var(--radius);
    overflow: hidden;
    height: 100%;
}

.glow:hover {
    box-shadow: 0 0 24px rgba(250, 250, 250, 0.08);
}

.card-content {
    padding: 1.5rem;
}

/* Hero */
.hero {
    display: flex;
    flex-direction: column;
    align-items: center;
    justify-content: center;
    text-align: center;
    gap: 2rem;
    padding-bottom: 3rem;
}

.hero-intro {
    display: flex;
    flex-direction: column;
    align-items: center;
    gap: 1rem;
}

.hero-avatar {
    width: 12rem;
    height: 12rem;
    object-fit: cover;
    border-radius: 9999px;
}

@media (min-width: 640px) {
    .hero-avatar {
        width: 24rem;
        height: 24rem;
    }
}

.hero-title {
    font-size: 2.25rem;
    font-weight: 700;
    letter-spacing: -0.025em;
    margin: 0;
}

@media (min-width: 768px) {
    .hero-title {
        font-size: 3.75rem;
    }
}

.text-gradient {
    background: linear-gradient(90deg, #60a5fa, #c084fc, #f472b6);
    -webkit-background-clip: text;
    background-clip: text;
    color: transparent;
}

.hero-tagline {
    font-size: 1.25rem;
    color: var(--muted-foreground);
    max-width: 42rem;
    margin: 0;
}

.hero-actions,
.hero-socials {
    display: flex;
    flex-wrap: wrap;
    justify-content: center;
    gap: 1rem;
}

/* Project grid */
.project-grid {
    display: grid;
    grid-template-columns: 1fr;
    gap: 1.5rem;
}

@media (min-width: 768px) {
    .project-grid { grid-template-columns: repeat(2, 1fr); }
}

@media (min-width: 1024px) {
    .project-grid { grid-template-columns: repeat(3, 1fr); }
}

.project-media {
    position: relative;
    height: 12rem;
    width: 100%;
}

.project-image {
    height: 100%;
    width: 100%;
    object-fit: cover;
}

.project-icon {
    position: absolute;
    top: 1rem;
    right: 1rem;
    padding: 0.5rem;
    border-radius: 9999px;
    background: rgba(9, 9, 11, 0.8);
    backdrop-filter: blur(4px);
}

.project-title {
    font-size: 1.25rem;
    font-weight: 600;
    margin: 0 0 0.5rem;
}

.project-description {
    color: var(--muted-foreground);
    margin: 0 0 1rem;
    display: -webkit-box;
    -webkit-line-clamp: 3;
    -webkit-box-orient: vertical;
    overflow: hidden;
}

.tag-list {
    display: flex;
    flex-wrap: wrap;
    gap: 0.5rem;
    margin-bottom: 1rem;
}

.project-actions {
    display: flex;
    justify-content: space-between;
    gap: 1rem;
}

.project-actions > .btn {
    width: 50%;
}

/* Skills grid */
.skill-grid {
    display: grid;
    grid-template-columns: repeat(2, 1fr);
    gap: 1rem;
}

@media (min-width: 768px) {
    .skill-grid { grid-template-columns: repeat(3, 1fr); }
}

@media (min-width: 1024px) {
    .skill-grid { grid-template-columns: repeat(4, 1fr); }
}

.skill-card .card-content {
    display: flex;
    align-items: center;
    gap: 0.75rem;
    padding: 1rem;
}

.skill-icon {
    padding: 0.5rem;
    border-radius: calc(var(--radius) - 2px);
    color: #fff;
    display: flex;
}

.skill-name {
    font-weight: 500;
}

.section-footer {
    display: flex;
    justify-content: center;
}

.bg-blue-500 { background: #3b82f6; }
.bg-blue-600 { background: #2563eb; }
.bg-blue-700 { background: #1d4ed8; }
.bg-green-500 { background: #22c55e; }
.bg-green-600 { background: #16a34a; }
.bg-cyan-500 { background: #06b6d4; }
.bg-pink-600 { background: #db2777; }
.bg-slate-500 { background: #64748b; }
.bg-black { background: #000; }

/* Call to action */
.cta {
    background: var(--muted);
    border-radius: var(--radius);
    padding: 2rem;
    text-align: center;
}

.cta-inner {
    max-width: 42rem;
    margin: 0 auto;
    display: flex;
    flex-direction: column;
    align-items: center;
    gap: 1.5rem;
}

/* Motion */
@keyframes fade-in {
    from { opacity: 0; }
    to { opacity: 1; }
}

@keyframes fade-up {
    from { opacity: 0; transform: translateY(var(--rise-from, 20px)); }
    to { opacity: 1; transform: translateY(0); }
}

@keyframes scale-in {
    from { opacity: 0; transform: scale(var(--scale-from, 0.9)); }
    to { opacity: 1; transform: scale(1); }
}

@keyframes float {
    0%, 100% { translate: 0 0; }
    50% { translate: 0 -6px; }
}

@media (prefers-reduced-motion: reduce) {
    .reveal {
        animation: none !important;
    }
}
"#;

/// Content Security Policy for the rendered page. Inline styles only, no scripts.
pub const CSP: &str = "default-src 'self'; img-src 'self' https: data:; style-src 'self' 'unsafe-inline'; script-src 'none'; connect-src 'none'; font-src 'self' data:;";
