use constcat::concat;

mod components;
mod gallery;
mod home;
mod variables;

pub use components::BASE_COMPONENTS;
pub use gallery::GALLERY_STYLES;
pub use home::HOME_STYLES;
pub use variables::CSS_VARIABLES;

// everything except the page-specific bundles
pub const SITE_STYLES: &str = concat!(
    r#"
/* Global resets and base styles */
* {
  margin: 0;
  padding: 0;
  box-sizing: border-box;
}

html {
  scroll-behavior: smooth;
}

body {
  font-family: var(--font-body);
  color: var(--text-primary);
  background-color: var(--cream);
  line-height: 1.5;
  letter-spacing: 0.01em;
  -webkit-font-smoothing: antialiased;
}

a {
  color: inherit;
  text-decoration: none;
}
"#,
    CSS_VARIABLES,
    BASE_COMPONENTS,
    r#"
/* Navigation */
.app-header {
  position: sticky;
  top: 0;
  z-index: 50;
  background: rgba(255, 253, 248, 0.6);
  backdrop-filter: blur(20px);
  transition: transform 0.4s cubic-bezier(0.4, 0, 0.2, 1), background 0.3s ease,
    box-shadow 0.3s ease;
  will-change: transform;
}

.app-header.scrolled {
  background: rgba(255, 253, 248, 0.82);
  box-shadow: var(--shadow-md);
}

.app-header.hidden {
  transform: translateY(-100%);
}

.rainbow-rule {
  height: 3px;
  width: 100%;
  background: var(--gradient-rainbow);
}

.nav-container {
  display: flex;
  height: var(--header-height);
  max-width: var(--container-width);
  margin: 0 auto;
  align-items: center;
  justify-content: space-between;
  padding: 0 var(--space-8);
}

.logo {
  display: flex;
  align-items: center;
  gap: var(--space-3);
}

.logo-mark {
  width: 40px;
  height: 40px;
  border-radius: 16px;
  display: flex;
  align-items: center;
  justify-content: center;
  font-size: 1.25rem;
  background: var(--gradient-coral);
  box-shadow: 0 4px 16px rgba(255, 107, 107, 0.45);
}

.logo-name {
  font-family: var(--font-display);
  font-weight: 700;
  font-size: 1.125rem;
  line-height: 1.1;
  background: var(--gradient-rainbow);
  -webkit-background-clip: text;
  -webkit-text-fill-color: transparent;
  background-clip: text;
}

.logo-location {
  display: block;
  margin-top: var(--space-1);
  font-size: 10px;
  letter-spacing: 0.18em;
  text-transform: uppercase;
  color: var(--text-tertiary);
}

.nav-links {
  display: flex;
  gap: 28px;
}

.nav-link {
  position: relative;
  font-size: 0.875rem;
  font-weight: 400;
  color: rgb(60, 60, 75);
  transition: color var(--transition-fast) var(--easing-standard);
}

.nav-link:hover,
.nav-link.active {
  background: var(--accent-gradient);
  -webkit-background-clip: text;
  -webkit-text-fill-color: transparent;
  background-clip: text;
}

.nav-link.active {
  font-weight: 600;
}

.nav-link.active::after {
  content: "";
  position: absolute;
  left: 10%;
  bottom: -14px;
  width: 80%;
  height: 3px;
  border-radius: var(--radius-full);
  background: var(--accent-gradient);
}

.nav-actions {
  display: flex;
  align-items: center;
  gap: var(--space-3);
}

.menu-toggle {
  display: none;
  width: 40px;
  height: 40px;
  border-radius: 16px;
  border: 1px solid rgba(0, 0, 0, 0.07);
  background: rgba(0, 0, 0, 0.04);
  font-size: 1.125rem;
  cursor: pointer;
}

.mobile-menu {
  position: fixed;
  top: 0;
  right: 0;
  bottom: 0;
  z-index: 60;
  width: min(320px, 85vw);
  display: flex;
  flex-direction: column;
  gap: var(--space-2);
  padding: var(--space-6) var(--space-4);
  background: rgba(255, 253, 248, 0.97);
  box-shadow: -16px 0 60px rgba(0, 0, 0, 0.12);
  animation: fade-in 0.25s ease-out both;
}

.mobile-menu .nav-link {
  padding: var(--space-4) var(--space-5);
  font-size: 1rem;
}

.mobile-menu .nav-link.active::after {
  display: none;
}

.menu-scrim {
  position: fixed;
  inset: 0;
  z-index: 55;
  background: rgba(26, 26, 46, 0.35);
  backdrop-filter: blur(4px);
}

@media (max-width: 768px) {
  .nav-links { display: none; }
  .nav-actions .btn { display: none; }
  .menu-toggle { display: block; }
}

/* Footer */
.app-footer {
  padding: var(--space-12) var(--space-6);
  text-align: center;
  background: var(--dark);
  color: rgba(255, 255, 255, 0.7);
  font-size: 0.875rem;
}

.app-footer strong {
  display: block;
  margin-bottom: var(--space-2);
  font-family: var(--font-display);
  font-size: 1.25rem;
  color: var(--text-inverse);
}

.app-footer a {
  color: var(--text-inverse);
}

.not-found {
  text-align: center;
  padding: var(--space-24) var(--space-6);
}
"#
);
