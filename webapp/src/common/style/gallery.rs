pub const GALLERY_STYLES: &str = r#"
/* Gallery */
.gallery-page {
  position: relative;
  padding: var(--space-24) var(--space-4);
  overflow: hidden;
  background: linear-gradient(170deg, var(--cream) 0%, #F5F0FF 40%, #F0FBFF 100%);
}

.filter-bar {
  display: flex;
  flex-wrap: wrap;
  justify-content: center;
  gap: 10px;
  margin-bottom: var(--space-10);
  animation: fade-up 0.7s ease-out 0.3s both;
}

.filter-button {
  padding: var(--space-2) var(--space-5);
  border-radius: var(--radius-full);
  font-family: var(--font-body);
  font-size: 0.875rem;
  font-weight: 600;
  letter-spacing: 0.04em;
  cursor: pointer;
  color: rgb(80, 80, 95);
  background: rgba(255, 253, 248, 0.9);
  border: 1.5px solid color-mix(in srgb, var(--accent) 19%, transparent);
  box-shadow: var(--shadow-sm);
  transition: transform var(--transition-fast) var(--easing-standard);
}

.filter-button:hover { transform: scale(1.05); }

.filter-button.active {
  color: var(--text-inverse);
  background: var(--accent-gradient);
  border-color: transparent;
  box-shadow: 0 6px 20px color-mix(in srgb, var(--accent) 25%, transparent);
}

.photo-grid {
  display: grid;
  grid-template-columns: repeat(2, 1fr);
  grid-auto-rows: 200px;
  gap: var(--space-4);
  animation: fade-up 0.35s ease-out both;
}

@media (min-width: 768px) {
  .photo-grid { grid-template-columns: repeat(4, 1fr); }
}

.photo-card {
  position: relative;
  border-radius: var(--radius-lg);
  overflow: hidden;
  cursor: pointer;
  min-height: 180px;
  background: #F3F4F6;
  box-shadow: var(--shadow-md);
  border: 1px solid color-mix(in srgb, var(--accent) 10%, transparent);
  animation: pop-in 0.55s ease-out both;
  animation-delay: var(--delay, 0ms);
  transition: transform var(--transition-normal) var(--easing-standard),
              box-shadow var(--transition-normal) var(--easing-standard);
}

.photo-card:hover {
  transform: translateY(-6px);
  box-shadow: 0 28px 64px color-mix(in srgb, var(--accent) 19%, transparent);
}

.photo-card.span-wide { grid-column: span 2; }
.photo-card.span-tall { grid-row: span 2; }
.photo-card.span-large { grid-column: span 2; grid-row: span 2; }

.photo-card img,
.lightbox-image img {
  position: absolute;
  inset: 0;
  width: 100%;
  height: 100%;
  object-fit: cover;
}

.photo-card img {
  transition: transform var(--transition-slow) var(--easing-standard);
}

.photo-card:hover img { transform: scale(1.08); }

.photo-shade {
  position: absolute;
  inset: 0;
  background: linear-gradient(to top, rgba(26, 26, 46, 0.55) 0%, transparent 50%);
  transition: background var(--transition-normal);
}

.photo-card:hover .photo-shade {
  background: linear-gradient(to top, color-mix(in srgb, var(--accent) 80%, transparent) 0%, color-mix(in srgb, var(--accent) 27%, transparent) 40%, transparent 70%);
}

.photo-caption {
  position: absolute;
  left: 0;
  right: 0;
  bottom: 0;
  padding: var(--space-4);
  z-index: 2;
}

.photo-badge {
  display: inline-block;
  padding: var(--space-1) 10px;
  margin-bottom: var(--space-1);
  border-radius: var(--radius-full);
  font-size: 9px;
  font-weight: 600;
  letter-spacing: 0.2em;
  text-transform: uppercase;
  color: var(--text-inverse);
  background: rgba(255, 255, 255, 0.2);
  backdrop-filter: blur(8px);
  opacity: 0;
  transform: translateY(6px);
  transition: opacity var(--transition-fast), transform var(--transition-fast);
}

.photo-card:hover .photo-badge,
.photo-card:hover .photo-zoom {
  opacity: 1;
  transform: none;
}

.photo-label {
  font-family: var(--font-display);
  font-size: 1rem;
  font-weight: 600;
  color: var(--text-inverse);
  text-shadow: 0 1px 8px rgba(0, 0, 0, 0.4);
}

.photo-zoom {
  position: absolute;
  top: var(--space-4);
  right: var(--space-4);
  width: 36px;
  height: 36px;
  z-index: 2;
  display: flex;
  align-items: center;
  justify-content: center;
  border-radius: var(--radius-full);
  background: rgba(255, 255, 255, 0.25);
  backdrop-filter: blur(8px);
  opacity: 0;
  transform: scale(0.7);
  transition: opacity var(--transition-fast), transform var(--transition-fast);
}

.gallery-summary {
  margin-top: 56px;
  text-align: center;
  font-size: 0.875rem;
  font-weight: 300;
  color: var(--text-tertiary);
}

.gallery-empty {
  text-align: center;
  padding: var(--space-16) 0;
  color: var(--text-tertiary);
}

/* Lightbox */
.lightbox-backdrop {
  position: fixed;
  inset: 0;
  z-index: 100;
  display: flex;
  align-items: center;
  justify-content: center;
  padding: var(--space-4);
  background: rgba(26, 26, 46, 0.92);
  backdrop-filter: blur(16px);
  outline: none;
  animation: fade-in 0.25s ease-out both;
}

.lightbox-panel {
  position: relative;
  width: 100%;
  max-width: 56rem;
  border-radius: var(--radius-xl);
  overflow: hidden;
  box-shadow: var(--shadow-lg), 0 0 0 1px rgba(255, 255, 255, 0.1);
  animation: pop-in 0.3s var(--easing-standard) both;
}

.lightbox-image {
  position: relative;
  width: 100%;
  aspect-ratio: 4 / 3;
  background: #111827;
}

.lightbox-image .photo-shade {
  top: auto;
  height: 128px;
  background: linear-gradient(to top, rgba(26, 26, 46, 0.9), transparent);
}

.lightbox-caption {
  position: absolute;
  left: 0;
  right: 0;
  bottom: 0;
  padding: var(--space-6);
  display: flex;
  align-items: flex-end;
  justify-content: space-between;
}

.lightbox-badge {
  display: inline-block;
  padding: var(--space-1) var(--space-3);
  margin-bottom: var(--space-2);
  border-radius: var(--radius-full);
  font-size: 10px;
  font-weight: 600;
  letter-spacing: 0.2em;
  text-transform: uppercase;
  color: var(--text-inverse);
  background: var(--accent-gradient);
}

.lightbox-label {
  font-family: var(--font-display);
  font-size: 1.25rem;
  font-weight: 600;
  color: var(--text-inverse);
}

.lightbox-counter {
  font-size: 0.75rem;
  letter-spacing: 0.2em;
  color: rgba(255, 255, 255, 0.7);
}

.lightbox-control {
  position: absolute;
  z-index: 10;
  display: flex;
  align-items: center;
  justify-content: center;
  border-radius: var(--radius-full);
  color: var(--text-inverse);
  font-size: 1.125rem;
  font-weight: 700;
  cursor: pointer;
  background: rgba(255, 255, 255, 0.12);
  border: 1px solid rgba(255, 255, 255, 0.2);
  backdrop-filter: blur(8px);
  transition: transform var(--transition-fast);
}

.lightbox-control:hover { transform: scale(1.1); }

.lightbox-control.close { top: 20px; right: 20px; width: 44px; height: 44px; }
.lightbox-control.prev { left: 16px; top: 50%; width: 48px; height: 48px; margin-top: -24px; }
.lightbox-control.next { right: 16px; top: 50%; width: 48px; height: 48px; margin-top: -24px; }
"#;
