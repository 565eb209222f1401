pub const HOME_STYLES: &str = r#"
/* Hero */
.hero {
  position: relative;
  min-height: calc(100vh - var(--header-height));
  display: flex;
  align-items: center;
  padding: var(--space-16) var(--space-6);
  overflow: hidden;
  background: linear-gradient(160deg, #FFF5F5 0%, var(--cream) 50%, #F0FBFF 100%);
}

.hero-blob {
  position: absolute;
  width: 420px;
  height: 420px;
  border-radius: var(--radius-full);
  filter: blur(64px);
  opacity: 0.15;
  pointer-events: none;
}

.hero-blob.one { top: -80px; left: -80px; background: var(--coral); }
.hero-blob.two { bottom: -80px; right: -80px; background: var(--sky); }

.hero-content {
  position: relative;
  max-width: 54rem;
  margin: 0 auto;
  text-align: center;
  animation: fade-up 1s ease-out both;
}

.hero-title {
  font-family: var(--font-display);
  font-size: clamp(2.75rem, 7vw, 5.5rem);
  font-weight: 600;
  line-height: 1.05;
  color: var(--text-primary);
}

.hero-title .word-1 { --accent-gradient: linear-gradient(135deg, #A855F7 0%, #EC4899 100%); }
.hero-title .word-2 { --accent-gradient: linear-gradient(135deg, #3B82F6 0%, #06B6D4 100%); }
.hero-title .word-3 { --accent-gradient: linear-gradient(135deg, #10B981 0%, #84CC16 100%); }
.hero-title .word-4 { --accent-gradient: linear-gradient(135deg, #F59E0B 0%, #EF4444 100%); }

.hero-subtitle {
  max-width: 40rem;
  margin: var(--space-6) auto 0;
  font-size: 1.125rem;
  line-height: 1.8;
  font-weight: 300;
  color: var(--text-secondary);
  animation: fade-up 1s ease-out 0.3s both;
}

.hero-pills {
  justify-content: center;
  margin-top: var(--space-8);
  animation: fade-in 0.8s ease-out 0.6s both;
}

.hero-actions {
  display: flex;
  flex-wrap: wrap;
  justify-content: center;
  gap: var(--space-4);
  margin-top: var(--space-10);
  animation: fade-up 0.8s ease-out 0.9s both;
}

.hero .stat-strip {
  animation: fade-up 0.8s ease-out 1.1s both;
}

.values-section {
  background: linear-gradient(160deg, #FFF5F5 0%, var(--cream) 50%, #F5F0FF 100%);
}

.teaser {
  text-align: center;
  background: var(--dark);
  color: var(--text-inverse);
  border-radius: var(--radius-xl);
  padding: var(--space-16) var(--space-8);
  margin: 0 var(--space-6) var(--space-24);
}

.teaser h2 {
  font-family: var(--font-display);
  font-size: clamp(2rem, 4vw, 3rem);
  font-weight: 600;
  margin-bottom: var(--space-4);
}

.teaser p {
  color: rgba(255, 255, 255, 0.7);
  font-weight: 300;
  margin-bottom: var(--space-8);
}

/* About */
.about-hero {
  text-align: center;
  background: linear-gradient(160deg, #F0FDFA 0%, var(--cream) 60%, #FFF5F5 100%);
}

.mission-grid {
  display: grid;
  grid-template-columns: repeat(auto-fit, minmax(320px, 1fr));
  gap: var(--space-10);
  align-items: start;
}

.mission-grid h2,
.mission-grid h3 {
  font-family: var(--font-display);
  font-size: 2.25rem;
  font-weight: 600;
  margin-bottom: var(--space-4);
}

.mission-grid p,
.founder-text p {
  color: var(--text-secondary);
  line-height: 1.8;
  font-weight: 300;
  margin-bottom: var(--space-4);
}

.founder-grid {
  display: grid;
  grid-template-columns: minmax(240px, 2fr) 3fr;
  gap: var(--space-12);
  align-items: center;
}

.founder-portrait {
  aspect-ratio: 4 / 5;
  border-radius: var(--radius-xl);
  background: var(--gradient-teal);
  display: flex;
  align-items: center;
  justify-content: center;
  font-size: 6rem;
  box-shadow: 0 12px 32px rgba(13, 148, 136, 0.4);
}

.founder-quote {
  font-family: var(--font-display);
  font-size: clamp(1.75rem, 3.5vw, 2.75rem);
  font-weight: 600;
  line-height: 1.2;
  margin-bottom: var(--space-6);
}

@media (max-width: 768px) {
  .founder-grid { grid-template-columns: 1fr; }
}
"#;
