pub const BASE_COMPONENTS: &str = r#"
/* Base Component Styles */

@keyframes fade-up {
  from { opacity: 0; transform: translateY(40px); }
  to { opacity: 1; transform: translateY(0); }
}

@keyframes fade-in {
  from { opacity: 0; }
  to { opacity: 1; }
}

@keyframes pop-in {
  from { opacity: 0; transform: translateY(30px) scale(0.88); }
  to { opacity: 1; transform: translateY(0) scale(1); }
}

.container {
  max-width: var(--container-width);
  margin: 0 auto;
  padding: 0 var(--space-6);
}

.section {
  position: relative;
  padding: var(--space-24) var(--space-6);
  overflow: hidden;
}

.section-header {
  text-align: center;
  margin-bottom: var(--space-16);
}

.section-heading {
  font-family: var(--font-display);
  font-size: clamp(2.25rem, 5vw, 3.75rem);
  font-weight: 600;
  line-height: 1.1;
  color: var(--text-primary);
}

.section-intro {
  max-width: 36rem;
  margin: var(--space-4) auto 0;
  color: var(--text-secondary);
  font-weight: 300;
  line-height: 1.7;
}

.gradient-text {
  background: var(--accent-gradient, var(--gradient-rainbow));
  -webkit-background-clip: text;
  -webkit-text-fill-color: transparent;
  background-clip: text;
}

/* Buttons */
.btn {
  display: inline-flex;
  align-items: center;
  justify-content: center;
  gap: var(--space-2);
  padding: var(--space-3) var(--space-6);
  border-radius: var(--radius-full);
  font-family: var(--font-body);
  font-weight: 600;
  letter-spacing: 0.06em;
  cursor: pointer;
  transition: transform var(--transition-fast) var(--easing-standard),
              box-shadow var(--transition-fast) var(--easing-standard);
  border: none;
}

.btn:hover {
  transform: scale(1.04);
  text-decoration: none;
}

.btn-primary {
  background: var(--gradient-teal);
  color: var(--text-inverse);
  box-shadow: 0 12px 40px rgba(13, 148, 136, 0.45);
}

.btn-coral {
  background: var(--gradient-coral);
  color: var(--text-inverse);
  box-shadow: 0 6px 20px rgba(255, 107, 107, 0.45);
}

.btn-ghost {
  background: rgba(255, 253, 248, 0.9);
  color: var(--text-primary);
  border: 1.5px solid rgba(26, 26, 46, 0.12);
}

/* Section label */
.section-label {
  display: flex;
  align-items: center;
  justify-content: center;
  gap: var(--space-3);
  margin-bottom: var(--space-5);
}

.section-label .rule {
  height: 1px;
  width: 40px;
  background: var(--accent);
}

.section-label span {
  font-size: 10px;
  letter-spacing: 0.3em;
  text-transform: uppercase;
  font-weight: 600;
  color: var(--accent);
}

/* Pills */
.pill-row {
  display: flex;
  flex-wrap: wrap;
  gap: var(--space-2);
}

.pill {
  padding: var(--space-1) var(--space-3);
  border-radius: var(--radius-full);
  font-size: 0.75rem;
  font-weight: 600;
  letter-spacing: 0.04em;
  background: rgba(13, 148, 136, 0.08);
  border: 1px solid rgba(13, 148, 136, 0.2);
  color: rgb(11, 116, 107);
}

.pill.solid {
  background: var(--accent-gradient);
  border: none;
  color: var(--text-inverse);
}

/* Value cards */
.value-grid {
  display: grid;
  grid-template-columns: repeat(auto-fit, minmax(280px, 1fr));
  gap: var(--space-6);
}

.value-card {
  position: relative;
  padding: 28px;
  border-radius: 28px;
  overflow: hidden;
  background: color-mix(in srgb, var(--accent) 7%, transparent);
  border: 1.5px solid color-mix(in srgb, var(--accent) 22%, transparent);
  animation: fade-up 0.6s ease-out both;
  animation-delay: var(--delay, 0ms);
  transition: transform var(--transition-normal) var(--easing-standard),
              box-shadow var(--transition-normal) var(--easing-standard);
}

.value-card:hover {
  transform: translateY(-8px) rotate(0.5deg);
  box-shadow: 0 24px 60px color-mix(in srgb, var(--accent) 16%, transparent);
}

.card-accent {
  position: absolute;
  top: 0;
  left: 0;
  right: 0;
  height: 3px;
  background: var(--accent-gradient);
}

.value-icon {
  width: 56px;
  height: 56px;
  margin-bottom: var(--space-5);
  border-radius: 16px;
  display: flex;
  align-items: center;
  justify-content: center;
  font-size: 1.5rem;
  background: color-mix(in srgb, var(--accent) 12%, transparent);
}

.value-card h3,
.team-card h3,
.timeline-card h3 {
  font-family: var(--font-display);
  font-size: 1.2rem;
  font-weight: 600;
  margin-bottom: var(--space-2);
}

.value-card p,
.team-card p,
.timeline-card p {
  font-size: 0.875rem;
  line-height: 1.7;
  color: var(--text-secondary);
  font-weight: 300;
}

/* Stat strips */
.stat-strip {
  display: grid;
  grid-template-columns: repeat(auto-fit, minmax(160px, 1fr));
  gap: var(--space-4);
  margin-top: var(--space-12);
}

.stat {
  text-align: center;
  padding: var(--space-5);
  border-radius: var(--radius-lg);
  background: rgba(255, 255, 255, 0.7);
  box-shadow: var(--shadow-sm);
}

.stat-value {
  font-family: var(--font-display);
  font-size: 2rem;
  font-weight: 600;
}

.stat-label {
  font-size: 0.7rem;
  letter-spacing: 0.18em;
  text-transform: uppercase;
  color: var(--text-tertiary);
}

/* Timeline */
.timeline {
  position: relative;
  max-width: 960px;
  margin: 0 auto;
}

.timeline::before {
  content: "";
  position: absolute;
  top: 0;
  bottom: 0;
  left: 50%;
  width: 2px;
  background: var(--gradient-rainbow);
}

.timeline-item {
  position: relative;
  width: 50%;
  padding: var(--space-4) var(--space-10);
  animation: fade-up 0.7s ease-out both;
}

.timeline-item.left {
  left: 0;
  text-align: right;
}

.timeline-item.right {
  left: 50%;
}

.timeline-dot {
  position: absolute;
  top: 32px;
  width: 14px;
  height: 14px;
  border-radius: var(--radius-full);
  background: var(--accent-gradient);
  box-shadow: 0 0 0 6px color-mix(in srgb, var(--accent) 15%, transparent);
}

.timeline-item.left .timeline-dot { right: -7px; }
.timeline-item.right .timeline-dot { left: -7px; }

.timeline-year {
  font-family: var(--font-display);
  font-size: 2.5rem;
  font-weight: 600;
  color: var(--accent);
}

.timeline-card {
  padding: var(--space-6);
  border-radius: var(--radius-lg);
  background: #FFFFFF;
  box-shadow: var(--shadow-md);
}

/* Team cards */
.team-grid {
  display: grid;
  grid-template-columns: repeat(auto-fit, minmax(220px, 1fr));
  gap: var(--space-6);
}

.team-card {
  text-align: center;
  padding: var(--space-8) var(--space-6);
  border-radius: 28px;
  background: #FFFFFF;
  box-shadow: var(--shadow-md);
  animation: fade-up 0.6s ease-out both;
  animation-delay: var(--delay, 0ms);
}

.team-avatar {
  width: 88px;
  height: 88px;
  margin: 0 auto var(--space-5);
  border-radius: var(--radius-full);
  display: flex;
  align-items: center;
  justify-content: center;
  font-size: 2.25rem;
  background: var(--accent-gradient);
  box-shadow: 0 0 0 6px color-mix(in srgb, var(--accent) 15%, transparent);
}

.team-role {
  font-size: 0.7rem;
  letter-spacing: 0.2em;
  text-transform: uppercase;
  font-weight: 600;
  color: var(--accent);
  margin-bottom: var(--space-3);
}

@media (max-width: 768px) {
  .timeline::before { left: 12px; }
  .timeline-item,
  .timeline-item.right {
    width: 100%;
    left: 0;
    text-align: left;
    padding-left: var(--space-10);
  }
  .timeline-item.left .timeline-dot,
  .timeline-item.right .timeline-dot { left: 5px; right: auto; }
}
"#;
