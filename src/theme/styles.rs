//! Global CSS styles for the portfolio.
//!
//! Deep-space palette: near-black indigo backgrounds, violet accent, blue glow.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* SPACE (Backgrounds) */
  --space-dark: #0b0d21;
  --space-midnight: #141735;
  --space-blue: #1e3a8a;

  /* ACCENTS */
  --space-accent: #8b5cf6;
  --space-glow: #60a5fa;
  --success: #22c55e;

  /* TEXT */
  --text-primary: #ffffff;
  --text-secondary: #d1d5db;
  --text-muted: #9ca3af;

  /* Glass */
  --glass-bg: rgba(20, 23, 53, 0.55);
  --glass-border: rgba(139, 92, 246, 0.2);

  /* Breakpoint: the mobile menu is used below 768px */
  --nav-height: 4rem;

  /* Transitions */
  --transition-fast: 150ms ease;
  --transition-normal: 300ms ease;
  --transition-slow: 500ms ease;
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

html, body {
  height: 100%;
  background: var(--space-dark);
  color: var(--text-primary);
  font-family: 'Inter', system-ui, -apple-system, sans-serif;
  -webkit-font-smoothing: antialiased;
}

a {
  color: inherit;
  text-decoration: none;
}

.hidden {
  display: none !important;
}

/* === Page Root (scroll container) === */
#app {
  height: 100vh;
  overflow-y: auto;
  overflow-x: hidden;
  scroll-behavior: smooth;
  background: radial-gradient(ellipse at top, var(--space-midnight), var(--space-dark) 70%);
}

.page-content {
  position: relative;
  z-index: 1;
  transition: filter var(--transition-normal);
}

.page.mobile-menu-open .page-content,
.page.mobile-menu-open .page-footer {
  filter: blur(4px);
}

/* === Glass Surfaces === */
.glass {
  background: var(--glass-bg);
  border: 1px solid var(--glass-border);
  backdrop-filter: blur(12px);
  -webkit-backdrop-filter: blur(12px);
}

.hover-glow {
  transition: box-shadow var(--transition-normal), transform var(--transition-normal);
}

.hover-glow:hover {
  box-shadow: 0 0 24px rgba(139, 92, 246, 0.35);
  transform: translateY(-2px);
}

.text-glow {
  text-shadow: 0 0 20px rgba(139, 92, 246, 0.6);
}

.accent {
  color: var(--space-accent);
}

.glow-link {
  color: var(--space-glow);
  transition: color var(--transition-fast);
}

.glow-link:hover {
  color: var(--space-accent);
  text-decoration: underline;
}

.glow-link.strong {
  font-weight: 700;
}

/* === Starfield === */
.stars {
  position: fixed;
  inset: 0;
  pointer-events: none;
  z-index: 0;
}

.star {
  position: absolute;
  width: 2px;
  height: 2px;
  border-radius: 50%;
  background: #ffffff;
  animation: twinkle 4s ease-in-out infinite;
}

@keyframes twinkle {
  0%, 100% { opacity: 0.2; }
  50% { opacity: 1; }
}

/* === Reveal on Scroll === */
.reveal {
  opacity: 0;
  transform: translateY(40px);
  transition: opacity 0.8s ease, transform 0.8s ease;
}

.reveal.revealed {
  opacity: 1;
  transform: translateY(0);
}

/* === Navigation Bar === */
.nav-bar {
  position: fixed;
  top: 0;
  left: 0;
  right: 0;
  z-index: 50;
  height: var(--nav-height);
}

.nav-bar-inner {
  height: 100%;
  padding: 0 1rem;
  display: flex;
  align-items: center;
  justify-content: space-between;
}

.nav-logo {
  font-size: 1.5rem;
  font-weight: 700;
  cursor: pointer;
  transition: color var(--transition-fast);
}

.nav-logo:hover,
.nav-link:hover,
.mobile-menu-button:hover {
  color: var(--space-accent);
}

.nav-links {
  display: flex;
  gap: 1.5rem;
}

.nav-link {
  font-size: 1.125rem;
  color: var(--text-secondary);
  transition: color var(--transition-fast);
}

.mobile-menu-button {
  display: none;
  background: none;
  border: none;
  color: var(--text-primary);
  cursor: pointer;
}

.menu-icon {
  width: 1.5rem;
  height: 1.5rem;
}

/* === Mobile Menu Overlay === */
.mobile-menu-overlay {
  position: fixed;
  inset: 0;
  z-index: 40;
  background: rgba(0, 0, 0, 0.5);
  backdrop-filter: blur(4px);
}

.mobile-overlay-container {
  display: flex;
  align-items: center;
  justify-content: center;
  min-height: 100vh;
  padding: 1.5rem;
}

.mobile-menu-panel {
  width: 100%;
  max-width: 24rem;
  padding: 2rem;
  border-radius: 1rem;
}

.mobile-menu-heading {
  font-size: 1.5rem;
  font-weight: 700;
  text-align: center;
  margin-bottom: 1.5rem;
}

.mobile-menu-links {
  display: flex;
  flex-direction: column;
  gap: 1.5rem;
}

.mobile-nav-link {
  font-size: 1.125rem;
  text-align: center;
  transition: color var(--transition-normal), transform var(--transition-normal);
}

.mobile-nav-link:hover {
  color: var(--space-accent);
  transform: scale(1.05);
}

@media (max-width: 767px) {
  .nav-links { display: none; }
  .mobile-menu-button { display: block; }
}

@media (min-width: 768px) {
  .mobile-menu-overlay { display: none !important; }
}

/* === Sections === */
.page-section {
  padding: 5rem 1.5rem;
}

.section-inner {
  max-width: 72rem;
  margin: 0 auto;
}

.section-inner.narrow {
  max-width: 56rem;
}

.section-heading {
  text-align: center;
  margin-bottom: 4rem;
}

.section-title {
  font-size: 2.75rem;
  font-weight: 700;
  margin-bottom: 1rem;
}

.section-subtitle {
  color: var(--text-muted);
  font-size: 1.125rem;
}

/* === Hero === */
.hero {
  min-height: 100vh;
  display: flex;
  align-items: center;
  justify-content: center;
  padding-top: 5rem;
}

.hero-grid {
  display: grid;
  grid-template-columns: repeat(auto-fit, minmax(18rem, 1fr));
  gap: 3rem;
  align-items: center;
}

.portrait-ring {
  width: 20rem;
  height: 20rem;
  margin: 0 auto;
  padding: 4px;
  border-radius: 50%;
  background: linear-gradient(135deg, var(--space-accent), var(--space-blue));
  animation: glow 3s ease-in-out infinite alternate;
}

.portrait {
  width: 100%;
  height: 100%;
  border-radius: 50%;
  object-fit: cover;
  background: var(--space-dark);
}

.hero-name {
  font-size: 4rem;
  font-weight: 700;
  margin-bottom: 1.5rem;
}

.hero-title {
  font-size: 1.25rem;
  color: var(--text-secondary);
  margin-bottom: 1rem;
}

.hero-bio {
  font-size: 1.125rem;
  color: var(--text-muted);
  line-height: 1.7;
  margin-bottom: 1rem;
}

@keyframes glow {
  from { box-shadow: 0 0 20px rgba(139, 92, 246, 0.4); }
  to { box-shadow: 0 0 40px rgba(96, 165, 250, 0.6); }
}

@keyframes float {
  0%, 100% { transform: translateY(0); }
  50% { transform: translateY(-10px); }
}

/* === Skills === */
.skills-grid {
  display: grid;
  grid-template-columns: repeat(auto-fit, minmax(22rem, 1fr));
  gap: 2rem;
}

.card {
  border-radius: 1rem;
  padding: 2rem;
}

.card-title {
  display: flex;
  align-items: center;
  gap: 0.75rem;
  font-size: 1.5rem;
  font-weight: 700;
  color: var(--space-accent);
  margin-bottom: 1.5rem;
}

.card-icon {
  width: 1.5rem;
  height: 1.5rem;
}

.skill-list {
  display: grid;
  grid-template-columns: repeat(2, 1fr);
  gap: 1rem;
}

.skill-item {
  background: rgba(20, 23, 53, 0.5);
  padding: 1rem;
  border-radius: 0.5rem;
}

.skill-name {
  font-weight: 600;
}

.skill-detail {
  font-size: 0.875rem;
  color: var(--space-glow);
}

/* === Education Timeline === */
.timeline {
  position: relative;
}

.timeline-line {
  position: absolute;
  left: 2rem;
  top: 0;
  bottom: 0;
  width: 2px;
  opacity: 0.5;
  background: linear-gradient(to bottom, var(--space-accent), var(--space-glow), var(--space-accent));
}

.timeline-entries {
  display: flex;
  flex-direction: column;
  gap: 3rem;
}

.timeline-entry {
  display: flex;
  align-items: flex-start;
}

.timeline-dot {
  flex-shrink: 0;
  width: 4rem;
  height: 4rem;
  border-radius: 50%;
  display: flex;
  align-items: center;
  justify-content: center;
  position: relative;
  z-index: 1;
  background: var(--space-accent);
}

.timeline-dot.alt {
  background: var(--space-glow);
  animation: float 6s ease-in-out infinite;
}

.timeline-dot img {
  width: 2rem;
  height: 2rem;
  filter: invert(1);
}

.timeline-card {
  flex: 1;
  margin-left: 2rem;
  padding: 1.5rem;
  border-radius: 1rem;
}

.entry-header {
  display: flex;
  flex-wrap: wrap;
  justify-content: space-between;
  align-items: center;
  gap: 0.5rem;
  margin-bottom: 0.75rem;
}

.entry-title {
  font-size: 1.5rem;
  font-weight: 700;
}

.entry-period {
  font-family: 'JetBrains Mono', monospace;
  color: var(--space-accent);
}

.entry-body {
  color: var(--text-muted);
  margin: 0.75rem 0 1rem;
}

.tags {
  display: flex;
  flex-wrap: wrap;
  gap: 0.5rem;
}

.tag {
  padding: 0.25rem 0.75rem;
  border-radius: 9999px;
  font-size: 0.875rem;
  color: var(--space-accent);
  background: rgba(139, 92, 246, 0.2);
}

.tag.small {
  border-radius: 0.25rem;
  font-size: 0.75rem;
  padding: 0.25rem 0.5rem;
}

/* === Experience === */
.experience-list {
  display: flex;
  flex-direction: column;
  gap: 2rem;
}

.highlights {
  list-style: none;
  color: var(--text-muted);
  display: flex;
  flex-direction: column;
  gap: 0.5rem;
  margin-bottom: 1rem;
}

.highlight-marker {
  color: var(--space-accent);
  margin-right: 0.5rem;
}

/* === Projects === */
.project-grid {
  display: grid;
  grid-template-columns: repeat(auto-fit, minmax(18rem, 1fr));
  gap: 2rem;
}

.project-cover {
  height: 12rem;
  border-radius: 0.5rem;
  margin-bottom: 1rem;
  display: flex;
  align-items: center;
  justify-content: center;
  background: linear-gradient(135deg, #22c55e, #3b82f6);
}

.project-cover svg {
  width: 4rem;
  height: 4rem;
  color: #ffffff;
}

.project-links {
  display: flex;
  gap: 1rem;
  margin-top: 1rem;
}

.project-links a {
  color: var(--space-accent);
  transition: color var(--transition-fast);
}

.project-links a:hover {
  color: var(--space-glow);
}

/* === Contact === */
.contact-links {
  display: flex;
  flex-wrap: wrap;
  justify-content: center;
  gap: 1.5rem;
}

.contact-link {
  display: flex;
  align-items: center;
  gap: 0.75rem;
  padding: 1rem 2rem;
  border-radius: 0.5rem;
  cursor: pointer;
}

.contact-link svg {
  width: 1.5rem;
  height: 1.5rem;
  color: var(--space-accent);
}

/* === Copy Toast === */
.copy-toast {
  position: fixed;
  top: 5rem;
  left: 50%;
  transform: translateX(-50%);
  z-index: 60;
  display: flex;
  align-items: center;
  gap: 0.75rem;
  padding: 1rem 1.5rem;
  border-radius: 1rem;
  opacity: 1;
  transition: opacity var(--transition-slow);
}

.copy-toast.fading {
  opacity: 0;
}

.toast-check {
  width: 2rem;
  height: 2rem;
  border-radius: 50%;
  background: var(--success);
  display: flex;
  align-items: center;
  justify-content: center;
  animation: pulse 2s ease-in-out infinite;
}

.toast-check svg {
  width: 1.25rem;
  height: 1.25rem;
  color: #ffffff;
}

.toast-title {
  font-weight: 600;
}

.toast-detail {
  font-size: 0.875rem;
  color: var(--text-secondary);
}

@keyframes pulse {
  0%, 100% { opacity: 1; }
  50% { opacity: 0.6; }
}

/* === Footer === */
.page-footer {
  padding: 3rem 1.5rem;
  text-align: center;
  color: var(--text-muted);
  border-top: 1px solid rgba(139, 92, 246, 0.2);
}

.animate-fade-in {
  animation: fade-in 0.3s ease-out;
}

@keyframes fade-in {
  from { opacity: 0; transform: scale(0.95); }
  to { opacity: 1; transform: scale(1); }
}
"#;
