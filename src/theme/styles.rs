//! Global CSS styles for Atelier Flo M.
//!
//! Gallery-night aesthetic: obsidian backgrounds, champagne accents,
//! ivory text. Serif drama type against a mono/sans body.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* OBSIDIAN (Backgrounds) */
  --obsidian: #0D0D12;
  --obsidian-lifted: #111118;
  --slate: #2A2A35;

  /* CHAMPAGNE (Accent) */
  --champagne: #C9A84C;
  --champagne-glow: rgba(201, 168, 76, 0.2);
  --champagne-faint: rgba(201, 168, 76, 0.1);

  /* IVORY (Text) */
  --ivory: #FAF8F5;
  --ivory-soft: rgba(250, 248, 245, 0.6);
  --ivory-muted: rgba(250, 248, 245, 0.4);
  --ivory-faint: rgba(250, 248, 245, 0.2);

  /* SEMANTIC */
  --status-green: #22c55e;

  /* Typography */
  --font-heading: 'Inter', 'Helvetica Neue', sans-serif;
  --font-drama: 'Playfair Display', Georgia, serif;
  --font-mono: 'JetBrains Mono', 'SF Mono', 'Consolas', monospace;

  /* Radii */
  --radius-card: 1.5rem;
  --radius-pill: 2rem;

  /* Transitions */
  --transition-fast: 300ms ease;
  --transition-soft: 500ms ease;
  --spring: cubic-bezier(0.34, 1.56, 0.64, 1);
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

html {
  font-size: 16px;
  scroll-behavior: smooth;
  -webkit-font-smoothing: antialiased;
}

body {
  font-family: var(--font-heading);
  background: var(--obsidian);
  color: var(--ivory);
  line-height: 1.6;
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

.page {
  background: var(--obsidian);
  min-height: 100vh;
}

/* === Shared section chrome === */
.eyebrow {
  font-family: var(--font-mono);
  font-size: 0.75rem;
  letter-spacing: 0.3em;
  text-transform: uppercase;
  color: rgba(201, 168, 76, 0.6);
}

.section-intro {
  margin-bottom: 4rem;
}

.section-intro.centered {
  text-align: center;
}

.section-heading {
  font-family: var(--font-heading);
  font-weight: 700;
  font-size: clamp(2rem, 4vw, 3rem);
  letter-spacing: -0.02em;
  margin-top: 1rem;
}

.section-sub {
  color: var(--ivory-muted);
  font-weight: 300;
  font-size: 1.125rem;
  max-width: 36rem;
  margin: 1rem auto 0;
}

.drama {
  font-family: var(--font-drama);
  font-style: italic;
  color: var(--champagne);
}

/* === Navbar === */
.navbar {
  position: fixed;
  top: 2rem;
  left: 50%;
  transform: translateX(-50%);
  z-index: 50;
  display: flex;
  align-items: center;
  gap: 2.5rem;
  padding: 1rem 2.5rem;
  border-radius: 3rem;
  background: rgba(13, 13, 18, 0.7);
  backdrop-filter: blur(16px);
  border: 1px solid rgba(255, 255, 255, 0.1);
  box-shadow: 0 24px 48px rgba(0, 0, 0, 0.4);
}

.navbar-brand {
  font-family: var(--font-drama);
  font-style: italic;
  font-size: 1.25rem;
  color: var(--champagne);
  letter-spacing: 0.05em;
}

.navbar-links {
  display: flex;
  align-items: center;
  gap: 2rem;
  font-size: 0.875rem;
  font-weight: 300;
  letter-spacing: 0.05em;
  white-space: nowrap;
}

.navbar-link {
  transition: color var(--transition-fast);
}

.navbar-link:hover {
  color: var(--champagne);
}

.navbar-cta {
  display: flex;
  align-items: center;
  gap: 0.5rem;
  background: var(--champagne);
  color: var(--obsidian);
  padding: 0.5rem 1.25rem;
  border-radius: var(--radius-pill);
  font-size: 0.875rem;
  font-weight: 600;
  letter-spacing: 0.05em;
  transition: transform var(--transition-fast), box-shadow var(--transition-fast);
}

.navbar-cta:hover {
  transform: translateY(-2px);
  box-shadow: 0 8px 24px var(--champagne-glow);
}

/* === Hero === */
.hero {
  position: relative;
  min-height: 100vh;
  display: flex;
  align-items: flex-end;
  overflow: hidden;
}

.hero-backdrop {
  position: absolute;
  inset: 0;
  background: #000;
}

.hero-video {
  width: 100%;
  height: 100%;
  object-fit: contain;
  object-position: center;
}

.hero-fallback {
  display: none;
}

.hero-scrim {
  position: absolute;
  inset: 0;
  background: linear-gradient(
    to top,
    rgba(13, 13, 18, 0.8),
    rgba(13, 13, 18, 0.65) 50%,
    rgba(13, 13, 18, 0.35)
  );
}

.hero-content {
  position: relative;
  z-index: 10;
  width: 100%;
  max-width: 72rem;
  padding: 8rem 4rem 6rem;
}

.hero-title {
  margin-bottom: 1.5rem;
  text-shadow: 0 2px 20px rgba(0, 0, 0, 0.7);
}

.hero-line-plain {
  display: block;
  font-family: var(--font-heading);
  font-weight: 700;
  font-size: clamp(2rem, 4vw, 3.75rem);
  letter-spacing: -0.02em;
  color: var(--ivory);
}

.hero-line-drama {
  display: block;
  font-family: var(--font-drama);
  font-style: italic;
  font-size: clamp(3rem, 8vw, 8rem);
  line-height: 0.95;
  color: var(--champagne);
  margin-top: 0.5rem;
}

.hero-sub {
  color: var(--ivory-soft);
  font-weight: 300;
  max-width: 36rem;
  margin-bottom: 2.5rem;
}

.hero-actions {
  display: flex;
  flex-wrap: wrap;
  gap: 1rem;
  margin-bottom: 7rem;
}

.cta {
  display: flex;
  align-items: center;
  gap: 0.75rem;
  padding: 1rem 2rem;
  border-radius: var(--radius-pill);
  font-size: 0.875rem;
  font-weight: 600;
  letter-spacing: 0.1em;
  text-transform: uppercase;
  transition: transform var(--transition-fast), box-shadow var(--transition-fast),
    border-color var(--transition-fast);
}

.cta-filled {
  background: var(--champagne);
  color: var(--obsidian);
}

.cta-filled:hover {
  transform: translateY(-2px);
  box-shadow: 0 12px 32px var(--champagne-glow);
}

.cta-outline {
  border: 1px solid rgba(201, 168, 76, 0.4);
  color: var(--champagne);
}

.cta-outline:hover {
  border-color: rgba(201, 168, 76, 0.8);
  background: var(--champagne-faint);
}

.hero-scroll-hint {
  position: absolute;
  bottom: 2rem;
  left: 50%;
  transform: translateX(-50%);
  display: flex;
  flex-direction: column;
  align-items: center;
  gap: 0.5rem;
  color: rgba(250, 248, 245, 0.3);
}

.hero-scroll-label {
  font-family: var(--font-mono);
  font-size: 0.75rem;
  letter-spacing: 0.3em;
  text-transform: uppercase;
}

.hero-scroll-chevron {
  animation: bounce-hint 1.5s infinite;
}

/* === Features === */
.features {
  padding: 7rem 4rem;
  max-width: 84rem;
  margin: 0 auto;
}

.features-grid {
  display: grid;
  grid-template-columns: repeat(3, minmax(0, 1fr));
  gap: 1.5rem;
}

.feature-card {
  display: flex;
  flex-direction: column;
  height: 100%;
  background: var(--obsidian);
  border: 1px solid rgba(255, 255, 255, 0.1);
  border-radius: var(--radius-card);
  padding: 2rem;
}

.feature-card-heading {
  display: flex;
  align-items: center;
  gap: 0.75rem;
  margin-bottom: 0.5rem;
}

.feature-card-icon {
  color: var(--champagne);
  display: flex;
}

.feature-card-title {
  font-family: var(--font-heading);
  font-weight: 700;
  font-size: 1.125rem;
}

.feature-card-tag {
  font-family: var(--font-mono);
  font-size: 0.75rem;
  letter-spacing: 0.1em;
  text-transform: uppercase;
  color: rgba(201, 168, 76, 0.7);
}

.feature-card-sub {
  color: rgba(250, 248, 245, 0.5);
  font-size: 0.875rem;
  font-weight: 300;
  margin-bottom: 2rem;
}

/* === Medium shuffler === */
.shuffler-stage {
  position: relative;
  flex: 1;
  min-height: 11rem;
}

.shuffler-card {
  position: absolute;
  left: 0;
  right: 0;
  padding: 1rem 1.25rem;
  border: 1px solid rgba(255, 255, 255, 0.1);
  border-left-width: 3px;
  border-left-style: solid;
  border-radius: 1.2rem;
  background: rgba(42, 42, 53, 0.8);
  backdrop-filter: blur(4px);
  transition: all 0.6s var(--spring);
}

.shuffler-index {
  font-family: var(--font-mono);
  font-size: 0.75rem;
  color: var(--ivory-muted);
}

.shuffler-label {
  color: var(--ivory);
  font-size: 0.875rem;
  font-weight: 500;
  margin-top: 0.25rem;
}

/* === Statement typewriter === */
.typewriter-box {
  flex: 1;
  background: rgba(42, 42, 53, 0.4);
  border-radius: 1rem;
  padding: 1.25rem;
  font-family: var(--font-mono);
  font-size: 0.875rem;
  line-height: 1.7;
}

.typewriter-prompt {
  color: rgba(201, 168, 76, 0.3);
}

.typewriter-text {
  color: rgba(250, 248, 245, 0.9);
}

.typewriter-caret {
  color: var(--champagne);
  margin-left: 0.125rem;
  animation: caret-blink 1s step-end infinite;
}

/* === Atelier scheduler === */
.scheduler-stage {
  position: relative;
  flex: 1;
  background: rgba(42, 42, 53, 0.4);
  border-radius: 1rem;
  padding: 1.25rem;
}

.scheduler-days {
  display: flex;
  gap: 0.5rem;
  margin-bottom: 1rem;
}

.scheduler-day {
  width: 2rem;
  height: 2rem;
  display: flex;
  align-items: center;
  justify-content: center;
  font-family: var(--font-mono);
  font-size: 0.75rem;
  border-radius: 0.5rem;
  background: rgba(255, 255, 255, 0.05);
  color: var(--ivory-muted);
  transition: all 0.3s ease;
}

.scheduler-day.selected {
  background: var(--champagne);
  color: var(--obsidian);
  transform: scale(0.95);
}

.scheduler-confirm {
  display: inline-block;
  background: var(--champagne-faint);
  border: 1px solid var(--champagne-glow);
  padding: 0.375rem 1rem;
  border-radius: 1rem;
  font-family: var(--font-mono);
  font-size: 0.75rem;
  color: rgba(201, 168, 76, 0.6);
}

.scheduler-pointer {
  position: absolute;
  pointer-events: none;
  transition: left 0.7s ease-out, top 0.7s ease-out;
}

/* === Philosophy === */
.philosophy {
  position: relative;
  padding: 10rem 4rem;
  background: var(--obsidian-lifted);
  overflow: hidden;
}

.philosophy-texture {
  position: absolute;
  inset: 0;
  opacity: 0.1;
}

.philosophy-texture img {
  width: 100%;
  height: 100%;
  object-fit: cover;
}

.philosophy-inner {
  position: relative;
  z-index: 10;
  max-width: 60rem;
  margin: 0 auto;
}

.philosophy-lead {
  color: var(--ivory-muted);
  font-size: clamp(1.25rem, 2vw, 1.5rem);
  font-weight: 300;
  margin: 2rem 0;
}

.philosophy-statement {
  font-size: clamp(1.875rem, 4vw, 3.75rem);
  line-height: 1.2;
}

.philosophy-statement .plain {
  font-family: var(--font-heading);
  font-weight: 700;
  color: var(--ivory);
}

/* === Protocol === */
.protocol {
  padding: 3rem 0;
}

.protocol-panel {
  min-height: 100vh;
  display: flex;
  align-items: center;
  justify-content: center;
  padding: 0 4rem;
  background: var(--obsidian);
}

.protocol-panel.alt {
  background: var(--obsidian-lifted);
}

.protocol-grid {
  max-width: 60rem;
  width: 100%;
  display: grid;
  grid-template-columns: repeat(2, minmax(0, 1fr));
  gap: 3rem;
  align-items: center;
}

.protocol-num {
  font-family: var(--font-mono);
  font-size: 0.875rem;
  letter-spacing: 0.2em;
  color: rgba(201, 168, 76, 0.5);
}

.protocol-title {
  font-family: var(--font-heading);
  font-weight: 700;
  font-size: clamp(2.25rem, 5vw, 3.75rem);
  letter-spacing: -0.02em;
  margin: 0.75rem 0 1.5rem;
}

.protocol-desc {
  color: rgba(250, 248, 245, 0.5);
  font-size: 1.125rem;
  font-weight: 300;
  max-width: 28rem;
}

.protocol-visual {
  display: flex;
  align-items: center;
  justify-content: center;
}

.orbit {
  width: 240px;
  height: 240px;
}

.orbit svg {
  width: 100%;
  height: 100%;
}

.slow-rotate {
  animation: spin-slow 24s linear infinite;
}

.scan-field {
  position: relative;
  width: 240px;
  height: 240px;
}

.scan-field svg {
  width: 100%;
  height: 100%;
}

.scan-line {
  position: absolute;
  left: 0;
  right: 0;
  top: 50%;
  height: 1px;
  background: linear-gradient(to right, transparent, var(--champagne), transparent);
  animation: scan-sweep 4s ease-in-out infinite;
}

.pulse-field {
  width: 100%;
  max-width: 300px;
  height: 120px;
}

.pulse-wave {
  stroke-dasharray: 600;
  stroke-dashoffset: 600;
  animation: wave-draw 3s linear infinite;
}

/* === Explorer === */
.explorer {
  padding: 7rem 4rem;
  max-width: 72rem;
  margin: 0 auto;
}

.explorer-grid {
  display: grid;
  grid-template-columns: repeat(2, minmax(0, 1fr));
  gap: 2rem;
}

.explorer-card {
  position: relative;
  overflow: hidden;
  display: flex;
  flex-direction: column;
  justify-content: space-between;
  min-height: 380px;
  padding: 3rem;
  border: 1px solid rgba(255, 255, 255, 0.1);
  border-radius: 2.5rem;
  transition: border-color var(--transition-soft), box-shadow var(--transition-soft);
}

.explorer-card:hover {
  border-color: rgba(201, 168, 76, 0.3);
}

.explorer-card.gilded {
  background: var(--champagne);
  color: var(--obsidian);
  border-color: var(--champagne);
}

.explorer-card.gilded:hover {
  box-shadow: 0 24px 64px var(--champagne-glow);
}

.explorer-card-bg {
  position: absolute;
  inset: 0;
  opacity: 0;
  transition: opacity 700ms ease;
}

.explorer-card:hover .explorer-card-bg {
  opacity: 1;
}

.explorer-card-bg img {
  width: 100%;
  height: 100%;
  object-fit: cover;
}

.explorer-card-veil {
  position: absolute;
  inset: 0;
  background: rgba(13, 13, 18, 0.8);
}

.explorer-card-veil.gilded {
  background: rgba(201, 168, 76, 0.85);
}

.explorer-card-body {
  position: relative;
  z-index: 10;
}

.explorer-chip {
  width: 4rem;
  height: 4rem;
  border-radius: 50%;
  background: var(--champagne-faint);
  border: 1px solid var(--champagne-glow);
  display: flex;
  align-items: center;
  justify-content: center;
  color: var(--champagne);
  margin-bottom: 2rem;
  transition: background var(--transition-fast);
}

.explorer-chip.dark {
  background: rgba(13, 13, 18, 0.1);
  border-color: rgba(13, 13, 18, 0.1);
  color: var(--obsidian);
}

.explorer-title {
  font-family: var(--font-heading);
  font-weight: 700;
  font-size: 1.75rem;
  margin-bottom: 0.75rem;
}

.explorer-desc {
  font-weight: 300;
  opacity: 0.6;
}

.explorer-card-foot {
  position: relative;
  z-index: 10;
  display: flex;
  align-items: center;
  gap: 0.75rem;
  margin-top: 2rem;
  font-size: 0.875rem;
  font-weight: 500;
  letter-spacing: 0.05em;
  text-transform: uppercase;
  transition: gap var(--transition-fast);
}

.explorer-card:hover .explorer-card-foot {
  gap: 1.25rem;
}

/* === Footer === */
.footer {
  background: var(--obsidian);
  border-top: 1px solid rgba(255, 255, 255, 0.05);
  border-radius: 4rem 4rem 0 0;
  padding: 5rem 4rem;
}

.footer-inner {
  max-width: 72rem;
  margin: 0 auto;
}

.footer-grid {
  display: grid;
  grid-template-columns: 2fr 1fr 1fr;
  gap: 3rem;
  margin-bottom: 4rem;
}

.footer-mark {
  font-family: var(--font-drama);
  font-style: italic;
  font-size: 1.875rem;
  color: var(--champagne);
  margin-bottom: 1rem;
}

.footer-blurb {
  color: var(--ivory-muted);
  font-weight: 300;
  font-size: 0.875rem;
  max-width: 24rem;
}

.footer-col-title {
  font-family: var(--font-mono);
  font-size: 0.75rem;
  letter-spacing: 0.2em;
  text-transform: uppercase;
  color: rgba(201, 168, 76, 0.5);
  margin-bottom: 1rem;
}

.footer-list {
  list-style: none;
  display: flex;
  flex-direction: column;
  gap: 0.75rem;
  font-size: 0.875rem;
  font-weight: 300;
  color: var(--ivory-muted);
}

.footer-list a {
  display: inline-flex;
  align-items: center;
  gap: 0.5rem;
  transition: color var(--transition-fast);
}

.footer-list a:hover {
  color: var(--champagne);
}

.footer-bottom {
  border-top: 1px solid rgba(255, 255, 255, 0.05);
  padding-top: 2rem;
  display: flex;
  align-items: center;
  justify-content: space-between;
  gap: 1rem;
}

.footer-copyright {
  font-family: var(--font-mono);
  font-size: 0.75rem;
  color: var(--ivory-faint);
}

.footer-status {
  display: flex;
  align-items: center;
  gap: 0.5rem;
}

.footer-status-label {
  font-family: var(--font-mono);
  font-size: 0.75rem;
  letter-spacing: 0.1em;
  color: var(--ivory-faint);
}

/* === Shared bits === */
.pulse-dot {
  width: 0.5rem;
  height: 0.5rem;
  border-radius: 50%;
  background: var(--champagne);
  animation: dot-pulse 2s ease-in-out infinite;
}

.pulse-dot.green {
  width: 0.375rem;
  height: 0.375rem;
  background: var(--status-green);
}

/* === Keyframes === */
@keyframes caret-blink {
  0%, 100% { opacity: 1; }
  50% { opacity: 0; }
}

@keyframes dot-pulse {
  0%, 100% { opacity: 1; transform: scale(1); }
  50% { opacity: 0.4; transform: scale(0.8); }
}

@keyframes bounce-hint {
  0%, 100% { transform: translateY(0); }
  50% { transform: translateY(6px); }
}

@keyframes spin-slow {
  from { transform: rotate(0deg); }
  to { transform: rotate(360deg); }
}

@keyframes scan-sweep {
  0%, 100% { top: 10%; }
  50% { top: 90%; }
}

@keyframes wave-draw {
  to { stroke-dashoffset: 0; }
}

/* === Narrow windows === */
@media (max-width: 900px) {
  .navbar-links { display: none; }
  .features-grid, .explorer-grid, .protocol-grid { grid-template-columns: 1fr; }
  .footer-grid { grid-template-columns: 1fr; }
  .hero-content, .features, .explorer, .philosophy { padding-left: 1.5rem; padding-right: 1.5rem; }
}
"#;
