//! Global CSS styles for the portfolio page.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  --primary-color: #2563eb;
  --primary-dark: #1d4ed8;
  --surface: #ffffff;
  --surface-muted: #f8fafc;
  --border: #e2e8f0;
  --text-primary: #111827;
  --text-secondary: #4b5563;
  --success: #10b981;
  --danger: #ef4444;
  --info: #3b82f6;

  --font-sans: 'Inter', system-ui, -apple-system, 'Segoe UI', sans-serif;
  --font-mono: 'JetBrains Mono', 'SF Mono', 'Consolas', monospace;

  --radius: 8px;
  --transition-fast: 150ms ease;
  --transition-normal: 300ms ease-in-out;
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

html, body {
  height: 100%;
  overflow: hidden;
}

body {
  font-family: var(--font-sans);
  background: var(--surface);
  color: var(--text-primary);
  line-height: 1.6;
  -webkit-font-smoothing: antialiased;
}

.app-root {
  height: 100vh;
  display: flex;
  flex-direction: column;
}

/* === Skip Link === */
.skip-link {
  position: absolute;
  top: -40px;
  left: 8px;
  padding: 8px 16px;
  background: var(--primary-color);
  color: white;
  border-radius: var(--radius);
  z-index: 2000;
  text-decoration: none;
}

.skip-link:focus {
  top: 8px;
}

.keyboard-navigation *:focus {
  outline: 2px solid var(--primary-color) !important;
  outline-offset: 2px !important;
}

/* === Navigation === */
.site-header {
  position: sticky;
  top: 0;
  display: flex;
  align-items: center;
  justify-content: space-between;
  padding: 16px 32px;
  background: rgba(255, 255, 255, 0.95);
  border-bottom: 1px solid var(--border);
  z-index: 100;
}

.logo {
  font-weight: 700;
  font-size: 1.25rem;
  color: var(--text-primary);
  text-decoration: none;
}

.nav-menu {
  display: flex;
  gap: 24px;
  list-style: none;
}

.nav-link {
  color: var(--text-secondary);
  text-decoration: none;
  font-weight: 500;
  transition: color var(--transition-fast);
}

.nav-link:hover,
.nav-link.active {
  color: var(--primary-color);
}

/* === Page Layout === */
.page {
  flex: 1;
  overflow-y: auto;
  scroll-behavior: smooth;
}

.page:focus {
  outline: none;
}

section {
  padding: 96px 32px;
  max-width: 1100px;
  margin: 0 auto;
}

.section-title {
  font-size: 2rem;
  font-weight: 700;
  margin-bottom: 32px;
  text-align: center;
}

.hero {
  min-height: 80vh;
  display: flex;
  flex-direction: column;
  justify-content: center;
  gap: 24px;
}

.hero-title {
  font-size: 3rem;
  font-weight: 800;
}

.hero-title .highlight {
  color: var(--primary-color);
}

.hero-subtitle {
  font-size: 1.25rem;
  color: var(--text-secondary);
}

.hero-actions {
  display: flex;
  gap: 16px;
}

/* === Buttons === */
.btn {
  display: inline-flex;
  align-items: center;
  justify-content: center;
  padding: 12px 24px;
  border-radius: var(--radius);
  font: inherit;
  font-weight: 600;
  cursor: pointer;
  border: 2px solid var(--primary-color);
  transition: background-color var(--transition-fast), color var(--transition-fast);
  text-decoration: none;
}

.btn-primary {
  background: var(--primary-color);
  color: white;
}

.btn-primary:hover:not(:disabled) {
  background: var(--primary-dark);
}

.btn-secondary {
  background: transparent;
  color: var(--primary-color);
}

.btn-tool {
  padding: 6px 14px;
  font-size: 0.875rem;
  border-width: 1px;
  background: var(--surface);
  color: var(--primary-color);
}

.btn:disabled {
  opacity: 0.6;
  cursor: not-allowed;
}

/* === About === */
.about-content {
  display: grid;
  grid-template-columns: 2fr 1fr;
  gap: 48px;
}

.about-text p {
  margin-bottom: 16px;
  color: var(--text-secondary);
}

.stats {
  display: grid;
  gap: 16px;
}

.stat {
  padding: 24px;
  background: var(--surface-muted);
  border-radius: var(--radius);
  text-align: center;
}

.stat-number {
  font-size: 2rem;
  font-weight: 800;
  color: var(--primary-color);
}

/* === Projects & Skills === */
.projects-grid,
.skills-grid,
.tools-grid {
  display: grid;
  grid-template-columns: repeat(auto-fit, minmax(300px, 1fr));
  gap: 24px;
}

.project-card,
.skill-category,
.tool-card {
  padding: 24px;
  border: 1px solid var(--border);
  border-radius: var(--radius);
  background: var(--surface);
}

.project-card h3,
.skill-category h3,
.tool-card h3 {
  margin-bottom: 12px;
}

.project-tech,
.skill-list {
  display: flex;
  flex-wrap: wrap;
  gap: 8px;
  margin-top: 16px;
  list-style: none;
}

.tech-tag,
.skill-item {
  padding: 4px 10px;
  background: var(--surface-muted);
  border-radius: 999px;
  font-size: 0.8rem;
  color: var(--text-secondary);
}

/* === Scroll Reveal === */
.animate-on-scroll {
  opacity: 0;
  transform: translateY(30px);
  transition: opacity 0.6s ease-out, transform 0.6s ease-out;
}

.animate-on-scroll.animated {
  opacity: 1;
  transform: translateY(0);
}

/* === Developer Tools === */
.tool-textarea,
.tool-input {
  width: 100%;
  padding: 10px;
  font-family: var(--font-mono);
  font-size: 0.85rem;
  border: 1px solid var(--border);
  border-radius: var(--radius);
  resize: vertical;
}

.tool-actions {
  display: flex;
  flex-wrap: wrap;
  gap: 8px;
  margin: 12px 0;
}

.tool-status {
  min-height: 1.5em;
  font-size: 0.875rem;
}

.tool-status.success {
  color: var(--success);
}

.tool-status.error {
  color: var(--danger);
}

.color-inputs {
  display: flex;
  gap: 8px;
  align-items: center;
}

.color-picker {
  width: 48px;
  height: 40px;
  border: none;
  background: none;
  cursor: pointer;
}

.color-palette {
  display: grid;
  grid-template-columns: repeat(4, 1fr);
  gap: 8px;
  margin-top: 12px;
}

.color-swatch {
  height: 64px;
  border: none;
  border-radius: var(--radius);
  cursor: pointer;
  display: flex;
  align-items: flex-end;
  justify-content: center;
  padding-bottom: 6px;
  transition: transform var(--transition-fast);
}

.color-swatch:hover {
  transform: scale(1.05);
}

.color-code {
  font-family: var(--font-mono);
  font-size: 0.75rem;
  font-weight: 600;
}

/* === Contact === */
.contact-content {
  display: grid;
  grid-template-columns: 1fr 2fr;
  gap: 48px;
}

.contact-info p {
  color: var(--text-secondary);
  margin-bottom: 12px;
}

.contact-form {
  display: flex;
  flex-direction: column;
  gap: 20px;
}

.form-group {
  display: flex;
  flex-direction: column;
  gap: 6px;
}

.form-label {
  font-weight: 600;
}

.form-input,
.form-textarea {
  padding: 12px;
  font: inherit;
  border: 1px solid var(--border);
  border-radius: var(--radius);
  transition: border-color var(--transition-fast), box-shadow var(--transition-fast);
}

.form-input.error,
.form-textarea.error {
  border-color: #ef4444;
  box-shadow: 0 0 0 3px rgba(239, 68, 68, 0.1);
}

.form-input.valid,
.form-textarea.valid {
  border-color: #10b981;
  box-shadow: 0 0 0 3px rgba(16, 185, 129, 0.1);
}

.error-message {
  min-height: 1.2em;
  font-size: 0.85rem;
  color: var(--danger);
}

/* === Notifications === */
.notification {
  position: fixed;
  top: 100px;
  right: 20px;
  max-width: 400px;
  padding: 16px 20px;
  color: white;
  border-radius: var(--radius);
  box-shadow: 0 10px 15px -3px rgba(0, 0, 0, 0.1);
  z-index: 1000;
  animation: notification-in var(--transition-normal);
  transition: transform var(--transition-normal);
}

.notification.leaving {
  transform: translateX(120%);
}

@keyframes notification-in {
  from { transform: translateX(120%); }
  to { transform: translateX(0); }
}

.notification-content {
  display: flex;
  align-items: center;
  justify-content: space-between;
  gap: 12px;
}

.notification-close {
  background: none;
  border: none;
  color: white;
  font-size: 20px;
  cursor: pointer;
  width: 24px;
  height: 24px;
  display: flex;
  align-items: center;
  justify-content: center;
  border-radius: 50%;
  transition: background-color 0.2s ease;
}

.notification-close:hover {
  background-color: rgba(255, 255, 255, 0.2);
}

/* === Footer === */
.site-footer {
  padding: 32px;
  text-align: center;
  color: var(--text-secondary);
  border-top: 1px solid var(--border);
}

@media (max-width: 768px) {
  .about-content,
  .contact-content {
    grid-template-columns: 1fr;
  }

  .nav-menu {
    gap: 12px;
    font-size: 0.9rem;
  }

  .hero-title {
    font-size: 2rem;
  }
}
"#;
