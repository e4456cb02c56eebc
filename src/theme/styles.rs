//! Global CSS styles for the Velocis landing page.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* NIGHT (Backgrounds) */
  --night: #0b0c10;
  --night-lighter: #1f2833;
  --panel: #1b1f23;
  --border: #4b5563;

  /* TEXT */
  --text-primary: #ffffff;
  --text-secondary: #d1d5db;
  --text-muted: #6b7280;

  /* SEMANTIC */
  --success: #34d399;
  --danger: #f87171;

  /* Typography */
  --font-sans: 'Inter', system-ui, -apple-system, 'Segoe UI', sans-serif;

  /* Transitions */
  --transition-fast: 150ms ease;
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

html {
  scroll-behavior: smooth;
}

body {
  min-height: 100vh;
  background: linear-gradient(to bottom, var(--night), var(--night-lighter));
  color: var(--text-primary);
  font-family: var(--font-sans);
  line-height: 1.5;
}

/* === Landing === */
.landing {
  min-height: 100vh;
}

.section-header {
  font-size: 1.875rem;
  font-weight: 600;
  text-align: center;
  margin-bottom: 2.5rem;
}

/* === Hero === */
.hero {
  text-align: center;
  padding: 5rem 1rem;
}

.hero-title {
  font-size: 3rem;
  font-weight: 700;
  margin-bottom: 1rem;
}

.hero-tagline {
  font-size: 1.25rem;
  margin-bottom: 0.75rem;
}

.hero-description {
  color: var(--text-secondary);
  margin-bottom: 1.5rem;
}

/* === Buttons === */
.btn-primary,
.btn-outline {
  display: inline-block;
  padding: 0.5rem 1.5rem;
  font-weight: 600;
  font-family: inherit;
  font-size: 1rem;
  border-radius: 0.25rem;
  cursor: pointer;
  text-decoration: none;
  transition: background var(--transition-fast), opacity var(--transition-fast);
}

.btn-primary {
  background: var(--text-primary);
  color: #000000;
  border: none;
}

.btn-primary:hover:not(:disabled) {
  background: #e5e7eb;
}

.btn-outline {
  background: transparent;
  color: var(--text-primary);
  border: 1px solid var(--border);
}

.btn-outline:hover:not(:disabled) {
  border-color: var(--text-primary);
}

.btn-primary:disabled,
.btn-outline:disabled {
  opacity: 0.6;
  cursor: not-allowed;
}

/* === Services === */
.services {
  padding: 4rem 1.5rem;
  max-width: 72rem;
  margin: 0 auto;
}

.service-grid {
  display: grid;
  gap: 2rem;
  grid-template-columns: repeat(auto-fit, minmax(16rem, 1fr));
}

.service-card {
  background: var(--panel);
  border-radius: 0.75rem;
  padding: 1.5rem;
  box-shadow: 0 4px 6px rgba(0, 0, 0, 0.3);
}

.service-title {
  font-size: 1.25rem;
  font-weight: 600;
  margin-bottom: 0.5rem;
}

.service-description {
  color: var(--text-secondary);
  margin-bottom: 1rem;
}

.service-price {
  font-weight: 700;
}

/* === Contact === */
.contact {
  background: var(--night);
  padding: 4rem 1.5rem;
  text-align: center;
}

.contact .section-header {
  margin-bottom: 1.5rem;
}

.contact-form {
  max-width: 36rem;
  margin: 0 auto;
  display: flex;
  flex-direction: column;
  gap: 1rem;
}

.input-field {
  width: 100%;
  padding: 0.75rem;
  border-radius: 0.25rem;
  background: var(--night-lighter);
  border: 1px solid var(--border);
  color: var(--text-primary);
  font-family: inherit;
  font-size: 1rem;
}

.input-field::placeholder {
  color: var(--text-muted);
}

.input-field:focus {
  outline: none;
  border-color: var(--text-secondary);
}

.input-field.textarea {
  resize: vertical;
}

.honeypot {
  display: none;
}

.contact-form .btn-primary {
  align-self: center;
}

/* === Status Banner === */
.status-banner {
  font-size: 0.875rem;
}

.status-banner--success {
  color: var(--success);
}

.status-banner--error {
  color: var(--danger);
}

/* === Footer === */
.site-footer {
  background: var(--night);
  text-align: center;
  font-size: 0.875rem;
  color: var(--text-muted);
  padding: 1.5rem 0;
}
"#;
