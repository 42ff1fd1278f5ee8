pub const PAGE_STYLES: &str = r#"
/* Page layout */
.page {
  min-height: 100vh;
  font-family: system-ui, -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
  transition: background-color var(--transition-normal) var(--easing-standard),
  color var(--transition-normal) var(--easing-standard);
}

.app-header {
  position: fixed;
  top: 0;
  left: 0;
  width: 100%;
  z-index: 50;
  box-shadow: var(--shadow-md);
}

.nav-container {
  max-width: var(--content-width);
  margin: 0 auto;
  display: flex;
  justify-content: space-between;
  align-items: center;
  padding: var(--space-4);
}

.logo {
  font-size: 1.25rem;
  font-weight: 700;
}

.nav-links {
  display: flex;
  align-items: center;
  gap: var(--space-6);
}

.nav-link {
  color: inherit;
  transition: color var(--transition-normal) var(--easing-standard);
}

.nav-link:hover,
.nav-link.active {
  color: var(--blue-400);
  text-decoration: none;
}

.page-section {
  max-width: var(--content-width);
  margin: 0 auto;
  padding: var(--space-20) var(--space-6) var(--space-6);
}

.section-title {
  font-size: 1.875rem;
  font-weight: 600;
  margin-bottom: var(--space-6);
  padding-bottom: var(--space-2);
  border-bottom: 1px solid var(--gray-700);
}

/* Hero */
.hero {
  height: 100vh;
  display: flex;
  flex-direction: column;
  justify-content: center;
  align-items: center;
  text-align: center;
  padding: var(--space-20) var(--space-6) 0;
}

.hero-title {
  font-size: 3rem;
  font-weight: 700;
  margin-bottom: var(--space-4);
}

.hero-tagline {
  font-size: 1.25rem;
  margin-bottom: var(--space-6);
}

/* Projects */
.project-grid {
  display: grid;
  gap: var(--space-6);
}

@media (min-width: 768px) {
  .project-grid {
    grid-template-columns: repeat(2, 1fr);
  }
}

.project-card {
  padding: var(--space-4);
  border-radius: var(--radius-lg);
  box-shadow: var(--shadow-md);
  transition: box-shadow var(--transition-normal) var(--easing-standard);
}

.project-card:hover {
  box-shadow: var(--shadow-xl);
}

.project-title {
  font-size: 1.25rem;
  font-weight: 700;
}

.project-card p {
  margin-top: var(--space-2);
}

.project-card .label {
  font-weight: 700;
}

.repo-link {
  display: inline-block;
  margin-top: var(--space-3);
  color: var(--blue-400);
}

/* Skills */
.skill-grid {
  display: grid;
  gap: var(--space-4);
  grid-template-columns: repeat(2, 1fr);
}

@media (min-width: 640px) {
  .skill-grid {
    grid-template-columns: repeat(3, 1fr);
  }
}

@media (min-width: 768px) {
  .skill-grid {
    grid-template-columns: repeat(4, 1fr);
  }
}

.skill-tile {
  padding: var(--space-3);
  border-radius: var(--radius-lg);
  text-align: center;
  transition: transform var(--transition-normal) var(--easing-standard);
}

/* Contact */
.contact {
  text-align: center;
}

.contact-links {
  display: flex;
  justify-content: center;
  gap: var(--space-6);
  font-size: 1.5rem;
}

.contact-links a {
  color: inherit;
  transition: color var(--transition-normal) var(--easing-standard);
}

.contact-links a:hover {
  color: var(--blue-400);
}

/* Footer */
.site-footer {
  padding: var(--space-4);
  text-align: center;
  margin-top: var(--space-10);
}

.not-found {
  text-align: center;
}
"#;
