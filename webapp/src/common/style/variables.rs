pub const CSS_VARIABLES: &str = r#"
:root {
  /* Palette */
  --gray-100: #F3F4F6;
  --gray-200: #E5E7EB;
  --gray-600: #4B5563;
  --gray-700: #374151;
  --gray-800: #1F2937;
  --gray-900: #111827;
  --blue-400: #60A5FA;
  --blue-500: #3B82F6;
  --blue-600: #2563EB;
  --white: #FFFFFF;

  /* Layout */
  --content-width: 72rem;

  /* Spacing System */
  --space-2: 8px;
  --space-3: 12px;
  --space-4: 16px;
  --space-5: 20px;
  --space-6: 24px;
  --space-10: 40px;
  --space-20: 80px;

  /* Border Radius */
  --radius-md: 6px;
  --radius-lg: 8px;
  --radius-full: 9999px;

  /* Shadows */
  --shadow-md: 0 4px 6px -1px rgba(0, 0, 0, 0.1), 0 2px 4px -1px rgba(0, 0, 0, 0.06);
  --shadow-xl: 0 20px 25px -5px rgba(0, 0, 0, 0.1), 0 10px 10px -5px rgba(0, 0, 0, 0.04);

  /* Animation */
  --transition-normal: 150ms;
  --easing-standard: cubic-bezier(0.4, 0.0, 0.2, 1);
}

/* Theme class sets, applied at the page root */
.theme-dark {
  background-color: var(--gray-900);
  color: var(--white);
}

.theme-light {
  background-color: var(--white);
  color: var(--gray-900);
}

.surface-dark { background-color: var(--gray-800); }
.surface-light { background-color: var(--gray-200); }

.card-dark { background-color: var(--gray-800); }
.card-light { background-color: var(--gray-100); }

.tile-dark { background-color: var(--gray-800); }
.tile-light { background-color: var(--gray-200); }
"#;
