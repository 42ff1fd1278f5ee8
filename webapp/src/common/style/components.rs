pub const BASE_COMPONENTS: &str = r#"
/* Buttons */
.btn-primary {
  display: inline-block;
  background-color: var(--blue-500);
  color: var(--white);
  padding: var(--space-2) var(--space-5);
  border-radius: var(--radius-md);
  transition: background-color var(--transition-normal) var(--easing-standard),
  transform var(--transition-normal) var(--easing-standard);
}

.btn-primary:hover {
  background-color: var(--blue-600);
  text-decoration: none;
}

.theme-toggle {
  display: inline-flex;
  align-items: center;
  justify-content: center;
  padding: var(--space-2);
  border: none;
  border-radius: var(--radius-full);
  background-color: var(--gray-700);
  color: var(--white);
  cursor: pointer;
  transition: background-color var(--transition-normal) var(--easing-standard);
}

.theme-toggle:hover {
  background-color: var(--gray-600);
}

.icon {
  width: 1em;
  height: 1em;
}

/* Motion */
@keyframes enter {
  from {
    opacity: 0;
    transform: translateY(var(--enter-from, 0px));
  }
  to {
    opacity: 1;
    transform: translateY(0);
  }
}

.hover-scale:hover {
  transform: scale(var(--hover-scale, 1));
}

@media (prefers-reduced-motion: reduce) {
  * {
    animation: none !important;
    transition: none !important;
  }
}
"#;
