//! Global CSS styles for Photodrop.
//!
//! One card on a light page; blue header, dashed drop zone, green send.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* SURFACES */
  --page-bg: #f1f3f6;
  --card-bg: #ffffff;
  --muted-bg: #f8f9fa;
  --border: #dee2e6;

  /* ACCENTS */
  --primary: #0d6efd;
  --primary-soft: rgba(13, 110, 253, 0.08);
  --success: #198754;
  --success-soft: #d1e7dd;
  --danger: #dc3545;
  --danger-soft: #f8d7da;

  /* TEXT */
  --text-primary: #212529;
  --text-muted: #6c757d;

  /* Typography */
  --font-sans: system-ui, -apple-system, 'Segoe UI', Roboto, sans-serif;
  --text-sm: 0.875rem;
  --text-base: 1rem;
  --text-lg: 1.25rem;
  --text-xl: 1.5rem;

  /* Transitions */
  --transition-fast: 150ms ease;
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

body {
  font-family: var(--font-sans);
  background: var(--page-bg);
  color: var(--text-primary);
  line-height: 1.5;
  min-height: 100vh;
}

.app {
  outline: none;
  padding: 2.5rem 1rem;
  min-height: 100vh;
}

.text-muted {
  color: var(--text-muted);
}

/* === Card === */
.card {
  max-width: 720px;
  margin: 0 auto;
  background: var(--card-bg);
  border-radius: 0.5rem;
  box-shadow: 0 0.5rem 1rem rgba(0, 0, 0, 0.15);
  overflow: hidden;
}

.card__header {
  background: var(--primary);
  color: #fff;
  padding: 1rem 1.25rem;
}

.card__title {
  font-size: var(--text-xl);
  font-weight: 500;
  text-align: center;
}

.card__body {
  padding: 1.5rem;
}

/* === Form === */
.credentials {
  display: grid;
  grid-template-columns: 1fr 1fr;
  gap: 1rem;
  margin-bottom: 1.5rem;
}

.form-field {
  display: flex;
  flex-direction: column;
  gap: 0.5rem;
}

.input-label {
  font-size: var(--text-base);
}

.input-field {
  font: inherit;
  padding: 0.375rem 0.75rem;
  border: 1px solid var(--border);
  border-radius: 0.375rem;
  transition: border-color var(--transition-fast), box-shadow var(--transition-fast);
}

.input-field:focus {
  outline: none;
  border-color: #86b7fe;
  box-shadow: 0 0 0 0.25rem rgba(13, 110, 253, 0.25);
}

/* === Buttons === */
.btn {
  display: inline-flex;
  align-items: center;
  gap: 0.5rem;
  font: inherit;
  padding: 0.375rem 0.75rem;
  border-radius: 0.375rem;
  border: 1px solid transparent;
  background: transparent;
  cursor: pointer;
  transition: background var(--transition-fast), color var(--transition-fast);
}

.btn:disabled {
  opacity: 0.65;
  cursor: not-allowed;
}

.btn-outline {
  color: var(--primary);
  border-color: var(--primary);
}

.btn-outline:hover:not(:disabled) {
  color: #fff;
  background: var(--primary);
}

.btn-danger {
  color: var(--danger);
  border-color: var(--danger);
}

.btn-danger:hover:not(:disabled) {
  color: #fff;
  background: var(--danger);
}

.btn-send {
  color: #fff;
  background: var(--success);
  border-color: var(--success);
  font-size: var(--text-lg);
  padding: 0.5rem 3rem;
}

.spinner {
  width: 1rem;
  height: 1rem;
  border: 0.15em solid currentColor;
  border-right-color: transparent;
  border-radius: 50%;
  animation: spin 0.75s linear infinite;
}

@keyframes spin {
  to { transform: rotate(360deg); }
}

/* === Drop Zone === */
.drop-zone {
  border: 2px dashed var(--text-muted);
  border-radius: 0.375rem;
  padding: 1.5rem;
  margin-bottom: 1.5rem;
  text-align: center;
  transition: border-color var(--transition-fast), background var(--transition-fast);
}

.drop-zone--active {
  border-color: var(--primary);
  background: var(--primary-soft);
}

.drop-zone__prompt {
  display: flex;
  flex-direction: column;
  align-items: center;
  gap: 0.75rem;
}

.drop-zone__icon {
  font-size: 4rem;
  color: var(--text-muted);
}

.drop-zone__title {
  font-size: var(--text-lg);
  font-weight: 500;
  color: var(--text-muted);
}

.drop-zone__hint {
  font-size: var(--text-sm);
  color: var(--text-muted);
}

.preview__img {
  max-width: 100%;
  max-height: 300px;
  border-radius: 0.375rem;
  margin-bottom: 1rem;
}

.preview__actions {
  display: flex;
  justify-content: center;
  gap: 0.5rem;
}

.send-row {
  text-align: center;
}

/* === Status === */
.alert {
  margin-top: 1.5rem;
  padding: 1rem;
  border-radius: 0.375rem;
  border: 1px solid transparent;
}

.alert--success {
  color: #0f5132;
  background: var(--success-soft);
  border-color: #badbcc;
}

.alert--danger {
  color: #842029;
  background: var(--danger-soft);
  border-color: #f5c2c7;
}

/* === Instructions === */
.instructions {
  margin-top: 1.5rem;
  padding: 1rem;
  background: var(--muted-bg);
  border-radius: 0.375rem;
}

.instructions__title {
  font-size: var(--text-base);
  font-weight: 700;
  margin-bottom: 0.5rem;
}

.instructions__list {
  font-size: var(--text-sm);
  padding-left: 1.5rem;
}

@media (max-width: 600px) {
  .credentials {
    grid-template-columns: 1fr;
  }
}
"#;
