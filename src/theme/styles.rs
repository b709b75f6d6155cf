//! Global CSS styles for Beeper.
//!
//! Bright retro desk: beige pager, green LCD, paper-slip message cards.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* DESK */
  --desk-bg: #f8f9fa;
  --desk-grid: #cbd5e1;
  --desk-vignette: #e2e8f0;
  --ink: #1e293b;
  --ink-muted: #64748b;
  --teal: #0d9488;

  /* PAGER */
  --pager-body: #f3f4f6;
  --pager-edge: #cbd5e1;
  --lcd: #5c7a66;
  --lcd-border: #4b5563;
  --lcd-ink: #000000;

  /* CARD THEMES */
  --classic-bg: #f4f1ea;
  --classic-ink: #1f2937;
  --classic-edge: #1f2937;
  --urgent-bg: #fee2e2;
  --urgent-ink: #7f1d1d;
  --urgent-edge: #dc2626;
  --love-bg: #fce7f3;
  --love-ink: #831843;
  --love-edge: #ec4899;

  /* Typography */
  --font-lcd: 'VT323', 'Courier New', monospace;
  --font-mono: 'JetBrains Mono', 'SF Mono', 'Consolas', monospace;

  /* Transitions */
  --transition-fast: 150ms ease;
  --transition-normal: 300ms ease;
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

html, body {
  width: 100%;
  height: 100%;
  overflow: hidden;
  -webkit-font-smoothing: antialiased;
}

body {
  font-family: var(--font-mono);
  background: var(--desk-bg);
  color: var(--ink);
}

::selection {
  background: #99f6e4;
  color: #134e4a;
}

/* === Desk === */
.desk {
  position: relative;
  width: 100vw;
  height: 100vh;
  overflow: hidden;
  touch-action: none;
}

.desk__grid {
  position: absolute;
  inset: 0;
  opacity: 0.2;
  pointer-events: none;
  background-image:
    linear-gradient(var(--desk-grid) 1px, transparent 1px),
    linear-gradient(90deg, var(--desk-grid) 1px, transparent 1px);
  background-size: 40px 40px;
}

.desk__vignette {
  position: absolute;
  inset: 0;
  opacity: 0.6;
  pointer-events: none;
  background: radial-gradient(circle, transparent 40%, var(--desk-vignette) 100%);
}

.desk__header {
  position: absolute;
  top: 1.5rem;
  left: 2rem;
  z-index: 50;
  display: flex;
  flex-direction: column;
  gap: 0.25rem;
  pointer-events: none;
  opacity: 0.9;
}

.desk__title {
  font-family: var(--font-lcd);
  font-size: 2.25rem;
  color: var(--teal);
  letter-spacing: 0.1em;
  text-shadow: 0 2px 0 rgba(0, 0, 0, 0.1);
}

.desk__hint {
  font-size: 0.75rem;
  color: var(--ink-muted);
}

.desk__stage {
  position: relative;
  width: 100%;
  height: 100%;
  display: flex;
  align-items: center;
  justify-content: center;
}

.desk__footer {
  position: absolute;
  bottom: 1rem;
  right: 1.5rem;
  font-size: 10px;
  color: #94a3b8;
}

/* === Pager === */
.pager-slot {
  z-index: 40;
  margin-right: 24rem;
  filter: drop-shadow(0 20px 25px rgba(0, 0, 0, 0.15));
}

.pager {
  position: relative;
  width: 20rem;
  padding: 1rem;
  border-radius: 0.75rem;
  background: var(--pager-body);
  border-bottom: 4px solid var(--pager-edge);
  border-right: 4px solid var(--pager-edge);
}

.pager__clip {
  position: absolute;
  right: -0.75rem;
  top: 2.5rem;
  width: 1rem;
  height: 6rem;
  z-index: -1;
  background: #d1d5db;
  border-radius: 0 0.5rem 0.5rem 0;
  border-right: 1px solid #9ca3af;
}

.pager__brand {
  display: flex;
  justify-content: space-between;
  align-items: center;
  margin-bottom: 0.75rem;
  padding: 0 0.25rem;
}

.pager__brand-name {
  color: #6b7280;
  font-weight: bold;
  font-style: italic;
  font-size: 0.75rem;
  letter-spacing: 0.05em;
}

.pager__model {
  color: #374151;
  font-size: 10px;
}

.lcd {
  position: relative;
  height: 6rem;
  margin-bottom: 1rem;
  padding: 0.5rem;
  display: flex;
  flex-direction: column;
  overflow: hidden;
  border-radius: 0.25rem;
  border: 2px solid var(--lcd-border);
  background: var(--lcd);
  box-shadow: inset 0 2px 5px rgba(0, 0, 0, 0.4);
  font-family: var(--font-lcd);
  font-size: 1.5rem;
  transition: filter 500ms ease;
}

.lcd--off {
  filter: brightness(0.5) saturate(0);
}

.lcd__status {
  display: flex;
  justify-content: space-between;
  font-size: 0.875rem;
  color: rgba(0, 0, 0, 0.7);
  opacity: 0.6;
  margin-bottom: 0.25rem;
  padding-bottom: 0.25rem;
  border-bottom: 1px solid rgba(0, 0, 0, 0.1);
}

.lcd__status--error {
  opacity: 1;
  color: #7f1d1d;
}

.lcd__input-row {
  position: relative;
  flex: 1;
  display: flex;
}

.lcd__input {
  width: 100%;
  height: 100%;
  background: transparent;
  border: none;
  outline: none;
  resize: none;
  color: var(--lcd-ink);
  font-family: var(--font-lcd);
  font-size: 1.5rem;
  font-weight: bold;
  line-height: 1.5rem;
  text-transform: uppercase;
  caret-color: transparent;
}

.lcd__input::placeholder {
  color: rgba(0, 0, 0, 0.3);
}

.lcd__cursor {
  position: absolute;
  right: 0.25rem;
  bottom: 0.25rem;
  width: 0.6rem;
  height: 1.1rem;
  background: var(--lcd-ink);
  opacity: 0.7;
}

.lcd__cursor--hidden {
  visibility: hidden;
}

.lcd__off {
  width: 100%;
  height: 100%;
  display: flex;
  align-items: center;
  justify-content: center;
  color: var(--lcd-ink);
  opacity: 0.4;
}

.pager__controls {
  display: grid;
  grid-template-columns: repeat(4, 1fr);
  gap: 0.5rem;
}

.pager-btn {
  height: 2.5rem;
  border: none;
  border-radius: 0.25rem;
  border-bottom: 4px solid;
  display: flex;
  align-items: center;
  justify-content: center;
  cursor: pointer;
  font-size: 1rem;
  transition: color var(--transition-fast), transform var(--transition-fast);
}

.pager-btn:active:not(:disabled) {
  border-bottom-width: 0;
  transform: translateY(4px);
}

.pager-btn:disabled {
  cursor: not-allowed;
  opacity: 0.5;
}

.pager-btn--rephrase {
  background: #ffffff;
  border-color: #d1d5db;
  color: #475569;
}

.pager-btn--rephrase:hover:not(:disabled) {
  color: var(--teal);
}

.pager-btn--power {
  background: #ef4444;
  border-color: #b91c1c;
  color: #ffffff;
}

.pager-btn--send {
  background: #14b8a6;
  border-color: #0f766e;
  color: #ffffff;
}

.spin {
  display: inline-block;
  animation: spin 1s linear infinite;
}

@keyframes spin {
  to { transform: rotate(360deg); }
}

.pager__dots {
  margin-top: 1rem;
  display: flex;
  justify-content: center;
  gap: 0.25rem;
}

.pager__dot {
  width: 0.25rem;
  height: 0.25rem;
  border-radius: 50%;
  background: #9ca3af;
}

/* === Message Cards === */
.card {
  position: absolute;
  width: 16rem;
  padding: 1rem;
  border-radius: 2px;
  border-left: 4px solid;
  box-shadow: 4px 4px 0 0 rgba(0, 0, 0, 0.2);
  font-size: 0.875rem;
  user-select: none;
  cursor: grab;
  animation: card-enter 300ms ease-out;
  transition: scale var(--transition-fast), box-shadow var(--transition-fast);
}

.card--dragging {
  cursor: grabbing;
  scale: 1.05;
  z-index: 50;
  box-shadow: 8px 8px 0 0 rgba(0, 0, 0, 0.2);
}

@keyframes card-enter {
  from { opacity: 0; scale: 0.8; translate: 0 20px; }
  to { opacity: 1; scale: 1; translate: 0 0; }
}

.card--classic {
  background: var(--classic-bg);
  color: var(--classic-ink);
  border-left-color: var(--classic-edge);
}

.card--urgent {
  background: var(--urgent-bg);
  color: var(--urgent-ink);
  border-left-color: var(--urgent-edge);
}

.card--love {
  background: var(--love-bg);
  color: var(--love-ink);
  border-left-color: var(--love-edge);
}

.card__header {
  display: flex;
  justify-content: space-between;
  align-items: center;
  margin-bottom: 0.5rem;
  padding-bottom: 0.25rem;
  border-bottom: 1px solid rgba(0, 0, 0, 0.1);
  opacity: 0.5;
}

.card__time {
  display: flex;
  align-items: center;
  gap: 0.25rem;
  font-size: 0.75rem;
  letter-spacing: 0.1em;
}

.card__grip {
  cursor: grab;
}

.card__delete {
  background: none;
  border: none;
  color: inherit;
  cursor: pointer;
  font-size: 0.9rem;
  line-height: 1;
  transition: color var(--transition-fast);
}

.card__delete:hover {
  color: #dc2626;
}

.card__body {
  min-height: 3rem;
  font-family: var(--font-lcd);
  font-weight: bold;
  font-size: 1.25rem;
  line-height: 1.5rem;
  letter-spacing: 0.025em;
  word-break: break-word;
}

.card__caret {
  display: inline-block;
  width: 0.5rem;
  height: 1rem;
  margin-left: 0.25rem;
  vertical-align: middle;
  background: currentColor;
  animation: pulse 2s cubic-bezier(0.4, 0, 0.6, 1) infinite;
}

.card__footer {
  margin-top: 0.75rem;
  display: flex;
  justify-content: space-between;
  align-items: flex-end;
  opacity: 0.3;
}

.card__bar {
  height: 0.25rem;
  width: 2rem;
  background: currentColor;
}

.card__brand {
  font-size: 10px;
}

.pulse {
  animation: pulse 2s cubic-bezier(0.4, 0, 0.6, 1) infinite;
}

@keyframes pulse {
  0%, 100% { opacity: 1; }
  50% { opacity: 0.5; }
}
"#;
