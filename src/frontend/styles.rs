use leptos::*;

#[component]
pub fn StyleProvider() -> impl IntoView {
    view! { <style>{MAIN_STYLES}</style> }
}

// CSS-in-Rust: the whole stylesheet ships inside the wasm bundle. Light
// theme by default; `.app.dark` swaps the variable set.
const MAIN_STYLES: &str = r#"
* {
    box-sizing: border-box;
}

body {
    margin: 0;
    font-family: "Inter", "Segoe UI", system-ui, -apple-system, sans-serif;
    background-color: #f8fafc;
}

.app {
    --surface-0: #f8fafc;
    --surface-1: #ffffff;
    --surface-2: #f1f5f9;
    --surface-3: #e2e8f0;
    --border: #e2e8f0;
    --text: #0f172a;
    --text-muted: #64748b;
    --primary: #3b82f6;
    --primary-dark: #2563eb;
    --green: #22c55e;
    --red: #ef4444;
    --blue: #3b82f6;

    min-height: 100vh;
    background-color: var(--surface-0);
    color: var(--text);
    transition: background-color 0.3s ease, color 0.3s ease;
}

.app.dark {
    --surface-0: #0f172a;
    --surface-1: #1e293b;
    --surface-2: #334155;
    --surface-3: #475569;
    --border: #334155;
    --text: #f1f5f9;
    --text-muted: #94a3b8;
}

/* header */

.site-header {
    position: sticky;
    top: 0;
    z-index: 50;
    backdrop-filter: blur(6px);
    background-color: color-mix(in srgb, var(--surface-0) 85%, transparent);
    border-bottom: 1px solid var(--border);
}

.header-inner {
    max-width: 1200px;
    margin: 0 auto;
    padding: 0 24px;
    height: 64px;
    display: flex;
    align-items: center;
    justify-content: space-between;
}

.brand {
    display: flex;
    align-items: center;
    gap: 12px;
    text-decoration: none;
    color: var(--text);
}

.brand h1 {
    font-size: 1.25rem;
    margin: 0;
}

.brand-mark {
    display: inline-flex;
    padding: 8px;
    border-radius: 12px;
    background-color: color-mix(in srgb, var(--primary) 12%, transparent);
    color: var(--primary);
}

.header-actions {
    display: flex;
    align-items: center;
    gap: 16px;
}

.header-nav {
    display: flex;
    gap: 4px;
}

.nav-link {
    display: inline-flex;
    align-items: center;
    gap: 6px;
    padding: 6px 12px;
    border-radius: 10px;
    font-size: 0.875rem;
    text-decoration: none;
    color: var(--text-muted);
}

.nav-link:hover {
    color: var(--text);
    background-color: var(--surface-2);
}

.nav-link[aria-current="page"] {
    color: var(--primary);
    background-color: color-mix(in srgb, var(--primary) 12%, transparent);
}

.view-toggle {
    display: flex;
    gap: 4px;
}

.icon-btn {
    display: inline-flex;
    align-items: center;
    justify-content: center;
    padding: 8px;
    border: none;
    border-radius: 10px;
    background: none;
    color: var(--text-muted);
    cursor: pointer;
    transition: color 0.15s ease, background-color 0.15s ease;
}

.icon-btn:hover {
    color: var(--text);
    background-color: var(--surface-2);
}

.icon-btn.active {
    color: var(--primary);
    background-color: var(--surface-2);
}

.icon-btn.danger {
    color: var(--red);
}

.icon-btn.danger:hover {
    background-color: color-mix(in srgb, var(--red) 12%, transparent);
}

/* filter bar */

.filter-bar {
    position: sticky;
    top: 64px;
    z-index: 40;
    backdrop-filter: blur(6px);
    background-color: color-mix(in srgb, var(--surface-0) 85%, transparent);
    border-bottom: 1px solid var(--border);
}

.filter-inner {
    max-width: 1200px;
    margin: 0 auto;
    padding: 10px 24px;
    display: flex;
    gap: 8px;
    overflow-x: auto;
}

.filter-btn {
    display: inline-flex;
    align-items: center;
    gap: 8px;
    padding: 8px 16px;
    border: none;
    border-radius: 12px;
    font-size: 0.875rem;
    font-weight: 500;
    white-space: nowrap;
    background-color: var(--surface-2);
    color: var(--text-muted);
    cursor: pointer;
    transition: background-color 0.15s ease, color 0.15s ease;
}

.filter-btn:hover {
    background-color: var(--surface-3);
    color: var(--text);
}

.filter-btn.active {
    background-color: var(--primary);
    color: #ffffff;
}

/* layout */

.page {
    max-width: 1200px;
    margin: 0 auto;
    padding: 32px 24px;
}

.loading-state {
    display: flex;
    justify-content: center;
    padding: 48px 0;
}

.spinner {
    width: 32px;
    height: 32px;
    border-radius: 50%;
    border: 3px solid var(--surface-3);
    border-bottom-color: var(--primary);
    animation: spin 0.8s linear infinite;
}

@keyframes spin {
    to { transform: rotate(360deg); }
}

.empty-state {
    text-align: center;
    padding: 48px 16px;
    color: var(--text-muted);
}

.empty-icon {
    margin-bottom: 16px;
}

/* upload zone */

.upload-zone {
    position: relative;
    border: 2px dashed var(--border);
    border-radius: 20px;
    padding: 48px 24px;
    text-align: center;
    background-color: color-mix(in srgb, var(--surface-1) 60%, transparent);
    transition: border-color 0.2s ease, background-color 0.2s ease;
}

.upload-zone:hover {
    border-color: var(--surface-3);
}

.upload-zone.drag-active {
    border-color: var(--primary);
    background-color: color-mix(in srgb, var(--primary) 8%, transparent);
}

.upload-input {
    display: none;
}

.upload-badge {
    display: inline-flex;
    align-items: center;
    justify-content: center;
    width: 64px;
    height: 64px;
    border-radius: 50%;
    margin-bottom: 16px;
    background-color: var(--surface-2);
    color: var(--text-muted);
    transition: transform 0.2s ease, background-color 0.2s ease;
}

.upload-badge.active {
    background-color: var(--primary);
    color: #ffffff;
    transform: scale(1.1);
}

.upload-title {
    margin: 0 0 8px;
    font-size: 1.125rem;
}

.upload-hint {
    margin: 0 0 16px;
    color: var(--text-muted);
}

.primary-btn {
    display: inline-flex;
    align-items: center;
    gap: 8px;
    padding: 12px 24px;
    border: none;
    border-radius: 14px;
    font-size: 0.9375rem;
    font-weight: 500;
    background-color: var(--primary);
    color: #ffffff;
    text-decoration: none;
    cursor: pointer;
    transition: background-color 0.15s ease;
}

.primary-btn:hover {
    background-color: var(--primary-dark);
}

.secondary-btn {
    display: inline-flex;
    align-items: center;
    gap: 8px;
    padding: 8px 16px;
    border: 1px solid var(--border);
    border-radius: 12px;
    font-size: 0.875rem;
    background-color: var(--surface-1);
    color: var(--text);
    cursor: pointer;
    transition: background-color 0.15s ease;
}

.secondary-btn:hover {
    background-color: var(--surface-2);
}

/* file display */

.file-display {
    margin-top: 32px;
}

.display-header {
    display: flex;
    align-items: center;
    justify-content: space-between;
    margin-bottom: 24px;
}

.display-header h2 {
    margin: 0;
    font-size: 1.125rem;
}

.file-grid {
    display: grid;
    grid-template-columns: repeat(auto-fill, minmax(200px, 1fr));
    gap: 16px;
}

.file-card {
    border-radius: 14px;
    overflow: hidden;
    background-color: var(--surface-1);
    border: 1px solid var(--border);
    box-shadow: 0 1px 3px rgba(15, 23, 42, 0.08);
    transition: box-shadow 0.2s ease;
}

.file-card:hover {
    box-shadow: 0 8px 20px rgba(15, 23, 42, 0.12);
}

.file-thumb {
    position: relative;
    aspect-ratio: 1 / 1;
    background-color: var(--surface-2);
}

.file-thumb img {
    width: 100%;
    height: 100%;
    object-fit: cover;
    display: block;
}

.file-thumb-icon {
    width: 100%;
    height: 100%;
    display: flex;
    align-items: center;
    justify-content: center;
    color: var(--text-muted);
}

.file-card-actions {
    position: absolute;
    inset: 0;
    display: flex;
    align-items: center;
    justify-content: center;
    gap: 8px;
    background-color: rgba(0, 0, 0, 0.6);
    opacity: 0;
    transition: opacity 0.2s ease;
}

.file-card:hover .file-card-actions {
    opacity: 1;
}

.card-action-btn {
    display: inline-flex;
    padding: 8px;
    border: none;
    border-radius: 10px;
    background-color: rgba(255, 255, 255, 0.2);
    color: #ffffff;
    cursor: pointer;
}

.card-action-btn:hover {
    background-color: rgba(255, 255, 255, 0.3);
}

.card-action-btn.delete {
    background-color: rgba(239, 68, 68, 0.8);
}

.card-action-btn.delete:hover {
    background-color: var(--red);
}

.file-card-body {
    padding: 12px;
}

.file-name {
    margin: 0 0 4px;
    font-size: 0.875rem;
    font-weight: 500;
    overflow: hidden;
    text-overflow: ellipsis;
    white-space: nowrap;
}

.file-meta {
    font-size: 0.75rem;
    color: var(--text-muted);
}

.file-list {
    display: flex;
    flex-direction: column;
    gap: 8px;
}

.file-row {
    display: flex;
    align-items: center;
    gap: 16px;
    padding: 16px;
    border-radius: 14px;
    background-color: var(--surface-1);
    border: 1px solid var(--border);
    transition: background-color 0.15s ease;
}

.file-row:hover {
    background-color: var(--surface-2);
}

.file-row-icon {
    display: inline-flex;
    padding: 8px;
    border-radius: 10px;
    background-color: var(--surface-2);
    color: var(--text-muted);
}

.file-row-body {
    flex: 1;
    min-width: 0;
}

.file-row-actions {
    display: flex;
    gap: 4px;
}

/* preview modal */

.modal-backdrop {
    position: fixed;
    inset: 0;
    z-index: 100;
    display: flex;
    align-items: center;
    justify-content: center;
    padding: 16px;
    background-color: rgba(0, 0, 0, 0.8);
}

.modal {
    max-width: 900px;
    max-height: 90vh;
    width: 100%;
    border-radius: 18px;
    overflow: hidden;
    background-color: var(--surface-1);
}

.modal-header {
    display: flex;
    align-items: center;
    justify-content: space-between;
    gap: 16px;
    padding: 16px;
    border-bottom: 1px solid var(--border);
}

.modal-header h3 {
    margin: 0;
}

.modal-body {
    padding: 16px;
    text-align: center;
}

.modal-body img {
    max-width: 100%;
    max-height: 60vh;
    object-fit: contain;
}

.modal-placeholder {
    padding: 48px 16px;
    color: var(--text-muted);
}

/* toasts */

.toast-stack {
    position: fixed;
    top: 16px;
    right: 16px;
    z-index: 200;
    display: flex;
    flex-direction: column;
    gap: 8px;
}

.toast {
    display: flex;
    align-items: center;
    gap: 10px;
    min-width: 260px;
    max-width: 380px;
    padding: 12px 16px;
    border-radius: 14px;
    border: 1px solid var(--border);
    background-color: var(--surface-1);
    box-shadow: 0 8px 20px rgba(15, 23, 42, 0.15);
    cursor: pointer;
}

.toast-success .toast-icon {
    color: var(--green);
}

.toast-error .toast-icon {
    color: var(--red);
}

.toast-message {
    flex: 1;
    font-size: 0.875rem;
}

.toast-dismiss {
    color: var(--text-muted);
}

/* dashboard */

.dash-header {
    display: flex;
    flex-wrap: wrap;
    align-items: center;
    justify-content: space-between;
    gap: 16px;
    margin-bottom: 32px;
}

.dash-title {
    margin: 0 0 8px;
    font-size: 1.75rem;
}

.dash-subtitle {
    margin: 0;
    color: var(--text-muted);
}

.dash-controls {
    display: flex;
    flex-wrap: wrap;
    gap: 12px;
}

.date-range {
    display: flex;
    gap: 8px;
}

.date-input {
    padding: 8px 12px;
    border: 1px solid var(--border);
    border-radius: 10px;
    font-size: 0.875rem;
    background-color: var(--surface-1);
    color: var(--text);
}

.export-actions {
    display: flex;
    gap: 8px;
}

.stat-cards {
    display: grid;
    grid-template-columns: repeat(auto-fit, minmax(220px, 1fr));
    gap: 20px;
    margin-bottom: 32px;
}

.stat-card {
    padding: 24px;
    border-radius: 16px;
    border: 1px solid var(--border);
    background-color: var(--surface-1);
    box-shadow: 0 1px 3px rgba(15, 23, 42, 0.08);
}

.stat-card-top {
    display: flex;
    align-items: flex-start;
    justify-content: space-between;
}

.stat-label {
    font-size: 0.875rem;
    color: var(--text-muted);
}

.stat-value {
    margin: 4px 0 0;
    font-size: 1.5rem;
}

.stat-icon {
    display: inline-flex;
    padding: 12px;
    border-radius: 12px;
}

.stat-icon.accent-blue {
    color: #3b82f6;
    background-color: rgba(59, 130, 246, 0.1);
}

.stat-icon.accent-purple {
    color: #8b5cf6;
    background-color: rgba(139, 92, 246, 0.1);
}

.stat-icon.accent-amber {
    color: #f59e0b;
    background-color: rgba(245, 158, 11, 0.1);
}

.stat-icon.accent-green {
    color: #22c55e;
    background-color: rgba(34, 197, 94, 0.1);
}

.stat-note {
    display: block;
    margin-top: 10px;
    font-size: 0.8125rem;
}

.stat-note.positive {
    color: var(--green);
}

.stat-note.info {
    color: var(--blue);
}

.chart-tabs {
    display: flex;
    flex-wrap: wrap;
    gap: 8px;
    margin-bottom: 24px;
}

.chart-tab {
    padding: 8px 16px;
    border: none;
    border-radius: 12px;
    font-size: 0.875rem;
    background-color: var(--surface-2);
    color: var(--text);
    cursor: pointer;
    transition: background-color 0.15s ease;
}

.chart-tab:hover {
    background-color: var(--surface-3);
}

.chart-tab.active {
    background-color: var(--primary);
    color: #ffffff;
}

.panel {
    padding: 24px;
    border-radius: 16px;
    border: 1px solid var(--border);
    background-color: var(--surface-1);
    box-shadow: 0 1px 3px rgba(15, 23, 42, 0.08);
}

.chart-panel {
    margin-bottom: 32px;
}

.dash-grid {
    display: grid;
    grid-template-columns: 1fr;
    gap: 24px;
}

@media (min-width: 900px) {
    .dash-grid {
        grid-template-columns: 1fr 1fr;
    }
}

.panel-title {
    margin: 0 0 16px;
    font-size: 1.0625rem;
}

.status-rows {
    display: flex;
    flex-direction: column;
    gap: 16px;
}

.status-row {
    display: flex;
    align-items: center;
    justify-content: space-between;
}

.status-pill {
    display: inline-flex;
    align-items: center;
    gap: 8px;
    font-size: 0.8125rem;
}

.status-pill.ok {
    color: var(--green);
}

.status-pill.info {
    color: var(--blue);
}

.status-dot {
    width: 8px;
    height: 8px;
    border-radius: 50%;
    background-color: currentColor;
}

/* charts */

.chart {
    display: flex;
    flex-direction: column;
    gap: 8px;
}

.chart svg {
    width: 100%;
    height: auto;
}

.chart-title {
    margin: 0;
    font-size: 1rem;
    text-align: center;
}

.chart-empty {
    text-align: center;
    color: var(--text-muted);
    padding: 32px 0;
}

.chart-grid {
    stroke: var(--surface-3);
    stroke-width: 1;
}

.chart-tick {
    fill: var(--text-muted);
    font-size: 11px;
}

.chart-point {
    stroke: var(--surface-1);
    stroke-width: 1.5;
}

.chart-axis-label {
    align-self: center;
    font-size: 0.75rem;
    color: var(--text-muted);
}

/* not found */

.not-found {
    min-height: 100vh;
    display: flex;
    flex-direction: column;
    align-items: center;
    justify-content: center;
    gap: 8px;
    text-align: center;
    padding: 24px;
}

.not-found-icon {
    color: var(--text-muted);
}

.not-found h1 {
    margin: 16px 0 0;
    font-size: 3.5rem;
}

.not-found p {
    margin: 0 0 24px;
    font-size: 1.125rem;
    color: var(--text-muted);
}
"#;
