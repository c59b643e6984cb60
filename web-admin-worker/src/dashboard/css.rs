//! Dashboard CSS styles
//!
//! Uses CSS custom properties (variables) for theming; `data-theme` on the
//! root element switches between the light and dark palettes.

pub const STYLES: &str = r"
* { box-sizing: border-box; margin: 0; padding: 0; }

:root, [data-theme='light'] {
    --bg: #f5f7fb;
    --card: #ffffff;
    --border: #e2e8f0;
    --text: #1f2937;
    --text-dim: #6b7280;
    --green: #10b981;
    --red: #ef4444;
    --blue: #3b82f6;
    --yellow: #f59e0b;
    --hover: rgba(15, 23, 42, 0.04);
}

[data-theme='dark'] {
    --bg: #0d1117;
    --card: #161b22;
    --border: #30363d;
    --text: #c9d1d9;
    --text-dim: #8b949e;
    --green: #3fb950;
    --red: #f85149;
    --blue: #58a6ff;
    --yellow: #d29922;
    --hover: rgba(255, 255, 255, 0.03);
}

body {
    font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, 'PingFang SC', sans-serif;
    background: var(--bg);
    color: var(--text);
    padding: 20px;
    min-height: 100vh;
    transition: background 0.2s, color 0.2s;
}

.container { max-width: 1200px; margin: 0 auto; }

/* Header */
header {
    display: flex;
    justify-content: space-between;
    align-items: center;
    margin-bottom: 20px;
    padding-bottom: 16px;
    border-bottom: 1px solid var(--border);
}

h1 { font-size: 24px; font-weight: 600; }

.subtitle { font-size: 12px; color: var(--text-dim); }

.header-controls {
    display: flex;
    align-items: center;
    gap: 12px;
}

/* Health Indicator */
.status { display: flex; align-items: center; gap: 6px; font-size: 13px; }

.status-dot {
    width: 10px;
    height: 10px;
    border-radius: 50%;
    background: var(--text-dim);
}

.status-online { background: var(--green); }
.status-offline { background: var(--red); }

/* Buttons */
.btn {
    padding: 8px 16px;
    border-radius: 6px;
    border: none;
    font-size: 13px;
    font-weight: 500;
    cursor: pointer;
    transition: all 0.2s;
}

.btn-secondary { background: var(--border); color: var(--text); }
.btn-success { background: var(--green); color: #fff; }
.btn-success:hover { opacity: 0.9; }

/* Tabs */
.nav-tabs {
    display: flex;
    gap: 8px;
    margin-bottom: 20px;
}

.nav-tab {
    padding: 10px 18px;
    border-radius: 8px;
    border: 1px solid var(--border);
    background: var(--card);
    color: var(--text-dim);
    font-size: 14px;
    cursor: pointer;
}

.nav-tab.active { background: var(--blue); border-color: var(--blue); color: #fff; }

/* Stat Cards */
.stats-grid {
    display: grid;
    grid-template-columns: repeat(auto-fit, minmax(200px, 1fr));
    gap: 16px;
    margin-bottom: 16px;
}

.stat-card {
    background: var(--card);
    border: 1px solid var(--border);
    border-radius: 12px;
    padding: 16px 20px;
    display: flex;
    flex-direction: column;
    gap: 6px;
    position: relative;
}

.stat-card .label { font-size: 11px; color: var(--text-dim); text-transform: uppercase; }
.stat-card .value { font-size: 22px; font-weight: 700; }

.stat-card .change {
    position: absolute;
    top: 16px;
    right: 16px;
    width: 8px;
    height: 8px;
    border-radius: 50%;
}

.change.positive { background: var(--green); }
.change.negative { background: var(--red); }

/* Cards */
.card {
    background: var(--card);
    border: 1px solid var(--border);
    border-radius: 12px;
    overflow: hidden;
}

.card-header {
    display: flex;
    justify-content: space-between;
    align-items: center;
    padding: 16px 20px;
    border-bottom: 1px solid var(--border);
}

.card-title {
    font-size: 14px;
    color: var(--text-dim);
    text-transform: uppercase;
    letter-spacing: 0.5px;
}

.card-body { padding: 20px; }

/* Badges */
.badge {
    padding: 4px 10px;
    border-radius: 12px;
    font-size: 12px;
    font-weight: 600;
}

.badge-success { background: rgba(16, 185, 129, 0.15); color: var(--green); }
.badge-danger { background: rgba(239, 68, 68, 0.15); color: var(--red); }
.badge-warning { background: rgba(245, 158, 11, 0.15); color: var(--yellow); }

/* Summaries */
.summary-item { padding: 12px 0; border-bottom: 1px solid var(--border); }
.summary-item:last-child { border-bottom: none; }
.summary-date { font-size: 13px; color: var(--text-dim); margin-bottom: 8px; }
.summary-section { margin-top: 14px; }
.summary-section h4 { font-size: 14px; margin-bottom: 6px; }
.summary-section p, .summary-item p { line-height: 1.6; white-space: pre-wrap; }

/* Colors */
.positive { color: var(--green); }
.negative { color: var(--red); }

/* Stocks Table */
.table-container { overflow-x: auto; }
.data-table { width: 100%; border-collapse: collapse; }

.data-table th,
.data-table td {
    text-align: left;
    padding: 10px 8px;
    border-bottom: 1px solid var(--border);
}

.data-table th {
    color: var(--text-dim);
    font-weight: 500;
    font-size: 12px;
    text-transform: uppercase;
}

.data-table tr:hover td { background: var(--hover); }
.data-table .symbol { font-weight: 600; }
.text-right { text-align: right !important; }

/* News */
.news-item { padding: 16px 20px; border-bottom: 1px solid var(--border); }
.news-item:last-child { border-bottom: none; }
.news-header { display: flex; justify-content: space-between; gap: 12px; }
.news-title { font-weight: 600; }
.news-content { margin-top: 8px; color: var(--text-dim); line-height: 1.5; }
.news-meta { margin-top: 8px; display: flex; gap: 16px; font-size: 12px; color: var(--text-dim); }

.sentiment-indicator {
    padding: 2px 8px;
    border-radius: 4px;
    font-size: 12px;
    font-weight: 600;
    height: fit-content;
}

.sentiment-positive { background: rgba(16, 185, 129, 0.15); color: var(--green); }
.sentiment-negative { background: rgba(239, 68, 68, 0.15); color: var(--red); }
.sentiment-neutral { background: rgba(107, 114, 128, 0.15); color: var(--text-dim); }

/* Loading / Error / Empty */
.loading, .error, .empty-state {
    display: flex;
    flex-direction: column;
    align-items: center;
    justify-content: center;
    gap: 12px;
    padding: 48px 20px;
    color: var(--text-dim);
}

.loading-spinner {
    width: 32px;
    height: 32px;
    border: 3px solid var(--border);
    border-top-color: var(--blue);
    border-radius: 50%;
    animation: spin 0.8s linear infinite;
}

@keyframes spin { to { transform: rotate(360deg); } }

.error { flex-direction: row; color: var(--red); }
.error-icon { font-size: 20px; }
.empty-state .icon { font-size: 36px; }

/* Responsive */
@media (max-width: 600px) {
    header { flex-direction: column; gap: 12px; }
    .nav-tabs { flex-wrap: wrap; }
    .header-controls { flex-wrap: wrap; justify-content: center; }
}
";
