//! Dashboard JavaScript
//!
//! Client-side controller for the dashboard:
//! - One explicit state object (tab, theme, load generation)
//! - Tab loads fetch server-rendered fragments from `/view/{tab}`
//! - Generation tokens drop responses for tabs the user already left
//! - Health polling every 30 seconds behind a stoppable poller

pub const SCRIPT: &str = r#"
// ============================================================================
// Configuration
// ============================================================================
const CONFIG = {
    healthInterval: 30000,  // 30 seconds
    apiBase: '',
    tabs: ['today', 'history', 'stocks', 'news'],
    themeKey: 'theme'
};

// ============================================================================
// State
// ============================================================================
const state = {
    tab: 'today',
    theme: readTheme(),
    generation: 0
};

function readTheme() {
    try {
        return localStorage.getItem(CONFIG.themeKey) === 'dark' ? 'dark' : 'light';
    } catch (e) {
        return 'light';
    }
}

// ============================================================================
// Theme
// ============================================================================
function applyTheme() {
    document.documentElement.setAttribute('data-theme', state.theme);
    const btn = document.getElementById('themeToggle');
    if (btn) {
        btn.innerHTML = state.theme === 'light' ? '&#9790; Dark' : '&#9728; Light';
    }
}

function toggleTheme() {
    state.theme = state.theme === 'light' ? 'dark' : 'light';
    try {
        localStorage.setItem(CONFIG.themeKey, state.theme);
    } catch (e) {
        console.warn('Theme not persisted:', e);
    }
    applyTheme();
}

// ============================================================================
// Content States
// ============================================================================
function content() {
    return document.getElementById('content');
}

function showLoading() {
    content().innerHTML = `
      <div class="loading">
        <div class="loading-spinner"></div>
        <span class="loading-text">Loading...</span>
      </div>`;
}

function showError(message) {
    const panel = document.createElement('div');
    panel.className = 'error';
    const icon = document.createElement('span');
    icon.className = 'error-icon';
    icon.innerHTML = '&#9888;';
    const text = document.createElement('span');
    text.textContent = 'Error: ' + message;
    panel.append(icon, text);
    content().replaceChildren(panel);
}

// ============================================================================
// API Functions
// ============================================================================
async function fetchView(tab) {
    const res = await fetch(`${CONFIG.apiBase}/view/${encodeURIComponent(tab)}`);
    if (!res.ok) {
        let message = `HTTP ${res.status}`;
        try {
            const body = await res.json();
            if (body && body.error) message = body.error;
        } catch (e) {
            // Non-JSON error body; keep the status line
        }
        throw new Error(message);
    }
    return res.text();
}

// ============================================================================
// Tabs
// ============================================================================
function setActiveTab(tab) {
    document.querySelectorAll('.nav-tab').forEach(el => {
        el.classList.toggle('active', el.dataset.tab === tab);
    });
    state.tab = tab;
}

async function loadTab(tab) {
    if (!CONFIG.tabs.includes(tab)) tab = 'today';

    const ticket = ++state.generation;
    setActiveTab(tab);
    showLoading();

    try {
        const html = await fetchView(tab);
        if (ticket !== state.generation) return;  // superseded by a newer load
        content().innerHTML = html;
    } catch (e) {
        if (ticket !== state.generation) return;
        showError(e.message);
    }
}

// ============================================================================
// Health Polling
// ============================================================================
function createPoller(task, intervalMs) {
    let timer = null;
    return {
        start() {
            if (timer !== null) return;
            task();
            timer = setInterval(task, intervalMs);
        },
        stop() {
            if (timer === null) return;
            clearInterval(timer);
            timer = null;
        }
    };
}

function setHealth(online) {
    const dot = document.getElementById('statusDot');
    const text = document.getElementById('statusText');
    if (!dot || !text) return;
    dot.className = 'status-dot ' + (online ? 'status-online' : 'status-offline');
    text.textContent = online ? 'Online' : 'Offline';
}

async function checkHealth() {
    try {
        const res = await fetch(CONFIG.apiBase + '/health');
        const data = await res.json();
        setHealth(data.status === 'healthy');
    } catch (e) {
        setHealth(false);
    }
}

const healthPoller = createPoller(checkHealth, CONFIG.healthInterval);

// ============================================================================
// Initialization
// ============================================================================
function bindEvents() {
    const themeBtn = document.getElementById('themeToggle');
    if (themeBtn) themeBtn.addEventListener('click', toggleTheme);

    document.querySelectorAll('.nav-tab').forEach(el => {
        el.addEventListener('click', e => loadTab(e.currentTarget.dataset.tab));
    });

    document.addEventListener('click', e => {
        if (e.target.closest('.btn-refresh')) loadTab(state.tab);
    });

    window.addEventListener('pagehide', () => healthPoller.stop());
    window.addEventListener('pageshow', () => healthPoller.start());
}

document.addEventListener('DOMContentLoaded', () => {
    applyTheme();
    bindEvents();
    loadTab('today');
    healthPoller.start();
});
"#;
