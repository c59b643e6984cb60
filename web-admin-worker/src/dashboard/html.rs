//! Dashboard HTML template
//!
//! Contains the page shell:
//! - Header with health indicator and theme toggle
//! - Tab navigation (today / history / stocks / news)
//! - Content area filled from `/view/{tab}` fragments

pub const TEMPLATE: &str = r#"
    <div class="container">
        <header>
            <div>
                <h1>&#128202; Financial Summary</h1>
                <span class="subtitle">Daily market summaries, quotes and news</span>
            </div>
            <div class="header-controls">
                <span class="status">
                    <span class="status-dot" id="statusDot"></span>
                    <span class="status-text" id="statusText">Checking...</span>
                </span>
                <button class="btn btn-secondary" id="themeToggle">&#9790; Dark</button>
            </div>
        </header>

        <nav class="nav-tabs">
            <button class="nav-tab active" data-tab="today">&#128197; Today</button>
            <button class="nav-tab" data-tab="history">&#128214; History</button>
            <button class="nav-tab" data-tab="stocks">&#128200; Stocks</button>
            <button class="nav-tab" data-tab="news">&#128240; News</button>
        </nav>

        <main id="content">
            <div class="loading">
                <div class="loading-spinner"></div>
                <span class="loading-text">Loading...</span>
            </div>
        </main>
    </div>
"#;
