// activity-board/activity-board-js
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::time::Duration;

use tracing::{info, Level};
use tracing_subscriber::fmt::format::{FmtSpan, Pretty};
use tracing_subscriber::prelude::*;
use url::Url;
use wasm_bindgen::prelude::*;

use activity_board_core::ActivityBoard;

use crate::config::ActivityBoardConfig;
use crate::dom::{bind_signup_form, bind_unregister_controls, DomRenderer, EventListener, Page};
use crate::error::{DomError, Result, WasmError};

const VERSION: &str = env!("CARGO_PKG_VERSION");

#[wasm_bindgen(js_name = "ActivityBoardApp")]
pub struct App {
    board: ActivityBoard,
    _listeners: Vec<EventListener>,
}

#[wasm_bindgen(js_class = "ActivityBoardApp")]
impl App {
    /// Attaches the board to the current page and loads the activities.
    pub async fn start(config: Option<ActivityBoardConfig>) -> Result<App> {
        let config = config.unwrap_or_default();

        if config.logging_enabled {
            init_logging(&config);
        }

        let page = Page::lookup()?;
        let base_url = api_base_url(&config)?;

        info!("Using activities API at {base_url}");

        let board = ActivityBoard::builder()
            .set_api_base_url(base_url)
            .map_err(WasmError::from)?
            .set_status_display_duration(Duration::from_millis(
                config.status_display_duration_ms.into(),
            ))
            .set_delegate(Some(Box::new(DomRenderer::new(page.clone()))))
            .build();

        let listeners = vec![
            bind_signup_form(&board, &page)?,
            bind_unregister_controls(&board, &page)?,
        ];

        board.load_activities().await;

        Ok(App {
            board,
            _listeners: listeners,
        })
    }

    /// Fetches the activities again.
    pub async fn reload(&self) {
        self.board.load_activities().await
    }
}

fn init_logging(config: &ActivityBoardConfig) {
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_ansi(false)
        .without_time()
        .with_writer(
            tracing_web::MakeWebConsoleWriter::new()
                .with_pretty_level()
                .with_max_level(config.logging_min_level.parse().unwrap_or(Level::INFO)),
        )
        .with_level(false)
        .with_span_events(FmtSpan::ACTIVE);
    let perf_layer = tracing_web::performance_layer().with_details_from_fields(Pretty::default());

    if tracing_subscriber::registry()
        .with(fmt_layer)
        .with(perf_layer)
        .try_init()
        .is_ok()
    {
        info!("activity-board-js Version {VERSION}");
    }
}

fn api_base_url(config: &ActivityBoardConfig) -> Result<Url> {
    if let Some(url) = &config.api_base_url {
        return Ok(url.parse()?);
    }

    let origin = web_sys::window()
        .ok_or(DomError::NoWindow)?
        .location()
        .origin()
        .map_err(DomError::from)?;

    Ok(origin.parse()?)
}
