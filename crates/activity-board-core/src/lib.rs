// activity-board/activity-board-core
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use board::{ActivityBoard, ActivityBoardDelegate};
pub use board_builder::ActivityBoardBuilder;
pub use board_event::BoardEvent;

pub use app::deps::AppConfig;
pub use app::dtos;
pub use app::services;
pub use domain::activities::services::ActivitiesApi;
pub use infra::http::RestActivitiesApi;

#[cfg(feature = "test")]
pub mod test;

pub mod app;
mod board;
mod board_builder;
mod board_event;

#[cfg(feature = "test")]
pub mod domain;
#[cfg(not(feature = "test"))]
pub(crate) mod domain;

#[cfg(feature = "test")]
pub mod infra;
#[cfg(not(feature = "test"))]
pub(crate) mod infra;

pub(crate) mod util;
