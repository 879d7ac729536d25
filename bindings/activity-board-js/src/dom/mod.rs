// activity-board/activity-board-js
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use event_listener::EventListener;
pub use handlers::{bind_signup_form, bind_unregister_controls};
pub use page::Page;
pub use renderer::DomRenderer;

mod event_listener;
mod handlers;
mod page;
mod renderer;
