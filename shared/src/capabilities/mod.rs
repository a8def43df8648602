mod http;
mod navigator;

pub use self::http::{into_success, ApiBase, EndpointError, MAX_URL_LENGTH};
pub use self::navigator::{NavigationOperation, Navigator};

// Crux's built-in Render covers every view refresh this screen needs. Http is
// performed by the shell, which attaches and refreshes credentials itself.
pub use crux_core::render::Render;
pub use crux_http::Http;

use crate::event::Event;

#[derive(crux_core::macros::Effect)]
pub struct Capabilities {
    pub http: Http<Event>,
    pub render: Render<Event>,
    pub navigator: Navigator<Event>,
}
