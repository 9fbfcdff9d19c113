//! Dioxus launch
//!
//! Everything the UI needs is built by `main` and handed over here as
//! context values.

use std::sync::Arc;

use crate::application::api::Api;
use crate::config::ShellKind;
use crate::ports::outbound::CredentialPort;
use crate::state::Platform;
use crate::ui::presentation::Services;

pub struct RunnerDeps {
    pub platform: Platform,
    pub api: Api,
    pub credentials: Arc<dyn CredentialPort>,
    pub shell: ShellKind,
}

pub fn run(deps: RunnerDeps) {
    let RunnerDeps {
        platform,
        api,
        credentials,
        shell,
    } = deps;

    #[allow(unused_mut)]
    let mut builder = dioxus::LaunchBuilder::new();

    #[cfg(not(target_arch = "wasm32"))]
    {
        let head = format!("<style>{}</style>", load_player_css());
        let cfg = dioxus_desktop::Config::new()
            .with_custom_head(head)
            .with_window(dioxus_desktop::WindowBuilder::new().with_title("Life Sim Game"));
        builder = builder.with_cfg(cfg);
    }

    builder
        .with_context(platform)
        .with_context(shell)
        .with_context(Services::new(api, credentials))
        .launch(crate::ui::app);
}

#[cfg(not(target_arch = "wasm32"))]
fn load_player_css() -> String {
    const FALLBACK_CSS: &str = "";

    let css_path = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("assets/css/main.css");
    std::fs::read_to_string(css_path).unwrap_or_else(|_| FALLBACK_CSS.to_string())
}
