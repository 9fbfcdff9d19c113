//! Life Sim Player - composition root binary.

use std::sync::Arc;

#[cfg(not(target_arch = "wasm32"))]
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use lifesim_player::application::api::Api;
use lifesim_player::application::services::TokenStore;
use lifesim_player::config::{ClientConfig, ShellKind};
use lifesim_player::infrastructure::http_client::ApiAdapter;
use lifesim_player::infrastructure::platform::create_platform;
use lifesim_player::ports::outbound::CredentialPort;
use lifesim_player::runner::{run, RunnerDeps};
use lifesim_player::state::PlatformOptions;

fn main() {
    #[cfg(not(target_arch = "wasm32"))]
    {
        // A missing .env is normal outside development.
        let _ = dotenvy::dotenv();

        tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "lifesim_player=debug,dioxus=info".into()),
            )
            .with(tracing_subscriber::fmt::layer())
            .init();
    }

    #[cfg(target_arch = "wasm32")]
    {
        console_error_panic_hook::set_once();
        tracing_wasm::set_as_global_default();
    }

    tracing::info!("Starting Life Sim Player");

    let config = ClientConfig::from_env().unwrap_or_else(|e| {
        tracing::warn!(error = %e, "Invalid configuration, using defaults");
        ClientConfig::default()
    });
    tracing::info!(api_url = %config.api_url, "Backend configured");

    // Platform
    let platform = create_platform(&PlatformOptions {
        storage_path: config.storage_path.clone(),
    });

    // Token store shared by the HTTP adapter and the auth flow
    let tokens: Arc<dyn CredentialPort> = Arc::new(TokenStore::load(platform.storage_adapter()));

    // HTTP
    let raw_api = Arc::new(ApiAdapter::new(&config.api_url, tokens.clone()));
    let api = Api::new(raw_api);

    // Shell kind (desktop vs mobile layout)
    let shell = {
        #[cfg(target_arch = "wasm32")]
        {
            let width = web_sys::window()
                .and_then(|w| w.inner_width().ok())
                .and_then(|v| v.as_f64())
                .unwrap_or(1024.0);

            if width < 768.0 {
                ShellKind::Mobile
            } else {
                config.shell
            }
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            config.shell
        }
    };

    run(RunnerDeps {
        platform,
        api,
        credentials: tokens,
        shell,
    });
}
