// The page modules only run in the browser; natively they are built for tests.
#![cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]

mod contact;
mod content;
mod hero;
mod motion;
mod navigation;
mod preloader;
mod scroll;
mod sections;
mod telemetry;
mod typewriter;

#[cfg(not(target_arch = "wasm32"))]
mod backend;
#[cfg(target_arch = "wasm32")]
mod frontend;

#[cfg(not(target_arch = "wasm32"))]
#[tokio::main]
async fn main() -> std::process::ExitCode {
    telemetry::init();

    match backend::run(backend::ServerConfig::from_env()).await {
        Ok(()) => std::process::ExitCode::SUCCESS,
        Err(error) => {
            tracing::error!(%error, "server_failed");
            std::process::ExitCode::FAILURE
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    telemetry::init();
    frontend::run();
}
