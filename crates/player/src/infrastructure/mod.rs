pub mod http_client;
pub mod platform;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

/// Spawn a UI task on the current component scope.
///
/// The task is dropped together with the component that spawned it, so a
/// request started by a screen that has since been replaced never writes
/// into that screen's state.
pub fn spawn_task<F>(future: F)
where
    F: std::future::Future<Output = ()> + 'static,
{
    dioxus::prelude::spawn(future);
}
