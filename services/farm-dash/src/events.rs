// services/farm-dash/src/events.rs
//
// Background tasks (login delay, image upload) and the events they send
// back to the draw loop

use std::sync::Arc;
use std::time::Duration;

use farmkit::profile_image::{upload_profile_image, ImageFile, ImageStore};
use tokio::sync::mpsc;
use tracing::{debug, warn};

#[derive(Debug)]
pub enum AppEvent {
    LoadingFinished,
    UploadFinished(farmkit::Result<String>),
}

/// Fires `LoadingFinished` once the splash delay has passed.
pub fn spawn_login_timer(tx: mpsc::UnboundedSender<AppEvent>, delay: Duration) {
    tokio::spawn(async move {
        tokio::time::sleep(delay).await;
        if tx.send(AppEvent::LoadingFinished).is_err() {
            debug!("login timer finished after the UI exited");
        }
    });
}

pub fn spawn_upload(tx: mpsc::UnboundedSender<AppEvent>, store: Arc<dyn ImageStore>, file: ImageFile) {
    tokio::spawn(async move {
        debug!("uploading {} via {}", file.name, store.name());
        let outcome = upload_profile_image(store.as_ref(), &file).await;
        if let Err(e) = &outcome {
            warn!("upload of {} failed: {}", file.name, e);
        }
        if tx.send(AppEvent::UploadFinished(outcome)).is_err() {
            debug!("upload finished after the UI exited");
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use farmkit::profile_image::SimulatedImageStore;
    use farmkit::SystemClock;

    #[tokio::test(start_paused = true)]
    async fn test_login_timer_fires_after_delay() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        spawn_login_timer(tx, Duration::from_secs(2));

        let started = tokio::time::Instant::now();
        let event = rx.recv().await.unwrap();

        assert!(matches!(event, AppEvent::LoadingFinished));
        assert!(started.elapsed() >= Duration::from_secs(2));
    }

    #[tokio::test(start_paused = true)]
    async fn test_upload_reports_back() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let store: Arc<dyn ImageStore> =
            Arc::new(SimulatedImageStore::new(Duration::from_secs(1), SystemClock));

        spawn_upload(tx, store, ImageFile::new("me.webp", "image/webp", 1_000));

        match rx.recv().await.unwrap() {
            AppEvent::UploadFinished(Ok(url)) => {
                assert!(url.starts_with("/images/profiles/user-"));
                assert!(url.ends_with(".webp"));
            }
            other => panic!("unexpected event {:?}", other),
        }
    }
}
