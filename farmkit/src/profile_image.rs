// farmkit/src/profile_image.rs
//
// Profile picture upload: validation, a pluggable store and the avatar state
//
// Validation runs synchronously and before any store call, so a rejected
// file never starts the upload delay

use async_trait::async_trait;
use std::path::Path;
use std::time::Duration;
use tracing::{info, warn};

use crate::catalog::DEFAULT_AVATAR;
use crate::clock::Clock;
use crate::errors::{FarmError, Result};

pub const ALLOWED_TYPES: [&str; 3] = ["image/jpeg", "image/png", "image/webp"];

pub const MAX_IMAGE_BYTES: u64 = 5 * 1024 * 1024;

/// What the upload path knows about a picked file. Contents are never read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageFile {
    pub name: String,
    pub mime_type: String,
    pub size: u64,
}

impl ImageFile {
    pub fn new(name: impl Into<String>, mime_type: impl Into<String>, size: u64) -> Self {
        Self {
            name: name.into(),
            mime_type: mime_type.into(),
            size,
        }
    }

    /// Builds the descriptor from file metadata; the MIME type is inferred
    /// from the extension.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let metadata = std::fs::metadata(path)?;
        if !metadata.is_file() {
            return Err(FarmError::IoError(format!("{} is not a file", path.display())));
        }

        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let mime_type = mime_from_extension(path.extension().and_then(|e| e.to_str()).unwrap_or(""));

        Ok(Self::new(name, mime_type, metadata.len()))
    }

    /// Extension used in the stored URL: the file's own, else the MIME subtype.
    pub fn extension(&self) -> String {
        Path::new(&self.name)
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_string)
            .unwrap_or_else(|| {
                self.mime_type
                    .rsplit('/')
                    .next()
                    .unwrap_or("img")
                    .to_string()
            })
    }
}

fn mime_from_extension(ext: &str) -> &'static str {
    match ext.to_ascii_lowercase().as_str() {
        "jpg" | "jpeg" => "image/jpeg",
        "png" => "image/png",
        "webp" => "image/webp",
        "gif" => "image/gif",
        "bmp" => "image/bmp",
        "svg" => "image/svg+xml",
        _ => "application/octet-stream",
    }
}

pub fn validate_image_file(file: &ImageFile) -> Result<()> {
    if !ALLOWED_TYPES.contains(&file.mime_type.as_str()) {
        return Err(FarmError::InvalidImageType(file.mime_type.clone()));
    }
    if file.size > MAX_IMAGE_BYTES {
        return Err(FarmError::ImageTooLarge {
            size: file.size,
            max: MAX_IMAGE_BYTES,
        });
    }
    Ok(())
}

/// Destination for accepted profile pictures.
#[async_trait]
pub trait ImageStore: Send + Sync {
    /// Stores the file and returns its public URL.
    async fn upload(&self, file: &ImageFile) -> Result<String>;
    fn name(&self) -> &str;
}

/// Pretends to upload: waits, then fabricates a timestamped URL.
pub struct SimulatedImageStore<C> {
    delay: Duration,
    clock: C,
}

impl<C: Clock> SimulatedImageStore<C> {
    pub fn new(delay: Duration, clock: C) -> Self {
        Self { delay, clock }
    }
}

#[async_trait]
impl<C: Clock> ImageStore for SimulatedImageStore<C> {
    async fn upload(&self, file: &ImageFile) -> Result<String> {
        tokio::time::sleep(self.delay).await;
        let url = format!(
            "/images/profiles/user-{}.{}",
            self.clock.now().timestamp_millis(),
            file.extension()
        );
        info!("stored {} ({} bytes) at {}", file.name, file.size, url);
        Ok(url)
    }

    fn name(&self) -> &str {
        "SimulatedImageStore"
    }
}

/// Validates `file` and hands it to `store`.
pub async fn upload_profile_image<S>(store: &S, file: &ImageFile) -> Result<String>
where
    S: ImageStore + ?Sized,
{
    if let Err(e) = validate_image_file(file) {
        warn!("rejected {} ({}): {}", file.name, file.mime_type, e);
        return Err(e);
    }
    store.upload(file).await
}

/// The avatar currently shown, plus the in-flight upload flag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileImage {
    current: String,
    uploading: bool,
}

impl Default for ProfileImage {
    fn default() -> Self {
        Self::new(DEFAULT_AVATAR)
    }
}

impl ProfileImage {
    pub fn new(current: impl Into<String>) -> Self {
        Self {
            current: current.into(),
            uploading: false,
        }
    }

    pub fn current(&self) -> &str {
        &self.current
    }

    pub fn is_uploading(&self) -> bool {
        self.uploading
    }

    pub fn is_default(&self) -> bool {
        self.current == DEFAULT_AVATAR
    }

    /// Validates `file` and marks an upload as running. A rejected file
    /// leaves the state untouched.
    pub fn begin_upload(&mut self, file: &ImageFile) -> Result<()> {
        if self.uploading {
            return Err(FarmError::UploadFailed("an upload is already running".to_string()));
        }
        validate_image_file(file)?;
        self.uploading = true;
        Ok(())
    }

    /// Applies the outcome of an upload started with [`begin_upload`].
    ///
    /// [`begin_upload`]: ProfileImage::begin_upload
    pub fn finish_upload(&mut self, outcome: Result<String>) -> Result<()> {
        self.uploading = false;
        let url = outcome?;
        self.current = url;
        Ok(())
    }

    pub async fn upload<S>(&mut self, store: &S, file: &ImageFile) -> Result<()>
    where
        S: ImageStore + ?Sized,
    {
        self.begin_upload(file)?;
        let outcome = store.upload(file).await;
        self.finish_upload(outcome)
    }

    pub fn remove(&mut self) {
        self.current = DEFAULT_AVATAR.to_string();
        info!("profile image reset to default");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use chrono::{TimeZone, Utc};
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Default)]
    struct CountingStore {
        calls: AtomicUsize,
    }

    #[async_trait]
    impl ImageStore for CountingStore {
        async fn upload(&self, file: &ImageFile) -> Result<String> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(format!("/images/profiles/{}", file.name))
        }

        fn name(&self) -> &str {
            "CountingStore"
        }
    }

    fn clock() -> FixedClock {
        FixedClock::new(Utc.with_ymd_and_hms(2025, 7, 3, 18, 0, 0).unwrap())
    }

    #[test]
    fn test_validation_rules() {
        assert!(validate_image_file(&ImageFile::new("a.jpg", "image/jpeg", 1024)).is_ok());
        assert!(validate_image_file(&ImageFile::new("a.webp", "image/webp", MAX_IMAGE_BYTES)).is_ok());
        assert_eq!(
            validate_image_file(&ImageFile::new("a.gif", "image/gif", 10)),
            Err(FarmError::InvalidImageType("image/gif".to_string()))
        );
        assert_eq!(
            validate_image_file(&ImageFile::new("a.png", "image/png", MAX_IMAGE_BYTES + 1)),
            Err(FarmError::ImageTooLarge {
                size: MAX_IMAGE_BYTES + 1,
                max: MAX_IMAGE_BYTES
            })
        );
    }

    #[test]
    fn test_error_text_is_user_facing() {
        let err = validate_image_file(&ImageFile::new("notes.txt", "text/plain", 10)).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Lütfen geçerli bir resim dosyası seçin (JPEG, PNG veya WebP)"
        );
    }

    #[tokio::test]
    async fn test_invalid_type_never_reaches_store() {
        let store = CountingStore::default();
        let mut profile = ProfileImage::default();
        let before = profile.clone();

        let file = ImageFile::new("anim.gif", "image/gif", 2048);
        assert!(upload_profile_image(&store, &file).await.is_err());
        assert!(profile.upload(&store, &file).await.is_err());

        assert_eq!(store.calls.load(Ordering::SeqCst), 0);
        assert_eq!(profile, before);
    }

    #[tokio::test(start_paused = true)]
    async fn test_simulated_upload_waits_then_returns_url() {
        let store = SimulatedImageStore::new(Duration::from_secs(1), clock());
        let mut profile = ProfileImage::default();
        let started = tokio::time::Instant::now();

        profile
            .upload(&store, &ImageFile::new("me.png", "image/png", 300_000))
            .await
            .unwrap();

        assert!(started.elapsed() >= Duration::from_secs(1));
        assert_eq!(profile.current(), "/images/profiles/user-1751565600000.png");
        assert!(!profile.is_uploading());
        assert!(!profile.is_default());

        profile.remove();
        assert!(profile.is_default());
    }

    #[test]
    fn test_begin_and_finish() {
        let mut profile = ProfileImage::default();
        let file = ImageFile::new("me.jpeg", "image/jpeg", 10);

        profile.begin_upload(&file).unwrap();
        assert!(profile.is_uploading());
        assert!(profile.begin_upload(&file).is_err());

        let failed = profile.finish_upload(Err(FarmError::UploadFailed("timeout".to_string())));
        assert!(failed.is_err());
        assert!(!profile.is_uploading());
        assert!(profile.is_default());
    }

    #[test]
    fn test_extension_falls_back_to_mime() {
        assert_eq!(ImageFile::new("photo.JPG", "image/jpeg", 1).extension(), "JPG");
        assert_eq!(ImageFile::new("clipboard", "image/webp", 1).extension(), "webp");
        assert_eq!(mime_from_extension("JPEG"), "image/jpeg");
        assert_eq!(mime_from_extension("tiff"), "application/octet-stream");
    }

    #[test]
    fn test_from_path_reads_metadata() {
        let path = std::env::temp_dir().join(format!("farmkit-avatar-{}.png", std::process::id()));
        std::fs::write(&path, [0u8; 64]).unwrap();

        let file = ImageFile::from_path(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(file.mime_type, "image/png");
        assert_eq!(file.size, 64);
        assert!(file.name.ends_with(".png"));
        assert!(ImageFile::from_path(std::env::temp_dir()).is_err());
    }
}
