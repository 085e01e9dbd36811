//! Desktop notifications.
//!
//! The application only knows the [`NotificationSink`] trait. The real sink
//! talks to the desktop notification server through `notify-rust` and can
//! follow the popup with an audible alert. The notification is sent from a
//! runtime command so the event loop never waits on it, and a failure is
//! logged and otherwise ignored.

use bubbletea_rs::Cmd;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use thiserror::Error;

/// Application name reported to the notification server.
pub const APP_NAME: &str = "hourglass";

/// Players and sound files tried in order; the first file that exists wins.
const SOUND_PLAYERS: &[(&str, &str)] = &[
    ("paplay", "/usr/share/sounds/freedesktop/stereo/complete.oga"),
    ("aplay", "/usr/share/sounds/sound-icons/guitar-11.wav"),
    ("aplay", "/usr/share/sounds/generic.wav"),
    ("afplay", "/System/Library/Sounds/Glass.aiff"),
    ("afplay", "/System/Library/Sounds/Ping.aiff"),
];

/// Errors raised while delivering a notification.
#[derive(Debug, Error)]
pub enum NotifyError {
    /// The notification server rejected or could not receive the request.
    #[error("desktop notification failed: {0}")]
    Desktop(String),

    /// The icon could not be written to a temporary file.
    #[error("failed to stage notification icon: {0}")]
    Icon(#[source] io::Error),

    /// The alert sound could not be played.
    #[error("failed to play alert sound: {0}")]
    Sound(#[source] io::Error),
}

/// A desktop alert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub title: String,
    pub body: String,
    /// Raw image bytes for the alert icon.
    pub icon: Option<Vec<u8>>,
}

impl Notification {
    /// The alert shown when a countdown expires.
    pub fn timeout(icon: Option<Vec<u8>>) -> Self {
        Self {
            title: APP_NAME.to_string(),
            body: "Time is up!!".to_string(),
            icon,
        }
    }
}

/// Something that can deliver a [`Notification`].
pub trait NotificationSink: Send + Sync {
    fn notify(&self, notification: &Notification) -> Result<(), NotifyError>;
}

/// Sends notifications to the desktop notification server, optionally
/// followed by an alert sound.
#[derive(Debug, Default)]
pub struct DesktopNotifier {
    sound: bool,
}

impl DesktopNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Plays an alert sound after each popup.
    pub fn with_sound(mut self, sound: bool) -> Self {
        self.sound = sound;
        self
    }

    fn show(notification: &Notification) -> Result<(), NotifyError> {
        let mut alert = notify_rust::Notification::new();
        alert
            .summary(&notification.title)
            .body(&notification.body)
            .appname(APP_NAME);

        // Kept alive until the server has answered.
        let icon = match &notification.icon {
            Some(bytes) => Some(StagedIcon::write(bytes)?),
            None => None,
        };
        if let Some(icon) = &icon {
            alert.icon(&icon.path().to_string_lossy());
        }

        alert
            .show()
            .map(|_| ())
            .map_err(|e| NotifyError::Desktop(e.to_string()))
    }
}

impl NotificationSink for DesktopNotifier {
    fn notify(&self, notification: &Notification) -> Result<(), NotifyError> {
        let shown = Self::show(notification);
        let sounded = if self.sound {
            play_sound(SOUND_PLAYERS)
        } else {
            Ok(())
        };
        shown.and(sounded)
    }
}

/// Icon bytes written to a temporary file, removed on drop.
struct StagedIcon {
    path: PathBuf,
}

impl StagedIcon {
    fn write(bytes: &[u8]) -> Result<Self, NotifyError> {
        static NEXT: AtomicUsize = AtomicUsize::new(0);
        let n = NEXT.fetch_add(1, Ordering::Relaxed);
        let path = std::env::temp_dir().join(format!(
            "{APP_NAME}-icon-{}-{n}",
            std::process::id()
        ));
        std::fs::write(&path, bytes).map_err(NotifyError::Icon)?;
        Ok(Self { path })
    }

    fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for StagedIcon {
    fn drop(&mut self) {
        if let Err(e) = std::fs::remove_file(&self.path) {
            tracing::debug!(path = %self.path.display(), error = %e, "could not remove staged icon");
        }
    }
}

/// Plays the first sound in `players` whose file exists, waiting for the
/// player to finish. Rings the terminal bell when none exists.
fn play_sound(players: &[(&str, &str)]) -> Result<(), NotifyError> {
    let found = players.iter().find(|(_, file)| Path::new(file).exists());

    let Some((player, file)) = found else {
        let mut out = io::stdout();
        return out
            .write_all(b"\x07")
            .and_then(|_| out.flush())
            .map_err(NotifyError::Sound);
    };

    let status = Command::new(player)
        .arg(file)
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .map_err(NotifyError::Sound)?;
    if status.success() {
        Ok(())
    } else {
        Err(NotifyError::Sound(io::Error::other(format!(
            "{player} exited with {status}"
        ))))
    }
}

/// A sink that drops every notification.
#[derive(Debug, Default)]
pub struct DisabledNotifier;

impl NotificationSink for DisabledNotifier {
    fn notify(&self, notification: &Notification) -> Result<(), NotifyError> {
        tracing::debug!(title = %notification.title, "notifications disabled, skipping");
        Ok(())
    }
}

/// Returns a command that delivers `notification` on the blocking pool and
/// produces no message. Failures are logged.
pub fn notify_cmd(sink: Arc<dyn NotificationSink>, notification: Notification) -> Cmd {
    Box::pin(async move {
        let result = tokio::task::spawn_blocking(move || sink.notify(&notification)).await;
        match result {
            Ok(Ok(())) => tracing::info!("timeout notification sent"),
            Ok(Err(e)) => tracing::warn!(error = %e, "timeout notification failed"),
            Err(e) => tracing::warn!(error = %e, "notification task did not complete"),
        }
        None
    })
}
