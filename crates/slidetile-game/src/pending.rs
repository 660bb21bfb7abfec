use std::{
    fmt,
    pin::Pin,
    task::{Context, Poll},
};

use futures_channel::oneshot;
use slidetile_slicer::{PngSurface, TileImage};

use crate::{Game, GameConfig, GameError};

/// A game waiting for its source image.
///
/// The host's loader delivers the encoded image through the sender returned by
/// [`PendingGame::channel`]. Once the bytes arrive the image is sliced and a
/// solved [`Game`] is built. Dropping the sender without sending resolves to
/// [`GameError::LoaderDisconnected`].
///
/// `PendingGame` is a [`Future`], and it can also be checked without an async
/// runtime through [`try_resolve`](Self::try_resolve) from an update loop.
/// The build result is produced once, by whichever path sees the image first;
/// after that both paths stay pending.
///
/// # Examples
///
/// ```
/// use slidetile_game::{GameConfig, PendingGame};
///
/// let (sender, mut pending) = PendingGame::channel(GameConfig::default());
/// assert!(pending.try_resolve().is_none());
///
/// drop(sender);
/// let error = pending.try_resolve().unwrap().unwrap_err();
/// assert!(error.is_image_load());
/// ```
pub struct PendingGame {
    receiver: oneshot::Receiver<Vec<u8>>,
    config: GameConfig,
    resolved: bool,
}

impl fmt::Debug for PendingGame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PendingGame")
            .field("config", &self.config)
            .field("resolved", &self.resolved)
            .finish_non_exhaustive()
    }
}

impl PendingGame {
    /// Creates a pending game and the sender its image loader completes.
    #[must_use]
    pub fn channel(config: GameConfig) -> (oneshot::Sender<Vec<u8>>, Self) {
        let (sender, receiver) = oneshot::channel();
        (sender, Self::from_receiver(receiver, config))
    }

    /// Wraps an existing receiver.
    #[must_use]
    pub fn from_receiver(receiver: oneshot::Receiver<Vec<u8>>, config: GameConfig) -> Self {
        Self {
            receiver,
            config,
            resolved: false,
        }
    }

    /// Returns the configuration the game will be built with.
    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Checks for the image without blocking.
    ///
    /// Returns `None` while the image is still loading, and the build result
    /// once. Later calls return `None` again.
    pub fn try_resolve(&mut self) -> Option<Result<Game<TileImage>, GameError>> {
        if self.resolved {
            return None;
        }
        let received = match self.receiver.try_recv() {
            Ok(None) => return None,
            Ok(Some(bytes)) => Ok(bytes),
            Err(oneshot::Canceled) => Err(GameError::LoaderDisconnected),
        };
        Some(self.finish(received))
    }

    fn finish(
        &mut self,
        received: Result<Vec<u8>, GameError>,
    ) -> Result<Game<TileImage>, GameError> {
        self.resolved = true;
        let result = received
            .and_then(|bytes| Game::from_image_bytes(&bytes, &self.config, &mut PngSurface));
        if let Err(err) = &result {
            log::warn!("failed to prepare puzzle: {err}");
        }
        result
    }
}

impl Future for PendingGame {
    type Output = Result<Game<TileImage>, GameError>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let this = self.get_mut();
        if this.resolved {
            return Poll::Pending;
        }
        let received = match Pin::new(&mut this.receiver).poll(cx) {
            Poll::Pending => return Poll::Pending,
            Poll::Ready(Ok(bytes)) => Ok(bytes),
            Poll::Ready(Err(oneshot::Canceled)) => Err(GameError::LoaderDisconnected),
        };
        Poll::Ready(this.finish(received))
    }
}

#[cfg(test)]
mod tests {
    use std::{io::Cursor, task::Waker, thread};

    use image::{ImageFormat, Rgba, RgbaImage};
    use slidetile_core::Position;

    use super::*;
    use crate::GamePhase;

    #[expect(clippy::cast_possible_truncation)]
    fn png_bytes(width: u32, height: u32) -> Vec<u8> {
        let pixels =
            RgbaImage::from_fn(width, height, |x, y| Rgba([(x * 7) as u8, (y * 11) as u8, 90, 255]));
        let mut bytes = Vec::new();
        pixels
            .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
            .unwrap();
        bytes
    }

    #[test]
    fn test_resolves_after_image_arrives() {
        let (sender, mut pending) = PendingGame::channel(GameConfig::default().grid_size(3));
        assert!(pending.try_resolve().is_none());

        sender.send(png_bytes(30, 30)).unwrap();
        let game = pending.try_resolve().unwrap().unwrap();

        assert_eq!(game.size(), 3);
        assert_eq!(game.phase(), GamePhase::Idle);
        assert!(game.is_solved());
        let tile = game.board().tile(Position::new(1, 2)).unwrap();
        assert_eq!(tile.origin(), Position::new(1, 2));
        assert_eq!((tile.width(), tile.height()), (10, 10));
        assert!(pending.try_resolve().is_none());
    }

    #[test]
    fn test_undecodable_image_is_load_error() {
        let (sender, mut pending) = PendingGame::channel(GameConfig::default());
        sender.send(b"not an image".to_vec()).unwrap();

        let error = pending.try_resolve().unwrap().unwrap_err();
        assert!(error.is_image_load());
        assert!(!error.is_surface());
    }

    #[test]
    fn test_image_smaller_than_grid_is_rejected() {
        let (sender, mut pending) = PendingGame::channel(GameConfig::default().grid_size(8));
        sender.send(png_bytes(4, 4)).unwrap();

        let error = pending.try_resolve().unwrap().unwrap_err();
        assert!(matches!(error, GameError::Slice { .. }));
        assert!(!error.is_image_load());
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let (sender, mut pending) = PendingGame::channel(GameConfig::default().grid_size(1));
        sender.send(png_bytes(16, 16)).unwrap();

        let error = pending.try_resolve().unwrap().unwrap_err();
        assert!(matches!(error, GameError::InvalidGridSize { size: 1 }));
    }

    #[test]
    fn test_future_resolves_from_loader_thread() {
        let (sender, mut pending) = PendingGame::channel(GameConfig::default());
        let mut cx = Context::from_waker(Waker::noop());
        assert!(Pin::new(&mut pending).poll(&mut cx).is_pending());

        let loader = thread::spawn(move || sender.send(png_bytes(64, 48)));
        loader.join().unwrap().unwrap();

        let Poll::Ready(result) = Pin::new(&mut pending).poll(&mut cx) else {
            panic!("image was delivered but the game is still pending");
        };
        let game = result.unwrap();
        assert_eq!(game.size(), 4);
        assert_eq!(game.board().tile_count(), 15);
    }

    #[test]
    fn test_poll_after_try_resolve_stays_pending() {
        let (sender, mut pending) = PendingGame::channel(GameConfig::default().grid_size(2));
        sender.send(png_bytes(8, 8)).unwrap();
        assert!(pending.try_resolve().unwrap().is_ok());

        let mut cx = Context::from_waker(Waker::noop());
        assert!(Pin::new(&mut pending).poll(&mut cx).is_pending());
        assert!(pending.try_resolve().is_none());
    }

    #[test]
    fn test_try_resolve_after_poll_returns_nothing() {
        let (sender, mut pending) = PendingGame::channel(GameConfig::default().grid_size(2));
        sender.send(png_bytes(8, 8)).unwrap();

        let mut cx = Context::from_waker(Waker::noop());
        let Poll::Ready(result) = Pin::new(&mut pending).poll(&mut cx) else {
            panic!("image was delivered but the game is still pending");
        };
        assert!(result.is_ok());
        assert!(pending.try_resolve().is_none());
        assert!(Pin::new(&mut pending).poll(&mut cx).is_pending());
    }

    #[test]
    fn test_future_reports_dropped_loader() {
        let (sender, mut pending) = PendingGame::channel(GameConfig::default());
        drop(sender);

        let mut cx = Context::from_waker(Waker::noop());
        let Poll::Ready(result) = Pin::new(&mut pending).poll(&mut cx) else {
            panic!("dropped loader left the game pending");
        };
        assert!(matches!(result, Err(GameError::LoaderDisconnected)));
    }
}
