//! Browser process lifecycle and the navigation driver.

use std::path::Path;
use std::time::Duration;

use chromiumoxide::error::CdpError;
use chromiumoxide::{Browser, BrowserConfig, Page};
use futures::StreamExt;
use log::{debug, info};
use tokio::task::JoinHandle;
use tokio::time::sleep;

use crate::error::SchoolSoftError;

/// How long to let pending requests settle after the load event, for pages
/// that keep fetching content past the initial render.
const NETWORK_IDLE_SETTLE: Duration = Duration::from_millis(1500);

/// When a navigation is considered finished.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum WaitUntil {
    /// The page fired its load event.
    Load,
    /// Load event plus a settle interval for asynchronous content.
    NetworkIdle,
}

/// Owns the headless browser process and the task draining its CDP events.
///
/// The process is released by [`BrowserHandle::close`]; dropping the handle
/// without closing falls back to chromiumoxide killing the child process.
pub struct BrowserHandle {
    browser: Browser,
    event_loop: JoinHandle<()>,
}

impl BrowserHandle {
    /// Launches a headless, incognito browser and opens a blank page.
    pub async fn launch(executable: Option<&Path>) -> Result<(Self, Page), SchoolSoftError> {
        let mut builder = BrowserConfig::builder().incognito();
        if let Some(path) = executable {
            builder = builder.chrome_executable(path);
        }
        let config = builder.build().map_err(SchoolSoftError::BrowserConfig)?;

        let (browser, mut handler) = Browser::launch(config)
            .await
            .map_err(SchoolSoftError::Browser)?;
        let event_loop = tokio::spawn(async move {
            while let Some(event) = handler.next().await {
                if event.is_err() {
                    break;
                }
            }
        });
        debug!("Browser process launched");

        let page = browser
            .new_page("about:blank")
            .await
            .map_err(SchoolSoftError::Browser)?;
        Ok((Self { browser, event_loop }, page))
    }

    pub async fn close(mut self) -> Result<(), SchoolSoftError> {
        self.browser
            .close()
            .await
            .map_err(SchoolSoftError::Browser)?;
        let _ = self.browser.wait().await;
        self.event_loop.abort();
        info!("Browser closed");
        Ok(())
    }
}

/// Navigates and suspends until the target page settles per `wait`.
/// No retries; a failed load surfaces once as [`SchoolSoftError::Navigation`].
pub async fn goto(page: &Page, url: &str, wait: WaitUntil) -> Result<(), SchoolSoftError> {
    let navigation: Result<(), CdpError> = async {
        page.goto(url).await?.wait_for_navigation().await?;
        Ok(())
    }
    .await;
    navigation.map_err(|source| SchoolSoftError::Navigation {
        url: url.to_owned(),
        source,
    })?;
    if wait == WaitUntil::NetworkIdle {
        sleep(NETWORK_IDLE_SETTLE).await;
    }
    debug!("Loaded {url}");
    Ok(())
}
