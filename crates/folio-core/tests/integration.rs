use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use parking_lot::Mutex;

use folio_core::*;

// ----------------------------------------------------------------------------
// Preferences
// ----------------------------------------------------------------------------

#[test]
fn test_fresh_install_defaults() {
    folio_logging::init_testing();
    let dir = tempfile::tempdir().unwrap();
    let prefs = Preferences::open_or_in_memory(dir.path());

    assert_eq!(ThemeController::load(prefs.clone()).current(), Theme::Light);
    assert!(!SoundEffects::load(prefs).is_enabled());
}

#[test]
fn test_theme_survives_restart() {
    let dir = tempfile::tempdir().unwrap();
    {
        let mut theme = ThemeController::load(Preferences::open_or_in_memory(dir.path()));
        assert_eq!(theme.toggle(), Theme::Dark);
    }
    let theme = ThemeController::load(Preferences::open_or_in_memory(dir.path()));
    assert_eq!(theme.current(), Theme::Dark);

    let raw = std::fs::read_to_string(dir.path().join("preferences.json")).unwrap();
    let json: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(json[THEME_KEY], "dark");
}

// ----------------------------------------------------------------------------
// Section navigation driven by a timer
// ----------------------------------------------------------------------------

/// Mirrors the UI: begin, then finish after the navigator's delay.
fn request_switch(nav: &Arc<Mutex<SectionNavigator>>, target: Section) -> bool {
    let (started, delay) = {
        let mut guard = nav.lock();
        (guard.begin(target), guard.delay())
    };
    if started {
        let nav = Arc::clone(nav);
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            nav.lock().finish();
        });
    }
    started
}

#[tokio::test(start_paused = true)]
async fn test_rapid_clicks_complete_one_transition() {
    let nav = Arc::new(Mutex::new(SectionNavigator::default()));

    assert!(!request_switch(&nav, Section::Dev));
    assert!(request_switch(&nav, Section::Work));
    assert!(!request_switch(&nav, Section::Projects));
    assert!(!request_switch(&nav, Section::Contact));

    tokio::time::sleep(Duration::from_millis(799)).await;
    assert!(nav.lock().is_transitioning());
    assert_eq!(nav.lock().current(), Section::Dev);

    tokio::time::sleep(Duration::from_millis(2)).await;
    let guard = nav.lock();
    assert!(!guard.is_transitioning());
    assert_eq!(guard.current(), Section::Work);
}

// ----------------------------------------------------------------------------
// Price ticker
// ----------------------------------------------------------------------------

struct ScriptedSource {
    calls: AtomicUsize,
    fail: AtomicBool,
}

#[async_trait]
impl PriceSource for ScriptedSource {
    async fn fetch(&self) -> Result<PricePoint, TickerError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail.load(Ordering::SeqCst) {
            return Err(TickerError::Http("rejected".into()));
        }
        folio_core::ticker::decode_price(
            r#"{"bitcoin":{"usd":65000.5,"usd_24h_change":-2.3}}"#,
            "bitcoin",
        )
    }
}

#[tokio::test(start_paused = true)]
async fn test_ticker_renders_then_holds_on_failure_then_stops() {
    let source = Arc::new(ScriptedSource {
        calls: AtomicUsize::new(0),
        fail: AtomicBool::new(false),
    });
    let (poller, mut rx) = PricePoller::spawn(source.clone(), Duration::from_secs(30));

    rx.changed().await.unwrap();
    let state = rx.borrow_and_update().clone();
    assert_eq!(state.price_text(), "$65,000.50");
    let change = state.change().unwrap();
    assert_eq!(change.direction, Direction::Down);
    assert_eq!(change.marker(), "▼");
    assert_eq!(change.magnitude, "2.30%");

    source.fail.store(true, Ordering::SeqCst);
    tokio::time::sleep(Duration::from_secs(31)).await;
    assert_eq!(source.calls.load(Ordering::SeqCst), 2);
    assert!(!rx.has_changed().unwrap());
    assert_eq!(rx.borrow().price_text(), "$65,000.50");

    // Teardown: no fetch after stop
    poller.stop();
    tokio::time::sleep(Duration::from_secs(300)).await;
    assert_eq!(source.calls.load(Ordering::SeqCst), 2);
    assert!(!poller.is_running());
}

#[tokio::test(start_paused = true)]
async fn test_ticker_placeholder_survives_initial_failure() {
    let source = Arc::new(ScriptedSource {
        calls: AtomicUsize::new(0),
        fail: AtomicBool::new(true),
    });
    let (poller, rx) = PricePoller::spawn(source.clone(), Duration::from_secs(30));

    tokio::time::sleep(Duration::from_millis(5)).await;
    assert_eq!(source.calls.load(Ordering::SeqCst), 1);
    assert_eq!(*rx.borrow(), TickerState::Loading);
    assert_eq!(rx.borrow().price_text(), "Loading…");
    drop(poller);
}

// ----------------------------------------------------------------------------
// Sound
// ----------------------------------------------------------------------------

struct CountingSink {
    offsets: Mutex<Vec<Duration>>,
}

impl ToneSink for CountingSink {
    fn play(&self, burst: &ToneBurst) -> Result<(), SoundError> {
        self.offsets.lock().push(burst.start_offset);
        Ok(())
    }
}

#[test]
fn test_sound_gated_by_stored_preference() {
    let prefs = Preferences::in_memory();
    let sink = CountingSink {
        offsets: Mutex::new(Vec::new()),
    };

    SoundEffects::load(prefs.clone()).play_toggle_sound(&sink);
    assert!(sink.offsets.lock().is_empty());

    prefs.set_sound_enabled(true);
    let played = SoundEffects::load(prefs).play_toggle_sound(&sink);
    assert_eq!(played, 2);
    let offsets = sink.offsets.lock();
    assert_eq!(offsets[1] - offsets[0], Duration::from_millis(100));
}
