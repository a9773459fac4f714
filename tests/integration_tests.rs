//! Integration tests driving the full tick pipeline through the public API:
//! timers -> driver -> display sinks and alert sink, with recording mocks in
//! place of the terminal panel and the audio device.

use std::sync::Arc;

use chrono::{NaiveDate, NaiveDateTime};
use tokio::sync::watch;
use tokio::time::{timeout, Duration};

use tritimer::alert::{AlertCall, MockAlertSink};
use tritimer::display::MockDisplay;
use tritimer::engine::Driver;
use tritimer::timer::{CountdownAlarm, IntervalAlarm, Stopwatch, TargetTime};

// ============================================================================
// Test Helpers
// ============================================================================

fn naive_dt(hour: u32, minute: u32, second: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2026, 8, 6)
        .unwrap()
        .and_hms_opt(hour, minute, second)
        .unwrap()
}

/// Builds the full three-timer wiring from `main`, with mocks for the panel
/// and the alert sink. Returns the per-timer displays in registration order.
fn three_timer_driver(
    interval: u32,
    target: TargetTime,
    now: NaiveDateTime,
) -> (Driver, Arc<MockAlertSink>, [MockDisplay; 3]) {
    let alerts = Arc::new(MockAlertSink::new());
    let displays = [MockDisplay::new(), MockDisplay::new(), MockDisplay::new()];

    let mut driver = Driver::new(alerts.clone());
    driver.register(Box::new(Stopwatch::new()), Box::new(displays[0].clone()));
    driver.register(
        Box::new(IntervalAlarm::new(interval).unwrap()),
        Box::new(displays[1].clone()),
    );
    driver.register(
        Box::new(CountdownAlarm::new(target, now)),
        Box::new(displays[2].clone()),
    );

    (driver, alerts, displays)
}

// ============================================================================
// Full-pipeline ticking
// ============================================================================

/// Every registered timer is ticked once per pass and its text lands on its
/// own display surface.
#[test]
fn three_timers_update_their_own_displays() {
    let (mut driver, _alerts, displays) =
        three_timer_driver(5, TargetTime::from_packed(1030), naive_dt(9, 0, 0));

    for _ in 0..3 {
        driver.tick_all();
    }

    assert_eq!(displays[0].last(), Some("* Elapsed 00:00:03".to_string()));
    assert_eq!(
        displays[1].last(),
        Some("~ Interval (5s) 00:00:03".to_string())
    );
    // 5400 seconds remained at start; three ticks later the countdown shows
    // 01:29:57.
    assert_eq!(
        displays[2].last(),
        Some("@ Target 10:30 01:29:57".to_string())
    );

    for display in &displays {
        assert_eq!(display.update_count(), 3);
    }
}

/// Interval threshold 5: exactly one short tone per five passes, counter
/// resets every time.
#[test]
fn interval_beeps_once_per_threshold() {
    let (mut driver, alerts, displays) =
        three_timer_driver(5, TargetTime::from_packed(2300), naive_dt(9, 0, 0));

    for _ in 0..4 {
        driver.tick_all();
    }
    assert_eq!(alerts.short_tone_count(), 0);

    driver.tick_all();
    assert_eq!(alerts.short_tone_count(), 1);
    assert_eq!(
        displays[1].last(),
        Some("~ Interval (5s) 00:00:00".to_string())
    );

    for _ in 0..10 {
        driver.tick_all();
    }
    assert_eq!(alerts.short_tone_count(), 3);
}

/// Countdown expiry delivers the long tone and exactly one notification,
/// then stays silent forever.
#[test]
fn countdown_expiry_alerts_exactly_once() {
    // Target is three seconds away.
    let (mut driver, alerts, displays) =
        three_timer_driver(60, TargetTime::from_packed(1030), naive_dt(10, 29, 57));

    driver.tick_all();
    driver.tick_all();
    assert_eq!(alerts.long_tone_count(), 0);
    assert_eq!(alerts.notify_count(), 0);

    driver.tick_all();
    assert_eq!(alerts.long_tone_count(), 1);
    assert_eq!(
        alerts.calls(),
        vec![
            AlertCall::LongTone,
            AlertCall::Notify {
                summary: "Target timer".to_string(),
                body: "Target time reached".to_string(),
            },
        ]
    );
    assert_eq!(
        displays[2].last(),
        Some("@ Target 10:30 00:00:00".to_string())
    );

    for _ in 0..30 {
        driver.tick_all();
    }
    assert_eq!(alerts.long_tone_count(), 1);
    assert_eq!(alerts.notify_count(), 1);
    assert_eq!(
        displays[2].last(),
        Some("@ Target 10:30 00:00:00".to_string())
    );
}

/// A target equal to the current time never fires immediately: the countdown
/// starts a full day out.
#[test]
fn target_equal_to_now_waits_a_day() {
    let (mut driver, alerts, displays) =
        three_timer_driver(5, TargetTime::from_packed(1000), naive_dt(10, 0, 0));

    driver.tick_all();
    assert_eq!(alerts.long_tone_count(), 0);
    assert_eq!(
        displays[2].last(),
        Some("@ Target 10:00 23:59:59".to_string())
    );
}

/// An invalid target degrades to an already-expired countdown that never
/// alerts; the other timers are unaffected.
#[test]
fn invalid_target_stays_silent() {
    let (mut driver, alerts, displays) =
        three_timer_driver(2, TargetTime::from_packed(2575), naive_dt(9, 0, 0));

    for _ in 0..6 {
        driver.tick_all();
    }

    assert_eq!(alerts.long_tone_count(), 0);
    assert_eq!(alerts.notify_count(), 0);
    assert_eq!(
        displays[2].last(),
        Some("@ Target 25:75 00:00:00".to_string())
    );
    // The interval beeper kept going.
    assert_eq!(alerts.short_tone_count(), 3);
}

// ============================================================================
// Driver loop shutdown
// ============================================================================

/// The driver renders immediately on start and stops scheduling once the
/// shutdown signal flips.
#[tokio::test]
async fn run_loop_stops_on_shutdown() {
    let (mut driver, _alerts, displays) =
        three_timer_driver(5, TargetTime::from_packed(1030), naive_dt(9, 0, 0));

    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    let handle = tokio::spawn(async move { driver.run(shutdown_rx).await });

    tokio::time::sleep(Duration::from_millis(100)).await;
    shutdown_tx.send(true).unwrap();

    let result = timeout(Duration::from_secs(1), handle).await;
    assert!(result.is_ok(), "driver should stop after the shutdown signal");

    // The first tick fires immediately, so at least one render happened.
    assert!(displays[0].update_count() >= 1);
    let count_at_stop = displays[0].update_count();

    // No further scheduling after shutdown.
    tokio::time::sleep(Duration::from_millis(1200)).await;
    assert_eq!(displays[0].update_count(), count_at_stop);
}
