// SPDX-License-Identifier: MPL-2.0
use approx::assert_abs_diff_eq;
use iced_toast::config::Config;
use iced_toast::toast::{Selector, Toast, ToastId, ToastOptions, ToastPatch, ToastStore};
use std::collections::HashSet;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::time::sleep;

type Recorded = Arc<Mutex<Vec<Vec<ToastId>>>>;

fn store() -> ToastStore<String> {
    ToastStore::new().expect("inside a runtime")
}

/// Records the id list of every published snapshot.
fn record(store: &ToastStore<String>) -> (Recorded, iced_toast::toast::Subscription) {
    let seen: Recorded = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    let sub = store.subscribe(move |toasts| {
        sink.lock()
            .unwrap()
            .push(toasts.iter().map(Toast::id).collect());
    });
    (seen, sub)
}

fn ids(store: &ToastStore<String>) -> Vec<ToastId> {
    store.snapshot().iter().map(Toast::id).collect()
}

#[tokio::test(start_paused = true)]
async fn pushing_n_toasts_orders_most_recent_first() {
    let store = store();
    let pushed: Vec<ToastId> = (0..5).map(|i| store.push(format!("toast {i}"))).collect();

    let unique: HashSet<_> = pushed.iter().collect();
    assert_eq!(unique.len(), 5);
    assert_eq!(store.len(), 5);

    let mut expected = pushed.clone();
    expected.reverse();
    assert_eq!(ids(&store), expected);
}

#[tokio::test(start_paused = true)]
async fn ids_keep_increasing_after_removals() {
    let store = store();
    let first = store.push("a".into());
    store.remove(first);
    store.pop(Selector::Latest);
    let second = store.push("b".into());
    assert!(second > first);
}

#[tokio::test(start_paused = true)]
async fn remove_cancels_timers_of_removed_toast() {
    let store = store();
    let keep = store.push_with("keep".into(), ToastOptions::new().infinite());
    let gone = store.push_with("gone".into(), ToastOptions::new().duration(Duration::from_millis(500)));
    let (seen, _sub) = record(&store);

    assert!(store.remove(gone));
    assert_eq!(store.len(), 1);
    let published = seen.lock().unwrap().len();

    sleep(Duration::from_secs(2)).await;

    // No tick or timeout for the removed toast published anything.
    assert_eq!(seen.lock().unwrap().len(), published);
    assert_eq!(ids(&store), vec![keep]);
}

#[tokio::test(start_paused = true)]
async fn remove_unknown_id_leaves_collection_unchanged() {
    let store = store();
    let stale = store.push("stale".into());
    store.remove(stale);
    store.push("a".into());
    store.push("b".into());
    let before = ids(&store);

    assert!(!store.remove(stale));
    assert_eq!(ids(&store), before);
}

#[tokio::test(start_paused = true)]
async fn pop_without_selector_removes_head() {
    let store = store();
    let older = store.push("older".into());
    let middle = store.push("middle".into());
    store.push("newest".into());

    assert_eq!(store.pop(None::<ToastId>), 1);
    assert_eq!(ids(&store), vec![middle, older]);
}

#[tokio::test(start_paused = true)]
async fn pop_by_id_matches_remove() {
    let store = store();
    let a = store.push("a".into());
    let b = store.push("b".into());

    assert_eq!(store.pop(a), 1);
    assert_eq!(store.pop(a), 0);
    assert_eq!(ids(&store), vec![b]);
}

#[tokio::test(start_paused = true)]
async fn pop_target_removes_all_and_only_matching() {
    let store = store();
    let x1 = store.push_with("x1".into(), ToastOptions::new().target("x"));
    let y = store.push_with("y".into(), ToastOptions::new().target("y"));
    let untagged = store.push("plain".into());
    let x2 = store.push_with("x2".into(), ToastOptions::new().target("x"));

    assert_eq!(store.pop(Selector::target("x")), 2);

    let remaining = ids(&store);
    assert_eq!(remaining, vec![untagged, y]);
    assert!(!remaining.contains(&x1) && !remaining.contains(&x2));
    assert_eq!(store.pop(Selector::target("missing")), 0);
}

#[tokio::test(start_paused = true)]
async fn targeted_pop_cancels_timers() {
    let store = store();
    store.push_with(
        "x".into(),
        ToastOptions::new().duration(Duration::from_millis(300)).target("x"),
    );
    let (seen, _sub) = record(&store);

    store.pop(Selector::target("x"));
    let published = seen.lock().unwrap().len();
    sleep(Duration::from_secs(1)).await;

    assert_eq!(seen.lock().unwrap().len(), published);
}

#[tokio::test(start_paused = true)]
async fn finite_toast_removes_itself() {
    let store = store();
    store.push_with("brief".into(), ToastOptions::new().duration(Duration::from_millis(200)));

    sleep(Duration::from_millis(100)).await;
    assert_eq!(store.len(), 1);

    sleep(Duration::from_millis(150)).await;
    assert!(store.is_empty());
}

#[tokio::test(start_paused = true)]
async fn default_lifetime_is_four_seconds() {
    let store = store();
    store.push("default".into());

    sleep(Duration::from_millis(3900)).await;
    assert_eq!(store.len(), 1);

    sleep(Duration::from_millis(200)).await;
    assert!(store.is_empty());
}

#[tokio::test(start_paused = true)]
async fn infinite_toast_is_never_removed_and_keeps_progress() {
    let store = store();
    let id = store.push_with("sticky".into(), ToastOptions::new().infinite());

    sleep(Duration::from_secs(60)).await;

    let toast = store.get(id).expect("infinite toast survives");
    assert_eq!(toast.progress(), 100.0);
}

#[tokio::test(start_paused = true)]
async fn progress_is_half_at_mid_life() {
    let store = store();
    let id = store.push_with("half".into(), ToastOptions::new().duration(Duration::from_millis(4000)));

    sleep(Duration::from_millis(2000)).await;

    let progress = store.get(id).expect("alive").progress();
    assert_abs_diff_eq!(progress, 50.0, epsilon = 1.0);
}

#[tokio::test(start_paused = true)]
async fn pause_freezes_progress_until_resumed() {
    let store = store();
    let id = store.push_with("hold".into(), ToastOptions::new().duration(Duration::from_millis(1000)));

    sleep(Duration::from_millis(200)).await;
    assert!(store.pause(id));
    let frozen = store.get(id).expect("alive").progress();
    assert_abs_diff_eq!(frozen, 80.0, epsilon = 1.5);

    sleep(Duration::from_millis(300)).await;
    assert_eq!(store.get(id).expect("alive").progress(), frozen);

    assert!(store.resume(id));
    sleep(Duration::from_millis(20)).await;
    let resumed = store.get(id).expect("alive").progress();
    assert!(resumed < frozen);
}

#[tokio::test(start_paused = true)]
async fn pausing_via_patch_freezes_progress() {
    let store = store();
    let id = store.push_with("hold".into(), ToastOptions::new().duration(Duration::from_millis(1000)));

    sleep(Duration::from_millis(100)).await;
    store.set(id, ToastPatch::new().paused_at(Some(tokio::time::Instant::now())));
    let frozen = store.get(id).expect("alive").progress();

    sleep(Duration::from_millis(400)).await;
    assert_eq!(store.get(id).expect("alive").progress(), frozen);
}

#[tokio::test(start_paused = true)]
async fn set_keeps_timers_running() {
    let store = store();
    let id = store.push_with("edit".into(), ToastOptions::new().duration(Duration::from_millis(300)));

    assert!(store.set(id, ToastPatch::new().message("edited".into()).target(Some("t".into()))));
    let toast = store.get(id).expect("alive");
    assert_eq!(toast.message(), "edited");
    assert_eq!(toast.target(), Some("t"));

    sleep(Duration::from_millis(400)).await;
    assert!(store.is_empty());
}

#[tokio::test(start_paused = true)]
async fn subscribers_see_every_change() {
    let store = store();
    let (seen, sub) = record(&store);

    let a = store.push_with("a".into(), ToastOptions::new().infinite());
    let b = store.push_with("b".into(), ToastOptions::new().infinite());
    store.remove(a);

    assert_eq!(
        *seen.lock().unwrap(),
        vec![vec![], vec![a], vec![b, a], vec![b]]
    );

    sub.unsubscribe();
    store.push("c".into());
    assert_eq!(seen.lock().unwrap().len(), 4);
}

#[tokio::test(start_paused = true)]
async fn listener_may_call_back_into_store() {
    let store = store();
    let inner = store.clone();
    let _sub = store.subscribe(move |toasts| {
        if toasts.len() > 2 {
            inner.pop(Selector::Latest);
        }
    });

    for i in 0..5 {
        store.push_with(format!("t{i}"), ToastOptions::new().infinite());
    }
    assert_eq!(store.len(), 2);
}

#[tokio::test(start_paused = true)]
async fn progress_ticks_publish_to_subscribers() {
    let store = store();
    store.push_with("tick".into(), ToastOptions::new().duration(Duration::from_millis(100)));
    let (seen, _sub) = record(&store);

    sleep(Duration::from_millis(50)).await;
    assert!(seen.lock().unwrap().len() > 1);
}

#[tokio::test(start_paused = true)]
async fn config_drives_store_defaults() {
    let config = Config {
        duration_ms: Some(250),
        dismissable: Some(false),
        pausable: Some(true),
        tick_interval_ms: Some(50),
    };
    let store = ToastStore::<String>::from_config(&config).expect("inside a runtime");
    let id = store.push("configured".into());

    let toast = store.get(id).expect("alive");
    assert!(!toast.is_dismissable());
    assert!(toast.is_pausable());

    sleep(Duration::from_millis(300)).await;
    assert!(store.is_empty());
}

#[tokio::test(start_paused = true)]
async fn dropping_store_stops_timers() {
    let store = store();
    store.push_with("orphan".into(), ToastOptions::new().duration(Duration::from_millis(100)));
    let (seen, sub) = record(&store);
    drop(store);

    sleep(Duration::from_secs(1)).await;
    assert_eq!(seen.lock().unwrap().len(), 1);
    drop(sub);
}

#[tokio::test(start_paused = true)]
async fn unbounded_duration_keeps_toast_alive() {
    let store = store();
    let id = store.push_with("forever".into(), ToastOptions::new().duration(Duration::MAX));

    sleep(Duration::from_secs(10)).await;

    let toast = store.get(id).expect("toast outlives the clock");
    assert_abs_diff_eq!(toast.progress(), 100.0, epsilon = 1e-3);
    assert_eq!(store.pop(id), 1);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_pushes_reach_listeners_in_order() {
    for _ in 0..50 {
        let store = store();
        let lengths = Arc::new(Mutex::new(Vec::new()));
        let last = Arc::new(Mutex::new(Vec::new()));
        let _sub = {
            let lengths = Arc::clone(&lengths);
            let last = Arc::clone(&last);
            store.subscribe(move |toasts| {
                lengths.lock().unwrap().push(toasts.len());
                *last.lock().unwrap() = toasts.iter().map(Toast::id).collect::<Vec<_>>();
            })
        };

        let pushers: Vec<_> = (0..4)
            .map(|thread| {
                let store = store.clone();
                std::thread::spawn(move || {
                    for i in 0..20 {
                        store.push_with(format!("{thread}-{i}"), ToastOptions::new().infinite());
                    }
                })
            })
            .collect();
        for pusher in pushers {
            pusher.join().unwrap();
        }

        let lengths = lengths.lock().unwrap();
        assert_eq!(*lengths, (0..=80).collect::<Vec<usize>>());
        assert_eq!(*last.lock().unwrap(), ids(&store));
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn timers_on_worker_threads_leave_listeners_current() {
    let store = store();
    let (seen, _sub) = record(&store);

    for i in 0..10 {
        store.push_with(format!("short {i}"), ToastOptions::new().duration(Duration::from_millis(30)));
        store.push_with(format!("sticky {i}"), ToastOptions::new().infinite());
    }

    sleep(Duration::from_millis(300)).await;

    assert_eq!(store.len(), 10);
    let last = seen.lock().unwrap().last().cloned().expect("at least one snapshot");
    assert_eq!(last, ids(&store));
}
