// SPDX-License-Identifier: MPL-2.0
//! Demo window for the toast store.
//!
//! The `App` owns a `ToastStore<String>` and a copy of its latest snapshot.
//! Buttons push and dismiss toasts; the overlay reports dismiss and hover
//! events back to the store. A store listener feeds every published
//! collection into the update loop, so progress bars advance with the
//! store's own tick.

mod message;

pub use message::{Flags, Message};

use crate::toast::{self, Selector, StoreSettings, Toast, ToastOptions, ToastStore};
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::toast_view;
use iced::futures::SinkExt;
use iced::widget::{button, text, Column, Container, Row, Stack};
use iced::{stream, window, Element, Length, Subscription, Task, Theme};
use std::fmt;
use tokio::sync::mpsc;

pub const WINDOW_DEFAULT_HEIGHT: u32 = 480;
pub const WINDOW_DEFAULT_WIDTH: u32 = 720;

/// Target tag shared by the grouped demo toasts.
const DEMO_TARGET: &str = "demo-group";

/// Subscription id of the store feed. Constant, so Iced keeps one listener
/// for the lifetime of the window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct ToastFeed;

/// Store handed to the feed subscription; hashes as the constant `ToastFeed` id.
struct FeedSource(ToastStore<String>);

impl std::hash::Hash for FeedSource {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        ToastFeed.hash(state);
    }
}

pub struct App {
    store: ToastStore<String>,
    /// Last collection published by the store.
    toasts: Vec<Toast<String>>,
    pushed: u64,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("store", &self.store)
            .field("pushed", &self.pushed)
            .finish()
    }
}

/// Builds the window settings
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    iced::application(move || App::new(flags.clone()), App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let store = ToastStore::with_settings(flags.runtime, StoreSettings::from(&flags.config));
        tracing::info!(settings = ?store.settings(), "toast demo started");
        let app = App {
            store,
            toasts: Vec::new(),
            pushed: 0,
        };
        (app, Task::none())
    }

    fn title(&self) -> String {
        format!("Toasts ({})", self.toasts.len())
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }

    fn subscription(&self) -> Subscription<Message> {
        Subscription::run_with(FeedSource(self.store.clone()), |source| {
            let store = source.0.clone();
            stream::channel(16, move |mut output: iced::futures::channel::mpsc::Sender<Message>| async move {
                let (mut changes, _listener) = watch(&store);
                while let Some(toasts) = changes.recv().await {
                    if output.send(Message::ToastsChanged(toasts)).await.is_err() {
                        break;
                    }
                }
            })
        })
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::PushFinite => {
                let text = self.next_text("Saved");
                self.store.push(text);
            }
            Message::PushPersistent => {
                let text = self.next_text("Sticky");
                self.store
                    .push_with(text, ToastOptions::new().infinite());
            }
            Message::PushTargeted => {
                let text = self.next_text("Grouped");
                self.store.push_with(
                    text,
                    ToastOptions::new().pausable(true).target(DEMO_TARGET),
                );
            }
            Message::PopLatest => {
                self.store.pop(Selector::Latest);
            }
            Message::PopTargeted => {
                self.store.pop(Selector::target(DEMO_TARGET));
            }
            Message::ClearAll => {
                self.store.clear();
            }
            Message::Toast(toast_message) => {
                toast_view::handle_message(&self.store, &toast_message);
            }
            Message::ToastsChanged(toasts) => {
                self.toasts = toasts;
            }
        }
        Task::none()
    }

    fn view(&self) -> Element<'_, Message> {
        let controls = Row::new()
            .spacing(spacing::XS)
            .push(button(text("Push")).on_press(Message::PushFinite))
            .push(button(text("Push sticky")).on_press(Message::PushPersistent))
            .push(button(text("Push grouped")).on_press(Message::PushTargeted))
            .push(button(text("Pop latest")).on_press(Message::PopLatest))
            .push(button(text("Pop group")).on_press(Message::PopTargeted))
            .push(button(text("Clear")).on_press(Message::ClearAll));

        let summary = text(format!(
            "{} visible, {} pushed",
            self.toasts.len(),
            self.pushed
        ))
        .size(typography::CAPTION);

        let page = Container::new(Column::new().spacing(spacing::MD).push(controls).push(summary))
            .width(Length::Fill)
            .height(Length::Fill)
            .padding(spacing::MD);

        let overlay = toast_view::view_overlay(&self.toasts).map(Message::Toast);

        Stack::new().push(page).push(overlay).into()
    }

    fn next_text(&mut self, label: &str) -> String {
        self.pushed += 1;
        format!("{label} #{}", self.pushed)
    }
}

/// Forwards every collection the store publishes into a channel.
///
/// The channel closes once the returned guard is dropped.
fn watch(
    store: &ToastStore<String>,
) -> (mpsc::UnboundedReceiver<Vec<Toast<String>>>, toast::Subscription) {
    let (sender, receiver) = mpsc::unbounded_channel();
    let listener = store.subscribe(move |toasts| {
        let _ = sender.send(toasts.to_vec());
    });
    (receiver, listener)
}
