// SPDX-License-Identifier: MPL-2.0
//! Iced rendering for toast snapshots.
//!
//! Toasts appear as small cards with an accent border, the message, a
//! countdown bar for finite toasts and an optional dismiss button. User
//! interaction is reported as [`Message`] and routed back into the store
//! with [`handle_message`].

use crate::toast::{Toast, ToastId, ToastStore};
use crate::ui::design_tokens::{
    border, opacity, palette, radius, shadow, sizing, spacing, typography,
};
use iced::widget::{button, container, mouse_area, progress_bar, text, Column, Container, Row, Text};
use iced::{alignment, Color, Element, Length, Theme};
use std::fmt;

/// Interactions emitted by the toast overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    /// Dismiss button pressed.
    Dismiss(ToastId),
    /// Pointer entered a pausable toast.
    Pause(ToastId),
    /// Pointer left a pausable toast.
    Resume(ToastId),
}

/// Applies an overlay interaction to `store`.
pub fn handle_message<M>(store: &ToastStore<M>, message: &Message)
where
    M: Clone + Send + 'static,
{
    match *message {
        Message::Dismiss(id) => {
            store.remove(id);
        }
        Message::Pause(id) => {
            store.pause(id);
        }
        Message::Resume(id) => {
            store.resume(id);
        }
    }
}

/// Renders a single toast.
pub fn view<'a, M: fmt::Display>(toast: &'a Toast<M>) -> Element<'a, Message> {
    let accent_color = accent_color(toast);
    let id = toast.id();

    let message_widget = Text::new(toast.message().to_string())
        .size(typography::BODY)
        .style(|theme: &Theme| text::Style {
            color: Some(theme.palette().text),
        });

    // Layout: [message] [dismiss]
    let mut header = Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .push(
            Container::new(message_widget)
                .width(Length::Fill)
                .align_x(alignment::Horizontal::Left),
        );

    if toast.is_dismissable() {
        let dismiss_button = button(text("✕").size(typography::CAPTION))
            .on_press(Message::Dismiss(id))
            .padding(spacing::XXS)
            .style(dismiss_button_style);
        header = header.push(dismiss_button);
    }

    let mut content = Column::new().spacing(spacing::XS).push(header);
    if !toast.lifetime().is_infinite() {
        content = content.push(progress_bar(0.0..=100.0, toast.progress()));
    }

    let card: Element<'a, Message> = Container::new(content)
        .width(Length::Fixed(sizing::TOAST_WIDTH))
        .padding(spacing::SM)
        .style(move |theme: &Theme| toast_container_style(theme, accent_color))
        .into();

    if toast.is_pausable() {
        mouse_area(card)
            .on_enter(Message::Pause(id))
            .on_exit(Message::Resume(id))
            .into()
    } else {
        card
    }
}

/// Renders every toast stacked in the bottom-right corner, newest on top.
pub fn view_overlay<'a, M: fmt::Display>(toasts: &'a [Toast<M>]) -> Element<'a, Message> {
    if toasts.is_empty() {
        return Container::new(text(""))
            .width(Length::Shrink)
            .height(Length::Shrink)
            .into();
    }

    let cards: Vec<Element<'a, Message>> = toasts.iter().map(|toast| view(toast)).collect();
    let toast_column = Column::with_children(cards)
        .spacing(spacing::XS)
        .align_x(alignment::Horizontal::Right);

    Container::new(toast_column)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Right)
        .align_y(alignment::Vertical::Bottom)
        .padding(spacing::MD)
        .into()
}

fn accent_color<M>(toast: &Toast<M>) -> Color {
    if toast.is_paused() {
        palette::WARNING_500
    } else if toast.lifetime().is_infinite() {
        palette::INFO_500
    } else {
        palette::PRIMARY_500
    }
}

fn toast_container_style(theme: &Theme, accent_color: Color) -> container::Style {
    let bg_color = theme.extended_palette().background.base.color;

    container::Style {
        background: Some(iced::Background::Color(bg_color)),
        border: iced::Border {
            color: accent_color,
            width: border::WIDTH_MD,
            radius: radius::MD.into(),
        },
        shadow: shadow::MD,
        text_color: Some(theme.palette().text),
        ..Default::default()
    }
}

fn dismiss_button_style(theme: &Theme, status: button::Status) -> button::Style {
    let base = theme.extended_palette().background.base;
    let hover_background = |alpha: f32| {
        Some(iced::Background::Color(Color {
            a: alpha,
            ..palette::GRAY_400
        }))
    };
    let rounded = iced::Border {
        radius: radius::SM.into(),
        ..Default::default()
    };

    let (background, border, text_color) = match status {
        button::Status::Active => (None, iced::Border::default(), base.text),
        button::Status::Hovered => (hover_background(opacity::OVERLAY_SUBTLE), rounded, base.text),
        button::Status::Pressed => (hover_background(opacity::OVERLAY_MEDIUM), rounded, base.text),
        button::Status::Disabled => (
            None,
            iced::Border::default(),
            Color {
                a: opacity::OVERLAY_MEDIUM,
                ..base.text
            },
        ),
    };

    button::Style {
        background,
        text_color,
        border,
        shadow: shadow::NONE,
        snap: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::toast::ToastOptions;

    #[test]
    fn toast_container_style_uses_accent_color() {
        let theme = Theme::Dark;
        let style = toast_container_style(&theme, palette::PRIMARY_500);

        assert_eq!(style.border.color, palette::PRIMARY_500);
        assert!(style.background.is_some());
    }

    #[test]
    fn dismiss_button_is_transparent_until_hovered() {
        let theme = Theme::Light;
        assert!(dismiss_button_style(&theme, button::Status::Active)
            .background
            .is_none());
        assert!(dismiss_button_style(&theme, button::Status::Hovered)
            .background
            .is_some());
    }

    #[tokio::test(start_paused = true)]
    async fn accent_reflects_lifetime_and_pause() {
        let store = ToastStore::new().expect("inside a runtime");
        let finite = store.push("finite");
        let sticky = store.push_with("sticky", ToastOptions::new().infinite());
        store.pause(finite);

        let paused = store.get(finite).expect("finite toast exists");
        let infinite = store.get(sticky).expect("sticky toast exists");
        assert_eq!(accent_color(&paused), palette::WARNING_500);
        assert_eq!(accent_color(&infinite), palette::INFO_500);

        store.resume(finite);
        let running = store.get(finite).expect("finite toast exists");
        assert_eq!(accent_color(&running), palette::PRIMARY_500);
    }

    #[tokio::test(start_paused = true)]
    async fn handle_message_routes_into_store() {
        let store = ToastStore::new().expect("inside a runtime");
        let id = store.push_with("hover me", ToastOptions::new().pausable(true));

        handle_message(&store, &Message::Pause(id));
        assert!(store.get(id).is_some_and(|t| t.is_paused()));

        handle_message(&store, &Message::Resume(id));
        assert!(store.get(id).is_some_and(|t| !t.is_paused()));

        handle_message(&store, &Message::Dismiss(id));
        assert!(store.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn overlay_builds_for_every_toast_shape() {
        let store = ToastStore::new().expect("inside a runtime");
        store.push("plain");
        store.push_with("sticky", ToastOptions::new().infinite().dismissable(false));
        store.push_with("hover", ToastOptions::new().pausable(true));

        let toasts = store.snapshot();
        let _overlay = view_overlay(&toasts);
        let _empty = view_overlay::<&str>(&[]);
    }
}
