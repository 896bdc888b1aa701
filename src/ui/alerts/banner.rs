// SPDX-License-Identifier: MPL-2.0
//! Banner widget rendering the active alert.
//!
//! The banner is a pure function of [`AlertState`]: a severity-colored card
//! with the message, a dismiss button labeled "Dismiss alert", and hover
//! routing for the collapse/expand policy. A collapsed alert renders as a
//! minimal pill showing only the severity glyph; hovering it asks the store
//! to expand, leaving the region asks it to collapse again.

use super::alert::{AlertState, Severity};
use crate::ui::design_tokens::{border, opacity, palette, radius, shadow, sizing, spacing, typography};
use iced::widget::{button, container, mouse_area, text, tooltip, Container, Row, Text};
use iced::{alignment, Color, Element, Length, Theme};

/// Messages emitted by the banner; handled by forwarding to the alert store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    /// Dismiss button pressed.
    Dismiss,
    /// Pointer entered the alert region.
    HoverEntered,
    /// Pointer left the alert region.
    HoverLeft,
}

/// Banner widget configuration.
pub struct Banner;

impl Banner {
    /// Renders the banner for the given alert state.
    ///
    /// Returns an empty, zero-sized element when no alert is visible.
    pub fn view(state: AlertState) -> Element<'static, Message> {
        if !state.is_visible {
            return Container::new(text(""))
                .width(Length::Shrink)
                .height(Length::Shrink)
                .into();
        }

        let accent_color = state.severity.color();
        let glyph = severity_glyph(state.severity);

        if state.is_collapsed {
            // Minimal pill: glyph only, expands on hover.
            let pill = Container::new(
                Text::new(glyph)
                    .size(typography::GLYPH)
                    .style(move |_theme: &Theme| text::Style {
                        color: Some(accent_color),
                    }),
            )
            .width(Length::Fixed(sizing::BANNER_PILL_WIDTH))
            .padding(spacing::XS)
            .align_x(alignment::Horizontal::Center)
            .style(move |theme: &Theme| banner_container_style(theme, accent_color));

            return mouse_area(pill)
                .on_enter(Message::HoverEntered)
                .on_exit(Message::HoverLeft)
                .into();
        }

        let glyph_widget = Text::new(glyph)
            .size(typography::GLYPH)
            .style(move |_theme: &Theme| text::Style {
                color: Some(accent_color),
            });

        let message_widget = Text::new(state.message)
            .size(typography::BODY)
            .style(|theme: &Theme| text::Style {
                color: Some(theme.palette().text),
            });

        let dismiss_button = tooltip::Tooltip::new(
            button(text("✕").size(typography::BODY))
                .on_press(Message::Dismiss)
                .padding(spacing::XXS)
                .style(dismiss_button_style),
            text("Dismiss alert").size(typography::BODY),
            tooltip::Position::FollowCursor,
        );

        // Layout: [glyph] [message] [dismiss]
        let content = Row::new()
            .spacing(spacing::SM)
            .align_y(alignment::Vertical::Center)
            .push(Container::new(glyph_widget).padding(spacing::XXS))
            .push(
                Container::new(message_widget)
                    .width(Length::Fill)
                    .align_x(alignment::Horizontal::Left),
            )
            .push(dismiss_button);

        let card = Container::new(content)
            .width(Length::Fixed(sizing::BANNER_WIDTH))
            .padding(spacing::SM)
            .style(move |theme: &Theme| banner_container_style(theme, accent_color));

        mouse_area(card)
            .on_enter(Message::HoverEntered)
            .on_exit(Message::HoverLeft)
            .into()
    }
}

/// Returns the text glyph for the severity level.
fn severity_glyph(severity: Severity) -> &'static str {
    match severity {
        Severity::Info => "ℹ",
        Severity::Warning => "⚠",
        Severity::Error => "⊘",
        Severity::Edit => "✎",
    }
}

/// Style function for the banner container.
fn banner_container_style(theme: &Theme, accent_color: Color) -> container::Style {
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

/// Style function for the dismiss button.
fn dismiss_button_style(theme: &Theme, status: button::Status) -> button::Style {
    let base = theme.extended_palette().background.base;

    match status {
        button::Status::Active | button::Status::Disabled => button::Style {
            background: None,
            text_color: base.text,
            border: iced::Border::default(),
            shadow: shadow::NONE,
            snap: true,
        },
        button::Status::Hovered => button::Style {
            background: Some(iced::Background::Color(Color {
                a: opacity::OVERLAY_SUBTLE,
                ..palette::GRAY_400
            })),
            text_color: base.text,
            border: iced::Border {
                radius: radius::SM.into(),
                ..Default::default()
            },
            shadow: shadow::NONE,
            snap: true,
        },
        button::Status::Pressed => button::Style {
            background: Some(iced::Background::Color(Color {
                a: opacity::OVERLAY_MEDIUM,
                ..palette::GRAY_400
            })),
            text_color: base.text,
            border: iced::Border {
                radius: radius::SM.into(),
                ..Default::default()
            },
            shadow: shadow::NONE,
            snap: true,
        },
    }
}
