// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! Renders the current screen and stacks the alert banner on top of it.
//! The banner receives a snapshot of the alert state; all interaction is
//! routed back through `Message::Alert`.

use super::{App, Message, Screen};
use crate::ui::alerts::Banner;
use crate::ui::design_tokens::{spacing, typography};
use iced::widget::{button, text, text_input, Column, Container, Row, Stack};
use iced::{alignment, Element, Length};

/// Renders the current application view based on the active screen.
pub fn view(app: &App) -> Element<'_, Message> {
    let current_view: Element<'_, Message> = match app.screen {
        Screen::Overview => view_overview(app),
        Screen::Editor => view_editor(app),
    };

    let base = Container::new(current_view)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(spacing::LG);

    let banner = Banner::view(app.alerts.state()).map(Message::Alert);
    let banner_overlay = Container::new(banner)
        .width(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .padding(spacing::MD);

    Stack::new().push(base).push(banner_overlay).into()
}

fn view_overview(app: &App) -> Element<'_, Message> {
    let title = if app.plan.title.is_empty() {
        "Untitled plan"
    } else {
        app.plan.title.as_str()
    };

    let notes: Element<'_, Message> = if app.plan.notes.is_empty() {
        text("No notes yet.").size(typography::BODY).into()
    } else {
        text(app.plan.notes.as_str()).size(typography::BODY).into()
    };

    Column::new()
        .spacing(spacing::MD)
        .push(text(title).size(typography::HEADING))
        .push(notes)
        .push(
            button(text("Edit plan").size(typography::BODY))
                .on_press(Message::SwitchScreen(Screen::Editor))
                .padding(spacing::SM),
        )
        .into()
}

fn view_editor(app: &App) -> Element<'_, Message> {
    let title_input = text_input("Plan title", &app.plan.title)
        .on_input(Message::TitleEdited)
        .padding(spacing::SM)
        .size(typography::BODY);

    let notes_input = text_input("Session notes", &app.plan.notes)
        .on_input(Message::NotesEdited)
        .padding(spacing::SM)
        .size(typography::BODY);

    let actions = Row::new()
        .spacing(spacing::SM)
        .push(
            button(text("Save").size(typography::BODY))
                .on_press(Message::SavePlan)
                .padding(spacing::SM),
        )
        .push(
            button(text("Back to overview").size(typography::BODY))
                .on_press(Message::SwitchScreen(Screen::Overview))
                .padding(spacing::SM),
        );

    Column::new()
        .spacing(spacing::MD)
        .push(text("Edit plan").size(typography::HEADING))
        .push(title_input)
        .push(notes_input)
        .push(actions)
        .into()
}
