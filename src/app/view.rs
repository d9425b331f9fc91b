// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! This module handles the `view()` function that renders the current screen
//! based on application state.

use super::{App, Message, Screen};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, scrollable, Column, Container, Row, Text};
use iced::{Alignment, Element, Length};

/// Renders the current application view based on the active screen.
pub fn view(app: &App) -> Element<'_, Message> {
    let screen: Element<'_, Message> = match app.screen {
        Screen::Featured => view_featured(app),
        Screen::Gallery => view_gallery(app),
    };

    Container::new(screen)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn view_featured(app: &App) -> Element<'_, Message> {
    let title = Text::new(app.i18n.tr("featured-title")).size(typography::TITLE_LG);
    let hint = Text::new(app.i18n.tr("featured-hint")).size(typography::BODY);

    let carousel = app.featured.view(&app.i18n).map(Message::Featured);

    let add = button(Text::new(app.i18n.tr("add-page-button")).size(typography::BODY))
        .on_press(Message::AddPage)
        .padding(spacing::XS);
    let remove = button(Text::new(app.i18n.tr("remove-page-button")).size(typography::BODY))
        .on_press_maybe((app.featured.page_count() > 0).then_some(Message::RemovePage))
        .padding(spacing::XS);
    let open_gallery = button(Text::new(app.i18n.tr("open-gallery-button")).size(typography::BODY))
        .on_press(Message::SwitchScreen(Screen::Gallery))
        .padding(spacing::XS);

    let controls = Row::new()
        .spacing(spacing::SM)
        .push(add)
        .push(remove)
        .push(open_gallery);

    let mut content = Column::new()
        .spacing(spacing::SM)
        .padding(spacing::MD)
        .align_x(Alignment::Center)
        .max_width(sizing::CAROUSEL_CARD_WIDTH)
        .push(title)
        .push(hint)
        .push(carousel);

    if app.featured.page_count() > 0 {
        let counter = Text::new(format!(
            "{} / {}",
            app.featured.current_page() + 1,
            app.featured.page_count()
        ))
        .size(typography::CAPTION);
        content = content.push(counter);
    }

    Container::new(content.push(controls))
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .into()
}

fn view_gallery(app: &App) -> Element<'_, Message> {
    let back = button(
        Text::new(format!("← {}", app.i18n.tr("back-to-featured-button"))).size(typography::BODY),
    )
    .on_press(Message::SwitchScreen(Screen::Featured))
    .padding(spacing::XS);

    let title = Text::new(app.i18n.tr("gallery-title")).size(typography::TITLE_LG);

    let mut list = Column::new()
        .spacing(spacing::MD)
        .align_x(Alignment::Center)
        .width(Length::Fill)
        .padding(spacing::SM);

    for (index, item) in app.gallery.iter().enumerate() {
        let card = Container::new(
            item.view(&app.i18n)
                .map(move |message| Message::Gallery { index, message }),
        )
        .style(styles::card)
        .padding(spacing::MD)
        .width(Length::Fixed(sizing::CAROUSEL_CARD_WIDTH));

        list = list.push(card);
    }

    Column::new()
        .spacing(spacing::SM)
        .padding(spacing::MD)
        .push(back)
        .push(title)
        .push(scrollable(list).height(Length::Fill))
        .into()
}
