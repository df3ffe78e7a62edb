use iced::widget::{column, container, image as iced_image, text};
use iced::{Element, Event, Length, Subscription, Task, Theme, event, keyboard};
use log::info;

use super::widgets::trackbar;
use super::{AppState, Message};
use crate::detection::EdgePreview;
use crate::models::{TRACKBAR_LABEL, Threshold, WINDOW_TITLE};

pub struct EdgeMapApp {
    state: AppState,
}

impl EdgeMapApp {
    pub fn new(preview: EdgePreview) -> (Self, Task<Message>) {
        (
            Self {
                state: AppState::new(preview),
            },
            Task::none(),
        )
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::ThresholdChanged(value) => {
                if self.state.preview.set_threshold(Threshold::new(value)) {
                    self.state.refresh();
                }
                Task::none()
            }
            Message::KeyPressed => {
                info!("Key pressed, exiting");
                iced::exit()
            }
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        let preview = &self.state.preview;
        let (width, height) = preview.dimensions();

        let content = column![
            trackbar(
                TRACKBAR_LABEL,
                preview.threshold().value(),
                Threshold::MAX,
                Message::ThresholdChanged,
            ),
            container(iced_image(self.state.handle.clone()))
                .center_x(Length::Fill)
                .center_y(Length::Fill),
            text(format!(
                "{}x{} | {} edge pixels",
                width,
                height,
                preview.edge_count()
            ))
            .size(14),
        ]
        .spacing(10)
        .padding(10);

        container(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }

    pub fn subscription(&self) -> Subscription<Message> {
        event::listen_with(|event, _status, _window| match event {
            Event::Keyboard(keyboard::Event::KeyPressed { .. }) => Some(Message::KeyPressed),
            _ => None,
        })
    }

    pub fn threshold(&self) -> Threshold {
        self.state.preview.threshold()
    }

    pub fn preview(&self) -> &EdgePreview {
        &self.state.preview
    }
}

/// Open the edge map window and block until a key press or window close
pub fn run(preview: EdgePreview) -> iced::Result {
    iced::application(
        move || EdgeMapApp::new(preview.clone()),
        EdgeMapApp::update,
        EdgeMapApp::view,
    )
    .title(|_state: &EdgeMapApp| WINDOW_TITLE.to_string())
    .theme(|_state: &EdgeMapApp| Theme::Dark)
    .subscription(EdgeMapApp::subscription)
    .run()
}
