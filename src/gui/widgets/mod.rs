use iced::{
    Alignment::Center,
    Element, Length,
    widget::{row, slider, text},
};

/// Labelled integer slider over `0..=max` showing its current value
pub fn trackbar<'a, Message>(
    label: &'a str,
    value: u32,
    max: u32,
    on_change: impl Fn(u32) -> Message + 'a,
) -> Element<'a, Message>
where
    Message: Clone + 'a,
{
    row![
        text(format!("{label}: {value}")).width(Length::Fixed(180.0)),
        slider(0..=max, value, on_change).width(Length::Fill),
    ]
    .spacing(10)
    .padding(10)
    .align_y(Center)
    .into()
}
