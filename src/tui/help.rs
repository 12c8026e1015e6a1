use ratatui::{
    layout::{Alignment, Rect},
    style::Color,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

pub fn draw_help(area: Rect, f: &mut Frame, source: &str) {
    let p = Paragraph::new(Line::from(vec![
        Span::styled("q", Style::default().fg(Color::Magenta)),
        Span::raw(" / "),
        Span::styled("Esc", Style::default().fg(Color::Magenta)),
        Span::raw(" / "),
        Span::styled("Ctrl-C", Style::default().fg(Color::Magenta)),
        Span::raw("  Quit    "),
        Span::styled(source.to_string(), Style::default().fg(Color::Cyan)),
    ]))
    .alignment(Alignment::Left);
    f.render_widget(p, area);
}
