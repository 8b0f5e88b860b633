use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};
use unicode_width::UnicodeWidthStr;

use crate::session::{Phase, Session};

const HORIZONTAL_MARGIN: u16 = 5;
const VERTICAL_MARGIN: u16 = 2;

impl Widget for &Session {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let bold_style = Style::default().add_modifier(Modifier::BOLD);

        let green_bold_style = Style::default().patch(bold_style).fg(Color::Green);
        let red_bold_style = Style::default().patch(bold_style).fg(Color::Red);

        let dim_bold_style = Style::default()
            .patch(bold_style)
            .add_modifier(Modifier::DIM);

        let underlined_dim_bold_style = Style::default()
            .patch(dim_bold_style)
            .add_modifier(Modifier::UNDERLINED);

        let italic_style = Style::default().add_modifier(Modifier::ITALIC);

        match self.phase() {
            Phase::Idle | Phase::Typing => {
                let max_chars_per_line = area.width.saturating_sub(HORIZONTAL_MARGIN * 2).max(1);
                let mut prompt_occupied_lines =
                    ((self.target.width() as f64 / max_chars_per_line as f64).ceil() + 1.0) as u16;

                if self.target.width() <= max_chars_per_line as usize {
                    prompt_occupied_lines = 1;
                }

                let chunks = Layout::default()
                    .direction(Direction::Vertical)
                    .horizontal_margin(HORIZONTAL_MARGIN)
                    .constraints(
                        [
                            Constraint::Length(
                                ((area.height as f64 - prompt_occupied_lines as f64) / 2.0) as u16,
                            ),
                            Constraint::Length(1),
                            Constraint::Length(prompt_occupied_lines),
                            Constraint::Length(
                                ((area.height as f64 - prompt_occupied_lines as f64) / 2.0) as u16,
                            ),
                        ]
                        .as_ref(),
                    )
                    .split(area);

                let progress = Paragraph::new(Span::styled(
                    format!(
                        "{}/{} · {} words",
                        self.words_typed,
                        self.word_count(),
                        self.limit
                    ),
                    Style::default().fg(Color::Yellow),
                ))
                .alignment(Alignment::Center);

                progress.render(chunks[1], buf);

                let typed: Vec<char> = self.input.chars().collect();
                let mut spans = typed
                    .iter()
                    .enumerate()
                    .map(|(idx, &c)| match self.correctness.get(idx).copied().flatten() {
                        Some(false) => Span::styled(
                            match c {
                                ' ' => "·".to_owned(),
                                c => c.to_string(),
                            },
                            red_bold_style,
                        ),
                        _ => Span::styled(
                            self.expected_char(idx).unwrap_or(c).to_string(),
                            green_bold_style,
                        ),
                    })
                    .collect::<Vec<Span>>();

                if let Some(c) = self.expected_char(self.cursor_pos) {
                    spans.push(Span::styled(c.to_string(), underlined_dim_bold_style));
                }

                let tail: String = self.target.chars().skip(self.cursor_pos + 1).collect();
                spans.push(Span::styled(tail, dim_bold_style));

                let widget = Paragraph::new(Line::from(spans))
                    .alignment(if prompt_occupied_lines == 1 {
                        // a single centered line gives a nice zen feeling
                        Alignment::Center
                    } else {
                        Alignment::Left
                    })
                    .wrap(Wrap { trim: true });

                widget.render(chunks[2], buf);
            }
            Phase::Finished => {
                let chunks = Layout::default()
                    .direction(Direction::Vertical)
                    .horizontal_margin(HORIZONTAL_MARGIN)
                    .vertical_margin(VERTICAL_MARGIN)
                    .constraints(
                        [
                            Constraint::Min(1),
                            Constraint::Length(1),
                            Constraint::Length(1),
                            Constraint::Length(1),
                        ]
                        .as_ref(),
                    )
                    .split(area);

                let stats = self.stats.unwrap_or_default();

                let results = Paragraph::new(Span::styled(
                    format!("{:.0} wpm   {:.0}% acc", stats.wpm, stats.acc),
                    Style::default().patch(bold_style).fg(Color::Magenta),
                ))
                .alignment(Alignment::Center);

                results.render(chunks[1], buf);

                let legend = Paragraph::new(Span::styled(
                    "(enter) next test · (ctrl-r) retry · (↑/↓) words · (esc) quit",
                    italic_style,
                ))
                .alignment(Alignment::Center);

                legend.render(chunks[3], buf);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::corpus::Corpus;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn test_session(target: &str) -> Session {
        let corpus = Corpus {
            name: "test".into(),
            size: 2,
            words: vec!["ab".into(), "cd".into()],
        };
        let mut session = Session::new(corpus, 10, StdRng::seed_from_u64(9));
        session.words = target.split(' ').map(str::to_string).collect();
        session.target = target.to_string();
        session.correctness = vec![None; target.chars().count()];
        session.reset_play();
        session
    }

    fn rendered_text(session: &Session, area: Rect) -> String {
        let mut buffer = Buffer::empty(area);
        session.render(area, &mut buffer);
        buffer.content().iter().map(|c| c.symbol()).collect()
    }

    #[test]
    fn test_render_idle_shows_prompt() {
        let session = test_session("hello world");
        let rendered = rendered_text(&session, Rect::new(0, 0, 80, 24));

        assert!(rendered.contains("hello"));
        assert!(rendered.contains("world"));
    }

    #[test]
    fn test_render_shows_progress_counter() {
        let mut session = test_session("ab cd");
        session.write('a');
        session.write('b');
        session.write(' ');

        let rendered = rendered_text(&session, Rect::new(0, 0, 80, 24));
        assert!(rendered.contains("1/2"));
    }

    #[test]
    fn test_render_mistyped_space_shows_dot() {
        let mut session = test_session("ab cd");
        session.write('a');
        session.write(' ');

        let rendered = rendered_text(&session, Rect::new(0, 0, 80, 24));
        assert!(rendered.contains('·'));
    }

    #[test]
    fn test_render_finished_shows_stats_and_legend() {
        let mut session = test_session("ab");
        session.write('a');
        session.write('b');
        assert_eq!(session.phase(), Phase::Finished);

        let rendered = rendered_text(&session, Rect::new(0, 0, 80, 24));
        assert!(rendered.contains("wpm"));
        assert!(rendered.contains("acc"));
        assert!(rendered.contains("next test"));
    }

    #[test]
    fn test_render_extreme_sizes() {
        let session = test_session("some longer target text to wrap over lines");

        for area in [
            Rect::new(0, 0, 10, 5),
            Rect::new(0, 0, 200, 5),
            Rect::new(0, 0, 20, 50),
            Rect::new(0, 0, 1000, 1000),
        ] {
            let mut buffer = Buffer::empty(area);
            (&session).render(area, &mut buffer);
            assert!(*buffer.area() == area);
        }
    }

    #[test]
    fn test_render_multiple_times_while_typing() {
        let mut session = test_session("hello");
        let area = Rect::new(0, 0, 80, 24);

        for c in "hel".chars() {
            session.write(c);
            let rendered = rendered_text(&session, area);
            assert!(!rendered.trim().is_empty());
        }
    }

    #[test]
    fn test_ui_constants_consistency() {
        const _: () = assert!(HORIZONTAL_MARGIN * 2 < 80);
        const _: () = assert!(VERTICAL_MARGIN * 2 < 24);
    }
}
