use crate::core::state::App;
use crate::tui::cells::UnicodeCells;
use crate::tui::component::Component;
use crate::tui::frame::compose;
use crate::tui::theme::Theme;

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::Text;
use ratatui::widgets::Paragraph;

/// The whole dashboard as one component. Props are the current snapshot
/// and the resolved theme.
pub struct Dashboard<'a> {
    pub app: &'a App,
    pub theme: &'a Theme,
}

impl Component for Dashboard<'_> {
    /// The composed frame is already cell-exact, so it is written as-is.
    /// An unknown viewport composes to nothing and leaves the area blank.
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let lines = compose(self.app, self.theme, &UnicodeCells);
        frame.render_widget(Paragraph::new(Text::from(lines)), area);
    }
}

pub fn draw_ui(frame: &mut Frame, app: &App, theme: &Theme) {
    let area = frame.area();
    Dashboard { app, theme }.render(frame, area);
}
