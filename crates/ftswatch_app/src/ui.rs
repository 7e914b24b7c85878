use std::io::{self, Stdout};

use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use ratatui::backend::CrosstermBackend;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::Gauge;
use ratatui::{Frame, Terminal, TerminalOptions, Viewport};

use ftswatch_core::MonitorView;

/// Rows the inline progress view occupies at the bottom of the screen.
const VIEW_HEIGHT: u16 = 4;

/// Render styling, passed in explicitly instead of living in globals.
#[derive(Debug, Clone)]
pub struct Theme {
    pub padding: u16,
    pub max_bar_width: u16,
    pub bar_color: Color,
    pub help_color: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            padding: 2,
            max_bar_width: 80,
            bar_color: Color::LightMagenta,
            help_color: Color::DarkGray,
        }
    }
}

/// Owns the raw-mode terminal and draws the progress view inline, below
/// any earlier shell output.
pub struct TerminalSurface {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    theme: Theme,
}

impl TerminalSurface {
    pub fn new(theme: Theme) -> io::Result<Self> {
        enable_raw_mode()?;
        let backend = CrosstermBackend::new(io::stdout());
        let terminal = Terminal::with_options(
            backend,
            TerminalOptions {
                viewport: Viewport::Inline(VIEW_HEIGHT),
            },
        )?;
        Ok(Self { terminal, theme })
    }

    pub fn draw(&mut self, view: &MonitorView) -> io::Result<()> {
        self.terminal
            .draw(|frame| render(frame, &self.theme, view))?;
        Ok(())
    }

    /// Leaves raw mode and moves the cursor below the drawn view so the
    /// shell prompt lands on a fresh line.
    pub fn restore(&mut self) -> io::Result<()> {
        disable_raw_mode()?;
        println!();
        Ok(())
    }
}

impl Drop for TerminalSurface {
    fn drop(&mut self) {
        // Last-resort restore on the error path; harmless if already done.
        let _ = disable_raw_mode();
    }
}

fn render(frame: &mut Frame, theme: &Theme, view: &MonitorView) {
    let area = frame.area();

    let bar_width = view
        .terminal_width
        .saturating_sub(theme.padding * 2 + 4)
        .min(theme.max_bar_width);
    // The calculator leaves overshoot visible; clamping happens here.
    let ratio = view.fraction.clamp(0.0, 1.0);

    let gauge = Gauge::default()
        .ratio(ratio)
        .gauge_style(Style::default().fg(theme.bar_color))
        .label(format!("{:.0}%", ratio * 100.0));
    let bar_area = Rect {
        x: area.x + theme.padding,
        y: area.y + 1,
        width: bar_width,
        height: 1,
    }
    .intersection(area);
    frame.render_widget(gauge, bar_area);

    let help = Line::styled("Press any key to quit", Style::default().fg(theme.help_color));
    let help_area = Rect {
        x: area.x + theme.padding,
        y: area.y + 3,
        width: area.width.saturating_sub(theme.padding * 2),
        height: 1,
    }
    .intersection(area);
    frame.render_widget(help, help_area);
}
