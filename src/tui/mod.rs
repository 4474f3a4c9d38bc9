//! Ratatui-based terminal UI.
//!
//! The TUI shows the summed curve and a settings panel; adjusting the spacing,
//! width coefficient, Gaussian count, or amplitude scaler recomputes the curve
//! immediately, making it easy to watch how amplitude and flatness change as
//! the spacing/width ratio varies.

use std::io;
use std::time::Duration;

use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph},
    Terminal,
};

use crate::app::pipeline::{run_sum, RunOutput};
use crate::domain::SumConfig;
use crate::error::AppError;

mod plotters_chart;

use plotters_chart::GaussPlottersChart;

/// Plot title, fixed by the tool's purpose.
const CHART_TITLE: &str = "Sum of Uniformly Spaced Gaussians";

/// Start the TUI with the given initial configuration.
pub fn run(config: SumConfig) -> Result<(), AppError> {
    let _guard = TerminalGuard::new()?;

    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)
        .map_err(|e| AppError::new(4, format!("Failed to initialize terminal: {e}")))?;

    let mut app = App::new(config)?;
    app.event_loop(&mut terminal)
}

/// Ensures the terminal is restored (raw mode, alternate screen) on exit.
struct TerminalGuard;

impl TerminalGuard {
    fn new() -> Result<Self, AppError> {
        enable_raw_mode().map_err(|e| AppError::new(4, format!("Failed to enable raw mode: {e}")))?;
        if let Err(e) = execute!(io::stdout(), EnterAlternateScreen) {
            let _ = disable_raw_mode();
            return Err(AppError::new(4, format!("Failed to enter alternate screen: {e}")));
        }
        Ok(Self)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
    }
}

/// Adjustable settings fields, in display order.
const FIELD_COUNT: usize = 4;
const FIELD_SPACING: usize = 0;
const FIELD_C_COEFF: usize = 1;
const FIELD_NUM_GAUSS: usize = 2;
const FIELD_AMP_SCALER: usize = 3;

struct App {
    config: SumConfig,
    initial: SumConfig,
    selected_field: usize,
    status: String,
    run: Option<RunOutput>,
}

impl App {
    fn new(config: SumConfig) -> Result<Self, AppError> {
        let mut app = Self {
            initial: config.clone(),
            config,
            selected_field: 0,
            status: "←/→ adjust the selected parameter.".to_string(),
            run: None,
        };
        // Fail fast on an invalid grid; later adjustments keep it valid.
        app.recompute()?;
        Ok(app)
    }

    fn event_loop<B: ratatui::backend::Backend>(
        &mut self,
        terminal: &mut Terminal<B>,
    ) -> Result<(), AppError> {
        let mut needs_redraw = true;
        loop {
            if needs_redraw {
                terminal
                    .draw(|f| self.draw(f))
                    .map_err(|e| AppError::new(4, format!("Terminal draw error: {e}")))?;
                needs_redraw = false;
            }

            if !event::poll(Duration::from_millis(100))
                .map_err(|e| AppError::new(4, format!("Event poll error: {e}")))?
            {
                continue;
            }

            match event::read().map_err(|e| AppError::new(4, format!("Event read error: {e}")))? {
                Event::Key(key) => {
                    if key.kind != KeyEventKind::Press {
                        continue;
                    }
                    if self.handle_key(key.code)? {
                        break;
                    }
                    needs_redraw = true;
                }
                Event::Resize(_, _) => {
                    needs_redraw = true;
                }
                _ => {}
            }
        }
        Ok(())
    }

    fn handle_key(&mut self, code: KeyCode) -> Result<bool, AppError> {
        match code {
            KeyCode::Char('q') => return Ok(true),
            KeyCode::Up => {
                if self.selected_field > 0 {
                    self.selected_field -= 1;
                }
            }
            KeyCode::Down => {
                if self.selected_field < FIELD_COUNT - 1 {
                    self.selected_field += 1;
                }
            }
            KeyCode::Left => self.adjust_field(-1)?,
            KeyCode::Right => self.adjust_field(1)?,
            KeyCode::Char('r') => {
                self.config = self.initial.clone();
                self.recompute()?;
                self.status = "Reset to launch parameters.".to_string();
            }
            _ => {}
        }

        Ok(false)
    }

    fn adjust_field(&mut self, delta: i32) -> Result<(), AppError> {
        let delta_f = delta as f64;
        match self.selected_field {
            FIELD_SPACING => {
                // Keep the spacing positive so the center sequence stays valid.
                self.config.gauss_spacing = (self.config.gauss_spacing + 0.05 * delta_f).max(0.05);
                self.status = format!("spacing: {:.3}", self.config.gauss_spacing);
            }
            FIELD_C_COEFF => {
                // Zero is reachable on purpose: the curve goes non-finite and
                // the header says so, same as the batch run.
                self.config.c_coeff = (self.config.c_coeff + 0.05 * delta_f).max(0.0);
                self.status = format!("c_coeff: {:.3}", self.config.c_coeff);
            }
            FIELD_NUM_GAUSS => {
                self.config.num_gauss = if delta >= 0 {
                    self.config.num_gauss.saturating_add(1)
                } else {
                    self.config.num_gauss.saturating_sub(1)
                };
                self.status = format!("count: {}", self.config.num_gauss);
            }
            FIELD_AMP_SCALER => {
                self.config.amp_scaler = (self.config.amp_scaler + 0.01 * delta_f).max(0.0);
                self.status = format!("amp_scaler: {:.4}", self.config.amp_scaler);
            }
            _ => {}
        }
        self.recompute()
    }

    fn recompute(&mut self) -> Result<(), AppError> {
        let run = run_sum(&self.config)?;
        self.run = Some(run);
        Ok(())
    }

    fn draw(&mut self, frame: &mut ratatui::Frame<'_>) {
        let size = frame.area();
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(5), Constraint::Min(0), Constraint::Length(3)])
            .split(size);

        self.draw_header(frame, chunks[0]);
        self.draw_body(frame, chunks[1]);
        self.draw_footer(frame, chunks[2]);
    }

    fn draw_header(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let mut lines: Vec<Line> = Vec::new();
        lines.push(Line::from(vec![
            Span::styled("gauss", Style::default().fg(Color::Cyan)),
            Span::raw(" — sum of uniformly spaced Gaussians"),
        ]));

        lines.push(Line::from(Span::styled(
            format!(
                "count: {} | start: {:.2} | spacing: {:.3} | width: {:.4} (c_coeff {:.3}) | amp_scaler: {:.4}",
                self.config.num_gauss,
                self.config.gauss_start,
                self.config.gauss_spacing,
                self.config.width(),
                self.config.c_coeff,
                self.config.amp_scaler,
            ),
            Style::default().fg(Color::Gray),
        )));

        if let Some(run) = &self.run {
            let ripple = run
                .summary
                .plateau
                .as_ref()
                .map(|p| format!("{:.4}", p.ripple()))
                .unwrap_or_else(|| "n/a".to_string());
            let non_finite = run.curve.amplitude.iter().any(|v| !v.is_finite());
            lines.push(Line::from(Span::styled(
                format!(
                    "peak={:.4} at x={:.3} | plateau ripple={ripple}{}",
                    run.summary.peak,
                    run.summary.peak_x,
                    if non_finite { " | non-finite samples!" } else { "" },
                ),
                Style::default().fg(if non_finite { Color::Red } else { Color::Gray }),
            )));
        }

        let p = Paragraph::new(Text::from(lines)).block(Block::default().borders(Borders::ALL));
        frame.render_widget(p, area);
    }

    fn draw_body(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(7)])
            .split(area);

        self.draw_chart(frame, chunks[0]);
        self.draw_settings(frame, chunks[1]);
    }

    fn draw_chart(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let block = Block::default().title(CHART_TITLE).borders(Borders::ALL);
        let inner = block.inner(area);
        frame.render_widget(block, area);
        frame.render_widget(Clear, inner);

        let Some(run) = &self.run else {
            let msg = Paragraph::new("Computing...")
                .style(Style::default().fg(Color::Yellow))
                .block(Block::default());
            frame.render_widget(msg, inner);
            return;
        };

        let (curve, x_bounds, y_bounds) = chart_series(run);

        let (chart_rect, insets) = chart_layout(inner);
        let widget = GaussPlottersChart {
            curve: &curve,
            x_bounds,
            y_bounds,
            x_label: "x",
            y_label: "Amplitude",
            show_grid: true,
            fmt_x: fmt_axis,
            fmt_y: fmt_axis,
        };

        frame.render_widget(widget, chart_rect);
        if let Some(insets) = insets {
            draw_axis_ticks(frame, inner, chart_rect, insets, x_bounds, y_bounds);
        }
    }

    fn draw_settings(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let items = vec![
            ListItem::new(format!("Spacing: {:.3}", self.config.gauss_spacing)),
            ListItem::new(format!("Width coeff: {:.3}", self.config.c_coeff)),
            ListItem::new(format!("Count: {}", self.config.num_gauss)),
            ListItem::new(format!("Amp scaler: {:.4}", self.config.amp_scaler)),
        ];

        let list = List::new(items)
            .block(Block::default().title("Settings").borders(Borders::ALL))
            .highlight_style(Style::default().fg(Color::Black).bg(Color::White))
            .highlight_symbol("» ");

        let mut state = ratatui::widgets::ListState::default();
        state.select(Some(self.selected_field));
        frame.render_stateful_widget(list, area, &mut state);
    }

    fn draw_footer(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let help = "↑/↓ select  ←/→ adjust  r reset  q quit";
        let line = Line::from(vec![
            Span::styled(help, Style::default().fg(Color::Gray)),
            Span::raw(" | "),
            Span::styled(&self.status, Style::default().fg(Color::Yellow)),
        ]);
        let p = Paragraph::new(line).block(Block::default().borders(Borders::ALL));
        frame.render_widget(p, area);
    }
}

/// Build the chart series and bounds for Plotters.
///
/// Non-finite amplitudes are excluded from the bounds; if nothing finite
/// remains the bounds fall back to `[0, 1]`.
fn chart_series(run: &RunOutput) -> (Vec<(f64, f64)>, [f64; 2], [f64; 2]) {
    let curve: Vec<(f64, f64)> = run.curve.points().collect();

    let x_bounds = [run.curve.x[0], *run.curve.x.last().unwrap_or(&1.0)];

    let (mut y_min, mut y_max) = (f64::INFINITY, f64::NEG_INFINITY);
    for &(_, y) in &curve {
        if y.is_finite() {
            y_min = y_min.min(y);
            y_max = y_max.max(y);
        }
    }
    if !y_min.is_finite() || !y_max.is_finite() || y_max <= y_min {
        y_min = 0.0;
        y_max = 1.0;
    }

    let pad = ((y_max - y_min).abs() * 0.05).max(1e-12);
    let y_bounds = [y_min - pad, y_max + pad];

    (curve, x_bounds, y_bounds)
}

fn fmt_axis(v: f64) -> String {
    format!("{v:.2}")
}

#[derive(Debug, Clone, Copy)]
struct AxisInsets {
    left: u16,
    right: u16,
    top: u16,
    bottom: u16,
}

fn chart_layout(inner: Rect) -> (Rect, Option<AxisInsets>) {
    let insets = AxisInsets {
        left: 8,
        right: 2,
        top: 1,
        bottom: 2,
    };

    if inner.width <= insets.left + insets.right + 10
        || inner.height <= insets.top + insets.bottom + 5
    {
        return (inner, None);
    }

    let rect = Rect {
        x: inner.x + insets.left,
        y: inner.y + insets.top,
        width: inner.width - insets.left - insets.right,
        height: inner.height - insets.top - insets.bottom,
    };

    (rect, Some(insets))
}

/// Tick labels drawn in the reserved margins around the chart.
///
/// The canvas backend renders Plotters' own tick text poorly at terminal
/// resolution, so the labels are drawn as Ratatui paragraphs instead.
fn draw_axis_ticks(
    frame: &mut ratatui::Frame<'_>,
    inner: Rect,
    chart: Rect,
    insets: AxisInsets,
    x_bounds: [f64; 2],
    y_bounds: [f64; 2],
) {
    let ticks = 5usize;
    let style = Style::default().fg(Color::Gray);

    for i in 0..ticks {
        let u = i as f64 / (ticks as f64 - 1.0);
        let x_val = x_bounds[0] + u * (x_bounds[1] - x_bounds[0]);
        let x = chart.x + ((chart.width - 1) as f64 * u).round() as u16;
        let label = format!("{x_val:.1}");
        let label_len = label.len() as u16;
        let start = x.saturating_sub((label.len() / 2) as u16);
        let y = chart.y + chart.height;
        if y >= inner.y + inner.height - 1 {
            continue;
        }
        frame.render_widget(
            Paragraph::new(label).style(style),
            Rect {
                x: start,
                y,
                width: label_len,
                height: 1,
            },
        );
    }

    for i in 0..ticks {
        let u = i as f64 / (ticks as f64 - 1.0);
        let y_val = y_bounds[0] + u * (y_bounds[1] - y_bounds[0]);
        let y = chart.y + (chart.height - 1) - ((chart.height - 1) as f64 * u).round() as u16;
        let label = format!("{y_val:.2}");
        let label_len = label.len() as u16;
        let x = inner.x + insets.left.saturating_sub(1);
        let start = x.saturating_sub(label.len() as u16);
        if start < inner.x {
            continue;
        }
        frame.render_widget(
            Paragraph::new(label).style(style),
            Rect {
                x: start,
                y,
                width: label_len,
                height: 1,
            },
        );
    }

    let x_label = Paragraph::new("x")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::Gray));
    let x_rect = Rect {
        x: chart.x,
        y: chart.y + chart.height + 1,
        width: chart.width,
        height: 1,
    };
    if x_rect.y < inner.y + inner.height {
        frame.render_widget(x_label, x_rect);
    }

    let y_label = Paragraph::new("Amplitude")
        .style(Style::default().fg(Color::Gray).add_modifier(Modifier::BOLD));
    let y_rect = Rect {
        x: inner.x,
        y: inner.y,
        width: insets.left.saturating_sub(1).max(9),
        height: 1,
    };
    frame.render_widget(y_label, y_rect);
}
