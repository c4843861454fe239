// Interactive cyclic table player.
//
// Usage: c_table [rows] [columns] [corner] [direction] [rotation]
//
// Keys:
//   Space        play / pause
//   Left / Right retreat / advance the reveal cursor
//   Home / End   jump to start / end
//   + / -        faster / slower
//   c / d / o    cycle start corner / direction / rotation (regenerates)
//   Up / Down    more / fewer rows        PgUp / PgDn  more / fewer columns
//   r            reset to defaults
//   q / Esc      quit

use std::env;
use std::error::Error;
use std::io::{self, Write};
use std::process;
use std::time::Duration;

use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute, queue,
    style::{Color, Print, ResetColor, SetForegroundColor},
    terminal::{self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen},
};

use c_table::config::{GridConfig, Rotation, StartCorner, TraversalConfig};
use c_table::display::{
    format_cell_details, render_minimap_lines, render_table_lines, TableDisplayConfig,
};
use c_table::errors::{validate_dimensions, TableError, TableResult};
use c_table::grid::{spiral, Grid};
use c_table::player::RevealPlayer;
use c_table::{MAX_GRID_COLS, MAX_GRID_ROWS};

const HELP_LINE: &str =
    "space play/pause  \u{2190}\u{2192} step  home/end jump  +/- speed  c/d/o presets  \u{2191}\u{2193} rows  pgup/pgdn cols  r reset  q quit";

/// Corner presets in the order the player cycles them
const CORNER_PRESETS: [StartCorner; 5] = [
    StartCorner::BottomRight,
    StartCorner::TopLeft,
    StartCorner::TopRight,
    StartCorner::BottomLeft,
    StartCorner::CenterLeft,
];

struct PlayerApp {
    config: GridConfig,
    traversal: TraversalConfig,
    table: Grid,
    player: RevealPlayer,
}

impl PlayerApp {
    fn new(config: GridConfig, traversal: TraversalConfig) -> Self {
        let mut app = Self {
            config,
            traversal,
            table: Vec::new(),
            player: RevealPlayer::new(0),
        };
        app.regenerate();
        app
    }

    /// Re-run the traversal and restart playback. Speed survives; the
    /// cursor does not.
    fn regenerate(&mut self) {
        // Center start is not offered on 2-wide tables
        if (self.config.rows == 2 || self.config.cols == 2) && self.traversal.corner.is_center() {
            self.traversal.corner = StartCorner::BottomRight;
        }
        // Keep the initial direction pointing onto the board
        let valid = self
            .traversal
            .corner
            .valid_directions(self.config.rows, self.config.cols);
        if !valid.is_empty() && !valid.contains(&self.traversal.direction) {
            self.traversal.direction = valid[0];
        }

        self.table = spiral::generate(&self.config, &self.traversal);
        let speed = self.player.speed();
        self.player = RevealPlayer::new(self.config.cell_count() as u32);
        self.player.set_speed(speed);
    }

    fn cycle_corner(&mut self) {
        let allow_center = self.config.rows != 2 && self.config.cols != 2;
        let current = CORNER_PRESETS
            .iter()
            .position(|corner| *corner == self.traversal.corner)
            .unwrap_or(0);
        let mut next = (current + 1) % CORNER_PRESETS.len();
        if CORNER_PRESETS[next].is_center() && !allow_center {
            next = (next + 1) % CORNER_PRESETS.len();
        }
        self.traversal.corner = CORNER_PRESETS[next];
        self.regenerate();
    }

    fn cycle_direction(&mut self) {
        let valid = self
            .traversal
            .corner
            .valid_directions(self.config.rows, self.config.cols);
        if valid.is_empty() {
            return;
        }
        let next = match valid.iter().position(|dir| *dir == self.traversal.direction) {
            Some(idx) => (idx + 1) % valid.len(),
            None => 0,
        };
        self.traversal.direction = valid[next];
        self.regenerate();
    }

    fn toggle_rotation(&mut self) {
        self.traversal.rotation = match self.traversal.rotation {
            Rotation::Clockwise => Rotation::CounterClockwise,
            Rotation::CounterClockwise => Rotation::Clockwise,
        };
        self.regenerate();
    }

    fn resize(&mut self, row_delta: isize, col_delta: isize) {
        let rows = (self.config.rows as isize + row_delta).clamp(1, MAX_GRID_ROWS as isize);
        let cols = (self.config.cols as isize + col_delta).clamp(1, MAX_GRID_COLS as isize);
        let resized = GridConfig::new(rows as usize, cols as usize);
        if resized != self.config {
            self.config = resized;
            self.regenerate();
        }
    }

    fn adjust_speed(&mut self, delta_ms: i64) {
        let current = self.player.speed().as_millis() as i64;
        let next = (current + delta_ms).max(0) as u64;
        self.player.set_speed(Duration::from_millis(next));
    }

    fn status_line(&self) -> String {
        format!(
            "C-TABLE  {}x{}  corner:{} dir:{} rot:{}  {}/{}  {}ms  {}",
            self.config.rows,
            self.config.cols,
            self.traversal.corner.code(),
            self.traversal.direction.code(),
            self.traversal.rotation.code(),
            self.player.cursor(),
            self.player.total(),
            self.player.speed().as_millis(),
            if self.player.is_playing() {
                "PLAYING"
            } else {
                "PAUSED"
            }
        )
    }

    /// Position of the most recently revealed cell, if any
    fn cursor_cell(&self) -> Option<(usize, usize)> {
        let number = self.player.cursor();
        if number == 0 {
            return None;
        }
        for (r, row) in self.table.iter().enumerate() {
            for (c, cell) in row.iter().enumerate() {
                if cell.number == number {
                    return Some((r, c));
                }
            }
        }
        None
    }
}

fn parse_dimensions(rows: &str, cols: &str) -> TableResult<GridConfig> {
    let rows: i64 = rows
        .parse()
        .map_err(|_| TableError::InvalidNumber(rows.to_string()))?;
    let cols: i64 = cols
        .parse()
        .map_err(|_| TableError::InvalidNumber(cols.to_string()))?;
    validate_dimensions(rows, cols)
}

fn draw(stdout: &mut impl Write, app: &PlayerApp) -> io::Result<()> {
    queue!(stdout, Clear(ClearType::All))?;
    let mut y: u16 = 0;

    queue!(
        stdout,
        cursor::MoveTo(0, y),
        SetForegroundColor(Color::Cyan),
        Print(app.status_line()),
        ResetColor
    )?;
    y += 1;
    queue!(
        stdout,
        cursor::MoveTo(0, y),
        SetForegroundColor(Color::DarkGrey),
        Print(HELP_LINE),
        ResetColor
    )?;
    y += 2;

    let display = TableDisplayConfig {
        show_headers: false,
        ..TableDisplayConfig::default()
    };
    for line in render_table_lines(&app.table, app.player.cursor(), &display) {
        queue!(stdout, cursor::MoveTo(0, y), Print(line))?;
        y += 1;
    }
    y += 1;

    queue!(
        stdout,
        cursor::MoveTo(0, y),
        SetForegroundColor(Color::DarkGrey),
        Print("mini-map"),
        ResetColor
    )?;
    y += 1;
    for line in render_minimap_lines(&app.table, app.player.cursor()) {
        queue!(stdout, cursor::MoveTo(2, y), Print(line))?;
        y += 1;
    }
    y += 1;

    if let Some((row, col)) = app.cursor_cell() {
        for line in format_cell_details(&app.table, row, col).lines() {
            queue!(
                stdout,
                cursor::MoveTo(0, y),
                SetForegroundColor(Color::Green),
                Print(line),
                ResetColor
            )?;
            y += 1;
        }
    }

    stdout.flush()
}

fn run(app: &mut PlayerApp) -> Result<(), Box<dyn Error>> {
    let mut stdout = io::stdout();
    terminal::enable_raw_mode()?;
    execute!(stdout, EnterAlternateScreen, cursor::Hide)?;

    let result = event_loop(&mut stdout, app);

    execute!(stdout, cursor::Show, LeaveAlternateScreen)?;
    terminal::disable_raw_mode()?;
    result
}

fn event_loop(stdout: &mut impl Write, app: &mut PlayerApp) -> Result<(), Box<dyn Error>> {
    let mut dirty = true;
    loop {
        if dirty {
            draw(stdout, app)?;
            dirty = false;
        }

        if event::poll(Duration::from_millis(25))? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                dirty = true;
                match key.code {
                    KeyCode::Char('q') | KeyCode::Esc => break,
                    KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => break,
                    KeyCode::Char(' ') => app.player.toggle(),
                    KeyCode::Right => app.player.step_forward(),
                    KeyCode::Left => app.player.step_back(),
                    KeyCode::Home => app.player.jump_to(0),
                    KeyCode::End => app.player.jump_to(app.player.total() as i64),
                    KeyCode::Char('+') => app.adjust_speed(-50),
                    KeyCode::Char('-') => app.adjust_speed(50),
                    KeyCode::Char('c') => app.cycle_corner(),
                    KeyCode::Char('d') => app.cycle_direction(),
                    KeyCode::Char('o') => app.toggle_rotation(),
                    KeyCode::Up => app.resize(1, 0),
                    KeyCode::Down => app.resize(-1, 0),
                    KeyCode::PageUp => app.resize(0, 1),
                    KeyCode::PageDown => app.resize(0, -1),
                    KeyCode::Char('r') => {
                        app.config = GridConfig::default();
                        app.traversal = TraversalConfig::default();
                        app.regenerate();
                    }
                    _ => dirty = false,
                }
            }
        }

        if app.player.tick() {
            dirty = true;
        }
    }
    Ok(())
}

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let rows = args.get(1).map(String::as_str).unwrap_or("5");
    let cols = args.get(2).map(String::as_str).unwrap_or("5");

    let config = match parse_dimensions(rows, cols) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{}", err);
            process::exit(1);
        }
    };
    let traversal = TraversalConfig::from_params(
        args.get(3).map(String::as_str),
        args.get(4).map(String::as_str),
        args.get(5).map(String::as_str),
    );

    let mut app = PlayerApp::new(config, traversal);
    if let Err(err) = run(&mut app) {
        eprintln!("player error: {}", err);
        process::exit(1);
    }
}
