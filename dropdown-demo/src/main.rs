mod terminal;

use std::cell::RefCell;
use std::env;
use std::fs::File;
use std::io;
use std::rc::Rc;
use std::time::Duration;

use dropdown::{
    Appearance, Buffer, Color, DropdownButton, Edges, Event, Key, Rect, Surface, TextStyle, View,
};
use simplelog::{Config, LevelFilter, WriteLogger};

use terminal::Terminal;

const COUNTRIES: &[&str] = &[
    "Argentina",
    "Australia",
    "Brazil",
    "Canada",
    "Denmark",
    "Finland",
    "France",
    "Germany",
    "Iceland",
    "Japan",
    "Kenya",
    "Mexico",
    "New Zealand",
    "Norway",
    "Portugal",
    "South Korea",
    "Spain",
    "Sweden",
    "United Kingdom",
    "Uruguay",
];

fn main() -> io::Result<()> {
    // The terminal is in raw mode, so logs go to a file
    let log_file = File::create("dropdown-demo.log")?;
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)
        .expect("Failed to initialize logger");

    // Optional JSON appearance file as the first argument
    let appearance = match env::args().nth(1) {
        Some(path) => Appearance::load(path).map_err(io::Error::other)?,
        None => Appearance::default(),
    };

    let mut term = Terminal::new()?;
    let (width, height) = term.size()?;

    // Bottom line is a status bar the list must not cover
    let host = Rc::new(RefCell::new(
        Surface::new(width, height).with_safe_area(Edges::bottom(1)),
    ));
    {
        let mut surface = host.borrow_mut();
        surface.add_view(View::new("toolbar", toolbar_frame(width)));
        surface.add_view(View::new("country", Rect::new(12, 1, 24, 1)).parent("toolbar"));
    }

    let chosen: Rc<RefCell<Option<String>>> = Rc::new(RefCell::new(None));

    let mut button = DropdownButton::new("country")
        .with_title("Choose a country")
        .with_appearance(appearance);
    button.configure_with_indicator(&host, '▼');
    button.set_options(COUNTRIES.iter().copied());
    {
        let chosen = Rc::clone(&chosen);
        button.on_select(move |index, value| {
            log::info!("picked option {index}: {value}");
            *chosen.borrow_mut() = Some(value.to_string());
        });
    }

    loop {
        button.refresh();

        let bounds = host.borrow().bounds();
        let mut buf = Buffer::new(bounds.width, bounds.height);
        paint_background(&mut buf, chosen.borrow().as_deref());
        button.paint(&mut buf);
        term.draw(&buf)?;

        for raw in term.poll(Duration::from_millis(250))? {
            let Some(event) = Event::from_crossterm(&raw) else {
                continue;
            };
            match event {
                Event::Key(Key::Char('q')) => return Ok(()),
                Event::Key(Key::Escape) if !button.is_open() => return Ok(()),
                Event::Resize { width, height } => {
                    {
                        let mut surface = host.borrow_mut();
                        surface.resize(width, height);
                        surface.set_frame("toolbar", toolbar_frame(width));
                    }
                    if button.is_open() {
                        button.open();
                    }
                }
                _ => {
                    button.handle_event(&event);
                }
            }
        }
    }
}

fn toolbar_frame(width: u16) -> Rect {
    Rect::new(0, 0, width, 3)
}

fn paint_background(buf: &mut Buffer, chosen: Option<&str>) {
    let area = buf.area();
    let text = Color::oklch(0.9, 0.02, 250.0).to_rgb();
    let muted = Color::oklch(0.65, 0.03, 250.0).to_rgb();

    buf.fill(area, Color::oklch(0.22, 0.03, 250.0).to_rgb());
    buf.fill(toolbar_frame(area.width), Color::oklch(0.3, 0.05, 250.0).to_rgb());
    buf.fill(Rect::new(12, 1, 24, 1), Color::oklch(0.4, 0.06, 250.0).to_rgb());
    buf.put_str(2, 1, area.width, "Country:", text, TextStyle::new().bold());

    let lines = [
        "Click the field to open the list.",
        "Click outside the list, or press Esc, to close it.",
        "Scroll the list with the mouse wheel when it doesn't fit.",
    ];
    for (i, line) in lines.iter().enumerate() {
        buf.put_str(2, 5 + i as u16, area.width, line, muted, TextStyle::new());
    }

    let status_y = area.height.saturating_sub(1);
    let status = match chosen {
        Some(value) => format!(" Selected: {value}   q: quit"),
        None => " Nothing selected   q: quit".to_string(),
    };
    buf.fill(
        Rect::new(0, status_y, area.width, 1),
        Color::oklch(0.35, 0.08, 140.0).to_rgb(),
    );
    buf.put_str(0, status_y, area.width, &status, text, TextStyle::new());
}
