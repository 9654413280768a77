// Shelly Beach booking board
// Prints the current booking grid for the configured window

use anyhow::Result;
use shelly_booking::grid::BookingGrid;
use shelly_booking::services::booking::ranges_overlap;
use shelly_booking::services::settings::SettingsService;

fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    log::info!("Starting Shelly Beach booking board");

    let settings_service = SettingsService::platform();
    log::info!("Reading settings from {}", settings_service.path().display());
    let settings = settings_service.load();
    let grid = BookingGrid::from_settings(&settings)?;

    print!("{}", render_board(&grid));
    if grid.store().has_unsaved_changes() {
        log::warn!("Some bookings were not saved this session");
    }
    Ok(())
}

const NAME_WIDTH: usize = 16;

fn render_board(grid: &BookingGrid) -> String {
    let mut out = String::new();

    out.push_str(&format!("{:<NAME_WIDTH$}", "Room"));
    for header in grid.day_headers() {
        out.push_str(&format!(" {:>2}", header.date.format("%d")));
    }
    out.push('\n');

    for room in grid.rooms() {
        let name: String = room.name.chars().take(NAME_WIDTH - 1).collect();
        out.push_str(&format!("{:<NAME_WIDTH$}", name));
        for index in 0..grid.days().len() {
            let cell = match grid.cell_bookings(&room.id, index).as_slice() {
                [] => " .",
                [_] => " #",
                _ => " !",
            };
            out.push(' ');
            out.push_str(cell);
        }
        out.push('\n');
    }

    let (Some(&first), Some(&last)) = (grid.days().first(), grid.days().last()) else {
        return out;
    };
    let visible: Vec<_> = grid
        .store()
        .bookings()
        .iter()
        .filter(|b| ranges_overlap(b.start, b.end, first, last))
        .collect();

    if !visible.is_empty() {
        out.push('\n');
        for booking in visible {
            out.push_str(&format!(
                "{:<NAME_WIDTH$}{}\n",
                grid.store().rooms().name_of(&booking.room_id),
                booking.tooltip()
            ));
        }
    }
    out
}
