use comfy_table::presets::UTF8_FULL;
use comfy_table::{Cell, CellAlignment, ContentArrangement, Table};

use monitor_keeper_core::WindowSystem;
use monitor_keeper_windows::Win32WindowSystem;

/// Lists visible top-level windows with the placement the keeper would
/// save for them.
pub fn execute() {
    let system = Win32WindowSystem;
    let windows = match monitor_keeper_windows::enumerate_windows() {
        Ok(windows) => windows,
        Err(e) => {
            eprintln!("Failed to enumerate windows: {e}");
            std::process::exit(1);
        }
    };

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            Cell::new("HWND"),
            Cell::new("Class"),
            Cell::new("Tracked"),
            Cell::new("Show"),
            Cell::new("X").set_alignment(CellAlignment::Right),
            Cell::new("Y").set_alignment(CellAlignment::Right),
            Cell::new("Width").set_alignment(CellAlignment::Right),
            Cell::new("Height").set_alignment(CellAlignment::Right),
        ]);

    let mut count = 0;
    let mut tracked = 0;
    for window in &windows {
        let info = window.info();
        if !info.visible {
            continue;
        }

        let class = window.class().unwrap_or_default();
        let trackable = info.is_trackable();
        let mut row = vec![
            Cell::new(format!("0x{:X}", window.handle())),
            Cell::new(class),
            Cell::new(if trackable { "yes" } else { "no" }),
        ];
        match window.placement() {
            Ok(p) => row.extend([
                Cell::new(p.show),
                Cell::new(p.rect.x).set_alignment(CellAlignment::Right),
                Cell::new(p.rect.y).set_alignment(CellAlignment::Right),
                Cell::new(p.rect.width).set_alignment(CellAlignment::Right),
                Cell::new(p.rect.height).set_alignment(CellAlignment::Right),
            ]),
            Err(e) => row.push(Cell::new(format!("error: {e}"))),
        }

        table.add_row(row);
        count += 1;
        if trackable {
            tracked += 1;
        }
    }

    println!("{table}");
    println!(
        "\n{count} windows found, {tracked} tracked, {} monitors",
        system.monitor_count()
    );
}
